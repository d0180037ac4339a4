//! Result export: tab-separated rows and JSON
//!
//! The TSV layout mirrors the result table column for column and echoes
//! the global parameters on every row, so a single file is self-contained.
//! All fixed-decimal formatting lives here, not in the core.

use std::fmt::Write;

use super::types::{AnalysisResult, CalcParams};

const TSV_HEADER: &[&str] = &[
    "Sequence",
    "Length",
    "Abs.",
    "Tm_Nearest Neighbor",
    "Tm_Wallace",
    "ssDNA_ε(260 nm) /cm^−1･M^−1",
    "ssDNA_Conc. /μM",
    "ssDNA_Conc. /ng･μL^−1",
    "ssDNA_Mw",
    "dsDNA_ε(260 nm) /cm^−1･M^−1",
    "dsDNA_Conc. /μM",
    "dsDNA_Conc. /ng･μL^−1",
    "dsDNA_Mw",
    "GC /%",
    "A",
    "T",
    "C",
    "G",
    "[Na^+] /mM",
    "[Mg^2+] /mM",
    "[dNTPs] /mM",
    "[Primer] /nM",
    "Used Values for Tm",
];

/// Render the result set as tab-separated values, one row per input
/// sequence, in input order.
pub fn to_tsv(results: &[AnalysisResult], params: &CalcParams) -> String {
    let mut out = String::new();
    out.push_str(&TSV_HEADER.join("\t"));
    out.push('\n');

    for r in results {
        let tm_nn = r
            .tm_nn
            .map(|tm| format!("{:.2}", tm))
            .unwrap_or_default();
        let _ = writeln!(
            out,
            "{}\t{}\t{}\t{}\t{}\t{:.0}\t{:.2}\t{:.2}\t{:.2}\t{:.0}\t{:.2}\t{:.2}\t{:.2}\t{:.2}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            r.sequence,
            r.length,
            r.absorbance,
            tm_nn,
            r.tm_wallace,
            r.ss_extinction,
            r.ss_conc_um,
            r.ss_conc_ng_ul,
            r.ss_mw,
            r.ds_extinction,
            r.ds_conc_um,
            r.ds_conc_ng_ul,
            r.ds_mw,
            r.gc_percent,
            r.bases.a,
            r.bases.t,
            r.bases.c,
            r.bases.g,
            params.na,
            params.mg,
            params.dntp,
            params.primer_nm,
            params.model,
        );
    }

    out
}

/// Serialize the whole result set as pretty-printed JSON.
pub fn to_json(results: &[AnalysisResult]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(results)
}

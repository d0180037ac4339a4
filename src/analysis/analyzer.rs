//! Per-sequence analysis pipeline and batch entry points
//!
//! Every function here is pure: the same inputs always produce the same
//! result set, and rows never depend on each other, which is what makes
//! the batch trivially parallel.

use rayon::prelude::*;

use super::counts::{
    count_bases, full_dinucleotides, interior_base_counts, nn_dinucleotides, normalize, reverse,
};
use super::input::InputRow;
use super::optical::{
    ds_extinction, ds_molecular_weight, gc_percent, mass_concentration, molar_concentration,
    ss_extinction, ss_molecular_weight,
};
use super::tm::{nearest_neighbor_tm, wallace_tm};
use super::types::{AnalysisResult, CalcParams};

/// Analyze one raw sequence line. A line that normalizes to nothing yields
/// the designated empty row, never an error.
pub fn analyze_sequence(raw: &str, absorbance: f64, params: &CalcParams) -> AnalysisResult {
    let seq = normalize(raw);
    if seq.is_empty() {
        return AnalysisResult::empty();
    }
    let rev = reverse(&seq);

    let bases = count_bases(&seq);
    let interior = interior_base_counts(&seq);
    let full = full_dinucleotides(&seq);
    let interior_rev = interior_base_counts(&rev);
    let full_rev = full_dinucleotides(&rev);

    let table = params.model.table();
    let nn = nn_dinucleotides(&seq);
    let tm_nn = nearest_neighbor_tm(&seq, &nn, table, params);

    let ss_eps = ss_extinction(&full, &interior);
    let ss_eps_rev = ss_extinction(&full_rev, &interior_rev);
    let ds_eps = ds_extinction(&bases, ss_eps, ss_eps_rev);
    let ss_mw = ss_molecular_weight(&bases);
    let ds_mw = ds_molecular_weight(&bases);

    let ss_conc_um = molar_concentration(absorbance, ss_eps);
    let ds_conc_um = molar_concentration(absorbance, ds_eps);

    AnalysisResult {
        length: seq.len(),
        absorbance,
        tm_nn,
        tm_wallace: wallace_tm(&bases),
        ss_extinction: ss_eps,
        ss_conc_um,
        ss_conc_ng_ul: mass_concentration(ss_conc_um, ss_mw),
        ss_mw,
        ds_extinction: ds_eps,
        ds_conc_um,
        ds_conc_ng_ul: mass_concentration(ds_conc_um, ds_mw),
        ds_mw,
        gc_percent: gc_percent(&bases),
        bases,
        sequence: seq,
    }
}

/// Analyze a whole batch of rows in parallel. Rows are independent, so the
/// only ordering requirement is that the output preserves input order —
/// which the indexed collect guarantees.
pub fn analyze_batch(rows: &[InputRow], params: &CalcParams) -> Vec<AnalysisResult> {
    rows.par_iter()
        .map(|row| analyze_sequence(&row.sequence, row.absorbance, params))
        .collect()
}

/// Narrow recomputation path for an absorbance edit on one row.
///
/// Only the four concentration fields depend on absorbance; Tm, GC%, base
/// counts, extinction coefficients and molecular weights are carried over
/// untouched from the existing row.
pub fn recompute_absorbance(row: &AnalysisResult, absorbance: f64) -> AnalysisResult {
    let ss_conc_um = molar_concentration(absorbance, row.ss_extinction);
    let ds_conc_um = molar_concentration(absorbance, row.ds_extinction);
    AnalysisResult {
        absorbance,
        ss_conc_um,
        ss_conc_ng_ul: mass_concentration(ss_conc_um, row.ss_mw),
        ds_conc_um,
        ds_conc_ng_ul: mass_concentration(ds_conc_um, row.ds_mw),
        ..row.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::input::parse_input;
    use crate::analysis::thermo::ThermoModel;
    use approx::assert_relative_eq;

    #[test]
    fn test_reference_scenario() {
        // ACGTACGT, Na 50 mM, Mg 0, dNTP 0, defaults, breslauer, traditional
        let result = analyze_sequence("ACGTACGT", 0.0, &CalcParams::default());
        assert_eq!(result.length, 8);
        assert_eq!(result.gc_percent, 50.0);
        assert_eq!(
            (result.bases.a, result.bases.t, result.bases.c, result.bases.g),
            (2, 2, 2, 2)
        );
        assert_eq!(result.tm_wallace, 24.0);
        assert!(result.tm_nn.unwrap().is_finite());
        // No absorbance supplied: every concentration short-circuits to 0
        assert_eq!(result.ss_conc_um, 0.0);
        assert_eq!(result.ds_conc_um, 0.0);
        assert_eq!(result.ss_conc_ng_ul, 0.0);
        assert_eq!(result.ds_conc_ng_ul, 0.0);
    }

    #[test]
    fn test_normalization_before_analysis() {
        let clean = analyze_sequence("ACGTACGT", 0.0, &CalcParams::default());
        let noisy = analyze_sequence("  acgt-ACGT 123\t", 0.0, &CalcParams::default());
        assert_eq!(noisy, clean);
        assert_eq!(noisy.sequence, "ACGTACGT");
    }

    #[test]
    fn test_empty_line_yields_empty_row() {
        for raw in ["", "   ", "xyz-123", "nnn"] {
            let result = analyze_sequence(raw, 0.5, &CalcParams::default());
            assert!(result.is_empty(), "raw={:?}", raw);
            assert_eq!(result.tm_nn, None);
        }
    }

    #[test]
    fn test_concentrations_from_absorbance() {
        let result = analyze_sequence("ACGT", 0.5, &CalcParams::default());
        assert_relative_eq!(result.ss_extinction, 40300.0);
        assert_relative_eq!(result.ss_conc_um, 0.5 / 40300.0 * 1e6);
        assert_relative_eq!(
            result.ss_conc_ng_ul,
            result.ss_conc_um * result.ss_mw / 1000.0
        );
        assert!(result.ds_conc_um > 0.0);
    }

    #[test]
    fn test_determinism() {
        let params = CalcParams {
            na: 100.0,
            mg: 1.5,
            dntp: 0.2,
            model: ThermoModel::SantaLucia,
            traditional: false,
            ..Default::default()
        };
        let first = analyze_sequence("GATTACAGATTACA", 0.33, &params);
        let second = analyze_sequence("GATTACAGATTACA", 0.33, &params);
        // Bit-identical, no hidden state
        assert_eq!(first, second);
    }

    #[test]
    fn test_batch_preserves_order_and_empty_rows() {
        let rows = parse_input("ACGT\n\nGGCCGGCC\nTTTTTTTT", "0.1\n0.2\n0.3");
        let results = analyze_batch(&rows, &CalcParams::default());
        assert_eq!(results.len(), 4);
        assert_eq!(results[0].sequence, "ACGT");
        assert!(results[1].is_empty());
        assert_eq!(results[2].sequence, "GGCCGGCC");
        assert_eq!(results[3].sequence, "TTTTTTTT");
        assert_eq!(results[3].absorbance, 0.0);
    }

    #[test]
    fn test_batch_matches_single_row_analysis() {
        let rows = parse_input("ACGTACGT\nGGCC", "0.5\n0.25");
        let batch = analyze_batch(&rows, &CalcParams::default());
        for (row, result) in rows.iter().zip(&batch) {
            assert_eq!(
                *result,
                analyze_sequence(&row.sequence, row.absorbance, &CalcParams::default())
            );
        }
    }

    #[test]
    fn test_absorbance_edit_touches_only_concentrations() {
        let before = analyze_sequence("ACGTACGT", 0.5, &CalcParams::default());
        let after = recompute_absorbance(&before, 1.0);

        // Changed: the absorbance and the four concentration fields
        assert_eq!(after.absorbance, 1.0);
        assert_relative_eq!(after.ss_conc_um, 2.0 * before.ss_conc_um, epsilon = 1e-9);
        assert_relative_eq!(after.ds_conc_um, 2.0 * before.ds_conc_um, epsilon = 1e-9);
        assert_relative_eq!(after.ss_conc_ng_ul, 2.0 * before.ss_conc_ng_ul, epsilon = 1e-9);
        assert_relative_eq!(after.ds_conc_ng_ul, 2.0 * before.ds_conc_ng_ul, epsilon = 1e-9);

        // Unchanged: everything else, bit for bit
        assert_eq!(after.sequence, before.sequence);
        assert_eq!(after.length, before.length);
        assert_eq!(after.tm_nn, before.tm_nn);
        assert_eq!(after.tm_wallace, before.tm_wallace);
        assert_eq!(after.ss_extinction, before.ss_extinction);
        assert_eq!(after.ds_extinction, before.ds_extinction);
        assert_eq!(after.ss_mw, before.ss_mw);
        assert_eq!(after.ds_mw, before.ds_mw);
        assert_eq!(after.gc_percent, before.gc_percent);
        assert_eq!(after.bases, before.bases);
    }

    #[test]
    fn test_absorbance_edit_matches_full_recompute() {
        let params = CalcParams::default();
        let edited = recompute_absorbance(&analyze_sequence("ACGTACGT", 0.5, &params), 1.25);
        let fresh = analyze_sequence("ACGTACGT", 1.25, &params);
        assert_eq!(edited, fresh);
    }
}

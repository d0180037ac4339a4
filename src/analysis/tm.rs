//! Melting temperature calculation
//!
//! Nearest-neighbor Tm under two formula variants, plus the Wallace rule.
//! The traditional variant folds duplex initiation into a single ΔS term
//! and applies a separate 16.6·log10 salt correction; the SantaLucia-style
//! variant applies terminal and symmetry corrections and folds the salt
//! dependence into the entropy sum instead — the missing log10 term there
//! is intentional.

use super::counts::{dinucleotides, reverse, BaseCounts, NnDinucCounts};
use super::thermo::ThermoTable;
use super::types::CalcParams;

/// Universal gas constant, cal·mol⁻¹·K⁻¹
pub const GAS_CONSTANT: f64 = 1.987;

const KELVIN: f64 = 273.15;

/// Wallace-rule Tm estimate: 2·(A+T) + 4·(G+C), whole-sequence counts.
/// No salt or concentration dependence; provided for comparison.
pub fn wallace_tm(bases: &BaseCounts) -> f64 {
    (2 * bases.at() + 4 * bases.gc()) as f64
}

/// Effective monovalent cation concentration in mM.
/// Mg bound by dNTPs does not contribute; when dNTPs exceed Mg the excess
/// is clamped to zero rather than producing a NaN under the square root.
pub fn effective_sodium(na: f64, mg: f64, dntp: f64) -> f64 {
    na + 120.0 * (mg - dntp).max(0.0).sqrt()
}

/// Sum ΔH and ΔS over the nearest-neighbor steps, iterating the 16
/// dinucleotides in fixed order so repeated runs sum in the same order.
fn stack_sums(nn: &NnDinucCounts, table: &ThermoTable) -> (f64, f64) {
    let mut dh = 0.0;
    let mut ds = 0.0;
    for pair in dinucleotides() {
        let n = nn.get(pair) as f64;
        let (pair_dh, pair_ds) = table.stack_energy(pair);
        dh += n * pair_dh;
        ds += n * pair_ds;
    }
    (dh, ds)
}

/// Nearest-neighbor melting temperature in °C.
///
/// `seq` must already be normalized; `nn` must be the interior-anchored
/// step counts of that sequence. Returns None for sequences shorter than
/// two bases, where no nearest-neighbor step exists.
pub fn nearest_neighbor_tm(
    seq: &str,
    nn: &NnDinucCounts,
    table: &ThermoTable,
    params: &CalcParams,
) -> Option<f64> {
    let bytes = seq.as_bytes();
    if bytes.len() < 2 {
        return None;
    }

    let (mut dh, mut ds) = stack_sums(nn, table);
    let na_mod = effective_sodium(params.na, params.mg, params.dntp);
    // Primer concentration is nM, hence the 1e9 divisor.
    let conc_term = GAS_CONSTANT * (params.primer_nm / 1e9).ln();

    if params.traditional {
        ds += table.initiation_s;
        let tm = 1000.0 * dh / (ds + conc_term) - KELVIN;
        Some(tm + 16.6 * (na_mod / 1000.0).log10())
    } else {
        // Self-palindrome against the plain reverse, not the complement.
        if seq == reverse(seq) {
            dh += table.sym.0;
            ds += table.sym.1;
        }
        // 5' and 3' terminal bases each contribute independently.
        for &end in &[bytes[0], bytes[bytes.len() - 1]] {
            let (term_dh, term_ds) = match end {
                b'A' | b'T' => table.init_term_at,
                _ => table.init_term_gc,
            };
            dh += term_dh;
            ds += term_ds;
        }
        ds += 0.368 * (bytes.len() - 1) as f64 * (na_mod / 1000.0).ln();
        Some(1000.0 * dh / (ds + conc_term) - KELVIN)
    }
}

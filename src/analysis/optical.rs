//! Extinction coefficients, molecular weight and concentration
//!
//! ε260 uses the nearest-neighbor approximation: sum the dinucleotide
//! coefficients over the whole sequence, then subtract the monophosphate
//! coefficients of the interior bases, which the dinucleotide pairs count
//! twice. Term order matters for reproducible floating-point output:
//! dinucleotide sum first, monophosphate sum subtracted after.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::counts::{dinucleotides, BaseCounts, FullDinucCounts};

/// Monophosphate extinction coefficients at 260 nm, cm⁻¹·M⁻¹
static MONO_EXTINCTION: Lazy<HashMap<u8, f64>> = Lazy::new(|| {
    let mut map = HashMap::new();
    map.insert(b'A', 15400.0);
    map.insert(b'C', 7400.0);
    map.insert(b'G', 11500.0);
    map.insert(b'T', 8700.0);
    map
});

/// Dinucleotide extinction coefficients at 260 nm, cm⁻¹·M⁻¹
static DINUC_EXTINCTION: Lazy<HashMap<[u8; 2], f64>> = Lazy::new(|| {
    let mut map = HashMap::new();
    map.insert(*b"AA", 27400.0);
    map.insert(*b"AC", 21200.0);
    map.insert(*b"AG", 25000.0);
    map.insert(*b"AT", 22800.0);
    map.insert(*b"CA", 21200.0);
    map.insert(*b"CC", 14600.0);
    map.insert(*b"CG", 18000.0);
    map.insert(*b"CT", 15200.0);
    map.insert(*b"GA", 25200.0);
    map.insert(*b"GC", 17600.0);
    map.insert(*b"GG", 21600.0);
    map.insert(*b"GT", 20000.0);
    map.insert(*b"TA", 23400.0);
    map.insert(*b"TC", 16200.0);
    map.insert(*b"TG", 19000.0);
    map.insert(*b"TT", 16800.0);
    map
});

// Monomer molecular weights, g/mol
const MW_A: f64 = 313.21;
const MW_C: f64 = 289.18;
const MW_G: f64 = 329.21;
const MW_T: f64 = 304.2;

/// Single-strand ε260.
///
/// `full` are the whole-sequence dinucleotide counts, `interior` the base
/// counts with the terminal characters dropped. The subtraction can go
/// negative for degenerate inputs; that is a property of the formula, not
/// an error.
pub fn ss_extinction(full: &FullDinucCounts, interior: &BaseCounts) -> f64 {
    let dinuc_sum: f64 = dinucleotides()
        .map(|pair| full.get(pair) as f64 * DINUC_EXTINCTION[&pair])
        .sum();
    let mono_sum = interior.a as f64 * MONO_EXTINCTION[&b'A']
        + interior.c as f64 * MONO_EXTINCTION[&b'C']
        + interior.g as f64 * MONO_EXTINCTION[&b'G']
        + interior.t as f64 * MONO_EXTINCTION[&b'T'];
    dinuc_sum - mono_sum
}

/// Double-strand ε260: hypochromicity factor applied to the sum of the
/// forward and reverse single-strand coefficients.
pub fn ds_extinction(bases: &BaseCounts, ss_forward: f64, ss_reverse: f64) -> f64 {
    let length = bases.total();
    if length == 0 {
        return 0.0;
    }
    let hypochromicity =
        1.0 - (0.287 * bases.at() as f64 + 0.059 * bases.gc() as f64) / length as f64;
    hypochromicity * (ss_forward + ss_reverse)
}

/// Single-strand molecular weight, g/mol. The 62.03 term corrects for the
/// terminal phosphate/hydroxyl.
pub fn ss_molecular_weight(bases: &BaseCounts) -> f64 {
    if bases.total() == 0 {
        return 0.0;
    }
    bases.a as f64 * MW_A + bases.c as f64 * MW_C + bases.g as f64 * MW_G + bases.t as f64 * MW_T
        - 62.03
}

/// Double-strand molecular weight, g/mol, with duplex end corrections.
pub fn ds_molecular_weight(bases: &BaseCounts) -> f64 {
    if bases.total() == 0 {
        return 0.0;
    }
    bases.at() as f64 * (MW_A + MW_T) + bases.gc() as f64 * (MW_C + MW_G) - 158.4 + 34.02
}

/// Molar concentration in µM from an absorbance reading. Short-circuits to
/// zero for missing absorbance or a non-positive extinction coefficient
/// instead of propagating NaN/∞.
pub fn molar_concentration(absorbance: f64, extinction: f64) -> f64 {
    if absorbance > 0.0 && extinction > 0.0 {
        absorbance / extinction * 1e6
    } else {
        0.0
    }
}

/// Mass concentration in ng/µL from a molar concentration in µM.
pub fn mass_concentration(conc_um: f64, mw: f64) -> f64 {
    conc_um * mw / 1000.0
}

/// GC content in percent, rounded to two decimals. Zero for the empty
/// sequence.
pub fn gc_percent(bases: &BaseCounts) -> f64 {
    let length = bases.total();
    if length == 0 {
        return 0.0;
    }
    round2(bases.gc() as f64 / length as f64 * 100.0)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::counts::{
        count_bases, full_dinucleotides, interior_base_counts, reverse,
    };
    use approx::assert_relative_eq;

    fn ss(seq: &str) -> f64 {
        ss_extinction(&full_dinucleotides(seq), &interior_base_counts(seq))
    }

    #[test]
    fn test_ss_extinction_acgt() {
        // AC + CG + GT minus interior C and G:
        // (21200 + 18000 + 20000) - (7400 + 11500) = 40300
        assert_relative_eq!(ss("ACGT"), 40300.0);
    }

    #[test]
    fn test_ds_extinction_acgt() {
        let bases = count_bases("ACGT");
        let fwd = ss("ACGT");
        let rev = ss(&reverse("ACGT")); // TGCA
        assert_relative_eq!(rev, 19000.0 + 17600.0 + 21200.0 - 18900.0);
        // 1 - (0.287*2 + 0.059*2)/4 = 0.827
        assert_relative_eq!(
            ds_extinction(&bases, fwd, rev),
            0.827 * (40300.0 + 38900.0),
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_molecular_weights() {
        let bases = count_bases("ACGT");
        assert_relative_eq!(
            ss_molecular_weight(&bases),
            313.21 + 289.18 + 329.21 + 304.2 - 62.03
        );
        assert_relative_eq!(
            ds_molecular_weight(&bases),
            2.0 * (313.21 + 304.2) + 2.0 * (289.18 + 329.21) - 158.4 + 34.02
        );
        assert_eq!(ss_molecular_weight(&count_bases("")), 0.0);
        assert_eq!(ds_molecular_weight(&count_bases("")), 0.0);
    }

    #[test]
    fn test_concentration_short_circuits() {
        assert_eq!(molar_concentration(0.0, 40300.0), 0.0);
        assert_eq!(molar_concentration(0.5, 0.0), 0.0);
        assert_eq!(molar_concentration(0.5, -120.0), 0.0);
        assert!(molar_concentration(0.5, 40300.0).is_finite());
        assert_relative_eq!(molar_concentration(0.5, 40300.0), 0.5 / 40300.0 * 1e6);
    }

    #[test]
    fn test_mass_concentration() {
        assert_relative_eq!(mass_concentration(12.41, 1173.77), 12.41 * 1173.77 / 1000.0);
        assert_eq!(mass_concentration(0.0, 1173.77), 0.0);
    }

    #[test]
    fn test_gc_percent() {
        assert_eq!(gc_percent(&count_bases("ACGT")), 50.0);
        assert_eq!(gc_percent(&count_bases("ACGTACGT")), 50.0);
        assert_eq!(gc_percent(&count_bases("AAAA")), 0.0);
        assert_eq!(gc_percent(&count_bases("GGCC")), 100.0);
        assert_eq!(gc_percent(&count_bases("")), 0.0);
        // Two-decimal rounding: 1/3 GC
        assert_eq!(gc_percent(&count_bases("GAT")), 33.33);
    }
}

//! Nearest-neighbor thermodynamic parameter sets
//!
//! Three published tables: Breslauer et al. (1986), Sugimoto et al. (1996)
//! and the SantaLucia (1998) unified set. ΔH is kcal·mol⁻¹, ΔS is
//! cal·mol⁻¹·K⁻¹ — note the kcal/cal split, it is not a typo.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::types::ConfigError;

/// (ΔH, ΔS) contribution of one dinucleotide step or correction term.
pub type Energy = (f64, f64);

/// One nearest-neighbor parameter set.
///
/// The terminal and symmetry corrections only carry non-zero values for the
/// SantaLucia table; applying them under the other two models is a no-op by
/// construction, not by a branch.
#[derive(Debug, Clone)]
pub struct ThermoTable {
    /// ΔH/ΔS per dinucleotide stacking step
    pub stack: HashMap<[u8; 2], Energy>,
    /// ΔS initiation term of the traditional Tm formula
    pub initiation_s: f64,
    /// Correction per A/T terminal base (SantaLucia-style formula)
    pub init_term_at: Energy,
    /// Correction per C/G terminal base (SantaLucia-style formula)
    pub init_term_gc: Energy,
    /// Self-complementarity correction (SantaLucia-style formula)
    pub sym: Energy,
}

impl ThermoTable {
    fn build(
        raw: [([u8; 2], Energy); 16],
        initiation_s: f64,
        init_term_at: Energy,
        init_term_gc: Energy,
        sym: Energy,
    ) -> Self {
        Self {
            stack: raw.into_iter().collect(),
            initiation_s,
            init_term_at,
            init_term_gc,
            sym,
        }
    }

    /// ΔH/ΔS of one stacking step. All 16 dinucleotides are present.
    pub fn stack_energy(&self, pair: [u8; 2]) -> Energy {
        self.stack.get(&pair).copied().unwrap_or((0.0, 0.0))
    }
}

// Breslauer et al. (1986), PNAS 83: 3746-3750
static BRESLAUER: Lazy<ThermoTable> = Lazy::new(|| {
    ThermoTable::build(
        [
            (*b"AA", (-9.1, -24.0)),
            (*b"AC", (-6.5, -17.3)),
            (*b"AG", (-7.8, -20.8)),
            (*b"AT", (-8.6, -23.9)),
            (*b"CA", (-5.8, -12.9)),
            (*b"CC", (-11.0, -26.6)),
            (*b"CG", (-11.9, -27.8)),
            (*b"CT", (-7.8, -20.8)),
            (*b"GA", (-5.6, -13.5)),
            (*b"GC", (-11.1, -26.7)),
            (*b"GG", (-11.0, -26.6)),
            (*b"GT", (-6.5, -17.3)),
            (*b"TA", (-6.0, -16.9)),
            (*b"TC", (-5.6, -13.5)),
            (*b"TG", (-5.8, -12.9)),
            (*b"TT", (-9.1, -24.0)),
        ],
        -10.8,
        (0.0, 0.0),
        (0.0, 0.0),
        (0.0, 0.0),
    )
});

// Sugimoto et al. (1996), Nucl Acids Res 24: 4501-4505
static SUGIMOTO: Lazy<ThermoTable> = Lazy::new(|| {
    ThermoTable::build(
        [
            (*b"AA", (-8.0, -21.9)),
            (*b"AC", (-9.4, -25.5)),
            (*b"AG", (-6.6, -16.4)),
            (*b"AT", (-5.6, -15.2)),
            (*b"CA", (-8.2, -21.0)),
            (*b"CC", (-10.9, -28.4)),
            (*b"CG", (-11.8, -29.0)),
            (*b"CT", (-6.6, -16.4)),
            (*b"GA", (-8.8, -23.5)),
            (*b"GC", (-10.5, -26.4)),
            (*b"GG", (-10.9, -28.4)),
            (*b"GT", (-9.4, -25.5)),
            (*b"TA", (-6.6, -18.4)),
            (*b"TC", (-8.8, -23.5)),
            (*b"TG", (-8.2, -21.0)),
            (*b"TT", (-8.0, -21.9)),
        ],
        -9.0,
        (0.0, 0.0),
        (0.0, 0.0),
        (0.0, 0.0),
    )
});

// SantaLucia (1998), PNAS 95: 1460-1465 (unified parameters), including the
// terminal A·T / G·C initiation and self-complementarity corrections.
static SANTALUCIA: Lazy<ThermoTable> = Lazy::new(|| {
    ThermoTable::build(
        [
            (*b"AA", (-7.9, -22.2)),
            (*b"AC", (-8.4, -22.4)),
            (*b"AG", (-7.8, -21.0)),
            (*b"AT", (-7.2, -20.4)),
            (*b"CA", (-8.5, -22.7)),
            (*b"CC", (-8.0, -19.9)),
            (*b"CG", (-10.6, -27.2)),
            (*b"CT", (-7.8, -21.0)),
            (*b"GA", (-8.2, -22.2)),
            (*b"GC", (-9.8, -24.4)),
            (*b"GG", (-8.0, -19.9)),
            (*b"GT", (-8.4, -22.4)),
            (*b"TA", (-7.2, -21.3)),
            (*b"TC", (-8.2, -22.2)),
            (*b"TG", (-8.5, -22.7)),
            (*b"TT", (-7.9, -22.2)),
        ],
        -10.8,
        (2.3, 4.1),
        (0.1, -2.8),
        (0.0, -1.4),
    )
});

/// The closed set of nearest-neighbor parameter sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThermoModel {
    Breslauer,
    Sugimoto,
    SantaLucia,
}

impl Default for ThermoModel {
    fn default() -> Self {
        Self::Breslauer
    }
}

impl ThermoModel {
    pub const ALL: [ThermoModel; 3] = [Self::Breslauer, Self::Sugimoto, Self::SantaLucia];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Breslauer => "breslauer",
            Self::Sugimoto => "sugimoto",
            Self::SantaLucia => "santalucia",
        }
    }

    /// The fixed parameter table for this model.
    pub fn table(&self) -> &'static ThermoTable {
        match self {
            Self::Breslauer => &BRESLAUER,
            Self::Sugimoto => &SUGIMOTO,
            Self::SantaLucia => &SANTALUCIA,
        }
    }
}

impl fmt::Display for ThermoModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ThermoModel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "breslauer" => Ok(Self::Breslauer),
            "sugimoto" => Ok(Self::Sugimoto),
            "santalucia" => Ok(Self::SantaLucia),
            other => Err(ConfigError::UnknownModel(other.to_string())),
        }
    }
}

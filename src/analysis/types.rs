//! Parameter and result types for oligo property calculation

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::counts::BaseCounts;
use super::thermo::ThermoModel;

/// Errors from externally supplied configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The model selector is a closed set; anything else is rejected,
    /// never silently defaulted.
    #[error("unknown thermodynamic model '{0}' (expected breslauer, sugimoto or santalucia)")]
    UnknownModel(String),
}

/// Global calculation parameters, passed immutably into every analysis call.
///
/// The primer/duplex concentration is pinned to nM (the Tm formula divides
/// by 1e9); earlier variants of the formula used µM with a 1e6 divisor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalcParams {
    /// Sodium concentration, mM
    pub na: f64,
    /// Magnesium concentration, mM
    pub mg: f64,
    /// dNTP concentration, mM
    pub dntp: f64,
    /// Primer/duplex concentration, nM
    pub primer_nm: f64,
    /// Nearest-neighbor parameter set
    pub model: ThermoModel,
    /// Traditional initiation-entropy formula when true, otherwise the
    /// SantaLucia-style formula with terminal/symmetry corrections
    pub traditional: bool,
}

impl Default for CalcParams {
    fn default() -> Self {
        Self {
            na: 50.0,
            mg: 0.0,
            dntp: 0.0,
            primer_nm: 500.0,
            model: ThermoModel::Breslauer,
            traditional: true,
        }
    }
}

/// Everything computed for one input sequence. Immutable once produced;
/// an absorbance edit produces a replacement row, never a mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Normalized sequence the numbers were computed from
    pub sequence: String,
    pub length: usize,
    /// Absorbance at 260 nm as supplied (0 when absent)
    pub absorbance: f64,
    /// Nearest-neighbor melting temperature, °C. None for empty rows and
    /// sequences too short to carry a nearest-neighbor step.
    pub tm_nn: Option<f64>,
    /// Wallace-rule estimate, °C
    pub tm_wallace: f64,
    /// Single-strand molar extinction coefficient at 260 nm, cm⁻¹·M⁻¹
    pub ss_extinction: f64,
    pub ss_conc_um: f64,
    pub ss_conc_ng_ul: f64,
    pub ss_mw: f64,
    /// Double-strand extinction coefficient (hypochromicity-corrected)
    pub ds_extinction: f64,
    pub ds_conc_um: f64,
    pub ds_conc_ng_ul: f64,
    pub ds_mw: f64,
    /// GC content in percent, rounded to two decimals
    pub gc_percent: f64,
    pub bases: BaseCounts,
}

impl AnalysisResult {
    /// Placeholder row for an input line that normalized to nothing.
    pub fn empty() -> Self {
        Self {
            sequence: String::new(),
            length: 0,
            absorbance: 0.0,
            tm_nn: None,
            tm_wallace: 0.0,
            ss_extinction: 0.0,
            ss_conc_um: 0.0,
            ss_conc_ng_ul: 0.0,
            ss_mw: 0.0,
            ds_extinction: 0.0,
            ds_conc_um: 0.0,
            ds_conc_ng_ul: 0.0,
            ds_mw: 0.0,
            gc_percent: 0.0,
            bases: BaseCounts::default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }
}

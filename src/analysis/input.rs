//! Line-oriented input parsing
//!
//! Sequences and absorbance readings arrive as newline-separated text,
//! aligned by line index. Blank sequence lines are kept as empty rows so
//! the index alignment with the absorbance column survives.

use serde::{Deserialize, Serialize};

/// One raw input row prior to analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputRow {
    /// Raw sequence text as entered; normalization happens at analysis time
    pub sequence: String,
    /// Absorbance at 260 nm; 0 when the line was missing or unparsable
    pub absorbance: f64,
}

/// Pair up sequence lines with absorbance lines by index.
pub fn parse_input(sequence_text: &str, absorbance_text: &str) -> Vec<InputRow> {
    let absorbances: Vec<f64> = absorbance_text.lines().map(parse_absorbance).collect();

    sequence_text
        .lines()
        .enumerate()
        .map(|(i, line)| InputRow {
            sequence: line.trim().to_string(),
            absorbance: absorbances.get(i).copied().unwrap_or(0.0),
        })
        .collect()
}

/// Parse one absorbance line; anything that is not a non-negative decimal
/// collapses to 0 (absent), matching the "missing → 0" input contract.
fn parse_absorbance(line: &str) -> f64 {
    match line.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => value,
        _ => 0.0,
    }
}

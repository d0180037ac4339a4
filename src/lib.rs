//! Oligocalc - DNA Oligonucleotide Property Calculator
//!
//! Computes melting temperatures (nearest-neighbor and Wallace), molar
//! extinction coefficients, concentrations from absorbance readings,
//! molecular weights and base composition for short DNA sequences.

pub mod analysis;

pub use analysis::*;

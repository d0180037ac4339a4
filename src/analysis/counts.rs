//! Base and dinucleotide frequency counting
//!
//! Two dinucleotide counting conventions coexist and must never be mixed:
//! the interior-anchored counts feed the nearest-neighbor ΔH/ΔS sums, the
//! whole-sequence counts feed the extinction-coefficient sums. They are kept
//! as separate types so a caller cannot hand one to the other's consumer.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// The four standard DNA bases, in the fixed iteration order used everywhere.
pub const BASES: [u8; 4] = [b'A', b'C', b'G', b'T'];

/// Check if a character is a standard DNA base
pub fn is_standard_base(c: char) -> bool {
    matches!(c, 'A' | 'C' | 'G' | 'T')
}

/// Normalize a raw sequence: uppercase, then drop every character outside
/// {A, C, G, T}. May normalize to the empty string, which downstream code
/// treats as a legitimate "no data" row.
pub fn normalize(raw: &str) -> String {
    raw.chars()
        .map(|c| c.to_ascii_uppercase())
        .filter(|&c| is_standard_base(c))
        .collect()
}

/// Reverse a sequence (plain reversal, not the complement).
pub fn reverse(seq: &str) -> String {
    seq.chars().rev().collect()
}

/// Per-base counts of a sequence (or a slice of one).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BaseCounts {
    pub a: usize,
    pub c: usize,
    pub g: usize,
    pub t: usize,
}

impl BaseCounts {
    pub fn total(&self) -> usize {
        self.a + self.c + self.g + self.t
    }

    pub fn at(&self) -> usize {
        self.a + self.t
    }

    pub fn gc(&self) -> usize {
        self.g + self.c
    }
}

fn count_base_slice(bytes: &[u8]) -> BaseCounts {
    let mut counts = BaseCounts::default();
    for &b in bytes {
        match b {
            b'A' => counts.a += 1,
            b'C' => counts.c += 1,
            b'G' => counts.g += 1,
            b'T' => counts.t += 1,
            _ => {}
        }
    }
    counts
}

/// Count each base over the whole (normalized) sequence.
pub fn count_bases(seq: &str) -> BaseCounts {
    count_base_slice(seq.as_bytes())
}

/// Count each base over the interior of the sequence, i.e. with the first
/// and last character removed. Empty for sequences of length <= 2. These
/// are the counts subtracted through the monophosphate extinction table.
pub fn interior_base_counts(seq: &str) -> BaseCounts {
    let bytes = seq.as_bytes();
    if bytes.len() <= 2 {
        return BaseCounts::default();
    }
    count_base_slice(&bytes[1..bytes.len() - 1])
}

/// All 16 ordered dinucleotides in a fixed order. Iterating tables in this
/// order (rather than map order) keeps floating-point sums reproducible
/// between runs.
pub fn dinucleotides() -> impl Iterator<Item = [u8; 2]> {
    BASES
        .into_iter()
        .flat_map(|first| BASES.into_iter().map(move |second| [first, second]))
}

fn count_steps(bytes: &[u8], anchors: std::ops::Range<usize>) -> HashMap<[u8; 2], usize> {
    let mut counts = HashMap::new();
    for i in anchors {
        *counts.entry([bytes[i], bytes[i + 1]]).or_insert(0) += 1;
    }
    counts
}

/// Dinucleotide step counts feeding the nearest-neighbor ΔH/ΔS sums.
///
/// Steps are anchored at interior positions only (1..=L-2); the step that
/// starts on the 5'-terminal base is excluded. For a sequence of length L
/// the counts sum to L-2 when L >= 2, else 0.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NnDinucCounts {
    counts: HashMap<[u8; 2], usize>,
}

impl NnDinucCounts {
    pub fn get(&self, pair: [u8; 2]) -> usize {
        self.counts.get(&pair).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }
}

/// Count the nearest-neighbor (interior-anchored) dinucleotide steps.
pub fn nn_dinucleotides(seq: &str) -> NnDinucCounts {
    let bytes = seq.as_bytes();
    let anchors = if bytes.len() >= 2 { 1..bytes.len() - 1 } else { 0..0 };
    NnDinucCounts {
        counts: count_steps(bytes, anchors),
    }
}

/// Overlapping dinucleotide counts over the whole sequence (anchors 0..=L-2,
/// so "AAA" counts "AA" twice). Sum to L-1 for L >= 1. These feed the
/// extinction-coefficient sums only, never the thermodynamic sums.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FullDinucCounts {
    counts: HashMap<[u8; 2], usize>,
}

impl FullDinucCounts {
    pub fn get(&self, pair: [u8; 2]) -> usize {
        self.counts.get(&pair).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }
}

/// Count every overlapping dinucleotide of the whole sequence.
pub fn full_dinucleotides(seq: &str) -> FullDinucCounts {
    let bytes = seq.as_bytes();
    FullDinucCounts {
        counts: count_steps(bytes, 0..bytes.len().saturating_sub(1)),
    }
}

//! Data model for codon optimization.
//!
//! This module contains the plain values passed between the pipeline stages:
//! - Sequence records recovered from raw input
//! - Sequence types and the caller's interpretation mode
//! - Options and result of a single optimization

use std::fmt;

use crate::alphabet::Alphabet;

/// Record name used when the input carries no FASTA header.
pub const DEFAULT_RECORD_NAME: &str = "sequence";

/// Default number of residues per FASTA sequence line.
pub const FASTA_LINE_WIDTH: usize = 70;

/// A named sequence recovered from raw input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceRecord {
    /// The record name (from the FASTA header, without '>')
    pub name: String,
    /// Cleaned, upper-case residues (amino acids or nucleotides)
    pub residues: String,
}

impl SequenceRecord {
    /// Creates a new record.
    pub fn new(name: impl Into<String>, residues: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            residues: residues.into(),
        }
    }

    /// Returns the number of residues.
    pub fn len(&self) -> usize {
        self.residues.len()
    }

    /// Returns true if no residues were recovered.
    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }
}

/// What kind of residues a sequence holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SequenceType {
    Protein,
    Nucleotide,
}

impl fmt::Display for SequenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SequenceType::Protein => write!(f, "protein"),
            SequenceType::Nucleotide => write!(f, "nucleotide"),
        }
    }
}

/// How the caller wants the input interpreted.
///
/// An explicit mode bypasses classification entirely. `Auto` cannot tell a
/// pure A/C/G/T sequence from a peptide of Ala/Cys/Gly/Thr and reads it as
/// protein; pass `Nucleotide` for coding sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Auto,
    Protein,
    Nucleotide,
}

/// Settings for one optimization call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptimizeOptions {
    /// Input interpretation
    pub mode: Mode,
    /// Alphabet of the emitted sequence
    pub alphabet: Alphabet,
    /// Overrides the header name when non-blank
    pub record_name: Option<String>,
    /// FASTA line width; 0 writes the sequence on a single line
    pub line_width: usize,
}

impl Default for OptimizeOptions {
    fn default() -> Self {
        Self {
            mode: Mode::Auto,
            alphabet: Alphabet::Dna,
            record_name: None,
            line_width: FASTA_LINE_WIDTH,
        }
    }
}

impl OptimizeOptions {
    /// Sets the input mode.
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the output alphabet.
    pub fn with_alphabet(mut self, alphabet: Alphabet) -> Self {
        self.alphabet = alphabet;
        self
    }

    /// Sets the override record name.
    pub fn with_record_name(mut self, name: impl Into<String>) -> Self {
        self.record_name = Some(name.into());
        self
    }

    /// Sets the FASTA line width.
    pub fn with_line_width(mut self, width: usize) -> Self {
        self.line_width = width;
        self
    }
}

/// Result of a successful optimization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Optimized {
    /// Record name written in the header
    pub name: String,
    /// How the input was interpreted
    pub sequence_type: SequenceType,
    /// Amino-acid sequence that was back-translated
    pub residues: String,
    /// Optimized coding sequence in the requested alphabet
    pub sequence: String,
    /// `sequence` formatted as a FASTA record
    pub fasta: String,
}

impl Optimized {
    /// Returns the length of the optimized sequence in nucleotides.
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    /// Returns true if the optimized sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Returns the number of codons in the optimized sequence.
    pub fn codon_count(&self) -> usize {
        self.sequence.len() / 3
    }
}

//! Error types for codon optimization.
//!
//! Every failure of an [`optimize`](crate::optimizer::optimize) call is one
//! of the variants below. Each is raised by the lowest component able to
//! detect it and passed up unchanged, so a caller always sees exactly one
//! error and never a partial result.

use std::fmt;

use thiserror::Error;

/// Machine-readable category of an [`OptimizeError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// No residues left after normalization
    EmptySequence,
    /// Nucleotide input is not a whole number of codons
    LengthNotMultipleOfThree,
    /// Triplet missing from the genetic code
    InvalidCodon,
    /// Residue missing from the preferred-codon table
    UnsupportedResidue,
}

impl ErrorKind {
    /// Stable name of the kind, suitable for display or matching by callers.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::EmptySequence => "EmptySequence",
            ErrorKind::LengthNotMultipleOfThree => "LengthNotMultipleOfThree",
            ErrorKind::InvalidCodon => "InvalidCodon",
            ErrorKind::UnsupportedResidue => "UnsupportedResidue",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur while optimizing a sequence.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OptimizeError {
    #[error("No sequence residues found in input")]
    EmptySequence,

    #[error("Nucleotide sequence length {length} is not a multiple of 3")]
    LengthNotMultipleOfThree { length: usize },

    #[error("Invalid codon '{codon}' at codon {index}")]
    InvalidCodon { codon: String, index: usize },

    #[error("Unsupported residue '{residue}' at position {position}")]
    UnsupportedResidue { residue: char, position: usize },
}

impl OptimizeError {
    /// Returns the category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            OptimizeError::EmptySequence => ErrorKind::EmptySequence,
            OptimizeError::LengthNotMultipleOfThree { .. } => ErrorKind::LengthNotMultipleOfThree,
            OptimizeError::InvalidCodon { .. } => ErrorKind::InvalidCodon,
            OptimizeError::UnsupportedResidue { .. } => ErrorKind::UnsupportedResidue,
        }
    }
}

/// Result type for optimization operations.
pub type OptimizeResult<T> = Result<T, OptimizeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_matches_variant() {
        assert_eq!(OptimizeError::EmptySequence.kind(), ErrorKind::EmptySequence);
        assert_eq!(
            OptimizeError::LengthNotMultipleOfThree { length: 5 }.kind(),
            ErrorKind::LengthNotMultipleOfThree
        );
        assert_eq!(
            OptimizeError::InvalidCodon { codon: "ANT".to_string(), index: 2 }.kind(),
            ErrorKind::InvalidCodon
        );
        assert_eq!(
            OptimizeError::UnsupportedResidue { residue: 'X', position: 7 }.kind(),
            ErrorKind::UnsupportedResidue
        );
    }

    #[test]
    fn test_messages_carry_details() {
        let err = OptimizeError::LengthNotMultipleOfThree { length: 5 };
        assert_eq!(err.to_string(), "Nucleotide sequence length 5 is not a multiple of 3");

        let err = OptimizeError::InvalidCodon { codon: "ANT".to_string(), index: 2 };
        assert_eq!(err.to_string(), "Invalid codon 'ANT' at codon 2");

        let err = OptimizeError::UnsupportedResidue { residue: 'X', position: 7 };
        assert_eq!(err.to_string(), "Unsupported residue 'X' at position 7");
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(ErrorKind::EmptySequence.to_string(), "EmptySequence");
        assert_eq!(ErrorKind::InvalidCodon.as_str(), "InvalidCodon");
    }
}

//! Residue alphabets, sequence classification and DNA/RNA conversion.

use std::fmt;

use crate::model::SequenceType;

/// One-letter amino-acid codes plus `*` for stop.
pub const AMINO_ACIDS: &str = "ACDEFGHIKLMNPQRSTVWY*";

/// Returns true if `c` is an upper-case amino-acid code or `*`.
pub fn is_amino_acid(c: char) -> bool {
    matches!(
        c,
        'A' | 'C' | 'D' | 'E' | 'F' | 'G' | 'H' | 'I' | 'K' | 'L' | 'M' | 'N' | 'P' | 'Q' | 'R'
            | 'S' | 'T' | 'V' | 'W' | 'Y' | '*'
    )
}

/// Decides whether cleaned residues are protein or nucleotide.
///
/// A sequence is protein if and only if every character is in
/// [`AMINO_ACIDS`]; anything else (for instance a `U`) makes it nucleotide.
/// Since A, C, G and T are also amino-acid codes, a plain DNA string is
/// reported as protein. Callers who know they have a coding sequence should
/// use an explicit [`Mode`](crate::model::Mode).
pub fn classify(residues: &str) -> SequenceType {
    if residues.chars().all(is_amino_acid) {
        SequenceType::Protein
    } else {
        SequenceType::Nucleotide
    }
}

/// Converts DNA to RNA by replacing every `T` with `U`.
pub fn dna_to_rna(sequence: &str) -> String {
    sequence.replace('T', "U")
}

/// Converts RNA to DNA by replacing every `U` with `T`.
pub fn rna_to_dna(sequence: &str) -> String {
    sequence.replace('U', "T")
}

/// Nucleotide alphabet of an emitted sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Alphabet {
    #[default]
    Dna,
    Rna,
}

impl Alphabet {
    /// Renders a DNA sequence in this alphabet.
    pub fn convert(&self, dna: &str) -> String {
        match self {
            Alphabet::Dna => dna.to_string(),
            Alphabet::Rna => dna_to_rna(dna),
        }
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Alphabet::Dna => write!(f, "DNA"),
            Alphabet::Rna => write!(f, "RNA"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_protein() {
        assert_eq!(classify("MVSP"), SequenceType::Protein);
        assert_eq!(classify("MKV*"), SequenceType::Protein);
        assert_eq!(classify(AMINO_ACIDS), SequenceType::Protein);
    }

    #[test]
    fn test_classify_nucleotide() {
        assert_eq!(classify("AUGGUC"), SequenceType::Nucleotide);
        assert_eq!(classify("ATGNNN"), SequenceType::Nucleotide);
        assert_eq!(classify("MXV"), SequenceType::Nucleotide);
    }

    #[test]
    fn test_classify_plain_dna_is_protein() {
        // A, C, G and T are amino-acid codes too: auto-detection cannot tell
        assert_eq!(classify("ATGGTCAGCCCT"), SequenceType::Protein);
    }

    #[test]
    fn test_classify_is_deterministic() {
        let seq = "ATGGTCAGCCCTU";
        assert_eq!(classify(seq), classify(seq));
    }

    #[test]
    fn test_dna_rna_conversion() {
        assert_eq!(dna_to_rna("ATGGTGAGCCCG"), "AUGGUGAGCCCG");
        assert_eq!(rna_to_dna("AUGGUGAGCCCG"), "ATGGTGAGCCCG");
    }

    #[test]
    fn test_conversion_inverse() {
        let rna = "AUGUUUUAA";
        assert_eq!(dna_to_rna(&rna_to_dna(rna)), rna);
        let dna = "ATGTTTTAA";
        assert_eq!(rna_to_dna(&dna_to_rna(dna)), dna);
    }

    #[test]
    fn test_conversion_idempotent() {
        assert_eq!(dna_to_rna("AUGC"), "AUGC");
        assert_eq!(rna_to_dna("ATGC"), "ATGC");
    }

    #[test]
    fn test_alphabet_convert() {
        assert_eq!(Alphabet::Dna.convert("ATG"), "ATG");
        assert_eq!(Alphabet::Rna.convert("ATG"), "AUG");
        assert_eq!(Alphabet::Rna.to_string(), "RNA");
    }
}

//! Preferred-codon table and greedy codon substitution.
//!
//! The table holds the single most frequently used codon per residue in
//! highly expressed *E. coli* K-12 genes. Substitution always takes that
//! codon; there is no scoring and no second choice.

use crate::error::{OptimizeError, OptimizeResult};

/// Preferred DNA codon for every residue of the amino-acid alphabet.
const PREFERRED_CODONS: [(char, &str); 21] = [
    ('A', "GCG"),
    ('C', "TGC"),
    ('D', "GAT"),
    ('E', "GAA"),
    ('F', "TTT"),
    ('G', "GGC"),
    ('H', "CAT"),
    ('I', "ATT"),
    ('K', "AAA"),
    ('L', "CTG"),
    ('M', "ATG"),
    ('N', "AAC"),
    ('P', "CCG"),
    ('Q', "CAG"),
    ('R', "CGT"),
    ('S', "AGC"),
    ('T', "ACC"),
    ('V', "GTG"),
    ('W', "TGG"),
    ('Y', "TAT"),
    ('*', "TAA"),
];

/// Returns the preferred DNA codon for a residue, if it has one.
///
/// Only upper-case one-letter codes and `*` are keys.
pub fn preferred_codon(residue: char) -> Option<&'static str> {
    PREFERRED_CODONS
        .iter()
        .find(|(aa, _)| *aa == residue)
        .map(|(_, codon)| *codon)
}

/// Replaces every residue with its preferred codon.
///
/// Returns a DNA string three times the length of the input, in input order.
///
/// # Errors
///
/// [`OptimizeError::UnsupportedResidue`] for the first residue with no
/// table entry, with its 1-based position.
pub fn substitute(residues: &str) -> OptimizeResult<String> {
    let mut dna = String::with_capacity(residues.len() * 3);
    for (i, residue) in residues.chars().enumerate() {
        let codon = preferred_codon(residue).ok_or(OptimizeError::UnsupportedResidue {
            residue,
            position: i + 1,
        })?;
        dna.push_str(codon);
    }
    Ok(dna)
}

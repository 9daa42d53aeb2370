//! Standard genetic code and nucleotide translation.
//!
//! This module provides:
//! - The NCBI standard genetic code (table 1) as a static lookup
//! - Codon to amino acid lookup
//! - Translation of a whole coding sequence in frame +1

use crate::error::{OptimizeError, OptimizeResult};

/// NCBI `ncbieaa` string for the standard code.
///
/// NCBI order: TTT, TTC, TTA, TTG, TCT, TCC, ... (Base1, Base2, Base3),
/// with bases ranked T, C, A, G.
const STANDARD_NCBIEAA: &[u8; 64] =
    b"FFLLSSSSYY**CC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG";

/// Rank of a base in NCBI order. `U` is read as `T`.
fn base_rank(base: char) -> Option<usize> {
    match base {
        'T' | 'U' => Some(0),
        'C' => Some(1),
        'A' => Some(2),
        'G' => Some(3),
        _ => None,
    }
}

/// Looks up the amino acid encoded by a codon in the standard code.
///
/// Accepts upper-case DNA or RNA triplets. Anything else (wrong length,
/// lower case, ambiguity codes, gaps) has no entry and returns `None`.
pub fn amino_acid_for(codon: &str) -> Option<char> {
    let mut chars = codon.chars();
    let (b1, b2, b3) = (chars.next()?, chars.next()?, chars.next()?);
    if chars.next().is_some() {
        return None;
    }

    let idx = base_rank(b1)? * 16 + base_rank(b2)? * 4 + base_rank(b3)?;
    Some(STANDARD_NCBIEAA[idx] as char)
}

/// Translates a coding sequence into amino acids.
///
/// The sequence is read as consecutive, non-overlapping codons starting at
/// the first base. Stop codons are kept as `*`; translation does not stop
/// at them.
///
/// # Errors
///
/// - [`OptimizeError::LengthNotMultipleOfThree`] if the length is not a
///   whole number of codons
/// - [`OptimizeError::InvalidCodon`] for the first triplet with no entry in
///   the code, with its 1-based codon index
pub fn translate(nucleotides: &str) -> OptimizeResult<String> {
    let chars: Vec<char> = nucleotides.chars().collect();
    if chars.len() % 3 != 0 {
        return Err(OptimizeError::LengthNotMultipleOfThree { length: chars.len() });
    }

    let mut protein = String::with_capacity(chars.len() / 3);
    for (i, triplet) in chars.chunks(3).enumerate() {
        let codon: String = triplet.iter().collect();
        match amino_acid_for(&codon) {
            Some(aa) => protein.push(aa),
            None => return Err(OptimizeError::InvalidCodon { codon, index: i + 1 }),
        }
    }

    Ok(protein)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_code_translation() {
        // Test some common codons
        assert_eq!(amino_acid_for("ATG"), Some('M')); // Start codon
        assert_eq!(amino_acid_for("TAA"), Some('*')); // Stop codon
        assert_eq!(amino_acid_for("TAG"), Some('*')); // Stop codon
        assert_eq!(amino_acid_for("TGA"), Some('*')); // Stop codon
        assert_eq!(amino_acid_for("TTT"), Some('F'));
        assert_eq!(amino_acid_for("GGG"), Some('G'));
        assert_eq!(amino_acid_for("AGC"), Some('S'));
        assert_eq!(amino_acid_for("CCT"), Some('P'));
    }

    #[test]
    fn test_total_coverage() {
        let bases = ['T', 'C', 'A', 'G'];
        let mut count = 0;
        for &b1 in &bases {
            for &b2 in &bases {
                for &b3 in &bases {
                    let codon = format!("{}{}{}", b1, b2, b3);
                    let aa = amino_acid_for(&codon);
                    assert!(aa.is_some(), "no entry for {}", codon);
                    assert!("ACDEFGHIKLMNPQRSTVWY*".contains(aa.unwrap()));
                    count += 1;
                }
            }
        }
        assert_eq!(count, 64);
    }

    #[test]
    fn test_rna_codons() {
        // U should be treated as T
        assert_eq!(amino_acid_for("AUG"), Some('M'));
        assert_eq!(amino_acid_for("UUU"), Some('F'));
    }

    #[test]
    fn test_unrecognized_codons() {
        assert_eq!(amino_acid_for("ATN"), None);
        assert_eq!(amino_acid_for("atg"), None);
        assert_eq!(amino_acid_for("AT"), None);
        assert_eq!(amino_acid_for("ATGA"), None);
        assert_eq!(amino_acid_for("---"), None);
    }

    #[test]
    fn test_sequence_translation() {
        assert_eq!(translate("ATGTTTTAG").unwrap(), "MF*");
        assert_eq!(translate("ATGGTCAGCCCT").unwrap(), "MVSP");
        assert_eq!(translate("").unwrap(), "");
    }

    #[test]
    fn test_translation_length_error() {
        assert_eq!(
            translate("ATGGT"),
            Err(OptimizeError::LengthNotMultipleOfThree { length: 5 })
        );
    }

    #[test]
    fn test_translation_invalid_codon_index() {
        assert_eq!(
            translate("ATGGTNAGC"),
            Err(OptimizeError::InvalidCodon { codon: "GTN".to_string(), index: 2 })
        );
    }
}

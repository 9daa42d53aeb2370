//! End-to-end codon optimization.
//!
//! [`optimize`] ties the pipeline together:
//! normalize → (classify) → (translate) → substitute → convert → format.
//! It fails fast on the first error and never returns partial output.

use tracing::debug;

use crate::alphabet::{classify, rna_to_dna, Alphabet};
use crate::codon_table::substitute;
use crate::error::{OptimizeError, OptimizeResult};
use crate::fasta::{format_fasta_with_width, normalize};
use crate::genetic_code::translate;
use crate::model::{Mode, OptimizeOptions, Optimized, SequenceType};

/// Optimizes raw protein or coding-sequence text.
///
/// # Errors
///
/// - [`OptimizeError::EmptySequence`] if no residues survive normalization
/// - [`OptimizeError::LengthNotMultipleOfThree`] for nucleotide input that
///   is not a whole number of codons
/// - [`OptimizeError::InvalidCodon`] for nucleotide input with a triplet
///   outside the genetic code
/// - [`OptimizeError::UnsupportedResidue`] for protein input with a residue
///   outside the preferred-codon table
///
/// # Examples
///
/// ```
/// use codonopt::alphabet::Alphabet;
/// use codonopt::model::OptimizeOptions;
/// use codonopt::optimizer::optimize;
///
/// let options = OptimizeOptions::default().with_alphabet(Alphabet::Rna);
/// let result = optimize(">toy\nMVSP\n", &options).unwrap();
/// assert_eq!(result.fasta, ">toy\nAUGGUGAGCCCG\n");
/// ```
pub fn optimize(raw: &str, options: &OptimizeOptions) -> OptimizeResult<Optimized> {
    let record = normalize(raw);
    if record.is_empty() {
        return Err(OptimizeError::EmptySequence);
    }

    let sequence_type = match options.mode {
        Mode::Auto => classify(&record.residues),
        Mode::Protein => SequenceType::Protein,
        Mode::Nucleotide => SequenceType::Nucleotide,
    };
    debug!(
        "Record '{}': {} residues read as {} (mode {:?})",
        record.name,
        record.len(),
        sequence_type,
        options.mode
    );

    let residues = match sequence_type {
        SequenceType::Protein => record.residues,
        SequenceType::Nucleotide => translate(&rna_to_dna(&record.residues))?,
    };
    let dna = substitute(&residues)?;
    let sequence = options.alphabet.convert(&dna);

    let name = match options.record_name.as_deref().map(str::trim) {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => record.name,
    };
    let fasta = format_fasta_with_width(&name, &sequence, options.line_width);

    debug!(
        "Record '{}': {} codons written as {}",
        name,
        sequence.len() / 3,
        options.alphabet
    );

    Ok(Optimized {
        name,
        sequence_type,
        residues,
        sequence,
        fasta,
    })
}

/// Optimizes raw text and returns only the FASTA block.
///
/// `record_name` overrides the header name unless it is blank.
pub fn optimize_str(
    raw: &str,
    mode: Mode,
    alphabet: Alphabet,
    record_name: &str,
) -> OptimizeResult<String> {
    let options = OptimizeOptions::default()
        .with_mode(mode)
        .with_alphabet(alphabet)
        .with_record_name(record_name);
    optimize(raw, &options).map(|result| result.fasta)
}

//! FASTA input normalization and output formatting.
//!
//! Input may be a FASTA record or bare sequence text:
//!
//! ```text
//! >record_name optional description
//! MVSPKG...
//! ...
//! ```
//!
//! Both are read the same way. Output is always a single FASTA record with
//! the sequence wrapped at a fixed width.

use crate::model::{SequenceRecord, DEFAULT_RECORD_NAME, FASTA_LINE_WIDTH};

/// Recovers a record name and cleaned residues from free-form text.
///
/// - The first `>` header line (trimmed, full text) names the record;
///   later headers are dropped. Without a usable header the name is
///   [`DEFAULT_RECORD_NAME`].
/// - All other non-blank lines are concatenated in order.
/// - Everything except letters and `*` is removed and the rest upper-cased.
///
/// Never fails: an input without residues yields an empty record, which the
/// caller decides how to treat.
///
/// # Examples
///
/// ```
/// use codonopt::fasta::normalize;
///
/// let record = normalize(">toy protein\nmv sp\r\n");
/// assert_eq!(record.name, "toy protein");
/// assert_eq!(record.residues, "MVSP");
/// ```
pub fn normalize(raw: &str) -> SequenceRecord {
    let mut name: Option<String> = None;
    let mut residues = String::with_capacity(raw.len());

    for line in raw.lines() {
        let line = line.trim();

        // Skip empty lines
        if line.is_empty() {
            continue;
        }

        if let Some(header) = line.strip_prefix('>') {
            if name.is_none() {
                name = Some(header.trim().to_string());
            }
        } else {
            residues.extend(
                line.chars()
                    .filter(|c| c.is_ascii_alphabetic() || *c == '*')
                    .map(|c| c.to_ascii_uppercase()),
            );
        }
    }

    let name = name
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| DEFAULT_RECORD_NAME.to_string());

    SequenceRecord::new(name, residues)
}

/// Formats a sequence as FASTA, wrapped at [`FASTA_LINE_WIDTH`] characters.
///
/// # Examples
///
/// ```
/// use codonopt::fasta::format_fasta;
///
/// assert_eq!(format_fasta("toy", "ATGGTGAGCCCG"), ">toy\nATGGTGAGCCCG\n");
/// ```
pub fn format_fasta(name: &str, sequence: &str) -> String {
    format_fasta_with_width(name, sequence, FASTA_LINE_WIDTH)
}

/// Formats a sequence as FASTA with a custom line width.
///
/// A width of 0 writes the whole sequence on one line. An empty sequence
/// produces just the header line.
pub fn format_fasta_with_width(name: &str, sequence: &str, width: usize) -> String {
    let mut out = String::with_capacity(name.len() + sequence.len() + sequence.len() / 60 + 4);
    out.push('>');
    out.push_str(name);
    out.push('\n');

    if sequence.is_empty() {
        return out;
    }

    if width == 0 {
        out.push_str(sequence);
        out.push('\n');
        return out;
    }

    let chars: Vec<char> = sequence.chars().collect();
    for chunk in chars.chunks(width) {
        out.extend(chunk.iter());
        out.push('\n');
    }

    out
}

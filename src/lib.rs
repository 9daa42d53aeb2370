//! # codonopt - Greedy Codon Optimization
//!
//! Turns a protein or coding sequence into a coding sequence that uses the
//! single preferred *E. coli* codon for every residue.
//!
//! ## Architecture
//!
//! Every stage is a pure function over `'static` tables, composed by the
//! optimizer:
//! - `alphabet`: amino-acid alphabet, protein/nucleotide classification, DNA/RNA conversion
//! - `genetic_code`: standard genetic code and translation
//! - `codon_table`: preferred codons and greedy substitution
//! - `fasta`: input normalization and FASTA output formatting
//! - `model`: records, modes, options and results
//! - `optimizer`: the end-to-end `optimize` entry point
//! - `error`: typed errors shared by all stages
//! - `io`: file and standard stream plumbing for the command line
//!
//! ## Example
//!
//! ```
//! use codonopt::model::OptimizeOptions;
//! use codonopt::optimizer::optimize;
//!
//! let result = optimize(">toy\nMVSP\n", &OptimizeOptions::default()).unwrap();
//! assert_eq!(result.fasta, ">toy\nATGGTGAGCCCG\n");
//! ```

pub mod alphabet;
pub mod codon_table;
pub mod error;
pub mod fasta;
pub mod genetic_code;
pub mod io;
pub mod model;
pub mod optimizer;

//! codonopt - Greedy codon optimization from the command line.
//!
//! ## Usage
//!
//! ```bash
//! codonopt protein.fasta                      # protein or RNA, auto-detected
//! codonopt -m nucleotide cds.fasta -o out.fa  # re-code an existing CDS
//! cat protein.txt | codonopt -a rna -n gfp    # RNA output, custom header
//! ```

// Use jemalloc for better memory management (returns memory to OS)
#[cfg(not(windows))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, ValueEnum};
use tracing::info;

use codonopt::alphabet::Alphabet;
use codonopt::io::{read_input, write_output};
use codonopt::model::{Mode, OptimizeOptions, FASTA_LINE_WIDTH};
use codonopt::optimizer::optimize;

/// Input interpretation for command line
#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    /// Detect protein vs nucleotide from content (plain ACGT reads as protein)
    Auto,
    /// Amino-acid sequence
    Protein,
    /// DNA or RNA coding sequence
    Nucleotide,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Auto => Mode::Auto,
            ModeArg::Protein => Mode::Protein,
            ModeArg::Nucleotide => Mode::Nucleotide,
        }
    }
}

/// Output alphabet for command line
#[derive(Debug, Clone, Copy, ValueEnum)]
enum AlphabetArg {
    /// DNA (A, C, G, T)
    Dna,
    /// RNA (A, C, G, U)
    Rna,
}

impl From<AlphabetArg> for Alphabet {
    fn from(arg: AlphabetArg) -> Self {
        match arg {
            AlphabetArg::Dna => Alphabet::Dna,
            AlphabetArg::Rna => Alphabet::Rna,
        }
    }
}

/// codonopt - Re-code a protein or coding sequence with E. coli preferred codons
///
/// Reads a FASTA record or bare sequence text and writes one FASTA record
/// using the most frequent codon for every residue.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input file (FASTA or bare sequence). Use "-" or omit for stdin.
    input: Option<PathBuf>,

    /// How to interpret the input
    #[arg(short = 'm', long = "mode", value_enum, default_value = "auto")]
    mode: ModeArg,

    /// Alphabet of the optimized sequence
    #[arg(short = 'a', long = "alphabet", value_enum, default_value = "dna")]
    alphabet: AlphabetArg,

    /// Record name for the output header (default: input header or "sequence")
    #[arg(short = 'n', long = "name")]
    name: Option<String>,

    /// Residues per FASTA line (0 = single line)
    #[arg(short = 'w', long = "width", default_value_t = FASTA_LINE_WIDTH)]
    width: usize,

    /// Output file. Use "-" for stdout.
    #[arg(short = 'o', long = "output", default_value = "-")]
    output: PathBuf,

    /// Log level or filter directive (e.g. "debug", "codonopt=trace")
    #[arg(long = "log-level", default_value = "warn")]
    log_level: String,
}

fn init_tracing(level: &str) -> Result<()> {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_new(level)
        .map_err(|e| anyhow::anyhow!("Invalid log level '{}': {}", level, e))?;

    // Logs go to stderr so stdout stays a clean FASTA stream
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    Ok(())
}

/// Runs one optimization: read input, optimize, write the FASTA record.
fn run(input: Option<&Path>, output: &Path, options: &OptimizeOptions) -> Result<()> {
    let raw = read_input(input)?;

    let optimized = optimize(&raw, options)
        .map_err(|e| anyhow::anyhow!("{}: {}", e.kind(), e))?;
    info!(
        "Optimized '{}' ({}) into {} codons",
        optimized.name,
        optimized.sequence_type,
        optimized.codon_count()
    );

    write_output(Some(output), &optimized.fasta)?;
    if output.as_os_str() != "-" {
        eprintln!(
            "Wrote {} ({} nt) to {}",
            optimized.name,
            optimized.len(),
            output.display()
        );
    }

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(&args.log_level)?;

    let mut options = OptimizeOptions::default()
        .with_mode(args.mode.into())
        .with_alphabet(args.alphabet.into())
        .with_line_width(args.width);
    if let Some(name) = args.name {
        options = options.with_record_name(name);
    }

    run(args.input.as_deref(), &args.output, &options)
}

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use mulxor::{sum_with_multiplier, Corpus, EvalConfig, Fnv32, QualityEval, SeqHash};

/// Rate candidate multiplier constants by how evenly they bucket a word
/// corpus, one `<constant> <bits> <score>` line per pair (lower is better).
/// Constant 0 is the FNV-1a baseline, always evaluated first.
#[derive(Parser)]
#[command(name = "evalqual")]
struct Cli {
    /// Newline-delimited word list.
    words_file: PathBuf,
    /// Newline-delimited list of candidate multiplier constants (u64).
    primes_file: PathBuf,
    /// Smallest truncation width to score, in bits.
    #[arg(long, default_value_t = EvalConfig::default().min_bits)]
    min_bits: u8,
    /// Largest truncation width to score, inclusive.
    #[arg(long, default_value_t = EvalConfig::default().max_bits)]
    max_bits: u8,
    /// Seed for the deterministic corpus downsampling.
    #[arg(long, default_value_t = EvalConfig::default().seed)]
    seed: u64,
}

fn read_corpus(path: &Path) -> Result<Corpus> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let corpus = Corpus::from_reader(BufReader::new(file))
        .with_context(|| format!("reading {}", path.display()))?;
    Ok(corpus)
}

fn read_primes(path: &Path) -> Result<Vec<u64>> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let mut primes = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line.with_context(|| format!("reading {}", path.display()))?;
        // The first non-numeric line stops the read loop.
        match line.trim().parse::<u64>() {
            Ok(prime) => primes.push(prime),
            Err(_) => break,
        }
    }
    Ok(primes)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let corpus = read_corpus(&cli.words_file)?;
    let primes = read_primes(&cli.primes_file)?;
    eprintln!(
        "{} words, {} candidate constants",
        corpus.len(),
        primes.len()
    );

    let config = EvalConfig {
        min_bits: cli.min_bits,
        max_bits: cli.max_bits,
        seed: cli.seed,
    };
    let mut eval = QualityEval::new(&corpus, config);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    eval.report(0, |word| u64::from(Fnv32::sum_of(word)), &mut out)?;
    for prime in primes {
        eval.report(prime, |word| sum_with_multiplier(prime, word), &mut out)?;
    }

    Ok(())
}

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use trigram_index::{CounterConfig, DEFAULT_CHUNK_SIZE, DEFAULT_TOP_K};
use trigram_text::LoadMode;
use trigram_types::TieBreak;

/// Command-line and environment configuration for one run.
#[derive(Parser, Debug, Clone)]
#[command(name = "trigrams", version)]
#[command(about = "Report the most frequent three-word sequences in a text file", long_about = None)]
pub struct Config {
    /// Text file to analyze.
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Number of triplets to report.
    #[arg(short = 'k', long = "top", env = "TRIGRAMS_TOP", default_value_t = DEFAULT_TOP_K)]
    pub top: usize,

    /// Report format.
    #[arg(short, long, env = "TRIGRAMS_FORMAT", value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// How the file is brought into memory: `mmap` or `owned`.
    #[arg(long, env = "TRIGRAMS_LOAD_MODE", value_parser = parse_load_mode, default_value = "mmap")]
    pub load_mode: LoadMode,

    /// Index nodes reserved per allocation chunk.
    #[arg(long, env = "TRIGRAMS_CHUNK_SIZE", value_parser = parse_chunk_size, default_value_t = DEFAULT_CHUNK_SIZE)]
    pub chunk_size: usize,

    /// Order among equal counts: `first-seen` or `lexicographic`.
    #[arg(long, env = "TRIGRAMS_TIE_BREAK", value_parser = parse_tie_break, default_value = "first-seen")]
    pub tie_break: TieBreak,

    /// Fingerprint seed.
    #[arg(long, env = "TRIGRAMS_SEED", default_value_t = 0)]
    pub seed: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl Config {
    pub fn counter_config(&self) -> CounterConfig {
        CounterConfig {
            chunk_size: self.chunk_size,
            seed: self.seed,
        }
    }
}

fn parse_load_mode(raw: &str) -> Result<LoadMode, String> {
    LoadMode::from_name(raw)
        .ok_or_else(|| format!("unknown load mode `{raw}` (expected mmap or owned)"))
}

fn parse_tie_break(raw: &str) -> Result<TieBreak, String> {
    TieBreak::from_name(raw)
        .ok_or_else(|| format!("unknown tie-break `{raw}` (expected first-seen or lexicographic)"))
}

fn parse_chunk_size(raw: &str) -> Result<usize, String> {
    match raw.parse::<usize>() {
        Ok(0) => Err("chunk size must be greater than zero".to_string()),
        Ok(n) => Ok(n),
        Err(err) => Err(err.to_string()),
    }
}

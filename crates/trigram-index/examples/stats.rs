use std::env;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use trigram_index::{CounterConfig, TieBreak, TripletCounter};
use trigram_text::{LoadMode, TextBuffer};

fn main() -> Result<()> {
    let path = env::args()
        .nth(1)
        .map(PathBuf::from)
        .context("usage: cargo run -p trigram-index --example stats -- <path-to-text>")?;

    let start = Instant::now();
    let mut text = TextBuffer::load(&path, LoadMode::Mmap)
        .with_context(|| format!("loading {}", path.display()))?;
    let bytes = text.len();

    let mut counter = TripletCounter::new(CounterConfig::default());
    counter
        .count_words(text.words())
        .with_context(|| format!("counting {}", path.display()))?;
    let stats = counter.stats();

    println!("File          : {}", path.display());
    println!("Bytes         : {}", bytes);
    println!("Words         : {}", stats.words);
    println!("Triplets      : {}", stats.triplets);
    println!("Distinct      : {}", stats.distinct);
    println!("Arena chunks  : {}", stats.chunks);
    println!("Collisions    : {}", stats.collisions);
    println!("Max tree depth: {}", stats.max_depth);
    println!("Elapsed       : {} ms", start.elapsed().as_millis());

    for (rank, row) in counter.top(10, TieBreak::FirstSeen).iter().enumerate() {
        println!("{:>3}. {}", rank + 1, row);
    }

    Ok(())
}

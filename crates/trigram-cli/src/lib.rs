pub mod config;
pub mod report;

use std::io::Write;
use std::time::Instant;

use anyhow::Result;
use tracing::info;
use trigram_index::TripletCounter;
use trigram_text::TextBuffer;

pub use config::{Config, OutputFormat};
pub use report::{write_json, write_text};

/// Load the input, count its triplets and write the ranking to `out`.
///
/// Nothing is written unless counting succeeds.
pub fn run(config: &Config, out: &mut impl Write) -> Result<()> {
    let start = Instant::now();
    let mut text = TextBuffer::load(&config.input, config.load_mode)?;
    info!(
        "loaded {} bytes from {} (mapped: {})",
        text.len(),
        config.input.display(),
        text.is_mapped()
    );

    let mut counter = TripletCounter::new(config.counter_config());
    counter.count_words(text.words())?;
    let top = counter.top(config.top, config.tie_break);
    let stats = counter.stats();
    info!(
        "{} words, {} triplets, {} distinct, {} chunks, {} collisions, max depth {}",
        stats.words,
        stats.triplets,
        stats.distinct,
        stats.chunks,
        stats.collisions,
        stats.max_depth
    );

    match config.format {
        OutputFormat::Text => write_text(out, &top)?,
        OutputFormat::Json => write_json(out, &stats, &top)?,
    }
    info!("done in {} ms", start.elapsed().as_millis());
    Ok(())
}

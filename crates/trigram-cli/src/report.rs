//! Report rendering: plain lines or a JSON document.

use std::io::Write;

use anyhow::Result;
use serde::Serialize;
use trigram_index::CounterStats;
use trigram_types::RankedTriplet;

#[derive(Serialize)]
struct JsonReport<'a> {
    words: u64,
    triplets: u64,
    distinct: usize,
    top: Vec<JsonRow<'a>>,
}

#[derive(Serialize)]
struct JsonRow<'a> {
    a: &'a str,
    b: &'a str,
    c: &'a str,
    count: u64,
}

/// One `<a> <b> <c> - <count>` line per entry, best first.
pub fn write_text(out: &mut impl Write, top: &[RankedTriplet<'_>]) -> Result<()> {
    for row in top {
        writeln!(out, "{row}")?;
    }
    Ok(())
}

pub fn write_json(
    out: &mut impl Write,
    stats: &CounterStats,
    top: &[RankedTriplet<'_>],
) -> Result<()> {
    let report = JsonReport {
        words: stats.words,
        triplets: stats.triplets,
        distinct: stats.distinct,
        top: top
            .iter()
            .map(|row| JsonRow {
                a: row.triplet.a,
                b: row.triplet.b,
                c: row.triplet.c,
                count: row.count,
            })
            .collect(),
    };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    Ok(())
}

//! One counting run: words in, ranked triplets out.

use std::time::Instant;

use thiserror::Error;
use tracing::info;
use trigram_types::{RankedTriplet, TieBreak, Triplet};

use crate::arena::{ArenaError, DEFAULT_CHUNK_SIZE};
use crate::hash::fingerprint;
use crate::top::select_top;
use crate::tree::TripletIndex;

#[derive(Debug, Error)]
pub enum CountError {
    #[error("too few words: need at least 3, found {words}")]
    TooFewWords { words: u64 },
    #[error("triplet index allocation failed")]
    Allocation(#[from] ArenaError),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CounterConfig {
    /// Nodes reserved per arena chunk.
    pub chunk_size: usize,
    /// Fingerprint seed; every key in one run uses the same seed.
    pub seed: u32,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            seed: 0,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct CounterStats {
    pub words: u64,
    pub triplets: u64,
    pub distinct: usize,
    pub chunks: usize,
    pub collisions: u64,
    pub max_depth: usize,
}

/// Owns the index for a single pass over a word stream.
///
/// Keys borrow their words for `'t`, usually from a loaded text buffer.
#[derive(Debug)]
pub struct TripletCounter<'t> {
    index: TripletIndex<'t>,
    seed: u32,
    words: u64,
    triplets: u64,
}

impl<'t> TripletCounter<'t> {
    pub fn new(config: CounterConfig) -> Self {
        Self {
            index: TripletIndex::with_chunk_size(config.chunk_size),
            seed: config.seed,
            words: 0,
            triplets: 0,
        }
    }

    /// Count every consecutive triple in `words`.
    ///
    /// Returns the number of triplets processed, which is the word count
    /// minus two. Fewer than three words is an error and leaves the counter
    /// untouched.
    pub fn count_words<I>(&mut self, words: I) -> Result<u64, CountError>
    where
        I: IntoIterator<Item = &'t str>,
    {
        let start = Instant::now();
        let mut words = words.into_iter();
        let Some(mut a) = words.next() else {
            return Err(CountError::TooFewWords { words: 0 });
        };
        let Some(mut b) = words.next() else {
            return Err(CountError::TooFewWords { words: 1 });
        };

        let mut seen = 2u64;
        let mut triplets = 0u64;
        for c in words {
            self.observe(Triplet::new(a, b, c))?;
            a = b;
            b = c;
            seen += 1;
            triplets += 1;
        }
        if triplets == 0 {
            return Err(CountError::TooFewWords { words: seen });
        }

        self.words += seen;
        info!(
            "counted {triplets} triplets ({} distinct) in {} ms",
            self.index.len(),
            start.elapsed().as_millis()
        );
        Ok(triplets)
    }

    /// Record one occurrence of `key` and return its new count.
    pub fn observe(&mut self, key: Triplet<'t>) -> Result<u64, ArenaError> {
        let fp = fingerprint(
            key.a.as_bytes(),
            key.b.as_bytes(),
            key.c.as_bytes(),
            self.seed,
        );
        let record = self.index.find_or_insert(key, fp)?;
        record.increment();
        self.triplets += 1;
        Ok(record.count())
    }

    /// Current count for `key`, zero if never observed.
    pub fn count_of(&self, key: &Triplet<'t>) -> u64 {
        let fp = fingerprint(
            key.a.as_bytes(),
            key.b.as_bytes(),
            key.c.as_bytes(),
            self.seed,
        );
        self.index.get(key, fp).map_or(0, |r| r.count())
    }

    pub fn top(&self, k: usize, tie_break: TieBreak) -> Vec<RankedTriplet<'t>> {
        select_top(self.index.iter(), k, tie_break)
    }

    pub fn index(&self) -> &TripletIndex<'t> {
        &self.index
    }

    pub fn stats(&self) -> CounterStats {
        CounterStats {
            words: self.words,
            triplets: self.triplets,
            distinct: self.index.len(),
            chunks: self.index.chunk_count(),
            collisions: self.index.collisions(),
            max_depth: self.index.max_depth(),
        }
    }
}

impl Default for TripletCounter<'_> {
    fn default() -> Self {
        Self::new(CounterConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(text: &str) -> Result<(TripletCounter<'_>, u64), CountError> {
        let mut counter = TripletCounter::default();
        let triplets = counter.count_words(text.split_whitespace())?;
        Ok((counter, triplets))
    }

    #[test]
    fn counts_the_sample_sentence() {
        let (counter, triplets) = run("the cat sat on the mat the cat sat").expect("count");
        assert_eq!(triplets, 7);

        let stats = counter.stats();
        assert_eq!(stats.words, 9);
        assert_eq!(stats.triplets, 7);
        assert_eq!(stats.distinct, 6);
        assert_eq!(counter.count_of(&Triplet::new("the", "cat", "sat")), 2);
        assert_eq!(counter.count_of(&Triplet::new("mat", "the", "cat")), 1);
        assert_eq!(counter.count_of(&Triplet::new("cat", "the", "sat")), 0);

        let top = counter.top(3, TieBreak::FirstSeen);
        assert_eq!(top[0].to_string(), "the cat sat - 2");
        assert_eq!(top[1].to_string(), "cat sat on - 1");
        assert_eq!(top[2].to_string(), "sat on the - 1");
    }

    #[test]
    fn triplets_are_words_minus_two() {
        for n in 3..40usize {
            let text = vec!["la"; n].join(" ");
            let (counter, triplets) = run(&text).expect("count");
            assert_eq!(triplets, n as u64 - 2);
            assert_eq!(counter.stats().distinct, 1);
            assert_eq!(counter.count_of(&Triplet::new("la", "la", "la")), n as u64 - 2);
        }
    }

    #[test]
    fn rejects_fewer_than_three_words() {
        for (text, expected) in [("", 0), ("one", 1), ("one two", 2)] {
            match run(text) {
                Err(CountError::TooFewWords { words }) => assert_eq!(words, expected),
                other => panic!("expected too-few-words for {text:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn seed_does_not_change_counts() {
        let text = "a b c a b c a b c d";
        let mut seeded = TripletCounter::new(CounterConfig {
            chunk_size: 2,
            seed: 0xdead_beef,
        });
        seeded.count_words(text.split(' ')).expect("count");
        let (plain, _) = run(text).expect("count");

        assert_eq!(
            seeded.top(4, TieBreak::FirstSeen),
            plain.top(4, TieBreak::FirstSeen)
        );
        assert_eq!(seeded.stats().chunks, 2);
    }

    #[test]
    fn allocation_failure_surfaces_as_an_error() {
        let mut counter = TripletCounter::new(CounterConfig {
            chunk_size: usize::MAX,
            seed: 0,
        });
        match counter.count_words("a b c".split(' ')) {
            Err(CountError::Allocation(ArenaError::Exhausted { .. })) => {}
            other => panic!("expected allocation failure, got {other:?}"),
        }
        assert_eq!(counter.stats().distinct, 0);
    }
}

//! Count how often each triple of consecutive words occurs and rank them.
//!
//! The pieces, leaf first:
//! - [`fingerprint`] folds three strings into an order-sensitive 32-bit hash.
//! - [`NodeArena`] hands out node slots from fixed-size chunks so inserting a
//!   new triplet does not allocate per node.
//! - [`TripletIndex`] is an unbalanced binary search tree over those nodes,
//!   ordered by fingerprint and then by the full key, so distinct triplets
//!   never share a counter even when their fingerprints collide.
//! - [`select_top`] walks the finished tree once and keeps the `k` best
//!   entries under an explicit [`TieBreak`].
//! - [`TripletCounter`] ties them together for one run over a word stream.
//!
//! ```rust
//! use trigram_index::{CounterConfig, TripletCounter};
//! use trigram_types::TieBreak;
//!
//! # fn main() -> Result<(), trigram_index::CountError> {
//! let text = "the cat sat on the mat the cat sat";
//! let mut counter = TripletCounter::new(CounterConfig::default());
//! let triplets = counter.count_words(text.split(' '))?;
//! assert_eq!(triplets, 7);
//!
//! let top = counter.top(1, TieBreak::FirstSeen);
//! assert_eq!(top[0].to_string(), "the cat sat - 2");
//! # Ok(()) }
//! ```

pub mod arena;
pub mod counter;
pub mod hash;
pub mod top;
pub mod tree;

pub use arena::{ArenaError, DEFAULT_CHUNK_SIZE, NodeArena, NodeId};
pub use counter::{CountError, CounterConfig, CounterStats, TripletCounter};
pub use hash::fingerprint;
pub use top::{DEFAULT_TOP_K, select_top};
pub use tree::{TripletIndex, TripletRecord};
pub use trigram_types::{RankedTriplet, TieBreak, Triplet};

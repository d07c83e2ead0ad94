//! Shared, zero-copy types for word-triplet frequency counting.
//!
//! A [`Triplet`] is the composite key: three consecutive words borrowed from
//! the normalized source text (`&str`), never owned copies. Ranking results
//! come back as [`RankedTriplet`] rows, whose `Display` output is the report
//! line format `<a> <b> <c> - <count>`. [`TieBreak`] decides how rows with
//! equal counts are ordered.
//!
//! ```rust
//! use trigram_types::{RankedTriplet, TieBreak, Triplet};
//!
//! let key = Triplet::new("the", "cat", "sat");
//! let row = RankedTriplet { triplet: key, count: 2, first_seen: 0 };
//! assert_eq!(row.to_string(), "the cat sat - 2");
//! assert_eq!(TieBreak::from_name("lexicographic"), Some(TieBreak::Lexicographic));
//! ```

use std::cmp::Ordering;
use std::fmt;

/// Three consecutive words, in text order.
///
/// Ordering is lexicographic on `(a, b, c)`; equality is byte equality of all
/// three parts.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Triplet<'t> {
    pub a: &'t str,
    pub b: &'t str,
    pub c: &'t str,
}

impl<'t> Triplet<'t> {
    pub fn new(a: &'t str, b: &'t str, c: &'t str) -> Self {
        Self { a, b, c }
    }
}

impl fmt::Display for Triplet<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.a, self.b, self.c)
    }
}

/// One entry of a top-k ranking.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RankedTriplet<'t> {
    pub triplet: Triplet<'t>,
    pub count: u64,
    /// Zero-based order in which the triplet was first observed.
    pub first_seen: u32,
}

impl fmt::Display for RankedTriplet<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.triplet, self.count)
    }
}

/// Ordering applied between entries whose counts are equal.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum TieBreak {
    /// The triplet observed first ranks higher.
    #[default]
    FirstSeen,
    /// The lexicographically smaller `(a, b, c)` ranks higher.
    Lexicographic,
}

impl TieBreak {
    /// Parse the names accepted on the command line (`first-seen`,
    /// `lexicographic`), ignoring ASCII case.
    pub fn from_name(raw: &str) -> Option<Self> {
        match raw.to_ascii_lowercase().as_str() {
            "first-seen" => Some(TieBreak::FirstSeen),
            "lexicographic" => Some(TieBreak::Lexicographic),
            _ => None,
        }
    }

    /// `Ordering::Less` when `lhs` ranks ahead of `rhs`.
    ///
    /// Counts are compared first (higher is better); the policy only decides
    /// between equal counts.
    pub fn compare(self, lhs: &RankedTriplet<'_>, rhs: &RankedTriplet<'_>) -> Ordering {
        rhs.count.cmp(&lhs.count).then_with(|| match self {
            TieBreak::FirstSeen => lhs.first_seen.cmp(&rhs.first_seen),
            TieBreak::Lexicographic => lhs
                .triplet
                .cmp(&rhs.triplet)
                .then_with(|| lhs.first_seen.cmp(&rhs.first_seen)),
        })
    }
}

impl fmt::Display for TieBreak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TieBreak::FirstSeen => "first-seen",
            TieBreak::Lexicographic => "lexicographic",
        })
    }
}

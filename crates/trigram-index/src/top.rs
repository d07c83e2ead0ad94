//! Bounded top-k selection over index records.

use std::cmp::Ordering;

use trigram_types::{RankedTriplet, TieBreak};

use crate::tree::TripletRecord;

pub const DEFAULT_TOP_K: usize = 3;

/// Keep the `k` best records, best first.
///
/// A single pass with a sorted buffer of at most `k` entries: each record
/// goes in front of the first entry it outranks, and the buffer's last entry
/// falls off when it overflows. Ranking is by count, then `tie_break`, which
/// makes the result independent of the order records are visited in.
pub fn select_top<'a, 't: 'a>(
    records: impl IntoIterator<Item = &'a TripletRecord<'t>>,
    k: usize,
    tie_break: TieBreak,
) -> Vec<RankedTriplet<'t>> {
    let mut top: Vec<RankedTriplet<'t>> = Vec::new();
    if k == 0 {
        return top;
    }

    for record in records {
        let candidate = RankedTriplet {
            triplet: record.key(),
            count: record.count(),
            first_seen: record.first_seen(),
        };
        let slot = top
            .iter()
            .position(|held| tie_break.compare(&candidate, held) == Ordering::Less)
            .unwrap_or(top.len());
        if slot == k {
            continue;
        }
        if top.len() == k {
            top.pop();
        }
        top.insert(slot, candidate);
    }
    top
}

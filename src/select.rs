//! Master Selector
//!
//! Decides which root holds the authoritative version of a file. A candidate
//! replaces the current master only when its modification time is strictly
//! newer, so on ties the earliest-discovered version (the lowest root index,
//! since roots are walked in order) stays master.

use crate::index::FileRecord;
use crate::types::RootIndex;

/// Outcome of offering a candidate to the selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// The candidate became master; carries the root that lost.
    Replaced { previous: RootIndex },
    /// The existing master was kept.
    Kept,
}

/// Offer `candidate` against the current master `record`, updating it in place.
pub fn offer(record: &mut FileRecord, candidate: FileRecord) -> Selection {
    if candidate.modified > record.modified {
        let previous = record.owner;
        *record = candidate;
        Selection::Replaced { previous }
    } else {
        Selection::Kept
    }
}

//! Per-applicant record of occupied time coordinates.

use std::collections::BTreeSet;

use crate::model::TimeCoordinate;

/// Tracks which time coordinates each applicant has committed to.
///
/// Applicants are addressed by their index in the run's input slice.
/// Lookups never mutate; the only writer is [`commit`](Self::commit),
/// called when a bid is admitted.
#[derive(Debug, Clone, Default)]
pub struct ConflictTracker {
    committed: Vec<BTreeSet<TimeCoordinate>>,
}

impl ConflictTracker {
    /// Creates a tracker for `applicants` applicants, all with nothing committed.
    pub fn new(applicants: usize) -> Self {
        Self {
            committed: vec![BTreeSet::new(); applicants],
        }
    }

    /// Returns `true` if `applicant` already holds a seat at `coordinate`.
    pub fn has_conflict(&self, applicant: usize, coordinate: &TimeCoordinate) -> bool {
        self.committed
            .get(applicant)
            .is_some_and(|set| set.contains(coordinate))
    }

    /// Records that `applicant` now occupies `coordinate`.
    ///
    /// Returns `false` (and changes nothing) if the coordinate was already taken.
    pub fn commit(&mut self, applicant: usize, coordinate: TimeCoordinate) -> bool {
        match self.committed.get_mut(applicant) {
            Some(set) => set.insert(coordinate),
            None => false,
        }
    }
}

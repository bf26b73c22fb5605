//! Run-scoped mutable state.
//!
//! Built fresh from the inputs at the start of every run and dropped when
//! the run returns.

use std::collections::{HashMap, HashSet};

use super::conflict::ConflictTracker;
use super::error::AllocationError;
use crate::model::{Applicant, Assignment, SlotOffering};

/// Remaining capacities, committed coordinates and held programs for one run.
///
/// Offerings are stored sorted by [`OfferingKey`](crate::model::OfferingKey),
/// so an offering index doubles as its position in the canonical
/// processing order. Program names are interned to dense ids.
pub(crate) struct AllocationState<'a> {
    applicants: &'a [Applicant],
    offerings: Vec<&'a SlotOffering>,
    remaining: Vec<u32>,
    /// Offering indices per program id, ascending.
    by_program: Vec<Vec<usize>>,
    /// Program id per offering index.
    program_of: Vec<usize>,
    /// Per applicant, per rank: program id, or `None` for unknown names.
    preferences: Vec<Vec<Option<usize>>>,
    /// Program ids held per applicant.
    held_programs: Vec<HashSet<usize>>,
    held_counts: Vec<usize>,
    conflicts: ConflictTracker,
}

impl<'a> AllocationState<'a> {
    pub(crate) fn new(
        applicants: &'a [Applicant],
        offerings: &'a [SlotOffering],
    ) -> Result<Self, AllocationError> {
        if applicants.is_empty() {
            return Err(AllocationError::NoApplicants);
        }
        if offerings.is_empty() {
            return Err(AllocationError::NoOfferings);
        }

        let mut ids = HashSet::with_capacity(applicants.len());
        for applicant in applicants {
            if !ids.insert(applicant.id.as_str()) {
                return Err(AllocationError::DuplicateApplicant(applicant.id.clone()));
            }
        }

        let mut sorted: Vec<&SlotOffering> = offerings.iter().collect();
        sorted.sort_by_key(|o| o.key());
        for pair in sorted.windows(2) {
            if pair[0].key() == pair[1].key() {
                return Err(AllocationError::DuplicateOffering(pair[1].key()));
            }
        }

        let mut program_ids: HashMap<&str, usize> = HashMap::new();
        let mut by_program: Vec<Vec<usize>> = Vec::new();
        let mut program_of = Vec::with_capacity(sorted.len());
        for (index, &offering) in sorted.iter().enumerate() {
            let next_id = program_ids.len();
            let id = *program_ids.entry(offering.program.as_str()).or_insert(next_id);
            if id == by_program.len() {
                by_program.push(Vec::new());
            }
            by_program[id].push(index);
            program_of.push(id);
        }

        let preferences = applicants
            .iter()
            .map(|a| {
                a.preferences
                    .iter()
                    .map(|p| program_ids.get(p.as_str()).copied())
                    .collect()
            })
            .collect();

        Ok(Self {
            applicants,
            remaining: sorted.iter().map(|o| o.capacity).collect(),
            offerings: sorted,
            by_program,
            program_of,
            preferences,
            held_programs: vec![HashSet::new(); applicants.len()],
            held_counts: vec![0; applicants.len()],
            conflicts: ConflictTracker::new(applicants.len()),
        })
    }

    pub(crate) fn applicant_count(&self) -> usize {
        self.applicants.len()
    }

    /// Longest preference list across all applicants.
    pub(crate) fn max_rank(&self) -> usize {
        self.preferences.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Program id ranked at `rank` (0-based) by `applicant`, if it names a
    /// known program.
    pub(crate) fn preference(&self, applicant: usize, rank: usize) -> Option<usize> {
        self.preferences[applicant].get(rank).copied().flatten()
    }

    pub(crate) fn holds_program(&self, applicant: usize, program: usize) -> bool {
        self.held_programs[applicant].contains(&program)
    }

    pub(crate) fn held_counts(&self) -> &[usize] {
        &self.held_counts
    }

    pub(crate) fn remaining(&self, offering: usize) -> u32 {
        self.remaining[offering]
    }

    /// Offerings of `program` with a free seat and no time clash for
    /// `applicant`, in canonical order.
    pub(crate) fn candidates(&self, applicant: usize, program: usize) -> Vec<usize> {
        self.by_program[program]
            .iter()
            .copied()
            .filter(|&o| {
                self.remaining[o] > 0
                    && !self
                        .conflicts
                        .has_conflict(applicant, &self.offerings[o].coordinate())
            })
            .collect()
    }

    /// Grants `applicant` a seat in `offering`.
    ///
    /// Returns `None` without touching any state if the offering is full
    /// or the seat would clash with one the applicant already holds.
    pub(crate) fn admit(
        &mut self,
        applicant: usize,
        offering: usize,
        round: usize,
        pass: usize,
    ) -> Option<Assignment> {
        let slot = self.offerings[offering];
        if self.remaining[offering] == 0 {
            return None;
        }
        if !self.conflicts.commit(applicant, slot.coordinate()) {
            return None;
        }
        self.remaining[offering] -= 1;
        self.held_counts[applicant] += 1;
        self.held_programs[applicant].insert(self.program_of[offering]);

        Some(Assignment {
            applicant_id: self.applicants[applicant].id.clone(),
            program: slot.program.clone(),
            day: slot.day.clone(),
            time_slot: slot.time_slot,
            round,
            pass,
        })
    }

    pub(crate) fn offering(&self, offering: usize) -> &SlotOffering {
        self.offerings[offering]
    }
}

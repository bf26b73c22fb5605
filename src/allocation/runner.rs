//! Allocation execution engine.
//!
//! # Algorithm
//!
//! 1. Let `R` be the longest preference list.
//! 2. For each rank `k` in `1..=R`:
//!    a. Every applicant below the per-applicant bound whose rank-`k`
//!       program it does not already hold bids on one offering of that
//!       program, drawn uniformly from those with a free seat and no
//!       time clash.
//!    b. Offerings are visited in key order. An oversubscribed offering
//!       admits bidders in lottery order (fewest seats held first, random
//!       within ties); otherwise every bidder is admitted.
//! 3. Repeat the full rank scan while the previous pass granted anything.
//!
//! Each non-final pass grants at least one seat and seats are finite, so
//! the loop runs at most `sum(capacity) + 1` times.

use std::collections::BTreeMap;

use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, trace};

use super::config::AllocationConfig;
use super::error::AllocationError;
use super::lottery::rank_bidders;
use super::state::AllocationState;
use crate::model::{Applicant, Assignment, SlotOffering};

/// Result of an allocation run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AllocationResult {
    /// Granted seats, in the order they were granted.
    pub assignments: Vec<Assignment>,
    /// Rank-scan passes executed, including the final pass that granted nothing.
    pub passes: usize,
    /// Seed the run was driven by. Replaying with it reproduces `assignments`.
    pub seed: u64,
}

impl AllocationResult {
    /// Assignments held by `applicant_id`, in grant order.
    pub fn for_applicant<'a>(
        &'a self,
        applicant_id: &'a str,
    ) -> impl Iterator<Item = &'a Assignment> + 'a {
        self.assignments
            .iter()
            .filter(move |a| a.applicant_id == applicant_id)
    }
}

/// Allocation runner.
pub struct AllocationRunner;

impl AllocationRunner {
    /// Allocates `offerings` to `applicants`.
    ///
    /// # Errors
    ///
    /// Returns [`AllocationError`] if the configuration is invalid, either
    /// list is empty, or an applicant id or offering key repeats. Nothing
    /// is allocated in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_allot::allocation::{AllocationConfig, AllocationRunner};
    /// use u_allot::model::{Applicant, SlotOffering};
    ///
    /// let offerings = vec![SlotOffering::new("Art", 2, "Mon", 1)];
    /// let applicants = vec![
    ///     Applicant::new("Alice", ["Art"]),
    ///     Applicant::new("Bob", ["Art"]),
    /// ];
    /// let config = AllocationConfig::default().with_seed(42);
    ///
    /// let result = AllocationRunner::run(&applicants, &offerings, &config).unwrap();
    /// assert_eq!(result.assignments.len(), 2);
    /// ```
    pub fn run(
        applicants: &[Applicant],
        offerings: &[SlotOffering],
        config: &AllocationConfig,
    ) -> Result<AllocationResult, AllocationError> {
        config.validate()?;
        let mut state = AllocationState::new(applicants, offerings)?;

        let seed = config.seed.unwrap_or_else(rand::random);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let max_rank = state.max_rank();
        let mut assignments = Vec::new();
        let mut passes = 0;

        loop {
            passes += 1;
            let before = assignments.len();

            for rank in 0..max_rank {
                run_rank(
                    &mut state,
                    rank,
                    passes,
                    config.max_per_applicant,
                    &mut rng,
                    &mut assignments,
                );
            }

            let granted = assignments.len() - before;
            debug!(pass = passes, granted, "allocation pass finished");
            if granted == 0 {
                break;
            }
        }

        debug!(
            seed,
            passes,
            applicants = state.applicant_count(),
            offerings = offerings.len(),
            assignments = assignments.len(),
            "allocation finished"
        );

        Ok(AllocationResult {
            assignments,
            passes,
            seed,
        })
    }
}

/// Allocates `offerings` to `applicants` and returns the granted seats.
///
/// Shorthand for [`AllocationRunner::run`] when pass count and seed are
/// not needed.
pub fn allocate(
    applicants: &[Applicant],
    offerings: &[SlotOffering],
    config: &AllocationConfig,
) -> Result<Vec<Assignment>, AllocationError> {
    AllocationRunner::run(applicants, offerings, config).map(|r| r.assignments)
}

/// Collects one bid per eligible applicant for `rank`, then resolves them
/// offering by offering.
fn run_rank<R: Rng>(
    state: &mut AllocationState<'_>,
    rank: usize,
    pass: usize,
    max_per_applicant: usize,
    rng: &mut R,
    assignments: &mut Vec<Assignment>,
) {
    // offering index -> bidders in applicant order
    let mut bids: BTreeMap<usize, Vec<usize>> = BTreeMap::new();

    for applicant in 0..state.applicant_count() {
        if state.held_counts()[applicant] >= max_per_applicant {
            continue;
        }
        let Some(program) = state.preference(applicant, rank) else {
            continue;
        };
        if state.holds_program(applicant, program) {
            continue;
        }
        let candidates = state.candidates(applicant, program);
        if let Some(&offering) = candidates.choose(rng) {
            bids.entry(offering).or_default().push(applicant);
        }
    }

    for (offering, bidders) in bids {
        let seats = state.remaining(offering) as usize;
        let admitted = if bidders.len() > seats {
            let mut order = rank_bidders(&bidders, state.held_counts(), rng);
            trace!(
                offering = %state.offering(offering).key(),
                bidders = bidders.len(),
                seats,
                "lottery"
            );
            order.truncate(seats);
            order
        } else {
            bidders
        };

        for applicant in admitted {
            if let Some(assignment) = state.admit(applicant, offering, rank + 1, pass) {
                assignments.push(assignment);
            }
        }
    }
}

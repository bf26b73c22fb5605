//! Round-based lottery allocation.
//!
//! Applicants are matched to time-slotted offerings one preference rank at
//! a time. Each rank, every eligible applicant bids on one non-conflicting
//! instance of the program it ranked there; oversubscribed offerings are
//! resolved by a seeded lottery that favours applicants holding the fewest
//! seats so far. Whole passes over the ranks repeat until a pass grants
//! nothing (fixpoint).
//!
//! # Determinism
//!
//! A run draws from a single `ChaCha8Rng` seeded from
//! [`AllocationConfig::seed`]. Draws happen in a fixed order: candidate
//! choices during the rank scan (applicants in input order), then
//! lotteries per offering in ascending [`OfferingKey`](crate::model::OfferingKey)
//! order. Identical inputs and seed always give identical assignments.

mod config;
mod conflict;
mod error;
mod lottery;
mod runner;
mod state;

pub use config::AllocationConfig;
pub use conflict::ConflictTracker;
pub use error::AllocationError;
pub use lottery::rank_bidders;
pub use runner::{allocate, AllocationResult, AllocationRunner};

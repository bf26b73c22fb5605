//! Lottery allocation of ranked applicants to time-slotted offerings.
//!
//! Given applicants with ranked program preferences and offerings that
//! each run a program at one `(day, time_slot)` with limited seats, the
//! engine hands out seats so that:
//!
//! - no offering exceeds its capacity,
//! - no applicant exceeds the configured per-applicant bound,
//! - no applicant holds two seats at the same time coordinate,
//! - every seat matches a program the applicant asked for.
//!
//! Oversubscription is settled by a seeded lottery that favours applicants
//! holding fewer seats, so results are reproducible from the seed.
//!
//! # Modules
//!
//! - **`model`**: input and output records.
//! - **`allocation`**: the round-based lottery engine.
//! - **`roster`**: CSV loading and name normalization for engine input.
//! - **`report`**: per-applicant rows, fill rates, English / Traditional
//!   Chinese labels and CSV export.
//!
//! # Example
//!
//! ```
//! use u_allot::allocation::{allocate, AllocationConfig};
//! use u_allot::model::{Applicant, SlotOffering};
//!
//! let offerings = vec![
//!     SlotOffering::new("Art", 1, "Mon", 1),
//!     SlotOffering::new("Choir", 5, "Tue", 2),
//! ];
//! let applicants = vec![
//!     Applicant::new("Alice", ["Art", "Choir"]),
//!     Applicant::new("Bob", ["Art", "Choir"]),
//! ];
//! let config = AllocationConfig::default()
//!     .with_max_per_applicant(2)
//!     .with_seed(42);
//!
//! let assignments = allocate(&applicants, &offerings, &config).unwrap();
//! assert_eq!(assignments.iter().filter(|a| a.program == "Art").count(), 1);
//! assert_eq!(assignments.iter().filter(|a| a.program == "Choir").count(), 2);
//! ```

pub mod allocation;
pub mod model;
pub mod report;
pub mod roster;

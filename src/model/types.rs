//! Applicant, offering and assignment records.

use std::fmt;

/// A `(day, time_slot)` pair. Two offerings held by the same applicant
/// must never share one.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeCoordinate {
    /// Day label, e.g. `"Mon"`.
    pub day: String,
    /// Time-slot index within the day.
    pub time_slot: u32,
}

impl TimeCoordinate {
    pub fn new(day: impl Into<String>, time_slot: u32) -> Self {
        Self {
            day: day.into(),
            time_slot,
        }
    }
}

impl fmt::Display for TimeCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} slot {}", self.day, self.time_slot)
    }
}

/// Identity of a [`SlotOffering`].
///
/// The derived ordering (program, then day, then slot) is the canonical
/// processing order of the engine.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OfferingKey {
    pub program: String,
    pub day: String,
    pub time_slot: u32,
}

impl OfferingKey {
    pub fn new(program: impl Into<String>, day: impl Into<String>, time_slot: u32) -> Self {
        Self {
            program: program.into(),
            day: day.into(),
            time_slot,
        }
    }
}

impl fmt::Display for OfferingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} slot {})", self.program, self.day, self.time_slot)
    }
}

/// An entity to be matched, with a ranked preference list.
///
/// `preferences[0]` is the most preferred program name. Names that match
/// no offering are allowed and simply never satisfied.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Applicant {
    pub id: String,
    pub preferences: Vec<String>,
}

impl Applicant {
    pub fn new<I, S>(id: impl Into<String>, preferences: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            preferences: preferences.into_iter().map(Into::into).collect(),
        }
    }
}

/// One concrete, capacity-bounded `(program, day, time_slot)` instance.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlotOffering {
    pub program: String,
    pub day: String,
    pub time_slot: u32,
    /// Seats available. Zero is legal and admits nobody.
    pub capacity: u32,
}

impl SlotOffering {
    pub fn new(
        program: impl Into<String>,
        capacity: u32,
        day: impl Into<String>,
        time_slot: u32,
    ) -> Self {
        Self {
            program: program.into(),
            day: day.into(),
            time_slot,
            capacity,
        }
    }

    pub fn key(&self) -> OfferingKey {
        OfferingKey::new(self.program.clone(), self.day.clone(), self.time_slot)
    }

    pub fn coordinate(&self) -> TimeCoordinate {
        TimeCoordinate::new(self.day.clone(), self.time_slot)
    }
}

/// A seat granted to an applicant by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Assignment {
    pub applicant_id: String,
    pub program: String,
    pub day: String,
    pub time_slot: u32,
    /// 1-based preference rank that this assignment satisfied.
    pub round: usize,
    /// 1-based fixpoint pass in which it was granted.
    pub pass: usize,
}

impl Assignment {
    pub fn key(&self) -> OfferingKey {
        OfferingKey::new(self.program.clone(), self.day.clone(), self.time_slot)
    }

    pub fn coordinate(&self) -> TimeCoordinate {
        TimeCoordinate::new(self.day.clone(), self.time_slot)
    }
}

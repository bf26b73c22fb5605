//! Per-applicant and per-offering views of an allocation.

use std::collections::HashMap;

use crate::model::{Applicant, Assignment, OfferingKey, SlotOffering};

/// One applicant and the seats they received, ordered by round.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ApplicantRow {
    pub applicant_id: String,
    pub assignments: Vec<Assignment>,
}

/// How full one offering ended up.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OfferingFill {
    pub key: OfferingKey,
    pub assigned: u32,
    pub capacity: u32,
}

impl OfferingFill {
    /// `assigned / capacity`, or `None` for a zero-capacity offering.
    pub fn fill_rate(&self) -> Option<f64> {
        (self.capacity > 0).then(|| f64::from(self.assigned) / f64::from(self.capacity))
    }
}

/// Presentation-ready summary of one allocation run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AllocationReport {
    /// Every applicant in input order, including those left empty-handed.
    pub applicants: Vec<ApplicantRow>,
    /// Every offering in key order.
    pub offerings: Vec<OfferingFill>,
}

impl AllocationReport {
    pub fn build(
        applicants: &[Applicant],
        offerings: &[SlotOffering],
        assignments: &[Assignment],
    ) -> Self {
        let mut held: HashMap<&str, Vec<Assignment>> = HashMap::new();
        let mut taken: HashMap<OfferingKey, u32> = HashMap::new();
        for assignment in assignments {
            held.entry(assignment.applicant_id.as_str())
                .or_default()
                .push(assignment.clone());
            *taken.entry(assignment.key()).or_insert(0) += 1;
        }

        let applicants = applicants
            .iter()
            .map(|a| {
                let mut rows = held.remove(a.id.as_str()).unwrap_or_default();
                rows.sort_by_key(|r| r.round);
                ApplicantRow {
                    applicant_id: a.id.clone(),
                    assignments: rows,
                }
            })
            .collect();

        let mut offerings: Vec<OfferingFill> = offerings
            .iter()
            .map(|o| {
                let key = o.key();
                OfferingFill {
                    assigned: taken.get(&key).copied().unwrap_or(0),
                    capacity: o.capacity,
                    key,
                }
            })
            .collect();
        offerings.sort_by(|a, b| a.key.cmp(&b.key));

        Self {
            applicants,
            offerings,
        }
    }

    pub fn total_assigned(&self) -> usize {
        self.applicants.iter().map(|r| r.assignments.len()).sum()
    }

    pub fn total_capacity(&self) -> u64 {
        self.offerings.iter().map(|o| u64::from(o.capacity)).sum()
    }

    /// Applicants that received nothing, in input order.
    pub fn unassigned(&self) -> impl Iterator<Item = &str> {
        self.applicants
            .iter()
            .filter(|r| r.assignments.is_empty())
            .map(|r| r.applicant_id.as_str())
    }

    /// Seats filled across all offerings, or `None` if there were no seats.
    pub fn overall_fill_rate(&self) -> Option<f64> {
        let capacity = self.total_capacity();
        (capacity > 0).then(|| self.total_assigned() as f64 / capacity as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assignment(
        applicant: &str,
        program: &str,
        day: &str,
        slot: u32,
        round: usize,
    ) -> Assignment {
        Assignment {
            applicant_id: applicant.into(),
            program: program.into(),
            day: day.into(),
            time_slot: slot,
            round,
            pass: 1,
        }
    }

    fn fixture() -> AllocationReport {
        let applicants = vec![
            Applicant::new("Alice", ["Art", "Choir"]),
            Applicant::new("Bob", ["Art"]),
            Applicant::new("Carol", ["Dance"]),
        ];
        let offerings = vec![
            SlotOffering::new("Choir", 4, "Tue", 1),
            SlotOffering::new("Art", 2, "Mon", 1),
            SlotOffering::new("Dance", 0, "Wed", 1),
        ];
        let assignments = vec![
            assignment("Alice", "Choir", "Tue", 1, 2),
            assignment("Alice", "Art", "Mon", 1, 1),
            assignment("Bob", "Art", "Mon", 1, 1),
        ];
        AllocationReport::build(&applicants, &offerings, &assignments)
    }

    #[test]
    fn test_rows_in_input_order_sorted_by_round() {
        let report = fixture();
        let ids: Vec<_> = report.applicants.iter().map(|r| r.applicant_id.as_str()).collect();
        assert_eq!(ids, vec!["Alice", "Bob", "Carol"]);

        let alice: Vec<_> = report.applicants[0]
            .assignments
            .iter()
            .map(|a| a.program.as_str())
            .collect();
        assert_eq!(alice, vec!["Art", "Choir"]);
    }

    #[test]
    fn test_fill_rates() {
        let report = fixture();
        let keys: Vec<_> = report.offerings.iter().map(|o| o.key.program.as_str()).collect();
        assert_eq!(keys, vec!["Art", "Choir", "Dance"]);

        assert_eq!(report.offerings[0].assigned, 2);
        assert_eq!(report.offerings[0].fill_rate(), Some(1.0));
        assert_eq!(report.offerings[1].fill_rate(), Some(0.25));
        assert_eq!(report.offerings[2].fill_rate(), None);
    }

    #[test]
    fn test_totals() {
        let report = fixture();
        assert_eq!(report.total_assigned(), 3);
        assert_eq!(report.total_capacity(), 6);
        assert_eq!(report.overall_fill_rate(), Some(0.5));
        assert_eq!(report.unassigned().collect::<Vec<_>>(), vec!["Carol"]);
    }
}

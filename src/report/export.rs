//! CSV export.

use std::io::Write;

use csv::Writer;
use thiserror::Error;

use super::labels::SlotLabels;
use super::summary::AllocationReport;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Writes one row per applicant: `Applicant,AssignedPrograms`, with the
/// programs rendered by `labels` and joined by `", "`.
///
/// Applicants without any seat get an empty second column.
pub fn write_summary_csv<W: Write>(
    writer: W,
    report: &AllocationReport,
    labels: &SlotLabels,
) -> Result<(), ReportError> {
    let mut out = Writer::from_writer(writer);
    out.write_record(["Applicant", "AssignedPrograms"])?;
    for row in &report.applicants {
        let programs: Vec<String> = row.assignments.iter().map(|a| labels.describe(a)).collect();
        out.write_record([row.applicant_id.as_str(), programs.join(", ").as_str()])?;
    }
    out.flush()?;
    Ok(())
}

/// Writes one structured row per assignment:
/// `applicant_id,program,day,time_slot,round,pass`.
pub fn write_assignments_csv<W: Write>(
    writer: W,
    report: &AllocationReport,
) -> Result<(), ReportError> {
    let mut out = Writer::from_writer(writer);
    out.write_record(["applicant_id", "program", "day", "time_slot", "round", "pass"])?;
    for row in &report.applicants {
        for a in &row.assignments {
            out.write_record([
                a.applicant_id.clone(),
                a.program.clone(),
                a.day.clone(),
                a.time_slot.to_string(),
                a.round.to_string(),
                a.pass.to_string(),
            ])?;
        }
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Applicant, Assignment, SlotOffering};

    fn report() -> AllocationReport {
        let applicants = vec![
            Applicant::new("Alice", ["Art", "Choir"]),
            Applicant::new("Bob", ["Art"]),
        ];
        let offerings = vec![
            SlotOffering::new("Art", 1, "Mon", 1),
            SlotOffering::new("Choir", 1, "Tue", 2),
        ];
        let assignments = vec![
            Assignment {
                applicant_id: "Alice".into(),
                program: "Art".into(),
                day: "Mon".into(),
                time_slot: 1,
                round: 1,
                pass: 1,
            },
            Assignment {
                applicant_id: "Alice".into(),
                program: "Choir".into(),
                day: "Tue".into(),
                time_slot: 2,
                round: 2,
                pass: 1,
            },
        ];
        AllocationReport::build(&applicants, &offerings, &assignments)
    }

    #[test]
    fn test_summary_csv() {
        let mut buf = Vec::new();
        write_summary_csv(&mut buf, &report(), &SlotLabels::empty()).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(
            text,
            "Applicant,AssignedPrograms\n\
             Alice,\"Art (Mon slot 1), Choir (Tue slot 2)\"\n\
             Bob,\n"
        );
    }

    #[test]
    fn test_assignments_csv() {
        let mut buf = Vec::new();
        write_assignments_csv(&mut buf, &report()).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(
            text,
            "applicant_id,program,day,time_slot,round,pass\n\
             Alice,Art,Mon,1,1,1\n\
             Alice,Choir,Tue,2,2,1\n"
        );
    }
}

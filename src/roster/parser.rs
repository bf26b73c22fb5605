//! Programs and applicants CSV readers.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{debug, warn};

use super::error::RosterError;
use super::normalize::{header_key, normalize_name};
use crate::model::{Applicant, OfferingKey, SlotOffering};

const PROGRAM: &str = "ProgramName";
const CAPACITY: &str = "Capacity";
const DAY: &str = "Day";
const TIME_SLOT: &str = "TimeSlot";

fn csv_reader<R: Read>(reader: R) -> csv::Reader<R> {
    ReaderBuilder::new()
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader)
}

fn column(headers: &StringRecord, name: &'static str) -> Result<usize, RosterError> {
    let wanted = header_key(name);
    headers
        .iter()
        .position(|h| header_key(h) == wanted)
        .ok_or(RosterError::MissingColumn(name))
}

fn is_blank(record: &StringRecord) -> bool {
    record.iter().all(|cell| normalize_name(cell).is_empty())
}

fn text(
    record: &StringRecord,
    index: usize,
    row: usize,
    name: &'static str,
) -> Result<String, RosterError> {
    let value = normalize_name(record.get(index).unwrap_or(""));
    if value.is_empty() {
        return Err(RosterError::MissingValue { row, column: name });
    }
    Ok(value)
}

/// Parses a non-negative whole number. Spreadsheet exports often write
/// integers as `3.0`, which is accepted.
fn whole_number(
    record: &StringRecord,
    index: usize,
    row: usize,
    name: &'static str,
) -> Result<u32, RosterError> {
    let raw = text(record, index, row, name)?;
    let not_a_number = || RosterError::NotANumber {
        row,
        column: name,
        value: raw.clone(),
    };

    let value = match raw.parse::<i64>() {
        Ok(v) => v,
        Err(_) => {
            let f = raw.parse::<f64>().map_err(|_| not_a_number())?;
            if !f.is_finite() || f.fract() != 0.0 || f.abs() > i64::MAX as f64 {
                return Err(not_a_number());
            }
            f as i64
        }
    };

    if value < 0 {
        return Err(RosterError::NegativeNumber {
            row,
            column: name,
            value,
        });
    }
    u32::try_from(value).map_err(|_| RosterError::OutOfRange {
        row,
        column: name,
        value,
    })
}

/// Reads slot offerings from programs CSV.
///
/// A later row with the same program, day and time slot replaces the
/// earlier one.
pub fn read_offerings<R: Read>(reader: R) -> Result<Vec<SlotOffering>, RosterError> {
    let mut reader = csv_reader(reader);
    let headers = reader.headers()?.clone();

    let program_col = column(&headers, PROGRAM)?;
    let capacity_col = column(&headers, CAPACITY)?;
    let day_col = column(&headers, DAY)?;
    let slot_col = column(&headers, TIME_SLOT)?;

    let mut offerings: Vec<SlotOffering> = Vec::new();
    let mut seen: HashMap<OfferingKey, usize> = HashMap::new();

    for (index, result) in reader.records().enumerate() {
        let record = result?;
        let row = index + 1;
        if is_blank(&record) {
            continue;
        }

        let offering = SlotOffering {
            program: text(&record, program_col, row, PROGRAM)?,
            capacity: whole_number(&record, capacity_col, row, CAPACITY)?,
            day: text(&record, day_col, row, DAY)?,
            time_slot: whole_number(&record, slot_col, row, TIME_SLOT)?,
        };

        match seen.get(&offering.key()) {
            Some(&existing) => {
                warn!(row, offering = %offering.key(), "duplicate offering replaces earlier row");
                offerings[existing] = offering;
            }
            None => {
                seen.insert(offering.key(), offerings.len());
                offerings.push(offering);
            }
        }
    }

    debug!(count = offerings.len(), "offerings loaded");
    Ok(offerings)
}

/// Reads applicants and their ranked preferences.
///
/// A later row for an already seen applicant replaces the earlier one's
/// preferences and keeps its position.
pub fn read_applicants<R: Read>(reader: R) -> Result<Vec<Applicant>, RosterError> {
    let mut reader = csv_reader(reader);

    let mut applicants: Vec<Applicant> = Vec::new();
    let mut seen: HashMap<String, usize> = HashMap::new();

    for (index, result) in reader.records().enumerate() {
        let record = result?;
        let row = index + 1;
        if is_blank(&record) {
            continue;
        }

        let id = normalize_name(record.get(0).unwrap_or(""));
        if id.is_empty() {
            return Err(RosterError::MissingApplicantName { row });
        }
        let preferences: Vec<String> = record
            .iter()
            .skip(1)
            .map(normalize_name)
            .filter(|p| !p.is_empty())
            .collect();

        match seen.get(&id) {
            Some(&existing) => {
                warn!(row, applicant = %id, "duplicate applicant replaces earlier row");
                applicants[existing].preferences = preferences;
            }
            None => {
                seen.insert(id.clone(), applicants.len());
                applicants.push(Applicant { id, preferences });
            }
        }
    }

    debug!(count = applicants.len(), "applicants loaded");
    Ok(applicants)
}

/// Reads slot offerings from a programs CSV file.
pub fn load_offerings<P: AsRef<Path>>(path: P) -> Result<Vec<SlotOffering>, RosterError> {
    let file = File::open(path).map_err(csv::Error::from)?;
    read_offerings(file)
}

/// Reads applicants from a preferences CSV file.
pub fn load_applicants<P: AsRef<Path>>(path: P) -> Result<Vec<Applicant>, RosterError> {
    let file = File::open(path).map_err(csv::Error::from)?;
    read_applicants(file)
}

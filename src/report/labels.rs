//! Display labels for time slots and programs.

use std::collections::BTreeMap;
use std::collections::HashMap;

use crate::model::Assignment;

/// Maps time-slot indices to clock-time labels.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlotLabels {
    labels: BTreeMap<u32, String>,
}

impl Default for SlotLabels {
    /// The school timetable the tool was first used with.
    fn default() -> Self {
        Self::empty()
            .with_label(1, "12:50-2:20")
            .with_label(2, "2:20-3:50")
            .with_label(3, "Undefined")
    }
}

impl SlotLabels {
    /// A mapping with no labels.
    pub fn empty() -> Self {
        Self {
            labels: BTreeMap::new(),
        }
    }

    pub fn with_label(mut self, time_slot: u32, label: impl Into<String>) -> Self {
        self.labels.insert(time_slot, label.into());
        self
    }

    pub fn get(&self, time_slot: u32) -> Option<&str> {
        self.labels.get(&time_slot).map(String::as_str)
    }

    /// Labels in ascending slot order, for a reference legend.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &str)> {
        self.labels.iter().map(|(&slot, label)| (slot, label.as_str()))
    }

    /// Formats an assignment as `Program (Day slot N)`, appending the
    /// clock time when one is known: `Art (Mon slot 1, 12:50-2:20)`.
    pub fn describe(&self, assignment: &Assignment) -> String {
        match self.get(assignment.time_slot) {
            Some(time) => format!(
                "{} ({} slot {}, {})",
                assignment.program, assignment.day, assignment.time_slot, time
            ),
            None => format!(
                "{} ({} slot {})",
                assignment.program, assignment.day, assignment.time_slot
            ),
        }
    }
}

const PALETTE: [&str; 10] = [
    "#FF9999", "#99FF99", "#9999FF", "#FFD699", "#FF99FF", "#99FFFF", "#FFCC99", "#CCFF99",
    "#99CCFF", "#FF6666",
];

const FALLBACK: &str = "#CCCCCC";

/// Stable background colors for program names.
///
/// Colors are handed out in first-seen order and wrap after ten programs.
#[derive(Debug, Clone, Default)]
pub struct ProgramPalette {
    colors: HashMap<String, &'static str>,
}

impl ProgramPalette {
    pub fn new<I, S>(programs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut colors = HashMap::new();
        for program in programs {
            let next = PALETTE[colors.len() % PALETTE.len()];
            colors.entry(program.into()).or_insert(next);
        }
        Self { colors }
    }

    /// Hex color for `program`, grey if the program was never registered.
    pub fn color(&self, program: &str) -> &'static str {
        self.colors.get(program).copied().unwrap_or(FALLBACK)
    }

    /// Color for `program` as an RGB triple.
    pub fn rgb(&self, program: &str) -> (u8, u8, u8) {
        hex_rgb(self.color(program)).unwrap_or((0xCC, 0xCC, 0xCC))
    }

    /// Wraps `text` in 24-bit ANSI escapes: `program`'s color as the
    /// background, black foreground.
    pub fn paint(&self, program: &str, text: &str) -> String {
        let (r, g, b) = self.rgb(program);
        format!("\x1b[48;2;{r};{g};{b}m\x1b[30m{text}\x1b[0m")
    }
}

fn hex_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 {
        return None;
    }
    let channel = |at: usize| u8::from_str_radix(digits.get(at..at + 2)?, 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

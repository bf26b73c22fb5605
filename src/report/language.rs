//! User-facing label sets.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Display language for report headings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Language {
    #[default]
    English,
    TraditionalChinese,
}

/// Every label a report front end needs, in one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiText {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub programs_format: &'static str,
    pub applicants_format: &'static str,
    pub max_programs: &'static str,
    pub time_slots: &'static str,
    pub programs: &'static str,
    pub assignments: &'static str,
    pub seed: &'static str,
    pub fill_rates: &'static str,
    pub download: &'static str,
    /// Placeholder for an applicant with nothing assigned.
    pub none: &'static str,
}

const ENGLISH: UiText = UiText {
    title: "Extracurricular Program Assignment",
    subtitle: "Assign kids to programs based on preferences, capacities, and time slots",
    programs_format: "CSV format: ProgramName, Capacity, Day, TimeSlot(1,2,3)",
    applicants_format: "CSV format: KidName, Preference1, Preference2, Preference3...",
    max_programs: "Max Programs per Kid",
    time_slots: "Time Slots Reference",
    programs: "Programs",
    assignments: "Assignments",
    seed: "seed",
    fill_rates: "Fill Rates",
    download: "Download Assignments CSV",
    none: "-",
};

const TRADITIONAL_CHINESE: UiText = UiText {
    title: "課外活動分配系統",
    subtitle: "根據偏好、名額與時段分配孩子到活動",
    programs_format: "CSV 格式: ProgramName, Capacity, Day, TimeSlot(1,2,3)",
    applicants_format: "CSV 格式: KidName, Preference1, Preference2, Preference3...",
    max_programs: "每位學生最多可分配活動數",
    time_slots: "時段對照表",
    programs: "活動",
    assignments: "分配結果",
    seed: "亂數種子",
    fill_rates: "名額使用率",
    download: "下載分配結果 CSV",
    none: "無",
};

impl Language {
    pub const ALL: [Language; 2] = [Language::English, Language::TraditionalChinese];

    pub fn text(self) -> &'static UiText {
        match self {
            Language::English => &ENGLISH,
            Language::TraditionalChinese => &TRADITIONAL_CHINESE,
        }
    }

    /// One-line run summary: seats filled, overall fill rate, applicants
    /// left without a program.
    pub fn totals(
        self,
        assigned: usize,
        capacity: u64,
        fill_rate: Option<f64>,
        unassigned: usize,
    ) -> String {
        let rate = fill_rate.map_or_else(|| "-".to_string(), |r| format!("{:.0}%", r * 100.0));
        match self {
            Language::English => format!(
                "{assigned} of {capacity} seats filled ({rate}); \
                 {unassigned} applicant(s) without a program"
            ),
            Language::TraditionalChinese => format!(
                "已分配 {assigned} / {capacity} 個名額 ({rate});{unassigned} 位學生未獲分配"
            ),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Language::English => "English",
            Language::TraditionalChinese => "繁體中文",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown language '{0}' (expected en or zh-tw)")]
pub struct UnknownLanguage(pub String);

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Language::English),
            "zh-tw" | "zh-hant" | "zh_tw" | "繁體中文" => Ok(Language::TraditionalChinese),
            _ => Err(UnknownLanguage(trimmed.to_string())),
        }
    }
}

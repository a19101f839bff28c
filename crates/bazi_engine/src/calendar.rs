//! Lunar calendar collaborator.
//!
//! Solar-to-lunar conversion is outside this workspace; the resolver only
//! needs the four labels a lunar calendar library reports for a date.
//! [`FixedCalendar`] serves those labels from a table, which is what the CLI
//! and the end-to-end tests run against.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use bazi_base::{BaziError, ConfigError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// What the calendar reports for one Gregorian date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LunarDay {
    /// Sexagenary name of the day, e.g. "Giáp Tý".
    pub day_name: String,
    /// Sexagenary name of the lunar year containing the date.
    pub year_name: String,
    /// Label of the solar term in force on the date.
    pub solar_term: String,
    /// Lunar month number, 1..=12.
    pub lunar_month: u8,
}

/// Source of lunar-day labels.
pub trait LunarCalendar {
    fn lunar_day(&self, date: NaiveDate) -> Result<LunarDay, BaziError>;
}

#[derive(Debug, Deserialize)]
struct CalendarFile {
    #[serde(default)]
    day: Vec<DayEntry>,
}

#[derive(Debug, Deserialize)]
struct DayEntry {
    date: NaiveDate,
    day_name: String,
    year_name: String,
    solar_term: String,
    lunar_month: u8,
}

/// Table-backed calendar keyed by Gregorian date.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixedCalendar {
    days: BTreeMap<NaiveDate, LunarDay>,
}

impl FixedCalendar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the entry for `date`.
    pub fn insert(&mut self, date: NaiveDate, day: LunarDay) {
        self.days.insert(date, day);
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Parse a table of `[[day]]` entries.
    ///
    /// ```toml
    /// [[day]]
    /// date = "2000-01-01"
    /// day_name = "Mậu Ngọ"
    /// year_name = "Kỷ Mão"
    /// solar_term = "Đông chí"
    /// lunar_month = 11
    /// ```
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let file: CalendarFile = toml::from_str(text)?;
        let days = file
            .day
            .into_iter()
            .map(|e| {
                let day = LunarDay {
                    day_name: e.day_name,
                    year_name: e.year_name,
                    solar_term: e.solar_term,
                    lunar_month: e.lunar_month,
                };
                (e.date, day)
            })
            .collect();
        Ok(Self { days })
    }

    /// Load a calendar table from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}

impl LunarCalendar for FixedCalendar {
    fn lunar_day(&self, date: NaiveDate) -> Result<LunarDay, BaziError> {
        self.days
            .get(&date)
            .cloned()
            .ok_or_else(|| BaziError::Calendar(format!("no lunar data for {date}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &str = r#"
[[day]]
date = "2000-01-01"
day_name = "Mậu Ngọ"
year_name = "Kỷ Mão"
solar_term = "Đông chí"
lunar_month = 11

[[day]]
date = "2000-01-02"
day_name = "Kỷ Mùi"
year_name = "Kỷ Mão"
solar_term = "Đông chí"
lunar_month = 11
"#;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn loads_day_entries() {
        let cal = FixedCalendar::from_toml_str(TABLE).unwrap();
        assert_eq!(cal.len(), 2);
        let day = cal.lunar_day(date(2000, 1, 2)).unwrap();
        assert_eq!(day.day_name, "Kỷ Mùi");
        assert_eq!(day.lunar_month, 11);
    }

    #[test]
    fn missing_date_is_calendar_error() {
        let cal = FixedCalendar::from_toml_str(TABLE).unwrap();
        let err = cal.lunar_day(date(2000, 1, 3)).unwrap_err();
        assert!(matches!(err, BaziError::Calendar(msg) if msg.contains("2000-01-03")));
    }

    #[test]
    fn empty_table_is_valid() {
        let cal = FixedCalendar::from_toml_str("").unwrap();
        assert!(cal.is_empty());
    }

    #[test]
    fn malformed_date_is_rejected() {
        let text = TABLE.replace("2000-01-02", "2000-13-02");
        assert!(matches!(FixedCalendar::from_toml_str(&text), Err(ConfigError::Toml(_))));
    }

    #[test]
    fn insert_replaces_entry() {
        let mut cal = FixedCalendar::new();
        let day = LunarDay {
            day_name: "Giáp Tý".into(),
            year_name: "Giáp Thìn".into(),
            solar_term: "Lập xuân".into(),
            lunar_month: 1,
        };
        cal.insert(date(2024, 2, 10), day.clone());
        cal.insert(date(2024, 2, 10), day);
        assert_eq!(cal.len(), 1);
        assert!(cal.lunar_day(date(2024, 2, 10)).is_ok());
    }
}

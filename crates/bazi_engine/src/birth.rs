//! Birth input and its validation.

use bazi_base::BaziError;
use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// Earliest birth year the calendar tables are expected to cover.
pub const MIN_BIRTH_YEAR: i32 = 1900;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

/// A local-time birth moment.
///
/// `longitude` and `timezone_offset` are carried through to the report but
/// do not take part in pillar arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BirthInput {
    pub gender: Gender,
    pub birth_year: i32,
    pub birth_month: u32,
    pub birth_day: u32,
    pub birth_hour: u8,
    pub birth_minute: u8,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub timezone_offset: Option<f64>,
}

impl BirthInput {
    /// Birth input with no location data.
    pub fn new(gender: Gender, year: i32, month: u32, day: u32, hour: u8, minute: u8) -> Self {
        Self {
            gender,
            birth_year: year,
            birth_month: month,
            birth_day: day,
            birth_hour: hour,
            birth_minute: minute,
            longitude: None,
            timezone_offset: None,
        }
    }

    /// Check ranges against the current local year and return the
    /// Gregorian birth date.
    pub fn validate(&self) -> Result<NaiveDate, BaziError> {
        self.validate_until(Local::now().year())
    }

    /// Check ranges with `latest_year` as the last accepted birth year.
    pub fn validate_until(&self, latest_year: i32) -> Result<NaiveDate, BaziError> {
        if self.birth_year < MIN_BIRTH_YEAR {
            return Err(BaziError::InvalidInput("birth year must be 1900 or later"));
        }
        if self.birth_year > latest_year {
            return Err(BaziError::InvalidInput("birth year is in the future"));
        }
        let date = NaiveDate::from_ymd_opt(self.birth_year, self.birth_month, self.birth_day)
            .ok_or(BaziError::InvalidInput("birth date is not a calendar date"))?;
        if self.birth_hour > 23 {
            return Err(BaziError::InvalidInput("birth hour must be in 0..=23"));
        }
        if self.birth_minute > 59 {
            return Err(BaziError::InvalidInput("birth minute must be in 0..=59"));
        }
        if let Some(lon) = self.longitude {
            if !(-180.0..=180.0).contains(&lon) {
                return Err(BaziError::InvalidInput("longitude must be in [-180, 180]"));
            }
        }
        if let Some(tz) = self.timezone_offset {
            if !(-12.0..=14.0).contains(&tz) {
                return Err(BaziError::InvalidInput("timezone offset must be in [-12, 14]"));
            }
        }
        Ok(date)
    }

    /// True when the hour falls in the late Zi hour that belongs to the
    /// following day.
    pub const fn is_night_zi(&self) -> bool {
        self.birth_hour >= 23
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> BirthInput {
        BirthInput::new(Gender::Female, 1990, 5, 15, 14, 30)
    }

    #[test]
    fn valid_input_yields_date() {
        assert_eq!(input().validate(), Ok(NaiveDate::from_ymd_opt(1990, 5, 15).unwrap()));
    }

    #[test]
    fn rejects_out_of_range_fields() {
        let mut i = input();
        i.birth_year = 1899;
        assert!(matches!(i.validate(), Err(BaziError::InvalidInput(_))));

        let mut i = input();
        i.birth_year = 3000;
        assert_eq!(i.validate(), Err(BaziError::InvalidInput("birth year is in the future")));

        let mut i = input();
        i.birth_month = 2;
        i.birth_day = 30;
        assert!(matches!(i.validate(), Err(BaziError::InvalidInput(_))));

        let mut i = input();
        i.birth_hour = 24;
        assert!(matches!(i.validate(), Err(BaziError::InvalidInput(_))));

        let mut i = input();
        i.birth_minute = 60;
        assert!(matches!(i.validate(), Err(BaziError::InvalidInput(_))));

        let mut i = input();
        i.longitude = Some(181.0);
        assert!(matches!(i.validate(), Err(BaziError::InvalidInput(_))));

        let mut i = input();
        i.timezone_offset = Some(-12.5);
        assert!(matches!(i.validate(), Err(BaziError::InvalidInput(_))));
    }

    #[test]
    fn latest_year_is_inclusive() {
        let i = BirthInput::new(Gender::Male, 2020, 12, 31, 23, 59);
        assert!(i.validate_until(2020).is_ok());
        assert!(matches!(i.validate_until(2019), Err(BaziError::InvalidInput(_))));

        let this_year = BirthInput::new(Gender::Male, Local::now().year(), 1, 1, 0, 0);
        assert!(this_year.validate().is_ok());
    }

    #[test]
    fn leap_day_is_accepted() {
        let i = BirthInput::new(Gender::Male, 2000, 2, 29, 0, 0);
        assert!(i.validate().is_ok());
    }

    #[test]
    fn gender_serializes_lowercase() {
        let json = serde_json::to_string(&Gender::Female).unwrap();
        assert_eq!(json, "\"female\"");
        let i: BirthInput = serde_json::from_str(
            r#"{"gender":"male","birth_year":2000,"birth_month":1,"birth_day":1,
                "birth_hour":23,"birth_minute":0}"#,
        )
        .unwrap();
        assert!(i.is_night_zi());
        assert_eq!(i.longitude, None);
    }
}

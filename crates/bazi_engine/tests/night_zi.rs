//! Late Zi hour regression: births from 23:00 belong to the next day.

use std::path::PathBuf;

use bazi_base::{AnalysisConfig, EarthlyBranch};
use bazi_engine::{BirthInput, FixedCalendar, Gender, calculate_bazi, resolve_chart};

fn calendar() -> FixedCalendar {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/calendar.toml");
    FixedCalendar::load(path).expect("calendar fixture loads")
}

#[test]
fn hour_23_and_next_morning_share_day_pillar() {
    let cal = calendar();
    let late = resolve_chart(&cal, &BirthInput::new(Gender::Male, 2000, 1, 1, 23, 0)).unwrap();
    let early = resolve_chart(&cal, &BirthInput::new(Gender::Male, 2000, 1, 2, 1, 0)).unwrap();
    assert_eq!(late.day(), early.day());
    assert_eq!(late.day().to_string(), "Kỷ Mùi");
    assert_eq!(late.hour().branch, EarthlyBranch::Zi);
    assert_eq!(early.hour().branch, EarthlyBranch::Chou);
    assert_eq!(late.year(), early.year());
    assert_eq!(late.month(), early.month());
}

#[test]
fn hour_22_keeps_civil_day() {
    let cal = calendar();
    let chart = resolve_chart(&cal, &BirthInput::new(Gender::Male, 2000, 1, 1, 22, 59)).unwrap();
    assert_eq!(chart.day().to_string(), "Mậu Ngọ");
    assert_eq!(chart.hour().branch, EarthlyBranch::Hai);
}

#[test]
fn midnight_and_late_zi_share_hour_pillar() {
    let cal = calendar();
    let late = resolve_chart(&cal, &BirthInput::new(Gender::Female, 2000, 1, 1, 23, 30)).unwrap();
    let midnight =
        resolve_chart(&cal, &BirthInput::new(Gender::Female, 2000, 1, 2, 0, 30)).unwrap();
    assert_eq!(late.hour(), midnight.hour());
}

#[test]
fn year_end_rollover_crosses_into_new_year() {
    let cal = calendar();
    let input = BirthInput::new(Gender::Female, 1999, 12, 31, 23, 45);
    let report = calculate_bazi(&cal, &input, &AnalysisConfig::default()).unwrap();
    // Day from 2000-01-01, Year and Month from the civil date.
    assert_eq!(report.chart.day().to_string(), "Mậu Ngọ");
    assert_eq!(report.chart.year().to_string(), "Kỷ Mão");
    assert_eq!(report.chart.month().to_string(), "Bính Tý");
    assert_eq!(report.chart.hour().to_string(), "Nhâm Tý");
}

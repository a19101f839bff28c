//! Property tests over birth times on a two-day calendar.

use bazi_base::{AnalysisConfig, hour_branch};
use bazi_engine::{BirthInput, FixedCalendar, Gender, LunarDay, calculate_bazi, resolve_chart};
use chrono::NaiveDate;
use proptest::prelude::*;

fn calendar() -> FixedCalendar {
    let mut cal = FixedCalendar::new();
    for (day, name) in [(1, "Mậu Ngọ"), (2, "Kỷ Mùi")] {
        cal.insert(
            NaiveDate::from_ymd_opt(2000, 1, day).unwrap(),
            LunarDay {
                day_name: name.into(),
                year_name: "Kỷ Mão".into(),
                solar_term: "Đông chí".into(),
                lunar_month: 11,
            },
        );
    }
    cal
}

fn arb_gender() -> impl Strategy<Value = Gender> {
    prop_oneof![Just(Gender::Male), Just(Gender::Female)]
}

proptest! {
    #[test]
    fn every_time_of_day_resolves(hour in 0u8..24, minute in 0u8..60, gender in arb_gender()) {
        let input = BirthInput::new(gender, 2000, 1, 1, hour, minute);
        let chart = resolve_chart(&calendar(), &input).unwrap();
        prop_assert_eq!(chart.hour().branch, hour_branch(hour));
        for p in chart.pillars {
            prop_assert!(p.stem.index() < 10 && p.branch.index() < 12);
            prop_assert_eq!(p.stem.polarity(), p.branch.polarity());
        }
        let expected_day = if hour >= 23 { "Kỷ Mùi" } else { "Mậu Ngọ" };
        prop_assert_eq!(chart.day().to_string(), expected_day);
    }

    #[test]
    fn late_zi_matches_next_midnight(m1 in 0u8..60, m2 in 0u8..60) {
        let cal = calendar();
        let late = resolve_chart(&cal, &BirthInput::new(Gender::Male, 2000, 1, 1, 23, m1));
        let next = resolve_chart(&cal, &BirthInput::new(Gender::Male, 2000, 1, 2, 0, m2));
        prop_assert_eq!(late.unwrap(), next.unwrap());
    }

    #[test]
    fn report_serializes_identically(hour in 0u8..23, gender in arb_gender()) {
        let cal = calendar();
        let cfg = AnalysisConfig::default();
        let input = BirthInput::new(gender, 2000, 1, 2, hour, 0);
        let a = serde_json::to_string(&calculate_bazi(&cal, &input, &cfg).unwrap()).unwrap();
        let b = serde_json::to_string(&calculate_bazi(&cal, &input, &cfg).unwrap()).unwrap();
        prop_assert_eq!(a, b);
    }
}

//! Birth input to chart resolution.

use bazi_base::{
    BaziChart, BaziError, SolarTerm, hour_pillar, month_pillar, parse_sexagenary,
    spring_adjusted_year,
};
use tracing::debug;

use crate::birth::BirthInput;
use crate::calendar::LunarCalendar;

/// Resolve the four pillars of a birth moment.
///
/// Births from 23:00 take the Day pillar of the following date; the Year and
/// Month pillars always come from the civil birth date. The calendar is
/// queried once, or twice when the late Zi hour moves the day.
pub fn resolve_chart<C>(calendar: &C, input: &BirthInput) -> Result<BaziChart, BaziError>
where
    C: LunarCalendar + ?Sized,
{
    let date = input.validate()?;
    let lunar = calendar.lunar_day(date)?;

    let day_name = if input.is_night_zi() {
        let next = date
            .succ_opt()
            .ok_or(BaziError::InvalidInput("birth date has no following day"))?;
        calendar.lunar_day(next)?.day_name
    } else {
        lunar.day_name.clone()
    };

    let day = parse_sexagenary(&day_name)?;
    let hour = hour_pillar(input.birth_hour, day.stem);

    let term = SolarTerm::from_name(&lunar.solar_term)?;
    let lunar_year = parse_sexagenary(&lunar.year_name)?;
    let year = spring_adjusted_year(lunar_year, lunar.lunar_month, term);
    let month = month_pillar(year.stem, term);

    let chart = BaziChart::new(year, month, day, hour);
    debug!(
        %date,
        night_zi = input.is_night_zi(),
        term = term.english_name(),
        chart = %chart,
        "chart resolved"
    );
    Ok(chart)
}

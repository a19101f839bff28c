//! End-to-end Four Pillars calculation.
//!
//! This crate provides:
//! - [`BirthInput`] with range validation
//! - The [`LunarCalendar`] collaborator trait and the table-backed
//!   [`FixedCalendar`]
//! - [`resolve_chart`], which turns a birth moment into a [`BaziChart`]
//! - [`calculate_bazi`], which resolves and analyzes in one call

pub mod birth;
pub mod calendar;
pub mod resolver;

use bazi_base::{
    AnalysisConfig, AnalysisResult, BaziChart, BaziError, PillarDetail, ShenShaEntry,
    analyze_chart, calculate_shen_sha, pillar_details,
};
use serde::Serialize;
use tracing::debug;

pub use birth::{BirthInput, Gender, MIN_BIRTH_YEAR};
pub use calendar::{FixedCalendar, LunarCalendar, LunarDay};
pub use resolver::resolve_chart;

/// Everything computed for one birth moment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BaziReport {
    pub input: BirthInput,
    pub chart: BaziChart,
    pub pillars: Vec<PillarDetail>,
    pub shen_sha: Vec<ShenShaEntry>,
    pub analysis: AnalysisResult,
}

/// Resolve the chart for `input` and run the full analysis on it.
pub fn calculate_bazi<C>(
    calendar: &C,
    input: &BirthInput,
    config: &AnalysisConfig,
) -> Result<BaziReport, BaziError>
where
    C: LunarCalendar + ?Sized,
{
    let chart = resolve_chart(calendar, input)?;
    let shen_sha = calculate_shen_sha(&chart);
    let analysis = analyze_chart(&chart, config);
    debug!(markers = shen_sha.len(), "report assembled");
    Ok(BaziReport {
        input: *input,
        chart,
        pillars: pillar_details(&chart),
        shen_sha,
        analysis,
    })
}

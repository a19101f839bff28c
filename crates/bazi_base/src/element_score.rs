//! Weighted per-element strength of a chart.
//!
//! Each pillar contributes once through its stem and once through its
//! branch. A branch absorbed into a formed combination contributes a
//! transformation bonus to the combination element instead of its hidden
//! stems. Every contribution is recorded as a [`ScoreDetail`], so the
//! per-element totals can be audited line by line.

use serde::Serialize;
use tracing::trace;

use crate::branch::EarthlyBranch;
use crate::config::ScoringConfig;
use crate::element::{ElementScores, FiveElement};
use crate::interaction::{CombinationKind, Interactions};
use crate::pillar::{ALL_POSITIONS, BaziChart, PillarPosition};
use crate::stem::HeavenlyStem;

/// Where a contribution came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ScoreSource {
    Stem {
        pillar: PillarPosition,
        stem: HeavenlyStem,
    },
    HiddenStem {
        pillar: PillarPosition,
        branch: EarthlyBranch,
        stem: HeavenlyStem,
    },
    Transformation {
        pillar: PillarPosition,
        branch: EarthlyBranch,
        kind: CombinationKind,
    },
}

/// One audited contribution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreDetail {
    pub source: ScoreSource,
    pub element: FiveElement,
    pub contribution: f64,
    pub notes: String,
}

/// Element scores plus the ordered list of contributions behind them.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ElementScoreTable {
    pub scores: ElementScores,
    pub details: Vec<ScoreDetail>,
}

impl ElementScoreTable {
    fn push(
        &mut self,
        source: ScoreSource,
        element: FiveElement,
        contribution: f64,
        notes: String,
    ) {
        trace!(?source, ?element, contribution, %notes, "score contribution");
        self.scores.add(element, contribution);
        self.details.push(ScoreDetail {
            source,
            element,
            contribution,
            notes,
        });
    }

    /// Sum of recorded contributions for one element.
    pub fn detail_sum(&self, element: FiveElement) -> f64 {
        self.details
            .iter()
            .filter(|d| d.element == element)
            .map(|d| d.contribution)
            .sum()
    }
}

/// Multiplier for a stem sitting on a branch of element `branch`.
pub fn stem_relation_factor(
    stem: FiveElement,
    branch: FiveElement,
    config: &ScoringConfig,
) -> (f64, &'static str) {
    if branch.controls() == stem {
        (config.rootless_factor, "rootless: branch controls stem")
    } else if stem.controls() == branch {
        (config.stem_controls_branch_factor, "stem controls branch")
    } else if branch.produces() == stem {
        (config.branch_produces_stem_factor, "branch produces stem")
    } else {
        (1.0, "")
    }
}

/// Score every element of the chart.
pub fn score_elements(
    chart: &BaziChart,
    interactions: &Interactions,
    config: &ScoringConfig,
) -> ElementScoreTable {
    let mut table = ElementScoreTable::default();

    for position in ALL_POSITIONS {
        let i = position.index();
        let pillar = chart.pillar(position);
        let stem_element = pillar.stem.element();

        // Stem
        let (factor, relation) =
            stem_relation_factor(stem_element, pillar.branch.element(), config);
        let stem_score = config.stem_base * config.stem_position_weights[i] * factor;
        table.push(
            ScoreSource::Stem {
                pillar: position,
                stem: pillar.stem,
            },
            stem_element,
            stem_score,
            relation.to_string(),
        );

        // Branch
        let clashed = interactions.is_clashed(i);
        let mut weight = config.branch_position_weights[i];
        if clashed {
            weight *= config.clash_factor;
        }
        let clash_note = if clashed { "clashed" } else { "" };

        match interactions.combination {
            Some(c) if interactions.is_combined(i) => {
                let bonus = match c.kind {
                    CombinationKind::Seasonal => config.seasonal_bonus,
                    CombinationKind::Harmony => config.harmony_bonus,
                };
                let label = match c.kind {
                    CombinationKind::Seasonal => "seasonal combination",
                    CombinationKind::Harmony => "harmony combination",
                };
                let notes = if clashed {
                    format!("{label}, {clash_note}")
                } else {
                    label.to_string()
                };
                table.push(
                    ScoreSource::Transformation {
                        pillar: position,
                        branch: pillar.branch,
                        kind: c.kind,
                    },
                    c.element,
                    bonus * weight,
                    notes,
                );
            }
            _ => {
                for hidden in pillar.branch.hidden_stems() {
                    table.push(
                        ScoreSource::HiddenStem {
                            pillar: position,
                            branch: pillar.branch,
                            stem: hidden.stem,
                        },
                        hidden.stem.element(),
                        hidden.weight * weight,
                        clash_note.to_string(),
                    );
                }
            }
        }
    }

    table
}

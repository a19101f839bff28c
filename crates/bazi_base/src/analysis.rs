//! Full strength and favorability analysis of a resolved chart.

use serde::Serialize;
use tracing::debug;

use crate::config::AnalysisConfig;
use crate::element::{ElementScores, FiveElement};
use crate::element_score::{ScoreDetail, score_elements};
use crate::favorable::{FavorableSet, select_favorable};
use crate::interaction::{Interactions, evaluate_interactions};
use crate::life_stage::LifeStage;
use crate::pillar::{ALL_POSITIONS, BaziChart, Pillar, PillarPosition};
use crate::stem::HeavenlyStem;
use crate::structure::{DayMasterStatus, StructureName, StructureType, classify_structure};
use crate::ten_god::{TenGod, TenGodScores};

/// Result of analyzing one chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub day_master_status: DayMasterStatus,
    pub structure_type: StructureType,
    pub structure_name: StructureName,
    pub reason: String,
    /// Element the analysis is centred on (the transform element for a
    /// Transformation structure).
    pub self_element: FiveElement,
    pub favorable_elements: FavorableSet,
    /// Per-element limit score derived from `favorable_elements`.
    pub limit_scores: ElementScores,
    pub element_scores: ElementScores,
    pub ten_god_scores: TenGodScores,
    pub interactions: Interactions,
    pub score_details: Vec<ScoreDetail>,
    pub party_score: f64,
    pub enemy_score: f64,
    pub percentage_self: f64,
}

/// Run interactions, scoring, classification and favorable selection.
pub fn analyze_chart(chart: &BaziChart, config: &AnalysisConfig) -> AnalysisResult {
    let interactions = evaluate_interactions(chart);
    let table = score_elements(chart, &interactions, &config.scoring);
    let verdict = classify_structure(chart, &interactions, &table.scores, &config.structure);
    let favorable = select_favorable(&verdict, chart, &config.favorable);

    debug!(
        chart = %chart,
        structure = verdict.name.name(),
        status = ?verdict.status,
        percentage_self = verdict.percentage_self,
        "chart classified"
    );

    AnalysisResult {
        day_master_status: verdict.status,
        structure_type: verdict.structure_type,
        structure_name: verdict.name,
        reason: verdict.reason,
        self_element: verdict.self_element,
        limit_scores: favorable.limit_scores(),
        favorable_elements: favorable,
        element_scores: table.scores,
        ten_god_scores: verdict.ten_gods,
        interactions,
        score_details: table.details,
        party_score: verdict.party,
        enemy_score: verdict.enemy,
        percentage_self: verdict.percentage_self,
    }
}

/// A hidden stem seen from the Day Master.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HiddenStemDetail {
    pub stem: HeavenlyStem,
    pub weight: f64,
    pub element: FiveElement,
    pub ten_god: TenGod,
}

/// Display-oriented breakdown of one pillar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PillarDetail {
    pub position: PillarPosition,
    pub pillar: Pillar,
    pub name: String,
    pub stem_element: FiveElement,
    pub branch_element: FiveElement,
    /// `None` on the Day pillar, whose stem is the Day Master itself.
    pub stem_ten_god: Option<TenGod>,
    pub hidden_stems: Vec<HiddenStemDetail>,
    /// Stage of the Day Master in this pillar's branch.
    pub life_stage: LifeStage,
}

/// Break every pillar down relative to the Day Master.
pub fn pillar_details(chart: &BaziChart) -> Vec<PillarDetail> {
    let dm = chart.day_master();
    ALL_POSITIONS
        .iter()
        .map(|&position| {
            let pillar = chart.pillar(position);
            let is_day = position == PillarPosition::Day;
            PillarDetail {
                position,
                pillar,
                name: pillar.to_string(),
                stem_element: pillar.stem.element(),
                branch_element: pillar.branch.element(),
                stem_ten_god: (!is_day).then(|| TenGod::of(dm, pillar.stem)),
                hidden_stems: pillar
                    .branch
                    .hidden_stems()
                    .iter()
                    .map(|h| HiddenStemDetail {
                        stem: h.stem,
                        weight: h.weight,
                        element: h.stem.element(),
                        ten_god: TenGod::of(dm, h.stem),
                    })
                    .collect(),
                life_stage: LifeStage::of(dm, pillar.branch),
            }
        })
        .collect()
}

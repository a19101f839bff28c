//! Four Pillars (Bazi) tables and chart analysis.
//!
//! This crate provides:
//! - Closed enumerations for stems, branches, elements and solar terms
//! - Hour/Month pillar arithmetic and sexagenary name parsing
//! - Branch interactions, Shen Sha markers and weighted element scoring
//! - Structure classification and favorable element selection
//!
//! Everything here is a pure function of a resolved [`BaziChart`]; the
//! calendar lookup that produces the chart lives in `bazi_engine`.

pub mod analysis;
pub mod branch;
pub mod config;
pub mod element;
pub mod element_score;
pub mod error;
pub mod favorable;
pub mod interaction;
pub mod life_stage;
pub mod pillar;
pub mod shen_sha;
pub mod solar_term;
pub mod stem;
pub mod structure;
pub mod ten_god;

pub use analysis::{AnalysisResult, HiddenStemDetail, PillarDetail, analyze_chart, pillar_details};
pub use branch::{ALL_BRANCHES, EarthlyBranch, HiddenStem};
pub use config::{AnalysisConfig, FavorableThresholds, ScoringConfig, StructureThresholds};
pub use element::{ALL_ELEMENTS, ElementScores, FiveElement};
pub use element_score::{ElementScoreTable, ScoreDetail, ScoreSource, score_elements};
pub use error::{BaziError, ConfigError};
pub use favorable::{
    Favorability, FavorableSeed, FavorableSet, select_favorable, select_regular_seed,
};
pub use interaction::{
    BranchCombination, CombinationKind, Interactions, PairInteraction, evaluate_interactions,
};
pub use life_stage::LifeStage;
pub use pillar::{
    ALL_POSITIONS, BaziChart, Pillar, PillarPosition, VOID_BRANCHES, hour_branch, hour_pillar,
    month_pillar, parse_sexagenary, spring_adjusted_year,
};
pub use shen_sha::{ShenSha, ShenShaEntry, calculate_shen_sha};
pub use solar_term::{ALL_SOLAR_TERMS, SolarTerm};
pub use stem::{ALL_STEMS, HeavenlyStem, Polarity};
pub use structure::{
    DayMasterStatus, StructureName, StructureType, StructureVerdict, classify_structure,
};
pub use ten_god::{TenGod, TenGodCategory, TenGodScores};

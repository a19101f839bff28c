//! Tunable weights and thresholds for the analysis.
//!
//! Defaults reproduce the reference model. Every section can be partially
//! overridden from TOML; missing keys keep their default.
//!
//! ```toml
//! [scoring]
//! clash_factor = 0.6
//!
//! [structure]
//! strong_out_of_season = 50.0
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Weights used by the element scorer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Base score of a stem before weighting.
    pub stem_base: f64,
    /// Stem weight by position (Year, Month, Day, Hour).
    pub stem_position_weights: [f64; 4],
    /// Branch weight by position. The Month branch holds the month command.
    pub branch_position_weights: [f64; 4],
    /// Branch controls stem.
    pub rootless_factor: f64,
    /// Stem controls branch.
    pub stem_controls_branch_factor: f64,
    /// Branch produces stem.
    pub branch_produces_stem_factor: f64,
    /// Applied to the branch weight of a clashed pillar.
    pub clash_factor: f64,
    pub seasonal_bonus: f64,
    pub harmony_bonus: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            stem_base: 5.0,
            stem_position_weights: [0.6, 1.2, 1.2, 1.2],
            branch_position_weights: [0.5, 3.0, 1.5, 0.8],
            rootless_factor: 0.6,
            stem_controls_branch_factor: 0.8,
            branch_produces_stem_factor: 1.3,
            clash_factor: 0.5,
            seasonal_bonus: 12.0,
            harmony_bonus: 10.0,
        }
    }
}

/// Thresholds used by the structure classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StructureThresholds {
    /// Dominant needs party / total above this.
    pub dominant_party_ratio: f64,
    /// Dominant needs at least this many stems supporting the Day Master.
    pub dominant_min_stems: usize,
    pub dominant_max_wealth: f64,
    pub dominant_max_authority: f64,
    /// Earth Dominant becomes "Giá Sắc" with this many storehouse branches.
    pub storehouse_min_branches: usize,
    /// Transformation fails once the controller of the new element reaches this.
    pub transform_controller_max: f64,
    /// Following needs party / total below this.
    pub following_party_ratio: f64,
    /// The followed category must exceed this share of the total.
    pub follow_ratio: f64,
    /// Strong threshold (percent) when the Day Master gets the season.
    pub strong_in_season: f64,
    /// Strong threshold (percent) when the season is lost.
    pub strong_out_of_season: f64,
}

impl Default for StructureThresholds {
    fn default() -> Self {
        Self {
            dominant_party_ratio: 0.8,
            dominant_min_stems: 3,
            dominant_max_wealth: 5.0,
            dominant_max_authority: 5.0,
            storehouse_min_branches: 3,
            transform_controller_max: 15.0,
            following_party_ratio: 0.15,
            follow_ratio: 0.5,
            strong_in_season: 40.0,
            strong_out_of_season: 55.0,
        }
    }
}

/// Thresholds used when choosing favorable elements for a regular chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FavorableThresholds {
    pub strong_resource: f64,
    pub strong_peer: f64,
    pub weak_wealth: f64,
    /// Peer and Wealth closer than this are mediated by Output.
    pub mediation_gap: f64,
    /// Both Peer and Wealth must exceed this for mediation.
    pub mediation_floor: f64,
    /// Add warming or cooling elements for winter and summer births.
    pub climate_adjustment: bool,
}

impl Default for FavorableThresholds {
    fn default() -> Self {
        Self {
            strong_resource: 30.0,
            strong_peer: 30.0,
            weak_wealth: 30.0,
            mediation_gap: 15.0,
            mediation_floor: 25.0,
            climate_adjustment: true,
        }
    }
}

/// Complete analysis configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub scoring: ScoringConfig,
    pub structure: StructureThresholds,
    pub favorable: FavorableThresholds,
}

impl AnalysisConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}

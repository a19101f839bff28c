//! Structure classification (Cách Cục) and Day Master strength.
//!
//! Special structures are tried first, in order Dominant, Transformation,
//! Following; the first one whose conditions hold wins. Anything else is a
//! Regular structure, judged Strong or Weak by the share of support the
//! Day Master receives.

use serde::{Serialize, Serializer};

use crate::branch::EarthlyBranch;
use crate::config::StructureThresholds;
use crate::element::{ElementScores, FiveElement};
use crate::favorable::FavorableSeed;
use crate::interaction::Interactions;
use crate::pillar::BaziChart;
use crate::ten_god::{TenGodCategory, TenGodScores};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StructureType {
    Dominant,
    Transformation,
    Following,
    Regular,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DayMasterStatus {
    Strong,
    Weak,
    Transformed,
}

/// Named structure. Serializes as its Vietnamese name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructureName {
    /// Wood dominant.
    CurvedStraight,
    /// Fire dominant.
    FlamingUp,
    /// Earth dominant on the storehouses.
    Sowing,
    /// Earth dominant otherwise.
    FollowingProsperity,
    /// Metal dominant.
    Reform,
    /// Water dominant.
    MoisteningDown,
    Transformed(FiveElement),
    FollowingOutput,
    FollowingWealth,
    FollowingAuthority,
    StrongSelf,
    WeakSelf,
}

impl StructureName {
    pub const fn name(self) -> &'static str {
        match self {
            Self::CurvedStraight => "Khúc Trực Cách",
            Self::FlamingUp => "Viêm Thượng Cách",
            Self::Sowing => "Giá Sắc Cách",
            Self::FollowingProsperity => "Tòng Vượng Cách",
            Self::Reform => "Tòng Cách",
            Self::MoisteningDown => "Nhuận Hạ Cách",
            Self::Transformed(FiveElement::Wood) => "Hóa Mộc Cách",
            Self::Transformed(FiveElement::Fire) => "Hóa Hỏa Cách",
            Self::Transformed(FiveElement::Earth) => "Hóa Thổ Cách",
            Self::Transformed(FiveElement::Metal) => "Hóa Kim Cách",
            Self::Transformed(FiveElement::Water) => "Hóa Thủy Cách",
            Self::FollowingOutput => "Tòng Nhi Cách",
            Self::FollowingWealth => "Tòng Tài Cách",
            Self::FollowingAuthority => "Tòng Sát Cách",
            Self::StrongSelf => "Thân Vượng",
            Self::WeakSelf => "Thân Nhược",
        }
    }
}

impl Serialize for StructureName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Outcome of classification.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StructureVerdict {
    pub structure_type: StructureType,
    pub name: StructureName,
    pub status: DayMasterStatus,
    /// Day Master element, or the transform element for Transformation.
    pub self_element: FiveElement,
    pub reason: String,
    /// Favorable seed fixed by a special structure; `None` for Regular.
    pub seed: Option<FavorableSeed>,
    /// Ten-god scores relative to `self_element`.
    pub ten_gods: TenGodScores,
    pub party: f64,
    pub enemy: f64,
    pub percentage_self: f64,
    pub gets_season: bool,
}

/// Party share of the total in `[0, 1]`, zero for an empty table.
fn party_ratio(ten_gods: &TenGodScores) -> f64 {
    let total = ten_gods.total();
    if total > 0.0 {
        ten_gods.party() / total
    } else {
        0.0
    }
}

/// Party share as a percentage, scaled before dividing so a share exactly
/// at a threshold compares equal to it.
fn party_percentage(ten_gods: &TenGodScores) -> f64 {
    let total = ten_gods.total();
    if total > 0.0 {
        ten_gods.party() * 100.0 / total
    } else {
        0.0
    }
}

/// Whether some branch carries the element, counting a combined branch as
/// its combination element only.
fn has_root(chart: &BaziChart, interactions: &Interactions, element: FiveElement) -> bool {
    chart
        .pillars
        .iter()
        .enumerate()
        .any(|(i, p)| match interactions.combination {
            Some(c) if interactions.is_combined(i) => c.element == element,
            _ => {
                p.branch.element() == element
                    || p.branch.hidden_stems().iter().any(|h| h.stem.element() == element)
            }
        })
}

fn dominant_name(
    chart: &BaziChart,
    element: FiveElement,
    thresholds: &StructureThresholds,
) -> StructureName {
    match element {
        FiveElement::Wood => StructureName::CurvedStraight,
        FiveElement::Fire => StructureName::FlamingUp,
        FiveElement::Metal => StructureName::Reform,
        FiveElement::Water => StructureName::MoisteningDown,
        FiveElement::Earth => {
            let storehouses = chart
                .branches()
                .iter()
                .filter(|b| EarthlyBranch::is_storehouse(**b))
                .count();
            if storehouses >= thresholds.storehouse_min_branches {
                StructureName::Sowing
            } else {
                StructureName::FollowingProsperity
            }
        }
    }
}

struct Frame {
    self_element: FiveElement,
    ten_gods: TenGodScores,
    gets_season: bool,
}

impl Frame {
    fn new(scores: &ElementScores, self_element: FiveElement, month_element: FiveElement) -> Self {
        Self {
            self_element,
            ten_gods: TenGodScores::from_elements(scores, self_element),
            gets_season: month_element == self_element
                || month_element == self_element.produced_by(),
        }
    }

    fn verdict(
        self,
        structure_type: StructureType,
        name: StructureName,
        status: DayMasterStatus,
        reason: String,
        seed: Option<FavorableSeed>,
    ) -> StructureVerdict {
        let party = self.ten_gods.party();
        let total = self.ten_gods.total();
        StructureVerdict {
            structure_type,
            name,
            status,
            self_element: self.self_element,
            reason,
            seed,
            party,
            enemy: total - party,
            percentage_self: party_percentage(&self.ten_gods),
            gets_season: self.gets_season,
            ten_gods: self.ten_gods,
        }
    }
}

/// Classify the chart's structure from its element scores.
pub fn classify_structure(
    chart: &BaziChart,
    interactions: &Interactions,
    scores: &ElementScores,
    thresholds: &StructureThresholds,
) -> StructureVerdict {
    let day_master = chart.day_master();
    let month_element = interactions.effective_month_element(chart.month().branch);
    let frame = Frame::new(scores, day_master.element(), month_element);
    let me = frame.self_element;
    let tg = frame.ten_gods;
    let ratio = party_ratio(&tg);

    // 1. Dominant
    let supporting_stems = chart
        .stems()
        .iter()
        .filter(|s| s.element() == me || s.element().produces() == me)
        .count();
    if ratio > thresholds.dominant_party_ratio
        && supporting_stems >= thresholds.dominant_min_stems
        && tg.wealth < thresholds.dominant_max_wealth
        && tg.authority < thresholds.dominant_max_authority
    {
        let reason = format!(
            "{} Day Master dominates with {:.1}% support and no opposing force.",
            me.english_name(),
            ratio * 100.0
        );
        let seed = FavorableSeed::new(vec![me, me.produced_by()], vec![me.produces()]);
        return frame.verdict(
            StructureType::Dominant,
            dominant_name(chart, me, thresholds),
            DayMasterStatus::Strong,
            reason,
            Some(seed),
        );
    }

    // 2. Transformation
    let partner = day_master.combination_partner();
    let target = day_master.combination_element();
    let paired = chart.month().stem == partner || chart.hour().stem == partner;
    let seasonal = month_element == target || month_element.produces() == target;
    let controller = scores.get(target.controlled_by());
    if paired && seasonal && controller < thresholds.transform_controller_max {
        let reason = format!(
            "{} combines with {} and transforms into {} supported by the month.",
            day_master.name(),
            partner.name(),
            target.english_name()
        );
        let seed = FavorableSeed::new(vec![target], vec![target.produced_by(), target.produces()]);
        return Frame::new(scores, target, month_element).verdict(
            StructureType::Transformation,
            StructureName::Transformed(target),
            DayMasterStatus::Transformed,
            reason,
            Some(seed),
        );
    }

    // 3. Following
    if ratio < thresholds.following_party_ratio && !has_root(chart, interactions, me) {
        let mut followed = TenGodCategory::Output;
        for category in [TenGodCategory::Wealth, TenGodCategory::Authority] {
            if tg.get(category) > tg.get(followed) {
                followed = category;
            }
        }
        if tg.get(followed) > thresholds.follow_ratio * tg.total() {
            let (name, support) = match followed {
                TenGodCategory::Output => (StructureName::FollowingOutput, TenGodCategory::Wealth),
                TenGodCategory::Wealth => (StructureName::FollowingWealth, TenGodCategory::Output),
                _ => (StructureName::FollowingAuthority, TenGodCategory::Wealth),
            };
            let useful = followed.element_for(me);
            let reason = format!(
                "Rootless {} Day Master with {:.1}% support follows {}.",
                me.english_name(),
                ratio * 100.0,
                useful.english_name()
            );
            let seed = FavorableSeed::new(vec![useful], vec![support.element_for(me)]);
            return frame.verdict(
                StructureType::Following,
                name,
                DayMasterStatus::Weak,
                reason,
                Some(seed),
            );
        }
    }

    // 4. Regular
    let percentage = party_percentage(&tg);
    let threshold = if frame.gets_season {
        thresholds.strong_in_season
    } else {
        thresholds.strong_out_of_season
    };
    let strong = percentage >= threshold;
    let reason = match (strong, frame.gets_season) {
        (true, true) => format!(
            "Day Master gets the season and support {percentage:.1}% reaches {threshold}%."
        ),
        (true, false) => format!(
            "Day Master lacks the season but support {percentage:.1}% still reaches {threshold}%."
        ),
        (false, true) => format!(
            "Day Master gets the season but support {percentage:.1}% is below {threshold}%."
        ),
        (false, false) => format!(
            "Day Master lacks the season and support {percentage:.1}% is below {threshold}%."
        ),
    };
    let (name, status) = if strong {
        (StructureName::StrongSelf, DayMasterStatus::Strong)
    } else {
        (StructureName::WeakSelf, DayMasterStatus::Weak)
    };
    frame.verdict(StructureType::Regular, name, status, reason, None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interaction::evaluate_interactions;
    use crate::pillar::parse_sexagenary;

    fn chart(names: [&str; 4]) -> BaziChart {
        let [y, m, d, h] = names.map(|n| parse_sexagenary(n).unwrap());
        BaziChart::new(y, m, d, h)
    }

    fn scores(wood: f64, fire: f64, earth: f64, metal: f64, water: f64) -> ElementScores {
        ElementScores {
            wood,
            fire,
            earth,
            metal,
            water,
        }
    }

    fn classify(c: &BaziChart, s: &ElementScores) -> StructureVerdict {
        classify_structure(c, &evaluate_interactions(c), s, &StructureThresholds::default())
    }

    #[test]
    fn structure_names() {
        assert_eq!(StructureName::Transformed(FiveElement::Fire).name(), "Hóa Hỏa Cách");
        assert_eq!(StructureName::StrongSelf.name(), "Thân Vượng");
        assert_eq!(
            serde_json::to_string(&StructureName::Sowing).unwrap(),
            "\"Giá Sắc Cách\""
        );
    }

    #[test]
    fn dominant_wood() {
        // Wood day master, stems Jia Yi Jia Ren all support.
        let c = chart(["Giáp Dần", "Ất Mão", "Giáp Dần", "Nhâm Thân"]);
        let s = scores(60.0, 3.0, 2.0, 2.0, 20.0);
        let v = classify(&c, &s);
        assert_eq!(v.structure_type, StructureType::Dominant);
        assert_eq!(v.name, StructureName::CurvedStraight);
        assert_eq!(v.status, DayMasterStatus::Strong);
        let seed = v.seed.unwrap();
        assert_eq!(seed.useful, vec![FiveElement::Wood, FiveElement::Water]);
        assert_eq!(seed.supporting, vec![FiveElement::Fire]);
    }

    #[test]
    fn dominant_earth_storehouses() {
        let c = chart(["Mậu Thìn", "Kỷ Mùi", "Mậu Tuất", "Bính Thìn"]);
        let s = scores(1.0, 20.0, 60.0, 2.0, 2.0);
        let v = classify(&c, &s);
        assert_eq!(v.name, StructureName::Sowing);

        let c = chart(["Mậu Ngọ", "Kỷ Mùi", "Mậu Ngọ", "Bính Thìn"]);
        let v = classify(&c, &s);
        assert_eq!(v.name, StructureName::FollowingProsperity);
    }

    #[test]
    fn dominant_blocked_by_wealth() {
        let c = chart(["Giáp Dần", "Ất Mão", "Giáp Dần", "Nhâm Thân"]);
        let s = scores(60.0, 3.0, 6.0, 2.0, 20.0);
        let v = classify(&c, &s);
        assert_eq!(v.structure_type, StructureType::Regular);
    }

    #[test]
    fn transformation_jia_ji_earth() {
        // Jia day, Ji month stem, Wei month (Earth), Wood weak.
        let c = chart(["Bính Tuất", "Kỷ Mùi", "Giáp Tuất", "Mậu Thìn"]);
        let s = scores(8.0, 10.0, 40.0, 3.0, 2.0);
        let v = classify(&c, &s);
        assert_eq!(v.structure_type, StructureType::Transformation);
        assert_eq!(v.name, StructureName::Transformed(FiveElement::Earth));
        assert_eq!(v.status, DayMasterStatus::Transformed);
        assert_eq!(v.self_element, FiveElement::Earth);
        // Peer and Resource are now Earth and Fire.
        assert!((v.party - 50.0).abs() < 1e-9);
        let seed = v.seed.unwrap();
        assert_eq!(seed.useful, vec![FiveElement::Earth]);
        assert_eq!(seed.supporting, vec![FiveElement::Fire, FiveElement::Metal]);
    }

    #[test]
    fn transformation_blocked_by_controller() {
        let c = chart(["Bính Tuất", "Kỷ Mùi", "Giáp Tuất", "Mậu Thìn"]);
        let s = scores(15.0, 10.0, 40.0, 3.0, 2.0);
        let v = classify(&c, &s);
        assert_ne!(v.structure_type, StructureType::Transformation);
    }

    #[test]
    fn following_wealth() {
        // Jia day over Chou You Shen Xu: no Wood in any branch.
        let c = chart(["Kỷ Sửu", "Quý Dậu", "Giáp Thân", "Mậu Tuất"]);
        let s = scores(2.0, 1.0, 30.0, 15.0, 1.0);
        let v = classify(&c, &s);
        assert_eq!(v.structure_type, StructureType::Following);
        assert_eq!(v.name, StructureName::FollowingWealth);
        let seed = v.seed.unwrap();
        assert_eq!(seed.useful, vec![FiveElement::Earth]);
        assert_eq!(seed.supporting, vec![FiveElement::Fire]);
    }

    #[test]
    fn following_requires_no_root() {
        // Chen hides Yi, so the Day Master is rooted.
        let c = chart(["Kỷ Sửu", "Quý Dậu", "Giáp Thân", "Mậu Thìn"]);
        let i = evaluate_interactions(&c);
        assert!(has_root(&c, &i, FiveElement::Wood));
        let s = scores(2.0, 1.0, 30.0, 15.0, 1.0);
        let v = classify(&c, &s);
        assert_eq!(v.structure_type, StructureType::Regular);
        assert_eq!(v.status, DayMasterStatus::Weak);
    }

    #[test]
    fn regular_thresholds() {
        // Wu month (Fire) for a Jia day master: season lost, bar 55%.
        let c = chart(["Canh Ngọ", "Nhâm Ngọ", "Giáp Tý", "Giáp Tuất"]);
        let s = scores(30.0, 20.0, 10.0, 10.0, 20.0);
        let v = classify(&c, &s);
        assert!(!v.gets_season);
        assert!((v.percentage_self - 55.555_555).abs() < 1e-3);
        assert_eq!(v.status, DayMasterStatus::Strong);

        let s = scores(25.0, 30.0, 10.0, 10.0, 20.0);
        let v = classify(&c, &s);
        assert!((v.percentage_self - 47.368_421).abs() < 1e-3);
        assert_eq!(v.status, DayMasterStatus::Weak);
        assert_eq!(v.name, StructureName::WeakSelf);
        assert!(v.reason.contains("lacks the season"));
    }

    #[test]
    fn regular_in_season_uses_lower_bar() {
        // Yin month (Wood) for a Jia day master.
        let c = chart(["Canh Ngọ", "Mậu Dần", "Giáp Ngọ", "Canh Ngọ"]);
        let s = scores(20.0, 30.0, 10.0, 20.0, 20.0);
        let v = classify(&c, &s);
        assert!(v.gets_season);
        assert!((v.percentage_self - 40.0).abs() < 1e-9);
        assert_eq!(v.status, DayMasterStatus::Strong);
        assert!((v.enemy - 60.0).abs() < 1e-9);
    }

    #[test]
    fn regular_bar_is_exact_at_boundary() {
        // 13.2 / 24 is 55% but (13.2 / 24) * 100 rounds to 54.99999999999999.
        let c = chart(["Canh Ngọ", "Nhâm Ngọ", "Giáp Tý", "Giáp Tuất"]);
        let s = scores(13.2, 2.0, 2.0, 6.8, 0.0);
        let v = classify(&c, &s);
        assert_eq!(v.structure_type, StructureType::Regular);
        assert!(!v.gets_season);
        assert_eq!(v.percentage_self, 55.0);
        assert_eq!(v.status, DayMasterStatus::Strong);
    }

    #[test]
    fn following_output() {
        // Jia day over Wu Si Wu Zi: no Wood in any branch.
        let c = chart(["Bính Ngọ", "Đinh Tỵ", "Giáp Ngọ", "Bính Tý"]);
        let s = scores(2.0, 30.0, 5.0, 3.0, 1.0);
        let v = classify(&c, &s);
        assert_eq!(v.structure_type, StructureType::Following);
        assert_eq!(v.name, StructureName::FollowingOutput);
        assert_eq!(v.status, DayMasterStatus::Weak);
        let seed = v.seed.unwrap();
        assert_eq!(seed.useful, vec![FiveElement::Fire]);
        assert_eq!(seed.supporting, vec![FiveElement::Earth]);
    }

    #[test]
    fn following_authority() {
        let c = chart(["Kỷ Sửu", "Quý Dậu", "Giáp Thân", "Mậu Tuất"]);
        let s = scores(2.0, 3.0, 5.0, 30.0, 1.0);
        let v = classify(&c, &s);
        assert_eq!(v.structure_type, StructureType::Following);
        assert_eq!(v.name, StructureName::FollowingAuthority);
        let seed = v.seed.unwrap();
        assert_eq!(seed.useful, vec![FiveElement::Metal]);
        assert_eq!(seed.supporting, vec![FiveElement::Earth]);
    }

    #[test]
    fn following_ties_keep_first_category() {
        // Two equal leaders cannot both exceed half the total, so lower the
        // follow share to reach the tie-break.
        let c = chart(["Bính Ngọ", "Đinh Tỵ", "Giáp Ngọ", "Bính Tý"]);
        let thresholds = StructureThresholds {
            follow_ratio: 0.4,
            ..StructureThresholds::default()
        };
        let i = evaluate_interactions(&c);

        let s = scores(1.0, 20.0, 20.0, 5.0, 0.0);
        let v = classify_structure(&c, &i, &s, &thresholds);
        assert_eq!(v.name, StructureName::FollowingOutput);

        let s = scores(1.0, 5.0, 20.0, 20.0, 0.0);
        let v = classify_structure(&c, &i, &s, &thresholds);
        assert_eq!(v.name, StructureName::FollowingWealth);
    }

    #[test]
    fn following_needs_majority_share() {
        // Rootless and weak, but Fire holds only 15 of 40.
        let c = chart(["Bính Ngọ", "Đinh Tỵ", "Giáp Ngọ", "Bính Tý"]);
        let s = scores(2.0, 15.0, 12.0, 10.0, 1.0);
        let v = classify(&c, &s);
        assert_eq!(v.structure_type, StructureType::Regular);
        assert_eq!(v.name, StructureName::WeakSelf);
        assert!(v.seed.is_none());
    }
}

//! Shen Sha (Thần Sát): fixed auspicious and inauspicious markers.
//!
//! Markers are annotations only and never feed scoring. Every rule is a
//! static lookup keyed by the Day or Year stem or branch; results are
//! listed per pillar in chart order, then in rule order, without
//! deduplication (a branch can earn the same marker from two keys).

use serde::Serialize;

use crate::branch::EarthlyBranch;
use crate::element::FiveElement;
use crate::pillar::{ALL_POSITIONS, BaziChart, Pillar, PillarPosition};
use crate::stem::HeavenlyStem;

use EarthlyBranch as B;
use HeavenlyStem as S;

/// A named marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ShenSha {
    Nobleman,
    AcademicStar,
    Prosperity,
    GoatBlade,
    GrandUltimateNobleman,
    PeachBlossom,
    TravelingHorse,
    Canopy,
    RedPhoenix,
    HeavenlyHappiness,
    HeavensNet,
    EarthsNet,
    KuiGang,
    Void,
}

impl ShenSha {
    /// Vietnamese name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Nobleman => "Thiên Ất Quý Nhân",
            Self::AcademicStar => "Văn Xương",
            Self::Prosperity => "Lộc Thần",
            Self::GoatBlade => "Dương Nhận",
            Self::GrandUltimateNobleman => "Thái Cực Quý Nhân",
            Self::PeachBlossom => "Đào Hoa",
            Self::TravelingHorse => "Dịch Mã",
            Self::Canopy => "Hoa Cái",
            Self::RedPhoenix => "Hồng Loan",
            Self::HeavenlyHappiness => "Thiên Hỷ",
            Self::HeavensNet => "Thiên La",
            Self::EarthsNet => "Địa Võng",
            Self::KuiGang => "Khôi Cương",
            Self::Void => "Không Vong",
        }
    }

    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Nobleman => "Nobleman",
            Self::AcademicStar => "Academic Star",
            Self::Prosperity => "Prosperity",
            Self::GoatBlade => "Goat Blade",
            Self::GrandUltimateNobleman => "Grand Ultimate Nobleman",
            Self::PeachBlossom => "Peach Blossom",
            Self::TravelingHorse => "Traveling Horse",
            Self::Canopy => "Canopy",
            Self::RedPhoenix => "Red Phoenix",
            Self::HeavenlyHappiness => "Heavenly Happiness",
            Self::HeavensNet => "Heaven's Net",
            Self::EarthsNet => "Earth's Net",
            Self::KuiGang => "Kui Gang",
            Self::Void => "Void",
        }
    }
}

/// One marker on one pillar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ShenShaEntry {
    pub marker: ShenSha,
    pub pillar: PillarPosition,
}

// ---------------------------------------------------------------------------
// Rule tables
// ---------------------------------------------------------------------------

/// Nobleman branches for a Day or Year stem.
pub const fn nobleman_branches(stem: HeavenlyStem) -> [EarthlyBranch; 2] {
    match stem {
        S::Jia | S::Wu | S::Geng => [B::Chou, B::Wei],
        S::Yi | S::Ji => [B::Zi, B::Shen],
        S::Bing | S::Ding => [B::Hai, B::You],
        S::Ren | S::Gui => [B::Si, B::Mao],
        S::Xin => [B::Yin, B::Wu],
    }
}

pub const fn academic_branch(stem: HeavenlyStem) -> EarthlyBranch {
    match stem {
        S::Jia => B::Si,
        S::Yi => B::Wu,
        S::Bing | S::Wu => B::Shen,
        S::Ding | S::Ji => B::You,
        S::Geng => B::Hai,
        S::Xin => B::Zi,
        S::Ren => B::Yin,
        S::Gui => B::Mao,
    }
}

pub const fn prosperity_branch(stem: HeavenlyStem) -> EarthlyBranch {
    match stem {
        S::Jia => B::Yin,
        S::Yi => B::Mao,
        S::Bing | S::Wu => B::Si,
        S::Ding | S::Ji => B::Wu,
        S::Geng => B::Shen,
        S::Xin => B::You,
        S::Ren => B::Hai,
        S::Gui => B::Zi,
    }
}

pub const fn goat_blade_branch(stem: HeavenlyStem) -> EarthlyBranch {
    match stem {
        S::Jia => B::Mao,
        S::Yi => B::Chen,
        S::Bing | S::Wu => B::Wu,
        S::Ding | S::Ji => B::Wei,
        S::Geng => B::You,
        S::Xin => B::Xu,
        S::Ren => B::Zi,
        S::Gui => B::Chou,
    }
}

pub const fn grand_ultimate_branches(stem: HeavenlyStem) -> &'static [EarthlyBranch] {
    match stem {
        S::Jia | S::Yi => &[B::Zi, B::Wu],
        S::Bing | S::Ding => &[B::Mao, B::You],
        S::Wu | S::Ji => &[B::Chen, B::Xu, B::Chou, B::Wei],
        S::Geng | S::Xin => &[B::Yin, B::Hai],
        S::Ren | S::Gui => &[B::Si, B::Shen],
    }
}

/// Element of the harmony trine a branch belongs to.
pub const fn trine_element(branch: EarthlyBranch) -> FiveElement {
    match branch {
        B::Shen | B::Zi | B::Chen => FiveElement::Water,
        B::Yin | B::Wu | B::Xu => FiveElement::Fire,
        B::Si | B::You | B::Chou => FiveElement::Metal,
        B::Hai | B::Mao | B::Wei => FiveElement::Wood,
    }
}

pub const fn peach_blossom_branch(key: EarthlyBranch) -> EarthlyBranch {
    match trine_element(key) {
        FiveElement::Water => B::You,
        FiveElement::Fire => B::Mao,
        FiveElement::Metal => B::Wu,
        _ => B::Zi,
    }
}

pub const fn traveling_horse_branch(key: EarthlyBranch) -> EarthlyBranch {
    match trine_element(key) {
        FiveElement::Water => B::Yin,
        FiveElement::Fire => B::Shen,
        FiveElement::Metal => B::Hai,
        _ => B::Si,
    }
}

pub const fn canopy_branch(key: EarthlyBranch) -> EarthlyBranch {
    match trine_element(key) {
        FiveElement::Water => B::Chen,
        FiveElement::Fire => B::Xu,
        FiveElement::Metal => B::Chou,
        _ => B::Wei,
    }
}

pub const fn red_phoenix_branch(year: EarthlyBranch) -> EarthlyBranch {
    B::from_index((15 - year.index()) % 12)
}

pub const fn heavenly_happiness_branch(year: EarthlyBranch) -> EarthlyBranch {
    B::from_index((21 - year.index()) % 12)
}

/// Day pillars carrying Kui Gang.
pub const KUI_GANG_PILLARS: [Pillar; 4] = [
    Pillar::new(S::Geng, B::Chen),
    Pillar::new(S::Geng, B::Xu),
    Pillar::new(S::Ren, B::Chen),
    Pillar::new(S::Wu, B::Xu),
];

// ---------------------------------------------------------------------------
// Calculation
// ---------------------------------------------------------------------------

/// Annotate every pillar of the chart with its markers.
pub fn calculate_shen_sha(chart: &BaziChart) -> Vec<ShenShaEntry> {
    let day = chart.day();
    let year = chart.year();
    let branches = chart.branches();
    let heavens_net = branches.contains(&B::Xu) && branches.contains(&B::Hai);
    let earths_net = branches.contains(&B::Chen) && branches.contains(&B::Si);
    let void = day.void_branches();

    let mut out = Vec::new();
    for position in ALL_POSITIONS {
        let b = chart.pillar(position).branch;
        let is_day = position == PillarPosition::Day;
        let is_year = position == PillarPosition::Year;
        let mut mark = |hit: bool, marker: ShenSha| {
            if hit {
                out.push(ShenShaEntry {
                    marker,
                    pillar: position,
                });
            }
        };

        mark(nobleman_branches(day.stem).contains(&b), ShenSha::Nobleman);
        mark(nobleman_branches(year.stem).contains(&b), ShenSha::Nobleman);
        mark(academic_branch(day.stem) == b, ShenSha::AcademicStar);
        mark(prosperity_branch(day.stem) == b, ShenSha::Prosperity);
        mark(goat_blade_branch(day.stem) == b, ShenSha::GoatBlade);
        mark(
            grand_ultimate_branches(day.stem).contains(&b),
            ShenSha::GrandUltimateNobleman,
        );

        mark(!is_day && peach_blossom_branch(day.branch) == b, ShenSha::PeachBlossom);
        mark(!is_year && peach_blossom_branch(year.branch) == b, ShenSha::PeachBlossom);
        mark(!is_day && traveling_horse_branch(day.branch) == b, ShenSha::TravelingHorse);
        mark(!is_year && traveling_horse_branch(year.branch) == b, ShenSha::TravelingHorse);
        mark(!is_day && canopy_branch(day.branch) == b, ShenSha::Canopy);
        mark(!is_year && red_phoenix_branch(year.branch) == b, ShenSha::RedPhoenix);
        mark(
            !is_year && heavenly_happiness_branch(year.branch) == b,
            ShenSha::HeavenlyHappiness,
        );

        mark(heavens_net && matches!(b, B::Xu | B::Hai), ShenSha::HeavensNet);
        mark(earths_net && matches!(b, B::Chen | B::Si), ShenSha::EarthsNet);
        mark(is_day && KUI_GANG_PILLARS.contains(&day), ShenSha::KuiGang);
        mark(!is_day && void.contains(&b), ShenSha::Void);
    }
    out
}

//! Favorable element selection (Dụng Thần / Hỷ Thần / Kỵ Thần).
//!
//! A seed of Useful and Supporting elements determines the rest: Adverse
//! elements control a Useful one, Source-of-Adverse elements produce an
//! Adverse one, and whatever is left is Neutral. Every element lands in
//! exactly one set.

use serde::Serialize;

use crate::branch::EarthlyBranch;
use crate::config::FavorableThresholds;
use crate::element::{ALL_ELEMENTS, ElementScores, FiveElement};
use crate::pillar::BaziChart;
use crate::structure::{DayMasterStatus, StructureVerdict};
use crate::ten_god::TenGodCategory;

/// Which of the five sets an element belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Favorability {
    Useful,
    Supporting,
    Adverse,
    SourceOfAdverse,
    Neutral,
}

impl Favorability {
    /// Signed weight used when rating periods or objects against the chart.
    pub const fn limit_score(self) -> f64 {
        match self {
            Self::Useful => -1.0,
            Self::Supporting => -0.5,
            Self::Adverse => 1.0,
            Self::SourceOfAdverse => 0.5,
            Self::Neutral => 0.1,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Useful => "Dụng Thần",
            Self::Supporting => "Hỷ Thần",
            Self::Adverse => "Kỵ Thần",
            Self::SourceOfAdverse => "Cừu Thần",
            Self::Neutral => "Nhàn Thần",
        }
    }
}

/// Useful and Supporting elements before the closure is taken.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FavorableSeed {
    pub useful: Vec<FiveElement>,
    pub supporting: Vec<FiveElement>,
}

impl FavorableSeed {
    pub fn new(useful: Vec<FiveElement>, supporting: Vec<FiveElement>) -> Self {
        let mut seed = Self {
            useful: Vec::with_capacity(useful.len()),
            supporting: Vec::new(),
        };
        for e in useful {
            if !seed.useful.contains(&e) {
                seed.useful.push(e);
            }
        }
        for e in supporting {
            seed.add_supporting(e);
        }
        seed
    }

    /// Add a Supporting element unless it is already placed.
    pub fn add_supporting(&mut self, element: FiveElement) {
        if !self.useful.contains(&element) && !self.supporting.contains(&element) {
            self.supporting.push(element);
        }
    }
}

/// The five-way partition of the elements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FavorableSet {
    pub useful: Vec<FiveElement>,
    pub supporting: Vec<FiveElement>,
    pub adverse: Vec<FiveElement>,
    pub source_of_adverse: Vec<FiveElement>,
    pub neutral: Vec<FiveElement>,
}

impl FavorableSet {
    /// Take the closure of a seed.
    pub fn from_seed(seed: &FavorableSeed) -> Self {
        let mut slots: [Option<Favorability>; 5] = [None; 5];
        let mut place = |e: FiveElement, f: Favorability| {
            let slot = &mut slots[e.index() as usize];
            if slot.is_none() {
                *slot = Some(f);
                true
            } else {
                false
            }
        };

        let useful: Vec<_> = seed
            .useful
            .iter()
            .copied()
            .filter(|&e| place(e, Favorability::Useful))
            .collect();
        let supporting: Vec<_> = seed
            .supporting
            .iter()
            .copied()
            .filter(|&e| place(e, Favorability::Supporting))
            .collect();
        let adverse: Vec<_> = ALL_ELEMENTS
            .into_iter()
            .filter(|e| useful.contains(&e.controls()))
            .filter(|&e| place(e, Favorability::Adverse))
            .collect();
        let source_of_adverse: Vec<_> = ALL_ELEMENTS
            .into_iter()
            .filter(|e| adverse.contains(&e.produces()))
            .filter(|&e| place(e, Favorability::SourceOfAdverse))
            .collect();
        let neutral: Vec<_> = ALL_ELEMENTS
            .into_iter()
            .filter(|&e| place(e, Favorability::Neutral))
            .collect();

        Self {
            useful,
            supporting,
            adverse,
            source_of_adverse,
            neutral,
        }
    }

    /// Set holding `element`.
    pub fn classify(&self, element: FiveElement) -> Favorability {
        if self.useful.contains(&element) {
            Favorability::Useful
        } else if self.supporting.contains(&element) {
            Favorability::Supporting
        } else if self.adverse.contains(&element) {
            Favorability::Adverse
        } else if self.source_of_adverse.contains(&element) {
            Favorability::SourceOfAdverse
        } else {
            Favorability::Neutral
        }
    }

    /// Limit score of every element.
    pub fn limit_scores(&self) -> ElementScores {
        let mut out = ElementScores::default();
        for e in ALL_ELEMENTS {
            *out.get_mut(e) = self.classify(e).limit_score();
        }
        out
    }

    /// Whether the five sets cover every element exactly once.
    pub fn is_partition(&self) -> bool {
        let mut seen = [0u8; 5];
        for set in [
            &self.useful,
            &self.supporting,
            &self.adverse,
            &self.source_of_adverse,
            &self.neutral,
        ] {
            for e in set {
                seen[e.index() as usize] += 1;
            }
        }
        seen.iter().all(|&n| n == 1)
    }
}

fn is_winter(branch: EarthlyBranch) -> bool {
    matches!(branch, EarthlyBranch::Hai | EarthlyBranch::Zi | EarthlyBranch::Chou)
}

fn is_summer(branch: EarthlyBranch) -> bool {
    matches!(branch, EarthlyBranch::Si | EarthlyBranch::Wu | EarthlyBranch::Wei)
}

/// Seed for a Regular structure, from the Strong/Weak table followed by
/// the mediation and climate adjustments.
pub fn select_regular_seed(
    verdict: &StructureVerdict,
    chart: &BaziChart,
    thresholds: &FavorableThresholds,
) -> FavorableSeed {
    use TenGodCategory::*;

    let me = verdict.self_element;
    let tg = &verdict.ten_gods;
    let strong = verdict.status == DayMasterStatus::Strong;

    let (useful, supporting) = if strong {
        if tg.resource > thresholds.strong_resource {
            (Wealth, Output)
        } else if tg.peer > thresholds.strong_peer {
            (Authority, Wealth)
        } else {
            (Output, Wealth)
        }
    } else if tg.authority >= tg.output && tg.authority >= tg.wealth {
        (Resource, Peer)
    } else if tg.wealth > thresholds.weak_wealth {
        (Peer, Resource)
    } else {
        (Resource, Peer)
    };
    let mut seed = FavorableSeed::new(
        vec![useful.element_for(me)],
        vec![supporting.element_for(me)],
    );

    if (tg.peer - tg.wealth).abs() < thresholds.mediation_gap
        && tg.peer > thresholds.mediation_floor
        && tg.wealth > thresholds.mediation_floor
    {
        seed.add_supporting(Output.element_for(me));
    }

    if thresholds.climate_adjustment {
        let month = chart.month().branch;
        if is_winter(month) && !seed.useful.contains(&FiveElement::Fire) {
            seed.add_supporting(FiveElement::Fire);
            if me == FiveElement::Water {
                seed.add_supporting(FiveElement::Wood);
            }
        } else if is_summer(month) && !seed.useful.contains(&FiveElement::Water) {
            seed.add_supporting(FiveElement::Water);
        }
    }

    seed
}

/// Favorable partition for any structure.
pub fn select_favorable(
    verdict: &StructureVerdict,
    chart: &BaziChart,
    thresholds: &FavorableThresholds,
) -> FavorableSet {
    match &verdict.seed {
        Some(seed) => FavorableSet::from_seed(seed),
        None => FavorableSet::from_seed(&select_regular_seed(verdict, chart, thresholds)),
    }
}

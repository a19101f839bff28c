//! Branch interactions: seasonal triads, harmony trines and six clashes.
//!
//! Combinations are evaluated in strict priority order. A seasonal triad
//! forms whenever its three branches are present; a harmony trine is only
//! looked at when no triad formed, and additionally needs a guiding stem
//! or a month branch already of the trine's element. At most one
//! combination forms per chart.

use std::collections::BTreeSet;

use serde::Serialize;
use tracing::debug;

use crate::branch::EarthlyBranch;
use crate::element::FiveElement;
use crate::pillar::{BaziChart, PillarPosition};

use EarthlyBranch as B;

/// Same-season triads, checked in this order.
pub const SEASONAL_TRIADS: [(FiveElement, [EarthlyBranch; 3]); 4] = [
    (FiveElement::Wood, [B::Yin, B::Mao, B::Chen]),
    (FiveElement::Fire, [B::Si, B::Wu, B::Wei]),
    (FiveElement::Metal, [B::Shen, B::You, B::Xu]),
    (FiveElement::Water, [B::Hai, B::Zi, B::Chou]),
];

/// Harmony trines, checked in this fixed priority order.
pub const HARMONY_TRINES: [(FiveElement, [EarthlyBranch; 3]); 4] = [
    (FiveElement::Water, [B::Shen, B::Zi, B::Chen]),
    (FiveElement::Fire, [B::Yin, B::Wu, B::Xu]),
    (FiveElement::Metal, [B::Si, B::You, B::Chou]),
    (FiveElement::Wood, [B::Hai, B::Mao, B::Wei]),
];

/// Pillar pairs examined for clashes and pairwise combinations.
pub const PILLAR_PAIRS: [(PillarPosition, PillarPosition); 4] = [
    (PillarPosition::Year, PillarPosition::Month),
    (PillarPosition::Month, PillarPosition::Day),
    (PillarPosition::Day, PillarPosition::Hour),
    (PillarPosition::Year, PillarPosition::Day),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CombinationKind {
    /// Three branches of one season (Tam Hội).
    Seasonal,
    /// Birth/peak/tomb trine (Tam Hợp).
    Harmony,
}

/// A formed three-branch combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BranchCombination {
    pub kind: CombinationKind,
    pub element: FiveElement,
    pub branches: [EarthlyBranch; 3],
}

/// Two pillars joined by a pairwise relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PairInteraction {
    pub first: PillarPosition,
    pub second: PillarPosition,
    /// Element the pair leans toward, if any.
    pub element: Option<FiveElement>,
}

/// Everything the scorer and classifier need to know about interactions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Interactions {
    pub seasonal_element: Option<FiveElement>,
    pub harmony_element: Option<FiveElement>,
    pub combination: Option<BranchCombination>,
    /// Pillars whose branch is absorbed into the formed combination.
    pub combined_pillars: [bool; 4],
    /// Chart indices (0 = Year .. 3 = Hour) hit by at least one clash.
    pub clashed_indices: BTreeSet<usize>,
    pub clashes: Vec<PairInteraction>,
    pub month_overridden: bool,
    pub new_month_element: Option<FiveElement>,
    /// Six-harmony pairs. Informational.
    pub six_harmonies: Vec<PairInteraction>,
    /// Stem five-combinations. Informational.
    pub stem_combinations: Vec<PairInteraction>,
}

impl Interactions {
    /// Month element after combination override.
    pub const fn effective_month_element(&self, month_branch: EarthlyBranch) -> FiveElement {
        match self.new_month_element {
            Some(e) => e,
            None => month_branch.element(),
        }
    }

    pub fn is_clashed(&self, index: usize) -> bool {
        self.clashed_indices.contains(&index)
    }

    pub const fn is_combined(&self, index: usize) -> bool {
        index < 4 && self.combined_pillars[index]
    }
}

fn all_present(branches: &[EarthlyBranch; 4], set: &[EarthlyBranch; 3]) -> bool {
    set.iter().all(|b| branches.contains(b))
}

fn find_combination(chart: &BaziChart) -> Option<BranchCombination> {
    let branches = chart.branches();

    let seasonal = SEASONAL_TRIADS
        .iter()
        .find(|(_, set)| all_present(&branches, set))
        .map(|&(element, branches)| BranchCombination {
            kind: CombinationKind::Seasonal,
            element,
            branches,
        });
    if seasonal.is_some() {
        return seasonal;
    }

    let month_element = chart.month().branch.element();
    HARMONY_TRINES
        .iter()
        .filter(|(_, set)| all_present(&branches, set))
        .find(|(element, _)| {
            let guided = chart.stems().iter().any(|s| s.element() == *element);
            guided || month_element == *element
        })
        .map(|&(element, branches)| BranchCombination {
            kind: CombinationKind::Harmony,
            element,
            branches,
        })
}

/// Detect combinations, clashes and pairwise relations on a chart.
pub fn evaluate_interactions(chart: &BaziChart) -> Interactions {
    let combination = find_combination(chart);

    let mut combined_pillars = [false; 4];
    if let Some(c) = &combination {
        for (i, p) in chart.pillars.iter().enumerate() {
            combined_pillars[i] = c.branches.contains(&p.branch);
        }
    }
    let month_overridden = combined_pillars[PillarPosition::Month.index()];
    let new_month_element = combination.filter(|_| month_overridden).map(|c| c.element);

    let mut clashed_indices = BTreeSet::new();
    let mut clashes = Vec::new();
    let mut six_harmonies = Vec::new();
    let mut stem_combinations = Vec::new();
    for &(first, second) in &PILLAR_PAIRS {
        let a = chart.pillar(first);
        let b = chart.pillar(second);
        if a.branch.clashes_with(b.branch) {
            clashed_indices.insert(first.index());
            clashed_indices.insert(second.index());
            clashes.push(PairInteraction {
                first,
                second,
                element: None,
            });
        }
        let (partner, harmony_element) = a.branch.six_harmony();
        if partner == b.branch {
            six_harmonies.push(PairInteraction {
                first,
                second,
                element: Some(harmony_element),
            });
        }
        if a.stem.combination_partner() == b.stem {
            stem_combinations.push(PairInteraction {
                first,
                second,
                element: Some(a.stem.combination_element()),
            });
        }
    }

    if let Some(c) = &combination {
        debug!(kind = ?c.kind, element = ?c.element, month_overridden, "branch combination formed");
    }

    Interactions {
        seasonal_element: combination
            .filter(|c| c.kind == CombinationKind::Seasonal)
            .map(|c| c.element),
        harmony_element: combination
            .filter(|c| c.kind == CombinationKind::Harmony)
            .map(|c| c.element),
        combination,
        combined_pillars,
        clashed_indices,
        clashes,
        month_overridden,
        new_month_element,
        six_harmonies,
        stem_combinations,
    }
}

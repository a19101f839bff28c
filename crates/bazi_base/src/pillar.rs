//! Pillars, the four-pillar chart, and the calendar arithmetic that
//! derives the Hour and Month pillars.
//!
//! A pillar is one term of the 60-step sexagenary cycle. Stem and branch
//! advance together, so only pairs of equal polarity occur; the cycle index
//! `n` satisfies `n mod 10 = stem` and `n mod 12 = branch`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::branch::EarthlyBranch;
use crate::error::BaziError;
use crate::solar_term::SolarTerm;
use crate::stem::HeavenlyStem;

// ---------------------------------------------------------------------------
// Pillar
// ---------------------------------------------------------------------------

/// One stem over one branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pillar {
    pub stem: HeavenlyStem,
    pub branch: EarthlyBranch,
}

impl Pillar {
    pub const fn new(stem: HeavenlyStem, branch: EarthlyBranch) -> Self {
        Self { stem, branch }
    }

    /// Position 0..59 in the sexagenary cycle (Giáp Tý = 0).
    ///
    /// Only meaningful when stem and branch share polarity.
    pub const fn cycle_index(self) -> u8 {
        let s = self.stem.index() as i32;
        let b = self.branch.index() as i32;
        (6 * s - 5 * b).rem_euclid(60) as u8
    }

    /// Pillar at `index mod 60`.
    pub const fn from_cycle_index(index: u8) -> Self {
        Self {
            stem: HeavenlyStem::from_index(index % 10),
            branch: EarthlyBranch::from_index(index % 12),
        }
    }

    /// Step `delta` places along the cycle (negative steps backward).
    pub const fn shift(self, delta: i32) -> Self {
        let n = (self.cycle_index() as i32 + delta).rem_euclid(60);
        Self::from_cycle_index(n as u8)
    }

    /// The two void (empty) branches of the decade this pillar belongs to.
    pub const fn void_branches(self) -> [EarthlyBranch; 2] {
        VOID_BRANCHES[self.cycle_index() as usize]
    }
}

impl fmt::Display for Pillar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.stem.name(), self.branch.name())
    }
}

/// Parse a collaborator name such as `"Giáp Tý"` into a pillar.
///
/// Exactly two whitespace-separated tokens are accepted, a known stem then
/// a known branch of the same polarity.
pub fn parse_sexagenary(name: &str) -> Result<Pillar, BaziError> {
    let fail = || BaziError::Parse(name.to_string());
    let mut tokens = name.split_whitespace();
    let (Some(stem_tok), Some(branch_tok), None) = (tokens.next(), tokens.next(), tokens.next())
    else {
        return Err(fail());
    };
    let stem = HeavenlyStem::from_name(stem_tok).ok_or_else(fail)?;
    let branch = EarthlyBranch::from_name(branch_tok).ok_or_else(fail)?;
    if stem.polarity() != branch.polarity() {
        return Err(fail());
    }
    Ok(Pillar::new(stem, branch))
}

const fn build_void_table() -> [[EarthlyBranch; 2]; 60] {
    let mut table = [[EarthlyBranch::Xu, EarthlyBranch::Hai]; 60];
    let mut n = 0;
    while n < 60 {
        let lead = (n / 10 * 10) % 12;
        table[n] = [
            EarthlyBranch::from_index((lead + 10) as u8),
            EarthlyBranch::from_index((lead + 11) as u8),
        ];
        n += 1;
    }
    table
}

/// Void branches for each of the 60 cycle positions.
///
/// Each decade (Giáp .. Quý) pairs ten stems with ten branches; the two
/// branches left over are void for every pillar in that decade.
pub const VOID_BRANCHES: [[EarthlyBranch; 2]; 60] = build_void_table();

// ---------------------------------------------------------------------------
// Chart
// ---------------------------------------------------------------------------

/// Slot of a pillar in the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PillarPosition {
    Year,
    Month,
    Day,
    Hour,
}

/// The four positions in chart order.
pub const ALL_POSITIONS: [PillarPosition; 4] = [
    PillarPosition::Year,
    PillarPosition::Month,
    PillarPosition::Day,
    PillarPosition::Hour,
];

impl PillarPosition {
    pub const fn index(self) -> usize {
        match self {
            Self::Year => 0,
            Self::Month => 1,
            Self::Day => 2,
            Self::Hour => 3,
        }
    }

    /// Vietnamese label.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Year => "Năm",
            Self::Month => "Tháng",
            Self::Day => "Ngày",
            Self::Hour => "Giờ",
        }
    }

    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Year => "Year",
            Self::Month => "Month",
            Self::Day => "Day",
            Self::Hour => "Hour",
        }
    }
}

/// Year, Month, Day and Hour pillars of a birth moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BaziChart {
    pub pillars: [Pillar; 4],
}

impl BaziChart {
    pub const fn new(year: Pillar, month: Pillar, day: Pillar, hour: Pillar) -> Self {
        Self {
            pillars: [year, month, day, hour],
        }
    }

    pub const fn pillar(&self, position: PillarPosition) -> Pillar {
        self.pillars[position.index()]
    }

    pub const fn year(&self) -> Pillar {
        self.pillars[0]
    }

    pub const fn month(&self) -> Pillar {
        self.pillars[1]
    }

    pub const fn day(&self) -> Pillar {
        self.pillars[2]
    }

    pub const fn hour(&self) -> Pillar {
        self.pillars[3]
    }

    /// The Day stem, the analytical self of the chart.
    pub const fn day_master(&self) -> HeavenlyStem {
        self.pillars[2].stem
    }

    /// The four branches in chart order.
    pub fn branches(&self) -> [EarthlyBranch; 4] {
        self.pillars.map(|p| p.branch)
    }

    /// The four stems in chart order.
    pub fn stems(&self) -> [HeavenlyStem; 4] {
        self.pillars.map(|p| p.stem)
    }
}

impl fmt::Display for BaziChart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | {} | {}",
            self.pillars[0], self.pillars[1], self.pillars[2], self.pillars[3]
        )
    }
}

// ---------------------------------------------------------------------------
// Calendar arithmetic
// ---------------------------------------------------------------------------

/// Branch of the two-hour period containing `hour` (0..23).
///
/// The Zi period spans 23:00–00:59, so 23 and 0 both map to Zi.
pub const fn hour_branch(hour: u8) -> EarthlyBranch {
    EarthlyBranch::from_index((((hour as u16 + 1) / 2) % 12) as u8)
}

/// Hour pillar from the hour and the Day stem ("Five Rats" rule).
pub const fn hour_pillar(hour: u8, day_stem: HeavenlyStem) -> Pillar {
    let branch = hour_branch(hour);
    let stem = ((day_stem.index() % 5) * 2 + branch.index()) % 10;
    Pillar::new(HeavenlyStem::from_index(stem), branch)
}

/// Month pillar from the Year stem and the active solar term
/// ("Five Tigers" rule, anchored at the Yin month).
pub const fn month_pillar(year_stem: HeavenlyStem, term: SolarTerm) -> Pillar {
    let branch = term.month_branch();
    let offset = (branch.index() + 10) % 12;
    let stem = ((year_stem.index() % 5) * 2 + 2 + offset) % 10;
    Pillar::new(HeavenlyStem::from_index(stem), branch)
}

/// Move the lunar-year pillar onto the solar year, which turns at Lập xuân
/// rather than at lunar new year.
pub const fn spring_adjusted_year(year: Pillar, lunar_month: u8, term: SolarTerm) -> Pillar {
    if lunar_month == 1 && term.precedes_spring() {
        year.shift(-1)
    } else if lunar_month == 12 && term.opens_spring() {
        year.shift(1)
    } else {
        year
    }
}

//! Ten Gods (Thập Thần): how an element or stem relates to the Day Master.
//!
//! The five categories depend only on elements. The full ten-way relation
//! additionally splits each category by whether the two stems share
//! polarity.

use serde::{Deserialize, Serialize};

use crate::element::{ElementScores, FiveElement};
use crate::stem::HeavenlyStem;

/// The five relational categories relative to the self element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TenGodCategory {
    /// Same element.
    Peer,
    /// Produces self.
    Resource,
    /// Produced by self.
    Output,
    /// Controlled by self.
    Wealth,
    /// Controls self.
    Authority,
}

/// Categories in the order used for reporting.
pub const ALL_CATEGORIES: [TenGodCategory; 5] = [
    TenGodCategory::Peer,
    TenGodCategory::Resource,
    TenGodCategory::Output,
    TenGodCategory::Wealth,
    TenGodCategory::Authority,
];

impl TenGodCategory {
    /// Category of `other` relative to `self_element`.
    pub const fn of(self_element: FiveElement, other: FiveElement) -> Self {
        match (other.index() + 5 - self_element.index()) % 5 {
            0 => Self::Peer,
            1 => Self::Output,
            2 => Self::Wealth,
            3 => Self::Authority,
            _ => Self::Resource,
        }
    }

    /// The element standing in this relation to `self_element`.
    pub const fn element_for(self, self_element: FiveElement) -> FiveElement {
        match self {
            Self::Peer => self_element,
            Self::Resource => self_element.produced_by(),
            Self::Output => self_element.produces(),
            Self::Wealth => self_element.controls(),
            Self::Authority => self_element.controlled_by(),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Peer => "Tỷ Kiếp",
            Self::Resource => "Ấn",
            Self::Output => "Thực Thương",
            Self::Wealth => "Tài",
            Self::Authority => "Quan Sát",
        }
    }
}

/// Aggregated element scores seen from the Day Master.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TenGodScores {
    pub peer: f64,
    pub resource: f64,
    pub output: f64,
    pub wealth: f64,
    pub authority: f64,
}

impl TenGodScores {
    /// Regroup `scores` around `self_element`.
    pub fn from_elements(scores: &ElementScores, self_element: FiveElement) -> Self {
        Self {
            peer: scores.get(self_element),
            resource: scores.get(self_element.produced_by()),
            output: scores.get(self_element.produces()),
            wealth: scores.get(self_element.controls()),
            authority: scores.get(self_element.controlled_by()),
        }
    }

    pub const fn get(&self, category: TenGodCategory) -> f64 {
        match category {
            TenGodCategory::Peer => self.peer,
            TenGodCategory::Resource => self.resource,
            TenGodCategory::Output => self.output,
            TenGodCategory::Wealth => self.wealth,
            TenGodCategory::Authority => self.authority,
        }
    }

    /// Peer + Resource.
    pub fn party(&self) -> f64 {
        self.peer + self.resource
    }

    pub fn total(&self) -> f64 {
        self.peer + self.resource + self.output + self.wealth + self.authority
    }
}

/// The full ten-way relation of one stem to the Day Master.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TenGod {
    Companion,
    RobWealth,
    EatingGod,
    HurtingOfficer,
    IndirectWealth,
    DirectWealth,
    SevenKillings,
    DirectOfficer,
    IndirectResource,
    DirectResource,
}

impl TenGod {
    /// Relation of `other` to `day_master`.
    pub const fn of(day_master: HeavenlyStem, other: HeavenlyStem) -> Self {
        let same = day_master.index() % 2 == other.index() % 2;
        match (TenGodCategory::of(day_master.element(), other.element()), same) {
            (TenGodCategory::Peer, true) => Self::Companion,
            (TenGodCategory::Peer, false) => Self::RobWealth,
            (TenGodCategory::Output, true) => Self::EatingGod,
            (TenGodCategory::Output, false) => Self::HurtingOfficer,
            (TenGodCategory::Wealth, true) => Self::IndirectWealth,
            (TenGodCategory::Wealth, false) => Self::DirectWealth,
            (TenGodCategory::Authority, true) => Self::SevenKillings,
            (TenGodCategory::Authority, false) => Self::DirectOfficer,
            (TenGodCategory::Resource, true) => Self::IndirectResource,
            (TenGodCategory::Resource, false) => Self::DirectResource,
        }
    }

    pub const fn category(self) -> TenGodCategory {
        match self {
            Self::Companion | Self::RobWealth => TenGodCategory::Peer,
            Self::EatingGod | Self::HurtingOfficer => TenGodCategory::Output,
            Self::IndirectWealth | Self::DirectWealth => TenGodCategory::Wealth,
            Self::SevenKillings | Self::DirectOfficer => TenGodCategory::Authority,
            Self::IndirectResource | Self::DirectResource => TenGodCategory::Resource,
        }
    }

    /// Vietnamese name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Companion => "Tỷ Kiên",
            Self::RobWealth => "Kiếp Tài",
            Self::EatingGod => "Thực Thần",
            Self::HurtingOfficer => "Thương Quan",
            Self::IndirectWealth => "Thiên Tài",
            Self::DirectWealth => "Chính Tài",
            Self::SevenKillings => "Thất Sát",
            Self::DirectOfficer => "Chính Quan",
            Self::IndirectResource => "Thiên Ấn",
            Self::DirectResource => "Chính Ấn",
        }
    }

    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Companion => "Companion",
            Self::RobWealth => "Rob Wealth",
            Self::EatingGod => "Eating God",
            Self::HurtingOfficer => "Hurting Officer",
            Self::IndirectWealth => "Indirect Wealth",
            Self::DirectWealth => "Direct Wealth",
            Self::SevenKillings => "Seven Killings",
            Self::DirectOfficer => "Direct Officer",
            Self::IndirectResource => "Indirect Resource",
            Self::DirectResource => "Direct Resource",
        }
    }
}

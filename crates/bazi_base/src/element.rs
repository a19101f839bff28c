//! The five elements and their producing/controlling cycles.
//!
//! Elements form a directed 5-cycle: each element produces the next one and
//! controls the one after that. Both relations are index arithmetic mod 5,
//! so they are total and bijective by construction.

use serde::{Deserialize, Serialize};

/// The five elements (Wu Xing).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FiveElement {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

/// All five elements in producing-cycle order (index 0 = Wood).
pub const ALL_ELEMENTS: [FiveElement; 5] = [
    FiveElement::Wood,
    FiveElement::Fire,
    FiveElement::Earth,
    FiveElement::Metal,
    FiveElement::Water,
];

impl FiveElement {
    /// 0-based index (Wood=0 .. Water=4).
    pub const fn index(self) -> u8 {
        match self {
            Self::Wood => 0,
            Self::Fire => 1,
            Self::Earth => 2,
            Self::Metal => 3,
            Self::Water => 4,
        }
    }

    /// Element at `index mod 5`.
    pub const fn from_index(index: u8) -> Self {
        ALL_ELEMENTS[(index % 5) as usize]
    }

    /// Vietnamese name of the element.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wood => "Mộc",
            Self::Fire => "Hỏa",
            Self::Earth => "Thổ",
            Self::Metal => "Kim",
            Self::Water => "Thủy",
        }
    }

    /// English name of the element.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Wood => "Wood",
            Self::Fire => "Fire",
            Self::Earth => "Earth",
            Self::Metal => "Metal",
            Self::Water => "Water",
        }
    }

    /// The element this one produces (Wood → Fire → Earth → Metal → Water → Wood).
    pub const fn produces(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// The element this one controls (Wood → Earth, Fire → Metal, ...).
    pub const fn controls(self) -> Self {
        Self::from_index(self.index() + 2)
    }

    /// The element that produces this one.
    pub const fn produced_by(self) -> Self {
        Self::from_index(self.index() + 4)
    }

    /// The element that controls this one.
    pub const fn controlled_by(self) -> Self {
        Self::from_index(self.index() + 3)
    }
}

/// A non-negative quantity per element.
///
/// Serializes as a named-field map so downstream storage reads
/// `{"wood": .., "fire": .., ...}`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ElementScores {
    pub wood: f64,
    pub fire: f64,
    pub earth: f64,
    pub metal: f64,
    pub water: f64,
}

impl ElementScores {
    /// Score for one element.
    pub const fn get(&self, element: FiveElement) -> f64 {
        match element {
            FiveElement::Wood => self.wood,
            FiveElement::Fire => self.fire,
            FiveElement::Earth => self.earth,
            FiveElement::Metal => self.metal,
            FiveElement::Water => self.water,
        }
    }

    /// Mutable slot for one element.
    pub fn get_mut(&mut self, element: FiveElement) -> &mut f64 {
        match element {
            FiveElement::Wood => &mut self.wood,
            FiveElement::Fire => &mut self.fire,
            FiveElement::Earth => &mut self.earth,
            FiveElement::Metal => &mut self.metal,
            FiveElement::Water => &mut self.water,
        }
    }

    /// Add `amount` to the element's slot.
    pub fn add(&mut self, element: FiveElement, amount: f64) {
        *self.get_mut(element) += amount;
    }

    /// Sum over all five elements.
    pub fn total(&self) -> f64 {
        self.wood + self.fire + self.earth + self.metal + self.water
    }
}

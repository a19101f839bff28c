//! Heavenly stems (Thiên Can).
//!
//! Ten stems in cyclic order. Adjacent pairs share an element (Yang then
//! Yin), so the element of stem `i` is element `i / 2`.

use serde::{Deserialize, Serialize};

use crate::element::FiveElement;

/// The 10 heavenly stems, named by pinyin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HeavenlyStem {
    Jia,
    Yi,
    Bing,
    Ding,
    Wu,
    Ji,
    Geng,
    Xin,
    Ren,
    Gui,
}

/// All 10 stems in cyclic order (index 0 = Jia).
pub const ALL_STEMS: [HeavenlyStem; 10] = [
    HeavenlyStem::Jia,
    HeavenlyStem::Yi,
    HeavenlyStem::Bing,
    HeavenlyStem::Ding,
    HeavenlyStem::Wu,
    HeavenlyStem::Ji,
    HeavenlyStem::Geng,
    HeavenlyStem::Xin,
    HeavenlyStem::Ren,
    HeavenlyStem::Gui,
];

/// Yin/Yang polarity of a stem or branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Polarity {
    Yang,
    Yin,
}

impl HeavenlyStem {
    /// 0-based index (Jia=0 .. Gui=9).
    pub const fn index(self) -> u8 {
        match self {
            Self::Jia => 0,
            Self::Yi => 1,
            Self::Bing => 2,
            Self::Ding => 3,
            Self::Wu => 4,
            Self::Ji => 5,
            Self::Geng => 6,
            Self::Xin => 7,
            Self::Ren => 8,
            Self::Gui => 9,
        }
    }

    /// Stem at `index mod 10`.
    pub const fn from_index(index: u8) -> Self {
        ALL_STEMS[(index % 10) as usize]
    }

    /// Vietnamese name, as emitted by the lunar calendar collaborator.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Jia => "Giáp",
            Self::Yi => "Ất",
            Self::Bing => "Bính",
            Self::Ding => "Đinh",
            Self::Wu => "Mậu",
            Self::Ji => "Kỷ",
            Self::Geng => "Canh",
            Self::Xin => "Tân",
            Self::Ren => "Nhâm",
            Self::Gui => "Quý",
        }
    }

    /// Pinyin name.
    pub const fn pinyin(self) -> &'static str {
        match self {
            Self::Jia => "Jia",
            Self::Yi => "Yi",
            Self::Bing => "Bing",
            Self::Ding => "Ding",
            Self::Wu => "Wu",
            Self::Ji => "Ji",
            Self::Geng => "Geng",
            Self::Xin => "Xin",
            Self::Ren => "Ren",
            Self::Gui => "Gui",
        }
    }

    /// Look up a stem by Vietnamese or pinyin name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        let wanted = name.trim().to_lowercase();
        ALL_STEMS.into_iter().find(|s| {
            s.name().to_lowercase() == wanted || s.pinyin().to_lowercase() == wanted
        })
    }

    /// Element of the stem.
    pub const fn element(self) -> FiveElement {
        match self {
            Self::Jia | Self::Yi => FiveElement::Wood,
            Self::Bing | Self::Ding => FiveElement::Fire,
            Self::Wu | Self::Ji => FiveElement::Earth,
            Self::Geng | Self::Xin => FiveElement::Metal,
            Self::Ren | Self::Gui => FiveElement::Water,
        }
    }

    /// Yang for even indices, Yin for odd.
    pub const fn polarity(self) -> Polarity {
        if self.index() % 2 == 0 {
            Polarity::Yang
        } else {
            Polarity::Yin
        }
    }

    /// Five-combination partner (Jia–Ji, Yi–Geng, Bing–Xin, Ding–Ren, Wu–Gui).
    pub const fn combination_partner(self) -> Self {
        Self::from_index(self.index() + 5)
    }

    /// Element produced when this stem combines with its partner.
    pub const fn combination_element(self) -> FiveElement {
        match self {
            Self::Jia | Self::Ji => FiveElement::Earth,
            Self::Yi | Self::Geng => FiveElement::Metal,
            Self::Bing | Self::Xin => FiveElement::Water,
            Self::Ding | Self::Ren => FiveElement::Wood,
            Self::Wu | Self::Gui => FiveElement::Fire,
        }
    }
}

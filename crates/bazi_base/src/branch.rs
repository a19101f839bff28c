//! Earthly branches (Địa Chi) and their hidden stems.

use serde::{Deserialize, Serialize};

use crate::element::FiveElement;
use crate::stem::{HeavenlyStem, Polarity};

/// The 12 earthly branches, named by pinyin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EarthlyBranch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

/// All 12 branches in cyclic order (index 0 = Zi).
pub const ALL_BRANCHES: [EarthlyBranch; 12] = [
    EarthlyBranch::Zi,
    EarthlyBranch::Chou,
    EarthlyBranch::Yin,
    EarthlyBranch::Mao,
    EarthlyBranch::Chen,
    EarthlyBranch::Si,
    EarthlyBranch::Wu,
    EarthlyBranch::Wei,
    EarthlyBranch::Shen,
    EarthlyBranch::You,
    EarthlyBranch::Xu,
    EarthlyBranch::Hai,
];

/// A stem stored inside a branch, with its share of the branch's energy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HiddenStem {
    pub stem: HeavenlyStem,
    /// Share out of 10 of the branch's energy.
    pub weight: f64,
}

const fn hidden(stem: HeavenlyStem, weight: f64) -> HiddenStem {
    HiddenStem { stem, weight }
}

use HeavenlyStem as S;

const HIDDEN_ZI: [HiddenStem; 1] = [hidden(S::Gui, 10.0)];
const HIDDEN_CHOU: [HiddenStem; 3] = [hidden(S::Ji, 6.0), hidden(S::Gui, 3.0), hidden(S::Xin, 1.0)];
const HIDDEN_YIN: [HiddenStem; 3] = [hidden(S::Jia, 6.0), hidden(S::Bing, 3.0), hidden(S::Wu, 1.0)];
const HIDDEN_MAO: [HiddenStem; 1] = [hidden(S::Yi, 10.0)];
const HIDDEN_CHEN: [HiddenStem; 3] = [hidden(S::Wu, 6.0), hidden(S::Yi, 3.0), hidden(S::Gui, 1.0)];
const HIDDEN_SI: [HiddenStem; 3] = [hidden(S::Bing, 6.0), hidden(S::Wu, 3.0), hidden(S::Geng, 1.0)];
const HIDDEN_WU: [HiddenStem; 2] = [hidden(S::Ding, 7.0), hidden(S::Ji, 3.0)];
const HIDDEN_WEI: [HiddenStem; 3] = [hidden(S::Ji, 6.0), hidden(S::Ding, 3.0), hidden(S::Yi, 1.0)];
const HIDDEN_SHEN: [HiddenStem; 3] = [
    hidden(S::Geng, 6.0),
    hidden(S::Ren, 3.0),
    hidden(S::Wu, 1.0),
];
const HIDDEN_YOU: [HiddenStem; 1] = [hidden(S::Xin, 10.0)];
const HIDDEN_XU: [HiddenStem; 3] = [hidden(S::Wu, 6.0), hidden(S::Xin, 3.0), hidden(S::Ding, 1.0)];
const HIDDEN_HAI: [HiddenStem; 2] = [hidden(S::Ren, 7.0), hidden(S::Jia, 3.0)];

impl EarthlyBranch {
    /// 0-based index (Zi=0 .. Hai=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Zi => 0,
            Self::Chou => 1,
            Self::Yin => 2,
            Self::Mao => 3,
            Self::Chen => 4,
            Self::Si => 5,
            Self::Wu => 6,
            Self::Wei => 7,
            Self::Shen => 8,
            Self::You => 9,
            Self::Xu => 10,
            Self::Hai => 11,
        }
    }

    /// Branch at `index mod 12`.
    pub const fn from_index(index: u8) -> Self {
        ALL_BRANCHES[(index % 12) as usize]
    }

    /// Vietnamese name, as emitted by the lunar calendar collaborator.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Zi => "Tý",
            Self::Chou => "Sửu",
            Self::Yin => "Dần",
            Self::Mao => "Mão",
            Self::Chen => "Thìn",
            Self::Si => "Tỵ",
            Self::Wu => "Ngọ",
            Self::Wei => "Mùi",
            Self::Shen => "Thân",
            Self::You => "Dậu",
            Self::Xu => "Tuất",
            Self::Hai => "Hợi",
        }
    }

    /// Pinyin name.
    pub const fn pinyin(self) -> &'static str {
        match self {
            Self::Zi => "Zi",
            Self::Chou => "Chou",
            Self::Yin => "Yin",
            Self::Mao => "Mao",
            Self::Chen => "Chen",
            Self::Si => "Si",
            Self::Wu => "Wu",
            Self::Wei => "Wei",
            Self::Shen => "Shen",
            Self::You => "You",
            Self::Xu => "Xu",
            Self::Hai => "Hai",
        }
    }

    /// Zodiac animal.
    pub const fn animal(self) -> &'static str {
        match self {
            Self::Zi => "Rat",
            Self::Chou => "Ox",
            Self::Yin => "Tiger",
            Self::Mao => "Rabbit",
            Self::Chen => "Dragon",
            Self::Si => "Snake",
            Self::Wu => "Horse",
            Self::Wei => "Goat",
            Self::Shen => "Monkey",
            Self::You => "Rooster",
            Self::Xu => "Dog",
            Self::Hai => "Pig",
        }
    }

    /// Look up a branch by Vietnamese or pinyin name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        let wanted = name.trim().to_lowercase();
        ALL_BRANCHES.into_iter().find(|b| {
            b.name().to_lowercase() == wanted || b.pinyin().to_lowercase() == wanted
        })
    }

    /// Native element of the branch.
    pub const fn element(self) -> FiveElement {
        match self {
            Self::Yin | Self::Mao => FiveElement::Wood,
            Self::Si | Self::Wu => FiveElement::Fire,
            Self::Chen | Self::Xu | Self::Chou | Self::Wei => FiveElement::Earth,
            Self::Shen | Self::You => FiveElement::Metal,
            Self::Hai | Self::Zi => FiveElement::Water,
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

    /// Hidden stems, main stem first.
    pub const fn hidden_stems(self) -> &'static [HiddenStem] {
        match self {
            Self::Zi => &HIDDEN_ZI,
            Self::Chou => &HIDDEN_CHOU,
            Self::Yin => &HIDDEN_YIN,
            Self::Mao => &HIDDEN_MAO,
            Self::Chen => &HIDDEN_CHEN,
            Self::Si => &HIDDEN_SI,
            Self::Wu => &HIDDEN_WU,
            Self::Wei => &HIDDEN_WEI,
            Self::Shen => &HIDDEN_SHEN,
            Self::You => &HIDDEN_YOU,
            Self::Xu => &HIDDEN_XU,
            Self::Hai => &HIDDEN_HAI,
        }
    }

    /// The opposing branch (six clash).
    pub const fn clash_partner(self) -> Self {
        Self::from_index(self.index() + 6)
    }

    /// Whether two branches stand in six clash.
    pub const fn clashes_with(self, other: Self) -> bool {
        self.clash_partner().index() == other.index()
    }

    /// Six-harmony partner and the element the pair produces.
    pub const fn six_harmony(self) -> (Self, FiveElement) {
        match self {
            Self::Zi => (Self::Chou, FiveElement::Earth),
            Self::Chou => (Self::Zi, FiveElement::Earth),
            Self::Yin => (Self::Hai, FiveElement::Wood),
            Self::Hai => (Self::Yin, FiveElement::Wood),
            Self::Mao => (Self::Xu, FiveElement::Fire),
            Self::Xu => (Self::Mao, FiveElement::Fire),
            Self::Chen => (Self::You, FiveElement::Metal),
            Self::You => (Self::Chen, FiveElement::Metal),
            Self::Si => (Self::Shen, FiveElement::Water),
            Self::Shen => (Self::Si, FiveElement::Water),
            Self::Wu => (Self::Wei, FiveElement::Earth),
            Self::Wei => (Self::Wu, FiveElement::Earth),
        }
    }

    /// Whether the branch is one of the four earth storehouses.
    pub const fn is_storehouse(self) -> bool {
        matches!(self, Self::Chen | Self::Xu | Self::Chou | Self::Wei)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, b) in ALL_BRANCHES.iter().enumerate() {
            assert_eq!(b.index() as usize, i);
            assert_eq!(EarthlyBranch::from_index(i as u8), *b);
        }
    }

    #[test]
    fn animals_follow_branch_order() {
        assert_eq!(EarthlyBranch::Zi.animal(), "Rat");
        assert_eq!(EarthlyBranch::Wei.animal(), "Goat");
        assert_eq!(EarthlyBranch::Hai.animal(), "Pig");
        let mut seen: Vec<_> = ALL_BRANCHES.iter().map(|b| b.animal()).collect();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), 12);
    }

    #[test]
    fn hidden_weights_bounded() {
        for b in ALL_BRANCHES {
            let sum: f64 = b.hidden_stems().iter().map(|h| h.weight).sum();
            assert!((sum - 10.0).abs() < 1e-12, "{} sums to {sum}", b.pinyin());
            assert!(sum <= 30.0);
        }
    }

    #[test]
    fn main_hidden_stem_matches_native_element() {
        for b in ALL_BRANCHES {
            assert_eq!(b.hidden_stems()[0].stem.element(), b.element(), "{}", b.pinyin());
        }
    }

    #[test]
    fn clash_pairs() {
        assert!(EarthlyBranch::Zi.clashes_with(EarthlyBranch::Wu));
        assert!(EarthlyBranch::Si.clashes_with(EarthlyBranch::Hai));
        assert!(EarthlyBranch::Chen.clashes_with(EarthlyBranch::Xu));
        assert!(!EarthlyBranch::Zi.clashes_with(EarthlyBranch::Zi));
        assert!(!EarthlyBranch::Zi.clashes_with(EarthlyBranch::Chou));
        for b in ALL_BRANCHES {
            assert_eq!(b.clash_partner().clash_partner(), b);
        }
    }

    #[test]
    fn six_harmony_symmetric() {
        for b in ALL_BRANCHES {
            let (p, e) = b.six_harmony();
            assert_eq!(p.six_harmony(), (b, e));
        }
    }

    #[test]
    fn parse_tones_distinguish_zi_and_si() {
        assert_eq!(EarthlyBranch::from_name("Tý"), Some(EarthlyBranch::Zi));
        assert_eq!(EarthlyBranch::from_name("Tỵ"), Some(EarthlyBranch::Si));
        assert_eq!(EarthlyBranch::from_name("hợi"), Some(EarthlyBranch::Hai));
        assert_eq!(EarthlyBranch::from_name("Shen"), Some(EarthlyBranch::Shen));
        assert_eq!(EarthlyBranch::from_name("Giáp"), None);
    }
}

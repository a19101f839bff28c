//! Twelve life stages (Trường Sinh) of a stem across the branches.

use serde::{Deserialize, Serialize};

use crate::branch::EarthlyBranch;
use crate::stem::{HeavenlyStem, Polarity};

/// Growth stage of a stem's energy in a branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LifeStage {
    Birth,
    Bath,
    Crown,
    Officer,
    Peak,
    Decline,
    Sickness,
    Death,
    Tomb,
    Extinction,
    Conceived,
    Nurture,
}

pub const ALL_LIFE_STAGES: [LifeStage; 12] = [
    LifeStage::Birth,
    LifeStage::Bath,
    LifeStage::Crown,
    LifeStage::Officer,
    LifeStage::Peak,
    LifeStage::Decline,
    LifeStage::Sickness,
    LifeStage::Death,
    LifeStage::Tomb,
    LifeStage::Extinction,
    LifeStage::Conceived,
    LifeStage::Nurture,
];

impl LifeStage {
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Birth => "Trường Sinh",
            Self::Bath => "Mộc Dục",
            Self::Crown => "Quan Đới",
            Self::Officer => "Lâm Quan",
            Self::Peak => "Đế Vượng",
            Self::Decline => "Suy",
            Self::Sickness => "Bệnh",
            Self::Death => "Tử",
            Self::Tomb => "Mộ",
            Self::Extinction => "Tuyệt",
            Self::Conceived => "Thai",
            Self::Nurture => "Dưỡng",
        }
    }

    /// Stage of `stem` in `branch`.
    ///
    /// Yang stems walk forward through the branches from their birth
    /// branch, Yin stems walk backward.
    pub const fn of(stem: HeavenlyStem, branch: EarthlyBranch) -> Self {
        let birth = birth_branch(stem).index();
        let step = match stem.polarity() {
            Polarity::Yang => (branch.index() + 12 - birth) % 12,
            Polarity::Yin => (birth + 12 - branch.index()) % 12,
        };
        ALL_LIFE_STAGES[step as usize]
    }
}

/// Branch where the stem's energy is born.
pub const fn birth_branch(stem: HeavenlyStem) -> EarthlyBranch {
    use EarthlyBranch as B;
    match stem {
        HeavenlyStem::Jia => B::Hai,
        HeavenlyStem::Yi => B::Wu,
        HeavenlyStem::Bing | HeavenlyStem::Wu => B::Yin,
        HeavenlyStem::Ding | HeavenlyStem::Ji => B::You,
        HeavenlyStem::Geng => B::Si,
        HeavenlyStem::Xin => B::Zi,
        HeavenlyStem::Ren => B::Shen,
        HeavenlyStem::Gui => B::Mao,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stem::ALL_STEMS;

    #[test]
    fn birth_branch_is_birth() {
        for s in ALL_STEMS {
            assert_eq!(LifeStage::of(s, birth_branch(s)), LifeStage::Birth);
        }
    }

    #[test]
    fn peak_stages() {
        assert_eq!(LifeStage::of(HeavenlyStem::Jia, EarthlyBranch::Mao), LifeStage::Peak);
        assert_eq!(LifeStage::of(HeavenlyStem::Yi, EarthlyBranch::Yin), LifeStage::Peak);
        assert_eq!(LifeStage::of(HeavenlyStem::Geng, EarthlyBranch::You), LifeStage::Peak);
        assert_eq!(LifeStage::of(HeavenlyStem::Gui, EarthlyBranch::Hai), LifeStage::Peak);
        assert_eq!(LifeStage::of(HeavenlyStem::Gui, EarthlyBranch::Zi), LifeStage::Officer);
    }

    #[test]
    fn each_branch_gets_distinct_stage() {
        for s in ALL_STEMS {
            let mut seen = [false; 12];
            for i in 0..12u8 {
                seen[LifeStage::of(s, EarthlyBranch::from_index(i)).index() as usize] = true;
            }
            assert!(seen.iter().all(|&b| b));
        }
    }

    #[test]
    fn yin_stem_walks_backward() {
        assert_eq!(LifeStage::of(HeavenlyStem::Yi, EarthlyBranch::Si), LifeStage::Bath);
        assert_eq!(LifeStage::of(HeavenlyStem::Yi, EarthlyBranch::Wei), LifeStage::Nurture);
    }
}

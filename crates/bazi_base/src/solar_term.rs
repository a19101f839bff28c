//! The 24 solar terms (Tiết Khí) and the month branch each one falls in.
//!
//! The civil month of the Four Pillars starts at a "node" term (Lập xuân,
//! Kinh trập, ...) and spans the following "middle" term, so two
//! consecutive terms share one branch. Lập xuân opens the Yin month.

use serde::{Deserialize, Serialize};

use crate::branch::EarthlyBranch;
use crate::error::BaziError;

/// The 24 solar terms, starting at Start of Spring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SolarTerm {
    LiChun,
    YuShui,
    JingZhe,
    ChunFen,
    QingMing,
    GuYu,
    LiXia,
    XiaoMan,
    MangZhong,
    XiaZhi,
    XiaoShu,
    DaShu,
    LiQiu,
    ChuShu,
    BaiLu,
    QiuFen,
    HanLu,
    ShuangJiang,
    LiDong,
    XiaoXue,
    DaXue,
    DongZhi,
    XiaoHan,
    DaHan,
}

/// All 24 terms in order (index 0 = Start of Spring).
pub const ALL_SOLAR_TERMS: [SolarTerm; 24] = [
    SolarTerm::LiChun,
    SolarTerm::YuShui,
    SolarTerm::JingZhe,
    SolarTerm::ChunFen,
    SolarTerm::QingMing,
    SolarTerm::GuYu,
    SolarTerm::LiXia,
    SolarTerm::XiaoMan,
    SolarTerm::MangZhong,
    SolarTerm::XiaZhi,
    SolarTerm::XiaoShu,
    SolarTerm::DaShu,
    SolarTerm::LiQiu,
    SolarTerm::ChuShu,
    SolarTerm::BaiLu,
    SolarTerm::QiuFen,
    SolarTerm::HanLu,
    SolarTerm::ShuangJiang,
    SolarTerm::LiDong,
    SolarTerm::XiaoXue,
    SolarTerm::DaXue,
    SolarTerm::DongZhi,
    SolarTerm::XiaoHan,
    SolarTerm::DaHan,
];

impl SolarTerm {
    /// 0-based index (Start of Spring = 0).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Vietnamese label, as emitted by the lunar calendar collaborator.
    pub const fn name(self) -> &'static str {
        match self {
            Self::LiChun => "Lập xuân",
            Self::YuShui => "Vũ thủy",
            Self::JingZhe => "Kinh trập",
            Self::ChunFen => "Xuân phân",
            Self::QingMing => "Thanh minh",
            Self::GuYu => "Cốc vũ",
            Self::LiXia => "Lập hạ",
            Self::XiaoMan => "Tiểu mãn",
            Self::MangZhong => "Mang chủng",
            Self::XiaZhi => "Hạ chí",
            Self::XiaoShu => "Tiểu thử",
            Self::DaShu => "Đại thử",
            Self::LiQiu => "Lập thu",
            Self::ChuShu => "Xử thử",
            Self::BaiLu => "Bạch lộ",
            Self::QiuFen => "Thu phân",
            Self::HanLu => "Hàn lộ",
            Self::ShuangJiang => "Sương giáng",
            Self::LiDong => "Lập đông",
            Self::XiaoXue => "Tiểu tuyết",
            Self::DaXue => "Đại tuyết",
            Self::DongZhi => "Đông chí",
            Self::XiaoHan => "Tiểu hàn",
            Self::DaHan => "Đại hàn",
        }
    }

    /// English name.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::LiChun => "Start of Spring",
            Self::YuShui => "Rain Water",
            Self::JingZhe => "Awakening of Insects",
            Self::ChunFen => "Spring Equinox",
            Self::QingMing => "Clear and Bright",
            Self::GuYu => "Grain Rain",
            Self::LiXia => "Start of Summer",
            Self::XiaoMan => "Grain Buds",
            Self::MangZhong => "Grain in Ear",
            Self::XiaZhi => "Summer Solstice",
            Self::XiaoShu => "Minor Heat",
            Self::DaShu => "Major Heat",
            Self::LiQiu => "Start of Autumn",
            Self::ChuShu => "End of Heat",
            Self::BaiLu => "White Dew",
            Self::QiuFen => "Autumn Equinox",
            Self::HanLu => "Cold Dew",
            Self::ShuangJiang => "Frost's Descent",
            Self::LiDong => "Start of Winter",
            Self::XiaoXue => "Minor Snow",
            Self::DaXue => "Major Snow",
            Self::DongZhi => "Winter Solstice",
            Self::XiaoHan => "Minor Cold",
            Self::DaHan => "Major Cold",
        }
    }

    /// Resolve a collaborator label (Vietnamese or English, case-insensitive).
    pub fn from_name(label: &str) -> Result<Self, BaziError> {
        let wanted = label.trim().to_lowercase();
        ALL_SOLAR_TERMS
            .into_iter()
            .find(|t| {
                t.name().to_lowercase() == wanted || t.english_name().to_lowercase() == wanted
            })
            .ok_or_else(|| BaziError::Lookup(label.to_string()))
    }

    /// Branch of the civil month this term belongs to.
    pub const fn month_branch(self) -> EarthlyBranch {
        use EarthlyBranch as B;
        match self {
            Self::LiChun | Self::YuShui => B::Yin,
            Self::JingZhe | Self::ChunFen => B::Mao,
            Self::QingMing | Self::GuYu => B::Chen,
            Self::LiXia | Self::XiaoMan => B::Si,
            Self::MangZhong | Self::XiaZhi => B::Wu,
            Self::XiaoShu | Self::DaShu => B::Wei,
            Self::LiQiu | Self::ChuShu => B::Shen,
            Self::BaiLu | Self::QiuFen => B::You,
            Self::HanLu | Self::ShuangJiang => B::Xu,
            Self::LiDong | Self::XiaoXue => B::Hai,
            Self::DaXue | Self::DongZhi => B::Zi,
            Self::XiaoHan | Self::DaHan => B::Chou,
        }
    }

    /// Terms that can still be active in the first lunar month while the
    /// solar year has not turned yet.
    pub const fn precedes_spring(self) -> bool {
        matches!(self, Self::XiaoHan | Self::DaHan | Self::DongZhi)
    }

    /// Terms that can already be active in the twelfth lunar month after
    /// the solar year has turned.
    pub const fn opens_spring(self) -> bool {
        matches!(self, Self::LiChun | Self::YuShui)
    }
}

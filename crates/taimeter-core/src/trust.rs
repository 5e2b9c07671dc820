use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Institutional trust tier of a data source, strictly ordered L0 < L1 < L2 < L3.
///
/// L0 is never produced by classification; it marks a record whose
/// confidence was never set.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum SourceConfidence {
    L0,
    L1,
    L2,
    L3,
}

/// Final trust-rating outcome. TAI3 is strictly the strongest guarantee.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum TaiLevel {
    None,
    Tai1,
    Tai2,
    Tai3,
}

impl SourceConfidence {
    pub fn label(&self) -> &'static str {
        match self {
            SourceConfidence::L0 => "来源未知",
            SourceConfidence::L1 => "一般来源",
            SourceConfidence::L2 => "专业机构来源",
            SourceConfidence::L3 => "权威来源",
        }
    }
}

impl TaiLevel {
    pub fn label(&self) -> &'static str {
        match self {
            TaiLevel::None => "未达标",
            TaiLevel::Tai1 => "基础可信",
            TaiLevel::Tai2 => "较高可信",
            TaiLevel::Tai3 => "高度可信",
        }
    }
}

impl FromStr for SourceConfidence {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "l0" => Ok(SourceConfidence::L0),
            "l1" => Ok(SourceConfidence::L1),
            "l2" => Ok(SourceConfidence::L2),
            "l3" => Ok(SourceConfidence::L3),
            _ => Err(format!("unknown source confidence: {value}")),
        }
    }
}

impl fmt::Display for SourceConfidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            SourceConfidence::L0 => "L0",
            SourceConfidence::L1 => "L1",
            SourceConfidence::L2 => "L2",
            SourceConfidence::L3 => "L3",
        };
        write!(f, "{value}")
    }
}

impl fmt::Display for TaiLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            TaiLevel::None => "NONE",
            TaiLevel::Tai1 => "TAI1",
            TaiLevel::Tai2 => "TAI2",
            TaiLevel::Tai3 => "TAI3",
        };
        write!(f, "{value}")
    }
}

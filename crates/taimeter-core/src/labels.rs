//! Closed label vocabularies used by the classifiers.
//!
//! Every enum serializes as its fixed Chinese label so JSON output matches
//! the vocabulary consumers expect verbatim.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentinel value for `involved_company` when no single company applies.
/// The scoring engine treats it as a non-match.
pub const NO_COMPANY: &str = "不涉及";

/// Topical category of an indicator. A record carries a non-empty ordered
/// set of these.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    #[serde(rename = "行业数据")]
    Industry,
    #[serde(rename = "区域数据")]
    Regional,
    #[serde(rename = "企业数据")]
    Enterprise,
    #[serde(rename = "政策相关")]
    Policy,
    #[serde(rename = "研报相关")]
    Research,
    #[serde(rename = "新闻相关")]
    News,
    #[serde(rename = "其他")]
    Other,
}

/// Coarse institutional category of a data source.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SourceType {
    #[serde(rename = "国家机关")]
    Government,
    #[serde(rename = "行业协会")]
    TradeAssociation,
    #[serde(rename = "国际组织")]
    InternationalOrg,
    #[serde(rename = "行业信息网站")]
    IndustryPortal,
    #[serde(rename = "数据、咨询公司")]
    Consultancy,
    #[serde(rename = "企业")]
    Enterprise,
    #[serde(rename = "新闻媒体")]
    NewsMedia,
    #[serde(rename = "价格指数")]
    PriceIndex,
    #[serde(rename = "其他")]
    Other,
}

/// Abstraction scope of an indicator: micro (single entity), meso
/// (sector/group), macro (national/global).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Granularity {
    #[serde(rename = "L1 (微观层级)")]
    Micro,
    #[serde(rename = "L2 (中观层级)")]
    Meso,
    #[serde(rename = "L3 (宏观层级)")]
    Macro,
}

/// Guessed payload type of an indicator.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DataType {
    #[serde(rename = "文本")]
    Text,
    #[serde(rename = "浮点数")]
    Float,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::Industry => "行业数据",
            Category::Regional => "区域数据",
            Category::Enterprise => "企业数据",
            Category::Policy => "政策相关",
            Category::Research => "研报相关",
            Category::News => "新闻相关",
            Category::Other => "其他",
        }
    }

    /// True for the text-like categories whose records carry prose rather
    /// than a numeric series.
    pub fn is_qualitative(&self) -> bool {
        matches!(self, Category::Policy | Category::Research | Category::News)
    }
}

impl SourceType {
    pub fn label(&self) -> &'static str {
        match self {
            SourceType::Government => "国家机关",
            SourceType::TradeAssociation => "行业协会",
            SourceType::InternationalOrg => "国际组织",
            SourceType::IndustryPortal => "行业信息网站",
            SourceType::Consultancy => "数据、咨询公司",
            SourceType::Enterprise => "企业",
            SourceType::NewsMedia => "新闻媒体",
            SourceType::PriceIndex => "价格指数",
            SourceType::Other => "其他",
        }
    }
}

impl Granularity {
    pub fn label(&self) -> &'static str {
        match self {
            Granularity::Micro => "L1 (微观层级)",
            Granularity::Meso => "L2 (中观层级)",
            Granularity::Macro => "L3 (宏观层级)",
        }
    }
}

impl DataType {
    pub fn label(&self) -> &'static str {
        match self {
            DataType::Text => "文本",
            DataType::Float => "浮点数",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

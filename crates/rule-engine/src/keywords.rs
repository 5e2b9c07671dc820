//! Curated keyword sets and the substring matcher shared by all
//! classifiers.
//!
//! Each classifier walks its rule table top to bottom and tests the
//! candidate text against these sets; the set contents are part of the
//! classification contract, so they live here as named constants rather
//! than inline literals.

/// Government / official institutions (source-type rule 1).
pub const GOVERNMENT: &[&str] = &["局", "部", "委员会", "政府"];

/// Trade associations and learned societies (source-type rule 2).
pub const ASSOCIATION: &[&str] = &["协会", "联合会", "学会"];

/// International organizations (source-type rule 3).
pub const INTERNATIONAL: &[&str] = &["组织", "WTO", "IMF", "World Bank"];

/// Exchanges and trading centers (source-type rule 4).
pub const EXCHANGE: &[&str] = &["交易所", "交易中心"];

/// Data and consultancy firms (source-type rule 5).
pub const CONSULTANCY: &[&str] = &["咨询", "Research", "智库"];

/// Generic companies (source-type rule 6).
pub const COMPANY: &[&str] = &["公司", "集团"];

/// News media outlets (source-type rule 7).
pub const MEDIA: &[&str] = &["新闻", "日报", "网"];

/// Price indices (source-type rule 8).
pub const PRICE_INDEX: &[&str] = &["指数", "Index"];

/// Sources granted the top confidence tier.
pub const HIGH_CONFIDENCE: &[&str] = &["局", "部", "政府", "交易所", "官方", "统计", "央行"];

/// Professional institutions granted the middle confidence tier.
pub const PROFESSIONAL: &[&str] = &["协会", "研究院", "咨询", "智库"];

/// Policy / regulation indicators.
pub const POLICY: &[&str] = &["政策", "法规", "通知", "意见"];

/// Research-report indicators.
pub const RESEARCH_REPORT: &[&str] = &["研报", "深度报告", "纪要"];

/// News indicators.
pub const NEWS: &[&str] = &["新闻", "快讯"];

/// Enterprise signals in an indicator name.
pub const ENTERPRISE_NAME: &[&str] = &["公司", "企业", "个股"];

/// Regional (sub-national) signals in an indicator name.
pub const REGIONAL: &[&str] = &["省", "市", "区", "县"];

/// National-scope signals that veto the regional rule.
pub const NATIONAL: &[&str] = &["全国", "中国", "China"];

/// Macro-scope keywords, matched case-insensitively against the name.
pub const MACRO: &[&str] = &[
    "GDP", "CPI", "PPI", "宏观", "总量", "全国", "全球", "人口", "就业率", "M2",
];

/// National/global scope names that force macro granularity outright.
pub const MACRO_SCOPE: &[&str] = &["中国", "全国", "全球"];

/// Micro-scope keywords in an indicator name.
pub const MICRO: &[&str] = &["公司", "企业", "个股", "单品", "财务报表", "营收", "利润"];

/// Names suggesting a text payload rather than a numeric series.
pub const TEXT_TYPE: &[&str] = &["报告", "政策", "纪要"];

/// Names suggesting a percentage unit.
pub const RATE_UNIT: &[&str] = &["率", "比"];

/// True if `haystack` contains any of the keywords as a substring.
pub fn contains_any(haystack: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| haystack.contains(k))
}

/// Case-insensitive variant for sets with latin abbreviations (GDP, M2).
/// The haystack is uppercased; keywords are stored uppercase already.
pub fn contains_any_uppercase(haystack: &str, keywords: &[&str]) -> bool {
    let upper = haystack.to_uppercase();
    keywords.iter().any(|k| upper.contains(k))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_any_matches_substrings() {
        assert!(contains_any("国家统计局", GOVERNMENT));
        assert!(!contains_any("钢之家", GOVERNMENT));
    }

    #[test]
    fn uppercase_matching_catches_lowercase_abbreviations() {
        assert!(contains_any_uppercase("m2货币供应量", MACRO));
        assert!(contains_any_uppercase("gdp增速", MACRO));
        assert!(!contains_any_uppercase("粗钢产量", MACRO));
    }

    #[test]
    fn empty_keyword_hit_is_impossible() {
        assert!(!contains_any("任意文本", &[]));
    }
}

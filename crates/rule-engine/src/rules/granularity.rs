//! Granularity classification: five ordered rules, first match wins,
//! meso as the terminal default.

use taimeter_core::labels::{Category, Granularity};

use crate::keywords::{contains_any, contains_any_uppercase, MACRO, MACRO_SCOPE, MICRO};

/// Maps name, source, and already-decided categories to one of the three
/// abstraction levels.
pub fn classify_granularity(
    name: &str,
    source_name: &str,
    categories: &[Category],
) -> Granularity {
    // Rule 1: a statistics bureau publishing a macro-keyword indicator.
    if source_name.contains("统计局") && contains_any_uppercase(name, MACRO) {
        return Granularity::Macro;
    }

    // Rule 2: explicitly national or global scope.
    if contains_any(name, MACRO_SCOPE) {
        return Granularity::Macro;
    }

    // Rule 3: enterprise records and announcement feeds are single-entity.
    if categories.contains(&Category::Enterprise) || source_name.contains("公告") {
        return Granularity::Micro;
    }

    // Rule 4: micro keywords in the name.
    if contains_any(name, MICRO) {
        return Granularity::Micro;
    }

    Granularity::Meso
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statistics_bureau_macro_keyword_is_macro() {
        assert_eq!(
            classify_granularity("GDP同比增速", "国家统计局", &[Category::Industry]),
            Granularity::Macro
        );
        assert_eq!(
            classify_granularity("m2货币供应量", "国家统计局", &[Category::Industry]),
            Granularity::Macro
        );
    }

    #[test]
    fn macro_keyword_without_bureau_does_not_fire_rule_one() {
        // "就业率" is a macro keyword but the source is not a bureau and the
        // name has no national scope; falls through to meso.
        assert_eq!(
            classify_granularity("就业率调查", "某咨询", &[Category::Industry]),
            Granularity::Meso
        );
    }

    #[test]
    fn national_scope_names_are_macro() {
        assert_eq!(
            classify_granularity("中国粗钢产量", "钢协", &[Category::Industry]),
            Granularity::Macro
        );
        assert_eq!(
            classify_granularity("全球集装箱运价", "某指数", &[Category::Industry]),
            Granularity::Macro
        );
    }

    #[test]
    fn enterprise_category_forces_micro() {
        assert_eq!(
            classify_granularity("季度营收", "上市公司公告", &[Category::Enterprise]),
            Granularity::Micro
        );
    }

    #[test]
    fn macro_rules_outrank_micro_rules() {
        // Both "全国" (macro scope) and "企业" (micro keyword) appear; the
        // earlier rule decides.
        assert_eq!(
            classify_granularity("全国企业景气指数", "统计局", &[Category::Industry]),
            Granularity::Macro
        );
    }

    #[test]
    fn micro_keywords_in_name_are_micro() {
        assert_eq!(
            classify_granularity("单品销量", "某平台", &[Category::Industry]),
            Granularity::Micro
        );
        assert_eq!(
            classify_granularity("财务报表摘要", "某平台", &[Category::Industry]),
            Granularity::Micro
        );
    }

    #[test]
    fn default_is_meso() {
        assert_eq!(
            classify_granularity("粗钢吨钢碳排放量", "生态环境部", &[Category::Industry]),
            Granularity::Meso
        );
    }
}

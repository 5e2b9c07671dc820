//! Topical category classification.
//!
//! Strict priority order: the three text paths (policy, research report,
//! news) each yield exactly one label and suppress everything after them.
//! The entity path may add enterprise and regional labels independently,
//! with industry data as its default when neither fires. The result is an
//! ordered, duplicate-free, never-empty sequence; consumers rely on the
//! first-label convention.

use taimeter_core::labels::Category;

use crate::keywords::{
    contains_any, ENTERPRISE_NAME, NATIONAL, NEWS, POLICY, REGIONAL, RESEARCH_REPORT,
};

/// Maps an indicator name and source name to its category labels.
pub fn classify_categories(name: &str, source_name: &str) -> Vec<Category> {
    let mut categories = Vec::new();

    if contains_any(name, POLICY) {
        categories.push(Category::Policy);
    } else if contains_any(name, RESEARCH_REPORT) {
        categories.push(Category::Research);
    } else if contains_any(name, NEWS) {
        categories.push(Category::News);
    } else {
        let is_enterprise = source_name.contains("公告") || contains_any(name, ENTERPRISE_NAME);
        if is_enterprise {
            categories.push(Category::Enterprise);
        }

        let is_regional = contains_any(name, REGIONAL);
        let is_national = contains_any(name, NATIONAL);
        if is_regional && !is_national {
            categories.push(Category::Regional);
        }

        if categories.is_empty() {
            categories.push(Category::Industry);
        }
    }

    // Unreachable today (every branch above pushes), kept as the
    // contract's terminal default.
    if categories.is_empty() {
        categories.push(Category::Other);
    }

    categories
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn policy_keywords_win_outright() {
        assert_eq!(
            classify_categories("钢铁行业产能置换政策", "工信部"),
            vec![Category::Policy]
        );
        assert_eq!(
            classify_categories("环保法规汇编", "生态环境部"),
            vec![Category::Policy]
        );
    }

    #[test]
    fn policy_preempts_entity_path() {
        // Name carries both a policy keyword and a company keyword; the
        // text path suppresses the entity rules entirely.
        assert_eq!(
            classify_categories("公司监管政策", "证监会"),
            vec![Category::Policy]
        );
    }

    #[test]
    fn report_and_news_paths_fire_in_order() {
        assert_eq!(
            classify_categories("钢铁行业深度报告", "某券商"),
            vec![Category::Research]
        );
        assert_eq!(
            classify_categories("会议纪要", "某机构"),
            vec![Category::Research]
        );
        assert_eq!(
            classify_categories("行业快讯", "某媒体"),
            vec![Category::News]
        );
    }

    #[test]
    fn enterprise_signal_from_source_or_name() {
        assert_eq!(
            classify_categories("季度营收数据", "上市公司公告"),
            vec![Category::Enterprise]
        );
        assert_eq!(
            classify_categories("个股估值", "某数据商"),
            vec![Category::Enterprise]
        );
    }

    #[test]
    fn regional_requires_no_national_signal() {
        assert_eq!(
            classify_categories("河北省粗钢产量", "统计局"),
            vec![Category::Regional]
        );
        // "中国" vetoes the regional label; entity default applies.
        assert_eq!(
            classify_categories("中国城市化率", "统计局"),
            vec![Category::Industry]
        );
    }

    #[test]
    fn enterprise_and_regional_can_coexist_in_order() {
        assert_eq!(
            classify_categories("广东省龙头企业利润", "某数据商"),
            vec![Category::Enterprise, Category::Regional]
        );
    }

    #[test]
    fn entity_path_defaults_to_industry() {
        assert_eq!(
            classify_categories("粗钢吨钢碳排放量", "生态环境部"),
            vec![Category::Industry]
        );
    }

    #[test]
    fn result_is_never_empty() {
        for (name, source) in [("x", "y"), ("政策", ""), ("", "公告")] {
            assert!(!classify_categories(name, source).is_empty());
        }
    }
}

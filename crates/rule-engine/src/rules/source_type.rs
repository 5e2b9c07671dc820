//! Source-type classification.
//!
//! An ordered table of (keyword set, source type) pairs, evaluated top to
//! bottom, first match wins. Order matters: loose sets overlap (a
//! government bureau name may also contain "网"), so government outranks
//! association, international org, exchange, consultancy, company, media,
//! and index, in that fixed sequence.

use taimeter_core::labels::SourceType;

use crate::keywords::{
    contains_any, ASSOCIATION, COMPANY, CONSULTANCY, EXCHANGE, GOVERNMENT, INTERNATIONAL, MEDIA,
    PRICE_INDEX,
};

const RULES: &[(&[&str], SourceType)] = &[
    (GOVERNMENT, SourceType::Government),
    (ASSOCIATION, SourceType::TradeAssociation),
    (INTERNATIONAL, SourceType::InternationalOrg),
    (EXCHANGE, SourceType::IndustryPortal),
    (CONSULTANCY, SourceType::Consultancy),
    (COMPANY, SourceType::Enterprise),
    (MEDIA, SourceType::NewsMedia),
    (PRICE_INDEX, SourceType::PriceIndex),
];

/// Maps a source name to its coarse institutional category.
pub fn classify_source_type(source_name: &str) -> SourceType {
    for (set, source_type) in RULES {
        if contains_any(source_name, set) {
            return *source_type;
        }
    }
    SourceType::Other
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn government_names_classify_first() {
        assert_eq!(classify_source_type("国家统计局"), SourceType::Government);
        assert_eq!(classify_source_type("生态环境部"), SourceType::Government);
        assert_eq!(classify_source_type("发改委员会"), SourceType::Government);
    }

    #[test]
    fn government_outranks_media_on_overlap() {
        // "局" and "网" both hit; the earlier rule decides.
        assert_eq!(classify_source_type("统计局官网"), SourceType::Government);
    }

    #[test]
    fn each_branch_is_reachable() {
        assert_eq!(
            classify_source_type("中国钢铁工业协会"),
            SourceType::TradeAssociation
        );
        assert_eq!(classify_source_type("WTO"), SourceType::InternationalOrg);
        assert_eq!(
            classify_source_type("上海期货交易所"),
            SourceType::IndustryPortal
        );
        assert_eq!(classify_source_type("某某咨询"), SourceType::Consultancy);
        assert_eq!(classify_source_type("宝钢集团"), SourceType::Enterprise);
        assert_eq!(classify_source_type("证券日报"), SourceType::NewsMedia);
        assert_eq!(classify_source_type("波罗的海指数"), SourceType::PriceIndex);
    }

    #[test]
    fn unmatched_names_fall_back_to_other() {
        assert_eq!(classify_source_type("钢之家"), SourceType::Other);
    }

    #[test]
    fn rule_table_covers_every_non_default_type() {
        assert_eq!(RULES.len(), 8);
    }
}

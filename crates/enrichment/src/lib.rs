//! Enrichment collaborator seam.
//!
//! The semantic free-text fields of a metadata record (definition, tags,
//! usage notes, scenes, importance, company, industries) are filled by an
//! external generative service. This crate owns the trait that service
//! implements and a deterministic fallback used whenever no live
//! implementation is wired in or the live one fails. The rule engine never
//! depends on which strategy ran.

use thiserror::Error;

use taimeter_core::types::{IndicatorInput, Metadata, SemanticFields};

pub mod fallback;

pub use fallback::FallbackEnricher;

#[derive(Debug, Error)]
pub enum EnrichError {
    #[error("enrichment service unavailable: {0}")]
    Unavailable(String),
    #[error("enrichment returned an unusable record: {0}")]
    BadResponse(String),
}

/// Strategy that fills the semantic fields of a partial record, given the
/// raw input and the already-decided classification (categories,
/// granularity).
pub trait Enricher {
    fn enrich(&self, input: &IndicatorInput, meta: &Metadata)
        -> Result<SemanticFields, EnrichError>;

    fn name(&self) -> &str;
}

/// Runs the given enricher and substitutes the deterministic fallback on
/// any failure, so downstream scoring never observes unset semantic
/// fields through this path.
pub fn enrich_or_fallback(
    enricher: &dyn Enricher,
    input: &IndicatorInput,
    meta: &Metadata,
) -> SemanticFields {
    match enricher.enrich(input, meta) {
        Ok(fields) => fields,
        Err(_) => FallbackEnricher.fill(input, meta),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taimeter_core::config::Config;
    use taimeter_core::ids::SequentialIds;
    use time::macros::date;

    struct FailingEnricher;

    impl Enricher for FailingEnricher {
        fn enrich(
            &self,
            _input: &IndicatorInput,
            _meta: &Metadata,
        ) -> Result<SemanticFields, EnrichError> {
            Err(EnrichError::Unavailable("no credentials".to_string()))
        }

        fn name(&self) -> &str {
            "failing"
        }
    }

    fn assembled(name: &str, source: &str) -> (IndicatorInput, Metadata) {
        let input = IndicatorInput::new(name, source, None, None).unwrap();
        let mut assembler = rule_engine::Assembler::from_config(
            &Config::default_config(),
            Box::new(SequentialIds::default()),
        );
        let meta = assembler.assemble(&input, date!(2024 - 01 - 15));
        (input, meta)
    }

    #[test]
    fn failure_is_recovered_by_the_fallback() {
        let (input, meta) = assembled("粗钢产量", "国家统计局");
        let fields = enrich_or_fallback(&FailingEnricher, &input, &meta);
        assert!(!fields.is_unset());
        assert!(!fields.scenes.is_empty());
        assert!(!fields.industries.is_empty());
    }

    #[test]
    fn carbon_emission_scenario_reaches_tai3_end_to_end() {
        let input = IndicatorInput::new(
            "粗钢吨钢碳排放量",
            "生态环境部",
            Some("0".to_string()),
            Some("10000".to_string()),
        )
        .unwrap();
        let mut assembler = rule_engine::Assembler::from_config(
            &Config::default_config(),
            Box::new(SequentialIds::default()),
        );
        let meta = assembler.assemble(&input, date!(2024 - 01 - 15));
        assert_eq!(meta.miss_rate, 0.0);
        assert_eq!(meta.data_volume, 10_000);

        let enriched = meta.with_semantic(enrich_or_fallback(&FallbackEnricher, &input, &meta));
        let score = rule_engine::score(&enriched);

        assert_eq!(score.dimensions.availability, 10.0);
        assert_eq!(score.dimensions.credibility, 10.0);
        assert!(score.dimensions.business_match >= 3.0);
        assert_eq!(score.level, taimeter_core::trust::TaiLevel::Tai3);
    }

    #[test]
    fn blank_numeric_inputs_round_trip_to_full_availability() {
        let (input, meta) = assembled("高炉开工率", "钢之家");
        let enriched = meta.with_semantic(enrich_or_fallback(&FallbackEnricher, &input, &meta));
        let score = rule_engine::score(&enriched);
        assert_eq!(score.dimensions.availability, 10.0);
    }
}

//! Deterministic fallback enrichment.
//!
//! Produces a non-empty placeholder for every semantic field so a record
//! can always be scored. Scenes follow the decided granularity, the usage
//! note distinguishes text-type from quantitative indicators, and the
//! company field carries the "not applicable" sentinel since no generative
//! service is available to name one.

use taimeter_core::labels::{Granularity, NO_COMPANY};
use taimeter_core::types::{IndicatorInput, Metadata, SemanticFields};

use crate::{EnrichError, Enricher};

#[derive(Debug, Default, Clone, Copy)]
pub struct FallbackEnricher;

impl FallbackEnricher {
    /// Infallible worker behind the trait impl.
    pub fn fill(&self, input: &IndicatorInput, meta: &Metadata) -> SemanticFields {
        let qualitative = meta.categories.iter().any(|c| c.is_qualitative());

        let definition = format!("{}：定义待补充，请人工复核。", input.name);

        let first_category = meta
            .categories
            .first()
            .map(|c| c.label().to_string())
            .unwrap_or_else(|| "其他".to_string());
        let enhanced_tags = vec![
            first_category,
            meta.granularity.label().to_string(),
            "待复核".to_string(),
        ];

        let usage_instructions = if qualitative {
            "文本类指标：用于逻辑推理与背景研判，不参与数值计算。".to_string()
        } else {
            "定量指标：可用于趋势分析与横向对比，使用前确认口径一致。".to_string()
        };

        let scenes = match meta.granularity {
            Granularity::Micro => vec![
                "企业经营诊断".to_string(),
                "竞争格局分析".to_string(),
                "投资标的评估".to_string(),
            ],
            Granularity::Meso => vec![
                "行业趋势分析".to_string(),
                "产业链研究".to_string(),
                "市场供需判断".to_string(),
            ],
            Granularity::Macro => vec![
                "宏观经济分析".to_string(),
                "政策效果评估".to_string(),
                "全局风险监测".to_string(),
            ],
        };

        let importance = format!("{}：重要性论证待补充。", input.name);

        SemanticFields {
            definition: Some(definition),
            enhanced_tags,
            usage_instructions: Some(usage_instructions),
            scenes,
            importance: Some(importance),
            involved_company: Some(NO_COMPANY.to_string()),
            industries: vec!["综合".to_string()],
        }
    }
}

impl Enricher for FallbackEnricher {
    fn enrich(
        &self,
        input: &IndicatorInput,
        meta: &Metadata,
    ) -> Result<SemanticFields, EnrichError> {
        Ok(self.fill(input, meta))
    }

    fn name(&self) -> &str {
        "fallback"
    }
}

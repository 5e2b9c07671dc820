use serde::{Deserialize, Serialize};
use time::Date;

use crate::error::TaimeterError;
use crate::ids::IndicatorId;
use crate::labels::{Category, DataType, Granularity, SourceType};
use crate::trust::SourceConfidence;

/// Caller-supplied description of an indicator. Immutable once constructed.
///
/// The numeric fields arrive as raw strings from the input surface;
/// parsing (with default-to-zero on anything unusable) happens during
/// assembly, never here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndicatorInput {
    pub name: String,
    pub source_name: String,
    pub miss_rate_percent: Option<String>,
    pub data_volume: Option<String>,
}

impl IndicatorInput {
    pub fn new(
        name: impl Into<String>,
        source_name: impl Into<String>,
        miss_rate_percent: Option<String>,
        data_volume: Option<String>,
    ) -> Result<Self, TaimeterError> {
        let name = name.into();
        let source_name = source_name.into();
        if name.trim().is_empty() {
            return Err(TaimeterError::InvalidInput(
                "indicator name must not be empty".to_string(),
            ));
        }
        if source_name.trim().is_empty() {
            return Err(TaimeterError::InvalidInput(
                "source name must not be empty".to_string(),
            ));
        }
        Ok(Self {
            name,
            source_name,
            miss_rate_percent,
            data_volume,
        })
    }
}

/// Free-text fields owned by the enrichment collaborator. All of them are
/// unset/empty until an enricher fills them; scoring tolerates the unset
/// state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SemanticFields {
    pub definition: Option<String>,
    pub enhanced_tags: Vec<String>,
    pub usage_instructions: Option<String>,
    pub scenes: Vec<String>,
    pub importance: Option<String>,
    pub involved_company: Option<String>,
    pub industries: Vec<String>,
}

impl SemanticFields {
    pub fn is_unset(&self) -> bool {
        self.definition.is_none()
            && self.enhanced_tags.is_empty()
            && self.usage_instructions.is_none()
            && self.scenes.is_empty()
            && self.importance.is_none()
            && self.involved_company.is_none()
            && self.industries.is_empty()
    }
}

/// A complete indicator metadata record.
///
/// Produced by the assembler, optionally replaced field-by-field by the
/// editing surface (each edit yields a fresh snapshot), and consumed
/// read-only by the scoring engine.
///
/// Invariants upheld by the assembler: `miss_rate` in [0,1],
/// `categories` non-empty and duplicate-free.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub id: IndicatorId,
    pub name_cn: String,
    pub name_en: Option<String>,

    pub data_type: DataType,
    pub access_level: String,
    pub update_frequency: String,
    pub unit: String,

    pub source_name: String,
    pub source_type: SourceType,
    pub source_confidence: SourceConfidence,

    pub data_volume: u64,
    pub miss_rate: f64,

    pub categories: Vec<Category>,
    pub granularity: Granularity,

    pub semantic: SemanticFields,

    pub status: String,
    pub data_owner: String,
    pub version: String,
    pub change_note: String,
    pub updated_at: Date,
}

impl Metadata {
    /// Returns a copy with the semantic fields replaced. Editing a record
    /// always yields a new snapshot; nothing mutates in place.
    pub fn with_semantic(&self, semantic: SemanticFields) -> Self {
        let mut next = self.clone();
        next.semantic = semantic;
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_rejects_empty_name() {
        let err = IndicatorInput::new("  ", "统计局", None, None);
        assert!(err.is_err());
    }

    #[test]
    fn input_rejects_empty_source() {
        let err = IndicatorInput::new("粗钢产量", "", None, None);
        assert!(err.is_err());
    }

    #[test]
    fn input_accepts_missing_numeric_fields() {
        let input = IndicatorInput::new("粗钢产量", "统计局", None, None).unwrap();
        assert!(input.miss_rate_percent.is_none());
        assert!(input.data_volume.is_none());
    }

    #[test]
    fn semantic_fields_default_to_unset() {
        assert!(SemanticFields::default().is_unset());
        let filled = SemanticFields {
            scenes: vec!["行业分析".to_string()],
            ..SemanticFields::default()
        };
        assert!(!filled.is_unset());
    }
}

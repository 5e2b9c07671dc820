//! Metadata assembly: runs the four classifiers over an input record and
//! merges their output with parsed numeric fields and fixed operational
//! defaults. Semantic fields are left unset for the enrichment
//! collaborator.

use time::Date;

use taimeter_core::config::{Config, RecordDefaults};
use taimeter_core::ids::IdSource;
use taimeter_core::labels::DataType;
use taimeter_core::types::{IndicatorInput, Metadata, SemanticFields};

use crate::keywords::{contains_any, RATE_UNIT, TEXT_TYPE};
use crate::rules::category::classify_categories;
use crate::rules::confidence::classify_confidence;
use crate::rules::granularity::classify_granularity;
use crate::rules::source_type::classify_source_type;

/// Builds metadata records. Holds the injected id source and the
/// operational defaults; everything else is pure computation.
pub struct Assembler {
    ids: Box<dyn IdSource>,
    defaults: RecordDefaults,
}

impl Assembler {
    pub fn from_config(config: &Config, ids: Box<dyn IdSource>) -> Self {
        Self {
            ids,
            defaults: config.record.clone(),
        }
    }

    /// Assembles a complete-minus-semantic-fields record for `today`.
    pub fn assemble(&mut self, input: &IndicatorInput, today: Date) -> Metadata {
        let categories = classify_categories(&input.name, &input.source_name);
        let granularity = classify_granularity(&input.name, &input.source_name, &categories);
        let source_type = classify_source_type(&input.source_name);
        let source_confidence = classify_confidence(&input.source_name);

        let text_likely = contains_any(&input.name, TEXT_TYPE);
        let data_type = if text_likely {
            DataType::Text
        } else {
            DataType::Float
        };
        let unit = if text_likely {
            "N/A".to_string()
        } else if contains_any(&input.name, RATE_UNIT) {
            "%".to_string()
        } else {
            "单位".to_string()
        };
        let update_frequency = if text_likely { "不定期" } else { "月度" };

        Metadata {
            id: self.ids.next_id(),
            name_cn: input.name.clone(),
            name_en: None,

            data_type,
            access_level: self.defaults.access_level.clone(),
            update_frequency: update_frequency.to_string(),
            unit,

            source_name: input.source_name.clone(),
            source_type,
            source_confidence,

            data_volume: parse_volume(input.data_volume.as_deref()),
            miss_rate: parse_miss_rate(input.miss_rate_percent.as_deref()),

            categories,
            granularity,

            semantic: SemanticFields::default(),

            status: self.defaults.status.clone(),
            data_owner: self.defaults.data_owner.clone(),
            version: self.defaults.version.clone(),
            change_note: self.defaults.change_note.clone(),
            updated_at: today,
        }
    }
}

/// Parses a data-volume string; blank or unparsable input counts as 0.
fn parse_volume(raw: Option<&str>) -> u64 {
    raw.map(str::trim)
        .filter(|v| !v.is_empty())
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(0)
}

/// Parses a miss-rate percentage string into a fraction in [0,1].
///
/// Accepted only as a decimal in [0,100]; blank, unparsable, or
/// out-of-range input counts as 0. The fraction is rounded to 4 decimal
/// places.
fn parse_miss_rate(raw: Option<&str>) -> f64 {
    let Some(value) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
        return 0.0;
    };
    let Ok(percent) = value.parse::<f64>() else {
        return 0.0;
    };
    if !percent.is_finite() || !(0.0..=100.0).contains(&percent) {
        return 0.0;
    }
    (percent / 100.0 * 10_000.0).round() / 10_000.0
}

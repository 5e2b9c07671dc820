//! Source-confidence classification: two ordered guards, first match wins.
//!
//! This path never yields L0; that tier marks a record whose confidence
//! was never set at all.

use taimeter_core::trust::SourceConfidence;

use crate::keywords::{contains_any, HIGH_CONFIDENCE, PROFESSIONAL};

/// Maps a source name to its ordinal confidence tier.
pub fn classify_confidence(source_name: &str) -> SourceConfidence {
    if contains_any(source_name, HIGH_CONFIDENCE) {
        return SourceConfidence::L3;
    }
    if contains_any(source_name, PROFESSIONAL) {
        return SourceConfidence::L2;
    }
    SourceConfidence::L1
}

//! The TAI scoring engine.
//!
//! Reduces a metadata record to three dimension scores, an ordered list of
//! human-readable rationale strings, and a discrete trust level. Pure and
//! total: any structurally valid record scores without error, and scoring
//! the same snapshot twice yields identical output.

use serde::{Deserialize, Serialize};

use taimeter_core::labels::NO_COMPANY;
use taimeter_core::trust::{SourceConfidence, TaiLevel};
use taimeter_core::types::Metadata;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaiScore {
    pub level: TaiLevel,
    pub total_score: f64,
    pub dimensions: Dimensions,
    pub details: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dimensions {
    pub availability: f64,
    pub credibility: f64,
    pub business_match: f64,
}

/// Scores a metadata record.
pub fn score(meta: &Metadata) -> TaiScore {
    let mut details = Vec::new();

    let availability = availability_score(meta.miss_rate, &mut details);
    let credibility = credibility_score(meta.source_confidence, &mut details);
    let business_match = business_match_score(meta, &mut details);

    let level = determine_level(credibility, availability, business_match);
    let total_score = availability + credibility + business_match;

    TaiScore {
        level,
        total_score,
        dimensions: Dimensions {
            availability,
            credibility,
            business_match,
        },
        details,
    }
}

/// Availability bracket table over the miss rate expressed as a
/// percentage. Brackets are evaluated in ascending order with inclusive
/// upper bounds; first match wins.
fn availability_score(miss_rate: f64, details: &mut Vec<String>) -> f64 {
    let mr = miss_rate * 100.0;

    if miss_rate == 0.0 {
        details.push("完整性完美 (0%缺失)".to_string());
        return 10.0;
    }
    if mr <= 5.0 {
        details.push("完整性极高 (≤5%)".to_string());
        return 9.0;
    }
    if mr <= 10.0 {
        return 8.0;
    }
    if mr <= 20.0 {
        return 7.0;
    }
    if mr <= 30.0 {
        return 6.0;
    }
    if mr <= 50.0 {
        return 4.0;
    }
    if mr <= 80.0 {
        return 2.0;
    }
    details.push("缺失率过高 (>80%)".to_string());
    0.0
}

fn credibility_score(confidence: SourceConfidence, details: &mut Vec<String>) -> f64 {
    match confidence {
        SourceConfidence::L3 => {
            details.push("权威来源 (L3)".to_string());
            10.0
        }
        SourceConfidence::L2 => {
            details.push("专业机构来源 (L2)".to_string());
            8.0
        }
        SourceConfidence::L1 => 6.0,
        SourceConfidence::L0 => {
            details.push("来源未知 (L0)".to_string());
            0.0
        }
    }
}

/// Weighted aggregate of the scene, company, and industry sub-scores,
/// rounded to one decimal place. The 0.6/0.1/0.3 weights and the
/// count-to-score table are fixed business constants.
fn business_match_score(meta: &Metadata, details: &mut Vec<String>) -> f64 {
    let scene_count = meta.semantic.scenes.len();
    let scene_score = count_score(scene_count);
    if scene_count >= 3 {
        details.push(format!("场景覆盖丰富 ({scene_count}个)"));
    }

    let company = meta.semantic.involved_company.as_deref().unwrap_or("");
    let company_score = if !company.trim().is_empty() && company != NO_COMPANY {
        details.push(format!("关联企业: {company}"));
        10.0
    } else {
        0.0
    };

    let industry_score = count_score(meta.semantic.industries.len());

    let aggregate = scene_score * 0.6 + company_score * 0.1 + industry_score * 0.3;
    (aggregate * 10.0).round() / 10.0
}

fn count_score(count: usize) -> f64 {
    match count {
        0 => 0.0,
        1 => 2.0,
        2 => 4.0,
        3 => 6.0,
        4 => 8.0,
        _ => 10.0,
    }
}

/// Level ladder, strict priority order, terminal states only.
fn determine_level(credibility: f64, availability: f64, business_match: f64) -> TaiLevel {
    if credibility == 10.0 && availability > 6.0 && business_match >= 3.0 {
        TaiLevel::Tai3
    } else if credibility >= 6.0 && availability > 6.0 && business_match >= 3.0 {
        TaiLevel::Tai2
    } else if credibility >= 6.0 {
        TaiLevel::Tai1
    } else {
        TaiLevel::None
    }
}

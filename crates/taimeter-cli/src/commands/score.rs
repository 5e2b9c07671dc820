use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use rule_engine::TaiScore;
use taimeter_core::types::Metadata;

pub fn execute(input: &Path, json: bool) -> Result<()> {
    let contents =
        fs::read_to_string(input).with_context(|| format!("read metadata {}", input.display()))?;
    let meta: Metadata = serde_json::from_str(&contents).context("parse metadata JSON")?;

    let score = rule_engine::score(&meta);

    if json {
        let rendered = serde_json::to_string_pretty(&score).context("render score JSON")?;
        println!("{rendered}");
    } else {
        print_score(&score);
    }
    Ok(())
}

pub fn print_score(score: &TaiScore) {
    println!("评级: {} ({})", score.level, score.level.label());
    println!("总分: {:.1}", score.total_score);
    println!(
        "可用性: {:.0}  可信度: {:.0}  业务匹配: {:.1}",
        score.dimensions.availability, score.dimensions.credibility, score.dimensions.business_match
    );
    for detail in &score.details {
        println!("  - {detail}");
    }
}

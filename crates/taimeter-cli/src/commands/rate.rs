use std::path::PathBuf;

use anyhow::{Context, Result};
use serde_json::json;
use time::OffsetDateTime;

use enrichment::{enrich_or_fallback, Enricher, FallbackEnricher};
use rule_engine::Assembler;
use taimeter_core::config::EnrichmentMode;
use taimeter_core::ids::RandomIds;
use taimeter_core::types::IndicatorInput;

#[derive(Debug)]
pub struct RateInputs {
    pub config_path: Option<PathBuf>,
    pub name: String,
    pub source: String,
    pub miss_rate: Option<String>,
    pub data_volume: Option<String>,
    pub json: bool,
}

pub fn execute(inputs: RateInputs) -> Result<()> {
    let config = super::load_config(inputs.config_path)?;
    let input = IndicatorInput::new(
        inputs.name,
        inputs.source,
        inputs.miss_rate,
        inputs.data_volume,
    )?;

    let mut assembler = Assembler::from_config(&config, Box::new(RandomIds));
    let meta = assembler.assemble(&input, OffsetDateTime::now_utc().date());

    // No live client is wired in-tree; live mode resolves to the fallback
    // rather than failing the rating.
    let enricher: &dyn Enricher = match config.enrichment.mode {
        EnrichmentMode::Fallback | EnrichmentMode::Live => &FallbackEnricher,
    };
    let enriched = meta.with_semantic(enrich_or_fallback(enricher, &input, &meta));

    let score = rule_engine::score(&enriched);

    if inputs.json {
        let rendered = serde_json::to_string_pretty(&json!({
            "metadata": enriched,
            "score": score,
        }))
        .context("render rating JSON")?;
        println!("{rendered}");
    } else {
        println!("指标: {} ← {}", enriched.name_cn, enriched.source_name);
        super::score::print_score(&score);
    }
    Ok(())
}

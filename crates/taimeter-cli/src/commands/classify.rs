use std::path::PathBuf;

use anyhow::{Context, Result};
use time::OffsetDateTime;

use rule_engine::Assembler;
use taimeter_core::ids::RandomIds;
use taimeter_core::types::{IndicatorInput, Metadata};

#[derive(Debug)]
pub struct ClassifyInputs {
    pub config_path: Option<PathBuf>,
    pub name: String,
    pub source: String,
    pub miss_rate: Option<String>,
    pub data_volume: Option<String>,
    pub json: bool,
}

pub fn execute(inputs: ClassifyInputs) -> Result<()> {
    let config = super::load_config(inputs.config_path)?;
    let input = IndicatorInput::new(
        inputs.name,
        inputs.source,
        inputs.miss_rate,
        inputs.data_volume,
    )?;

    let mut assembler = Assembler::from_config(&config, Box::new(RandomIds));
    let meta = assembler.assemble(&input, OffsetDateTime::now_utc().date());

    if inputs.json {
        let rendered = serde_json::to_string_pretty(&meta).context("render metadata JSON")?;
        println!("{rendered}");
    } else {
        print_summary(&meta);
    }
    Ok(())
}

fn print_summary(meta: &Metadata) {
    println!("指标: {} ({})", meta.name_cn, meta.id);
    println!("来源: {} [{}]", meta.source_name, meta.source_type);
    println!("来源置信: {} ({})", meta.source_confidence, meta.source_confidence.label());
    let categories: Vec<&str> = meta.categories.iter().map(|c| c.label()).collect();
    println!("分类: {}", categories.join("、"));
    println!("颗粒层级: {}", meta.granularity);
    println!(
        "数据类型: {}  单位: {}  更新频率: {}",
        meta.data_type, meta.unit, meta.update_frequency
    );
    println!(
        "数据量: {}  缺失率: {:.2}%",
        meta.data_volume,
        meta.miss_rate * 100.0
    );
}

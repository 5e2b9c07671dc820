use std::path::PathBuf;

use anyhow::Result;

pub fn print_effective(config_path: Option<PathBuf>) -> Result<()> {
    let config = super::load_config(config_path)?;
    let output = config.to_toml_string()?;
    println!("{}", output);
    Ok(())
}

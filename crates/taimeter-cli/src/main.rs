use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser, Debug)]
#[command(
    name = "taimeter",
    version,
    about = "Classify data indicators and rate their trustworthiness"
)]
struct Cli {
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write a default config file
    Init {
        #[arg(long)]
        path: Option<PathBuf>,
        #[arg(long)]
        force: bool,
    },
    /// Classify an indicator and print the assembled metadata record
    Classify {
        name: String,
        source: String,
        #[arg(long)]
        miss_rate: Option<String>,
        #[arg(long)]
        data_volume: Option<String>,
        #[arg(long)]
        json: bool,
    },
    /// Score an existing (possibly edited) metadata snapshot
    Score {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        json: bool,
    },
    /// Classify, enrich, and score in one pass
    Rate {
        name: String,
        source: String,
        #[arg(long)]
        miss_rate: Option<String>,
        #[arg(long)]
        data_volume: Option<String>,
        #[arg(long)]
        json: bool,
    },
    Config {
        #[arg(long)]
        print: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Init { path, force } => init_config(path, force),
        Commands::Classify {
            name,
            source,
            miss_rate,
            data_volume,
            json,
        } => commands::classify::execute(commands::classify::ClassifyInputs {
            config_path: cli.config,
            name,
            source,
            miss_rate,
            data_volume,
            json,
        }),
        Commands::Score { input, json } => commands::score::execute(&input, json),
        Commands::Rate {
            name,
            source,
            miss_rate,
            data_volume,
            json,
        } => commands::rate::execute(commands::rate::RateInputs {
            config_path: cli.config,
            name,
            source,
            miss_rate,
            data_volume,
            json,
        }),
        Commands::Config { print } => {
            if print {
                commands::config::print_effective(cli.config)
            } else {
                Ok(())
            }
        }
    }
}

fn init_config(path: Option<PathBuf>, force: bool) -> Result<()> {
    let paths = taimeter_core::config::ConfigPaths::resolve()?;
    let config_path = path.unwrap_or(paths.config_path);
    if config_path.exists() && !force {
        anyhow::bail!(
            "config already exists at {} (use --force to overwrite)",
            config_path.display()
        );
    }
    let config = taimeter_core::config::Config::default_config();
    config.save(&config_path)?;
    println!("Wrote default config to {}", config_path.display());
    Ok(())
}

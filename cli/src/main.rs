mod args;
mod logging;
mod price;
mod report;
mod tui;

use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;
use clap::Parser;
use satstreak_core::repository::default_data_dir;
use satstreak_core::usecase::milestones::find_milestones;
use satstreak_core::{
    CalculatorConfig, ConfigRepository, Estimate, EstimateUseCase, FileConfigRepository, PriceService,
};
use tracing::info;

use crate::args::{parse_start_date, CalcArgs};

#[derive(Parser)]
#[command(name = "satstreak")]
#[command(about = "Estimate the sats a daily shake streak earns", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Show total and average earnings for a streak
    Calc {
        #[command(flatten)]
        args: CalcArgs,
        /// Print the full result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the day-by-day series as a table
    Table {
        #[command(flatten)]
        args: CalcArgs,
        /// Show one row every N days
        #[arg(short, long, default_value_t = 30)]
        every: usize,
    },
    /// Show the reward for a single streak day
    Day {
        #[arg(allow_negative_numbers = true)]
        day: i64,
    },
    /// List milestones reached during a streak
    Milestones {
        #[command(flatten)]
        args: CalcArgs,
        /// Date of streak day 1 (YYYY-MM-DD)
        #[arg(short, long, value_parser = parse_start_date)]
        start: Option<NaiveDate>,
    },
    /// Open the interactive chart
    Chart {
        #[command(flatten)]
        args: CalcArgs,
    },
    /// Manage the config file
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommand {
    /// Reset the config file to defaults
    Init,
    /// Print the config file
    Show,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let data_dir = default_data_dir()?;
    let _guard = logging::setup_tracing(&data_dir.join("logs"))?;
    logging::setup_panic_hook();

    run(cli.command, data_dir)
}

/// Runs one command against the config stored under `data_dir`.
fn run(command: Option<Commands>, data_dir: PathBuf) -> Result<()> {
    let config_repo = FileConfigRepository::new(Some(data_dir))?;

    match command {
        Some(Commands::Calc { args, json }) => {
            let config = load_config(&config_repo)?;
            let estimate = run_estimate(&args, &config)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&estimate)?);
            } else {
                report::print_summary(&estimate, args.currency_or(&config));
            }
        }
        Some(Commands::Table { args, every }) => {
            let config = load_config(&config_repo)?;
            let estimate = run_estimate(&args, &config)?;
            report::print_series(&estimate.result.series, args.currency_or(&config), every);
        }
        Some(Commands::Day { day }) => {
            report::print_day(day);
        }
        Some(Commands::Milestones { args, start }) => {
            let config = load_config(&config_repo)?;
            let estimate = run_estimate(&args, &config)?;
            report::print_milestones(&find_milestones(&estimate.result, start));
        }
        Some(Commands::Chart { args }) => {
            tui::run(&load_config(&config_repo)?, &args)?;
        }
        Some(Commands::Config { command }) => match command {
            // Overwrites without reading so a broken file can be reset.
            ConfigCommand::Init => {
                config_repo.save(&CalculatorConfig::default())?;
                println!("Config reset at: {}", config_repo.path().display());
            }
            ConfigCommand::Show => {
                let config = load_config(&config_repo)?;
                println!("# {}", config_repo.path().display());
                println!("{}", serde_json::to_string_pretty(&config)?);
            }
        },
        None => {
            tui::run(&load_config(&config_repo)?, &CalcArgs::default())?;
        }
    }
    Ok(())
}

fn load_config(config_repo: &FileConfigRepository) -> Result<CalculatorConfig> {
    let config = config_repo.load()?;
    info!(path = %config_repo.path().display(), "loaded config");
    Ok(config)
}

fn run_estimate(args: &CalcArgs, config: &CalculatorConfig) -> Result<Estimate> {
    let service = PriceService::new(args.price_source()).with_fallback(config.fallback_price_usd);
    EstimateUseCase::new(&service, config).estimate(args.streak_days(), args.rate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;

    fn temp_data_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("satstreak-cli-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    fn corrupt_config(dir: &Path) {
        fs::create_dir_all(dir).unwrap();
        fs::write(dir.join("config.json"), "{ broken").unwrap();
    }

    #[test]
    fn test_init_resets_broken_config() {
        let dir = temp_data_dir("init");
        corrupt_config(&dir);

        let repo = FileConfigRepository::new(Some(dir.clone())).unwrap();
        assert!(repo.load().is_err());

        let init = Some(Commands::Config {
            command: ConfigCommand::Init,
        });
        run(init, dir.clone()).unwrap();

        assert_eq!(repo.load().unwrap(), CalculatorConfig::default());
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_day_ignores_broken_config() {
        let dir = temp_data_dir("day");
        corrupt_config(&dir);

        run(Some(Commands::Day { day: 365 }), dir.clone()).unwrap();

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_show_reports_broken_config() {
        let dir = temp_data_dir("show");
        corrupt_config(&dir);

        let show = Some(Commands::Config {
            command: ConfigCommand::Show,
        });
        assert!(run(show, dir.clone()).is_err());

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_offline_calc_uses_saved_config() {
        let dir = temp_data_dir("calc");
        let args = CalcArgs {
            days: Some(30),
            offline: true,
            ..CalcArgs::default()
        };

        run(Some(Commands::Calc { args, json: true }), dir.clone()).unwrap();

        assert!(dir.join("config.json").exists());
        fs::remove_dir_all(&dir).unwrap();
    }
}

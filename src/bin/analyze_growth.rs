//! Command-line growth analysis over a day-partitioned dataset
//!
//! Optionally resizes the dataset in place, measures every image, writes the
//! result table and prints a day-by-day growth report followed by run-level
//! growth indicators.

use plant_growth::analysis::write_daily_stats_json;
use plant_growth::preprocessing::resize_dataset;
use plant_growth::{aggregate_daily, GrowthAnalyzer, GrowthConfig, GrowthInsights, GrowthSummary};
use std::{env, path::PathBuf, process};

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args: Vec<String> = env::args().collect();

    let mut config_path: Option<PathBuf> = None;
    let mut dataset: Option<PathBuf> = None;
    let mut output: Option<PathBuf> = None;
    let mut stats: Option<PathBuf> = None;
    let mut resize = false;
    let mut parallel = false;

    // Parse arguments
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => config_path = Some(PathBuf::from(value_of(&args, &mut i))),
            "--dataset" => dataset = Some(PathBuf::from(value_of(&args, &mut i))),
            "--output" => output = Some(PathBuf::from(value_of(&args, &mut i))),
            "--stats" => stats = Some(PathBuf::from(value_of(&args, &mut i))),
            "--resize" => resize = true,
            "--parallel" => parallel = true,
            "--help" | "-h" => {
                print_help(&args[0]);
                process::exit(0);
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                eprintln!("Use --help for usage information");
                process::exit(1);
            }
        }
        i += 1;
    }

    let mut config = match config_path {
        Some(path) => match GrowthConfig::from_json_file(&path) {
            Ok(cfg) => {
                eprintln!("Loaded configuration from {}", path.display());
                cfg
            }
            Err(e) => {
                eprintln!("Error loading config file: {}", e);
                process::exit(1);
            }
        },
        None => GrowthConfig::default(),
    };

    // Command-line flags override the file
    if let Some(path) = dataset {
        config.dataset_path = path;
    }
    if let Some(path) = output {
        config.results_path = path;
    }
    if stats.is_some() {
        config.analysis.stats_path = stats;
    }
    config.preprocessing.enabled |= resize;
    config.analysis.parallel |= parallel;

    if !config.dataset_path.is_dir() {
        eprintln!(
            "Error: Dataset directory '{}' does not exist",
            config.dataset_path.display()
        );
        process::exit(1);
    }

    if config.preprocessing.enabled {
        match resize_dataset(&config.dataset_path, &config.preprocessing) {
            Ok(report) => eprintln!(
                "Resized {} images ({} skipped)",
                report.resized, report.skipped
            ),
            Err(e) => {
                eprintln!("Error resizing dataset: {}", e);
                process::exit(1);
            }
        }
    }

    let analyzer = match GrowthAnalyzer::from_config(&config) {
        Ok(analyzer) => analyzer,
        Err(e) => {
            eprintln!("Error: {}", e.user_message());
            process::exit(1);
        }
    };

    let table = match analyzer.analyze(&config.dataset_path, &config.results_path) {
        Ok(table) => table,
        Err(e) => {
            eprintln!("Error: {}", e.user_message());
            process::exit(1);
        }
    };

    if table.is_empty() {
        eprintln!("No images were measured in {}", config.dataset_path.display());
        return;
    }

    let daily = match aggregate_daily(&table) {
        Ok(daily) => daily,
        Err(e) => {
            eprintln!("Error aggregating results: {}", e);
            process::exit(1);
        }
    };

    if let Some(path) = &config.analysis.stats_path {
        if let Err(e) = write_daily_stats_json(&daily, path) {
            eprintln!("Error saving statistics: {}", e);
            process::exit(1);
        }
        eprintln!("Daily statistics saved to {}", path.display());
    }

    println!();
    println!("{}", GrowthSummary::from_daily(&daily));
    println!("{}", GrowthInsights::from_daily(&daily));
}

/// Consume the value following a flag
fn value_of(args: &[String], i: &mut usize) -> String {
    *i += 1;
    match args.get(*i) {
        Some(value) if !value.starts_with("--") => value.clone(),
        _ => {
            eprintln!("Error: {} requires a value", args[*i - 1]);
            process::exit(1);
        }
    }
}

fn print_help(program: &str) {
    eprintln!("Usage: {} [OPTIONS]", program);
    eprintln!();
    eprintln!("Measure plant area and height for every image of a dataset/<day>/ tree.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --config FILE    JSON configuration (see generate_config)");
    eprintln!("  --dataset DIR    Dataset root (default: dataset)");
    eprintln!("  --output FILE    Result table CSV (default: models/results.csv)");
    eprintln!("  --stats FILE     Also write per-day statistics as JSON");
    eprintln!("  --resize         Resize images in place before analysis");
    eprintln!("  --parallel       Measure images of each day in parallel");
    eprintln!("  -h, --help       Show this help");
    eprintln!();
    eprintln!("Set RUST_LOG=debug for per-image output.");
}

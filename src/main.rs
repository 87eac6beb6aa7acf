//! rwa-engine CLI
//!
//! Weight exposure portfolios from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Weight exposures from a JSON file
//! rwa-engine weigh --input exposures.json
//!
//! # Custom thresholds, JSON output
//! rwa-engine weigh --input exposures.json --config engine.json --format json
//!
//! # Generate a random portfolio for testing
//! rwa-engine generate --count 500 --output exposures.json
//! ```

use rwa_engine::config::EngineConfig;
use rwa_engine::core::normalize::{DataQualityIssue, RawExposure};
use rwa_engine::engine::weighting::{RwaReport, WeightingEngine};
use rwa_engine::simulation::portfolio::{generate_random_portfolio, PortfolioConfig};
use std::fs;
use std::process;

fn print_usage() {
    eprintln!(
        r#"rwa-engine - standardised credit risk weighting (Bank Al-Maghrib)

USAGE:
    rwa-engine <COMMAND> [OPTIONS]

COMMANDS:
    weigh       Weight an exposure file and aggregate RWA
    generate    Generate a random exposure portfolio (for testing)
    help        Show this message

OPTIONS (weigh):
    --input <FILE>      Path to JSON exposures file
    --config <FILE>     Path to JSON engine config (defaults otherwise)
    --format <FORMAT>   Output format: text (default) or json

OPTIONS (generate):
    --count <N>         Number of exposures (default: 100)
    --seed <N>          Fixed random seed
    --output <FILE>     Write to file instead of stdout

Set RUST_LOG=debug to trace the clause chosen for each exposure.

EXAMPLES:
    rwa-engine weigh --input exposures.json
    rwa-engine weigh --input exposures.json --format json
    rwa-engine generate --count 1000 --output exposures.json"#
    );
}

#[derive(serde::Deserialize)]
struct ExposuresFile {
    exposures: Vec<RawExposure>,
}

#[derive(serde::Serialize)]
struct ExposuresOutput {
    exposures: Vec<RawExposure>,
}

#[derive(serde::Serialize)]
struct WeighOutput<'a> {
    report: &'a RwaReport,
    issues: &'a [DataQualityIssue],
}

fn load_exposures(path: &str) -> Vec<RawExposure> {
    let content = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file '{}': {}", path, e);
        process::exit(1);
    });

    let file: ExposuresFile = serde_json::from_str(&content).unwrap_or_else(|e| {
        eprintln!("Error parsing JSON: {}", e);
        eprintln!("Expected format:");
        eprintln!(
            r#"{{
  "exposures": [
    {{ "segment": "enterprise", "amount": "25000000", "currency": "MAD", "external_rating": "BBB" }}
  ]
}}"#
        );
        process::exit(1);
    });
    file.exposures
}

fn required_value(args: &[String], i: usize, message: &str) -> String {
    args.get(i).cloned().unwrap_or_else(|| {
        eprintln!("{}", message);
        process::exit(1);
    })
}

fn cmd_weigh(args: &[String]) {
    let mut input_path = None;
    let mut config_path = None;
    let mut format = "text".to_string();
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--input" => {
                i += 1;
                input_path = Some(required_value(args, i, "--input requires a file path"));
            }
            "--config" => {
                i += 1;
                config_path = Some(required_value(args, i, "--config requires a file path"));
            }
            "--format" => {
                i += 1;
                format = required_value(args, i, "--format requires 'text' or 'json'");
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                process::exit(1);
            }
        }
        i += 1;
    }

    if format != "text" && format != "json" {
        eprintln!("Unknown format '{}': expected 'text' or 'json'", format);
        process::exit(1);
    }

    let path = input_path.unwrap_or_else(|| {
        eprintln!("Error: --input <FILE> is required");
        process::exit(1);
    });

    let config = match config_path {
        Some(p) => EngineConfig::from_json_file(&p).unwrap_or_else(|e| {
            eprintln!("Error loading config: {}", e);
            process::exit(1);
        }),
        None => EngineConfig::default(),
    };

    let rows = load_exposures(&path);
    let (report, issues) = WeightingEngine::new(config).run_raw(rows);

    if format == "json" {
        let output = WeighOutput {
            report: &report,
            issues: &issues,
        };
        let json = serde_json::to_string_pretty(&output).unwrap_or_else(|e| {
            eprintln!("Error serializing report: {}", e);
            process::exit(1);
        });
        println!("{}", json);
    } else {
        println!("{}", report);
        if !issues.is_empty() {
            println!("=== Data Quality ({} issues) ===", issues.len());
            for issue in &issues {
                println!("  {}", issue);
            }
        }
    }
}

fn cmd_generate(args: &[String]) {
    let mut config = PortfolioConfig::default();
    let mut output_path: Option<String> = None;
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--count" => {
                i += 1;
                config.exposure_count = args
                    .get(i)
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(|| {
                        eprintln!("--count requires a number");
                        process::exit(1);
                    });
            }
            "--seed" => {
                i += 1;
                config.seed = Some(args.get(i).and_then(|s| s.parse().ok()).unwrap_or_else(|| {
                    eprintln!("--seed requires a number");
                    process::exit(1);
                }));
            }
            "--output" => {
                i += 1;
                output_path = Some(required_value(args, i, "--output requires a file path"));
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                process::exit(1);
            }
        }
        i += 1;
    }

    let set = generate_random_portfolio(&config);
    let output = ExposuresOutput {
        exposures: set.exposures().iter().map(RawExposure::from).collect(),
    };

    let json = serde_json::to_string_pretty(&output).unwrap_or_else(|e| {
        eprintln!("Error serializing portfolio: {}", e);
        process::exit(1);
    });

    if let Some(path) = output_path {
        fs::write(&path, &json).unwrap_or_else(|e| {
            eprintln!("Error writing to '{}': {}", path, e);
            process::exit(1);
        });
        eprintln!(
            "Generated {} exposures, gross {} -> {}",
            set.len(),
            set.gross_exposure(),
            path
        );
    } else {
        println!("{}", json);
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let command = args[1].as_str();
    let rest = &args[2..];

    match command {
        "weigh" => cmd_weigh(rest),
        "generate" => cmd_generate(rest),
        "help" | "--help" | "-h" => print_usage(),
        _ => {
            eprintln!("Unknown command: {}", command);
            print_usage();
            process::exit(1);
        }
    }
}

//! Construct the designs listed in a polarforge configuration and print
//! the reports as YAML.
//!
//! Run with: cargo run --example design_report -p polarforge-core [config.yaml]

use polarforge_core::observe::init_logging;
use polarforge_core::{run_batch, ForgeConfig};
use std::path::Path;
use std::process::ExitCode;

fn main() -> ExitCode {
    let loaded = match std::env::args().nth(1) {
        Some(path) => ForgeConfig::load_from(Path::new(&path)),
        None => ForgeConfig::load(),
    };
    let mut config = match loaded {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    if config.designs.is_empty() {
        println!("# no designs configured, using built-in example\n");
        config = match ForgeConfig::parse(&ForgeConfig::example_yaml()) {
            Ok(example) => ForgeConfig {
                logging: config.logging,
                designs: example.designs,
            },
            Err(e) => {
                eprintln!("{}", e);
                return ExitCode::FAILURE;
            }
        };
    }

    init_logging(&config.logging);

    let reports = run_batch(&config.designs);
    match serde_yaml::to_string(&reports) {
        Ok(yaml) => print!("{}", yaml),
        Err(e) => {
            eprintln!("failed to serialize reports: {}", e);
            return ExitCode::FAILURE;
        }
    }

    if reports.iter().all(|r| r.is_ok()) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

// src/main.rs

//! `cga-codegen`: prints blade multiplication kernels as a Rust module.
//!
//! Usage: `cga-codegen [config.json] > kernels.rs`

use std::fs;

use anyhow::Context;
use log::info;

use cga_sym::codegen::Generator;
use cga_sym::config::{Config, DEFAULT_CONFIG};

fn main() -> anyhow::Result<()> {
    // Default filter is "info" if RUST_LOG is not set. Logs go to stderr.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => {
            let text = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file '{}'", path))?;
            let config = Config::from_json_str(&text)
                .with_context(|| format!("Failed to parse config file '{}'", path))?;
            info!("Configuration loaded from '{}'.", path);
            config
        }
        None => {
            info!("Configuration loaded (using default).");
            DEFAULT_CONFIG.clone()
        }
    };

    let generator =
        Generator::new(config.codegen).context("Invalid generator configuration")?;
    info!(
        "Generating kernels for grades 1..={} over {} basis blades.",
        generator.max_grade(),
        1usize << generator.metric().len()
    );

    let source = generator.emit().context("Failed to emit module")?;
    print!("{}", source);
    info!("Wrote {} bytes of generated source.", source.len());
    Ok(())
}

#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use flashorder_core::FlowConfig;
use tracing_subscriber::EnvFilter;

/// Flash Order - USDT package ordering
#[derive(Parser, Debug)]
#[command(name = "flashorder-desktop")]
#[command(about = "Flash Order - browse USDT packages and place orders")]
struct Args {
    /// Config file (defaults to <config dir>/flashorder/config.json)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Latency of the simulated order backend in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Probability that a simulated order succeeds (0.0 - 1.0)
    #[arg(long)]
    success_rate: Option<f64>,

    /// Seed for reproducible simulated outcomes
    #[arg(long)]
    seed: Option<u64>,
}

impl Args {
    /// Load the config file and apply command line overrides
    fn flow_config(&self) -> anyhow::Result<FlowConfig> {
        let path = self.config.clone().unwrap_or_else(FlowConfig::default_path);
        let mut config = FlowConfig::load(&path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?;

        if let Some(delay) = self.delay_ms {
            config.submit_delay_ms = delay;
        }
        if let Some(rate) = self.success_rate {
            config.success_rate = rate;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        config.validate()?;
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let flow_config = args.flow_config()?;

    tracing::info!(
        delay_ms = flow_config.submit_delay_ms,
        success_rate = flow_config.success_rate,
        "Starting Flash Order"
    );

    let window_width = 1100.0;
    let window_height = 900.0;

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Flash USDT")
            .with_inner_size(dioxus::desktop::LogicalSize::new(window_width, window_height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .with_context(flow_config)
        .launch(app::App);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn missing_config() -> String {
        std::env::temp_dir()
            .join("flashorder-test-missing-config.json")
            .display()
            .to_string()
    }

    #[test]
    fn cli_overrides_config_file() {
        let config_path = missing_config();
        let args = Args::parse_from([
            "flashorder-desktop",
            "--config",
            config_path.as_str(),
            "--delay-ms",
            "50",
            "--success-rate",
            "0.5",
            "--seed",
            "7",
        ]);
        let config = args.flow_config().unwrap();
        assert_eq!(config.submit_delay_ms, 50);
        assert_eq!(config.success_rate, 0.5);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.inline_error_ms, 3000);
    }

    #[test]
    fn cli_rejects_invalid_rate() {
        let config_path = missing_config();
        let args = Args::parse_from([
            "flashorder-desktop",
            "--config",
            config_path.as_str(),
            "--success-rate",
            "2",
        ]);
        assert!(args.flow_config().is_err());
    }
}

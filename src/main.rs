//! scenekit - interactive scene behaviors
//!
//! Headless driver: builds a scene from configuration, replays a scripted
//! input scenario through the mouse/touch adapters, and reports the result.

mod config;
mod headless;
mod scenario;
mod session;

use anyhow::Result;
use config::SceneConfig;
use headless::HeadlessConfig;
use std::{env, path::PathBuf};
use tracing::info;

fn main() -> Result<()> {
    // Initialize tracing with WARN level by default (can be overridden via RUST_LOG env var)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Starting scenekit v{}", env!("CARGO_PKG_VERSION"));

    let cli = CliOptions::parse(env::args().skip(1));
    if let Some(path) = cli.write_default_config {
        SceneConfig::default().save_to_path(&path)?;
        info!(path = %path.display(), "wrote default scene config");
        return Ok(());
    }

    let scene = match cli.config.as_deref() {
        Some(path) => SceneConfig::load_from_path(path),
        None => SceneConfig::load(),
    };

    let summary = headless::run(HeadlessConfig {
        scene,
        scenario: cli.scenario,
        event_log: cli.event_log,
        max_ticks: cli.max_ticks,
    })?;

    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}

#[derive(Debug, Default)]
struct CliOptions {
    config: Option<PathBuf>,
    scenario: Option<PathBuf>,
    event_log: Option<PathBuf>,
    max_ticks: Option<u64>,
    write_default_config: Option<PathBuf>,
}

impl CliOptions {
    fn parse<I: Iterator<Item = String>>(mut args: I) -> Self {
        let mut opts = CliOptions::default();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" => {
                    if let Some(path) = args.next() {
                        opts.config = Some(PathBuf::from(path));
                    } else {
                        tracing::error!("--config requires a file path");
                    }
                }
                "--scenario" => {
                    if let Some(path) = args.next() {
                        opts.scenario = Some(PathBuf::from(path));
                    } else {
                        tracing::error!("--scenario requires a file path");
                    }
                }
                "--event-log" => {
                    if let Some(path) = args.next() {
                        opts.event_log = Some(PathBuf::from(path));
                    } else {
                        tracing::error!("--event-log requires a file path");
                    }
                }
                "--max-ticks" => {
                    if let Some(raw) = args.next() {
                        match raw.parse::<u64>() {
                            Ok(value) => opts.max_ticks = Some(value),
                            Err(err) => {
                                tracing::error!(%err, value = %raw, "--max-ticks must be an integer");
                            }
                        }
                    } else {
                        tracing::error!("--max-ticks requires an integer");
                    }
                }
                "--write-default-config" => {
                    if let Some(path) = args.next() {
                        opts.write_default_config = Some(PathBuf::from(path));
                    } else {
                        tracing::error!("--write-default-config requires a file path");
                    }
                }
                other => tracing::warn!(arg = other, "ignoring unknown argument"),
            }
        }

        opts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliOptions {
        CliOptions::parse(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn parses_paths_and_ticks() {
        let opts = parse(&[
            "--config",
            "scene.toml",
            "--scenario",
            "drag.json",
            "--event-log",
            "out.jsonl",
            "--max-ticks",
            "12",
        ]);
        assert_eq!(opts.config, Some(PathBuf::from("scene.toml")));
        assert_eq!(opts.scenario, Some(PathBuf::from("drag.json")));
        assert_eq!(opts.event_log, Some(PathBuf::from("out.jsonl")));
        assert_eq!(opts.max_ticks, Some(12));
    }

    #[test]
    fn bad_values_are_skipped() {
        let opts = parse(&["--max-ticks", "soon", "--scenario"]);
        assert_eq!(opts.max_ticks, None);
        assert_eq!(opts.scenario, None);
    }
}

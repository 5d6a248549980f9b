use std::env;
use std::fs;
use std::path::Path;

use anyhow::Context;
use nafham_config::Config;

use crate::cli::Args;

/// Load a config file written by hand or by a previous run
pub fn load_config_file(path: &Path) -> anyhow::Result<Config> {
    tracing::info!("Loading config from {}", path.display());
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let config = serde_json::from_str(&data)
        .with_context(|| format!("failed to parse config {}", path.display()))?;
    Ok(config)
}

/// Defaults (or the config file), then environment, then command line
pub fn load_config(args: &Args) -> anyhow::Result<Config> {
    let mut config = match &args.config {
        Some(path) => {
            let mut config = load_config_file(path)?;
            config.apply_overrides(|key| env::var(key).ok());
            config
        }
        None => Config::new(),
    };

    apply_args(&mut config, args);
    Ok(config)
}

fn apply_args(config: &mut Config, args: &Args) {
    if let Some(direction) = args.direction {
        config.search.default_direction = direction;
    }
    if let Some(policy) = args.diacritics {
        config.normalizer.diacritics = policy;
    }
    if args.no_embedded {
        config.phrasebook.embedded = false;
    }
    config
        .phrasebook
        .additional_paths
        .extend(args.phrases.iter().cloned());
}

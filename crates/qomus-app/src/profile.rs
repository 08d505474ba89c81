use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::Context;
use qomus_config::Config;

const DEFAULT_CONFIG_FILE: &str = "config.json";

fn read_config_file(path: &Path) -> anyhow::Result<Config> {
    tracing::info!("Loading config from {}", path.display());
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let mut config: Config = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing {}", path.display()))?;
    config.apply_env();
    Ok(config)
}

/// Load the given config file, else `config.json` if present, else defaults
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    if let Some(path) = path {
        return read_config_file(path);
    }

    let local = Path::new(DEFAULT_CONFIG_FILE);
    if local.exists() {
        return read_config_file(local);
    }

    tracing::debug!("No config file, using defaults");
    Ok(Config::new())
}

/// Write the default config to `path` unless a file is already there
pub fn init_config(path: &Path) -> anyhow::Result<PathBuf> {
    if path.exists() {
        tracing::warn!("Config {} already exists, leaving it untouched", path.display());
        return Ok(path.to_path_buf());
    }

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, serde_json::to_string_pretty(&Config::new())?)?;
    tracing::info!("Created config {}", path.display());
    Ok(path.to_path_buf())
}

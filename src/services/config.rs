use serde::Deserialize;
use std::path::PathBuf;

/// User configuration. The dump-tool location has no embedded default;
/// it must come from here or from the `--iccdump` flag.
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub iccdump: Option<PathBuf>,
}

pub fn config_path() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")?;
    Ok(PathBuf::from(home).join(".config/icclut/config.toml"))
}

pub fn load_config() -> anyhow::Result<Config> {
    let path = config_path()?;
    if !path.exists() {
        return Ok(Config::default());
    }
    let raw = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&raw)?)
}

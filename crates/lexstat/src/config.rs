use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use lexstat_config::Cli;
use lexstat_settings::{RunSettings, TomlConfig};
use tracing::debug;

/// Project-local configuration file, looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "lexstat.toml";

/// The first existing configuration file: `./lexstat.toml`, then
/// `<config dir>/lexstat/config.toml`.
pub fn discover_config_file() -> Option<PathBuf> {
    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.is_file() {
        return Some(local);
    }
    let user = dirs::config_dir()?.join("lexstat").join("config.toml");
    user.is_file().then_some(user)
}

/// Load the file layer of the configuration.
///
/// An explicit `--config` file must exist; a discovered one is optional.
/// `--no-config` skips files entirely.
pub fn load_file_config(cli: &Cli) -> Result<TomlConfig> {
    if cli.no_config {
        return Ok(TomlConfig::default());
    }
    let Some(path) = cli.config.clone().or_else(discover_config_file) else {
        return Ok(TomlConfig::default());
    };
    debug!(path = %path.display(), "loading config file");
    TomlConfig::from_file(&path)
        .with_context(|| format!("Failed to load config {}", path.display()))
}

/// Layer CLI flags over the file configuration over built-in defaults.
pub fn resolve_settings(cli: &Cli, file: TomlConfig) -> Result<RunSettings> {
    RunSettings::from_config(cli.overlay().over(file)).ok_or_else(|| {
        anyhow!("No lexicon configured: pass --lexicon or set [lexicon] path in {CONFIG_FILE_NAME}")
    })
}

//! Configuration file management for vibeplan.
//!
//! Provides a TOML-based config file at `~/.config/vibeplan/config.toml` and a
//! resolution chain: CLI flag > env var > config file > default.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use vibeplan_core::spec::{DEFAULT_DEPLOYMENT_PLATFORM, ProjectRequest};

pub const ENV_GITHUB_USERNAME: &str = "VIBEPLAN_GITHUB_USERNAME";
pub const ENV_DEPLOYMENT_PLATFORM: &str = "VIBEPLAN_DEPLOYMENT_PLATFORM";

// -----------------------------------------------------------------------
// Config file types
// -----------------------------------------------------------------------

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub defaults: DefaultsSection,
}

/// Values used for spec fields the request leaves blank.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct DefaultsSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deployment_platform: Option<String>,
}

// -----------------------------------------------------------------------
// Paths
// -----------------------------------------------------------------------

/// Return the vibeplan config directory.
///
/// Always uses XDG layout: `$XDG_CONFIG_HOME/vibeplan` or `~/.config/vibeplan`,
/// also on macOS.
pub fn config_dir() -> PathBuf {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return PathBuf::from(xdg).join("vibeplan");
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("vibeplan")
}

/// Return the path to the vibeplan config file.
pub fn config_path() -> PathBuf {
    config_dir().join("config.toml")
}

// -----------------------------------------------------------------------
// Read / write
// -----------------------------------------------------------------------

/// Load and parse the config file. Returns an error if it does not exist.
pub fn load_config() -> Result<ConfigFile> {
    let path = config_path();
    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read config file at {}", path.display()))?;
    let config: ConfigFile = toml::from_str(&contents)
        .with_context(|| format!("failed to parse config file at {}", path.display()))?;
    Ok(config)
}

/// Serialize and write the config file, creating parent dirs as needed.
pub fn save_config(config: &ConfigFile) -> Result<()> {
    let path = config_path();
    let dir = config_dir();
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create config directory {}", dir.display()))?;

    let contents = toml::to_string_pretty(config).context("failed to serialize config")?;
    std::fs::write(&path, &contents)
        .with_context(|| format!("failed to write config file at {}", path.display()))?;

    Ok(())
}

// -----------------------------------------------------------------------
// Resolved config
// -----------------------------------------------------------------------

/// Fully resolved defaults, ready to apply to a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VibeplanConfig {
    /// `None` leaves the placeholder username in generated URLs.
    pub github_username: Option<String>,
    pub deployment_platform: String,
}

impl VibeplanConfig {
    /// Resolve configuration using the chain: CLI flag > env var > config file > default.
    ///
    /// - GitHub username: `cli_username` > `VIBEPLAN_GITHUB_USERNAME` > `defaults.github_username` > none
    /// - Platform: `cli_platform` > `VIBEPLAN_DEPLOYMENT_PLATFORM` > `defaults.deployment_platform` > `github`
    ///
    /// A missing config file is fine; an unreadable or malformed one is an error.
    pub fn resolve(cli_username: Option<&str>, cli_platform: Option<&str>) -> Result<Self> {
        let file_config = if config_path().exists() {
            Some(load_config()?)
        } else {
            None
        };
        let defaults = file_config.map(|c| c.defaults).unwrap_or_default();

        let github_username = pick(cli_username, ENV_GITHUB_USERNAME, defaults.github_username);
        let deployment_platform = pick(
            cli_platform,
            ENV_DEPLOYMENT_PLATFORM,
            defaults.deployment_platform,
        )
        .unwrap_or_else(|| DEFAULT_DEPLOYMENT_PLATFORM.to_string());

        tracing::debug!(
            github_username = github_username.as_deref().unwrap_or("-"),
            %deployment_platform,
            "resolved config defaults"
        );

        Ok(Self {
            github_username,
            deployment_platform,
        })
    }

    /// Fill blank request fields with the resolved defaults.
    pub fn apply(&self, request: &mut ProjectRequest) {
        if is_blank(request.github_username.as_deref()) {
            if let Some(username) = &self.github_username {
                request.github_username = Some(username.clone());
            }
        }
        if is_blank(request.deployment_platform.as_deref()) {
            request.deployment_platform = Some(self.deployment_platform.clone());
        }
    }
}

/// First non-blank value of flag, env var and file entry.
fn pick(cli: Option<&str>, env_var: &str, file: Option<String>) -> Option<String> {
    let env = std::env::var(env_var).ok();
    [cli.map(str::to_string), env, file]
        .into_iter()
        .flatten()
        .map(|v| v.trim().to_string())
        .find(|v| !v.is_empty())
}

fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}

// -----------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------

//! Site configuration loading
//!
//! Looks at an explicit path first (`--config` / `PKSITE_CONFIG`), then at
//! `<config_dir>/pksite/config.toml`. Only a missing default file falls back
//! to built-in defaults; an explicit path must exist and parse.

use crate::error::CoreError;
use pksite_types::SiteConfig;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Where the active configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Built-in defaults, no file found
    Defaults,
    File(PathBuf),
}

#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: SiteConfig,
    pub source: ConfigSource,
}

/// `<config_dir>/pksite/config.toml`, if the platform has a config dir
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("pksite").join("config.toml"))
}

/// Resolve and load the configuration
pub fn load(explicit: Option<&Path>) -> Result<LoadedConfig, CoreError> {
    if let Some(path) = explicit {
        let config = load_file(path)?;
        info!(path = %path.display(), "loaded site config");
        return Ok(LoadedConfig {
            config,
            source: ConfigSource::File(path.to_path_buf()),
        });
    }

    match default_path() {
        Some(path) if path.exists() => {
            let config = load_file(&path)?;
            info!(path = %path.display(), "loaded site config");
            Ok(LoadedConfig {
                config,
                source: ConfigSource::File(path),
            })
        }
        _ => {
            debug!("no config file found, using defaults");
            Ok(LoadedConfig {
                config: SiteConfig::default(),
                source: ConfigSource::Defaults,
            })
        }
    }
}

/// Read, parse and validate one file
pub fn load_file(path: &Path) -> Result<SiteConfig, CoreError> {
    let content = std::fs::read_to_string(path).map_err(|source| CoreError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse(path, &content)
}

/// Parse TOML content; `path` is only used in error messages
pub fn parse(path: &Path, content: &str) -> Result<SiteConfig, CoreError> {
    let config: SiteConfig = toml::from_str(content).map_err(|source| CoreError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })?;
    validate(&config)?;
    Ok(config)
}

/// Reject values that would render an empty or broken header
pub fn validate(config: &SiteConfig) -> Result<(), CoreError> {
    let required = [
        ("brand.logo_src", &config.brand.logo_src),
        ("brand.logo_alt", &config.brand.logo_alt),
        ("contact.email", &config.contact.email),
        ("contact.phone", &config.contact.phone),
        ("server.host", &config.server.host),
    ];
    for (key, value) in required {
        if value.trim().is_empty() {
            return Err(CoreError::InvalidConfig {
                message: format!("{} must not be empty", key),
            });
        }
    }

    if !config.contact.email.contains('@') {
        return Err(CoreError::InvalidConfig {
            message: format!("contact.email '{}' is not an email address", config.contact.email),
        });
    }

    Ok(())
}

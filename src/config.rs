// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

use directories::ProjectDirs;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use url::Url;

use crate::cli::Cli;
use crate::error::{Error, Result};

/// Site-wide settings used when building links
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Base URL prepended to every anchor link, e.g. "https://example.com/"
    #[serde(default)]
    pub domain: String,
}

/// Database connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_db_host")]
    pub host: String,

    #[serde(default = "default_db_port")]
    pub port: u16,

    #[serde(default)]
    pub user: String,

    /// Prefer SITEKIT_DB_PASSWORD or the keychain over storing this in a file
    #[serde(default)]
    pub password: Option<String>,

    /// Database (schema) name
    #[serde(default)]
    pub name: String,
}

fn default_db_host() -> String {
    "localhost".into()
}
fn default_db_port() -> u16 {
    3306
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: default_db_host(),
            port: default_db_port(),
            user: String::new(),
            password: None,
            name: String::new(),
        }
    }
}

/// Connection parameters handed to a database connector.
pub struct Credentials {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: SecretString,
    pub database: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"[REDACTED]")
            .field("database", &self.database)
            .finish()
    }
}

impl DatabaseConfig {
    pub fn credentials(&self) -> Credentials {
        Credentials {
            host: self.host.clone(),
            port: self.port,
            user: self.user.clone(),
            password: SecretString::from(self.password.clone().unwrap_or_default()),
            database: self.name.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub site: SiteConfig,

    #[serde(default)]
    pub database: DatabaseConfig,

    /// Emit HTML diagnostics for failed queries
    #[serde(default)]
    pub debug_mode: bool,
}

impl Config {
    /// Load with priority: CLI > ENV > user config > project config > defaults
    pub fn load(cli: &Cli) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        // Project-level config (.sitekit.toml in the working directory)
        if let Ok(cwd) = std::env::current_dir() {
            let project_config = cwd.join(".sitekit.toml");
            if project_config.exists() {
                figment = figment.merge(Toml::file(&project_config));
            }
        }

        // User-level config
        if let Some(path) = Self::config_path() {
            if path.exists() {
                figment = figment.merge(Toml::file(&path));
            }
        }

        // Environment variables (SITEKIT_DEBUG_MODE, SITEKIT_SITE__DOMAIN, etc.)
        // Use __ separator for nested keys
        figment = figment.merge(Env::prefixed("SITEKIT_").split("__"));

        let mut config: Config = figment
            .extract()
            .map_err(|e| Error::Config(e.to_string()))?;

        if config.database.password.is_none() {
            config.database.password = std::env::var("SITEKIT_DB_PASSWORD").ok();
        }

        // Keyring fallback (if still no password and secure-storage feature is enabled)
        #[cfg(feature = "secure-storage")]
        if config.database.password.is_none() && !config.database.user.is_empty() {
            if let Ok(entry) = keyring::Entry::new("sitekit", &config.keyring_account()) {
                if let Ok(password) = entry.get_password() {
                    config.database.password = Some(password);
                }
            }
        }

        // CLI overrides (highest priority)
        config.apply_cli(cli);
        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML document on top of the defaults and validate it.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::string(content))
            .extract()
            .map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn config_dir() -> Option<PathBuf> {
        ProjectDirs::from("", "", "sitekit").map(|dirs| dirs.config_dir().to_path_buf())
    }

    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|d| d.join("config.toml"))
    }

    /// Keychain account under which the database password is stored.
    pub fn keyring_account(&self) -> String {
        format!("{}@{}", self.database.user, self.database.host)
    }

    fn apply_cli(&mut self, cli: &Cli) {
        if let Some(ref d) = cli.domain {
            self.site.domain = d.clone();
        }
        if cli.debug {
            self.debug_mode = true;
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !self.site.domain.is_empty() {
            let url = Url::parse(&self.site.domain).map_err(|e| {
                Error::Config(format!(
                    "site.domain must be an absolute URL, got '{}': {}",
                    self.site.domain, e
                ))
            })?;

            if url.scheme() != "http" && url.scheme() != "https" {
                return Err(Error::Config(format!(
                    "site.domain must start with http:// or https://, got '{}'",
                    self.site.domain
                )));
            }
        }

        if self.database.host.is_empty() {
            return Err(Error::Config("database.host cannot be empty".into()));
        }

        if self.database.port == 0 {
            return Err(Error::Config("database.port must be 1–65535, got 0".into()));
        }

        Ok(())
    }

    /// Create default config file with secure permissions
    pub fn create_default() -> Result<PathBuf> {
        let Some(dir) = Self::config_dir() else {
            return Err(Error::Config("Cannot determine config directory".into()));
        };

        fs::create_dir_all(&dir)?;

        let path = dir.join("config.toml");
        let content = r#"# sitekit Configuration

# Emit HTML diagnostics when a query fails
debug_mode = false

[site]
# Base URL prepended to anchor links
domain = "https://example.com/"

[database]
host = "localhost"
port = 3306
user = ""
name = ""
# The password is read from SITEKIT_DB_PASSWORD or the system keychain
# (`sitekit set-password`). Storing it here works but is not recommended.
# password = ""
"#;

        fs::write(&path, content)?;

        // Set secure permissions (0600)
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = fs::metadata(&path)?.permissions();
            perms.set_mode(0o600);
            fs::set_permissions(&path, perms)?;
        }

        Ok(path)
    }
}

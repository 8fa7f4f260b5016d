// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

use std::io::{IsTerminal, Read};
use std::path::Path;

use console::style;
use dialoguer::Confirm;
use tracing::debug;

use crate::cli::{Cli, Commands};
use crate::config::Config;
use crate::domain::{Anchor, RequestMeta, Value};
use crate::error::{Error, Result};
#[cfg(feature = "mysql")]
use crate::services::{mysql::MySqlConnector, query::QueryExecutor};
use crate::services::{dump::dump, duration::seconds_to_human, visitor};

pub struct App {
    cli: Cli,
    config: Config,
}

impl App {
    pub fn new(cli: Cli) -> Result<Self> {
        let config = Config::load(&cli)?;
        debug!(
            domain = %config.site.domain,
            db_host = %config.database.host,
            debug_mode = config.debug_mode,
            "config loaded"
        );
        Ok(Self { cli, config })
    }

    pub fn run(&mut self) -> Result<()> {
        match &self.cli.command {
            Commands::Anchor {
                link,
                text,
                title,
                extras,
            } => {
                let mut anchor = Anchor::new(link.as_str(), text.as_str()).extras(extras.clone());
                if let Some(t) = title {
                    anchor = anchor.title(t.as_str());
                }

                let (html, dropped) = anchor.render_with_dropped(&self.config.site);
                for rule in dropped {
                    self.print_warning(&format!("ignoring unrecognized rule '{}'", rule));
                }
                println!("{}", html);
                Ok(())
            }
            Commands::Dump { file, name } => {
                let value = Self::read_json(file.as_deref())?;
                println!("{}", dump(&value, name));
                Ok(())
            }
            Commands::Duration { seconds } => {
                println!("{}", seconds_to_human(*seconds));
                Ok(())
            }
            Commands::Ip {
                forwarded_for,
                remote_addr,
            } => {
                let mut request = RequestMeta::from_cgi_env();
                if forwarded_for.is_some() {
                    request.forwarded_for = forwarded_for.clone();
                }
                if remote_addr.is_some() {
                    request.remote_addr = remote_addr.clone();
                }
                println!("{}", visitor::visitor_ip(&request));
                Ok(())
            }
            #[cfg(feature = "mysql")]
            Commands::Query { sql } => self.query(sql),
            Commands::Init => self.init(),
            Commands::Config => {
                self.show_config();
                Ok(())
            }
            Commands::Completions { shell } => {
                let mut cmd = <Cli as clap::CommandFactory>::command();
                clap_complete::generate(*shell, &mut cmd, "sitekit", &mut std::io::stdout());
                Ok(())
            }
            #[cfg(feature = "secure-storage")]
            Commands::SetPassword => self.set_password(),
            #[cfg(feature = "secure-storage")]
            Commands::GetPassword => self.get_password(),
        }
    }

    fn read_json(file: Option<&Path>) -> Result<Value> {
        let raw = match file {
            Some(path) => std::fs::read_to_string(path)?,
            None => {
                let mut buf = String::new();
                std::io::stdin().read_to_string(&mut buf)?;
                buf
            }
        };
        debug!(bytes = raw.len(), "parsing dump input");
        let json: serde_json::Value = serde_json::from_str(&raw)?;
        Ok(Value::from(json))
    }

    /// Run one statement against the configured MySQL server and dump the
    /// result. In debug mode a failure also prints the HTML notice.
    #[cfg(feature = "mysql")]
    fn query(&self, sql: &str) -> Result<()> {
        let executor = QueryExecutor::new(&self.config, MySqlConnector);

        match executor.perform_str(sql) {
            Ok(result) => {
                println!("{}", dump(&result.into_value(), "$result"));
                Ok(())
            }
            Err(e) => {
                if let Some(notice) = executor.diagnostic(&e) {
                    println!("{}", notice);
                }
                Err(e)
            }
        }
    }

    fn init(&self) -> Result<()> {
        if let Some(path) = Config::config_path() {
            if path.exists() {
                let is_interactive =
                    std::io::stdout().is_terminal() && std::io::stdin().is_terminal();
                if !is_interactive {
                    return Err(Error::Config(format!(
                        "Config already exists at {}",
                        path.display()
                    )));
                }

                let overwrite = Confirm::new()
                    .with_prompt(format!("Overwrite {}?", path.display()))
                    .default(false)
                    .interact()?;

                if !overwrite {
                    return Err(Error::Cancelled);
                }
            }
        }

        let path = Config::create_default()?;
        println!("Created config: {}", path.display());
        Ok(())
    }

    fn show_config(&self) {
        println!("Debug mode: {}", self.config.debug_mode);
        println!();
        println!("[site]");
        println!("  domain: {}", self.config.site.domain);
        println!();
        println!("[database]");
        println!("  host: {}", self.config.database.host);
        println!("  port: {}", self.config.database.port);
        println!("  user: {}", self.config.database.user);
        println!("  name: {}", self.config.database.name);
        println!(
            "  password: {}",
            if self.config.database.password.is_some() {
                "********"
            } else {
                "(not set)"
            }
        );
        if let Some(ref path) = Config::config_path() {
            let status = if path.exists() { "found" } else { "not found" };
            println!();
            println!("Config file: {} ({})", path.display(), status);
        }
    }

    #[cfg(feature = "secure-storage")]
    fn set_password(&self) -> Result<()> {
        if self.config.database.user.is_empty() {
            return Err(Error::Config(
                "database.user must be set before storing a password".into(),
            ));
        }

        let account = self.config.keyring_account();
        eprintln!(
            "Enter database password for {} (input will be hidden):",
            style(&account).bold()
        );

        let password = dialoguer::Password::new()
            .with_prompt("Password")
            .interact()
            .map_err(|e| Error::Dialog(e.to_string()))?;

        let entry =
            keyring::Entry::new("sitekit", &account).map_err(|e| Error::Keyring(e.to_string()))?;
        entry
            .set_password(&password)
            .map_err(|e| Error::Keyring(e.to_string()))?;

        eprintln!("{} Password stored for {}", style("✓").green().bold(), account);
        Ok(())
    }

    #[cfg(feature = "secure-storage")]
    fn get_password(&self) -> Result<()> {
        let account = self.config.keyring_account();
        let entry =
            keyring::Entry::new("sitekit", &account).map_err(|e| Error::Keyring(e.to_string()))?;

        match entry.get_password() {
            Ok(_) => {
                eprintln!(
                    "{} Password for {} is stored in keychain",
                    style("✓").green().bold(),
                    account
                );
            }
            Err(keyring::Error::NoEntry) => {
                eprintln!(
                    "{} No password found for {} in keychain",
                    style("✗").red().bold(),
                    account
                );
                eprintln!("  Store one with: {}", style("sitekit set-password").yellow());
            }
            Err(e) => {
                return Err(Error::Keyring(e.to_string()));
            }
        }

        Ok(())
    }

    // ─── Output Helpers ───

    fn print_warning(&self, msg: &str) {
        eprintln!("{} {}", style("warning:").yellow().bold(), msg);
    }
}

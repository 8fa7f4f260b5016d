// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
// SPDX-License-Identifier: GPL-3.0-only

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "sitekit")]
#[command(version)]
#[command(about = "Helpers for server-rendered pages", long_about = None)]
pub struct Cli {
    /// Base URL prepended to anchor links
    #[arg(long, global = true, env = "SITEKIT_DOMAIN")]
    pub domain: Option<String>,

    /// Enable debug mode (HTML diagnostics for failed queries)
    #[arg(long, global = true)]
    pub debug: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Print an anchor tag
    Anchor {
        /// Page path appended to the domain, e.g. about.php
        link: String,

        /// Link text
        text: String,

        /// Title attribute (defaults to the link text)
        #[arg(long)]
        title: Option<String>,

        /// Shorthand rule: #id, .class, _target or style="..." (repeatable)
        #[arg(short, long = "extra", value_name = "RULE", allow_hyphen_values = true)]
        extras: Vec<String>,
    },
    /// Dump a JSON document as debug HTML
    Dump {
        /// JSON file to read (stdin if omitted)
        file: Option<PathBuf>,

        /// Display name of the dumped value
        #[arg(short, long)]
        name: String,
    },
    /// Format a number of seconds as [N day(s), ]HH:MM:SS
    Duration {
        seconds: u64,
    },
    /// Print the visitor IP from request metadata
    Ip {
        /// X-Forwarded-For header value (default: $HTTP_X_FORWARDED_FOR)
        #[arg(long)]
        forwarded_for: Option<String>,

        /// Direct peer address (default: $REMOTE_ADDR)
        #[arg(long)]
        remote_addr: Option<String>,
    },
    /// Run one SQL statement against the configured MySQL database and dump the result
    #[cfg(feature = "mysql")]
    Query {
        /// SQL statement
        sql: String,
    },
    /// Initialize config file
    Init,
    /// Show current configuration
    Config,
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
    /// Store the database password in the system keychain
    #[cfg(feature = "secure-storage")]
    SetPassword,
    /// Check whether a database password is stored in the keychain
    #[cfg(feature = "secure-storage")]
    GetPassword,
}

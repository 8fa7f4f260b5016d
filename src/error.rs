// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

// miette's Diagnostic derive generates code that triggers this false positive
#![allow(unused_assignments)]

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    #[error("Query must be a string, got {kind}")]
    #[diagnostic(
        code(sitekit::query::not_text),
        help("Pass the SQL statement as a string value")
    )]
    QueryNotText { kind: &'static str },

    #[error("Could not connect to database at {host}: {message}")]
    #[diagnostic(
        code(sitekit::query::connect),
        help("Check database.host, database.user and the stored password")
    )]
    Connect { host: String, message: String },

    #[error("Query failed: {message}")]
    #[diagnostic(code(sitekit::query::failed))]
    Query { message: String },

    #[error("Invalid JSON input: {0}")]
    #[diagnostic(
        code(sitekit::dump::json),
        help("The dump command expects a single JSON document")
    )]
    Json(#[from] serde_json::Error),

    #[error("Operation cancelled by user")]
    Cancelled,

    #[error("Configuration error: {0}")]
    #[diagnostic(code(sitekit::config::error))]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Dialog error: {0}")]
    Dialog(String),

    #[cfg(feature = "secure-storage")]
    #[error("Keyring error: {0}")]
    #[diagnostic(
        code(sitekit::keyring::error),
        help("Check your system keychain configuration")
    )]
    Keyring(String),
}

impl From<dialoguer::Error> for Error {
    fn from(e: dialoguer::Error) -> Self {
        Error::Dialog(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

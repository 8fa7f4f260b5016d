// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

//! Single-shot query execution.
//!
//! Each call opens a connection, runs one statement and closes the
//! connection again. Drivers plug in through [`Connector`].

use std::fmt;

use tracing::{debug, warn};

use crate::config::{Config, Credentials};
use crate::domain::{Key, Value};
use crate::error::{Error, Result};
use crate::html::escape;

/// Error reported by a database driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendError(pub String);

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for BackendError {}

/// One result row as `(column, value)` pairs in select order.
pub type Row = Vec<(String, Value)>;

#[derive(Debug, Clone)]
pub enum QueryResult {
    /// Statement produced a result set
    Rows(Vec<Row>),
    /// Statement ran without producing rows (INSERT, UPDATE, ...)
    Done { affected_rows: u64 },
}

impl QueryResult {
    /// Convert to a dumpable value: a list of column-keyed rows, or the
    /// affected-row count.
    pub fn into_value(self) -> Value {
        match self {
            Self::Rows(rows) => Value::list(rows.into_iter().map(|row| {
                Value::Array(
                    row.into_iter()
                        .map(|(column, value)| (Key::Name(column), value))
                        .collect(),
                )
            })),
            Self::Done { affected_rows } => {
                Value::Int(i64::try_from(affected_rows).unwrap_or(i64::MAX))
            }
        }
    }
}

/// An open database connection.
pub trait Connection {
    fn query(&mut self, sql: &str) -> std::result::Result<QueryResult, BackendError>;

    fn close(self: Box<Self>) -> std::result::Result<(), BackendError>;
}

/// Opens connections for the executor.
pub trait Connector {
    fn connect(
        &self,
        credentials: &Credentials,
    ) -> std::result::Result<Box<dyn Connection>, BackendError>;
}

pub struct QueryExecutor<C: Connector> {
    connector: C,
    credentials: Credentials,
    debug_mode: bool,
}

impl<C: Connector> QueryExecutor<C> {
    pub fn new(config: &Config, connector: C) -> Self {
        Self {
            connector,
            credentials: config.database.credentials(),
            debug_mode: config.debug_mode,
        }
    }

    /// Run `query`, which must be a string value. Anything else fails
    /// before a connection is attempted.
    pub fn perform(&self, query: &Value) -> Result<QueryResult> {
        match query.as_str() {
            Some(sql) => self.perform_str(sql),
            None => {
                debug!(kind = query.kind_name(), "rejecting non-string query");
                Err(Error::QueryNotText {
                    kind: query.kind_name(),
                })
            }
        }
    }

    pub fn perform_str(&self, sql: &str) -> Result<QueryResult> {
        let mut conn = self
            .connector
            .connect(&self.credentials)
            .map_err(|e| {
                warn!(host = %self.credentials.host, error = %e, "database connection failed");
                Error::Connect {
                    host: self.credentials.host.clone(),
                    message: e.to_string(),
                }
            })?;

        debug!(sql_len = sql.len(), "running query");
        let result = conn.query(sql);

        if let Err(e) = conn.close() {
            warn!(error = %e, "failed to close database connection");
        }

        result.map_err(|e| {
            warn!(error = %e, "query failed");
            Error::Query {
                message: e.to_string(),
            }
        })
    }

    pub fn debug_mode(&self) -> bool {
        self.debug_mode
    }

    /// HTML notice describing `err`, or `None` unless debug mode is on.
    pub fn diagnostic(&self, err: &Error) -> Option<String> {
        if !self.debug_mode {
            return None;
        }

        Some(match err {
            Error::Connect { message, .. } => {
                format!("Could not connect to database.<br />{}<br />", escape(message))
            }
            other => format!("An error occurred!<br />{}<br />", escape(&other.to_string())),
        })
    }
}

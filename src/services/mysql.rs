// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

//! MySQL driver for the query executor, built on the `mysql` crate.
//!
//! Statements go over the text protocol, so column values arrive as strings
//! the same way a PHP `mysqli` result would hand them out.

use ::mysql::prelude::Queryable;
use ::mysql::{Conn, OptsBuilder, Value as SqlValue};
use secrecy::ExposeSecret;
use tracing::debug;

use super::query::{BackendError, Connection, Connector, QueryResult, Row};
use crate::config::Credentials;
use crate::domain::Value;

/// Opens one plain TCP connection per query.
#[derive(Debug, Default, Clone, Copy)]
pub struct MySqlConnector;

impl Connector for MySqlConnector {
    fn connect(
        &self,
        credentials: &Credentials,
    ) -> std::result::Result<Box<dyn Connection>, BackendError> {
        let opts = OptsBuilder::new()
            .ip_or_hostname(Some(credentials.host.as_str()))
            .tcp_port(credentials.port)
            .user(non_empty(&credentials.user))
            .pass(non_empty(credentials.password.expose_secret()))
            .db_name(non_empty(&credentials.database));

        debug!(host = %credentials.host, port = credentials.port, "opening mysql connection");
        let conn = Conn::new(opts).map_err(backend)?;
        Ok(Box::new(MySqlConnection { conn }))
    }
}

struct MySqlConnection {
    conn: Conn,
}

impl Connection for MySqlConnection {
    fn query(&mut self, sql: &str) -> std::result::Result<QueryResult, BackendError> {
        let mut result = self.conn.query_iter(sql).map_err(backend)?;

        // Only the first result set is reported.
        let Some(set) = result.iter() else {
            return Ok(QueryResult::Done { affected_rows: 0 });
        };

        if set.columns().as_ref().is_empty() {
            return Ok(QueryResult::Done {
                affected_rows: set.affected_rows(),
            });
        }

        let mut rows = Vec::new();
        for row in set {
            let row = row.map_err(backend)?;
            let names = row
                .columns_ref()
                .iter()
                .map(|column| column.name_str().into_owned());
            let values = (0..row.len()).map(|i| row.as_ref(i).cloned());
            rows.push(zip_row(names, values));
        }
        debug!(rows = rows.len(), "mysql result set read");
        Ok(QueryResult::Rows(rows))
    }

    fn close(self: Box<Self>) -> std::result::Result<(), BackendError> {
        // Dropping the connection sends COM_QUIT.
        drop(self.conn);
        Ok(())
    }
}

fn backend(e: ::mysql::Error) -> BackendError {
    BackendError(e.to_string())
}

fn non_empty(s: &str) -> Option<&str> {
    (!s.is_empty()).then_some(s)
}

/// Pair column names with their values. A value already taken out of the
/// row shows up as `None` and becomes `Null`.
fn zip_row(
    names: impl IntoIterator<Item = String>,
    values: impl IntoIterator<Item = Option<SqlValue>>,
) -> Row {
    names
        .into_iter()
        .zip(values)
        .map(|(name, value)| (name, value.map_or(Value::Null, from_sql)))
        .collect()
}

/// Convert one driver value into a dumpable [`Value`].
fn from_sql(value: SqlValue) -> Value {
    match value {
        SqlValue::NULL => Value::Null,
        SqlValue::Bytes(bytes) => Value::String(String::from_utf8_lossy(&bytes).into_owned()),
        SqlValue::Int(i) => Value::Int(i),
        SqlValue::UInt(u) => match i64::try_from(u) {
            Ok(i) => Value::Int(i),
            Err(_) => Value::String(u.to_string()),
        },
        SqlValue::Float(f) => Value::Float(f64::from(f)),
        SqlValue::Double(d) => Value::Float(d),
        SqlValue::Date(year, month, day, hour, minute, second, micros) => {
            let mut text = format!("{:04}-{:02}-{:02}", year, month, day);
            if hour != 0 || minute != 0 || second != 0 || micros != 0 {
                text.push_str(&format!(" {:02}:{:02}:{:02}", hour, minute, second));
            }
            if micros != 0 {
                text.push_str(&format!(".{:06}", micros));
            }
            Value::String(text)
        }
        SqlValue::Time(negative, days, hours, minutes, seconds, micros) => {
            let total_hours = u64::from(days) * 24 + u64::from(hours);
            let mut text = format!(
                "{}{:02}:{:02}:{:02}",
                if negative { "-" } else { "" },
                total_hours,
                minutes,
                seconds
            );
            if micros != 0 {
                text.push_str(&format!(".{:06}", micros));
            }
            Value::String(text)
        }
    }
}

// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use secrecy::ExposeSecret;

use sitekit::config::{Config, Credentials, DatabaseConfig, SiteConfig};
use sitekit::services::query::{BackendError, Connection, Connector, QueryResult};

/// Site config pointing at a fixed test domain
#[allow(dead_code)]
pub fn example_site() -> SiteConfig {
    SiteConfig {
        domain: "https://example.com/".into(),
    }
}

/// Config with database credentials and the given debug flag
#[allow(dead_code)]
pub fn db_config(debug_mode: bool) -> Config {
    Config {
        database: DatabaseConfig {
            host: "db.internal".into(),
            user: "app".into(),
            password: Some("s3cret".into()),
            name: "shop".into(),
            ..DatabaseConfig::default()
        },
        debug_mode,
        ..Config::default()
    }
}

/// Shared record of what the fake driver saw
#[derive(Default)]
#[allow(dead_code)]
pub struct FakeState {
    pub connects: Cell<usize>,
    pub closes: Cell<usize>,
    pub last_sql: RefCell<Option<String>>,
    pub last_user: RefCell<Option<String>>,
    pub last_password: RefCell<Option<String>>,
}

/// Scripted connector: fails to connect, fails the query, or returns `result`
#[allow(dead_code)]
pub struct FakeConnector {
    pub state: Rc<FakeState>,
    pub connect_error: Option<String>,
    pub query_error: Option<String>,
    pub close_error: Option<String>,
    pub result: QueryResult,
}

#[allow(dead_code)]
impl FakeConnector {
    pub fn returning(result: QueryResult) -> Self {
        Self {
            state: Rc::new(FakeState::default()),
            connect_error: None,
            query_error: None,
            close_error: None,
            result,
        }
    }

    pub fn refusing(message: &str) -> Self {
        Self {
            connect_error: Some(message.to_string()),
            ..Self::returning(QueryResult::Done { affected_rows: 0 })
        }
    }

    pub fn failing_query(message: &str) -> Self {
        Self {
            query_error: Some(message.to_string()),
            ..Self::returning(QueryResult::Done { affected_rows: 0 })
        }
    }
}

struct FakeConnection {
    state: Rc<FakeState>,
    query_error: Option<String>,
    close_error: Option<String>,
    result: QueryResult,
}

impl Connector for FakeConnector {
    fn connect(&self, credentials: &Credentials) -> Result<Box<dyn Connection>, BackendError> {
        self.state.connects.set(self.state.connects.get() + 1);
        *self.state.last_user.borrow_mut() = Some(credentials.user.clone());
        *self.state.last_password.borrow_mut() =
            Some(credentials.password.expose_secret().to_string());

        if let Some(ref message) = self.connect_error {
            return Err(BackendError(message.clone()));
        }

        Ok(Box::new(FakeConnection {
            state: Rc::clone(&self.state),
            query_error: self.query_error.clone(),
            close_error: self.close_error.clone(),
            result: self.result.clone(),
        }))
    }
}

impl Connection for FakeConnection {
    fn query(&mut self, sql: &str) -> Result<QueryResult, BackendError> {
        *self.state.last_sql.borrow_mut() = Some(sql.to_string());
        match self.query_error {
            Some(ref message) => Err(BackendError(message.clone())),
            None => Ok(self.result.clone()),
        }
    }

    fn close(self: Box<Self>) -> Result<(), BackendError> {
        self.state.closes.set(self.state.closes.get() + 1);
        match self.close_error {
            Some(message) => Err(BackendError(message)),
            None => Ok(()),
        }
    }
}

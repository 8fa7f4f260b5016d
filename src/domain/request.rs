// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
// SPDX-License-Identifier: GPL-3.0-only

/// Request metadata the web server hands to a page handler.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestMeta {
    /// Raw `X-Forwarded-For` header value, if the header was sent.
    pub forwarded_for: Option<String>,
    /// Peer address of the direct connection.
    pub remote_addr: Option<String>,
}

impl RequestMeta {
    pub fn new(forwarded_for: Option<String>, remote_addr: Option<String>) -> Self {
        Self {
            forwarded_for,
            remote_addr,
        }
    }

    /// Build from header pairs, matching `X-Forwarded-For` case-insensitively.
    /// The first occurrence wins.
    pub fn from_headers<I, K, V>(headers: I, remote_addr: Option<String>) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let forwarded_for = headers
            .into_iter()
            .find(|(name, _)| {
                AsRef::<str>::as_ref(name).eq_ignore_ascii_case("x-forwarded-for")
            })
            .map(|(_, value)| value.into());

        Self {
            forwarded_for,
            remote_addr,
        }
    }

    /// Read the CGI variables `HTTP_X_FORWARDED_FOR` and `REMOTE_ADDR`.
    pub fn from_cgi_env() -> Self {
        Self {
            forwarded_for: std::env::var("HTTP_X_FORWARDED_FOR").ok(),
            remote_addr: std::env::var("REMOTE_ADDR").ok(),
        }
    }
}

// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
// SPDX-License-Identifier: GPL-3.0-only

use crate::domain::RequestMeta;

/// Client address as reported by the request.
///
/// A forwarded-for header, when present at all, takes precedence over the
/// direct peer address. The result is trimmed but not validated, so a
/// proxy chain such as `"203.0.113.7, 10.0.0.1"` is returned unchanged.
pub fn visitor_ip(request: &RequestMeta) -> String {
    request
        .forwarded_for
        .as_deref()
        .or(request.remote_addr.as_deref())
        .unwrap_or_default()
        .trim()
        .to_string()
}

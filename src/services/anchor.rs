// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::config::SiteConfig;
use crate::domain::{Anchor, ExtraAttr, Extras};
use crate::html::escape;

/// `style="..."` or `style='...'` with no markup inside the value
static STYLE_RULE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^style\s*=\s*("[^"<>]*"|'[^'<>]*')$"#).expect("Invalid STYLE_RULE regex")
});

/// Parse one shorthand rule into the attribute it encodes.
///
/// - `#main` → `id="main"`
/// - `.btn` → `class="btn"`
/// - `_blank` → `target="_blank"`
/// - `style="color:red"` → passed through as-is
///
/// Anything else yields `None`.
pub fn parse_extra(rule: &str) -> Option<ExtraAttr> {
    if let Some(id) = rule.strip_prefix('#') {
        return Some(ExtraAttr::Id(id.to_string()));
    }

    if let Some(class) = rule.strip_prefix('.') {
        return Some(ExtraAttr::Class(class.to_string()));
    }

    if rule.starts_with('_') {
        return Some(ExtraAttr::Target(rule.to_string()));
    }

    if rule.starts_with("style") && STYLE_RULE.is_match(rule) {
        return Some(ExtraAttr::Style(rule.to_string()));
    }

    debug!(rule, "ignoring unrecognized anchor rule");
    None
}

impl Anchor {
    /// Render as an `<a>` tag linking into `site`.
    pub fn render(&self, site: &SiteConfig) -> String {
        self.render_with_dropped(site).0
    }

    /// Render like [`Anchor::render`], also returning the extras that
    /// produced no attribute, in order.
    pub fn render_with_dropped(&self, site: &SiteConfig) -> (String, Vec<&str>) {
        let mut data = format!(
            "<a href=\"{}{}\" title=\"{}\"",
            escape(&site.domain),
            escape(&self.link),
            escape(self.effective_title())
        );
        let mut dropped = Vec::new();

        for rule in self.extras.rules() {
            match parse_extra(rule) {
                Some(attr) => data.push_str(&attr.to_string()),
                None => dropped.push(rule.as_str()),
            }
        }

        data.push('>');
        data.push_str(&escape(&self.text));
        data.push_str("</a>");
        (data, dropped)
    }
}

/// Build an anchor tag in one call.
///
/// ```
/// use sitekit::config::SiteConfig;
/// use sitekit::services::anchor::anchor;
///
/// let site = SiteConfig { domain: "https://example.com/".into() };
/// let html = anchor(&site, "about.php", "About", None, ["#main", ".btn"]);
/// assert_eq!(
///     html,
///     r#"<a href="https://example.com/about.php" title="About" id="main" class="btn">About</a>"#
/// );
/// ```
pub fn anchor(
    site: &SiteConfig,
    link: &str,
    text: &str,
    title: Option<&str>,
    extras: impl Into<Extras>,
) -> String {
    let mut a = Anchor::new(link, text).extras(extras);
    if let Some(t) = title {
        a = a.title(t);
    }
    a.render(site)
}

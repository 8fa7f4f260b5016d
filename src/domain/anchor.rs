// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
// SPDX-License-Identifier: GPL-3.0-only

use std::fmt;

use crate::html::escape;

/// Attribute produced by a shorthand rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtraAttr {
    /// `#main`
    Id(String),
    /// `.btn`
    Class(String),
    /// `_blank`, kept verbatim including the underscore
    Target(String),
    /// `style="..."`, emitted raw
    Style(String),
}

impl fmt::Display for ExtraAttr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, " id=\"{}\"", escape(id)),
            Self::Class(class) => write!(f, " class=\"{}\"", escape(class)),
            Self::Target(target) => write!(f, " target=\"{}\"", escape(target)),
            Self::Style(rule) => write!(f, " {}", rule),
        }
    }
}

/// Shorthand rules attached to an anchor: none, one, or an ordered list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Extras {
    #[default]
    None,
    One(String),
    Many(Vec<String>),
}

impl Extras {
    pub fn rules(&self) -> &[String] {
        match self {
            Self::None => &[],
            Self::One(rule) => std::slice::from_ref(rule),
            Self::Many(rules) => rules,
        }
    }
}

impl From<&str> for Extras {
    fn from(rule: &str) -> Self {
        Self::One(rule.to_string())
    }
}

impl From<String> for Extras {
    fn from(rule: String) -> Self {
        Self::One(rule)
    }
}

impl From<Vec<String>> for Extras {
    fn from(rules: Vec<String>) -> Self {
        Self::Many(rules)
    }
}

impl From<Vec<&str>> for Extras {
    fn from(rules: Vec<&str>) -> Self {
        Self::Many(rules.into_iter().map(String::from).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Extras {
    fn from(rules: [&str; N]) -> Self {
        Self::Many(rules.iter().map(|r| r.to_string()).collect())
    }
}

impl<T: Into<Extras>> From<Option<T>> for Extras {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Self::None, Into::into)
    }
}

/// A hyperlink to a page on the configured site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchor {
    pub link: String,
    pub text: String,
    pub title: Option<String>,
    pub extras: Extras,
}

impl Anchor {
    pub fn new(link: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            link: link.into(),
            text: text.into(),
            title: None,
            extras: Extras::None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn extras(mut self, extras: impl Into<Extras>) -> Self {
        self.extras = extras.into();
        self
    }

    /// Explicit title if set and non-empty, otherwise the display text.
    pub fn effective_title(&self) -> &str {
        match self.title.as_deref() {
            Some(t) if !t.is_empty() => t,
            _ => &self.text,
        }
    }
}

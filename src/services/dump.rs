// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

//! Recursive debug dump of a [`Value`] as styled HTML.
//!
//! Every node is wrapped in its own block so the output stays left-aligned
//! and readable on any page background. Shared values are tracked by
//! identity; the second time one is reached (through an alias or a cycle)
//! only a `&path` marker is printed.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use tracing::warn;

use crate::domain::Value;
use crate::html::escape;

const BLOCK_OPEN: &str =
    "<div style='text-align:left; background-color:white; font: 100% monospace; color:black;'>";
const BLOCK_CLOSE: &str = "</div>";

/// One level of indentation.
pub const INDENT_UNIT: &str = "<span style='color:#666666;'>|</span> &nbsp;&nbsp; ";

pub const NO_NAME_NOTICE: &str = "There was no name supplied. Debug failed.";

/// Dump `value` under the display name `name`.
///
/// An empty name renders only a failure notice.
///
/// ```
/// use sitekit::domain::Value;
/// use sitekit::services::dump::dump;
///
/// let html = dump(&Value::Int(42), "$answer");
/// assert!(html.contains("$answer = <span style='color:#666666'>Integer(2)</span>"));
/// ```
pub fn dump(value: &Value, name: &str) -> String {
    Dumper::default().render(value, name, "", "")
}

#[derive(Default)]
struct Dumper {
    /// Path of every shared value already printed, keyed by allocation.
    seen: HashMap<*const RefCell<Value>, String>,
}

impl Dumper {
    fn render(&mut self, value: &Value, name: &str, indent: &str, ancestors: &str) -> String {
        let mut out = String::from(BLOCK_OPEN);

        if name.is_empty() {
            warn!(ancestors, "debug dump called without a name");
            out.push_str(NO_NAME_NOTICE);
            out.push_str(BLOCK_CLOSE);
            return out;
        }

        let path = format!("{}{}", ancestors, name);
        self.node(&mut out, value, &escape(name), indent, &path);

        out.push_str(BLOCK_CLOSE);
        out
    }

    fn node(&mut self, out: &mut String, value: &Value, name: &str, indent: &str, path: &str) {
        match value {
            Value::Shared(inner) => {
                let id = Rc::as_ptr(inner);
                if let Some(first) = self.seen.get(&id) {
                    out.push_str(&format!(
                        "{indent}{name} <span style='color:#666666'>{}</span> = <span style='color:#e87800;'>&amp;{}</span><br>",
                        value.kind_name(),
                        escape(first)
                    ));
                    return;
                }
                self.seen.insert(id, path.to_string());
                let inner = inner.borrow();
                self.node(out, &inner, name, indent, path);
            }
            Value::Array(entries) => {
                out.push_str(&format!(
                    "{indent}{name} => <span style='color:#666666'>Array ({})</span><br>{indent}(<br>",
                    entries.len()
                ));
                let child_indent = format!("{}{}", indent, INDENT_UNIT);
                for (key, child) in entries {
                    let child_name = format!("['{}']", key);
                    out.push_str(&self.render(child, &child_name, &child_indent, path));
                }
                out.push_str(&format!("{indent})<br>"));
            }
            Value::Object { fields, .. } => {
                out.push_str(&format!(
                    "{indent}{name} <span style='color:#666666'>Object</span><br>{indent}(<br>"
                ));
                let child_indent = format!("{}{}", indent, INDENT_UNIT);
                for (field, child) in fields {
                    out.push_str(&self.render(child, field, &child_indent, path));
                }
                out.push_str(&format!("{indent})<br>"));
            }
            Value::Resource { kind } => {
                out.push_str(&format!(
                    "{indent}{name} = <span style='color:#666666'>Resource - {}()</span><br>",
                    escape(kind)
                ));
            }
            scalar => {
                let (len, color, shown) = scalar_parts(scalar);
                out.push_str(&format!(
                    "{indent}{name} = <span style='color:#666666'>{}({})</span> <span style='color:{}'>{}</span><br>",
                    scalar.kind_name(),
                    len,
                    color,
                    shown
                ));
            }
        }
    }
}

/// Length, color and escaped display text of a scalar.
fn scalar_parts(value: &Value) -> (usize, &'static str, String) {
    match value {
        Value::String(s) => (s.len(), "green", format!("\"{}\"", escape(s))),
        Value::Int(i) => {
            let text = i.to_string();
            (text.len(), "red", text)
        }
        Value::Float(f) => {
            let text = float_repr(*f);
            (text.len(), "#0099c5", text)
        }
        Value::Bool(true) => (1, "#92008d", "TRUE".to_string()),
        Value::Bool(false) => (0, "#92008d", "FALSE".to_string()),
        _ => (0, "black", "NULL".to_string()),
    }
}

/// Significant digits printed for a float, as PHP's default `precision`.
const FLOAT_PRECISION: usize = 14;

/// Format like PHP's float echo: 14 significant digits, trailing zeros
/// dropped, scientific notation (`1.0E+20`) outside `1e-4 ..= 1e14`.
fn float_repr(f: f64) -> String {
    if f.is_nan() {
        return "NAN".to_string();
    } else if f == f64::INFINITY {
        return "INF".to_string();
    } else if f == f64::NEG_INFINITY {
        return "-INF".to_string();
    }

    // Rounded once here so a carry (9.99..e5 -> 1.0e6) lands in the exponent.
    let sci = format!("{:.*e}", FLOAT_PRECISION - 1, f.abs());
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return f.to_string();
    };
    let exp: i32 = exp.parse().unwrap_or(0);
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    let digits = match digits.trim_end_matches('0') {
        "" => "0",
        trimmed => trimmed,
    };

    let sign = if f.is_sign_negative() { "-" } else { "" };

    if exp < -4 || exp >= FLOAT_PRECISION as i32 {
        let (first, rest) = digits.split_at(1);
        let rest = if rest.is_empty() { "0" } else { rest };
        let exp_sign = if exp < 0 { '-' } else { '+' };
        return format!("{sign}{first}.{rest}E{exp_sign}{}", exp.unsigned_abs());
    }

    if exp < 0 {
        let zeros = "0".repeat(exp.unsigned_abs() as usize - 1);
        return format!("{sign}0.{zeros}{digits}");
    }

    let int_len = exp as usize + 1;
    if digits.len() <= int_len {
        format!("{sign}{digits}{}", "0".repeat(int_len - digits.len()))
    } else {
        let (int_part, frac) = digits.split_at(int_len);
        format!("{sign}{int_part}.{frac}")
    }
}

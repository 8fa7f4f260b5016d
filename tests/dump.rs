// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

use std::cell::RefCell;
use std::rc::Rc;

use proptest::prelude::*;
use sitekit::domain::{Key, Value};
use sitekit::services::dump::{INDENT_UNIT, NO_NAME_NOTICE, dump};

const OPEN: &str =
    "<div style='text-align:left; background-color:white; font: 100% monospace; color:black;'>";

// ─── Missing name ────────────────────────────────────────────────────────────

#[test]
fn empty_name_reports_failure_without_recursing() {
    let value = Value::list([1, 2, 3]);
    let html = dump(&value, "");
    assert_eq!(html, format!("{OPEN}{NO_NAME_NOTICE}</div>"));
    assert!(!html.contains("Array"));
    assert!(!html.contains("Integer"));
}

// ─── Scalars ─────────────────────────────────────────────────────────────────

#[test]
fn integer_line() {
    let html = dump(&Value::Int(42), "$answer");
    insta::assert_snapshot!(html, @"<div style='text-align:left; background-color:white; font: 100% monospace; color:black;'>$answer = <span style='color:#666666'>Integer(2)</span> <span style='color:red'>42</span><br></div>");
}

#[test]
fn string_line_is_quoted_and_counts_bytes() {
    let html = dump(&Value::from("héllo"), "$s");
    assert!(html.contains("$s = <span style='color:#666666'>String(6)</span> <span style='color:green'>\"héllo\"</span><br>"));
}

#[test]
fn float_line() {
    let html = dump(&Value::Float(1.5), "$f");
    assert!(html.contains("<span style='color:#666666'>Float(3)</span> <span style='color:#0099c5'>1.5</span>"));
}

#[test]
fn boolean_lines() {
    let t = dump(&Value::Bool(true), "$t");
    assert!(t.contains("Boolean(1)</span> <span style='color:#92008d'>TRUE</span>"));

    let f = dump(&Value::Bool(false), "$f");
    assert!(f.contains("Boolean(0)</span> <span style='color:#92008d'>FALSE</span>"));
}

#[test]
fn null_line() {
    let html = dump(&Value::Null, "$n");
    assert!(html.contains("$n = <span style='color:#666666'>NULL(0)</span> <span style='color:black'>NULL</span>"));
}

#[test]
fn resource_line() {
    let html = dump(
        &Value::Resource {
            kind: "mysql link".into(),
        },
        "$con",
    );
    assert!(html.contains("$con = <span style='color:#666666'>Resource - mysql link()</span><br>"));
}

#[test]
fn markup_in_values_and_names_is_escaped() {
    let html = dump(&Value::from("<script>alert(1)</script>"), "<x>");
    assert!(!html.contains("<script>"));
    assert!(!html.contains("<x>"));
    assert!(html.contains("&lt;x&gt; = "));
    assert!(html.contains("\"&lt;script&gt;alert(1)&lt;/script&gt;\""));
}

// ─── Composites ──────────────────────────────────────────────────────────────

#[test]
fn array_brackets_and_child_indent() {
    let html = dump(&Value::map([("a", 1)]), "$data");
    let expected = format!(
        "{OPEN}$data => <span style='color:#666666'>Array (1)</span><br>(<br>\
         {OPEN}{INDENT_UNIT}[&#039;a&#039;] = <span style='color:#666666'>Integer(1)</span> <span style='color:red'>1</span><br></div>\
         )<br></div>"
    );
    assert_eq!(html, expected);
}

#[test]
fn nested_arrays_grow_indent_per_level() {
    let inner = Value::list(["x"]);
    let outer = Value::Array(vec![(Key::from("inner"), inner)]);
    let html = dump(&outer, "$outer");

    let two_levels = format!("{INDENT_UNIT}{INDENT_UNIT}[&#039;0&#039;] = ");
    assert!(html.contains(&two_levels));
    assert!(html.contains(&format!("{INDENT_UNIT}[&#039;inner&#039;] => ")));
    assert_eq!(html.matches(OPEN).count(), 3);
    assert_eq!(html.matches("</div>").count(), 3);
}

#[test]
fn object_fields_are_named_directly() {
    let user = Value::object(
        "User",
        [
            ("id".to_string(), Value::Int(7)),
            ("name".to_string(), Value::from("Ada")),
        ],
    );
    let html = dump(&user, "$user");
    assert!(html.starts_with(&format!(
        "{OPEN}$user <span style='color:#666666'>Object</span><br>(<br>"
    )));
    assert!(html.contains(&format!("{INDENT_UNIT}id = <span style='color:#666666'>Integer(1)</span>")));
    assert!(html.contains(&format!("{INDENT_UNIT}name = <span style='color:#666666'>String(3)</span>")));
    assert!(html.ends_with(")<br></div>"));
}

#[test]
fn empty_array() {
    let html = dump(&Value::Array(Vec::new()), "$empty");
    assert_eq!(
        html,
        format!("{OPEN}$empty => <span style='color:#666666'>Array (0)</span><br>(<br>)<br></div>")
    );
}

#[test]
fn json_documents_dump_as_arrays() {
    let json = serde_json::json!({"ids": [1, 2], "ok": true, "ratio": 0.25, "none": null});
    let html = dump(&Value::from(json), "$doc");
    assert!(html.contains("$doc => <span style='color:#666666'>Array (4)</span>"));
    assert!(html.contains("[&#039;ids&#039;] => <span style='color:#666666'>Array (2)</span>"));
    assert!(html.contains("TRUE"));
    assert!(html.contains("Float(4)</span> <span style='color:#0099c5'>0.25</span>"));
    assert!(html.contains("NULL(0)"));
}

// ─── References ──────────────────────────────────────────────────────────────

#[test]
fn aliased_value_prints_reference_marker() {
    let shared = Value::shared(Value::map([("k", "v")]));
    let list = Value::list([shared.clone(), shared]);
    let html = dump(&list, "$list");

    // First occurrence is dumped in full, the alias points back at it
    assert_eq!(html.matches("[&#039;k&#039;] = ").count(), 1);
    assert!(html.contains(
        "[&#039;1&#039;] <span style='color:#666666'>Array</span> = <span style='color:#e87800;'>&amp;$list[&#039;0&#039;]</span><br>"
    ));
}

#[test]
fn cycles_terminate() {
    let node = Rc::new(RefCell::new(Value::Array(Vec::new())));
    if let Value::Array(entries) = &mut *node.borrow_mut() {
        entries.push((Key::from("name"), Value::from("root")));
        entries.push((Key::from("self"), Value::Shared(Rc::clone(&node))));
    }

    let html = dump(&Value::Shared(Rc::clone(&node)), "$node");
    assert!(html.contains("$node => <span style='color:#666666'>Array (2)</span>"));
    assert!(html.contains(
        "[&#039;self&#039;] <span style='color:#666666'>Array</span> = <span style='color:#e87800;'>&amp;$node</span>"
    ));

    // Break the cycle so the test does not leak
    if let Value::Array(entries) = &mut *node.borrow_mut() {
        entries.clear();
    }
}

#[test]
fn distinct_but_equal_values_are_not_aliases() {
    let list = Value::list([
        Value::shared(Value::from("same")),
        Value::shared(Value::from("same")),
    ]);
    let html = dump(&list, "$l");
    assert!(!html.contains("&amp;$l"));
    assert_eq!(html.matches("\"same\"").count(), 2);
}

// ─── Proptest ────────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn blocks_are_balanced(items in proptest::collection::vec(any::<String>(), 0..8), name in "[a-z$]{1,8}") {
        let html = dump(&Value::list(items.clone()), &name);
        prop_assert_eq!(html.matches(OPEN).count(), items.len() + 1);
        prop_assert_eq!(html.matches("</div>").count(), items.len() + 1);
    }

    #[test]
    fn string_content_never_injects_markup(s in any::<String>()) {
        let html = dump(&Value::from(s), "$s");
        prop_assert_eq!(html.matches("<span").count(), 2);
    }
}

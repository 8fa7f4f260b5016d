// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

#![no_main]

use libfuzzer_sys::fuzz_target;
use sitekit::config::SiteConfig;
use sitekit::domain::Anchor;
use sitekit::services::anchor::parse_extra;

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };

    let rules: Vec<String> = input.split('\n').map(String::from).collect();
    for rule in &rules {
        let _ = parse_extra(rule);
    }

    let html = Anchor::new(input, input)
        .title(input)
        .extras(rules)
        .render(&SiteConfig::default());
    assert!(html.ends_with("</a>"));
});

// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

#![no_main]

use libfuzzer_sys::fuzz_target;
use sitekit::domain::Value;
use sitekit::services::dump::dump;

fuzz_target!(|data: &[u8]| {
    let Ok(json) = serde_json::from_slice::<serde_json::Value>(data) else {
        return;
    };

    let html = dump(&Value::from(json), "$fuzz");
    assert!(html.ends_with("</div>"));
});

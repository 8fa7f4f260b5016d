// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

mod anchor;
mod request;
mod value;

pub use anchor::*;
pub use request::*;
pub use value::*;

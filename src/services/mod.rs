// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

pub mod anchor;
pub mod dump;
pub mod duration;
#[cfg(feature = "mysql")]
pub mod mysql;
pub mod query;
pub mod visitor;

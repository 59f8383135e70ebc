// Copyright (c) 2020-present, UMD Database Group.
//
// This program is free software: you can use, redistribute, and/or modify
// it under the terms of the GNU Affero General Public License, version 3
// or later ("AGPL"), as published by the Free Software Foundation.
//
// This program is distributed in the hope that it will be useful, but WITHOUT
// ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or
// FITNESS FOR A PARTICULAR PURPOSE.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <http://www.gnu.org/licenses/>.

//! This module contains various utility functions.

/// Returns an informational banner with the crate version and the target
/// architecture. The output is built from compile-time constants, so every
/// call returns the same string.
pub fn runtime_info() -> String {
    format!(
        "parrot {} on {}",
        env!("CARGO_PKG_VERSION"),
        std::env::consts::ARCH
    )
}

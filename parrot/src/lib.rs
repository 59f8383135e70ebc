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

#![warn(missing_docs, clippy::needless_borrow)]
#![allow(clippy::new_without_default)]

//! Parrot is a sample cloud function that echoes an attribute of the
//! invocation event back to the caller. The library contains the whole of
//! the function logic so that it can be invoked directly from tests; the
//! `parrot-function` binary only wires it to the cloud function runtime.

pub mod config;
pub mod context;
pub mod error;
pub mod handler;
pub mod payload;
pub mod prelude;
pub mod utils;

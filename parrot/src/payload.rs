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

//! This module contains the [`Payload`] type, the invocation event passed to
//! the cloud function. The event is a flat mapping from string keys to
//! string values, created by the caller and never mutated by the handler.

use crate::error::{ParrotError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The invocation event of the cloud function.
///
/// The platform delivers the event as a JSON object; it is deserialized into
/// a plain key-value mapping. Keys that the handler requires are looked up
/// with [`Payload::get`], which surfaces a lookup error when the key is
/// absent. There are no default values.
#[derive(Default, Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct Payload(HashMap<String, String>);

impl Payload {
    /// Returns the value associated with `key`.
    ///
    /// # Arguments
    /// * `key` - The event field to look up.
    ///
    /// # Returns
    /// The string value of the field, or [`ParrotError::MissingKey`] if the
    /// event does not contain it.
    pub fn get(&self, key: &str) -> Result<&str> {
        self.0
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| ParrotError::MissingKey(key.to_owned()))
    }

    /// Renders the full event as pretty-printed JSON for diagnostic logging.
    /// Key ordering is not stable.
    pub fn to_pretty_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.0)?)
    }
}

impl From<HashMap<String, String>> for Payload {
    fn from(map: HashMap<String, String>) -> Self {
        Payload(map)
    }
}

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

//! Parrot error types

use std::error;
use std::fmt::{Display, Formatter};
use std::io;
use std::result;

/// Result type for operations that could result in a [ParrotError]
pub type Result<T> = result::Result<T, ParrotError>;

/// Parrot error
#[derive(Debug)]
pub enum ParrotError {
    /// Error associated to I/O operations and associated traits. This covers
    /// a configuration file that is absent or unreadable at the resolved
    /// path, and a current working directory that cannot be determined.
    IoError(io::Error),
    /// Error returned when the event cannot be rendered to or decoded from
    /// its JSON representation.
    SerdeJson(serde_json::Error),
    /// Error returned when a required event field is absent. The field name
    /// is carried so that the platform log identifies which key was missing.
    MissingKey(String),
    /// Error returned by the cloud function runtime while driving the
    /// invocation.
    Execution(String),
}

impl From<io::Error> for ParrotError {
    fn from(e: io::Error) -> Self {
        ParrotError::IoError(e)
    }
}

impl From<serde_json::Error> for ParrotError {
    fn from(e: serde_json::Error) -> Self {
        ParrotError::SerdeJson(e)
    }
}

impl From<Box<dyn error::Error + Send + Sync>> for ParrotError {
    fn from(e: Box<dyn error::Error + Send + Sync>) -> Self {
        ParrotError::Execution(e.to_string())
    }
}

impl Display for ParrotError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match *self {
            ParrotError::IoError(ref desc) => write!(f, "IO error: {}", desc),
            ParrotError::SerdeJson(ref desc) => write!(f, "Serialization error: {}", desc),
            ParrotError::MissingKey(ref key) => {
                write!(f, "Required key \"{}\" is missing from the event", key)
            }
            ParrotError::Execution(ref desc) => write!(f, "Execution error: {}", desc),
        }
    }
}

impl error::Error for ParrotError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ParrotError::MissingKey("key1".to_string());
        assert_eq!(
            "Required key \"key1\" is missing from the event",
            format!("{}", err)
        );

        let err: ParrotError = io::Error::new(io::ErrorKind::NotFound, "no such file").into();
        assert!(matches!(err, ParrotError::IoError(_)));
        assert!(format!("{}", err).starts_with("IO error:"));
    }
}

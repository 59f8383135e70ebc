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

//! The execution context of the cloud function.

use crate::config::{PARROT_CONFIG_PATH, PARROT_ROOT_ENV};
use crate::error::Result;
use std::env;
use std::path::PathBuf;

/// The per-invocation execution context of the function.
///
/// The context carries the function root directory against which the
/// relative configuration path is resolved. When no root is pinned, the
/// process's current working directory at call time is used, which matches
/// the behavior of a function deployed with its resources next to the
/// binary.
#[derive(Default, Debug, Clone)]
pub struct ExecutionContext {
    root: Option<PathBuf>,
}

impl ExecutionContext {
    /// Returns a context that resolves the configuration path against the
    /// current working directory at call time.
    pub fn new() -> Self {
        ExecutionContext { root: None }
    }

    /// Returns a context pinned to an explicit function root.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        ExecutionContext {
            root: Some(root.into()),
        }
    }

    /// Returns a context initialized from the cloud environment. The root is
    /// taken from the environment variable named in the global settings when
    /// it is set, otherwise the working-directory default applies.
    pub fn from_env() -> Self {
        match env::var(&**PARROT_ROOT_ENV) {
            Ok(root) => ExecutionContext::with_root(root),
            Err(_) => ExecutionContext::new(),
        }
    }

    /// Resolves the absolute path of the configuration file for this
    /// invocation.
    pub fn config_path(&self) -> Result<PathBuf> {
        let root = match &self.root {
            Some(root) => root.clone(),
            None => env::current_dir()?,
        };
        Ok(root.join(&**PARROT_CONFIG_PATH))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn config_path_under_pinned_root() -> Result<()> {
        let ctx = ExecutionContext::with_root("/opt/parrot");
        assert_eq!(
            PathBuf::from("/opt/parrot/my_lambda/stuff/config.yml"),
            ctx.config_path()?
        );
        Ok(())
    }

    #[tokio::test]
    async fn config_path_under_cwd() -> Result<()> {
        // Another test may move the working directory concurrently, so only
        // the shape of the resolved path is checked here.
        let path = ExecutionContext::new().config_path()?;
        assert!(path.is_absolute());
        assert!(path.ends_with("my_lambda/stuff/config.yml"));
        Ok(())
    }
}

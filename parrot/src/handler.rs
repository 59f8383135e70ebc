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

//! The endpoint of the cloud function invocation.

use crate::config::PARROT_CONFIG_PATH;
use crate::context::ExecutionContext;
use crate::error::Result;
use crate::payload::Payload;
use crate::utils;
use log::info;
use std::env;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::sync::Once;

/// Initializes the function once and only once.
static INIT: Once = Once::new();

/// Performs the one-time initialization of the function. The hosting harness
/// invokes it after the logger is installed and before the first invocation;
/// repeated calls are no-ops.
pub fn init() {
    INIT.call_once(|| info!("Loading function"));
}

/// The endpoint for function invocations.
///
/// The handler narrates one invocation end to end: it logs the full event,
/// the three required event fields, the utility banner, the working
/// directory, and the raw lines of the bundled configuration file, then
/// echoes the value of `key1` back to the caller. Every failure propagates
/// to the invoking platform; nothing is caught or retried here.
///
/// # Arguments
/// * `ctx` - The runtime context of the function.
/// * `event` - The invocation event; must contain `key1`, `key2` and `key3`.
///
/// # Returns
/// The string value of `key1`.
pub async fn handler(ctx: &ExecutionContext, event: &Payload) -> Result<String> {
    info!("Received event: {}", event.to_pretty_json()?);
    info!("value1 = {}", event.get("key1")?);
    info!("value2 = {}", event.get("key2")?);
    info!("value3 = {}", event.get("key3")?);

    info!("{}", utils::runtime_info());
    info!("cwd: {}", env::current_dir()?.display());

    let lines = read_config_lines(&ctx.config_path()?)?;
    info!("File contents of {}:", &**PARROT_CONFIG_PATH);
    info!("{:?}", lines);

    Ok(event.get("key1")?.to_owned())
}

/// Reads all lines of the configuration file. The file handle lives only for
/// the duration of this call and is released on success and failure alike.
/// The content is treated as opaque text and is never deserialized.
fn read_config_lines(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path)?;
    let lines = BufReader::new(file)
        .lines()
        .collect::<io::Result<Vec<String>>>()?;
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParrotError;
    use serde_json::json;
    use std::path::PathBuf;

    fn fixed_event() -> Payload {
        serde_json::from_value(json!({
            "key1": "value1",
            "key2": "value2",
            "key3": "value3"
        }))
        .unwrap()
    }

    /// The deployment root of the function, which carries the static
    /// `my_lambda/stuff/config.yml` resource.
    fn deploy_root() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR"))
            .parent()
            .unwrap()
            .to_path_buf()
    }

    #[tokio::test]
    async fn handler_returns_first_key_value() -> Result<()> {
        init();
        let ctx = ExecutionContext::with_root(deploy_root());
        assert_eq!("value1", handler(&ctx, &fixed_event()).await?);
        Ok(())
    }

    #[tokio::test]
    async fn handler_echoes_key1_unchanged() -> Result<()> {
        let event: Payload = serde_json::from_value(json!({
            "key1": "a rather different value",
            "key2": "",
            "key3": "3"
        }))?;

        let ctx = ExecutionContext::with_root(deploy_root());
        assert_eq!("a rather different value", handler(&ctx, &event).await?);
        Ok(())
    }

    #[tokio::test]
    async fn handler_is_idempotent() -> Result<()> {
        let ctx = ExecutionContext::with_root(deploy_root());
        let event = fixed_event();

        let first = handler(&ctx, &event).await?;
        let second = handler(&ctx, &event).await?;
        assert_eq!(first, second);
        assert_eq!("value1", second);
        Ok(())
    }

    #[tokio::test]
    async fn missing_key_fails_before_file_access() -> Result<()> {
        let event: Payload = serde_json::from_value(json!({
            "key2": "value2",
            "key3": "value3"
        }))?;

        // The root is bogus on purpose: the lookup error must surface before
        // the configuration file is ever opened.
        let ctx = ExecutionContext::with_root("/nonexistent/function/root");
        let err = handler(&ctx, &event).await.unwrap_err();
        assert!(matches!(err, ParrotError::MissingKey(ref key) if key == "key1"));
        Ok(())
    }

    #[tokio::test]
    async fn every_key_is_required() -> Result<()> {
        let ctx = ExecutionContext::with_root(deploy_root());

        let event: Payload = serde_json::from_value(json!({
            "key1": "value1",
            "key3": "value3"
        }))?;
        let err = handler(&ctx, &event).await.unwrap_err();
        assert!(matches!(err, ParrotError::MissingKey(ref key) if key == "key2"));

        let event: Payload = serde_json::from_value(json!({
            "key1": "value1",
            "key2": "value2"
        }))?;
        let err = handler(&ctx, &event).await.unwrap_err();
        assert!(matches!(err, ParrotError::MissingKey(ref key) if key == "key3"));
        Ok(())
    }

    #[tokio::test]
    async fn missing_config_file_fails_invocation() -> Result<()> {
        let ctx = ExecutionContext::with_root("/nonexistent/function/root");
        let err = handler(&ctx, &fixed_event()).await.unwrap_err();
        assert!(
            matches!(err, ParrotError::IoError(ref e) if e.kind() == io::ErrorKind::NotFound)
        );
        Ok(())
    }

    #[tokio::test]
    async fn relative_resolution_from_working_directory() -> Result<()> {
        init();
        // Emulate running in the same directory context as the deployed
        // function would.
        env::set_current_dir(deploy_root())?;

        let ctx = ExecutionContext::new();
        assert_eq!("value1", handler(&ctx, &fixed_event()).await?);
        Ok(())
    }
}

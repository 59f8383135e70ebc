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

//! The main entry point for the parrot lambda function.

use lambda_runtime::{service_fn, LambdaEvent};
use log::info;
use parrot::prelude::*;

async fn handler(event: LambdaEvent<Payload>) -> Result<String> {
    // The platform context is accepted for interface compatibility and not
    // consumed by the function logic.
    let (event, _context) = event.into_parts();

    info!(
        "AWS Lambda function architecture: {}",
        std::env::consts::ARCH
    );

    let ctx = ExecutionContext::from_env();
    handler::handler(&ctx, &event).await
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    init();
    lambda_runtime::run(service_fn(handler)).await?;
    Ok(())
}

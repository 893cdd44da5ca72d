//! Openapi command - prints the HTTP API description.

use anyhow::Result;
use clap::Args;

use notekeep_server::ApiDoc;

use super::Context;

/// Arguments for the openapi command.
#[derive(Args, Debug)]
pub struct OpenapiArgs {}

/// Run the openapi command.
pub fn run(_args: OpenapiArgs, _ctx: &Context) -> Result<()> {
    println!("{}", ApiDoc::to_pretty_json()?);
    Ok(())
}

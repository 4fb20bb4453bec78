//! Command dispatch logic for routegraph

use std::time::Instant;

use routegraph_core::error::Result;
use tracing::debug;

use crate::cli::Cli;

mod command;
mod commands;

use command::{Command, CommandContext, NoCommand};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let ctx = CommandContext::new(cli, start)?;

    debug!(elapsed = ?start.elapsed(), format = %ctx.format, "resolve_config");

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}

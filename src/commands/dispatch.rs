//! Command dispatch logic for wgraph

use std::time::Instant;

use clap::CommandFactory;
use wgraph_core::config::Config;
use wgraph_core::error::Result;
use wgraph_core::format::OutputFormat;

use crate::cli::{Cli, Commands};
use crate::commands;

pub fn run(cli: &Cli, config: &Config, format: OutputFormat, start: Instant) -> Result<()> {
    let result = match &cli.command {
        None => handle_no_command(),

        Some(Commands::Demo {
            from,
            to,
            algorithm,
        }) => commands::demo::execute(
            cli,
            config,
            format,
            from.as_deref(),
            to.as_deref(),
            *algorithm,
        ),

        Some(Commands::Path(args)) => commands::path::execute(cli, config, format, args),
    };

    tracing::debug!(elapsed = ?start.elapsed(), "command_complete");
    result
}

fn handle_no_command() -> Result<()> {
    Cli::command().print_help()?;
    println!();
    Ok(())
}

//! CLI argument parsing for wgraph
//!
//! Uses clap for argument parsing.
//! Supports global flags: --format, --quiet, --verbose, --config and logging options

pub mod parse;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use parse::{parse_algorithm, parse_edge, parse_format, EdgeSpec};
use wgraph_core::format::OutputFormat;
use wgraph_core::graph::Algorithm;

/// wgraph - shortest paths in small weighted graphs
#[derive(Parser, Debug)]
#[command(name = "wgraph")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format: human or json [default: from config, else human]
    #[arg(long, global = true, value_parser = parse_format)]
    pub format: Option<OutputFormat>,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log filter (e.g. `info` or `wgraph_core=trace`)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Configuration file [default: ~/.config/wgraph/config.toml]
    #[arg(long, global = true, env = "WGRAPH_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search the sample graph of Kazakhstan cities
    Demo {
        /// Starting city [default: from config, else Almaty]
        #[arg(long)]
        from: Option<String>,

        /// Destination city [default: from config, else Kyzylorda]
        #[arg(long)]
        to: Option<String>,

        /// Run only this algorithm (bfs or dijkstra) instead of both
        #[arg(long, short, value_parser = parse_algorithm)]
        algorithm: Option<Algorithm>,
    },

    /// Find a path in a graph given on the command line
    Path(PathArgs),
}

/// Arguments for the path command
#[derive(Args, Debug)]
pub struct PathArgs {
    /// Source vertex
    pub from: String,

    /// Target vertex
    pub to: String,

    /// Edge as FROM,TO,WEIGHT (repeatable)
    #[arg(long = "edge", short = 'e', value_parser = parse_edge, action = clap::ArgAction::Append)]
    pub edges: Vec<EdgeSpec>,

    /// Extra vertex with no edges (repeatable)
    #[arg(long = "vertex", action = clap::ArgAction::Append)]
    pub vertices: Vec<String>,

    /// Treat edges as one-way
    #[arg(long)]
    pub directed: bool,

    /// Algorithm: bfs or dijkstra [default: from config, else dijkstra]
    #[arg(long, short, value_parser = parse_algorithm)]
    pub algorithm: Option<Algorithm>,
}

//! Configuration type definitions

use crate::format::OutputFormat;
use crate::graph::Algorithm;
use serde::{Deserialize, Serialize};

/// wgraph configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Search defaults
    #[serde(default)]
    pub search: SearchConfig,

    /// Output defaults
    #[serde(default)]
    pub output: OutputConfig,

    /// Endpoints used by the `demo` command
    #[serde(default)]
    pub demo: DemoConfig,
}

/// Configuration for path searches
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Algorithm used by `path` when `--algorithm` is not given.
    /// `demo` runs every algorithm unless one is requested.
    #[serde(default)]
    pub default_algorithm: Algorithm,
}

/// Configuration for command output
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Format used when `--format` is not given
    #[serde(default)]
    pub format: OutputFormat,
}

/// Configuration for the sample city graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoConfig {
    #[serde(default = "default_demo_from")]
    pub from: String,

    #[serde(default = "default_demo_to")]
    pub to: String,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            from: default_demo_from(),
            to: default_demo_to(),
        }
    }
}

fn default_demo_from() -> String {
    "Almaty".to_string()
}

fn default_demo_to() -> String {
    "Kyzylorda".to_string()
}

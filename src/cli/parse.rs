use wgraph_core::error::{GraphError, Result};
use wgraph_core::format::OutputFormat;
use wgraph_core::graph::Algorithm;
use wgraph_core::{bail_invalid, bail_usage};

/// One `--edge FROM,TO,WEIGHT` argument
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeSpec {
    pub from: String,
    pub to: String,
    pub weight: f64,
}

/// Parse output format from string
pub fn parse_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse algorithm from string
pub fn parse_algorithm(s: &str) -> std::result::Result<Algorithm, String> {
    s.parse::<Algorithm>().map_err(|e| e.to_string())
}

/// Parse an edge from `FROM,TO,WEIGHT`
pub fn parse_edge(s: &str) -> std::result::Result<EdgeSpec, String> {
    edge_from_str(s).map_err(|e| e.to_string())
}

fn edge_from_str(s: &str) -> Result<EdgeSpec> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    let [from, to, weight] = parts.as_slice() else {
        bail_usage!(format!("edge must be FROM,TO,WEIGHT, got '{}'", s));
    };
    if from.is_empty() || to.is_empty() {
        bail_usage!(format!("edge endpoints must not be empty in '{}'", s));
    }

    let weight: f64 = weight
        .parse()
        .map_err(|_| GraphError::invalid_value("edge weight", weight))?;
    if !weight.is_finite() {
        bail_invalid!("edge weight", weight);
    }

    Ok(EdgeSpec {
        from: from.to_string(),
        to: to.to_string(),
        weight,
    })
}

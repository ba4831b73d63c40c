//! Rendering of path reports

use wgraph_core::error::Result;
use wgraph_core::format::OutputFormat;
use wgraph_core::graph::PathReport;

const SEPARATOR: &str = "--------------------------------";

/// Print reports in the requested format
pub fn print_reports(format: OutputFormat, quiet: bool, reports: &[PathReport<String>]) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(reports)?);
        }
        OutputFormat::Human => {
            print!("{}", render_human(reports, quiet));
        }
    }
    Ok(())
}

/// Render reports as plain text, one block per algorithm
pub fn render_human(reports: &[PathReport<String>], quiet: bool) -> String {
    let mut out = String::new();
    for (i, report) in reports.iter().enumerate() {
        if !quiet {
            if i > 0 {
                out.push_str(SEPARATOR);
                out.push_str("\n\n");
            }
            out.push_str(&format!("{}:\n", report.algorithm.label()));
            out.push_str(&format!("Path from {} to {}:\n", report.source, report.target));
        }

        if report.found {
            for vertex in &report.path {
                out.push_str(&format!("{} -> ", vertex));
            }
            out.push_str("end\n");
            if let Some(distance) = report.distance {
                out.push_str(&format!("Distance: {}\n", round_distance(distance)));
            }
        } else {
            out.push_str("No path available.\n");
        }

        if !quiet {
            out.push('\n');
        }
    }
    out
}

/// Trim float noise from summed weights (2.1 + 3.9 + 5.4 prints as 11.4).
/// Distances too large to scale are printed as they are.
fn round_distance(distance: f64) -> f64 {
    let scaled = distance * 1e9;
    if scaled.is_finite() {
        scaled.round() / 1e9
    } else {
        distance
    }
}

use assert_cmd::{cargo::cargo_bin_cmd, Command};

/// Get a Command for wgraph that ignores any user configuration
pub fn wgraph() -> Command {
    let mut cmd = cargo_bin_cmd!("wgraph");
    cmd.env("WGRAPH_CONFIG_DIR", "/nonexistent/wgraph-tests")
        .env_remove("WGRAPH_CONFIG")
        .env_remove("WGRAPH_LOG")
        .env_remove("RUST_LOG");
    cmd
}

/// Edges of the undirected letters graph as `--edge` arguments
#[allow(dead_code)]
pub fn letter_edges() -> Vec<String> {
    [
        "A,B,2.1", "C,D,7.8", "D,B,7.1", "A,C,7.2", "C,B,3.9", "B,E,3.5", "C,F,5.4",
    ]
    .iter()
    .flat_map(|edge| ["--edge".to_string(), edge.to_string()])
    .collect()
}

//! wgraph Core Library
//!
//! Weighted graph storage with breadth-first and Dijkstra single-source search.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;

//! Command implementations for wgraph

pub mod demo;
pub mod dispatch;
pub mod helpers;
pub mod output;
pub mod path;

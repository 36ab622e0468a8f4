//! CLI commands for wgraph

pub mod demo;
pub mod dispatch;
pub mod shell;

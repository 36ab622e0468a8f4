//! wgraph Core Library
//!
//! Weighted graph engine (directed or undirected) with traversal and
//! single-source shortest-path queries, plus the error, logging and
//! configuration plumbing shared with the `wgraph` binary.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;

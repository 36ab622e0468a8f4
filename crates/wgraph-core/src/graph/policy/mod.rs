//! Edge mutation policies
//!
//! The adjacency store and every read query are shared; only the three
//! mutations that depend on edge direction are split out here:
//! - `directed`: an edge is a single one-way arc
//! - `undirected`: an edge is mirrored at both endpoints
//!
//! Each function reports how much the graph's edge counter moves, and the
//! graph applies that delta. Both policies count a replaced edge as a new
//! one, so repeated `add_edge` calls on the same pair inflate the counter.

pub mod directed;
pub mod undirected;

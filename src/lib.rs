//! A crate to compute Euler tours of graphs.
//!
//! The graph is abstracted by the traits in [interface](interface), with an implementation based on `petgraph` in [implementation](implementation).
//! Tours are computed with Hierholzer's splicing technique by [DirectedEulerTour](algo::eulerian::tour::DirectedEulerTour) and [UndirectedEulerTour](algo::eulerian::tour::UndirectedEulerTour),
//! and [is_eulerian](algo::eulerian::is_eulerian) decides if a graph has a closed Euler tour.
//!
//! Undirected graphs are stored in the same directed graph types, each edge is then simply allowed to be traversed in both directions.
#![warn(missing_docs)]
#![recursion_limit = "1024"]
#[macro_use]
extern crate error_chain;
#[macro_use]
extern crate log;

/// Algorithms on graphs, most importantly Euler tours.
pub mod algo;
/// Contains the error types used by this crate.
pub mod error;
/// Graph implementations.
pub mod implementation;
/// Strongly typed node and edge indices.
pub mod index;
/// The graph traits.
pub mod interface;

pub use petgraph;

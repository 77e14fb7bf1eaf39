//! Graphviz rendering of microrust computation graphs.
//!
//! Only reads the graph: node labels, data, gradients and operation tags
//! exposed by `microrust_core`. Nothing is written to disk; the DOT source is
//! returned as a `String`.

pub mod dot;

pub use dot::{draw_dot, draw_dot_with, DotOptions, RankDir};

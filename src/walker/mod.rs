//! Breadth-first expansion of a [`PathPattern`](crate::PathPattern) against the live
//! directory tree.

mod listing;
mod traversal;

pub use traversal::{find_paths, find_paths_with};

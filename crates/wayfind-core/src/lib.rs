//! **wayfind-core** — node representations and graph containers.
//!
//! This crate provides the data the *wayfind* search engine runs over:
//! grid coordinates, the [`Node`] tagged union, an undirected
//! [`AdjacencyGraph`] and a 4-connected [`GridGraph`]. The search
//! algorithms themselves live in `wayfind-search`.

pub mod adjacency;
pub mod geom;
pub mod grid;
pub mod node;

pub use adjacency::AdjacencyGraph;
pub use geom::Cell;
pub use grid::GridGraph;
pub use node::Node;

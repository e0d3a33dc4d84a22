//! **wayfind-gen** — random inputs for the *wayfind* search engine.
//!
//! [`GraphGen`] wraps any [`rand::Rng`] and produces the graphs, walled
//! grids and start/goal pairs that demos and tests search over. Pass a
//! seeded generator such as `rand::rngs::StdRng` for reproducible runs.

pub mod graphgen;

pub use graphgen::{GenError, GraphGen, SMALL_WORLD_TRIES};

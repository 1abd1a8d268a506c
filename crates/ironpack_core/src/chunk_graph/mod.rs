#[allow(clippy::module_inception)]
mod chunk_graph;

pub use self::chunk_graph::*;

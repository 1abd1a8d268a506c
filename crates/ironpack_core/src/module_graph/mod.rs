#[allow(clippy::module_inception)]
mod module_graph;

pub use self::module_graph::*;

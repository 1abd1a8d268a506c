pub mod chunk_graph;
pub mod comparators;
pub mod module_graph;
pub mod types;

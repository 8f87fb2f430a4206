pub use base_graph::{BaseGraph, GraphError};
pub use hash_map_graph::{HashMapGraph, HashMapGraphDfs};
pub use mutable_graph::MutableGraph;
pub use undo_graph::{Operation, UndoGraph};

mod base_graph;
mod hash_map_graph;
mod mutable_graph;
mod undo_graph;

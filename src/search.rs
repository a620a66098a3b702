//! The IDA\* search engine (`ida`), its shared mutable node (`node`), and the sub-board embedding
//! helper (`subboard`) that lets the engine resolve the lower-right corner of a larger board.

pub mod ida;
pub mod node;
pub mod subboard;

pub use ida::solve;
pub use node::SearchNode;

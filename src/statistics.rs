//! Defines types holding statistics about pattern database construction and search progress.

/// Statistics about one breadth-first search depth transition while building a pattern database.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PdbIterationStats {
    /// The BFS depth that was just completed.
    pub depth: u8,

    /// The number of entries discovered at `depth`.
    pub new: u64,

    /// The number of entries discovered at depth less than or equal to `depth`, across the
    /// pattern currently being built.
    pub total: u64,
}

/// Statistics about one completed iteration of the IDA\* bound-escalation loop.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SearchIterationStats {
    /// The f-bound the just-finished iteration searched to.
    pub bound: u16,
}

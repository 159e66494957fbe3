use std::mem;

use crate::error::Result;

/// Arena index of the header sentinel. Allocated at construction, never freed.
pub const HEAD: usize = 0;

/// A single node in the skip list.
///
/// Each node has `span` forward links. Level 0 contains all nodes
/// (a regular linked list). Higher levels skip over nodes, enabling
/// O(log n) average-case search.
///
/// ```text
/// Level 3:  HEAD ──────────────────────────────► 50 ──────────► NIL
/// Level 2:  HEAD ──────────► 20 ────────────────► 50 ──────────► NIL
/// Level 1:  HEAD ──► 10 ──► 20 ────► 35 ────────► 50 ──► 60 ──► NIL
/// Level 0:  HEAD ──► 10 ──► 20 ──► 25 ──► 35 ──► 50 ──► 60 ──► 70 ► NIL
/// ```
///
/// Links are indices into the owning list's arena rather than references,
/// so the list stays the single owner of every node.
#[derive(Debug, Clone)]
pub struct SkipNode {
    pub(crate) key: i64,
    pub(crate) forward: Vec<Option<usize>>,
}

impl SkipNode {
    /// Allocate a node spanning levels `0..span`, all links unset.
    ///
    /// The link vector is reserved fallibly so allocation failure surfaces
    /// as [`Error::OutOfMemory`](crate::Error::OutOfMemory) instead of aborting.
    pub fn new(key: i64, span: usize) -> Result<Self> {
        let mut forward = Vec::new();
        forward.try_reserve_exact(span)?;
        forward.resize(span, None);
        Ok(SkipNode { key, forward })
    }

    /// Number of levels this node participates in.
    pub fn span(&self) -> usize {
        self.forward.len()
    }

    /// Approximate heap plus inline footprint, used for size tracking.
    pub fn size_bytes(&self) -> usize {
        mem::size_of::<i64>() + self.forward.len() * mem::size_of::<Option<usize>>()
    }

    /// Drop the link storage. The slot stays in the arena for reuse.
    pub fn release(&mut self) {
        self.forward = Vec::new();
    }
}

//! Node identifier allocation.
//!
//! This module provides the [`NodeId`] type and the [`IdAllocator`] that
//! issues identifiers for every record in a construction session.
//!
//! Identifiers are plain integers, unique within a session, assigned at
//! creation time and never reused. The downstream document format addresses
//! nodes by these numbers, so allocation order is part of the output
//! contract: the first node of a session is always id 1 and every later node
//! has a strictly larger id.

use std::fmt;

/// Identifier of a node in the construction graph.
///
/// Ids are allocated by [`IdAllocator`] and are immutable for the lifetime
/// of the node. `Display` renders the decimal value, which is exactly what
/// the markup records embed.
///
/// # Examples
///
/// ```
/// use kigdoc_core::identifier::IdAllocator;
///
/// let mut ids = IdAllocator::new();
/// let first = ids.allocate();
/// assert_eq!(first.to_string(), "1");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u64);

impl NodeId {
    /// Creates a `NodeId` from a raw integer.
    ///
    /// This exists for callers that recorded ids outside the session (for
    /// example a scripting front end replaying argument references). An id
    /// built this way is only meaningful if the session actually issued it.
    pub fn from_raw(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw integer value.
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Issues session-unique, monotonically increasing node identifiers.
///
/// The allocator is owned by the session; two sessions each start over at 1
/// and never observe each other's ids.
#[derive(Debug, Default)]
pub struct IdAllocator {
    last: u64,
}

impl IdAllocator {
    /// Creates an allocator whose first [`allocate`](Self::allocate) call
    /// returns id 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the next identifier. Strictly increasing across the session.
    pub fn allocate(&mut self) -> NodeId {
        self.last += 1;
        NodeId(self.last)
    }

    /// Whether `id` has been handed out by this allocator.
    ///
    /// Since ids are issued sequentially this is a range check. The session
    /// uses it to reject parent references that were never created here.
    pub fn issued(&self, id: NodeId) -> bool {
        id.0 >= 1 && id.0 <= self.last
    }

    /// The most recently issued id, or 0 if nothing was allocated yet.
    pub fn last_issued(&self) -> u64 {
        self.last
    }
}


#[cfg(test)]
mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn allocated_ids_are_strictly_increasing(count in 1usize..512) {
            let mut ids = IdAllocator::new();
            let mut previous = 0u64;
            for _ in 0..count {
                let id = ids.allocate();
                prop_assert!(id.get() > previous);
                previous = id.get();
            }
            prop_assert_eq!(previous, count as u64);
        }

        #[test]
        fn issued_matches_allocation_range(count in 0usize..256, probe in 0u64..1024) {
            let mut ids = IdAllocator::new();
            for _ in 0..count {
                ids.allocate();
            }
            let expected = probe >= 1 && probe <= count as u64;
            prop_assert_eq!(ids.issued(NodeId::from_raw(probe)), expected);
        }
    }
}

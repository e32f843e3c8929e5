//! The sorted singly linked chain threaded through a [`NodePool`]

use std::fmt::Display;

use log::trace;

use super::pool::{NodeHandle, NodePool};
use super::Value;
use crate::error::Error;

/// A sorted singly linked list over the nodes of a [`NodePool`]
///
/// The chain only stores the head and its length. All links live in the pool, so every method
/// which follows or changes links takes the pool as argument. A chain must always be used with the
/// same pool.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SortedChain {
    head: Option<NodeHandle>,
    len: usize,
}

/// The iterator over the [`NodeHandle`]s of a [`SortedChain`] from head to tail
#[derive(Debug)]
pub struct Iter<'pool> {
    current: Option<NodeHandle>,
    pool: &'pool NodePool,
}

/// Helper to [`Display`] a [`SortedChain`] together with its [`NodePool`]
#[derive(Debug)]
pub struct DisplayChain<'a> {
    chain: &'a SortedChain,
    pool: &'a NodePool,
}

impl SortedChain {
    /// Create a new empty `SortedChain`
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a value which implements [`Display`] for this chain
    pub fn display<'a>(&'a self, pool: &'a NodePool) -> DisplayChain<'a> {
        DisplayChain { chain: self, pool }
    }

    /// The first node of the chain if any
    pub fn head(&self) -> Option<NodeHandle> {
        self.head
    }

    /// Link `node` into the chain keeping the values in ascending order
    ///
    /// If the chain is empty, the node becomes the head. If its value is strictly lower than the
    /// head's value it becomes the new head. Otherwise, we advance from the head as long as there
    /// is a successor and the value is strictly greater than the successor's value, and link the
    /// node right after where we stopped.
    ///
    /// Note that ties are not resolved uniformly: an equal value ends up after an equal head but
    /// in front of an equal successor.
    pub fn insert(&mut self, pool: &mut NodePool, node: NodeHandle) {
        let value = pool.value(node);

        match self.head {
            None => {
                pool.set_next(node, None);
                self.head = Some(node);
            }
            Some(head) if value < pool.value(head) => {
                pool.set_next(node, Some(head));
                self.head = Some(node);
            }
            Some(head) => {
                let mut current = head;
                while let Some(next) = pool.next(current) {
                    if value > pool.value(next) {
                        current = next;
                    } else {
                        break;
                    }
                }
                pool.set_next(node, pool.next(current));
                pool.set_next(current, Some(node));
            }
        }

        self.len += 1;
        trace!("Inserted {value}: {}", self.display(pool));
    }

    /// Returns true if no nodes are linked
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Iterate over the handles of the linked nodes from head to tail
    pub fn iter<'pool>(&self, pool: &'pool NodePool) -> Iter<'pool> {
        Iter {
            current: self.head,
            pool,
        }
    }

    /// The number of linked nodes
    pub fn len(&self) -> usize {
        self.len
    }

    /// Unlink the node at the logical `position` and return its handle
    ///
    /// Position `0` unlinks the head. Any other position walks `position - 1` links to the
    /// predecessor and unlinks its successor. The node stays owned by the pool.
    pub fn remove_at(&mut self, pool: &mut NodePool, position: usize) -> Result<NodeHandle, Error> {
        let out_of_range = Error::IndexOutOfRange {
            index: position,
            len: self.len,
        };
        if position >= self.len {
            return Err(out_of_range);
        }
        let Some(head) = self.head else {
            return Err(out_of_range);
        };

        let removed = if position == 0 {
            self.head = pool.next(head);
            head
        } else {
            let mut predecessor = head;
            for _ in 1..position {
                predecessor = pool.next(predecessor).ok_or_else(|| out_of_range.clone())?;
            }
            let target = pool.next(predecessor).ok_or(out_of_range)?;
            pool.set_next(predecessor, pool.next(target));
            target
        };

        pool.set_next(removed, None);
        self.len -= 1;

        trace!(
            "Removed {} at {position}: {}",
            pool.value(removed),
            self.display(pool)
        );
        Ok(removed)
    }

    /// Collect the values from head to tail
    pub fn values(&self, pool: &NodePool) -> Vec<Value> {
        self.iter(pool).map(|handle| pool.value(handle)).collect()
    }
}

impl Iterator for Iter<'_> {
    type Item = NodeHandle;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current?;
        self.current = self.pool.next(current);
        Some(current)
    }
}

impl Display for DisplayChain<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("List is:")?;
        for handle in self.chain.iter(self.pool) {
            write!(f, " {}", self.pool.value(handle))?;
        }
        Ok(())
    }
}

//! The pre-allocated pool of link nodes
//!
//! A [`NodePool`] owns all nodes of a linked list run. Chains only ever hold [`NodeHandle`]s into
//! the pool and relink them freely, but a node's storage lives until the whole pool is released.
//!
//! A handle must only be used with the pool which handed it out. Using it with another pool panics
//! or refers to an unrelated node.

use super::Value;
use crate::error::Error;

/// The index of a node in its [`NodePool`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeHandle(usize);

impl NodeHandle {
    /// The position of the node in the pool in the order nodes were acquired
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, Default)]
struct Node {
    next: Option<NodeHandle>,
    value: Value,
}

/// A fixed block of link nodes allocated once per run
#[derive(Debug)]
pub struct NodePool {
    acquired: usize,
    nodes: Vec<Node>,
}

impl NodePool {
    /// Acquire the next unused node and set its value
    ///
    /// The node starts without a link.
    pub fn acquire(&mut self, value: Value) -> Result<NodeHandle, Error> {
        let Some(node) = self.nodes.get_mut(self.acquired) else {
            return Err(Error::PoolExhausted {
                capacity: self.capacity(),
            });
        };

        node.value = value;
        node.next = None;

        let handle = NodeHandle(self.acquired);
        self.acquired += 1;
        Ok(handle)
    }

    /// The number of nodes handed out so far
    pub fn acquired(&self) -> usize {
        self.acquired
    }

    /// Allocate `capacity` nodes in a single block, each without a value and link
    pub fn allocate(capacity: usize) -> Self {
        Self {
            acquired: 0,
            nodes: vec![Node::default(); capacity],
        }
    }

    /// The number of nodes this pool was allocated with
    pub fn capacity(&self) -> usize {
        self.nodes.len()
    }

    /// The link of the node behind `handle`
    pub fn next(&self, handle: NodeHandle) -> Option<NodeHandle> {
        self.nodes[handle.0].next
    }

    /// Free every node and then the block itself returning the number of freed nodes
    ///
    /// Nodes are reclaimed no matter if they are still linked into a chain or not.
    pub fn release(self) -> usize {
        let released = self.nodes.len();
        drop(self.nodes);
        released
    }

    /// The value of the node behind `handle`
    pub fn value(&self, handle: NodeHandle) -> Value {
        self.nodes[handle.0].value
    }

    pub(crate) fn set_next(&mut self, handle: NodeHandle, next: Option<NodeHandle>) {
        self.nodes[handle.0].next = next;
    }
}

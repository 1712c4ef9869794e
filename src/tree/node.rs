use std::fmt;

use super::InnerNode;

/// A borrowed view of a single node of the tree
///
/// This is a low-level API meant for writing custom traversals. A `Node` does
/// not own anything: it is a position into the tree's node storage and can be
/// copied freely.
pub struct Node<'a, T> {
    nodes: &'a [InnerNode<T>],
    index: usize,
}

impl<'a, T> fmt::Debug for Node<'a, T>
    where T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", self.value())
            .field("left", &self.left())
            .field("right", &self.right())
            .finish()
    }
}

impl<'a, T> Clone for Node<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for Node<'a, T> {}

impl<'a, T> Node<'a, T> {
    pub(super) fn new(nodes: &'a [InnerNode<T>], index: usize) -> Self {
        Self {nodes, index}
    }

    /// Returns the value of this node
    pub fn value(&self) -> &'a T {
        &self.nodes[self.index].value
    }

    /// Returns true if this node has a left child
    pub fn has_left(&self) -> bool {
        !self.nodes[self.index].left.is_none()
    }

    /// Returns true if this node has a right child
    pub fn has_right(&self) -> bool {
        !self.nodes[self.index].right.is_none()
    }

    /// Returns the left child node (subtree) of this node, if any
    pub fn left(&self) -> Option<Self> {
        self.nodes[self.index].left.get().map(|index| Self::new(self.nodes, index))
    }

    /// Returns the right child node (subtree) of this node, if any
    pub fn right(&self) -> Option<Self> {
        self.nodes[self.index].right.get().map(|index| Self::new(self.nodes, index))
    }

    /// Returns the parent of this node, or `None` if this node is the root
    ///
    /// The parent link is a back-reference only. It never owns the node it
    /// points to.
    pub fn parent(&self) -> Option<Self> {
        self.nodes[self.index].parent.get().map(|index| Self::new(self.nodes, index))
    }

    /// Returns true if this node is the root of the tree
    pub fn is_root(&self) -> bool {
        self.nodes[self.index].parent.is_none()
    }
}

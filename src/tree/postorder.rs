use std::iter::FusedIterator;

use super::InnerNode;
use super::index::NodeIndex;

/// Post-order traversal: left subtree, then right subtree, then node
///
/// The next node is always computed from the current node's links and its
/// chain of parent back-references, so the iterator's only state is the
/// current position. No stack is kept, regardless of the size or shape of
/// the tree.
pub struct IterPostorder<'a, T> {
    nodes: &'a [InnerNode<T>],
    current: NodeIndex,
}

impl<'a, T> IterPostorder<'a, T> {
    pub(super) fn new(nodes: &'a [InnerNode<T>], root: NodeIndex) -> Self {
        // The first node post-order is the deepest leaf reached by going left
        // whenever possible and right otherwise
        let current = match root.get() {
            Some(index) => NodeIndex::new(first_leaf(nodes, index)),
            None => NodeIndex::none(),
        };

        Self {nodes, current}
    }
}

/// Descends to the leaf visited first in post-order within the subtree at
/// `index`: left whenever a left child exists, right otherwise, until a node
/// with no children is reached
fn first_leaf<T>(nodes: &[InnerNode<T>], mut index: usize) -> usize {
    loop {
        if let Some(left) = nodes[index].left.get() {
            index = left;
        } else if let Some(right) = nodes[index].right.get() {
            index = right;
        } else {
            break index;
        }
    }
}

impl<'a, T> Iterator for IterPostorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.current.get()?;
        let node = &self.nodes[index];

        self.current = match node.parent.get() {
            // The root is visited last
            None => NodeIndex::none(),

            Some(parent) => match self.nodes[parent].right.get() {
                // Coming out of a left child with a right sibling: the whole
                // sibling subtree is visited before the parent
                Some(right) if right != index => {
                    NodeIndex::new(first_leaf(self.nodes, right))
                },

                // Coming out of a right child, or the parent has no right
                // subtree: the parent itself is next
                _ => NodeIndex::new(parent),
            },
        };

        Some(&node.value)
    }
}

impl<'a, T> FusedIterator for IterPostorder<'a, T> {}

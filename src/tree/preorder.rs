use std::iter::FusedIterator;

use super::InnerNode;
use super::index::NodeIndex;

/// Pre-order traversal: node, then left subtree, then right subtree
///
/// The next node is always computed from the current node's links and its
/// chain of parent back-references, so the iterator's only state is the
/// current position. No stack is kept, regardless of the size or shape of
/// the tree.
pub struct IterPreorder<'a, T> {
    nodes: &'a [InnerNode<T>],
    current: NodeIndex,
}

impl<'a, T> IterPreorder<'a, T> {
    pub(super) fn new(nodes: &'a [InnerNode<T>], root: NodeIndex) -> Self {
        // The root is visited first
        Self {nodes, current: root}
    }
}

impl<'a, T> Iterator for IterPreorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.current.get()?;
        let node = &self.nodes[index];

        self.current = if let Some(left) = node.left.get() {
            NodeIndex::new(left)
        } else if let Some(right) = node.right.get() {
            NodeIndex::new(right)
        } else {
            // At a leaf: climb until some ancestor is entered from its left
            // child and still has a right subtree to visit. Climbing past the
            // root means the whole tree has been visited.
            let mut current = index;
            loop {
                match self.nodes[current].parent.get() {
                    Some(parent) => {
                        let parent_node = &self.nodes[parent];
                        if parent_node.left.get() == Some(current) {
                            if let Some(right) = parent_node.right.get() {
                                break NodeIndex::new(right);
                            }
                        }
                        current = parent;
                    },
                    None => break NodeIndex::none(),
                }
            }
        };

        Some(&node.value)
    }
}

impl<'a, T> FusedIterator for IterPreorder<'a, T> {}

use std::iter::FusedIterator;

use super::InnerNode;
use super::index::NodeIndex;

/// In-order traversal: left subtree, then node, then right subtree
///
/// The next node is always computed from the current node's links and its
/// chain of parent back-references, so the iterator's only state is the
/// current position. No stack is kept, regardless of the size or shape of
/// the tree.
pub struct IterInorder<'a, T> {
    nodes: &'a [InnerNode<T>],
    current: NodeIndex,
}

impl<'a, T> IterInorder<'a, T> {
    pub(super) fn new(nodes: &'a [InnerNode<T>], root: NodeIndex) -> Self {
        // The first node in-order is the leftmost node of the whole tree
        let current = match root.get() {
            Some(index) => NodeIndex::new(leftmost(nodes, index)),
            None => NodeIndex::none(),
        };

        Self {nodes, current}
    }
}

/// Follows `left` links as far down as they go
fn leftmost<T>(nodes: &[InnerNode<T>], mut index: usize) -> usize {
    while let Some(left) = nodes[index].left.get() {
        index = left;
    }
    index
}

impl<'a, T> Iterator for IterInorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.current.get()?;
        let node = &self.nodes[index];

        self.current = match node.right.get() {
            // The right subtree comes next and its leftmost node is visited
            // first
            Some(right) => NodeIndex::new(leftmost(self.nodes, right)),

            // No right subtree: climb while we are coming back out of a
            // right child, then step up once more. An exhausted parent chain
            // means the whole tree has been visited.
            None => {
                let mut current = index;
                loop {
                    match self.nodes[current].parent.get() {
                        Some(parent) if self.nodes[parent].right.get() == Some(current) => {
                            current = parent;
                        },
                        Some(parent) => break NodeIndex::new(parent),
                        None => break NodeIndex::none(),
                    }
                }
            },
        };

        Some(&node.value)
    }
}

impl<'a, T> FusedIterator for IterInorder<'a, T> {}

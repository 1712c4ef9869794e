mod index;
mod node;
mod preorder;
mod inorder;
mod postorder;

pub use node::*;
pub use preorder::*;
pub use inorder::*;
pub use postorder::*;

use std::fmt;
use std::borrow::Borrow;

use thiserror::Error;

use index::NodeIndex;

/// The error produced by the fallible tree operations
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    /// No node in the tree holds the value used to address a parent node
    #[error("no node in the tree holds the given parent value")]
    NotFound,
}

pub type TreeResult<T> = Result<T, TreeError>;

#[derive(Debug, Clone)]
struct InnerNode<T> {
    value: T,
    left: NodeIndex,
    right: NodeIndex,
    parent: NodeIndex,
}

impl<T> InnerNode<T> {
    fn new(value: T, parent: NodeIndex) -> Self {
        Self {
            value,
            left: NodeIndex::none(),
            right: NodeIndex::none(),
            parent,
        }
    }
}

/// Which child slot of a parent node an attachment targets
#[derive(Clone, Copy)]
enum ChildSlot {
    Left,
    Right,
}

/// A plain binary tree addressed by value
///
/// This is not a binary *search* tree: nodes are located by equality, not by
/// an ordering, and the tree takes whatever shape the mutation calls give it.
/// Duplicate values are allowed; operations that look a node up by value
/// always target the first match in pre-order.
///
/// Mutation never detaches a subtree. Adding a child where one already exists
/// overwrites that child's value in place and leaves everything below it
/// attached, and `add_root` on a non-empty tree does the same for the root.
///
/// Nodes are stored in an arena (`Vec`) and linked by index, including a
/// parent back-reference per node. Cloning the arena clones every node, so
/// `Clone` is a deep, fully independent copy. Dropping the tree drops the
/// arena. Neither operation recurses, so even a degenerate, very deep tree
/// cannot overflow the call stack. `BinTree` implements [`Default`], so
/// [`std::mem::take`] moves the whole tree out and leaves an empty one
/// behind.
#[derive(Clone)]
pub struct BinTree<T> {
    nodes: Vec<InnerNode<T>>,
    root: NodeIndex,
}

impl<T> Default for BinTree<T> {
    fn default() -> Self {
        Self {
            nodes: Vec::default(),
            root: NodeIndex::none(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for BinTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinTree")
            .field("root", &self.root())
            .finish()
    }
}

/// Equality is structural: two trees are equal when they have the same shape
/// and equal values in corresponding positions, regardless of the order the
/// nodes were inserted in.
impl<T: PartialEq> PartialEq for BinTree<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }

        let mut pending = vec![(self.root, other.root)];
        while let Some((a, b)) = pending.pop() {
            match (a.get(), b.get()) {
                (None, None) => {},
                (Some(a), Some(b)) => {
                    let (a, b) = (&self.nodes[a], &other.nodes[b]);
                    if a.value != b.value {
                        return false;
                    }
                    pending.push((a.left, b.left));
                    pending.push((a.right, b.right));
                },
                _ => return false,
            }
        }

        true
    }
}

impl<T: Eq> Eq for BinTree<T> {}

impl<T> BinTree<T> {
    /// Creates an empty tree
    ///
    /// The tree is initially created with a capacity of 0, so it will not
    /// allocate until the root is added.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::BinTree;
    /// let tree: BinTree<&str> = BinTree::new();
    /// assert!(tree.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty tree with the specified capacity.
    ///
    /// The tree will be able to hold at least `capacity` nodes without
    /// reallocating. If `capacity` is 0, the tree will not allocate.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            root: NodeIndex::none(),
        }
    }

    /// Returns the number of nodes in the tree
    ///
    /// Time complexity: `O(1)`
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of nodes the tree can hold without reallocating.
    ///
    /// Time complexity: `O(1)`
    pub fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Returns true if the tree is empty
    ///
    /// Time complexity: `O(1)`
    pub fn is_empty(&self) -> bool {
        debug_assert!(self.nodes.is_empty() == self.root.is_none());
        self.nodes.is_empty()
    }

    /// Clears the tree, removing all nodes
    ///
    /// Note that this method has no effect on the allocated capacity of the
    /// tree.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = NodeIndex::none();
    }

    /// Reserves capacity for at least `additional` more nodes. The collection
    /// may reserve more space to avoid frequent reallocations.
    ///
    /// # Panics
    ///
    /// Panics if the new allocation size overflows `usize`.
    pub fn reserve(&mut self, additional: usize) {
        self.nodes.reserve(additional);
    }

    /// Shrinks the capacity of the tree as much as possible.
    pub fn shrink_to_fit(&mut self) {
        self.nodes.shrink_to_fit();
    }

    /// Returns the root node of the tree, or `None` if the tree is empty
    ///
    /// This is a low-level API meant to be used for implementing custom
    /// traversals over [`Node`] handles.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::BinTree;
    ///
    /// let mut tree = BinTree::new();
    /// tree.add_root(1).add_left(&1, 2)?;
    ///
    /// let root = tree.root().unwrap();
    /// assert_eq!(*root.value(), 1);
    /// assert_eq!(*root.left().unwrap().value(), 2);
    /// assert!(root.right().is_none());
    /// # Ok::<(), bintree::TreeError>(())
    /// ```
    pub fn root(&self) -> Option<Node<'_, T>> {
        self.root.get().map(move |index| Node::new(&self.nodes, index))
    }

    /// Performs an in-order traversal of the tree
    ///
    /// This is the default traversal order: [`iter`](Self::iter) and the
    /// `IntoIterator` impl for `&BinTree` are aliases for this method.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::BinTree;
    ///
    /// let mut tree = BinTree::new();
    /// tree.add_root(1)
    ///     .add_left(&1, 2)?
    ///     .add_right(&1, 3)?
    ///     .add_left(&2, 4)?;
    ///
    /// let values: Vec<i32> = tree.iter_inorder().copied().collect();
    /// assert_eq!(values, [4, 2, 1, 3]);
    /// # Ok::<(), bintree::TreeError>(())
    /// ```
    pub fn iter_inorder(&self) -> IterInorder<'_, T> {
        IterInorder::new(&self.nodes, self.root)
    }

    /// Performs a pre-order traversal of the tree
    pub fn iter_preorder(&self) -> IterPreorder<'_, T> {
        IterPreorder::new(&self.nodes, self.root)
    }

    /// Performs a post-order traversal of the tree
    pub fn iter_postorder(&self) -> IterPostorder<'_, T> {
        IterPostorder::new(&self.nodes, self.root)
    }

    /// Returns an iterator over the values of the tree, in-order
    pub fn iter(&self) -> IterInorder<'_, T> {
        self.iter_inorder()
    }
}

impl<T: PartialEq> BinTree<T> {
    /// Returns the node holding a value equal to the given one, or `None` if
    /// no such node exists
    ///
    /// The search is a pre-order depth-first walk over the whole tree: the
    /// node itself, then its left subtree, then its right subtree. If several
    /// nodes hold equal values, the first one in pre-order is returned, every
    /// time.
    ///
    /// The value may be any borrowed form of the tree's value type, but
    /// equality on the borrowed form must match equality on the value type.
    ///
    /// Time complexity: `O(n)`
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::BinTree;
    ///
    /// let mut tree = BinTree::new();
    /// tree.add_root(String::from("root"));
    /// assert!(tree.find("root").is_some());
    /// assert!(tree.find("leaf").is_none());
    /// ```
    pub fn find<Q>(&self, value: &Q) -> Option<Node<'_, T>>
        where T: Borrow<Q>,
              Q: PartialEq + ?Sized,
    {
        self.find_index(value).map(move |index| Node::new(&self.nodes, index))
    }

    /// Adds the root of the tree, chainable with the other mutating methods
    ///
    /// If the tree already has a root, only its value is overwritten. All of
    /// its descendants stay attached, so re-rooting preserves the rest of the
    /// tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::BinTree;
    ///
    /// let mut tree = BinTree::new();
    /// tree.add_root(1);
    /// assert_eq!(tree.len(), 1);
    ///
    /// tree.add_root(2);
    /// assert_eq!(tree.len(), 1);
    /// assert_eq!(*tree.root().unwrap().value(), 2);
    /// ```
    pub fn add_root(&mut self, value: T) -> &mut Self {
        match self.root.get() {
            Some(index) => self.nodes[index].value = value,
            None => {
                self.nodes.push(InnerNode::new(value, NodeIndex::none()));
                self.root = NodeIndex::new(self.nodes.len() - 1);
            },
        }

        self
    }

    /// Adds `value` as the left child of the first node (in pre-order)
    /// holding `parent_value`
    ///
    /// If that node already has a left child, only the child's value is
    /// overwritten: the subtree below it stays attached. If no node holds
    /// `parent_value`, the tree is left untouched and
    /// [`TreeError::NotFound`] is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::{BinTree, TreeError};
    ///
    /// let mut tree = BinTree::new();
    /// tree.add_root(1)
    ///     .add_left(&1, 2)?
    ///     .add_left(&2, 4)?;
    ///
    /// assert_eq!(tree.add_left(&99, 5).unwrap_err(), TreeError::NotFound);
    /// # Ok::<(), TreeError>(())
    /// ```
    pub fn add_left<Q>(&mut self, parent_value: &Q, value: T) -> TreeResult<&mut Self>
        where T: Borrow<Q>,
              Q: PartialEq + ?Sized,
    {
        self.attach(parent_value, value, ChildSlot::Left)
    }

    /// Adds `value` as the right child of the first node (in pre-order)
    /// holding `parent_value`
    ///
    /// Same semantics as [`add_left`](Self::add_left), for the right child
    /// slot.
    pub fn add_right<Q>(&mut self, parent_value: &Q, value: T) -> TreeResult<&mut Self>
        where T: Borrow<Q>,
              Q: PartialEq + ?Sized,
    {
        self.attach(parent_value, value, ChildSlot::Right)
    }

    /// Pre-order depth-first search for the first node holding a value equal
    /// to the given one
    fn find_index<Q>(&self, value: &Q) -> Option<usize>
        where T: Borrow<Q>,
              Q: PartialEq + ?Sized,
    {
        let mut pending: Vec<usize> = self.root.get().into_iter().collect();
        while let Some(index) = pending.pop() {
            let node = &self.nodes[index];
            if node.value.borrow() == value {
                return Some(index);
            }

            // The left child must be popped before the right one
            pending.extend(node.right.get());
            pending.extend(node.left.get());
        }

        None
    }

    fn attach<Q>(&mut self, parent_value: &Q, value: T, slot: ChildSlot) -> TreeResult<&mut Self>
        where T: Borrow<Q>,
              Q: PartialEq + ?Sized,
    {
        let parent = self.find_index(parent_value).ok_or(TreeError::NotFound)?;

        let child = match slot {
            ChildSlot::Left => self.nodes[parent].left,
            ChildSlot::Right => self.nodes[parent].right,
        };

        match child.get() {
            // The slot is occupied: overwrite the value in place and keep the
            // child's entire subtree attached
            Some(index) => self.nodes[index].value = value,

            // The slot is free: grow the arena by a new leaf and link it in
            None => {
                self.nodes.push(InnerNode::new(value, NodeIndex::new(parent)));
                let index = NodeIndex::new(self.nodes.len() - 1);
                match slot {
                    ChildSlot::Left => self.nodes[parent].left = index,
                    ChildSlot::Right => self.nodes[parent].right = index,
                }
            },
        }

        Ok(self)
    }
}

impl<'a, T> IntoIterator for &'a BinTree<T> {
    type Item = &'a T;
    type IntoIter = IterInorder<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_inorder()
    }
}

/// Renders the tree as text, one line per node in pre-order, each line
/// indented by four spaces per level of depth.
///
/// An empty tree renders as the empty string.
///
/// # Examples
///
/// ```
/// use bintree::BinTree;
///
/// let mut tree = BinTree::new();
/// tree.add_root(1).add_left(&1, 2)?.add_right(&1, 3)?;
///
/// assert_eq!(tree.to_string(), "1\n    2\n    3\n");
/// # Ok::<(), bintree::TreeError>(())
/// ```
impl<T: fmt::Display> fmt::Display for BinTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut pending: Vec<(usize, usize)> = self.root.get().map(|index| (index, 0)).into_iter().collect();
        while let Some((index, depth)) = pending.pop() {
            let node = &self.nodes[index];
            writeln!(f, "{:width$}{}", "", node.value, width = 4 * depth)?;

            // The left subtree must be popped before the right one
            pending.extend(node.right.get().map(|index| (index, depth + 1)));
            pending.extend(node.left.get().map(|index| (index, depth + 1)));
        }

        Ok(())
    }
}

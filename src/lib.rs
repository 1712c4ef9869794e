//! A plain binary tree addressed by value, with traversal iterators that
//! advance through parent back-references instead of an auxiliary stack.
//!
//! [`BinTree`] is not a search tree: there is no ordering on the values and
//! no balancing. Nodes are located by equality (`add_left`/`add_right` attach
//! under the first pre-order node holding the given value) and a child slot
//! that is already occupied is overwritten in place, never detached.
//!
//! All three depth-first orders are available as restartable iterators whose
//! only state is the current position: each step is computed from the child
//! links and the per-node parent back-reference.
//!
//! ```
//! use bintree::BinTree;
//!
//! let mut tree = BinTree::new();
//! tree.add_root(1)
//!     .add_left(&1, 2)?
//!     .add_right(&1, 3)?
//!     .add_left(&2, 4)?;
//!
//! let preorder: Vec<i32> = tree.iter_preorder().copied().collect();
//! assert_eq!(preorder, [1, 2, 4, 3]);
//!
//! let inorder: Vec<i32> = tree.iter_inorder().copied().collect();
//! assert_eq!(inorder, [4, 2, 1, 3]);
//!
//! let postorder: Vec<i32> = tree.iter_postorder().copied().collect();
//! assert_eq!(postorder, [4, 2, 3, 1]);
//! # Ok::<(), bintree::TreeError>(())
//! ```

pub mod tree;

pub use tree::{BinTree, Node, IterInorder, IterPreorder, IterPostorder, TreeError, TreeResult};

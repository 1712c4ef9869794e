/// The index of a node within a tree's node storage
///
/// This type is essentially `Option<usize>` packed into a single word. The
/// value usize::MAX is reserved to represent `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeIndex(usize);

impl Default for NodeIndex {
    #[inline(always)]
    fn default() -> Self {
        // Default to no node
        NodeIndex(usize::MAX)
    }
}

impl NodeIndex {
    #[inline(always)]
    pub fn new(index: usize) -> Self {
        debug_assert!(index != usize::MAX);
        NodeIndex(index)
    }

    #[inline(always)]
    pub fn none() -> Self {
        Self::default()
    }

    /// Expands the index back into `Option<usize>`
    #[inline(always)]
    pub fn get(self) -> Option<usize> {
        let NodeIndex(index) = self;
        if index == usize::MAX {
            None
        } else {
            Some(index)
        }
    }

    #[inline(always)]
    pub fn is_none(self) -> bool {
        self.0 == usize::MAX
    }
}

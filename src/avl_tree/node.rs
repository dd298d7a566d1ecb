use crate::arena::Handle;

/// A struct representing an internal node of an avl tree.
///
/// Links are arena handles. `parent` is a back-reference used by the rebalancing walks and by
/// successor/predecessor; `left` and `right` are the structural links.
#[derive(Clone, Debug)]
pub struct Node {
    pub(crate) key: i32,
    pub(crate) height: i32,
    pub(crate) parent: Option<Handle>,
    pub(crate) left: Option<Handle>,
    pub(crate) right: Option<Handle>,
}

impl Node {
    pub(crate) fn new(key: i32, parent: Option<Handle>) -> Self {
        Node {
            key,
            height: 0,
            parent,
            left: None,
            right: None,
        }
    }

    /// Returns the key stored in the node.
    pub fn key(&self) -> i32 {
        self.key
    }

    /// Returns the cached height of the subtree rooted at the node. A leaf has height 0.
    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn parent(&self) -> Option<Handle> {
        self.parent
    }

    pub fn left(&self) -> Option<Handle> {
        self.left
    }

    pub fn right(&self) -> Option<Handle> {
        self.right
    }

    /// Returns `true` if the node has no parent.
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

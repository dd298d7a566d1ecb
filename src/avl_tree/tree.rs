use crate::arena::{Handle, TypedArena};
use crate::avl_tree::event::{Event, Observer, Removal};
use crate::avl_tree::node::Node;
use crate::error::{Error, Result};
use std::cmp::{self, Ordering};

/// An ordered set of unique `i32` keys implemented using an avl tree.
///
/// An avl tree is a self-balancing binary search tree that maintains the invariant that the
/// heights of two child subtrees of any node differ by at most one. Nodes live in a
/// `TypedArena` owned by the tree and refer to each other through `Handle`s, including a parent
/// link so that rebalancing can walk upward from the point of a change.
///
/// # Examples
/// ```
/// use avl_index::avl_tree::AvlTree;
///
/// let mut tree = AvlTree::new();
/// tree.insert(0);
/// tree.insert(3);
///
/// assert_eq!(tree.len(), 2);
/// assert!(tree.contains(3));
///
/// let min = tree.min().unwrap();
/// assert_eq!(tree.key(min), Some(0));
///
/// assert!(tree.delete(0));
/// assert!(!tree.delete(1));
/// ```
pub struct AvlTree {
    pub(crate) arena: TypedArena<Node>,
    pub(crate) root: Option<Handle>,
}

impl AvlTree {
    /// Constructs a new, empty `AvlTree`.
    ///
    /// # Examples
    /// ```
    /// use avl_index::avl_tree::AvlTree;
    ///
    /// let tree = AvlTree::new();
    /// assert!(tree.is_empty());
    /// ```
    pub fn new() -> Self {
        AvlTree {
            arena: TypedArena::new(),
            root: None,
        }
    }

    /// Returns the number of keys in the tree.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Returns `true` if the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the height of the tree: `-1` when empty, `0` for a single key.
    pub fn height(&self) -> i32 {
        self.link_height(self.root)
    }

    /// Returns the handle of the root node.
    pub fn root(&self) -> Option<Handle> {
        self.root
    }

    /// Returns the node behind a handle. Returns `None` if the handle does not name a live node
    /// of this tree.
    pub fn get(&self, handle: Handle) -> Option<&Node> {
        self.arena.get(handle)
    }

    /// Returns the key stored behind a handle.
    pub fn key(&self, handle: Handle) -> Option<i32> {
        self.get(handle).map(Node::key)
    }

    /// Removes every key from the tree.
    ///
    /// # Examples
    /// ```
    /// use avl_index::avl_tree::AvlTree;
    ///
    /// let mut tree: AvlTree = vec![1, 2, 3].into_iter().collect();
    /// tree.clear();
    /// assert!(tree.is_empty());
    /// assert_eq!(tree.len(), 0);
    /// ```
    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
    }

    /// Returns `true` if the node has no parent. Returns `false` for a stale handle.
    pub fn is_root(&self, handle: Handle) -> bool {
        self.get(handle).map_or(false, Node::is_root)
    }

    /// Returns `true` if the node is the left child of its parent.
    pub fn is_left_child(&self, handle: Handle) -> bool {
        self.get(handle)
            .and_then(|node| node.parent)
            .map_or(false, |parent| self.arena[parent].left == Some(handle))
    }

    /// Returns `true` if the node is the right child of its parent.
    pub fn is_right_child(&self, handle: Handle) -> bool {
        self.get(handle)
            .and_then(|node| node.parent)
            .map_or(false, |parent| self.arena[parent].right == Some(handle))
    }

    /// Returns the height of the left subtree minus the height of the right subtree of a node.
    pub fn balance_factor(&self, handle: Handle) -> Option<i32> {
        self.get(handle).map(|_| self.balance(handle))
    }

    /// Returns the handle of the node holding `key`.
    ///
    /// # Examples
    /// ```
    /// use avl_index::avl_tree::AvlTree;
    ///
    /// let tree: AvlTree = vec![5, 1, 9].into_iter().collect();
    /// let handle = tree.find(9).unwrap();
    /// assert_eq!(tree.key(handle), Some(9));
    /// assert_eq!(tree.find(4), None);
    /// ```
    pub fn find(&self, key: i32) -> Option<Handle> {
        let mut curr = self.root;
        while let Some(handle) = curr {
            let node = &self.arena[handle];
            curr = match key.cmp(&node.key) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return Some(handle),
            };
        }
        None
    }

    /// Checks if a key exists in the tree.
    pub fn contains(&self, key: i32) -> bool {
        self.find(key).is_some()
    }

    /// Returns the node with the minimum key.
    ///
    /// # Errors
    ///
    /// Fails with `Error::EmptyTree` if the tree is empty.
    pub fn min(&self) -> Result<Handle> {
        self.root.map(|root| self.leftmost(root)).ok_or(Error::EmptyTree)
    }

    /// Returns the node with the maximum key.
    ///
    /// # Errors
    ///
    /// Fails with `Error::EmptyTree` if the tree is empty.
    pub fn max(&self) -> Result<Handle> {
        self.root.map(|root| self.rightmost(root)).ok_or(Error::EmptyTree)
    }

    /// Returns the node with the minimum key in the subtree rooted at `handle`.
    pub fn subtree_min(&self, handle: Handle) -> Option<Handle> {
        self.get(handle).map(|_| self.leftmost(handle))
    }

    /// Returns the node with the maximum key in the subtree rooted at `handle`.
    pub fn subtree_max(&self, handle: Handle) -> Option<Handle> {
        self.get(handle).map(|_| self.rightmost(handle))
    }

    /// Returns the node holding the next larger key. Returns `None` for the maximum.
    ///
    /// # Examples
    /// ```
    /// use avl_index::avl_tree::AvlTree;
    ///
    /// let tree: AvlTree = vec![10, 20, 30].into_iter().collect();
    /// let handle = tree.find(20).unwrap();
    /// assert_eq!(tree.successor(handle).and_then(|h| tree.key(h)), Some(30));
    /// assert_eq!(tree.successor(tree.find(30).unwrap()), None);
    /// ```
    pub fn successor(&self, handle: Handle) -> Option<Handle> {
        let node = self.get(handle)?;
        if let Some(right) = node.right {
            return Some(self.leftmost(right));
        }
        let mut curr = handle;
        let mut parent = node.parent;
        while let Some(ancestor) = parent {
            if self.arena[ancestor].right != Some(curr) {
                break;
            }
            curr = ancestor;
            parent = self.arena[ancestor].parent;
        }
        parent
    }

    /// Returns the node holding the next smaller key. Returns `None` for the minimum.
    pub fn predecessor(&self, handle: Handle) -> Option<Handle> {
        let node = self.get(handle)?;
        if let Some(left) = node.left {
            return Some(self.rightmost(left));
        }
        let mut curr = handle;
        let mut parent = node.parent;
        while let Some(ancestor) = parent {
            if self.arena[ancestor].left != Some(curr) {
                break;
            }
            curr = ancestor;
            parent = self.arena[ancestor].parent;
        }
        parent
    }

    /// Inserts a key into the tree. Returns `false` and leaves the tree untouched if the key
    /// already exists.
    ///
    /// # Examples
    /// ```
    /// use avl_index::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, key: i32) -> bool {
        self.insert_with(key, &mut ())
    }

    /// Inserts a key into the tree, reporting every rotation to `observer`.
    pub fn insert_with<O>(&mut self, key: i32, observer: &mut O) -> bool
    where
        O: Observer,
    {
        let mut parent = None;
        let mut curr = self.root;
        while let Some(handle) = curr {
            parent = Some(handle);
            let node = &self.arena[handle];
            curr = match key.cmp(&node.key) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return false,
            };
        }

        let new_node = self.arena.allocate(Node::new(key, parent));
        let parent = match parent {
            Some(parent) => parent,
            None => {
                self.root = Some(new_node);
                return true;
            },
        };
        if key < self.arena[parent].key {
            self.arena[parent].left = Some(new_node);
        } else {
            self.arena[parent].right = Some(new_node);
        }

        // A balance factor of zero means the subtree kept its height, so nothing above changes.
        let mut curr = new_node;
        while let Some(parent) = self.arena[curr].parent {
            curr = self.rebalance(parent, observer);
            if self.arena[curr].is_root() || self.balance(curr) == 0 {
                break;
            }
        }
        true
    }

    /// Removes a key from the tree. Returns `true` if the key was present.
    ///
    /// # Examples
    /// ```
    /// use avl_index::avl_tree::AvlTree;
    ///
    /// let mut tree: AvlTree = vec![2, 1, 3].into_iter().collect();
    /// assert!(tree.delete(2));
    /// assert!(!tree.delete(2));
    /// assert_eq!(tree.iter().collect::<Vec<i32>>(), vec![1, 3]);
    /// ```
    pub fn delete(&mut self, key: i32) -> bool {
        self.delete_with(key, &mut ())
    }

    /// Removes a key from the tree, reporting the removal case and every rotation to `observer`.
    pub fn delete_with<O>(&mut self, key: i32, observer: &mut O) -> bool
    where
        O: Observer,
    {
        let target = match self.find(key) {
            Some(target) => target,
            None => return false,
        };
        let Node { parent, left, right, height, .. } = self.arena[target];

        let start = match (left, right) {
            (None, right) => {
                observer.notify(Event::Removed { key, case: Removal::NoLeftChild });
                self.transplant(target, right);
                parent
            },
            (Some(left), None) => {
                observer.notify(Event::Removed { key, case: Removal::LeftChildOnly });
                self.transplant(target, Some(left));
                parent
            },
            (Some(left), Some(right)) => {
                let successor = self.leftmost(right);
                let adjacent = self.arena[successor].parent == Some(target);
                observer.notify(Event::Removed { key, case: Removal::Successor { adjacent } });

                let start = if adjacent {
                    successor
                } else {
                    let successor_parent = self.arena[successor].parent;
                    let successor_right = self.arena[successor].right;
                    self.transplant(successor, successor_right);
                    self.arena[successor].right = Some(right);
                    self.arena[right].parent = Some(successor);
                    match successor_parent {
                        Some(successor_parent) => successor_parent,
                        None => unreachable!(),
                    }
                };

                self.transplant(target, Some(successor));
                self.arena[successor].left = Some(left);
                self.arena[left].parent = Some(successor);
                // The successor inherits the position, so it inherits the height the walk expects.
                self.arena[successor].height = height;
                Some(start)
            },
        };
        self.arena.free(target);

        let mut curr = match start {
            Some(start) => self.rebalance(start, observer),
            None => return true,
        };
        // A balance factor of one means the subtree kept its height, so nothing above changes.
        while self.balance(curr).abs() != 1 {
            let parent = match self.arena[curr].parent {
                Some(parent) => parent,
                None => break,
            };
            curr = self.rebalance(parent, observer);
        }
        true
    }

    pub(crate) fn link_height(&self, link: Option<Handle>) -> i32 {
        link.map_or(-1, |handle| self.arena[handle].height)
    }

    fn update(&mut self, handle: Handle) {
        let Node { left, right, .. } = self.arena[handle];
        self.arena[handle].height = cmp::max(self.link_height(left), self.link_height(right)) + 1;
    }

    fn balance(&self, handle: Handle) -> i32 {
        let node = &self.arena[handle];
        self.link_height(node.left) - self.link_height(node.right)
    }

    fn leftmost(&self, mut handle: Handle) -> Handle {
        while let Some(left) = self.arena[handle].left {
            handle = left;
        }
        handle
    }

    fn rightmost(&self, mut handle: Handle) -> Handle {
        while let Some(right) = self.arena[handle].right {
            handle = right;
        }
        handle
    }

    // Replaces the subtree rooted at `old` with the subtree rooted at `new` as seen from `old`'s
    // parent. `old` keeps its own links.
    fn transplant(&mut self, old: Handle, new: Option<Handle>) {
        let parent = self.arena[old].parent;
        match parent {
            None => self.root = new,
            Some(parent) => {
                if self.arena[parent].left == Some(old) {
                    self.arena[parent].left = new;
                } else {
                    self.arena[parent].right = new;
                }
            },
        }
        if let Some(new) = new {
            self.arena[new].parent = parent;
        }
    }

    fn rotate_left(&mut self, handle: Handle) -> Handle {
        let child = match self.arena[handle].right {
            Some(child) => child,
            None => unreachable!(),
        };
        self.transplant(handle, Some(child));

        let inner = self.arena[child].left;
        self.arena[handle].right = inner;
        if let Some(inner) = inner {
            self.arena[inner].parent = Some(handle);
        }
        self.arena[child].left = Some(handle);
        self.arena[handle].parent = Some(child);

        self.update(handle);
        self.update(child);
        child
    }

    fn rotate_right(&mut self, handle: Handle) -> Handle {
        let child = match self.arena[handle].left {
            Some(child) => child,
            None => unreachable!(),
        };
        self.transplant(handle, Some(child));

        let inner = self.arena[child].right;
        self.arena[handle].left = inner;
        if let Some(inner) = inner {
            self.arena[inner].parent = Some(handle);
        }
        self.arena[child].right = Some(handle);
        self.arena[handle].parent = Some(child);

        self.update(handle);
        self.update(child);
        child
    }

    // Refreshes the height of `handle`, rotates if it is out of balance, and returns the node
    // that now occupies its position.
    fn rebalance<O>(&mut self, handle: Handle, observer: &mut O) -> Handle
    where
        O: Observer,
    {
        self.update(handle);
        let pivot = self.arena[handle].key;

        match self.balance(handle) {
            2 => {
                let child = match self.arena[handle].left {
                    Some(child) => child,
                    None => unreachable!(),
                };
                if self.balance(child) >= 0 {
                    observer.notify(Event::RotateRight { pivot });
                } else {
                    observer.notify(Event::DoubleRotateRight { pivot });
                    self.rotate_left(child);
                }
                self.rotate_right(handle)
            },
            -2 => {
                let child = match self.arena[handle].right {
                    Some(child) => child,
                    None => unreachable!(),
                };
                if self.balance(child) <= 0 {
                    observer.notify(Event::RotateLeft { pivot });
                } else {
                    observer.notify(Event::DoubleRotateLeft { pivot });
                    self.rotate_right(child);
                }
                self.rotate_left(handle)
            },
            _ => handle,
        }
    }
}

impl Default for AvlTree {
    fn default() -> Self {
        Self::new()
    }
}

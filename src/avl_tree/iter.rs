use crate::arena::Handle;
use crate::avl_tree::tree::AvlTree;

impl AvlTree {
    /// Returns an iterator over the keys in `[min, max]` in ascending order. The iterator is lazy
    /// and only descends into subtrees that can hold keys inside the bounds. An inverted range
    /// yields nothing.
    ///
    /// # Examples
    /// ```
    /// use avl_index::avl_tree::AvlTree;
    ///
    /// let tree: AvlTree = vec![1, 3, 5, 7, 9].into_iter().collect();
    /// assert_eq!(tree.range(2, 7).collect::<Vec<i32>>(), vec![3, 5, 7]);
    /// assert_eq!(tree.range(7, 2).next(), None);
    /// ```
    pub fn range(&self, min: i32, max: i32) -> Range<'_> {
        let mut range = Range {
            tree: self,
            stack: Vec::new(),
            min,
            max,
        };
        range.push_left(self.root);
        range
    }

    /// Returns an iterator over all keys in ascending order.
    ///
    /// # Examples
    /// ```
    /// use avl_index::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(3);
    /// tree.insert(1);
    ///
    /// let mut iterator = tree.iter();
    /// assert_eq!(iterator.next(), Some(1));
    /// assert_eq!(iterator.next(), Some(3));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> Range<'_> {
        self.range(i32::min_value(), i32::max_value())
    }

    /// Returns a pre-order walk of the whole tree for rendering its shape.
    pub fn layout(&self) -> Layout<'_> {
        Layout::new(self, self.root)
    }

    /// Returns a pre-order walk of the subtree rooted at `handle`, which is reported as the root
    /// of the walk. The walk is empty for a stale handle.
    pub fn layout_from(&self, handle: Handle) -> Layout<'_> {
        Layout::new(self, self.get(handle).map(|_| handle))
    }
}

impl<'a> IntoIterator for &'a AvlTree {
    type Item = i32;
    type IntoIter = Range<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator over a bounded range of keys of an `AvlTree`.
///
/// This iterator traverses the tree in-order and yields keys in ascending order.
pub struct Range<'a> {
    tree: &'a AvlTree,
    stack: Vec<Handle>,
    min: i32,
    max: i32,
}

impl<'a> Range<'a> {
    fn push_left(&mut self, mut link: Option<Handle>) {
        while let Some(handle) = link {
            self.stack.push(handle);
            let node = &self.tree.arena[handle];
            link = if node.key > self.min { node.left } else { None };
        }
    }
}

impl<'a> Iterator for Range<'a> {
    type Item = i32;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(handle) = self.stack.pop() {
            let (key, right) = {
                let node = &self.tree.arena[handle];
                (node.key, node.right)
            };
            if key > self.max {
                self.stack.clear();
                return None;
            }
            if key < self.max {
                self.push_left(right);
            }
            if key >= self.min {
                return Some(key);
            }
        }
        None
    }
}

/// The position of a node relative to its parent within a layout walk.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Side {
    Root,
    Left,
    Right,
}

/// A node visited by a `Layout` walk.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Visit {
    pub key: i32,
    /// Number of edges between the root of the walk and this node.
    pub depth: usize,
    pub side: Side,
    /// Sides of every ancestor of the node, from the root of the walk down to the parent.
    pub ancestors: Vec<Side>,
}

/// A pre-order walk (node, left subtree, right subtree) over an `AvlTree`.
pub struct Layout<'a> {
    tree: &'a AvlTree,
    stack: Vec<(Handle, Side, Vec<Side>)>,
}

impl<'a> Layout<'a> {
    fn new(tree: &'a AvlTree, start: Option<Handle>) -> Self {
        Layout {
            tree,
            stack: start.into_iter().map(|handle| (handle, Side::Root, Vec::new())).collect(),
        }
    }
}

impl<'a> Iterator for Layout<'a> {
    type Item = Visit;

    fn next(&mut self) -> Option<Self::Item> {
        let (handle, side, ancestors) = self.stack.pop()?;
        let node = &self.tree.arena[handle];

        let mut lineage = ancestors.clone();
        lineage.push(side);
        if let Some(right) = node.right {
            self.stack.push((right, Side::Right, lineage.clone()));
        }
        if let Some(left) = node.left {
            self.stack.push((left, Side::Left, lineage));
        }

        Some(Visit {
            key: node.key,
            depth: ancestors.len(),
            side,
            ancestors,
        })
    }
}

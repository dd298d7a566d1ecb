use crate::arena::{Handle, TypedArena};
use crate::avl_tree::node::Node;
use crate::avl_tree::tree::AvlTree;
use std::fmt;
use std::iter::FromIterator;

impl AvlTree {
    /// Returns a new tree holding every key of `self` and `other`.
    ///
    /// Keys are inserted one at a time, visiting `self` and then `other` in pre-order.
    ///
    /// # Examples
    /// ```
    /// use avl_index::avl_tree::AvlTree;
    ///
    /// let t1: AvlTree = vec![1, 2, 3].into_iter().collect();
    /// let t2: AvlTree = vec![2, 3, 4].into_iter().collect();
    /// assert_eq!(t1.union(&t2).iter().collect::<Vec<i32>>(), vec![1, 2, 3, 4]);
    /// ```
    pub fn union(&self, other: &AvlTree) -> AvlTree {
        let mut dest = AvlTree::new();
        self.union_into(other, &mut dest);
        dest
    }

    /// Inserts every key of `self` and `other` into `dest`.
    pub fn union_into(&self, other: &AvlTree, dest: &mut AvlTree) {
        for key in self.pre_order().chain(other.pre_order()) {
            dest.insert(key);
        }
    }

    /// Returns a new tree holding the keys present in both `self` and `other`.
    ///
    /// # Examples
    /// ```
    /// use avl_index::avl_tree::AvlTree;
    ///
    /// let t1: AvlTree = vec![1, 2, 3].into_iter().collect();
    /// let t2: AvlTree = vec![2, 3, 4].into_iter().collect();
    /// assert_eq!(t1.intersect(&t2).iter().collect::<Vec<i32>>(), vec![2, 3]);
    /// ```
    pub fn intersect(&self, other: &AvlTree) -> AvlTree {
        let mut dest = AvlTree::new();
        self.intersect_into(other, &mut dest);
        dest
    }

    /// Inserts every key of `self` that is also present in `other` into `dest`.
    pub fn intersect_into(&self, other: &AvlTree, dest: &mut AvlTree) {
        for key in self.pre_order() {
            if other.find(key).is_some() {
                dest.insert(key);
            }
        }
    }

    fn pre_order(&self) -> impl Iterator<Item = i32> + '_ {
        let mut stack: Vec<Handle> = self.root.into_iter().collect();
        std::iter::from_fn(move || {
            let node = &self.arena[stack.pop()?];
            stack.extend(node.right);
            stack.extend(node.left);
            Some(node.key)
        })
    }

    fn copy_subtree(
        &self,
        src: Handle,
        parent: Option<Handle>,
        dest: &mut TypedArena<Node>,
    ) -> Handle {
        let node = &self.arena[src];
        let copy = dest.allocate(Node {
            key: node.key,
            height: node.height,
            parent,
            left: None,
            right: None,
        });
        if let Some(left) = node.left {
            let left_copy = self.copy_subtree(left, Some(copy), dest);
            dest[copy].left = Some(left_copy);
        }
        if let Some(right) = node.right {
            let right_copy = self.copy_subtree(right, Some(copy), dest);
            dest[copy].right = Some(right_copy);
        }
        copy
    }
}

/// Copies every node into a fresh, compact arena. The copy shares nothing with the original.
impl Clone for AvlTree {
    fn clone(&self) -> Self {
        let mut arena = TypedArena::with_capacity(self.len());
        let root = self.root.map(|root| self.copy_subtree(root, None, &mut arena));
        AvlTree { arena, root }
    }
}

impl FromIterator<i32> for AvlTree {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = i32>,
    {
        let mut tree = AvlTree::new();
        tree.extend(iter);
        tree
    }
}

impl Extend<i32> for AvlTree {
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = i32>,
    {
        for key in iter {
            self.insert(key);
        }
    }
}

impl PartialEq for AvlTree {
    fn eq(&self, other: &AvlTree) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl Eq for AvlTree {}

impl fmt::Debug for AvlTree {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::avl_tree::AvlTree;

    fn keys(tree: &AvlTree) -> Vec<i32> {
        tree.iter().collect()
    }

    #[test]
    fn test_union() {
        let t1: AvlTree = vec![1, 2, 3].into_iter().collect();
        let t2: AvlTree = vec![2, 3, 4].into_iter().collect();
        let union = t1.union(&t2);
        assert_eq!(keys(&union), vec![1, 2, 3, 4]);
        assert_eq!(union.len(), 4);
        assert_eq!(keys(&t1), vec![1, 2, 3]);
        assert_eq!(keys(&t2), vec![2, 3, 4]);
    }

    #[test]
    fn test_union_empty() {
        let t1: AvlTree = vec![1, 2].into_iter().collect();
        let empty = AvlTree::new();
        assert_eq!(t1.union(&empty), t1);
        assert_eq!(empty.union(&t1), t1);
        assert!(empty.union(&empty).is_empty());
    }

    #[test]
    fn test_union_into_existing() {
        let t1: AvlTree = vec![1].into_iter().collect();
        let t2: AvlTree = vec![2].into_iter().collect();
        let mut dest: AvlTree = vec![0, 1].into_iter().collect();
        t1.union_into(&t2, &mut dest);
        assert_eq!(keys(&dest), vec![0, 1, 2]);
    }

    #[test]
    fn test_intersect() {
        let t1: AvlTree = vec![1, 2, 3].into_iter().collect();
        let t2: AvlTree = vec![2, 3, 4].into_iter().collect();
        assert_eq!(keys(&t1.intersect(&t2)), vec![2, 3]);
        assert_eq!(keys(&t2.intersect(&t1)), vec![2, 3]);
    }

    #[test]
    fn test_intersect_disjoint() {
        let t1: AvlTree = vec![1, 3, 5].into_iter().collect();
        let t2: AvlTree = vec![2, 4, 6].into_iter().collect();
        assert!(t1.intersect(&t2).is_empty());
    }

    #[test]
    fn test_clone_is_deep() {
        let mut original: AvlTree = (0..32).collect();
        original.delete(7);
        original.delete(19);
        let copy = original.clone();
        assert_eq!(copy, original);
        assert_eq!(copy.height(), original.height());

        original.clear();
        assert!(original.is_empty());
        assert_eq!(copy.len(), 30);
        assert!(copy.contains(31));
        assert!(!copy.contains(7));
    }

    #[test]
    fn test_clone_preserves_shape() {
        let original: AvlTree = vec![33, 5, 10, 21, 20, 23].into_iter().collect();
        let copy = original.clone();
        assert_eq!(
            copy.layout().collect::<Vec<_>>(),
            original.layout().collect::<Vec<_>>(),
        );
        let root = copy.root().unwrap();
        assert!(copy.is_root(root));
        let left = copy.get(root).unwrap().left().unwrap();
        assert_eq!(copy.get(left).unwrap().parent(), Some(root));
    }

    #[test]
    fn test_debug() {
        let tree: AvlTree = vec![2, 1].into_iter().collect();
        assert_eq!(format!("{:?}", tree), "{1, 2}");
    }
}

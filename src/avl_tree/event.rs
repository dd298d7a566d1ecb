use serde_derive::{Deserialize, Serialize};
use std::fmt;

/// The shape of a removal, selected by the children of the removed node.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Removal {
    /// The node had no left child and was replaced by its right subtree.
    NoLeftChild,
    /// The node had only a left child and was replaced by it.
    LeftChildOnly,
    /// The node had two children and was replaced by its in-order successor. `adjacent` is
    /// `true` when the successor was the node's own right child.
    Successor { adjacent: bool },
}

/// A structural change made while inserting or deleting a key.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Event {
    /// Left-heavy node whose left child is not right-heavy.
    RotateRight { pivot: i32 },
    /// Left-heavy node whose left child is right-heavy.
    DoubleRotateRight { pivot: i32 },
    /// Right-heavy node whose right child is not left-heavy.
    RotateLeft { pivot: i32 },
    /// Right-heavy node whose right child is left-heavy.
    DoubleRotateLeft { pivot: i32 },
    Removed { key: i32, case: Removal },
}

/// A sink for the structural events of `AvlTree::insert_with` and `AvlTree::delete_with`.
///
/// # Examples
/// ```
/// use avl_index::avl_tree::{AvlTree, Event};
///
/// let mut tree = AvlTree::new();
/// let mut events = Vec::new();
/// tree.insert_with(1, &mut events);
/// tree.insert_with(2, &mut events);
/// tree.insert_with(3, &mut events);
///
/// assert_eq!(events, vec![Event::RotateLeft { pivot: 1 }]);
/// ```
pub trait Observer {
    fn notify(&mut self, event: Event);
}

/// Discards every event.
impl Observer for () {
    fn notify(&mut self, _: Event) {}
}

/// Records every event in order.
impl Observer for Vec<Event> {
    fn notify(&mut self, event: Event) {
        self.push(event);
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Event::RotateRight { pivot } => write!(f, "right rotation at {}", pivot),
            Event::DoubleRotateRight { pivot } => write!(f, "double right rotation at {}", pivot),
            Event::RotateLeft { pivot } => write!(f, "left rotation at {}", pivot),
            Event::DoubleRotateLeft { pivot } => write!(f, "double left rotation at {}", pivot),
            Event::Removed { key, case } => write!(f, "removed {} ({:?})", key, case),
        }
    }
}

/// Forwards every event to the `log` facade at debug level.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogObserver;

impl Observer for LogObserver {
    fn notify(&mut self, event: Event) {
        log::debug!("{}", event);
    }
}

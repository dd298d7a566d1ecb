//! Self-balancing binary search tree where the heights of the two child subtrees of any node
//! differ by at most one.

mod event;
mod iter;
mod node;
mod ops;
mod tree;

pub use self::event::{Event, LogObserver, Observer, Removal};
pub use self::iter::{Layout, Range, Side, Visit};
pub use self::node::Node;
pub use self::tree::AvlTree;

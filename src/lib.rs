//! An in-memory ordered index of unique `i32` keys.
//!
//! The index is an avl tree whose nodes live in a typed arena and link to their parents, so
//! insertion and deletion rebalance by walking upward from the point of change. Union,
//! intersection, and range queries are built on top of the per-key operations, and a small loader
//! bulk-reads keys from text input.
//!
//! # Examples
//! ```
//! use avl_index::avl_tree::AvlTree;
//!
//! let mut tree = AvlTree::new();
//! for key in &[33, 5, 10, 21, 20] {
//!     tree.insert(*key);
//! }
//!
//! let handle = tree.find(20).unwrap();
//! assert_eq!(tree.successor(handle).and_then(|h| tree.key(h)), Some(21));
//! assert_eq!(tree.range(6, 25).collect::<Vec<i32>>(), vec![10, 20, 21]);
//! ```

pub mod arena;
pub mod avl_tree;
mod config;
mod error;
pub mod loader;

pub use self::config::Config;
pub use self::error::{Error, Result};

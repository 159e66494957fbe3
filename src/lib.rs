//! # Ordered skip list
//!
//! A sorted set of unique `i64` keys with expected O(log n) insert,
//! delete and lookup, and no rebalancing.
//!
//! ## Core idea
//! Level 0 is an ordinary sorted linked list holding every key. Each node
//! also joins a random number of "express lanes" above it: a node on level
//! `i` reaches level `i + 1` with probability `p`. A search starts on the
//! highest lane, runs forward while the next key is smaller than the
//! target, then drops a lane. Random heights keep the lanes thin enough
//! that the expected path is logarithmic.
//!
//! ```
//! use ordered_skiplist::SkipList;
//!
//! let mut list = SkipList::with_seed(4, 0.5, 7)?;
//! for key in [3, 7, 19, 17, 26, 21] {
//!     list.insert(key)?;
//! }
//! list.delete(19);
//! assert!(!list.search(19));
//! assert_eq!(list.iter().collect::<Vec<_>>(), vec![3, 7, 17, 21, 26]);
//! # Ok::<(), ordered_skiplist::Error>(())
//! ```

pub mod error;
pub mod iterator;
pub mod options;
pub mod skiplist;

// Public re-exports for the top-level API
pub use error::{Error, Result};
pub use iterator::KeyCursor;
pub use options::Options;
pub use skiplist::SkipList;
pub use skiplist::iter::{LevelIter, Levels, SkipListIterator};

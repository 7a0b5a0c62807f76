//! Carousel - Ring
//!
//! Circular doubly-linked list with a navigation cursor, the container behind
//! Carousel playlists.
//!
//! This crate provides:
//! - Append, remove (by value, predicate, index or position), indexed access
//! - Wraparound cursor navigation (advance, retreat, current)
//! - Borrowing and owning iterators, plus a detached fail-fast walker
//! - Generation-checked [`Position`] handles instead of exposed nodes
//!
//! # Architecture
//!
//! Nodes are stored in a slot arena owned by the [`Ring`]; `next`/`prev`
//! links are slot indices. No node is ever handed out, so callers cannot
//! relink the ring or keep a node alive after removal.
//!
//! The ring is single-owner and synchronous. Hosts sharing a ring between
//! threads wrap it in their own lock.
//!
//! # Example: Building and reading
//!
//! ```rust
//! use carousel_ring::{Ring, RingError};
//!
//! let mut ring = Ring::new();
//! ring.append("A");
//! ring.append("B");
//! ring.append("C");
//!
//! assert_eq!(ring.iter().copied().collect::<Vec<_>>(), ["A", "B", "C"]);
//! assert_eq!(ring.get(2), Ok(&"C"));
//! assert_eq!(ring.get(3), Err(RingError::IndexOutOfRange { index: 3, len: 3 }));
//! ```
//!
//! # Example: Cursor navigation
//!
//! ```rust
//! use carousel_ring::Ring;
//!
//! let mut ring: Ring<&str> = ["A", "B", "C"].into_iter().collect();
//! ring.set_cursor_to_item(&"B");
//!
//! // Removing the selected item moves the cursor to its successor
//! ring.remove(&"B").unwrap();
//! assert_eq!(ring.current(), Some(&"C"));
//!
//! // Navigation wraps around
//! assert_eq!(ring.advance(), Some(&"A"));
//! assert_eq!(ring.retreat(), Some(&"C"));
//! ```

mod cursor;
mod error;
mod iter;
mod node;
mod ring;

// Public exports
pub use error::{Result, RingError};
pub use iter::{IntoIter, Iter, Walker};
pub use ring::{Position, Ring};

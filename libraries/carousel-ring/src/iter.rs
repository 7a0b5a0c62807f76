//! Traversal
//!
//! Two ways to walk a ring:
//! - [`Iter`] borrows the ring, so it cannot be mutated while the iterator
//!   lives. It yields exactly the `len` items present when it was created.
//! - [`Walker`] holds no borrow. It records the ring's revision and fails with
//!   [`RingError::ConcurrentModification`] on the first step after any
//!   structural change. Cursor moves are not structural.

use crate::error::{Result, RingError};
use crate::node::Arena;
use crate::ring::Ring;
use std::iter::FusedIterator;

/// Borrowing iterator over a ring, head first
pub struct Iter<'a, T> {
    arena: &'a Arena<T>,
    front: Option<usize>,
    back: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(ring: &'a Ring<T>) -> Self {
        Self {
            arena: &ring.arena,
            front: ring.head,
            back: ring.head.map(|head| ring.arena[head].prev),
            remaining: ring.len(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let arena = self.arena;
        let node = &arena[self.front?];
        self.front = Some(node.next);
        self.remaining -= 1;
        Some(&node.item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let arena = self.arena;
        let node = &arena[self.back?];
        self.back = Some(node.prev);
        self.remaining -= 1;
        Some(&node.item)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            arena: self.arena,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

/// Owning iterator, draining the ring from the head
pub struct IntoIter<T> {
    ring: Ring<T>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(ring: Ring<T>) -> Self {
        Self { ring }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let head = self.ring.head?;
        Some(self.ring.unlink(head))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.ring.len();
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        let head = self.ring.head?;
        let tail = self.ring.arena[head].prev;
        Some(self.ring.unlink(tail))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

/// Detached, fail-fast traversal state
///
/// ```
/// use carousel_ring::{Ring, RingError};
///
/// let mut ring: Ring<i32> = (1..=3).collect();
/// let mut walker = ring.walker();
///
/// assert_eq!(walker.next(&ring), Ok(Some(&1)));
/// ring.append(4);
/// assert!(matches!(
///     walker.next(&ring),
///     Err(RingError::ConcurrentModification { .. })
/// ));
/// ```
#[derive(Debug, Clone)]
pub struct Walker {
    ring: u64,
    revision: u64,
    next: Option<usize>,
    remaining: usize,
}

impl Walker {
    pub(crate) fn new<T>(ring: &Ring<T>) -> Self {
        Self {
            ring: ring.id,
            revision: ring.revision,
            next: ring.head,
            remaining: ring.len(),
        }
    }

    /// Step to the next item
    ///
    /// Returns `Ok(None)` once every item has been visited.
    pub fn next<'r, T>(&mut self, ring: &'r Ring<T>) -> Result<Option<&'r T>> {
        if ring.id != self.ring {
            return Err(RingError::WrongRing);
        }
        if ring.revision != self.revision {
            return Err(RingError::ConcurrentModification {
                expected: self.revision,
                found: ring.revision,
            });
        }
        if self.remaining == 0 {
            return Ok(None);
        }
        let Some(slot) = self.next else {
            return Ok(None);
        };

        let node = &ring.arena[slot];
        self.next = Some(node.next);
        self.remaining -= 1;
        Ok(Some(&node.item))
    }

    /// Items not yet visited
    pub fn remaining(&self) -> usize {
        self.remaining
    }
}

#[cfg(test)]
mod tests {
    use crate::{Ring, RingError};

    #[test]
    fn iter_yields_each_item_once() {
        let ring: Ring<i32> = (1..=4).collect();
        let items: Vec<_> = ring.iter().copied().collect();

        assert_eq!(items, vec![1, 2, 3, 4]);
        assert_eq!(ring.iter().len(), 4);
    }

    #[test]
    fn iter_is_restartable() {
        let ring: Ring<i32> = (1..=3).collect();

        let first: Vec<_> = ring.iter().collect();
        let second: Vec<_> = ring.iter().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn iter_is_fused() {
        let ring: Ring<i32> = (1..=2).collect();
        let mut iter = ring.iter();

        iter.next();
        iter.next();
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn iter_from_both_ends_meets_in_middle() {
        let ring: Ring<i32> = (1..=5).collect();
        let mut iter = ring.iter();

        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next_back(), Some(&5));
        assert_eq!(iter.next_back(), Some(&4));
        assert_eq!(iter.next(), Some(&2));
        assert_eq!(iter.next(), Some(&3));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }

    #[test]
    fn iter_over_empty_ring() {
        let ring: Ring<i32> = Ring::new();
        assert_eq!(ring.iter().next(), None);
        assert_eq!(ring.iter().next_back(), None);
    }

    #[test]
    fn into_iter_drains_in_order() {
        let ring: Ring<String> = ["a", "b", "c"].iter().map(|s| s.to_string()).collect();
        let items: Vec<String> = ring.into_iter().collect();

        assert_eq!(items, vec!["a", "b", "c"]);
    }

    #[test]
    fn into_iter_reversed() {
        let ring: Ring<i32> = (1..=3).collect();
        let items: Vec<i32> = ring.into_iter().rev().collect();

        assert_eq!(items, vec![3, 2, 1]);
    }

    #[test]
    fn walker_visits_every_item() {
        let ring: Ring<i32> = (1..=3).collect();
        let mut walker = ring.walker();
        let mut seen = Vec::new();

        while let Some(item) = walker.next(&ring).unwrap() {
            seen.push(*item);
        }
        assert_eq!(seen, vec![1, 2, 3]);
        assert_eq!(walker.remaining(), 0);
        assert_eq!(walker.next(&ring), Ok(None));
    }

    #[test]
    fn walker_fails_after_removal() {
        let mut ring: Ring<i32> = (1..=3).collect();
        let mut walker = ring.walker();

        walker.next(&ring).unwrap();
        ring.remove(&2).unwrap();

        assert!(matches!(
            walker.next(&ring),
            Err(RingError::ConcurrentModification { .. })
        ));
    }

    #[test]
    fn walker_survives_cursor_moves() {
        let mut ring: Ring<i32> = (1..=3).collect();
        let mut walker = ring.walker();

        ring.set_cursor_to_item(&2);
        ring.advance();

        assert_eq!(walker.next(&ring), Ok(Some(&1)));
    }

    #[test]
    fn walker_rejects_other_ring() {
        let ring: Ring<i32> = (1..=3).collect();
        let other = ring.clone();
        let mut walker = ring.walker();

        assert_eq!(walker.next(&other), Err(RingError::WrongRing));
    }
}

//! Circular doubly-linked ring
//!
//! ```text
//!        head                          tail
//!   ┌──► ┌───┐ ──► ┌───┐ ──► ┌───┐ ──► ┌───┐ ───┐
//!   │    │ A │     │ B │     │ C │     │ D │    │
//!   │ ┌─ └───┘ ◄── └───┘ ◄── └───┘ ◄── └───┘ ◄┐ │
//!   │ └───────────────────────────────────────┘ │
//!   └───────────────────────────────────────────┘
//! ```
//!
//! The tail is never stored: it is always `head.prev`.

use crate::error::{Result, RingError};
use crate::iter::{IntoIter, Iter, Walker};
use crate::node::Arena;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::trace;

static NEXT_RING_ID: AtomicU64 = AtomicU64::new(1);

fn next_ring_id() -> u64 {
    NEXT_RING_ID.fetch_add(1, Ordering::Relaxed)
}

/// Opaque handle to an item held by a [`Ring`]
///
/// A position only resolves against the ring that issued it, and only while
/// the item is still in that ring. Removing the item, or clearing the ring,
/// makes the position stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    ring: u64,
    slot: usize,
    generation: u32,
}

/// Circular doubly-linked list with a movable cursor
///
/// Items are kept in insertion order; traversal wraps from the last item back
/// to the first. The cursor marks one "current" item and survives removals by
/// moving to the removed item's successor.
pub struct Ring<T> {
    pub(crate) arena: Arena<T>,

    /// First node, `None` iff the ring is empty
    pub(crate) head: Option<usize>,

    /// Currently selected node
    pub(crate) cursor: Option<usize>,

    /// Bumped on every structural change
    pub(crate) revision: u64,

    pub(crate) id: u64,
}

impl<T> Ring<T> {
    /// Create an empty ring
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            head: None,
            cursor: None,
            revision: 0,
            id: next_ring_id(),
        }
    }

    /// Create an empty ring with room for `capacity` items
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            arena: Arena::with_capacity(capacity),
            ..Self::new()
        }
    }

    /// Number of items
    pub fn len(&self) -> usize {
        self.arena.live()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Structural revision, bumped by every insertion, removal and reordering
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Append `item` as the new tail
    ///
    /// The first item appended to an empty ring becomes the head and links to
    /// itself. The cursor is not touched.
    pub fn append(&mut self, item: T) -> Position {
        let slot = self.arena.insert(item);
        match self.head {
            None => self.head = Some(slot),
            Some(head) => self.link_before(slot, head),
        }
        self.bump();
        self.position(slot)
    }

    /// Insert `item` as the new head
    pub fn push_front(&mut self, item: T) -> Position {
        let position = self.append(item);
        self.head = Some(position.slot);
        position
    }

    /// Remove the first item equal to `item`
    ///
    /// If the cursor was on the removed item it moves to the item's successor,
    /// or is cleared when the ring becomes empty.
    pub fn remove(&mut self, item: &T) -> Result<T>
    where
        T: PartialEq,
    {
        self.remove_by(|candidate| candidate == item)
    }

    /// Remove the first item matching `pred`
    pub fn remove_by<F>(&mut self, pred: F) -> Result<T>
    where
        F: FnMut(&T) -> bool,
    {
        let slot = self.find_slot(pred).ok_or(RingError::NotFound)?;
        Ok(self.unlink(slot))
    }

    /// Remove the item at `index`
    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        let slot = self.slot_at(index)?;
        Ok(self.unlink(slot))
    }

    /// Remove the item at `position`
    pub fn remove_position(&mut self, position: Position) -> Result<T> {
        let slot = self.resolve(position)?;
        Ok(self.unlink(slot))
    }

    /// Item at `index`, counting from the head
    pub fn get(&self, index: usize) -> Result<&T> {
        let slot = self.slot_at(index)?;
        Ok(&self.arena[slot].item)
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let slot = self.slot_at(index)?;
        Ok(&mut self.arena[slot].item)
    }

    /// Item at `position`
    pub fn get_position(&self, position: Position) -> Result<&T> {
        let slot = self.resolve(position)?;
        Ok(&self.arena[slot].item)
    }

    pub fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.contains_by(|candidate| candidate == item)
    }

    pub fn contains_by<F>(&self, pred: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        self.find_slot(pred).is_some()
    }

    /// Position of the first item equal to `item`
    pub fn position_of(&self, item: &T) -> Option<Position>
    where
        T: PartialEq,
    {
        self.find_by(|candidate| candidate == item)
    }

    /// Position of the first item matching `pred`
    pub fn find_by<F>(&self, pred: F) -> Option<Position>
    where
        F: FnMut(&T) -> bool,
    {
        self.find_slot(pred).map(|slot| self.position(slot))
    }

    /// Index of the first item equal to `item`
    pub fn index_of(&self, item: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|candidate| candidate == item)
    }

    /// First item (the head)
    pub fn front(&self) -> Option<&T> {
        self.head.map(|head| &self.arena[head].item)
    }

    /// Last item (the node before the head)
    pub fn back(&self) -> Option<&T> {
        self.head.map(|head| &self.arena[self.arena[head].prev].item)
    }

    /// Move the head `steps` items forward; the old head ends up at the back
    pub fn rotate_forward(&mut self, steps: usize) {
        let Some(mut head) = self.head else {
            return;
        };
        for _ in 0..steps % self.len() {
            head = self.arena[head].next;
        }
        self.head = Some(head);
        self.bump();
    }

    /// Move the head `steps` items backward
    pub fn rotate_backward(&mut self, steps: usize) {
        let Some(mut head) = self.head else {
            return;
        };
        for _ in 0..steps % self.len() {
            head = self.arena[head].prev;
        }
        self.head = Some(head);
        self.bump();
    }

    /// Drop every item and unset the cursor
    pub fn clear(&mut self) {
        if self.is_empty() {
            return;
        }
        trace!(len = self.len(), "clearing ring");
        self.arena.clear();
        self.head = None;
        self.cursor = None;
        self.bump();
    }

    /// Keep only the items matching `keep`, preserving their order
    ///
    /// A cursor on a dropped item moves to the next surviving item.
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&T) -> bool,
    {
        let doomed: Vec<usize> = self
            .slots()
            .filter(|&slot| !keep(&self.arena[slot].item))
            .collect();

        for slot in doomed {
            self.unlink(slot);
        }
    }

    /// Clone every item into a `Vec`, in traversal order
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Borrowing iterator from the head, yielding each item once
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Detached traversal state that fails if the ring changes underneath it
    pub fn walker(&self) -> Walker {
        Walker::new(self)
    }

    /// Re-check the linkage invariants
    ///
    /// Walks the ring in both directions from the head, checking that every
    /// neighbour pair agrees, that the walk closes after exactly `len` steps
    /// and that the cursor (if any) sits on a reachable node.
    pub fn validate(&self) -> Result<()> {
        let len = self.len();
        let Some(head) = self.head else {
            if len != 0 {
                return Err(RingError::Corrupted(format!(
                    "no head but {len} live nodes"
                )));
            }
            if self.cursor.is_some() {
                return Err(RingError::Corrupted("cursor set on empty ring".into()));
            }
            return Ok(());
        };

        let mut seen = vec![false; self.arena.capacity()];
        let mut slot = head;
        for step in 0..len {
            let Some(node) = self.arena.get(slot) else {
                return Err(RingError::Corrupted(format!(
                    "step {step} reached vacant slot {slot}"
                )));
            };
            if std::mem::replace(&mut seen[slot], true) {
                return Err(RingError::Corrupted(format!("slot {slot} visited twice")));
            }
            let next_prev = self.arena.get(node.next).map(|next| next.prev);
            let prev_next = self.arena.get(node.prev).map(|prev| prev.next);
            if next_prev != Some(slot) || prev_next != Some(slot) {
                return Err(RingError::Corrupted(format!(
                    "broken links around slot {slot}"
                )));
            }
            slot = node.next;
        }
        if slot != head {
            return Err(RingError::Corrupted(format!(
                "forward walk of {len} steps ended at slot {slot}, not head {head}"
            )));
        }

        let mut slot = head;
        for _ in 0..len {
            slot = self.arena[slot].prev;
        }
        if slot != head {
            return Err(RingError::Corrupted("backward walk does not close".into()));
        }

        if let Some(cursor) = self.cursor {
            if !seen.get(cursor).copied().unwrap_or(false) {
                return Err(RingError::Corrupted(format!(
                    "cursor on unreachable slot {cursor}"
                )));
            }
        }

        Ok(())
    }

    pub(crate) fn position(&self, slot: usize) -> Position {
        Position {
            ring: self.id,
            slot,
            generation: self.arena.generation(slot).unwrap_or_default(),
        }
    }

    /// Slot behind `position`, if it is still live in this ring
    pub(crate) fn resolve(&self, position: Position) -> Result<usize> {
        let live = self.arena.generation(position.slot) == Some(position.generation);
        if position.ring != self.id || !live {
            return Err(RingError::StalePosition);
        }
        Ok(position.slot)
    }

    /// Slot indices from the head, `len` of them
    pub(crate) fn slots(&self) -> impl Iterator<Item = usize> + '_ {
        let mut next = self.head;
        (0..self.len()).filter_map(move |_| {
            let slot = next?;
            next = Some(self.arena[slot].next);
            Some(slot)
        })
    }

    /// Shared scan behind remove, contains and cursor selection
    pub(crate) fn find_slot<F>(&self, mut pred: F) -> Option<usize>
    where
        F: FnMut(&T) -> bool,
    {
        self.slots().find(|&slot| pred(&self.arena[slot].item))
    }

    pub(crate) fn slot_at(&self, index: usize) -> Result<usize> {
        let len = self.len();
        if index >= len {
            return Err(RingError::IndexOutOfRange { index, len });
        }
        self.slots()
            .nth(index)
            .ok_or(RingError::IndexOutOfRange { index, len })
    }

    /// Link the self-looped node `slot` in front of `at`
    fn link_before(&mut self, slot: usize, at: usize) {
        let prev = self.arena[at].prev;

        let node = &mut self.arena[slot];
        node.prev = prev;
        node.next = at;

        self.arena[prev].next = slot;
        self.arena[at].prev = slot;
    }

    /// Detach and free `slot`, repairing head and cursor
    pub(crate) fn unlink(&mut self, slot: usize) -> T {
        let (prev, next) = {
            let node = &self.arena[slot];
            (node.prev, node.next)
        };

        if next == slot {
            self.head = None;
            self.cursor = None;
        } else {
            self.arena[prev].next = next;
            self.arena[next].prev = prev;

            if self.head == Some(slot) {
                self.head = Some(next);
            }
            if self.cursor == Some(slot) {
                trace!(from = slot, to = next, "cursor moved past removed node");
                self.cursor = Some(next);
            }
        }

        self.bump();
        self.arena.remove(slot)
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

impl<T> Default for Ring<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Ring<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Cloning compacts the arena; the cursor keeps its index.
impl<T: Clone> Clone for Ring<T> {
    fn clone(&self) -> Self {
        let mut ring: Self = self.iter().cloned().collect();
        if let Some(index) = self.cursor_index() {
            ring.cursor = ring.slot_at(index).ok();
        }
        ring
    }
}

impl<T: PartialEq> PartialEq for Ring<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Ring<T> {}

impl<T> FromIterator<T> for Ring<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut ring = Ring::new();
        ring.extend(iter);
        ring
    }
}

impl<T> Extend<T> for Ring<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.append(item);
        }
    }
}

impl<'a, T> IntoIterator for &'a Ring<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T> IntoIterator for Ring<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self)
    }
}

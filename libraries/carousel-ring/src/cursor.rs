//! Cursor navigation
//!
//! The cursor is either unset or sits on one item of the ring:
//!
//! ```text
//!            set_cursor_* (match)
//!   unset ───────────────────────► set(node) ──┐ advance / retreat
//!     ▲                               │   ▲    │
//!     │   remove(last item) / clear   │   └────┘
//!     └───────────────────────────────┘
//! ```
//!
//! Appending, reading and searching never move the cursor. Removing the item
//! under the cursor moves it to that item's successor.

use crate::error::Result;
use crate::ring::{Position, Ring};

impl<T> Ring<T> {
    /// Put the cursor on the first item equal to `item`
    ///
    /// Returns `false` and leaves the cursor where it was when nothing matches.
    pub fn set_cursor_to_item(&mut self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.set_cursor_by(|candidate| candidate == item)
    }

    /// Put the cursor on the first item matching `pred`
    pub fn set_cursor_by<F>(&mut self, pred: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        match self.find_slot(pred) {
            Some(slot) => {
                self.cursor = Some(slot);
                true
            }
            None => false,
        }
    }

    /// Put the cursor on the item at `position`
    pub fn set_cursor(&mut self, position: Position) -> Result<()> {
        self.cursor = Some(self.resolve(position)?);
        Ok(())
    }

    /// Put the cursor on the item at `index`
    pub fn set_cursor_to_index(&mut self, index: usize) -> Result<()> {
        self.cursor = Some(self.slot_at(index)?);
        Ok(())
    }

    pub fn clear_cursor(&mut self) {
        self.cursor = None;
    }

    /// Item under the cursor
    pub fn current(&self) -> Option<&T> {
        self.cursor.map(|slot| &self.arena[slot].item)
    }

    pub fn current_mut(&mut self) -> Option<&mut T> {
        let slot = self.cursor?;
        Some(&mut self.arena[slot].item)
    }

    /// Move the cursor to the next item (wrapping) and return it
    ///
    /// Does nothing and returns `None` while the cursor is unset.
    pub fn advance(&mut self) -> Option<&T> {
        let slot = self.arena[self.cursor?].next;
        self.cursor = Some(slot);
        Some(&self.arena[slot].item)
    }

    /// Move the cursor to the previous item (wrapping) and return it
    pub fn retreat(&mut self) -> Option<&T> {
        let slot = self.arena[self.cursor?].prev;
        self.cursor = Some(slot);
        Some(&self.arena[slot].item)
    }

    /// Item `advance` would return, without moving
    pub fn peek_next(&self) -> Option<&T> {
        let slot = self.arena[self.cursor?].next;
        Some(&self.arena[slot].item)
    }

    /// Item `retreat` would return, without moving
    pub fn peek_previous(&self) -> Option<&T> {
        let slot = self.arena[self.cursor?].prev;
        Some(&self.arena[slot].item)
    }

    pub fn cursor_position(&self) -> Option<Position> {
        self.cursor.map(|slot| self.position(slot))
    }

    /// Index of the cursor counted from the head
    pub fn cursor_index(&self) -> Option<usize> {
        let cursor = self.cursor?;
        self.slots().position(|slot| slot == cursor)
    }
}

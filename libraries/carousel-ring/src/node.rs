//! Node storage
//!
//! Nodes live in a slot arena owned by the ring. Links between nodes are slot
//! indices, so the arena is the single owner of every item and the cyclic
//! `next`/`prev` graph carries no ownership.
//!
//! ```text
//! slots:  [0]        [1]        [2]        [3]
//!         ┌──────┐   ┌──────┐   ┌──────┐   ┌──────┐
//!         │ A    │   │ free │   │ B    │   │ C    │
//!         │ n: 2 │   │ g: 1 │   │ n: 3 │   │ n: 0 │
//!         │ p: 3 │   │      │   │ p: 0 │   │ p: 2 │
//!         └──────┘   └──────┘   └──────┘   └──────┘
//! ```
//!
//! Every slot carries a generation that is bumped when its node is freed, so a
//! handle taken before the removal no longer matches the slot.

use std::ops::{Index, IndexMut};

/// One element of the ring: an item plus its neighbour links
#[derive(Debug, Clone)]
pub(crate) struct Node<T> {
    pub(crate) item: T,
    pub(crate) next: usize,
    pub(crate) prev: usize,
}

#[derive(Debug, Clone)]
struct Slot<T> {
    generation: u32,
    node: Option<Node<T>>,
}

/// Slot arena holding the nodes of one ring
#[derive(Debug, Clone)]
pub(crate) struct Arena<T> {
    slots: Vec<Slot<T>>,

    /// Vacant slot indices, reused before the arena grows
    free: Vec<usize>,

    /// Number of occupied slots
    live: usize,
}

impl<T> Arena<T> {
    pub(crate) fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            live: 0,
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            live: 0,
        }
    }

    /// Store `item` in a fresh node linked to itself
    pub(crate) fn insert(&mut self, item: T) -> usize {
        self.live += 1;

        if let Some(index) = self.free.pop() {
            self.slots[index].node = Some(Node {
                item,
                next: index,
                prev: index,
            });
            return index;
        }

        let index = self.slots.len();
        self.slots.push(Slot {
            generation: 0,
            node: Some(Node {
                item,
                next: index,
                prev: index,
            }),
        });
        index
    }

    /// Free the node at `index` and hand back its item
    ///
    /// The caller must have unlinked the node from its neighbours already.
    pub(crate) fn remove(&mut self, index: usize) -> T {
        let slot = &mut self.slots[index];
        let Some(node) = slot.node.take() else {
            panic!("arena slot {index} is vacant");
        };

        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(index);
        self.live -= 1;
        node.item
    }

    /// Free every node, keeping the slots (and their bumped generations)
    pub(crate) fn clear(&mut self) {
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if slot.node.take().is_some() {
                slot.generation = slot.generation.wrapping_add(1);
                self.free.push(index);
            }
        }
        self.live = 0;
    }

    /// Node at `index`, if the slot is occupied
    pub(crate) fn get(&self, index: usize) -> Option<&Node<T>> {
        self.slots.get(index).and_then(|slot| slot.node.as_ref())
    }

    /// Generation of an occupied slot
    pub(crate) fn generation(&self, index: usize) -> Option<u32> {
        self.slots
            .get(index)
            .filter(|slot| slot.node.is_some())
            .map(|slot| slot.generation)
    }

    pub(crate) fn live(&self) -> usize {
        self.live
    }

    pub(crate) fn capacity(&self) -> usize {
        self.slots.len()
    }
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<usize> for Arena<T> {
    type Output = Node<T>;

    fn index(&self, index: usize) -> &Node<T> {
        match self.get(index) {
            Some(node) => node,
            None => panic!("arena slot {index} is vacant"),
        }
    }
}

impl<T> IndexMut<usize> for Arena<T> {
    fn index_mut(&mut self, index: usize) -> &mut Node<T> {
        match self.slots.get_mut(index).and_then(|slot| slot.node.as_mut()) {
            Some(node) => node,
            None => panic!("arena slot {index} is vacant"),
        }
    }
}

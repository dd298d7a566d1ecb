//! Slab allocator that hands out copyable handles instead of references.

use std::mem;
use std::ops::{Index, IndexMut};

/// A handle to an object allocated in a `TypedArena<T>`.
///
/// A handle pairs a slot index with the generation of the slot at allocation time. Freeing the
/// object bumps the generation, so a stale handle never resolves to an object that later reuses
/// the slot.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Handle {
    index: usize,
    generation: u32,
}

impl Handle {
    /// Returns the slot index of the handle.
    pub fn index(self) -> usize {
        self.index
    }
}

#[derive(Clone)]
enum Block<T> {
    Occupied(T),
    Vacant(Option<usize>),
}

#[derive(Clone)]
struct Slot<T> {
    generation: u32,
    block: Block<T>,
}

/// An allocator for a single type of object backed by one growable `Vec`.
///
/// Freed slots are threaded onto a free list and reused before the underlying vector grows, so a
/// tree that repeatedly inserts and deletes keys keeps a stable footprint. No unsafe code is used.
///
/// # Examples
///
/// ```
/// use avl_index::arena::TypedArena;
///
/// let mut arena = TypedArena::new();
///
/// let x = arena.allocate(1);
/// assert_eq!(arena[x], 1);
///
/// arena[x] += 1;
/// assert_eq!(arena[x], 2);
///
/// assert_eq!(arena.free(x), Some(2));
/// assert_eq!(arena.get(x), None);
///
/// let y = arena.allocate(3);
/// assert_eq!(y.index(), x.index());
/// assert_eq!(arena.get(x), None);
/// ```
#[derive(Clone)]
pub struct TypedArena<T> {
    head: Option<usize>,
    slots: Vec<Slot<T>>,
    len: usize,
}

impl<T> TypedArena<T> {
    fn is_live(&self, handle: Handle) -> bool {
        match self.slots.get(handle.index) {
            Some(Slot { generation, block: Block::Occupied(_) }) => *generation == handle.generation,
            _ => false,
        }
    }

    /// Constructs a new, empty `TypedArena<T>`.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Constructs a new, empty `TypedArena<T>` with room for `capacity` objects before it
    /// reallocates.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_index::arena::TypedArena;
    ///
    /// let arena: TypedArena<u32> = TypedArena::with_capacity(1024);
    /// assert!(arena.is_empty());
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        TypedArena {
            head: None,
            slots: Vec::with_capacity(capacity),
            len: 0,
        }
    }

    /// Allocates an object in the arena and returns its handle.
    pub fn allocate(&mut self, value: T) -> Handle {
        self.len += 1;
        match self.head.take() {
            None => {
                self.slots.push(Slot {
                    generation: 0,
                    block: Block::Occupied(value),
                });
                Handle {
                    index: self.slots.len() - 1,
                    generation: 0,
                }
            },
            Some(index) => {
                let slot = &mut self.slots[index];
                match mem::replace(&mut slot.block, Block::Occupied(value)) {
                    Block::Vacant(next) => self.head = next,
                    Block::Occupied(_) => unreachable!(),
                }
                Handle {
                    index,
                    generation: slot.generation,
                }
            },
        }
    }

    /// Deallocates an object and returns it. Returns `None` if the handle does not correspond to
    /// a live object.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_index::arena::TypedArena;
    ///
    /// let mut arena = TypedArena::new();
    /// let x = arena.allocate(0);
    /// assert_eq!(arena.free(x), Some(0));
    /// assert_eq!(arena.free(x), None);
    /// ```
    pub fn free(&mut self, handle: Handle) -> Option<T> {
        if !self.is_live(handle) {
            return None;
        }
        let slot = &mut self.slots[handle.index];
        slot.generation = slot.generation.wrapping_add(1);
        let old_block = mem::replace(&mut slot.block, Block::Vacant(self.head));
        self.head = Some(handle.index);
        self.len -= 1;
        match old_block {
            Block::Occupied(value) => Some(value),
            Block::Vacant(_) => unreachable!(),
        }
    }

    /// Returns an immutable reference to an object. Returns `None` if the handle does not
    /// correspond to a live object.
    pub fn get(&self, handle: Handle) -> Option<&T> {
        if !self.is_live(handle) {
            return None;
        }
        match self.slots[handle.index].block {
            Block::Occupied(ref value) => Some(value),
            Block::Vacant(_) => None,
        }
    }

    /// Returns a mutable reference to an object. Returns `None` if the handle does not correspond
    /// to a live object.
    pub fn get_mut(&mut self, handle: Handle) -> Option<&mut T> {
        if !self.is_live(handle) {
            return None;
        }
        match self.slots[handle.index].block {
            Block::Occupied(ref mut value) => Some(value),
            Block::Vacant(_) => None,
        }
    }

    /// Returns the number of live objects in the arena.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the arena holds no live objects.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Drops every object in the arena and invalidates all handles. Slots are kept, with their
    /// generations bumped, and are reused from the lowest index up.
    pub fn clear(&mut self) {
        let mut head = None;
        for (index, slot) in self.slots.iter_mut().enumerate().rev() {
            if let Block::Occupied(_) = slot.block {
                slot.generation = slot.generation.wrapping_add(1);
            }
            slot.block = Block::Vacant(head);
            head = Some(index);
        }
        self.head = head;
        self.len = 0;
    }
}

impl<T> Default for TypedArena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<Handle> for TypedArena<T> {
    type Output = T;

    fn index(&self, handle: Handle) -> &Self::Output {
        self.get(handle).expect("Error: handle does not refer to a live object.")
    }
}

impl<T> IndexMut<Handle> for TypedArena<T> {
    fn index_mut(&mut self, handle: Handle) -> &mut Self::Output {
        self.get_mut(handle).expect("Error: handle does not refer to a live object.")
    }
}

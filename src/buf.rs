// model = "claude-opus-4-5"
// created = "2026-08-05"
// modified = "2026-08-06"
// driver = "Isaac Clayton"

//! Growable buffers with shared storage windows.
//!
//! A [`GrowBuf`] owns a contiguous allocation and tracks how much of it
//! holds live elements. Taking a [`View`] does not copy: a view is a
//! window (offset + length) onto the same storage, and in-capacity writes
//! through either side are visible to both. Key design decisions:
//!
//! 1. **Arena storage**: the allocation is a fully-initialized `Vec<T>`
//!    behind `Rc<RefCell<...>>`. Cells past any window's logical length
//!    hold `T::default()`, so a window may legally extend into unused
//!    capacity. Views carry an explicit `(offset, length)` descriptor
//!    instead of a borrowed pointer, which keeps ownership unambiguous.
//!
//! 2. **Growth severs sharing**: appending past capacity allocates a
//!    fresh arena, copies the live window, and repoints only the side
//!    that grew. The other side keeps the old arena, sees its frozen
//!    contents, and observes no further writes from the grown side.
//!
//! 3. **Doubling policy**: capacity roughly doubles on growth, so N
//!    sequential appends from empty cost O(N) total despite occasional
//!    O(N) copies. A batch append makes a single growth decision for the
//!    whole batch.
//!
//! Buffers are single-writer. The `Rc` arena keeps them off other
//! threads entirely; callers that want cross-thread access must wrap a
//! buffer in their own lock.

use std::cell::RefCell;
use std::rc::Rc;

use thiserror::Error;
use tracing::trace;

use crate::profiling;

/// Capacity of the first allocation made by an empty buffer.
pub const INITIAL_CAPACITY: usize = 4;

/// Error returned when an index or range falls outside a buffer.
///
/// Out-of-range access always reports, never clamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IndexError {
    /// The index is at or past the number of live elements.
    #[error("index {index} out of bounds for length {length}")]
    OutOfBounds { index: usize, length: usize },
    /// The range start is past its end.
    #[error("slice start {start} is past end {end}")]
    InvertedRange { start: usize, end: usize },
    /// The range end is past the underlying capacity.
    #[error("slice end {end} exceeds capacity {capacity}")]
    EndBeyondCapacity { end: usize, capacity: usize },
}

/// Shared handle to an arena of cells. The arena's `Vec` is always
/// filled to its allocated size; logical lengths live in the descriptors
/// that window it.
type Arena<T> = Rc<RefCell<Vec<T>>>;

fn new_arena<T: Clone + Default>(capacity: usize) -> Arena<T> {
    return Rc::new(RefCell::new(vec![T::default(); capacity]));
}

/// Next capacity under the doubling policy, at least `needed`.
fn grown_capacity(current: usize, needed: usize) -> usize {
    let mut next = if current == 0 { INITIAL_CAPACITY } else { current * 2 };
    while next < needed {
        next *= 2;
    }
    return next;
}

/// Allocate a new arena of `new_capacity` cells and copy the live window
/// `[offset, offset + length)` out of `arena` into its start.
fn copy_into_grown<T: Clone + Default>(
    arena: &Arena<T>,
    offset: usize,
    length: usize,
    new_capacity: usize,
) -> Arena<T> {
    let grown = new_arena(new_capacity);
    {
        let old = arena.borrow();
        let mut cells = grown.borrow_mut();
        cells[..length].clone_from_slice(&old[offset..offset + length]);
    }
    profiling::realloc(length);
    return grown;
}

/// An ordered, index-addressable sequence with amortized O(1) append.
///
/// A `GrowBuf` exclusively owns the arena it allocated. It is not
/// `Clone`: shared windows are taken explicitly with [`GrowBuf::slice`].
pub struct GrowBuf<T> {
    arena: Arena<T>,
    length: usize,
}

impl<T: Clone + Default> GrowBuf<T> {
    /// Create an empty buffer with zero capacity. The first append
    /// allocates.
    pub fn new() -> GrowBuf<T> {
        return GrowBuf {
            arena: new_arena(0),
            length: 0,
        };
    }

    /// Create an empty buffer with room for `capacity` elements, so that
    /// up to `capacity` appends need no reallocation.
    pub fn with_capacity(capacity: usize) -> GrowBuf<T> {
        return GrowBuf {
            arena: new_arena(capacity),
            length: 0,
        };
    }

    /// Create a buffer holding exactly `values`, with `capacity` equal
    /// to `length`. The next append grows.
    pub fn from_vec(values: Vec<T>) -> GrowBuf<T> {
        let length = values.len();
        return GrowBuf {
            arena: Rc::new(RefCell::new(values)),
            length,
        };
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        return self.length;
    }

    /// True if the buffer holds no live elements.
    pub fn is_empty(&self) -> bool {
        return self.length == 0;
    }

    /// Size of the underlying allocation. Always at least `len()`.
    pub fn capacity(&self) -> usize {
        return self.arena.borrow().len();
    }

    /// Append one element.
    ///
    /// In-capacity appends write into the shared arena, so a view whose
    /// window covers the written offset observes the new element
    /// immediately. An at-capacity append reallocates first, after which
    /// previously taken views no longer alias this buffer.
    pub fn append(&mut self, value: T) {
        if self.length == self.capacity() {
            self.grow(self.length + 1);
        }
        self.arena.borrow_mut()[self.length] = value;
        self.length += 1;
        profiling::write(1);
    }

    /// Append a batch of elements with a single growth decision.
    pub fn append_all(&mut self, values: &[T]) {
        let needed = self.length + values.len();
        if needed > self.capacity() {
            self.grow(needed);
        }
        {
            let mut cells = self.arena.borrow_mut();
            for (i, value) in values.iter().enumerate() {
                cells[self.length + i] = value.clone();
            }
        }
        self.length = needed;
        profiling::write(values.len());
    }

    /// Read the element at `index`.
    pub fn get(&self, index: usize) -> Result<T, IndexError> {
        if index >= self.length {
            return Err(IndexError::OutOfBounds { index, length: self.length });
        }
        return Ok(self.arena.borrow()[index].clone());
    }

    /// Overwrite the element at `index`.
    pub fn set(&mut self, index: usize, value: T) -> Result<(), IndexError> {
        if index >= self.length {
            return Err(IndexError::OutOfBounds { index, length: self.length });
        }
        self.arena.borrow_mut()[index] = value;
        return Ok(());
    }

    /// Take a window `[start, end)` over this buffer's arena.
    ///
    /// `end` may extend past `len()` into unused capacity; the extra
    /// cells read as `T::default()`. It may not exceed the capacity.
    pub fn slice(&self, start: usize, end: usize) -> Result<View<T>, IndexError> {
        if start > end {
            return Err(IndexError::InvertedRange { start, end });
        }
        let capacity = self.capacity();
        if end > capacity {
            return Err(IndexError::EndBeyondCapacity { end, capacity });
        }
        return Ok(View {
            arena: Rc::clone(&self.arena),
            offset: start,
            length: end - start,
        });
    }

    /// Copy the live elements out.
    pub fn to_vec(&self) -> Vec<T> {
        return self.arena.borrow()[..self.length].to_vec();
    }

    fn grow(&mut self, needed: usize) {
        let new_capacity = grown_capacity(self.capacity(), needed);
        trace!(
            from = self.capacity(),
            to = new_capacity,
            copied = self.length,
            "buf: growing arena"
        );
        self.arena = copy_into_grown(&self.arena, 0, self.length, new_capacity);
    }
}

impl<T: Clone + Default> Default for GrowBuf<T> {
    fn default() -> GrowBuf<T> {
        return GrowBuf::new();
    }
}

impl<T: Clone + Default + std::fmt::Debug> std::fmt::Debug for GrowBuf<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        return write!(
            f,
            "GrowBuf {{ len: {}, cap: {}, data: {:?} }}",
            self.length,
            self.capacity(),
            &self.arena.borrow()[..self.length]
        );
    }
}

/// A window onto a buffer's arena.
///
/// A view aliases the arena it was taken from until one side grows. Its
/// capacity is the underlying capacity minus its start offset, so a view
/// near the front of a large buffer has most of that buffer's headroom.
/// Views are `Clone`: co-aliasing windows over one arena are expected,
/// and all of them observe in-capacity writes from any of them.
#[derive(Clone)]
pub struct View<T> {
    arena: Arena<T>,
    offset: usize,
    length: usize,
}

impl<T: Clone + Default> View<T> {
    /// Number of live elements in the window.
    pub fn len(&self) -> usize {
        return self.length;
    }

    /// True if the window holds no live elements.
    pub fn is_empty(&self) -> bool {
        return self.length == 0;
    }

    /// Headroom of the window: underlying capacity minus start offset.
    pub fn capacity(&self) -> usize {
        return self.arena.borrow().len() - self.offset;
    }

    /// Append one element through the window.
    ///
    /// While the window has spare capacity this writes into the shared
    /// arena, where the origin buffer and co-aliasing views see it. Past
    /// capacity, the view reallocates and is disconnected from the old
    /// arena from then on.
    pub fn append(&mut self, value: T) {
        if self.length == self.capacity() {
            self.grow(self.length + 1);
        }
        self.arena.borrow_mut()[self.offset + self.length] = value;
        self.length += 1;
        profiling::write(1);
    }

    /// Append a batch of elements with a single growth decision.
    pub fn append_all(&mut self, values: &[T]) {
        let needed = self.length + values.len();
        if needed > self.capacity() {
            self.grow(needed);
        }
        {
            let mut cells = self.arena.borrow_mut();
            for (i, value) in values.iter().enumerate() {
                cells[self.offset + self.length + i] = value.clone();
            }
        }
        self.length = needed;
        profiling::write(values.len());
    }

    /// Read the element at `index` within the window.
    pub fn get(&self, index: usize) -> Result<T, IndexError> {
        if index >= self.length {
            return Err(IndexError::OutOfBounds { index, length: self.length });
        }
        return Ok(self.arena.borrow()[self.offset + index].clone());
    }

    /// Overwrite the element at `index` within the window. The write
    /// goes through to the shared arena.
    pub fn set(&mut self, index: usize, value: T) -> Result<(), IndexError> {
        if index >= self.length {
            return Err(IndexError::OutOfBounds { index, length: self.length });
        }
        self.arena.borrow_mut()[self.offset + index] = value;
        return Ok(());
    }

    /// Re-window: take `[start, end)` relative to this view. Bounds are
    /// checked against this view's capacity, not its length.
    pub fn slice(&self, start: usize, end: usize) -> Result<View<T>, IndexError> {
        if start > end {
            return Err(IndexError::InvertedRange { start, end });
        }
        let capacity = self.capacity();
        if end > capacity {
            return Err(IndexError::EndBeyondCapacity { end, capacity });
        }
        return Ok(View {
            arena: Rc::clone(&self.arena),
            offset: self.offset + start,
            length: end - start,
        });
    }

    /// Copy the window's live elements out.
    pub fn to_vec(&self) -> Vec<T> {
        let cells = self.arena.borrow();
        return cells[self.offset..self.offset + self.length].to_vec();
    }

    fn grow(&mut self, needed: usize) {
        let new_capacity = grown_capacity(self.capacity(), needed);
        trace!(
            from = self.capacity(),
            to = new_capacity,
            copied = self.length,
            "view: growing into own arena"
        );
        self.arena = copy_into_grown(&self.arena, self.offset, self.length, new_capacity);
        self.offset = 0;
    }
}

impl<T: Clone + Default + std::fmt::Debug> std::fmt::Debug for View<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cells = self.arena.borrow();
        return write!(
            f,
            "View {{ len: {}, cap: {}, data: {:?} }}",
            self.length,
            cells.len() - self.offset,
            &cells[self.offset..self.offset + self.length]
        );
    }
}

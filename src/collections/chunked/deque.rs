use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::ops::{Index, IndexMut};

use super::table::ChunkTable;
use super::{AllocError, Cursor, CursorError, IndexOutOfBounds, StaleCursor};
use crate::util::fmt::DebugEntries;
use crate::util::option::OptionExtension;
use crate::util::result::ResultExtension;

/// The number of elements held by each chunk when no capacity is given.
pub const DEFAULT_CHUNK_CAPACITY: usize = 12;

/// A double-ended queue built from fixed-capacity chunks of `N` elements.
///
/// Elements live in separately allocated chunks, referenced through a table. Pushing onto either
/// end only ever writes into the chunk at that end, allocating a new chunk once every `N`
/// insertions, so elements never move when the deque grows. Indexing translates a flattened
/// index into a chunk and an offset with one addition and one division.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of elements in the ChunkedDeque.
/// - `c`: The number of chunks, roughly `n / N`.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `len` | `O(1)` |
/// | `push_back` | `O(1)`* |
/// | `push_front` | `O(1)`*, `O(c)` |
/// | `pop_back` | `O(1)`, `O(N)` |
/// | `pop_front` | `O(1)`, `O(N)`, `O(c)` |
/// | `remove_at` | `O(n)` |
/// | `remove` | `O(n)` |
/// | `find` | `O(n)` |
/// | `contains` | `O(n)` |
///
/// \* Amortized. Growing the table of chunks happens once every `N` insertions at the same end,
/// and prepending a chunk has to shift the table itself.
///
/// `pop_front` is `O(N)` while every element sits in the first back chunk, because the rest of
/// that chunk moves down, and `O(c)` when a drained front chunk is recycled to the end of the
/// table.
///
/// Removal is `O(n)` on purpose: everything after the removed element moves down by one, chunk by
/// chunk. Only the chunk at the front is compacted from the other side.
///
/// # Invalidation
/// Borrowing iterators hold the deque borrowed, so they can't be invalidated. [`Cursor`]s can,
/// and are checked against a generation counter that is bumped whenever the chunk table changes,
/// on every [`push_front`](ChunkedDeque::push_front) (which shifts every index) and on every
/// removal.
pub struct ChunkedDeque<T, const N: usize = DEFAULT_CHUNK_CAPACITY> {
    pub(crate) table: ChunkTable<T, N>,
    pub(crate) len: usize,
    pub(crate) generation: u64,
}

impl<T, const N: usize> ChunkedDeque<T, N> {
    /// Creates a new, empty ChunkedDeque with one front and one back chunk allocated.
    ///
    /// # Panics
    /// Panics if the layout of a chunk exceeds [`isize::MAX`] bytes. Aborts through
    /// [`handle_alloc_error`](std::alloc::handle_alloc_error) if allocation fails.
    ///
    /// # Examples
    /// ```
    /// # use chunked_deque::collections::chunked::ChunkedDeque;
    /// let deque: ChunkedDeque<u8> = ChunkedDeque::new();
    /// assert_eq!(deque.len(), 0);
    /// assert_eq!(deque.chunk_count(), 2);
    /// ```
    pub fn new() -> ChunkedDeque<T, N> {
        Self::try_new().unwrap_or_else(|error| error.handle())
    }

    /// Creates a new, empty ChunkedDeque, returning an error instead of panicking if the initial
    /// chunks can't be allocated.
    ///
    /// # Errors
    /// Returns an [`AllocError`] if either chunk can't be allocated.
    pub fn try_new() -> Result<ChunkedDeque<T, N>, AllocError> {
        Ok(ChunkedDeque {
            table: ChunkTable::try_new()?,
            len: 0,
            generation: 0,
        })
    }

    /// Returns the number of elements in the ChunkedDeque.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the ChunkedDeque contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of chunks currently allocated, including spare chunks.
    pub fn chunk_count(&self) -> usize {
        self.table.len()
    }

    /// Returns the number of elements that can be pushed onto the front without growing.
    pub fn head_room(&self) -> usize {
        self.table.front().free_at_head()
    }

    /// Returns the number of elements that can be pushed onto the back without allocating.
    pub fn tail_room(&self) -> usize {
        self.table
            .spare_count()
            .saturating_mul(N)
            .saturating_add(self.table.back().free_at_tail())
    }

    /// Returns the structural generation of the ChunkedDeque, which [`Cursor`]s are checked
    /// against.
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Pushes the provided value onto the back of the ChunkedDeque.
    ///
    /// # Panics
    /// Panics if the layout of a chunk exceeds [`isize::MAX`] bytes. Aborts through
    /// [`handle_alloc_error`](std::alloc::handle_alloc_error) if allocation fails.
    ///
    /// # Examples
    /// ```
    /// # use chunked_deque::collections::chunked::ChunkedDeque;
    /// let mut deque: ChunkedDeque<u8, 4> = ChunkedDeque::new();
    /// for i in 0..6 {
    ///     deque.push_back(i);
    /// }
    /// assert_eq!(deque.iter().copied().collect::<Vec<_>>(), [0, 1, 2, 3, 4, 5]);
    /// assert_eq!(deque.chunk_count(), 3);
    /// ```
    pub fn push_back(&mut self, value: T) {
        if let Err(error) = self.try_push_back(value) {
            error.handle()
        }
    }

    /// Pushes the provided value onto the back of the ChunkedDeque, returning an error if a new
    /// chunk was needed and couldn't be allocated.
    ///
    /// # Errors
    /// Returns an [`AllocError`] if growing failed. The ChunkedDeque is unchanged and `value` is
    /// dropped.
    pub fn try_push_back(&mut self, value: T) -> Result<(), AllocError> {
        if self.table.try_grow_back()? {
            self.bump_generation();
        }

        // SAFETY: try_grow_back has made sure the back chunk has tail room.
        unsafe { self.table.back_mut().push_back_unchecked(value) };
        self.len += 1;
        Ok(())
    }

    /// Pushes the provided value onto the front of the ChunkedDeque. Every existing element's
    /// index increases by one.
    ///
    /// # Panics
    /// Panics if the layout of a chunk exceeds [`isize::MAX`] bytes. Aborts through
    /// [`handle_alloc_error`](std::alloc::handle_alloc_error) if allocation fails.
    ///
    /// # Examples
    /// ```
    /// # use chunked_deque::collections::chunked::ChunkedDeque;
    /// let mut deque: ChunkedDeque<u8> = ChunkedDeque::new();
    /// deque.push_front(1);
    /// deque.push_front(2);
    /// deque.push_back(3);
    /// assert_eq!(deque.iter().copied().collect::<Vec<_>>(), [2, 1, 3]);
    /// ```
    pub fn push_front(&mut self, value: T) {
        if let Err(error) = self.try_push_front(value) {
            error.handle()
        }
    }

    /// Pushes the provided value onto the front of the ChunkedDeque, returning an error if a new
    /// chunk was needed and couldn't be allocated.
    ///
    /// # Errors
    /// Returns an [`AllocError`] if growing failed. The ChunkedDeque is unchanged and `value` is
    /// dropped.
    pub fn try_push_front(&mut self, value: T) -> Result<(), AllocError> {
        self.table.try_grow_front()?;

        // SAFETY: try_grow_front has made sure the front chunk has head room.
        unsafe { self.table.front_mut().push_front_unchecked(value) };
        self.table.settle();
        self.len += 1;
        self.bump_generation();
        Ok(())
    }

    /// Removes and returns the element at the back of the ChunkedDeque, if there is one.
    pub fn pop_back(&mut self) -> Option<T> {
        let index = self.len.checked_sub(1)?;
        Some(self.take(index))
    }

    /// Removes and returns the element at the front of the ChunkedDeque, if there is one.
    ///
    /// # Examples
    /// ```
    /// # use chunked_deque::collections::chunked::ChunkedDeque;
    /// let mut deque: ChunkedDeque<u8, 2> = (0..5).collect();
    /// assert_eq!(deque.pop_front(), Some(0));
    /// assert_eq!(deque.pop_back(), Some(4));
    /// assert_eq!(deque.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            None
        } else {
            Some(self.take(0))
        }
    }

    /// Returns a reference to the element at the provided index, or None if it is out of bounds.
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }

        let (chunk, offset) = self.locate(index);
        self.table.get(chunk)?.get(offset)
    }

    /// Returns a mutable reference to the element at the provided index, or None if it is out of
    /// bounds.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.len {
            return None;
        }

        let (chunk, offset) = self.locate(index);
        self.table.get_mut(chunk)?.get_mut(offset)
    }

    /// Returns a reference to the element at the provided index.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index >= len`.
    ///
    /// # Examples
    /// ```
    /// # use chunked_deque::collections::chunked::ChunkedDeque;
    /// let deque: ChunkedDeque<char> = "chunks".chars().collect();
    /// assert_eq!(deque.element_at(2), Ok(&'u'));
    /// assert!(deque.element_at(6).is_err());
    /// ```
    pub fn element_at(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        let len = self.len;
        self.get(index).ok_or(IndexOutOfBounds { index, len })
    }

    /// Returns a mutable reference to the element at the provided index.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index >= len`.
    pub fn element_at_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        let len = self.len;
        self.get_mut(index).ok_or(IndexOutOfBounds { index, len })
    }

    /// Returns a reference to the element at the front, if there is one.
    pub fn first(&self) -> Option<&T> {
        self.get(0)
    }

    /// Returns a mutable reference to the element at the front, if there is one.
    pub fn first_mut(&mut self) -> Option<&mut T> {
        self.get_mut(0)
    }

    /// Returns a reference to the element at the back, if there is one.
    pub fn last(&self) -> Option<&T> {
        self.get(self.len.checked_sub(1)?)
    }

    /// Returns a mutable reference to the element at the back, if there is one.
    pub fn last_mut(&mut self) -> Option<&mut T> {
        self.get_mut(self.len.checked_sub(1)?)
    }

    /// Removes and returns the element at the provided index, moving every following element down
    /// by one.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    ///
    /// # Examples
    /// ```
    /// # use chunked_deque::collections::chunked::ChunkedDeque;
    /// let mut deque: ChunkedDeque<u8, 3> = (0..8).collect();
    /// assert_eq!(deque.remove_at(2), 2);
    /// assert_eq!(deque.iter().copied().collect::<Vec<_>>(), [0, 1, 3, 4, 5, 6, 7]);
    /// ```
    pub fn remove_at(&mut self, index: usize) -> T {
        self.try_remove_at(index).throw()
    }

    /// Removes and returns the element at the provided index, moving every following element down
    /// by one.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index >= len`, leaving the ChunkedDeque unchanged.
    pub fn try_remove_at(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        self.check_index(index)?;
        Ok(self.take(index))
    }

    /// Drops every element, keeping all allocated chunks around as spares.
    pub fn clear(&mut self) {
        self.table.clear();
        self.len = 0;
        self.bump_generation();
    }

    /// Ensures that at least `additional` elements can be pushed onto the back without allocating.
    ///
    /// # Panics
    /// Panics if the layout of a chunk exceeds [`isize::MAX`] bytes. Aborts through
    /// [`handle_alloc_error`](std::alloc::handle_alloc_error) if allocation fails.
    pub fn reserve(&mut self, additional: usize) {
        if let Err(error) = self.try_reserve(additional) {
            error.handle()
        }
    }

    /// Ensures that at least `additional` elements can be pushed onto the back without allocating,
    /// by appending spare chunks to the table.
    ///
    /// # Errors
    /// Returns an [`AllocError`] if any of the chunks can't be allocated. In that case no chunks
    /// are added.
    ///
    /// # Examples
    /// ```
    /// # use chunked_deque::collections::chunked::ChunkedDeque;
    /// let mut deque: ChunkedDeque<u32, 4> = ChunkedDeque::new();
    /// deque.try_reserve(10).expect("Allocation failed!");
    /// assert!(deque.tail_room() >= 10);
    ///
    /// let chunks = deque.chunk_count();
    /// deque.extend(0..10);
    /// assert_eq!(deque.chunk_count(), chunks);
    /// ```
    pub fn try_reserve(&mut self, additional: usize) -> Result<(), AllocError> {
        let room = self.tail_room();
        if additional <= room {
            return Ok(());
        }

        self.table.try_add_spares((additional - room).div_ceil(N))?;
        self.bump_generation();
        Ok(())
    }

    /// Frees any spare chunks that aren't holding elements.
    pub fn shrink_to_fit(&mut self) {
        if self.table.release_spares() > 0 {
            self.bump_generation();
        }
    }

    /// Returns a [`Cursor`] pointing at the first element.
    pub const fn cursor_front(&self) -> Cursor {
        self.cursor_at(0)
    }

    /// Returns a [`Cursor`] pointing one past the last element.
    pub const fn cursor_end(&self) -> Cursor {
        self.cursor_at(self.len)
    }

    /// Returns a [`Cursor`] pointing at the provided index. The index isn't checked until the
    /// Cursor is used.
    pub const fn cursor_at(&self, index: usize) -> Cursor {
        Cursor {
            index,
            generation: self.generation,
        }
    }

    /// Returns a reference to the element the provided [`Cursor`] points at.
    ///
    /// # Errors
    /// Returns [`CursorError::Stale`] if the ChunkedDeque has been structurally modified since the
    /// Cursor was created and [`CursorError::IndexOutOfBounds`] if it points outside of the
    /// ChunkedDeque.
    pub fn read(&self, cursor: &Cursor) -> Result<&T, CursorError> {
        self.check_cursor(cursor)?;
        Ok(self.element_at(cursor.index)?)
    }

    /// Returns a mutable reference to the element the provided [`Cursor`] points at.
    ///
    /// # Errors
    /// See [`ChunkedDeque::read`].
    pub fn read_mut(&mut self, cursor: &Cursor) -> Result<&mut T, CursorError> {
        self.check_cursor(cursor)?;
        Ok(self.element_at_mut(cursor.index)?)
    }

    /// Removes the element the provided [`Cursor`] points at. Any Cursor, including this one, is
    /// stale afterwards.
    ///
    /// # Errors
    /// See [`ChunkedDeque::read`]. The ChunkedDeque is unchanged on error.
    pub fn remove_cursor(&mut self, cursor: Cursor) -> Result<T, CursorError> {
        self.check_cursor(&cursor)?;
        Ok(self.try_remove_at(cursor.index)?)
    }

    /// Translates a flattened index into the index of a chunk and the offset within it.
    ///
    /// The front chunk is filled towards slot 0, so its head room is added to the index first.
    /// Every chunk between the front and the back is full, so the rest is a division.
    fn locate(&self, index: usize) -> (usize, usize) {
        let shifted = index + self.head_room();
        (shifted / N, shifted % N)
    }

    /// Removes the element at `index`, which must be in bounds.
    fn take(&mut self, index: usize) -> T {
        self.table.recycle_front();

        let (chunk, offset) = self.locate(index);
        let value = if chunk == 0 {
            self.table.front_mut().remove_shift_head(offset)
        } else {
            self.table.remove_cascading(chunk, offset)
        };

        self.table.settle();
        self.len -= 1;
        self.bump_generation();

        // SAFETY: Every caller checks that index < len, so locate produced an occupied slot.
        unsafe { value.unreachable() }
    }

    fn check_index(&self, index: usize) -> Result<(), IndexOutOfBounds> {
        if index >= self.len {
            Err(IndexOutOfBounds {
                index,
                len: self.len,
            })
        } else {
            Ok(())
        }
    }

    const fn check_cursor(&self, cursor: &Cursor) -> Result<(), StaleCursor> {
        if cursor.generation == self.generation {
            Ok(())
        } else {
            Err(StaleCursor {
                created: cursor.generation,
                current: self.generation,
            })
        }
    }

    const fn bump_generation(&mut self) {
        self.generation += 1;
    }
}

impl<T: PartialEq, const N: usize> ChunkedDeque<T, N> {
    /// Returns the index of the first element equal to `value`, or None if there isn't one.
    ///
    /// # Examples
    /// ```
    /// # use chunked_deque::collections::chunked::ChunkedDeque;
    /// let deque: ChunkedDeque<u32> = (0..100).map(|i| i * 10).collect();
    /// assert_eq!(deque.find(&990), Some(99));
    /// assert_eq!(deque.find(&5), None);
    /// ```
    pub fn find(&self, value: &T) -> Option<usize> {
        self.iter().position(|item| item == value)
    }

    /// Returns true if the ChunkedDeque contains an element equal to `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.find(value).is_some()
    }

    /// Removes the first element equal to `value` and returns it. If there is no such element,
    /// nothing happens and None is returned.
    ///
    /// # Examples
    /// ```
    /// # use chunked_deque::collections::chunked::ChunkedDeque;
    /// let mut deque: ChunkedDeque<u32> = (0..100).collect();
    /// assert_eq!(deque.remove(&10), Some(10));
    /// assert_eq!(deque.remove(&10), None);
    /// assert_eq!(deque.len(), 99);
    /// ```
    pub fn remove(&mut self, value: &T) -> Option<T> {
        let index = self.find(value)?;
        Some(self.take(index))
    }

    /// Removes every element equal to `value`, returning how many were removed.
    ///
    /// This is `O(n * k)` for `k` matches, because each removal moves the rest of the
    /// ChunkedDeque.
    pub fn remove_all(&mut self, value: &T) -> usize {
        let mut removed = 0;
        let mut index = 0;

        while index < self.len {
            if self.get(index) == Some(value) {
                self.take(index);
                removed += 1;
            } else {
                index += 1;
            }
        }

        removed
    }
}

impl<T, const N: usize> Extend<T> for ChunkedDeque<T, N> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T, const N: usize> FromIterator<T> for ChunkedDeque<T, N> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut deque = ChunkedDeque::new();
        deque.extend(iter);
        deque
    }
}

impl<T, const N: usize> Default for ChunkedDeque<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> Index<usize> for ChunkedDeque<T, N> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.element_at(index).throw()
    }
}

impl<T, const N: usize> IndexMut<usize> for ChunkedDeque<T, N> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.element_at_mut(index).throw()
    }
}

impl<T: Clone, const N: usize> Clone for ChunkedDeque<T, N> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq, const N: usize> PartialEq for ChunkedDeque<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq, const N: usize> Eq for ChunkedDeque<T, N> {}

impl<T: Hash, const N: usize> Hash for ChunkedDeque<T, N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len);
        for item in self {
            item.hash(state);
        }
    }
}

impl<T: Debug, const N: usize> Debug for ChunkedDeque<T, N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChunkedDeque")
            .field("contents", &DebugEntries(self.iter()))
            .field("len", &self.len)
            .field("chunks", &self.chunk_count())
            .finish()
    }
}

impl<T: Debug, const N: usize> Display for ChunkedDeque<T, N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

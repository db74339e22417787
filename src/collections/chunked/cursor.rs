/// A detached position within a [`ChunkedDeque`](super::ChunkedDeque).
///
/// Unlike [`Iter`](super::Iter), a Cursor doesn't borrow the deque, so it can be held across
/// mutations. To keep that from silently pointing at the wrong element, each Cursor is stamped
/// with the deque's structural generation when created. Reading or removing through a Cursor
/// after the deque has been structurally modified fails with
/// [`StaleCursor`](super::StaleCursor).
///
/// A Cursor can be moved in both directions. Moving it doesn't check bounds, that happens when it
/// is used.
///
/// # Examples
/// ```
/// # use chunked_deque::collections::chunked::ChunkedDeque;
/// let mut deque: ChunkedDeque<u8> = (1..=3).collect();
/// let mut cursor = deque.cursor_front();
/// cursor.move_next();
/// assert_eq!(deque.read(&cursor), Ok(&2));
///
/// deque.push_front(0);
/// assert!(deque.read(&cursor).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cursor {
    pub(crate) index: usize,
    pub(crate) generation: u64,
}

impl Cursor {
    /// Returns the flattened index the Cursor currently points at.
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Returns the generation this Cursor was stamped with.
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Moves the Cursor one element towards the back.
    pub const fn move_next(&mut self) -> &mut Self {
        self.index = self.index.saturating_add(1);
        self
    }

    /// Moves the Cursor one element towards the front, stopping at index 0.
    pub const fn move_prev(&mut self) -> &mut Self {
        self.index = self.index.saturating_sub(1);
        self
    }
}

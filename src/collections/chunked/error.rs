use std::alloc::{self, Layout};
use std::collections::TryReserveError;

use derive_more::{Display, Error, From, IsVariant, TryInto};

/// An index was at or beyond the length of the deque.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("index {index} out of bounds for deque with {len} elements")]
pub struct IndexOutOfBounds {
    /// The index that was requested.
    pub index: usize,
    /// The length of the deque at the time.
    pub len: usize,
}

/// The memory layout of a single chunk would exceed [`isize::MAX`] bytes.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("capacity overflow")]
pub struct CapacityOverflow;

/// The global allocator failed to provide memory for a chunk.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("failed to allocate {} bytes for a chunk", layout.size())]
pub struct OutOfMemory {
    /// The layout that was requested.
    pub layout: Layout,
}

/// Any of the ways growing a deque can fail. When one of these is returned, the deque is left
/// exactly as it was before the call.
#[derive(Debug, Display, Error, From, TryInto, IsVariant, Clone, PartialEq, Eq)]
pub enum AllocError {
    /// See [`CapacityOverflow`].
    CapacityOverflow(CapacityOverflow),
    /// See [`OutOfMemory`].
    OutOfMemory(OutOfMemory),
    /// The table of chunks couldn't grow to reference another chunk.
    Table(TryReserveError),
}

impl AllocError {
    /// Reports the error the way infallible collections do: [`alloc::handle_alloc_error`] when
    /// the allocator gave up, a panic with the error message otherwise.
    pub(crate) fn handle(self) -> ! {
        match self {
            AllocError::OutOfMemory(OutOfMemory { layout }) => alloc::handle_alloc_error(layout),
            error => panic!("{}", error),
        }
    }
}

/// A [`Cursor`](super::Cursor) was used after the deque it came from was structurally modified.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("cursor from generation {created} used at generation {current}")]
pub struct StaleCursor {
    /// The generation the cursor was stamped with.
    pub created: u64,
    /// The generation of the deque when the cursor was used.
    pub current: u64,
}

/// The ways reading or removing through a [`Cursor`](super::Cursor) can fail.
#[derive(Debug, Display, Error, From, TryInto, IsVariant, Clone, Copy, PartialEq, Eq)]
pub enum CursorError {
    /// The cursor points before the start or past the end of the deque.
    IndexOutOfBounds(IndexOutOfBounds),
    /// The cursor outlived a structural change.
    Stale(StaleCursor),
}

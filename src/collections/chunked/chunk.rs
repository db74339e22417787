use std::alloc::{self, Layout};
use std::mem::MaybeUninit;
use std::ptr::{self, NonNull};
use std::slice;

use super::{AllocError, CapacityOverflow, OutOfMemory};

/// A fixed-capacity block of storage for `N` elements.
///
/// Only the span `head..tail` is initialized. `head` slots are free at the head of the chunk and
/// `N - tail` slots are free at its tail, so the same type serves as a front chunk (filled from
/// the tail end towards slot 0) and as a back chunk (filled from slot 0 upwards).
pub(crate) struct Chunk<T, const N: usize> {
    ptr: NonNull<MaybeUninit<T>>,
    head: usize,
    tail: usize,
}

impl<T, const N: usize> Chunk<T, N> {
    /// Allocates an empty chunk whose head and tail both sit at `anchor`. An anchor of `0` gives
    /// a chunk with only tail room, an anchor of `N` gives a chunk with only head room.
    ///
    /// # Errors
    /// Returns [`CapacityOverflow`] if `N` elements of `T` don't fit in a [`Layout`] and
    /// [`OutOfMemory`] if the allocator returns null. Nothing is allocated in either case.
    pub(crate) fn try_new(anchor: usize) -> Result<Chunk<T, N>, AllocError> {
        debug_assert!(anchor <= N);

        let layout = Self::make_layout()?;
        let ptr = Self::make_ptr(layout)?;

        Ok(Chunk {
            ptr,
            head: anchor,
            tail: anchor,
        })
    }

    fn make_layout() -> Result<Layout, AllocError> {
        Layout::array::<MaybeUninit<T>>(N).map_err(|_| CapacityOverflow.into())
    }

    /// Returns a dangling pointer for a zero-sized layout, otherwise zeroed storage from the
    /// global allocator.
    fn make_ptr(layout: Layout) -> Result<NonNull<MaybeUninit<T>>, AllocError> {
        if layout.size() == 0 {
            return Ok(NonNull::dangling());
        }

        // SAFETY: Zero-sized layouts have been guarded against.
        let raw_ptr: *mut MaybeUninit<T> = unsafe { alloc::alloc_zeroed(layout).cast() };

        NonNull::new(raw_ptr).ok_or_else(|| {
            log::debug!("allocation of {} bytes for a chunk failed", layout.size());
            OutOfMemory { layout }.into()
        })
    }

    pub(crate) const fn head(&self) -> usize {
        self.head
    }

    pub(crate) const fn len(&self) -> usize {
        self.tail - self.head
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.head == self.tail
    }

    pub(crate) const fn free_at_head(&self) -> usize {
        self.head
    }

    pub(crate) const fn free_at_tail(&self) -> usize {
        N - self.tail
    }

    pub(crate) fn get(&self, offset: usize) -> Option<&T> {
        if (self.head..self.tail).contains(&offset) {
            // SAFETY: offset is within head..tail, so the slot is in bounds and initialized.
            Some(unsafe { self.ptr.add(offset).as_ref().assume_init_ref() })
        } else {
            None
        }
    }

    pub(crate) fn get_mut(&mut self, offset: usize) -> Option<&mut T> {
        if (self.head..self.tail).contains(&offset) {
            // SAFETY: offset is within head..tail, so the slot is in bounds and initialized. The
            // borrow is tied to &mut self.
            Some(unsafe { self.ptr.add(offset).as_mut().assume_init_mut() })
        } else {
            None
        }
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: head..tail is in bounds, initialized and properly aligned. The slice borrows
        // self mutably, so nothing else can access the chunk meanwhile.
        unsafe { slice::from_raw_parts_mut(self.ptr.add(self.head).as_ptr().cast(), self.len()) }
    }

    /// Writes `value` into the first free slot at the tail.
    ///
    /// # Safety
    /// The caller must ensure that `free_at_tail() > 0`.
    pub(crate) unsafe fn push_back_unchecked(&mut self, value: T) {
        // SAFETY: tail < N is guaranteed by the caller, so the slot is within the allocation.
        unsafe { self.ptr.add(self.tail).write(MaybeUninit::new(value)) };
        self.tail += 1;
    }

    /// Writes `value` into the last free slot at the head.
    ///
    /// # Safety
    /// The caller must ensure that `free_at_head() > 0`.
    pub(crate) unsafe fn push_front_unchecked(&mut self, value: T) {
        self.head -= 1;
        // SAFETY: head was > 0, so head - 1 is within the allocation.
        unsafe { self.ptr.add(self.head).write(MaybeUninit::new(value)) };
    }

    /// Moves the value at `offset` out of the chunk, then moves every value after it one slot
    /// towards the head. The freed slot is credited to the tail.
    pub(crate) fn remove_shift_tail(&mut self, offset: usize) -> Option<T> {
        if !(self.head..self.tail).contains(&offset) {
            return None;
        }

        // SAFETY: offset is within head..tail, so it is initialized. Once it has been read, the
        // slot is overwritten by the copy or uncovered by decrementing tail, so the value is never
        // observed twice. The copied range offset + 1..tail is in bounds and initialized.
        unsafe {
            let value = self.ptr.add(offset).read().assume_init();
            ptr::copy(
                self.ptr.add(offset + 1).as_ptr(),
                self.ptr.add(offset).as_ptr(),
                self.tail - offset - 1,
            );
            self.tail -= 1;
            Some(value)
        }
    }

    /// Moves the value at `offset` out of the chunk, then moves every value before it one slot
    /// towards the tail. The freed slot is credited to the head.
    pub(crate) fn remove_shift_head(&mut self, offset: usize) -> Option<T> {
        if !(self.head..self.tail).contains(&offset) {
            return None;
        }

        // SAFETY: offset is within head..tail, so it is initialized. Once it has been read, the
        // slot is overwritten by the copy or uncovered by incrementing head, so the value is never
        // observed twice. The copied range head..offset is in bounds and initialized.
        unsafe {
            let value = self.ptr.add(offset).read().assume_init();
            ptr::copy(
                self.ptr.add(self.head).as_ptr(),
                self.ptr.add(self.head + 1).as_ptr(),
                offset - self.head,
            );
            self.head += 1;
            Some(value)
        }
    }

    /// Drops every value in the chunk and moves both head and tail to `anchor`.
    pub(crate) fn clear(&mut self, anchor: usize) {
        debug_assert!(anchor <= N);

        let occupied: *mut [T] = self.as_mut_slice();
        // Forget the values before dropping them, so a panicking drop leaks instead of
        // double-dropping.
        self.head = anchor;
        self.tail = anchor;

        // SAFETY: The slice covered the initialized values, which are no longer reachable through
        // the chunk.
        unsafe { ptr::drop_in_place(occupied) };
    }
}

impl<T, const N: usize> Drop for Chunk<T, N> {
    fn drop(&mut self) {
        let occupied: *mut [T] = self.as_mut_slice();

        // SAFETY: All values in head..tail are initialized and dropped exactly once, here.
        unsafe { ptr::drop_in_place(occupied) };

        if let Ok(layout) = Self::make_layout() {
            if layout.size() != 0 {
                // SAFETY: ptr was allocated in the global allocator with this same layout.
                // Zero-sized layouts were never allocated and are guarded against deallocation.
                unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), layout) }
            }
        }
    }
}

// SAFETY: A Chunk uniquely owns its allocation, so it is safe to send when T: Send.
unsafe impl<T: Send, const N: usize> Send for Chunk<T, N> {}
// SAFETY: Shared access to a Chunk only hands out shared references to T.
unsafe impl<T: Sync, const N: usize> Sync for Chunk<T, N> {}

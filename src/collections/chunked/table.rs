use log::trace;

use super::AllocError;
use super::chunk::Chunk;
use crate::util::option::OptionExtension;

/// The number of chunks a table starts with: the front chunk and the first back chunk.
const INITIAL_CHUNKS: usize = 2;

/// The table of chunks behind a [`ChunkedDeque`](super::ChunkedDeque).
///
/// The table always has the following shape:
/// - `chunks[0]` is the front chunk. It is filled towards slot 0, so it only ever has head room.
/// - `chunks[1..back]` are full.
/// - `chunks[back]` is the back chunk. It starts at slot 0 and, unless `back == 1`, isn't empty.
/// - Anything after `back` is an empty spare chunk, anchored at slot 0.
///
/// Because every chunk between the front and the back is full, the position of any element can
/// be derived from the head room of the front chunk alone.
pub(crate) struct ChunkTable<T, const N: usize> {
    chunks: Vec<Chunk<T, N>>,
    back: usize,
}

impl<T, const N: usize> ChunkTable<T, N> {
    pub(crate) fn try_new() -> Result<ChunkTable<T, N>, AllocError> {
        const { assert!(N > 0, "chunk capacity must be non-zero") };

        let mut chunks = Vec::new();
        chunks.try_reserve_exact(INITIAL_CHUNKS)?;
        chunks.push(Chunk::try_new(N)?);
        chunks.push(Chunk::try_new(0)?);

        Ok(ChunkTable { chunks, back: 1 })
    }

    /// The total number of chunks, including spares.
    pub(crate) fn len(&self) -> usize {
        self.chunks.len()
    }

    pub(crate) fn spare_count(&self) -> usize {
        self.chunks.len() - self.back - 1
    }

    pub(crate) fn front(&self) -> &Chunk<T, N> {
        &self.chunks[0]
    }

    pub(crate) fn front_mut(&mut self) -> &mut Chunk<T, N> {
        &mut self.chunks[0]
    }

    pub(crate) fn back(&self) -> &Chunk<T, N> {
        &self.chunks[self.back]
    }

    pub(crate) fn back_mut(&mut self) -> &mut Chunk<T, N> {
        &mut self.chunks[self.back]
    }

    pub(crate) fn get(&self, index: usize) -> Option<&Chunk<T, N>> {
        self.chunks.get(index)
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut Chunk<T, N>> {
        self.chunks.get_mut(index)
    }

    /// The chunks from the front up to and including the back chunk.
    pub(crate) fn active_mut(&mut self) -> &mut [Chunk<T, N>] {
        &mut self.chunks[..=self.back]
    }

    /// Makes sure the back chunk has room for at least one more value, moving onto a spare chunk
    /// or allocating a new one if it is full. Returns whether the table changed.
    pub(crate) fn try_grow_back(&mut self) -> Result<bool, AllocError> {
        if self.back().free_at_tail() > 0 {
            return Ok(false);
        }

        if self.spare_count() == 0 {
            // Reserve the slot and allocate the chunk before touching the table.
            self.chunks.try_reserve(1)?;
            let chunk = Chunk::try_new(0)?;
            self.chunks.push(chunk);
            trace!("appended chunk {} of {} elements", self.chunks.len() - 1, N);
        }

        self.back += 1;
        Ok(true)
    }

    /// Makes sure the front chunk has room for at least one more value, prepending a recycled
    /// spare or a newly allocated chunk if it is full. Returns whether the table changed.
    pub(crate) fn try_grow_front(&mut self) -> Result<bool, AllocError> {
        if self.front().free_at_head() > 0 {
            return Ok(false);
        }

        if self.spare_count() > 0 {
            self.chunks.rotate_right(1);
            self.chunks[0].clear(N);
            trace!("recycled a spare chunk as the front chunk");
        } else {
            // Reserve the slot and allocate the chunk before touching the table.
            self.chunks.try_reserve(1)?;
            let chunk = Chunk::try_new(N)?;
            self.chunks.insert(0, chunk);
            trace!("prepended chunk, table now holds {} chunks", self.chunks.len());
        }

        self.back += 1;
        Ok(true)
    }

    /// Appends `count` empty spare chunks. Either all of them are added or none are.
    pub(crate) fn try_add_spares(&mut self, count: usize) -> Result<(), AllocError> {
        if count == 0 {
            return Ok(());
        }

        let mut fresh = Vec::new();
        fresh.try_reserve_exact(count)?;
        for _ in 0..count {
            fresh.push(Chunk::try_new(0)?);
        }

        self.chunks.try_reserve(count)?;
        self.chunks.append(&mut fresh);
        trace!("reserved {} spare chunks", count);
        Ok(())
    }

    /// Frees every spare chunk, returning how many there were.
    pub(crate) fn release_spares(&mut self) -> usize {
        let released = self.spare_count();

        self.chunks.truncate(self.back + 1);
        self.chunks.shrink_to_fit();

        if released > 0 {
            trace!("released {} spare chunks", released);
        }
        released
    }

    /// Moves an empty front chunk to the end of the table as a spare, making the first full chunk
    /// the new front. Does nothing unless the front chunk is empty and a full chunk follows it.
    pub(crate) fn recycle_front(&mut self) -> bool {
        if !self.front().is_empty() || self.back < 2 {
            return false;
        }

        self.chunks.rotate_left(1);
        if let Some(spare) = self.chunks.last_mut() {
            spare.clear(0);
        }
        self.back -= 1;

        trace!("recycled the empty front chunk as a spare");
        true
    }

    /// Removes the value at `offset` in chunk `index` (which must not be the front chunk), then
    /// carries the first value of each following chunk back into the chunk before it. The back
    /// chunk ends up with one more slot of tail room.
    pub(crate) fn remove_cascading(&mut self, index: usize, offset: usize) -> Option<T> {
        debug_assert!(index > 0);

        let value = self.chunks.get_mut(index)?.remove_shift_tail(offset)?;

        for next in index + 1..=self.back {
            let head = self.chunks[next].head();
            // SAFETY: Every chunk after a non-back chunk and up to the back is non-empty.
            let carried = unsafe { self.chunks[next].remove_shift_tail(head).unreachable() };
            // SAFETY: The previous chunk was full before one of its values was removed.
            unsafe { self.chunks[next - 1].push_back_unchecked(carried) };
        }

        Some(value)
    }

    /// Restores the shape of the table after a removal or a front insertion by stepping back
    /// from an emptied back chunk.
    pub(crate) fn settle(&mut self) {
        if self.back > 1 && self.back().is_empty() {
            self.back -= 1;
        }
    }

    /// Drops every value, keeping all chunks allocated.
    pub(crate) fn clear(&mut self) {
        for (index, chunk) in self.chunks.iter_mut().enumerate() {
            chunk.clear(if index == 0 { N } else { 0 });
        }
        self.back = 1;
    }
}

use std::iter::{FlatMap, FusedIterator};
use std::slice;

use super::ChunkedDeque;
use super::chunk::Chunk;

impl<T, const N: usize> ChunkedDeque<T, N> {
    /// Returns an iterator over references to the elements, front to back. Each step goes through
    /// the same index translation as [`ChunkedDeque::get`].
    ///
    /// # Examples
    /// ```
    /// # use chunked_deque::collections::chunked::ChunkedDeque;
    /// let deque: ChunkedDeque<u8, 2> = (0..5).collect();
    /// assert_eq!(deque.iter().rev().copied().collect::<Vec<_>>(), [4, 3, 2, 1, 0]);
    /// ```
    pub const fn iter(&self) -> Iter<'_, T, N> {
        Iter {
            deque: self,
            front: 0,
            back: self.len,
        }
    }

    /// Returns an iterator over mutable references to the elements, front to back. This walks the
    /// chunks directly rather than translating every index.
    ///
    /// # Examples
    /// ```
    /// # use chunked_deque::collections::chunked::ChunkedDeque;
    /// let mut deque: ChunkedDeque<u32> = (0..100).collect();
    /// deque.iter_mut().for_each(|item| *item *= 10);
    /// assert_eq!(deque.find(&990), Some(99));
    /// ```
    pub fn iter_mut(&mut self) -> IterMut<'_, T, N> {
        let left = self.len;
        let chunks = self.table.active_mut().iter_mut();

        IterMut {
            inner: chunks.flat_map(Chunk::as_mut_slice as ChunkSliceMut<'_, T, N>),
            left,
        }
    }
}

type ChunkSliceMut<'a, T, const N: usize> = fn(&'a mut Chunk<T, N>) -> &'a mut [T];

impl<'a, T, const N: usize> IntoIterator for &'a ChunkedDeque<T, N> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A borrowed iterator over a [`ChunkedDeque`]. See [`ChunkedDeque::iter`].
///
/// Calling [`ChunkedDeque::iter`] again always starts over from the front.
pub struct Iter<'a, T, const N: usize> {
    deque: &'a ChunkedDeque<T, N>,
    front: usize,
    back: usize,
}

impl<'a, T, const N: usize> Iterator for Iter<'a, T, N> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front < self.back {
            let item = self.deque.get(self.front);
            self.front += 1;
            item
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.back - self.front;
        (left, Some(left))
    }
}

impl<T, const N: usize> DoubleEndedIterator for Iter<'_, T, N> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front < self.back {
            self.back -= 1;
            self.deque.get(self.back)
        } else {
            None
        }
    }
}

impl<T, const N: usize> ExactSizeIterator for Iter<'_, T, N> {}

impl<T, const N: usize> FusedIterator for Iter<'_, T, N> {}

impl<T, const N: usize> Clone for Iter<'_, T, N> {
    fn clone(&self) -> Self {
        Iter {
            deque: self.deque,
            front: self.front,
            back: self.back,
        }
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a mut ChunkedDeque<T, N> {
    type Item = &'a mut T;

    type IntoIter = IterMut<'a, T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// A mutable borrowed iterator over a [`ChunkedDeque`]. See [`ChunkedDeque::iter_mut`].
pub struct IterMut<'a, T, const N: usize> {
    inner: FlatMap<slice::IterMut<'a, Chunk<T, N>>, &'a mut [T], ChunkSliceMut<'a, T, N>>,
    left: usize,
}

impl<'a, T, const N: usize> Iterator for IterMut<'a, T, N> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.inner.next()?;
        self.left -= 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.left, Some(self.left))
    }
}

impl<T, const N: usize> DoubleEndedIterator for IterMut<'_, T, N> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let item = self.inner.next_back()?;
        self.left -= 1;
        Some(item)
    }
}

impl<T, const N: usize> ExactSizeIterator for IterMut<'_, T, N> {}

impl<T, const N: usize> FusedIterator for IterMut<'_, T, N> {}

impl<T, const N: usize> IntoIterator for ChunkedDeque<T, N> {
    type Item = T;

    type IntoIter = IntoIter<T, N>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { deque: self }
    }
}

/// An owned iterator over a [`ChunkedDeque`]. Elements that aren't consumed are dropped along
/// with the iterator.
pub struct IntoIter<T, const N: usize> {
    deque: ChunkedDeque<T, N>,
}

impl<T, const N: usize> Iterator for IntoIter<T, N> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.deque.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.deque.len(), Some(self.deque.len()))
    }
}

impl<T, const N: usize> DoubleEndedIterator for IntoIter<T, N> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.deque.pop_back()
    }
}

impl<T, const N: usize> ExactSizeIterator for IntoIter<T, N> {}

impl<T, const N: usize> FusedIterator for IntoIter<T, N> {}

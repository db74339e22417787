//! A module containing [`ChunkedDeque`] and associated types.
//!
//! A [`ChunkedDeque`] stores its elements in fixed-capacity chunks, referenced through a growable
//! table. Other included types are [`Cursor`], a detached position that can be stepped in both
//! directions, the borrowed iterators [`Iter`] and [`IterMut`], the owned [`IntoIter`] and the
//! error types returned by the fallible methods.
#![warn(missing_docs)]

mod chunk;
mod cursor;
mod deque;
mod error;
mod iter;
mod table;

pub use cursor::*;
pub use deque::*;
pub use error::*;
pub use iter::*;

//! Collection types.
//!
//! # Purpose
//! I wrote these types to learn about the data structures themselves, but also concepts such as
//! manual allocation, pointer arithmetic, iterators and invalidation.
//!
//! # Method
//! Storage is managed by hand wherever the point of the exercise is the storage. Bookkeeping that
//! isn't the point (like the table of chunks behind [`ChunkedDeque`](chunked::ChunkedDeque)) uses
//! ordinary owned containers.

pub mod chunked;

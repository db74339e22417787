//! This crate is my attempt at writing a double-ended queue out of fixed-size chunks, without
//! reaching for [`VecDeque`](std::collections::VecDeque) to hold the elements.
//!
//! # Purpose
//! This repo / crate is a learning project, with no expectation for it to be used in production.
//! A chunked deque is a nice step up from a plain growable array: elements never move when the
//! collection grows, both ends accept insertions in amortized constant time and any element can
//! still be found by index with a little arithmetic.
//!
//! # Method
//! Element storage is allocated by hand, one chunk at a time, through [`std::alloc`]. The table
//! of chunks itself is just a [`Vec`] of owned chunk handles, because juggling a raw table of
//! pointers on top of raw chunks is where the bugs used to live.
//!
//! # Error Handling
//! Like most collections, the common methods panic when something goes badly wrong (running out
//! of memory, indexing out of bounds). Every method that can fail also has a `try_` counterpart
//! returning a strongly typed [`Result`], using enums for static dispatch rather than boxed
//! errors. Failed growth never leaves the deque half-modified.
//!
//! # Logging
//! Structural changes to the chunk table are reported through the [`log`] facade at `trace`
//! level. Nothing is logged per element.
//!
//! # Dependencies
//! This crate depends on some derive macros for error types, because they remove the need for
//! some very repetitive programming, and on `log`.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;

pub(crate) mod util;

//! This crate provides composable mutable views over ordered, indexable
//! sequences.
//!
//! A view is a lightweight, non-owning adapter that exposes the same
//! read/write/insert/remove contract as a concrete sequence (the [`List`]
//! trait) but computes its elements on demand by indirecting through one
//! or more underlying sources, translating indices or values on the way.
//! Views nest arbitrarily while preserving full mutation semantics back to
//! the original storage.
//!
//! Here is a quick example showing how views route mutations:
//!
//! ```
//! use list_view::{slice, List};
//!
//! let mut items = vec![1, 2, 3, 4];
//!
//! let mut window = slice(&mut items, 2, 2)?; // view of [3, 4]
//!
//! window.insert(1, 5)?; // insert through the view
//! assert_eq!(window.to_vec(), vec![3, 5, 4]);
//!
//! // the write landed in the backing storage
//! assert_eq!(items, vec![1, 2, 3, 5, 4]);
//! # Ok::<(), list_view::Error>(())
//! ```
//!
//! # Views
//!
//! Every view borrows its source(s) and recomputes its length and index
//! mapping on each call, so it always reflects the sources as of the
//! moment of the call:
//!
//! - [`slice`]: a window `offset..offset + length`; mutations through it
//!   move its length, never its offset;
//! - [`step`]: every n-th element; writable, never resizable;
//! - [`select`] / [`select_mut`]: value projection, one-way or through a
//!   forward/inverse conversion pair;
//! - [`concat`]: several sources presented back to back, with
//!   deterministic routing of seam insertions;
//! - [`reverse`]: the source backwards, fully mutable;
//! - [`as_read_only`]: a terminal wrapper rejecting every mutation.
//!
//! Composition is just nesting:
//!
//! ```text
//!  reverse ── slice ── concat ──┬── Vec [1, 2]
//!                               └── Vec [3, 4, 5]
//! ```
//!
//! ```
//! use list_view::{concat, reverse, slice, List};
//!
//! let mut a = vec![1, 2];
//! let mut b = vec![3, 4, 5];
//! let joined = concat(vec![&mut a, &mut b]);
//! let window = slice(joined, 1, 3)?; // [2, 3, 4]
//! let mut view = reverse(window); // [4, 3, 2]
//!
//! view.set(0, 9)?;
//! assert_eq!(b, vec![3, 9, 5]);
//! # Ok::<(), list_view::Error>(())
//! ```
//!
//! # Capabilities
//!
//! What a list allows is a pair of independent flags, read-only and
//! fixed-size, that views inspect and propagate. A `Vec<T>` allows
//! everything; an array allows writes but not resizing; anything behind a
//! shared borrow allows nothing. Every operation reports a capability
//! violation as an [`Error`] instead of panicking, and a rejected mutation
//! leaves the storage untouched. See the [`list`] module docs for the full
//! rules.
//!
//! # Borrowing
//!
//! Views are borrows. While a view of `items` is alive, `items` itself is
//! unusable, and two views cannot mutate one backing sequence at the same
//! time; the single-writer discipline is enforced by the compiler rather
//! than left to convention. Sharing a source *read-only* among several
//! views is fine:
//!
//! ```
//! use list_view::{reverse, step, List};
//!
//! let items = vec![1, 2, 3, 4, 5, 6];
//! let rev = reverse(&items);
//! let strided = step(&items, 2)?;
//! assert_eq!(rev.to_vec(), vec![6, 5, 4, 3, 2, 1]);
//! assert_eq!(strided.to_vec(), vec![1, 3, 5]);
//! # Ok::<(), list_view::Error>(())
//! ```
//!
//! # Algorithms
//!
//! The [`list::algorithms`] module carries the supporting combinators:
//! generated, repeated and zipped read-only sequences, cyclic
//! [`rotate`](list::algorithms::rotate), clamping
//! [`take`](list::algorithms::take)/[`skip`](list::algorithms::skip)
//! windows, forward and backward range copies, and last-match searches.

#[doc(inline)]
pub use list::algorithms::{
    copy_backward, copy_to, copy_within, copy_within_backward, empty, generate, last,
    last_index_of, last_index_where, last_or_default, once, repeat, repeat_item, rotate,
    sequence_equal, skip, take, zip, zip3, Empty, Generate, Repeat, RepeatItem, Rotate, Zip, Zip3,
};
#[doc(inline)]
pub use list::{
    as_read_only, concat, reverse, select, select_indexed, select_mut, slice, step, Concat, Error,
    Iter, List, ReadOnly, Result, Reverse, Select, SelectIndexed, SelectMut, Slice, Step,
};

pub mod list;

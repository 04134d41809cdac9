//! The windowed [`Slice`] view.

use crate::list::{check_window, Error, List, Result};

/// A mutable window `offset..offset + length` over a source list.
///
/// Reads and writes at window index `i` land at source index `offset + i`.
/// Structural mutations through the slice move the window's *length* with
/// them: inserting grows the window, removing shrinks it. `offset`
/// never changes. Elements of the source outside the window are untouched
/// by every slice operation, including [`clear`](List::clear).
///
/// Created by [`slice`] (validating) or by the clamping constructors
/// [`take`] and [`skip`].
///
/// [`take`]: crate::list::algorithms::take
/// [`skip`]: crate::list::algorithms::skip
pub struct Slice<S> {
    source: S,
    offset: usize,
    length: usize,
}

/// Creates a window of `length` elements of `source` starting at `offset`.
///
/// # Errors
///
/// [`Error::WindowOutOfBounds`] if `offset + length` exceeds the source
/// length at construction time. The window is never silently truncated.
///
/// # Examples
///
/// ```
/// use list_view::{slice, List};
///
/// let mut items = vec![1, 2, 3, 4];
/// let mut window = slice(&mut items, 2, 2)?;
/// assert_eq!(window.to_vec(), vec![3, 4]);
///
/// window.insert(1, 5)?;
/// assert_eq!(window.to_vec(), vec![3, 5, 4]);
/// assert_eq!(items, vec![1, 2, 3, 5, 4]);
/// # Ok::<(), list_view::Error>(())
/// ```
pub fn slice<S: List>(source: S, offset: usize, length: usize) -> Result<Slice<S>> {
    check_window(offset, length, source.len())?;
    Ok(Slice {
        source,
        offset,
        length,
    })
}

impl<S: List> Slice<S> {
    /// Window constructor for callers that have already clamped or
    /// validated the bounds.
    pub(crate) fn with_window(source: S, offset: usize, length: usize) -> Self {
        debug_assert!(check_window(offset, length, source.len()).is_ok());
        Slice {
            source,
            offset,
            length,
        }
    }

    /// The fixed source index of the first window element.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    fn check(&self, index: usize) -> Result<()> {
        if index < self.length {
            Ok(())
        } else {
            Err(Error::IndexOutOfBounds {
                index,
                len: self.length,
            })
        }
    }
}

impl<S: List> List for Slice<S> {
    type Item = S::Item;

    #[inline]
    fn len(&self) -> usize {
        self.length
    }

    #[inline]
    fn is_read_only(&self) -> bool {
        self.source.is_read_only()
    }

    #[inline]
    fn is_fixed_size(&self) -> bool {
        self.source.is_fixed_size()
    }

    fn get(&self, index: usize) -> Result<S::Item> {
        self.check(index)?;
        self.source.get(self.offset + index)
    }

    fn set(&mut self, index: usize, item: S::Item) -> Result<()> {
        self.check(index)?;
        self.source.set(self.offset + index, item)
    }

    fn insert(&mut self, index: usize, item: S::Item) -> Result<()> {
        if index > self.length {
            return Err(Error::IndexOutOfBounds {
                index,
                len: self.length,
            });
        }
        self.source.insert(self.offset + index, item)?;
        self.length += 1;
        Ok(())
    }

    fn remove_at(&mut self, index: usize) -> Result<S::Item> {
        self.check(index)?;
        let item = self.source.remove_at(self.offset + index)?;
        self.length -= 1;
        Ok(item)
    }

    fn clear(&mut self) -> Result<()> {
        while self.length > 0 {
            self.source.remove_at(self.offset)?;
            self.length -= 1;
        }
        Ok(())
    }

    fn push(&mut self, item: S::Item) -> Result<()> {
        let end = self.length;
        self.insert(end, item)
    }
}

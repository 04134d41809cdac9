use thiserror::Error;

/// A specialized result type for list operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The ways a list operation can fail.
///
/// Every failure is reported at the point of detection, and a rejected
/// mutation leaves the underlying storage unchanged.
///
/// A soft "not found" (e.g. [`List::remove`] of an absent element) is not an
/// error; it is reported as `Ok(false)`. Only operations whose contract
/// requires a match (e.g. [`last`]) fail with [`Error::NoMatch`].
///
/// [`List::remove`]: crate::List::remove
/// [`last`]: crate::list::algorithms::last
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// An index does not name an element (or, for `insert`, a gap) of the
    /// list it was applied to.
    #[error("index {index} is out of bounds of a list of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// A window `offset..offset + length` does not fit in the list it was
    /// applied to. Raised at slice construction and by range copies.
    #[error("window of {length} starting at {offset} exceeds list length {len}")]
    WindowOutOfBounds {
        offset: usize,
        length: usize,
        len: usize,
    },

    /// A stride of zero was requested; stride views require `step >= 1`.
    #[error("step must be at least 1")]
    InvalidStep,

    /// The operation is not available on the target list: it is read-only,
    /// fixed-size, a stride view, or a projection without an inverse.
    #[error("`{0}` is not supported by this list")]
    NotSupported(&'static str),

    /// No element satisfied the predicate of an operation that requires a
    /// match.
    #[error("no element matched")]
    NoMatch,
}

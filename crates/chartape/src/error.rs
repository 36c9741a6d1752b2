use thiserror::Error;

/// Failures surfaced by [`index_to`](crate::index_to) and
/// [`render`](crate::render()).
///
/// Both variants are out-of-range conditions; there is no "invalid input"
/// kind. Malformed templates in particular are tolerated, not reported (see
/// [`render`](crate::render())).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The buffer holds no character at the requested logical index.
    #[error("no character at index {0}")]
    CharOutOfRange(isize),
    /// A placeholder resolved to an index at or past the end of the argument
    /// list.
    #[error("too many format items")]
    TooManyFormatItems,
}

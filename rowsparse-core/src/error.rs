//! Error types for sparse matrix operations

/// Errors raised when a matrix operation's contract is violated
///
/// Every variant is a caller-side contract violation detected before any
/// operand is modified. None of them are transient.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SparseError {
    /// Operand dimensions are incompatible for the requested operation
    ShapeMismatch,
    /// Row or column index is not smaller than the matrix dimension
    OutOfRange,
    /// A square-only operation was called on a non-square matrix
    NonSquareOperation,
    /// Text import was requested with an unrecognized format tag
    UnsupportedFormat,
    /// Malformed textual matrix literal
    ParseError,
}

impl core::fmt::Display for SparseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            SparseError::ShapeMismatch => "Operand shapes do not match",
            SparseError::OutOfRange => "Index out of range",
            SparseError::NonSquareOperation => "Operation requires a square matrix",
            SparseError::UnsupportedFormat => "Unsupported matrix string format",
            SparseError::ParseError => "Malformed matrix literal",
        };
        write!(f, "{msg}")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SparseError {}

/// Result type for sparse matrix operations
pub type Result<T> = core::result::Result<T, SparseError>;

/// Fail with [`SparseError::OutOfRange`] unless `index < bound`
pub const fn check_index(index: usize, bound: usize) -> Result<()> {
    if index >= bound {
        return Err(SparseError::OutOfRange);
    }
    Ok(())
}

/// Fail with [`SparseError::ShapeMismatch`] unless both dimensions agree
pub const fn check_dimensions(lhs: usize, rhs: usize) -> Result<()> {
    if lhs != rhs {
        return Err(SparseError::ShapeMismatch);
    }
    Ok(())
}

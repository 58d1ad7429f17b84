//! Matrix element type constraints
//!
//! This module defines the trait that constrains what types can be
//! stored as sparse matrix elements.

use core::fmt::Debug;
use core::ops::{Add, AddAssign, Mul, Sub};

/// Trait for types that can be stored as matrix elements
///
/// All arithmetic performed by a sparse matrix is expressed through the
/// element type's own operators and identities. Element types must be:
/// - Copy: Can be copied without allocation
/// - PartialOrd: Magnitudes can be compared
/// - Add/Sub/Mul: Closed under the ring operations used by the operators
pub trait MatrixElement:
    Copy
    + PartialEq
    + PartialOrd
    + Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + AddAssign
{
    /// Additive identity, the value of every implicit entry
    fn zero() -> Self;

    /// Multiplicative identity
    fn one() -> Self;

    /// Absolute value in the element type's own arithmetic
    fn magnitude(self) -> Self;

    /// Convert from f64 for generic construction
    ///
    /// Used by text import, which reads every token as a floating-point
    /// number before narrowing it to the element type.
    fn from_f64(value: f64) -> Self;

    /// Convert to f64 for generic operations
    fn to_f64(self) -> f64;

    /// Whether this value equals the additive identity
    fn is_zero(self) -> bool {
        self == Self::zero()
    }
}

// Implement MatrixElement for standard numeric types

impl MatrixElement for f32 {
    fn zero() -> Self {
        0.0
    }

    fn one() -> Self {
        1.0
    }

    fn magnitude(self) -> Self {
        if self < 0.0 {
            -self
        } else {
            self
        }
    }

    fn from_f64(value: f64) -> Self {
        value as f32
    }

    fn to_f64(self) -> f64 {
        self as f64
    }
}

impl MatrixElement for f64 {
    fn zero() -> Self {
        0.0
    }

    fn one() -> Self {
        1.0
    }

    fn magnitude(self) -> Self {
        if self < 0.0 {
            -self
        } else {
            self
        }
    }

    fn from_f64(value: f64) -> Self {
        value
    }

    fn to_f64(self) -> f64 {
        self
    }
}

impl MatrixElement for i32 {
    fn zero() -> Self {
        0
    }

    fn one() -> Self {
        1
    }

    fn magnitude(self) -> Self {
        self.wrapping_abs()
    }

    fn from_f64(value: f64) -> Self {
        value as i32
    }

    fn to_f64(self) -> f64 {
        self as f64
    }
}

impl MatrixElement for i64 {
    fn zero() -> Self {
        0
    }

    fn one() -> Self {
        1
    }

    fn magnitude(self) -> Self {
        self.wrapping_abs()
    }

    fn from_f64(value: f64) -> Self {
        value as i64
    }

    fn to_f64(self) -> f64 {
        self as f64
    }
}

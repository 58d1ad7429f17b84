//! Textual matrix literals
//!
//! This module provides the format tags understood by text import and the
//! pure parsing functions behind them. Parsing produces dense rows; turning
//! them into sparse storage is left to the matrix implementation.

pub mod parsing;

pub use parsing::parse_dense_literal;

use crate::error::SparseError;
use core::str::FromStr;

/// Textual matrix formats accepted by text import
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixStringFormat {
    /// Mathematica list-of-lists, e.g. `{{1,2},{3,4}}`
    Mathematica,
}

impl MatrixStringFormat {
    /// Canonical tag for this format
    pub const fn tag(&self) -> &'static str {
        match self {
            MatrixStringFormat::Mathematica => "mathematica",
        }
    }
}

impl FromStr for MatrixStringFormat {
    type Err = SparseError;

    /// Look up a format by tag (case-insensitive)
    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        if tag.trim().eq_ignore_ascii_case("mathematica") {
            Ok(MatrixStringFormat::Mathematica)
        } else {
            Err(SparseError::UnsupportedFormat)
        }
    }
}

impl core::fmt::Display for MatrixStringFormat {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MatrixStringFormat::Mathematica => write!(f, "Mathematica"),
        }
    }
}

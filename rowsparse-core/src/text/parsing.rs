//! Parsing utilities for textual matrix literals
//!
//! This module provides pure parsing functions with no I/O dependencies.

use alloc::vec::Vec;

use crate::error::{Result, SparseError};

/// Parse a Mathematica-style literal `{{a,b,...},{c,d,...},...}` into dense rows
///
/// Whitespace around braces, commas and numbers is ignored. Every row must
/// have the same number of values and every value must parse as a
/// floating-point number; anything else is a [`SparseError::ParseError`].
pub fn parse_dense_literal(text: &str) -> Result<Vec<Vec<f64>>> {
    let body = text
        .trim()
        .strip_prefix('{')
        .and_then(|s| s.strip_suffix('}'))
        .ok_or(SparseError::ParseError)?;

    let mut rows: Vec<Vec<f64>> = Vec::new();
    let mut rest = body.trim();

    loop {
        let inner = rest.strip_prefix('{').ok_or(SparseError::ParseError)?;
        let close = inner.find('}').ok_or(SparseError::ParseError)?;

        let row = parse_row(&inner[..close])?;
        if let Some(first) = rows.first() {
            if first.len() != row.len() {
                return Err(SparseError::ParseError);
            }
        }
        rows.push(row);

        rest = inner[close + 1..].trim_start();
        if rest.is_empty() {
            break;
        }
        rest = rest
            .strip_prefix(',')
            .ok_or(SparseError::ParseError)?
            .trim_start();
    }

    Ok(rows)
}

/// Parse one comma-separated row body (braces already removed)
fn parse_row(row: &str) -> Result<Vec<f64>> {
    row.split(',').map(parse_scalar).collect()
}

/// Parse a single number
///
/// Braces are never valid inside a number, so a stray one signals bad nesting.
fn parse_scalar(token: &str) -> Result<f64> {
    let token = token.trim();
    if token.is_empty() || token.contains(['{', '}']) {
        return Err(SparseError::ParseError);
    }

    token.parse::<f64>().map_err(|_| SparseError::ParseError)
}

// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Parsing of the comma-separated text form used on the command line.
//!
//! - Vectors: `"10,5,7"`.
//! - Matrices: one row per line, or rows separated by `;`:
//!   `"0,1,0\n2,0,0"` or `"0,1,0; 2,0,0"`.
//!
//! Whitespace around numbers is ignored and blank rows are skipped.

use crate::{StateError, Units};

/// Parses a comma-separated vector of unit counts.
///
/// # Examples
/// ```
/// use resource_model::parse_vector;
///
/// assert_eq!(parse_vector("10, 5,7").unwrap(), vec![10, 5, 7]);
/// assert!(parse_vector("10,-1").is_err());
/// ```
pub fn parse_vector(s: &str) -> Result<Vec<Units>, StateError> {
    let s = s.trim();
    if s.is_empty() {
        return Ok(Vec::new());
    }

    s.split(',')
        .enumerate()
        .map(|(i, field)| {
            let field = field.trim();
            field.parse::<Units>().map_err(|_| {
                StateError::Parse(format!(
                    "entry {i} of '{s}' is not a non-negative integer: '{field}'"
                ))
            })
        })
        .collect()
}

/// Parses a matrix: rows separated by newlines or `;`, entries by `,`.
///
/// Row lengths are not checked here; [`crate::ResourceState::new`] does
/// that against the resource count.
pub fn parse_matrix(s: &str) -> Result<Vec<Vec<Units>>, StateError> {
    s.split(['\n', ';'])
        .map(str::trim)
        .filter(|row| !row.is_empty())
        .map(parse_vector)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_vector() {
        assert_eq!(parse_vector("10,5,7").unwrap(), vec![10, 5, 7]);
        assert_eq!(parse_vector("  3 , 3,2 ").unwrap(), vec![3, 3, 2]);
        assert_eq!(parse_vector("").unwrap(), Vec::<Units>::new());
    }

    #[test]
    fn test_parse_vector_invalid() {
        assert!(parse_vector("1,,2").is_err());
        assert!(parse_vector("a,b").is_err());
        assert!(parse_vector("-1").is_err());
        assert!(parse_vector("1.5").is_err());
    }

    #[test]
    fn test_parse_matrix_newlines() {
        let m = parse_matrix("0,1,0\n2,0,0\n3,0,2").unwrap();
        assert_eq!(m, vec![vec![0, 1, 0], vec![2, 0, 0], vec![3, 0, 2]]);
    }

    #[test]
    fn test_parse_matrix_semicolons_and_blank_rows() {
        let m = parse_matrix("7,5,3; 3,2,2;\n\n9,0,2\n").unwrap();
        assert_eq!(m, vec![vec![7, 5, 3], vec![3, 2, 2], vec![9, 0, 2]]);
    }

    #[test]
    fn test_parse_matrix_error_names_entry() {
        let err = parse_matrix("1,2\n3,x").unwrap_err();
        assert!(err.to_string().contains("'x'"));
    }
}

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use sha2::{Digest, Sha256};
use thiserror::Error;

/// Number of rows and columns in a DNA grid.
pub const GRID_SIZE: usize = 6;

// Rows must be uppercase and drawn from the four-letter alphabet.
static ROW_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new("^[ACGT]{6}$").expect("row pattern is valid"));

/// A validated 6x6 grid of DNA symbols.
///
/// Construction goes through [`DnaGrid::parse`], so any value of this type is
/// known to be square, sized, and drawn from the A/C/G/T alphabet. The
/// scanning and classification functions assume exactly that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DnaGrid(Vec<String>);

impl DnaGrid {
    /// Validate raw rows into a grid: exactly 6 rows of exactly 6 symbols,
    /// uppercase A/C/G/T only.
    pub fn parse<I, S>(rows: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let rows: Vec<String> = rows.into_iter().map(Into::into).collect();

        if rows.len() != GRID_SIZE {
            return Err(ValidationError::WrongRowCount(rows.len()));
        }
        for (index, row) in rows.iter().enumerate() {
            if row.chars().count() != GRID_SIZE {
                return Err(ValidationError::WrongRowLength {
                    row: index,
                    length: row.chars().count(),
                });
            }
            if !ROW_PATTERN.is_match(row) {
                return Err(ValidationError::InvalidSymbols {
                    row: index,
                    value: row.clone(),
                });
            }
        }

        Ok(Self(rows))
    }

    pub fn rows(&self) -> &[String] {
        &self.0
    }

    pub fn into_rows(self) -> Vec<String> {
        self.0
    }

    /// Hex-encoded SHA-256 fingerprint of the grid contents.
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        for row in &self.0 {
            hasher.update(row.as_bytes());
        }
        hex::encode(hasher.finalize())
    }
}

impl fmt::Display for DnaGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("/"))
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("invalid DNA format: expected 6 rows, got {0}")]
    WrongRowCount(usize),

    #[error("row {row} must be exactly 6 characters long, got {length}")]
    WrongRowLength { row: usize, length: usize },

    #[error("row {row} contains symbols outside uppercase A/C/G/T: {value:?}")]
    InvalidSymbols { row: usize, value: String },
}

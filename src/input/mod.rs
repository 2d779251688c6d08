//! Parsing and validation of user supplied arrays
//!
//! The step generator trusts its input; everything that comes from a user
//! passes through [`parse_values`] or [`random_values_with`] first, which enforce
//! the [`MAX_VALUES`] bound.

mod random;

pub use random::{random_values_with, RANDOM_VALUE_RANGE};

use thiserror::Error;

/// Largest array the visualization accepts (a five-level tree)
pub const MAX_VALUES: usize = 31;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("please enter at least one number")]
    Empty,

    #[error("'{token}' is not a valid integer")]
    InvalidNumber { token: String },

    #[error("too many values: {count} (at most {max})")]
    TooManyValues { count: usize, max: usize },

    #[error("random count must be between 1 and {max}, got {count}")]
    InvalidCount { count: usize, max: usize },

    #[error("pacing must be a positive number of seconds, got {0}")]
    InvalidPacing(String),
}

/// Parse whitespace- or comma-separated integers
pub fn parse_values(text: &str) -> Result<Vec<i32>, InputError> {
    let values = text
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(|token| {
            token.parse::<i32>().map_err(|_| InputError::InvalidNumber {
                token: token.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    validate_len(values.len())?;
    Ok(values)
}

/// Check that `count` values fit the visualization
pub fn validate_len(count: usize) -> Result<(), InputError> {
    if count == 0 {
        return Err(InputError::Empty);
    }
    if count > MAX_VALUES {
        return Err(InputError::TooManyValues {
            count,
            max: MAX_VALUES,
        });
    }
    Ok(())
}

/// Render values the way [`parse_values`] reads them
pub fn format_values(values: &[i32]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

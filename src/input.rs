//! User input parsing and validation.
//!
//! Input arrives as comma-separated integers. Every algorithm bounds how many
//! numbers it accepts and their range so that animations stay legible; binary
//! search additionally needs ascending input. Generators themselves accept
//! anything, so this module is the only gate.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::algorithms::Algorithm;
use crate::error::{VizError, VizResult};
use crate::step::ArrayElement;

/// Smallest value a configured limit may admit.
pub const VALUE_FLOOR: i64 = -1_000_000;

/// Largest value a configured limit may admit.
pub const VALUE_CEILING: i64 = 1_000_000;

/// Count and value bounds for one algorithm's input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct InputLimits {
    /// Fewest numbers accepted.
    #[validate(range(min = 1, max = 50))]
    pub min_len: usize,
    /// Most numbers accepted.
    #[validate(range(min = 1, max = 50))]
    pub max_len: usize,
    /// Smallest value accepted.
    #[validate(range(min = VALUE_FLOOR, max = VALUE_CEILING))]
    pub min_value: i64,
    /// Largest value accepted.
    #[validate(range(min = VALUE_FLOOR, max = VALUE_CEILING))]
    pub max_value: i64,
}

impl InputLimits {
    /// Create limits.
    #[must_use]
    pub const fn new(min_len: usize, max_len: usize, min_value: i64, max_value: i64) -> Self {
        Self {
            min_len,
            max_len,
            min_value,
            max_value,
        }
    }

    /// Default limits for `algorithm`.
    ///
    /// Quadratic sorts stay at 15 elements, the divide-and-conquer and
    /// distribution sorts go to 20. Radix sort uses 10..=999 so that passes
    /// over two and three digits are visible.
    #[must_use]
    pub const fn for_algorithm(algorithm: Algorithm) -> Self {
        match algorithm {
            Algorithm::Bubble | Algorithm::Insertion | Algorithm::Selection => Self::new(2, 15, 1, 100),
            Algorithm::Merge
            | Algorithm::Quick
            | Algorithm::Heap
            | Algorithm::Bucket
            | Algorithm::LinearSearch
            | Algorithm::BinarySearch => Self::new(2, 20, 1, 100),
            Algorithm::Radix => Self::new(2, 15, 10, 999),
        }
    }

    /// Check that the bounds themselves make sense.
    ///
    /// # Errors
    ///
    /// Returns `VizError::Config` if a lower bound exceeds its upper bound.
    pub fn check_consistent(&self) -> VizResult<()> {
        if self.min_len > self.max_len {
            return Err(VizError::config(format!(
                "min_len {} exceeds max_len {}",
                self.min_len, self.max_len
            )));
        }
        if self.min_value > self.max_value {
            return Err(VizError::config(format!(
                "min_value {} exceeds max_value {}",
                self.min_value, self.max_value
            )));
        }
        Ok(())
    }

    /// Check `values` against these limits.
    ///
    /// # Errors
    ///
    /// Returns the first count or range violation found.
    pub fn check(&self, values: &[i64]) -> VizResult<()> {
        let got = values.len();
        if got < self.min_len {
            return Err(VizError::TooFewElements {
                min: self.min_len,
                got,
            });
        }
        if got > self.max_len {
            return Err(VizError::TooManyElements {
                max: self.max_len,
                got,
            });
        }
        if let Some(&value) = values
            .iter()
            .find(|&&v| v < self.min_value || v > self.max_value)
        {
            return Err(VizError::ValueOutOfRange {
                value,
                min: self.min_value,
                max: self.max_value,
            });
        }
        Ok(())
    }
}

/// Limits for tree traversal input: up to five full levels.
pub const TREE_LIMITS: InputLimits = InputLimits::new(1, 31, 1, 100);

/// Largest graph accepted for traversal.
pub const MAX_GRAPH_NODES: usize = 20;

/// Check a graph size against [`MAX_GRAPH_NODES`].
///
/// # Errors
///
/// Returns `VizError::Graph` for an empty or oversized graph.
pub fn check_graph_size(nodes: usize) -> VizResult<()> {
    if nodes == 0 || nodes > MAX_GRAPH_NODES {
        return Err(VizError::graph(format!(
            "graph must have between 1 and {MAX_GRAPH_NODES} nodes (got {nodes})"
        )));
    }
    Ok(())
}

/// Parse comma-separated integers.
///
/// Whitespace around numbers and empty tokens (such as a trailing comma) are
/// ignored.
///
/// # Errors
///
/// Returns `VizError::Parse` for the first token that is not an integer.
pub fn parse_values(text: &str) -> VizResult<Vec<i64>> {
    text.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(position, token)| {
            token.parse::<i64>().map_err(|_| VizError::Parse {
                token: token.to_string(),
                position,
            })
        })
        .collect()
}

/// Parse a single search target.
///
/// # Errors
///
/// Returns `VizError::Parse` if `text` is not an integer.
pub fn parse_target(text: &str) -> VizResult<i64> {
    let token = text.trim();
    token.parse().map_err(|_| VizError::Parse {
        token: token.to_string(),
        position: 0,
    })
}

/// Parse an edge list such as `"0-1, 1-2, 2-0"`.
///
/// # Errors
///
/// Returns `VizError::Parse` for a token that is not `a-b` with two
/// non-negative integers.
pub fn parse_edges(text: &str) -> VizResult<Vec<(usize, usize)>> {
    text.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(position, token)| -> VizResult<(usize, usize)> {
            let parse_error = || VizError::Parse {
                token: token.to_string(),
                position,
            };
            let (a, b) = token.split_once('-').ok_or_else(parse_error)?;
            let a: usize = a.trim().parse().map_err(|_| parse_error())?;
            let b: usize = b.trim().parse().map_err(|_| parse_error())?;
            Ok((a, b))
        })
        .collect()
}

/// Validate `values` for `algorithm` under `limits`.
///
/// # Errors
///
/// Returns a count, range, or ordering error.
pub fn validate_for(algorithm: Algorithm, values: &[i64], limits: &InputLimits) -> VizResult<()> {
    limits.check(values)?;
    if algorithm == Algorithm::BinarySearch {
        if let Some(pair) = values.windows(2).find(|pair| pair[0] > pair[1]) {
            return Err(VizError::UnsortedInput {
                previous: pair[0],
                next: pair[1],
            });
        }
    }
    Ok(())
}

/// Wrap values as elements with ids `e0`, `e1`, ... in input order.
#[must_use]
pub fn elements_from_values(values: &[i64]) -> Vec<ArrayElement> {
    values
        .iter()
        .enumerate()
        .map(|(i, &value)| ArrayElement::new(format!("e{i}"), value))
        .collect()
}

/// Parse, validate and wrap user input in one go.
///
/// # Errors
///
/// Returns any parse or validation error.
pub fn prepare(algorithm: Algorithm, text: &str, limits: &InputLimits) -> VizResult<Vec<ArrayElement>> {
    let values = parse_values(text)?;
    validate_for(algorithm, &values, limits)?;
    Ok(elements_from_values(&values))
}

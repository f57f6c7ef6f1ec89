//! Step generators for every visualized algorithm.
//!
//! Each generator is a pure function from an input slice to a `Vec<Step>`:
//!
//! 1. The first step is the unmodified input.
//! 2. Every comparison, swap, pointer move or bucket move emits a step.
//! 3. The last step marks every index sorted (searches: found or not found).
//!
//! Generators never fail. Empty input yields no steps; a single element
//! yields one already-sorted step.
//!
//! # Algorithms
//!
//! - [`bubble`] - adjacent exchange with early exit
//! - [`insertion`] - key insertion by adjacent exchange
//! - [`selection`] - running minimum, one swap per pass
//! - [`merge`] - top-down, left-biased merge
//! - [`quick`] - Lomuto partition, last element as pivot
//! - [`heap`] - max-heap build and sift-down
//! - [`bucket`] - value-range buckets, insertion sort inside each
//! - [`radix`] - LSD base-10 digit passes
//! - [`search`] - linear and binary search
//! - [`traversal`] - tree and graph traversals

pub mod bubble;
pub mod bucket;
pub mod heap;
pub mod insertion;
pub mod merge;
pub mod quick;
pub mod radix;
pub mod search;
pub mod selection;
pub mod traversal;

pub use bubble::bubble_sort_steps;
pub use bucket::bucket_sort_steps;
pub use heap::heap_sort_steps;
pub use insertion::insertion_sort_steps;
pub use merge::merge_sort_steps;
pub use quick::quick_sort_steps;
pub use radix::radix_sort_steps;
pub use search::{binary_search_steps, linear_search_steps};
pub use selection::selection_sort_steps;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{VizError, VizResult};
use crate::step::{all_indices, ArrayElement, Step};

/// Every algorithm with an array step generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// Bubble sort.
    Bubble,
    /// Insertion sort.
    Insertion,
    /// Selection sort.
    Selection,
    /// Merge sort.
    Merge,
    /// Quick sort.
    Quick,
    /// Heap sort.
    Heap,
    /// Bucket sort.
    Bucket,
    /// Radix sort.
    Radix,
    /// Linear search.
    LinearSearch,
    /// Binary search.
    BinarySearch,
}

impl Algorithm {
    /// All algorithms in menu order.
    pub const ALL: [Self; 10] = [
        Self::Bubble,
        Self::Insertion,
        Self::Selection,
        Self::Merge,
        Self::Quick,
        Self::Heap,
        Self::Bucket,
        Self::Radix,
        Self::LinearSearch,
        Self::BinarySearch,
    ];

    /// Sorting algorithms only.
    pub const SORTS: [Self; 8] = [
        Self::Bubble,
        Self::Insertion,
        Self::Selection,
        Self::Merge,
        Self::Quick,
        Self::Heap,
        Self::Bucket,
        Self::Radix,
    ];

    /// Short name used on the command line and in configuration.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Bubble => "bubble",
            Self::Insertion => "insertion",
            Self::Selection => "selection",
            Self::Merge => "merge",
            Self::Quick => "quick",
            Self::Heap => "heap",
            Self::Bucket => "bucket",
            Self::Radix => "radix",
            Self::LinearSearch => "linear_search",
            Self::BinarySearch => "binary_search",
        }
    }

    /// Whether this algorithm needs a search target.
    #[must_use]
    pub const fn is_search(self) -> bool {
        matches!(self, Self::LinearSearch | Self::BinarySearch)
    }

    /// Generate the full step sequence.
    ///
    /// `target` is required for searches and ignored for sorts.
    ///
    /// # Errors
    ///
    /// Returns `VizError::MissingTarget` if a search is requested without a
    /// target.
    pub fn steps(self, input: &[ArrayElement], target: Option<i64>) -> VizResult<Vec<Step>> {
        let steps = match self {
            Self::Bubble => bubble_sort_steps(input),
            Self::Insertion => insertion_sort_steps(input),
            Self::Selection => selection_sort_steps(input),
            Self::Merge => merge_sort_steps(input),
            Self::Quick => quick_sort_steps(input),
            Self::Heap => heap_sort_steps(input),
            Self::Bucket => bucket_sort_steps(input),
            Self::Radix => radix_sort_steps(input),
            Self::LinearSearch => {
                let target = target.ok_or_else(|| VizError::MissingTarget(self.to_string()))?;
                linear_search_steps(input, target)
            }
            Self::BinarySearch => {
                let target = target.ok_or_else(|| VizError::MissingTarget(self.to_string()))?;
                binary_search_steps(input, target)
            }
        };
        tracing::debug!(algorithm = self.slug(), len = input.len(), steps = steps.len(), "generated steps");
        Ok(steps)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Algorithm {
    type Err = VizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        let name = normalized.strip_suffix("_sort").unwrap_or(&normalized);
        match name {
            "bubble" => Ok(Self::Bubble),
            "insertion" => Ok(Self::Insertion),
            "selection" => Ok(Self::Selection),
            "merge" => Ok(Self::Merge),
            "quick" => Ok(Self::Quick),
            "heap" => Ok(Self::Heap),
            "bucket" => Ok(Self::Bucket),
            "radix" => Ok(Self::Radix),
            "linear" | "linear_search" => Ok(Self::LinearSearch),
            "binary" | "binary_search" => Ok(Self::BinarySearch),
            _ => Err(VizError::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// Short-circuit for inputs with nothing to sort.
///
/// Returns `Some(steps)` for length 0 (no steps) and length 1 (one sorted
/// step), `None` otherwise.
pub(crate) fn trivial_steps(input: &[ArrayElement]) -> Option<Vec<Step>> {
    match input.len() {
        0 => Some(Vec::new()),
        1 => Some(vec![Step::snapshot(
            input,
            "An array with a single element is already sorted",
        )
        .sorted([0])]),
        _ => None,
    }
}

/// The closing "everything sorted" frame shared by all sorts.
pub(crate) fn finished(array: &[ArrayElement]) -> Step {
    Step::snapshot(array, "Array is sorted").sorted(all_indices(array.len()))
}


#[cfg(test)]
mod tests {
    use super::test_support::elements;
    use super::*;

    #[test]
    fn test_from_str_accepts_variants() {
        assert_eq!("bubble".parse::<Algorithm>().ok(), Some(Algorithm::Bubble));
        assert_eq!("Quick-Sort".parse::<Algorithm>().ok(), Some(Algorithm::Quick));
        assert_eq!("binary".parse::<Algorithm>().ok(), Some(Algorithm::BinarySearch));
        assert_eq!(
            "linear search".parse::<Algorithm>().ok(),
            Some(Algorithm::LinearSearch)
        );
        assert!(matches!(
            "bogo".parse::<Algorithm>(),
            Err(VizError::UnknownAlgorithm(_))
        ));
    }

    #[test]
    fn test_display_roundtrip() {
        for algorithm in Algorithm::ALL {
            let parsed: Algorithm = algorithm.to_string().parse().expect("parse");
            assert_eq!(parsed, algorithm);
        }
    }

    #[test]
    fn test_serde_snake_case() {
        let json = serde_json::to_string(&Algorithm::BinarySearch).expect("serialize");
        assert_eq!(json, "\"binary_search\"");
    }

    #[test]
    fn test_search_requires_target() {
        let input = elements(&[1, 2, 3]);
        let result = Algorithm::LinearSearch.steps(&input, None);
        assert!(matches!(result, Err(VizError::MissingTarget(_))));
        assert!(Algorithm::Bubble.steps(&input, None).is_ok());
    }

    #[test]
    fn test_trivial_inputs_for_every_sort() {
        for algorithm in Algorithm::SORTS {
            let empty = algorithm.steps(&[], None).expect("empty");
            assert!(empty.is_empty(), "{algorithm} should yield no steps");

            let single = algorithm.steps(&elements(&[7]), None).expect("single");
            assert_eq!(single.len(), 1);
            assert_eq!(single[0].sorted, vec![0]);
        }
    }

    #[test]
    fn test_every_sort_sorts() {
        let input = elements(&[42, 7, 19, 7, 88, 3, 56, 21]);
        for algorithm in Algorithm::SORTS {
            let steps = algorithm.steps(&input, None).expect("steps");
            let first = steps.first().expect("first");
            let last = steps.last().expect("last");
            assert_eq!(first.array, input, "{algorithm} first step");
            assert_eq!(last.values(), vec![3, 7, 7, 19, 21, 42, 56, 88], "{algorithm}");
            assert!(last.is_fully_sorted(), "{algorithm} final sorted set");
        }
    }
}

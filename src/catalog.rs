//! Reference data behind the explanation, complexity and pros/cons pages.

use serde::Serialize;

use crate::algorithms::Algorithm;

/// Asymptotic costs of an algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Complexity {
    /// Best-case time.
    pub best: &'static str,
    /// Average-case time.
    pub average: &'static str,
    /// Worst-case time.
    pub worst: &'static str,
    /// Auxiliary space.
    pub space: &'static str,
}

/// Everything the explanation page shows for one algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AlgorithmInfo {
    /// Algorithm this entry describes.
    pub algorithm: Algorithm,
    /// Display name.
    pub name: &'static str,
    /// How it works, in a paragraph.
    pub summary: &'static str,
    /// Time and space costs.
    pub complexity: Complexity,
    /// Whether equal values keep their input order.
    pub stable: bool,
    /// Whether it needs only O(1) extra memory.
    pub in_place: bool,
    /// Strengths.
    pub pros: &'static [&'static str],
    /// Weaknesses.
    pub cons: &'static [&'static str],
    /// Sample input shown when the page opens.
    pub example: &'static [i64],
}

/// Look up the catalog entry for `algorithm`.
#[must_use]
#[allow(clippy::too_many_lines)]
pub const fn info(algorithm: Algorithm) -> AlgorithmInfo {
    match algorithm {
        Algorithm::Bubble => AlgorithmInfo {
            algorithm,
            name: "Bubble Sort",
            summary: "Repeatedly steps through the array, compares adjacent elements and swaps \
                      them when they are out of order. After each pass the largest unsorted \
                      element has bubbled to the end.",
            complexity: Complexity {
                best: "O(n)",
                average: "O(n²)",
                worst: "O(n²)",
                space: "O(1)",
            },
            stable: true,
            in_place: true,
            pros: &[
                "Simple to understand and implement",
                "Detects already sorted input in a single pass",
                "Stable and in-place",
            ],
            cons: &[
                "Quadratic time on average",
                "Performs many more swaps than other simple sorts",
            ],
            example: &[5, 3, 8, 1, 9],
        },
        Algorithm::Insertion => AlgorithmInfo {
            algorithm,
            name: "Insertion Sort",
            summary: "Builds the sorted array one element at a time. Each new key is moved \
                      left past every larger element until it reaches its place in the \
                      sorted prefix.",
            complexity: Complexity {
                best: "O(n)",
                average: "O(n²)",
                worst: "O(n²)",
                space: "O(1)",
            },
            stable: true,
            in_place: true,
            pros: &[
                "Very fast on small or nearly sorted arrays",
                "Stable, in-place and online",
            ],
            cons: &["Quadratic time on reversed or random input"],
            example: &[12, 11, 13, 5, 6],
        },
        Algorithm::Selection => AlgorithmInfo {
            algorithm,
            name: "Selection Sort",
            summary: "Finds the minimum of the unsorted part and swaps it to the front, \
                      growing the sorted prefix by one element per pass.",
            complexity: Complexity {
                best: "O(n²)",
                average: "O(n²)",
                worst: "O(n²)",
                space: "O(1)",
            },
            stable: false,
            in_place: true,
            pros: &[
                "At most n - 1 swaps, useful when writes are expensive",
                "Simple and in-place",
            ],
            cons: &[
                "Always quadratic, even on sorted input",
                "Not stable",
            ],
            example: &[64, 25, 12, 22, 11],
        },
        Algorithm::Merge => AlgorithmInfo {
            algorithm,
            name: "Merge Sort",
            summary: "Divides the array in half, sorts each half recursively and merges the \
                      two sorted halves by repeatedly taking the smaller front element.",
            complexity: Complexity {
                best: "O(n log n)",
                average: "O(n log n)",
                worst: "O(n log n)",
                space: "O(n)",
            },
            stable: true,
            in_place: false,
            pros: &[
                "Guaranteed O(n log n) in every case",
                "Stable",
                "Works well on linked lists and external storage",
            ],
            cons: &[
                "Needs O(n) extra memory",
                "Slower than quick sort on small arrays in practice",
            ],
            example: &[38, 27, 43, 3, 9, 82, 10],
        },
        Algorithm::Quick => AlgorithmInfo {
            algorithm,
            name: "Quick Sort",
            summary: "Chooses the last element as pivot and partitions the array so that \
                      smaller elements come before it and larger ones after it, then sorts \
                      both sides recursively.",
            complexity: Complexity {
                best: "O(n log n)",
                average: "O(n log n)",
                worst: "O(n²)",
                space: "O(log n)",
            },
            stable: false,
            in_place: true,
            pros: &[
                "Fast in practice thanks to good cache behaviour",
                "In-place apart from the recursion stack",
            ],
            cons: &[
                "Quadratic on already sorted input with a last-element pivot",
                "Not stable",
            ],
            example: &[10, 80, 30, 90, 40, 50, 70],
        },
        Algorithm::Heap => AlgorithmInfo {
            algorithm,
            name: "Heap Sort",
            summary: "Turns the array into a max heap, then repeatedly swaps the root (the \
                      maximum) to the end and restores the heap on the remaining prefix.",
            complexity: Complexity {
                best: "O(n log n)",
                average: "O(n log n)",
                worst: "O(n log n)",
                space: "O(1)",
            },
            stable: false,
            in_place: true,
            pros: &[
                "Guaranteed O(n log n) with O(1) extra memory",
                "No quadratic worst case",
            ],
            cons: &[
                "Not stable",
                "Poor cache locality compared to quick sort",
            ],
            example: &[12, 11, 13, 5, 6, 7],
        },
        Algorithm::Bucket => AlgorithmInfo {
            algorithm,
            name: "Bucket Sort",
            summary: "Spreads the elements over buckets that each cover an equal slice of \
                      the value range, insertion-sorts every bucket and concatenates the \
                      buckets in order.",
            complexity: Complexity {
                best: "O(n + k)",
                average: "O(n + k)",
                worst: "O(n²)",
                space: "O(n + k)",
            },
            stable: true,
            in_place: false,
            pros: &[
                "Linear time when values are spread evenly",
                "Buckets can be sorted independently",
            ],
            cons: &[
                "Degrades to insertion sort when values cluster in one bucket",
                "Needs extra memory for the buckets",
            ],
            example: &[29, 25, 3, 49, 9, 37, 21, 43],
        },
        Algorithm::Radix => AlgorithmInfo {
            algorithm,
            name: "Radix Sort",
            summary: "Sorts by one decimal digit at a time, starting with the ones place. \
                      Each pass distributes the elements into ten digit buckets and collects \
                      them back in order, preserving the order from earlier passes.",
            complexity: Complexity {
                best: "O(d·(n + b))",
                average: "O(d·(n + b))",
                worst: "O(d·(n + b))",
                space: "O(n + b)",
            },
            stable: true,
            in_place: false,
            pros: &[
                "No comparisons between elements",
                "Linear in n for a fixed number of digits",
                "Stable",
            ],
            cons: &[
                "Only works on keys that split into digits",
                "Needs extra memory for the buckets",
            ],
            example: &[170, 45, 75, 90, 802, 24, 66],
        },
        Algorithm::LinearSearch => AlgorithmInfo {
            algorithm,
            name: "Linear Search",
            summary: "Checks every element from left to right until it finds the target or \
                      runs out of elements.",
            complexity: Complexity {
                best: "O(1)",
                average: "O(n)",
                worst: "O(n)",
                space: "O(1)",
            },
            stable: true,
            in_place: true,
            pros: &["Works on unsorted data", "Trivial to implement"],
            cons: &["Slow on large arrays"],
            example: &[4, 2, 7, 1, 9, 3],
        },
        Algorithm::BinarySearch => AlgorithmInfo {
            algorithm,
            name: "Binary Search",
            summary: "Compares the target with the middle element of a sorted array and \
                      discards the half that cannot contain it, until the target is found or \
                      the range is empty.",
            complexity: Complexity {
                best: "O(1)",
                average: "O(log n)",
                worst: "O(log n)",
                space: "O(1)",
            },
            stable: true,
            in_place: true,
            pros: &["Logarithmic time", "No extra memory"],
            cons: &["Requires sorted input"],
            example: &[8, 24, 42, 55, 67, 89],
        },
    }
}

/// All catalog entries in menu order.
#[must_use]
pub fn all() -> Vec<AlgorithmInfo> {
    Algorithm::ALL.iter().map(|&a| info(a)).collect()
}

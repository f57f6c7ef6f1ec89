//! Quick sort with the Lomuto partition scheme.
//!
//! The last element of each window is the pivot. A store index `i` trails
//! the scan index `j`: elements not greater than the pivot are swapped to
//! `i`, and the pivot finally lands at `i`, its sorted position.

use super::{finished, trivial_steps};
use crate::step::{ArrayElement, Pointers, Step, StepRecorder};

/// Generate quick sort steps for `input`.
#[must_use]
pub fn quick_sort_steps(input: &[ArrayElement]) -> Vec<Step> {
    if let Some(steps) = trivial_steps(input) {
        return steps;
    }

    let mut array = input.to_vec();
    let mut sorted = Vec::new();
    let mut recorder = StepRecorder::new();
    recorder.push(Step::snapshot(&array, "Initial array"));

    let len = array.len();
    sort_range(&mut array, 0, len, &mut sorted, &mut recorder);

    recorder.push(finished(&array));
    recorder.into_steps()
}

/// Sort the half-open window `lo..hi`.
fn sort_range(
    array: &mut [ArrayElement],
    lo: usize,
    hi: usize,
    sorted: &mut Vec<usize>,
    recorder: &mut StepRecorder,
) {
    match hi.saturating_sub(lo) {
        0 => {}
        1 => {
            sorted.push(lo);
            recorder.push(
                Step::snapshot(
                    array,
                    format!("{} is a single element, already in place", array[lo].value),
                )
                .pointing([lo])
                .sorted(sorted.iter().copied()),
            );
        }
        _ => {
            let p = partition(array, lo, hi, sorted, recorder);
            sorted.push(p);
            recorder.push(
                Step::snapshot(
                    array,
                    format!("Pivot {} is now in its final position", array[p].value),
                )
                .pointing([p])
                .sorted(sorted.iter().copied())
                .pointers(Pointers {
                    pivot: Some(p),
                    ..Pointers::default()
                }),
            );
            sort_range(array, lo, p, sorted, recorder);
            sort_range(array, p + 1, hi, sorted, recorder);
        }
    }
}

/// Lomuto partition of `lo..hi` around `array[hi - 1]`. Returns the pivot's
/// final index.
fn partition(
    array: &mut [ArrayElement],
    lo: usize,
    hi: usize,
    sorted: &[usize],
    recorder: &mut StepRecorder,
) -> usize {
    let pivot = hi - 1;
    let pivot_value = array[pivot].value;
    recorder.push(
        Step::snapshot(array, format!("Choosing {pivot_value} as the pivot"))
            .pointing([pivot])
            .sorted(sorted.iter().copied())
            .pointers(Pointers {
                pivot: Some(pivot),
                i: Some(lo),
                ..Pointers::default()
            }),
    );

    let mut i = lo;
    for j in lo..pivot {
        let pointers = Pointers {
            pivot: Some(pivot),
            i: Some(i),
            j: Some(j),
            ..Pointers::default()
        };
        recorder.push(
            Step::snapshot(
                array,
                format!("Comparing {} with pivot {pivot_value}", array[j].value),
            )
            .comparing([j, pivot])
            .sorted(sorted.iter().copied())
            .pointers(pointers),
        );

        if array[j].value <= pivot_value {
            if i != j {
                array.swap(i, j);
                recorder.push(
                    Step::snapshot(
                        array,
                        format!(
                            "{} is not greater than the pivot, swapping it to position {i}",
                            array[i].value
                        ),
                    )
                    .swapping([i, j])
                    .sorted(sorted.iter().copied())
                    .pointers(pointers),
                );
            }
            i += 1;
        }
    }

    if i != pivot {
        array.swap(i, pivot);
        recorder.push(
            Step::snapshot(array, format!("Moving pivot {pivot_value} to position {i}"))
                .swapping([i, pivot])
                .sorted(sorted.iter().copied())
                .pointers(Pointers {
                    pivot: Some(i),
                    ..Pointers::default()
                }),
        );
    }
    i
}

//! Bubble sort.
//!
//! Each pass walks the unsorted prefix comparing neighbours and swapping
//! out-of-order pairs, so the largest remaining value bubbles to the end.
//! A pass without swaps ends the sort early. Strict `>` keeps it stable.

use super::{finished, trivial_steps};
use crate::step::{ArrayElement, Pointers, Step, StepRecorder};

/// Generate bubble sort steps for `input`.
#[must_use]
pub fn bubble_sort_steps(input: &[ArrayElement]) -> Vec<Step> {
    if let Some(steps) = trivial_steps(input) {
        return steps;
    }

    let mut array = input.to_vec();
    let n = array.len();
    let mut sorted: Vec<usize> = Vec::new();
    let mut recorder = StepRecorder::new();
    recorder.push(Step::snapshot(&array, "Initial array"));

    for i in 0..n - 1 {
        let mut swapped = false;

        for j in 0..n - 1 - i {
            let pointers = Pointers {
                i: Some(i),
                j: Some(j),
                ..Pointers::default()
            };
            recorder.push(
                Step::snapshot(
                    &array,
                    format!("Comparing {} and {}", array[j].value, array[j + 1].value),
                )
                .comparing([j, j + 1])
                .sorted(sorted.iter().copied())
                .pointers(pointers),
            );

            if array[j].value > array[j + 1].value {
                array.swap(j, j + 1);
                swapped = true;
                recorder.push(
                    Step::snapshot(
                        &array,
                        format!(
                            "{} is greater than {}, swapping them",
                            array[j + 1].value,
                            array[j].value
                        ),
                    )
                    .swapping([j, j + 1])
                    .sorted(sorted.iter().copied())
                    .pointers(pointers),
                );
            }
        }

        let settled = n - 1 - i;
        sorted.push(settled);
        recorder.push(
            Step::snapshot(
                &array,
                format!("{} is now in its final position", array[settled].value),
            )
            .sorted(sorted.iter().copied())
            .pointing([settled])
            .pointers(Pointers {
                i: Some(i),
                ..Pointers::default()
            }),
        );

        if !swapped {
            recorder.push(
                Step::snapshot(&array, "No swaps in this pass, the remaining elements are already in order")
                    .sorted(sorted.iter().copied()),
            );
            break;
        }
    }

    recorder.push(finished(&array));
    recorder.into_steps()
}

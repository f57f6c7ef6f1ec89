//! Selection sort.
//!
//! Each pass scans the unsorted suffix for its minimum and swaps it into
//! position `i`. The long-range swap makes it unstable.

use super::{finished, trivial_steps};
use crate::step::{ArrayElement, Pointers, Step, StepRecorder};

/// Generate selection sort steps for `input`.
#[must_use]
pub fn selection_sort_steps(input: &[ArrayElement]) -> Vec<Step> {
    if let Some(steps) = trivial_steps(input) {
        return steps;
    }

    let mut array = input.to_vec();
    let n = array.len();
    let mut recorder = StepRecorder::new();
    recorder.push(Step::snapshot(&array, "Initial array"));

    for i in 0..n - 1 {
        let mut min = i;
        recorder.push(
            Step::snapshot(
                &array,
                format!("Starting pass {}: assume {} is the minimum", i + 1, array[i].value),
            )
            .pointing([i])
            .sorted(0..i)
            .pointers(Pointers {
                i: Some(i),
                min_index: Some(min),
                ..Pointers::default()
            }),
        );

        for j in i + 1..n {
            recorder.push(
                Step::snapshot(
                    &array,
                    format!(
                        "Comparing {} with current minimum {}",
                        array[j].value, array[min].value
                    ),
                )
                .comparing([min, j])
                .sorted(0..i)
                .pointers(Pointers {
                    i: Some(i),
                    j: Some(j),
                    min_index: Some(min),
                    ..Pointers::default()
                }),
            );

            if array[j].value < array[min].value {
                min = j;
                recorder.push(
                    Step::snapshot(&array, format!("New minimum found: {}", array[min].value))
                        .pointing([min])
                        .sorted(0..i)
                        .pointers(Pointers {
                            i: Some(i),
                            j: Some(j),
                            min_index: Some(min),
                            ..Pointers::default()
                        }),
                );
            }
        }

        if min == i {
            recorder.push(
                Step::snapshot(
                    &array,
                    format!("{} is already in the correct position", array[i].value),
                )
                .pointing([i])
                .sorted(0..=i),
            );
        } else {
            array.swap(i, min);
            recorder.push(
                Step::snapshot(
                    &array,
                    format!(
                        "Swapping minimum {} into position {i}",
                        array[i].value
                    ),
                )
                .swapping([i, min])
                .sorted(0..=i)
                .pointers(Pointers {
                    i: Some(i),
                    min_index: Some(i),
                    ..Pointers::default()
                }),
            );
        }
    }

    recorder.push(finished(&array));
    recorder.into_steps()
}

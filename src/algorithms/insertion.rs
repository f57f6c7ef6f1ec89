//! Insertion sort.
//!
//! The key at position `i` is walked left by adjacent exchange until its left
//! neighbour is not greater. The pass itself is shared with bucket sort,
//! which insertion-sorts every bucket; callers observe the pass through
//! [`InsertionEvent`]s and decide how to render them.

use super::{finished, trivial_steps};
use crate::step::{ArrayElement, Pointers, Step, StepRecorder};

/// One observable moment of an insertion pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InsertionEvent {
    /// The element at `index` becomes the key.
    Key { index: usize },
    /// The key (at `right`) is compared with its left neighbour.
    Compare { left: usize, right: usize },
    /// The key moved from `right` to `left`.
    Swap { left: usize, right: usize },
    /// The key came to rest at `index`; `0..=through` is now ordered.
    Placed { index: usize, through: usize },
}

/// Insertion-sort `items` in place, reporting every event.
pub(crate) fn insertion_pass<F>(items: &mut [ArrayElement], mut observe: F)
where
    F: FnMut(&[ArrayElement], InsertionEvent),
{
    for i in 1..items.len() {
        observe(items, InsertionEvent::Key { index: i });

        let mut j = i;
        while j > 0 {
            observe(items, InsertionEvent::Compare { left: j - 1, right: j });
            if items[j - 1].value > items[j].value {
                items.swap(j - 1, j);
                observe(items, InsertionEvent::Swap { left: j - 1, right: j });
                j -= 1;
            } else {
                break;
            }
        }

        observe(items, InsertionEvent::Placed { index: j, through: i });
    }
}

/// Generate insertion sort steps for `input`.
#[must_use]
pub fn insertion_sort_steps(input: &[ArrayElement]) -> Vec<Step> {
    if let Some(steps) = trivial_steps(input) {
        return steps;
    }

    let mut array = input.to_vec();
    let mut recorder = StepRecorder::new();
    recorder.push(Step::snapshot(&array, "Initial array").sorted([0]));

    let mut sorted_through = 0;
    insertion_pass(&mut array, |items, event| {
        let key = |index| Pointers {
            key_index: Some(index),
            ..Pointers::default()
        };
        let step = match event {
            InsertionEvent::Key { index } => Step::snapshot(
                items,
                format!("Selecting {} as the key", items[index].value),
            )
            .pointing([index])
            .pointers(key(index)),
            InsertionEvent::Compare { left, right } => Step::snapshot(
                items,
                format!(
                    "Comparing key {} with {}",
                    items[right].value, items[left].value
                ),
            )
            .comparing([left, right])
            .pointers(key(right)),
            InsertionEvent::Swap { left, right } => Step::snapshot(
                items,
                format!(
                    "{} is greater than the key, shifting it right",
                    items[right].value
                ),
            )
            .swapping([left, right])
            .pointers(key(left)),
            InsertionEvent::Placed { index, through } => {
                sorted_through = through;
                Step::snapshot(
                    items,
                    format!("Inserted {} at position {index}", items[index].value),
                )
                .pointing([index])
            }
        };
        recorder.push(step.sorted(0..=sorted_through));
    });

    recorder.push(finished(&array));
    recorder.into_steps()
}

//! Merge sort (top-down).
//!
//! The window `start..end` is split at its midpoint, both halves are sorted
//! recursively and then merged. During a merge the window is rewritten after
//! every placement as `merged ++ left_remaining ++ right_remaining`, so every
//! snapshot is still a permutation of the input. Ties take from the left,
//! which keeps the sort stable.

use std::collections::VecDeque;

use super::{finished, trivial_steps};
use crate::step::{format_values, ArrayElement, MergeRange, Step, StepDetail, StepRecorder};

/// Generate merge sort steps for `input`.
#[must_use]
pub fn merge_sort_steps(input: &[ArrayElement]) -> Vec<Step> {
    if let Some(steps) = trivial_steps(input) {
        return steps;
    }

    let mut array = input.to_vec();
    let mut recorder = StepRecorder::new();
    recorder.push(Step::snapshot(&array, "Initial array"));

    let len = array.len();
    sort_range(&mut array, 0, len, &mut recorder);

    recorder.push(finished(&array));
    recorder.into_steps()
}

fn sort_range(array: &mut [ArrayElement], start: usize, end: usize, recorder: &mut StepRecorder) {
    if end - start <= 1 {
        return;
    }

    let mid = start + (end - start) / 2;
    let range = MergeRange { start, mid, end };
    recorder.push(
        Step::snapshot(
            array,
            format!(
                "Dividing {} into {} and {}",
                format_values(&array[start..end]),
                format_values(&array[start..mid]),
                format_values(&array[mid..end])
            ),
        )
        .pointing(start..end)
        .detail(StepDetail::Merge(range)),
    );

    sort_range(array, start, mid, recorder);
    sort_range(array, mid, end, recorder);
    merge(array, range, recorder);
}

fn merge(array: &mut [ArrayElement], range: MergeRange, recorder: &mut StepRecorder) {
    let MergeRange { start, mid, end } = range;
    let mut left: VecDeque<ArrayElement> = array[start..mid].iter().cloned().collect();
    let mut right: VecDeque<ArrayElement> = array[mid..end].iter().cloned().collect();
    let mut merged: Vec<ArrayElement> = Vec::with_capacity(end - start);

    recorder.push(
        Step::snapshot(
            array,
            format!(
                "Merging {} and {}",
                format_values(&array[start..mid]),
                format_values(&array[mid..end])
            ),
        )
        .pointing(start..end)
        .detail(StepDetail::Merge(range)),
    );

    loop {
        let (Some(l), Some(r)) = (left.front(), right.front()) else {
            break;
        };
        let (left_value, right_value) = (l.value, r.value);
        let left_head = start + merged.len();
        let right_head = left_head + left.len();

        recorder.push(
            Step::snapshot(array, format!("Comparing {left_value} and {right_value}"))
                .comparing([left_head, right_head])
                .detail(StepDetail::Merge(range)),
        );

        let next = if left_value <= right_value {
            left.pop_front()
        } else {
            right.pop_front()
        };
        if let Some(element) = next {
            let value = element.value;
            merged.push(element);
            write_window(array, start, &merged, &left, &right);
            recorder.push(
                Step::snapshot(array, format!("Placing {value} at position {left_head}"))
                    .pointing([left_head])
                    .detail(StepDetail::Merge(range)),
            );
        }
    }

    // The leftovers already sit in order after the merged prefix.
    merged.extend(left);
    merged.extend(right);
    write_window(array, start, &merged, &VecDeque::new(), &VecDeque::new());
    recorder.push(
        Step::snapshot(array, format!("Merged into {}", format_values(&array[start..end])))
            .pointing(start..end)
            .detail(StepDetail::Merge(range)),
    );
}

fn write_window(
    array: &mut [ArrayElement],
    start: usize,
    merged: &[ArrayElement],
    left: &VecDeque<ArrayElement>,
    right: &VecDeque<ArrayElement>,
) {
    for (offset, element) in merged.iter().chain(left).chain(right).enumerate() {
        array[start + offset] = element.clone();
    }
}

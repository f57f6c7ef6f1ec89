//! Heap sort.
//!
//! Builds a max-heap bottom-up, then repeatedly swaps the root with the last
//! heap slot and restores the heap with sift-down. The children of `i` are
//! `2i + 1` and `2i + 2`.

use super::{finished, trivial_steps};
use crate::step::{ArrayElement, HeapDetail, Pointers, Step, StepDetail, StepRecorder};

/// Generate heap sort steps for `input`.
#[must_use]
pub fn heap_sort_steps(input: &[ArrayElement]) -> Vec<Step> {
    if let Some(steps) = trivial_steps(input) {
        return steps;
    }

    let mut array = input.to_vec();
    let n = array.len();
    let mut recorder = StepRecorder::new();
    recorder.push(Step::snapshot(&array, "Initial array").detail(heap_detail(n)));

    recorder.push(
        Step::snapshot(&array, "Building a max heap from the array").detail(heap_detail(n)),
    );
    for root in (0..n / 2).rev() {
        sift_down(&mut array, root, n, n, &mut recorder);
    }
    recorder.push(
        Step::snapshot(
            &array,
            format!("Max heap built, the largest value {} is at the root", array[0].value),
        )
        .pointing([0])
        .detail(heap_detail(n)),
    );

    for end in (1..n).rev() {
        array.swap(0, end);
        recorder.push(
            Step::snapshot(
                &array,
                format!(
                    "Moving the maximum {} to position {end}",
                    array[end].value
                ),
            )
            .swapping([0, end])
            .sorted(end..n)
            .detail(heap_detail(end)),
        );
        sift_down(&mut array, 0, end, n, &mut recorder);
    }

    recorder.push(finished(&array).detail(heap_detail(0)));
    recorder.into_steps()
}

const fn heap_detail(heap_size: usize) -> StepDetail {
    StepDetail::Heap(HeapDetail { heap_size })
}

/// Restore the max-heap property below `root` within `0..size`. Indices
/// `size..n` are already sorted.
fn sift_down(
    array: &mut [ArrayElement],
    mut root: usize,
    size: usize,
    n: usize,
    recorder: &mut StepRecorder,
) {
    loop {
        let left = 2 * root + 1;
        if left >= size {
            break;
        }
        let right = left + 1;
        let mut largest = root;

        let mut compared = vec![root, left];
        if right < size {
            compared.push(right);
        }
        recorder.push(
            Step::snapshot(
                array,
                format!("Comparing {} with its children", array[root].value),
            )
            .comparing(compared)
            .sorted(size..n)
            .pointers(Pointers {
                i: Some(root),
                ..Pointers::default()
            })
            .detail(heap_detail(size)),
        );

        if array[left].value > array[largest].value {
            largest = left;
        }
        if right < size && array[right].value > array[largest].value {
            largest = right;
        }
        if largest == root {
            break;
        }

        array.swap(root, largest);
        recorder.push(
            Step::snapshot(
                array,
                format!(
                    "Swapping {} with larger child {}",
                    array[largest].value, array[root].value
                ),
            )
            .swapping([root, largest])
            .sorted(size..n)
            .detail(heap_detail(size)),
        );
        root = largest;
    }
}

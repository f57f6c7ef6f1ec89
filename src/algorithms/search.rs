//! Linear and binary search.
//!
//! Both generators leave the array untouched. The last step carries a
//! [`SearchDetail`] whose `outcome` is `Found` or `NotFound`; a missing
//! `found_index` serializes as `-1`.

use crate::step::{ArrayElement, Pointers, SearchDetail, SearchOutcome, Step, StepDetail, StepRecorder};

fn search_detail(target: i64, found_index: Option<usize>, outcome: SearchOutcome, eliminated: Vec<usize>) -> StepDetail {
    StepDetail::Search(SearchDetail {
        target,
        found_index,
        outcome,
        eliminated,
    })
}

/// Generate linear search steps for `target` in `input`.
#[must_use]
pub fn linear_search_steps(input: &[ArrayElement], target: i64) -> Vec<Step> {
    if input.is_empty() {
        return Vec::new();
    }

    let mut recorder = StepRecorder::new();
    recorder.push(
        Step::snapshot(input, format!("Searching for {target}"))
            .detail(search_detail(target, None, SearchOutcome::Searching, Vec::new())),
    );

    for (i, element) in input.iter().enumerate() {
        let checked: Vec<usize> = (0..i).collect();
        let pointers = Pointers {
            i: Some(i),
            ..Pointers::default()
        };
        recorder.push(
            Step::snapshot(
                input,
                format!("Checking index {i}: is {} equal to {target}?", element.value),
            )
            .comparing([i])
            .pointers(pointers)
            .detail(search_detail(target, None, SearchOutcome::Searching, checked.clone())),
        );

        if element.value == target {
            recorder.push(
                Step::snapshot(input, format!("Found {target} at index {i}"))
                    .pointing([i])
                    .sorted([i])
                    .pointers(pointers)
                    .detail(search_detail(target, Some(i), SearchOutcome::Found, checked)),
            );
            return recorder.into_steps();
        }
    }

    recorder.push(
        Step::snapshot(input, format!("{target} is not in the array"))
            .detail(search_detail(target, None, SearchOutcome::NotFound, (0..input.len()).collect())),
    );
    recorder.into_steps()
}

/// Generate binary search steps for `target` in `input`.
///
/// `input` is expected to be sorted ascending; on unsorted input the search
/// still terminates but may miss the target.
#[must_use]
pub fn binary_search_steps(input: &[ArrayElement], target: i64) -> Vec<Step> {
    if input.is_empty() {
        return Vec::new();
    }

    let n = input.len();
    let eliminated = |low: usize, high: Option<usize>| -> Vec<usize> {
        (0..n)
            .filter(|&i| i < low || high.map_or(true, |h| i > h))
            .collect()
    };

    let mut recorder = StepRecorder::new();
    recorder.push(
        Step::snapshot(input, format!("Searching for {target} in the sorted array"))
            .pointers(Pointers {
                low: Some(0),
                high: Some(n - 1),
                ..Pointers::default()
            })
            .detail(search_detail(target, None, SearchOutcome::Searching, Vec::new())),
    );

    let mut low = 0;
    let mut high = Some(n - 1);
    while let Some(h) = high.filter(|&h| low <= h) {
        let mid = low + (h - low) / 2;
        let value = input[mid].value;
        let pointers = Pointers {
            low: Some(low),
            high: Some(h),
            mid: Some(mid),
            ..Pointers::default()
        };
        recorder.push(
            Step::snapshot(
                input,
                format!("Checking middle index {mid}: is {value} equal to {target}?"),
            )
            .comparing([mid])
            .pointers(pointers)
            .detail(search_detail(target, None, SearchOutcome::Searching, eliminated(low, Some(h)))),
        );

        match value.cmp(&target) {
            std::cmp::Ordering::Equal => {
                recorder.push(
                    Step::snapshot(input, format!("Found {target} at index {mid}"))
                        .pointing([mid])
                        .sorted([mid])
                        .pointers(pointers)
                        .detail(search_detail(
                            target,
                            Some(mid),
                            SearchOutcome::Found,
                            eliminated(low, Some(h)),
                        )),
                );
                return recorder.into_steps();
            }
            std::cmp::Ordering::Less => {
                low = mid + 1;
                recorder.push(
                    Step::snapshot(
                        input,
                        format!("{value} is less than {target}, searching the right half"),
                    )
                    .pointing([mid])
                    .pointers(Pointers {
                        low: Some(low),
                        high: Some(h),
                        ..Pointers::default()
                    })
                    .detail(search_detail(target, None, SearchOutcome::Searching, eliminated(low, Some(h)))),
                );
            }
            std::cmp::Ordering::Greater => {
                high = mid.checked_sub(1);
                let bounds = Pointers {
                    low: Some(low),
                    high,
                    ..Pointers::default()
                };
                recorder.push(
                    Step::snapshot(
                        input,
                        format!("{value} is greater than {target}, searching the left half"),
                    )
                    .pointing([mid])
                    .pointers(bounds)
                    .detail(search_detail(target, None, SearchOutcome::Searching, eliminated(low, high))),
                );
            }
        }
    }

    recorder.push(
        Step::snapshot(input, format!("{target} is not in the array"))
            .detail(search_detail(target, None, SearchOutcome::NotFound, (0..n).collect())),
    );
    recorder.into_steps()
}

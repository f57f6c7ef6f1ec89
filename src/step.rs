//! Step snapshots: the data model shared by every generator.
//!
//! A [`Step`] is one renderable instant of an algorithm. It owns a full clone
//! of the working array, so any two steps can be diffed without aliasing and
//! a sequence can be navigated freely once generated.
//!
//! The serialized form uses camelCase field names (`keyIndex`, `minIndex`,
//! `foundIndex`) so a web front end can consume it directly.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A sortable item with a stable identity.
///
/// `id` survives every move so that two elements with the same `value` can
/// still be told apart between steps.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArrayElement {
    /// Stable identity across steps.
    pub id: String,
    /// Value being sorted or searched.
    pub value: i64,
}

impl ArrayElement {
    /// Create an element.
    #[must_use]
    pub fn new(id: impl Into<String>, value: i64) -> Self {
        Self {
            id: id.into(),
            value,
        }
    }
}

/// On-screen annotation for a step.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Message {
    /// Human-readable explanation of what happens at this step.
    pub text: String,
    /// Indices the annotation points at.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub indices: Vec<usize>,
}

/// Named scalar pointers into the array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pointers {
    /// Outer loop index.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub i: Option<usize>,
    /// Inner loop index.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub j: Option<usize>,
    /// Insertion sort key position.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_index: Option<usize>,
    /// Quick sort pivot position.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pivot: Option<usize>,
    /// Selection sort running minimum.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_index: Option<usize>,
    /// Binary search lower bound.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub low: Option<usize>,
    /// Binary search upper bound (inclusive).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub high: Option<usize>,
    /// Binary search midpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mid: Option<usize>,
}

/// Sub-array bounds of a merge: left is `start..mid`, right is `mid..end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeRange {
    /// First index of the left half.
    pub start: usize,
    /// First index of the right half.
    pub mid: usize,
    /// One past the last index of the right half.
    pub end: usize,
}

/// Heap sort bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeapDetail {
    /// Number of leading elements that still form the heap.
    pub heap_size: usize,
}

/// A labelled bucket used by bucket and radix sort.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bucket {
    /// Display label (value range or digit).
    pub label: String,
    /// Elements currently held, in bucket order.
    pub elements: Vec<ArrayElement>,
}

impl Bucket {
    /// Create an empty bucket.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            elements: Vec::new(),
        }
    }
}

/// Phase of a bucket sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BucketStage {
    /// Scanning for the value range.
    Scan,
    /// Moving elements into buckets.
    Distribute,
    /// Insertion-sorting each bucket.
    SortBuckets,
    /// Concatenating buckets back into the array.
    Gather,
}

/// Bucket sort snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BucketDetail {
    /// Current phase.
    pub stage: BucketStage,
    /// Bucket contents at this instant.
    pub buckets: Vec<Bucket>,
    /// Bucket being worked on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_bucket: Option<usize>,
    /// Positions inside the active bucket under inspection.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bucket_comparing: Vec<usize>,
}

/// Phase of a single radix pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RadixStage {
    /// Moving elements into digit buckets.
    Distribute,
    /// Reading buckets 0..9 back into the array.
    Collect,
}

/// Radix sort snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RadixDetail {
    /// Place value of the current digit (1, 10, 100, ...).
    pub place: u64,
    /// Zero-based pass number.
    pub pass: usize,
    /// Current phase within the pass.
    pub stage: RadixStage,
    /// Digit buckets `0..=9`.
    pub buckets: Vec<Bucket>,
    /// Bucket receiving or releasing an element.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_bucket: Option<usize>,
}

/// Search progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SearchOutcome {
    /// Still looking.
    Searching,
    /// Target located.
    Found,
    /// Search space exhausted.
    NotFound,
}

/// Linear and binary search snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchDetail {
    /// Value being searched for.
    pub target: i64,
    /// Index of the target, `-1` on the wire when absent.
    #[serde(with = "found_index")]
    pub found_index: Option<usize>,
    /// Current progress.
    pub outcome: SearchOutcome,
    /// Indices ruled out so far.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub eliminated: Vec<usize>,
}

/// Tree traversal snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TraversalDetail {
    /// Node being visited.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current: Option<usize>,
    /// Visit order so far.
    pub visited: Vec<usize>,
    /// Pending nodes (queue or call stack).
    pub frontier: Vec<usize>,
}

/// Algorithm-specific metadata attached to a step.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum StepDetail {
    /// Nothing beyond the common fields.
    #[default]
    None,
    /// Merge sort halves.
    Merge(MergeRange),
    /// Heap sort heap boundary.
    Heap(HeapDetail),
    /// Bucket sort buckets.
    Buckets(BucketDetail),
    /// Radix sort digit buckets.
    Radix(RadixDetail),
    /// Search state.
    Search(SearchDetail),
    /// Tree traversal state.
    Traversal(TraversalDetail),
}

/// One renderable snapshot of algorithm state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    /// Full array state at this instant.
    pub array: Vec<ArrayElement>,
    /// Indices being compared.
    #[serde(default)]
    pub comparing: Vec<usize>,
    /// Indices just exchanged.
    #[serde(default)]
    pub swapping: Vec<usize>,
    /// Indices known to hold their final value.
    #[serde(default)]
    pub sorted: Vec<usize>,
    /// Scalar role pointers.
    #[serde(flatten)]
    pub pointers: Pointers,
    /// Annotation.
    pub message: Message,
    /// Algorithm-specific metadata.
    #[serde(default)]
    pub detail: StepDetail,
}

impl Step {
    /// Snapshot `array` with an annotation. The array is cloned.
    #[must_use]
    pub fn snapshot(array: &[ArrayElement], text: impl Into<String>) -> Self {
        Self {
            array: array.to_vec(),
            comparing: Vec::new(),
            swapping: Vec::new(),
            sorted: Vec::new(),
            pointers: Pointers::default(),
            message: Message {
                text: text.into(),
                indices: Vec::new(),
            },
            detail: StepDetail::None,
        }
    }

    /// Mark indices under comparison. The message points at them too.
    #[must_use]
    pub fn comparing(mut self, indices: impl IntoIterator<Item = usize>) -> Self {
        self.comparing = indices.into_iter().collect();
        self.message.indices.clone_from(&self.comparing);
        self
    }

    /// Mark indices that were just swapped. The message points at them too.
    #[must_use]
    pub fn swapping(mut self, indices: impl IntoIterator<Item = usize>) -> Self {
        self.swapping = indices.into_iter().collect();
        self.message.indices.clone_from(&self.swapping);
        self
    }

    /// Set the sorted index set, normalized to ascending order.
    #[must_use]
    pub fn sorted(mut self, indices: impl IntoIterator<Item = usize>) -> Self {
        let mut sorted: Vec<usize> = indices.into_iter().collect();
        sorted.sort_unstable();
        sorted.dedup();
        self.sorted = sorted;
        self
    }

    /// Override the indices the message points at.
    #[must_use]
    pub fn pointing(mut self, indices: impl IntoIterator<Item = usize>) -> Self {
        self.message.indices = indices.into_iter().collect();
        self
    }

    /// Set the pointer block.
    #[must_use]
    pub const fn pointers(mut self, pointers: Pointers) -> Self {
        self.pointers = pointers;
        self
    }

    /// Attach algorithm-specific metadata.
    #[must_use]
    pub fn detail(mut self, detail: StepDetail) -> Self {
        self.detail = detail;
        self
    }

    /// Values of the array in order.
    #[must_use]
    pub fn values(&self) -> Vec<i64> {
        self.array.iter().map(|e| e.value).collect()
    }

    /// Whether every index is marked sorted.
    #[must_use]
    pub fn is_fully_sorted(&self) -> bool {
        self.sorted.len() == self.array.len()
    }

    /// Search state, if this is a search step.
    #[must_use]
    pub const fn search(&self) -> Option<&SearchDetail> {
        match &self.detail {
            StepDetail::Search(detail) => Some(detail),
            _ => None,
        }
    }
}

/// Accumulates steps for one generator run.
#[derive(Debug, Default)]
pub struct StepRecorder {
    steps: Vec<Step>,
}

impl StepRecorder {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a step.
    pub fn push(&mut self, step: Step) {
        self.steps.push(step);
    }

    /// Number of recorded steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether no step was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Finish recording.
    #[must_use]
    pub fn into_steps(self) -> Vec<Step> {
        self.steps
    }
}

/// `0..len` as a vector, for "everything is sorted" frames.
#[must_use]
pub fn all_indices(len: usize) -> Vec<usize> {
    (0..len).collect()
}

/// Values joined for annotations, e.g. `[1, 3, 5]`.
#[must_use]
pub fn format_values(elements: &[ArrayElement]) -> String {
    let values: Vec<String> = elements.iter().map(|e| e.value.to_string()).collect();
    format!("[{}]", values.join(", "))
}

/// Serde adapter writing `None` as `-1`.
mod found_index {
    use super::{Deserialize, Deserializer, Serializer};

    #[allow(clippy::ref_option)]
    pub fn serialize<S: Serializer>(value: &Option<usize>, serializer: S) -> Result<S::Ok, S::Error> {
        let raw = value.map_or(-1, |i| i64::try_from(i).unwrap_or(i64::MAX));
        serializer.serialize_i64(raw)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<usize>, D::Error> {
        let raw = i64::deserialize(deserializer)?;
        Ok(usize::try_from(raw).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<ArrayElement> {
        vec![
            ArrayElement::new("a", 5),
            ArrayElement::new("b", 3),
            ArrayElement::new("c", 8),
        ]
    }

    #[test]
    fn test_snapshot_clones_array() {
        let mut array = sample();
        let step = Step::snapshot(&array, "Initial array");
        array.swap(0, 1);
        assert_eq!(step.values(), vec![5, 3, 8]);
        assert_eq!(step.message.text, "Initial array");
    }

    #[test]
    fn test_comparing_sets_message_indices() {
        let step = Step::snapshot(&sample(), "Comparing").comparing([0, 1]);
        assert_eq!(step.comparing, vec![0, 1]);
        assert_eq!(step.message.indices, vec![0, 1]);
    }

    #[test]
    fn test_sorted_normalizes() {
        let step = Step::snapshot(&sample(), "x").sorted([2, 0, 2]);
        assert_eq!(step.sorted, vec![0, 2]);
        assert!(!step.is_fully_sorted());
        let step = step.sorted(all_indices(3));
        assert!(step.is_fully_sorted());
    }

    #[test]
    fn test_serialization_uses_camel_case() {
        let step = Step::snapshot(&sample(), "Key").pointers(Pointers {
            key_index: Some(1),
            min_index: Some(0),
            ..Pointers::default()
        });
        let json = serde_json::to_string(&step).expect("serialize");
        assert!(json.contains("\"keyIndex\":1"));
        assert!(json.contains("\"minIndex\":0"));
        assert!(!json.contains("pivot"));
        assert!(json.contains("\"kind\":\"none\""));
    }

    #[test]
    fn test_found_index_sentinel() {
        let detail = SearchDetail {
            target: 56,
            found_index: None,
            outcome: SearchOutcome::NotFound,
            eliminated: vec![0, 1],
        };
        let json = serde_json::to_string(&detail).expect("serialize");
        assert!(json.contains("\"foundIndex\":-1"));

        let restored: SearchDetail = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(restored.found_index, None);
        assert_eq!(restored, detail);
    }

    #[test]
    fn test_step_json_roundtrip_with_detail() {
        let step = Step::snapshot(&sample(), "Merging")
            .detail(StepDetail::Merge(MergeRange {
                start: 0,
                mid: 1,
                end: 3,
            }))
            .sorted([0]);
        let json = serde_json::to_string(&step).expect("serialize");
        let restored: Step = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(restored, step);
    }

    #[test]
    fn test_search_accessor() {
        let step = Step::snapshot(&sample(), "Found").detail(StepDetail::Search(SearchDetail {
            target: 3,
            found_index: Some(1),
            outcome: SearchOutcome::Found,
            eliminated: Vec::new(),
        }));
        assert_eq!(step.search().and_then(|s| s.found_index), Some(1));
        assert!(Step::snapshot(&sample(), "plain").search().is_none());
    }

    #[test]
    fn test_recorder() {
        let mut recorder = StepRecorder::new();
        assert!(recorder.is_empty());
        recorder.push(Step::snapshot(&sample(), "one"));
        recorder.push(Step::snapshot(&sample(), "two"));
        assert_eq!(recorder.len(), 2);
        let steps = recorder.into_steps();
        assert_eq!(steps[1].message.text, "two");
    }

    #[test]
    fn test_format_values() {
        assert_eq!(format_values(&sample()), "[5, 3, 8]");
        assert_eq!(format_values(&[]), "[]");
    }
}

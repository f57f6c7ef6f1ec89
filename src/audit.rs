//! Self-checks over generated step sequences.
//!
//! Every generated sequence must satisfy a handful of properties: it starts
//! from the input, never loses or duplicates an element, and ends in the
//! right place. [`audit_steps`] evaluates them as named checks so that a CLI
//! user (or a test) can see exactly which one failed.
//!
//! Check IDs:
//!
//! | ID | Severity | Applies to |
//! |----|----------|------------|
//! | `STEP-FIRST` | critical | all |
//! | `STEP-LEN` | critical | all |
//! | `STEP-PERM` | critical | all |
//! | `STEP-INDEX` | major | all |
//! | `SORT-ORDER` | critical | sorts |
//! | `SORT-MARKED` | major | sorts |
//! | `SORT-STABLE` | major | stable sorts |
//! | `SEARCH-RESULT` | critical | searches |

use serde::{Deserialize, Serialize};

use crate::algorithms::Algorithm;
use crate::catalog;
use crate::error::VizResult;
use crate::step::{ArrayElement, SearchOutcome, Step};

/// How much a failed check matters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The sequence is wrong.
    Critical,
    /// The sequence is right but its annotations are not.
    #[default]
    Major,
    /// Cosmetic.
    Minor,
}

/// Outcome of one named check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    /// Check ID, e.g. `SORT-ORDER`.
    pub id: String,
    /// Whether the check passed.
    pub passed: bool,
    /// What was observed.
    pub message: String,
    /// Severity of a failure.
    pub severity: Severity,
}

impl CheckResult {
    fn new(id: &str, severity: Severity, passed: bool, message: impl Into<String>) -> Self {
        Self {
            id: id.to_string(),
            passed,
            message: message.into(),
            severity,
        }
    }
}

/// All checks for one sequence plus its digest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditReport {
    /// Audited algorithm.
    pub algorithm: Algorithm,
    /// Number of steps in the sequence.
    pub step_count: usize,
    /// blake3 hex digest of the JSON-serialized sequence.
    pub digest: String,
    /// Individual results.
    pub checks: Vec<CheckResult>,
}

impl AuditReport {
    /// Whether every critical check passed.
    #[must_use]
    pub fn is_verified(&self) -> bool {
        self.checks
            .iter()
            .filter(|c| c.severity == Severity::Critical)
            .all(|c| c.passed)
    }

    /// Whether every check passed.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.checks.iter().all(|c| c.passed)
    }

    /// Failed checks.
    pub fn failures(&self) -> impl Iterator<Item = &CheckResult> {
        self.checks.iter().filter(|c| !c.passed)
    }
}

/// Result of regenerating a sequence several times.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeterminismReport {
    /// Number of generations compared.
    pub runs: usize,
    /// Digest of the first generation.
    pub digest: String,
    /// Whether every generation produced the same digest.
    pub consistent: bool,
}

/// blake3 hex digest of the JSON form of `steps`.
///
/// # Errors
///
/// Returns `VizError::Serialization` if the steps cannot be serialized.
pub fn digest(steps: &[Step]) -> VizResult<String> {
    let bytes = serde_json::to_vec(steps)?;
    Ok(blake3::hash(&bytes).to_hex().to_string())
}

fn sorted_ids(elements: &[ArrayElement]) -> Vec<&str> {
    let mut ids: Vec<&str> = elements.iter().map(|e| e.id.as_str()).collect();
    ids.sort_unstable();
    ids
}

fn check_first(input: &[ArrayElement], steps: &[Step]) -> CheckResult {
    let (passed, message) = match steps.first() {
        None if input.is_empty() => (true, "empty input produced no steps".to_string()),
        None => (false, "non-empty input produced no steps".to_string()),
        Some(_) if input.is_empty() => (false, "empty input produced steps".to_string()),
        Some(first) if first.array == input => (true, "first step shows the input".to_string()),
        Some(first) => (
            false,
            format!("first step shows {:?}, input is {:?}", first.values(), values(input)),
        ),
    };
    CheckResult::new("STEP-FIRST", Severity::Critical, passed, message)
}

fn check_lengths(input: &[ArrayElement], steps: &[Step]) -> CheckResult {
    let bad = steps.iter().position(|s| s.array.len() != input.len());
    match bad {
        None => CheckResult::new(
            "STEP-LEN",
            Severity::Critical,
            true,
            format!("all steps hold {} elements", input.len()),
        ),
        Some(frame) => CheckResult::new(
            "STEP-LEN",
            Severity::Critical,
            false,
            format!(
                "step {frame} holds {} elements, expected {}",
                steps[frame].array.len(),
                input.len()
            ),
        ),
    }
}

fn check_permutation(input: &[ArrayElement], steps: &[Step]) -> CheckResult {
    let expected = sorted_ids(input);
    let bad = steps
        .iter()
        .position(|s| sorted_ids(&s.array) != expected);
    match bad {
        None => CheckResult::new(
            "STEP-PERM",
            Severity::Critical,
            true,
            "every step is a permutation of the input",
        ),
        Some(frame) => CheckResult::new(
            "STEP-PERM",
            Severity::Critical,
            false,
            format!("step {frame} is not a permutation of the input"),
        ),
    }
}

fn check_indices(steps: &[Step]) -> CheckResult {
    let bad = steps.iter().position(|s| {
        let n = s.array.len();
        s.comparing
            .iter()
            .chain(&s.swapping)
            .chain(&s.sorted)
            .chain(&s.message.indices)
            .any(|&i| i >= n)
    });
    match bad {
        None => CheckResult::new("STEP-INDEX", Severity::Major, true, "all highlighted indices in range"),
        Some(frame) => CheckResult::new(
            "STEP-INDEX",
            Severity::Major,
            false,
            format!("step {frame} highlights an index past the end"),
        ),
    }
}

fn values(elements: &[ArrayElement]) -> Vec<i64> {
    elements.iter().map(|e| e.value).collect()
}

fn sort_checks(algorithm: Algorithm, input: &[ArrayElement], last: &Step) -> Vec<CheckResult> {
    let final_values = last.values();
    let ordered = final_values.windows(2).all(|w| w[0] <= w[1]);
    let mut checks = vec![
        CheckResult::new(
            "SORT-ORDER",
            Severity::Critical,
            ordered,
            if ordered {
                format!("final array {final_values:?} is ascending")
            } else {
                format!("final array {final_values:?} is not ascending")
            },
        ),
        CheckResult::new(
            "SORT-MARKED",
            Severity::Major,
            last.is_fully_sorted(),
            format!(
                "{} of {} indices marked sorted in the final step",
                last.sorted.len(),
                last.array.len()
            ),
        ),
    ];

    if catalog::info(algorithm).stable {
        let position = |id: &str| input.iter().position(|e| e.id == id);
        let stable = last.array.windows(2).all(|pair| {
            pair[0].value != pair[1].value || position(&pair[0].id) < position(&pair[1].id)
        });
        checks.push(CheckResult::new(
            "SORT-STABLE",
            Severity::Major,
            stable,
            if stable {
                "equal values keep their input order"
            } else {
                "equal values were reordered"
            },
        ));
    }
    checks
}

fn search_check(input: &[ArrayElement], last: &Step) -> CheckResult {
    let Some(result) = last.search() else {
        return CheckResult::new(
            "SEARCH-RESULT",
            Severity::Critical,
            false,
            "final step carries no search result",
        );
    };
    let target = result.target;
    let present = input.iter().any(|e| e.value == target);
    let (passed, message) = match (result.outcome, result.found_index) {
        (SearchOutcome::Found, Some(index)) => {
            let hit = input.get(index).is_some_and(|e| e.value == target);
            (hit, format!("reported {target} at index {index}"))
        }
        (SearchOutcome::NotFound, None) => (!present, format!("reported {target} as absent")),
        (outcome, index) => (
            false,
            format!("inconsistent final search state {outcome:?} with index {index:?}"),
        ),
    };
    CheckResult::new("SEARCH-RESULT", Severity::Critical, passed, message)
}

/// Run every applicable check over `steps` generated from `input`.
///
/// # Errors
///
/// Returns `VizError::Serialization` if the digest cannot be computed.
pub fn audit_steps(algorithm: Algorithm, input: &[ArrayElement], steps: &[Step]) -> VizResult<AuditReport> {
    let mut checks = vec![
        check_first(input, steps),
        check_lengths(input, steps),
        check_permutation(input, steps),
        check_indices(steps),
    ];

    if let Some(last) = steps.last() {
        if algorithm.is_search() {
            checks.push(search_check(input, last));
        } else {
            checks.extend(sort_checks(algorithm, input, last));
        }
    }

    let report = AuditReport {
        algorithm,
        step_count: steps.len(),
        digest: digest(steps)?,
        checks,
    };
    for failure in report.failures() {
        tracing::warn!(
            algorithm = algorithm.slug(),
            check = %failure.id,
            severity = ?failure.severity,
            "{}",
            failure.message
        );
    }
    Ok(report)
}

/// Generate the sequence `runs` times and compare digests.
///
/// `runs` below 2 still generates twice so that there is something to
/// compare.
///
/// # Errors
///
/// Propagates generation and serialization errors.
pub fn verify_determinism(
    algorithm: Algorithm,
    input: &[ArrayElement],
    target: Option<i64>,
    runs: usize,
) -> VizResult<DeterminismReport> {
    let runs = runs.max(2);
    let reference = digest(&algorithm.steps(input, target)?)?;
    for run in 1..runs {
        let again = digest(&algorithm.steps(input, target)?)?;
        if again != reference {
            tracing::warn!(algorithm = algorithm.slug(), run, "non-deterministic step sequence");
            return Ok(DeterminismReport {
                runs: run + 1,
                digest: reference,
                consistent: false,
            });
        }
    }
    Ok(DeterminismReport {
        runs,
        digest: reference,
        consistent: true,
    })
}

//! CLI output formatting.
//!
//! Renderers return `String`s so tests can inspect them; `print_*` wrappers
//! write to stdout.

use std::fmt::Write as _;

use crate::algorithms::traversal::GraphStep;
use crate::audit::{AuditReport, DeterminismReport};
use crate::catalog::{self, AlgorithmInfo};
use crate::error::VizResult;
use crate::step::{format_values, Bucket, Step, StepDetail};

const RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";
const BANNER_WIDTH: usize = 63;

/// Version string including the git hash when available.
#[must_use]
pub fn version_string() -> String {
    format!(
        "algoviz {} ({})",
        env!("CARGO_PKG_VERSION"),
        option_env!("GIT_HASH").filter(|h| !h.is_empty()).unwrap_or("unknown")
    )
}

/// Print version information.
pub fn print_version() {
    println!("{}", version_string());
}

/// Boxed title line.
#[must_use]
pub fn banner(title: &str) -> String {
    let width = title.chars().count();
    let left = BANNER_WIDTH.saturating_sub(width) / 2;
    let right = BANNER_WIDTH.saturating_sub(width + left);
    format!(
        "╔{bar}╗\n║{}{title}{}║\n╚{bar}╝\n",
        " ".repeat(left),
        " ".repeat(right),
        bar = "═".repeat(BANNER_WIDTH)
    )
}

fn join_indices(indices: &[usize]) -> String {
    indices
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn render_buckets(buckets: &[Bucket], active: Option<usize>) -> String {
    buckets
        .iter()
        .enumerate()
        .map(|(i, bucket)| {
            let marker = if Some(i) == active { "*" } else { "" };
            format!("{marker}{}: {}", bucket.label, format_values(&bucket.elements))
        })
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Render one step as an indented text block.
#[must_use]
pub fn render_step(index: usize, total: usize, step: &Step) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Step {}/{total}: {}", index + 1, step.message.text);
    let _ = writeln!(out, "  array:     {}", format_values(&step.array));
    if !step.comparing.is_empty() {
        let _ = writeln!(out, "  comparing: {}", join_indices(&step.comparing));
    }
    if !step.swapping.is_empty() {
        let _ = writeln!(out, "  swapping:  {}", join_indices(&step.swapping));
    }
    if !step.sorted.is_empty() {
        let _ = writeln!(out, "  sorted:    {}", join_indices(&step.sorted));
    }

    let p = &step.pointers;
    let pointers: Vec<String> = [
        ("i", p.i),
        ("j", p.j),
        ("key", p.key_index),
        ("pivot", p.pivot),
        ("min", p.min_index),
        ("low", p.low),
        ("high", p.high),
        ("mid", p.mid),
    ]
    .iter()
    .filter_map(|(name, value)| value.map(|v| format!("{name}={v}")))
    .collect();
    if !pointers.is_empty() {
        let _ = writeln!(out, "  pointers:  {}", pointers.join(" "));
    }

    match &step.detail {
        StepDetail::None => {}
        StepDetail::Merge(range) => {
            let _ = writeln!(
                out,
                "  merging:   {}..{} with {}..{}",
                range.start, range.mid, range.mid, range.end
            );
        }
        StepDetail::Heap(heap) => {
            let _ = writeln!(out, "  heap size: {}", heap.heap_size);
        }
        StepDetail::Buckets(detail) => {
            let _ = writeln!(
                out,
                "  buckets:   {}",
                render_buckets(&detail.buckets, detail.active_bucket)
            );
        }
        StepDetail::Radix(detail) => {
            let _ = writeln!(
                out,
                "  digit {}:  {}",
                detail.place,
                render_buckets(&detail.buckets, detail.active_bucket)
            );
        }
        StepDetail::Search(search) => {
            let found = search
                .found_index
                .map_or_else(|| "-1".to_string(), |i| i.to_string());
            let _ = writeln!(
                out,
                "  target:    {} ({:?}, foundIndex {found})",
                search.target, search.outcome
            );
        }
        StepDetail::Traversal(walk) => {
            let _ = writeln!(out, "  visited:   {}", join_indices(&walk.visited));
            if !walk.frontier.is_empty() {
                let _ = writeln!(out, "  frontier:  {}", join_indices(&walk.frontier));
            }
        }
    }
    out
}

/// Render every step, separated by blank lines.
#[must_use]
pub fn render_steps(steps: &[Step]) -> String {
    let total = steps.len();
    steps
        .iter()
        .enumerate()
        .map(|(i, step)| render_step(i, total, step))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Pretty-printed JSON.
///
/// # Errors
///
/// Returns `VizError::Serialization` if serialization fails.
pub fn render_json<T: serde::Serialize + ?Sized>(value: &T) -> VizResult<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Render graph traversal steps.
#[must_use]
pub fn render_graph_steps(steps: &[GraphStep]) -> String {
    let total = steps.len();
    let mut out = String::new();
    for (i, step) in steps.iter().enumerate() {
        let _ = writeln!(out, "Step {}/{total}: {}", i + 1, step.message.text);
        let _ = writeln!(out, "  visited:   {}", join_indices(&step.visited));
        let _ = writeln!(out, "  frontier:  {}", join_indices(&step.frontier));
        if let Some((from, to)) = step.edge {
            let _ = writeln!(out, "  edge:      {from}-{to}");
        }
    }
    out
}

/// One line per algorithm with its complexity.
#[must_use]
pub fn render_catalog() -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<16} {:<15} {:<12} {:<12} {:<12} {:<10} {}",
        "ALGORITHM", "NAME", "BEST", "AVERAGE", "WORST", "SPACE", "STABLE"
    );
    for entry in catalog::all() {
        let c = entry.complexity;
        let _ = writeln!(
            out,
            "{:<16} {:<15} {:<12} {:<12} {:<12} {:<10} {}",
            entry.algorithm.slug(),
            entry.name,
            c.best,
            c.average,
            c.worst,
            c.space,
            if entry.stable { "yes" } else { "no" }
        );
    }
    out
}

/// The explanation page for one algorithm.
#[must_use]
pub fn render_info(info: &AlgorithmInfo) -> String {
    let mut out = banner(info.name);
    let _ = writeln!(out, "\n{}\n", info.summary);
    let _ = writeln!(out, "Complexity:");
    let _ = writeln!(out, "  Best:    {}", info.complexity.best);
    let _ = writeln!(out, "  Average: {}", info.complexity.average);
    let _ = writeln!(out, "  Worst:   {}", info.complexity.worst);
    let _ = writeln!(out, "  Space:   {}", info.complexity.space);
    let _ = writeln!(out, "  Stable:  {}", if info.stable { "yes" } else { "no" });
    let _ = writeln!(out, "  In-place: {}", if info.in_place { "yes" } else { "no" });
    let _ = writeln!(out, "\nPros:");
    for pro in info.pros {
        let _ = writeln!(out, "  + {pro}");
    }
    let _ = writeln!(out, "\nCons:");
    for con in info.cons {
        let _ = writeln!(out, "  - {con}");
    }
    let example: Vec<String> = info.example.iter().map(ToString::to_string).collect();
    let _ = writeln!(
        out,
        "\nTry: algoviz run {} --input {}",
        info.algorithm.slug(),
        example.join(",")
    );
    out
}

/// Audit checks followed by the determinism summary.
#[must_use]
pub fn render_audit(report: &AuditReport, determinism: &DeterminismReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "Audit: {} ({} steps)", report.algorithm, report.step_count);
    let _ = writeln!(out, "{RULE}\n");
    for check in &report.checks {
        let sym = if check.passed { "✓" } else { "✗" };
        let _ = writeln!(
            out,
            "  {sym} {:<14} [{:?}] {}",
            check.id, check.severity, check.message
        );
    }

    let _ = writeln!(out, "\nDeterminism:");
    let _ = writeln!(out, "  Runs:       {}", determinism.runs);
    let _ = writeln!(out, "  Identical:  {}", determinism.consistent);
    let _ = writeln!(out, "  Digest:     {}", determinism.digest);

    let passed = report.is_verified() && determinism.consistent;
    let _ = writeln!(out, "\n{RULE}");
    let _ = writeln!(
        out,
        "{} Result: {}",
        if passed { "✓" } else { "✗" },
        if passed { "PASSED" } else { "FAILED" }
    );
    let _ = writeln!(out, "{RULE}");
    out
}

//! CLI command handlers.
//!
//! Each handler has a `*_output` core that returns the text to print, so
//! behaviour can be tested without capturing stdout. `run_cli` maps errors
//! to exit code 1.

use std::io::Write;
use std::path::Path;
use std::process::ExitCode;
use std::time::Duration;

use crate::algorithms::traversal::{graph_traversal_steps, tree_traversal_steps, Graph, GraphTraversal, TreeOrder};
use crate::algorithms::Algorithm;
use crate::audit::{audit_steps, verify_determinism};
use crate::catalog;
use crate::config::{OutputFormat, VizConfig};
use crate::error::VizResult;
use crate::input::{self, check_graph_size, elements_from_values, parse_edges, parse_values, TREE_LIMITS};
use crate::playback::{PlaybackState, StepPlayer};
use crate::step::ArrayElement;

use super::output::{
    banner, print_version, render_audit, render_catalog, render_graph_steps, render_info, render_json,
    render_step, render_steps,
};
use super::{Args, Command};

/// Main CLI entry point.
///
/// Loads the optional configuration, then dispatches to the command handler.
#[must_use]
pub fn run_cli(args: Args) -> ExitCode {
    let config = match load_config(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::from(1);
        }
    };

    let result = match args.command {
        Command::Run {
            algorithm,
            input,
            target,
            format,
            frame: None,
        } if config.playback.autoplay && format.unwrap_or(config.output.format) == OutputFormat::Text => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            match play_run(&config, algorithm, input.as_deref(), target, &mut out, std::thread::sleep) {
                Ok(_) => return ExitCode::SUCCESS,
                Err(e) => Err(e),
            }
        }
        Command::Run {
            algorithm,
            input,
            target,
            format,
            frame,
        } => run_output(&config, algorithm, input.as_deref(), target, format, frame),
        Command::List => Ok(list_output()),
        Command::Info { algorithm } => Ok(info_output(algorithm)),
        Command::Verify {
            algorithm,
            input,
            target,
            runs,
        } => match verify_output(&config, algorithm, input.as_deref(), target, runs) {
            Ok((text, passed)) => {
                println!("{text}");
                return if passed {
                    ExitCode::SUCCESS
                } else {
                    ExitCode::from(1)
                };
            }
            Err(e) => Err(e),
        },
        Command::Tree {
            order,
            input,
            format,
        } => tree_output(&config, order, &input, format),
        Command::Graph {
            mode,
            nodes,
            edges,
            start,
            format,
        } => graph_output(&config, mode, nodes, &edges, start, format),
        Command::Version => {
            print_version();
            return ExitCode::SUCCESS;
        }
    };

    match result {
        Ok(text) => {
            println!("{text}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            if e.is_input_error() {
                tracing::info!(error = %e, "rejected input");
            } else {
                tracing::warn!(error = %e, "command failed");
            }
            eprintln!("Error: {e}");
            ExitCode::from(1)
        }
    }
}

/// Load `path` if given, defaults otherwise.
///
/// # Errors
///
/// Returns any load or validation error.
pub fn load_config(path: Option<&Path>) -> VizResult<VizConfig> {
    path.map_or_else(|| Ok(VizConfig::default()), VizConfig::load)
}

/// Parse and validate user input, falling back to the catalog example.
fn resolve_input(config: &VizConfig, algorithm: Algorithm, text: Option<&str>) -> VizResult<Vec<ArrayElement>> {
    let limits = config.limits_for(algorithm);
    match text {
        Some(text) => input::prepare(algorithm, text, &limits),
        None => {
            let example = catalog::info(algorithm).example;
            input::validate_for(algorithm, example, &limits)?;
            Ok(elements_from_values(example))
        }
    }
}

/// Generate and render the steps of `algorithm`.
///
/// # Errors
///
/// Returns input, generation, seek, or serialization errors.
pub fn run_output(
    config: &VizConfig,
    algorithm: Algorithm,
    text: Option<&str>,
    target: Option<i64>,
    format: Option<OutputFormat>,
    frame: Option<usize>,
) -> VizResult<String> {
    let elements = resolve_input(config, algorithm, text)?;
    let steps = algorithm.steps(&elements, target)?;
    tracing::info!(algorithm = algorithm.slug(), steps = steps.len(), "generated");

    let mut player = StepPlayer::new(steps).with_interval(config.playback.interval());
    let format = format.unwrap_or(config.output.format);

    if let Some(frame) = frame {
        let total = player.len();
        let step = player.seek(frame)?;
        return match format {
            OutputFormat::Json => render_json(step),
            OutputFormat::Text => Ok(render_step(frame, total, step)),
        };
    }

    let steps = player.steps();
    match format {
        OutputFormat::Json => render_json(&*steps),
        OutputFormat::Text => {
            let name = catalog::info(algorithm).name;
            Ok(format!("{}\n{}", banner(name), render_steps(&steps)))
        }
    }
}

/// Animate `algorithm` into `out`, one frame per playback interval.
///
/// `tick` receives the interval before each advance; the CLI sleeps there.
/// Returns the number of frames written.
///
/// # Errors
///
/// Returns input, generation, or I/O errors.
pub fn play_run<W: Write>(
    config: &VizConfig,
    algorithm: Algorithm,
    text: Option<&str>,
    target: Option<i64>,
    out: &mut W,
    mut tick: impl FnMut(Duration),
) -> VizResult<usize> {
    let elements = resolve_input(config, algorithm, text)?;
    let steps = algorithm.steps(&elements, target)?;
    let mut player = StepPlayer::new(steps).with_interval(config.playback.interval());
    let total = player.len();
    tracing::info!(algorithm = algorithm.slug(), steps = total, "autoplay");

    writeln!(out, "{}", banner(catalog::info(algorithm).name))?;
    player.play();
    let mut shown = 0;
    while let Some(step) = player.current() {
        writeln!(out, "{}", render_step(player.frame(), total, step))?;
        out.flush()?;
        shown += 1;
        if player.state() != PlaybackState::Playing {
            break;
        }
        tick(player.interval());
        if player.advance(player.interval()) == 0 {
            break;
        }
    }
    Ok(shown)
}

/// The algorithm table.
#[must_use]
pub fn list_output() -> String {
    format!("{}\n{}", banner("algoviz - Algorithms"), render_catalog())
}

/// The explanation page for `algorithm`.
#[must_use]
pub fn info_output(algorithm: Algorithm) -> String {
    render_info(&catalog::info(algorithm))
}

/// Audit one generation and compare `runs` generations.
///
/// Returns the report text and whether everything passed.
///
/// # Errors
///
/// Returns input, generation, or serialization errors.
pub fn verify_output(
    config: &VizConfig,
    algorithm: Algorithm,
    text: Option<&str>,
    target: Option<i64>,
    runs: usize,
) -> VizResult<(String, bool)> {
    let elements = resolve_input(config, algorithm, text)?;
    let steps = algorithm.steps(&elements, target)?;
    let report = audit_steps(algorithm, &elements, &steps)?;
    let determinism = verify_determinism(algorithm, &elements, target, runs)?;
    let passed = report.is_verified() && determinism.consistent;
    tracing::info!(algorithm = algorithm.slug(), passed, "verified");

    let text = format!(
        "{}\n{}",
        banner("algoviz - Step Verification"),
        render_audit(&report, &determinism)
    );
    Ok((text, passed))
}

/// Tree traversal over `text` laid out in level order.
///
/// # Errors
///
/// Returns input or serialization errors.
pub fn tree_output(config: &VizConfig, order: TreeOrder, text: &str, format: Option<OutputFormat>) -> VizResult<String> {
    let values = parse_values(text)?;
    TREE_LIMITS.check(&values)?;
    let steps = tree_traversal_steps(&elements_from_values(&values), order);
    match format.unwrap_or(config.output.format) {
        OutputFormat::Json => render_json(&steps),
        OutputFormat::Text => Ok(format!(
            "{}\n{}",
            banner(&format!("Tree traversal: {order}")),
            render_steps(&steps)
        )),
    }
}

/// Graph traversal over `nodes` nodes and the edges in `edges`.
///
/// # Errors
///
/// Returns graph, input, or serialization errors.
pub fn graph_output(
    config: &VizConfig,
    mode: GraphTraversal,
    nodes: usize,
    edges: &str,
    start: usize,
    format: Option<OutputFormat>,
) -> VizResult<String> {
    check_graph_size(nodes)?;
    let graph = Graph::from_edges(nodes, &parse_edges(edges)?)?;
    let steps = graph_traversal_steps(&graph, start, mode)?;
    match format.unwrap_or(config.output.format) {
        OutputFormat::Json => render_json(&steps),
        OutputFormat::Text => Ok(format!(
            "{}\n{}",
            banner(&format!("Graph traversal: {mode}")),
            render_graph_steps(&steps)
        )),
    }
}

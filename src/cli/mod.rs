//! Command-line interface for algoviz.
//!
//! All CLI logic lives here rather than in `main.rs` so that it can be
//! tested. `run_cli` takes parsed [`Args`] and returns the process exit
//! code.

mod args;
mod commands;
mod output;

pub use args::{Args, Command};
pub use commands::{
    graph_output, info_output, list_output, load_config, play_run, run_cli, run_output, tree_output, verify_output,
};
pub use output::{
    banner, print_version, render_audit, render_catalog, render_graph_steps, render_info, render_json,
    render_step, render_steps, version_string,
};

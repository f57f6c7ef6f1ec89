//! CLI argument parsing.
//!
//! Commands and flags are declared with clap derive; tests drive the parser
//! through `Args::try_parse_from` so no process arguments are needed.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::algorithms::traversal::{GraphTraversal, TreeOrder};
use crate::algorithms::Algorithm;
use crate::config::OutputFormat;

/// CLI arguments container.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(
    name = "algoviz",
    version,
    about = "Step-by-step sorting, searching and traversal visualizations"
)]
pub struct Args {
    /// YAML configuration file.
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Generate and print the steps of an algorithm
    Run {
        /// Algorithm name, e.g. `bubble`, `merge-sort`, `binary`.
        algorithm: Algorithm,
        /// Comma-separated integers. Defaults to the algorithm's example.
        #[arg(short, long, allow_hyphen_values = true)]
        input: Option<String>,
        /// Value to look for (searches only).
        #[arg(short, long, allow_negative_numbers = true)]
        target: Option<i64>,
        /// Output format. Defaults to the configured format.
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
        /// Print only this frame.
        #[arg(long)]
        frame: Option<usize>,
    },
    /// List all algorithms with their complexity
    List,
    /// Show how an algorithm works, its costs and trade-offs
    Info {
        /// Algorithm name.
        algorithm: Algorithm,
    },
    /// Audit generated steps and check that generation is deterministic
    Verify {
        /// Algorithm name.
        algorithm: Algorithm,
        /// Comma-separated integers. Defaults to the algorithm's example.
        #[arg(short, long, allow_hyphen_values = true)]
        input: Option<String>,
        /// Value to look for (searches only).
        #[arg(short, long, allow_negative_numbers = true)]
        target: Option<i64>,
        /// Number of generations to compare.
        #[arg(long, default_value_t = 3)]
        runs: usize,
    },
    /// Traverse the input laid out as a complete binary tree
    Tree {
        /// `pre`, `in`, `post` or `level`.
        order: TreeOrder,
        /// Comma-separated node values in level order.
        #[arg(short, long, allow_hyphen_values = true)]
        input: String,
        /// Output format.
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// Run BFS or DFS over an undirected graph
    Graph {
        /// `bfs` or `dfs`.
        mode: GraphTraversal,
        /// Number of nodes, labelled `0..nodes`.
        #[arg(long)]
        nodes: usize,
        /// Edge list such as `0-1,1-2`.
        #[arg(long, default_value = "")]
        edges: String,
        /// Start node.
        #[arg(long, default_value_t = 0)]
        start: usize,
        /// Output format.
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// Show version information
    Version,
}

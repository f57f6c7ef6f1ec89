//! Tree and graph traversals.
//!
//! Trees are array-backed complete binary trees: the children of node `i`
//! are `2i + 1` and `2i + 2`, so any input array doubles as a tree and the
//! common [`Step`] type carries the snapshots.
//!
//! Graphs are small undirected adjacency lists. Their snapshots are
//! [`GraphStep`]s because there is no array to show, only nodes and edges.
//! Neighbours are always explored in ascending order.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

use crate::error::{VizError, VizResult};
use crate::step::{ArrayElement, Message, Step, StepDetail, StepRecorder, TraversalDetail};

// ============================================================================
// Trees
// ============================================================================

/// Depth-first or breadth-first visiting order for a binary tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TreeOrder {
    /// Node, left, right.
    PreOrder,
    /// Left, node, right.
    InOrder,
    /// Left, right, node.
    PostOrder,
    /// Level by level, left to right.
    LevelOrder,
}

impl TreeOrder {
    /// All orders.
    pub const ALL: [Self; 4] = [Self::PreOrder, Self::InOrder, Self::PostOrder, Self::LevelOrder];

    /// Display name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::PreOrder => "pre-order",
            Self::InOrder => "in-order",
            Self::PostOrder => "post-order",
            Self::LevelOrder => "level-order",
        }
    }
}

impl fmt::Display for TreeOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TreeOrder {
    type Err = VizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', '_', ' '], "");
        match normalized.strip_suffix("order").unwrap_or(&normalized) {
            "pre" => Ok(Self::PreOrder),
            "in" => Ok(Self::InOrder),
            "post" => Ok(Self::PostOrder),
            "level" | "bfs" => Ok(Self::LevelOrder),
            _ => Err(VizError::UnknownAlgorithm(s.to_string())),
        }
    }
}

struct TreeWalk<'a> {
    nodes: &'a [ArrayElement],
    visited: Vec<usize>,
    frontier: Vec<usize>,
    recorder: StepRecorder,
}

impl TreeWalk<'_> {
    fn visit(&mut self, node: usize) {
        self.visited.push(node);
        self.recorder.push(
            Step::snapshot(self.nodes, format!("Visiting {}", self.nodes[node].value))
                .pointing([node])
                .detail(StepDetail::Traversal(TraversalDetail {
                    current: Some(node),
                    visited: self.visited.clone(),
                    frontier: self.frontier.clone(),
                })),
        );
    }

    fn depth_first(&mut self, node: usize, order: TreeOrder) {
        if node >= self.nodes.len() {
            return;
        }
        self.frontier.push(node);
        let (left, right) = (2 * node + 1, 2 * node + 2);
        match order {
            TreeOrder::PreOrder => {
                self.visit(node);
                self.depth_first(left, order);
                self.depth_first(right, order);
            }
            TreeOrder::InOrder => {
                self.depth_first(left, order);
                self.visit(node);
                self.depth_first(right, order);
            }
            // Level order never recurses; it is handled by `breadth_first`.
            TreeOrder::PostOrder | TreeOrder::LevelOrder => {
                self.depth_first(left, order);
                self.depth_first(right, order);
                self.visit(node);
            }
        }
        self.frontier.pop();
    }

    fn breadth_first(&mut self) {
        let mut queue = VecDeque::from([0]);
        while let Some(node) = queue.pop_front() {
            for child in [2 * node + 1, 2 * node + 2] {
                if child < self.nodes.len() {
                    queue.push_back(child);
                }
            }
            self.frontier = queue.iter().copied().collect();
            self.visit(node);
        }
        self.frontier.clear();
    }
}

/// Generate traversal steps over `input` viewed as a complete binary tree.
#[must_use]
pub fn tree_traversal_steps(input: &[ArrayElement], order: TreeOrder) -> Vec<Step> {
    if input.is_empty() {
        return Vec::new();
    }

    let mut walk = TreeWalk {
        nodes: input,
        visited: Vec::with_capacity(input.len()),
        frontier: Vec::new(),
        recorder: StepRecorder::new(),
    };
    walk.recorder.push(
        Step::snapshot(input, format!("Starting {order} traversal at the root"))
            .detail(StepDetail::Traversal(TraversalDetail::default())),
    );

    match order {
        TreeOrder::LevelOrder => walk.breadth_first(),
        depth_first => walk.depth_first(0, depth_first),
    }

    let values: Vec<String> = walk
        .visited
        .iter()
        .map(|&i| input[i].value.to_string())
        .collect();
    let visited = walk.visited.clone();
    walk.recorder.push(
        Step::snapshot(input, format!("Traversal complete: {}", values.join(", ")))
            .detail(StepDetail::Traversal(TraversalDetail {
                current: None,
                visited,
                frontier: Vec::new(),
            })),
    );
    walk.recorder.into_steps()
}

// ============================================================================
// Graphs
// ============================================================================

/// Breadth-first or depth-first graph search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphTraversal {
    /// Queue-driven, level by level.
    Bfs,
    /// Stack-driven, deepest first.
    Dfs,
}

impl fmt::Display for GraphTraversal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Bfs => "BFS",
            Self::Dfs => "DFS",
        })
    }
}

impl FromStr for GraphTraversal {
    type Err = VizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" | "breadth" | "breadth_first" => Ok(Self::Bfs),
            "dfs" | "depth" | "depth_first" => Ok(Self::Dfs),
            _ => Err(VizError::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// Undirected graph with sorted, duplicate-free adjacency lists.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Graph {
    adjacency: Vec<Vec<usize>>,
}

impl Graph {
    /// Graph with `node_count` isolated nodes.
    #[must_use]
    pub fn new(node_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); node_count],
        }
    }

    /// Build a graph from an edge list.
    ///
    /// # Errors
    ///
    /// Returns `VizError::Graph` if an edge names a node outside
    /// `0..node_count`.
    pub fn from_edges(node_count: usize, edges: &[(usize, usize)]) -> VizResult<Self> {
        let mut graph = Self::new(node_count);
        for &(a, b) in edges {
            graph.add_edge(a, b)?;
        }
        Ok(graph)
    }

    /// Add an undirected edge. Repeated edges are ignored.
    ///
    /// # Errors
    ///
    /// Returns `VizError::Graph` if either endpoint does not exist.
    pub fn add_edge(&mut self, a: usize, b: usize) -> VizResult<()> {
        let n = self.adjacency.len();
        for node in [a, b] {
            if node >= n {
                return Err(VizError::graph(format!(
                    "edge {a}-{b} refers to node {node}, but the graph has {n} nodes"
                )));
            }
        }
        for (from, to) in [(a, b), (b, a)] {
            let list = &mut self.adjacency[from];
            if let Err(pos) = list.binary_search(&to) {
                list.insert(pos, to);
            }
        }
        Ok(())
    }

    /// Number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Neighbours of `node` in ascending order.
    #[must_use]
    pub fn neighbors(&self, node: usize) -> &[usize] {
        self.adjacency.get(node).map_or(&[], Vec::as_slice)
    }
}

/// One renderable instant of a graph traversal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphStep {
    /// Node being visited.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current: Option<usize>,
    /// Visit order so far.
    pub visited: Vec<usize>,
    /// Queue (BFS) or stack (DFS) contents, next-out first.
    pub frontier: Vec<usize>,
    /// Edge being examined.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edge: Option<(usize, usize)>,
    /// Annotation.
    pub message: Message,
}

struct GraphWalk {
    visited: Vec<usize>,
    steps: Vec<GraphStep>,
}

impl GraphWalk {
    fn push(&mut self, current: Option<usize>, frontier: Vec<usize>, edge: Option<(usize, usize)>, text: String) {
        let indices = current.into_iter().chain(edge.map(|(_, to)| to)).collect();
        self.steps.push(GraphStep {
            current,
            visited: self.visited.clone(),
            frontier,
            edge,
            message: Message { text, indices },
        });
    }
}

/// Generate traversal steps over `graph` starting at `start`.
///
/// # Errors
///
/// Returns `VizError::Graph` if `start` is not a node of `graph`.
pub fn graph_traversal_steps(graph: &Graph, start: usize, mode: GraphTraversal) -> VizResult<Vec<GraphStep>> {
    let n = graph.node_count();
    if start >= n {
        return Err(VizError::graph(format!(
            "start node {start} does not exist (graph has {n} nodes)"
        )));
    }

    let mut walk = GraphWalk {
        visited: Vec::with_capacity(n),
        steps: Vec::new(),
    };
    walk.push(None, vec![start], None, format!("Starting {mode} at node {start}"));

    match mode {
        GraphTraversal::Bfs => {
            let mut discovered = vec![false; n];
            let mut queue = VecDeque::from([start]);
            discovered[start] = true;

            while let Some(node) = queue.pop_front() {
                walk.visited.push(node);
                walk.push(Some(node), queue.iter().copied().collect(), None, format!("Visiting node {node}"));

                for &next in graph.neighbors(node) {
                    let text = if discovered[next] {
                        format!("Node {next} was already discovered")
                    } else {
                        discovered[next] = true;
                        queue.push_back(next);
                        format!("Discovered node {next}, adding it to the queue")
                    };
                    walk.push(Some(node), queue.iter().copied().collect(), Some((node, next)), text);
                }
            }
        }
        GraphTraversal::Dfs => {
            let mut seen = vec![false; n];
            let mut stack = vec![start];

            while let Some(node) = stack.pop() {
                let frontier = |stack: &[usize]| stack.iter().rev().copied().collect::<Vec<_>>();
                if seen[node] {
                    walk.push(None, frontier(&stack), None, format!("Node {node} was already visited, skipping"));
                    continue;
                }
                seen[node] = true;
                walk.visited.push(node);
                walk.push(Some(node), frontier(&stack), None, format!("Visiting node {node}"));

                // Reverse so the smallest neighbour is popped first.
                for &next in graph.neighbors(node).iter().rev() {
                    if !seen[next] {
                        stack.push(next);
                        walk.push(
                            Some(node),
                            frontier(&stack),
                            Some((node, next)),
                            format!("Pushing node {next} onto the stack"),
                        );
                    }
                }
            }
        }
    }

    let order: Vec<String> = walk.visited.iter().map(ToString::to_string).collect();
    walk.push(None, Vec::new(), None, format!("{mode} order: {}", order.join(", ")));
    Ok(walk.steps)
}

//! Subgraph rendering as Graphviz DOT.
//!
//! The drawn subgraph is the path plus every neighbor of every path code;
//! its edges are all move relations among those codes. Node sets and edge
//! sets are `BTreeSet`s so the emitted text is byte-stable across runs.

use std::collections::BTreeSet;
use std::fmt::Write as _;

use codelock_kernel::carrier::code::Code;
use codelock_kernel::operators::moves::{move_between, neighbors};

/// How a node is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeRole {
    Start,
    Goal,
    Path,
    Context,
}

impl NodeRole {
    fn fill(self) -> &'static str {
        match self {
            Self::Start => "green",
            Self::Goal => "gold",
            Self::Path => "red",
            Self::Context => "lightblue",
        }
    }

    fn width(self) -> &'static str {
        match self {
            Self::Start | Self::Goal => "0.9",
            Self::Path => "0.8",
            Self::Context => "0.55",
        }
    }
}

/// Codes to draw: the path, plus immediate neighbors when requested.
#[must_use]
pub fn subgraph_nodes(path: &[Code], include_neighbors: bool) -> BTreeSet<Code> {
    let mut nodes: BTreeSet<Code> = path.iter().cloned().collect();
    if include_neighbors {
        for code in path {
            nodes.extend(neighbors(code));
        }
    }
    nodes
}

/// Every move relation between two drawn codes, each as `(smaller, larger)`.
#[must_use]
pub fn subgraph_edges(nodes: &BTreeSet<Code>) -> BTreeSet<(Code, Code)> {
    let mut edges = BTreeSet::new();
    for code in nodes {
        for n in neighbors(code) {
            if code < &n && nodes.contains(&n) {
                edges.insert((code.clone(), n));
            }
        }
    }
    edges
}

/// Role of `code`; start wins over goal when they coincide.
#[must_use]
pub fn node_role(code: &Code, path: &[Code], start: &Code, goal: &Code) -> NodeRole {
    if code == start {
        NodeRole::Start
    } else if code == goal {
        NodeRole::Goal
    } else if path.contains(code) {
        NodeRole::Path
    } else {
        NodeRole::Context
    }
}

/// Render the neighborhood of `path` as an undirected DOT graph.
#[must_use]
pub fn to_dot(path: &[Code], start: &Code, goal: &Code) -> String {
    let nodes = subgraph_nodes(path, true);
    let edges = subgraph_edges(&nodes);
    let path_edges: BTreeSet<(&Code, &Code)> = path
        .windows(2)
        .map(|w| if w[0] < w[1] { (&w[0], &w[1]) } else { (&w[1], &w[0]) })
        .collect();

    let mut dot = String::new();
    let _ = writeln!(dot, "graph codelock {{");
    let _ = writeln!(
        dot,
        "  label=\"Subgraph (start={start}, goal={goal}) - path in red\";"
    );
    let _ = writeln!(dot, "  labelloc=t;");
    let _ = writeln!(
        dot,
        "  node [shape=circle, style=filled, fontsize=8, fixedsize=true];"
    );
    let _ = writeln!(dot, "  edge [color=\"#00000080\"];");

    for code in &nodes {
        let role = node_role(code, path, start, goal);
        let _ = writeln!(
            dot,
            "  \"{code}\" [fillcolor={}, width={}];",
            role.fill(),
            role.width()
        );
    }

    for (a, b) in &edges {
        if path_edges.contains(&(a, b)) {
            let label = path_step_label(path, a, b);
            let _ = writeln!(
                dot,
                "  \"{a}\" -- \"{b}\" [color=red, penwidth=3, label=\"{label}\"];"
            );
        } else {
            let _ = writeln!(dot, "  \"{a}\" -- \"{b}\";");
        }
    }

    dot.push_str("}\n");
    dot
}

/// Move name for the path step between `a` and `b`, in path direction.
fn path_step_label(path: &[Code], a: &Code, b: &Code) -> String {
    path.windows(2)
        .find(|w| (&w[0] == a && &w[1] == b) || (&w[0] == b && &w[1] == a))
        .and_then(|w| move_between(&w[0], &w[1]))
        .as_ref()
        .map(ToString::to_string)
        .unwrap_or_default()
}

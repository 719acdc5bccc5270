//! Serializable captures of a subtree, for logging and diffing.

use serde::Serialize;
use tracing::debug;

use crate::node::{Accessible, StateSet};
use crate::provider::Location;
use crate::search::MAX_SEARCH_DEPTH;

/// One captured node. Nodes that failed mid-capture are kept and marked dead.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NodeSnapshot {
    pub role: Option<String>,
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    pub states: StateSet,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    /// Child ID relative to the parent, for simple children.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub child_id: Option<i32>,
    pub dead: bool,
    /// Children exist below the capture depth limit.
    pub truncated: bool,
    pub children: Vec<NodeSnapshot>,
}

impl NodeSnapshot {
    /// Total number of captured nodes, this one included.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(NodeSnapshot::count).sum::<usize>()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Capture `root` and its descendants down to `max_depth` levels below it.
///
/// `max_depth` is clamped to [`MAX_SEARCH_DEPTH`] so cyclic providers terminate.
pub fn capture(root: &Accessible, max_depth: usize) -> NodeSnapshot {
    let max_depth = max_depth.min(MAX_SEARCH_DEPTH);
    let snapshot = capture_node(root, 0, max_depth);
    debug!(
        event = "acctree.snapshot.capture_completed",
        nodes = snapshot.count(),
        max_depth = max_depth
    );
    snapshot
}

fn capture_node(node: &Accessible, depth: usize, max_depth: usize) -> NodeSnapshot {
    let child_id = node.is_simple().then(|| node.child_id().0);
    let (role, name, states) = match (node.role_name(), node.name(), node.state_set()) {
        (Ok(role), Ok(name), Ok(states)) => (role, name, states),
        _ => {
            debug!(event = "acctree.snapshot.dead_node", depth = depth);
            return NodeSnapshot {
                child_id,
                dead: true,
                ..NodeSnapshot::default()
            };
        }
    };

    let mut snapshot = NodeSnapshot {
        role: Some(role),
        name,
        value: node.value().ok().flatten(),
        states,
        location: node.location().ok(),
        child_id,
        ..NodeSnapshot::default()
    };

    if depth >= max_depth {
        snapshot.truncated = node.len().is_ok_and(|len| len > 0);
        return snapshot;
    }
    snapshot.children = node
        .iter()
        .map(|child| capture_node(&child, depth + 1, max_depth))
        .collect();
    snapshot
}

/// Render a snapshot as an indented tree, one node per line.
pub fn render_tree(snapshot: &NodeSnapshot) -> String {
    let mut out = String::new();
    out.push_str(&node_label(snapshot));
    out.push('\n');
    render_children(snapshot, "", &mut out);
    out
}

fn render_children(snapshot: &NodeSnapshot, indent: &str, out: &mut String) {
    let last = snapshot.children.len().saturating_sub(1);
    for (i, child) in snapshot.children.iter().enumerate() {
        let (connector, continuation) = if i == last {
            ("└── ", "    ")
        } else {
            ("├── ", "│   ")
        };
        out.push_str(indent);
        out.push_str(connector);
        out.push_str(&node_label(child));
        out.push('\n');
        render_children(child, &format!("{}{}", indent, continuation), out);
    }
}

fn node_label(snapshot: &NodeSnapshot) -> String {
    if snapshot.dead {
        return "[DEAD]".to_string();
    }
    let mut label = format!(
        "[{} | {}]",
        snapshot.role.as_deref().unwrap_or_default(),
        snapshot.name.as_deref().unwrap_or_default()
    );
    if !snapshot.states.is_empty() {
        label.push_str(&format!(" ({})", snapshot.states));
    }
    if snapshot.truncated {
        label.push_str(" …");
    }
    label
}

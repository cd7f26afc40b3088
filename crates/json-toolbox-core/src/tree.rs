use std::time::{Duration, Instant};

use serde_json::Value;

use crate::analyze::to_pretty;

/// How long a node's copy feedback stays active.
pub const COPY_FEEDBACK_DURATION: Duration = Duration::from_millis(1500);

/// Identifier of a container node within a [`TreeState`] arena.
///
/// Ids are stable for the lifetime of one arena (pre-order position of the
/// container) and meaningless across document replacements.
pub type NodeId = usize;

/// One step from a container down to a child.
#[derive(Debug, Clone)]
enum PathSeg {
    Key(String),
    Index(usize),
}

/// Interactive state for one container in the displayed document.
#[derive(Debug, Clone)]
struct TreeNode {
    /// Path from the document root to this container.
    path: Vec<PathSeg>,
    expanded: bool,
    copy_feedback_until: Option<Instant>,
}

/// Expand/collapse and copy-feedback state for every container of one
/// document.
///
/// The arena owns the document it displays; rendering reads it, interaction
/// mutates it by node id. Replacing the document means building a fresh
/// `TreeState`; per-node state never survives replacement.
#[derive(Debug, Clone)]
pub struct TreeState {
    document: Value,
    nodes: Vec<TreeNode>,
}

impl TreeState {
    /// Build one node per container, each seeded with `global_expanded`.
    pub fn new(document: Value, global_expanded: bool) -> Self {
        let mut nodes = Vec::new();
        collect(&document, &mut Vec::new(), global_expanded, &mut nodes);
        Self { document, nodes }
    }

    /// The document this arena displays.
    pub fn document(&self) -> &Value {
        &self.document
    }

    /// Number of container nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// The container value behind `id`.
    pub fn value(&self, id: NodeId) -> Option<&Value> {
        resolve(&self.document, &self.nodes.get(id)?.path)
    }

    /// Whether `id` is currently expanded.
    pub fn is_expanded(&self, id: NodeId) -> Option<bool> {
        self.nodes.get(id).map(|node| node.expanded)
    }

    /// Flip one node's expansion. Ancestors, descendants and siblings keep
    /// their state.
    pub fn toggle(&mut self, id: NodeId) {
        if let Some(node) = self.nodes.get_mut(id) {
            node.expanded = !node.expanded;
        }
    }

    /// Set every node's expansion at once, erasing individual toggles.
    ///
    /// This is the only operation that resets per-node overrides.
    pub fn apply_global(&mut self, expanded: bool) {
        for node in &mut self.nodes {
            node.expanded = expanded;
        }
    }

    /// Pretty-print the subtree under `id` for an external clipboard and
    /// arm the node's copy feedback for [`COPY_FEEDBACK_DURATION`] from
    /// `now`.
    ///
    /// Copying the same node again restarts its window; other nodes'
    /// windows are independent.
    pub fn copy(&mut self, id: NodeId, now: Instant) -> Option<String> {
        let value = resolve(&self.document, &self.nodes.get(id)?.path)?;
        let text = to_pretty(value);
        if let Some(node) = self.nodes.get_mut(id) {
            node.copy_feedback_until = Some(now + COPY_FEEDBACK_DURATION);
        }
        Some(text)
    }

    /// Whether `id`'s copy feedback window is still open at `now`.
    pub fn copy_feedback_active(&self, id: NodeId, now: Instant) -> bool {
        self.nodes
            .get(id)
            .and_then(|node| node.copy_feedback_until)
            .is_some_and(|until| now < until)
    }

    /// Drop feedback markers whose window has passed.
    pub fn clear_expired_feedback(&mut self, now: Instant) {
        for node in &mut self.nodes {
            if node.copy_feedback_until.is_some_and(|until| until <= now) {
                node.copy_feedback_until = None;
            }
        }
    }
}

/// Pretty-print any value for the clipboard.
///
/// Leaves have no tree node; this is the copy path for them.
pub fn copy_text(value: &Value) -> String {
    to_pretty(value)
}

fn collect(value: &Value, path: &mut Vec<PathSeg>, expanded: bool, nodes: &mut Vec<TreeNode>) {
    match value {
        Value::Array(items) => {
            nodes.push(TreeNode {
                path: path.clone(),
                expanded,
                copy_feedback_until: None,
            });
            for (index, item) in items.iter().enumerate() {
                path.push(PathSeg::Index(index));
                collect(item, path, expanded, nodes);
                path.pop();
            }
        }
        Value::Object(fields) => {
            nodes.push(TreeNode {
                path: path.clone(),
                expanded,
                copy_feedback_until: None,
            });
            for (key, item) in fields {
                path.push(PathSeg::Key(key.clone()));
                collect(item, path, expanded, nodes);
                path.pop();
            }
        }
        _ => {}
    }
}

fn resolve<'a>(root: &'a Value, path: &[PathSeg]) -> Option<&'a Value> {
    let mut current = root;
    for seg in path {
        current = match seg {
            PathSeg::Key(key) => current.get(key.as_str())?,
            PathSeg::Index(index) => current.get(*index)?,
        };
    }
    Some(current)
}

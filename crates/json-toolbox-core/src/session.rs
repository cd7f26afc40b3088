use std::time::{Duration, Instant};

use serde_json::Value;
use tracing::debug;

use crate::analyze::{to_pretty, Analysis, Stats};
use crate::error::AnalyzeError;
use crate::sort::{sort_keys, SortDirection};
use crate::tree::{NodeId, TreeState};
use crate::worker::{AnalyzeResponse, AnalyzerWorker};

/// Owning session for one interactive document.
///
/// Wires the background analyzer to the displayed tree and carries the
/// pre-sort snapshot, the global expand flag, and the last error. Every
/// operation except analysis runs synchronously on the caller's thread;
/// the tree arena has no other writer.
pub struct DocumentSession {
    worker: AnalyzerWorker,
    /// Sequence of the request whose answer we still want; 0 when none.
    current_seq: u64,
    tree: Option<TreeState>,
    /// Deep copy of the document as it parsed, before any sort.
    original: Option<Value>,
    formatted: Option<String>,
    stats: Option<Stats>,
    error: Option<String>,
    global_expanded: bool,
    sort_direction: SortDirection,
}

impl DocumentSession {
    pub fn new() -> Self {
        Self {
            worker: AnalyzerWorker::spawn(),
            current_seq: 0,
            tree: None,
            original: None,
            formatted: None,
            stats: None,
            error: None,
            global_expanded: true,
            sort_direction: SortDirection::Original,
        }
    }

    /// Submit `input` for background analysis.
    ///
    /// Empty input is rejected here, before the worker sees it; the held
    /// document is dropped either way, and any in-flight request becomes
    /// stale.
    pub fn format(&mut self, input: &str) -> Result<(), AnalyzeError> {
        if input.trim().is_empty() {
            self.current_seq = 0;
            self.error = Some(AnalyzeError::EmptyInput.to_string());
            self.reset_document();
            return Err(AnalyzeError::EmptyInput);
        }
        self.current_seq = self.worker.submit(input);
        Ok(())
    }

    /// Apply any worker responses that have arrived.
    ///
    /// Responses for superseded requests are discarded. Returns true when
    /// the session state changed.
    pub fn poll(&mut self) -> bool {
        let mut changed = false;
        while let Some(response) = self.worker.try_recv() {
            changed |= self.apply(response);
        }
        changed
    }

    /// Like [`Self::poll`], but waits up to `timeout` for the answer to
    /// the current request. Returns true once it has been applied.
    pub fn poll_wait(&mut self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return false;
            }
            let Some(response) = self.worker.recv_timeout(remaining) else {
                return false;
            };
            if self.apply(response) {
                return true;
            }
        }
    }

    fn apply(&mut self, response: AnalyzeResponse) -> bool {
        if response.seq != self.current_seq {
            debug!(
                seq = response.seq,
                current = self.current_seq,
                "discarding stale analysis response"
            );
            return false;
        }
        match response.result {
            Ok(analysis) => self.install(analysis),
            Err(err) => {
                self.error = Some(err.to_string());
                self.reset_document();
            }
        }
        true
    }

    fn install(&mut self, analysis: Analysis) {
        self.original = Some(analysis.document.clone());
        self.formatted = Some(analysis.formatted);
        self.stats = Some(analysis.stats);
        self.error = None;
        self.sort_direction = SortDirection::Original;
        self.tree = Some(TreeState::new(analysis.document, self.global_expanded));
    }

    fn reset_document(&mut self) {
        self.tree = None;
        self.original = None;
        self.formatted = None;
        self.stats = None;
        self.sort_direction = SortDirection::Original;
    }

    /// Reorder the displayed document's keys, or restore the pre-sort
    /// snapshot for `Original`. No-op without a document. The tree arena
    /// is rebuilt from scratch with the current global flag.
    pub fn sort(&mut self, direction: SortDirection) {
        let Some(tree) = self.tree.take() else { return };
        let document = match (direction, &self.original) {
            (SortDirection::Original, Some(snapshot)) => {
                sort_keys(snapshot, SortDirection::Original)
            }
            _ => sort_keys(tree.document(), direction),
        };
        self.sort_direction = direction;
        self.tree = Some(TreeState::new(document, self.global_expanded));
    }

    /// Push the global expand flag into every node, erasing individual
    /// toggles, and remember it for future tree rebuilds.
    pub fn set_global_expanded(&mut self, expanded: bool) {
        self.global_expanded = expanded;
        if let Some(tree) = &mut self.tree {
            tree.apply_global(expanded);
        }
    }

    /// Flip one node's expansion.
    pub fn toggle(&mut self, id: NodeId) {
        if let Some(tree) = &mut self.tree {
            tree.toggle(id);
        }
    }

    /// Copy one container subtree; arms its feedback window.
    pub fn copy_node(&mut self, id: NodeId, now: Instant) -> Option<String> {
        self.tree.as_mut()?.copy(id, now)
    }

    /// Whether a node's copy feedback window is open at `now`.
    pub fn copy_feedback_active(&self, id: NodeId, now: Instant) -> bool {
        self.tree
            .as_ref()
            .is_some_and(|tree| tree.copy_feedback_active(id, now))
    }

    /// Pretty text of the displayed document, for the clipboard.
    pub fn copy_formatted(&self) -> Option<String> {
        Some(to_pretty(self.tree.as_ref()?.document()))
    }

    /// Reset to the initial state; the next analysis starts fresh.
    pub fn clear(&mut self) {
        self.current_seq = 0;
        self.error = None;
        self.global_expanded = true;
        self.reset_document();
    }

    pub fn document(&self) -> Option<&Value> {
        self.tree.as_ref().map(TreeState::document)
    }

    pub fn tree(&self) -> Option<&TreeState> {
        self.tree.as_ref()
    }

    pub fn stats(&self) -> Option<&Stats> {
        self.stats.as_ref()
    }

    pub fn formatted(&self) -> Option<&str> {
        self.formatted.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn global_expanded(&self) -> bool {
        self.global_expanded
    }

    pub fn sort_direction(&self) -> SortDirection {
        self.sort_direction
    }
}

impl Default for DocumentSession {
    fn default() -> Self {
        Self::new()
    }
}

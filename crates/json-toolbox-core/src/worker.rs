use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossbeam_channel::{unbounded, Receiver, Sender};
use tracing::{debug, warn};

use crate::analyze::{analyze, Analysis};
use crate::error::AnalyzeError;

/// Analysis request shipped to the worker thread.
#[derive(Debug, Clone)]
pub struct AnalyzeRequest {
    pub seq: u64,
    pub text: String,
}

/// Worker reply; `seq` echoes the request it answers.
#[derive(Debug, Clone)]
pub struct AnalyzeResponse {
    pub seq: u64,
    pub result: Result<Analysis, AnalyzeError>,
}

/// Background analyzer: one thread, typed request/response channels.
///
/// Requests are answered in submission order. A newer request does not
/// cancel in-flight work; callers decide staleness by comparing a
/// response's `seq` with the last value returned from [`Self::submit`].
/// Dropping the worker closes the request channel and joins the thread.
#[derive(Debug)]
pub struct AnalyzerWorker {
    requests: Option<Sender<AnalyzeRequest>>,
    responses: Receiver<AnalyzeResponse>,
    handle: Option<JoinHandle<()>>,
    next_seq: u64,
}

impl AnalyzerWorker {
    /// Spawn the worker thread.
    pub fn spawn() -> Self {
        let (request_tx, request_rx) = unbounded::<AnalyzeRequest>();
        let (response_tx, response_rx) = unbounded::<AnalyzeResponse>();
        let handle = thread::spawn(move || run(request_rx, response_tx));
        Self {
            requests: Some(request_tx),
            responses: response_rx,
            handle: Some(handle),
            next_seq: 0,
        }
    }

    /// Queue `text` for analysis and return the request's sequence number.
    ///
    /// Sequence numbers start at 1 and increase monotonically; 0 never
    /// names a request, so it can stand for "nothing outstanding".
    pub fn submit(&mut self, text: impl Into<String>) -> u64 {
        self.next_seq += 1;
        let seq = self.next_seq;
        let request = AnalyzeRequest {
            seq,
            text: text.into(),
        };
        let delivered = self
            .requests
            .as_ref()
            .map(|requests| requests.send(request).is_ok())
            .unwrap_or(false);
        if !delivered {
            warn!(seq, "analyzer worker is gone, request dropped");
        }
        seq
    }

    /// Non-blocking poll for the next response, in arrival order.
    pub fn try_recv(&self) -> Option<AnalyzeResponse> {
        self.responses.try_recv().ok()
    }

    /// Wait up to `timeout` for the next response.
    pub fn recv_timeout(&self, timeout: Duration) -> Option<AnalyzeResponse> {
        self.responses.recv_timeout(timeout).ok()
    }
}

impl Drop for AnalyzerWorker {
    fn drop(&mut self) {
        // Closing the request channel lets the thread drain and exit.
        self.requests.take();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

fn run(requests: Receiver<AnalyzeRequest>, responses: Sender<AnalyzeResponse>) {
    for AnalyzeRequest { seq, text } in requests.iter() {
        debug!(seq, bytes = text.len(), "analyzing document");
        let result = analyze(&text);
        if responses.send(AnalyzeResponse { seq, result }).is_err() {
            break;
        }
    }
}

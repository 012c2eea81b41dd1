//! Async driver for a [`Controller`].
//!
//! Each submission's GET runs in `spawn_blocking`; its outcome is sent back over
//! an mpsc channel and applied by whichever task owns the session, so all state
//! writes (and renders) happen on that one task. In-flight fetches are never
//! cancelled: when submissions overlap, the completion that arrives last wins.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::controller::Controller;
use crate::transport::{Transport, TransportError};
use crate::view::View;

/// Outcome of one GET, tagged with the submission it belongs to.
#[derive(Debug)]
pub struct Completion {
    pub seq: u64,
    pub outcome: Result<Vec<u8>, TransportError>,
}

pub struct Session<T: Transport, V: View> {
    controller: Controller<V>,
    transport: Arc<T>,
    completions_tx: mpsc::UnboundedSender<Completion>,
    completions_rx: mpsc::UnboundedReceiver<Completion>,
    next_seq: u64,
    in_flight: usize,
}

impl<T: Transport, V: View> Session<T, V> {
    pub fn new(controller: Controller<V>, transport: Arc<T>) -> Self {
        let (completions_tx, completions_rx) = mpsc::unbounded_channel();
        Self {
            controller,
            transport,
            completions_tx,
            completions_rx,
            next_seq: 0,
            in_flight: 0,
        }
    }

    pub fn controller(&self) -> &Controller<V> {
        &self.controller
    }

    pub fn into_controller(self) -> Controller<V> {
        self.controller
    }

    /// Number of GETs issued whose outcome has not been applied yet.
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Submits `raw`; on success issues the GET in the background.
    /// Must be called from within a tokio runtime.
    pub fn submit(&mut self, raw: &str) {
        let Some(request) = self.controller.submit(raw) else {
            return;
        };
        let seq = self.next_seq;
        self.next_seq += 1;
        self.in_flight += 1;

        let transport = Arc::clone(&self.transport);
        let tx = self.completions_tx.clone();
        let fetch = tokio::task::spawn_blocking(move || transport.get(&request));
        tokio::spawn(async move {
            let outcome = match fetch.await {
                Ok(outcome) => outcome,
                Err(e) => Err(TransportError::Failed(format!("fetch task: {e}"))),
            };
            if tx.send(Completion { seq, outcome }).is_err() {
                tracing::debug!(seq, "session gone; dropping completion");
            }
        });
        tracing::debug!(seq, in_flight = self.in_flight, "fetch issued");
    }

    fn apply(&mut self, completion: Completion) {
        self.in_flight = self.in_flight.saturating_sub(1);
        tracing::debug!(seq = completion.seq, in_flight = self.in_flight, "fetch completed");
        self.controller.complete(completion.outcome);
    }

    /// Waits for the next completion and applies it. Returns false when nothing is in flight.
    pub async fn next_completion(&mut self) -> bool {
        if self.in_flight == 0 {
            return false;
        }
        match self.completions_rx.recv().await {
            Some(completion) => {
                self.apply(completion);
                true
            }
            None => false,
        }
    }

    /// Applies completions until nothing is in flight.
    pub async fn drain(&mut self) {
        while self.next_completion().await {}
    }

    /// Submits every line received on `inputs` while applying completions as
    /// they arrive. When `inputs` closes, waits for in-flight fetches.
    pub async fn run(&mut self, mut inputs: mpsc::Receiver<String>) {
        loop {
            tokio::select! {
                line = inputs.recv() => match line {
                    Some(line) => self.submit(&line),
                    None => break,
                },
                Some(completion) = self.completions_rx.recv(), if self.in_flight > 0 => {
                    self.apply(completion);
                }
            }
        }
        self.drain().await;
    }
}

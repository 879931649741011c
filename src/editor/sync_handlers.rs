//! Sync handlers - building the pipeline, issuing it and reconciling the
//! server's canonical answer.

use super::Editor;
use crate::error::EditorResult;
use crate::sync::SyncCompletion;
use crate::types::{CropParams, Derivative, Operation, PatchBody, ResizeParams, SizeTarget};
use tracing::{debug, error, info, warn};

impl Editor {
    /// `[crop]`, plus a `resize` when the size is user-defined.
    pub fn build_operations(&self) -> EditorResult<Vec<Operation>> {
        let area = self.geometry.get()?;
        let ratio = self.ratio.ratio()?;
        let mut operations = vec![Operation::Crop(CropParams::new(area, ratio))];

        if let SizeTarget::UserDefined { width, height } = self.size.size()? {
            operations.push(Operation::Resize(ResizeParams { width, height }));
        }
        Ok(operations)
    }

    /// Send the current state to the server without waiting for the answer.
    ///
    /// If the pipeline cannot be built the sync is skipped and only logged.
    pub fn notify_change(&mut self) -> Option<u64> {
        let operations = match self.build_operations() {
            Ok(operations) => operations,
            Err(e) => {
                warn!("Sync skipped: {}", e);
                return None;
            }
        };

        let count = operations.len();
        let seq = self
            .sync
            .issue(&self.derivative_ref, &PatchBody { operations });
        info!(seq, operations = count, url = %self.derivative_ref, "Sync issued");
        Some(seq)
    }

    /// Apply every completion delivered so far. Returns how many were received.
    pub fn poll_sync(&mut self) -> usize {
        let mut received = 0;
        while let Some(completion) = self.sync.try_next() {
            self.complete_sync(completion);
            received += 1;
        }
        received
    }

    /// Wait for one completion and apply it. Returns false if nothing is in flight.
    pub async fn settle_next(&mut self) -> bool {
        match self.sync.next().await {
            Some(completion) => {
                self.complete_sync(completion);
                true
            }
            None => false,
        }
    }

    /// Wait until every issued request has completed. Returns how many were received.
    pub async fn settle(&mut self) -> usize {
        let mut received = 0;
        while self.settle_next().await {
            received += 1;
        }
        received
    }

    /// Returns true if the completion changed the editor or the document.
    fn complete_sync(&mut self, completion: SyncCompletion) -> bool {
        let SyncCompletion { seq, result } = completion;
        if !self.sync.accept(seq) {
            return false;
        }

        match result {
            Ok(derivative) => self.reconcile(seq, derivative),
            Err(e) => {
                error!(seq, "Sync failed, replacing document: {}", e);
                self.surface.replace_document(e.document_body());
            }
        }
        true
    }

    /// The server is authoritative: reset the size, replay its pipeline and
    /// re-fetch the preview.
    fn reconcile(&mut self, seq: u64, derivative: Derivative) {
        debug!(seq, operations = derivative.operations.len(), "Reconciling");

        self.size.set_size(SizeTarget::Original);
        self.replay_operations(&derivative.operations);

        // A gesture that is still live continues from the server's area.
        if let (Some(session), Ok(area)) = (self.drag.as_mut(), self.geometry.get()) {
            session.rebase(area);
        }

        let url = self.sync.preview_url(&self.derivative_ref, seq);
        self.surface.refresh_preview(&url);
    }
}

//! Sync client - PATCH round trip of the operation pipeline.
//!
//! Requests are spawned on a tokio runtime and never block the caller. Each
//! one carries a sequence number; its completion is delivered through a
//! channel that the owner drains ([`SyncClient::try_next`]) or awaits
//! ([`SyncClient::next`]). Completions arrive in completion order, so the
//! owner asks [`SyncClient::accept`] before applying one.

use crate::constants::CONTENT_PATH;
use crate::error::{SyncError, TransportError};
use crate::settings::SyncSettings;
use crate::transport::{HttpRequest, HttpResponse, Method, Transport};
use crate::types::{Derivative, PatchBody};
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, trace};

/// Result of one request, tagged with its sequence number.
#[derive(Debug)]
pub struct SyncCompletion {
    pub seq: u64,
    pub result: Result<Derivative, SyncError>,
}

pub struct SyncClient {
    transport: Arc<dyn Transport>,
    runtime: Handle,
    settings: SyncSettings,
    tx: UnboundedSender<SyncCompletion>,
    rx: UnboundedReceiver<SyncCompletion>,
    /// Sequence number of the latest issued request (0 = none yet)
    issued: u64,
    in_flight: usize,
}

impl SyncClient {
    pub fn new(transport: Arc<dyn Transport>, runtime: Handle, settings: SyncSettings) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            transport,
            runtime,
            settings,
            tx,
            rx,
            issued: 0,
            in_flight: 0,
        }
    }

    pub fn settings(&self) -> &SyncSettings {
        &self.settings
    }

    pub fn issued(&self) -> u64 {
        self.issued
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Send a PATCH of `body` to `url` and return its sequence number.
    ///
    /// The transport future is created here, in issue order. Driving it and
    /// awaiting the response happens on a spawned task.
    pub fn issue(&mut self, url: &str, body: &PatchBody) -> u64 {
        self.issued += 1;
        self.in_flight += 1;
        let seq = self.issued;

        let tx = self.tx.clone();
        let pending = patch_request(url, body).map(|request| self.transport.send(request));
        trace!(seq, url, "Spawning sync request");

        self.runtime.spawn(async move {
            let result = match pending {
                Ok(response) => match response.await {
                    Ok(response) => decode_derivative(response),
                    Err(e) => Err(e.into()),
                },
                Err(e) => Err(e.into()),
            };
            // The receiver is gone only when the editor was dropped.
            let _ = tx.send(SyncCompletion { seq, result });
        });
        seq
    }

    /// Next delivered completion, without waiting.
    pub fn try_next(&mut self) -> Option<SyncCompletion> {
        let completion = self.rx.try_recv().ok()?;
        self.in_flight = self.in_flight.saturating_sub(1);
        Some(completion)
    }

    /// Wait for the next completion. `None` once nothing is in flight.
    pub async fn next(&mut self) -> Option<SyncCompletion> {
        if self.in_flight == 0 {
            return None;
        }
        let completion = self.rx.recv().await?;
        self.in_flight = self.in_flight.saturating_sub(1);
        Some(completion)
    }

    /// Whether a completion may be applied. With stale discarding enabled only
    /// the latest issued request is applied.
    pub fn accept(&self, seq: u64) -> bool {
        if !self.settings.discard_stale_responses || seq == self.issued {
            return true;
        }
        debug!(seq, latest = self.issued, "Discarding stale sync completion");
        false
    }

    /// Preview URL with a cache-defeating stamp.
    pub fn preview_url(&self, derivative_ref: &str, seq: u64) -> String {
        preview_url(derivative_ref, &self.settings.preview_cache_param, seq)
    }
}

/// `PATCH url {"operations": [...]}`, succeeding only on HTTP 200 with a
/// derivative body.
pub async fn send_patch(
    transport: &dyn Transport,
    url: &str,
    body: &PatchBody,
) -> Result<Derivative, SyncError> {
    let response = transport.send(patch_request(url, body)?).await?;
    decode_derivative(response)
}

fn patch_request(url: &str, body: &PatchBody) -> Result<HttpRequest, TransportError> {
    let payload =
        serde_json::to_value(body).map_err(|e| TransportError::Encode(e.to_string()))?;
    Ok(HttpRequest::new(Method::Patch, url).with_json(payload))
}

fn decode_derivative(response: HttpResponse) -> Result<Derivative, SyncError> {
    if response.status != 200 {
        return Err(SyncError::Server {
            status: response.status,
            body: response.body,
        });
    }
    serde_json::from_str(&response.body).map_err(|source| SyncError::Decode {
        source,
        body: response.body,
    })
}

/// `<ref>/content?<param>=<millis>-<seq>`. The sequence number keeps two
/// refreshes within the same millisecond distinct.
pub fn preview_url(derivative_ref: &str, param: &str, seq: u64) -> String {
    let stamp = chrono::Utc::now().timestamp_millis();
    format!(
        "{}/{}?{}={}-{}",
        derivative_ref.trim_end_matches('/'),
        CONTENT_PATH,
        param,
        stamp,
        seq
    )
}

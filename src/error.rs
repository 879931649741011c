//! Error types for the editor and its server round trip.
//!
//! Local errors ([`EditorError`]) abort a state transition and leave the
//! committed selection, ratio and size untouched. Sync errors ([`SyncError`])
//! are terminal from the UI's point of view: the document is replaced with
//! whatever the server sent back.

use thiserror::Error;

/// Errors raised by local editor operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EditorError {
    /// The editor has not been initialized from an image load yet
    #[error("No active selection")]
    NoActiveSelection,

    /// Ratio fields are not positive numbers while the ratio is fixed
    #[error("Invalid ratio: {width:?} x {height:?}")]
    InvalidRatio { width: String, height: String },

    /// Size fields are not positive integers while the size is user-defined
    #[error("Invalid size: {width:?} x {height:?}")]
    InvalidSize { width: String, height: String },

    /// A pointer went down on a handle that is neither NW nor SE
    #[error("Unknown corner: {0}")]
    UnknownCorner(String),
}

/// Errors from the HTTP transport itself (no response was received).
#[derive(Error, Debug, Clone)]
pub enum TransportError {
    /// Connection, DNS or protocol failure
    #[error("Request failed: {0}")]
    Request(String),

    /// The response body could not be read
    #[error("Failed to read response body: {0}")]
    Body(String),

    /// The request body could not be encoded
    #[error("Failed to encode request body: {0}")]
    Encode(String),
}

/// Errors from one PATCH round trip of the sync client.
#[derive(Error, Debug)]
pub enum SyncError {
    /// Network failure, no response body available
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Server answered with a status other than 200
    #[error("Server responded with status {status}")]
    Server { status: u16, body: String },

    /// Server answered 200 but the body is not a derivative
    #[error("Malformed derivative in response: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
        body: String,
    },
}

impl SyncError {
    /// Content that replaces the document when this error reaches the UI.
    pub fn document_body(&self) -> &str {
        match self {
            SyncError::Transport(_) => "",
            SyncError::Server { body, .. } | SyncError::Decode { body, .. } => body,
        }
    }
}

/// Result type alias for editor operations
pub type EditorResult<T> = Result<T, EditorError>;

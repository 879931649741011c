//! Crop and resize editor for derivative images.
//!
//! The [`Editor`] keeps a selection rectangle over a source image, drives it
//! from pointer gestures under an aspect-ratio lock, and synchronizes the
//! resulting operation pipeline (`crop`, then optionally `resize`) with a
//! media server that has the final word on every value.
//!
//! The host supplies two capabilities: an [`EditorSurface`] that draws and a
//! [`Transport`] that talks HTTP ([`ReqwestTransport`] in production).

pub mod collaborators;
pub mod constants;
pub mod constraints;
pub mod editor;
pub mod error;
pub mod geometry;
pub mod input;
pub mod logging;
pub mod perf;
pub mod settings;
pub mod surface;
pub mod sync;
pub mod transport;
pub mod types;

pub use constraints::{RatioConstraint, RatioType, SizeConstraint, SizeType};
pub use editor::Editor;
pub use error::{EditorError, EditorResult, SyncError, TransportError};
pub use input::{Corner, DragState, PointerEvent, PointerTarget};
pub use settings::{Settings, SyncSettings};
pub use surface::EditorSurface;
pub use sync::SyncClient;
pub use transport::{HttpRequest, HttpResponse, Method, ReqwestTransport, Transport};
pub use types::{Area, Canvas, Derivative, Operation, Point, Ratio, SizeTarget};

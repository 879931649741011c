//! Editors for unit tests: a surface that draws nothing and a transport that
//! never reaches a server.

use super::Editor;
use crate::error::TransportError;
use crate::settings::SyncSettings;
use crate::surface::EditorSurface;
use crate::sync::SyncClient;
use crate::transport::{HttpRequest, HttpResponse, Transport};
use crate::types::{Area, Canvas};
use futures_util::future::BoxFuture;
use std::sync::{Arc, OnceLock};
use tokio::runtime::Runtime;

struct NullSurface {
    bounds: Option<Canvas>,
}

impl EditorSurface for NullSurface {
    fn canvas_bounds(&self) -> Option<Canvas> {
        self.bounds
    }

    fn render(&mut self, _area: &Area) {}

    fn refresh_preview(&mut self, _url: &str) {}

    fn replace_document(&mut self, _html: &str) {}
}

struct OfflineTransport;

impl Transport for OfflineTransport {
    fn send(&self, _request: HttpRequest) -> BoxFuture<'static, Result<HttpResponse, TransportError>> {
        Box::pin(async { Err(TransportError::Request("offline".to_string())) })
    }
}

/// Never driven: spawned requests stay pending, so unit tests observe only
/// the synchronous side of the editor.
fn runtime() -> &'static Runtime {
    static RUNTIME: OnceLock<Runtime> = OnceLock::new();
    RUNTIME.get_or_init(|| {
        tokio::runtime::Builder::new_current_thread()
            .build()
            .expect("test runtime")
    })
}

fn editor(bounds: Option<Canvas>) -> Editor {
    let sync = SyncClient::new(
        Arc::new(OfflineTransport),
        runtime().handle().clone(),
        SyncSettings::default(),
    );
    Editor::new("/derivatives/1", Box::new(NullSurface { bounds }), sync)
}

/// Editor whose image has not loaded yet.
pub(crate) fn bare_editor() -> Editor {
    editor(None)
}

/// Editor loaded with a `width` x `height` image and no prior operations.
pub(crate) fn editor_with_canvas(width: f64, height: f64) -> Editor {
    let mut editor = editor(Some(Canvas::new(width, height)));
    editor
        .on_image_loaded(&[])
        .expect("canvas bounds are available");
    editor
}

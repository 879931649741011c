//! Presentation surface consumed by the editor.
//!
//! The editor never draws anything itself. Whatever hosts it (a webview, a
//! native canvas, a test recorder) implements this trait.

use crate::constraints::{RatioConstraint, SizeConstraint};
use crate::types::{Area, Canvas};

pub trait EditorSurface {
    /// Natural dimensions of the loaded source image, `None` before load.
    fn canvas_bounds(&self) -> Option<Canvas>;

    /// Redraw the selection frame and its two handles.
    fn render(&mut self, area: &Area);

    /// Reflect the ratio and size controls (radio buttons, enabled fields).
    fn show_controls(&mut self, _ratio: &RatioConstraint, _size: &SizeConstraint) {}

    /// Point the preview image at a new URL.
    fn refresh_preview(&mut self, url: &str);

    /// Replace the whole document with server-provided content.
    fn replace_document(&mut self, html: &str);
}

//! Editor - one crop/resize editing session over a single derivative.
//!
//! The editor owns the geometry model, both constraints and the live drag
//! session, and is injected with a presentation surface and a sync client.
//! Behavior is split across submodules the same way the input handlers are:
//!
//! - `lifecycle` - construction and initialization from the loaded image
//! - `ratio_handlers` - ratio mode and field edits
//! - `size_handlers` - size mode, field edits and the resize trigger
//! - `sync_handlers` - operation building, notification and reconciliation

mod lifecycle;
mod ratio_handlers;
mod size_handlers;
mod sync_handlers;

#[cfg(test)]
pub(crate) mod test_support;

use crate::constraints::{RatioConstraint, SizeConstraint};
use crate::error::EditorResult;
use crate::geometry::Geometry;
use crate::input::{DragSession, DragState};
use crate::surface::EditorSurface;
use crate::sync::SyncClient;
use crate::types::{Area, Canvas, Ratio};

pub struct Editor {
    /// URL of the derivative resource being edited
    pub(crate) derivative_ref: String,
    pub(crate) geometry: Geometry,
    pub(crate) ratio: RatioConstraint,
    pub(crate) size: SizeConstraint,
    /// Live pointer gesture, at most one
    pub(crate) drag: Option<DragSession>,
    pub(crate) surface: Box<dyn EditorSurface>,
    pub(crate) sync: SyncClient,
}

impl Editor {
    pub fn derivative_ref(&self) -> &str {
        &self.derivative_ref
    }

    pub fn canvas(&self) -> Option<Canvas> {
        self.geometry.canvas()
    }

    pub fn ratio_constraint(&self) -> &RatioConstraint {
        &self.ratio
    }

    pub fn size_constraint(&self) -> &SizeConstraint {
        &self.size
    }

    pub fn drag_state(&self) -> DragState {
        DragState::of(self.drag.as_ref())
    }

    pub fn drag_session(&self) -> Option<&DragSession> {
        self.drag.as_ref()
    }

    /// Sequence number of the latest issued sync request (0 = none)
    pub fn sync_issued(&self) -> u64 {
        self.sync.issued()
    }

    /// Number of sync requests whose completion has not been received yet
    pub fn sync_in_flight(&self) -> usize {
        self.sync.in_flight()
    }

    /// Write a selection through the geometry model and redraw it.
    ///
    /// Out-of-range input saturates. Before image load this does nothing.
    pub fn set_selection(&mut self, area: Area) {
        self.write_selection(area);
    }

    pub fn get_selection(&self) -> EditorResult<Area> {
        self.geometry.get()
    }

    /// Normalize under the current ratio and render. Invalid ratio fields
    /// are treated as a free ratio so this never fails.
    pub(crate) fn write_selection(&mut self, area: Area) -> Option<Area> {
        let ratio = self.ratio.ratio().unwrap_or(Ratio::Free);
        let canonical = self.geometry.set(area, ratio)?;
        self.surface.render(&canonical);
        Some(canonical)
    }

    /// Re-apply the current constraints to the committed selection.
    pub(crate) fn renormalize(&mut self) -> Option<Area> {
        let area = self.geometry.get().ok()?;
        self.write_selection(area)
    }

    pub(crate) fn show_controls(&mut self) {
        self.surface.show_controls(&self.ratio, &self.size);
    }
}

//! Editor lifecycle - construction and initialization from the loaded image.

use super::Editor;
use crate::constraints::{RatioConstraint, SizeConstraint};
use crate::error::{EditorError, EditorResult};
use crate::geometry::Geometry;
use crate::surface::EditorSurface;
use crate::sync::SyncClient;
use crate::types::{Operation, SizeTarget};
use tracing::{debug, info};

impl Editor {
    /// Create an editor for the derivative at `derivative_ref`. The selection
    /// stays empty until [`Editor::on_image_loaded`] is called.
    pub fn new(
        derivative_ref: impl Into<String>,
        surface: Box<dyn EditorSurface>,
        sync: SyncClient,
    ) -> Self {
        Self {
            derivative_ref: derivative_ref.into(),
            geometry: Geometry::new(),
            ratio: RatioConstraint::new(),
            size: SizeConstraint::new(),
            drag: None,
            surface,
            sync,
        }
    }

    /// Bind the canvas to the natural size of the source image and restore the
    /// derivative's existing pipeline. Without a crop operation the selection
    /// covers the whole image.
    pub fn on_image_loaded(&mut self, initial_operations: &[Operation]) -> EditorResult<()> {
        let canvas = self
            .surface
            .canvas_bounds()
            .ok_or(EditorError::NoActiveSelection)?;
        info!(
            width = canvas.width,
            height = canvas.height,
            operations = initial_operations.len(),
            "Source image loaded"
        );

        self.drag = None;
        self.geometry.attach(canvas);
        self.replay_operations(initial_operations);
        self.renormalize();
        Ok(())
    }

    /// Apply a pipeline to the local state, in order. A crop sets the ratio
    /// before the selection so the area is normalized under its own ratio.
    pub(crate) fn replay_operations(&mut self, operations: &[Operation]) {
        for operation in operations {
            match operation {
                Operation::Crop(params) => {
                    self.ratio.set_ratio(params.ratio());
                    self.write_selection(params.area());
                }
                Operation::Resize(params) => {
                    self.size.set_size(SizeTarget::UserDefined {
                        width: params.width,
                        height: params.height,
                    });
                }
            }
            debug!(operation = operation.name(), "Replayed operation");
        }
        self.show_controls();
    }
}

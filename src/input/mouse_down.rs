//! Pointer down - gesture start on the selection frame or one of its handles.

use super::{DragState, PointerEvent, PointerTarget};
use crate::editor::Editor;
use crate::error::EditorResult;
use crate::profile_scope;
use crate::types::Point;
use tracing::debug;

impl Editor {
    /// Start a gesture. Ignored while another gesture is live.
    pub fn pointer_down(&mut self, target: PointerTarget, position: Point) -> EditorResult<()> {
        profile_scope!("pointer_down");

        self.handle_pointer(PointerEvent::Down { target, position })?;

        match self.drag_state() {
            DragState::Idle => {}
            state => debug!(?state, x = position.x, y = position.y, "Drag started"),
        }
        Ok(())
    }

    /// Start a gesture from the id of the element under the pointer.
    ///
    /// Ids in the handle family that name neither corner fail with
    /// `UnknownCorner`.
    pub fn pointer_down_on(&mut self, element_id: &str, position: Point) -> EditorResult<()> {
        let target = PointerTarget::from_element_id(element_id)?;
        self.pointer_down(target, position)
    }
}

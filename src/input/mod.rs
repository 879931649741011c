//! Pointer input handling for the selection editor.
//!
//! ## Architecture
//!
//! The drag controller is an explicit state machine (`DragSession` +
//! [`state::step`]). The handlers in this module feed pointer events through
//! it and apply the resulting effect to the editor: previews go through the
//! geometry model, commits go to the sync client.
//!
//! ## Modules
//!
//! - `state` - Drag session, pointer events and the pure transition function
//! - `mouse_down` - Pointer down (gesture start, handle resolution)
//! - `drag` - Pointer move (incremental move/resize preview)
//! - `mouse_up` - Pointer up (gesture end, sync commit)

mod state;
mod mouse_down;
mod drag;
mod mouse_up;

pub use state::{
    step, Corner, DragEffect, DragKind, DragSession, DragState, PointerEvent, PointerTarget,
    Transition,
};

use crate::editor::Editor;
use crate::error::EditorResult;

impl Editor {
    /// Feed one pointer event through the drag controller.
    ///
    /// Returns the sequence number of the sync request issued by a commit, if any.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> EditorResult<Option<u64>> {
        let selection = self.geometry.get().ok();
        let transition = step(self.drag, event, selection)?;
        Ok(self.apply_transition(transition))
    }

    fn apply_transition(&mut self, transition: Transition) -> Option<u64> {
        self.drag = transition.session;
        match transition.effect? {
            DragEffect::Preview(area) => {
                if let (Some(canonical), Some(session)) =
                    (self.write_selection(area), self.drag.as_mut())
                {
                    session.rebase(canonical);
                }
                None
            }
            DragEffect::Commit => self.notify_change(),
        }
    }
}

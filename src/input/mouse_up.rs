//! Pointer up - gesture end and the single sync commit of the gesture.

use super::{DragState, PointerEvent};
use crate::editor::Editor;
use crate::profile_scope;
use tracing::{debug, warn};

impl Editor {
    /// End the live gesture, if any, and synchronize the final selection.
    ///
    /// Returns the sequence number of the issued sync request. `None` when no
    /// gesture was live or the operation list could not be built.
    pub fn pointer_up(&mut self) -> Option<u64> {
        profile_scope!("pointer_up");

        let state = self.drag_state();
        if state == DragState::Idle {
            return None;
        }
        debug!(?state, "Drag finished");

        match self.handle_pointer(PointerEvent::Up) {
            Ok(seq) => seq,
            Err(e) => {
                warn!("Pointer up rejected: {}", e);
                None
            }
        }
    }
}

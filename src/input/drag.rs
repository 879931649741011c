//! Pointer move - incremental move and resize of the selection.
//!
//! ## Performance Notes
//!
//! Pointer move fires at display rate while a gesture is live. It never
//! touches the network: only the geometry model and the surface are updated.
//! Moves outside a gesture return before any work is done.
//!
//! Enable profiling with `cargo build --features profiling` to see timing.

use super::PointerEvent;
use crate::editor::Editor;
use crate::perf::ScopedTimer;
use crate::profile_scope;
use crate::types::Point;
use tracing::warn;

impl Editor {
    pub fn pointer_move(&mut self, position: Point) {
        if self.drag.is_none() {
            return;
        }
        profile_scope!("pointer_move");
        let _budget = ScopedTimer::for_pointer("pointer_move");

        if let Err(e) = self.handle_pointer(PointerEvent::Move { position }) {
            warn!("Pointer move rejected: {}", e);
        }
    }
}

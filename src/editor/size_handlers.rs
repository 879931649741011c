//! Size constraint handlers - mode toggle, field edits and the resize trigger.

use super::Editor;
use crate::constraints::SizeType;
use crate::error::EditorResult;
use crate::types::SizeTarget;
use tracing::debug;

impl Editor {
    pub fn size_type(&self) -> SizeType {
        self.size.size_type()
    }

    pub fn size(&self) -> EditorResult<SizeTarget> {
        self.size.size()
    }

    /// Programmatic write. Does not sync.
    pub fn set_size(&mut self, target: SizeTarget) {
        self.size.set_size(target);
        self.show_controls();
    }

    /// Toggle between original and user-defined size, then sync.
    ///
    /// Switching to user-defined with an empty field seeds both fields from
    /// the selection; without a selection the switch is kept but not synced.
    pub fn set_size_type(&mut self, mode: SizeType) -> EditorResult<Option<u64>> {
        let previous = self.size.clone();
        self.size.set_mode(mode);

        if mode == SizeType::UserDefined && self.size.has_empty_field() {
            match self.geometry.get() {
                Ok(area) => self.size.seed_from(area),
                Err(_) => {
                    debug!("Size seeding deferred until an image is loaded");
                    self.show_controls();
                    return Ok(None);
                }
            }
        }

        if let Err(e) = self.size.size() {
            self.size = previous;
            self.show_controls();
            return Err(e);
        }

        self.show_controls();
        Ok(self.notify_change())
    }

    /// Store the raw content of the size fields. Applied by [`Editor::apply_size`].
    pub fn edit_size_fields(&mut self, width: &str, height: &str) {
        self.size.set_fields(width, height);
        self.show_controls();
    }

    /// The explicit "resize" trigger: validate the fields and sync.
    pub fn apply_size(&mut self) -> EditorResult<Option<u64>> {
        self.size.size()?;
        Ok(self.notify_change())
    }
}

//! Ratio constraint handlers - mode toggle and field edits.
//!
//! Both user paths re-normalize the selection and notify the sync client: a
//! ratio change is always persisted, never just a local toggle. Invalid
//! fields leave the previous constraint and selection untouched.

use super::Editor;
use crate::constraints::RatioType;
use crate::error::EditorResult;
use crate::types::Ratio;
use tracing::debug;

impl Editor {
    pub fn ratio_type(&self) -> RatioType {
        self.ratio.ratio_type()
    }

    pub fn ratio(&self) -> EditorResult<Ratio> {
        self.ratio.ratio()
    }

    /// Programmatic write. Neither re-normalizes nor syncs.
    pub fn set_ratio(&mut self, ratio: Ratio) {
        self.ratio.set_ratio(ratio);
        self.show_controls();
    }

    /// Toggle between free and fixed.
    ///
    /// Switching to fixed with an empty field seeds both fields from the
    /// current selection. Without a selection the seeding is deferred and
    /// nothing is synced.
    pub fn set_ratio_type(&mut self, mode: RatioType) -> EditorResult<Option<u64>> {
        let previous = self.ratio.clone();
        self.ratio.set_mode(mode);

        if mode == RatioType::Fixed && self.ratio.has_empty_field() {
            match self.geometry.get() {
                Ok(area) => self.ratio.seed_from(area),
                Err(_) => {
                    debug!("Ratio seeding deferred until an image is loaded");
                    self.show_controls();
                    return Ok(None);
                }
            }
        }

        self.commit_ratio_change(previous)
    }

    /// User edit of the ratio width/height fields. While free the values are
    /// only stored.
    pub fn edit_ratio_fields(&mut self, width: &str, height: &str) -> EditorResult<Option<u64>> {
        let previous = self.ratio.clone();
        self.ratio.set_fields(width, height);

        if self.ratio.ratio_type() == RatioType::Free {
            self.show_controls();
            return Ok(None);
        }

        self.commit_ratio_change(previous)
    }

    fn commit_ratio_change(
        &mut self,
        previous: crate::constraints::RatioConstraint,
    ) -> EditorResult<Option<u64>> {
        if let Err(e) = self.ratio.ratio() {
            self.ratio = previous;
            self.show_controls();
            return Err(e);
        }

        self.renormalize();
        self.show_controls();
        Ok(self.notify_change())
    }
}

//! Output size constraint, applied after the crop.

use crate::error::{EditorError, EditorResult};
use crate::types::{Area, SizeTarget};

/// Which size radio button is selected
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SizeType {
    #[default]
    Original,
    UserDefined,
}

/// Size mode plus the raw content of the width/height fields.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SizeConstraint {
    mode: SizeType,
    width_field: String,
    height_field: String,
}

impl SizeConstraint {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size_type(&self) -> SizeType {
        self.mode
    }

    pub fn fields(&self) -> (&str, &str) {
        (&self.width_field, &self.height_field)
    }

    /// Current target. Fails while user-defined if the fields are not
    /// positive integers.
    pub fn size(&self) -> EditorResult<SizeTarget> {
        match self.mode {
            SizeType::Original => Ok(SizeTarget::Original),
            SizeType::UserDefined => {
                match (
                    parse_dimension_input(&self.width_field),
                    parse_dimension_input(&self.height_field),
                ) {
                    (Some(width), Some(height)) => Ok(SizeTarget::UserDefined { width, height }),
                    _ => Err(EditorError::InvalidSize {
                        width: self.width_field.clone(),
                        height: self.height_field.clone(),
                    }),
                }
            }
        }
    }

    /// Programmatic write, used when replaying server operations.
    pub fn set_size(&mut self, target: SizeTarget) {
        match target {
            SizeTarget::Original => self.mode = SizeType::Original,
            SizeTarget::UserDefined { width, height } => {
                self.mode = SizeType::UserDefined;
                self.width_field = width.to_string();
                self.height_field = height.to_string();
            }
        }
    }

    pub(crate) fn set_mode(&mut self, mode: SizeType) {
        self.mode = mode;
    }

    pub(crate) fn set_fields(&mut self, width: impl Into<String>, height: impl Into<String>) {
        self.width_field = width.into();
        self.height_field = height.into();
    }

    pub(crate) fn has_empty_field(&self) -> bool {
        self.width_field.trim().is_empty() || self.height_field.trim().is_empty()
    }

    /// Fill the fields from the selection dimensions, rounded to whole pixels.
    pub(crate) fn seed_from(&mut self, area: Area) {
        self.set_fields(
            area.width.round().to_string(),
            area.height.round().to_string(),
        );
    }
}

fn parse_dimension_input(value: &str) -> Option<u32> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.parse::<u32>() {
        Ok(result) if result > 0 => Some(result),
        _ => None,
    }
}

//! Aspect ratio constraint.

use crate::error::{EditorError, EditorResult};
use crate::types::{Area, Ratio};

/// Which ratio radio button is selected
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RatioType {
    #[default]
    Free,
    Fixed,
}

/// Ratio mode plus the raw content of the width/height fields.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RatioConstraint {
    mode: RatioType,
    width_field: String,
    height_field: String,
}

impl RatioConstraint {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ratio_type(&self) -> RatioType {
        self.mode
    }

    pub fn fields(&self) -> (&str, &str) {
        (&self.width_field, &self.height_field)
    }

    /// Returns true if the width/height controls accept input
    pub fn fields_enabled(&self) -> bool {
        self.mode == RatioType::Fixed
    }

    /// Current ratio. Fails while fixed if the fields are not positive numbers.
    pub fn ratio(&self) -> EditorResult<Ratio> {
        match self.mode {
            RatioType::Free => Ok(Ratio::Free),
            RatioType::Fixed => parse_pair(&self.width_field, &self.height_field),
        }
    }

    /// Programmatic write, used when replaying server operations.
    pub fn set_ratio(&mut self, ratio: Ratio) {
        match ratio {
            Ratio::Free => self.mode = RatioType::Free,
            Ratio::Fixed { width, height } => {
                self.mode = RatioType::Fixed;
                self.width_field = width.to_string();
                self.height_field = height.to_string();
            }
        }
    }

    pub(crate) fn set_mode(&mut self, mode: RatioType) {
        self.mode = mode;
    }

    pub(crate) fn set_fields(&mut self, width: impl Into<String>, height: impl Into<String>) {
        self.width_field = width.into();
        self.height_field = height.into();
    }

    pub(crate) fn has_empty_field(&self) -> bool {
        self.width_field.trim().is_empty() || self.height_field.trim().is_empty()
    }

    /// Fill the fields from the selection dimensions.
    pub(crate) fn seed_from(&mut self, area: Area) {
        self.set_fields(area.width.to_string(), area.height.to_string());
    }
}

fn parse_pair(width: &str, height: &str) -> EditorResult<Ratio> {
    match (parse_ratio_field(width), parse_ratio_field(height)) {
        (Some(width), Some(height)) => Ok(Ratio::Fixed { width, height }),
        _ => Err(EditorError::InvalidRatio {
            width: width.to_string(),
            height: height.to_string(),
        }),
    }
}

fn parse_ratio_field(value: &str) -> Option<f64> {
    match value.trim().parse::<f64>() {
        Ok(result) if result.is_finite() && result > 0.0 => Some(result),
        _ => None,
    }
}

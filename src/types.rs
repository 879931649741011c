//! Core types for the derivative editor.
//!
//! This module defines the geometric values the editor manipulates (areas,
//! pointer positions, canvas bounds), the two constraints (ratio and target
//! size), and the operation pipeline exchanged with the server.

use serde::ser::SerializeTuple;
use serde::{Deserialize, Serialize, Serializer};
use std::ops::Sub;

// ============================================================================
// Geometry
// ============================================================================

/// Rectangle in source-image pixel space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Area {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Area {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Area covering a whole canvas
    pub fn covering(canvas: Canvas) -> Self {
        Self::new(0.0, 0.0, canvas.width, canvas.height)
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Returns true if the area satisfies every bound of the canvas
    pub fn fits_in(&self, canvas: Canvas) -> bool {
        self.left >= 0.0
            && self.top >= 0.0
            && self.width >= 0.0
            && self.height >= 0.0
            && self.right() <= canvas.width
            && self.bottom() <= canvas.height
    }
}

/// Pointer position, in the same pixel space as [`Area`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Natural dimensions of the source image. Immutable once the image is loaded.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
}

impl Canvas {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

// ============================================================================
// Constraints
// ============================================================================

/// Aspect ratio lock of the selection.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Ratio {
    #[default]
    Free,
    Fixed { width: f64, height: f64 },
}

impl Ratio {
    /// Wire representation: `null` or `[w, h]`
    pub fn to_pair(self) -> Option<[f64; 2]> {
        match self {
            Ratio::Free => None,
            Ratio::Fixed { width, height } => Some([width, height]),
        }
    }

    pub fn from_pair(pair: Option<[f64; 2]>) -> Self {
        match pair {
            None => Ratio::Free,
            Some([width, height]) => Ratio::Fixed { width, height },
        }
    }

    /// Height forced by this ratio for the given width, if any.
    pub fn height_for(self, width: f64) -> Option<f64> {
        match self {
            Ratio::Free => None,
            Ratio::Fixed {
                width: w,
                height: h,
            } => Some((width * h / w).round()),
        }
    }
}

/// Output size of the derivative after the crop.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SizeTarget {
    #[default]
    Original,
    UserDefined { width: u32, height: u32 },
}

// ============================================================================
// Operation Pipeline
// ============================================================================

/// Parameters of a crop step.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CropParams {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    /// `null` for a free selection; older derivatives omit the field entirely
    #[serde(default)]
    pub ratio: Option<[f64; 2]>,
}

impl CropParams {
    pub fn new(area: Area, ratio: Ratio) -> Self {
        Self {
            left: area.left,
            top: area.top,
            width: area.width,
            height: area.height,
            ratio: ratio.to_pair(),
        }
    }

    pub fn area(&self) -> Area {
        Area::new(self.left, self.top, self.width, self.height)
    }

    pub fn ratio(&self) -> Ratio {
        Ratio::from_pair(self.ratio)
    }
}

/// Parameters of a resize step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResizeParams {
    pub width: u32,
    pub height: u32,
}

/// One step of a derivative's pipeline, serialized as `[name, params]`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(try_from = "RawOperation")]
pub enum Operation {
    Crop(CropParams),
    Resize(ResizeParams),
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Crop(_) => "crop",
            Operation::Resize(_) => "resize",
        }
    }
}

impl Serialize for Operation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(2)?;
        tuple.serialize_element(self.name())?;
        match self {
            Operation::Crop(params) => tuple.serialize_element(params)?,
            Operation::Resize(params) => tuple.serialize_element(params)?,
        }
        tuple.end()
    }
}

#[derive(Deserialize)]
struct RawOperation(String, serde_json::Value);

impl TryFrom<RawOperation> for Operation {
    type Error = String;

    fn try_from(RawOperation(name, params): RawOperation) -> Result<Self, Self::Error> {
        match name.as_str() {
            "crop" => serde_json::from_value(params)
                .map(Operation::Crop)
                .map_err(|e| format!("invalid crop parameters: {e}")),
            "resize" => serde_json::from_value(params)
                .map(Operation::Resize)
                .map_err(|e| format!("invalid resize parameters: {e}")),
            other => Err(format!("unknown operation: {other}")),
        }
    }
}

/// Body of the PATCH request sent by the sync client.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PatchBody {
    pub operations: Vec<Operation>,
}

/// Server representation of a derivative. Only `operations` drives reconciliation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Derivative {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_id: Option<u64>,
    pub operations: Vec<Operation>,
}

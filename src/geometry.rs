//! Geometry model - the selection rectangle and the canvas it lives on.
//!
//! All writes go through [`normalize`], which saturates out-of-range input
//! instead of failing. The result always satisfies:
//!
//! ```text
//! 0 <= left,  left + width  <= canvas.width,  width  >= 0
//! 0 <= top,   top  + height <= canvas.height, height >= 0
//! ```
//!
//! and, under a fixed ratio, `height == round(width * h / w)`.

use crate::error::{EditorError, EditorResult};
use crate::types::{Area, Canvas, Ratio};

/// Clamp an area into the canvas and apply the ratio lock.
///
/// Sizes are floored at 0 and capped by the canvas, positions are clamped into
/// `[0, canvas_dim - dim]`. Under a fixed ratio the width is additionally capped,
/// but only when the derived height would overflow the canvas.
pub fn normalize(area: Area, canvas: Canvas, ratio: Ratio) -> Area {
    let mut width = area.width.max(0.0).min(canvas.width);
    let height = match ratio {
        Ratio::Fixed {
            width: w,
            height: h,
        } if w > 0.0 && h > 0.0 => {
            let derived = ratio.height_for(width).unwrap_or(0.0);
            if derived <= canvas.height {
                derived
            } else {
                width = width.min((canvas.height * w / h).floor());
                ratio.height_for(width).unwrap_or(0.0)
            }
        }
        _ => area.height.max(0.0).min(canvas.height),
    };

    let left = area.left.min(canvas.width - width).max(0.0);
    let top = area.top.min(canvas.height - height).max(0.0);

    Area {
        left,
        top,
        width,
        height,
    }
}

/// Selection state owned by one editor instance.
#[derive(Clone, Debug, Default)]
pub struct Geometry {
    canvas: Option<Canvas>,
    selection: Option<Area>,
}

impl Geometry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind the canvas once the source image is known. The selection starts
    /// out covering the whole canvas.
    pub fn attach(&mut self, canvas: Canvas) {
        self.canvas = Some(canvas);
        self.selection = Some(Area::covering(canvas));
    }

    pub fn canvas(&self) -> Option<Canvas> {
        self.canvas
    }

    /// Write a new selection. A no-op before the canvas is attached.
    pub fn set(&mut self, area: Area, ratio: Ratio) -> Option<Area> {
        let canvas = self.canvas?;
        let canonical = normalize(area, canvas, ratio);
        self.selection = Some(canonical);
        Some(canonical)
    }

    pub fn get(&self) -> EditorResult<Area> {
        self.selection.ok_or(EditorError::NoActiveSelection)
    }
}

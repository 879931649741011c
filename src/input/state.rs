//! Drag state machine - pure transitions from pointer events to selection edits.
//!
//! The live gesture is an explicit `Option<DragSession>` instead of flags
//! attached to surface elements. [`step`] never touches the editor: it maps
//! `(session, event)` to `(session, effect)` and the editor applies the effect.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Moving               (pointer down on the selection frame)
//! Idle -> Resizing(NW|SE)      (pointer down on one of the two handles)
//! Moving|Resizing -> itself    (pointer move - preview, anchor reset)
//! Moving|Resizing -> Idle      (pointer up - commit, exactly once)
//! ```

use crate::constants::{FRAME_ID, HANDLE_NW_ID, HANDLE_PREFIX, HANDLE_SE_ID};
use crate::error::{EditorError, EditorResult};
use crate::types::{Area, Point};

/// Resize handle of the selection. The set is closed: there are exactly two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    /// Top-left, the bottom-right corner stays fixed
    NorthWest,
    /// Bottom-right, the top-left corner stays fixed
    SouthEast,
}

impl Corner {
    /// Resolve a handle element id. Any other handle is a programming error.
    pub fn from_handle_id(id: &str) -> EditorResult<Self> {
        match id {
            HANDLE_NW_ID => Ok(Corner::NorthWest),
            HANDLE_SE_ID => Ok(Corner::SouthEast),
            other => Err(EditorError::UnknownCorner(other.to_string())),
        }
    }

    pub fn handle_id(self) -> &'static str {
        match self {
            Corner::NorthWest => HANDLE_NW_ID,
            Corner::SouthEast => HANDLE_SE_ID,
        }
    }
}

/// What a pointer-down landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    Frame,
    Handle(Corner),
    /// Anything that does not start a gesture
    Elsewhere,
}

impl PointerTarget {
    pub fn from_element_id(id: &str) -> EditorResult<Self> {
        if id == FRAME_ID {
            Ok(PointerTarget::Frame)
        } else if id.starts_with(HANDLE_PREFIX) {
            Corner::from_handle_id(id).map(PointerTarget::Handle)
        } else {
            Ok(PointerTarget::Elsewhere)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down { target: PointerTarget, position: Point },
    Move { position: Point },
    Up,
}

/// Kind of the live gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragKind {
    Move,
    Resize(Corner),
}

impl DragKind {
    /// Apply one incremental pointer delta to an area. The result is not
    /// clamped; the geometry model does that.
    pub fn apply(self, area: Area, delta: Point) -> Area {
        let mut area = area;
        match self {
            DragKind::Move => {
                area.left += delta.x;
                area.top += delta.y;
            }
            DragKind::Resize(Corner::NorthWest) => {
                area.left += delta.x;
                area.top += delta.y;
                area.width -= delta.x;
                area.height -= delta.y;
            }
            DragKind::Resize(Corner::SouthEast) => {
                area.width += delta.x;
                area.height += delta.y;
            }
        }
        area
    }
}

/// One live pointer gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub kind: DragKind,
    /// Pointer position of the last processed event
    pub anchor: Point,
    /// Canonical selection after the last processed event
    pub last_known_area: Area,
}

impl DragSession {
    pub fn new(kind: DragKind, anchor: Point, area: Area) -> Self {
        Self {
            kind,
            anchor,
            last_known_area: area,
        }
    }

    /// Replace the tracked area with the canonical one written by the geometry.
    pub fn rebase(&mut self, area: Area) {
        self.last_known_area = area;
    }
}

/// Observable state of the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Moving,
    Resizing(Corner),
}

impl DragState {
    pub fn of(session: Option<&DragSession>) -> Self {
        match session.map(|s| s.kind) {
            None => DragState::Idle,
            Some(DragKind::Move) => DragState::Moving,
            Some(DragKind::Resize(corner)) => DragState::Resizing(corner),
        }
    }

    /// Returns true if a gesture is live
    pub fn is_dragging(&self) -> bool {
        !matches!(self, DragState::Idle)
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, DragState::Idle)
    }
}

/// Side effect requested by a transition
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragEffect {
    /// Write this (unclamped) area through the geometry model and redraw
    Preview(Area),
    /// Gesture finished: synchronize with the server
    Commit,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub session: Option<DragSession>,
    pub effect: Option<DragEffect>,
}

impl Transition {
    fn to(session: Option<DragSession>) -> Self {
        Self {
            session,
            effect: None,
        }
    }
}

/// Compute the next session and effect for one pointer event.
///
/// `selection` is the current canonical selection; it is only read when a
/// gesture starts. Events that do not fit the current state are ignored.
pub fn step(
    session: Option<DragSession>,
    event: PointerEvent,
    selection: Option<Area>,
) -> EditorResult<Transition> {
    match (session, event) {
        (None, PointerEvent::Down { target, position }) => {
            let kind = match target {
                PointerTarget::Frame => DragKind::Move,
                PointerTarget::Handle(corner) => DragKind::Resize(corner),
                PointerTarget::Elsewhere => return Ok(Transition::to(None)),
            };
            let area = selection.ok_or(EditorError::NoActiveSelection)?;
            Ok(Transition::to(Some(DragSession::new(kind, position, area))))
        }
        (Some(live), PointerEvent::Move { position }) => {
            let area = live.kind.apply(live.last_known_area, position - live.anchor);
            Ok(Transition {
                session: Some(DragSession::new(live.kind, position, area)),
                effect: Some(DragEffect::Preview(area)),
            })
        }
        (Some(_), PointerEvent::Up) => Ok(Transition {
            session: None,
            effect: Some(DragEffect::Commit),
        }),
        (current, _) => Ok(Transition::to(current)),
    }
}

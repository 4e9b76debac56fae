use crate::geometry::Point;
use strum::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "lowercase")]
pub enum PointerKind {
    Down,
    Move,
    Up,
    Cancel,
    /// Motion with no button held.
    Hover,
    Enter,
    Leave,
}

/// A single-pointer event in the button's local coordinate space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub position: Point,
}

impl PointerEvent {
    pub fn new(kind: PointerKind, position: Point) -> Self {
        Self { kind, position }
    }

    pub fn down(x: f64, y: f64) -> Self {
        Self::new(PointerKind::Down, Point::new(x, y))
    }

    pub fn moved(x: f64, y: f64) -> Self {
        Self::new(PointerKind::Move, Point::new(x, y))
    }

    pub fn up(x: f64, y: f64) -> Self {
        Self::new(PointerKind::Up, Point::new(x, y))
    }

    pub fn cancel() -> Self {
        Self::new(PointerKind::Cancel, Point::default())
    }
}

/// What the host should do after delivering an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EventResponse {
    /// False means the host should hand the event to its default handling.
    pub consumed: bool,
    pub should_redraw: bool,
    /// Index of the item that was selected when the pointer was released.
    pub chosen: Option<usize>,
}

impl EventResponse {
    pub fn ignored() -> Self {
        Self::default()
    }

    pub fn consumed() -> Self {
        Self {
            consumed: true,
            should_redraw: true,
            chosen: None,
        }
    }

    pub fn released(chosen: Option<usize>) -> Self {
        Self {
            chosen,
            ..Self::consumed()
        }
    }
}

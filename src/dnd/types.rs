use std::ops::{Add, Sub};

/// Identifier of a draggable or droppable node, unique within one drag-and-drop context.
pub type UniqueIdentifier = String;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Coordinates {
    pub x: f64,
    pub y: f64,
}

impl Coordinates {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(self, other: Coordinates) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl Add for Coordinates {
    type Output = Coordinates;

    fn add(self, rhs: Coordinates) -> Coordinates {
        Coordinates::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Coordinates {
    type Output = Coordinates;

    fn sub(self, rhs: Coordinates) -> Coordinates {
        Coordinates::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Client rect of a measured node.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    pub fn center(&self) -> Coordinates {
        Coordinates::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    pub fn translated(self, by: Coordinates) -> Rect {
        Rect::new(self.left + by.x, self.top + by.y, self.width, self.height)
    }
}

impl From<&web_sys::DomRect> for Rect {
    fn from(rect: &web_sys::DomRect) -> Self {
        Rect::new(rect.x(), rect.y(), rect.width(), rect.height())
    }
}

/// Translation applied to a node that follows the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub x: f64,
    pub y: f64,
}

impl Transform {
    pub const fn translate(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<Coordinates> for Transform {
    fn from(delta: Coordinates) -> Self {
        Transform::translate(delta.x, delta.y)
    }
}

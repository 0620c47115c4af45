use serde::{Deserialize, Serialize};

/// A point in the parent container's coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// An element's frame within its immediate parent container.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default)]
    pub width: f64,
    #[serde(default)]
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    pub fn center(&self) -> Point {
        Point {
            x: self.x + self.width / 2.0,
            y: self.y + self.height / 2.0,
        }
    }

    /// The rect's own coordinate space: same size, zero origin.
    pub fn bounds(&self) -> Rect {
        Rect {
            x: 0.0,
            y: 0.0,
            width: self.width,
            height: self.height,
        }
    }
}

/// One cell of the 3x3 grid a parent's bounds is divided into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GridPosition {
    TopLeft,
    TopMiddle,
    TopRight,
    MiddleLeft,
    MiddleMiddle,
    MiddleRight,
    BottomLeft,
    BottomMiddle,
    BottomRight,
}

impl GridPosition {
    pub fn label(self) -> &'static str {
        match self {
            GridPosition::TopLeft => "TopLeft",
            GridPosition::TopMiddle => "TopMiddle",
            GridPosition::TopRight => "TopRight",
            GridPosition::MiddleLeft => "MiddleLeft",
            GridPosition::MiddleMiddle => "MiddleMiddle",
            GridPosition::MiddleRight => "MiddleRight",
            GridPosition::BottomLeft => "BottomLeft",
            GridPosition::BottomMiddle => "BottomMiddle",
            GridPosition::BottomRight => "BottomRight",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Band {
    Low,
    Mid,
    High,
}

// Boundary values land in the outer bands: <= first third is Low,
// >= last third is High.
fn band(value: f64, extent: f64) -> Band {
    let third = extent / 3.0;
    if value <= third {
        Band::Low
    } else if value >= third * 2.0 {
        Band::High
    } else {
        Band::Mid
    }
}

/// Classify a center point into one of nine grid cells of the parent bounds.
pub fn classify_position(center: Point, parent: Rect) -> GridPosition {
    let row = band(center.y - parent.y, parent.height);
    let col = band(center.x - parent.x, parent.width);

    match (row, col) {
        (Band::Low, Band::Low) => GridPosition::TopLeft,
        (Band::Low, Band::Mid) => GridPosition::TopMiddle,
        (Band::Low, Band::High) => GridPosition::TopRight,
        (Band::Mid, Band::Low) => GridPosition::MiddleLeft,
        (Band::Mid, Band::Mid) => GridPosition::MiddleMiddle,
        (Band::Mid, Band::High) => GridPosition::MiddleRight,
        (Band::High, Band::Low) => GridPosition::BottomLeft,
        (Band::High, Band::Mid) => GridPosition::BottomMiddle,
        (Band::High, Band::High) => GridPosition::BottomRight,
    }
}

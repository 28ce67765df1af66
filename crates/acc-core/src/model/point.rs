use serde::{Deserialize, Serialize};

/// Cartesian position on the layout plane. The origin is the common
/// center of every circle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Distance from the origin.
    pub fn radius(&self) -> f64 {
        self.x.hypot(self.y)
    }
}

/// Polar coordinate in compass convention: 0° is north, positive is clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Polar {
    pub radius: f64,
    pub angle: f64,
}

impl Polar {
    pub fn new(radius: f64, angle: f64) -> Self {
        Self { radius, angle }
    }
}

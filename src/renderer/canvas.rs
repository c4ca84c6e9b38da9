//! Drawing surface abstraction
//!
//! Coordinates are canvas pixels: origin top-left, y pointing down.

use glam::Vec2;

/// Line color and width
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: [f32; 4],
    pub width: f32,
}

impl Stroke {
    pub const fn new(color: [f32; 4], width: f32) -> Self {
        Self { color, width }
    }
}

/// Anything the scene can be drawn onto
pub trait Canvas {
    /// Erase everything drawn so far
    fn clear(&mut self);

    /// Outline of a circle
    fn stroke_circle(&mut self, center: Vec2, radius: f32, stroke: &Stroke);

    /// Solid straight line
    fn line(&mut self, from: Vec2, to: Vec2, stroke: &Stroke);

    /// Straight line broken into `dash`-long pieces separated by equal gaps
    fn dashed_line(&mut self, from: Vec2, to: Vec2, stroke: &Stroke, dash: f32);

    /// Filled disc
    fn fill_dot(&mut self, center: Vec2, radius: f32, color: [f32; 4]);
}

//! Triangle-list canvas

use glam::Vec2;

use super::canvas::{Canvas, Stroke};
use super::shapes;
use super::vertex::Vertex;

/// Segments used to tessellate circles
const CIRCLE_SEGMENTS: u32 = 64;
/// Segments used for small filled dots
const DOT_SEGMENTS: u32 = 12;

/// Canvas that accumulates geometry for the GPU
#[derive(Debug, Default)]
pub struct MeshCanvas {
    vertices: Vec<Vertex>,
}

impl MeshCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }
}

impl Canvas for MeshCanvas {
    fn clear(&mut self) {
        self.vertices.clear();
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, stroke: &Stroke) {
        let half = stroke.width / 2.0;
        self.vertices.extend(shapes::ring(
            center,
            radius - half,
            radius + half,
            stroke.color,
            CIRCLE_SEGMENTS,
        ));
    }

    fn line(&mut self, from: Vec2, to: Vec2, stroke: &Stroke) {
        self.vertices
            .extend(shapes::line_quad(from, to, stroke.width, stroke.color));
    }

    fn dashed_line(&mut self, from: Vec2, to: Vec2, stroke: &Stroke, dash: f32) {
        for (a, b) in shapes::dash_spans(from, to, dash) {
            self.line(a, b, stroke);
        }
    }

    fn fill_dot(&mut self, center: Vec2, radius: f32, color: [f32; 4]) {
        self.vertices
            .extend(shapes::circle(center, radius, color, DOT_SEGMENTS));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accumulates_and_clears() {
        let mut canvas = MeshCanvas::new();
        let stroke = Stroke::new([1.0; 4], 1.0);

        canvas.line(Vec2::ZERO, Vec2::new(4.0, 0.0), &stroke);
        assert_eq!(canvas.vertices().len(), 6);

        canvas.dashed_line(Vec2::ZERO, Vec2::new(20.0, 0.0), &stroke, 5.0);
        assert_eq!(canvas.vertices().len(), 18);

        canvas.fill_dot(Vec2::ONE, 1.0, [1.0; 4]);
        canvas.stroke_circle(Vec2::ONE, 10.0, &stroke);
        assert_eq!(
            canvas.vertices().len(),
            18 + DOT_SEGMENTS as usize * 3 + CIRCLE_SEGMENTS as usize * 6
        );

        canvas.clear();
        assert!(canvas.vertices().is_empty());
    }
}

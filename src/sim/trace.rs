//! Traced path storage
//!
//! Points are kept in the order they were sampled, which is also the order they
//! are drawn in. Nothing is ever removed except by a full reset.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A single sampled point of the figure
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TracerPoint {
    pub x: f32,
    pub y: f32,
}

impl TracerPoint {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Bit-for-bit equality of both coordinates
    #[inline]
    pub fn bits_eq(&self, other: &TracerPoint) -> bool {
        self.x.to_bits() == other.x.to_bits() && self.y.to_bits() == other.y.to_bits()
    }

    #[inline]
    pub fn as_vec2(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Append-only sequence of tracer points
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TraceBuffer {
    points: Vec<TracerPoint>,
}

impl TraceBuffer {
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    pub fn append(&mut self, point: TracerPoint) {
        self.points.push(point);
    }

    /// Drop every point (capacity is kept for the next trace)
    pub fn reset(&mut self) {
        self.points.clear();
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<&TracerPoint> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&TracerPoint> {
        self.points.last()
    }

    pub fn points(&self) -> &[TracerPoint] {
        &self.points
    }

    /// Consecutive point pairs in insertion order
    pub fn segments(&self) -> Segments<'_> {
        Segments {
            inner: self.points.windows(2),
        }
    }

    /// Axis-aligned bounds of the traced points, `None` when empty
    pub fn bounds(&self) -> Option<(Vec2, Vec2)> {
        let first = self.points.first()?.as_vec2();
        Some(self.points.iter().fold((first, first), |(min, max), p| {
            let v = p.as_vec2();
            (min.min(v), max.max(v))
        }))
    }
}

/// Iterator over `(a, b)` segments of a [`TraceBuffer`]
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    inner: std::slice::Windows<'a, TracerPoint>,
}

impl Iterator for Segments<'_> {
    type Item = (TracerPoint, TracerPoint);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|pair| (pair[0], pair[1]))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Segments<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_preserves_order() {
        let mut buffer = TraceBuffer::new();
        buffer.append(TracerPoint::new(1.0, 2.0));
        buffer.append(TracerPoint::new(3.0, 4.0));
        buffer.append(TracerPoint::new(1.0, 2.0));

        assert_eq!(buffer.len(), 3);
        assert_eq!(buffer.first(), Some(&TracerPoint::new(1.0, 2.0)));
        assert_eq!(buffer.last(), Some(&TracerPoint::new(1.0, 2.0)));
        assert_eq!(buffer.points()[1], TracerPoint::new(3.0, 4.0));
    }

    #[test]
    fn test_segments() {
        let mut buffer = TraceBuffer::new();
        assert_eq!(buffer.segments().count(), 0);

        buffer.append(TracerPoint::new(0.0, 0.0));
        assert_eq!(buffer.segments().count(), 0);

        buffer.append(TracerPoint::new(1.0, 0.0));
        buffer.append(TracerPoint::new(1.0, 1.0));

        let segments: Vec<_> = buffer.segments().collect();
        assert_eq!(
            segments,
            vec![
                (TracerPoint::new(0.0, 0.0), TracerPoint::new(1.0, 0.0)),
                (TracerPoint::new(1.0, 0.0), TracerPoint::new(1.0, 1.0)),
            ]
        );
        // Restartable and non-mutating
        assert_eq!(buffer.segments().len(), 2);
        assert_eq!(buffer.len(), 3);
    }

    #[test]
    fn test_reset() {
        let mut buffer = TraceBuffer::new();
        buffer.append(TracerPoint::new(5.0, 5.0));
        buffer.reset();
        assert!(buffer.is_empty());
        assert!(buffer.first().is_none());
        assert!(buffer.bounds().is_none());
    }

    #[test]
    fn test_bounds() {
        let mut buffer = TraceBuffer::new();
        buffer.append(TracerPoint::new(3.0, -1.0));
        buffer.append(TracerPoint::new(-2.0, 4.0));
        buffer.append(TracerPoint::new(0.0, 0.0));
        let (min, max) = buffer.bounds().unwrap();
        assert_eq!(min, Vec2::new(-2.0, -1.0));
        assert_eq!(max, Vec2::new(3.0, 4.0));
    }

    #[test]
    fn test_bits_eq() {
        let a = TracerPoint::new(5.0, 5.0);
        assert!(a.bits_eq(&TracerPoint::new(5.0, 5.0)));
        assert!(!a.bits_eq(&TracerPoint::new(5.0, 5.0001)));
        assert!(!TracerPoint::new(0.0, 0.0).bits_eq(&TracerPoint::new(-0.0, 0.0)));
    }
}

//! Rotating dial geometry
//!
//! A dial is a fixed-center, fixed-radius vector that rotates by a constant
//! number of degrees every tick. Its tip traces a circle.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::degrees_to_radians;

/// Identifies one of the two dials
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DialId {
    First,
    Second,
}

impl DialId {
    pub fn as_str(&self) -> &'static str {
        match self {
            DialId::First => "first",
            DialId::Second => "second",
        }
    }
}

/// A rotating radius vector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dial {
    /// Fixed center (canvas pixels)
    center: Vec2,
    /// Fixed radius (canvas pixels)
    radius: f32,
    /// Signed change in angle per tick (degrees)
    pub angle_increment: f32,
    /// Current angle (degrees)
    angle: f32,
    /// Tip position for the current angle
    tip: Vec2,
}

impl Dial {
    pub fn new(center: Vec2, radius: f32, angle_increment: f32) -> Self {
        let mut dial = Self {
            center,
            radius,
            angle_increment,
            angle: 0.0,
            tip: center,
        };
        dial.compute_tip();
        dial
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.center
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Current angle in degrees
    #[inline]
    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// Tip position cached by the last `compute_tip`
    #[inline]
    pub fn tip(&self) -> Vec2 {
        self.tip
    }

    /// Advance the angle by one increment and refresh the tip.
    ///
    /// Wraparound is a single correction of one full turn, not a modulo:
    /// an increment of 750 moves the angle from 0 to 390.
    pub fn update(&mut self) {
        self.angle += self.angle_increment;
        if self.angle >= FULL_TURN_DEGREES {
            self.angle -= FULL_TURN_DEGREES;
        } else if self.angle < 0.0 {
            self.angle += FULL_TURN_DEGREES;
        }
        self.compute_tip();
    }

    /// Compute the tip for the current angle and cache it
    pub fn compute_tip(&mut self) -> Vec2 {
        let theta = degrees_to_radians(self.angle);
        self.tip = Vec2::new(
            self.center.x + self.radius * theta.cos(),
            self.center.y + self.radius * theta.sin(),
        );
        self.tip
    }

    /// Change the increment by `delta` degrees per tick (unbounded)
    pub fn adjust_increment(&mut self, delta: i32) {
        self.angle_increment += delta as f32;
    }

    /// Return to angle zero
    pub fn reset(&mut self) {
        self.angle = 0.0;
        self.compute_tip();
    }

    /// Read-only view for rendering
    pub fn snapshot(&self) -> DialSnapshot {
        DialSnapshot {
            center: self.center,
            radius: self.radius,
            angle: self.angle,
            angle_increment: self.angle_increment,
            tip: self.tip,
        }
    }
}

/// Immutable copy of a dial's state for the renderer and UI
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DialSnapshot {
    pub center: Vec2,
    pub radius: f32,
    pub angle: f32,
    pub angle_increment: f32,
    pub tip: Vec2,
}

/// Dial placement derived from a square drawing area
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DialLayout {
    pub first_center: Vec2,
    pub second_center: Vec2,
    pub radius: f32,
}

impl DialLayout {
    /// Exact proportions of a square of side `size`
    pub fn for_size(size: f32) -> Self {
        Self {
            first_center: Vec2::splat(size * FIRST_DIAL_CENTER_RATIO),
            second_center: Vec2::splat(size * SECOND_DIAL_CENTER_RATIO),
            radius: size * DIAL_RADIUS_RATIO,
        }
    }

    /// Layout for a canvas, snapped to whole pixels on the smaller side
    pub fn from_canvas_size(width: u32, height: u32) -> Self {
        let size = width.min(height) as f32;
        let exact = Self::for_size(size);
        Self {
            first_center: exact.first_center.floor(),
            second_center: exact.second_center.floor(),
            radius: exact.radius.floor(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EPS: f32 = 1e-3;

    #[test]
    fn test_tip_at_zero_and_ninety() {
        let mut dial = Dial::new(Vec2::new(100.0, 100.0), 75.0, 90.0);
        let tip = dial.compute_tip();
        assert!((tip.x - 175.0).abs() < EPS);
        assert!((tip.y - 100.0).abs() < EPS);

        dial.update();
        assert_eq!(dial.angle(), 90.0);
        let tip = dial.tip();
        assert!((tip.x - 100.0).abs() < EPS);
        assert!((tip.y - 175.0).abs() < EPS);
    }

    #[test]
    fn test_zero_radius_collapses_to_center() {
        let mut dial = Dial::new(Vec2::new(12.0, 34.0), 0.0, 7.0);
        for _ in 0..10 {
            dial.update();
            assert_eq!(dial.tip(), Vec2::new(12.0, 34.0));
        }
    }

    #[test]
    fn test_wraparound_single_correction() {
        let mut dial = Dial::new(Vec2::ZERO, 1.0, 400.0);
        dial.update();
        assert_eq!(dial.angle(), 40.0);
        dial.update();
        assert_eq!(dial.angle(), 80.0);

        // One correction only: this is not a modulo
        let mut dial = Dial::new(Vec2::ZERO, 1.0, 750.0);
        dial.update();
        assert_eq!(dial.angle(), 390.0);
    }

    #[test]
    fn test_wraparound_exact_turn() {
        let mut dial = Dial::new(Vec2::ZERO, 1.0, 4.0);
        for _ in 0..90 {
            dial.update();
        }
        assert_eq!(dial.angle(), 0.0);
    }

    #[test]
    fn test_negative_increment_wraps_once() {
        let mut dial = Dial::new(Vec2::ZERO, 1.0, -10.0);
        dial.update();
        assert_eq!(dial.angle(), 350.0);
        dial.update();
        assert_eq!(dial.angle(), 340.0);
    }

    #[test]
    fn test_adjust_increment_and_reset() {
        let mut dial = Dial::new(Vec2::new(10.0, 10.0), 5.0, 3.0);
        dial.adjust_increment(-5);
        assert_eq!(dial.angle_increment, -2.0);
        dial.update();
        dial.update();
        dial.reset();
        assert_eq!(dial.angle(), 0.0);
        assert_eq!(dial.tip(), Vec2::new(15.0, 10.0));
    }

    #[test]
    fn test_layout_reference_proportions() {
        let layout = DialLayout::for_size(400.0);
        assert_eq!(layout.first_center, Vec2::new(100.0, 100.0));
        assert_eq!(layout.second_center, Vec2::new(300.0, 300.0));
        assert_eq!(layout.radius, 75.0);

        let snapped = DialLayout::from_canvas_size(650, 500);
        assert_eq!(snapped.first_center, Vec2::new(125.0, 125.0));
        assert_eq!(snapped.second_center, Vec2::new(375.0, 375.0));
        assert_eq!(snapped.radius, 93.0);
    }

    proptest! {
        #[test]
        fn prop_angle_stays_in_turn(increment in 0u32..360, steps in 1usize..2000) {
            let mut dial = Dial::new(Vec2::ZERO, 1.0, increment as f32);
            for _ in 0..steps {
                dial.update();
                prop_assert!(dial.angle() >= 0.0 && dial.angle() < 360.0);
            }
            let expected = ((steps as u64 * increment as u64) % 360) as f32;
            prop_assert_eq!(dial.angle(), expected);
        }

        #[test]
        fn prop_fractional_increment_tracks_modulo(increment in 0.0f32..359.0, steps in 1usize..500) {
            let mut dial = Dial::new(Vec2::ZERO, 1.0, increment);
            for _ in 0..steps {
                dial.update();
            }
            let expected = (steps as f64 * increment as f64).rem_euclid(360.0) as f32;
            let diff = (dial.angle() - expected).abs();
            // Either side of the seam is the same direction
            prop_assert!(diff < 0.5 || (360.0 - diff) < 0.5);
        }
    }
}

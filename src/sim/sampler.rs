//! Composite tracer sampling and closure detection

use super::dial::Dial;
use super::trace::{TraceBuffer, TracerPoint};

/// Combine the dial tips into one tracer point.
///
/// The x coordinate comes from the second dial and the y coordinate from the
/// first. Swapping the axes traces a different figure.
#[inline]
pub fn sample(first: &Dial, second: &Dial) -> TracerPoint {
    TracerPoint::new(second.tip().x, first.tip().y)
}

/// True once `point`, already appended to `buffer`, lands exactly on the first
/// sampled point.
///
/// Equality is bit-exact on purpose: a figure whose dial ratio never brings both
/// angles back to the same values never closes.
pub fn is_closed(buffer: &TraceBuffer, point: &TracerPoint) -> bool {
    if buffer.len() < 2 {
        return false;
    }
    buffer.first().is_some_and(|first| first.bits_eq(point))
}

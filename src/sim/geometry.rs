//! Axis-aligned square geometry on the ground plane
//!
//! Every footprint in the arena (robot or obstacle) is a square centred on a
//! point, described by its edge length.

use glam::Vec2;

use crate::consts::SEGMENT_SAMPLES;

/// True if two squares overlap on both axes.
///
/// Strict: squares that only touch along an edge do not overlap.
#[inline]
pub fn overlaps(a: Vec2, size_a: f32, b: Vec2, size_b: f32) -> bool {
    let reach = (size_a + size_b) / 2.0;
    (a.x - b.x).abs() < reach && (a.y - b.y).abs() < reach
}

/// True if `p` lies inside the square (bounds inclusive)
#[inline]
pub fn point_in_box(p: Vec2, center: Vec2, size: f32) -> bool {
    let half = size / 2.0;
    let min = center - Vec2::splat(half);
    let max = center + Vec2::splat(half);
    p.x >= min.x && p.x <= max.x && p.y >= min.y && p.y <= max.y
}

/// Check whether the segment `p1`-`p2` passes through a square
///
/// Approximate: after a separating-axis early out, the segment is sampled at
/// `SEGMENT_SAMPLES` evenly spaced points and each is tested for containment.
/// A segment that only clips a corner between two samples is reported as a
/// miss.
pub fn segment_intersects_box(p1: Vec2, p2: Vec2, center: Vec2, size: f32) -> bool {
    let half = size / 2.0;
    let min = center - Vec2::splat(half);
    let max = center + Vec2::splat(half);

    // Both endpoints strictly beyond the same edge
    if (p1.x < min.x && p2.x < min.x)
        || (p1.x > max.x && p2.x > max.x)
        || (p1.y < min.y && p2.y < min.y)
        || (p1.y > max.y && p2.y > max.y)
    {
        return false;
    }

    // Sample from a canonical endpoint so the result does not depend on direction
    let (start, end) = if (p1.x, p1.y) <= (p2.x, p2.y) {
        (p1, p2)
    } else {
        (p2, p1)
    };
    let delta = end - start;
    let intervals = (SEGMENT_SAMPLES - 1).max(1) as f32;

    (0..SEGMENT_SAMPLES).any(|i| {
        let t = i as f32 / intervals;
        point_in_box(start + delta * t, center, size)
    })
}

//! Pointer geometry — segment ↔ angle ↔ rotation mapping
//!
//! Rotation is unbounded (monotonically increasing across sessions). The
//! pointer sits at a fixed screen angle at the top of the wheel; the winning
//! segment is whichever segment the pointer reads once the wheel stops.

use std::f64::consts::{FRAC_PI_2, TAU};

/// Fixed pointer angle in screen coordinates (top of the wheel)
pub const POINTER_ANGLE: f64 = -FRAC_PI_2;

/// Angular width of one segment on an `n`-segment wheel
#[inline]
pub fn segment_width(n: usize) -> f64 {
    TAU / n as f64
}

/// Start angle of segment `index` at the given wheel rotation
#[inline]
pub fn angle_of_segment(index: usize, n: usize, rotation: f64) -> f64 {
    index as f64 * segment_width(n) + rotation
}

/// Which segment currently sits under the pointer.
///
/// Exact inverse of [`target_rotation_for`]: for every valid index `i` and
/// every starting rotation `r`,
/// `segment_under_pointer(target_rotation_for(i, n, r, k), n) == i`.
pub fn segment_under_pointer(rotation: f64, n: usize) -> usize {
    let w = segment_width(n);
    let offset = (POINTER_ANGLE - rotation).rem_euclid(TAU);
    // rem_euclid can land exactly on TAU for pathological inputs; clamp the
    // derived index into range instead of wrapping.
    ((offset / w) as usize).min(n - 1)
}

/// Rotation that lands segment `index` centered under the pointer.
///
/// Minimal forward rotation from `current_rotation`, plus `extra_turns` full
/// revolutions for visual effect (at least one, so the target is always a
/// full turn beyond the start). The result is continuous with wherever the
/// wheel currently rests — it never resets toward zero.
pub fn target_rotation_for(
    index: usize,
    n: usize,
    current_rotation: f64,
    extra_turns: u32,
) -> f64 {
    let w = segment_width(n);
    // Rotation (mod 2π) that puts the segment midpoint exactly on the pointer.
    let aligned = POINTER_ANGLE - (index as f64 + 0.5) * w;
    let forward = (aligned - current_rotation).rem_euclid(TAU);
    current_rotation + forward + TAU * f64::from(extra_turns.max(1))
}

//! # fw-render — FortuneWheel Render Adapter
//!
//! Turns (wheel, rotation, palette) into a list of draw directives — the only
//! contract the presentation layer needs. Stateless per frame: calling it
//! twice with the same rotation yields identical output, and nothing here
//! mutates the wheel or the session.
//!
//! All radii are normalized to a unit wheel; the rasterizer scales by its own
//! pixel radius.

use std::f64::consts::FRAC_PI_2;

use serde::{Deserialize, Serialize};

use fw_core::{geometry, Color, ThemeColors, Wheel};

/// Fraction of the wheel radius at which segment labels sit
pub const LABEL_RADIUS: f64 = 0.75;

/// Fill colors for the alternating segment pattern
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WheelPalette {
    /// Fill for even-indexed segments
    pub even_fill: Color,
    /// Fill for odd-indexed segments
    pub odd_fill: Color,
    /// Label text color
    pub label: Color,
}

impl WheelPalette {
    /// Derive the palette from host theme colors: the button color darkened
    /// and lightened by 20% alternating by parity, labels in the theme text
    /// color on buttons.
    pub fn from_theme(theme: &ThemeColors) -> Self {
        Self {
            even_fill: theme.button.darken(0.2),
            odd_fill: theme.button.lighten(0.2),
            label: theme.button_text,
        }
    }
}

impl Default for WheelPalette {
    fn default() -> Self {
        Self::from_theme(&ThemeColors::default())
    }
}

/// Draw directive for one segment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentDirective {
    /// Segment index on the wheel
    pub index: usize,
    /// Arc start angle in radians (screen coordinates)
    pub start_angle: f64,
    /// Arc end angle in radians
    pub end_angle: f64,
    /// Fill color (alternates by parity)
    pub fill: Color,
    /// Label text
    pub label: String,
    /// Label anchor angle — the segment mid-angle
    pub label_angle: f64,
    /// Label distance from center, as a fraction of the wheel radius
    pub label_radius: f64,
    /// Text rotation keeping the label upright relative to the wheel
    pub label_rotation: f64,
}

/// One rendered frame: every segment plus the frame context
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WheelFrame {
    /// Wheel rotation this frame was rendered at
    pub rotation: f64,
    /// Fixed pointer angle the winner is read against
    pub pointer_angle: f64,
    /// Per-segment draw directives, in wheel order
    pub segments: Vec<SegmentDirective>,
}

/// Render the wheel at `rotation` into draw directives.
///
/// Pure: callable at arbitrary frequency, output depends only on the inputs.
pub fn render_frame(wheel: &Wheel, rotation: f64, palette: &WheelPalette) -> WheelFrame {
    let n = wheel.segment_count();
    let width = wheel.segment_width();

    let segments = wheel
        .labels()
        .iter()
        .enumerate()
        .map(|(index, label)| {
            let start_angle = geometry::angle_of_segment(index, n, rotation);
            let mid_angle = start_angle + width / 2.0;
            SegmentDirective {
                index,
                start_angle,
                end_angle: start_angle + width,
                fill: if index % 2 == 0 {
                    palette.even_fill
                } else {
                    palette.odd_fill
                },
                label: label.clone(),
                label_angle: mid_angle,
                label_radius: LABEL_RADIUS,
                // Rotate the glyphs so text reads outward, upright relative
                // to the wheel.
                label_rotation: mid_angle + FRAC_PI_2,
            }
        })
        .collect();

    WheelFrame {
        rotation,
        pointer_angle: geometry::POINTER_ANGLE,
        segments,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::TAU;

    fn wheel() -> Wheel {
        Wheel::numeric(30).unwrap()
    }

    #[test]
    fn segments_cover_full_circle_in_order() {
        let frame = render_frame(&wheel(), 0.0, &WheelPalette::default());
        assert_eq!(frame.segments.len(), 30);

        let width = TAU / 30.0;
        for (i, seg) in frame.segments.iter().enumerate() {
            assert_eq!(seg.index, i);
            assert_relative_eq!(seg.start_angle, i as f64 * width);
            assert_relative_eq!(seg.end_angle - seg.start_angle, width, max_relative = 1e-12);
            assert_relative_eq!(seg.label_angle, seg.start_angle + width / 2.0);
            assert_eq!(seg.label_radius, LABEL_RADIUS);
        }
        // End-to-end coverage with no gap.
        assert_relative_eq!(frame.segments.last().unwrap().end_angle, TAU, max_relative = 1e-12);
    }

    #[test]
    fn idempotent_at_identical_rotation() {
        let a = render_frame(&wheel(), 123.456, &WheelPalette::default());
        let b = render_frame(&wheel(), 123.456, &WheelPalette::default());
        assert_eq!(a, b);
    }

    #[test]
    fn rotation_shifts_every_segment() {
        let zero = render_frame(&wheel(), 0.0, &WheelPalette::default());
        let spun = render_frame(&wheel(), 1.25, &WheelPalette::default());
        for (a, b) in zero.segments.iter().zip(&spun.segments) {
            assert_relative_eq!(b.start_angle - a.start_angle, 1.25, max_relative = 1e-12);
        }
        assert_eq!(spun.rotation, 1.25);
    }

    #[test]
    fn fills_alternate_by_parity() {
        let palette = WheelPalette::default();
        let frame = render_frame(&wheel(), 0.0, &palette);
        for seg in &frame.segments {
            let expected = if seg.index % 2 == 0 {
                palette.even_fill
            } else {
                palette.odd_fill
            };
            assert_eq!(seg.fill, expected);
        }
    }

    #[test]
    fn labels_upright_relative_to_wheel() {
        let frame = render_frame(&wheel(), 0.0, &WheelPalette::default());
        for seg in &frame.segments {
            assert_relative_eq!(seg.label_rotation, seg.label_angle + FRAC_PI_2);
        }
    }

    #[test]
    fn directive_contract_serializes() {
        // JSON float parsing may drift by an ulp, so angles are compared
        // approximately; everything discrete must survive exactly.
        let frame = render_frame(&Wheel::numeric(4).unwrap(), 0.5, &WheelPalette::default());
        let json = serde_json::to_string(&frame).unwrap();
        let back: WheelFrame = serde_json::from_str(&json).unwrap();

        assert_relative_eq!(back.rotation, frame.rotation, max_relative = 1e-12);
        assert_relative_eq!(back.pointer_angle, frame.pointer_angle, max_relative = 1e-12);
        assert_eq!(back.segments.len(), frame.segments.len());
        for (b, a) in back.segments.iter().zip(&frame.segments) {
            assert_eq!(b.index, a.index);
            assert_eq!(b.label, a.label);
            assert_eq!(b.fill, a.fill);
            assert_eq!(b.label_radius, a.label_radius);
            assert_relative_eq!(b.start_angle, a.start_angle, max_relative = 1e-12);
            assert_relative_eq!(b.end_angle, a.end_angle, max_relative = 1e-12);
            assert_relative_eq!(b.label_angle, a.label_angle, max_relative = 1e-12);
            assert_relative_eq!(b.label_rotation, a.label_rotation, max_relative = 1e-12);
        }
    }
}

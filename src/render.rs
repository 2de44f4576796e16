//! Procedural renderer for the droplet app icon.
//!
//! An icon is painted in three passes onto a transparent square canvas:
//!
//! 1. a rounded square filled with a vertical gradient,
//! 2. a translucent white droplet,
//! 3. a power-button glyph (ring plus vertical bar) composited on top.
//!
//! All geometry is authored against a 512px design and scaled linearly, so
//! every size is an independent, deterministic function of `size`.

use crate::shapes::{blend_over, Point, Polygon};
use anyhow::Result;
use image::{Rgb, Rgba, RgbaImage};
use std::f32::consts::PI;

/// Resolution the shape constants below are expressed in
const DESIGN_SIZE: f32 = 512.0;

/// Corner radius as a fraction of the icon size
const CORNER_RATIO: f32 = 0.22;

const DROPLET_APEX_Y: f32 = 106.67;
const DROPLET_LOBE_Y: f32 = 256.0;
const DROPLET_LOBE_RADIUS: f32 = 64.0;
/// How far the side curves reach relative to the lobe radius
const DROPLET_SIDE_TAPER: f32 = 0.8;
const DROPLET_SAMPLES: u32 = 30;

const POWER_CENTER_Y: f32 = 362.67;
const POWER_RADIUS: f32 = 32.0;
const POWER_STROKE: f32 = 8.0;
const POWER_BAR_TOP_Y: f32 = 324.0;
const MIN_STROKE: u32 = 2;

/// Fixed colors of the icon
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    /// Background color at the top row
    pub gradient_top: Rgb<u8>,
    /// Background color the gradient approaches at the bottom row
    pub gradient_bottom: Rgb<u8>,
    pub droplet: Rgba<u8>,
    pub glyph: Rgba<u8>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            gradient_top: Rgb([102, 126, 234]),
            gradient_bottom: Rgb([118, 75, 162]),
            droplet: Rgba([255, 255, 255, 230]),
            glyph: Rgba([255, 255, 255, 230]),
        }
    }
}

/// Reject sizes that would produce an empty image
pub fn validate_size(size: u32) -> Result<()> {
    if size == 0 {
        anyhow::bail!("Icon size must be positive, got {}", size);
    }
    Ok(())
}

/// Render the complete icon at `size`×`size` pixels.
pub fn render_icon(size: u32, palette: &Palette) -> Result<RgbaImage> {
    validate_size(size)?;

    let mut canvas = RgbaImage::new(size, size);
    paint_background(&mut canvas, palette);
    paint_droplet(&mut canvas, palette);
    paint_power_glyph(&mut canvas, palette);

    Ok(canvas)
}

/// Pixel radius of the background's rounded corners
pub fn corner_radius(size: u32) -> u32 {
    (size as f32 * CORNER_RATIO).round() as u32
}

/// Paint the gradient rounded square.
///
/// Every pixel is either left fully transparent or set fully opaque; the
/// corners are not anti-aliased.
pub fn paint_background(canvas: &mut RgbaImage, palette: &Palette) {
    let size = canvas.width();
    let radius = corner_radius(size);

    for y in 0..size {
        let color = gradient_at(y, size, palette);

        for x in 0..size {
            if in_rounded_rect(x, y, size, radius) {
                canvas.put_pixel(x, y, color);
            }
        }
    }
}

fn gradient_at(y: u32, size: u32, palette: &Palette) -> Rgba<u8> {
    let ratio = y as f32 / size as f32;
    let lerp = |i: usize| {
        let from = palette.gradient_top[i] as f32;
        let to = palette.gradient_bottom[i] as f32;
        (from + (to - from) * ratio) as u8
    };

    Rgba([lerp(0), lerp(1), lerp(2), 255])
}

/// Whether pixel (x, y) lies inside a `size` square whose corners are
/// rounded with `radius`.
fn in_rounded_rect(x: u32, y: u32, size: u32, radius: u32) -> bool {
    let (x, y, size, r) = (x as i64, y as i64, size as i64, radius as i64);
    let far = size - r;

    // Distance into the corner square along each axis, if the pixel is in one
    let corner_offset = |v: i64| {
        if v < r {
            Some(r - v)
        } else if v >= far {
            Some(v - far)
        } else {
            None
        }
    };

    match (corner_offset(x), corner_offset(y)) {
        (Some(dx), Some(dy)) => dx * dx + dy * dy <= r * r,
        _ => true,
    }
}

/// Build the droplet outline for an icon of `size` pixels.
///
/// Starts at the apex, runs down the left side curve, around the bottom
/// lobe from left to right, and back up the right side curve.
pub fn droplet_outline(size: u32) -> Polygon {
    let scale = size as f32 / DESIGN_SIZE;
    let center_x = size as f32 / 2.0;
    let apex_y = DROPLET_APEX_Y * scale;
    let lobe_y = DROPLET_LOBE_Y * scale;
    let lobe_radius = DROPLET_LOBE_RADIUS * scale;

    let side_point = |i: u32, direction: f32| {
        let t = i as f32 / DROPLET_SAMPLES as f32;
        let y = apex_y + (lobe_y - apex_y) * t;
        let x_offset = lobe_radius * (t * PI / 2.0).sin() * DROPLET_SIDE_TAPER;
        Point::new(center_x + direction * x_offset, y)
    };

    let mut outline = Polygon::new();
    outline.push(Point::new(center_x, apex_y));

    for i in 1..DROPLET_SAMPLES {
        outline.push(side_point(i, -1.0));
    }

    // Lower half of the lobe, sweeping 180° -> 0°
    for i in 0..=DROPLET_SAMPLES {
        let angle = PI - PI * i as f32 / DROPLET_SAMPLES as f32;
        outline.push(Point::new(
            center_x + lobe_radius * angle.cos(),
            lobe_y + lobe_radius * angle.sin(),
        ));
    }

    for i in (1..DROPLET_SAMPLES).rev() {
        outline.push(side_point(i, 1.0));
    }

    outline
}

/// Paint the droplet silhouette with the palette's droplet color.
pub fn paint_droplet(canvas: &mut RgbaImage, palette: &Palette) {
    droplet_outline(canvas.width()).fill(canvas, palette.droplet);
}

/// Stroke width of the power glyph, never thinner than two pixels
pub fn glyph_stroke(size: u32) -> u32 {
    ((POWER_STROKE * size as f32 / DESIGN_SIZE) as u32).max(MIN_STROKE)
}

/// Composite the power glyph: a ring with a bar rising from its center
/// through the top of the ring.
///
/// Ring and bar are merged into a single coverage test so pixels where they
/// overlap are blended once.
pub fn paint_power_glyph(canvas: &mut RgbaImage, palette: &Palette) {
    let size = canvas.width();
    let scale = size as f32 / DESIGN_SIZE;
    let center_x = size as f32 / 2.0;
    let center_y = POWER_CENTER_Y * scale;
    let radius = POWER_RADIUS * scale;
    let bar_top = POWER_BAR_TOP_Y * scale;
    let stroke = glyph_stroke(size) as f32;
    let half_stroke = stroke / 2.0;

    for y in 0..size {
        let py = y as f32 + 0.5;

        for x in 0..size {
            let px = x as f32 + 0.5;

            // Ring is stroked inward from its radius
            let distance = (px - center_x).hypot(py - center_y);
            let in_ring = distance <= radius && distance > radius - stroke;

            let in_bar = px >= center_x - half_stroke
                && px < center_x + half_stroke
                && py >= bar_top
                && py <= center_y;

            if in_ring || in_bar {
                let below = *canvas.get_pixel(x, y);
                canvas.put_pixel(x, y, blend_over(below, palette.glyph));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corner_radius() {
        assert_eq!(corner_radius(1), 0);
        assert_eq!(corner_radius(16), 4);
        assert_eq!(corner_radius(192), 42);
        assert_eq!(corner_radius(512), 113);
    }

    #[test]
    fn test_in_rounded_rect_corners_and_bands() {
        let size = 100;
        let radius = corner_radius(size);

        // The extreme corners are cut away
        assert!(!in_rounded_rect(0, 0, size, radius));
        assert!(!in_rounded_rect(99, 0, size, radius));
        assert!(!in_rounded_rect(0, 99, size, radius));
        assert!(!in_rounded_rect(99, 99, size, radius));

        // Edge midpoints and the center are inside
        assert!(in_rounded_rect(50, 0, size, radius));
        assert!(in_rounded_rect(0, 50, size, radius));
        assert!(in_rounded_rect(50, 50, size, radius));

        // The corner circle's center is inside
        assert!(in_rounded_rect(radius, radius, size, radius));
    }

    #[test]
    fn test_zero_radius_keeps_full_square() {
        for y in 0..3 {
            for x in 0..3 {
                assert!(in_rounded_rect(x, y, 3, 0));
            }
        }
    }

    #[test]
    fn test_gradient_endpoints() {
        let palette = Palette::default();

        assert_eq!(gradient_at(0, 512, &palette), Rgba([102, 126, 234, 255]));

        let bottom = gradient_at(511, 512, &palette);
        assert!(bottom[0] >= 117);
        assert!(bottom[1] <= 76);
        assert!(bottom[2] <= 163);
    }

    #[test]
    fn test_droplet_outline_is_symmetric() {
        let outline = droplet_outline(512);
        let points = outline.points();

        // Apex, two side curves and the closing lobe arc
        let samples = DROPLET_SAMPLES as usize;
        assert_eq!(points.len(), 1 + 2 * (samples - 1) + samples + 1);
        assert_eq!(points[0], Point::new(256.0, DROPLET_APEX_Y));

        for (left, right) in points[1..samples]
            .iter()
            .zip(points[points.len() - samples + 1..].iter().rev())
        {
            assert!((left.y - right.y).abs() < 1e-3);
            assert!(((256.0 - left.x) - (right.x - 256.0)).abs() < 1e-3);
        }
    }

    #[test]
    fn test_glyph_stroke_has_a_floor() {
        assert_eq!(glyph_stroke(16), MIN_STROKE);
        assert_eq!(glyph_stroke(192), 3);
        assert_eq!(glyph_stroke(512), 8);
    }

    #[test]
    fn test_render_rejects_zero_size() {
        let err = render_icon(0, &Palette::default()).unwrap_err();
        assert!(err.to_string().contains("must be positive"));
    }
}

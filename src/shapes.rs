//! Vector shapes and the pixel operations used to rasterize them.
//!
//! Shapes are built in floating-point canvas coordinates and only touch the
//! pixel buffer when filled. Pixels are sampled at their centers.

use image::{Rgba, RgbaImage};

/// A point in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// An implicitly closed outline; the last point connects back to the first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polygon {
    points: Vec<Point>,
}

impl Polygon {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Axis-aligned bounding box as (min, max) corners
    pub fn bounds(&self) -> Option<(Point, Point)> {
        let first = *self.points.first()?;

        let bounds = self.points.iter().fold((first, first), |(min, max), p| {
            (
                Point::new(min.x.min(p.x), min.y.min(p.y)),
                Point::new(max.x.max(p.x), max.y.max(p.y)),
            )
        });

        Some(bounds)
    }

    /// Paint every pixel whose center lies inside the outline with `color`.
    ///
    /// Uses the even-odd rule on a per-row scanline, so concave outlines
    /// (such as the pinched apex of a droplet) fill correctly. Pixels outside
    /// the canvas are clipped.
    pub fn fill(&self, canvas: &mut RgbaImage, color: Rgba<u8>) {
        if self.points.len() < 3 {
            return;
        }

        let (width, height) = canvas.dimensions();
        let mut crossings: Vec<f32> = Vec::with_capacity(self.points.len());

        for y in 0..height {
            let scan_y = y as f32 + 0.5;
            self.scanline_crossings(scan_y, &mut crossings);

            for span in crossings.chunks_exact(2) {
                // Pixel x is covered when its center x + 0.5 is in [start, end)
                let start = (span[0] - 0.5).ceil().max(0.0);
                let end = (span[1] - 0.5).ceil().min(width as f32);
                if start >= end {
                    continue;
                }

                for x in start as u32..end as u32 {
                    canvas.put_pixel(x, y, color);
                }
            }
        }
    }

    /// Collect the sorted x positions where the outline crosses `scan_y`.
    fn scanline_crossings(&self, scan_y: f32, crossings: &mut Vec<f32>) {
        crossings.clear();

        let count = self.points.len();
        for i in 0..count {
            let a = self.points[i];
            let b = self.points[(i + 1) % count];

            // Half-open test so a vertex shared by two edges is counted once
            let spans_row = (a.y <= scan_y && b.y > scan_y) || (b.y <= scan_y && a.y > scan_y);
            if spans_row {
                let t = (scan_y - a.y) / (b.y - a.y);
                crossings.push(a.x + t * (b.x - a.x));
            }
        }

        crossings.sort_by(|a, b| a.total_cmp(b));
    }
}

/// Composite `src` over `dst` (straight, non-premultiplied alpha).
pub fn blend_over(dst: Rgba<u8>, src: Rgba<u8>) -> Rgba<u8> {
    let src_a = src[3] as f32 / 255.0;
    let dst_a = dst[3] as f32 / 255.0;
    let out_a = src_a + dst_a * (1.0 - src_a);

    if out_a <= 0.0 {
        return Rgba([0, 0, 0, 0]);
    }

    let channel = |i: usize| {
        let value = (src[i] as f32 * src_a + dst[i] as f32 * dst_a * (1.0 - src_a)) / out_a;
        value.round().clamp(0.0, 255.0) as u8
    };

    Rgba([
        channel(0),
        channel(1),
        channel(2),
        (out_a * 255.0).round() as u8,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(min: f32, max: f32) -> Polygon {
        let mut polygon = Polygon::new();
        polygon.push(Point::new(min, min));
        polygon.push(Point::new(max, min));
        polygon.push(Point::new(max, max));
        polygon.push(Point::new(min, max));
        polygon
    }

    #[test]
    fn test_bounds() {
        assert_eq!(Polygon::new().bounds(), None);

        let (min, max) = square(2.0, 6.0).bounds().unwrap();
        assert_eq!(min, Point::new(2.0, 2.0));
        assert_eq!(max, Point::new(6.0, 6.0));
    }

    #[test]
    fn test_fill_square_covers_pixel_centers() {
        let mut canvas = RgbaImage::new(8, 8);
        let white = Rgba([255, 255, 255, 255]);

        square(2.0, 6.0).fill(&mut canvas, white);

        let filled = canvas.pixels().filter(|p| p[3] == 255).count();
        assert_eq!(filled, 16);
        assert_eq!(*canvas.get_pixel(2, 2), white);
        assert_eq!(*canvas.get_pixel(5, 5), white);
        assert_eq!(canvas.get_pixel(6, 6)[3], 0);
        assert_eq!(canvas.get_pixel(1, 3)[3], 0);
    }

    #[test]
    fn test_fill_concave_outline_leaves_notch_empty() {
        // A "V" shape: the notch between the two arms must stay empty
        let mut polygon = Polygon::new();
        polygon.push(Point::new(0.0, 0.0));
        polygon.push(Point::new(5.0, 8.0));
        polygon.push(Point::new(10.0, 0.0));
        polygon.push(Point::new(8.0, 0.0));
        polygon.push(Point::new(5.0, 5.0));
        polygon.push(Point::new(2.0, 0.0));

        let mut canvas = RgbaImage::new(10, 10);
        polygon.fill(&mut canvas, Rgba([255, 0, 0, 255]));

        assert_eq!(canvas.get_pixel(5, 1)[3], 0, "notch should be empty");
        assert_eq!(canvas.get_pixel(1, 0)[3], 255, "left arm should be filled");
        assert_eq!(canvas.get_pixel(8, 0)[3], 255, "right arm should be filled");
        assert_eq!(canvas.get_pixel(5, 6)[3], 255, "joint should be filled");
    }

    #[test]
    fn test_fill_clips_to_canvas() {
        let mut canvas = RgbaImage::new(4, 4);
        square(-10.0, 10.0).fill(&mut canvas, Rgba([1, 2, 3, 255]));

        assert!(canvas.pixels().all(|p| *p == Rgba([1, 2, 3, 255])));
    }

    #[test]
    fn test_degenerate_polygon_paints_nothing() {
        let mut polygon = Polygon::new();
        polygon.push(Point::new(0.0, 0.0));
        polygon.push(Point::new(4.0, 4.0));

        let mut canvas = RgbaImage::new(4, 4);
        polygon.fill(&mut canvas, Rgba([255, 255, 255, 255]));

        assert!(canvas.pixels().all(|p| p[3] == 0));
    }

    #[test]
    fn test_blend_over() {
        let opaque_blue = Rgba([0, 0, 255, 255]);
        let white = Rgba([255, 255, 255, 230]);

        let blended = blend_over(opaque_blue, white);
        assert_eq!(blended[3], 255);
        assert_eq!(blended[0], 230);
        assert_eq!(blended[2], 255);

        // Over a transparent pixel the source comes through unchanged
        assert_eq!(blend_over(Rgba([0, 0, 0, 0]), white), white);
        assert_eq!(
            blend_over(Rgba([0, 0, 0, 0]), Rgba([9, 9, 9, 0])),
            Rgba([0, 0, 0, 0])
        );
    }
}

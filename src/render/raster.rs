use image::{Rgba, RgbaImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_line_segment_mut};

/// Pixel-space clipping rectangle; `right`/`bottom` are exclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Clip {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Clip {
    #[must_use]
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.left && x < self.right && y >= self.top && y < self.bottom
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Circle,
    Cross,
}

/// Paints every pixel whose center lies within `radius` of `center`.
fn stamp(img: &mut RgbaImage, clip: &Clip, center: (f32, f32), radius: f32, color: Rgba<u8>) {
    let radius = radius.max(0.5);
    let x0 = (center.0 - radius).floor().max(0.0) as u32;
    let y0 = (center.1 - radius).floor().max(0.0) as u32;
    let x1 = ((center.0 + radius).ceil() as u32).min(img.width());
    let y1 = ((center.1 + radius).ceil() as u32).min(img.height());

    for py in y0..y1 {
        for px in x0..x1 {
            let (cx, cy) = (px as f32 + 0.5, py as f32 + 0.5);
            let (dx, dy) = (cx - center.0, cy - center.1);
            if dx * dx + dy * dy <= radius * radius && clip.contains(cx, cy) {
                img.put_pixel(px, py, color);
            }
        }
    }
}

/// Strokes a polyline with a round pen `width` pixels wide.
///
/// Dashes follow a 3.7 on / 1.6 off pattern scaled by the line width.
pub fn stroke_polyline(
    img: &mut RgbaImage,
    clip: &Clip,
    points: &[(f32, f32)],
    width: f32,
    color: Rgba<u8>,
    dashed: bool,
) {
    let radius = width / 2.0;
    let (dash_on, dash_off) = (3.7 * width, 1.6 * width);
    let mut travelled = 0.0f32;

    for pair in points.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        let length = ((b.0 - a.0).powi(2) + (b.1 - a.1).powi(2)).sqrt();
        let steps = ((length * 2.0).ceil() as usize).max(1);
        for i in 0..=steps {
            let t = i as f32 / steps as f32;
            let along = travelled + t * length;
            if dashed && along % (dash_on + dash_off) > dash_on {
                continue;
            }
            let point = (a.0 + t * (b.0 - a.0), a.1 + t * (b.1 - a.1));
            stamp(img, clip, point, radius, color);
        }
        travelled += length;
    }
}

/// Fills the axis-aligned box spanned by two corners.
pub fn fill_box(
    img: &mut RgbaImage,
    clip: &Clip,
    a: (f32, f32),
    b: (f32, f32),
    color: Rgba<u8>,
) {
    let (left, right) = (a.0.min(b.0), a.0.max(b.0));
    let (top, bottom) = (a.1.min(b.1), a.1.max(b.1));
    let x0 = left.floor().max(0.0) as u32;
    let y0 = top.floor().max(0.0) as u32;
    let x1 = (right.ceil() as u32).min(img.width());
    let y1 = (bottom.ceil() as u32).min(img.height());

    for py in y0..y1 {
        for px in x0..x1 {
            if clip.contains(px as f32 + 0.5, py as f32 + 0.5) {
                img.put_pixel(px, py, color);
            }
        }
    }
}

/// Draws one scatter marker `size` pixels across. Markers centered outside `clip` are skipped.
pub fn draw_marker(
    img: &mut RgbaImage,
    clip: &Clip,
    center: (f32, f32),
    marker: Marker,
    size: f32,
    color: Rgba<u8>,
) {
    if !clip.contains(center.0, center.1) {
        return;
    }
    let half = size / 2.0;
    match marker {
        Marker::Circle => {
            let c = (center.0.round() as i32, center.1.round() as i32);
            draw_filled_circle_mut(img, c, half.round() as i32, color);
        }
        Marker::Cross => {
            // two pixel thick diagonals
            for offset in [0.0, 1.0] {
                draw_line_segment_mut(
                    img,
                    (center.0 - half + offset, center.1 - half),
                    (center.0 + half + offset, center.1 + half),
                    color,
                );
                draw_line_segment_mut(
                    img,
                    (center.0 - half + offset, center.1 + half),
                    (center.0 + half + offset, center.1 - half),
                    color,
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
    const INK: Rgba<u8> = Rgba([0, 0, 0, 255]);

    fn canvas() -> (RgbaImage, Clip) {
        let img = RgbaImage::from_pixel(40, 40, WHITE);
        let clip = Clip {
            left: 0.0,
            top: 0.0,
            right: 40.0,
            bottom: 40.0,
        };
        (img, clip)
    }

    #[test]
    fn solid_line_covers_its_path() {
        let (mut img, clip) = canvas();
        stroke_polyline(&mut img, &clip, &[(2.0, 20.5), (38.0, 20.5)], 2.0, INK, false);
        for x in 2..38 {
            assert_eq!(*img.get_pixel(x, 20), INK, "gap at x={x}");
        }
    }

    #[test]
    fn dashed_line_leaves_gaps() {
        let (mut img, clip) = canvas();
        stroke_polyline(&mut img, &clip, &[(0.0, 20.5), (40.0, 20.5)], 1.0, INK, true);
        let inked = (0..40).filter(|&x| *img.get_pixel(x, 20) == INK).count();
        assert!(inked > 10 && inked < 40, "inked {inked}");
    }

    #[test]
    fn clip_bounds_strokes() {
        let (mut img, _) = canvas();
        let clip = Clip {
            left: 10.0,
            top: 0.0,
            right: 20.0,
            bottom: 40.0,
        };
        stroke_polyline(&mut img, &clip, &[(0.0, 5.5), (40.0, 5.5)], 2.0, INK, false);
        assert_eq!(*img.get_pixel(5, 5), WHITE);
        assert_eq!(*img.get_pixel(15, 5), INK);
        assert_eq!(*img.get_pixel(25, 5), WHITE);
    }

    #[test]
    fn markers_outside_clip_are_skipped() {
        let (mut img, _) = canvas();
        let clip = Clip {
            left: 0.0,
            top: 0.0,
            right: 10.0,
            bottom: 10.0,
        };
        draw_marker(&mut img, &clip, (30.0, 30.0), Marker::Circle, 8.0, INK);
        assert!(img.pixels().all(|p| *p == WHITE));
        draw_marker(&mut img, &clip, (5.0, 5.0), Marker::Cross, 8.0, INK);
        assert_eq!(*img.get_pixel(5, 5), INK);
    }

    #[test]
    fn fill_box_accepts_corners_in_any_order() {
        let (mut img, clip) = canvas();
        fill_box(&mut img, &clip, (30.0, 12.0), (10.0, 10.0), INK);
        assert_eq!(*img.get_pixel(20, 11), INK);
        assert_eq!(*img.get_pixel(20, 13), WHITE);
    }
}

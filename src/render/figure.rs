use ab_glyph::{FontRef, PxScale};
use image::imageops::{self, FilterType};
use image::{ImageFormat, Rgba, RgbaImage};
use imageproc::drawing::{draw_text_mut, text_size};
use std::io::Cursor;

use crate::court::{CourtCanvas, CourtElement, Shape};
use crate::error::AppError;
use crate::render::font::chart_font;
use crate::render::raster::{Clip, Marker, draw_marker, fill_box, stroke_polyline};

pub const DPI: f32 = 100.0;
const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
const SPINE: Rgba<u8> = Rgba([38, 38, 38, 255]);
const TITLE_SIZE_PT: f32 = 18.0;
const TICK_SIZE_PT: f32 = 10.0;
/// Default scatter marker area is 36 pt², i.e. 6 pt across.
const MARKER_SIZE_PT: f32 = 6.0;

#[must_use]
pub fn points_to_pixels(points: f32) -> f32 {
    points * DPI / 72.0
}

/// Plot area inside the figure, in pixels from the top-left, plus its data limits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Axes {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
    pub xlim: (f32, f32),
    /// (bottom, top); a larger bottom than top flips the axis.
    pub ylim: (f32, f32),
}

impl Axes {
    /// Standard subplot margins: 12.5% left, 10% right, 11% bottom, 12% top.
    #[must_use]
    pub fn for_figure(width: u32, height: u32) -> Self {
        let (w, h) = (width as f32, height as f32);
        Self {
            left: 0.125 * w,
            top: 0.12 * h,
            width: 0.775 * w,
            height: 0.77 * h,
            xlim: (0.0, 1.0),
            ylim: (0.0, 1.0),
        }
    }

    pub fn set_xlim(&mut self, left: f32, right: f32) {
        self.xlim = (left, right);
    }

    pub fn set_ylim(&mut self, bottom: f32, top: f32) {
        self.ylim = (bottom, top);
    }

    #[must_use]
    pub fn to_pixel(&self, x: f32, y: f32) -> (f32, f32) {
        let fx = (x - self.xlim.0) / (self.xlim.1 - self.xlim.0);
        let fy = (y - self.ylim.0) / (self.ylim.1 - self.ylim.0);
        (
            self.left + fx * self.width,
            self.top + self.height - fy * self.height,
        )
    }

    #[must_use]
    pub fn clip(&self) -> Clip {
        Clip {
            left: self.left,
            top: self.top,
            right: self.left + self.width,
            bottom: self.top + self.height,
        }
    }

    /// Ticks every `step` data units inside the limits.
    fn ticks(lim: (f32, f32), step: f32) -> Vec<f32> {
        let (lo, hi) = (lim.0.min(lim.1), lim.0.max(lim.1));
        let mut tick = (lo / step).ceil() * step;
        let mut ticks = Vec::new();
        while tick <= hi {
            // + 0.0 turns -0 into 0 so the label has no sign
            ticks.push(tick + 0.0);
            tick += step;
        }
        ticks
    }
}

#[derive(Debug, Clone)]
pub struct Scatter {
    pub points: Vec<(f32, f32)>,
    pub marker: Marker,
    pub color: Rgba<u8>,
}

/// An image pinned to the figure with its lower-left corner at `offset`
/// pixels from the figure's lower-left corner.
#[derive(Debug, Clone)]
struct OffsetImage {
    image: RgbaImage,
    offset: (f32, f32),
}

/// One chart: an axes with scatter series and court patches, a title, and
/// any pinned images. Drawn in that order.
#[derive(Debug, Clone)]
pub struct Figure {
    width: u32,
    height: u32,
    axes: Axes,
    scatters: Vec<Scatter>,
    patches: Vec<CourtElement>,
    title: Option<String>,
    images: Vec<OffsetImage>,
}

impl Figure {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            axes: Axes::for_figure(width, height),
            scatters: Vec::new(),
            patches: Vec::new(),
            title: None,
            images: Vec::new(),
        }
    }

    #[must_use]
    pub fn axes(&self) -> &Axes {
        &self.axes
    }

    pub fn axes_mut(&mut self) -> &mut Axes {
        &mut self.axes
    }

    #[must_use]
    pub fn patches(&self) -> &[CourtElement] {
        &self.patches
    }

    #[must_use]
    pub fn scatters(&self) -> &[Scatter] {
        &self.scatters
    }

    pub fn scatter(&mut self, points: Vec<(f32, f32)>, marker: Marker, color: Rgba<u8>) {
        self.scatters.push(Scatter {
            points,
            marker,
            color,
        });
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    pub fn add_offset_image(&mut self, image: &RgbaImage, zoom: f32, offset: (f32, f32)) {
        let w = ((image.width() as f32 * zoom).round() as u32).max(1);
        let h = ((image.height() as f32 * zoom).round() as u32).max(1);
        let image = imageops::resize(image, w, h, FilterType::Triangle);
        self.images.push(OffsetImage { image, offset });
    }

    /// # Errors
    ///
    /// Will return `Err` if the embedded font cannot be parsed
    pub fn render(&self) -> Result<RgbaImage, AppError> {
        let font = chart_font()?;
        let mut img = RgbaImage::from_pixel(self.width, self.height, WHITE);
        let clip = self.axes.clip();

        let marker_size = points_to_pixels(MARKER_SIZE_PT);
        for series in &self.scatters {
            for &(x, y) in &series.points {
                let center = self.axes.to_pixel(x, y);
                draw_marker(&mut img, &clip, center, series.marker, marker_size, series.color);
            }
        }

        for patch in &self.patches {
            self.draw_patch(&mut img, &clip, patch);
        }

        self.draw_frame(&mut img, &font);

        if let Some(title) = &self.title {
            let scale = PxScale::from(points_to_pixels(TITLE_SIZE_PT));
            let (tw, th) = text_size(scale, &font, title);
            let x = self.axes.left + (self.axes.width - tw as f32) / 2.0;
            // sits 1% of the axes height above the plot
            let y = self.axes.top - 0.01 * self.axes.height - th as f32 - 4.0;
            draw_text_mut(&mut img, SPINE, x as i32, y as i32, scale, &font, title);
        }

        for pinned in &self.images {
            let x = pinned.offset.0.round() as i64;
            let y = self.height as i64 - pinned.offset.1.round() as i64 - pinned.image.height() as i64;
            imageops::overlay(&mut img, &pinned.image, x, y);
        }

        Ok(img)
    }

    /// # Errors
    ///
    /// Will return `Err` if rendering or PNG encoding fails
    pub fn to_png(&self) -> Result<Vec<u8>, AppError> {
        let img = self.render()?;
        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, ImageFormat::Png)?;
        Ok(buf.into_inner())
    }

    fn draw_patch(&self, img: &mut RgbaImage, clip: &Clip, patch: &CourtElement) {
        let width = points_to_pixels(patch.stroke.width);
        let outline: Vec<(f32, f32)> = patch
            .shape
            .outline()
            .into_iter()
            .map(|(x, y)| self.axes.to_pixel(x, y))
            .collect();

        if patch.stroke.filled
            && let Shape::Rectangle {
                corner,
                width: w,
                height: h,
            } = patch.shape
        {
            let a = self.axes.to_pixel(corner.0, corner.1);
            let b = self.axes.to_pixel(corner.0 + w, corner.1 + h);
            fill_box(img, clip, a, b, patch.stroke.color);
        }
        stroke_polyline(img, clip, &outline, width, patch.stroke.color, patch.stroke.dashed);
    }

    /// Axes border plus tick labels every 100 units.
    fn draw_frame(&self, img: &mut RgbaImage, font: &FontRef<'_>) {
        let whole = Clip {
            left: 0.0,
            top: 0.0,
            right: self.width as f32,
            bottom: self.height as f32,
        };
        let (l, t) = (self.axes.left, self.axes.top);
        let (r, b) = (l + self.axes.width, t + self.axes.height);
        stroke_polyline(
            img,
            &whole,
            &[(l, t), (r, t), (r, b), (l, b), (l, t)],
            points_to_pixels(1.25),
            SPINE,
            false,
        );

        let scale = PxScale::from(points_to_pixels(TICK_SIZE_PT));
        for x in Axes::ticks(self.axes.xlim, 100.0) {
            let label = format!("{x:.0}");
            let (tw, _) = text_size(scale, font, &label);
            let (px, _) = self.axes.to_pixel(x, self.axes.ylim.0);
            draw_text_mut(img, SPINE, (px - tw as f32 / 2.0) as i32, (b + 6.0) as i32, scale, font, &label);
        }
        for y in Axes::ticks(self.axes.ylim, 100.0) {
            let label = format!("{y:.0}");
            let (tw, th) = text_size(scale, font, &label);
            let (_, py) = self.axes.to_pixel(self.axes.xlim.0, y);
            draw_text_mut(
                img,
                SPINE,
                (l - 8.0 - tw as f32) as i32,
                (py - th as f32 / 2.0) as i32,
                scale,
                font,
                &label,
            );
        }
    }
}

impl CourtCanvas for Figure {
    fn add_court_element(&mut self, element: CourtElement) {
        self.patches.push(element);
    }
}

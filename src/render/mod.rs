pub mod figure;
pub mod font;
pub mod raster;

use image::{Rgba, RgbaImage};

use crate::court::{CourtStyle, draw_court};
use crate::error::AppError;
use crate::model::{ShotChart, ShotRecord, Subject, partition_made_missed};
use figure::Figure;
use raster::Marker;

pub use figure::{Axes, points_to_pixels};

/// 12 x 11 inches at 100 dpi.
pub const FIGURE_WIDTH: u32 = 1200;
pub const FIGURE_HEIGHT: u32 = 1100;

pub const COURT_XLIM: (f32, f32) = (-250.0, 250.0);
/// Bottom then top, so the hoop ends up near the top of the plot.
pub const COURT_YLIM: (f32, f32) = (422.5, -47.5);

pub const THUMBNAIL_ZOOM: f32 = 0.6;
pub const THUMBNAIL_OFFSET: (f32, f32) = (850.0, 200.0);

pub const SHOT_COLOR: Rgba<u8> = Rgba([76, 114, 176, 255]);
pub const MADE_COLOR: Rgba<u8> = SHOT_COLOR;
pub const MISSED_COLOR: Rgba<u8> = Rgba([85, 168, 104, 255]);

fn locations<'a>(shots: impl IntoIterator<Item = &'a ShotRecord>) -> Vec<(f32, f32)> {
    shots
        .into_iter()
        .map(|shot| (shot.loc_x as f32, shot.loc_y as f32))
        .collect()
}

/// # Errors
///
/// Will return `Err` if `bytes` is not a decodable image
pub fn decode_thumbnail(bytes: &[u8]) -> Result<RgbaImage, AppError> {
    Ok(image::load_from_memory(bytes)?.to_rgba8())
}

/// Lays out a chart: player charts plot every attempt alike, team charts
/// plot made shots as circles and misses as crosses.
#[must_use]
pub fn shot_chart_figure(chart: &ShotChart, thumbnail: Option<&RgbaImage>) -> Figure {
    let mut figure = Figure::new(FIGURE_WIDTH, FIGURE_HEIGHT);

    match chart.subject {
        Subject::Player(_) => {
            figure.scatter(locations(&chart.shots), Marker::Circle, SHOT_COLOR);
        }
        Subject::Team(_) => {
            let (made, missed) = partition_made_missed(&chart.shots);
            figure.scatter(locations(made), Marker::Circle, MADE_COLOR);
            figure.scatter(locations(missed), Marker::Cross, MISSED_COLOR);
        }
    }

    draw_court(&mut figure, &CourtStyle::default());
    figure.axes_mut().set_xlim(COURT_XLIM.0, COURT_XLIM.1);
    figure.axes_mut().set_ylim(COURT_YLIM.0, COURT_YLIM.1);
    figure.set_title(chart.title());

    if let Some(thumbnail) = thumbnail {
        figure.add_offset_image(thumbnail, THUMBNAIL_ZOOM, THUMBNAIL_OFFSET);
    }
    figure
}

/// # Errors
///
/// Will return `Err` if drawing or PNG encoding fails
pub fn render_shot_chart(
    chart: &ShotChart,
    thumbnail: Option<&RgbaImage>,
) -> Result<Vec<u8>, AppError> {
    shot_chart_figure(chart, thumbnail).to_png()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::shot::sample_shot;
    use crate::model::{Season, SeasonType};

    fn chart(subject: Subject, shots: Vec<ShotRecord>) -> ShotChart {
        ShotChart::from_shots(subject, Season::default(), SeasonType::default(), shots).unwrap()
    }

    fn pixel_at(figure: &Figure, img: &RgbaImage, x: f32, y: f32) -> Rgba<u8> {
        let (px, py) = figure.axes().to_pixel(x, y);
        *img.get_pixel(px.floor() as u32, py.floor() as u32)
    }

    /// Markers are a few pixels across, so look around the data point.
    fn color_near(figure: &Figure, img: &RgbaImage, x: f32, y: f32, color: Rgba<u8>) -> bool {
        let (px, py) = figure.axes().to_pixel(x, y);
        let (px, py) = (px.round() as i64, py.round() as i64);
        (-3..=3).any(|dy| {
            (-3..=3).any(|dx| *img.get_pixel((px + dx) as u32, (py + dy) as u32) == color)
        })
    }

    #[test]
    fn player_figure_has_one_series_and_twelve_patches() {
        let chart = chart(Subject::Player(201_566), vec![sample_shot(100.0, 300.0, true)]);
        let figure = shot_chart_figure(&chart, None);
        assert_eq!(figure.scatters().len(), 1);
        assert_eq!(figure.patches().len(), 12);
    }

    #[test]
    fn player_chart_marks_shots_and_court() {
        let chart = chart(
            Subject::Player(201_566),
            vec![sample_shot(100.0, 300.0, false), sample_shot(-150.0, 250.0, true)],
        );
        let figure = shot_chart_figure(&chart, None);
        let img = figure.render().unwrap();

        assert_eq!((img.width(), img.height()), (FIGURE_WIDTH, FIGURE_HEIGHT));
        assert!(color_near(&figure, &img, 100.0, 300.0, SHOT_COLOR));
        assert!(color_near(&figure, &img, -150.0, 250.0, SHOT_COLOR));
        // right edge of the rim
        assert_eq!(pixel_at(&figure, &img, 7.5, 0.0), crate::court::BLACK);
    }

    #[test]
    fn team_chart_separates_made_and_missed() {
        let chart = chart(
            Subject::Team(1_610_612_760),
            vec![
                sample_shot(100.0, 300.0, true),
                sample_shot(-150.0, 250.0, false),
                sample_shot(-100.0, 300.0, true),
            ],
        );
        let figure = shot_chart_figure(&chart, None);
        assert_eq!(figure.scatters().len(), 2);
        assert_eq!(figure.scatters()[0].points.len(), 2);
        assert_eq!(figure.scatters()[1].points.len(), 1);

        let img = figure.render().unwrap();
        assert!(color_near(&figure, &img, 100.0, 300.0, MADE_COLOR));
        assert!(color_near(&figure, &img, -150.0, 250.0, MISSED_COLOR));
        assert!(!color_near(&figure, &img, -150.0, 250.0, MADE_COLOR));
    }

    #[test]
    fn shots_beyond_half_court_are_clipped() {
        let chart = chart(Subject::Player(1), vec![sample_shot(0.0, 700.0, true)]);
        let img = shot_chart_figure(&chart, None).render().unwrap();
        assert!(!img.pixels().any(|p| *p == SHOT_COLOR));
    }

    #[test]
    fn thumbnail_is_composited_at_its_offset() {
        let chart = chart(Subject::Player(201_566), vec![sample_shot(0.0, 0.0, true)]);
        let thumb = RgbaImage::from_pixel(230, 185, Rgba([200, 30, 40, 255]));
        let img = shot_chart_figure(&chart, Some(&thumb)).render().unwrap();

        // 138x111 after zoom, lower-left at (850, 200) from the bottom
        let top = FIGURE_HEIGHT - 200 - 111;
        let Rgba([r, g, b, a]) = *img.get_pixel(850 + 69, top + 55);
        assert!(r.abs_diff(200) <= 1 && g.abs_diff(30) <= 1 && b.abs_diff(40) <= 1);
        assert_eq!(a, 255);
    }

    #[test]
    fn rendered_png_decodes() {
        let chart = chart(Subject::Player(201_566), vec![sample_shot(10.0, 20.0, true)]);
        let png = render_shot_chart(&chart, None).unwrap();
        let decoded = image::load_from_memory(&png).unwrap();
        assert_eq!(decoded.width(), FIGURE_WIDTH);
    }

    #[test]
    fn garbage_thumbnail_does_not_decode() {
        assert!(matches!(
            decode_thumbnail(b"not an image"),
            Err(AppError::Render(_))
        ));
    }
}

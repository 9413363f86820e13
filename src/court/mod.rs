//! Half-court markings in the shot-chart coordinate system.
//!
//! Units are tenths of a foot with the hoop center at the origin. The baseline
//! sits at y = -47.5 and the half-court line at y = 422.5; the sidelines are at
//! x = -250 and x = 250.

use image::Rgba;

pub const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CourtStyle {
    pub color: Rgba<u8>,
    /// Line width in points.
    pub line_width: f32,
    pub outer_lines: bool,
}

impl Default for CourtStyle {
    fn default() -> Self {
        Self {
            color: BLACK,
            line_width: 2.0,
            outer_lines: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourtMarking {
    Hoop,
    Backboard,
    OuterBox,
    InnerBox,
    TopFreeThrow,
    BottomFreeThrow,
    Restricted,
    CornerThreeA,
    CornerThreeB,
    ThreeArc,
    CenterOuterArc,
    CenterInnerArc,
    OuterLines,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Circle {
        center: (f32, f32),
        radius: f32,
    },
    /// `width` and `height` may be zero or negative, extending from `corner`.
    Rectangle {
        corner: (f32, f32),
        width: f32,
        height: f32,
    },
    /// Elliptical arc drawn counter-clockwise from `theta1` to `theta2`
    /// (degrees). When `theta2 <= theta1` the arc wraps through 360.
    Arc {
        center: (f32, f32),
        width: f32,
        height: f32,
        theta1: f32,
        theta2: f32,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Rgba<u8>,
    pub width: f32,
    pub dashed: bool,
    pub filled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CourtElement {
    pub marking: CourtMarking,
    pub shape: Shape,
    pub stroke: Stroke,
}

impl Shape {
    /// Outline of the shape as a polyline in court units.
    #[must_use]
    pub fn outline(&self) -> Vec<(f32, f32)> {
        match *self {
            Shape::Circle { center, radius } => {
                arc_points(center, radius * 2.0, radius * 2.0, 0.0, 360.0)
            }
            Shape::Rectangle {
                corner: (x, y),
                width,
                height,
            } => vec![
                (x, y),
                (x + width, y),
                (x + width, y + height),
                (x, y + height),
                (x, y),
            ],
            Shape::Arc {
                center,
                width,
                height,
                theta1,
                theta2,
            } => {
                let end = if theta2 <= theta1 { theta2 + 360.0 } else { theta2 };
                arc_points(center, width, height, theta1, end)
            }
        }
    }
}

fn arc_points(center: (f32, f32), width: f32, height: f32, from: f32, to: f32) -> Vec<(f32, f32)> {
    // one vertex per degree is plenty at chart resolution
    let steps = ((to - from).abs().ceil() as usize).max(1);
    (0..=steps)
        .map(|i| {
            let theta = (from + (to - from) * i as f32 / steps as f32).to_radians();
            (
                center.0 + width / 2.0 * theta.cos(),
                center.1 + height / 2.0 * theta.sin(),
            )
        })
        .collect()
}

/// Anything court markings can be added onto.
pub trait CourtCanvas {
    fn add_court_element(&mut self, element: CourtElement);
}

impl CourtCanvas for Vec<CourtElement> {
    fn add_court_element(&mut self, element: CourtElement) {
        self.push(element);
    }
}

/// Adds the regulation half-court markings to `canvas` and hands it back.
pub fn draw_court<'a, C: CourtCanvas>(canvas: &'a mut C, style: &CourtStyle) -> &'a mut C {
    let line = Stroke {
        color: style.color,
        width: style.line_width,
        dashed: false,
        filled: false,
    };
    let solid = Stroke {
        filled: true,
        ..line
    };
    let dashed = Stroke {
        dashed: true,
        ..line
    };

    let element = |marking, shape, stroke| CourtElement {
        marking,
        shape,
        stroke,
    };

    let mut elements = vec![
        // 18" rim
        element(
            CourtMarking::Hoop,
            Shape::Circle {
                center: (0.0, 0.0),
                radius: 7.5,
            },
            line,
        ),
        element(
            CourtMarking::Backboard,
            Shape::Rectangle {
                corner: (-30.0, -7.5),
                width: 60.0,
                height: -1.0,
            },
            solid,
        ),
        // the paint: 16ft x 19ft, inner 12ft x 19ft
        element(
            CourtMarking::OuterBox,
            Shape::Rectangle {
                corner: (-80.0, -47.5),
                width: 160.0,
                height: 190.0,
            },
            line,
        ),
        element(
            CourtMarking::InnerBox,
            Shape::Rectangle {
                corner: (-60.0, -47.5),
                width: 120.0,
                height: 190.0,
            },
            line,
        ),
        element(
            CourtMarking::TopFreeThrow,
            Shape::Arc {
                center: (0.0, 142.5),
                width: 120.0,
                height: 120.0,
                theta1: 0.0,
                theta2: 180.0,
            },
            line,
        ),
        element(
            CourtMarking::BottomFreeThrow,
            Shape::Arc {
                center: (0.0, 142.5),
                width: 120.0,
                height: 120.0,
                theta1: 180.0,
                theta2: 0.0,
            },
            dashed,
        ),
        // 4ft restricted area
        element(
            CourtMarking::Restricted,
            Shape::Arc {
                center: (0.0, 0.0),
                width: 80.0,
                height: 80.0,
                theta1: 0.0,
                theta2: 180.0,
            },
            line,
        ),
        // corner threes run 14ft before the arc starts
        element(
            CourtMarking::CornerThreeA,
            Shape::Rectangle {
                corner: (-220.0, -47.5),
                width: 0.0,
                height: 140.0,
            },
            solid,
        ),
        element(
            CourtMarking::CornerThreeB,
            Shape::Rectangle {
                corner: (220.0, -47.5),
                width: 0.0,
                height: 140.0,
            },
            solid,
        ),
        // 23'9" from the hoop
        element(
            CourtMarking::ThreeArc,
            Shape::Arc {
                center: (0.0, 0.0),
                width: 475.0,
                height: 475.0,
                theta1: 22.0,
                theta2: 158.0,
            },
            line,
        ),
        element(
            CourtMarking::CenterOuterArc,
            Shape::Arc {
                center: (0.0, 422.5),
                width: 120.0,
                height: 120.0,
                theta1: 180.0,
                theta2: 0.0,
            },
            line,
        ),
        element(
            CourtMarking::CenterInnerArc,
            Shape::Arc {
                center: (0.0, 422.5),
                width: 40.0,
                height: 40.0,
                theta1: 180.0,
                theta2: 0.0,
            },
            line,
        ),
    ];

    if style.outer_lines {
        // half court line, baseline and sidelines
        elements.push(element(
            CourtMarking::OuterLines,
            Shape::Rectangle {
                corner: (-250.0, -47.5),
                width: 500.0,
                height: 470.0,
            },
            line,
        ));
    }

    for element in elements {
        canvas.add_court_element(element);
    }
    canvas
}

/// The court markings for `style` without a surface of the caller's own.
#[must_use]
pub fn court_elements(style: &CourtStyle) -> Vec<CourtElement> {
    let mut elements = Vec::new();
    draw_court(&mut elements, style);
    elements
}

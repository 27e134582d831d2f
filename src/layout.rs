//! Placement of every element on the canvas.
//!
//! All positions are expressed once, against the 540x300 reference size, and
//! scaled linearly per axis to the actual canvas. At the reference size the
//! scale is exactly 1, so the table reproduces the historical pixel values
//! bit for bit.

use kurbo::{BezPath, Ellipse, Point, Rect};

use crate::core::{Canvas, DMG_HEIGHT, DMG_WIDTH};

const TITLE_TOP: f64 = 30.0;
const INSTRUCTION_TOP: f64 = 65.0;

const ARROW_START: (f64, f64) = (320.0, 140.0);
const ARROW_END: (f64, f64) = (370.0, 140.0);
const ARROW_SHAFT_WIDTH: f64 = 2.0;
const ARROW_HEAD_LENGTH: f64 = 8.0;
const ARROW_HEAD_HALF_WIDTH: f64 = 4.0;

const CAT_ORIGIN: (f64, f64) = (50.0, 200.0);
const TAIL_SEGMENTS: u32 = 20;

const VERSION_TOP_INSET: f64 = 25.0;
const VERSION_RIGHT_INSET: f64 = 20.0;

/// Per-axis linear scale from the reference size to a concrete canvas.
#[derive(Clone, Copy, Debug)]
struct Scale {
    x: f64,
    y: f64,
}

impl Scale {
    fn for_canvas(canvas: Canvas) -> Self {
        Self {
            x: f64::from(canvas.width) / f64::from(DMG_WIDTH),
            y: f64::from(canvas.height) / f64::from(DMG_HEIGHT),
        }
    }

    fn pt(&self, (x, y): (f64, f64)) -> Point {
        Point::new(x * self.x, y * self.y)
    }
}

/// Resolved element placement for one canvas.
#[derive(Clone, Debug)]
pub struct LayoutSpec {
    /// Top edge of the title text block.
    pub title_top: f64,
    /// Top edge of the instruction text block.
    pub instruction_top: f64,
    pub arrow: Arrow,
    pub cat: CatSilhouette,
    /// Top edge of the version label.
    pub version_top: f64,
    /// Gap between the label's right edge and the canvas edge.
    pub version_right_inset: f64,
}

/// Horizontal arrow: a thin shaft capped by a filled rightward triangle.
#[derive(Clone, Debug)]
pub struct Arrow {
    pub start: Point,
    pub end: Point,
    pub shaft_width: f64,
    pub head_length: f64,
    pub head_half_width: f64,
}

impl Arrow {
    pub fn shaft_bounds(&self) -> Rect {
        let half = self.shaft_width / 2.0;
        Rect::new(self.start.x, self.start.y - half, self.end.x, self.end.y + half)
    }

    pub fn head_points(&self) -> [Point; 3] {
        let tip = self.end;
        [
            tip,
            Point::new(tip.x - self.head_length, tip.y - self.head_half_width),
            Point::new(tip.x - self.head_length, tip.y + self.head_half_width),
        ]
    }
}

/// Cat figure: body and head ellipses, two ear triangles, and a tail built
/// from small overlapping ellipses whose vertical offset grows quadratically,
/// reading as a curve.
#[derive(Clone, Debug)]
pub struct CatSilhouette {
    pub body: Rect,
    pub head: Rect,
    pub ears: [[Point; 3]; 2],
    pub tail: Vec<Rect>,
}

impl LayoutSpec {
    pub fn for_canvas(canvas: Canvas) -> Self {
        let s = Scale::for_canvas(canvas);
        let (cx, cy) = CAT_ORIGIN;

        let tail = (0..TAIL_SEGMENTS)
            .map(|i| {
                let t = f64::from(i) / f64::from(TAIL_SEGMENTS);
                let origin = s.pt((cx - 5.0 + f64::from(i), cy + 10.0 + 5.0 * t * t));
                Rect::from_origin_size(origin, (4.0 * s.x, 8.0 * s.y))
            })
            .collect();

        Self {
            title_top: TITLE_TOP * s.y,
            instruction_top: INSTRUCTION_TOP * s.y,
            arrow: Arrow {
                start: s.pt(ARROW_START),
                end: s.pt(ARROW_END),
                shaft_width: ARROW_SHAFT_WIDTH * s.y,
                head_length: ARROW_HEAD_LENGTH * s.x,
                head_half_width: ARROW_HEAD_HALF_WIDTH * s.y,
            },
            cat: CatSilhouette {
                body: scale_rect(Rect::new(cx, cy, cx + 40.0, cy + 25.0), s),
                head: scale_rect(Rect::new(cx + 35.0, cy - 15.0, cx + 55.0, cy + 5.0), s),
                ears: [
                    [
                        s.pt((cx + 38.0, cy - 15.0)),
                        s.pt((cx + 42.0, cy - 25.0)),
                        s.pt((cx + 46.0, cy - 15.0)),
                    ],
                    [
                        s.pt((cx + 47.0, cy - 15.0)),
                        s.pt((cx + 51.0, cy - 25.0)),
                        s.pt((cx + 55.0, cy - 15.0)),
                    ],
                ],
                tail,
            },
            version_top: f64::from(canvas.height) - VERSION_TOP_INSET * s.y,
            version_right_inset: VERSION_RIGHT_INSET * s.x,
        }
    }
}

fn scale_rect(r: Rect, s: Scale) -> Rect {
    Rect::new(r.x0 * s.x, r.y0 * s.y, r.x1 * s.x, r.y1 * s.y)
}

/// Left edge that horizontally centers a block of the given width.
pub fn centered_left(canvas_width: u32, text_width: f64) -> f64 {
    (f64::from(canvas_width) - text_width) / 2.0
}

/// Left edge that right-aligns a block against the given inset.
pub fn right_aligned_left(canvas_width: u32, inset: f64, text_width: f64) -> f64 {
    f64::from(canvas_width) - inset - text_width
}

/// Ellipse inscribed in a bounding box, the convention the silhouette
/// shapes are expressed in.
pub fn ellipse_in(bounds: Rect) -> Ellipse {
    Ellipse::new(
        bounds.center(),
        (bounds.width() / 2.0, bounds.height() / 2.0),
        0.0,
    )
}

/// Closed filled triangle through three points.
pub fn triangle(points: [Point; 3]) -> BezPath {
    let mut path = BezPath::new();
    path.move_to(points[0]);
    path.line_to(points[1]);
    path.line_to(points[2]);
    path.close_path();
    path
}

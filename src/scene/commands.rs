/// Point in surface (or current transform) coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

/// One drawing primitive. A frame is a `Vec<DrawCommand>` executed in order.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear { width: f64, height: f64 },
    /// Many segments, one stroke
    Lines { segments: Vec<Segment>, stroke: &'static str, line_width: f64 },
    Save,
    Restore,
    Translate { x: f64, y: f64 },
    Scale { x: f64, y: f64 },
    Rotate { radians: f64 },
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        fill: &'static str,
        stroke: &'static str,
        line_width: f64,
    },
    Circle {
        center: Point,
        radius: f64,
        fill: Option<&'static str>,
        stroke: Option<&'static str>,
        line_width: f64,
    },
    Polygon { points: Vec<Point>, fill: &'static str },
    Text { text: String, at: Point, fill: &'static str, font: &'static str },
}

// ============================================================================
// SCENE BUILDER - SceneState -> draw commands for one AR frame
// ============================================================================

use crate::models::{CargoItem, CargoStatus};
use crate::scene::commands::{DrawCommand, Point, Segment};
use crate::scene::state::SceneState;

pub const GRID_SPACING: f64 = 50.0;
pub const LINE_WIDTH: f64 = 2.0;
pub const MARKER_RADIUS: f64 = 10.0;
pub const SELECTION_RADIUS: f64 = 15.0;
pub const LABEL_OFFSET: f64 = 25.0;
pub const COMPASS_INSET: f64 = 40.0;
pub const COMPASS_RADIUS: f64 = 20.0;

pub const GRID_STROKE: &str = "rgba(59, 130, 246, 0.2)";
pub const MODULE_STROKE: &str = "#3b82f6";
pub const MAIN_MODULE_FILL: &str = "rgba(30, 58, 138, 0.5)";
pub const MODULE_FILL: &str = "rgba(37, 99, 235, 0.3)";
pub const MARKER_WARNING: &str = "#f59e0b";
pub const MARKER_OK: &str = "#10b981";
pub const LABEL_FILL: &str = "#ffffff";
pub const LABEL_FONT: &str = "10px sans-serif";
pub const SELECTION_STROKE: &str = "#ffffff";
pub const COMPASS_FILL: &str = "rgba(30, 58, 138, 0.7)";
pub const NEEDLE_FILL: &str = "#f43f5e";

/// Station module rectangle in local (centred) coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StationModule {
    pub name: &'static str,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: &'static str,
}

pub const STATION_MODULES: [StationModule; 5] = [
    StationModule { name: "Main Module", x: -100.0, y: -40.0, width: 200.0, height: 80.0, fill: MAIN_MODULE_FILL },
    StationModule { name: "Storage Bay A", x: -180.0, y: -40.0, width: 80.0, height: 80.0, fill: MODULE_FILL },
    StationModule { name: "Lab Module", x: 100.0, y: -40.0, width: 80.0, height: 80.0, fill: MODULE_FILL },
    StationModule { name: "Crew Quarters", x: -40.0, y: 40.0, width: 80.0, height: 60.0, fill: MODULE_FILL },
    StationModule { name: "Maintenance Bay", x: -40.0, y: -100.0, width: 80.0, height: 60.0, fill: MODULE_FILL },
];

/// Marker anchor for a named location; unknown locations sit at the origin
pub fn marker_position(location: &str) -> Point {
    match location {
        "Storage Bay A" => Point::new(-140.0, 0.0),
        "Lab Module" => Point::new(140.0, 0.0),
        "Crew Quarters" => Point::new(0.0, 70.0),
        "Maintenance Bay" => Point::new(0.0, -70.0),
        _ => Point::new(0.0, 0.0),
    }
}

pub fn marker_color(status: CargoStatus) -> &'static str {
    match status {
        CargoStatus::Warning => MARKER_WARNING,
        _ => MARKER_OK,
    }
}

fn grid(width: f64, height: f64) -> DrawCommand {
    let mut segments = Vec::new();
    let mut x = 0.0;
    while x < width {
        segments.push(Segment { from: Point::new(x, 0.0), to: Point::new(x, height) });
        x += GRID_SPACING;
    }
    let mut y = 0.0;
    while y < height {
        segments.push(Segment { from: Point::new(0.0, y), to: Point::new(width, y) });
        y += GRID_SPACING;
    }
    DrawCommand::Lines { segments, stroke: GRID_STROKE, line_width: LINE_WIDTH }
}

fn compass(state: &SceneState, width: f64, commands: &mut Vec<DrawCommand>) {
    let center = Point::new(width - COMPASS_INSET, COMPASS_INSET);
    commands.push(DrawCommand::Circle {
        center,
        radius: COMPASS_RADIUS,
        fill: Some(COMPASS_FILL),
        stroke: Some(MODULE_STROKE),
        line_width: LINE_WIDTH,
    });

    // Needle follows rotation only, never zoom
    commands.push(DrawCommand::Save);
    commands.push(DrawCommand::Translate { x: center.x, y: center.y });
    commands.push(DrawCommand::Rotate { radians: state.rotation_radians() });
    commands.push(DrawCommand::Polygon {
        points: vec![Point::new(0.0, -15.0), Point::new(5.0, 0.0), Point::new(-5.0, 0.0)],
        fill: NEEDLE_FILL,
    });
    commands.push(DrawCommand::Restore);
}

/// Full frame for a `width` x `height` surface
pub fn build_scene(state: &SceneState, catalog: &[CargoItem], width: f64, height: f64) -> Vec<DrawCommand> {
    let mut commands = vec![DrawCommand::Clear { width, height }, grid(width, height)];

    commands.push(DrawCommand::Save);
    commands.push(DrawCommand::Translate { x: width / 2.0, y: height / 2.0 });
    commands.push(DrawCommand::Scale { x: state.scale(), y: state.scale() });
    commands.push(DrawCommand::Rotate { radians: state.rotation_radians() });

    for module in STATION_MODULES.iter() {
        commands.push(DrawCommand::Rect {
            x: module.x,
            y: module.y,
            width: module.width,
            height: module.height,
            fill: module.fill,
            stroke: MODULE_STROKE,
            line_width: LINE_WIDTH,
        });
    }

    for item in catalog {
        let at = marker_position(&item.location);
        commands.push(DrawCommand::Circle {
            center: at,
            radius: MARKER_RADIUS,
            fill: Some(marker_color(item.status)),
            stroke: None,
            line_width: LINE_WIDTH,
        });
        commands.push(DrawCommand::Text {
            text: item.name.clone(),
            at: Point::new(at.x, at.y + LABEL_OFFSET),
            fill: LABEL_FILL,
            font: LABEL_FONT,
        });
        if state.selected == Some(item.id) {
            commands.push(DrawCommand::Circle {
                center: at,
                radius: SELECTION_RADIUS,
                fill: None,
                stroke: Some(SELECTION_STROKE),
                line_width: LINE_WIDTH,
            });
        }
    }

    commands.push(DrawCommand::Restore);
    compass(state, width, &mut commands);
    commands
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::cargo::demo::cargo_manifest;

    fn rings(commands: &[DrawCommand]) -> Vec<Point> {
        commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Circle { center, fill: None, .. } => Some(*center),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn redraw_is_idempotent() {
        let catalog = cargo_manifest();
        let mut state = SceneState::default();
        state.set_zoom(150);
        state.rotation = -90;
        state.select(2);
        let first = build_scene(&state, &catalog, 800.0, 600.0);
        let second = build_scene(&state, &catalog, 800.0, 600.0);
        assert_eq!(first, second);
    }

    #[test]
    fn frame_starts_with_clear_then_grid() {
        let commands = build_scene(&SceneState::default(), &[], 120.0, 60.0);
        assert_eq!(commands[0], DrawCommand::Clear { width: 120.0, height: 60.0 });
        match &commands[1] {
            DrawCommand::Lines { segments, stroke, .. } => {
                // x = 0, 50, 100 and y = 0, 50
                assert_eq!(segments.len(), 5);
                assert_eq!(*stroke, GRID_STROKE);
            }
            other => panic!("expected grid, got {:?}", other),
        }
    }

    #[test]
    fn grid_ignores_zoom_and_rotation() {
        let mut state = SceneState::default();
        let plain = build_scene(&state, &[], 400.0, 300.0);
        state.set_zoom(200);
        state.rotation = 45;
        let turned = build_scene(&state, &[], 400.0, 300.0);
        assert_eq!(plain[1], turned[1]);
    }

    #[test]
    fn local_transform_is_translate_scale_rotate() {
        let mut state = SceneState::default();
        state.set_zoom(150);
        state.rotation = 90;
        let commands = build_scene(&state, &[], 800.0, 600.0);
        assert_eq!(commands[2], DrawCommand::Save);
        assert_eq!(commands[3], DrawCommand::Translate { x: 400.0, y: 300.0 });
        assert_eq!(commands[4], DrawCommand::Scale { x: 1.5, y: 1.5 });
        assert_eq!(commands[5], DrawCommand::Rotate { radians: std::f64::consts::FRAC_PI_2 });
    }

    #[test]
    fn five_modules_are_drawn() {
        let commands = build_scene(&SceneState::default(), &cargo_manifest(), 800.0, 600.0);
        let rects = commands.iter().filter(|c| matches!(c, DrawCommand::Rect { .. })).count();
        assert_eq!(rects, 5);
    }

    #[test]
    fn markers_use_location_table_and_status_color() {
        let commands = build_scene(&SceneState::default(), &cargo_manifest(), 800.0, 600.0);
        let markers: Vec<_> = commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Circle { center, fill: Some(fill), radius, .. } if *radius == MARKER_RADIUS => {
                    Some((*center, *fill))
                }
                _ => None,
            })
            .collect();
        assert_eq!(
            markers,
            vec![
                (Point::new(-140.0, 0.0), MARKER_OK),
                (Point::new(140.0, 0.0), MARKER_OK),
                (Point::new(0.0, 70.0), MARKER_WARNING),
                (Point::new(0.0, -70.0), MARKER_OK),
            ]
        );
    }

    #[test]
    fn labels_sit_below_markers() {
        let commands = build_scene(&SceneState::default(), &cargo_manifest(), 800.0, 600.0);
        let label = commands.iter().find_map(|c| match c {
            DrawCommand::Text { text, at, .. } if text == "Spectrometer" => Some(*at),
            _ => None,
        });
        assert_eq!(label, Some(Point::new(140.0, 25.0)));
    }

    #[test]
    fn unknown_location_defaults_to_origin() {
        assert_eq!(marker_position("Airlock"), Point::new(0.0, 0.0));
    }

    #[test]
    fn only_selected_item_gets_a_ring() {
        let catalog = cargo_manifest();
        let mut state = SceneState::default();
        assert!(rings(&build_scene(&state, &catalog, 800.0, 600.0)).is_empty());

        state.select(4);
        assert_eq!(rings(&build_scene(&state, &catalog, 800.0, 600.0)), vec![Point::new(0.0, -70.0)]);
    }

    #[test]
    fn compass_is_outside_the_scaled_transform() {
        let mut state = SceneState::default();
        state.set_zoom(200);
        state.rotation = 180;
        let commands = build_scene(&state, &[], 800.0, 600.0);

        let restore = commands.iter().position(|c| *c == DrawCommand::Restore).unwrap();
        assert!(matches!(
            commands[restore + 1],
            DrawCommand::Circle { center: Point { x, y }, radius, .. } if x == 760.0 && y == 40.0 && radius == COMPASS_RADIUS
        ));

        let tail = &commands[restore + 1..];
        assert!(!tail.iter().any(|c| matches!(c, DrawCommand::Scale { .. })));
        assert!(tail.contains(&DrawCommand::Rotate { radians: std::f64::consts::PI }));
        assert_eq!(commands.last(), Some(&DrawCommand::Restore));
    }
}

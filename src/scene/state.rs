use crate::models::{CargoId, CargoItem};

pub const MIN_ZOOM: i32 = 50;
pub const MAX_ZOOM: i32 = 200;
pub const ZOOM_STEP: i32 = 10;
pub const DEFAULT_ZOOM: i32 = 100;
pub const ROTATE_STEP: i32 = 45;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArPhase {
    #[default]
    Loading,
    Ready,
}

/// Inputs of one AR frame. Changing any field means a full redraw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneState {
    zoom: i32,
    pub rotation: i32,
    pub selected: Option<CargoId>,
}

impl Default for SceneState {
    fn default() -> Self {
        Self {
            zoom: DEFAULT_ZOOM,
            rotation: 0,
            selected: None,
        }
    }
}

/// Clamp to [50, 200], then snap to the slider step
pub fn clamp_zoom(requested: i32) -> i32 {
    let bounded = requested.clamp(MIN_ZOOM, MAX_ZOOM);
    ((bounded as f64 / ZOOM_STEP as f64).round() as i32) * ZOOM_STEP
}

impl SceneState {
    pub fn zoom(&self) -> i32 {
        self.zoom
    }

    pub fn scale(&self) -> f64 {
        self.zoom as f64 / 100.0
    }

    pub fn rotation_radians(&self) -> f64 {
        (self.rotation as f64).to_radians()
    }

    pub fn set_zoom(&mut self, requested: i32) {
        self.zoom = clamp_zoom(requested);
    }

    pub fn zoom_in(&mut self) {
        self.set_zoom(self.zoom + ZOOM_STEP);
    }

    pub fn zoom_out(&mut self) {
        self.set_zoom(self.zoom - ZOOM_STEP);
    }

    /// Remainder keeps the sign, so repeated presses walk 0, -45, ..., -315, 0
    pub fn rotate_step(&mut self) {
        self.rotation = (self.rotation - ROTATE_STEP) % 360;
    }

    pub fn select(&mut self, id: CargoId) {
        self.selected = Some(id);
    }

    pub fn selected_item<'a>(&self, catalog: &'a [CargoItem]) -> Option<&'a CargoItem> {
        let id = self.selected?;
        catalog.iter().find(|item| item.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::cargo::demo::cargo_manifest;

    #[test]
    fn zoom_is_clamped_to_range() {
        let mut state = SceneState::default();
        state.set_zoom(205);
        assert_eq!(state.zoom(), 200);
        state.set_zoom(40);
        assert_eq!(state.zoom(), 50);
        state.set_zoom(134);
        assert_eq!(state.zoom(), 130);
        state.set_zoom(i32::MAX);
        assert_eq!(state.zoom(), 200);
        state.set_zoom(i32::MIN);
        assert_eq!(state.zoom(), 50);
        assert_eq!(clamp_zoom(i32::MAX), 200);
        assert_eq!(clamp_zoom(i32::MIN), 50);
    }

    #[test]
    fn zoom_buttons_stop_at_the_bounds() {
        let mut state = SceneState::default();
        for _ in 0..20 {
            state.zoom_in();
        }
        assert_eq!(state.zoom(), MAX_ZOOM);
        for _ in 0..20 {
            state.zoom_out();
        }
        assert_eq!(state.zoom(), MIN_ZOOM);
    }

    #[test]
    fn rotate_button_wraps_through_negative_degrees() {
        let mut state = SceneState::default();
        state.rotate_step();
        assert_eq!(state.rotation, -45);
        for _ in 0..7 {
            state.rotate_step();
        }
        assert_eq!(state.rotation, 0);
    }

    #[test]
    fn selection_is_a_lookup_by_id() {
        let catalog = cargo_manifest();
        let mut state = SceneState::default();
        assert!(state.selected_item(&catalog).is_none());
        state.select(3);
        assert_eq!(state.selected_item(&catalog).map(|i| i.name.as_str()), Some("Emergency Medical Kit"));
        state.select(99);
        assert!(state.selected_item(&catalog).is_none());
    }
}

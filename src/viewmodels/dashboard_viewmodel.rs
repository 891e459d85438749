use crate::models::{CargoItem, CargoStatus};
use crate::utils::filter::{filter_records, StatusFilter};

const INITIAL_NOTIFICATIONS: u32 = 3;

/// Dashboard view state: recent-activity filter, emergency mode and the bell counter
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub search_query: String,
    pub status_filter: StatusFilter<CargoStatus>,
    pub emergency_mode: bool,
    pub notifications: u32,
}

impl Default for DashboardView {
    fn default() -> Self {
        Self {
            search_query: String::new(),
            status_filter: StatusFilter::All,
            emergency_mode: false,
            notifications: INITIAL_NOTIFICATIONS,
        }
    }
}

impl DashboardView {
    pub fn visible_items(&self, items: &[CargoItem]) -> Vec<CargoItem> {
        filter_records(items, &self.search_query, self.status_filter)
    }

    /// Switching emergency mode on raises one extra notification
    pub fn toggle_emergency(&mut self) {
        if !self.emergency_mode {
            self.notifications += 1;
            log::warn!("🚨 [DASHBOARD] Emergency mode activated");
        }
        self.emergency_mode = !self.emergency_mode;
    }

    pub fn clear_notifications(&mut self) {
        self.notifications = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::cargo::demo::cargo_manifest;

    #[test]
    fn emergency_toggle_bumps_notifications_only_when_enabling() {
        let mut view = DashboardView::default();
        view.toggle_emergency();
        assert!(view.emergency_mode);
        assert_eq!(view.notifications, 4);
        view.toggle_emergency();
        assert!(!view.emergency_mode);
        assert_eq!(view.notifications, 4);
    }

    #[test]
    fn bell_clears_notifications() {
        let mut view = DashboardView::default();
        view.clear_notifications();
        assert_eq!(view.notifications, 0);
    }

    #[test]
    fn critical_filter_shows_water_only() {
        let view = DashboardView {
            status_filter: StatusFilter::Only(CargoStatus::Critical),
            ..DashboardView::default()
        };
        let visible = view.visible_items(&cargo_manifest());
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Water Containers");
    }

    #[test]
    fn unmatched_search_yields_empty_list() {
        let view = DashboardView {
            search_query: "plutonium".to_string(),
            ..DashboardView::default()
        };
        assert!(view.visible_items(&cargo_manifest()).is_empty());
    }
}

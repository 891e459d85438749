use chrono::NaiveDate;

pub type CargoId = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CargoStatus {
    Normal,
    Warning,
    Critical,
}

impl CargoStatus {
    pub const ALL: [CargoStatus; 3] = [CargoStatus::Critical, CargoStatus::Warning, CargoStatus::Normal];

    pub fn as_str(&self) -> &'static str {
        match self {
            CargoStatus::Normal => "normal",
            CargoStatus::Warning => "warning",
            CargoStatus::Critical => "critical",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }

    /// Filter menu label
    pub fn filter_label(&self) -> &'static str {
        match self {
            CargoStatus::Normal => "Normal Status",
            CargoStatus::Warning => "Warning Status",
            CargoStatus::Critical => "Critical Status",
        }
    }

    /// Short badge shown in the AR item list
    pub fn short_badge(&self) -> &'static str {
        match self {
            CargoStatus::Warning => "WARN",
            _ => "OK",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CargoItem {
    pub id: CargoId,
    pub name: String,
    pub status: CargoStatus,
    pub location: String,
    pub quantity: u32,
    pub last_updated: NaiveDate,
}

// ============================================================================
// ADD-CARGO FORM FIELDS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CargoCategory {
    Consumables,
    Equipment,
    Medical,
    Experiments,
    Maintenance,
}

impl CargoCategory {
    pub const ALL: [CargoCategory; 5] = [
        CargoCategory::Consumables,
        CargoCategory::Equipment,
        CargoCategory::Medical,
        CargoCategory::Experiments,
        CargoCategory::Maintenance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CargoCategory::Consumables => "consumables",
            CargoCategory::Equipment => "equipment",
            CargoCategory::Medical => "medical",
            CargoCategory::Experiments => "experiments",
            CargoCategory::Maintenance => "maintenance",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CargoCategory::Consumables => "Consumables",
            CargoCategory::Equipment => "Equipment",
            CargoCategory::Medical => "Medical",
            CargoCategory::Experiments => "Experiments",
            CargoCategory::Maintenance => "Maintenance",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Priority {
    Critical,
    High,
    #[default]
    Normal,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Critical, Priority::High, Priority::Normal];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Critical => "critical",
            Priority::High => "high",
            Priority::Normal => "normal",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Priority::Critical => "Critical",
            Priority::High => "High",
            Priority::Normal => "Normal",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageRequirement {
    Standard,
    Refrigerated,
    Vacuum,
    Pressurized,
    Hazardous,
}

impl StorageRequirement {
    pub const ALL: [StorageRequirement; 5] = [
        StorageRequirement::Standard,
        StorageRequirement::Refrigerated,
        StorageRequirement::Vacuum,
        StorageRequirement::Pressurized,
        StorageRequirement::Hazardous,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StorageRequirement::Standard => "standard",
            StorageRequirement::Refrigerated => "refrigerated",
            StorageRequirement::Vacuum => "vacuum",
            StorageRequirement::Pressurized => "pressurized",
            StorageRequirement::Hazardous => "hazardous",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StorageRequirement::Standard => "Standard",
            StorageRequirement::Refrigerated => "Refrigerated",
            StorageRequirement::Vacuum => "Vacuum Sealed",
            StorageRequirement::Pressurized => "Pressurized",
            StorageRequirement::Hazardous => "Hazardous Materials",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }
}

/// Mock manifest shared by the dashboard and the AR view
pub mod demo {
    use super::{CargoItem, CargoStatus};
    use chrono::NaiveDate;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
    }

    fn item(id: u32, name: &str, status: CargoStatus, location: &str, quantity: u32, day: u32) -> CargoItem {
        CargoItem {
            id,
            name: name.to_string(),
            status,
            location: location.to_string(),
            quantity,
            last_updated: date(2025, 3, day),
        }
    }

    pub fn cargo_manifest() -> Vec<CargoItem> {
        vec![
            item(1, "Water Containers", CargoStatus::Critical, "Storage Bay A", 5, 28),
            item(2, "Spectrometer", CargoStatus::Normal, "Lab Module", 1, 27),
            item(3, "Emergency Medical Kit", CargoStatus::Warning, "Crew Quarters", 2, 26),
            item(4, "Space Parts Kit", CargoStatus::Normal, "Maintenance Bay", 8, 25),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn manifest_ids_are_unique() {
        let items = demo::cargo_manifest();
        let ids: HashSet<_> = items.iter().map(|i| i.id).collect();
        assert_eq!(ids.len(), items.len());
    }

    #[test]
    fn select_values_parse_back() {
        assert_eq!(CargoStatus::parse("warning"), Some(CargoStatus::Warning));
        assert_eq!(CargoStatus::parse("all"), None);
        assert_eq!(CargoCategory::parse("experiments"), Some(CargoCategory::Experiments));
        assert_eq!(CargoCategory::parse(""), None);
        assert_eq!(StorageRequirement::parse("vacuum"), Some(StorageRequirement::Vacuum));
    }

    #[test]
    fn only_warning_gets_the_warn_badge() {
        assert_eq!(CargoStatus::Warning.short_badge(), "WARN");
        assert_eq!(CargoStatus::Critical.short_badge(), "OK");
        assert_eq!(CargoStatus::Normal.short_badge(), "OK");
    }
}

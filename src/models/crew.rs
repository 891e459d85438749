use chrono::NaiveDateTime;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessLevel {
    Full,
    Standard,
    Limited,
    Medical,
    Security,
}

impl AccessLevel {
    pub const ALL: [AccessLevel; 5] = [
        AccessLevel::Full,
        AccessLevel::Standard,
        AccessLevel::Limited,
        AccessLevel::Medical,
        AccessLevel::Security,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AccessLevel::Full => "Full",
            AccessLevel::Standard => "Standard",
            AccessLevel::Limited => "Limited",
            AccessLevel::Medical => "Medical",
            AccessLevel::Security => "Security",
        }
    }
}

/// Access level plus the tooltip shown next to its badge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessLevelInfo {
    pub level: AccessLevel,
    pub description: &'static str,
}

pub const CUSTOM_ACCESS_DESCRIPTION: &str = "Custom access level";

pub fn access_levels() -> Vec<AccessLevelInfo> {
    vec![
        AccessLevelInfo { level: AccessLevel::Full, description: "Complete access to all cargo and systems" },
        AccessLevelInfo { level: AccessLevel::Standard, description: "Access to standard inventory and requests" },
        AccessLevelInfo { level: AccessLevel::Limited, description: "View-only access to cargo inventory" },
        AccessLevelInfo { level: AccessLevel::Medical, description: "Access to medical supplies only" },
        AccessLevelInfo { level: AccessLevel::Security, description: "Security and restricted item access" },
    ]
}

pub fn describe_access(catalog: &[AccessLevelInfo], level: AccessLevel) -> &'static str {
    catalog
        .iter()
        .find(|info| info.level == level)
        .map(|info| info.description)
        .unwrap_or(CUSTOM_ACCESS_DESCRIPTION)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CrewStatus {
    Active,
    Inactive,
}

impl CrewStatus {
    pub const ALL: [CrewStatus; 2] = [CrewStatus::Active, CrewStatus::Inactive];

    pub fn as_str(&self) -> &'static str {
        match self {
            CrewStatus::Active => "active",
            CrewStatus::Inactive => "inactive",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CrewStatus::Active => "Active",
            CrewStatus::Inactive => "Inactive",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrewMember {
    pub id: u32,
    pub name: String,
    pub role: String,
    pub access_level: AccessLevel,
    pub status: CrewStatus,
    pub last_access: NaiveDateTime,
}

impl CrewMember {
    /// Avatar fallback: first letter of every word ("Cmdr. Sarah Chen" -> "CSC")
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .collect()
    }

    pub fn last_access_label(&self) -> String {
        self.last_access.format("%Y-%m-%d %H:%M").to_string()
    }
}

pub mod demo {
    use super::{AccessLevel, CrewMember, CrewStatus};
    use chrono::{NaiveDate, NaiveDateTime};

    fn at(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, day)
            .and_then(|d| d.and_hms_opt(hour, minute, 0))
            .unwrap_or(NaiveDateTime::MIN)
    }

    fn member(
        id: u32,
        name: &str,
        role: &str,
        access_level: AccessLevel,
        status: CrewStatus,
        last_access: NaiveDateTime,
    ) -> CrewMember {
        CrewMember {
            id,
            name: name.to_string(),
            role: role.to_string(),
            access_level,
            status,
            last_access,
        }
    }

    pub fn crew_roster() -> Vec<CrewMember> {
        vec![
            member(1, "Cmdr. Sarah Chen", "Commander", AccessLevel::Full, CrewStatus::Active, at(28, 14, 32)),
            member(2, "Dr. Alex Martinez", "Science Officer", AccessLevel::Limited, CrewStatus::Active, at(28, 10, 15)),
            member(3, "Lt. James Wilson", "Engineering", AccessLevel::Standard, CrewStatus::Active, at(27, 22, 45)),
            member(4, "Maya Patel", "Medical Officer", AccessLevel::Medical, CrewStatus::Inactive, at(25, 9, 10)),
            member(5, "Capt. David Rodriguez", "Security", AccessLevel::Security, CrewStatus::Active, at(28, 13, 20)),
        ]
    }
}

// ============================================================================
// LIST FILTER - Search + status predicate shared by every list page
// ============================================================================

use crate::models::{CargoItem, CargoStatus, CrewMember, CrewStatus};

/// A record that can be searched and filtered by status
pub trait Filterable {
    type Status: Copy + PartialEq;

    /// Fields the search box matches against
    fn search_fields(&self) -> Vec<&str>;

    fn status(&self) -> Self::Status;
}

impl Filterable for CargoItem {
    type Status = CargoStatus;

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str()]
    }

    fn status(&self) -> CargoStatus {
        self.status
    }
}

impl Filterable for CrewMember {
    type Status = CrewStatus;

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.role.as_str()]
    }

    fn status(&self) -> CrewStatus {
        self.status
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter<S> {
    All,
    Only(S),
}

impl<S> Default for StatusFilter<S> {
    fn default() -> Self {
        StatusFilter::All
    }
}

impl<S: Copy + PartialEq> StatusFilter<S> {
    pub fn accepts(&self, status: S) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }

    /// Parse a `<select>` value: "all" or whatever `parse` recognizes.
    /// Unknown values fall back to `All`.
    pub fn from_select(value: &str, parse: impl Fn(&str) -> Option<S>) -> Self {
        if value == "all" {
            return StatusFilter::All;
        }
        parse(value).map(StatusFilter::Only).unwrap_or(StatusFilter::All)
    }

    /// Inverse of `from_select`
    pub fn to_select(&self, as_str: impl Fn(&S) -> &'static str) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Only(status) => as_str(status),
        }
    }
}

pub fn matches_query<R: Filterable>(record: &R, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    record
        .search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Visible subset of `records`, in source order
pub fn filter_records<R: Filterable + Clone>(
    records: &[R],
    query: &str,
    status_filter: StatusFilter<R::Status>,
) -> Vec<R> {
    records
        .iter()
        .filter(|r| matches_query(*r, query) && status_filter.accepts(r.status()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::cargo::demo::cargo_manifest;
    use crate::models::crew::demo::crew_roster;

    #[test]
    fn empty_query_and_all_returns_everything_in_order() {
        let crew = crew_roster();
        let visible = filter_records(&crew, "", StatusFilter::All);
        assert_eq!(visible, crew);

        let cargo = cargo_manifest();
        let ids: Vec<_> = filter_records(&cargo, "", StatusFilter::All).iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn crew_search_matches_name_or_role_case_insensitively() {
        let crew = crew_roster();
        let visible = filter_records(&crew, "med", StatusFilter::All);
        let names: Vec<_> = visible.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Maya Patel"]);

        let visible = filter_records(&crew, "OFFICER", StatusFilter::All);
        assert_eq!(visible.len(), 2);

        let visible = filter_records(&crew, "chen", StatusFilter::All);
        assert_eq!(visible[0].role, "Commander");
    }

    #[test]
    fn cargo_search_ignores_location() {
        let cargo = cargo_manifest();
        assert!(filter_records(&cargo, "storage bay", StatusFilter::All).is_empty());
        assert_eq!(filter_records(&cargo, "kit", StatusFilter::All).len(), 2);
    }

    #[test]
    fn status_and_query_are_combined() {
        let cargo = cargo_manifest();
        let visible = filter_records(&cargo, "kit", StatusFilter::Only(CargoStatus::Warning));
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Emergency Medical Kit");

        let crew = crew_roster();
        let inactive = filter_records(&crew, "", StatusFilter::Only(CrewStatus::Inactive));
        assert_eq!(inactive.len(), 1);
        assert!(filter_records(&crew, "chen", StatusFilter::Only(CrewStatus::Inactive)).is_empty());
    }

    #[test]
    fn select_values_map_to_filters() {
        assert_eq!(StatusFilter::from_select("all", CargoStatus::parse), StatusFilter::All);
        assert_eq!(
            StatusFilter::from_select("critical", CargoStatus::parse),
            StatusFilter::Only(CargoStatus::Critical)
        );
        assert_eq!(StatusFilter::from_select("bogus", CrewStatus::parse), StatusFilter::All);

        assert_eq!(StatusFilter::<CrewStatus>::All.to_select(CrewStatus::as_str), "all");
        assert_eq!(StatusFilter::Only(CrewStatus::Inactive).to_select(CrewStatus::as_str), "inactive");
    }
}

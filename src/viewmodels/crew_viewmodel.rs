use crate::models::{CrewMember, CrewStatus};
use crate::utils::filter::{filter_records, StatusFilter};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CrewAccessView {
    pub search_query: String,
    pub status_filter: StatusFilter<CrewStatus>,
    pub add_dialog_open: bool,
}

impl CrewAccessView {
    pub fn visible_members(&self, roster: &[CrewMember]) -> Vec<CrewMember> {
        filter_records(roster, &self.search_query, self.status_filter)
    }

    pub fn open_add_dialog(&mut self) {
        self.add_dialog_open = true;
    }

    /// Cancel and "Add Crew Member" both just close the dialog; the roster is mock data
    pub fn close_add_dialog(&mut self) {
        self.add_dialog_open = false;
    }
}

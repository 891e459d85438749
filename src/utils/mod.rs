pub mod storage;
pub mod filter;

pub use filter::{filter_records, Filterable, StatusFilter};

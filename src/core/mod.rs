pub mod audit;
pub mod extract;
pub mod gaps;
pub mod report;

pub use crate::domain::model::{GapReport, GapReportEntry, Item, Page, Series};
pub use crate::domain::ports::{CatalogSource, ConfigProvider};
pub use crate::utils::error::Result;

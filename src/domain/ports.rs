use crate::domain::model::{Item, Series};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Read-only view of the catalog server. Implementations must return the
/// complete listing, in server order, before the audit proceeds.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch_all_series(&self) -> Result<Vec<Series>>;
    async fn fetch_items(&self, series_id: &str) -> Result<Vec<Item>>;
}

pub trait ConfigProvider: Send + Sync {
    fn server_url(&self) -> &str;
    fn username(&self) -> &str;
    fn password(&self) -> &str;
}

use crate::domain::model::{Item, Page, Series};
use crate::domain::ports::{CatalogSource, ConfigProvider};
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

/// Fixed page size for every listing request.
pub const PAGE_SIZE: usize = 500;

/// Read-only Komga REST client. Issues only GET requests with Basic
/// credentials taken from the config value handed in at construction.
pub struct KomgaClient<C: ConfigProvider> {
    config: C,
    client: Client,
}

impl<C: ConfigProvider> KomgaClient<C> {
    pub fn new(config: C) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    async fn fetch_page<T: DeserializeOwned>(&self, url: &str) -> Result<Page<T>> {
        tracing::debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .basic_auth(self.config.username(), Some(self.config.password()))
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?
            .error_for_status()?;

        let body = response.text().await?;
        let page = serde_json::from_str::<Page<T>>(&body)?;
        Ok(page)
    }

    /// Concatenates listing pages from 0 upward until the server reports the
    /// last page. The server's flag is the only termination condition.
    async fn fetch_all_pages<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>> {
        let mut collected = Vec::new();
        let mut page = 0usize;
        loop {
            let url = format!(
                "{}{}?page={}&size={}",
                self.config.server_url(),
                path,
                page,
                PAGE_SIZE
            );
            let body = self.fetch_page::<T>(&url).await?;
            collected.extend(body.content);
            if body.last {
                break;
            }
            page += 1;
        }
        Ok(collected)
    }
}

#[async_trait]
impl<C: ConfigProvider> CatalogSource for KomgaClient<C> {
    async fn fetch_all_series(&self) -> Result<Vec<Series>> {
        self.fetch_all_pages("/api/v1/series").await
    }

    async fn fetch_items(&self, series_id: &str) -> Result<Vec<Item>> {
        self.fetch_all_pages(&format!("/api/v1/series/{}/books", series_id))
            .await
    }
}

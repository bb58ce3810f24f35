use crate::core::extract::extract_numbers;
use crate::core::gaps::find_gaps;
use crate::domain::model::{GapReport, GapReportEntry};
use crate::domain::ports::CatalogSource;
use crate::utils::error::Result;
use std::collections::BTreeSet;

/// Walks the whole catalog and collects per-series gap entries.
///
/// Series are processed sequentially in catalog order, and any fetch or
/// decode failure aborts the run; no partial report is produced.
pub struct GapAuditor<C: CatalogSource> {
    catalog: C,
}

impl<C: CatalogSource> GapAuditor<C> {
    pub fn new(catalog: C) -> Self {
        Self { catalog }
    }

    pub async fn run(&self) -> Result<GapReport> {
        let series_list = self.catalog.fetch_all_series().await?;
        tracing::info!("Fetched {} series from catalog", series_list.len());

        let mut entries = Vec::new();
        for series in &series_list {
            let items = self.catalog.fetch_items(&series.id).await?;

            let mut numbers = BTreeSet::new();
            for item in &items {
                numbers.extend(extract_numbers(item.display_name()));
            }
            let numbers: Vec<u32> = numbers.into_iter().collect();
            let missing = find_gaps(&numbers);

            tracing::debug!(
                "Series '{}': {} items, {} numbers, {} missing",
                series.display_title(),
                items.len(),
                numbers.len(),
                missing.len()
            );

            if !missing.is_empty() {
                entries.push(GapReportEntry {
                    title: series.display_title().to_string(),
                    numbers,
                    missing,
                });
            }
        }

        tracing::info!(
            "Audit complete: {} of {} series have gaps",
            entries.len(),
            series_list.len()
        );

        Ok(GapReport {
            series_scanned: series_list.len(),
            entries,
        })
    }
}

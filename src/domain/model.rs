use serde::Deserialize;

/// One page of a paginated Komga listing.
///
/// A missing `last` field stops pagination rather than looping forever.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Page<T> {
    #[serde(default)]
    pub content: Vec<T>,
    #[serde(default = "default_last")]
    pub last: bool,
}

fn default_last() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
pub struct Series {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub metadata: Option<SeriesMetadata>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeriesMetadata {
    #[serde(default)]
    pub title: Option<String>,
}

impl Series {
    /// Display title: the metadata title when present and non-empty, else the internal name.
    pub fn display_title(&self) -> &str {
        self.metadata
            .as_ref()
            .and_then(|m| m.title.as_deref())
            .filter(|t| !t.is_empty())
            .unwrap_or(&self.name)
    }
}

/// One book within a series. Only the name (or its URL fallback) is consulted.
#[derive(Debug, Clone, Deserialize)]
pub struct Item {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

impl Item {
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.url.as_deref())
            .unwrap_or_default()
    }
}

/// Per-series audit result. Only series with missing numbers are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GapReportEntry {
    pub title: String,
    /// Observed sequence numbers, unique and ascending.
    pub numbers: Vec<u32>,
    /// Numbers absent from the observed span, ascending.
    pub missing: Vec<u32>,
}

#[derive(Debug, Clone)]
pub struct GapReport {
    pub series_scanned: usize,
    pub entries: Vec<GapReportEntry>,
}

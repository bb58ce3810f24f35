use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

/// Upper bound for numbers carrying an explicit volume/chapter keyword.
pub const VOL_CH_MAX: u32 = 2000;
/// Upper bound for bare numbers with no keyword; kept low to suppress noise.
pub const FALLBACK_MAX: u32 = 400;
/// Bare numbers in this range are treated as release years, not positions.
pub const YEAR_LOWER: u32 = 1900;
pub const YEAR_UPPER: u32 = 2100;

static VOL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:^|[^A-Za-z0-9])(?:v|vol|volume)\s*0*(\d+)").unwrap()
});

static CH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:^|[^A-Za-z0-9])(?:ch|chapter)\s*0*(\d+)").unwrap()
});

// Greedy digit run preceded by a non-alphanumeric boundary (or string start),
// so a match always covers the whole run.
static NUM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|[^A-Za-z0-9])0*(\d+)").unwrap()
});

/// Extract plausible volume/chapter numbers from a file name.
///
/// Tiers are tried in priority order: vol/volume, then ch/chapter, then bare
/// numbers. The first tier that yields an in-bounds number wins for this
/// name; keyword matches always suppress bare-number noise. The bare tier
/// additionally rejects year-like values.
///
/// A name that yields nothing is not an error; it simply contributes no
/// numbers to its series.
pub fn extract_numbers(name: &str) -> BTreeSet<u32> {
    for rx in [&*VOL_RE, &*CH_RE] {
        let hits: BTreeSet<u32> = rx
            .captures_iter(name)
            .filter_map(|c| c[1].parse::<u32>().ok())
            .filter(|&n| n > 0 && n <= VOL_CH_MAX)
            .collect();
        if !hits.is_empty() {
            return hits;
        }
    }

    NUM_RE
        .captures_iter(name)
        .filter_map(|c| c[1].parse::<u32>().ok())
        .filter(|&n| !(YEAR_LOWER..=YEAR_UPPER).contains(&n))
        .filter(|&n| n > 0 && n <= FALLBACK_MAX)
        .collect()
}

use crate::domain::model::GapReport;

/// Missing numbers shown per series before the listing is elided.
pub const MISSING_PREVIEW_LIMIT: usize = 200;

/// Render the audit result as a markdown document.
///
/// Series appear in catalog order, one section per series with gaps. The
/// missing listing is truncated past `MISSING_PREVIEW_LIMIT` values so a
/// badly-numbered series cannot flood the report.
pub fn render_markdown(report: &GapReport) -> String {
    let mut lines = vec![
        "# Komga Gap Report".to_string(),
        String::new(),
        format!("Series scanned: {}", report.series_scanned),
        format!("Series with gaps: {}", report.entries.len()),
        String::new(),
    ];

    for entry in &report.entries {
        let mut missing_display = entry
            .missing
            .iter()
            .take(MISSING_PREVIEW_LIMIT)
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        if entry.missing.len() > MISSING_PREVIEW_LIMIT {
            missing_display.push_str(&format!(
                ", … (+{} more)",
                entry.missing.len() - MISSING_PREVIEW_LIMIT
            ));
        }

        lines.push(format!("## {}", entry.title));
        lines.push(format!("Missing: {}", missing_display));
        lines.push(String::new());
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::GapReportEntry;

    #[test]
    fn test_render_single_series() {
        let report = GapReport {
            series_scanned: 2,
            entries: vec![GapReportEntry {
                title: "Foo".to_string(),
                numbers: vec![1, 2, 4],
                missing: vec![3],
            }],
        };

        let expected = "\
# Komga Gap Report

Series scanned: 2
Series with gaps: 1

## Foo
Missing: 3

";
        assert_eq!(render_markdown(&report), expected);
    }

    #[test]
    fn test_render_no_gaps() {
        let report = GapReport {
            series_scanned: 5,
            entries: vec![],
        };

        let expected = "\
# Komga Gap Report

Series scanned: 5
Series with gaps: 0

";
        assert_eq!(render_markdown(&report), expected);
    }

    #[test]
    fn test_render_preserves_catalog_order() {
        let report = GapReport {
            series_scanned: 3,
            entries: vec![
                GapReportEntry {
                    title: "Zeta".to_string(),
                    numbers: vec![1, 3],
                    missing: vec![2],
                },
                GapReportEntry {
                    title: "Alpha".to_string(),
                    numbers: vec![4, 6],
                    missing: vec![5],
                },
            ],
        };

        let rendered = render_markdown(&report);
        let zeta = rendered.find("## Zeta").unwrap();
        let alpha = rendered.find("## Alpha").unwrap();
        assert!(zeta < alpha);
    }

    #[test]
    fn test_render_truncates_long_missing_lists() {
        // 1 and 502 observed: 500 missing numbers in between.
        let missing: Vec<u32> = (2..=501).collect();
        let report = GapReport {
            series_scanned: 1,
            entries: vec![GapReportEntry {
                title: "Huge".to_string(),
                numbers: vec![1, 502],
                missing,
            }],
        };

        let rendered = render_markdown(&report);
        assert!(rendered.contains(", 201, … (+300 more)"));
        assert!(!rendered.contains("202"));
    }
}

//! Metric label extraction
//!
//! Search systems expose a free-text statistics report that mentions the
//! optimized metric on a line like `Metric: f1_macro`. Recovering the label
//! is best effort: any absent or malformed report falls back to
//! [`DEFAULT_METRIC_LABEL`]. The lookup runs once per conversion run and its
//! result is shared by all candidates.

/// Fallback label when no metric name can be recovered.
pub const DEFAULT_METRIC_LABEL: &str = "METRIC";

/// Try to extract a metric label from a free-text report.
///
/// Scans for the first line containing `METRIC` (case-insensitive), splits it
/// on the first `:`, and returns the trimmed, uppercased right-hand side.
/// An empty right-hand side is still a successful parse.
///
/// Returns `None` if no line matches or the matching line has no `:`.
#[must_use]
pub fn parse_metric_label(report: &str) -> Option<String> {
    let line = report
        .lines()
        .find(|line| line.to_uppercase().contains("METRIC"))?;
    let (_, label) = line.split_once(':')?;
    Some(label.trim().to_uppercase())
}

/// Extract a metric label, falling back to [`DEFAULT_METRIC_LABEL`].
///
/// This never fails; it is the caller-facing wrapper around
/// [`parse_metric_label`].
#[must_use]
pub fn metric_label(report: Option<&str>) -> String {
    report
        .and_then(parse_metric_label)
        .unwrap_or_else(|| DEFAULT_METRIC_LABEL.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_label_from_report() {
        let report = "auto-sklearn results:\n  Dataset name: digits\n  Metric: f1_macro\n";
        assert_eq!(parse_metric_label(report), Some("F1_MACRO".to_string()));
    }

    #[test]
    fn test_uppercase_metric_line_matches() {
        let report = "METRIC: accuracy";
        assert_eq!(parse_metric_label(report), Some("ACCURACY".to_string()));
    }

    #[test]
    fn test_first_matching_line_wins() {
        let report = "Metric: roc_auc\nMetric: accuracy";
        assert_eq!(parse_metric_label(report), Some("ROC_AUC".to_string()));
    }

    #[test]
    fn test_no_matching_line() {
        assert_eq!(parse_metric_label("Dataset name: digits"), None);
    }

    #[test]
    fn test_matching_line_without_colon() {
        assert_eq!(parse_metric_label("best metric so far"), None);
    }

    #[test]
    fn test_empty_label_is_a_successful_parse() {
        assert_eq!(parse_metric_label("Metric:"), Some(String::new()));
    }

    #[test]
    fn test_fallback_on_missing_report() {
        assert_eq!(metric_label(None), DEFAULT_METRIC_LABEL);
    }

    #[test]
    fn test_fallback_on_malformed_report() {
        assert_eq!(metric_label(Some("no such line")), DEFAULT_METRIC_LABEL);
    }

    #[test]
    fn test_label_passthrough() {
        assert_eq!(metric_label(Some("Metric: F1_MACRO")), "F1_MACRO");
    }
}

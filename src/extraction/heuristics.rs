//! Keyword and pattern heuristics shared by the extractors.

use super::types::{EstimatedValue, ValueKind};
use crate::core::Severity;
use once_cell::sync::Lazy;
use regex::Regex;

static CURRENCY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\$\s*([0-9][0-9,]*(?:\.[0-9]+)?)\s*([KkMmBb])?").expect("currency pattern")
});

static PERCENT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([0-9]+(?:\.[0-9]+)?)\s*%").expect("percent pattern"));

static TIME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([0-9]+(?:\.[0-9]+)?)\s*(hours?|days?|weeks?|months?|years?)\b")
        .expect("time pattern")
});

static NUMBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9]+(?:[.,][0-9]+)*").expect("number pattern"));

/// Pull a monetary, percentage, or duration value out of free text.
///
/// Currency outranks percentage outranks duration; the first match of the
/// winning kind is used.
pub fn extract_estimated_value(text: &str) -> Option<EstimatedValue> {
    if let Some(captures) = CURRENCY_RE.captures(text) {
        let digits = captures.get(1)?.as_str().replace(',', "");
        let mut value: f64 = digits.parse().ok()?;
        if let Some(suffix) = captures.get(2) {
            value *= match suffix.as_str().to_ascii_uppercase().as_str() {
                "K" => 1_000.0,
                "M" => 1_000_000.0,
                _ => 1_000_000_000.0,
            };
        }
        return Some(EstimatedValue::currency(value));
    }

    if let Some(captures) = PERCENT_RE.captures(text) {
        let value: f64 = captures.get(1)?.as_str().parse().ok()?;
        return Some(EstimatedValue::percentage(value));
    }

    if let Some(captures) = TIME_RE.captures(text) {
        let value: f64 = captures.get(1)?.as_str().parse().ok()?;
        let unit = normalize_time_unit(captures.get(2)?.as_str());
        return Some(EstimatedValue::time(value, unit));
    }

    None
}

fn normalize_time_unit(raw: &str) -> &'static str {
    match raw.trim_end_matches('s') {
        "hour" => "hours",
        "day" => "days",
        "week" => "weeks",
        "month" => "months",
        _ => "years",
    }
}

/// Whether text contains any numeric, currency, or percentage pattern
pub fn contains_metric(text: &str) -> bool {
    NUMBER_RE.is_match(text)
}

/// Infer severity from keywords when no explicit label is present
pub fn infer_severity(text: &str) -> Option<Severity> {
    let lower = text.to_lowercase();
    let has_any = |words: &[&str]| words.iter().any(|w| lower.contains(w));

    if has_any(&["critical", "severe", "urgent", "immediately"]) {
        Some(Severity::Critical)
    } else if has_any(&["high", "significant", "major", "substantial"]) {
        Some(Severity::High)
    } else if has_any(&["moderate", "medium", "elevated", "notable"]) {
        Some(Severity::Medium)
    } else if has_any(&["low", "minor", "slight"]) {
        Some(Severity::Low)
    } else {
        None
    }
}

/// Parse an explicit severity label, e.g. the text of a `.severity-label`
pub fn parse_severity_label(text: &str) -> Option<Severity> {
    match text.trim().to_lowercase().as_str() {
        "critical" => Some(Severity::Critical),
        "high" => Some(Severity::High),
        "medium" | "moderate" => Some(Severity::Medium),
        "low" => Some(Severity::Low),
        _ => None,
    }
}

const IMPACT_DICTIONARY: &[(&str, &[&str])] = &[
    ("revenue", &["revenue", "sales", "pipeline", "pricing", "deal"]),
    ("cost", &["cost", "expense", "spend", "overhead", "waste"]),
    (
        "efficiency",
        &["efficiency", "productivity", "throughput", "automation", "cycle time"],
    ),
    (
        "customer",
        &["customer", "churn", "retention", "satisfaction", "nps"],
    ),
    (
        "team",
        &["team", "hiring", "turnover", "training", "culture", "morale"],
    ),
    (
        "compliance",
        &["compliance", "regulatory", "legal", "audit"],
    ),
    (
        "cash flow",
        &["cash", "liquidity", "receivable", "payable", "runway"],
    ),
];

/// Map keywords in raw element HTML to impact-area labels.
/// Labels come back in dictionary order, deduplicated.
pub fn infer_impact_areas(html: &str) -> Vec<String> {
    let lower = html.to_lowercase();
    IMPACT_DICTIONARY
        .iter()
        .filter(|(_, keywords)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(label, _)| label.to_string())
        .collect()
}

/// Signals feeding the confidence score
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfidenceSignals {
    pub has_title: bool,
    pub word_count: usize,
    pub has_data_attributes: bool,
    pub has_metric: bool,
}

/// Weighted-sum confidence in [0, 1]: base 0.5, +0.15 title, +0.10 over 10
/// words, +0.10 over 50 words, +0.05 data attributes, +0.10 metric present.
/// Monotone in every signal.
pub fn calculate_confidence(signals: ConfidenceSignals) -> f64 {
    let mut score: f64 = 0.5;
    if signals.has_title {
        score += 0.15;
    }
    if signals.word_count > 10 {
        score += 0.10;
    }
    if signals.word_count > 50 {
        score += 0.10;
    }
    if signals.has_data_attributes {
        score += 0.05;
    }
    if signals.has_metric {
        score += 0.10;
    }
    score.min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_with_separator() {
        let value = extract_estimated_value("$1,200").unwrap();
        assert_eq!(value.kind, ValueKind::Currency);
        assert_eq!(value.value, 1200.0);
        assert_eq!(value.unit.as_deref(), Some("USD"));
    }

    #[test]
    fn test_currency_suffix_multipliers() {
        assert_eq!(extract_estimated_value("$2K").unwrap().value, 2000.0);
        assert_eq!(extract_estimated_value("$1.5M").unwrap().value, 1_500_000.0);
        assert_eq!(extract_estimated_value("$3B").unwrap().value, 3_000_000_000.0);
    }

    #[test]
    fn test_percentage() {
        let value = extract_estimated_value("15% increase").unwrap();
        assert_eq!(value.kind, ValueKind::Percentage);
        assert_eq!(value.value, 15.0);
    }

    #[test]
    fn test_time() {
        let value = extract_estimated_value("30 days").unwrap();
        assert_eq!(value.kind, ValueKind::Time);
        assert_eq!(value.value, 30.0);
        assert_eq!(value.unit.as_deref(), Some("days"));
        assert_eq!(
            extract_estimated_value("1 week").unwrap().unit.as_deref(),
            Some("weeks")
        );
    }

    #[test]
    fn test_no_match_is_none() {
        assert_eq!(extract_estimated_value("no figures here"), None);
    }

    #[test]
    fn test_currency_outranks_percentage_and_time() {
        let value = extract_estimated_value("save $500 or 20% within 60 days").unwrap();
        assert_eq!(value.kind, ValueKind::Currency);
        assert_eq!(value.value, 500.0);

        let value = extract_estimated_value("20% within 60 days").unwrap();
        assert_eq!(value.kind, ValueKind::Percentage);
    }

    #[test]
    fn test_severity_inference() {
        assert_eq!(infer_severity("urgent cash issue"), Some(Severity::Critical));
        assert_eq!(infer_severity("significant gap"), Some(Severity::High));
        assert_eq!(infer_severity("moderate exposure"), Some(Severity::Medium));
        assert_eq!(infer_severity("minor cleanup"), Some(Severity::Low));
        assert_eq!(infer_severity("neutral text"), None);
    }

    #[test]
    fn test_severity_label_parsing() {
        assert_eq!(parse_severity_label(" High "), Some(Severity::High));
        assert_eq!(parse_severity_label("CRITICAL"), Some(Severity::Critical));
        assert_eq!(parse_severity_label("unknown"), None);
    }

    #[test]
    fn test_impact_areas_dictionary_order() {
        let areas = infer_impact_areas("churn is eroding revenue and cash runway");
        assert_eq!(areas, vec!["revenue", "customer", "cash flow"]);
    }

    #[test]
    fn test_impact_areas_empty_for_neutral_text() {
        assert!(infer_impact_areas("general commentary").is_empty());
    }

    #[test]
    fn test_confidence_base_and_max() {
        assert_eq!(calculate_confidence(ConfidenceSignals::default()), 0.5);
        let all = ConfidenceSignals {
            has_title: true,
            word_count: 60,
            has_data_attributes: true,
            has_metric: true,
        };
        assert_eq!(calculate_confidence(all), 1.0);
    }

    #[test]
    fn test_confidence_word_count_steps() {
        let base = ConfidenceSignals {
            word_count: 5,
            ..Default::default()
        };
        let over_ten = ConfidenceSignals {
            word_count: 11,
            ..Default::default()
        };
        let over_fifty = ConfidenceSignals {
            word_count: 51,
            ..Default::default()
        };
        assert!(calculate_confidence(base) < calculate_confidence(over_ten));
        assert!(calculate_confidence(over_ten) < calculate_confidence(over_fifty));
    }

    #[test]
    fn test_contains_metric() {
        assert!(contains_metric("$12K"));
        assert!(contains_metric("15%"));
        assert!(contains_metric("3 initiatives"));
        assert!(!contains_metric("no numbers"));
    }
}

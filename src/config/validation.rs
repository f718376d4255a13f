//! Config validation: unknown-key detection with Levenshtein suggestions
//! and plausibility checks on water-chemistry limits.
//!
//! The raw TOML is first parsed into `toml::Value` and its key tree compared
//! against the known field names; unknown keys become warnings with a
//! "did you mean?" suggestion. Warnings never break existing configs.

use std::collections::HashSet;

/// A non-fatal config warning (typo, suspicious value).
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    pub field: String,
    pub message: String,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(ref s) = self.suggestion {
            write!(f, " (did you mean '{s}'?)")?;
        }
        Ok(())
    }
}

// ============================================================================
// Known Config Keys
// ============================================================================

/// Returns the complete set of valid dotted key paths for DashboardConfig.
///
/// Any new field added to DashboardConfig must be added here too.
pub fn known_config_keys() -> HashSet<&'static str> {
    let keys: &[&str] = &[
        // [fleet]
        "fleet",
        "fleet.name",
        // [thresholds]
        "thresholds",
        "thresholds.nitrite",
        "thresholds.nitrite.low_below_ppm",
        "thresholds.nitrite.high_above_ppm",
        "thresholds.chloride",
        "thresholds.chloride.elevated_above_ppm",
        "thresholds.chloride.critical_above_ppm",
        "thresholds.ph",
        "thresholds.ph.low_below",
        "thresholds.ph.high_above",
        "thresholds.total_hardness",
        "thresholds.total_hardness.high_above_ppm",
        "thresholds.total_hardness.critical_above_ppm",
        // [report]
        "report",
        "report.days_in_period",
        // [schedule]
        "schedule",
        "schedule.analysis_interval_days",
    ];
    keys.iter().copied().collect()
}

// ============================================================================
// TOML Key Walking
// ============================================================================

/// Recursively walks a `toml::Value` tree and collects all dotted key paths.
///
/// For example, a table `{ a = { b = 1, c = 2 } }` yields:
/// `["a", "a.b", "a.c"]`
pub fn walk_toml_keys(value: &toml::Value, prefix: &str) -> Vec<String> {
    let mut keys = Vec::new();
    if let Some(table) = value.as_table() {
        for (k, v) in table {
            let path = if prefix.is_empty() {
                k.clone()
            } else {
                format!("{prefix}.{k}")
            };
            keys.push(path.clone());
            if v.is_table() {
                keys.extend(walk_toml_keys(v, &path));
            }
        }
    }
    keys
}

// ============================================================================
// Levenshtein Distance
// ============================================================================

fn levenshtein(a: &str, b: &str) -> usize {
    let b_chars: Vec<char> = b.chars().collect();
    let b_len = b_chars.len();
    if a.is_empty() {
        return b_len;
    }
    if b_len == 0 {
        return a.chars().count();
    }

    let mut prev: Vec<usize> = (0..=b_len).collect();
    let mut curr = vec![0; b_len + 1];

    for (i, ca) in a.chars().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b_chars.iter().enumerate() {
            let cost = usize::from(ca != *cb);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b_len]
}

/// Suggest the closest known key for an unknown key, if within edit distance 3.
///
/// Ties resolve to the lexicographically smallest key so suggestions are stable.
pub fn suggest_correction(unknown: &str, known: &HashSet<&str>) -> Option<String> {
    known
        .iter()
        .map(|k| (levenshtein(unknown, k), *k))
        .filter(|(dist, _)| *dist <= 3)
        .min()
        .map(|(_, k)| k.to_string())
}

// ============================================================================
// Unknown Key Validation (entry point)
// ============================================================================

/// Parse a raw TOML string and return warnings for any unknown config keys.
pub fn validate_unknown_keys(raw_toml: &str) -> Vec<ValidationWarning> {
    let value: toml::Value = match raw_toml.parse() {
        Ok(v) => v,
        Err(_) => return Vec::new(), // parse errors are reported by serde later
    };

    let known = known_config_keys();
    walk_toml_keys(&value, "")
        .into_iter()
        .filter(|key| !known.contains(key.as_str()))
        .map(|key| {
            let suggestion = suggest_correction(&key, &known);
            ValidationWarning {
                message: format!("Unknown config key '{key}'"),
                field: key,
                suggestion,
            }
        })
        .collect()
}

// ============================================================================
// Plausibility Validation
// ============================================================================

/// Validate value ranges on a parsed DashboardConfig.
///
/// Returns (errors, warnings): errors are impossible values that must be
/// rejected; warnings are suspicious but accepted.
pub fn validate_physical_ranges(
    config: &super::DashboardConfig,
) -> (Vec<String>, Vec<ValidationWarning>) {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let t = &config.thresholds;

    let ppm_limits = [
        ("nitrite.low_below_ppm", t.nitrite.low_below_ppm),
        ("nitrite.high_above_ppm", t.nitrite.high_above_ppm),
        ("chloride.elevated_above_ppm", t.chloride.elevated_above_ppm),
        ("chloride.critical_above_ppm", t.chloride.critical_above_ppm),
        ("total_hardness.high_above_ppm", t.total_hardness.high_above_ppm),
        ("total_hardness.critical_above_ppm", t.total_hardness.critical_above_ppm),
    ];
    for (name, value) in ppm_limits {
        if value < 0.0 {
            errors.push(format!("{name} = {value:.1} cannot be negative"));
        }
    }

    // pH scale runs 0-14
    for (name, value) in [("ph.low_below", t.ph.low_below), ("ph.high_above", t.ph.high_above)] {
        if !(0.0..=14.0).contains(&value) {
            errors.push(format!("{name} = {value:.2} is outside the pH scale (0-14)"));
        }
    }

    if let Some(days) = config.report.days_in_period {
        if !(28..=31).contains(&days) {
            errors.push(format!(
                "report.days_in_period = {days} must be between 28 and 31"
            ));
        }
    }

    // Chloride above 500 ppm in a closed cooling circuit means a mistyped limit
    if t.chloride.critical_above_ppm > 500.0 {
        warnings.push(ValidationWarning {
            field: "thresholds.chloride.critical_above_ppm".to_string(),
            message: format!(
                "chloride.critical_above_ppm = {:.1} is outside typical range (0-500 ppm)",
                t.chloride.critical_above_ppm
            ),
            suggestion: None,
        });
    }

    if config.schedule.analysis_interval_days > 90 {
        warnings.push(ValidationWarning {
            field: "schedule.analysis_interval_days".to_string(),
            message: format!(
                "schedule.analysis_interval_days = {} is longer than a quarter",
                config.schedule.analysis_interval_days
            ),
            suggestion: None,
        });
    }

    (errors, warnings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DashboardConfig;

    #[test]
    fn test_levenshtein_basics() {
        assert_eq!(levenshtein("hello", "hello"), 0);
        assert_eq!(levenshtein("chlorde", "chloride"), 1);
        assert_eq!(levenshtein("", "abc"), 3);
        assert_eq!(levenshtein("abc", ""), 3);
    }

    #[test]
    fn test_walk_toml_keys_nested() {
        let toml: toml::Value = r#"
            [thresholds]
            [thresholds.ph]
            low_below = 8.3
        "#
        .parse()
        .unwrap();
        let keys = walk_toml_keys(&toml, "");
        assert!(keys.contains(&"thresholds".to_string()));
        assert!(keys.contains(&"thresholds.ph".to_string()));
        assert!(keys.contains(&"thresholds.ph.low_below".to_string()));
    }

    #[test]
    fn test_typo_key_produces_warning_with_suggestion() {
        let warnings = validate_unknown_keys(
            r#"
[thresholds.chloride]
critcal_above_ppm = 80.0
"#,
        );
        assert_eq!(warnings.len(), 1);
        assert_eq!(
            warnings[0].suggestion.as_deref(),
            Some("thresholds.chloride.critical_above_ppm")
        );
        assert!(warnings[0].to_string().contains("did you mean"));
    }

    #[test]
    fn test_garbage_key_has_no_suggestion() {
        let known = known_config_keys();
        assert!(suggest_correction("completely_unrelated_garbage_key_xyz", &known).is_none());
    }

    #[test]
    fn test_negative_ppm_is_error() {
        let mut config = DashboardConfig::default();
        config.thresholds.chloride.elevated_above_ppm = -1.0;
        let (errors, _) = validate_physical_ranges(&config);
        assert!(errors.iter().any(|e| e.contains("chloride.elevated_above_ppm")));
    }

    #[test]
    fn test_ph_outside_scale_is_error() {
        let mut config = DashboardConfig::default();
        config.thresholds.ph.high_above = 15.0;
        let (errors, _) = validate_physical_ranges(&config);
        assert!(errors.iter().any(|e| e.contains("ph.high_above")));
    }

    #[test]
    fn test_days_in_period_out_of_range() {
        let mut config = DashboardConfig::default();
        config.report.days_in_period = Some(35);
        let (errors, _) = validate_physical_ranges(&config);
        assert!(errors.iter().any(|e| e.contains("days_in_period")));
    }

    #[test]
    fn test_defaults_clean() {
        let (errors, warnings) = validate_physical_ranges(&DashboardConfig::default());
        assert!(errors.is_empty(), "{errors:?}");
        assert!(warnings.is_empty(), "{warnings:?}");
    }
}

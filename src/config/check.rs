//! Configuration file checks for `config --check`.

use crate::config::Config;
use crate::core::calculator::duration::is_numeric;
use crate::utils::time::parse_time;
use serde_yaml::Value;

/// Keys every configuration file is expected to carry.
const KNOWN_KEYS: [&str; 3] = ["end_time", "default_view", "default_entries"];

#[derive(Debug, Default, PartialEq, Eq)]
pub struct CheckReport {
    /// Keys absent from the file (defaults apply)
    pub missing: Vec<String>,
    /// Keys present in the file but not used
    pub unknown: Vec<String>,
    /// Values that parse but make no sense
    pub problems: Vec<String>,
}

impl CheckReport {
    pub fn is_clean(&self) -> bool {
        self.missing.is_empty() && self.unknown.is_empty() && self.problems.is_empty()
    }
}

/// Inspect raw YAML content and the configuration it deserializes to.
pub fn check_config(raw: &str, cfg: &Config) -> CheckReport {
    let mut report = CheckReport::default();

    if let Ok(Value::Mapping(map)) = serde_yaml::from_str::<Value>(raw) {
        for key in KNOWN_KEYS {
            if !map.contains_key(key) {
                report.missing.push(key.to_string());
            }
        }

        for key in map.keys().filter_map(Value::as_str) {
            if !KNOWN_KEYS.contains(&key) {
                report.unknown.push(key.to_string());
            }
        }
    } else {
        report.missing = KNOWN_KEYS.iter().map(|k| k.to_string()).collect();
    }

    if parse_time(&cfg.end_time).is_none() {
        report
            .problems
            .push(format!("end_time '{}' is not a valid HH:MM time", cfg.end_time));
    }

    for (i, entry) in cfg.default_entries.iter().enumerate() {
        if !is_numeric(&entry.duration) {
            report.problems.push(format!(
                "default_entries[{}] minutes '{}' is not numeric (counts as 0)",
                i + 1,
                entry.duration
            ));
        }
    }

    report
}

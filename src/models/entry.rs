use serde::{Deserialize, Deserializer, Serialize};

/// Maximum number of characters kept for a label.
pub const LABEL_MAX_CHARS: usize = 10;

/// One indirect block: a short label and the raw duration typed by the user.
///
/// The duration is kept exactly as entered; it is only turned into minutes
/// when a schedule is calculated (see `core::calculator::duration`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    #[serde(default)]
    pub label: String,
    #[serde(rename = "minutes", default, deserialize_with = "raw_duration")]
    pub duration: String,
}

impl Entry {
    pub fn new(label: &str, duration: &str) -> Self {
        Self {
            label: normalize_label(label),
            duration: duration.to_string(),
        }
    }

    /// Label shown in summaries: empty labels become "Label N" (1-based).
    pub fn display_label(&self, index: usize) -> String {
        if self.label.is_empty() {
            format!("Label {}", index + 1)
        } else {
            self.label.clone()
        }
    }
}

/// Truncate to `LABEL_MAX_CHARS` and upper-case the first character.
pub fn normalize_label(value: &str) -> String {
    let truncated: String = value.chars().take(LABEL_MAX_CHARS).collect();
    let mut chars = truncated.chars();

    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Accept `minutes: 60` as well as `minutes: "60"` in configuration files.
fn raw_duration<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(i64),
        Float(f64),
        Text(String),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Int(n)) => n.to_string(),
        Some(Raw::Float(f)) => f.to_string(),
        Some(Raw::Text(s)) => s,
        None => String::new(),
    })
}

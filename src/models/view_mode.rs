use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How the summary section is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Start/end clock ranges per entry
    #[default]
    Schedule,
    /// Decimal hours per entry plus the "Prod" line
    Eod,
}

impl ViewMode {
    pub fn toggle(self) -> Self {
        match self {
            ViewMode::Schedule => ViewMode::Eod,
            ViewMode::Eod => ViewMode::Schedule,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ViewMode::Schedule => "Schedule",
            ViewMode::Eod => "EOD",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Schedule => "schedule",
            ViewMode::Eod => "eod",
        }
    }
}

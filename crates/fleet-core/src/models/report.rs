use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

pub const REPORT_HEADER: [&str; 4] = ["Origin", "Type", "Version", "Status"];
pub const MISSING_VERSION: &str = "N/A";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ServerStatus {
    Up,
    Down,
}

impl ServerStatus {
    pub fn from_alive(is_alive: bool) -> Self {
        if is_alive {
            ServerStatus::Up
        } else {
            ServerStatus::Down
        }
    }

    pub fn is_up(self) -> bool {
        self == ServerStatus::Up
    }
}

impl fmt::Display for ServerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerStatus::Up => f.write_str("UP"),
            ServerStatus::Down => f.write_str("DOWN"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRow {
    pub origin: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub version: Option<String>,
    pub status: ServerStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl ReportRow {
    pub fn version_label(&self) -> &str {
        self.version.as_deref().unwrap_or(MISSING_VERSION)
    }

    pub fn cells(&self) -> [String; 4] {
        [
            self.origin.clone(),
            self.kind.clone(),
            self.version_label().to_string(),
            self.status.to_string(),
        ]
    }
}

/// One run's worth of rows, already ordered for display.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub generated_at: DateTime<Utc>,
    pub rows: Vec<ReportRow>,
}

impl Report {
    /// Header row followed by one row per server.
    pub fn grid(&self) -> Vec<[String; 4]> {
        std::iter::once(REPORT_HEADER.map(String::from))
            .chain(self.rows.iter().map(ReportRow::cells))
            .collect()
    }

    pub fn up_count(&self) -> usize {
        self.rows.iter().filter(|r| r.status.is_up()).count()
    }

    pub fn down_count(&self) -> usize {
        self.rows.len() - self.up_count()
    }
}

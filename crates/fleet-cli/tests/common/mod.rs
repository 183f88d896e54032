// Each test binary compiles this module independently and uses a different
// subset of helpers, so unused-function warnings are expected.
#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};

use fleet_cli::ui::report_table;
use fleet_core::models::{Report, ReportRow, ServerStatus};

/// Fixed timestamp for deterministic JSON output.
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 15, 10, 0, 0).unwrap()
}

pub fn make_row(origin: &str, kind: &str, version: Option<&str>, status: ServerStatus) -> ReportRow {
    ReportRow {
        origin: origin.to_string(),
        kind: kind.to_string(),
        version: version.map(String::from),
        status,
        reason: match status {
            ServerStatus::Up => None,
            ServerStatus::Down => Some("login returned HTTP 401".to_string()),
        },
    }
}

pub fn make_report(rows: Vec<ReportRow>) -> Report {
    Report {
        generated_at: fixed_now(),
        rows,
    }
}

/// The two-server fleet: A up on 2.0.0, B rejected.
pub fn up_and_down_report() -> Report {
    make_report(vec![
        make_row("https://hub-a.example", "typeX", Some("2.0.0"), ServerStatus::Up),
        make_row("https://hub-b.example", "typeY", None, ServerStatus::Down),
    ])
}

/// Render the report off-screen and return its plain text.
pub fn render_to_string(report: &Report) -> String {
    let buf = report_table::render_report(report);
    report_table::buffer_lines(&buf).join("\n")
}

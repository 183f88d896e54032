mod common;

use ratatui::style::{Color, Modifier};

use fleet_cli::ui::report_table::{column_widths, render_report, table_width};
use fleet_core::models::ServerStatus;

use common::{make_report, make_row, render_to_string, up_and_down_report};

#[test]
fn up_and_down_table() {
    let output = render_to_string(&up_and_down_report());
    insta::assert_snapshot!(output, @r"
    Origin                 Type   Version  Status
    https://hub-a.example  typeX  2.0.0    UP
    https://hub-b.example  typeY  N/A      DOWN

    1 up | 1 down
    ");
}

#[test]
fn empty_report_shows_header_only() {
    let output = render_to_string(&make_report(vec![]));
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines[0], "Origin  Type  Version  Status");
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[2], "0 up | 0 down");
}

#[test]
fn widths_follow_longest_cell() {
    let report = up_and_down_report();
    assert_eq!(column_widths(&report), [21, 5, 7, 6]);
    assert_eq!(table_width(&report), 45);
}

#[test]
fn one_line_per_server() {
    let report = make_report(
        (0..5)
            .map(|i| {
                make_row(
                    &format!("https://hub-{i}.example"),
                    "hub",
                    Some("1.0.0"),
                    ServerStatus::Up,
                )
            })
            .collect(),
    );
    let output = render_to_string(&report);
    // header + 5 rows + blank + summary
    assert_eq!(output.lines().count(), 8);
    assert!(output.contains("5 up | 0 down"));
}

#[test]
fn status_cells_are_colored() {
    let report = up_and_down_report();
    let buf = render_report(&report);
    let status_x = table_width(&report) - 6;

    let up = &buf[(status_x, 1)];
    assert_eq!(up.symbol(), "U");
    assert_eq!(up.fg, Color::LightGreen);
    assert_eq!(up.bg, Color::Black);

    let down = &buf[(status_x, 2)];
    assert_eq!(down.symbol(), "D");
    assert_eq!(down.fg, Color::LightRed);
    assert_eq!(down.bg, Color::Black);

    // Only the status text carries color.
    assert_eq!(buf[(0, 1)].bg, Color::Reset);
}

#[test]
fn header_is_bold() {
    let buf = render_report(&up_and_down_report());
    assert!(buf[(0, 0)].modifier.contains(Modifier::BOLD));
    assert!(!buf[(0, 1)].modifier.contains(Modifier::BOLD));
}

#[test]
fn long_version_widens_column() {
    let report = make_report(vec![make_row(
        "https://a",
        "hub",
        Some("10.4.2-SNAPSHOT-20250615"),
        ServerStatus::Up,
    )]);
    let output = render_to_string(&report);
    assert!(output.contains("10.4.2-SNAPSHOT-20250615  UP"));
}

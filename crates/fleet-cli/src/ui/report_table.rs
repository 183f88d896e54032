use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Cell, Paragraph, Row, Table, Widget};

use fleet_core::models::report::REPORT_HEADER;
use fleet_core::models::{Report, ServerStatus};

pub const COLUMN_SPACING: u16 = 2;

/// Width of each column: the widest cell in it, header included.
pub fn column_widths(report: &Report) -> [u16; 4] {
    let mut widths = REPORT_HEADER.map(|h| Span::raw(h).width() as u16);
    for row in report.rows.iter().map(|r| r.cells()) {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(Span::raw(cell.as_str()).width() as u16);
        }
    }
    widths
}

pub fn table_width(report: &Report) -> u16 {
    column_widths(report).iter().sum::<u16>() + COLUMN_SPACING * 3
}

pub fn status_style(status: ServerStatus) -> Style {
    match status {
        ServerStatus::Up => Style::default().fg(Color::LightGreen).bg(Color::Black),
        ServerStatus::Down => Style::default().fg(Color::LightRed).bg(Color::Black),
    }
}

fn header_row() -> Row<'static> {
    Row::new(REPORT_HEADER.map(|h| {
        Cell::from(Span::styled(h, Style::default().add_modifier(Modifier::BOLD)))
    }))
}

pub fn report_table(report: &Report) -> Table<'_> {
    let rows: Vec<Row> = report
        .rows
        .iter()
        .map(|row| {
            Row::new(vec![
                Cell::from(row.origin.as_str()),
                Cell::from(row.kind.as_str()),
                Cell::from(row.version_label()),
                Cell::from(Span::styled(row.status.to_string(), status_style(row.status))),
            ])
        })
        .collect();

    Table::new(rows, column_widths(report).map(Constraint::Length))
        .header(header_row())
        .column_spacing(COLUMN_SPACING)
}

/// One-line "N up | M down" footer.
pub fn summary_line(report: &Report) -> Line<'static> {
    let up = report.up_count();
    let down = report.down_count();
    Line::from(vec![
        Span::styled(format!("{up} up"), Style::default().fg(Color::LightGreen)),
        Span::styled(" | ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("{down} down"),
            if down > 0 {
                Style::default().fg(Color::LightRed)
            } else {
                Style::default().fg(Color::DarkGray)
            },
        ),
    ])
}

/// Render the report off-screen: table, blank line, summary.
pub fn render_report(report: &Report) -> Buffer {
    let summary = summary_line(report);
    let width = table_width(report).max(summary.width() as u16);
    let table_height = report.rows.len() as u16 + 1;
    let area = Rect::new(0, 0, width, table_height + 2);

    let mut buf = Buffer::empty(area);
    report_table(report).render(Rect::new(0, 0, width, table_height), &mut buf);
    Paragraph::new(summary).render(Rect::new(0, table_height + 1, width, 1), &mut buf);
    buf
}

/// Plain text of a rendered buffer, one entry per row, trailing blanks trimmed.
pub fn buffer_lines(buf: &Buffer) -> Vec<String> {
    let area = buf.area;
    (area.top()..area.bottom())
        .map(|y| {
            let line: String = (area.left()..area.right())
                .map(|x| buf[(x, y)].symbol())
                .collect();
            line.trim_end().to_string()
        })
        .collect()
}

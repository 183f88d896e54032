pub mod ansi;
pub mod report_table;

use std::io::{self, Write};

use fleet_core::models::Report;

/// Render the report as a colorized table and write it to `out`.
pub fn print_table<W: Write>(report: &Report, out: &mut W, color: bool) -> io::Result<()> {
    let buf = report_table::render_report(report);
    ansi::write_buffer(&buf, out, color)
}

use std::io::Write;

use fleet_core::models::Report;

use crate::cli::OutputFormat;
use crate::ui;

pub fn print_report<W: Write>(
    report: &Report,
    format: OutputFormat,
    color: bool,
    out: &mut W,
) -> color_eyre::Result<()> {
    match format {
        OutputFormat::Table => ui::print_table(report, out, color)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, report)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

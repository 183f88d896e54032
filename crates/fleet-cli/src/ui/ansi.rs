use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::{
    Attribute, Color as TermColor, Print, ResetColor, SetAttribute, SetBackgroundColor,
    SetForegroundColor,
};
use ratatui::buffer::{Buffer, Cell};
use ratatui::style::{Color, Modifier};

/// Write a rendered buffer to a plain output stream (not the alternate
/// screen). With `color` off, only the symbols are written.
pub fn write_buffer<W: Write>(buf: &Buffer, out: &mut W, color: bool) -> io::Result<()> {
    let area = buf.area;
    for y in area.top()..area.bottom() {
        let cells: Vec<&Cell> = (area.left()..area.right()).map(|x| &buf[(x, y)]).collect();
        let end = cells
            .iter()
            .rposition(|c| c.symbol() != " " || (color && c.bg != Color::Reset))
            .map_or(0, |i| i + 1);

        let mut current: Option<(Color, Color, Modifier)> = None;
        for cell in &cells[..end] {
            if color {
                let style = (cell.fg, cell.bg, cell.modifier);
                if current != Some(style) {
                    apply_style(out, style)?;
                    current = Some(style);
                }
            }
            queue!(out, Print(cell.symbol()))?;
        }
        if current.is_some() {
            queue!(out, SetAttribute(Attribute::Reset), ResetColor)?;
        }
        queue!(out, Print("\n"))?;
    }
    out.flush()
}

fn apply_style<W: Write>(out: &mut W, (fg, bg, modifier): (Color, Color, Modifier)) -> io::Result<()> {
    queue!(
        out,
        SetAttribute(Attribute::Reset),
        SetForegroundColor(term_color(fg)),
        SetBackgroundColor(term_color(bg))
    )?;
    if modifier.contains(Modifier::BOLD) {
        queue!(out, SetAttribute(Attribute::Bold))?;
    }
    if modifier.contains(Modifier::DIM) {
        queue!(out, SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}

fn term_color(color: Color) -> TermColor {
    match color {
        Color::Reset => TermColor::Reset,
        Color::Black => TermColor::Black,
        Color::Red => TermColor::DarkRed,
        Color::Green => TermColor::DarkGreen,
        Color::Yellow => TermColor::DarkYellow,
        Color::Blue => TermColor::DarkBlue,
        Color::Magenta => TermColor::DarkMagenta,
        Color::Cyan => TermColor::DarkCyan,
        Color::Gray => TermColor::Grey,
        Color::DarkGray => TermColor::DarkGrey,
        Color::LightRed => TermColor::Red,
        Color::LightGreen => TermColor::Green,
        Color::LightYellow => TermColor::Yellow,
        Color::LightBlue => TermColor::Blue,
        Color::LightMagenta => TermColor::Magenta,
        Color::LightCyan => TermColor::Cyan,
        Color::White => TermColor::White,
        Color::Indexed(i) => TermColor::AnsiValue(i),
        Color::Rgb(r, g, b) => TermColor::Rgb { r, g, b },
    }
}

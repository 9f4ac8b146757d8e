//! Table rendering using comfy-table

use crate::models::StatusTier;
use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, ContentArrangement, Table};

/// A table row with the tier used to color its status cell
pub struct TierRow {
    pub tier: StatusTier,
    pub cells: Vec<String>,
}

/// Format a table to a string. The first column of each row is colored by tier.
pub fn format_table(headers: &[&str], rows: &[TierRow]) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);

    // Constrain table width to terminal width minus indent, default to 120 if detection fails
    let width = crossterm::terminal::size()
        .map(|(cols, _)| cols)
        .unwrap_or(120)
        .saturating_sub(4);
    table.set_width(width);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    let header_cells: Vec<Cell> = headers
        .iter()
        .map(|h| Cell::new(h).add_attribute(Attribute::Bold).fg(Color::Cyan))
        .collect();
    table.set_header(header_cells);

    for row in rows {
        let cells: Vec<Cell> = row
            .cells
            .iter()
            .enumerate()
            .map(|(i, text)| {
                let cell = Cell::new(text);
                if i == 0 {
                    cell.fg(tier_color(row.tier))
                } else {
                    cell
                }
            })
            .collect();
        table.add_row(cells);
    }

    let mut out = String::new();
    for line in table.to_string().lines() {
        out.push_str(&format!("    {}\n", line));
    }
    out
}

fn tier_color(tier: StatusTier) -> Color {
    match tier {
        StatusTier::ParseError | StatusTier::ExpiringSoon => Color::Red,
        StatusTier::Warning => Color::Yellow,
        StatusTier::Ok => Color::Green,
    }
}

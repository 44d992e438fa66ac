//! Plain-text rendering of recommendations.

use getaway_core::RankedResult;

/// Column headers in display order.
pub(crate) const HEADERS: [&str; 4] = ["Name", "City", "State", "final_score"];

const BATCH_RULE_WIDTH: usize = 40;

/// Render `rows` as a right-aligned table without a trailing newline.
///
/// Scores use six decimal places. An empty slice renders the header only.
pub(crate) fn render_table(rows: &[RankedResult]) -> String {
    let cells: Vec<[String; 4]> = rows
        .iter()
        .map(|row| {
            [
                row.name.clone(),
                row.city.clone(),
                row.state.clone(),
                format!("{:.6}", row.final_score),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|header| header.chars().count());
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut lines = Vec::with_capacity(cells.len() + 1);
    lines.push(render_line(HEADERS.iter().copied(), &widths));
    for row in &cells {
        lines.push(render_line(row.iter().map(String::as_str), &widths));
    }
    lines.join("\n")
}

fn render_line<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize; 4]) -> String {
    cells
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:>width$}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Heading written before each city's table in a batch report.
pub(crate) fn batch_heading(city: &str) -> String {
    format!(
        "\nTop Weekend Getaways from {city}:\n{}\n",
        "-".repeat(BATCH_RULE_WIDTH)
    )
}

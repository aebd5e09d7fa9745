//! Help table: outcome for every pair of moves.

use fairplay_core::{CircularRules, Result};

const CORNER: &str = "You \\ PC";

/// Render the rules as an ASCII grid. Rows are the player's move, columns
/// the computer's; each cell is the result for the player. A line per move
/// listing the moves it beats follows the grid.
pub fn render(rules: &CircularRules) -> Result<String> {
    let names = rules.moves().names();
    let outcomes = rules.outcome_table();

    let mut header = vec![CORNER.to_string()];
    header.extend(names.iter().cloned());
    let mut rows = vec![header];
    for (name, row) in names.iter().zip(&outcomes) {
        let mut cells = vec![name.clone()];
        cells.extend(row.iter().map(|o| o.as_str().to_string()));
        rows.push(cells);
    }

    let widths: Vec<usize> = (0..rows[0].len())
        .map(|col| {
            rows.iter()
                .map(|r| r[col].chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    let rule = widths
        .iter()
        .map(|w| "-".repeat(w + 2))
        .collect::<Vec<_>>()
        .join("+");
    let rule = format!("+{}+", rule);

    let mut out = String::new();
    out.push_str(&rule);
    for (i, row) in rows.iter().enumerate() {
        out.push('\n');
        out.push('|');
        for (cell, width) in row.iter().zip(&widths) {
            out.push_str(&format!(" {:<width$} |", cell, width = width));
        }
        if i == 0 {
            out.push('\n');
            out.push_str(&rule);
        }
    }
    out.push('\n');
    out.push_str(&rule);
    out.push('\n');

    for m in rules.moves().iter() {
        let beaten: Vec<String> = rules
            .beaten_by(&m)?
            .iter()
            .map(|b| b.name().to_string())
            .collect();
        out.push_str(&format!("\n{} beats: {}", m.name(), beaten.join(", ")));
    }
    Ok(out)
}

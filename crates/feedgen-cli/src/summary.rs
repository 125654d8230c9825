//! Run summary table.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::commands::GenerateResult;

pub fn print_summary(result: &GenerateResult) {
    println!("Platform: {}", result.platform_name);
    println!("Feed: {} ({})", result.output.display(), result.format);
    if let Some(path) = &result.report_path {
        println!("Skip report: {}", path.display());
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        header_cell("Products"),
        header_cell("Written"),
        header_cell("Skipped"),
        header_cell("Cancelled"),
    ]);
    table.add_row(vec![
        Cell::new(result.report.total).set_alignment(CellAlignment::Right),
        Cell::new(result.report.written)
            .set_alignment(CellAlignment::Right)
            .fg(Color::Green),
        skipped_cell(result.report.skipped_count()),
        Cell::new(if result.report.cancelled { "yes" } else { "no" })
            .set_alignment(CellAlignment::Center),
    ]);
    println!("{table}");

    for issues in &result.report.skipped {
        eprintln!("skipped {}:", issues.product_id);
        for error in &issues.errors {
            eprintln!("  - {error}");
        }
    }
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn skipped_cell(count: usize) -> Cell {
    let cell = Cell::new(count).set_alignment(CellAlignment::Right);
    if count > 0 {
        cell.fg(Color::Yellow)
    } else {
        cell
    }
}

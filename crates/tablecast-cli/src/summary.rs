//! Human-readable rendering of an inference report.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use serde_json::Value;

use tablecast_infer::SchemaReport;
use tablecast_model::TypedTable;

pub fn print_report(report: &SchemaReport, table: &TypedTable) {
    println!(
        "Rows: {}  Columns: {}",
        table.row_count(),
        table.column_count()
    );

    let mut schema_table = Table::new();
    schema_table.set_header(vec![
        header_cell("Column"),
        header_cell("Type"),
        header_cell("Non-null"),
    ]);
    apply_table_style(&mut schema_table);
    align_column(&mut schema_table, 2, CellAlignment::Right);
    for column in table.columns() {
        schema_table.add_row(vec![
            Cell::new(&column.name),
            type_cell(column.semantic_type().label()),
            Cell::new(column.data.present_count()),
        ]);
    }
    println!("{schema_table}");

    if report.preview.is_empty() {
        return;
    }
    let mut preview_table = Table::new();
    preview_table.set_header(
        report
            .schema
            .iter()
            .map(|(name, _)| header_cell(name))
            .collect::<Vec<_>>(),
    );
    apply_table_style(&mut preview_table);
    for row in &report.preview {
        preview_table.add_row(
            report
                .schema
                .iter()
                .map(|(name, _)| value_cell(row.get(name)))
                .collect::<Vec<_>>(),
        );
    }
    println!();
    println!("Preview (first {} rows):", report.preview.len());
    println!("{preview_table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn type_cell(label: &str) -> Cell {
    Cell::new(label).fg(Color::Blue)
}

fn value_cell(value: Option<&Value>) -> Cell {
    match value {
        None | Some(Value::Null) => Cell::new("-").fg(Color::DarkGrey),
        Some(Value::String(s)) => Cell::new(s),
        Some(other) => Cell::new(other.to_string()),
    }
}

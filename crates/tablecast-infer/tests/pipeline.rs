//! End-to-end pipeline behavior over raw tables.

use serde_json::{Value, json};

use tablecast_infer::{PREVIEW_ROW_LIMIT, infer_schema, infer_table};
use tablecast_model::{
    ColumnData, RawCell, RawColumn, RawTable, SemanticType, TypedTable,
};

fn text_column(name: &str, values: &[&str]) -> RawColumn {
    RawColumn::new(
        name,
        values
            .iter()
            .map(|v| RawCell::Text((*v).to_string()))
            .collect(),
    )
}

fn single(column: RawColumn) -> RawTable {
    RawTable::new(vec![column]).expect("single column table")
}

fn schema_label(report: &tablecast_infer::SchemaReport, name: &str) -> String {
    report
        .schema
        .iter()
        .find(|(n, _)| n == name)
        .map(|(_, label)| label.clone())
        .expect("column present in schema")
}

#[test]
fn mostly_numeric_text_column_is_integer_with_gap() {
    // Scenario: ["1", "2", "abc"] has two numeric parses, so the column is
    // numeric and the third cell becomes missing.
    let report = infer_schema(single(text_column("v", &["1", "2", "abc"]))).expect("infer");
    assert_eq!(schema_label(&report, "v"), "int8");
    assert_eq!(report.preview[0]["v"], json!(1));
    assert_eq!(report.preview[2]["v"], Value::Null);
}

#[test]
fn date_text_column_is_timestamp_with_gap() {
    let report = infer_schema(single(text_column(
        "d",
        &["2023-01-01", "2023-02-15", "not a date"],
    )))
    .expect("infer");
    assert_eq!(schema_label(&report, "d"), "timestamp");
    assert_eq!(report.preview[0]["d"], json!("2023-01-01T00:00:00"));
    assert_eq!(report.preview[2]["d"], Value::Null);
}

#[test]
fn repeated_labels_are_category() {
    // 2 distinct over 5 rows = 0.4 < 0.5.
    let report = infer_schema(single(text_column(
        "c",
        &["red", "blue", "red", "red", "blue"],
    )))
    .expect("infer");
    assert_eq!(schema_label(&report, "c"), "category");
    assert_eq!(report.preview[1]["c"], json!("blue"));
}

#[test]
fn distinct_labels_are_text() {
    // 5 distinct over 5 rows = 1.0 >= 0.5.
    let report = infer_schema(single(text_column(
        "t",
        &["id1", "id2", "id3", "id4", "id5"],
    )))
    .expect("infer");
    assert_eq!(schema_label(&report, "t"), "text");
}

#[test]
fn infinite_values_are_zero_filled_before_classification() {
    let column = RawColumn::new(
        "f",
        vec![
            RawCell::Float(1.5),
            RawCell::Float(f64::INFINITY),
            RawCell::Float(f64::NEG_INFINITY),
        ],
    );
    let report = infer_schema(single(column)).expect("infer");
    assert_eq!(schema_label(&report, "f"), "float32");
    assert_eq!(report.preview[1]["f"], json!(0.0));
    assert_eq!(report.preview[2]["f"], json!(0.0));
}

#[test]
fn preview_is_truncated_and_ordered() {
    let values: Vec<String> = (0..30).map(|i| format!("{i}")).collect();
    let refs: Vec<&str> = values.iter().map(String::as_str).collect();
    let table = RawTable::new(vec![
        text_column("b", &refs),
        text_column("a", &refs),
    ])
    .expect("table");
    let report = infer_schema(table).expect("infer");
    assert_eq!(report.preview.len(), PREVIEW_ROW_LIMIT);
    // Column order tracks the table, not name order.
    let keys: Vec<&String> = report.preview[0].keys().collect();
    assert_eq!(keys, vec!["b", "a"]);
    // Row order tracks the table.
    assert_eq!(report.preview[0]["a"], json!(0));
    assert_eq!(report.preview[9]["a"], json!(9));
}

#[test]
fn short_tables_preview_every_row() {
    let report = infer_schema(single(text_column("v", &["1", "2"]))).expect("infer");
    assert_eq!(report.preview.len(), 2);
}

#[test]
fn mixed_width_columns_infer_independently() {
    let table = RawTable::new(vec![
        text_column("small", &["1", "2", "3"]),
        text_column("large", &["100000", "200000", "300000"]),
        text_column("frac", &["0.5", "1.5", "x"]),
    ])
    .expect("table");
    let report = infer_schema(table).expect("infer");
    assert_eq!(schema_label(&report, "small"), "int8");
    assert_eq!(schema_label(&report, "large"), "int32");
    assert_eq!(schema_label(&report, "frac"), "float32");
}

#[test]
fn all_missing_column_lands_in_category() {
    let column = RawColumn::new(
        "gone",
        vec![RawCell::Missing, RawCell::Missing, RawCell::Missing],
    );
    let report = infer_schema(single(column)).expect("infer");
    assert_eq!(schema_label(&report, "gone"), "category");
}

/// Re-decode a typed table as raw input, the way a second ingest of the
/// optimized output would look.
fn raw_from_typed(table: &TypedTable) -> RawTable {
    let columns = table
        .columns()
        .iter()
        .map(|column| {
            let cells = (0..column.data.len())
                .map(|row| match &column.data {
                    ColumnData::Int(_, v) => {
                        v[row].map_or(RawCell::Missing, RawCell::Int)
                    }
                    ColumnData::Float(_, v) => {
                        v[row].map_or(RawCell::Missing, RawCell::Float)
                    }
                    ColumnData::Bool(v) => v[row].map_or(RawCell::Missing, RawCell::Bool),
                    ColumnData::Timestamp(v) => {
                        v[row].map_or(RawCell::Missing, RawCell::DateTime)
                    }
                    ColumnData::Category { .. } => column
                        .data
                        .category_label(row)
                        .map_or(RawCell::Missing, |label| {
                            RawCell::Text(label.to_string())
                        }),
                    ColumnData::Text(v) => v[row]
                        .as_deref()
                        .map_or(RawCell::Missing, |s| RawCell::Text(s.to_string())),
                })
                .collect();
            RawColumn::new(&column.name, cells)
        })
        .collect();
    RawTable::new(columns).expect("shape preserved")
}

#[test]
fn classification_is_a_fixed_point() {
    let table = RawTable::new(vec![
        text_column("n", &["1", "2", "abc"]),
        text_column("f", &["1.5", "2.5", "3.5"]),
        text_column("d", &["2023-01-01", "2023-02-15", "oops"]),
        text_column("c", &["x", "x", "x"]),
        text_column("t", &["id1", "id2", "id3"]),
    ])
    .expect("table");

    let first = infer_table(table).expect("first pass");
    let first_types: Vec<SemanticType> =
        first.columns().iter().map(|c| c.semantic_type()).collect();

    let second = infer_table(raw_from_typed(&first)).expect("second pass");
    let second_types: Vec<SemanticType> =
        second.columns().iter().map(|c| c.semantic_type()).collect();

    assert_eq!(first_types, second_types);
}

#[test]
fn boolean_and_timestamp_columns_survive_reinference() {
    let date = chrono::NaiveDate::from_ymd_opt(2023, 6, 1)
        .and_then(|d| d.and_hms_opt(12, 0, 0))
        .expect("valid date");
    let table = RawTable::new(vec![
        RawColumn::new("b", vec![RawCell::Bool(true), RawCell::Bool(false)]),
        RawColumn::new("ts", vec![RawCell::DateTime(date), RawCell::Missing]),
    ])
    .expect("table");

    let first = infer_table(table).expect("first pass");
    assert_eq!(first.columns()[0].semantic_type(), SemanticType::Boolean);
    assert_eq!(first.columns()[1].semantic_type(), SemanticType::Timestamp);

    let second = infer_table(raw_from_typed(&first)).expect("second pass");
    assert_eq!(second.columns()[0].semantic_type(), SemanticType::Boolean);
    assert_eq!(second.columns()[1].semantic_type(), SemanticType::Timestamp);
}

//! Result assembly: the reported schema and a bounded row preview.

use serde_json::{Map, Value};

use tablecast_model::{ColumnData, TypedTable};

/// Maximum number of rows included in a preview.
pub const PREVIEW_ROW_LIMIT: usize = 10;

/// The assembled inference result: an ordered column-name-to-type-label
/// mapping and at most [`PREVIEW_ROW_LIMIT`] preview rows. Column order in
/// both matches the table's column order; preview rows keep table row order.
#[derive(Debug, Clone)]
pub struct SchemaReport {
    pub schema: Vec<(String, String)>,
    pub preview: Vec<Map<String, Value>>,
}

impl SchemaReport {
    /// The full transport payload: `{"data_types": {...}, "data": [...]}`.
    pub fn to_value(&self) -> Value {
        let mut types = Map::new();
        for (name, label) in &self.schema {
            types.insert(name.clone(), Value::String(label.clone()));
        }
        let rows: Vec<Value> = self
            .preview
            .iter()
            .map(|row| Value::Object(row.clone()))
            .collect();
        let mut payload = Map::new();
        payload.insert("data_types".to_string(), Value::Object(types));
        payload.insert("data".to_string(), Value::Array(rows));
        Value::Object(payload)
    }
}

/// Build the report for an optimized table.
pub fn assemble(table: &TypedTable) -> SchemaReport {
    let schema = table
        .columns()
        .iter()
        .map(|column| {
            (
                column.name.clone(),
                column.semantic_type().label().to_string(),
            )
        })
        .collect();

    let limit = table.row_count().min(PREVIEW_ROW_LIMIT);
    let preview = (0..limit)
        .map(|row| {
            let mut record = Map::new();
            for column in table.columns() {
                record.insert(column.name.clone(), transport_value(&column.data, row));
            }
            record
        })
        .collect();

    SchemaReport { schema, preview }
}

/// Render one cell in transport-safe form: numbers as numbers, booleans as
/// booleans, timestamps/categories/text as strings, missing as null.
fn transport_value(data: &ColumnData, row: usize) -> Value {
    match data {
        ColumnData::Int(_, values) => match values.get(row).copied().flatten() {
            Some(v) => Value::from(v),
            None => Value::Null,
        },
        ColumnData::Float(_, values) => match values.get(row).copied().flatten() {
            // Non-finite floats have no JSON number form.
            Some(v) => serde_json::Number::from_f64(v).map_or(Value::Null, Value::Number),
            None => Value::Null,
        },
        ColumnData::Bool(values) => match values.get(row).copied().flatten() {
            Some(v) => Value::Bool(v),
            None => Value::Null,
        },
        ColumnData::Timestamp(values) => match values.get(row).copied().flatten() {
            Some(dt) => Value::String(dt.format("%Y-%m-%dT%H:%M:%S").to_string()),
            None => Value::Null,
        },
        ColumnData::Category { .. } => data
            .category_label(row)
            .map_or(Value::Null, |label| Value::String(label.to_string())),
        ColumnData::Text(values) => match values.get(row).and_then(Option::as_deref) {
            Some(v) => Value::String(v.to_string()),
            None => Value::Null,
        },
    }
}

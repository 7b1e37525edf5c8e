//! Model-level invariants exercised through the public API.

use tablecast_model::{
    ColumnData, IntWidth, RawCell, RawColumn, RawKind, RawTable, SemanticType, TypedColumn,
    TypedTable,
};

#[test]
fn raw_table_shape_accessors() {
    let table = RawTable::new(vec![
        RawColumn::new(
            "id",
            vec![RawCell::Text("1".into()), RawCell::Text("2".into())],
        ),
        RawColumn::new("flag", vec![RawCell::Bool(true), RawCell::Bool(false)]),
    ])
    .expect("aligned table");
    assert_eq!(table.column_count(), 2);
    assert_eq!(table.row_count(), 2);
    assert_eq!(table.columns()[1].kind, RawKind::Boolean);
}

#[test]
fn typed_table_preserves_column_order() {
    let table = TypedTable::new(vec![
        TypedColumn::new("z", ColumnData::Int(IntWidth::I8, vec![Some(1)])),
        TypedColumn::new("a", ColumnData::Text(vec![Some("x".into())])),
    ])
    .expect("aligned table");
    let names: Vec<&str> = table.columns().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["z", "a"]);
}

#[test]
fn semantic_type_serializes() {
    let ty = SemanticType::Integer(IntWidth::I32);
    let json = serde_json::to_string(&ty).expect("serialize");
    let round: SemanticType = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(round, ty);
    assert_eq!(round.label(), "int32");
}

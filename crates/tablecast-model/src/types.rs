//! Semantic column types and their storage widths.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Storage width for integer columns, narrowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum IntWidth {
    I8,
    I16,
    I32,
    I64,
}

impl IntWidth {
    /// The narrowest width whose range contains both bounds.
    pub fn fitting(min: i64, max: i64) -> Self {
        if min >= i64::from(i8::MIN) && max <= i64::from(i8::MAX) {
            Self::I8
        } else if min >= i64::from(i16::MIN) && max <= i64::from(i16::MAX) {
            Self::I16
        } else if min >= i64::from(i32::MIN) && max <= i64::from(i32::MAX) {
            Self::I32
        } else {
            Self::I64
        }
    }
}

/// Storage width for floating-point columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FloatWidth {
    F32,
    F64,
}

/// The inferred logical type of a column.
///
/// A column's semantic type is fixed once classification finishes; the
/// optimizer may still narrow the width inside the same family, never
/// across families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SemanticType {
    Integer(IntWidth),
    Float(FloatWidth),
    Boolean,
    Timestamp,
    Category,
    Text,
}

impl SemanticType {
    /// Human-readable label, one per type/width combination. These are the
    /// strings reported in the schema map.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Integer(IntWidth::I8) => "int8",
            Self::Integer(IntWidth::I16) => "int16",
            Self::Integer(IntWidth::I32) => "int32",
            Self::Integer(IntWidth::I64) => "int64",
            Self::Float(FloatWidth::F32) => "float32",
            Self::Float(FloatWidth::F64) => "float64",
            Self::Boolean => "bool",
            Self::Timestamp => "timestamp",
            Self::Category => "category",
            Self::Text => "text",
        }
    }

    /// Whether two types belong to the same family (integer widths are all
    /// one family, float widths another).
    pub fn same_family(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::Integer(_), Self::Integer(_))
                | (Self::Float(_), Self::Float(_))
                | (Self::Boolean, Self::Boolean)
                | (Self::Timestamp, Self::Timestamp)
                | (Self::Category, Self::Category)
                | (Self::Text, Self::Text)
        )
    }
}

impl fmt::Display for SemanticType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

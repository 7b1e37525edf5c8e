//! Raw cell values as decoded from a source file.
//!
//! A [`RawCell`] is the primitive a file decoder hands to the inference
//! pipeline. CSV decoding only ever produces `Text` and `Missing`; workbook
//! decoding produces the full set of variants.

use chrono::NaiveDateTime;

/// A single decoded cell, before any type inference has run.
#[derive(Debug, Clone, PartialEq)]
pub enum RawCell {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    DateTime(NaiveDateTime),
    Missing,
}

impl RawCell {
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }
}

/// The decoded representation kind of a whole column.
///
/// This tag is recorded once at decode time and drives the classifier's
/// gating decisions instead of re-inspecting cell variants at runtime.
/// `Mixed` is the generic kind: text content, mixed variants, or a column
/// with no non-missing values at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum RawKind {
    /// Every non-missing cell is an integer or float, with at least one present.
    Numeric,
    /// Every cell is a boolean; booleans with gaps decode as `Mixed`.
    Boolean,
    /// Every non-missing cell is a date/time, with at least one present.
    Temporal,
    /// Anything else: textual, mixed, or entirely missing.
    Mixed,
}

impl RawKind {
    /// Derive the column kind from its decoded cells.
    pub fn detect(cells: &[RawCell]) -> Self {
        let mut seen = 0usize;
        let mut numeric = true;
        let mut boolean = true;
        let mut temporal = true;
        for cell in cells {
            match cell {
                RawCell::Missing => {
                    // A gap disqualifies a boolean column but not the others.
                    boolean = false;
                    continue;
                }
                RawCell::Int(_) | RawCell::Float(_) => {
                    boolean = false;
                    temporal = false;
                }
                RawCell::Bool(_) => {
                    numeric = false;
                    temporal = false;
                }
                RawCell::DateTime(_) => {
                    numeric = false;
                    boolean = false;
                }
                RawCell::Text(_) => {
                    numeric = false;
                    boolean = false;
                    temporal = false;
                }
            }
            seen += 1;
        }
        if seen == 0 {
            return Self::Mixed;
        }
        if numeric {
            Self::Numeric
        } else if boolean {
            Self::Boolean
        } else if temporal {
            Self::Temporal
        } else {
            Self::Mixed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_numeric_allows_gaps() {
        let cells = vec![RawCell::Int(1), RawCell::Missing, RawCell::Float(2.5)];
        assert_eq!(RawKind::detect(&cells), RawKind::Numeric);
    }

    #[test]
    fn detect_boolean_requires_no_gaps() {
        let solid = vec![RawCell::Bool(true), RawCell::Bool(false)];
        assert_eq!(RawKind::detect(&solid), RawKind::Boolean);

        let gappy = vec![RawCell::Bool(true), RawCell::Missing];
        assert_eq!(RawKind::detect(&gappy), RawKind::Mixed);
    }

    #[test]
    fn detect_all_missing_is_mixed() {
        let cells = vec![RawCell::Missing, RawCell::Missing];
        assert_eq!(RawKind::detect(&cells), RawKind::Mixed);
    }

    #[test]
    fn detect_text_mixed_with_numbers_is_mixed() {
        let cells = vec![RawCell::Text("a".to_string()), RawCell::Int(1)];
        assert_eq!(RawKind::detect(&cells), RawKind::Mixed);
    }
}

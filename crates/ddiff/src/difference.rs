//! Change records produced by a diff.
//!
//! Records serialize to the wire shape
//! `{kind: "N"|"D"|"E"|"A", path, lhs?, rhs?, index?, item?}`. An absent
//! side (`undefined`) is omitted rather than written as `null`.

use std::fmt;

use ddiff_types::{Path, Value};
use serde::Serialize;

/// The four kinds of change record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum ChangeKind {
    #[serde(rename = "N")]
    New,
    #[serde(rename = "D")]
    Deleted,
    #[serde(rename = "E")]
    Edited,
    #[serde(rename = "A")]
    Array,
}

impl ChangeKind {
    /// The single-letter code used on the wire.
    pub fn code(self) -> char {
        match self {
            ChangeKind::New => 'N',
            ChangeKind::Deleted => 'D',
            ChangeKind::Edited => 'E',
            ChangeKind::Array => 'A',
        }
    }
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A single atomic change between two values.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind")]
pub enum Difference {
    /// A value exists on the right at `path` but not on the left.
    #[serde(rename = "N")]
    New {
        path: Path,
        #[serde(skip_serializing_if = "Value::is_undefined")]
        rhs: Value,
    },
    /// A value exists on the left at `path` but not on the right.
    #[serde(rename = "D")]
    Deleted {
        path: Path,
        #[serde(skip_serializing_if = "Value::is_undefined")]
        lhs: Value,
    },
    /// A value exists on both sides at `path` but differs.
    #[serde(rename = "E")]
    Edited { path: Path, lhs: Value, rhs: Value },
    /// An element was inserted into or removed from the array at `path`.
    #[serde(rename = "A")]
    Array {
        path: Path,
        index: usize,
        item: ArrayItem,
    },
}

impl Difference {
    /// The kind of this record.
    pub fn kind(&self) -> ChangeKind {
        match self {
            Difference::New { .. } => ChangeKind::New,
            Difference::Deleted { .. } => ChangeKind::Deleted,
            Difference::Edited { .. } => ChangeKind::Edited,
            Difference::Array { .. } => ChangeKind::Array,
        }
    }

    /// Location of the change. For `Array` records this is the array
    /// itself; the element position is [`Difference::index`].
    pub fn path(&self) -> &Path {
        match self {
            Difference::New { path, .. }
            | Difference::Deleted { path, .. }
            | Difference::Edited { path, .. }
            | Difference::Array { path, .. } => path,
        }
    }

    /// The left-hand value, if this record carries one.
    pub fn lhs(&self) -> Option<&Value> {
        match self {
            Difference::Deleted { lhs, .. } | Difference::Edited { lhs, .. } => Some(lhs),
            Difference::New { .. } | Difference::Array { .. } => None,
        }
    }

    /// The right-hand value, if this record carries one.
    pub fn rhs(&self) -> Option<&Value> {
        match self {
            Difference::New { rhs, .. } | Difference::Edited { rhs, .. } => Some(rhs),
            Difference::Deleted { .. } | Difference::Array { .. } => None,
        }
    }

    /// Element position for `Array` records.
    pub fn index(&self) -> Option<usize> {
        match self {
            Difference::Array { index, .. } => Some(*index),
            _ => None,
        }
    }

    /// Nested insertion or removal for `Array` records.
    pub fn item(&self) -> Option<&ArrayItem> {
        match self {
            Difference::Array { item, .. } => Some(item),
            _ => None,
        }
    }
}

impl fmt::Display for Difference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difference::Array { path, index, item } => {
                write!(f, "A {path}[{index}] ({})", item.kind())
            }
            other => write!(f, "{} {}", other.kind(), other.path()),
        }
    }
}

/// The insertion or removal carried by an `Array` record.
///
/// It has no path of its own; the enclosing record's `index` locates it.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind")]
pub enum ArrayItem {
    #[serde(rename = "N")]
    New {
        #[serde(skip_serializing_if = "Value::is_undefined")]
        rhs: Value,
    },
    #[serde(rename = "D")]
    Deleted {
        #[serde(skip_serializing_if = "Value::is_undefined")]
        lhs: Value,
    },
}

impl ArrayItem {
    /// Either [`ChangeKind::New`] or [`ChangeKind::Deleted`].
    pub fn kind(&self) -> ChangeKind {
        match self {
            ArrayItem::New { .. } => ChangeKind::New,
            ArrayItem::Deleted { .. } => ChangeKind::Deleted,
        }
    }

    /// The inserted or removed element.
    pub fn value(&self) -> &Value {
        match self {
            ArrayItem::New { rhs } => rhs,
            ArrayItem::Deleted { lhs } => lhs,
        }
    }
}

/// Per-kind counts over a sequence of differences.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DiffSummary {
    /// Number of `New` records.
    pub additions: usize,
    /// Number of `Deleted` records.
    pub deletions: usize,
    /// Number of `Edited` records.
    pub edits: usize,
    /// Number of `Array` records.
    pub array_changes: usize,
}

impl DiffSummary {
    /// Count the records in `changes` by kind.
    pub fn from_changes(changes: &[Difference]) -> Self {
        changes
            .iter()
            .fold(Self::default(), |mut summary, change| {
                match change.kind() {
                    ChangeKind::New => summary.additions += 1,
                    ChangeKind::Deleted => summary.deletions += 1,
                    ChangeKind::Edited => summary.edits += 1,
                    ChangeKind::Array => summary.array_changes += 1,
                }
                summary
            })
    }

    /// Total number of records.
    pub fn total(&self) -> usize {
        self.additions + self.deletions + self.edits + self.array_changes
    }

    /// Returns `true` if no records were counted.
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn path(keys: &[&str]) -> Path {
        keys.iter().copied().collect()
    }

    #[test]
    fn new_record_omits_undefined_lhs() {
        let change = Difference::New {
            path: path(&["other"]),
            rhs: Value::from("property"),
        };
        assert_eq!(
            serde_json::to_value(&change).unwrap(),
            json!({"kind": "N", "path": ["other"], "rhs": "property"})
        );
    }

    #[test]
    fn deleted_undefined_value_omits_both_sides() {
        let change = Difference::Deleted {
            path: path(&["foo"]),
            lhs: Value::Undefined,
        };
        assert_eq!(
            serde_json::to_value(&change).unwrap(),
            json!({"kind": "D", "path": ["foo"]})
        );
    }

    #[test]
    fn array_record_wire_shape() {
        let change = Difference::Array {
            path: path(&["arrayOne"]),
            index: 1,
            item: ArrayItem::New {
                rhs: Value::from(json!({"objValue": "more value"})),
            },
        };
        assert_eq!(
            serde_json::to_value(&change).unwrap(),
            json!({
                "kind": "A",
                "path": ["arrayOne"],
                "index": 1,
                "item": {"kind": "N", "rhs": {"objValue": "more value"}},
            })
        );
    }

    #[test]
    fn accessors() {
        let change = Difference::Edited {
            path: path(&["key"]),
            lhs: Value::Null,
            rhs: Value::from("value"),
        };
        assert_eq!(change.kind(), ChangeKind::Edited);
        assert_eq!(change.lhs(), Some(&Value::Null));
        assert_eq!(change.rhs(), Some(&Value::from("value")));
        assert_eq!(change.index(), None);
        assert_eq!(change.to_string(), "E $.key");

        let change = Difference::Array {
            path: Path::root(),
            index: 2,
            item: ArrayItem::Deleted { lhs: Value::from(3) },
        };
        assert_eq!(change.index(), Some(2));
        assert_eq!(change.item().map(ArrayItem::kind), Some(ChangeKind::Deleted));
        assert_eq!(change.to_string(), "A $[2] (D)");
    }

    #[test]
    fn summary_counts_by_kind() {
        let changes = vec![
            Difference::New {
                path: path(&["a"]),
                rhs: Value::from(1),
            },
            Difference::New {
                path: path(&["b"]),
                rhs: Value::from(2),
            },
            Difference::Deleted {
                path: path(&["c"]),
                lhs: Value::from(3),
            },
        ];
        let summary = DiffSummary::from_changes(&changes);
        assert_eq!(summary.additions, 2);
        assert_eq!(summary.deletions, 1);
        assert_eq!(summary.edits, 0);
        assert_eq!(summary.total(), 3);
        assert!(DiffSummary::from_changes(&[]).is_empty());
    }
}

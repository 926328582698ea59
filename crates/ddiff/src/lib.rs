//! Structural diff of dynamic values.
//!
//! Walks two [`Value`]s in lock-step and produces a flat, ordered list of
//! atomic change records describing how the left-hand value becomes the
//! right-hand one.
//!
//! # Key Types
//!
//! - [`Difference`] / [`ArrayItem`] -- New, Deleted, Edited and Array records
//! - [`Options`] -- Positional or order-independent array comparison
//! - [`DiffSummary`] -- Per-kind record counts
//!
//! # Example
//!
//! ```rust
//! use ddiff::{diff, ChangeKind, Value};
//! use serde_json::json;
//!
//! let lhs = Value::from(json!({"name": "a", "tags": [1, 2]}));
//! let rhs = Value::from(json!({"name": "b", "tags": [1, 2, 3]}));
//!
//! let changes = diff(&lhs, &rhs);
//! assert_eq!(changes.len(), 2);
//! assert_eq!(changes[0].kind(), ChangeKind::Edited);
//! assert_eq!(changes[1].kind(), ChangeKind::Array);
//! ```

mod array;
pub mod difference;
mod differ;
pub mod error;
pub mod options;

pub use ddiff_types::{classify, Key, Kind, Object, Path, Pattern, Value};
pub use difference::{ArrayItem, ChangeKind, DiffSummary, Difference};
pub use error::{DiffError, DiffResult};
pub use options::Options;

use tracing::{debug, warn};

use crate::differ::Differ;

/// Compare two values with default options.
pub fn diff(lhs: &Value, rhs: &Value) -> Vec<Difference> {
    diff_with(lhs, rhs, &Options::default())
}

/// Compare two values.
///
/// Never fails. `options.max_depth` is not consulted; use [`try_diff`] for a
/// bounded traversal.
pub fn diff_with(lhs: &Value, rhs: &Value, options: &Options) -> Vec<Difference> {
    let changes = match Differ::unbounded(options).compare(lhs, rhs, &Path::root()) {
        Ok(changes) => changes,
        Err(err) => unreachable!("unbounded traversal has no error path: {err}"),
    };
    debug!(
        changes = changes.len(),
        order_independent = options.order_independent,
        "diff complete"
    );
    changes
}

/// Compare two values, giving up once a path grows longer than
/// `options.max_depth`.
pub fn try_diff(lhs: &Value, rhs: &Value, options: &Options) -> DiffResult<Vec<Difference>> {
    match Differ::bounded(options).compare(lhs, rhs, &Path::root()) {
        Ok(changes) => {
            debug!(
                changes = changes.len(),
                order_independent = options.order_independent,
                "diff complete"
            );
            Ok(changes)
        }
        Err(err) => {
            warn!(%err, "diff aborted");
            Err(err)
        }
    }
}

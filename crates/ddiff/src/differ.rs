//! The recursive dispatcher and the object reconciler.

use ddiff_types::{classify, Object, Path, Value};

use crate::difference::Difference;
use crate::error::{DiffError, DiffResult};
use crate::options::Options;

/// One traversal over a pair of values.
///
/// Every call returns a freshly built vector; nothing is accumulated across
/// sibling branches.
pub(crate) struct Differ<'a> {
    options: &'a Options,
    depth_limit: Option<usize>,
}

impl<'a> Differ<'a> {
    /// A traversal that never stops on depth.
    pub(crate) fn unbounded(options: &'a Options) -> Self {
        Self {
            options,
            depth_limit: None,
        }
    }

    /// A traversal that fails once a path grows past `options.max_depth`.
    pub(crate) fn bounded(options: &'a Options) -> Self {
        Self {
            options,
            depth_limit: options.max_depth,
        }
    }

    /// Compare `lhs` and `rhs`, both located at `path`.
    pub(crate) fn compare(
        &self,
        lhs: &Value,
        rhs: &Value,
        path: &Path,
    ) -> DiffResult<Vec<Difference>> {
        if let Some(limit) = self.depth_limit {
            if path.len() > limit {
                return Err(DiffError::DepthLimitExceeded {
                    limit,
                    path: path.clone(),
                });
            }
        }

        if lhs.same_value(rhs) {
            return Ok(Vec::new());
        }

        if let (Value::RegExp(left), Value::RegExp(right)) = (lhs, rhs) {
            if left == right {
                return Ok(Vec::new());
            }
            return Ok(vec![Difference::Edited {
                path: path.clone(),
                lhs: Value::String(left.to_string()),
                rhs: Value::String(right.to_string()),
            }]);
        }

        // Not identical, so at most one side is undefined here.
        if lhs.is_undefined() {
            return Ok(vec![Difference::New {
                path: path.clone(),
                rhs: rhs.clone(),
            }]);
        }
        if rhs.is_undefined() {
            return Ok(vec![Difference::Deleted {
                path: path.clone(),
                lhs: lhs.clone(),
            }]);
        }

        if classify(lhs) != classify(rhs) {
            return Ok(vec![edited(lhs, rhs, path)]);
        }

        match (lhs, rhs) {
            (Value::Date(left), Value::Date(right)) if left != right => {
                Ok(vec![edited(lhs, rhs, path)])
            }
            (Value::Array(left), Value::Array(right)) => {
                if self.options.order_independent {
                    self.reconcile_unordered(left, right, path)
                } else {
                    self.reconcile_positional(left, right, path)
                }
            }
            (Value::Object(left), Value::Object(right)) => {
                self.reconcile_objects(left, right, path)
            }
            (Value::Date(_), Value::Date(_))
            | (Value::Null, Value::Null)
            | (Value::Undefined, Value::Undefined) => Ok(Vec::new()),
            _ => Ok(vec![edited(lhs, rhs, path)]),
        }
    }

    /// Returns `true` if the two values produce no differences.
    pub(crate) fn is_equal(&self, lhs: &Value, rhs: &Value, path: &Path) -> DiffResult<bool> {
        Ok(self.compare(lhs, rhs, path)?.is_empty())
    }

    /// Shared keys first (left enumeration order), then left-only keys as
    /// deletions, then right-only keys as additions.
    fn reconcile_objects(
        &self,
        lhs: &Object,
        rhs: &Object,
        path: &Path,
    ) -> DiffResult<Vec<Difference>> {
        let mut changes = Vec::new();

        for (key, left) in lhs.iter() {
            if let Some(right) = rhs.get(key) {
                changes.extend(self.compare(left, right, &path.child(key.as_str()))?);
            }
        }

        for (key, left) in lhs.iter() {
            if !rhs.contains_key(key) {
                changes.push(Difference::Deleted {
                    path: path.child(key.as_str()),
                    lhs: left.clone(),
                });
            }
        }

        for (key, right) in rhs.iter() {
            if !lhs.contains_key(key) {
                changes.push(Difference::New {
                    path: path.child(key.as_str()),
                    rhs: right.clone(),
                });
            }
        }

        Ok(changes)
    }
}

fn edited(lhs: &Value, rhs: &Value, path: &Path) -> Difference {
    Difference::Edited {
        path: path.clone(),
        lhs: lhs.clone(),
        rhs: rhs.clone(),
    }
}

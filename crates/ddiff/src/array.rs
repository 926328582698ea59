//! Array reconciliation.
//!
//! Positional mode attributes any length change to the tail of the longer
//! array and then compares the overlapping prefix index by index. This is a
//! linear heuristic, not a minimal edit script: an insertion in the middle of
//! an array shows up as edits of every later element plus a tail addition.
//!
//! Order-independent mode treats both arrays as multisets. Each left element
//! consumes at most one deep-equal right element; whatever is left over on
//! either side is reported as removed or added. Near matches are not
//! descended into.

use ddiff_types::{Path, Value};
use tracing::trace;

use crate::difference::{ArrayItem, Difference};
use crate::differ::Differ;
use crate::error::DiffResult;

impl Differ<'_> {
    pub(crate) fn reconcile_positional(
        &self,
        lhs: &[Value],
        rhs: &[Value],
        path: &Path,
    ) -> DiffResult<Vec<Difference>> {
        let (m, n) = (lhs.len(), rhs.len());
        let mut changes = Vec::new();

        if m != n {
            trace!(%path, lhs_len = m, rhs_len = n, "array length changed");
        }

        if m > n {
            for (offset, removed) in lhs[n..].iter().enumerate() {
                changes.push(Difference::Array {
                    path: path.clone(),
                    index: n + offset,
                    item: ArrayItem::Deleted {
                        lhs: removed.clone(),
                    },
                });
            }
        } else if n > m {
            for (offset, added) in rhs[m..].iter().enumerate() {
                changes.push(Difference::Array {
                    path: path.clone(),
                    index: m + offset,
                    item: ArrayItem::New { rhs: added.clone() },
                });
            }
        }

        for (index, (left, right)) in lhs.iter().zip(rhs).enumerate() {
            changes.extend(self.compare(left, right, &path.child(index))?);
        }

        Ok(changes)
    }

    /// Multiset comparison of two arrays.
    ///
    /// Candidate matches are compared at the left element's path, so under a
    /// depth limit the reported error path names the left index.
    pub(crate) fn reconcile_unordered(
        &self,
        lhs: &[Value],
        rhs: &[Value],
        path: &Path,
    ) -> DiffResult<Vec<Difference>> {
        // Unmatched right-hand elements, with their original positions.
        let mut remaining: Vec<(usize, &Value)> = rhs.iter().enumerate().collect();
        let mut changes = Vec::new();

        for (index, left) in lhs.iter().enumerate() {
            let element_path = path.child(index);
            let mut matched = None;
            for (slot, (_, right)) in remaining.iter().enumerate() {
                if self.is_equal(left, right, &element_path)? {
                    matched = Some(slot);
                    break;
                }
            }

            match matched {
                Some(slot) => {
                    remaining.remove(slot);
                }
                None => changes.push(Difference::Array {
                    path: path.clone(),
                    index,
                    item: ArrayItem::Deleted { lhs: left.clone() },
                }),
            }
        }

        trace!(
            %path,
            removed = changes.len(),
            added = remaining.len(),
            "multiset reconciliation finished"
        );

        for (index, right) in remaining {
            changes.push(Difference::Array {
                path: path.clone(),
                index,
                item: ArrayItem::New { rhs: right.clone() },
            });
        }

        Ok(changes)
    }
}

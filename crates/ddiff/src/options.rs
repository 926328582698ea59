use serde::{Deserialize, Serialize};

/// Configuration for a diff.
///
/// Deserializes from host configuration with camelCase field names, e.g.
/// `{"orderIndependent": true}`. Missing fields take their defaults.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Options {
    /// Compare arrays as multisets, ignoring element order.
    pub order_independent: bool,
    /// Deepest path length [`crate::try_diff`] will descend to.
    /// `None` means unbounded.
    pub max_depth: Option<usize>,
}

impl Options {
    /// Options with order-independent array comparison enabled.
    pub fn unordered() -> Self {
        Self {
            order_independent: true,
            ..Default::default()
        }
    }

    /// Set the depth limit used by [`crate::try_diff`].
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }
}

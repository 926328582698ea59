use std::fmt;

use serde::{Deserialize, Serialize};

/// One step from a container to one of its children.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Key {
    /// Array position.
    Index(usize),
    /// Object property name.
    Name(String),
}

impl From<usize> for Key {
    fn from(index: usize) -> Self {
        Key::Index(index)
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Key::Name(name.to_string())
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        Key::Name(name)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Index(index) => write!(f, "{index}"),
            Key::Name(name) => f.write_str(name),
        }
    }
}

/// The key chain from the comparison root to a location in a value.
///
/// A path is never extended in place: [`Path::child`] returns a new path, so
/// sibling branches of a traversal cannot observe each other's keys.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Path(Vec<Key>);

impl Path {
    /// The empty path, addressing the comparison root.
    pub fn root() -> Self {
        Self::default()
    }

    /// A new path with `key` appended.
    pub fn child(&self, key: impl Into<Key>) -> Self {
        let mut keys = Vec::with_capacity(self.0.len() + 1);
        keys.extend_from_slice(&self.0);
        keys.push(key.into());
        Self(keys)
    }

    /// Returns `true` for the root path.
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the path has no keys.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The keys, root first.
    pub fn keys(&self) -> &[Key] {
        &self.0
    }

    /// Returns `true` if `prefix` is an ancestor of (or equal to) this path.
    pub fn starts_with(&self, prefix: &Path) -> bool {
        self.0.starts_with(&prefix.0)
    }
}

impl<K: Into<Key>> FromIterator<K> for Path {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// Renders as `$`, `$.levelOne.levelTwo` or `$.items[0].name`.
impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("$")?;
        for key in &self.0 {
            match key {
                Key::Index(index) => write!(f, "[{index}]")?,
                Key::Name(name) => write!(f, ".{name}")?,
            }
        }
        Ok(())
    }
}

use std::fmt;

use serde::{Serialize, Serializer};

use crate::error::TypeError;

/// Flag characters a pattern may carry, in canonical rendering order.
const FLAG_ORDER: &str = "dgimsuvy";

/// A regular-expression value: pattern source plus flags.
///
/// Patterns are never compiled or executed. They only take part in a diff
/// through their canonical rendering `/source/flags`, so two patterns are
/// equal exactly when their renderings are equal.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Pattern {
    source: String,
    flags: String,
}

impl Pattern {
    /// Create a pattern, normalizing the flags into canonical order.
    ///
    /// Unknown or repeated flags are rejected.
    pub fn new(source: impl Into<String>, flags: &str) -> Result<Self, TypeError> {
        let mut seen = [false; FLAG_ORDER.len()];
        for flag in flags.chars() {
            let slot = FLAG_ORDER
                .find(flag)
                .ok_or_else(|| TypeError::InvalidFlags(flags.to_string()))?;
            if seen[slot] {
                return Err(TypeError::InvalidFlags(flags.to_string()));
            }
            seen[slot] = true;
        }
        let flags = FLAG_ORDER
            .chars()
            .zip(seen)
            .filter_map(|(flag, set)| set.then_some(flag))
            .collect();

        Ok(Self {
            source: source.into(),
            flags,
        })
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pattern({self})")
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/{}", self.source, self.flags)
    }
}

impl Serialize for Pattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

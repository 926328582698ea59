//! Value model for ddiff.
//!
//! This crate provides the dynamic value universe compared by the `ddiff`
//! crate, the keys and paths that locate a difference, and the type
//! classifier the differ dispatches on.
//!
//! # Key Types
//!
//! - [`Value`] — Closed sum type over every comparable value
//! - [`Object`] — Insertion-ordered string-keyed map
//! - [`Pattern`] — Regular-expression source and flags
//! - [`Key`] / [`Path`] — Location of a difference relative to the root
//! - [`Kind`] / [`classify`] — Total type classification

pub mod error;
pub mod kind;
pub mod object;
pub mod path;
pub mod pattern;
pub mod value;

pub use error::TypeError;
pub use kind::{classify, Kind};
pub use object::Object;
pub use path::{Key, Path};
pub use pattern::Pattern;
pub use value::Value;

//! Subject identifiers.

use std::fmt::Debug;
use std::hash::Hash;

/// An opaque subject identifier.
///
/// Subjects are only ever compared for equality and set membership, so any
/// hashable label works: `String`, `&'static str`, an enum, or a numeric code.
pub trait Subject: Clone + Eq + Hash + Debug {}

impl<T: Clone + Eq + Hash + Debug> Subject for T {}

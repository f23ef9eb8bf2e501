pub mod canonical_key;
pub mod document;

pub use canonical_key::{CanonicalKey, Region};
pub use document::{ContentLine, Document, Section};

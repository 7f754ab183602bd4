//! # Schema Module
//!
//! In-memory representation of the model tree the generator walks, plus a
//! loader that builds it from a YAML or JSON document.
//!
//! Nodes are a closed set of kinds ([`SchemaNode::Leaf`], [`SchemaNode::Container`],
//! [`SchemaNode::List`]) with kind-specific required fields checked when the
//! tree is built. Kinds the generator has no builder for are preserved as
//! [`SchemaNode::Other`] so the walk can decide whether to skip them.

mod load;
mod types;

pub use load::*;
pub use types::*;

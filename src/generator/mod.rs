//! # Generator Module
//!
//! The generator turns a schema tree into the endpoint descriptors a gNMI
//! client library is rendered from: one descriptor per (node, operation)
//! pair, with method names, Go value types and schema paths fully resolved.
//!
//! ## Architecture
//!
//! ```text
//! SchemaNode tree → walk → build_leaf / build_container / build_list → GnmiEndpoints
//! ```
//!
//! 1. **Walker** ([`walk`]) - visits children in name order, dispatches on
//!    node kind and flattens nested results into one aggregate
//! 2. **Builders** - per-kind descriptor construction ([`build_leaf`],
//!    [`build_container`], [`build_list`])
//! 3. **Naming** - identifier conversion and the leaf type table
//!    ([`pascalize`], [`pluralize`], [`resolve_leaf_type`])
//!
//! ## Ordering
//!
//! Schema children come from an unordered mapping. Every collection of the
//! aggregate is therefore sorted after each level of the walk by
//! (operation, model name, method name, path), with operations ordered
//! `Delete < Get < Update`. Output is identical across runs on identical
//! input.
//!
//! ## Usage
//!
//! ```rust
//! use gnmi_client_gen::config::GeneratorConfig;
//! use gnmi_client_gen::generator::walk;
//! use gnmi_client_gen::schema::{PrimitiveKind, SchemaNode};
//!
//! let root = SchemaNode::container("device")
//!     .with_child(SchemaNode::leaf("hostname", PrimitiveKind::String));
//! let endpoints = walk(&root, &[], "Device", &GeneratorConfig::default()).unwrap();
//! assert_eq!(endpoints.leaves_endpoints.len(), 3);
//! assert_eq!(endpoints.leaves_endpoints[0].method_name, "Delete_Hostname");
//! ```

mod builders;
mod endpoints;
mod error;
mod naming;
mod operation;
mod walker;

pub use builders::*;
pub use endpoints::*;
pub use error::*;
pub use naming::*;
pub use operation::*;
pub use walker::*;

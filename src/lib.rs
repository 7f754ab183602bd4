//! # gnmi-client-gen
//!
//! Schema-driven generator of gNMI client endpoint descriptors.
//!
//! Given a tree of schema nodes (containers, leaves and keyed lists, as
//! produced from a YANG model) the generator emits a deterministic set of
//! descriptors, one per (node, operation) pair, describing the Get, Update
//! and Delete methods a generated client library exposes. A renderer turns
//! the descriptors into source text.
//!
//! ## Architecture
//!
//! - **[`schema`]** - The node tree and its YAML/JSON loader
//! - **[`generator`]** - Tree walk, per-kind descriptor builders, naming and type table
//! - **[`config`]** - Per-run configuration (operation set, strict mode)
//! - **[`cli`]** - The `gnmi-client-gen` command-line driver
//! - **[`logging`]** - `tracing` subscriber setup
//!
//! ### Generation Flow
//!
//! ```text
//! schema file → schema::load_schema → SchemaNode
//!             → generator::walk(root, [], plugin, &config) → GnmiEndpoints (sorted)
//!             → JSON → renderer
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use gnmi_client_gen::config::GeneratorConfig;
//! use gnmi_client_gen::generator::{walk, Operation, OperationSet};
//! use gnmi_client_gen::schema::{PrimitiveKind, SchemaNode};
//!
//! let root = SchemaNode::container("device").with_child(
//!     SchemaNode::list("application", "id")
//!         .with_struct_name("Device_Application")
//!         .with_child(SchemaNode::leaf("id", PrimitiveKind::String)),
//! );
//! let config = GeneratorConfig::default()
//!     .with_operations(OperationSet::new([Operation::Get]).unwrap());
//!
//! let endpoints = walk(&root, &[], "Device", &config).unwrap();
//! assert_eq!(endpoints.list_endpoints[0].item.method_name, "Get_Application");
//! assert_eq!(
//!     endpoints.list_accessors().collect::<Vec<_>>(),
//!     vec!["Get_Application_List"]
//! );
//! ```

pub mod cli;
pub mod config;
pub mod generator;
pub mod logging;
pub mod schema;

pub use config::GeneratorConfig;
pub use generator::{walk, GenError, GnmiEndpoints};
pub use schema::{load_schema, SchemaNode};

//! # CLI Module
//!
//! Command-line driver around the generator: load a schema tree, assemble the
//! run configuration, walk the tree and hand the descriptors on as JSON.
//!
//! ## Commands
//!
//! ### `generate`
//!
//! ```bash
//! gnmi-client-gen generate --schema device.yaml --plugin-name Device --output endpoints.json
//! ```
//!
//! Options:
//! - `--schema <FILE>` - Schema tree (YAML or JSON, required)
//! - `--plugin-name <NAME>` - Label of the generated client (required)
//! - `--config <FILE>` - Generator config (default: `gnmi-client-gen.toml` next to the schema)
//! - `--operations <OPS>` - Comma-separated subset of `get,update,delete`
//! - `--strict` - Fail on node kinds the generator does not handle
//! - `--debug` - Log every generated endpoint
//! - `--output <FILE>` - Write JSON here instead of stdout
//!
//! ### `inspect`
//!
//! Print descriptor counts and list accessor names:
//!
//! ```bash
//! gnmi-client-gen inspect --schema device.yaml --operations get
//! ```

mod commands;


pub use commands::{build_config, generate_endpoints, run, run_cli, summarize, Cli, Commands};

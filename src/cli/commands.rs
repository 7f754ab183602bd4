use crate::config::{load_config, resolve_config_path, GeneratorConfig};
use crate::generator::{walk, GnmiEndpoints, Operation, OperationSet};
use crate::logging::{init_logging, LogConfig};
use crate::schema::load_schema;
use anyhow::Context;
use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Command-line interface for the gNMI client endpoint generator
#[derive(Parser, Debug)]
#[command(name = "gnmi-client-gen")]
#[command(about = "Generate gNMI client endpoint descriptors from a schema tree", long_about = None)]
pub struct Cli {
    /// Log at debug level
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate endpoint descriptors and write them as JSON
    Generate {
        /// Path to the schema tree file (YAML or JSON)
        #[arg(short, long)]
        schema: PathBuf,

        /// Name the generated client is labelled with
        #[arg(short, long)]
        plugin_name: String,

        /// Generator config file (default: gnmi-client-gen.toml next to the schema)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Operations to generate (comma-separated: get,update,delete)
        #[arg(long, num_args = 1.., value_delimiter = ',')]
        operations: Option<Vec<Operation>>,

        /// Fail on node kinds the generator does not handle
        #[arg(long, default_value_t = false)]
        strict: bool,

        /// Log every generated endpoint
        #[arg(long, default_value_t = false)]
        debug: bool,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Summarise the endpoints a schema would produce
    Inspect {
        /// Path to the schema tree file (YAML or JSON)
        #[arg(short, long)]
        schema: PathBuf,

        /// Generator config file (default: gnmi-client-gen.toml next to the schema)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Operations to generate (comma-separated: get,update,delete)
        #[arg(long, num_args = 1.., value_delimiter = ',')]
        operations: Option<Vec<Operation>>,

        /// Fail on node kinds the generator does not handle
        #[arg(long, default_value_t = false)]
        strict: bool,
    },
}

impl Cli {
    /// Whether debug-level logs were requested on the command line
    pub fn wants_debug_logs(&self) -> bool {
        self.verbose || matches!(self.command, Commands::Generate { debug: true, .. })
    }
}

/// Parse the command line, install logging and execute the command
///
/// # Errors
///
/// Returns an error if logging cannot be initialized, the schema or config
/// cannot be loaded, generation fails, or the output cannot be written.
pub fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut log_config = LogConfig::from_env();
    if cli.wants_debug_logs() {
        log_config = log_config.verbose();
    }
    init_logging(&log_config)?;
    run(cli)
}

/// Execute an already parsed command line
pub fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Generate {
            schema,
            plugin_name,
            config,
            operations,
            strict,
            debug,
            output,
        } => {
            let config = build_config(&schema, config.as_deref(), operations, strict, debug)?;
            let endpoints = generate_endpoints(&schema, &plugin_name, &config)?;
            let json = serde_json::to_string_pretty(&endpoints)?;
            match output {
                Some(path) => {
                    fs::write(&path, json)
                        .with_context(|| format!("Failed to write output: {}", path.display()))?;
                    info!(output = %path.display(), endpoints = endpoints.len(), "wrote endpoints");
                }
                None => println!("{json}"),
            }
            Ok(())
        }
        Commands::Inspect {
            schema,
            config,
            operations,
            strict,
        } => {
            let config = build_config(&schema, config.as_deref(), operations, strict, false)?;
            let endpoints = generate_endpoints(&schema, "inspect", &config)?;
            print!("{}", summarize(&endpoints));
            Ok(())
        }
    }
}

/// Assemble the run configuration: config file first, then flag overrides
///
/// Flags only ever switch `strict`/`debug` on; `operations` replaces the
/// file's set when given.
pub fn build_config(
    schema_path: &Path,
    explicit_config: Option<&Path>,
    operations: Option<Vec<Operation>>,
    strict: bool,
    debug: bool,
) -> anyhow::Result<GeneratorConfig> {
    let mut config = match resolve_config_path(explicit_config, schema_path) {
        Some(path) => load_config(&path)?.unwrap_or_default(),
        None => GeneratorConfig::default(),
    };
    if let Some(ops) = operations {
        config.operations = OperationSet::new(ops)?;
    }
    config.strict |= strict;
    config.debug |= debug;
    Ok(config)
}

/// Load a schema file and generate its endpoints
pub fn generate_endpoints(
    schema_path: &Path,
    plugin_name: &str,
    config: &GeneratorConfig,
) -> anyhow::Result<GnmiEndpoints> {
    let root = load_schema(schema_path)?;
    let endpoints = walk(&root, &[], plugin_name, config)
        .with_context(|| format!("Failed to generate endpoints from {}", schema_path.display()))?;
    info!(
        schema = %schema_path.display(),
        plugin = plugin_name,
        endpoints = endpoints.len(),
        "generated endpoints"
    );
    Ok(endpoints)
}

/// Human-readable descriptor counts and list accessor names
pub fn summarize(endpoints: &GnmiEndpoints) -> String {
    let mut out = format!(
        "leaves: {}\ncontainers: {}\nlists: {}\n",
        endpoints.leaves_endpoints.len(),
        endpoints.container_endpoints.len(),
        endpoints.list_endpoints.len()
    );
    for accessor in endpoints.list_accessors() {
        out.push_str(&format!("list accessor: {accessor}\n"));
    }
    out
}

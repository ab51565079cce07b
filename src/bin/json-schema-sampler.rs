//! JSON Schema Sampler CLI
//!
//! Command-line interface for printing a sample value for a schema file.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use json_schema_sampler::{
    json_type_name, load_schema, sample_with_document, SampleOptions, SchemaGraph,
    DEFAULT_MAX_SAMPLE_DEPTH, DEFAULT_TICKS,
};

#[derive(Parser)]
#[command(name = "json-schema-sampler")]
#[command(about = "Generate a sample value from a JSON Schema")]
#[command(version)]
struct Cli {
    /// Schema file to sample
    schema: PathBuf,

    /// Document to resolve $ref pointers against (default: the schema itself)
    #[arg(long)]
    document: Option<PathBuf>,

    /// Omit properties marked readOnly
    #[arg(long)]
    skip_read_only: bool,

    /// Omit properties marked writeOnly
    #[arg(long)]
    skip_write_only: bool,

    /// Omit properties not listed in required
    #[arg(long)]
    skip_non_required: bool,

    /// Maximum nesting depth before truncation
    #[arg(long, default_value_t = DEFAULT_MAX_SAMPLE_DEPTH)]
    max_depth: usize,

    /// Traversal step budget
    #[arg(long, default_value_t = DEFAULT_TICKS)]
    ticks: usize,

    /// Suppress advisory warnings
    #[arg(long, short)]
    quiet: bool,

    /// Output file (stdout if not specified)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(code) => ExitCode::from(code),
    }
}

fn run(cli: Cli) -> Result<(), u8> {
    let mut graph = SchemaGraph::new();

    let schema = load_schema(&mut graph, &cli.schema).map_err(|e| {
        eprintln!("Error: {}", e);
        e.exit_code() as u8
    })?;

    let document = match &cli.document {
        Some(path) => load_schema(&mut graph, path).map_err(|e| {
            eprintln!("Error loading document: {}", e);
            e.exit_code() as u8
        })?,
        None => schema,
    };

    let options = SampleOptions::new()
        .skip_read_only(cli.skip_read_only)
        .skip_write_only(cli.skip_write_only)
        .skip_non_required(cli.skip_non_required)
        .max_sample_depth(cli.max_depth)
        .ticks(cli.ticks)
        .quiet(cli.quiet);

    let value = sample_with_document(&graph, schema, &options, document).map_err(|e| {
        eprintln!("Error: {}", e);
        e.exit_code() as u8
    })?;
    tracing::debug!(kind = json_type_name(&value), "sample generated");

    let json_output = if cli.pretty {
        serde_json::to_string_pretty(&value)
    } else {
        serde_json::to_string(&value)
    }
    .map_err(|e| {
        eprintln!("Error serializing output: {}", e);
        2u8
    })?;

    match cli.output {
        Some(path) => {
            std::fs::write(&path, &json_output).map_err(|e| {
                eprintln!("Error writing to {}: {}", path.display(), e);
                3u8
            })?;
        }
        None => {
            println!("{}", json_output);
        }
    }

    Ok(())
}

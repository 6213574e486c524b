use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde_json::Value;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use stateflow_config::GraphDef;
use stateflow_engine::Flow;
use stateflow_graph::StateGraph;
use stateflow_resolver::{InMemoryValidatorRegistry, Resolver, StandardResolver};

/// Stateflow - derive the current state of an object from a state graph
#[derive(Parser)]
#[command(name = "stateflow")]
#[command(version, about, long_about = None)]
struct Cli {
  /// Log filter used when RUST_LOG is not set
  #[arg(long, global = true, default_value = "warn")]
  log_level: String,

  #[command(subcommand)]
  command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
  /// Evaluate the object read from stdin against a graph
  Eval {
    /// Path to the graph file (JSON)
    graph_file: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
  },

  /// Resolve a graph and print its states
  Check {
    /// Path to the graph file (JSON)
    graph_file: PathBuf,
  },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
  Text,
  Json,
}

fn main() -> Result<()> {
  let cli = Cli::parse();

  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
    )
    .with_writer(io::stderr)
    .init();

  match cli.command {
    Some(Commands::Eval { graph_file, format }) => eval(&graph_file, format)?,
    Some(Commands::Check { graph_file }) => check(&graph_file)?,
    None => {
      println!("stateflow - use --help to see available commands");
    }
  }

  Ok(())
}

fn eval(graph_file: &Path, format: Format) -> Result<()> {
  let graph = load_graph(graph_file)?;

  let object = read_object_from_stdin()?;
  debug!(object = %object, "read object");

  let result = graph.flow(&object).context("failed to evaluate graph")?;
  info!(state = result.current_state_name(), "evaluated");

  let report = result.report();
  match format {
    Format::Text => print!("{}", report),
    Format::Json => println!("{}", serde_json::to_string_pretty(&report)?),
  }

  Ok(())
}

fn check(graph_file: &Path) -> Result<()> {
  let graph = load_graph(graph_file)?;

  println!(
    "{}: {} states",
    graph.name().unwrap_or("(unnamed)"),
    graph.len()
  );
  for state in &graph {
    let sources = if state.is_initial() {
      "initial".to_string()
    } else {
      format!("from {}", state.source_states().join(", "))
    };
    println!(
      "  {} [{}] priority {}, {} requirements",
      state.name(),
      sources,
      state.priority(),
      state.requirements().len()
    );
  }

  Ok(())
}

fn load_graph(graph_file: &Path) -> Result<StateGraph<Value>> {
  let content = std::fs::read_to_string(graph_file)
    .with_context(|| format!("failed to read graph file: {}", graph_file.display()))?;

  let graph_def: GraphDef = serde_json::from_str(&content)
    .with_context(|| format!("failed to parse graph file: {}", graph_file.display()))?;

  info!(graph = %graph_def.name, "loaded graph");

  // No host validators are available from the command line.
  let resolver = StandardResolver::new(InMemoryValidatorRegistry::new());
  let graph = resolver
    .resolve(graph_def)
    .context("failed to resolve graph")?;

  Ok(graph)
}

fn read_object_from_stdin() -> Result<Value> {
  use std::io::IsTerminal;

  if io::stdin().is_terminal() {
    // No stdin pipe, use empty object
    Ok(serde_json::json!({}))
  } else {
    let mut input = String::new();
    io::stdin()
      .read_to_string(&mut input)
      .context("failed to read object from stdin")?;

    if input.trim().is_empty() {
      Ok(serde_json::json!({}))
    } else {
      serde_json::from_str(&input).context("failed to parse object JSON from stdin")
    }
  }
}

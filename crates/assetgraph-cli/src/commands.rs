//! CLI command definitions and handlers

use anyhow::{Context, Result};
use assetgraph_api::{shutdown_signal, AssetGraphServer, ServerConfig};
use assetgraph_core::{load_graph, GraphRead, GraphStore};
use assetgraph_view::{
    analyze, category_of, label_of, node_color, project, properties_of, severity_of, Category, EdgeIdentity,
    PropertyMode, Severity, SeverityFilter, ViewConfig,
};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::info;

const DEFAULT_DATA: &str = "data/model.ttl";

/// Main CLI structure
#[derive(Parser)]
#[command(name = "assetgraph")]
#[command(about = "Interactive asset inventory and vulnerability graph")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve {
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to
        #[arg(short, long)]
        port: Option<u16>,

        /// Turtle or N-Triples file to load
        #[arg(short, long)]
        data: Option<PathBuf>,

        /// TOML config file; flags given here take precedence
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Print the projected nodes and edges
    Graph {
        #[arg(short, long, default_value = DEFAULT_DATA)]
        data: PathBuf,

        /// Keep only vulnerabilities of this severity
        #[arg(short, long)]
        severity: Option<Severity>,

        /// Keep one edge per predicate between the same two entities
        #[arg(long)]
        parallel_edges: bool,

        /// Output format
        #[arg(short, long, default_value = "json")]
        format: OutputFormat,
    },

    /// Print the organization → application → vulnerability roll-up
    Analyze {
        #[arg(short, long, default_value = DEFAULT_DATA)]
        data: PathBuf,

        /// Keep only vulnerabilities of this severity
        #[arg(short, long)]
        severity: Option<Severity>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Show label, category, color and properties of one entity
    Inspect {
        /// Entity URI
        uri: String,

        #[arg(short, long, default_value = DEFAULT_DATA)]
        data: PathBuf,

        /// Include properties that point at other graph nodes
        #[arg(long)]
        all_properties: bool,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Show system information
    Info {
        /// Also summarize this data file
        #[arg(short, long)]
        data: Option<PathBuf>,
    },
}

/// Output format options
#[derive(Clone, Debug, PartialEq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    JsonPretty,
}

impl OutputFormat {
    fn render<T: serde::Serialize>(&self, value: &T, text: impl FnOnce() -> String) -> Result<String> {
        Ok(match self {
            OutputFormat::Text => text(),
            OutputFormat::Json => serde_json::to_string(value)?,
            OutputFormat::JsonPretty => serde_json::to_string_pretty(value)?,
        })
    }
}

/// Command execution result
pub struct CommandResult {
    pub success: bool,
    pub message: String,
    pub data: Option<serde_json::Value>,
}

/// Execute CLI commands
#[derive(Default)]
pub struct CommandExecutor {
    /// Suppress stdout output
    quiet: bool,
}

impl CommandExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Executor that only returns results, for embedding and tests
    pub fn quiet() -> Self {
        Self { quiet: true }
    }

    fn emit(&self, output: &str) {
        if !self.quiet {
            println!("{}", output);
        }
    }

    /// Execute a CLI command
    pub async fn execute(&mut self, command: Commands) -> Result<CommandResult> {
        match command {
            Commands::Serve { host, port, data, config } => self.execute_serve(host, port, data, config).await,
            Commands::Graph { data, severity, parallel_edges, format } => {
                self.execute_graph(&data, severity, parallel_edges, format)
            }
            Commands::Analyze { data, severity, format } => self.execute_analyze(&data, severity, format),
            Commands::Inspect { uri, data, all_properties, format } => {
                self.execute_inspect(&data, &uri, all_properties, format)
            }
            Commands::Info { data } => self.execute_info(data.as_deref()),
        }
    }

    async fn execute_serve(
        &self,
        host: Option<String>,
        port: Option<u16>,
        data: Option<PathBuf>,
        config: Option<PathBuf>,
    ) -> Result<CommandResult> {
        let config = resolve_server_config(config.as_deref(), host, port, data)?;
        let data_path = config.data_path.clone();
        let server =
            AssetGraphServer::load(config).with_context(|| format!("Failed to load {}", data_path.display()))?;

        self.emit(&format!("Starting server on {}", server.config().bind_address()));
        self.emit("Press Ctrl+C to stop");

        server.run_with_shutdown(shutdown_signal()).await?;

        Ok(CommandResult {
            success: true,
            message: "Server stopped".to_string(),
            data: None,
        })
    }

    fn execute_graph(
        &self,
        data: &Path,
        severity: Option<Severity>,
        parallel_edges: bool,
        format: OutputFormat,
    ) -> Result<CommandResult> {
        let graph = load(data)?;
        let config = ViewConfig {
            edge_identity: if parallel_edges {
                EdgeIdentity::EndpointsAndPredicate
            } else {
                EdgeIdentity::Endpoints
            },
            ..ViewConfig::default()
        };
        let projection = project(&graph, SeverityFilter::from(severity), &config);

        let output = format.render(&projection, || {
            let mut text = format!("{} nodes, {} edges\n", projection.nodes.len(), projection.edges.len());
            for edge in &projection.edges {
                let from = projection.node(&edge.from).map_or(edge.from.as_str(), |n| n.label.as_str());
                let to = projection.node(&edge.to).map_or(edge.to.as_str(), |n| n.label.as_str());
                text.push_str(&format!("  {} -[{}]-> {}\n", from, edge.label, to));
            }
            text
        })?;
        self.emit(&output);

        Ok(CommandResult {
            success: true,
            message: format!("Projected {} nodes and {} edges", projection.nodes.len(), projection.edges.len()),
            data: Some(serde_json::to_value(&projection)?),
        })
    }

    fn execute_analyze(&self, data: &Path, severity: Option<Severity>, format: OutputFormat) -> Result<CommandResult> {
        let graph = load(data)?;
        let report = analyze(&graph, SeverityFilter::from(severity));

        let output = format.render(&report, || {
            let mut text = String::new();
            for organization in &report {
                text.push_str(&format!("{}\n", organization.organization));
                for application in &organization.applications {
                    let vulnerabilities = if application.vulnerabilities.is_empty() {
                        "None".to_string()
                    } else {
                        application.vulnerabilities.join(", ")
                    };
                    text.push_str(&format!("  {}: {}\n", application.application, vulnerabilities));
                }
            }
            text
        })?;
        self.emit(&output);

        Ok(CommandResult {
            success: true,
            message: format!("Analyzed {} organizations", report.len()),
            data: Some(serde_json::to_value(&report)?),
        })
    }

    fn execute_inspect(
        &self,
        data: &Path,
        uri: &str,
        all_properties: bool,
        format: OutputFormat,
    ) -> Result<CommandResult> {
        let graph = load(data)?;
        if !graph.mentions(uri) {
            return Ok(CommandResult {
                success: false,
                message: format!("Entity not found: {}", uri),
                data: None,
            });
        }

        let category = category_of(&graph, uri);
        let mode = if all_properties {
            PropertyMode::Unfiltered
        } else {
            PropertyMode::Filtered
        };
        let label = label_of(&graph, uri);
        let color = node_color(&graph, uri);
        let properties = properties_of(&graph, uri, mode);
        let severity = match category {
            Category::Vulnerability => Some(severity_of(&graph, uri)),
            _ => None,
        };

        let entity = serde_json::json!({
            "id": uri,
            "label": label,
            "category": category,
            "group": category.group(),
            "color": color,
            "severity": severity,
            "properties": properties,
        });

        let output = format.render(&entity, || {
            let mut text = format!("{} ({}, {})\n", label, category.as_str(), color);
            if let Some(severity) = severity {
                text.push_str(&format!("  severity: {}\n", severity));
            }
            for property in &properties {
                text.push_str(&format!("  {}: {}\n", property.key, property.value));
            }
            text
        })?;
        self.emit(&output);

        Ok(CommandResult {
            success: true,
            message: format!("Inspected {}", uri),
            data: Some(entity),
        })
    }

    fn execute_info(&self, data: Option<&Path>) -> Result<CommandResult> {
        let mut info = serde_json::json!({
            "name": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "description": env!("CARGO_PKG_DESCRIPTION"),
            "authors": env!("CARGO_PKG_AUTHORS"),
            "repository": env!("CARGO_PKG_REPOSITORY"),
            "formats": ["turtle", "n-triples"],
            "features": ["graph-projection", "vulnerability-rollup", "rest-api", "cli"]
        });

        if let Some(path) = data {
            let graph = load(path)?;
            info["dataset"] = serde_json::json!({
                "path": path.display().to_string(),
                "statistics": graph.statistics(),
                "organizations": analyze(&graph, SeverityFilter::All).len(),
            });
        }

        let result = serde_json::to_string_pretty(&info)?;
        self.emit(&result);

        Ok(CommandResult {
            success: true,
            message: "System information".to_string(),
            data: Some(info),
        })
    }
}

/// Layer command-line flags over the config file (or the defaults)
pub fn resolve_server_config(
    config_path: Option<&Path>,
    host: Option<String>,
    port: Option<u16>,
    data: Option<PathBuf>,
) -> Result<ServerConfig> {
    let mut config = match config_path {
        Some(path) => {
            info!("Reading server config from {}", path.display());
            ServerConfig::from_file(path)?
        }
        None => ServerConfig::default(),
    };

    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }
    if let Some(data) = data {
        config.data_path = data;
    }

    Ok(config)
}

fn load(path: &Path) -> Result<GraphStore> {
    load_graph(path).with_context(|| format!("Failed to load {}", path.display()))
}

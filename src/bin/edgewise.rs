//! CLI entry point for the `edgewise` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use edgewise::cli::{commands, CliError};
use edgewise::graph::TraversalKind;
use edgewise::types::{EdgeAssociation, GraphError};

#[derive(Parser)]
#[command(
    name = "edgewise",
    about = "Edgewise CLI — adjacency queries and traversals over edge-list files"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize an edge-list file
    Info {
        /// Path to the edge-list file
        file: PathBuf,
    },
    /// List the vertices adjacent to a vertex
    Neighbors {
        /// Path to the edge-list file
        file: PathBuf,
        /// Vertex name as written in the file
        vertex: String,
        /// Direction: outgoing, incoming, or all
        #[arg(long, default_value = "outgoing")]
        association: String,
    },
    /// List the edges running from one vertex to another
    Between {
        /// Path to the edge-list file
        file: PathBuf,
        /// Source vertex name
        source: String,
        /// Dest vertex name
        dest: String,
    },
    /// Walk the graph from a starting vertex
    Traverse {
        /// Path to the edge-list file
        file: PathBuf,
        /// Starting vertex name
        start: String,
        /// Search kind: bfs or dfs
        #[arg(long, default_value = "bfs")]
        kind: String,
        /// Direction: outgoing, incoming, or all
        #[arg(long, default_value = "outgoing")]
        association: String,
    },
}

fn parse_association(value: &str) -> EdgeAssociation {
    match value {
        "outgoing" => EdgeAssociation::Outgoing,
        "incoming" => EdgeAssociation::Incoming,
        "all" => EdgeAssociation::All,
        _ => {
            eprintln!("Invalid association: {}", value);
            process::exit(3);
        }
    }
}

fn parse_kind(value: &str) -> TraversalKind {
    match value {
        "bfs" => TraversalKind::Bfs,
        "dfs" => TraversalKind::Dfs,
        _ => {
            eprintln!("Invalid search kind: {}", value);
            process::exit(3);
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    if cli.verbose {
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .init();
    }

    let result = match cli.command {
        Commands::Info { file } => commands::cmd_info(&file, json),
        Commands::Neighbors {
            file,
            vertex,
            association,
        } => commands::cmd_neighbors(&file, &vertex, parse_association(&association), json),
        Commands::Between { file, source, dest } => {
            commands::cmd_between(&file, &source, &dest, json)
        }
        Commands::Traverse {
            file,
            start,
            kind,
            association,
        } => commands::cmd_traverse(
            &file,
            &start,
            parse_kind(&kind),
            parse_association(&association),
            json,
        ),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            CliError::Io(_) => 1,
            CliError::MalformedLine { .. } => 2,
            CliError::UnknownVertex(_) | CliError::Graph(GraphError::VertexNotFound(_)) => 4,
        };
        process::exit(code);
    }
}

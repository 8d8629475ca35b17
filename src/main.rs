//! ankh CLI: trust-gated knowledge workflow.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};

use per_ankh::error::{AnkhError, StoreError};
use per_ankh::node::{KnowledgeNode, NodeId};
use per_ankh::query::Answer;
use per_ankh::session::{Session, SessionConfig};
use per_ankh::upload::PendingUpload;

#[derive(Parser)]
#[command(name = "ankh", version, about = "Trust-gated knowledge workflow")]
struct Cli {
    /// Data directory for persistent nodes. Omit to run memory-only.
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Author recorded on submitted drafts.
    #[arg(long, global = true, default_value = "User Master")]
    author: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new per-ankh data directory.
    Init,

    /// Upload documents and submit them for review as draft nodes.
    Submit {
        /// Files to upload.
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// List draft nodes awaiting validation.
    Drafts,

    /// Approve a draft node into the validated layer.
    Approve {
        /// Numeric node ID.
        id: u64,

        /// Validator identity recorded on the node.
        #[arg(long, default_value = "Igor")]
        validator: String,
    },

    /// Ask a question against the validated knowledge layer.
    Query {
        /// Question text.
        text: String,
    },

    /// List all knowledge nodes.
    List,

    /// Show details of a specific node.
    Show {
        /// Numeric node ID.
        id: u64,
    },

    /// Export the graph projection as JSON.
    Graph,

    /// Show session info and statistics.
    Info,
}

fn main() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(3)
                .build(),
        )
    }))
    .ok(); // Ignore error if hook already set (e.g., in tests)

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let config = SessionConfig {
        data_dir: cli.data_dir.clone(),
        author: cli.author.clone(),
        ..Default::default()
    };

    match cli.command {
        Commands::Init => {
            let data_dir = cli.data_dir.unwrap_or_else(|| PathBuf::from("ingested"));
            let config = SessionConfig {
                data_dir: Some(data_dir.clone()),
                author: cli.author,
                ..Default::default()
            };
            let session = Session::new(config).into_diagnostic()?;
            println!("Initialized per-ankh at {}", data_dir.display());
            println!("{}", session.stats());
        }

        Commands::Submit { files } => {
            let mut session = Session::new(config).into_diagnostic()?;

            for path in &files {
                let filename = match path.file_name().and_then(|name| name.to_str()) {
                    Some(name) => name.to_string(),
                    None => miette::bail!("not a usable file path: {}", path.display()),
                };
                let data = std::fs::read(path).into_diagnostic()?;
                if !session.stage_upload(PendingUpload::new(filename.clone(), data)) {
                    println!("Skipping duplicate filename: {filename}");
                }
            }

            let ids = session.submit_all().into_diagnostic()?;
            println!(
                "{} file(s) submitted. Draft nodes are awaiting validation.",
                ids.len()
            );
            for id in &ids {
                let title = session
                    .node(*id)
                    .map(|node| node.title.as_str())
                    .unwrap_or_default();
                println!("  {id} \"{title}\"");
            }
        }

        Commands::Drafts => {
            let session = Session::new(config).into_diagnostic()?;
            let drafts = session.pending_review();
            if drafts.is_empty() {
                println!("The review queue is clear.");
            } else {
                println!("Drafts awaiting validation ({}):", drafts.len());
                for node in &drafts {
                    println!("  {} from {}: {}", node.id, node.author, node.snippet(100));
                }
            }
        }

        Commands::Approve { id, validator } => {
            let mut session = Session::new(config).into_diagnostic()?;
            let node = session
                .approve(NodeId::new(id), &validator)
                .into_diagnostic()?;
            println!(
                "{} validated by {} and added to the trusted layer.",
                node.id, validator
            );
        }

        Commands::Query { text } => {
            let session = Session::new(config).into_diagnostic()?;
            match session.query(&text) {
                Answer::Grounded {
                    content,
                    provenance,
                } => {
                    println!("{content}");
                    println!();
                    println!("Provenance & trust check:");
                    println!("  status:       {}", provenance.status);
                    println!("  source node:  {}", provenance.node_id);
                    println!("  author:       {}", provenance.author);
                    println!(
                        "  validated by: {}",
                        provenance.validator.as_deref().unwrap_or("None")
                    );
                }
                answer @ Answer::Placeholder => {
                    println!("{}", answer.content());
                    println!();
                    println!("Status: unvalidated draft (not part of the trusted layer)");
                }
            }
        }

        Commands::List => {
            let session = Session::new(config).into_diagnostic()?;
            let nodes = session.nodes();
            if nodes.is_empty() {
                println!("No nodes in the store.");
            } else {
                println!("Nodes ({}):", nodes.len());
                for node in nodes {
                    println!("  {} [{}] {}", node.id, node.status, node.title);
                }
            }
        }

        Commands::Show { id } => {
            let session = Session::new(config).into_diagnostic()?;
            let node = find_node(&session, id)?;
            println!("Node: {}", node.id);
            println!("  title:     {}", node.title);
            println!("  status:    {}", node.status);
            println!("  author:    {}", node.author);
            println!(
                "  validator: {}",
                node.validator.as_deref().unwrap_or("None")
            );
            println!("  concepts:  {}", node.concepts.join(", "));
            if !node.relations.is_empty() {
                println!("  relations ({}):", node.relations.len());
                for relation in &node.relations {
                    println!("    -> \"{}\" ({})", relation.target, relation.relation);
                }
            }
            println!("  content:   {}", node.content);
        }

        Commands::Graph => {
            let session = Session::new(config).into_diagnostic()?;
            let projection = session.graph();
            let json = serde_json::to_string_pretty(&projection).into_diagnostic()?;
            println!("{json}");
        }

        Commands::Info => {
            let session = Session::new(config).into_diagnostic()?;
            println!("{}", session.stats());
        }
    }

    Ok(())
}

/// Look up a node by raw ID, mapping a miss to the store's not-found error.
fn find_node(session: &Session, id: u64) -> Result<&KnowledgeNode> {
    session
        .node(NodeId::new(id))
        .ok_or_else(|| AnkhError::Store(StoreError::NotFound { id }).into())
}

//! Smart SEO command line tool
//!
//! Runs on-page analysis and link graph queries against a JSON corpus and
//! prints JSON results on stdout.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use smart_seo::search::{NoMetrics, StaticMetrics};
use smart_seo::{ContentStore, DocumentFilter, DocumentId, InMemoryStore, SeoConfig, SeoContext};
use std::path::PathBuf;

/// Smart SEO analyzer
#[derive(Parser, Debug)]
#[command(name = "smart-seo")]
#[command(version)]
#[command(about = "On-page SEO scoring and internal link analysis")]
struct Args {
    /// Corpus file: {"documents": [...]}
    #[arg(short, long)]
    corpus: PathBuf,

    /// Optional JSON config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Site permalink base (overrides the config file)
    #[arg(long)]
    site_url: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score one document against a focus keyword
    Analyze {
        /// Document id
        id: DocumentId,
        /// Focus keyword
        #[arg(short, long, default_value = "")]
        keyword: String,
    },
    /// List documents linking to a document
    Incoming {
        /// Document id
        id: DocumentId,
    },
    /// Suggest related documents to link to
    Related {
        /// Document id
        id: DocumentId,
        /// Maximum number of suggestions
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Analyze every published post and page and summarize the scores
    Summary {
        /// Focus keyword applied to every document
        #[arg(short, long, default_value = "")]
        keyword: String,
    },
    /// Analysis, incoming links and search metrics together
    Insights {
        /// Document id
        id: DocumentId,
        /// Focus keyword
        #[arg(short, long, default_value = "")]
        keyword: String,
        /// Search metrics file: {"property_url": "...", "pages": {...}}
        #[arg(long)]
        metrics: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize tracing
    let filter = if args.verbose { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut config = match &args.config {
        Some(path) => SeoConfig::from_json_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => SeoConfig::default(),
    };
    if let Some(site_url) = args.site_url {
        config.site_url = site_url;
    }
    config.validate().context("Invalid configuration")?;

    let store = InMemoryStore::from_json_file(&args.corpus)
        .with_context(|| format!("Failed to load corpus from {}", args.corpus.display()))?;
    tracing::info!("Loaded {} documents", store.len());

    let context = SeoContext::new(config);

    match args.command {
        Command::Analyze { id, keyword } => print_json(&context.analyze(&store, id, &keyword)),
        Command::Incoming { id } => print_json(&context.incoming_links(&store, id)),
        Command::Related { id, limit } => print_json(&context.related(&store, id, limit)),
        Command::Summary { keyword } => {
            let filter = DocumentFilter::published(context.config().scanned_types.clone());
            let reports: Vec<_> = store
                .list_documents(&filter)
                .iter()
                .map(|doc| (doc.id, context.analyzer().analyze(doc, &keyword)))
                .collect();
            print_json(&context.summary(&store, reports.iter().map(|(id, report)| (*id, report))))
        }
        Command::Insights { id, keyword, metrics } => {
            let insights = match metrics {
                Some(path) => {
                    let provider = StaticMetrics::from_json_file(&path)
                        .with_context(|| format!("Failed to load metrics from {}", path.display()))?
                        .zero_when_missing(true);
                    context.insights(&store, id, &keyword, &provider)
                }
                None => context.insights(&store, id, &keyword, &NoMetrics),
            };
            print_json(&insights)
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", json);
    Ok(())
}

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use docsense::config::Config;
use docsense::extract::{extract_text, DocumentKind};
use docsense::pipeline::{analyze_document, Analyzers};
use docsense::topics::TopicModel;

/// Docsense: semantic analysis for uploaded documents.
///
/// Extracts text from PDF, DOCX, or plain-text files and reports sentiment
/// polarity, named entities, and topic words.
#[derive(Parser)]
#[command(name = "docsense", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP analysis service
    Serve {
        /// Listening port (overrides DOCSENSE_PORT)
        #[arg(long)]
        port: Option<u16>,

        /// Bind address (overrides DOCSENSE_BIND)
        #[arg(long)]
        bind: Option<String>,
    },

    /// Analyze a local file and print the result to the terminal
    Analyze {
        /// Path to a .pdf, .docx, or .txt file
        file: PathBuf,

        /// Number of topics to extract
        #[arg(long, default_value = "2")]
        topics: usize,

        /// Terms per topic
        #[arg(long, default_value = "5")]
        words: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    let config = Config::load()?;

    // Set up structured logging. DOCSENSE_DEBUG raises the default filter;
    // RUST_LOG always wins when set.
    let default_filter = if config.debug {
        "docsense=debug"
    } else {
        "docsense=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port, bind } => {
            let mut config = config;
            if let Some(port) = port {
                config.port = port;
            }
            if let Some(bind) = bind {
                config.bind = bind;
            }

            let analyzers = Arc::new(Analyzers::initialize(TopicModel {
                num_topics: config.num_topics,
                num_words: config.words_per_topic,
                ..TopicModel::default()
            }));

            docsense::web::run_server(config, analyzers).await?;
        }

        Commands::Analyze {
            file,
            topics,
            words,
        } => {
            let filename = file
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or_default();
            let kind = DocumentKind::from_filename(filename)
                .context("File type not allowed — expected .pdf, .docx, or .txt")?;

            let data =
                std::fs::read(&file).with_context(|| format!("Failed to read {}", file.display()))?;
            let text = extract_text(&data, kind)?;
            if text.is_empty() {
                anyhow::bail!("No text could be extracted from the file");
            }

            let analyzers = Analyzers::initialize(TopicModel {
                num_topics: topics,
                num_words: words,
                ..TopicModel::default()
            });

            let result = analyze_document(&analyzers, &text)?;
            docsense::output::display_analysis(&result);
        }
    }

    Ok(())
}

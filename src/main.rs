//! sitesearch: Command-line interface for the site search engine

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use sitesearch::config::{app_config::AppConfig, path_resolver};
use sitesearch::extract::HighlightMarkers;
use sitesearch::index::Corpus;
use sitesearch::search::Searcher;
use sitesearch::session::{
    render_panel, ClickTarget, RenderedPanel, ResultsSurface, SearchSession, SessionDriver,
    UiEvent,
};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// ============================================================================
// Terminal Surface
// ============================================================================

/// Prints rendered panels to stdout
struct TerminalSurface;

impl ResultsSurface for TerminalSurface {
    fn show(&mut self, panel: &RenderedPanel) {
        print_panel(panel);
    }

    fn hide(&mut self) {
        println!("(results hidden)");
    }

    fn clear_input(&mut self) {
        println!("(input cleared)");
    }
}

fn print_panel(panel: &RenderedPanel) {
    if panel.is_empty() {
        println!("{}", panel.no_results_message());
        return;
    }

    println!("{}:\n", panel.summary());
    for (i, row) in panel.rows.iter().enumerate() {
        println!("{}. {}", i + 1, row.title_html);
        println!("   {}", row.url);
        println!("   {}\n", row.excerpt_html);
    }
}

// ============================================================================
// CLI Implementation
// ============================================================================

/// sitesearch: substring search over a static site corpus
#[derive(Parser)]
#[command(name = "sitesearch")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to a config file (default: XDG config dir)
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Html,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize sitesearch configuration
    Init {
        /// Force overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },
    /// Run a single search and print the results
    Search {
        /// Search query
        query: String,

        /// Corpus file or directory (default: built-in site corpus)
        #[arg(short, long)]
        corpus: Option<String>,

        /// Maximum rows to print
        #[arg(short = 'n', long)]
        max_results: Option<usize>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Drive a debounced search session from stdin
    ///
    /// Each line is the new input value. Commands: `:submit`, `:open URL`,
    /// `:outside`, `:esc`, `:quit`.
    Repl {
        /// Corpus file or directory (default: built-in site corpus)
        #[arg(short, long)]
        corpus: Option<String>,

        /// Debounce delay in milliseconds
        #[arg(long)]
        debounce_ms: Option<u64>,
    },
}

/// Load config with priority CLI > env > file > defaults
fn load_config(path: Option<&str>) -> Result<AppConfig> {
    let file_path = match path {
        Some(p) => Some(path_resolver::resolve_path(p)?),
        None => Some(path_resolver::get_default_config_path()).filter(|p| p.exists()),
    };

    let file_config = match file_path {
        Some(p) => AppConfig::from_file(&p)?,
        None => AppConfig::default(),
    };

    Ok(file_config.merge_with(&AppConfig::from_env()))
}

fn load_corpus(config: &AppConfig) -> Result<Arc<Corpus>> {
    let corpus = match config.corpus_path() {
        Some(path) => {
            let resolved = path_resolver::resolve_path(path)?;
            Corpus::load_path(&resolved)
                .with_context(|| format!("Failed to load corpus from {}", resolved.display()))?
        }
        None => Corpus::builtin().context("Failed to load built-in corpus")?,
    };
    Ok(Arc::new(corpus))
}

/// Parse a REPL line into a UI event, `None` to quit
fn parse_repl_line(line: &str) -> Option<UiEvent> {
    match line.trim_end_matches(['\r', '\n']) {
        ":quit" | ":q" => None,
        ":submit" => Some(UiEvent::Submit),
        ":outside" => Some(UiEvent::Click(ClickTarget::Outside)),
        ":esc" => Some(UiEvent::Dismiss),
        other => match other.strip_prefix(":open ") {
            Some(url) => Some(UiEvent::Select(url.trim().to_string())),
            None => Some(UiEvent::Input(other.to_string())),
        },
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging (to stderr to keep stdout for results)
    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match cli.command {
        Commands::Init { force } => {
            let config_dir = path_resolver::get_config_dir();
            let config_path = config_dir.join("config.toml");

            eprintln!("Initializing sitesearch configuration...");
            eprintln!("Config directory: {}", config_dir.display());

            if !config_dir.exists() {
                std::fs::create_dir_all(&config_dir)?;
                eprintln!("Created config directory");
            }

            if config_path.exists() && !force {
                eprintln!("Configuration file already exists: {}", config_path.display());
                eprintln!("Use --force to overwrite");
                return Ok(());
            }

            let toml_content = AppConfig::default().to_toml()?;
            std::fs::write(&config_path, &toml_content)?;

            eprintln!("Created configuration file: {}", config_path.display());
            eprintln!("Edit {} to customize settings.", config_path.display());
            Ok(())
        }
        Commands::Search {
            query,
            corpus,
            max_results,
            format,
        } => {
            let mut config = load_config(cli.config.as_deref())?;
            if let Some(path) = corpus {
                config = config.with_corpus_path(&path);
            }
            if max_results.is_some() {
                config = config.with_max_results(max_results);
            }
            config.validate()?;

            let mut search_config = config.search_config();
            if format == OutputFormat::Text {
                search_config = search_config.with_markers(HighlightMarkers::new("\x1b[1m", "\x1b[0m"));
            }

            let searcher = Searcher::with_config(load_corpus(&config)?, search_config);
            let query = sitesearch::search::Query::new(query);
            if query.is_empty() {
                eprintln!("Empty query");
                return Ok(());
            }

            let results = searcher.search(&query);
            let panel = render_panel(&results, &query, config.max_results());

            match format {
                OutputFormat::Text => print_panel(&panel),
                OutputFormat::Html => println!("{}", panel.to_html()),
                OutputFormat::Json => {
                    let limit = config.max_results().unwrap_or(usize::MAX);
                    let shown: Vec<_> = results.iter().take(limit).collect();
                    println!("{}", serde_json::to_string_pretty(&shown)?);
                }
            }
            Ok(())
        }
        Commands::Repl {
            corpus,
            debounce_ms,
        } => {
            let mut config = load_config(cli.config.as_deref())?;
            if let Some(path) = corpus {
                config = config.with_corpus_path(&path);
            }
            if let Some(ms) = debounce_ms {
                config = config.with_debounce_ms(ms);
            }
            config.validate()?;

            let searcher = Searcher::with_config(
                load_corpus(&config)?,
                config
                    .search_config()
                    .with_markers(HighlightMarkers::new("\x1b[1m", "\x1b[0m")),
            );
            let session =
                SearchSession::new("terminal", searcher, config.session_config(), TerminalSurface);

            let (tx, rx) = mpsc::channel(64);
            let (nav_tx, mut nav_rx) = mpsc::unbounded_channel();
            let driver = tokio::spawn(SessionDriver::new(session).with_navigation(nav_tx).run(rx));
            let printer = tokio::spawn(async move {
                while let Some(nav) = nav_rx.recv().await {
                    println!("-> {}", nav.url);
                }
            });

            eprintln!("Type to search; :submit, :open URL, :outside, :esc, :quit");
            let mut lines = BufReader::new(tokio::io::stdin()).lines();
            while let Some(line) = lines.next_line().await? {
                match parse_repl_line(&line) {
                    Some(event) => {
                        if tx.send(event).await.is_err() {
                            break;
                        }
                    }
                    None => break,
                }
            }

            drop(tx);
            driver.await?;
            printer.await?;
            Ok(())
        }
    }
}

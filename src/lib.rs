//! sitesearch: Client-side site search engine
//!
//! This library searches a small, static corpus of site pages and drives
//! the interactive search box of a host page.
//!
//! # Features
//!
//! - Case-insensitive substring matching over title, body and keywords
//! - Corpus-order ranking
//! - Bounded excerpts with ellipsis markers
//! - Escape-then-mark highlighting that preserves original casing
//! - Debounced search sessions with deferred mounting
//!
//! # Modules
//!
//! - `config`: Pipeline, session and application configuration
//! - `loader`: Document records and corpus file loading
//! - `index`: The immutable, shared document corpus
//! - `search`: Query normalization, matching, ranking
//! - `extract`: Excerpts and highlighting
//! - `session`: Session state machine, event loop and result rendering

pub mod config;
pub mod error;
pub mod extract;
pub mod index;
pub mod loader;
pub mod search;
pub mod session;

// Re-export commonly used types
pub use config::{SearchConfig, SessionConfig};
pub use error::CorpusError;
pub use index::Corpus;
pub use loader::Document;
pub use search::{Query, RankedResult, Searcher};
pub use session::{SearchSession, SessionState};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

//! Document loading module
//!
//! This module provides functionality for loading page records into documents.

mod document;
mod jsonl;
mod source;

pub use document::Document;
pub use jsonl::JsonlLoader;
pub use source::CorpusLoader;

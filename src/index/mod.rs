//! Index module
//!
//! Holds the in-memory document corpus the matcher scans.

mod corpus;

pub use corpus::Corpus;

//! Document data structures
//!
//! Defines the searchable page record used throughout the search engine.

use serde::{Deserialize, Serialize};

/// A searchable page of the site
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Document {
    /// Page title
    pub title: String,
    /// Page URL, unique within a corpus
    pub url: String,
    /// Free text body (`content` in the static site list)
    #[serde(alias = "content")]
    pub body: String,
    /// Keyword tags
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl Document {
    /// Create a new document
    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        body: impl Into<String>,
        keywords: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        let mut doc = Self {
            title: title.into(),
            url: url.into(),
            body: body.into(),
            keywords: keywords.into_iter().map(Into::into).collect(),
        };
        doc.dedup_keywords();
        doc
    }

    /// Get the document title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Get the document URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get the document keywords
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Check if document has a specific keyword (exact, case-insensitive)
    pub fn has_keyword(&self, keyword: &str) -> bool {
        self.keywords
            .iter()
            .any(|k| k.to_lowercase() == keyword.to_lowercase())
    }

    /// Drop repeated keywords, keeping the first spelling of each
    pub(crate) fn dedup_keywords(&mut self) {
        let mut seen = Vec::with_capacity(self.keywords.len());
        self.keywords.retain(|k| {
            let folded = k.to_lowercase();
            if seen.contains(&folded) {
                false
            } else {
                seen.push(folded);
                true
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_creation() {
        let doc = Document::new(
            "Privacy Policy",
            "/privacy",
            "How we protect your privacy.",
            ["privacy", "GDPR"],
        );

        assert_eq!(doc.title(), "Privacy Policy");
        assert_eq!(doc.url(), "/privacy");
        assert_eq!(doc.keywords(), &["privacy", "GDPR"]);
        assert_eq!(doc.body, "How we protect your privacy.");
    }

    #[test]
    fn test_document_keywords_are_a_set() {
        let doc = Document::new("T", "/t", "", ["gdpr", "GDPR", "privacy", "gdpr"]);
        assert_eq!(doc.keywords(), &["gdpr", "privacy"]);
    }

    #[test]
    fn test_document_has_keyword() {
        let doc = Document::new("T", "/t", "", ["GDPR"]);
        assert!(doc.has_keyword("gdpr"));
        assert!(!doc.has_keyword("gdp"));
    }

    #[test]
    fn test_document_accepts_content_alias() {
        let json = r#"{"title":"Home","url":"/","content":"Welcome","keywords":["home"]}"#;
        let doc: Document = serde_json::from_str(json).unwrap();
        assert_eq!(doc.body, "Welcome");
    }

    #[test]
    fn test_document_keywords_default_to_empty() {
        let json = r#"{"title":"Home","url":"/","body":"Welcome"}"#;
        let doc: Document = serde_json::from_str(json).unwrap();
        assert!(doc.keywords().is_empty());
    }

    #[test]
    fn test_document_serialization() {
        let doc = Document::new("Home", "/", "Welcome", ["home"]);
        let json = serde_json::to_string(&doc).unwrap();
        let deserialized: Document = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, doc);
    }
}

//! # Document Loader
//!
//! Turns an untrusted JSON payload into a [`Document`] the navigator can walk
//! without ever indexing out of range.
//!
//! ```text
//! [                                  Document
//!   { "title": "Ownership",          └── Topic "Ownership"
//!     "slides": [                        ├── Slide "Moves"
//!       { "title": "Moves",              │   └── ContentItem { point, description?, example? }
//!         "content": [ ... ] },          └── Slide "Borrows"
//!       { "title": "Borrows", ... }
//!     ] }
//! ]
//! ```
//!
//! Loading is all-or-nothing: either a fully validated document comes back,
//! or a [`LoadError`] and nothing else. The caller keeps whatever it had.

use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

// ============================================================================
// Document Model
// ============================================================================

/// An optional code/text sample attached to a content item.
///
/// The core never looks inside `content`; it's an opaque payload for the
/// renderer, which highlights it when `language` is known.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Example {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    pub content: String,
}

/// One bullet within a slide.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ContentItem {
    pub point: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<Example>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Slide {
    pub title: String,
    #[serde(default)]
    pub content: Vec<ContentItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Topic {
    pub title: String,
    pub slides: Vec<Slide>,
}

/// A validated presentation: at least one topic, and every topic has at
/// least one slide. The only way to get one is through [`parse`],
/// [`load_file`] or [`Document::from_topics`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    topics: Vec<Topic>,
}

impl Document {
    /// Validate already-typed topics.
    pub fn from_topics(topics: Vec<Topic>) -> Result<Self, LoadError> {
        if topics.is_empty() {
            return Err(LoadError::Empty);
        }
        if let Some((index, topic)) = topics.iter().enumerate().find(|(_, t)| t.slides.is_empty()) {
            return Err(LoadError::EmptyTopic {
                index,
                title: topic.title.clone(),
            });
        }
        Ok(Self { topics })
    }

    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    pub fn topic(&self, index: usize) -> Option<&Topic> {
        self.topics.get(index)
    }

    pub fn topic_count(&self) -> usize {
        self.topics.len()
    }

    /// Total number of slides across all topics.
    pub fn slide_count(&self) -> usize {
        self.topics.iter().map(|t| t.slides.len()).sum()
    }

    /// "N topics, M slides", as shown in the status bar and by `--check`.
    pub fn summary(&self) -> String {
        format!("{} topics, {} slides", self.topic_count(), self.slide_count())
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum LoadError {
    /// The file couldn't be read.
    Io(std::io::Error),
    /// Not valid JSON at all.
    Syntax(serde_json::Error),
    /// Valid JSON, but the top-level value isn't an array.
    NotASequence,
    /// An array, but a topic/slide/item doesn't match the expected shape.
    Schema(serde_json::Error),
    /// An empty array: there's nothing to present.
    Empty,
    /// A topic with no slides would leave the navigator nowhere to stand.
    EmptyTopic { index: usize, title: String },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(e) => write!(f, "could not read file: {e}"),
            LoadError::Syntax(e) => write!(f, "not valid JSON: {e}"),
            LoadError::NotASequence => write!(f, "expected a JSON array of topics"),
            LoadError::Schema(e) => write!(f, "unexpected document structure: {e}"),
            LoadError::Empty => write!(f, "the document contains no topics"),
            LoadError::EmptyTopic { index, title } => {
                write!(f, "topic {} (\"{}\") has no slides", index + 1, title)
            }
        }
    }
}

impl LoadError {
    /// True when the payload is broken JSON or has the wrong field shapes.
    pub fn is_malformed(&self) -> bool {
        matches!(self, LoadError::Syntax(_) | LoadError::Schema(_))
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(e) => Some(e),
            LoadError::Syntax(e) | LoadError::Schema(e) => Some(e),
            _ => None,
        }
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Parse and validate a raw JSON payload.
pub fn parse(text: &str) -> Result<Document, LoadError> {
    let value: serde_json::Value = serde_json::from_str(text).map_err(LoadError::Syntax)?;
    if !value.is_array() {
        return Err(LoadError::NotASequence);
    }

    let topics: Vec<Topic> = serde_json::from_value(value).map_err(LoadError::Schema)?;
    let document = Document::from_topics(topics)?;
    debug!(
        "Parsed document: {} topics, {} slides",
        document.topic_count(),
        document.slide_count()
    );
    Ok(document)
}

/// Read a file from disk and [`parse`] it.
pub fn load_file(path: &Path) -> Result<Document, LoadError> {
    let text = fs::read_to_string(path).map_err(LoadError::Io)?;
    let document = parse(&text)?;
    info!("Loaded {}", path.display());
    Ok(document)
}

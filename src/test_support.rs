//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::deck::{ContentItem, Document, Example, Slide, Topic};
use crate::core::navigator::Navigator;
use crate::core::state::App;

/// A small two-topic deck: "Ownership" (2 slides) and "Traits" (1 slide).
pub fn sample_json() -> &'static str {
    r#"[
  {
    "title": "Ownership",
    "slides": [
      {
        "title": "Moves",
        "content": [
          { "point": "Assignment moves the value", "description": "The source binding is no longer usable." },
          { "point": "Example", "example": { "language": "rust", "content": "let a = String::new();\nlet b = a;" } }
        ]
      },
      {
        "title": "Borrows",
        "content": [ { "point": "Shared references are Copy" } ]
      }
    ]
  },
  {
    "title": "Traits",
    "slides": [
      {
        "title": "Definitions",
        "content": [ { "point": "A trait names a set of methods", "example": { "content": "trait Shape {}" } } ]
      }
    ]
  }
]"#
}

/// A topic titled `title` with `slides` placeholder slides.
pub fn topic(title: &str, slides: usize) -> Topic {
    Topic {
        title: title.to_string(),
        slides: (0..slides)
            .map(|i| Slide {
                title: format!("{} / {}", title, i + 1),
                content: vec![],
            })
            .collect(),
    }
}

/// A document where topic `i` has `shape[i]` slides.
///
/// Titles are "Topic {t}" and "Slide {t}.{s}" (1-based); every slide carries
/// a single point with a plain-text example.
pub fn document(shape: &[usize]) -> Document {
    let topics = shape
        .iter()
        .enumerate()
        .map(|(t, &count)| Topic {
            title: format!("Topic {}", t + 1),
            slides: (0..count)
                .map(|s| Slide {
                    title: format!("Slide {}.{}", t + 1, s + 1),
                    content: vec![ContentItem {
                        point: format!("Point {}.{}", t + 1, s + 1),
                        description: None,
                        example: Some(Example {
                            language: None,
                            content: "sample".to_string(),
                        }),
                    }],
                })
                .collect(),
        })
        .collect();
    Document::from_topics(topics).expect("test document shape must be valid")
}

/// Two topics: the first with two slides, the second with one.
pub fn scenario_document() -> Document {
    document(&[2, 1])
}

/// An App with `doc` already loaded.
pub fn loaded_app(doc: Document) -> App {
    let mut app = App::new();
    app.navigator = Some(Navigator::new(doc));
    app
}

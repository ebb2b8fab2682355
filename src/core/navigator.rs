//! # Navigator
//!
//! Two-level pagination over a [`Document`]: topics on the outside, slides
//! within a topic on the inside. `advance`/`retreat` make the whole thing
//! feel like one flat list of slides.
//!
//! ```text
//!   topic 0          topic 1      topic 2
//! ┌────┬────┐      ┌────┐      ┌────┬────┬────┐
//! │ 0  │ 1  │ ───▶ │ 0  │ ───▶ │ 0  │ 1  │ 2  │   advance: next slide, else (topic+1, 0)
//! └────┴────┘ ◀─── └────┘ ◀─── └────┴────┴────┘   retreat: prev slide, else (topic-1, last)
//! ```
//!
//! The transitions are plain functions of `(document, position)`, so they can
//! be tested without a terminal. [`Navigator`] just pairs them with an owned
//! document and the current position.
//!
//! Invariant: `topic < topic_count` and `slide < slides_in(topic)` for every
//! position these functions return, given a valid starting position.

use log::debug;

use crate::core::deck::{ContentItem, Document, Slide, Topic};

/// Zero-based location of the displayed slide.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Position {
    pub topic: usize,
    pub slide: usize,
}

impl Position {
    pub const START: Position = Position { topic: 0, slide: 0 };

    pub fn new(topic: usize, slide: usize) -> Self {
        Self { topic, slide }
    }
}

// ============================================================================
// Pure Transitions
// ============================================================================

fn slides_in(doc: &Document, topic: usize) -> usize {
    doc.topic(topic).map_or(0, |t| t.slides.len())
}

/// Next slide in the flattened sequence, or `pos` itself at the very end.
pub fn advance(doc: &Document, pos: Position) -> Position {
    if pos.slide + 1 < slides_in(doc, pos.topic) {
        Position::new(pos.topic, pos.slide + 1)
    } else if pos.topic + 1 < doc.topic_count() {
        Position::new(pos.topic + 1, 0)
    } else {
        pos
    }
}

/// Previous slide in the flattened sequence, or `pos` itself at the start.
///
/// Crossing a topic boundary lands on the *last* slide of the previous
/// topic, mirroring `advance` landing on the first slide of the next one.
pub fn retreat(doc: &Document, pos: Position) -> Position {
    if pos.slide > 0 {
        Position::new(pos.topic, pos.slide - 1)
    } else if pos.topic > 0 {
        let topic = pos.topic - 1;
        Position::new(topic, slides_in(doc, topic).saturating_sub(1))
    } else {
        pos
    }
}

pub fn is_at_start(pos: Position) -> bool {
    pos == Position::START
}

pub fn is_at_end(doc: &Document, pos: Position) -> bool {
    pos.topic + 1 >= doc.topic_count() && pos.slide + 1 >= slides_in(doc, pos.topic)
}

/// Position of the last slide of the last topic.
pub fn last_position(doc: &Document) -> Position {
    let topic = doc.topic_count().saturating_sub(1);
    Position::new(topic, slides_in(doc, topic).saturating_sub(1))
}

/// Index of `pos` in the flattened slide sequence.
pub fn flat_index(doc: &Document, pos: Position) -> usize {
    doc.topics()
        .iter()
        .take(pos.topic)
        .map(|t| t.slides.len())
        .sum::<usize>()
        + pos.slide
}

// ============================================================================
// Slide View
// ============================================================================

/// Read-only snapshot of the current slide, everything a renderer needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideView<'a> {
    pub topic_title: &'a str,
    pub slide_title: &'a str,
    /// Zero-based index of the slide within its topic.
    pub slide_index: usize,
    pub slide_count: usize,
    pub topic_index: usize,
    pub topic_count: usize,
    /// Zero-based index across all topics.
    pub flat_index: usize,
    pub total_slides: usize,
    pub content: &'a [ContentItem],
    pub at_start: bool,
    pub at_end: bool,
}

// ============================================================================
// Navigator
// ============================================================================

/// Owns the loaded document and the current position within it.
#[derive(Debug, Clone)]
pub struct Navigator {
    document: Document,
    position: Position,
}

impl Navigator {
    pub fn new(document: Document) -> Self {
        Self {
            document,
            position: Position::START,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Topic and slide at the current position.
    pub fn current(&self) -> Option<(&Topic, &Slide)> {
        let topic = self.document.topic(self.position.topic)?;
        let slide = topic.slides.get(self.position.slide)?;
        Some((topic, slide))
    }

    /// Returns `true` if the position moved.
    pub fn advance(&mut self) -> bool {
        self.move_to(advance(&self.document, self.position))
    }

    /// Returns `true` if the position moved.
    pub fn retreat(&mut self) -> bool {
        self.move_to(retreat(&self.document, self.position))
    }

    pub fn first(&mut self) -> bool {
        self.move_to(Position::START)
    }

    pub fn last(&mut self) -> bool {
        self.move_to(last_position(&self.document))
    }

    pub fn is_at_start(&self) -> bool {
        is_at_start(self.position)
    }

    pub fn is_at_end(&self) -> bool {
        is_at_end(&self.document, self.position)
    }

    pub fn flat_index(&self) -> usize {
        flat_index(&self.document, self.position)
    }

    pub fn total_slides(&self) -> usize {
        self.document.slide_count()
    }

    pub fn view(&self) -> Option<SlideView<'_>> {
        let (topic, slide) = self.current()?;
        Some(SlideView {
            topic_title: &topic.title,
            slide_title: &slide.title,
            slide_index: self.position.slide,
            slide_count: topic.slides.len(),
            topic_index: self.position.topic,
            topic_count: self.document.topic_count(),
            flat_index: self.flat_index(),
            total_slides: self.total_slides(),
            content: &slide.content,
            at_start: self.is_at_start(),
            at_end: self.is_at_end(),
        })
    }

    fn move_to(&mut self, next: Position) -> bool {
        if next == self.position {
            return false;
        }
        debug!(
            "Navigate ({}, {}) -> ({}, {})",
            self.position.topic, self.position.slide, next.topic, next.slide
        );
        self.position = next;
        true
    }
}

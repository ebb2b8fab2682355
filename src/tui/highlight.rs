//! Example → ratatui `Line` renderer.
//!
//! Wraps syntect: examples with a recognised `language` get highlighted with
//! that syntax, everything else is rendered as plain text in the theme's
//! foreground. Output is framed like a fenced block:
//!
//! ```text
//! ╭── rust ──
//! │ let b = a;
//! ╰──
//! ```

use std::sync::LazyLock;

use log::warn;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use syntect::easy::HighlightLines;
use syntect::highlighting::{Theme, ThemeSet};
use syntect::parsing::{SyntaxReference, SyntaxSet};
use syntect::util::LinesWithEndings;

use crate::core::config::DEFAULT_THEME;
use crate::core::deck::Example;

static SYNTAX_SET: LazyLock<SyntaxSet> = LazyLock::new(SyntaxSet::load_defaults_newlines);
static THEME_SET: LazyLock<ThemeSet> = LazyLock::new(ThemeSet::load_defaults);

const BORDER: Style = Style::new().fg(Color::DarkGray);

pub struct Highlighter {
    theme: &'static Theme,
}

impl Highlighter {
    /// Unknown theme names fall back to the default theme.
    pub fn new(theme_name: &str) -> Self {
        let theme = THEME_SET.themes.get(theme_name).unwrap_or_else(|| {
            warn!("Unknown theme {:?}, falling back to {}", theme_name, DEFAULT_THEME);
            &THEME_SET.themes[DEFAULT_THEME]
        });
        Self { theme }
    }

    /// Names of every bundled theme, for `--help` style listings.
    pub fn theme_names() -> Vec<&'static str> {
        THEME_SET.themes.keys().map(String::as_str).collect()
    }

    /// Render an example as framed, highlighted lines.
    pub fn example_lines(&self, example: &Example) -> Vec<Line<'static>> {
        let lang = example
            .language
            .as_deref()
            .map(str::trim)
            .filter(|l| !l.is_empty());

        let mut lines = Vec::new();
        lines.push(match lang {
            Some(lang) => Line::from(vec![
                Span::styled("╭── ", BORDER),
                Span::styled(lang.to_owned(), BORDER.add_modifier(Modifier::BOLD)),
                Span::styled(" ──", BORDER),
            ]),
            None => Line::from(Span::styled("╭──", BORDER)),
        });

        let mut hl = HighlightLines::new(syntax_for(lang), self.theme);
        for raw in LinesWithEndings::from(example.content.as_str()) {
            let mut spans = vec![Span::styled("│ ", BORDER)];
            match hl.highlight_line(raw, &SYNTAX_SET) {
                Ok(ranges) => spans.extend(ranges.into_iter().filter_map(|(style, frag)| {
                    let content = expand_tabs(frag.trim_end_matches(['\n', '\r']));
                    if content.is_empty() {
                        return None;
                    }
                    let fg = Color::Rgb(style.foreground.r, style.foreground.g, style.foreground.b);
                    Some(Span::styled(content, Style::default().fg(fg)))
                })),
                Err(e) => {
                    warn!("Highlighting failed, showing plain text: {}", e);
                    spans.push(Span::raw(expand_tabs(raw.trim_end_matches(['\n', '\r']))));
                }
            }
            lines.push(Line::from(spans));
        }

        lines.push(Line::from(Span::styled("╰──", BORDER)));
        lines
    }
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new(DEFAULT_THEME)
    }
}

fn syntax_for(lang: Option<&str>) -> &'static SyntaxReference {
    lang.and_then(|l| SYNTAX_SET.find_syntax_by_token(l))
        .unwrap_or_else(|| SYNTAX_SET.find_syntax_plain_text())
}

// ratatui renders \t as zero-width
fn expand_tabs(s: &str) -> String {
    s.replace('\t', "    ")
}

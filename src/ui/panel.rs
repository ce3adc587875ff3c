//! Boxed single-line panels.

use ratatui::style::Color;
use unicode_width::UnicodeWidthStr;

use crate::theme::cli::{paint, paint_bold};

/// Content width of a panel, excluding borders and padding.
pub const PANEL_WIDTH: usize = 72;

/// A run of panel text in one color.
#[derive(Debug, Clone)]
pub struct Span {
    pub text: String,
    pub color: Color,
    pub bold: bool,
}

impl Span {
    pub fn bold(text: impl Into<String>, color: Color) -> Self {
        Self {
            text: text.into(),
            color,
            bold: true,
        }
    }

    fn render(&self) -> String {
        if self.bold {
            paint_bold(self.color, &self.text)
        } else {
            paint(self.color, &self.text)
        }
    }
}

/// Render a titled panel as three lines: top border, content, bottom border.
pub fn render_panel(title: &str, border: Color, spans: &[Span]) -> [String; 3] {
    let inner = PANEL_WIDTH + 2;
    let title_width = title.width();
    let rule = "─".repeat(inner.saturating_sub(title_width + 3));

    let top = format!(
        "{}{}{}",
        paint(border, "╭─ "),
        paint_bold(border, title),
        paint(border, &format!(" {}╮", rule))
    );

    let plain_width: usize = spans.iter().map(|s| s.text.width()).sum();
    let content: String = spans.iter().map(Span::render).collect();
    let padding = " ".repeat(PANEL_WIDTH.saturating_sub(plain_width));
    let middle = format!(
        "{} {}{} {}",
        paint(border, "│"),
        content,
        padding,
        paint(border, "│")
    );

    let bottom = paint(border, &format!("╰{}╯", "─".repeat(inner)));

    [top, middle, bottom]
}

/// Strip ANSI escape sequences (for measuring and testing rendered lines).
pub fn strip_ansi(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            for c in chars.by_ref() {
                if c.is_ascii_alphabetic() {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}

//! Progress bar

use std::io;

use serde::{Deserialize, Serialize};
use unicode_width::UnicodeWidthStr;

use crate::core::element::{Canvas, Element};

/// Progress bar glyphs and width
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressStyle {
    /// Total width in columns, including `start` and `end`
    pub width: usize,
    pub start: String,
    pub end: String,
    pub filled: String,
    pub not_filled: String,
}

impl Default for ProgressStyle {
    fn default() -> Self {
        Self {
            width: 30,
            start: "[".to_string(),
            end: "]".to_string(),
            filled: "#".to_string(),
            not_filled: " ".to_string(),
        }
    }
}

pub struct ProgressBar {
    style: ProgressStyle,
    progress: f32,
}

impl Default for ProgressBar {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressBar {
    pub fn new() -> Self {
        Self::with_style(ProgressStyle::default())
    }

    pub fn with_style(style: ProgressStyle) -> Self {
        Self {
            style,
            progress: 0.0,
        }
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Set progress in `[0, 1]`; out-of-range values are clamped
    pub fn set_progress(&mut self, progress: f32) {
        self.progress = if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, 1.0)
        };
    }

    fn bar(&self) -> String {
        let style = &self.style;
        let inner = style
            .width
            .saturating_sub(style.start.width() + style.end.width());
        let filled_cols = (inner as f32 * self.progress).round() as usize;

        let mut bar = String::with_capacity(style.width);
        bar.push_str(&style.start);
        bar.push_str(&repeat_to_width(&style.filled, filled_cols));
        bar.push_str(&repeat_to_width(&style.not_filled, inner - filled_cols));
        bar.push_str(&style.end);
        bar
    }
}

/// Repeat `glyph` as many whole times as fit in `cols` columns
fn repeat_to_width(glyph: &str, cols: usize) -> String {
    let width = glyph.width();
    if width == 0 {
        return String::new();
    }
    glyph.repeat(cols / width)
}

impl Element for ProgressBar {
    fn height(&self) -> usize {
        1
    }

    fn render(&self, canvas: &mut Canvas<'_>) -> io::Result<()> {
        canvas.line(&self.bar())
    }

    crate::impl_element_any!();
}

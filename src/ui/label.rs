//! Text label. One line per `\n`-separated segment of its text.

use std::io;

use crate::core::element::{Canvas, Element};

pub struct TextLabel {
    text: String,
}

impl TextLabel {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }
}

impl Element for TextLabel {
    fn height(&self) -> usize {
        self.text.split('\n').count()
    }

    fn render(&self, canvas: &mut Canvas<'_>) -> io::Result<()> {
        canvas.line(&self.text)
    }

    crate::impl_element_any!();
}

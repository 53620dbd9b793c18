//! Single-line text input

use std::io;

use serde::{Deserialize, Serialize};

use crate::core::element::{Canvas, Element, Interactive, Step};
use crate::core::term::{ArrowDirection, Keypress};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputStyle {
    /// Glyph drawn at the insertion point while editing
    pub cursor: String,
}

impl Default for InputStyle {
    fn default() -> Self {
        Self {
            cursor: "|".to_string(),
        }
    }
}

/// Text field. The content is split at the insertion point into `left`
/// and `right`.
pub struct TextInput {
    label: String,
    left: String,
    right: String,
    style: InputStyle,
    editing: bool,
    echo: bool,
}

impl Default for TextInput {
    fn default() -> Self {
        Self::new()
    }
}

impl TextInput {
    pub fn new() -> Self {
        Self {
            label: String::new(),
            left: String::new(),
            right: String::new(),
            style: InputStyle::default(),
            editing: false,
            echo: true,
        }
    }

    /// Text drawn before the field
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Initial content; the insertion point starts at its end
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.left = content.into();
        self.right.clear();
        self
    }

    /// `false` hides typed characters (password entry)
    pub fn echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    pub fn with_style(mut self, style: InputStyle) -> Self {
        self.style = style;
        self
    }

    pub fn value(&self) -> String {
        format!("{}{}", self.left, self.right)
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    fn display(&self) -> String {
        let mut line = self.label.clone();
        if self.echo {
            line.push_str(&self.left);
        }
        if self.editing {
            line.push_str(&self.style.cursor);
        }
        if self.echo {
            line.push_str(&self.right);
        }
        line
    }

    fn move_left(&mut self) -> bool {
        match self.left.pop() {
            Some(ch) => {
                self.right.insert(0, ch);
                true
            }
            None => false,
        }
    }

    fn move_right(&mut self) -> bool {
        match self.right.chars().next() {
            Some(ch) => {
                self.right.remove(0);
                self.left.push(ch);
                true
            }
            None => false,
        }
    }
}

impl Element for TextInput {
    fn height(&self) -> usize {
        1
    }

    fn render(&self, canvas: &mut Canvas<'_>) -> io::Result<()> {
        canvas.line(&self.display())
    }

    crate::impl_element_any!();
}

impl Interactive for TextInput {
    type Output = String;

    fn focus(&mut self) {
        self.editing = true;
    }

    fn blur(&mut self) {
        self.editing = false;
    }

    fn handle_key(&mut self, key: &Keypress) -> Step<String> {
        match key {
            Keypress::Enter | Keypress::Abort => Step::Done(self.value()),
            Keypress::Printable(text) => {
                self.left.push_str(text);
                Step::Redraw
            }
            Keypress::Delete => {
                if self.left.pop().is_some() {
                    Step::Redraw
                } else {
                    Step::Ignore
                }
            }
            Keypress::Arrow(ArrowDirection::Left) => redraw_if(self.move_left()),
            Keypress::Arrow(ArrowDirection::Right) => redraw_if(self.move_right()),
            Keypress::Arrow(_) | Keypress::Unrecognized(_) => Step::Ignore,
        }
    }
}

fn redraw_if<T>(changed: bool) -> Step<T> {
    if changed {
        Step::Redraw
    } else {
        Step::Ignore
    }
}

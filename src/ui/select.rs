//! Single/multi-select list
//!
//! One line per choice. ↑/↓ move the hover marker (wrapping at both
//! ends), Space toggles the hovered choice, Enter returns the selected
//! values in choice order. Ctrl+C returns nothing.

use std::io;

use serde::{Deserialize, Serialize};

use crate::core::element::{Canvas, Element, Interactive, Step};
use crate::core::term::{ArrowDirection, Keypress};

/// Markers drawn in front of each choice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectStyle {
    pub not_selected: String,
    pub hover: String,
    pub selected: String,
    pub hover_selected: String,
}

impl Default for SelectStyle {
    fn default() -> Self {
        Self {
            not_selected: "[ ]".to_string(),
            hover: "> <".to_string(),
            selected: "[X]".to_string(),
            hover_selected: ">X<".to_string(),
        }
    }
}

pub struct Select<T> {
    labels: Vec<String>,
    values: Vec<T>,
    selection: Vec<bool>,
    index: usize,
    multiple: bool,
    focused: bool,
    style: SelectStyle,
}

impl<T: Clone + 'static> Select<T> {
    pub fn new<S: Into<String>>(choices: impl IntoIterator<Item = (S, T)>) -> Self {
        let (labels, values): (Vec<String>, Vec<T>) = choices
            .into_iter()
            .map(|(label, value)| (label.into(), value))
            .unzip();
        let selection = vec![false; labels.len()];
        Self {
            labels,
            values,
            selection,
            index: 0,
            multiple: true,
            focused: false,
            style: SelectStyle::default(),
        }
    }

    /// Allow more than one choice to be selected (default: true)
    pub fn multiple(mut self, multiple: bool) -> Self {
        self.multiple = multiple;
        self
    }

    /// Initially hovered choice
    pub fn index(mut self, index: usize) -> Self {
        self.index = index.min(self.labels.len().saturating_sub(1));
        self
    }

    pub fn with_style(mut self, style: SelectStyle) -> Self {
        self.style = style;
        self
    }

    pub fn hovered(&self) -> usize {
        self.index
    }

    /// Values of the currently selected choices, in choice order
    pub fn selected(&self) -> Vec<T> {
        self.selection
            .iter()
            .zip(&self.values)
            .filter(|(selected, _)| **selected)
            .map(|(_, value)| value.clone())
            .collect()
    }

    fn toggle(&mut self) {
        let Some(current) = self.selection.get(self.index).copied() else {
            return;
        };
        if !self.multiple {
            self.selection.iter_mut().for_each(|s| *s = false);
        }
        self.selection[self.index] = !current;
    }

    fn step(&mut self, forward: bool) -> bool {
        let len = self.labels.len();
        if len == 0 {
            return false;
        }
        self.index = if forward {
            (self.index + 1) % len
        } else {
            (self.index + len - 1) % len
        };
        true
    }

    fn marker(&self, i: usize) -> &str {
        let hover = self.focused && i == self.index;
        match (self.selection[i], hover) {
            (false, false) => &self.style.not_selected,
            (false, true) => &self.style.hover,
            (true, false) => &self.style.selected,
            (true, true) => &self.style.hover_selected,
        }
    }
}

impl<T: Clone + 'static> Element for Select<T> {
    fn height(&self) -> usize {
        self.labels.len()
    }

    fn render(&self, canvas: &mut Canvas<'_>) -> io::Result<()> {
        for (i, label) in self.labels.iter().enumerate() {
            canvas.line(&format!("{} {}", self.marker(i), label))?;
        }
        Ok(())
    }

    crate::impl_element_any!();
}

impl<T: Clone + 'static> Interactive for Select<T> {
    type Output = Vec<T>;

    fn focus(&mut self) {
        self.focused = true;
    }

    fn blur(&mut self) {
        self.focused = false;
    }

    fn handle_key(&mut self, key: &Keypress) -> Step<Vec<T>> {
        match key {
            Keypress::Enter => Step::Done(self.selected()),
            Keypress::Abort => Step::Done(Vec::new()),
            Keypress::Printable(text) if text == " " => {
                self.toggle();
                Step::Redraw
            }
            Keypress::Arrow(ArrowDirection::Up) if self.step(false) => Step::Redraw,
            Keypress::Arrow(ArrowDirection::Down) if self.step(true) => Step::Redraw,
            _ => Step::Ignore,
        }
    }
}

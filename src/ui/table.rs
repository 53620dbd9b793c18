//! Table with columns aligned by display width

use std::io;

use unicode_width::UnicodeWidthStr;

use crate::core::element::{Canvas, Element};

const COLUMN_GAP: &str = "  ";

#[derive(Default)]
pub struct Table {
    header: Option<Vec<String>>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn header<I, S>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.header = Some(cells.into_iter().map(Into::into).collect());
        self
    }

    /// Builder form of `push_row`
    pub fn row<I, S>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.push_row(cells);
        self
    }

    pub fn push_row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
    }

    pub fn set_rows(&mut self, rows: Vec<Vec<String>>) {
        self.rows = rows;
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    fn all_rows(&self) -> impl Iterator<Item = &Vec<String>> {
        self.header.iter().chain(self.rows.iter())
    }

    fn column_widths(&self) -> Vec<usize> {
        let mut widths = Vec::new();
        for row in self.all_rows() {
            for (i, cell) in row.iter().enumerate() {
                let width = cell.width();
                match widths.get_mut(i) {
                    Some(w) if *w < width => *w = width,
                    Some(_) => {}
                    None => widths.push(width),
                }
            }
        }
        widths
    }

    fn format_row(row: &[String], widths: &[usize]) -> String {
        let mut line = String::new();
        for (i, cell) in row.iter().enumerate() {
            if i > 0 {
                line.push_str(COLUMN_GAP);
            }
            line.push_str(cell);
            let pad = widths[i].saturating_sub(cell.width());
            line.extend(std::iter::repeat(' ').take(pad));
        }
        line.truncate(line.trim_end().len());
        line
    }
}

impl Element for Table {
    fn height(&self) -> usize {
        self.header.iter().count() + self.rows.len()
    }

    fn render(&self, canvas: &mut Canvas<'_>) -> io::Result<()> {
        let widths = self.column_widths();
        for row in self.all_rows() {
            canvas.line(&Self::format_row(row, &widths))?;
        }
        Ok(())
    }

    crate::impl_element_any!();
}

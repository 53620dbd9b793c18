//! Escape code emission
//!
//! Thin wrappers over crossterm commands. Every cursor movement the session
//! performs goes through here so a non-positive count never reaches the
//! terminal (`ESC [ 0 A` moves one line on most terminals).

use std::io::{self, Write};

use crossterm::{
    cursor::{Hide, MoveDown, MoveToColumn, MoveUp, Show},
    queue,
    terminal::{Clear, ClearType},
};

/// Clear the line the cursor is on
pub fn clear_line<W: Write>(out: &mut W) -> io::Result<()> {
    queue!(out, Clear(ClearType::CurrentLine))
}

/// Move the cursor to column 0 of the current line
pub fn move_to_beginning<W: Write>(out: &mut W) -> io::Result<()> {
    queue!(out, MoveToColumn(0))
}

/// Move the cursor up `lines` lines. Writes nothing for `lines <= 0`.
pub fn move_up<W: Write>(out: &mut W, lines: isize) -> io::Result<()> {
    if lines <= 0 {
        return Ok(());
    }
    queue!(out, MoveUp(clamp(lines)))
}

/// Move the cursor down `lines` lines. Writes nothing for `lines <= 0`.
pub fn move_down<W: Write>(out: &mut W, lines: isize) -> io::Result<()> {
    if lines <= 0 {
        return Ok(());
    }
    queue!(out, MoveDown(clamp(lines)))
}

pub fn show_cursor<W: Write>(out: &mut W) -> io::Result<()> {
    queue!(out, Show)
}

pub fn hide_cursor<W: Write>(out: &mut W) -> io::Result<()> {
    queue!(out, Hide)
}

fn clamp(lines: isize) -> u16 {
    u16::try_from(lines).unwrap_or(u16::MAX)
}

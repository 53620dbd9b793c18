//! Display contract shared by every element kind.

use std::any::Any;
use std::fmt;
use std::io::{self, Write};
use std::marker::PhantomData;

use super::term::codes;
use super::term::Keypress;

/// Position of an element in its session's registry
pub type ElementId = usize;

/// Something the session can place in the stack and repaint.
///
/// `render` must write exactly `height()` lines through the canvas and
/// must not move the cursor on its own.
pub trait Element: Any {
    fn height(&self) -> usize;

    fn render(&self, canvas: &mut Canvas<'_>) -> io::Result<()>;

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Line writer handed to `Element::render`.
///
/// The first line lands wherever the session left the cursor (already
/// cleared on repaint). Later lines are cleared before they are written.
pub struct Canvas<'a> {
    out: &'a mut dyn Write,
    lines: usize,
}

impl<'a> Canvas<'a> {
    pub fn new(out: &'a mut dyn Write) -> Self {
        Self { out, lines: 0 }
    }

    /// Write text and advance to the start of the next line.
    ///
    /// Each `\n` in `text` starts another line and counts towards
    /// `lines_written`.
    pub fn line(&mut self, text: &str) -> io::Result<()> {
        for part in text.split('\n') {
            if self.lines > 0 {
                codes::clear_line(&mut self.out)?;
            }
            self.out.write_all(part.trim_end_matches('\r').as_bytes())?;
            self.out.write_all(b"\r\n")?;
            self.lines += 1;
        }
        Ok(())
    }

    pub fn lines_written(&self) -> usize {
        self.lines
    }
}

/// Typed, non-owning reference to a registered element
pub struct Handle<E> {
    id: ElementId,
    _marker: PhantomData<fn() -> E>,
}

impl<E> Handle<E> {
    pub(crate) fn new(id: ElementId) -> Self {
        Self {
            id,
            _marker: PhantomData,
        }
    }

    pub fn id(&self) -> ElementId {
        self.id
    }
}

impl<E> Clone for Handle<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for Handle<E> {}

impl<E> PartialEq for Handle<E> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<E> Eq for Handle<E> {}

impl<E> fmt::Debug for Handle<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Handle").field(&self.id).finish()
    }
}

/// Outcome of feeding one key to a focused element
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step<T> {
    /// Nothing visible changed
    Ignore,
    /// State changed; repaint
    Redraw,
    /// Reading is over
    Done(T),
}

/// An element that can hold input focus and produce a value.
///
/// `Session::read` drives the loop; the element only maps keys to state.
pub trait Interactive: Element {
    type Output;

    /// Called before the first repaint of a read
    fn focus(&mut self) {}

    /// Called after the loop ends, before the final repaint
    fn blur(&mut self) {}

    fn handle_key(&mut self, key: &Keypress) -> Step<Self::Output>;
}

/// Implements the `Any` plumbing of `Element` for a concrete type
#[macro_export]
macro_rules! impl_element_any {
    () => {
        fn as_any(&self) -> &dyn ::std::any::Any {
            self
        }

        fn as_any_mut(&mut self) -> &mut dyn ::std::any::Any {
            self
        }
    };
}

//! linestack - inline terminal UI elements repainted in place
//!
//! A `Session` keeps a vertical stack of elements (labels, progress bars,
//! text inputs, selects, tables) below the current shell prompt. Changing
//! an element repaints only that element, plus whatever sits below it if
//! its height changed. Nothing above the stack is touched and nothing is
//! scrolled away.
//!
//! # Example
//!
//! ```no_run
//! use linestack::{Session, TextInput, TextLabel};
//!
//! # fn main() -> linestack::Result<()> {
//! let mut session = Session::new()?;
//! let status = session.register(TextLabel::new("Status: idle"))?;
//! let name = session.register(TextInput::new().label("Name: "))?;
//!
//! let value = session.read(name)?;
//! session.update(status, |label| label.set_text(format!("Hello, {value}")))?;
//! session.close()?;
//! # Ok(())
//! # }
//! ```
//!
//! # Keys
//!
//! | Key | Event |
//! |-----|-------|
//! | Enter | `Keypress::Enter` |
//! | Backspace | `Keypress::Delete` |
//! | Arrow keys | `Keypress::Arrow` |
//! | Ctrl+C | terminal restored, process exits |

pub mod config;
pub mod core;
pub mod error;
pub mod ui;

pub use crate::config::Config;
pub use crate::core::element::{Canvas, Element, ElementId, Handle, Interactive, Step};
pub use crate::core::session::{AbortPolicy, Placement, Session};
pub use crate::core::term::{ArrowDirection, Keypress, KeypressDecoder, Keys, LineDiscipline};
pub use crate::error::{Error, Result};
pub use crate::ui::{
    InputStyle, ProgressBar, ProgressStyle, Select, SelectStyle, Table, TextInput, TextLabel,
};

//! Terminal plumbing: escape code output, key decoding and raw mode.

pub mod codes;
pub mod keypress;
pub mod raw;

pub use keypress::{ArrowDirection, Keypress, KeypressDecoder, Keys};
pub use raw::{CrosstermDiscipline, DefaultDiscipline, LineDiscipline, RawModeController};
#[cfg(unix)]
pub use raw::Termios;

//! Core session components.
//!
//! - **session**: element registry, cursor bookkeeping and minimal repaint
//! - **element**: the display contract every element implements
//! - **term**: escape codes, keypress decoding and raw mode
//!
//! # Architecture
//!
//! ```text
//! Session
//! ├── Registry (elements in display order, y offsets)
//! ├── cursor_y (where the terminal cursor sits)
//! ├── Keys (stdin → Keypress)
//! └── RawModeController (original termios snapshot)
//! ```

pub mod element;
pub mod session;
pub mod term;

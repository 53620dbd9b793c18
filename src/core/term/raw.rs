//! Raw mode controller
//!
//! Captures the terminal's line discipline once and toggles echo and
//! canonical input around interactive reads. Exiting always goes back to
//! the captured snapshot, never to whatever was active just before.

use std::io;

use tracing::trace;

use crate::error::{Error, Result};

/// Access to a terminal's input line discipline
pub trait LineDiscipline {
    type Attributes: Clone;

    /// Read the attributes currently in effect
    fn current(&mut self) -> io::Result<Self::Attributes>;

    /// Derive raw attributes (no echo, no line buffering) from `original`
    fn raw_from(&self, original: &Self::Attributes) -> Self::Attributes;

    /// Put `attrs` into effect immediately
    fn apply(&mut self, attrs: &Self::Attributes) -> io::Result<()>;
}

/// termios on the stdin file descriptor
#[cfg(unix)]
pub struct Termios {
    fd: libc::c_int,
}

#[cfg(unix)]
impl Termios {
    pub fn stdin() -> Self {
        Self {
            fd: libc::STDIN_FILENO,
        }
    }
}

#[cfg(unix)]
impl Default for Termios {
    fn default() -> Self {
        Self::stdin()
    }
}

#[cfg(unix)]
impl LineDiscipline for Termios {
    type Attributes = libc::termios;

    fn current(&mut self) -> io::Result<libc::termios> {
        // SAFETY: termios is plain old data and tcgetattr fully initializes it
        unsafe {
            let mut termios: libc::termios = std::mem::zeroed();
            if libc::tcgetattr(self.fd, &mut termios) != 0 {
                return Err(io::Error::last_os_error());
            }
            Ok(termios)
        }
    }

    fn raw_from(&self, original: &libc::termios) -> libc::termios {
        let mut termios = *original;
        // SAFETY: cfmakeraw only rewrites flag fields of the struct we own
        unsafe { libc::cfmakeraw(&mut termios) };
        termios.c_lflag &= !libc::ECHO;
        termios.c_cc[libc::VMIN] = 1;
        termios.c_cc[libc::VTIME] = 0;
        termios
    }

    fn apply(&mut self, attrs: &libc::termios) -> io::Result<()> {
        // SAFETY: attrs points to a valid termios for the duration of the call
        if unsafe { libc::tcsetattr(self.fd, libc::TCSANOW, attrs) } != 0 {
            return Err(io::Error::last_os_error());
        }
        Ok(())
    }
}

/// crossterm's raw mode, for platforms without termios.
///
/// crossterm keeps its own copy of the original mode, so the snapshot here
/// is only a flag saying which mode to put into effect.
#[derive(Debug, Default)]
pub struct CrosstermDiscipline {
    raw: bool,
}

impl LineDiscipline for CrosstermDiscipline {
    type Attributes = bool;

    fn current(&mut self) -> io::Result<bool> {
        Ok(self.raw)
    }

    fn raw_from(&self, _original: &bool) -> bool {
        true
    }

    fn apply(&mut self, raw: &bool) -> io::Result<()> {
        if *raw {
            crossterm::terminal::enable_raw_mode()?;
        } else if self.raw {
            crossterm::terminal::disable_raw_mode()?;
        }
        self.raw = *raw;
        Ok(())
    }
}

/// Line discipline used by `Session::new`
#[cfg(unix)]
pub type DefaultDiscipline = Termios;
#[cfg(not(unix))]
pub type DefaultDiscipline = CrosstermDiscipline;

/// Owns the original terminal attributes for the lifetime of a session
pub struct RawModeController<D: LineDiscipline> {
    discipline: D,
    original: D::Attributes,
    raw: bool,
}

impl<D: LineDiscipline> RawModeController<D> {
    /// Capture the current attributes as the restore target
    pub fn new(mut discipline: D) -> Result<Self> {
        let original = discipline.current().map_err(Error::Terminal)?;
        Ok(Self {
            discipline,
            original,
            raw: false,
        })
    }

    /// Disable echo and canonical input
    pub fn enter(&mut self) -> Result<()> {
        let raw = self.discipline.raw_from(&self.original);
        self.discipline.apply(&raw).map_err(Error::Terminal)?;
        self.raw = true;
        trace!("Entered raw mode");
        Ok(())
    }

    /// Restore the captured attributes. Safe to call any number of times.
    pub fn exit(&mut self) -> Result<()> {
        self.discipline
            .apply(&self.original)
            .map_err(Error::Terminal)?;
        if self.raw {
            trace!("Left raw mode");
        }
        self.raw = false;
        Ok(())
    }

    pub fn is_raw(&self) -> bool {
        self.raw
    }

    pub fn original(&self) -> &D::Attributes {
        &self.original
    }

    pub fn discipline(&self) -> &D {
        &self.discipline
    }

    #[cfg(test)]
    pub(crate) fn discipline_mut(&mut self) -> &mut D {
        &mut self.discipline
    }
}

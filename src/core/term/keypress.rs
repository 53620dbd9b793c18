//! Keypress decoder
//!
//! Turns raw stdin bytes into logical key events. A lone ESC and the
//! start of an arrow sequence look identical, so the decoder buffers
//! until the bytes resolve one way or the other:
//!
//! ```text
//! Empty ──0x1B──▶ Escape ──'['──▶ EscapeBracket ──A/B/C/D──▶ Arrow
//!   │               │ '@' ▶ Printable("@")   └── other ▶ Unrecognized
//!   │               └ other ▶ Unrecognized
//!   ├── 0x03 ▶ Abort    0x0A/0x0D ▶ Enter    0x7F ▶ Delete
//!   └── text byte ──▶ Text (until the UTF-8 sequence completes)
//! ```
//!
//! A control byte or ESC that arrives mid-sequence ends the broken sequence
//! as `Unrecognized` and is then decoded on its own, so Ctrl+C always aborts.
//!
//! There is no timeout: ESC followed by nothing blocks until the next byte.

use std::io::{self, Read};

use tracing::debug;

const ABORT: u8 = 0x03;
const LINE_FEED: u8 = 0x0A;
const CARRIAGE_RETURN: u8 = 0x0D;
const ESC: u8 = 0x1B;
const DELETE: u8 = 0x7F;

/// Arrow key direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowDirection {
    Up,
    Down,
    Left,
    Right,
}

/// A logical key event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Keypress {
    Enter,
    /// One decoded character (possibly several bytes of UTF-8)
    Printable(String),
    Delete,
    Arrow(ArrowDirection),
    /// Ctrl+C. The session tears down the terminal when it sees this.
    Abort,
    /// An escape sequence or byte run with no meaning here. Carries the raw
    /// bytes so callers can log or ignore it.
    Unrecognized(Vec<u8>),
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
enum DecoderState {
    #[default]
    Empty,
    /// Saw ESC
    Escape,
    /// Saw ESC [
    EscapeBracket,
    /// Inside an incomplete UTF-8 character
    Text,
}

/// Byte-at-a-time key decoder
#[derive(Debug, Default)]
pub struct KeypressDecoder {
    state: DecoderState,
    pending: Vec<u8>,
    /// Byte that broke the previous sequence, not yet decoded
    carry: Option<u8>,
}

impl KeypressDecoder {
    pub fn new() -> Self {
        Self {
            state: DecoderState::Empty,
            pending: Vec::with_capacity(4),
            carry: None,
        }
    }

    /// Bytes buffered while the current sequence is undecided
    pub fn pending(&self) -> &[u8] {
        &self.pending
    }

    /// Feed a single byte. Returns an event once the buffered bytes resolve.
    ///
    /// When the byte interrupts a pending sequence the broken sequence is
    /// returned and the byte is held back; call `drain` before feeding more.
    pub fn feed(&mut self, byte: u8) -> Option<Keypress> {
        self.pending.push(byte);

        match self.state {
            DecoderState::Empty => self.empty(byte),
            DecoderState::Escape => self.escape(byte),
            DecoderState::EscapeBracket => self.escape_bracket(byte),
            DecoderState::Text => self.text(byte),
        }
    }

    /// Decode the byte held back by the last `feed`, if any
    pub fn drain(&mut self) -> Option<Keypress> {
        let byte = self.carry.take()?;
        self.feed(byte)
    }

    pub fn has_carry(&self) -> bool {
        self.carry.is_some()
    }

    fn empty(&mut self, byte: u8) -> Option<Keypress> {
        match byte {
            ABORT => self.resolve(Keypress::Abort),
            LINE_FEED | CARRIAGE_RETURN => self.resolve(Keypress::Enter),
            DELETE => self.resolve(Keypress::Delete),
            ESC => {
                self.state = DecoderState::Escape;
                None
            }
            _ => self.text(byte),
        }
    }

    fn escape(&mut self, byte: u8) -> Option<Keypress> {
        match byte {
            b'[' => {
                self.state = DecoderState::EscapeBracket;
                None
            }
            b'@' => self.resolve(Keypress::Printable("@".to_string())),
            _ if starts_event(byte) => self.interrupted(byte),
            _ => self.unrecognized(),
        }
    }

    fn escape_bracket(&mut self, byte: u8) -> Option<Keypress> {
        let direction = match byte {
            b'A' => ArrowDirection::Up,
            b'B' => ArrowDirection::Down,
            b'C' => ArrowDirection::Right,
            b'D' => ArrowDirection::Left,
            _ if starts_event(byte) => return self.interrupted(byte),
            _ => return self.unrecognized(),
        };
        self.resolve(Keypress::Arrow(direction))
    }

    fn text(&mut self, byte: u8) -> Option<Keypress> {
        match std::str::from_utf8(&self.pending) {
            Ok(text) => {
                let key = Keypress::Printable(text.to_string());
                self.resolve(key)
            }
            // Valid prefix of a longer character; wait for the rest
            Err(e) if e.error_len().is_none() => {
                self.state = DecoderState::Text;
                None
            }
            // ASCII can never continue a character, so it starts the next event
            Err(_) if byte.is_ascii() && self.pending.len() > 1 => self.interrupted(byte),
            Err(_) => self.unrecognized(),
        }
    }

    /// Report what was pending before `byte` and keep `byte` for `drain`
    fn interrupted(&mut self, byte: u8) -> Option<Keypress> {
        self.pending.pop();
        self.carry = Some(byte);
        self.unrecognized()
    }

    fn unrecognized(&mut self) -> Option<Keypress> {
        let bytes = std::mem::take(&mut self.pending);
        debug!("Unrecognized input sequence: {:?}", bytes);
        self.state = DecoderState::Empty;
        Some(Keypress::Unrecognized(bytes))
    }

    fn resolve(&mut self, key: Keypress) -> Option<Keypress> {
        self.pending.clear();
        self.state = DecoderState::Empty;
        Some(key)
    }
}

/// Bytes that begin an event of their own wherever they appear
fn starts_event(byte: u8) -> bool {
    matches!(byte, ABORT | LINE_FEED | CARRIAGE_RETURN | ESC | DELETE)
}

/// Pull-based stream of keypresses over a byte source.
///
/// Each call to `next` blocks until a full event has been read. The stream
/// ends only when the underlying reader reports end of input.
pub struct Keys<R> {
    reader: R,
    decoder: KeypressDecoder,
}

impl<R: Read> Keys<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            decoder: KeypressDecoder::new(),
        }
    }
}

impl<R: Read> Iterator for Keys<R> {
    type Item = io::Result<Keypress>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(key) = self.decoder.drain() {
            return Some(Ok(key));
        }
        let mut byte = [0u8; 1];
        loop {
            match self.reader.read(&mut byte) {
                Ok(0) => return None,
                Ok(_) => {
                    if let Some(key) = self.decoder.feed(byte[0]) {
                        return Some(Ok(key));
                    }
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Some(Err(e)),
            }
        }
    }
}

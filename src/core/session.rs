//! Session management
//!
//! A `Session` owns the stack of registered elements and the terminal they
//! are drawn on. It tracks where each element starts (`y`, in lines from the
//! top of the managed region) and where the terminal cursor is (`cursor_y`),
//! and turns a change to one element into the smallest repaint that keeps
//! everything below it in place:
//!
//! ```text
//!  y=0 ┌ label      ┐
//!  y=1 │ table row  │  ◀─ notify(1): move up 3, clear, render table,
//!  y=2 │ table row  │     cascade to the input if the table grew,
//!  y=3 └ input      ┘     move back down to cursor_y
//!  y=4 ▌ cursor_y
//! ```

use std::io::{self, Stdin, Stdout, Write};

use tracing::{debug, info, warn};

use super::element::{Canvas, Element, ElementId, Handle, Interactive, Step};
use super::term::{codes, DefaultDiscipline, Keypress, Keys, LineDiscipline, RawModeController};
use crate::error::{Error, Result};

/// What `wait_for_keypress` does after tearing the session down on Ctrl+C
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbortPolicy {
    /// Terminate the process with this status
    Exit(i32),
    /// Hand `Keypress::Abort` back to the caller
    Return,
}

impl Default for AbortPolicy {
    fn default() -> Self {
        AbortPolicy::Exit(1)
    }
}

/// Where an element currently sits in the stack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub id: ElementId,
    pub y: usize,
    pub height: usize,
}

/// A registered element and its starting line
struct Slot {
    element: Box<dyn Element>,
    y: usize,
}

/// Terminal session manager
pub struct Session<W: Write = Stdout, R: io::Read = Stdin, D: LineDiscipline = DefaultDiscipline> {
    /// Elements in display order; index == id
    slots: Vec<Slot>,
    /// Line the terminal cursor sits on, relative to the first element
    cursor_y: usize,
    out: W,
    keys: Keys<R>,
    raw: RawModeController<D>,
    cursor_visible: bool,
    abort_policy: AbortPolicy,
    closed: bool,
}

impl Session<Stdout, Stdin, DefaultDiscipline> {
    /// Create a session on stdout/stdin, capturing the current terminal mode
    pub fn new() -> Result<Self> {
        Self::with_parts(io::stdout(), io::stdin(), DefaultDiscipline::default())
    }
}

impl<W: Write, R: io::Read, D: LineDiscipline> Session<W, R, D> {
    /// Create a session over an arbitrary output, input and line discipline
    pub fn with_parts(out: W, input: R, discipline: D) -> Result<Self> {
        let raw = RawModeController::new(discipline)?;
        info!("Session started");
        Ok(Self {
            slots: Vec::new(),
            cursor_y: 0,
            out,
            keys: Keys::new(input),
            raw,
            cursor_visible: true,
            abort_policy: AbortPolicy::default(),
            closed: false,
        })
    }

    pub fn with_abort_policy(mut self, policy: AbortPolicy) -> Self {
        self.abort_policy = policy;
        self
    }

    /// Append an element to the bottom of the stack and draw it
    pub fn register<E: Element>(&mut self, element: E) -> Result<Handle<E>> {
        let id = self.slots.len();
        let y = self.cursor_y;
        self.slots.push(Slot {
            element: Box::new(element),
            y,
        });

        codes::move_to_beginning(&mut self.out)?;
        let height = self.render_slot(id)?;
        self.cursor_y = y + height;
        self.out.flush()?;

        debug!(id, y, height, "Registered element");
        Ok(Handle::new(id))
    }

    /// Repaint element `id` after its state changed, shifting everything
    /// below it if its height changed.
    ///
    /// Panics if `id` was never returned by `register`.
    pub fn notify(&mut self, id: ElementId) -> Result<()> {
        let y = match self.slots.get(id) {
            Some(slot) => slot.y,
            None => panic!(
                "notify({id}) on a session with {} registered elements",
                self.slots.len()
            ),
        };
        let old_bottom = self.cursor_y;

        codes::move_up(&mut self.out, signed(old_bottom) - signed(y))?;
        // A zero-height element shares its line with whatever follows it
        if self.slots[id].element.height() > 0 {
            codes::clear_line(&mut self.out)?;
        }
        codes::move_to_beginning(&mut self.out)?;
        let height = self.render_slot(id)?;

        // Line the cursor is on after the last render
        let mut at = y + height;

        let next_is_stale = self.slots.get(id + 1).is_some_and(|next| next.y != at);
        if next_is_stale {
            debug!(id, from = id + 1, "Cascading repaint");
            for next in id + 1..self.slots.len() {
                self.slots[next].y = at;
                codes::clear_line(&mut self.out)?;
                codes::move_to_beginning(&mut self.out)?;
                at += self.render_slot(next)?;
            }
        }

        let bottom = self.bottom();
        if at == bottom && bottom < old_bottom {
            self.clear_stale_lines(old_bottom - bottom)?;
        }
        codes::move_down(&mut self.out, signed(bottom) - signed(at))?;
        self.cursor_y = bottom;
        self.out.flush()?;

        debug!(id, y, height, cursor_y = self.cursor_y, "Repainted element");
        Ok(())
    }

    /// Mutate an element, then repaint it
    pub fn update<E: Element, T>(&mut self, handle: Handle<E>, f: impl FnOnce(&mut E) -> T) -> Result<T> {
        let value = f(self.element_mut(handle));
        self.notify(handle.id())?;
        Ok(value)
    }

    /// Borrow a registered element.
    ///
    /// Panics if the handle does not belong to this session.
    pub fn get<E: Element>(&self, handle: Handle<E>) -> &E {
        self.slots
            .get(handle.id())
            .and_then(|slot| slot.element.as_any().downcast_ref::<E>())
            .unwrap_or_else(|| invalid_handle::<E>(handle.id()))
    }

    fn element_mut<E: Element>(&mut self, handle: Handle<E>) -> &mut E {
        self.slots
            .get_mut(handle.id())
            .and_then(|slot| slot.element.as_any_mut().downcast_mut::<E>())
            .unwrap_or_else(|| invalid_handle::<E>(handle.id()))
    }

    /// Give an element input focus until it finishes reading.
    ///
    /// The terminal is in raw mode for the duration of the loop and is
    /// restored afterwards even if reading fails.
    pub fn read<E: Interactive>(&mut self, handle: Handle<E>) -> Result<E::Output> {
        self.element_mut(handle).focus();
        self.notify(handle.id())?;
        self.enter_raw_mode()?;

        let outcome = self.read_loop(handle);

        let restored = self.exit_raw_mode();
        self.element_mut(handle).blur();
        let repainted = self.notify(handle.id());

        let output = outcome?;
        restored?;
        repainted?;
        Ok(output)
    }

    fn read_loop<E: Interactive>(&mut self, handle: Handle<E>) -> Result<E::Output> {
        loop {
            let key = self.wait_for_keypress()?;
            match self.element_mut(handle).handle_key(&key) {
                Step::Ignore => {}
                Step::Redraw => self.notify(handle.id())?,
                Step::Done(output) => return Ok(output),
            }
        }
    }

    /// Block until the next keypress.
    ///
    /// On `Abort` the terminal is restored first; under the default policy
    /// the process then exits with status 1.
    pub fn wait_for_keypress(&mut self) -> Result<Keypress> {
        let key = match self.keys.next() {
            Some(key) => key?,
            None => return Err(Error::InputClosed),
        };
        if key == Keypress::Abort {
            self.abort()?;
        }
        Ok(key)
    }

    fn abort(&mut self) -> Result<()> {
        info!("Abort received, restoring terminal");
        let closed = self.close();
        match self.abort_policy {
            AbortPolicy::Exit(code) => {
                if let Err(e) = closed {
                    warn!("Failed to restore terminal on abort: {}", e);
                }
                std::process::exit(code)
            }
            AbortPolicy::Return => closed,
        }
    }

    pub fn enter_raw_mode(&mut self) -> Result<()> {
        self.raw.enter()
    }

    /// Restore the attributes captured when the session was created
    pub fn exit_raw_mode(&mut self) -> Result<()> {
        self.raw.exit()
    }

    pub fn is_raw(&self) -> bool {
        self.raw.is_raw()
    }

    pub fn set_cursor_visible(&mut self, visible: bool) -> Result<()> {
        if visible {
            codes::show_cursor(&mut self.out)?;
        } else {
            codes::hide_cursor(&mut self.out)?;
        }
        self.out.flush()?;
        self.cursor_visible = visible;
        Ok(())
    }

    pub fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    /// Restore the terminal. Only the first call has any effect.
    pub fn close(&mut self) -> Result<()> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;

        let restored = self.raw.exit();
        let shown = if self.cursor_visible {
            Ok(())
        } else {
            self.cursor_visible = true;
            codes::show_cursor(&mut self.out)
        };
        let flushed = self.out.flush();

        restored?;
        shown?;
        flushed?;

        debug!("Session closed");
        Ok(())
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn cursor_y(&self) -> usize {
        self.cursor_y
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Current position and height of every element
    pub fn layout(&self) -> Vec<Placement> {
        self.slots
            .iter()
            .enumerate()
            .map(|(id, slot)| Placement {
                id,
                y: slot.y,
                height: slot.element.height(),
            })
            .collect()
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    pub fn line_discipline(&self) -> &D {
        self.raw.discipline()
    }

    fn bottom(&self) -> usize {
        self.slots
            .last()
            .map_or(0, |slot| slot.y + slot.element.height())
    }

    /// Render one element at the cursor, returning the lines it occupies
    fn render_slot(&mut self, id: ElementId) -> io::Result<usize> {
        let slot = &self.slots[id];
        let height = slot.element.height();
        let mut canvas = Canvas::new(&mut self.out);
        slot.element.render(&mut canvas)?;
        if canvas.lines_written() != height {
            warn!(
                id,
                height,
                written = canvas.lines_written(),
                "Element rendered a different number of lines than its height"
            );
        }
        Ok(height)
    }

    /// Blank `count` lines left over after the stack shrank, starting at the
    /// cursor, and return to where we started
    fn clear_stale_lines(&mut self, count: usize) -> io::Result<()> {
        for i in 0..count {
            codes::clear_line(&mut self.out)?;
            if i + 1 < count {
                codes::move_down(&mut self.out, 1)?;
            }
        }
        codes::move_up(&mut self.out, signed(count) - 1)
    }
}

impl<W: Write, R: io::Read, D: LineDiscipline> Drop for Session<W, R, D> {
    fn drop(&mut self) {
        if let Err(e) = self.close() {
            warn!("Failed to restore terminal: {}", e);
        }
    }
}

fn signed(lines: usize) -> isize {
    isize::try_from(lines).unwrap_or(isize::MAX)
}

fn invalid_handle<E>(id: ElementId) -> ! {
    panic!(
        "handle {id} does not refer to a registered {}",
        std::any::type_name::<E>()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::term::raw::testing::FakeDiscipline;
    use crate::ui::{Table, TextLabel};
    use crossterm::cursor::{MoveDown, MoveToColumn, MoveUp};
    use crossterm::terminal::{Clear, ClearType};
    use crossterm::Command;
    use std::any::Any;
    use std::cell::Cell;
    use std::rc::Rc;

    type TestSession = Session<Vec<u8>, &'static [u8], FakeDiscipline>;

    fn session() -> TestSession {
        session_with_input(b"")
    }

    fn session_with_input(input: &'static [u8]) -> TestSession {
        Session::with_parts(Vec::new(), input, FakeDiscipline::new())
            .unwrap()
            .with_abort_policy(AbortPolicy::Return)
    }

    fn ansi(cmd: impl Command) -> String {
        let mut s = String::new();
        cmd.write_ansi(&mut s).unwrap();
        s
    }

    fn clear() -> String {
        ansi(Clear(ClearType::CurrentLine))
    }

    fn col0() -> String {
        ansi(MoveToColumn(0))
    }

    /// Output written since `start`
    fn trace(session: &TestSession, start: usize) -> String {
        String::from_utf8(session.writer()[start..].to_vec()).unwrap()
    }

    fn assert_invariants(session: &TestSession) {
        let layout = session.layout();
        for pair in layout.windows(2) {
            assert_eq!(pair[1].y, pair[0].y + pair[0].height, "gap or overlap in {layout:?}");
        }
        let bottom = layout.last().map_or(0, |p| p.y + p.height);
        assert_eq!(session.cursor_y(), bottom);
    }

    /// Fixed-height element that counts its renders
    struct Block {
        lines: usize,
        renders: Rc<Cell<usize>>,
    }

    impl Block {
        fn new(lines: usize) -> (Self, Rc<Cell<usize>>) {
            let renders = Rc::new(Cell::new(0));
            (
                Self {
                    lines,
                    renders: renders.clone(),
                },
                renders,
            )
        }
    }

    impl Element for Block {
        fn height(&self) -> usize {
            self.lines
        }

        fn render(&self, canvas: &mut Canvas<'_>) -> io::Result<()> {
            self.renders.set(self.renders.get() + 1);
            for i in 0..self.lines {
                canvas.line(&format!("block {i}"))?;
            }
            Ok(())
        }

        fn as_any(&self) -> &dyn Any {
            self
        }

        fn as_any_mut(&mut self) -> &mut dyn Any {
            self
        }
    }

    #[test]
    fn test_empty_session() {
        let session = session();
        assert!(session.is_empty());
        assert_eq!(session.cursor_y(), 0);
        assert!(session.layout().is_empty());
    }

    #[test]
    fn test_register_assigns_ids_and_offsets() {
        let mut session = session();
        let label = session.register(TextLabel::new("Status: idle")).unwrap();
        assert_eq!(label.id(), 0);
        assert_eq!(session.layout(), vec![Placement { id: 0, y: 0, height: 1 }]);
        assert_eq!(session.cursor_y(), 1);
        assert_eq!(trace(&session, 0), format!("{}Status: idle\r\n", col0()));

        let table = session
            .register(Table::new().row(["a", "b"]).row(["c", "d"]))
            .unwrap();
        assert_eq!(table.id(), 1);
        assert_eq!(
            session.layout(),
            vec![
                Placement { id: 0, y: 0, height: 1 },
                Placement { id: 1, y: 1, height: 2 },
            ]
        );
        assert_eq!(session.cursor_y(), 3);
    }

    #[test]
    fn test_label_update_above_table() {
        let mut session = session();
        let label = session.register(TextLabel::new("Status: idle")).unwrap();
        session
            .register(Table::new().row(["a", "b"]).row(["c", "d"]))
            .unwrap();

        let start = session.writer().len();
        session.update(label, |l| l.set_text("Status: busy")).unwrap();

        let expected = format!(
            "{}{}{}Status: busy\r\n{}",
            ansi(MoveUp(3)),
            clear(),
            col0(),
            ansi(MoveDown(2))
        );
        assert_eq!(trace(&session, start), expected);
        assert_eq!(session.cursor_y(), 3);
        assert_eq!(session.get(label).text(), "Status: busy");
        assert_invariants(&session);
    }

    #[test]
    fn test_last_table_grows() {
        let mut session = session();
        let (above, above_renders) = Block::new(1);
        session.register(above).unwrap();
        let table = session
            .register(Table::new().row(["a", "b"]).row(["c", "d"]))
            .unwrap();
        assert_eq!(session.cursor_y(), 3);

        let start = session.writer().len();
        session.update(table, |t| t.push_row(["e", "f"])).unwrap();

        assert_eq!(session.cursor_y(), 4);
        assert_eq!(above_renders.get(), 1);
        let out = trace(&session, start);
        assert!(out.starts_with(&format!("{}{}{}", ansi(MoveUp(2)), clear(), col0())));
        assert!(out.ends_with("e  f\r\n"), "unexpected trace {out:?}");
        assert_invariants(&session);
    }

    #[test]
    fn test_growth_cascades_to_following_elements() {
        let mut session = session();
        let (first, first_renders) = Block::new(1);
        let (last, last_renders) = Block::new(2);
        session.register(first).unwrap();
        let table = session.register(Table::new().row(["x"])).unwrap();
        session.register(last).unwrap();
        assert_eq!(session.cursor_y(), 4);

        session.update(table, |t| t.push_row(["y"])).unwrap();

        assert_eq!(first_renders.get(), 1);
        assert_eq!(last_renders.get(), 2);
        assert_eq!(
            session.layout(),
            vec![
                Placement { id: 0, y: 0, height: 1 },
                Placement { id: 1, y: 1, height: 2 },
                Placement { id: 2, y: 3, height: 2 },
            ]
        );
        assert_eq!(session.cursor_y(), 5);
        assert_invariants(&session);
    }

    #[test]
    fn test_unchanged_height_does_not_cascade() {
        let mut session = session();
        let (first, first_renders) = Block::new(2);
        let (second, second_renders) = Block::new(1);
        let (third, third_renders) = Block::new(3);
        session.register(first).unwrap();
        let middle = session.register(second).unwrap();
        session.register(third).unwrap();

        session.notify(middle.id()).unwrap();

        assert_eq!(first_renders.get(), 1);
        assert_eq!(second_renders.get(), 2);
        assert_eq!(third_renders.get(), 1);
        assert_invariants(&session);
    }

    #[test]
    fn test_notify_last_element_moves_nothing_down() {
        let mut session = session();
        session.register(TextLabel::new("one")).unwrap();
        let last = session.register(TextLabel::new("two")).unwrap();

        let start = session.writer().len();
        session.notify(last.id()).unwrap();

        assert_eq!(
            trace(&session, start),
            format!("{}{}{}two\r\n", ansi(MoveUp(1)), clear(), col0())
        );
    }

    #[test]
    fn test_shrinking_last_element_clears_tail() {
        let mut session = session();
        session.register(TextLabel::new("head")).unwrap();
        let table = session
            .register(Table::new().row(["a"]).row(["b"]).row(["c"]))
            .unwrap();
        assert_eq!(session.cursor_y(), 4);

        let start = session.writer().len();
        session.update(table, |t| t.set_rows(vec![vec!["z".to_string()]])).unwrap();

        assert_eq!(session.cursor_y(), 2);
        let expected = format!(
            "{}{}{}z\r\n{}{}{}{}",
            ansi(MoveUp(3)),
            clear(),
            col0(),
            clear(),
            ansi(MoveDown(1)),
            clear(),
            ansi(MoveUp(1)),
        );
        assert_eq!(trace(&session, start), expected);
        assert_invariants(&session);
    }

    #[test]
    fn test_zero_height_element() {
        let mut session = session();
        let (empty, renders) = Block::new(0);
        let empty = session.register(empty).unwrap();
        let label = session.register(TextLabel::new("after")).unwrap();
        assert_eq!(session.cursor_y(), 1);
        assert_eq!(session.layout()[1].y, 0);

        let start = session.writer().len();
        session.notify(empty.id()).unwrap();
        // Cursor goes up to line 0 without clearing the label, then back down
        assert_eq!(
            trace(&session, start),
            format!("{}{}{}", ansi(MoveUp(1)), col0(), ansi(MoveDown(1)))
        );
        assert_eq!(renders.get(), 2);

        session.update(label, |l| l.set_text("later")).unwrap();
        assert_invariants(&session);
    }

    #[test]
    fn test_invariants_over_mixed_updates() {
        let mut session = session();
        let tables: Vec<_> = (0..4)
            .map(|i| session.register(Table::new().row([format!("{i}")])).unwrap())
            .collect();

        for (step, table) in tables.iter().cycle().take(12).enumerate() {
            session
                .update(*table, |t| {
                    if step % 3 == 0 {
                        t.set_rows(Vec::new());
                    } else {
                        t.push_row([format!("{step}")]);
                    }
                })
                .unwrap();
            assert_invariants(&session);
        }
    }

    #[test]
    #[should_panic(expected = "notify(5)")]
    fn test_notify_invalid_id_panics() {
        let mut session = session();
        session.register(TextLabel::new("only")).unwrap();
        let _ = session.notify(5);
    }

    #[test]
    #[should_panic(expected = "does not refer to a registered")]
    fn test_handle_with_wrong_type_panics() {
        let mut session = session();
        let label = session.register(TextLabel::new("label")).unwrap();
        let forged: Handle<Table> = Handle::new(label.id());
        let _ = session.get(forged);
    }

    #[test]
    fn test_cursor_visibility() {
        let mut session = session();
        session.set_cursor_visible(false).unwrap();
        assert!(!session.cursor_visible());
        assert_eq!(session.writer().as_slice(), b"\x1b[?25l");
        assert_eq!(session.layout(), Vec::new());
    }

    #[test]
    fn test_close_restores_once() {
        let mut session = session();
        let original = session.line_discipline().active.clone();
        session.set_cursor_visible(false).unwrap();
        session.enter_raw_mode().unwrap();

        session.close().unwrap();
        assert!(session.is_closed());
        assert!(session.cursor_visible());
        assert_eq!(session.line_discipline().active, original);
        assert!(session.writer().ends_with(b"\x1b[?25h"));

        let len = session.writer().len();
        let applied = session.line_discipline().applied.len();
        session.close().unwrap();
        assert_eq!(session.writer().len(), len);
        assert_eq!(session.line_discipline().applied.len(), applied);
    }

    /// Writer that starts failing once `broken` is set
    struct FlakyWriter {
        broken: Rc<Cell<bool>>,
    }

    impl Write for FlakyWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.broken.get() {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "gone"));
            }
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn flaky_session() -> (Session<FlakyWriter, &'static [u8], FakeDiscipline>, Rc<Cell<bool>>) {
        let broken = Rc::new(Cell::new(false));
        let out = FlakyWriter {
            broken: broken.clone(),
        };
        let session = Session::with_parts(out, &b""[..], FakeDiscipline::new())
            .unwrap()
            .with_abort_policy(AbortPolicy::Return);
        (session, broken)
    }

    #[test]
    fn test_close_restores_attributes_when_cursor_write_fails() {
        let (mut session, broken) = flaky_session();
        let original = session.line_discipline().active.clone();
        session.set_cursor_visible(false).unwrap();
        session.enter_raw_mode().unwrap();
        broken.set(true);

        assert!(matches!(session.close(), Err(Error::Io(_))));
        assert!(session.is_closed());
        assert!(!session.is_raw());
        assert_eq!(session.line_discipline().active, original);
    }

    #[test]
    fn test_close_reports_restore_failure_before_cursor_failure() {
        let (mut session, broken) = flaky_session();
        session.set_cursor_visible(false).unwrap();
        broken.set(true);
        session.raw.discipline_mut().fail_apply = true;

        assert!(matches!(session.close(), Err(Error::Terminal(_))));
    }

    #[test]
    fn test_close_keeps_visible_cursor_untouched() {
        let mut session = session();
        session.close().unwrap();
        assert!(session.writer().is_empty());
    }

    #[test]
    fn test_exit_raw_mode_twice() {
        let mut session = session();
        let original = session.line_discipline().active.clone();
        session.exit_raw_mode().unwrap();
        session.enter_raw_mode().unwrap();
        assert!(session.is_raw());
        session.exit_raw_mode().unwrap();
        session.exit_raw_mode().unwrap();
        assert!(!session.is_raw());
        assert_eq!(session.line_discipline().active, original);
    }

    #[test]
    fn test_abort_restores_terminal() {
        let mut session = session_with_input(b"\x03");
        let original = session.line_discipline().active.clone();
        session.set_cursor_visible(false).unwrap();
        session.enter_raw_mode().unwrap();

        let key = session.wait_for_keypress().unwrap();

        assert_eq!(key, Keypress::Abort);
        assert!(session.is_closed());
        assert!(!session.is_raw());
        assert!(session.cursor_visible());
        assert_eq!(session.line_discipline().active, original);
        assert!(session.writer().ends_with(b"\x1b[?25h"));
    }

    #[test]
    fn test_input_closed() {
        let mut session = session_with_input(b"\x1b");
        match session.wait_for_keypress() {
            Err(Error::InputClosed) => {}
            other => panic!("expected InputClosed, got {other:?}"),
        }
    }

    #[test]
    fn test_capture_failure_is_fatal() {
        let mut fake = FakeDiscipline::new();
        fake.fail_current = true;
        let result = Session::with_parts(Vec::new(), &b""[..], fake);
        assert!(matches!(result, Err(Error::Terminal(_))));
    }
}

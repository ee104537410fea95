use std::io::{self, Stdout, Write};
use std::panic;

use crossterm::cursor::{MoveTo as MoveCursorTo, Show as ShowCursor};
use crossterm::style::Print;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::terminal::{Clear as ClearTerminal, ClearType as TerminalClearType};
use crossterm::QueueableCommand;

/// The drawing primitives the browser needs from a terminal.
///
/// Drawing is lazy: nothing has to reach the terminal until [`Screen::flush`] is called.
pub trait Screen {
    /// Take over the terminal.
    fn enter(&mut self) -> io::Result<()>;

    /// Give the terminal back the way it was found.
    fn leave(&mut self) -> io::Result<()>;

    /// Move the cursor to a cell.
    fn move_to(&mut self, row: usize, column: usize) -> io::Result<()>;

    /// Draw text starting at the cursor.
    fn draw(&mut self, text: &str) -> io::Result<()>;

    /// Blank out a whole row.
    fn clear_line(&mut self, row: usize) -> io::Result<()>;

    /// Send everything drawn so far to the terminal.
    fn flush(&mut self) -> io::Result<()>;
}

/// A screen that queues crossterm commands on a writer, normally stdout.
pub struct TermScreen<W: Write = Stdout> {
    out: W,
}

impl TermScreen<Stdout> {
    pub fn new() -> Self {
        Self { out: io::stdout() }
    }
}

impl Default for TermScreen<Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TermScreen<W> {
    pub fn with_writer(out: W) -> Self {
        Self { out }
    }

    pub fn writer(&self) -> &W {
        &self.out
    }
}

impl<W: Write> Screen for TermScreen<W> {
    /// Switch to the alternate screen in raw mode. A panic hook puts the terminal back first so
    /// the message is readable.
    fn enter(&mut self) -> io::Result<()> {
        change_panic_hook();

        self.out.queue(EnterAlternateScreen)?;
        self.out.queue(ClearTerminal(TerminalClearType::All))?;
        self.out.queue(ShowCursor)?;
        self.out.flush()?;
        terminal::enable_raw_mode()
    }

    fn leave(&mut self) -> io::Result<()> {
        self.out.queue(LeaveAlternateScreen)?;
        self.out.flush()?;
        terminal::disable_raw_mode()
    }

    fn move_to(&mut self, row: usize, column: usize) -> io::Result<()> {
        self.out
            .queue(MoveCursorTo(to_cell(column), to_cell(row)))?;
        Ok(())
    }

    fn draw(&mut self, text: &str) -> io::Result<()> {
        self.out.queue(Print(text))?;
        Ok(())
    }

    fn clear_line(&mut self, row: usize) -> io::Result<()> {
        self.out.queue(MoveCursorTo(0, to_cell(row)))?;
        self.out
            .queue(ClearTerminal(TerminalClearType::CurrentLine))?;
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

fn change_panic_hook() {
    let hook_before = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let mut stdout = io::stdout();
        let _ = stdout.queue(LeaveAlternateScreen);
        let _ = stdout.flush();
        let _ = terminal::disable_raw_mode();
        hook_before(info);
    }));
}

/// Terminals address cells with `u16`s; anything larger is off the screen anyway.
fn to_cell(coordinate: usize) -> u16 {
    u16::try_from(coordinate).unwrap_or(u16::MAX)
}

use crate::component::Component;
use crate::components::{Browser, BrowserEffect};
use crate::handoff::{Handoff, HandoffError};
use crate::rendering::{paint, place_cursor, Screen};
use crate::tree::Patch;

use std::fmt::{Display, Error as FmtError, Formatter};
use std::io::{self, Error as IOError};
use std::path::PathBuf;

use crossterm::event::{read, Event as CrosstermEvent};
use typed_builder::TypedBuilder;

/// Where input events come from.
pub trait EventSource {
    /// Block until the next event arrives.
    fn next_event(&mut self) -> io::Result<CrosstermEvent>;
}

/// Events read from the terminal.
pub struct TermEvents;

impl EventSource for TermEvents {
    fn next_event(&mut self) -> io::Result<CrosstermEvent> {
        read()
    }
}

/// Owns the terminal while the browser runs.
#[derive(TypedBuilder)]
pub struct App<S: Screen, E: EventSource> {
    screen: S,
    events: E,

    /// Where the selected path goes.
    handoff: Box<dyn Handoff>,
}

impl<S: Screen, E: EventSource> App<S, E> {
    /// Run the browser until the user quits or selects something, then give the terminal back
    /// and hand off the selection.
    pub fn run(&mut self, browser: &mut Browser) -> Result<(), AppError> {
        self.screen.enter()?;

        #[cfg(feature = "logging")]
        log::info!("Running in \"{}\".", browser.tree().root().display());

        let result = self.event_loop(browser);
        let leave_result = self.screen.leave();
        let selected: Option<PathBuf> = result?;
        leave_result?;

        if let Some(path) = selected {
            self.handoff.hand_off(&path)?;
        }
        Ok(())
    }

    /// Return the selected path, or nothing if the user quit.
    fn event_loop(&mut self, browser: &mut Browser) -> Result<Option<PathBuf>, AppError> {
        let size = browser.cursor().size();
        let patch = Patch::full(browser.tree().len(), size.rows);
        paint(&mut self.screen, browser.tree(), &patch, size)?;
        self.place_cursor(browser)?;

        loop {
            let event: CrosstermEvent = self.events.next_event()?;

            match browser.handle(event) {
                Some(BrowserEffect::Paint(patch)) => {
                    paint(
                        &mut self.screen,
                        browser.tree(),
                        &patch,
                        browser.cursor().size(),
                    )?;
                }
                Some(BrowserEffect::Select { path }) => {
                    #[cfg(feature = "logging")]
                    log::info!("Selected \"{}\".", path.display());
                    return Ok(Some(path));
                }
                Some(BrowserEffect::Exit) => {
                    #[cfg(feature = "logging")]
                    log::info!("Exiting.");
                    return Ok(None);
                }
                None => {}
            }

            self.place_cursor(browser)?;
        }
    }

    fn place_cursor(&mut self, browser: &Browser) -> io::Result<()> {
        let cursor = browser.cursor();
        place_cursor(&mut self.screen, cursor.top(), cursor.left())
    }
}

/// An error that ends the session.
#[derive(Debug)]
pub enum AppError {
    /// Reading from or writing to the terminal failed.
    TerminalError(IOError),
    /// The selected path could not be handed off.
    HandoffError(HandoffError),
}

impl From<IOError> for AppError {
    fn from(error: IOError) -> Self {
        Self::TerminalError(error)
    }
}

impl From<HandoffError> for AppError {
    fn from(error: HandoffError) -> Self {
        Self::HandoffError(error)
    }
}

impl Display for AppError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> Result<(), FmtError> {
        match self {
            Self::TerminalError(error) => write!(formatter, "Terminal error: {}", error),
            Self::HandoffError(error) => write!(formatter, "{}", error),
        }
    }
}

/*!
Handing the selected path back to the process that started us.

The parent (normally a shell with a `trap` on `SIGHUP`) reads the mailbox once it is signalled and
changes into the directory or opens the file.
*/
use std::fmt::{Display, Error as FmtError, Formatter};
use std::fs;
use std::io::Error as IOError;
use std::os::unix::ffi::OsStrExt;
use std::path::{Path, PathBuf};

use nix::sys::signal::{kill, Signal};
use nix::unistd::getppid;
use typed_builder::TypedBuilder;

lazy_static! {
    /// The mailbox used when none is configured.
    pub static ref DEFAULT_MAILBOX: PathBuf = PathBuf::from("/tmp/rsx");
}

/// Makes a selected path available to whoever launched us.
pub trait Handoff {
    fn hand_off(&self, path: &Path) -> Result<(), HandoffError>;
}

/// Hands off a path by writing it to a file and sending `SIGHUP` to the parent process.
///
/// The file holds a single path with no trailing newline and is overwritten every time.
#[derive(TypedBuilder, Debug)]
pub struct Mailbox {
    /// The file the path is written to.
    path: PathBuf,
    /// Whether to signal the parent process after writing.
    #[builder(default = true)]
    signal_parent: bool,
}

impl Handoff for Mailbox {
    fn hand_off(&self, path: &Path) -> Result<(), HandoffError> {
        if let Err(error) = fs::write(&self.path, path.as_os_str().as_bytes()) {
            return Err(HandoffError::WriteError {
                mailbox: self.path.clone(),
                error,
            });
        }

        #[cfg(feature = "logging")]
        log::info!(
            "Wrote \"{}\" to the mailbox \"{}\".",
            path.display(),
            self.path.display()
        );

        if self.signal_parent {
            signal_parent();
        }
        Ok(())
    }
}

/// Tell the parent process the mailbox is ready. Nobody acknowledges this, so a failure is only
/// logged.
fn signal_parent() {
    let parent = getppid();
    match kill(parent, Signal::SIGHUP) {
        Ok(()) => {
            #[cfg(feature = "logging")]
            log::info!("Sent SIGHUP to the parent process {}.", parent);
        }
        #[allow(unused_variables)]
        Err(errno) => {
            #[cfg(feature = "logging")]
            log::warn!(
                "Failed to send SIGHUP to the parent process {}: {}",
                parent,
                errno
            );
        }
    }
}

/// An error handing off a path.
#[derive(Debug)]
pub enum HandoffError {
    /// The mailbox could not be written.
    WriteError { mailbox: PathBuf, error: IOError },
}

impl Display for HandoffError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> Result<(), FmtError> {
        match self {
            Self::WriteError { mailbox, error } => write!(
                formatter,
                "Failed to write the selected path to the mailbox \"{}\": {}",
                mailbox.display(),
                error
            ),
        }
    }
}

impl std::error::Error for HandoffError {}

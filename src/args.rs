use std::path::{Path, PathBuf};

use crate::current_dir;

use clap::Parser;
#[cfg(feature = "logging")]
use flexi_logger::{LevelFilter as LogLevelFilter, LogSpecification};

#[cfg(feature = "logging")]
use crate::logging::ModuleLogLevel;

#[derive(Parser, Debug)]
#[clap(name = "rsx", author, version, about)]
pub struct Args {
    /// Directory to browse (defaults to the current directory)
    #[clap(display_order = 0)]
    dir: Option<PathBuf>,

    /// File to write the selected path to
    #[clap(long, display_order = 1)]
    mailbox: Option<PathBuf>,

    /// Do not send SIGHUP to the parent process after a selection
    #[clap(long = "no-signal", display_order = 2)]
    no_signal: bool,

    /// File to write logs to
    #[cfg(feature = "logging")]
    #[clap(long = "log-file", display_order = 3)]
    log_file_path: Option<PathBuf>,

    /// Default log level for all modules
    #[cfg(feature = "logging")]
    #[clap(display_order = 4, long = "log-level", id = "LOG_LEVEL", default_value_t = LogLevelFilter::Info)]
    log_level_filter: LogLevelFilter,

    /// Log level for a particular module (<module-name>=<log-level>)
    #[cfg(feature = "logging")]
    #[clap(display_order = 5, long = "module-log-level", id = "MODULE_LOG_LEVEL")]
    module_log_levels: Vec<ModuleLogLevel>,
}

impl Args {
    /// Return the absolute directory to browse, resolving a relative one against `current_dir`.
    pub fn dir(&self, current_dir: &Path) -> PathBuf {
        let dir: &Path = self.dir.as_deref().unwrap_or_else(|| Path::new("."));
        current_dir::absolute(dir, current_dir)
    }

    pub fn mailbox(&self) -> Option<&Path> {
        self.mailbox.as_deref()
    }

    pub fn no_signal(&self) -> bool {
        self.no_signal
    }

    #[cfg(feature = "logging")]
    pub fn log_file_path(&self) -> Option<&Path> {
        self.log_file_path.as_deref()
    }

    #[cfg(feature = "logging")]
    pub fn log_specification(&self) -> LogSpecification {
        let mut log_specification_builder = LogSpecification::builder();

        log_specification_builder.default(self.log_level_filter);

        for module_log_level in &self.module_log_levels {
            log_specification_builder.module(module_log_level.module(), module_log_level.level());
        }

        log_specification_builder.finalize()
    }
}

/*!
Logging for debug purposes. Only compiled with the `logging` feature.
*/
use std::error::Error;
use std::fmt::{Display, Error as FmtError, Formatter};
use std::io::{Error as IOError, Write};
use std::path::PathBuf;
use std::str::FromStr;

use flexi_logger::{
    DeferredNow, FileSpec, FlexiLoggerError, LevelFilter, LogSpecification, Logger, LoggerHandle,
    Record,
};

/// Configure logging to the file at `path`.
pub fn configure_logging(
    path: PathBuf,
    log_specification: LogSpecification,
) -> ConfigureLoggingResult {
    let file_spec: FileSpec = match FileSpec::try_from(path.clone()) {
        Ok(file_spec) => file_spec,
        Err(error) => {
            return Err(ConfigureLoggingError::BadPath { path, error });
        }
    };

    let logger = Logger::with(log_specification)
        .format(log_format)
        .log_to_file(file_spec);

    match logger.start() {
        Ok(logger_handle) => Ok(logger_handle),
        Err(error) => Err(ConfigureLoggingError::StartFailed(error)),
    }
}

/// Format log records.
pub fn log_format(
    writer: &mut dyn Write,
    now: &mut DeferredNow,
    record: &Record,
) -> Result<(), IOError> {
    write!(
        writer,
        "{} {} [{}] {}",
        now.now().format("%d-%m-%Y %H:%M.%S"),
        record.level(),
        record.module_path().unwrap_or("<unnamed>"),
        &record.args()
    )
}

pub type ConfigureLoggingResult = Result<LoggerHandle, ConfigureLoggingError>;

/// An error setting up logging.
#[derive(Debug)]
pub enum ConfigureLoggingError {
    /// The log file path cannot be used.
    BadPath {
        path: PathBuf,
        error: FlexiLoggerError,
    },
    /// The logger could not be started.
    StartFailed(FlexiLoggerError),
}

impl Display for ConfigureLoggingError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> Result<(), FmtError> {
        match self {
            Self::BadPath { path, error } => write!(
                formatter,
                "Failed to log to \"{}\": {}",
                path.display(),
                error
            ),
            Self::StartFailed(error) => write!(formatter, "Failed to start logging: {}", error),
        }
    }
}

/// A log level for one module, written `<module>=<level>` on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleLogLevel {
    module: String,
    level: LevelFilter,
}

impl ModuleLogLevel {
    pub fn module(&self) -> &str {
        &self.module
    }

    pub fn level(&self) -> LevelFilter {
        self.level
    }
}

impl FromStr for ModuleLogLevel {
    type Err = ModuleLogLevelParseError;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        let (module, level) = match string.split_once('=') {
            Some(parts) => parts,
            None => return Err(ModuleLogLevelParseError::NoLevel(string.to_string())),
        };
        if module.is_empty() {
            return Err(ModuleLogLevelParseError::NoModule(string.to_string()));
        }
        match LevelFilter::from_str(level) {
            Ok(level) => Ok(Self {
                module: module.to_string(),
                level,
            }),
            Err(_) => Err(ModuleLogLevelParseError::BadLevel(level.to_string())),
        }
    }
}

/// Why a `--module-log-level` value was rejected.
#[derive(Debug, PartialEq, Eq)]
pub enum ModuleLogLevelParseError {
    NoLevel(String),
    NoModule(String),
    BadLevel(String),
}

impl Display for ModuleLogLevelParseError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> Result<(), FmtError> {
        match self {
            Self::NoLevel(string) => write!(
                formatter,
                "\"{}\" has no level, expected <module>=<level>",
                string
            ),
            Self::NoModule(string) => write!(
                formatter,
                "\"{}\" has no module, expected <module>=<level>",
                string
            ),
            Self::BadLevel(level) => write!(formatter, "\"{}\" is not a log level", level),
        }
    }
}

impl Error for ModuleLogLevelParseError {}

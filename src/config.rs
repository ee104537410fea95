/*!
Configuration options loaded from the YAML file `~/.rsx-config.yaml` if it exists.
*/

/// Configuration options.
mod config {
    use super::GeneralConfig;
    use crate::tree::Icons;

    use std::fmt::{Display, Formatter, Result as FormatResult};
    use std::fs::File;
    use std::io::{Error as IOError, ErrorKind as IOErrorKind};
    use std::path::PathBuf;

    use serde::Deserialize;
    use serde_yaml::Error as YamlParseError;
    use unicode_segmentation::UnicodeSegmentation;

    /// Configuration options.
    #[derive(Deserialize, Debug, Default, Clone, Eq, PartialEq)]
    pub struct Config {
        /// General configuration.
        #[serde(default)]
        general: GeneralConfig,
        /// The icons drawn in front of names.
        #[serde(default)]
        icons: Icons,
    }

    impl Config {
        /// Return the default path of the file that configuration is loaded from.
        pub fn default_path() -> ConfigDefaultPathResult {
            let mut path: PathBuf = match dirs::home_dir() {
                Some(path) => path,
                None => {
                    return Err(ConfigDefaultPathError::CannotDetermineHomeDirectory);
                }
            };
            path.push(".rsx-config.yaml");
            Ok(path)
        }

        /// Return the `Config` loaded from the default file if it exists or the default config if
        /// the file does not exist. If there is an error then return a `ConfigLoadError`.
        pub fn load() -> ConfigLoadResult {
            let path: PathBuf = match Self::default_path() {
                Ok(path) => path,
                Err(error) => {
                    return Err(ConfigLoadError::ConfigDefaultPathError(error));
                }
            };
            Self::load_from(path)
        }

        /// Return the `Config` loaded from `path`, or the default config if there is no such file.
        pub fn load_from(path: PathBuf) -> ConfigLoadResult {
            let file: File = match File::open(&path) {
                Ok(file) => file,
                Err(error) => match error.kind() {
                    IOErrorKind::NotFound => {
                        return Ok(Config::default());
                    }
                    IOErrorKind::PermissionDenied => {
                        return Err(ConfigLoadError::PermissionDeniedError(path));
                    }
                    _ => {
                        return Err(ConfigLoadError::OtherFileReadError { path, error });
                    }
                },
            };

            let config: Config = match serde_yaml::from_reader(file) {
                Ok(config) => config,
                Err(error) => return Err(ConfigLoadError::ParseError { path, error }),
            };

            let icons = [
                ("file", &config.icons.file),
                ("closed", &config.icons.closed),
                ("empty", &config.icons.empty),
                ("open", &config.icons.open),
            ];
            for (name, icon) in icons {
                if icon.graphemes(true).count() != 1 {
                    return Err(ConfigLoadError::BadIconError {
                        path,
                        name,
                        icon: icon.clone(),
                    });
                }
            }

            Ok(config)
        }

        /// Return the general configuration.
        pub fn general(&self) -> &GeneralConfig {
            &self.general
        }

        /// Return the icons.
        pub fn icons(&self) -> &Icons {
            &self.icons
        }
    }

    /// The result of trying to determine a default path.
    type ConfigDefaultPathResult = Result<PathBuf, ConfigDefaultPathError>;

    /// A problem with determining a default path.
    #[derive(Debug)]
    pub enum ConfigDefaultPathError {
        /// The home directory could not be determined.
        CannotDetermineHomeDirectory,
    }

    /// The result of trying to load the configuration file.
    type ConfigLoadResult = Result<Config, ConfigLoadError>;

    /// An error loading the configuration file.
    #[derive(Debug)]
    #[allow(clippy::enum_variant_names)]
    pub enum ConfigLoadError {
        /// The home directory, and so the configuration file, could not be determined.
        ConfigDefaultPathError(ConfigDefaultPathError),
        /// Permission was denied while trying to read the configuration file.
        PermissionDeniedError(PathBuf),
        /// Some other problem reading the configuration file.
        OtherFileReadError { path: PathBuf, error: IOError },
        /// The configuration file is not valid YAML or a value has the wrong type.
        ParseError {
            path: PathBuf,
            error: YamlParseError,
        },
        /// An icon is not exactly one character wide.
        BadIconError {
            path: PathBuf,
            name: &'static str,
            icon: String,
        },
    }

    impl Display for ConfigLoadError {
        fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
            match self {
                Self::ConfigDefaultPathError(error) => match error {
                    ConfigDefaultPathError::CannotDetermineHomeDirectory => {
                        write!(f, "Failed to load the configuration because the home directory could not be determined.")
                    }
                },
                Self::PermissionDeniedError(path) => {
                    write!(
                        f,
                        "Failed to load the configuration file \"{}\" because permission was denied.",
                        path.display()
                    )
                }
                Self::OtherFileReadError { path, error } => {
                    write!(
                        f,
                        "Failed to load the configuration file \"{}\" because of an IO error: {}",
                        path.display(),
                        error
                    )
                }
                Self::ParseError { path, error } => {
                    write!(
                        f,
                        "Failed to parse the configuration file \"{}\": {}",
                        path.display(),
                        error
                    )
                }
                Self::BadIconError { path, name, icon } => {
                    write!(
                        f,
                        "The {} icon \"{}\" in the configuration file \"{}\" must be a single character.",
                        name,
                        icon,
                        path.display()
                    )
                }
            }
        }
    }
}
pub use config::{Config, ConfigLoadError};

/// Contains general configuration.
mod general {
    use crate::handoff::DEFAULT_MAILBOX;

    use std::path::{Path, PathBuf};

    use serde::Deserialize;

    /// General configuration options.
    #[derive(Deserialize, Debug, Clone, Eq, PartialEq)]
    #[serde(default)]
    pub struct GeneralConfig {
        /// The file the selected path is written to.
        mailbox: PathBuf,

        /// Whether the parent process is sent `SIGHUP` once the path is written.
        signal_parent: bool,

        /// Whether entries whose names start with a dot are listed.
        show_hidden: bool,
    }

    impl Default for GeneralConfig {
        fn default() -> Self {
            Self {
                mailbox: DEFAULT_MAILBOX.clone(),
                signal_parent: true,
                show_hidden: false,
            }
        }
    }

    impl GeneralConfig {
        /// Return the path of the mailbox.
        pub fn mailbox(&self) -> &Path {
            &self.mailbox
        }

        /// Return whether the parent process should be signalled.
        pub fn signal_parent(&self) -> bool {
            self.signal_parent
        }

        /// Return whether hidden entries are listed.
        pub fn show_hidden(&self) -> bool {
            self.show_hidden
        }
    }
}
pub use general::GeneralConfig;

use std::path::PathBuf;
use std::process::exit;

use clap::Parser;
use crossterm::terminal;
#[cfg(feature = "logging")]
use flexi_logger::LoggerHandle;

use rsx::app::{App, TermEvents};
use rsx::args::Args;
use rsx::component::Component;
use rsx::components::{Browser, BrowserProps};
use rsx::config::Config;
use rsx::current_dir;
use rsx::handoff::Mailbox;
#[cfg(feature = "logging")]
use rsx::logging::{configure_logging, ConfigureLoggingResult};
use rsx::rendering::{Size, TermScreen};
use rsx::tree::TreeOptions;

fn main() {
    let args: Args = Args::parse();

    #[cfg(feature = "logging")]
    let _logger_handle: LoggerHandle;
    #[cfg(feature = "logging")]
    if let Some(log_file_path) = args.log_file_path() {
        let configure_logging_result: ConfigureLoggingResult =
            configure_logging(log_file_path.to_path_buf(), args.log_specification());
        _logger_handle = match configure_logging_result {
            Ok(_logger_handle) => _logger_handle,
            Err(error) => {
                eprintln!("{}", error);
                exit(1);
            }
        }
    }

    let config: Config = match Config::load() {
        Ok(config) => config,
        Err(error) => {
            eprintln!("{}", error);
            exit(1);
        }
    };

    let current_dir: PathBuf = match current_dir::current_dir() {
        Ok(current_dir) => current_dir,
        Err(error) => {
            eprintln!("Failed to determine the current directory: {}", error);
            exit(1);
        }
    };

    let size: Size = match terminal::size() {
        Ok(size) => Size::from(size),
        Err(error) => {
            eprintln!("Failed to get the size of the terminal: {}", error);
            exit(1);
        }
    };

    let tree_options = TreeOptions::builder()
        .icons(config.icons().clone())
        .show_hidden(config.general().show_hidden())
        .build();
    let mut browser = Browser::new(
        BrowserProps::builder()
            .root(args.dir(&current_dir))
            .size(size)
            .tree_options(tree_options)
            .build(),
    );

    let mailbox = Mailbox::builder()
        .path(
            args.mailbox()
                .unwrap_or_else(|| config.general().mailbox())
                .to_path_buf(),
        )
        .signal_parent(config.general().signal_parent() && !args.no_signal())
        .build();

    let mut app = App::builder()
        .screen(TermScreen::new())
        .events(TermEvents)
        .handoff(Box::new(mailbox))
        .build();
    if let Err(error) = app.run(&mut browser) {
        eprintln!("{}", error);
        exit(1);
    }
}

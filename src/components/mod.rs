mod browser;
pub use browser::{Browser, BrowserEffect, BrowserProps, Cursor};

mod browser;
pub use browser::{Browser, Effect as BrowserEffect, Props as BrowserProps};

mod cursor;
pub use cursor::Cursor;

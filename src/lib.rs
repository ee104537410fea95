/*!
Browse a directory tree in the terminal and hand the selected path back to the shell.

The selected path is written to a mailbox file and the parent process is sent `SIGHUP`. A shell
picks it up with a trap, for example in `.bashrc`:

```bash
trap 'p="$(cat /tmp/rsx)"; if [ -d "$p" ]; then cd "$p"; else "${EDITOR:-vi}" "$p"; fi' HUP
```
*/
#![allow(clippy::module_inception)]
#![allow(clippy::needless_return)]

#[macro_use]
extern crate lazy_static;

pub mod app;
pub mod args;
pub mod component;
pub mod components;
pub mod config;
pub mod current_dir;
pub mod handoff;
#[cfg(feature = "logging")]
pub mod logging;
pub mod rendering;
pub mod stateful;
pub mod tree;

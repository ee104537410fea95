/*!
This module contains helpers for finding the current directory and making paths absolute.
*/
use std::env;
use std::io;
use std::path::{Component, Path, PathBuf};

/// Return the current directory.
///
/// If the environment variable `PWD` is set to an absolute path, then return that. Otherwise, use
/// the Rust standard library function for getting the current directory.
///
/// NOTE: On Linux, the Rust standard library function calls `getcwd()` which canonicalizes the path
/// by resolving dots, dot-dots, and symbolic links. Prefer `PWD` over the std lib `current_dir`
/// function because we don't want to resolve symlinks.
pub fn current_dir() -> io::Result<PathBuf> {
    if let Ok(pwd) = env::var("PWD") {
        let pwd = PathBuf::from(pwd);
        if pwd.is_absolute() {
            return Ok(pwd);
        }
    }
    env::current_dir()
}

/// Return `path` made absolute against `base`, with `.` and `..` components resolved lexically.
/// Symbolic links are left alone.
pub fn absolute(path: &Path, base: &Path) -> PathBuf {
    let joined: PathBuf = if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    };

    let mut resolved = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                resolved.pop();
            }
            other => resolved.push(other.as_os_str()),
        }
    }
    resolved
}

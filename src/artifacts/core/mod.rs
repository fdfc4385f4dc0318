//! Core utilities and shared types
//!
//! Output plumbing for the CLI and the path helpers every area relies on.

use derive_new::new;
use is_terminal::IsTerminal;
use minus::Pager;
use std::io::{self, Write};
use std::path::{Component, Path, PathBuf};

/// Wrapper that implements `Write` for the minus pager
///
/// Long patches and histories are paged when stdout is a terminal. The
/// repository writer is a plain `Box<dyn Write>`, so the pager is adapted to
/// it here and flushed to the screen once the command has finished.
///
/// ## Usage
///
/// ```ignore
/// let pager = Pager::new();
/// let mut writer = PagerWriter::new(pager.clone());
/// writeln!(writer, "Some long patch...")?;
/// minus::page_all(pager)?;
/// ```
#[derive(new)]
pub struct PagerWriter {
    pager: Pager,
}

impl Write for PagerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let s = String::from_utf8_lossy(buf);
        self.pager.push_str(s).map_err(io::Error::other)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Paging is used only for interactive sessions; `NO_PAGER` turns it off.
pub fn should_page() -> bool {
    std::env::var_os("NO_PAGER").is_none() && io::stdout().is_terminal()
}

/// Converts a path to the forward-slash form used by Git and the history index.
pub fn to_slash_path(path: &str) -> String {
    path.replace('\\', "/")
}

/// Lexically normalises a path for equality checks between the project root
/// and paths recorded by other tools: `.` components and trailing separators
/// are dropped, separators become `/`, and the result is lower-cased.
pub fn normalize_for_match(path: &Path) -> String {
    let rebuilt = path
        .components()
        .filter(|component| !matches!(component, Component::CurDir))
        .collect::<PathBuf>();

    to_slash_path(&rebuilt.to_string_lossy()).to_lowercase()
}

/// Absolute form of a project root with `.` and `..` resolved lexically.
/// Symlinks are not followed.
pub fn absolute_root(path: &Path) -> PathBuf {
    let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());

    let mut resolved = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                resolved.pop();
            }
            other => resolved.push(other),
        }
    }
    resolved
}

/// Makes `path` relative to `root` when it lives underneath it.
pub fn relative_to(path: &Path, root: &Path) -> PathBuf {
    path.strip_prefix(root)
        .map(Path::to_path_buf)
        .unwrap_or_else(|_| path.to_path_buf())
}

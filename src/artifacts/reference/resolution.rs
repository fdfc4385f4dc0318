use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

// Git's own heuristic: a NUL byte in the first 8000 bytes means binary.
const BINARY_SNIFF_LENGTH: usize = 8000;

/// Why a reference produced no content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Absence {
    EmptyPath,
    NotAtRevision { revision: String, path: String },
    MissingFile(PathBuf),
    NoHistoryDirectory,
    Unreadable { path: PathBuf, reason: String },
}

impl std::fmt::Display for Absence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Absence::EmptyPath => write!(f, "no path given"),
            Absence::NotAtRevision { revision, path } => {
                write!(f, "'{path}' does not exist at revision '{revision}'")
            }
            Absence::MissingFile(path) => write!(f, "'{}' does not exist", path.display()),
            Absence::NoHistoryDirectory => write!(f, "no snapshot history directory found"),
            Absence::Unreadable { path, reason } => {
                write!(f, "'{}' could not be read: {reason}", path.display())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Found(String),
    NotFound(Absence),
}

impl Resolution {
    /// Decodes raw file content. Invalid UTF-8 (binary files) is replaced
    /// lossily rather than rejected.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        if is_binary(&bytes) {
            debug!(len = bytes.len(), "decoding binary content lossily");
        }

        match String::from_utf8(bytes) {
            Ok(content) => Resolution::Found(content),
            Err(e) => Resolution::Found(String::from_utf8_lossy(e.as_bytes()).into_owned()),
        }
    }

    pub async fn read_file(path: &Path) -> Self {
        match tokio::fs::read(path).await {
            Ok(bytes) => Self::from_bytes(bytes),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Resolution::NotFound(Absence::MissingFile(path.to_path_buf()))
            }
            Err(e) => Resolution::NotFound(Absence::Unreadable {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }),
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Resolution::Found(_))
    }

    pub fn content(&self) -> Option<&str> {
        match self {
            Resolution::Found(content) => Some(content),
            Resolution::NotFound(_) => None,
        }
    }

    /// The single place where an absent side becomes empty text.
    pub fn into_content(self) -> String {
        match self {
            Resolution::Found(content) => content,
            Resolution::NotFound(_) => String::new(),
        }
    }
}

pub fn is_binary(bytes: &[u8]) -> bool {
    bytes.iter().take(BINARY_SNIFF_LENGTH).any(|byte| *byte == 0)
}

use colored::Colorize;
use serde::Serialize;

const LABEL_WIDTH: usize = 10;
const RENAME_SEPARATOR: &str = " -> ";

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum StatusKind {
    Staged,
    Unstaged,
    Added,
    Deleted,
    Renamed,
    Untracked,
    Other(String),
}

impl StatusKind {
    /// Maps the two-letter porcelain code (index column, worktree column).
    pub fn from_code(code: &str) -> Self {
        let mut columns = code.chars();
        let index = columns.next().unwrap_or(' ');
        let worktree = columns.next().unwrap_or(' ');

        match (index, worktree) {
            ('?', '?') => StatusKind::Untracked,
            ('A', _) => StatusKind::Added,
            ('R', _) => StatusKind::Renamed,
            ('D', _) | (_, 'D') => StatusKind::Deleted,
            (_, 'M') => StatusKind::Unstaged,
            ('M', ' ') => StatusKind::Staged,
            _ => StatusKind::Other(code.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            StatusKind::Staged => "staged",
            StatusKind::Unstaged => "unstaged",
            StatusKind::Added => "added",
            StatusKind::Deleted => "deleted",
            StatusKind::Renamed => "renamed",
            StatusKind::Untracked => "untracked",
            StatusKind::Other(code) => code,
        }
    }
}

impl std::fmt::Display for StatusKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = format!("{:<width$}", self.label(), width = LABEL_WIDTH);
        let colored_label = match self {
            StatusKind::Staged | StatusKind::Added | StatusKind::Renamed => label.green(),
            StatusKind::Unstaged | StatusKind::Deleted => label.red(),
            StatusKind::Untracked | StatusKind::Other(_) => label.normal(),
        };
        write!(f, "{}", colored_label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct StatusEntry {
    pub path: String,
    pub kind: StatusKind,
}

impl StatusEntry {
    pub fn parse_porcelain(output: &str) -> Vec<Self> {
        output
            .lines()
            .filter(|line| line.len() > 3)
            .map(|line| {
                let (code, path) = line.split_at(2);
                let path = path.trim_start();
                // renames report "old -> new"; the new path is the live one
                let path = path
                    .split_once(RENAME_SEPARATOR)
                    .map_or(path, |(_, new_path)| new_path);

                StatusEntry {
                    path: path.to_string(),
                    kind: StatusKind::from_code(code),
                }
            })
            .collect()
    }
}

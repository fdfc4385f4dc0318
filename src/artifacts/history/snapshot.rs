use crate::artifacts::core::to_slash_path;
use chrono::{DateTime, Local, TimeZone};
use colored::{ColoredString, Colorize};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Save,
    Rename,
    Delete,
    Label,
    Manual,
    Selection,
}

impl EventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Save => "save",
            EventType::Rename => "rename",
            EventType::Delete => "delete",
            EventType::Label => "label",
            EventType::Manual => "manual",
            EventType::Selection => "selection",
        }
    }

    pub fn colored(&self) -> ColoredString {
        match self {
            EventType::Save => self.as_str().green(),
            EventType::Rename => self.as_str().cyan(),
            EventType::Delete => self.as_str().red(),
            EventType::Label | EventType::Manual => self.as_str().yellow(),
            EventType::Selection => self.as_str().magenta(),
        }
    }
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineRange {
    pub start: u32,
    pub end: u32,
}

/// One entry of the history index. Read-only from this crate's point of view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotRecord {
    pub id: String,
    /// Epoch milliseconds.
    pub timestamp: i64,
    pub file_path: String,
    pub event_type: EventType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relevant_range: Option<LineRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lines_added: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lines_deleted: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pinned: Option<bool>,
}

impl SnapshotRecord {
    /// Name of the file holding this snapshot's content.
    pub fn storage_name(&self) -> &str {
        self.storage_path.as_deref().unwrap_or(&self.id)
    }

    pub fn recorded_at(&self) -> Option<DateTime<Local>> {
        Local.timestamp_millis_opt(self.timestamp).single()
    }

    pub fn readable_timestamp(&self) -> String {
        self.recorded_at()
            .map(|at| at.format("%a %b %-d %H:%M:%S %Y").to_string())
            .unwrap_or_else(|| self.timestamp.to_string())
    }

    pub fn is_for(&self, file_path: &str) -> bool {
        to_slash_path(&self.file_path) == to_slash_path(file_path)
    }
}

/// The whole `index.json` document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryIndex {
    #[serde(default)]
    pub snapshots: Vec<SnapshotRecord>,
}

impl HistoryIndex {
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn snapshots_for<'i>(&'i self, file_path: &'i str) -> impl Iterator<Item = &'i SnapshotRecord> {
        self.snapshots
            .iter()
            .filter(move |snapshot| snapshot.is_for(file_path))
    }

    /// Newest first; records with equal timestamps keep their index order.
    pub fn sorted_by_timestamp(&self) -> Vec<&SnapshotRecord> {
        let mut snapshots = self.snapshots.iter().collect::<Vec<_>>();
        snapshots.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        snapshots
    }
}

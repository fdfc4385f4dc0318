use crate::OutputFormat;
use crate::areas::repository::Repository;
use crate::artifacts::core::to_slash_path;
use crate::artifacts::history::snapshot::SnapshotRecord;
use colored::Colorize;

#[derive(Debug, Clone, Default)]
pub struct HistoryOptions {
    pub file: Option<String>,
    pub limit: Option<usize>,
    pub format: OutputFormat,
}

impl Repository {
    /// Lists recorded snapshots, newest first, optionally for a single file.
    pub async fn history(&self, opts: &HistoryOptions) -> anyhow::Result<()> {
        let index = self.history_store().load_index().await?;
        let file = opts.file.as_deref().map(to_slash_path);

        let snapshots = index
            .sorted_by_timestamp()
            .into_iter()
            .filter(|snapshot| file.as_deref().is_none_or(|file| snapshot.is_for(file)))
            .take(opts.limit.unwrap_or(usize::MAX))
            .collect::<Vec<_>>();

        match opts.format {
            OutputFormat::Json => {
                writeln!(self.writer(), "{}", serde_json::to_string_pretty(&snapshots)?)?;
            }
            OutputFormat::Text => {
                for snapshot in snapshots {
                    self.show_snapshot_oneline(snapshot)?;
                }
            }
        }

        Ok(())
    }

    fn show_snapshot_oneline(&self, snapshot: &SnapshotRecord) -> anyhow::Result<()> {
        let mut line = format!(
            "{} {} {:<9} {}",
            snapshot.id.yellow(),
            snapshot.readable_timestamp(),
            snapshot.event_type.colored(),
            snapshot.file_path
        );

        if let Some(label) = &snapshot.label {
            line.push_str(&format!(" [{}]", label.bold()));
        }

        if snapshot.lines_added.is_some() || snapshot.lines_deleted.is_some() {
            line.push_str(&format!(
                " {} {}",
                format!("+{}", snapshot.lines_added.unwrap_or_default()).green(),
                format!("-{}", snapshot.lines_deleted.unwrap_or_default()).red()
            ));
        }

        writeln!(self.writer(), "{}", line)?;

        Ok(())
    }
}

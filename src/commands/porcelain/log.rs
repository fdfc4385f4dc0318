use crate::areas::repository::Repository;
use crate::artifacts::log::{CommitEntry, LogQuery};
use colored::Colorize;

#[derive(Debug, Clone)]
pub struct LogOptions {
    pub query: LogQuery,
    pub oneline: bool,
}

impl Repository {
    pub async fn log(&self, opts: &LogOptions) -> anyhow::Result<()> {
        let commits = self.git().log(&opts.query).await?;

        for (position, commit) in commits.iter().enumerate() {
            if opts.oneline {
                self.show_commit_oneline(commit)?;
            } else {
                if position > 0 {
                    writeln!(self.writer())?;
                }
                self.show_commit_medium(commit)?;
            }
        }

        Ok(())
    }

    fn show_commit_medium(&self, commit: &CommitEntry) -> anyhow::Result<()> {
        writeln!(self.writer(), "{}", format!("commit {}", commit.id).yellow())?;
        writeln!(self.writer(), "Author: {}", commit.author)?;
        writeln!(self.writer(), "Date:   {}", commit.readable_timestamp())?;
        writeln!(self.writer())?;
        writeln!(self.writer(), "    {}", commit.subject)?;

        Ok(())
    }

    fn show_commit_oneline(&self, commit: &CommitEntry) -> anyhow::Result<()> {
        writeln!(
            self.writer(),
            "{} {}",
            commit.short_id().yellow(),
            commit.subject
        )?;

        Ok(())
    }
}

use crate::areas::repository::Repository;
use colored::Colorize;

const SHORT_ID_LENGTH: usize = 7;

impl Repository {
    pub async fn branches(&self) -> anyhow::Result<()> {
        let branches = self.git().branches().await?;

        for branch in branches {
            let short_id = &branch.commit_id[..SHORT_ID_LENGTH.min(branch.commit_id.len())];

            if branch.is_head {
                writeln!(self.writer(), "* {} {}", branch.to_string().green(), short_id)?;
            } else if branch.is_remote {
                writeln!(self.writer(), "  {} {}", branch.to_string().red(), short_id)?;
            } else {
                writeln!(self.writer(), "  {} {}", branch, short_id)?;
            }
        }

        Ok(())
    }
}

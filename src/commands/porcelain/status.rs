use crate::areas::repository::Repository;

impl Repository {
    pub async fn status(&self) -> anyhow::Result<()> {
        let entries = self.git().status().await?;

        for entry in entries {
            writeln!(self.writer(), "{} {}", entry.kind, entry.path)?;
        }

        Ok(())
    }
}

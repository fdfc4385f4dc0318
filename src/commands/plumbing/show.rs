use crate::areas::repository::Repository;
use crate::artifacts::reference::resolution::Resolution;
use crate::artifacts::reference::version_reference::VersionReference;

impl Repository {
    /// Prints the content `reference` resolves to. Unlike `compare`, an
    /// absent version is reported as an error.
    pub async fn show(&self, reference: &VersionReference) -> anyhow::Result<()> {
        match self.resolver().resolve(reference).await {
            Resolution::Found(content) => {
                write!(self.writer(), "{}", content)?;
                Ok(())
            }
            Resolution::NotFound(absence) => {
                anyhow::bail!("cannot show {}: {}", reference, absence)
            }
        }
    }
}

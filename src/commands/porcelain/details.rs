use crate::OutputFormat;
use crate::areas::repository::Repository;

#[derive(Debug, Clone)]
pub struct DetailsOptions {
    pub file: String,
    pub staged: bool,
    pub format: OutputFormat,
}

impl Repository {
    pub async fn details(&self, opts: &DetailsOptions) -> anyhow::Result<()> {
        let result = self.comparator().details(&opts.file, opts.staged).await;

        self.print_comparison(&result, opts.format, false)
    }
}

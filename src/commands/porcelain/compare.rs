use crate::OutputFormat;
use crate::areas::repository::Repository;
use crate::artifacts::diff::comparison::ComparisonResult;
use crate::artifacts::diff::patch::PatchStats;
use crate::artifacts::reference::version_reference::VersionReference;
use colored::Colorize;
use serde::Serialize;

#[derive(Debug, Clone)]
pub struct CompareOptions {
    pub a: VersionReference,
    pub b: VersionReference,
    pub format: OutputFormat,
    pub stat: bool,
}

#[derive(Serialize)]
struct ComparisonReport<'r> {
    #[serde(flatten)]
    result: &'r ComparisonResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    stats: Option<PatchStats>,
}

impl Repository {
    pub async fn compare(&self, opts: &CompareOptions) -> anyhow::Result<()> {
        let result = self.comparator().compare(&opts.a, &opts.b).await;

        self.print_comparison(&result, opts.format, opts.stat)
    }

    pub(crate) fn print_comparison(
        &self,
        result: &ComparisonResult,
        format: OutputFormat,
        stat: bool,
    ) -> anyhow::Result<()> {
        let stats = if stat { Some(result.stats()?) } else { None };

        match format {
            OutputFormat::Json => {
                let report = ComparisonReport { result, stats };
                writeln!(self.writer(), "{}", serde_json::to_string_pretty(&report)?)?;
            }
            OutputFormat::Text => {
                for line in result.patch.lines() {
                    self.print_patch_line(line)?;
                }

                if let Some(stats) = stats {
                    writeln!(self.writer(), "{}", stats.summary())?;
                }
            }
        }

        Ok(())
    }

    fn print_patch_line(&self, line: &str) -> anyhow::Result<()> {
        let is_header = ["diff ", "index ", "--- ", "+++ ", "new file mode", "deleted file mode"]
            .iter()
            .any(|prefix| line.starts_with(prefix));

        if is_header {
            writeln!(self.writer(), "{}", line.bold())?;
        } else if line.starts_with("@@") {
            writeln!(self.writer(), "{}", line.cyan())?;
        } else if line.starts_with('+') {
            writeln!(self.writer(), "{}", line.green())?;
        } else if line.starts_with('-') {
            writeln!(self.writer(), "{}", line.red())?;
        } else {
            writeln!(self.writer(), "{}", line)?;
        }

        Ok(())
    }
}

use anyhow::Context;
use serde::Serialize;

const HUNK_HEADER_REGEX: &str = r"^@@ -(\d+)(?:,(\d+))? \+(\d+)(?:,(\d+))? @@";
const FILE_HEADER_PREFIX: &str = "diff ";

/// Line ranges of one hunk as announced by its `@@` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HunkHeader {
    pub a_start: usize,
    pub a_size: usize,
    pub b_start: usize,
    pub b_size: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PatchStats {
    pub hunks: Vec<HunkHeader>,
    pub lines_added: usize,
    pub lines_deleted: usize,
}

impl PatchStats {
    pub fn parse(patch: &str) -> anyhow::Result<Self> {
        let re = regex::Regex::new(HUNK_HEADER_REGEX)
            .with_context(|| format!("invalid hunk header regex: {HUNK_HEADER_REGEX}"))?;

        let mut stats = PatchStats::default();
        let mut in_hunk = false;

        for line in patch.lines() {
            if let Some(captures) = re.captures(line) {
                let number = |index: usize| -> anyhow::Result<usize> {
                    captures
                        .get(index)
                        .map_or(Ok(1), |m| m.as_str().parse::<usize>())
                        .with_context(|| format!("invalid hunk header: {line}"))
                };

                stats.hunks.push(HunkHeader {
                    a_start: number(1)?,
                    a_size: number(2)?,
                    b_start: number(3)?,
                    b_size: number(4)?,
                });
                in_hunk = true;
            } else if line.starts_with(FILE_HEADER_PREFIX) {
                in_hunk = false;
            } else if in_hunk {
                if line.starts_with('+') {
                    stats.lines_added += 1;
                } else if line.starts_with('-') {
                    stats.lines_deleted += 1;
                }
            }
        }

        Ok(stats)
    }

    pub fn is_empty(&self) -> bool {
        self.hunks.is_empty()
    }

    pub fn summary(&self) -> String {
        format!(
            "{} hunk{}, {} insertion{}(+), {} deletion{}(-)",
            self.hunks.len(),
            plural(self.hunks.len()),
            self.lines_added,
            plural(self.lines_added),
            self.lines_deleted,
            plural(self.lines_deleted)
        )
    }
}

fn plural(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}

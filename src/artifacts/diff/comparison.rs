use crate::areas::git::Git;
use crate::artifacts::diff::patch::PatchStats;
use crate::artifacts::diff::temp_diff::TempDiffRunner;
use crate::artifacts::reference::resolver::Resolver;
use crate::artifacts::reference::version_reference::VersionReference;
use derive_new::new;
use serde::Serialize;
use tracing::{info, warn};

/// Both sides of a comparison plus the patch between them. `original` and
/// `modified` are always present; an unresolvable side is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, new)]
pub struct ComparisonResult {
    pub patch: String,
    pub original: String,
    pub modified: String,
}

impl ComparisonResult {
    pub fn stats(&self) -> anyhow::Result<PatchStats> {
        PatchStats::parse(&self.patch)
    }

    pub fn is_identical(&self) -> bool {
        self.original == self.modified
    }
}

/// Entry point for comparisons. Nothing escapes `compare`: resolution and
/// diffing both degrade to empty text on failure.
#[derive(Debug, new)]
pub struct Comparator<'c> {
    resolver: Resolver<'c>,
    runner: TempDiffRunner<'c>,
    git: &'c Git,
}

impl<'c> Comparator<'c> {
    pub async fn compare(&self, a: &VersionReference, b: &VersionReference) -> ComparisonResult {
        let (original, modified) = tokio::join!(self.resolver.resolve(a), self.resolver.resolve(b));
        let original = original.into_content();
        let modified = modified.into_content();

        info!(
            a = %a,
            b = %b,
            original_len = original.len(),
            modified_len = modified.len(),
            "comparing"
        );

        let patch = self.runner.diff_text(&original, &modified).await;

        ComparisonResult::new(patch, original, modified)
    }

    /// Working tree details for one file: unstaged changes compare the index
    /// with the working copy, staged changes compare HEAD with the index.
    pub async fn details(&self, file: &str, staged: bool) -> ComparisonResult {
        let (a, b) = if staged {
            (
                VersionReference::at_revision(file, "HEAD"),
                VersionReference::staged(file),
            )
        } else {
            (VersionReference::staged(file), VersionReference::working(file))
        };

        let (patch, original, modified) = tokio::join!(
            self.git.diff_worktree(file, staged),
            self.resolver.resolve(&a),
            self.resolver.resolve(&b)
        );

        let patch = patch.unwrap_or_else(|e| {
            warn!(error = %format!("{e:#}"), "git diff failed, returning an empty patch");
            String::new()
        });

        ComparisonResult::new(patch, original.into_content(), modified.into_content())
    }
}

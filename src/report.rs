//! Report writing - markdown summary for the pull request

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::Result;

const SHORT_SHA_LEN: usize = 7;

/// Write the PR markdown report to `output`.
///
/// The report links the short commit SHA to the commit on GitHub and embeds
/// the published graph. Any existing file at `output` is replaced.
///
/// # Errors
///
/// Returns [`crate::Error::Io`] if the file cannot be written.
pub fn write_report(
    output: &Path,
    url: &str,
    pr_number: u32,
    head_sha: &str,
    origin_repository: &str,
) -> Result<()> {
    let commit_url = format!("https://github.com/{origin_repository}/commit/{head_sha}");
    let short_sha: String = head_sha.chars().take(SHORT_SHA_LEN).collect();

    let markdown = format!(
        "# Loss Graph for PR {pr_number} ([{short_sha}]({commit_url}))\n\n![Loss Graph]({url})\n"
    );
    fs::write(output, markdown)?;

    debug!(output = %output.display(), "markdown report written");
    Ok(())
}

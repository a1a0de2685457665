//! Pipeline orchestration - read, extract, render, upload, report
//!
//! Stages run strictly in order and the first failure aborts the run. The
//! report is written only after the upload succeeds, so a report on disk
//! always points at an artifact that exists.

use std::env;
use std::path::PathBuf;

use tracing::info;

use crate::extract::extract_losses;
use crate::publish::{ObjectStore, PublishedReference, ARTIFACT_NAME};
use crate::reader::read_records;
use crate::render::render_graph;
use crate::report::write_report;
use crate::{Error, Result};

/// Everything a pipeline run needs to know.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Training log to read; must be set for a run to proceed.
    pub log_file: Option<PathBuf>,
    /// Where to write the markdown report.
    pub output_file: PathBuf,
    /// AWS region of the artifact bucket.
    pub aws_region: String,
    /// Bucket the graph is uploaded to.
    pub bucket_name: String,
    /// Base branch of the pull request.
    pub base_branch: String,
    /// Pull request number.
    pub pr_number: u32,
    /// Head commit SHA of the pull request.
    pub head_sha: String,
    /// GitHub `owner/repo` the commit link points into.
    pub origin_repository: String,
}

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of loss points in the graph.
    pub points: usize,
    /// Public URL of the uploaded graph.
    pub graph_url: String,
    /// Path of the written markdown report.
    pub report_path: PathBuf,
}

/// Local path the graph artifact is rendered to before upload.
#[must_use]
pub fn artifact_path() -> PathBuf {
    env::temp_dir().join(ARTIFACT_NAME)
}

/// Run the whole pipeline: read the log, extract losses, render the graph,
/// upload it and write the markdown report.
///
/// # Errors
///
/// Propagates the first stage failure; see [`Error`] for the full taxonomy.
/// Returns [`Error::InvalidInput`] if `config.log_file` is unset.
pub fn run(config: &PipelineConfig, store: &impl ObjectStore) -> Result<RunSummary> {
    let log_file = config
        .log_file
        .as_deref()
        .ok_or_else(|| Error::InvalidInput("log file must be provided".to_string()))?;

    let records = read_records(log_file)?;
    info!(records = records.len(), log_file = %log_file.display(), "log file read");

    let series = extract_losses(&records)?;
    info!(points = series.len(), "loss series extracted");

    let artifact = artifact_path();
    render_graph(&series, &artifact)?;
    info!(artifact = %artifact.display(), "graph rendered");

    let reference = PublishedReference::new(
        &config.bucket_name,
        &config.aws_region,
        &config.base_branch,
        config.pr_number,
        &config.head_sha,
    );
    store.upload(&artifact, &config.bucket_name, reference.key())?;
    info!(key = reference.key(), bucket = %config.bucket_name, "artifact uploaded");

    write_report(
        &config.output_file,
        reference.url(),
        config.pr_number,
        &config.head_sha,
        &config.origin_repository,
    )?;
    info!(output = %config.output_file.display(), "report written");

    Ok(RunSummary {
        points: series.len(),
        graph_url: reference.url().to_string(),
        report_path: config.output_file.clone(),
    })
}

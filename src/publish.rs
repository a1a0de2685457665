//! Artifact publishing - graph upload and addressing
//!
//! Uploads go through the `aws` CLI rather than an SDK client: CI images
//! ship the CLI with ambient credentials already configured, and a single
//! `s3 cp` is the whole surface this tool needs. The [`ObjectStore`] trait
//! keeps the transport swappable in tests.

use std::path::Path;
use std::process::Command;

use tracing::debug;

use crate::{Error, Result};

/// File name of the graph artifact, locally and in the object key.
pub const ARTIFACT_NAME: &str = "loss-graph.png";

/// Uploads a local file into a bucket under a given key.
pub trait ObjectStore {
    /// Upload `local` to `bucket` at `key`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Upload`] if the file is missing or the transfer
    /// fails.
    fn upload(&self, local: &Path, bucket: &str, key: &str) -> Result<()>;
}

/// [`ObjectStore`] backed by the `aws` command-line tool.
#[derive(Debug, Clone)]
pub struct AwsCliStore {
    program: String,
}

impl Default for AwsCliStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AwsCliStore {
    /// Store invoking the `aws` binary from `PATH`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            program: "aws".to_string(),
        }
    }

    /// Store invoking a specific program instead of `aws`.
    #[must_use]
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl ObjectStore for AwsCliStore {
    fn upload(&self, local: &Path, bucket: &str, key: &str) -> Result<()> {
        if !local.exists() {
            return Err(Error::Upload(format!(
                "file {} does not exist",
                local.display()
            )));
        }

        let s3_path = format!("s3://{bucket}/{key}");
        let output = Command::new(&self.program)
            .args(["s3", "cp"])
            .arg(local)
            .arg(&s3_path)
            .output()
            .map_err(|e| Error::Upload(format!("failed to run {}: {e}", self.program)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::Upload(format!(
                "failed to upload to s3: {} ({})",
                stderr.trim(),
                output.status
            )));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        debug!(destination = %s3_path, output = %stdout.trim(), "upload complete");
        Ok(())
    }
}

/// Deterministic object key for a PR's graph artifact.
///
/// The same `(base_branch, pr_number, head_sha)` triple always maps to the
/// same key, so re-running a pipeline overwrites its own artifact instead
/// of accumulating copies.
#[must_use]
pub fn destination_key(base_branch: &str, pr_number: u32, head_sha: &str) -> String {
    format!("pulls/{base_branch}/{pr_number}/{head_sha}/{ARTIFACT_NAME}")
}

/// Public HTTPS URL of an object in a bucket.
#[must_use]
pub fn object_url(bucket: &str, key: &str, region: &str) -> String {
    format!("https://{bucket}.s3.{region}.amazonaws.com/{key}")
}

/// Where a published graph lives: its object key and public URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishedReference {
    key: String,
    url: String,
}

impl PublishedReference {
    /// Compute the reference for a PR's graph in a given bucket and region.
    #[must_use]
    pub fn new(
        bucket: &str,
        region: &str,
        base_branch: &str,
        pr_number: u32,
        head_sha: &str,
    ) -> Self {
        let key = destination_key(base_branch, pr_number, head_sha);
        let url = object_url(bucket, &key, region);
        Self { key, url }
    }

    /// The object key under the bucket.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The public HTTPS URL of the object.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

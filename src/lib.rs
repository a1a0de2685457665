//! # loss-graph
//!
//! Turns a line-delimited JSON training log into a PNG loss chart,
//! publishes it to S3 and writes a markdown report for the pull request.
//!
//! The pipeline is strictly sequential and fail-fast: read the log, extract
//! the `total_loss` series, render the chart, upload it, write the report.
//! Any stage failure aborts the run, so a written report always points at a
//! graph that was actually uploaded.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::path::PathBuf;
//!
//! use loss_graph::pipeline::{self, PipelineConfig};
//! use loss_graph::publish::AwsCliStore;
//!
//! let config = PipelineConfig {
//!     log_file: Some(PathBuf::from("train.jsonl")),
//!     output_file: PathBuf::from("report.md"),
//!     aws_region: "us-east-1".to_string(),
//!     bucket_name: "ci-artifacts".to_string(),
//!     base_branch: "main".to_string(),
//!     pr_number: 42,
//!     head_sha: "abc123def456".to_string(),
//!     origin_repository: "example/training".to_string(),
//! };
//!
//! let summary = pipeline::run(&config, &AwsCliStore::new())?;
//! println!("{}", summary.graph_url);
//! # Ok::<(), loss_graph::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod extract;
pub mod pipeline;
pub mod publish;
pub mod reader;
pub mod render;
pub mod report;

pub use error::{Error, Result};
pub use extract::LossSeries;
pub use reader::LogRecord;

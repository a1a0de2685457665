//! Command-line entry point for the loss graph pipeline.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use loss_graph::pipeline::{self, PipelineConfig};
use loss_graph::publish::AwsCliStore;

#[derive(Parser, Debug)]
#[command(name = "loss-graph")]
#[command(about = "Renders a training-loss graph and publishes it for PR reports")]
#[command(version)]
struct Cli {
    /// The log file to read the loss data from
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// The file to write the markdown report to
    #[arg(long)]
    output_file: PathBuf,

    /// The AWS region of the artifact bucket
    #[arg(long)]
    aws_region: String,

    /// The S3 bucket to upload the graph to
    #[arg(long)]
    bucket_name: String,

    /// The base branch of the pull request
    #[arg(long)]
    base_branch: String,

    /// The pull request number
    #[arg(long)]
    pr_number: u32,

    /// The head commit SHA of the pull request
    #[arg(long)]
    head_sha: String,

    /// The GitHub repository (owner/repo) for commit links
    #[arg(long)]
    origin_repository: String,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = PipelineConfig {
        log_file: cli.log_file,
        output_file: cli.output_file,
        aws_region: cli.aws_region,
        bucket_name: cli.bucket_name,
        base_branch: cli.base_branch,
        pr_number: cli.pr_number,
        head_sha: cli.head_sha,
        origin_repository: cli.origin_repository,
    };

    let summary = pipeline::run(&config, &AwsCliStore::new())?;

    println!("Loss graph uploaded to '{}'", summary.graph_url);
    println!(
        "Markdown file written to '{}'",
        summary.report_path.display()
    );

    Ok(())
}

//! Local pipeline dry run: no AWS account required
//!
//! This example demonstrates:
//! - Generating a line-delimited JSON training log
//! - Running the full pipeline (read, extract, render, publish, report)
//! - Swapping the object store for a local-directory implementation
//!
//! Run with: cargo run --example local_run

use std::fs;
use std::path::{Path, PathBuf};

use loss_graph::pipeline::{self, PipelineConfig};
use loss_graph::publish::ObjectStore;

/// An [`ObjectStore`] that copies artifacts into a local directory tree
/// instead of S3. The pipeline never knows the difference.
struct LocalDirStore {
    root: PathBuf,
}

impl ObjectStore for LocalDirStore {
    fn upload(&self, local: &Path, bucket: &str, key: &str) -> loss_graph::Result<()> {
        let dest = self.root.join(bucket).join(key);
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(local, &dest)?;
        println!("  ✓ Artifact copied to {}", dest.display());
        Ok(())
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Loss Graph Local Dry Run ===\n");

    let work_dir = std::env::temp_dir().join("loss-graph-demo");
    fs::create_dir_all(&work_dir)?;

    // Generate a training log: decaying loss with checkpoint lines mixed in
    println!("Generating sample training log (200 steps)...");
    let log_file = work_dir.join("train.jsonl");
    fs::write(&log_file, sample_log(200))?;
    println!("  ✓ Log written to {}\n", log_file.display());

    // Run the pipeline against a local store instead of S3
    println!("Running pipeline...");
    let output_file = work_dir.join("report.md");
    let config = PipelineConfig {
        log_file: Some(log_file.clone()),
        output_file: output_file.clone(),
        aws_region: "us-east-1".to_string(),
        bucket_name: "ci-artifacts".to_string(),
        base_branch: "main".to_string(),
        pr_number: 42,
        head_sha: "abc123def4567890".to_string(),
        origin_repository: "example/training".to_string(),
    };
    let store = LocalDirStore {
        root: work_dir.join("bucket"),
    };

    let summary = pipeline::run(&config, &store)?;
    println!("  ✓ Points plotted: {}", summary.points);
    println!("  ✓ Published URL (would-be): {}\n", summary.graph_url);

    // The report embeds the URL the real store would publish under
    println!("Report content:");
    for line in fs::read_to_string(&output_file)?.lines() {
        println!("  | {line}");
    }
    println!();

    println!("=== Store Seam ===");
    println!("✓ Same pipeline, local directory instead of S3");
    println!("✓ Deterministic key: pulls/<branch>/<pr>/<sha>/loss-graph.png");
    println!("✓ Rerun with the same inputs overwrites the same key\n");

    fs::remove_dir_all(&work_dir).ok();
    Ok(())
}

/// Build a plausible log: exponential loss decay, a checkpoint line every
/// tenth step.
fn sample_log(steps: usize) -> String {
    let mut log = String::new();

    for i in 0..steps {
        #[allow(clippy::cast_precision_loss)]
        let loss = 4.0 * (-0.02 * i as f64).exp() + 0.25;
        let record = serde_json::json!({ "step": i, "total_loss": loss });
        log.push_str(&record.to_string());
        log.push('\n');

        if i % 10 == 9 {
            let checkpoint = serde_json::json!({ "step": i, "checkpoint": format!("step-{i}") });
            log.push_str(&checkpoint.to_string());
            log.push('\n');
        }
    }

    log
}

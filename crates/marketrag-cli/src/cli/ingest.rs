//! `mrag ingest` -- split, embed, and insert a document.

use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use indicatif::{ProgressBar, ProgressStyle};

use marketrag_core::ingest::ingest_chunks;
use marketrag_infra::chunker::{split_document, ChunkParams};
use marketrag_infra::env::RetrieverConfig;
use marketrag_infra::factory::build_clients;

pub async fn run(
    path: &Path,
    chunk_size: usize,
    chunk_overlap: usize,
    json: bool,
    quiet: bool,
) -> anyhow::Result<()> {
    let config = RetrieverConfig::from_env()?;

    let text = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))?;

    let source = path.display().to_string();
    let chunks = split_document(
        &source,
        &text,
        ChunkParams {
            size: chunk_size,
            overlap: chunk_overlap,
        },
    )?;

    if chunks.is_empty() {
        if !quiet {
            println!("Nothing to ingest: {source} produced no chunks.");
        }
        return Ok(());
    }

    let spinner = if quiet || json {
        None
    } else {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .unwrap(),
        );
        spinner.set_message(format!(
            "Embedding and inserting {} chunks...",
            chunks.len()
        ));
        spinner.enable_steady_tick(Duration::from_millis(80));
        Some(spinner)
    };

    let (embedder, store) = build_clients(&config);
    let result = ingest_chunks(&embedder, &store, &chunks).await;

    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }
    let report = result?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if !quiet {
        println!(
            "Inserted {} chunks in {} batches from {}",
            report.chunks, report.batches, source
        );
    }

    Ok(())
}

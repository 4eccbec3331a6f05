//! `mrag query` -- retrieve the stored documents most relevant to a query.

use comfy_table::{presets, Cell, Color, ContentArrangement, Table};

use marketrag_infra::env::RetrieverConfig;
use marketrag_infra::factory::build_retriever;

pub async fn run(text: &str, top_k: Option<usize>, json: bool) -> anyhow::Result<()> {
    let config = RetrieverConfig::from_env()?;

    let mut retriever = build_retriever(&config);
    if let Some(k) = top_k {
        retriever = retriever.with_top_k(k);
    }

    let documents = retriever.retrieve(text).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&documents)?);
        return Ok(());
    }

    if documents.is_empty() {
        println!("No matching documents.");
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Score").fg(Color::White),
        Cell::new("Source").fg(Color::White),
        Cell::new("Content").fg(Color::White),
    ]);

    for doc in &documents {
        let source = doc
            .metadata
            .get("source")
            .and_then(|v| v.as_str())
            .unwrap_or("-")
            .to_string();

        table.add_row(vec![
            Cell::new(format!("{:.3}", doc.similarity)).fg(Color::Cyan),
            Cell::new(source),
            Cell::new(excerpt(&doc.content, 120)),
        ]);
    }

    println!("{table}");
    Ok(())
}

/// Collapse whitespace and cap the content column at `max_chars`.
fn excerpt(content: &str, max_chars: usize) -> String {
    let flat = content.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= max_chars {
        return flat;
    }
    let cut: String = flat.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{cut}...")
}

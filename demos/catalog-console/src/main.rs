// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Catalog Console Demo
//!
//! Drives a `CatalogView` over an in-memory catalog seeded from JSON:
//! - category selection and debounced search
//! - add / update / delete / refresh flowing through both views
//! - a failing category source stopping only the category view
//!
//! Set `RUST_LOG=vireo_catalog=debug` to watch the engine's own logging.

mod render;

use anyhow::{Context, Result};
use futures::{Stream, StreamExt};
use serde::Deserialize;
use std::time::Duration;
use tokio::time::timeout;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use vireo_catalog::{
    CatalogConfig, CatalogView, Category, CategoryFilter, InMemoryCatalog, Record,
};

const SEED: &str = include_str!("../data/catalog.json");

/// Longest wait for a view to react to a step. Covers the search debounce.
const SETTLE: Duration = Duration::from_millis(500);

#[derive(Deserialize)]
struct Seed {
    #[serde(default)]
    config: CatalogConfig,
    records: Vec<Record>,
    categories: Vec<Category>,
}

fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().compact())
        .init();
}

/// Next item of `stream`, or `None` if nothing arrived in time or it ended.
async fn settle<S>(stream: &mut S) -> Option<S::Item>
where
    S: Stream + Unpin,
{
    timeout(SETTLE, stream.next()).await.ok().flatten()
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    init_tracing();
    println!("🚀 Catalog Console Demo Starting...\n");

    let seed: Seed = serde_json::from_str(SEED).context("parsing seed catalog")?;
    let source = InMemoryCatalog::new(seed.records, seed.categories);
    let catalog = CatalogView::with_config(source, seed.config);

    let mut view = catalog.view();
    let mut results = catalog.search_view();
    let mut errors = catalog.errors();

    println!("▶ Initial view (selection: {})", catalog.current_filter());
    if let Some(current) = settle(&mut view).await {
        render::view(&current);
    }

    println!("\n▶ Select category \"5\"");
    catalog.select_category("5".parse()?);
    if let Some(current) = settle(&mut view).await {
        render::view(&current);
    }

    println!("\n▶ Type \"w\", \"wi\", \"wid\" (one search after the debounce)");
    for query in ["w", "wi", "wid"] {
        catalog.search(query);
    }
    if let Some(result) = settle(&mut results).await {
        render::search(&result);
    }

    println!("\n▶ Add a record");
    catalog.add_record();
    if let Some(current) = settle(&mut view).await {
        render::view(&current);
    }
    let _ = settle(&mut results).await;

    println!("\n▶ Move the new record to Tools and rename it");
    let added = catalog
        .source()
        .snapshot()
        .into_iter()
        .max_by_key(|record| record.id)
        .context("catalog is empty")?;
    catalog.update_record(Record {
        name: "Widget Mini".to_string(),
        category_id: Some(5),
        price_cents: 1299,
        ..added
    });
    if let Some(current) = settle(&mut view).await {
        render::view(&current);
    }
    if let Some(result) = settle(&mut results).await {
        render::search(&result);
    }

    println!("\n▶ Delete record #1");
    if let Some(widget) = catalog.source().snapshot().into_iter().find(|r| r.id == 1) {
        catalog.delete_record(widget);
    }
    if let Some(current) = settle(&mut view).await {
        render::view(&current);
    }
    let _ = settle(&mut results).await;

    println!("\n▶ Refresh");
    catalog.refresh();
    if let Some(current) = settle(&mut view).await {
        render::view(&current);
    }
    let _ = settle(&mut results).await;

    println!("\n▶ Clear the search");
    catalog.search("");
    if let Some(result) = settle(&mut results).await {
        render::search(&result);
    }

    println!("\n▶ Show everything again");
    catalog.select_category(CategoryFilter::All);
    if let Some(current) = settle(&mut view).await {
        render::view(&current);
    }

    println!("\n▶ Category source goes offline");
    catalog.source().fail_categories("category service unavailable");
    if let Some(notification) = settle(&mut errors).await {
        render::error(&notification);
    }
    match settle(&mut view).await {
        None => println!("  📋 View stopped, keeping the last one on screen"),
        Some(current) => render::view(&current),
    }

    println!("\n▶ Search still works: \"gad\"");
    catalog.search("gad");
    if let Some(result) = settle(&mut results).await {
        render::search(&result);
    }

    println!("\n✅ Demo complete (last query: {:?})", catalog.current_query());
    Ok(())
}

// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use vireo_catalog::{DerivedView, ErrorNotification, Record, SearchResult};

fn record_line(record: &Record, view: Option<&DerivedView>) -> String {
    let category = record
        .category_id
        .and_then(|id| view.and_then(|view| view.category_name(id)))
        .unwrap_or("-");
    format!(
        "    #{:<3} {:<14} {:<9} {:>8} {:>4} in stock  [{category}]",
        record.id,
        record.name,
        record.code,
        price(record.price_cents),
        record.quantity_in_stock,
    )
}

fn price(cents: u64) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}

pub fn view(view: &DerivedView) {
    let categories: Vec<&str> = view
        .categories
        .iter()
        .map(|category| category.name.as_str())
        .collect();
    println!("  📋 View ({} records, categories: {})", view.records.len(), categories.join(", "));
    for record in &view.records {
        println!("{}", record_line(record, Some(view)));
    }
}

pub fn search(result: &SearchResult) {
    match result {
        SearchResult::NotSearching => println!("  🔎 Not searching"),
        SearchResult::Results(records) if records.is_empty() => println!("  🔎 No matches"),
        SearchResult::Results(records) => {
            println!("  🔎 {} match(es)", records.len());
            for record in records {
                println!("{}", record_line(record, None));
            }
        }
    }
}

pub fn error(notification: &ErrorNotification) {
    println!("  ⚠️  {notification}");
}

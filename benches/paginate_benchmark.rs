//! Paging benchmarks on large in-memory collections.
//!
//! Run with: cargo bench

#![allow(missing_docs)] // criterion macros generate undocumented items

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pagewin::model::Record;
use pagewin::source::parse_records;
use pagewin::state::{ListView, PageState};
use pagewin::view_state::window::page_window;

const NUM_RECORDS: usize = 100_000;

fn generate_records() -> Vec<Record> {
    let content: String = (0..NUM_RECORDS)
        .map(|i| {
            let status = if i % 7 == 0 { "verified" } else { "pending" };
            format!(
                "{{\"id\":{},\"project\":\"offset-{:06}\",\"status\":\"{}\"}}\n",
                i, i, status
            )
        })
        .collect();
    parse_records(&content).expect("generated records parse")
}

fn bench_paginate(c: &mut Criterion) {
    let items: Vec<u64> = (0..NUM_RECORDS as u64).collect();
    let mut state = PageState::new(50).expect("valid page size");
    state.go_to_page(1_000);

    c.bench_function("paginate_100k_middle_page", |b| {
        b.iter(|| black_box(state.paginate(black_box(&items))))
    });
}

fn bench_window(c: &mut Criterion) {
    c.bench_function("page_window_2000_pages", |b| {
        b.iter(|| black_box(page_window(black_box(2_000), black_box(1_000), 5)))
    });
}

fn bench_filtered_view(c: &mut Criterion) {
    let records = generate_records();
    let mut view = ListView::new(20).expect("valid page size");
    view.set_field("status", "verified");
    view.set_query("offset-0");
    view.go_to_page(3);

    c.bench_function("filter_and_paginate_100k_records", |b| {
        b.iter(|| black_box(view.visible(black_box(&records)).total_items()))
    });
}

criterion_group!(benches, bench_paginate, bench_window, bench_filtered_view);
criterion_main!(benches);

//! Benchmarks for graph construction and PageRank iteration.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use linkrank::{build_graph_parallel, CsrGraph, GraphBuilder, Page, StandardPageRank};

/// A synthetic crawl: every page links to a handful of pseudo-random pages,
/// some outside the collection, and every 17th page is dangling.
fn synthetic_crawl(n: usize) -> Vec<Page> {
    (0..n)
        .map(|i| {
            let links: Vec<String> = if i % 17 == 0 {
                Vec::new()
            } else {
                (1..=6)
                    .map(|k| format!("https://site.example/{}", (i * 31 + k * 97) % (n + n / 10)))
                    .collect()
            };
            Page::with_links(format!("https://site.example/{i}"), links)
        })
        .collect()
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("graph_build");
    for &n in &[1_000usize, 10_000] {
        let pages = synthetic_crawl(n);
        group.bench_with_input(BenchmarkId::new("sequential", n), &pages, |b, pages| {
            b.iter(|| GraphBuilder::from_pages(black_box(pages)))
        });
        group.bench_with_input(BenchmarkId::new("parallel", n), &pages, |b, pages| {
            b.iter(|| build_graph_parallel(black_box(pages)))
        });
    }
    group.finish();
}

fn bench_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("pagerank");
    let solver = StandardPageRank::new();
    for &n in &[1_000usize, 10_000] {
        let graph = CsrGraph::from_builder(&GraphBuilder::from_pages(&synthetic_crawl(n)));
        group.bench_with_input(BenchmarkId::new("sequential", n), &graph, |b, graph| {
            b.iter(|| solver.run(black_box(graph)))
        });
        group.bench_with_input(BenchmarkId::new("parallel", n), &graph, |b, graph| {
            b.iter(|| solver.run_parallel(black_box(graph)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_build, bench_solve);
criterion_main!(benches);

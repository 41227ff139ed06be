//! Match engine benchmarks.
//!
//! Measures search, page resolution and CSV export over synthetic paginated
//! documents of increasing size.
//!
//! Run with: cargo bench --bench match_engine_performance

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use doc_matcher::export::CsvExporter;
use doc_matcher::search::{page_sentinel, MatchEngine, PageMap};

const WORDS: &[&str] = &[
    "revenue", "growth", "quarter", "risk", "contract", "liability", "the", "and", "of",
    "payment", "schedule", "Agreement", "party", "notice", "term", "Section", "müller",
];

/// Page counts to benchmark
const PAGE_COUNTS: &[usize] = &[10, 100, 500];

const WORDS_PER_PAGE: usize = 400;

/// Deterministic paginated document, shaped like PDF extraction output.
fn build_document(pages: usize) -> String {
    let mut text = String::new();
    let mut seed = 17usize;
    for page in 1..=pages {
        text.push_str(&page_sentinel(page));
        text.push('\n');
        for i in 0..WORDS_PER_PAGE {
            seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            text.push_str(WORDS[(seed >> 16) % WORDS.len()]);
            text.push(if i % 12 == 11 { '\n' } else { ' ' });
        }
    }
    text
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    let engine = MatchEngine::default();

    for &pages in PAGE_COUNTS {
        let text = build_document(pages);
        group.throughput(Throughput::Bytes(text.len() as u64));

        group.bench_with_input(BenchmarkId::new("single_term", pages), &text, |b, text| {
            b.iter(|| engine.search(black_box(&["liability"]), black_box(text)))
        });

        group.bench_with_input(BenchmarkId::new("many_terms", pages), &text, |b, text| {
            let inputs = ["revenue growth", "risk", "payment schedule notice", "MÜLLER"];
            b.iter(|| engine.search(black_box(&inputs), black_box(text)))
        });

        // Common short term: dominated by context and page lookups
        group.bench_with_input(BenchmarkId::new("dense_term", pages), &text, |b, text| {
            b.iter(|| engine.search(black_box(&["the"]), black_box(text)))
        });
    }

    group.finish();
}

fn bench_pages(c: &mut Criterion) {
    let mut group = c.benchmark_group("pages");

    for &pages in PAGE_COUNTS {
        let text = build_document(pages);
        group.bench_with_input(BenchmarkId::new("build", pages), &text, |b, text| {
            b.iter(|| PageMap::build(black_box(text)))
        });

        let map = PageMap::build(&text);
        let len = text.chars().count();
        group.bench_with_input(BenchmarkId::new("resolve_1000", pages), &len, |b, &len| {
            b.iter(|| {
                (0..1000)
                    .map(|i| map.resolve(black_box(i * len / 1000)))
                    .sum::<usize>()
            })
        });
    }

    group.finish();
}

fn bench_export(c: &mut Criterion) {
    let engine = MatchEngine::default();
    let text = build_document(100);
    let records = engine.search(&["revenue risk"], &text);
    let exporter = CsvExporter::new();

    c.bench_function("export_csv", |b| {
        b.iter(|| exporter.export(black_box(&records), "bench.pdf"))
    });
}

criterion_group!(benches, bench_search, bench_pages, bench_export);
criterion_main!(benches);

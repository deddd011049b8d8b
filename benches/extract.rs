use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use matchcentre_ingest::normalize::normalize_match;
use matchcentre_ingest::payload::locate_match_centre;

fn bench_locate_payload(c: &mut Criterion) {
    c.bench_function("locate_payload", |b| {
        b.iter(|| {
            let raw = locate_match_centre(black_box(MATCH_PAGE_HTML)).unwrap();
            black_box(raw.len());
        })
    });
}

fn bench_normalize_match(c: &mut Criterion) {
    c.bench_function("normalize_match", |b| {
        b.iter(|| {
            let normalized =
                normalize_match(black_box(MATCH_CENTRE_JSON), 1821372, "La Liga").unwrap();
            black_box(normalized.players.len());
        })
    });
}

fn bench_locate_and_normalize(c: &mut Criterion) {
    c.bench_function("locate_and_normalize", |b| {
        b.iter(|| {
            let raw = locate_match_centre(black_box(MATCH_PAGE_HTML)).unwrap();
            let normalized = normalize_match(&raw, 1821372, "La Liga").unwrap();
            black_box(normalized.events.len());
        })
    });
}

criterion_group!(
    extract,
    bench_locate_payload,
    bench_normalize_match,
    bench_locate_and_normalize
);
criterion_main!(extract);

static MATCH_PAGE_HTML: &str = include_str!("../tests/fixtures/match_page.html");
static MATCH_CENTRE_JSON: &str = include_str!("../tests/fixtures/match_centre.json");

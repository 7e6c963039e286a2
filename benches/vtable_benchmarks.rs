//! Criterion benchmarks for vtable extraction.
//!
//! Run with: `cargo bench`
//!
//! Headers are synthetic so results are reproducible across machines and do
//! not depend on an installed Windows SDK.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use vtfind::vtable::{DeclarationPatterns, MethodScanner};
use vtfind::{find_vtable, line_at, GrammarKind};

// ─── Helpers ─────────────────────────────────────────────────────────

/// Declarative header with `depth` interfaces, each deriving from the previous one.
fn build_chain_header(depth: usize, methods_per_interface: usize) -> String {
    let mut text = String::from("#pragma once\n\n");
    for level in 0..depth {
        let base = if level == 0 { "IUnknown".to_string() } else { format!("IBench{}", level - 1) };
        text.push_str(&format!(
            "interface DX_DECLARE_INTERFACE(\"00000000-0000-0000-0000-{:012x}\") IBench{} : public {}\n{{\n",
            level, level, base
        ));
        for m in 0..methods_per_interface {
            text.push_str(&format!(
                "    STDMETHOD_(HRESULT, Level{}Method{})(\n        _In_ UINT32 value\n        ) PURE;\n\n",
                level, m
            ));
        }
        text.push_str(&format!("}}; // interface IBench{}\n\n", level));
    }
    text
}

// ─── Locator / scanner ───────────────────────────────────────────────

fn bench_locate(c: &mut Criterion) {
    let mut group = c.benchmark_group("locate");

    for &depth in &[10, 100, 500] {
        let text = build_chain_header(depth, 10);
        let last = format!("IBench{}", depth - 1);
        let patterns = DeclarationPatterns::for_interface(&last).unwrap();

        group.bench_with_input(BenchmarkId::new("last_declaration", depth), &text, |b, text| {
            b.iter(|| black_box(patterns.locate(black_box(text))))
        });
    }

    let text = build_chain_header(100, 10);
    let any = DeclarationPatterns::any().unwrap();
    group.bench_function("locate_all_100", |b| {
        b.iter(|| black_box(any.locate_all(black_box(&text))))
    });

    group.finish();
}

fn bench_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan");

    for &methods in &[10, 100, 1_000] {
        let text = build_chain_header(1, methods);
        let scanner = MethodScanner::new(GrammarKind::Declarative, "IBench0").unwrap();
        group.bench_with_input(BenchmarkId::new("declarative_methods", methods), &text, |b, text| {
            b.iter(|| black_box(scanner.scan(black_box(text), 0)))
        });
    }

    let text = build_chain_header(1, 1_000);
    group.bench_function("line_at_end_of_file", |b| {
        b.iter(|| line_at(black_box(&text), text.len()))
    });

    group.finish();
}

// ─── End-to-end ──────────────────────────────────────────────────────

fn bench_find_vtable(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_vtable");
    let tmp = tempfile::tempdir().unwrap();

    for &depth in &[1, 8, 32] {
        let path = tmp.path().join(format!("chain_{}.h", depth));
        std::fs::write(&path, build_chain_header(depth, 8)).unwrap();
        let pattern = path.to_string_lossy().into_owned();
        let name = format!("IBench{}", depth - 1);

        group.bench_with_input(BenchmarkId::new("inheritance_depth", depth), &pattern, |b, pattern| {
            b.iter(|| find_vtable(black_box(&name), pattern, false, None).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_locate, bench_scan, bench_find_vtable);
criterion_main!(benches);

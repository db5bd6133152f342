use assetgraph_core::vocab::{
    EX_APPLICATION, EX_CVE_ID, EX_CVSS_SEVERITY, EX_DEPENDS_ON, EX_HAS_VULNERABILITY, EX_LIBRARY, EX_VULNERABILITY,
    FIBO_HAS_MEMBER, FIBO_LEGAL_ENTITY, RDF_TYPE,
};
use assetgraph_core::{GraphStore, Triple};
use assetgraph_view::{analyze, project, Severity, SeverityFilter, ViewConfig};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

const SEVERITIES: [&str; 4] = ["Critical", "High", "Medium", "Low"];

/// Synthetic inventory: one organization per ten applications, three libraries per application
fn generate_inventory(applications: usize) -> GraphStore {
    let mut store = GraphStore::new();

    for a in 0..applications {
        let org = format!("http://example.org/org{}", a / 10);
        let app = format!("http://example.org/app{}", a);
        store.add_triple(Triple::link(&org, RDF_TYPE, FIBO_LEGAL_ENTITY));
        store.add_triple(Triple::link(&org, FIBO_HAS_MEMBER, &app));
        store.add_triple(Triple::link(&app, RDF_TYPE, EX_APPLICATION));

        for l in 0..3 {
            let lib = format!("http://example.org/lib{}", (a * 3 + l) % (applications + 1));
            let cve = format!("http://example.org/cve{}", (a + l) % 50);
            store.add_triple(Triple::link(&app, EX_DEPENDS_ON, &lib));
            store.add_triple(Triple::link(&lib, RDF_TYPE, EX_LIBRARY));
            store.add_triple(Triple::link(&lib, EX_HAS_VULNERABILITY, &cve));
            store.add_triple(Triple::link(&cve, RDF_TYPE, EX_VULNERABILITY));
            store.add_triple(Triple::attribute(&cve, EX_CVSS_SEVERITY, SEVERITIES[(a + l) % 4]));
            store.add_triple(Triple::attribute(&cve, EX_CVE_ID, &format!("CVE-2024-{:04}", (a + l) % 50)));
        }
    }

    store
}

fn benchmark_projection(c: &mut Criterion) {
    let mut group = c.benchmark_group("projection");

    for size in [10, 100, 500] {
        let store = generate_inventory(size);

        group.bench_with_input(BenchmarkId::new("unfiltered", size), &store, |b, store| {
            b.iter(|| black_box(project(store, SeverityFilter::All, &ViewConfig::default())));
        });

        group.bench_with_input(BenchmarkId::new("high_only", size), &store, |b, store| {
            b.iter(|| black_box(project(store, SeverityFilter::Only(Severity::High), &ViewConfig::default())));
        });
    }

    group.finish();
}

fn benchmark_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("analysis");

    for size in [10, 100, 500] {
        let store = generate_inventory(size);
        group.bench_with_input(BenchmarkId::new("rollup", size), &store, |b, store| {
            b.iter(|| black_box(analyze(store, SeverityFilter::All)));
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_projection, benchmark_analysis);
criterion_main!(benches);

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pagesmith_compiler_html::{compile_to_html, ExportOptions};
use pagesmith_editor::templates::landing_page;
use pagesmith_editor::{create, Node};

fn export_landing_page(c: &mut Criterion) {
    let root = landing_page();
    let options = ExportOptions::default();

    c.bench_function("export_landing_page", |b| {
        b.iter(|| compile_to_html(black_box(&root), &options).unwrap())
    });
}

fn export_large_page(c: &mut Criterion) {
    let mut root = Node::root();
    for kind in ["navbar", "hero", "featureGrid", "pricing", "faq", "testimonials", "footer"]
        .iter()
        .cycle()
        .take(70)
    {
        root.children.push(create(kind));
    }
    let options = ExportOptions {
        pretty: false,
        ..ExportOptions::default()
    };

    c.bench_function("export_seventy_blocks_compact", |b| {
        b.iter(|| compile_to_html(black_box(&root), &options).unwrap())
    });
}

criterion_group!(benches, export_landing_page, export_large_page);
criterion_main!(benches);

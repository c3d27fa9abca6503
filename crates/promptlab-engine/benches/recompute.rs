use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use promptlab_engine::{
    DecorationEngine, DecorationOptions, DocSnapshot, EditorSession, editing::Cmd,
};
mod common;

fn bench_full_recompute(c: &mut Criterion) {
    let mut group = c.benchmark_group("recompute");
    group.sample_size(10);

    let engine = DecorationEngine::default();
    for size in [1, 10, 100] {
        let doc = DocSnapshot::new(common::generate_prompt_template(size));
        group.bench_with_input(BenchmarkId::new("template", size), &doc, |b, doc| {
            b.iter(|| engine.recompute(std::hint::black_box(doc)));
        });
    }

    let nested = DocSnapshot::new(common::generate_nested_lists(50, 4));
    group.bench_function("nested_lists", |b| {
        b.iter(|| engine.recompute(std::hint::black_box(&nested)));
    });

    group.finish();
}

fn bench_keystroke(c: &mut Criterion) {
    let mut group = c.benchmark_group("keystroke");
    group.sample_size(10);

    let content = common::generate_prompt_template(50);
    group.bench_function("insert_char", |b| {
        b.iter_batched(
            || EditorSession::new(&content, DecorationOptions::default()),
            |mut session| {
                session
                    .edit(Cmd::InsertText {
                        at: 2,
                        text: "x".to_string(),
                    })
                    .unwrap();
                session
            },
            criterion::BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_full_recompute, bench_keystroke);
criterion_main!(benches);

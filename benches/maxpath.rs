use criterion::{black_box, criterion_group, criterion_main, Criterion};

use hpotrace::{maxpath, query, Ontology};

/// Builds a synthetic ontology of `width` chains with `depth` terms each
fn synthetic_obo(depth: u32, width: u32) -> String {
    let mut data = String::from("[Term]\nid: HP:0000001\nname: All\n\n");
    let mut next_id = 2u32;
    for _ in 0..width {
        let mut parent = 1u32;
        for _ in 0..depth {
            data.push_str(&format!(
                "[Term]\nid: HP:{next_id:07}\nname: synthetic\nis_a: HP:{parent:07} ! synthetic\n\n"
            ));
            parent = next_id;
            next_id += 1;
        }
    }
    data
}

fn parse_benchmark(c: &mut Criterion) {
    let data = synthetic_obo(20, 500);

    c.bench_function("parse 10_000 terms", |b| {
        b.iter(|| Ontology::from_obo_data(black_box(&data)).unwrap())
    });
}

fn maxpath_benchmark(c: &mut Criterion) {
    let ontology = Ontology::from_obo_data(&synthetic_obo(20, 500)).unwrap();

    c.bench_function("longest paths 10_000 terms", |b| {
        b.iter(|| maxpath::longest_paths(black_box(&ontology)))
    });
}

fn query_benchmark(c: &mut Criterion) {
    let ontology = Ontology::from_obo_data(&synthetic_obo(20, 500)).unwrap();

    c.bench_function("resolve 1_000 queries", |b| {
        b.iter(|| {
            let mut sink = Vec::new();
            let lines = (1..1_000).map(|id| format!("HP:HP:{id:07}"));
            query::process(black_box(&ontology), lines, &mut sink).unwrap();
            sink
        })
    });
}

criterion_group!(benches, parse_benchmark, maxpath_benchmark, query_benchmark);
criterion_main!(benches);

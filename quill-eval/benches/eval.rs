use criterion::{criterion_group, criterion_main, Criterion};
use quill_eval::eval;
use quill_parser::parse;

fn arithmetic(c: &mut Criterion) {
    let mut source = "1".to_string();
    for _i in 0..1000 {
        source.push_str(" + 2 * 3 ** 2 / 4");
    }
    let ast = parse(&source);
    c.bench_function("arithmetic", |b| b.iter(|| eval(&ast)));
}

fn nested_calls(c: &mut Criterion) {
    let source = "let inc = (x) => x + 1
let twice = (f, x) => f(f(x))
let quad = (x) => twice(inc, twice(inc, x))
quad(quad(quad(quad(0))))";
    let ast = parse(source);
    c.bench_function("nested-calls", |b| b.iter(|| eval(&ast)));
}

criterion_group!(benches, arithmetic, nested_calls);
criterion_main!(benches);

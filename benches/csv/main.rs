mod csv_nom;
mod csv_pegchain;

use criterion::{black_box, criterion_group, Criterion};
use csv_nom::nom_parser;
use csv_pegchain::pegchain_parser;
use log::trace;

const CSV: &str = "1, 2.5, 'alpha'
-17,'a, b' ,  3.125, 8.
42,43,44,45,46,47,48,49
'last'
";

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<Value>),
}

pub fn bench_nom(c: &mut Criterion) {
    c.bench_function("csv_nom", |b| b.iter(|| nom_parser(black_box(CSV))));
}

pub fn bench_pegchain(c: &mut Criterion) {
    let parser = csv_pegchain::grammar();
    c.bench_function("csv_pegchain", |b| {
        b.iter(|| pegchain_parser(&parser, black_box(CSV)))
    });
}

criterion_group!(benches, bench_nom, bench_pegchain);

fn main() {
    env_logger::init();
    trace!(target:"pc", "Logging enabled");
    assert_eq!(nom_parser(CSV), pegchain_parser(&csv_pegchain::grammar(), CSV));
    benches();
    Criterion::default().configure_from_args().final_summary();
}

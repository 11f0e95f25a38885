// benches/parse.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use dq_wiki::{config::options::IndexOptions, csv::CsvDocument, encounter};

/// The bundled DQ2 sheet repeated until it is a few thousand rows.
fn load_sample() -> String {
    let sheet = include_str!("../data/dq2_boss_multiunit.csv");
    let (header, body) = sheet.split_once('\n').unwrap_or((sheet, ""));
    let mut text = format!("{header}\n");
    for i in 0..500 {
        for line in body.lines() {
            // Distinct boss names per copy so grouping has work to do.
            match line.split_once(',') {
                Some((boss, rest)) => text.push_str(&format!("{boss}{i},{rest}\n")),
                None => text.push_str(&format!("{line}\n")),
            }
        }
    }
    text
}

fn bench_parse(c: &mut Criterion) {
    let text = load_sample();
    let opts = IndexOptions::default();

    c.bench_function("csv_parse", |b| {
        b.iter(|| {
            let doc = CsvDocument::parse(black_box(&text));
            black_box(doc.row_count())
        })
    });

    let doc = CsvDocument::parse(&text);
    c.bench_function("encounter_group", |b| {
        b.iter(|| black_box(encounter::group(black_box(&doc), "DQ2", &opts).len()))
    });
    c.bench_function("encounter_build", |b| {
        b.iter(|| black_box(encounter::build(black_box(&doc), "DQ2", &opts).len()))
    });
}

criterion_group!(benches, bench_parse);
criterion_main!(benches);

#![allow(missing_docs)]
//! Benchmarks for the fennica decoder.
//!
//! Measures decoding a typical catalog record, the edition and name
//! sub-parsers, and the classifier, using Criterion.rs for statistical
//! analysis.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fennica::{classify, decode_record, edition, person, RawField};

/// A representative record: fixed field, identifiers, classification,
/// people, title, imprint, physical description, series and subjects.
fn typical_record() -> Vec<RawField> {
    vec![
        RawField::control("008", &format!("      s1987{}fin|", " ".repeat(24))),
        RawField::builder("020", "  ")
            .subfield('a', "951-0-12345-6")
            .subfield('q', "sid.")
            .build(),
        RawField::builder("041", "0 ").subfield('a', "fin").build(),
        RawField::builder("080", "  ").subfield('a', "894.541").build(),
        RawField::builder("084", "  ")
            .subfield('a', "84.2")
            .subfield('2', "ykl")
            .build(),
        RawField::builder("100", "1 ")
            .subfield('a', "Kivi, Aleksis.")
            .subfield('d', "1834-1872.")
            .build(),
        RawField::builder("245", "10")
            .subfield('a', "Seitsemän veljestä :")
            .subfield('b', "kertomus /")
            .subfield('c', "Aleksis Kivi.")
            .build(),
        RawField::builder("250", "  ").subfield('a', "3.-5. p. 1990").build(),
        RawField::builder("260", "  ")
            .subfield('a', "Porvoo :")
            .subfield('b', "WSOY,")
            .subfield('c', "1987.")
            .build(),
        RawField::builder("300", "  ")
            .subfield('a', "335 s. :")
            .subfield('b', "kuv. ;")
            .subfield('c', "21 cm")
            .build(),
        RawField::builder("490", "0 ")
            .subfield('a', "Kariston klassikot ;")
            .subfield('v', "12.")
            .build(),
        RawField::builder("650", " 7")
            .subfield('a', "romaanit")
            .subfield('2', "ysa")
            .build(),
        RawField::builder("700", "1 ").subfield('a', "Jäntti, Lauri.").build(),
        RawField::builder("852", "  ")
            .subfield('a', "Kansalliskokoelma")
            .build(),
    ]
}

fn benchmark_decode_record(c: &mut Criterion) {
    let fields = black_box(typical_record());

    c.bench_function("decode_typical_record", |b| {
        b.iter(|| decode_record("000123456", &fields).expect("well-shaped fields"));
    });
}

fn benchmark_edition_parser(c: &mut Criterion) {
    c.bench_function("parse_edition_statement", |b| {
        b.iter(|| edition::parse_statement(black_box("3.-5. p. 1990")));
    });
}

fn benchmark_name_parser(c: &mut Criterion) {
    c.bench_function("parse_person_name", |b| {
        b.iter(|| person::parse_name(black_box("Kivi, Aleksis, kirjailija.")));
    });
}

fn benchmark_classifier(c: &mut Criterion) {
    let tags = ["008", "245", "500", "700", "776", "852", "999", "123"];

    c.bench_function("classify_tags", |b| {
        b.iter(|| {
            tags.iter()
                .map(|tag| classify(black_box(tag)))
                .collect::<Vec<_>>()
        });
    });
}

criterion_group!(
    benches,
    benchmark_decode_record,
    benchmark_edition_parser,
    benchmark_name_parser,
    benchmark_classifier
);
criterion_main!(benches);

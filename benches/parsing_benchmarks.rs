use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use locale_address::{Address, AddressFormat, AddressFormatter, AddressParser};

fn bench_address_parsing(c: &mut Criterion) {
    let us = AddressParser::for_locale("en-US");
    c.bench_function("parse_single_line", |b| {
        b.iter(|| us.parse(black_box("950 W Maude Ave., Sunnyvale CA 94085 USA")))
    });

    let mx = AddressParser::for_locale("es-MX");
    c.bench_function("parse_multi_line", |b| {
        b.iter(|| mx.parse(black_box("Vicente Guerrero S/N, Centro\nC.P 23450 Cabo San Lucas, BCS\nMéxico")))
    });

    let ja = AddressParser::for_locale("ja-JP");
    c.bench_function("parse_asian", |b| {
        b.iter(|| ja.parse(black_box("〒150-2345 東京都渋谷区本町2丁目4-7サニーマンション203")))
    });

    // Country detection falls through all three name tables
    c.bench_function("parse_foreign_country", |b| {
        b.iter(|| us.parse(black_box("Óók 16, 1187 XR s'Hertogen-bósch, Nederland")))
    });
}

fn bench_address_formatting(c: &mut Criterion) {
    let address = Address::builder()
        .street_address("5150 Spectrum Way")
        .locality("Mississauga")
        .region("Ontario")
        .postal_code("L4W 5G1")
        .country("Canada")
        .country_code("CA")
        .build();
    let formatter = AddressFormatter::for_locale("en-CA");
    c.bench_function("format_latin", |b| b.iter(|| formatter.format(black_box(&address))));

    let address = Address::builder()
        .street_address("本町2丁目4-7サニーマンション203")
        .locality("渋谷区")
        .region("東京都")
        .postal_code("〒150-2345")
        .country_code("JP")
        .format(AddressFormat::Asian)
        .build();
    let formatter = AddressFormatter::for_locale("ja-JP");
    c.bench_function("format_asian", |b| b.iter(|| formatter.format(black_box(&address))));
}

criterion_group!(benches, bench_address_parsing, bench_address_formatting);
criterion_main!(benches);

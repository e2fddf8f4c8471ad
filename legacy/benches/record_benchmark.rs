use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use nasr_legacy::{Family, Records};

fn padded(len: usize, values: &[(usize, &str)]) -> String {
    let mut line = vec![b' '; len];
    for (start, value) in values {
        line[*start..*start + value.len()].copy_from_slice(value.as_bytes());
    }
    String::from_utf8(line).expect("line should be ASCII")
}

fn airport() -> String {
    padded(
        1217,
        &[
            (0, "APT"),
            (3, "50009.*A"),
            (31, "10/03/2024"),
            (133, "TED STEVENS ANCHORAGE INTL"),
            (523, "61-10-27.0000N"),
            (550, "149-59-53.0000W"),
            (578, "  151.9"),
            (586, "15E"),
            (1210, "PANC"),
        ],
    )
}

fn runway() -> String {
    padded(
        1141,
        &[
            (0, "RWY"),
            (3, "50009.*A"),
            (16, "07L/25R"),
            (23, "10600"),
            (88, "61-09-59.8900N"),
            (280, "250L"),
            (559, "0.3DOWN"),
        ],
    )
}

/// Benchmark individual line parsing
fn bench_lines(c: &mut Criterion) {
    let apt = airport();
    let rwy = runway();

    c.bench_function("airport", |b| {
        b.iter(|| Family::Apt.parse_line(black_box(&apt), 1))
    });

    c.bench_function("runway", |b| {
        b.iter(|| Family::Apt.parse_line(black_box(&rwy), 1))
    });
}

/// Benchmark the driver over a synthetic APT file
fn bench_file(c: &mut Criterion) {
    let text = format!("{}\n", [airport(), runway(), runway()].join("\n")).repeat(1000);
    let mut group = c.benchmark_group("APT");

    group.throughput(Throughput::Bytes(text.len() as u64));
    group.bench_function("records", |b| {
        b.iter(|| black_box(Records::new(Family::Apt, &text).count()))
    });

    group.finish();
}

criterion_group!(benches, bench_lines, bench_file);
criterion_main!(benches);

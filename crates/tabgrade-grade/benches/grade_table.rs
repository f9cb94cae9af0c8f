use std::collections::BTreeMap;

use criterion::{criterion_group, criterion_main, Criterion};
use tabgrade_core::{Base, TableConfig};
use tabgrade_grade::{assess, grade_row};

fn fixture(rows: usize) -> (TableConfig, Vec<String>, BTreeMap<String, String>) {
    let cfg = TableConfig {
        name: "regs".into(),
        fixed_width: 8,
        ..TableConfig::for_base(Base::Hex)
    };
    let correct: Vec<String> = (0..rows)
        .map(|row| format!("0x{:08x}", (row as u32).wrapping_mul(0x0101_0101)))
        .collect();
    let submitted = correct
        .iter()
        .enumerate()
        .map(|(row, answer)| (cfg.cell_key(row), answer.to_uppercase()))
        .collect();
    (cfg, correct, submitted)
}

fn bench_grade(c: &mut Criterion) {
    let (cfg, correct, submitted) = fixture(64);

    c.bench_function("grade_row_hex_64", |b| {
        b.iter(|| {
            let _ = grade_row(&correct, &submitted, &cfg);
        })
    });

    c.bench_function("assess_hex_64", |b| {
        b.iter(|| {
            let _ = assess(&correct, &submitted, &cfg);
        })
    });
}

criterion_group!(benches, bench_grade);
criterion_main!(benches);

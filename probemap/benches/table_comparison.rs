use std::collections::HashMap;

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use probemap::{OpenAddressTable, TableConfig};
use rand::{Rng, distr::Alphanumeric};
use rustc_hash::{FxBuildHasher, FxHashMap};

/// Generates random alphanumeric keys paired with their index.
fn generate_data(size: usize) -> Vec<(String, u64)> {
    let mut rng = rand::rng();
    (0..size)
        .map(|i| {
            let key_len = rng.random_range(1..=25);
            let key: String = (&mut rng)
                .sample_iter(&Alphanumeric)
                .take(key_len)
                .map(char::from)
                .collect();
            (key, i as u64)
        })
        .collect()
}

fn benchmark_table_comparisons(c: &mut Criterion) {
    for &size in &[1_000, 100_000] {
        let mut group = c.benchmark_group(format!("size={size}"));
        let data = generate_data(size);

        // --- OpenAddressTable with djb2 ---
        group.bench_function("OpenAddressTable<Djb2> - set", |b| {
            b.iter_with_setup(OpenAddressTable::new, |mut table: OpenAddressTable<u64>| {
                for (k, v) in data.iter() {
                    table.set(black_box(k.as_str()), black_box(*v)).unwrap();
                }
            });
        });

        let mut table: OpenAddressTable<u64> = OpenAddressTable::new();
        for (k, v) in data.iter() {
            table.set(k, *v).unwrap();
        }
        group.bench_function("OpenAddressTable<Djb2> - get", |b| {
            b.iter(|| {
                for (k, _) in data.iter() {
                    black_box(table.get(black_box(k.as_str())).unwrap());
                }
            })
        });

        // --- OpenAddressTable with FxHash ---
        group.bench_function("OpenAddressTable<Fx> - set", |b| {
            b.iter_with_setup(
                || {
                    OpenAddressTable::with_config_and_hasher(TableConfig::default(), FxBuildHasher)
                        .unwrap()
                },
                |mut table: OpenAddressTable<u64, FxBuildHasher>| {
                    for (k, v) in data.iter() {
                        table.set(black_box(k.as_str()), black_box(*v)).unwrap();
                    }
                },
            );
        });

        // --- std HashMap ---
        group.bench_function("std HashMap - insert", |b| {
            b.iter_with_setup(HashMap::new, |mut map: HashMap<String, u64>| {
                for (k, v) in data.iter() {
                    map.insert(black_box(k.clone()), black_box(*v));
                }
            });
        });

        let std_map: HashMap<String, u64> = data.iter().cloned().collect();
        group.bench_function("std HashMap - get", |b| {
            b.iter(|| {
                for (k, _) in data.iter() {
                    black_box(std_map.get(black_box(k.as_str())));
                }
            })
        });

        // --- FxHashMap ---
        group.bench_function("FxHashMap - insert", |b| {
            b.iter_with_setup(FxHashMap::default, |mut map: FxHashMap<String, u64>| {
                for (k, v) in data.iter() {
                    map.insert(black_box(k.clone()), black_box(*v));
                }
            });
        });

        // --- delete / reinsert churn, exercises tombstones ---
        group.bench_function("OpenAddressTable<Djb2> - delete+set", |b| {
            b.iter_with_setup(
                || {
                    let mut table = OpenAddressTable::new();
                    for (k, v) in data.iter() {
                        table.set(k, *v).unwrap();
                    }
                    table
                },
                |mut table: OpenAddressTable<u64>| {
                    for (k, v) in data.iter().step_by(2) {
                        table.delete(black_box(k.as_str())).ok();
                        table.set(black_box(k.as_str()), black_box(*v)).unwrap();
                    }
                },
            );
        });
    }
}

criterion_group!(benches, benchmark_table_comparisons);
criterion_main!(benches);

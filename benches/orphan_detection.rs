//! Benchmarks for orphan detection
//!
//! Measures requester rechecks for a package with a wide dependency set,
//! where part of the set is shared with other installed packages.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pip_autoremove::oracle::MemoryOracle;
use pip_autoremove::remover::Uninstaller;

/// Build a database where `root` requires `width` packages and every third
/// one is also required by an unrelated package.
fn create_database(width: usize) -> (MemoryOracle, Vec<String>) {
    let deps: Vec<String> = (0..width).map(|i| format!("dep-{}", i)).collect();
    let dep_refs: Vec<&str> = deps.iter().map(String::as_str).collect();

    let oracle = MemoryOracle::new().with_package("root", &dep_refs);
    for (i, dep) in deps.iter().enumerate() {
        oracle.install(dep, &[]);
        if i % 3 == 0 {
            oracle.install(&format!("user-{}", i), &[dep.as_str()]);
        }
    }
    (oracle, deps)
}

fn bench_find_orphans(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_orphans");

    for width in [10, 100, 500] {
        let (oracle, deps) = create_database(width);
        let uninstaller = Uninstaller::new(&oracle, true);

        group.bench_with_input(BenchmarkId::from_parameter(width), &deps, |b, deps| {
            b.iter(|| {
                let orphans = uninstaller.find_orphans("root", black_box(deps)).unwrap();
                oracle.clear_commands();
                orphans
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_find_orphans);
criterion_main!(benches);

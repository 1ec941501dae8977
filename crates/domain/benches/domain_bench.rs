use criterion::{Criterion, criterion_group, criterion_main};
use domain::{Action, Dispatcher, EntityKind, scan, split_address};
use std::hint::black_box;

const PLACE_TOKENS: [&str; 9] = [
    "-n", "Home", "-a", "Baker", "221B", "-p", "NW1", "-c", "London",
];

fn bench_scan(c: &mut Criterion) {
    c.bench_function("domain/scan_place_flags", |b| {
        b.iter(|| scan(black_box(&PLACE_TOKENS)).unwrap());
    });

    c.bench_function("domain/split_address", |b| {
        b.iter(|| split_address(black_box("Baker Street 221B")));
    });
}

fn bench_add_vendors(c: &mut Criterion) {
    c.bench_function("domain/add_100_vendors", |b| {
        let names: Vec<String> = (0..100).map(|i| format!("vendor-{i:03}")).collect();
        b.iter(|| {
            let dispatcher = Dispatcher::in_memory();
            for name in &names {
                dispatcher
                    .dispatch(
                        EntityKind::Vendor,
                        &["-n", name.as_str(), "-s", "Water"],
                        Action::Add,
                    )
                    .unwrap();
            }
        });
    });
}

fn bench_show(c: &mut Criterion) {
    let dispatcher = Dispatcher::in_memory();
    for i in 0..500 {
        let name = format!("place-{i:03}");
        dispatcher
            .dispatch(
                EntityKind::Place,
                &["-n", name.as_str(), "-a", "Baker", "221B"],
                Action::Add,
            )
            .unwrap();
    }

    c.bench_function("domain/show_500_places", |b| {
        b.iter(|| {
            dispatcher
                .execute("place", &[], Action::Show)
                .unwrap()
                .unwrap()
        });
    });
}

criterion_group!(benches, bench_scan, bench_add_vendors, bench_show);
criterion_main!(benches);

use std::panic::{self, catch_unwind};

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rayon::prelude::*;

use resnare::Snare;

const ITER_C: u64 = 10_000;

fn dangerous_call(n: u64) -> u64 {
    if n % 5 == 0 {
        panic!("fault")
    } else {
        black_box(n)
    }
}

fn snare_ok_path() {
    let snare = Snare::new();

    (0..ITER_C).for_each(|i| {
        let _ = snare.call(move || black_box(i));
    });
}

fn snare_mixed() {
    let snare = Snare::new();

    (0..ITER_C).for_each(|i| {
        match snare.call(move || dangerous_call(i)) {
            Ok(_) => {}
            Err(_) => {}
        };
    });
}

fn catch_unwind_mixed() {
    (0..ITER_C).for_each(|i| {
        match catch_unwind(move || dangerous_call(i)) {
            Ok(_) => {}
            Err(_) => {}
        };
    });
}

fn snare_concurrent() {
    let snare = Snare::new();

    (0..ITER_C * num_cpus::get() as u64)
        .into_par_iter()
        .for_each(|i| {
            match snare.call(move || dangerous_call(i)) {
                Ok(_) => {}
                Err(_) => {}
            };
        });
}

fn criterion_benchmark(c: &mut Criterion) {
    // Unwinding ITER_C/5 times per sample floods stderr otherwise.
    panic::set_hook(Box::new(|_| {}));

    c.bench_function("snare_ok_path", |b| b.iter(|| snare_ok_path()));
    c.bench_function("snare_mixed", |b| b.iter(|| snare_mixed()));
    c.bench_function("catch_unwind_mixed", |b| b.iter(|| catch_unwind_mixed()));
    c.bench_function("snare_concurrent", |b| b.iter(|| snare_concurrent()));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

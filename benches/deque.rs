use chunked_deque::collections::chunked::ChunkedDeque;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use std::collections::VecDeque;

const COUNT: usize = 1_000;

fn bench_push(c: &mut Criterion) {
    {
        let mut group = c.benchmark_group("VecDeque vs ChunkedDeque (PushBack 1000)");
        group.bench_function("std::collections::VecDeque", |b| {
            b.iter(|| {
                let mut d = VecDeque::new();
                for i in 0..COUNT {
                    d.push_back(black_box(i as i32));
                }
                d
            })
        });

        group.bench_function("ChunkedDeque<i32>", |b| {
            b.iter(|| {
                let mut d: ChunkedDeque<i32> = ChunkedDeque::new();
                for i in 0..COUNT {
                    d.push_back(black_box(i as i32));
                }
                d
            })
        });

        group.bench_function("ChunkedDeque<i32, 64>", |b| {
            b.iter(|| {
                let mut d: ChunkedDeque<i32, 64> = ChunkedDeque::new();
                for i in 0..COUNT {
                    d.push_back(black_box(i as i32));
                }
                d
            })
        });
        group.finish();
    }

    {
        let mut group = c.benchmark_group("VecDeque vs ChunkedDeque (PushFront 1000)");
        group.bench_function("std::collections::VecDeque", |b| {
            b.iter(|| {
                let mut d = VecDeque::new();
                for i in 0..COUNT {
                    d.push_front(black_box(i as i32));
                }
                d
            })
        });

        group.bench_function("ChunkedDeque<i32>", |b| {
            b.iter(|| {
                let mut d: ChunkedDeque<i32> = ChunkedDeque::new();
                for i in 0..COUNT {
                    d.push_front(black_box(i as i32));
                }
                d
            })
        });
        group.finish();
    }
}

fn bench_access(c: &mut Criterion) {
    let d_std: VecDeque<i32> = (0..COUNT as i32).collect();
    let d_chunked: ChunkedDeque<i32> = (0..COUNT as i32).collect();

    {
        let mut group = c.benchmark_group("VecDeque vs ChunkedDeque (Get 1000)");
        group.bench_function("std::collections::VecDeque", |b| {
            b.iter(|| {
                for i in 0..COUNT {
                    black_box(d_std.get(black_box(i)));
                }
            })
        });

        group.bench_function("ChunkedDeque<i32>", |b| {
            b.iter(|| {
                for i in 0..COUNT {
                    black_box(d_chunked.get(black_box(i)));
                }
            })
        });
        group.finish();
    }

    {
        let mut group = c.benchmark_group("VecDeque vs ChunkedDeque (Find last)");
        group.bench_function("std::collections::VecDeque", |b| {
            b.iter(|| d_std.iter().position(|item| *item == black_box(COUNT as i32 - 1)))
        });

        group.bench_function("ChunkedDeque<i32>", |b| {
            b.iter(|| d_chunked.find(&black_box(COUNT as i32 - 1)))
        });
        group.finish();
    }
}

criterion_group!(benches, bench_push, bench_access);
criterion_main!(benches);

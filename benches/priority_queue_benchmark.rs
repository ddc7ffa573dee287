use criterion::{black_box, criterion_group, criterion_main, Criterion};
use multigraph::PriorityQueue;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

fn bench_priority_queue(c: &mut Criterion) {
    let mut group = c.benchmark_group("priority_queue");

    group.bench_function("std_binary_heap_push", |b| {
        b.iter(|| {
            let mut heap = BinaryHeap::new();
            for i in 0..1000u32 {
                heap.push(Reverse((black_box(i.wrapping_mul(2_654_435_761)), i)));
            }
        });
    });

    group.bench_function("priority_queue_enqueue", |b| {
        b.iter(|| {
            let mut queue = PriorityQueue::new();
            for i in 0..1000u32 {
                queue.enqueue(i, black_box(i.wrapping_mul(2_654_435_761)));
            }
        });
    });

    group.bench_function("std_binary_heap_push_pop", |b| {
        b.iter(|| {
            let mut heap = BinaryHeap::new();
            for i in 0..1000u32 {
                heap.push(Reverse((i.wrapping_mul(2_654_435_761), i)));
            }
            while let Some(x) = heap.pop() {
                black_box(x);
            }
        });
    });

    group.bench_function("priority_queue_enqueue_dequeue", |b| {
        b.iter(|| {
            let mut queue = PriorityQueue::new();
            for i in 0..1000u32 {
                queue.enqueue(i, i.wrapping_mul(2_654_435_761));
            }
            while let Ok(x) = queue.dequeue() {
                black_box(x);
            }
        });
    });

    // Decrease-key has no std counterpart; this is the Dijkstra relaxation pattern.
    group.bench_function("priority_queue_update", |b| {
        b.iter(|| {
            let mut queue = PriorityQueue::new();
            for i in 0..1000u32 {
                queue.enqueue(i, u32::MAX - i);
            }
            for i in (0..1000u32).step_by(3) {
                queue.update(&i, black_box(i)).unwrap();
            }
            black_box(queue.peek().copied())
        });
    });

    group.finish();
}

criterion_group!(benches, bench_priority_queue);
criterion_main!(benches);

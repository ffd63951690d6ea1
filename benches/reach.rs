use criterion::{Criterion, criterion_group, criterion_main};

use vargraph_reduce::reach::compute_reach;
use vargraph_reduce::slot::{Slot, VariantSet};

fn slot_at(pos: u64) -> Slot {
    Slot {
        pos,
        count: 1,
        snp_count: 1,
        max_ins: 0,
        max_del: 0,
        snp_present: true,
        penalty: 0,
        reach: 0,
        retained: false,
    }
}

/// A chromosome-scale slot sequence with a deletion shortcut roughly every
/// 200 positions, representative of real variant density.
fn synthetic_chromosome(n: u64) -> (Vec<Slot>, VariantSet) {
    let slots: Vec<Slot> = (1..=n).map(slot_at).collect();
    let mut indel_pos = Vec::new();
    let mut indel_len = Vec::new();
    let mut pos = 200;
    while pos < n {
        indel_pos.push(pos);
        indel_len.push(-50i64);
        pos += 200;
    }
    let variants = VariantSet {
        indel_pos,
        indel_len,
        snp_pos: Vec::new(),
        snp_count: Vec::new(),
    };
    (slots, variants)
}

fn bench_compute_reach(c: &mut Criterion) {
    let (slots, variants) = synthetic_chromosome(50_000);
    c.bench_function("compute_reach/50k/alpha=100", |b| {
        b.iter(|| compute_reach(&slots, &variants, 100).unwrap())
    });
}

criterion_group!(benches, bench_compute_reach);
criterion_main!(benches);

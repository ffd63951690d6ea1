//! Greedy Optimizer (component E, §4.E).

use crate::slot::Slot;

/// Single left-to-right pass using a cumulative-penalty prefix; decides
/// retain/drop under the δ-per-window budget. Works for any mix of SNP,
/// insertion and deletion slots, given `reach` has already been filled in.
pub fn greedy_sweep(slots: &mut [Slot], delta: u64) {
    let n = slots.len();
    if n == 0 {
        return;
    }
    let positions: Vec<u64> = slots.iter().map(|s| s.pos).collect();
    let mut cum = vec![0u64; n + 1];

    for i in 0..n {
        let lo = positions.partition_point(|&p| p <= slots[i].reach);
        let inflight = cum[i] - cum[lo];
        let pen = slots[i].penalty;

        if inflight + pen <= delta {
            slots[i].retained = false;
            cum[i + 1] = cum[i] + pen;
        } else {
            slots[i].retained = true;
            cum[i + 1] = cum[i];
        }
    }
}

/// Specialised O(n) two-pointer event sweep for pure-SNP input (penalty = 1
/// at every slot). Ported verbatim from the original `greedy-snp` tool's
/// event loop (§9: preserved exactly, including the tie-break when
/// `event1 == event2`).
pub fn greedy_snp_event_sweep(slots: &mut [Slot], alpha: u64, delta: u64) {
    let n = slots.len();
    if n == 0 {
        return;
    }
    let pos: Vec<i64> = slots.iter().map(|s| s.pos as i64).collect();
    let alpha = alpha as i64;
    let delta = delta as i64;

    let mut i = 0usize;
    let mut j = 0usize;
    let mut count: i64 = 0;

    while i < n {
        let event1 = (pos[i] - alpha + 1).max(1);
        let event2 = if j < n { pos[j] + 1 } else { i64::MAX };

        if event2 <= event1 {
            if !slots[j].retained {
                count -= 1;
            }
            j += 1;
        }

        if event1 <= event2 {
            count += 1;
            if count > delta {
                slots[i].retained = true;
                count -= 1;
            }
            i += 1;
        }
    }
}

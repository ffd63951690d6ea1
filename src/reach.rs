//! Reachability Engine (component C, §4.C) — the hard core of the kernel.
//!
//! Computes, for every slot position, the leftmost reference position
//! reachable by walking backward through at most α−1 labeled (reference)
//! edges, where deletion shortcuts traverse for free. Implemented as the
//! forward sweep dual formulation the original tool uses.

use ahash::HashMap;

use crate::err::PreconditionError;
use crate::slot::{Slot, VariantSet};

/// For each slot, the leftmost reference position reachable within α−1
/// labeled edges (§4.C).
pub fn compute_reach(
    slots: &[Slot],
    variants: &VariantSet,
    alpha: u64,
) -> Result<Vec<u64>, PreconditionError> {
    if alpha <= 2 {
        return Err(PreconditionError::AlphaTooSmall(alpha));
    }
    let width = (alpha - 1) as usize;

    // Deletion shortcuts: from -> [to, to, ...], to = from + |len|.
    let mut out_targets: HashMap<u64, Vec<u64>> = HashMap::default();
    let mut max_target = 0u64;
    for (&pos, &len) in variants.indel_pos.iter().zip(variants.indel_len.iter()) {
        if len < 0 {
            let to = pos + (-len) as u64;
            out_targets.entry(pos).or_default().push(to);
            max_target = max_target.max(to);
        }
    }

    let max_slot_pos = slots.iter().map(|s| s.pos).max().unwrap_or(0);
    let l = max_slot_pos.max(max_target);

    let mut cur = vec![1u64; width];
    let mut pending: HashMap<u64, Vec<u64>> = HashMap::default();
    let mut reach_all = vec![0u64; (l + 1) as usize];

    for v in 1..=l {
        if v == 1 {
            cur.iter_mut().for_each(|c| *c = 1);
        } else {
            for idx in (1..width).rev() {
                cur[idx] = cur[idx - 1];
            }
            cur[0] = v - 1;

            if let Some(incoming) = pending.remove(&v) {
                for idx in 0..width {
                    cur[idx] = cur[idx].min(incoming[idx]);
                }
            }
        }

        if let Some(targets) = out_targets.get(&v) {
            for &w in targets {
                let entry = pending.entry(w).or_insert_with(|| vec![w; width]);
                for idx in 0..width {
                    entry[idx] = entry[idx].min(cur[idx]);
                }
            }
        }

        reach_all[v as usize] = cur[width - 1];
    }

    Ok(slots.iter().map(|s| reach_all[s.pos as usize]).collect())
}

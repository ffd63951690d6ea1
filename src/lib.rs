//! Variation-graph reduction kernel: load a chromosome's variant catalogue,
//! aggregate it into positional slots, compute per-slot reachability and
//! penalty, then optimize retain/drop decisions under a per-window edit
//! budget (greedy or ILP/LP).

pub mod cli;
pub mod err;
pub mod loader;
pub mod optimize;
pub mod params;
pub mod penalty;
pub mod reach;
pub mod reporter;
pub mod slot;

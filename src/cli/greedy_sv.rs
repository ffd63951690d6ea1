use anyhow::Result;
use tracing::info;

use crate::cli::CommonArgs;
use crate::loader;
use crate::optimize::greedy_sweep;
use crate::params::Params;
use crate::penalty::annotate_penalties;
use crate::reach::compute_reach;
use crate::reporter::{build_report, print_summary, rewrite_vcf};
use crate::slot::aggregate;

pub fn run_greedy_sv(common: CommonArgs) -> Result<()> {
    let params = Params::try_new(
        common.alpha,
        common.delta,
        common.vcf,
        common.chr,
        common.prefix,
    )?;

    let variants = loader::load_sv(&params.vcf, &params.chr)?;
    info!(count = variants.indel_pos.len(), "loader: loaded SVs");

    let mut slots = aggregate(variants.clone())?;
    info!(slots = slots.len(), "aggregator: done");

    let reach = compute_reach(&slots, &variants, params.alpha)?;
    for (slot, r) in slots.iter_mut().zip(reach) {
        slot.reach = r;
    }
    annotate_penalties(&mut slots);
    info!("reachability + penalty model: done");

    greedy_sweep(&mut slots, params.delta);
    info!("optimizer: greedy sweep done");

    let report = build_report(&slots);
    print_summary(&report);

    if let Some(prefix) = &params.prefix {
        rewrite_vcf(&params.vcf, &params.chr, &slots, prefix)?;
    }

    Ok(())
}

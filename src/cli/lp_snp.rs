use anyhow::Result;
use tracing::info;

use crate::cli::CommonArgs;
use crate::loader;
use crate::optimize::solve_lp_relaxation;
use crate::params::Params;
use crate::reach::compute_reach;
use crate::reporter::{build_report, print_summary, rewrite_vcf};
use crate::slot::aggregate;

pub fn run_lp_snp(common: CommonArgs) -> Result<()> {
    let params = Params::try_new(
        common.alpha,
        common.delta,
        common.vcf,
        common.chr,
        common.prefix,
    )?;

    let variants = loader::load_snp(&params.vcf, &params.chr)?;
    info!(count = variants.snp_pos.len(), "loader: loaded SNPs");

    let mut slots = aggregate(variants.clone())?;
    info!(slots = slots.len(), "aggregator: done");

    let reach = compute_reach(&slots, &variants, params.alpha)?;
    for (slot, r) in slots.iter_mut().zip(reach) {
        slot.reach = r;
    }
    info!("reachability: done");

    solve_lp_relaxation(&mut slots, params.alpha, params.delta)?;
    info!("optimizer: LP relaxation solve done");

    let report = build_report(&slots);
    print_summary(&report);

    if let Some(prefix) = &params.prefix {
        rewrite_vcf(&params.vcf, &params.chr, &slots, prefix)?;
    }

    Ok(())
}

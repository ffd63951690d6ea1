use anyhow::Result;
use tracing::info;

use crate::cli::CommonArgs;
use crate::loader;
use crate::optimize::greedy_sweep;
use crate::params::Params;
use crate::penalty::annotate_penalties;
use crate::reach::compute_reach;
use crate::reporter::{build_report, print_summary, rewrite_vcf};
use crate::slot::{VariantSet, aggregate};

pub fn run_greedy_snp_indel(common: CommonArgs) -> Result<()> {
    let params = Params::try_new(
        common.alpha,
        common.delta,
        common.vcf,
        common.chr,
        common.prefix,
    )?;

    let snps = loader::load_snp(&params.vcf, &params.chr)?;
    let indels = loader::load_indel(&params.vcf, &params.chr)?;
    info!(
        snps = snps.snp_pos.len(),
        indels = indels.indel_pos.len(),
        "loader: loaded SNPs and tagged indels"
    );

    let variants = VariantSet {
        indel_pos: indels.indel_pos,
        indel_len: indels.indel_len,
        snp_pos: snps.snp_pos,
        snp_count: snps.snp_count,
    };

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

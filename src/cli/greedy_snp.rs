use anyhow::Result;
use tracing::info;

use crate::cli::CommonArgs;
use crate::loader;
use crate::optimize::greedy_snp_event_sweep;
use crate::params::Params;
use crate::reporter::{build_report, print_summary, rewrite_vcf};
use crate::slot::aggregate;

pub fn run_greedy_snp(common: CommonArgs) -> Result<()> {
    let params = Params::try_new(
        common.alpha,
        common.delta,
        common.vcf,
        common.chr,
        common.prefix,
    )?;

    let variants = loader::load_snp(&params.vcf, &params.chr)?;
    info!(count = variants.snp_pos.len(), "loader: loaded SNPs");

    let mut slots = aggregate(variants)?;
    info!(slots = slots.len(), "aggregator: done");

    greedy_snp_event_sweep(&mut slots, params.alpha, params.delta);
    info!("optimizer: greedy-snp event sweep done");

    let report = build_report(&slots);
    print_summary(&report);

    if let Some(prefix) = &params.prefix {
        rewrite_vcf(&params.vcf, &params.chr, &slots, prefix)?;
    }

    Ok(())
}

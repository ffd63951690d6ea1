//! CLI surface: one `clap` derive `Parser` with five subcommands sharing a
//! common set of flags (§2.1, §6).

mod greedy_snp;
mod greedy_snp_indel;
mod greedy_sv;
mod ilp_sv;
mod lp_snp;

pub use greedy_snp::run_greedy_snp;
pub use greedy_snp_indel::run_greedy_snp_indel;
pub use greedy_sv::run_greedy_sv;
pub use ilp_sv::run_ilp_sv;
pub use lp_snp::run_lp_snp;

use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Flags shared by every subcommand (§6).
#[derive(Args, Debug)]
pub struct CommonArgs {
    /// Window length in reference positions
    #[arg(short = 'a', long = "alpha")]
    pub alpha: u64,

    /// Per-window edit budget
    #[arg(short = 'd', long = "delta")]
    pub delta: i64,

    /// Input VCF path
    #[arg(long = "vcf")]
    pub vcf: PathBuf,

    /// Chromosome id to filter to
    #[arg(long = "chr")]
    pub chr: String,

    /// Emit <prefix>.inputrecords.vcf / <prefix>.retainedrecords.vcf
    #[arg(long = "prefix")]
    pub prefix: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Drop SNPs with the O(n) two-pointer event sweep
    GreedySnp {
        #[command(flatten)]
        common: CommonArgs,
    },

    /// Drop structural insertions/deletions with the generic greedy sweep
    GreedySv {
        #[command(flatten)]
        common: CommonArgs,
    },

    /// Drop SNPs and tagged indels jointly with the generic greedy sweep
    GreedySnpIndel {
        #[command(flatten)]
        common: CommonArgs,
    },

    /// Solve the windowed budget over structural variants with an ILP
    IlpSv {
        #[command(flatten)]
        common: CommonArgs,

        /// Maximise distinct retained positions instead of retained variants
        #[arg(long)]
        pos: bool,
    },

    /// Fast approximate front-end: LP relaxation over SNPs
    LpSnp {
        #[command(flatten)]
        common: CommonArgs,
    },
}

use anyhow::Result;
use clap::Parser;
use clap_verbosity_flag::Verbosity;

use vargraph_reduce::cli::{self, Commands};

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Reduce a variation graph under a per-window edit budget"
)]
#[command(propagate_version = true)]
struct Cli {
    #[command(flatten)]
    verbose: Verbosity,

    #[command(subcommand)]
    command: Commands,
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.verbose.tracing_level_filter())
        .init();

    match cli.command {
        Commands::GreedySnp { common } => cli::run_greedy_snp(common),
        Commands::GreedySv { common } => cli::run_greedy_sv(common),
        Commands::GreedySnpIndel { common } => cli::run_greedy_snp_indel(common),
        Commands::IlpSv { common, pos } => cli::run_ilp_sv(common, pos),
        Commands::LpSnp { common } => cli::run_lp_snp(common),
    }
}

fn main() -> Result<()> {
    run()
}

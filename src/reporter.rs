//! Reporter (component G, §4.G) — retention/gap statistics and the
//! in-process VCF rewriter that replaces the original tool's `grep`/`awk`
//! shell-out (§2.1, §9).

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::err::InputError;
use crate::slot::Slot;

/// Min/mean/max of the gaps between consecutive positions in a sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GapStats {
    pub min: u64,
    pub mean: f64,
    pub max: u64,
}

impl GapStats {
    fn of(positions: &[u64]) -> Option<Self> {
        if positions.len() < 2 {
            return None;
        }
        let gaps: Vec<u64> = positions.windows(2).map(|w| w[1] - w[0] - 1).collect();
        let min = *gaps.iter().min().unwrap();
        let max = *gaps.iter().max().unwrap();
        let mean = gaps.iter().sum::<u64>() as f64 / gaps.len() as f64;
        Some(Self { min, mean, max })
    }
}

/// Summary of one reduction run (§4.G).
#[derive(Debug, Clone)]
pub struct Report {
    pub retained_positions: usize,
    pub retained_variants: u64,
    pub retained_snp_variants: u64,
    pub gaps_before: Option<GapStats>,
    pub gaps_after: Option<GapStats>,
}

/// Build the retention/gap report from a fully-annotated slot sequence.
pub fn build_report(slots: &[Slot]) -> Report {
    let all_positions: Vec<u64> = slots.iter().map(|s| s.pos).collect();
    let retained_positions: Vec<u64> = slots.iter().filter(|s| s.retained).map(|s| s.pos).collect();

    let report = Report {
        retained_positions: retained_positions.len(),
        retained_variants: slots.iter().filter(|s| s.retained).map(|s| s.count).sum(),
        retained_snp_variants: slots
            .iter()
            .filter(|s| s.retained)
            .map(|s| s.snp_count)
            .sum(),
        gaps_before: GapStats::of(&all_positions),
        gaps_after: GapStats::of(&retained_positions),
    };

    info!(
        retained_positions = report.retained_positions,
        retained_variants = report.retained_variants,
        retained_snp_variants = report.retained_snp_variants,
        "reporter: retention summary"
    );

    report
}

fn fmt_gaps(gaps: Option<GapStats>) -> String {
    match gaps {
        Some(g) => format!("min={} mean={:.2} max={}", g.min, g.mean, g.max),
        None => "n/a".to_string(),
    }
}

/// Print the human-facing summary a subcommand hands back to the user
/// (§4.G): retention counts plus before/after gap statistics.
pub fn print_summary(report: &Report) {
    println!("retained positions: {}", report.retained_positions);
    println!("retained variants: {}", report.retained_variants);
    println!("retained SNP variants: {}", report.retained_snp_variants);
    println!("gap stats (all slots): {}", fmt_gaps(report.gaps_before));
    println!("gap stats (retained only): {}", fmt_gaps(report.gaps_after));
}

/// Stream `vcf_path` once, writing two files under `prefix`:
/// `<prefix>.inputrecords.vcf` (every row for `chr`) and
/// `<prefix>.retainedrecords.vcf` (rows whose POS is a retained slot).
/// Retained positions are matched via a `HashSet`, replacing the original
/// tool's `grep`/`awk` pipeline (§2.1, §9).
pub fn rewrite_vcf(
    vcf_path: &Path,
    chr: &str,
    slots: &[Slot],
    prefix: &Path,
) -> Result<(), InputError> {
    let retained: HashSet<u64> = slots.iter().filter(|s| s.retained).map(|s| s.pos).collect();

    let input_path = with_suffix(prefix, "inputrecords.vcf");
    let retained_path = with_suffix(prefix, "retainedrecords.vcf");

    let file = File::open(vcf_path).map_err(|source| InputError::Unreadable {
        path: vcf_path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);

    let mut input_writer =
        BufWriter::new(
            File::create(&input_path).map_err(|source| InputError::Unreadable {
                path: input_path.clone(),
                source,
            })?,
        );
    let mut retained_writer =
        BufWriter::new(
            File::create(&retained_path).map_err(|source| InputError::Unreadable {
                path: retained_path.clone(),
                source,
            })?,
        );

    for line in reader.lines() {
        let line = line.map_err(|source| InputError::Unreadable {
            path: vcf_path.to_path_buf(),
            source,
        })?;

        if line.starts_with('#') {
            writeln!(input_writer, "{line}").ok();
            writeln!(retained_writer, "{line}").ok();
            continue;
        }

        let mut fields = line.split('\t');
        let Some(chrom) = fields.next() else { continue };
        if chrom != chr {
            continue;
        }
        let Some(pos) = fields.next().and_then(|p| p.parse::<u64>().ok()) else {
            continue;
        };

        writeln!(input_writer, "{line}").ok();
        if retained.contains(&pos) {
            writeln!(retained_writer, "{line}").ok();
        }
    }

    info!(
        input = %input_path.display(),
        retained = %retained_path.display(),
        "reporter: wrote rewritten VCFs"
    );

    Ok(())
}

fn with_suffix(prefix: &Path, suffix: &str) -> std::path::PathBuf {
    let mut s = prefix.as_os_str().to_os_string();
    s.push(".");
    s.push(suffix);
    s.into()
}

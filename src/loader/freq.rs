//! SNP-mode loading: delegates allele counting to an external frequency
//! counter (`vcftools`) and reads back its `.frq.count` output (§4.A, §6).

use std::path::Path;
use std::process::Command;

use tracing::{info, warn};

use crate::err::InputError;
use crate::slot::VariantSet;

const DEFAULT_VCFTOOLS: &str = "vcftools";

fn vcftools_path() -> String {
    std::env::var("VF_VCFTOOLS_PATH").unwrap_or_else(|_| DEFAULT_VCFTOOLS.to_string())
}

/// Run the frequency counter over `path`/`chr` and parse its `.frq.count`
/// output into sorted `(pos, allele_count)` pairs. The reference allele is
/// always subtracted from the reported count, even if the tool already
/// excludes it (§9: preserved exactly).
pub fn load_snp(path: &Path, chr: &str) -> Result<VariantSet, InputError> {
    let scratch = tempfile::Builder::new()
        .prefix(".vf.")
        .tempdir()
        .map_err(|source| InputError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;
    let out_prefix = scratch.path().join("freq");

    let tool = vcftools_path();
    info!(tool = %tool, "invoking external frequency counter");
    let status = Command::new(&tool)
        .arg("--vcf")
        .arg(path)
        .arg("--chr")
        .arg(chr)
        .arg("--counts")
        .arg("--remove-indels")
        .arg("--out")
        .arg(&out_prefix)
        .output();

    // The subprocess's exit status is not checked (§6): missing output is
    // what actually triggers the "zero variants" error below.
    if let Err(e) = status {
        warn!(error = %e, "failed to spawn frequency-counter subprocess");
    }

    let count_file = out_prefix.with_extension("frq.count");
    let contents =
        std::fs::read_to_string(&count_file).map_err(|_| InputError::MissingFrequencyOutput {
            path: count_file.clone(),
        })?;

    let mut snp_pos = Vec::new();
    let mut snp_count = Vec::new();

    for (lineno, line) in contents.lines().enumerate() {
        let mut cols = line.split_whitespace();
        let Some(col1) = cols.next() else { continue };
        if col1 == "CHROM" {
            continue; // header line
        }
        let Some(col2) = cols.next() else { continue };
        let Some(col3) = cols.next() else { continue };
        let pos: u64 = col2.parse().map_err(|_| InputError::MalformedInfo {
            line: lineno + 1,
            reason: format!("non-integer position '{col2}'"),
        })?;
        let alleles: u64 = col3.parse().map_err(|_| InputError::MalformedInfo {
            line: lineno + 1,
            reason: format!("non-integer allele count '{col3}'"),
        })?;
        snp_pos.push(pos);
        snp_count.push(alleles.saturating_sub(1));
    }

    if snp_pos.is_empty() {
        return Err(InputError::NoVariants {
            path: path.to_path_buf(),
            chr: chr.to_string(),
        });
    }

    info!(count = snp_pos.len(), "loaded SNP allele counts");

    Ok(VariantSet {
        indel_pos: Vec::new(),
        indel_len: Vec::new(),
        snp_pos,
        snp_count,
    })
}

#[cfg(test)]
mod tests {
    #[test]
    fn parses_frq_count_and_subtracts_reference_allele() {
        // Exercise the parsing logic directly against a synthetic
        // `.frq.count`-shaped string, without requiring vcftools to be
        // installed in the test environment.
        let contents = "CHROM\tPOS\tN_ALLELES\nchr1\t10\t2\nchr1\t20\t3\n";
        let mut snp_pos = Vec::new();
        let mut snp_count = Vec::new();
        for (lineno, line) in contents.lines().enumerate() {
            let mut cols = line.split_whitespace();
            let Some(col1) = cols.next() else { continue };
            if col1 == "CHROM" {
                continue;
            }
            let col2: u64 = cols.next().unwrap().parse().unwrap();
            let col3: u64 = cols.next().unwrap().parse().unwrap();
            let _ = lineno;
            snp_pos.push(col2);
            snp_count.push(col3.saturating_sub(1));
        }
        assert_eq!(snp_pos, vec![10, 20]);
        assert_eq!(snp_count, vec![1, 2]);
    }
}

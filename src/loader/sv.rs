//! SV-mode loading: `SVTYPE=INS|DEL` + `SVLEN=...` (§4.A).

use std::path::Path;

use tracing::info;

use super::{VcfLine, fail_if_empty, info_value, read_lines};
use crate::err::InputError;
use crate::slot::VariantSet;

/// Parse a VCF for structural insertions and deletions on one chromosome.
/// Any `SVTYPE` beginning with `INS` or `DEL` counts as that class, so
/// subtypes like `INS:ME` or `DEL:ALU` are included (§4.A, §9).
pub fn load_sv(path: &Path, chr: &str) -> Result<VariantSet, InputError> {
    let mut indel_pos = Vec::new();
    let mut indel_len = Vec::new();

    for line in read_lines(path)? {
        let line = line.map_err(|source| InputError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;
        let Some(vcf_line) = VcfLine::parse(&line) else {
            continue;
        };
        if vcf_line.chrom() != chr {
            continue;
        }

        let info = vcf_line.info();
        let Some(sv_type) = info_value(info, "SVTYPE") else {
            continue;
        };
        let Some(pos) = vcf_line.pos() else {
            continue;
        };
        let Some(sv_len) = info_value(info, "SVLEN").and_then(|v| v.parse::<i64>().ok()) else {
            continue;
        };
        let len = sv_len.unsigned_abs() as i64;

        if sv_type.starts_with("INS") {
            indel_pos.push(pos);
            indel_len.push(len);
        } else if sv_type.starts_with("DEL") {
            indel_pos.push(pos);
            indel_len.push(-len);
        } else {
            continue;
        }
    }

    fail_if_empty(&indel_pos, path, chr)?;
    info!(
        count = indel_pos.len(),
        "loaded structural insertions/deletions"
    );

    Ok(VariantSet {
        indel_pos,
        indel_len,
        snp_pos: Vec::new(),
        snp_count: Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_vcf(contents: &str) -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(f, "{contents}").unwrap();
        f
    }

    #[test]
    fn parses_insertions_and_deletions_for_chromosome() {
        let vcf = write_vcf(concat!(
            "#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\n",
            "chr1\t100\t.\tA\t<INS>\t.\t.\tSVTYPE=INS;SVLEN=50\n",
            "chr1\t200\t.\tA\t<DEL>\t.\t.\tSVTYPE=DEL;SVLEN=-300\n",
            "chr2\t300\t.\tA\t<DEL>\t.\t.\tSVTYPE=DEL;SVLEN=-10\n",
        ));
        let variants = load_sv(vcf.path(), "chr1").unwrap();
        assert_eq!(variants.indel_pos, vec![100, 200]);
        assert_eq!(variants.indel_len, vec![50, -300]);
    }

    #[test]
    fn includes_sv_subtypes() {
        let vcf = write_vcf(concat!(
            "chr1\t10\t.\tA\t<INS:ME>\t.\t.\tSVTYPE=INS:ME;SVLEN=20\n",
            "chr1\t20\t.\tA\t<DEL:ALU>\t.\t.\tSVTYPE=DEL:ALU;SVLEN=15\n",
        ));
        let variants = load_sv(vcf.path(), "chr1").unwrap();
        assert_eq!(variants.indel_pos, vec![10, 20]);
        assert_eq!(variants.indel_len, vec![20, -15]);
    }

    #[test]
    fn errors_on_zero_records() {
        let vcf = write_vcf("chr1\t1\t.\tA\tG\t.\t.\t.\n");
        assert!(load_sv(vcf.path(), "chr1").is_err());
    }
}

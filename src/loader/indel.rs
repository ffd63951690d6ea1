//! Indel-tagged mode loading: rows carrying the literal `VT=INDEL` substring
//! in INFO (§4.A, §9).

use std::path::Path;

use tracing::info;

use super::{VcfLine, fail_if_empty, read_lines};
use crate::err::InputError;
use crate::slot::VariantSet;

pub fn load_indel(path: &Path, chr: &str) -> Result<VariantSet, InputError> {
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
        if !vcf_line.info().contains("VT=INDEL") {
            continue;
        }
        let Some(pos) = vcf_line.pos() else {
            continue;
        };
        let Some(reference) = vcf_line.fields.get(3) else {
            continue;
        };
        let Some(alt) = vcf_line.fields.get(4) else {
            continue;
        };

        let len = alt.len() as i64 - reference.len() as i64;
        if len == 0 {
            continue;
        }

        indel_pos.push(pos);
        indel_len.push(len);
    }

    fail_if_empty(&indel_pos, path, chr)?;
    info!(count = indel_pos.len(), "loaded VT=INDEL tagged records");

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
    fn parses_signed_length_from_ref_alt() {
        let vcf = write_vcf(concat!(
            "chr1\t50\t.\tA\tATTT\t.\t.\tVT=INDEL\n", // insertion, len +3
            "chr1\t60\t.\tATTT\tA\t.\t.\tVT=INDEL\n", // deletion, len -3
        ));
        let variants = load_indel(vcf.path(), "chr1").unwrap();
        assert_eq!(variants.indel_pos, vec![50, 60]);
        assert_eq!(variants.indel_len, vec![3, -3]);
    }

    #[test]
    fn ignores_rows_without_vt_indel_tag_even_if_lengths_differ() {
        let vcf = write_vcf("chr1\t50\t.\tA\tATTT\t.\t.\tDP=10\n");
        assert!(load_indel(vcf.path(), "chr1").is_err());
    }

    #[test]
    fn discards_zero_length_differences() {
        let vcf = write_vcf(concat!(
            "chr1\t50\t.\tA\tT\t.\t.\tVT=INDEL\n",
            "chr1\t60\t.\tA\tATT\t.\t.\tVT=INDEL\n",
        ));
        let variants = load_indel(vcf.path(), "chr1").unwrap();
        assert_eq!(variants.indel_pos, vec![60]);
    }
}

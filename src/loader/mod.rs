//! Variant Loader (component A, §4.A).
//!
//! Reads variant positions and kinds from a VCF-like source for one
//! chromosome and produces the two parallel sequences the aggregator (§4.B)
//! consumes: `indel_pos[]`/`indel_len[]` and `snp_pos[]`/`snp_count[]`.

mod freq;
mod indel;
mod sv;

pub use freq::load_snp;
pub use indel::load_indel;
pub use sv::load_sv;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::err::InputError;

/// One tab-split VCF data line (header lines starting with `#` are never
/// yielded).
struct VcfLine<'a> {
    fields: Vec<&'a str>,
}

impl<'a> VcfLine<'a> {
    fn parse(line: &'a str) -> Option<Self> {
        if line.is_empty() || line.starts_with('#') {
            return None;
        }
        Some(Self {
            fields: line.split('\t').collect(),
        })
    }

    fn chrom(&self) -> &str {
        self.fields.first().copied().unwrap_or_default()
    }

    fn pos(&self) -> Option<u64> {
        self.fields.get(1)?.parse().ok()
    }

    fn info(&self) -> &str {
        self.fields.get(7).copied().unwrap_or_default()
    }
}

fn open_vcf(path: &Path) -> Result<BufReader<File>, InputError> {
    let file = File::open(path).map_err(|source| InputError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

fn read_lines(path: &Path) -> Result<impl Iterator<Item = std::io::Result<String>>, InputError> {
    Ok(open_vcf(path)?.lines())
}

/// Extract the value of an `INFO` key (`KEY=value`), if present.
fn info_value<'a>(info: &'a str, key: &str) -> Option<&'a str> {
    info.split(';').find_map(|kv| {
        let (k, v) = kv.split_once('=')?;
        (k == key).then_some(v)
    })
}

fn fail_if_empty(pos: &[u64], path: &Path, chr: &str) -> Result<(), InputError> {
    if pos.is_empty() {
        return Err(InputError::NoVariants {
            path: path.to_path_buf(),
            chr: chr.to_string(),
        });
    }
    Ok(())
}

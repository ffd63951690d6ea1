//! Validated run configuration shared by every subcommand (§2.1, §6).

use std::path::PathBuf;

use crate::err::{ParamsError, PreconditionError, UsageError};

/// The flags common to all five subcommands, validated once at startup.
#[derive(Debug, Clone)]
pub struct Params {
    pub alpha: u64,
    pub delta: u64,
    pub vcf: PathBuf,
    pub chr: String,
    pub prefix: Option<PathBuf>,
}

impl Params {
    /// Validate raw CLI input into a `Params`. `alpha` must be > 2; `delta`
    /// must be >= 0 (checked here, not just by the type, since the original
    /// tool accepts a signed integer and rejects negatives explicitly); a
    /// `-prefix` given on the command line must be a non-empty path.
    pub fn try_new(
        alpha: u64,
        delta: i64,
        vcf: PathBuf,
        chr: String,
        prefix: Option<PathBuf>,
    ) -> Result<Self, ParamsError> {
        if alpha <= 2 {
            return Err(PreconditionError::AlphaTooSmall(alpha).into());
        }
        if delta < 0 {
            return Err(PreconditionError::NegativeDelta(delta).into());
        }
        if let Some(p) = &prefix
            && p.as_os_str().is_empty()
        {
            return Err(UsageError::EmptyPrefix.into());
        }
        Ok(Self {
            alpha,
            delta: delta as u64,
            vcf,
            chr,
            prefix,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_alpha_too_small() {
        assert!(Params::try_new(2, 0, "x.vcf".into(), "chr1".into(), None).is_err());
    }

    #[test]
    fn rejects_negative_delta() {
        assert!(Params::try_new(10, -1, "x.vcf".into(), "chr1".into(), None).is_err());
    }

    #[test]
    fn accepts_valid_input() {
        let p = Params::try_new(10, 5, "x.vcf".into(), "chr1".into(), None).unwrap();
        assert_eq!(p.alpha, 10);
        assert_eq!(p.delta, 5);
    }

    #[test]
    fn rejects_empty_prefix() {
        let err =
            Params::try_new(10, 5, "x.vcf".into(), "chr1".into(), Some("".into())).unwrap_err();
        assert!(matches!(err, ParamsError::Usage(_)));
    }
}

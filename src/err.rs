//! Typed error kinds surfaced at the process boundary.

use std::path::PathBuf;

/// Failures while loading or filtering the input VCF.
#[derive(thiserror::Error, Debug)]
pub enum InputError {
    #[error("cannot open vcf file {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("no variant records survived filtering for chromosome '{chr}' in {path}")]
    NoVariants { path: PathBuf, chr: String },
    #[error("malformed INFO field on line {line}: {reason}")]
    MalformedInfo { line: usize, reason: String },
    #[error("frequency-counter output file {path} was not produced")]
    MissingFrequencyOutput { path: PathBuf },
}

/// Invalid or missing CLI argument that clap's own validation cannot express.
#[derive(thiserror::Error, Debug)]
pub enum UsageError {
    #[error("-prefix requires a non-empty path")]
    EmptyPrefix,
}

/// A structural precondition of the kernel was violated.
#[derive(thiserror::Error, Debug)]
pub enum PreconditionError {
    #[error("alpha must be > 2, got {0}")]
    AlphaTooSmall(u64),
    #[error("delta must be >= 0, got {0}")]
    NegativeDelta(i64),
    #[error("slot positions are not strictly ascending at index {index}")]
    NotSorted { index: usize },
}

/// Failure raised by the ILP/LP solver collaborator.
#[derive(thiserror::Error, Debug)]
pub enum SolverError {
    #[error("solver reported infeasible model")]
    Infeasible,
    #[error("solver reported unbounded model")]
    Unbounded,
    #[error("solver licence missing or invalid; native code = {code:?}. {remediation}")]
    MissingLicence {
        code: Option<i32>,
        remediation: &'static str,
    },
    #[error("solver failed: {0}")]
    Other(String),
}

/// Error raised while validating raw CLI input into a `Params`.
#[derive(thiserror::Error, Debug)]
pub enum ParamsError {
    #[error(transparent)]
    Usage(#[from] UsageError),
    #[error(transparent)]
    Precondition(#[from] PreconditionError),
}

use thiserror::Error;

/// Errors the mining core can raise. All are fatal: there is no retry path,
/// callers are expected to surface them to the user (see `naming`/CLI driver).
#[derive(Debug, Error)]
pub enum MiningError {
    #[error("minsup must be >= 1, got {0}")]
    InvalidMinSupport(i64),

    #[error("maxElts must be >= 1, got {0}")]
    InvalidMaxElts(i64),

    #[error("input has zero records")]
    EmptyInput,

    #[error("malformed record (sid={sid}, eid={eid}): {reason}")]
    MalformedRecord {
        sid: u32,
        eid: u32,
        reason: &'static str,
    },

    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse CSV record: {0}")]
    Csv(#[from] csv::Error),

    #[error("discovery sink failed: {0}")]
    Sink(String),
}

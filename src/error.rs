use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong while checking a question bank. All of these
/// are fatal: the check either runs to completion or stops here.
#[derive(Debug, Error)]
pub enum CheckError {
    #[error("could not open `{path}`")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid CSV in `{path}`")]
    Parse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("column `{column}` not found in header")]
    MissingColumn { column: String },
}

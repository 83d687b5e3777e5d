use std::path::PathBuf;

use thiserror::Error;

/// Unified error type for git-backtag operations
#[derive(Error, Debug)]
pub enum BatchTagError {
    #[error("versions file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("versions file has {found} lines, expected at least {expected} header lines")]
    InputTooShort { found: usize, expected: usize },

    #[error("line {line}: expected '<name> <commit>' separated by one space, got {content:?}")]
    MalformedLine { line: usize, content: String },

    #[error("line {line}: release name {name:?} does not match '<product>-<major>.<minor>.<patch>'")]
    UnparseableName { line: usize, name: String },

    #[error("checkout of '{commit}' failed: {source}")]
    CheckoutFailed {
        commit: String,
        #[source]
        source: git2::Error,
    },

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in git-backtag
pub type Result<T> = std::result::Result<T, BatchTagError>;

// SPDX-License-Identifier: Apache-2.0

use thiserror::Error;

/// Errors that abort a run outright. Consistency problems found while
/// reconciling the reference list (duplicates, unresolved paths, definition
/// mismatches) are not errors in this sense; they are accumulated and surfaced
/// through the status artifact instead.
#[derive(Debug, Error)]
pub enum Error {
    /// A reference-list record with fewer than two fields. The record cannot
    /// be attributed to any hierarchical path, so the whole load fails.
    #[error("malformed reference record on line {line}: {text:?} (expected `<path>;<original name>[;<excluded signal>...]`)")]
    MalformedRecord { line: usize, text: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

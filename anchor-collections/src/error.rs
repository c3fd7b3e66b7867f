//! Error types for indexed chain access.
//!
//! Empty containers and missing values are not errors here: `pop`,
//! `pop_left`, `poll`, `peek`, `find` and `remove` report them as `None`.

use core::fmt;

/// Index is not a valid position in the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutOfRange {
    /// The index that was requested.
    pub index: usize,
    /// Chain length at the time of the request.
    pub len: usize,
}

impl fmt::Display for OutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "index {} out of range for chain of length {}",
            self.index, self.len
        )
    }
}

impl std::error::Error for OutOfRange {}

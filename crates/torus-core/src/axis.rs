//! Matrix axis selector

use crate::error::{Error, Result};
use std::fmt;

/// Axis of a 2D sparse matrix.
///
/// `Rows` moves entries up/down (changes row indices), `Columns` moves them
/// left/right (changes column indices).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Rows,
    Columns,
}

impl Axis {
    /// Length of this axis for a matrix of the given shape.
    #[inline]
    #[must_use]
    pub const fn len_of(self, shape: (usize, usize)) -> usize {
        match self {
            Self::Rows => shape.0,
            Self::Columns => shape.1,
        }
    }

    /// Name of the coordinate this axis indexes, as used in error messages.
    #[inline]
    #[must_use]
    pub const fn coordinate(self) -> &'static str {
        match self {
            Self::Rows => "row",
            Self::Columns => "column",
        }
    }
}

/// Integer codes used by array libraries: 0 for rows, 1 for columns.
impl TryFrom<i64> for Axis {
    type Error = Error;

    fn try_from(code: i64) -> Result<Self> {
        match code {
            0 => Ok(Self::Rows),
            1 => Ok(Self::Columns),
            other => Err(Error::InvalidAxis(other)),
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rows => f.write_str("rows"),
            Self::Columns => f.write_str("columns"),
        }
    }
}

use core::fmt;

/// Reasons a text map could not be turned into a [Grid](crate::Grid).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseGridError {
    /// The input contained no rows.
    Empty,
    /// A row's length differs from the first row's.
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    UnknownSymbol {
        symbol: char,
        row: usize,
        column: usize,
    },
}

impl fmt::Display for ParseGridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "grid text contains no rows"),
            Self::Ragged {
                row,
                expected,
                found,
            } => write!(f, "row {row} has {found} cells, expected {expected}"),
            Self::UnknownSymbol {
                symbol,
                row,
                column,
            } => write!(f, "unknown symbol {symbol:?} at row {row}, column {column}"),
        }
    }
}

impl std::error::Error for ParseGridError {}

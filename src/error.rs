use std::{io, path::PathBuf};

use thiserror::Error;

/// Everything that can go wrong while turning a pattern source into a grid.
#[derive(Debug, Error)]
pub enum PatternError {
    #[error("could not read pattern from {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cell buffer holds {actual} cells, expected {expected}")]
    BufferSize { expected: usize, actual: usize },

    #[error("unexpected glyph {glyph:?} at line {line}, column {column}")]
    UnexpectedGlyph {
        line: usize,
        column: usize,
        glyph: char,
    },

    #[error("line {line} has {length} cells, the grid is {width} wide")]
    RowTooLong {
        line: usize,
        length: usize,
        width: usize,
    },

    #[error("pattern has {rows} rows, the grid is {height} high")]
    TooManyRows { rows: usize, height: usize },

    #[error("malformed RLE: {0}")]
    InvalidRle(String),
}

use std::error::Error;
use std::fmt;
use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use crate::math::Real;

/// Shape of a matrix, `rows x cols`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dimension {
    pub rows: usize,
    pub cols: usize,
}

impl Dimension {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }
}

/// Dense row-major matrix of reals with at least one row and one column.
///
/// Cell `(row, col)` lives at `row * cols + col` in a single owned buffer;
/// cloning copies the buffer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawMatrix", into = "RawMatrix")]
pub struct Matrix {
    data: Vec<Real>,
    dimension: Dimension,
}

#[derive(Serialize, Deserialize)]
struct RawMatrix {
    rows: usize,
    cols: usize,
    data: Vec<Real>,
}

impl Matrix {
    /// Zero-filled `rows x cols` matrix.
    pub fn new(rows: usize, cols: usize) -> Result<Self, ShapeError> {
        let len = Self::checked_len(rows, cols)?;
        Self::from_shape_vec((rows, cols), vec![0.0; len])
    }

    pub fn from_dim(dim: Dimension) -> Result<Self, ShapeError> {
        Self::new(dim.rows, dim.cols)
    }

    /// Wraps a row-major buffer of exactly `rows * cols` values.
    pub fn from_shape_vec(shape: (usize, usize), data: Vec<Real>) -> Result<Self, ShapeError> {
        let (rows, cols) = shape;
        if data.len() != Self::checked_len(rows, cols)? {
            return Err(ShapeError::LengthMismatch {
                rows,
                cols,
                len: data.len(),
            });
        }
        Ok(Self {
            data,
            dimension: Dimension { rows, cols },
        })
    }

    /// Cell count for a shape with both dimensions non-zero and a product
    /// that fits in `usize`.
    fn checked_len(rows: usize, cols: usize) -> Result<usize, ShapeError> {
        if rows == 0 || cols == 0 {
            return Err(ShapeError::ZeroDimension { rows, cols });
        }
        rows.checked_mul(cols).ok_or(ShapeError::TooLarge { rows, cols })
    }

    pub fn dim(&self) -> Dimension {
        self.dimension
    }

    pub fn nrows(&self) -> usize {
        self.dimension.rows
    }

    pub fn ncols(&self) -> usize {
        self.dimension.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.dimension.rows, self.dimension.cols)
    }

    pub fn as_slice(&self) -> &[Real] {
        &self.data
    }

    fn offset(&self, row: usize, col: usize) -> Result<usize, ShapeError> {
        let Dimension { rows, cols } = self.dimension;
        if row >= rows || col >= cols {
            return Err(ShapeError::OutOfBounds {
                row,
                col,
                rows,
                cols,
            });
        }
        Ok(row * cols + col)
    }

    pub fn row_slice(&self, row: usize) -> &[Real] {
        assert!(row < self.dimension.rows, "row index out of bounds");
        let start = row * self.dimension.cols;
        &self.data[start..start + self.dimension.cols]
    }

    /// Value at `(row, col)`, or `ShapeError::OutOfBounds`.
    pub fn at(&self, row: usize, col: usize) -> Result<Real, ShapeError> {
        let offset = self.offset(row, col)?;
        Ok(self.data[offset])
    }

    /// Writable cell at `(row, col)`, or `ShapeError::OutOfBounds`.
    pub fn at_mut(&mut self, row: usize, col: usize) -> Result<&mut Real, ShapeError> {
        let offset = self.offset(row, col)?;
        Ok(&mut self.data[offset])
    }

    /// Transposes in place; the new buffer and shape replace the old ones together.
    pub fn transpose(&mut self) {
        *self = self.t();
    }

    /// Transposed copy, leaving `self` unchanged.
    pub fn t(&self) -> Matrix {
        let Dimension { rows, cols } = self.dimension;
        log::trace!("Transposing {}x{} matrix", rows, cols);
        let mut data = Vec::with_capacity(self.data.len());
        for col in 0..cols {
            for row in 0..rows {
                data.push(self.data[row * cols + col]);
            }
        }
        Matrix {
            data,
            dimension: Dimension {
                rows: cols,
                cols: rows,
            },
        }
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Matrix {
            data: vec![0.0],
            dimension: Dimension { rows: 1, cols: 1 },
        }
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = Real;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        match self.offset(index.0, index.1) {
            Ok(offset) => &self.data[offset],
            Err(err) => panic!("{}", err),
        }
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        match self.offset(index.0, index.1) {
            Ok(offset) => &mut self.data[offset],
            Err(err) => panic!("{}", err),
        }
    }
}

impl TryFrom<RawMatrix> for Matrix {
    type Error = ShapeError;

    fn try_from(raw: RawMatrix) -> Result<Self, Self::Error> {
        Matrix::from_shape_vec((raw.rows, raw.cols), raw.data)
    }
}

impl From<Matrix> for RawMatrix {
    fn from(matrix: Matrix) -> Self {
        RawMatrix {
            rows: matrix.dimension.rows,
            cols: matrix.dimension.cols,
            data: matrix.data,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    ZeroDimension {
        rows: usize,
        cols: usize,
    },
    LengthMismatch {
        rows: usize,
        cols: usize,
        len: usize,
    },
    TooLarge {
        rows: usize,
        cols: usize,
    },
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeError::ZeroDimension { rows, cols } => {
                write!(f, "matrix shape ({}, {}) has a zero dimension", rows, cols)
            }
            ShapeError::LengthMismatch { rows, cols, len } => write!(
                f,
                "invalid shape ({}, {}) for buffer of length {}",
                rows, cols, len
            ),
            ShapeError::TooLarge { rows, cols } => {
                write!(f, "matrix shape ({}, {}) overflows the cell count", rows, cols)
            }
            ShapeError::OutOfBounds {
                row,
                col,
                rows,
                cols,
            } => write!(
                f,
                "index ({}, {}) out of bounds for {}x{} matrix",
                row, col, rows, cols
            ),
        }
    }
}

impl Error for ShapeError {}

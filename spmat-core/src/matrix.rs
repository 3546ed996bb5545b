//! Hash-map backed integer sparse matrix
//!
//! The element mapping is the source of truth: reads are never bounds
//! checked, and writes outside the declared shape grow the shape.

use alloc::vec::Vec;
use hashbrown::{hash_map, HashMap};

/// Coordinate of a stored entry as `(row, col)`
pub type Coord = (i64, i64);

/// Sparse matrix of `i64` values keyed by `(row, col)`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SparseMatrix {
    num_rows: i64,
    num_cols: i64,
    /// `elements[(r, c)]` = stored value at (`r`, `c`); explicit zeros are kept
    elements: HashMap<Coord, i64>,
}

impl SparseMatrix {
    /// Create an empty matrix with the given declared shape
    ///
    /// Dimensions are stored as given, negative values included.
    pub fn new(num_rows: i64, num_cols: i64) -> Self {
        Self {
            num_rows,
            num_cols,
            elements: HashMap::new(),
        }
    }

    /// Build a matrix from `(row, col, value)` triples, applied in order
    pub fn from_triples<I>(num_rows: i64, num_cols: i64, triples: I) -> Self
    where
        I: IntoIterator<Item = (i64, i64, i64)>,
    {
        triples
            .into_iter()
            .fold(Self::new(num_rows, num_cols), |mut m, (r, c, v)| {
                m.set_element(r, c, v);
                m
            })
    }

    /// Store `value` at (`row`, `col`), growing the shape to contain it
    ///
    /// A zero value is stored as an explicit entry, not removed.
    pub fn set_element(&mut self, row: i64, col: i64, value: i64) {
        if row >= self.num_rows {
            self.num_rows = row.saturating_add(1);
        }
        if col >= self.num_cols {
            self.num_cols = col.saturating_add(1);
        }
        self.elements.insert((row, col), value);
    }

    /// Stored value at (`row`, `col`), or 0 when nothing is stored there
    pub fn get_element(&self, row: i64, col: i64) -> i64 {
        self.elements.get(&(row, col)).copied().unwrap_or(0)
    }

    /// Whether an entry (possibly an explicit zero) is stored at the coordinate
    pub fn contains(&self, row: i64, col: i64) -> bool {
        self.elements.contains_key(&(row, col))
    }

    pub fn num_rows(&self) -> i64 {
        self.num_rows
    }

    pub fn num_cols(&self) -> i64 {
        self.num_cols
    }

    /// Declared shape as `(rows, cols)`
    pub fn shape(&self) -> (i64, i64) {
        (self.num_rows, self.num_cols)
    }

    /// Number of stored entries, explicit zeros included
    pub fn nnz(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Iterate stored entries in unspecified order
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            iter: self.elements.iter(),
        }
    }

    /// Stored entries as `(row, col, value)` in row-major order
    pub fn entries_sorted(&self) -> Vec<(i64, i64, i64)> {
        let mut entries: Vec<_> = self.iter().map(|((r, c), v)| (r, c, v)).collect();
        entries.sort_unstable_by_key(|&(r, c, _)| (r, c));
        entries
    }

    pub fn summary(&self) -> MatrixSummary {
        MatrixSummary::from(self)
    }
}

/// Shape and occupancy of a matrix, for reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatrixSummary {
    pub rows: i64,
    pub cols: i64,
    /// Stored entries, explicit zeros included
    pub nnz: usize,
}

impl From<&SparseMatrix> for MatrixSummary {
    fn from(matrix: &SparseMatrix) -> Self {
        Self {
            rows: matrix.num_rows(),
            cols: matrix.num_cols(),
            nnz: matrix.nnz(),
        }
    }
}

/// Iterator over `((row, col), value)` pairs of a [`SparseMatrix`]
pub struct Iter<'a> {
    iter: hash_map::Iter<'a, Coord, i64>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (Coord, i64);

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|(&coord, &value)| (coord, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<'a> IntoIterator for &'a SparseMatrix {
    type Item = (Coord, i64);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

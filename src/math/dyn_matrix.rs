//! Runtime-sized matrix used for pixel and depth buffers.
//!
//! Shape is fixed at construction. Rows are contiguous, so `m[y]` is a slice of
//! exactly `n_cols()` elements and `m[y][x]` addresses a single pixel.

use std::ops::{Index, IndexMut};

/// A heap-backed, row-major `rows x cols` grid.
#[derive(Clone, Debug, PartialEq)]
pub struct DynMatrix<T> {
    data: Vec<T>,
    n_rows: usize,
    n_cols: usize,
}

impl<T: Clone> DynMatrix<T> {
    /// Create a matrix with every element set to `value`.
    pub fn filled(n_rows: usize, n_cols: usize, value: T) -> Self {
        let len = n_rows
            .checked_mul(n_cols)
            .unwrap_or_else(|| panic!("DynMatrix of {n_rows}x{n_cols} overflows usize"));
        Self {
            data: vec![value; len],
            n_rows,
            n_cols,
        }
    }

    /// Overwrite every element with `value`.
    pub fn fill(&mut self, value: T) {
        self.data.fill(value);
    }

    pub fn transpose(&self) -> Self {
        let mut data = Vec::with_capacity(self.data.len());
        for col in 0..self.n_cols {
            for row in 0..self.n_rows {
                data.push(self.data[row * self.n_cols + col].clone());
            }
        }
        Self {
            data,
            n_rows: self.n_cols,
            n_cols: self.n_rows,
        }
    }
}

impl<T: Clone + Default> DynMatrix<T> {
    pub fn new(n_rows: usize, n_cols: usize) -> Self {
        Self::filled(n_rows, n_cols, T::default())
    }
}

impl<T> DynMatrix<T> {
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    pub fn n_cols(&self) -> usize {
        self.n_cols
    }

    /// `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.n_rows, self.n_cols)
    }

    /// Get the element at (row, col), or None if out of bounds.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.n_rows && col < self.n_cols {
            self.data.get(row * self.n_cols + col)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        if row < self.n_rows && col < self.n_cols {
            self.data.get_mut(row * self.n_cols + col)
        } else {
            None
        }
    }

    /// Iterates over the rows, yielding exactly `n_rows()` slices even when
    /// rows are empty.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[T]> + '_ {
        let n_cols = self.n_cols;
        (0..self.n_rows).map(move |row| &self.data[row * n_cols..(row + 1) * n_cols])
    }

    pub fn rows_mut(&mut self) -> impl ExactSizeIterator<Item = &mut [T]> + '_ {
        let n_cols = self.n_cols;
        let mut rest = self.data.as_mut_slice();
        (0..self.n_rows).map(move |_| {
            let (row, tail) = std::mem::take(&mut rest).split_at_mut(n_cols);
            rest = tail;
            row
        })
    }

    /// View the elements as one row-major slice.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }
}

impl<T> Index<usize> for DynMatrix<T> {
    type Output = [T];

    /// # Panics
    ///
    /// Panics if `row` is out of range.
    #[inline]
    fn index(&self, row: usize) -> &[T] {
        assert!(
            row < self.n_rows,
            "row {row} out of range for DynMatrix with {} rows",
            self.n_rows
        );
        let start = row * self.n_cols;
        &self.data[start..start + self.n_cols]
    }
}

impl<T> IndexMut<usize> for DynMatrix<T> {
    #[inline]
    fn index_mut(&mut self, row: usize) -> &mut [T] {
        assert!(
            row < self.n_rows,
            "row {row} out of range for DynMatrix with {} rows",
            self.n_rows
        );
        let start = row * self.n_cols;
        &mut self.data[start..start + self.n_cols]
    }
}

use std::ops::Mul;

use custom_error::custom_error;
use raycow_core::float::approx_eq;

use super::tuple::Tuple;

const MAX_SIZE: usize = 4;

custom_error! {pub MatrixError
    NotInvertible {determinant: f64} = "Matrix is not invertible, determinant is {determinant}",
}

/// Square matrix of size 2, 3 or 4 stored as a flat row-major buffer.
#[derive(Clone, Copy, Debug)]
pub struct Matrix {

    size: usize,
    values: [f64; MAX_SIZE * MAX_SIZE],
}

/// The default transform of every shape and camera.
pub const IDENTITY: Matrix = Matrix {
    size: 4,
    values: [
        1.0, 0.0, 0.0, 0.0,
        0.0, 1.0, 0.0, 0.0,
        0.0, 0.0, 1.0, 0.0,
        0.0, 0.0, 0.0, 1.0,
    ],
};

impl Matrix {

    pub fn new2(values: [[f64; 2]; 2]) -> Self {
        Self::from_fn(2, |row, col| values[row][col])
    }

    pub fn new3(values: [[f64; 3]; 3]) -> Self {
        Self::from_fn(3, |row, col| values[row][col])
    }

    pub fn new4(values: [[f64; 4]; 4]) -> Self {
        Self::from_fn(4, |row, col| values[row][col])
    }

    pub fn zero(size: usize) -> Self {
        Self::from_fn(size, |_, _| 0.0)
    }

    pub fn identity(size: usize) -> Self {
        Self::from_fn(size, |row, col| if row == col { 1.0 } else { 0.0 })
    }

    fn from_fn<F: Fn(usize, usize) -> f64>(size: usize, value: F) -> Self {
        assert!(size >= 2 && size <= MAX_SIZE, "unsupported matrix size: {}", size);

        let mut values = [0f64; MAX_SIZE * MAX_SIZE];
        for row in 0..size {
            for col in 0..size {
                values[row * size + col] = value(row, col);
            }
        }

        Matrix { size, values }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.values[self.index(row, col)]
    }

    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        let index = self.index(row, col);
        self.values[index] = value;
    }

    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.size && col < self.size,
            "cell ({}, {}) is outside of {}x{} matrix", row, col, self.size, self.size
        );
        row * self.size + col
    }

    pub fn multiply(&self, other: &Matrix) -> Matrix {
        assert_eq!(self.size, other.size, "can not multiply matrices of different sizes");

        Self::from_fn(self.size, |row, col| {
            (0..self.size).map(|i| self.get(row, i) * other.get(i, col)).sum()
        })
    }

    /// Treats the tuple as a column vector. Only defined for 4x4 matrices.
    pub fn multiply_tuple(&self, tuple: &Tuple) -> Tuple {
        assert_eq!(self.size, 4, "only 4x4 matrices can be multiplied by a tuple");

        let row = |row: usize| {
            self.get(row, 0) * tuple.x + self.get(row, 1) * tuple.y + self.get(row, 2) * tuple.z + self.get(row, 3) * tuple.w
        };

        Tuple::new(row(0), row(1), row(2), row(3))
    }

    pub fn transposed(&self) -> Matrix {
        Self::from_fn(self.size, |row, col| self.get(col, row))
    }

    /// Copy of this matrix with `row` and `col` removed.
    pub fn submatrix(&self, row: usize, col: usize) -> Matrix {
        assert!(self.size > 2, "can not take submatrix of a {}x{} matrix", self.size, self.size);

        Self::from_fn(self.size - 1, |r, c| {
            let source_row = if r < row { r } else { r + 1 };
            let source_col = if c < col { c } else { c + 1 };
            self.get(source_row, source_col)
        })
    }

    pub fn minor(&self, row: usize, col: usize) -> f64 {
        if self.size == 2 {
            // the 1x1 submatrix is the opposite cell
            self.get(1 - row, 1 - col)
        } else {
            self.submatrix(row, col).determinant()
        }
    }

    pub fn cofactor(&self, row: usize, col: usize) -> f64 {
        let minor = self.minor(row, col);
        if (row + col) % 2 == 1 {
            -minor
        } else {
            minor
        }
    }

    pub fn determinant(&self) -> f64 {
        if self.size == 2 {
            return self.get(0, 0) * self.get(1, 1) - self.get(0, 1) * self.get(1, 0);
        }

        (0..self.size).map(|col| self.get(0, col) * self.cofactor(0, col)).sum()
    }

    pub fn is_invertible(&self) -> bool {
        !approx_eq(self.determinant(), 0.0)
    }

    pub fn inverted(&self) -> Result<Matrix, MatrixError> {
        let determinant = self.determinant();
        if approx_eq(determinant, 0.0) {
            return Err(MatrixError::NotInvertible { determinant });
        }

        // cofactor indices are swapped, which transposes the cofactor matrix
        Ok(Self::from_fn(self.size, |row, col| self.cofactor(col, row) / determinant))
    }
}

impl PartialEq for Matrix {

    fn eq(&self, other: &Self) -> bool {
        if self.size != other.size {
            return false;
        }

        (0..self.size * self.size).all(|i| approx_eq(self.values[i], other.values[i]))
    }
}

impl Mul for Matrix {

    type Output = Matrix;

    fn mul(self, rhs: Matrix) -> Self::Output {
        self.multiply(&rhs)
    }
}

impl Mul<Tuple> for Matrix {

    type Output = Tuple;

    fn mul(self, rhs: Tuple) -> Self::Output {
        self.multiply_tuple(&rhs)
    }
}

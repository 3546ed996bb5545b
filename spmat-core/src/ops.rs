//! Arithmetic over sparse matrices
//!
//! Every operation leaves its operands untouched and returns a freshly
//! built matrix. Values are combined with checked integer arithmetic.

use crate::{Result, SparseMatrix, SpmatError};
use alloc::string::ToString;
use core::str::FromStr;

/// Which entries a subtraction visits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum SubtractMode {
    /// Visit only the subtrahend's keys; entries stored only in the
    /// minuend do not appear in the result
    #[default]
    KeyDriven,
    /// Visit the union of both key sets
    Union,
}

/// Binary operation offered by the calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
}

impl Operation {
    /// All operations in menu order
    pub const ALL: [Operation; 3] = [Operation::Add, Operation::Subtract, Operation::Multiply];

    /// Resolve a menu choice (`A`, `B` or `C`)
    ///
    /// Surrounding whitespace is ignored; the letter is case-sensitive.
    pub fn from_choice(choice: &str) -> Result<Self> {
        match choice.trim() {
            "A" => Ok(Operation::Add),
            "B" => Ok(Operation::Subtract),
            "C" => Ok(Operation::Multiply),
            other => Err(SpmatError::InvalidOperationChoice {
                choice: other.to_string(),
            }),
        }
    }

    /// Menu letter for this operation
    pub const fn choice(self) -> char {
        match self {
            Operation::Add => 'A',
            Operation::Subtract => 'B',
            Operation::Multiply => 'C',
        }
    }

    /// Noun form, also used to name output files
    pub const fn name(self) -> &'static str {
        match self {
            Operation::Add => "addition",
            Operation::Subtract => "subtraction",
            Operation::Multiply => "multiplication",
        }
    }

    /// Verb form
    pub const fn method(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
        }
    }

    /// Apply this operation to `lhs` and `rhs`
    pub fn apply(
        self,
        lhs: &SparseMatrix,
        rhs: &SparseMatrix,
        subtract_mode: SubtractMode,
    ) -> Result<SparseMatrix> {
        match self {
            Operation::Add => lhs.add(rhs),
            Operation::Subtract => lhs.subtract_with(rhs, subtract_mode),
            Operation::Multiply => lhs.multiply(rhs),
        }
    }
}

impl core::fmt::Display for Operation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = SpmatError;

    /// Accepts a menu letter, a verb (`add`) or a noun (`addition`)
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Ok(op) = Operation::from_choice(s) {
            return Ok(op);
        }
        Operation::ALL
            .into_iter()
            .find(|op| op.method() == s || op.name() == s)
            .ok_or_else(|| SpmatError::InvalidOperationChoice {
                choice: s.to_string(),
            })
    }
}

impl SparseMatrix {
    fn require_same_shape(&self, other: &SparseMatrix, operation: &'static str) -> Result<()> {
        if self.shape() != other.shape() {
            return Err(SpmatError::DimensionMismatch {
                operation,
                lhs: self.shape(),
                rhs: other.shape(),
            });
        }
        Ok(())
    }

    /// Element-wise sum
    ///
    /// Keys stored in either operand appear in the result.
    pub fn add(&self, other: &SparseMatrix) -> Result<SparseMatrix> {
        self.require_same_shape(other, "add")?;

        let mut result = SparseMatrix::new(self.num_rows(), self.num_cols());
        for ((row, col), value) in self {
            result.set_element(row, col, value);
        }
        for ((row, col), value) in other {
            let sum = result
                .get_element(row, col)
                .checked_add(value)
                .ok_or(SpmatError::ArithmeticOverflow { row, col })?;
            result.set_element(row, col, sum);
        }

        Ok(result)
    }

    /// Element-wise difference using [`SubtractMode::KeyDriven`]
    ///
    /// Only keys stored in `other` are visited, so an entry stored only in
    /// `self` is absent from the result. Use [`SparseMatrix::subtract_with`]
    /// with [`SubtractMode::Union`] for the mathematical difference.
    pub fn subtract(&self, other: &SparseMatrix) -> Result<SparseMatrix> {
        self.subtract_with(other, SubtractMode::KeyDriven)
    }

    /// Element-wise difference visiting the keys selected by `mode`
    pub fn subtract_with(&self, other: &SparseMatrix, mode: SubtractMode) -> Result<SparseMatrix> {
        self.require_same_shape(other, "subtract")?;

        let mut result = SparseMatrix::new(self.num_rows(), self.num_cols());
        let mut store_difference = |row: i64, col: i64| -> Result<()> {
            let diff = self
                .get_element(row, col)
                .checked_sub(other.get_element(row, col))
                .ok_or(SpmatError::ArithmeticOverflow { row, col })?;
            result.set_element(row, col, diff);
            Ok(())
        };

        if mode == SubtractMode::Union {
            for ((row, col), _) in self {
                store_difference(row, col)?;
            }
        }
        for ((row, col), _) in other {
            store_difference(row, col)?;
        }

        Ok(result)
    }

    /// Matrix product
    ///
    /// Compares every stored entry of `self` with every stored entry of
    /// `other`; no row index is built.
    pub fn multiply(&self, other: &SparseMatrix) -> Result<SparseMatrix> {
        if self.num_cols() != other.num_rows() {
            return Err(SpmatError::DimensionMismatch {
                operation: "multiply",
                lhs: self.shape(),
                rhs: other.shape(),
            });
        }

        let mut result = SparseMatrix::new(self.num_rows(), other.num_cols());
        for ((row1, col1), value1) in self {
            for ((row2, col2), value2) in other {
                if col1 != row2 {
                    continue;
                }
                let overflow = SpmatError::ArithmeticOverflow {
                    row: row1,
                    col: col2,
                };
                let product = value1.checked_mul(value2).ok_or(overflow.clone())?;
                let acc = result
                    .get_element(row1, col2)
                    .checked_add(product)
                    .ok_or(overflow)?;
                result.set_element(row1, col2, acc);
            }
        }

        Ok(result)
    }
}

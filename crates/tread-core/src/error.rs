// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Error taxonomy for the math kernel.

use thiserror::Error;

/// Errors raised by matrix and vector operations.
///
/// These are contract violations: callers composed incompatible operands or
/// fed degenerate input into an operation that cannot produce a meaningful
/// result. They are never used to signal ordinary "no result" outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MathError {
    /// Operand shapes are incompatible for the requested operation.
    #[error("dimension mismatch in {op}: {lhs_rows}x{lhs_cols} vs {rhs_rows}x{rhs_cols}")]
    DimensionMismatch {
        /// Name of the failing operation.
        op: &'static str,
        /// Rows of the left operand.
        lhs_rows: usize,
        /// Columns of the left operand.
        lhs_cols: usize,
        /// Rows of the right operand.
        rhs_rows: usize,
        /// Columns of the right operand.
        rhs_cols: usize,
    },
    /// The operation requires a 4x4 affine matrix.
    #[error("{op} requires a 4x4 matrix, got {rows}x{cols}")]
    NotAffine {
        /// Name of the failing operation.
        op: &'static str,
        /// Rows of the operand.
        rows: usize,
        /// Columns of the operand.
        cols: usize,
    },
    /// Backing data length does not match the declared shape.
    #[error("matrix data length {len} does not match {rows}x{cols}")]
    InvalidData {
        /// Declared rows.
        rows: usize,
        /// Declared columns.
        cols: usize,
        /// Supplied element count.
        len: usize,
    },
    /// Input is too close to zero length for the operation to be defined.
    #[error("degenerate input to {0}")]
    Degenerate(&'static str),
}

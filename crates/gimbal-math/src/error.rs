// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use thiserror::Error;

/// Errors surfaced by the strict (`try_*`) math operations.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum MathError {
    /// The matrix determinant is exactly zero, so no inverse exists.
    #[error("matrix is singular (determinant is zero)")]
    Singular,
    /// The vector length is at or below [`crate::EPSILON`].
    #[error("cannot normalize a zero-length vector")]
    ZeroLength,
}

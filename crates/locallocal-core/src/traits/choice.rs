// SPDX-FileCopyrightText: 2026 LocalLocal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Randomness source used when a reply draws from a pool.

/// Picks an index into a pool of `len` candidates.
///
/// Implementations must return a value in `0..len`. Callers never pass `len == 0`.
pub trait ChoiceSource: Send + Sync {
    fn pick(&self, len: usize) -> usize;
}

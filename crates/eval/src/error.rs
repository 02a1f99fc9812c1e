// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Engine error types.
use thiserror::Error;

/// Errors reported by the evaluator and the equity estimator.
///
/// All of them are precondition violations detected before any trial
/// runs; an estimate either completes in full or reports one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The evaluator needs at least five cards to score a hand.
    #[error("hand evaluation needs at least 5 cards, got {0}")]
    InsufficientCards(usize),
    /// The opponents count is outside the table-size policy.
    #[error("opponents count must be between 1 and {max}, got {given}")]
    InvalidOpponentCount {
        /// The rejected count.
        given: usize,
        /// The largest supported count.
        max: usize,
    },
    /// The dealing pool cannot complete the board and deal every opponent.
    #[error("the dealing pool has {available} cards, dealing needs {needed}")]
    InsufficientDeck {
        /// Cards left in the pool.
        available: usize,
        /// Cards one trial consumes.
        needed: usize,
    },
}

/// Engine result type.
pub type Result<T> = std::result::Result<T, Error>;

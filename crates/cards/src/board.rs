// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Player and community cards for one hand.
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::Card;

/// The two private cards held by one player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoleCards(pub Card, pub Card);

impl HoleCards {
    /// Returns both cards.
    pub fn cards(&self) -> [Card; 2] {
        [self.0, self.1]
    }
}

impl fmt::Display for HoleCards {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.0, self.1)
    }
}

/// The community cards known so far.
///
/// A board has five slots, each holding a known card or still face down.
/// The checkpoints of a hand leave 0 (preflop), 3 (flop), 4 (turn), or
/// 5 (river) slots known.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    slots: [Option<Card>; Board::SIZE],
}

impl Board {
    /// The number of community cards slots.
    pub const SIZE: usize = 5;

    /// A board with no known cards.
    pub fn preflop() -> Self {
        Self::default()
    }

    /// A board with the three flop cards known.
    pub fn flop(c1: Card, c2: Card, c3: Card) -> Self {
        Self {
            slots: [Some(c1), Some(c2), Some(c3), None, None],
        }
    }

    /// A board with the flop and turn cards known.
    pub fn turn(c1: Card, c2: Card, c3: Card, c4: Card) -> Self {
        Self {
            slots: [Some(c1), Some(c2), Some(c3), Some(c4), None],
        }
    }

    /// A board with all five cards known.
    pub fn river(c1: Card, c2: Card, c3: Card, c4: Card, c5: Card) -> Self {
        Self {
            slots: [Some(c1), Some(c2), Some(c3), Some(c4), Some(c5)],
        }
    }

    /// Builds a board from the known cards of one of the hand checkpoints.
    ///
    /// Fails unless 0, 3, 4, or 5 cards are given.
    pub fn from_known(cards: &[Card]) -> Result<Self, InvalidBoardError> {
        match cards {
            [] => Ok(Self::preflop()),
            &[c1, c2, c3] => Ok(Self::flop(c1, c2, c3)),
            &[c1, c2, c3, c4] => Ok(Self::turn(c1, c2, c3, c4)),
            &[c1, c2, c3, c4, c5] => Ok(Self::river(c1, c2, c3, c4, c5)),
            _ => Err(InvalidBoardError(cards.len())),
        }
    }

    /// The board slots in dealing order.
    pub fn slots(&self) -> &[Option<Card>; Board::SIZE] {
        &self.slots
    }

    /// Iterates over the known cards.
    pub fn known(&self) -> impl Iterator<Item = Card> + '_ {
        self.slots.iter().flatten().copied()
    }

    /// The number of known cards.
    pub fn known_count(&self) -> usize {
        self.known().count()
    }

    /// The number of face down slots.
    pub fn unknown_count(&self) -> usize {
        Self::SIZE - self.known_count()
    }
}

/// Error for a known-cards count that isn't one of the hand checkpoints.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("a board has 0, 3, 4, or 5 known cards, got {0}")]
pub struct InvalidBoardError(pub usize);

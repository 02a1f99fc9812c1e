// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Riverodds Poker hand evaluator and equity estimator.
//!
//! The [eval] module scores 5 to 7 cards hands into a [HandValue] that
//! orders by hand category first and by a kicker proxy within the same
//! category:
//!
//! ```
//! # use riverodds_eval::*;
//! let quads = "9C 9D 9H 9S AC"
//!     .split(' ')
//!     .map(|c| c.parse::<Card>().unwrap())
//!     .collect::<Vec<_>>();
//! let value = HandValue::eval(&quads).unwrap();
//! assert_eq!(value.rank(), HandRank::FourOfAKind);
//! ```
//!
//! The [equity] module estimates the probability that a pair of hole cards
//! wins at showdown against independent opponents, dealing the unknown
//! board and opponent cards over many trials:
//!
//! ```
//! # use riverodds_eval::*;
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! let hole = HoleCards("AS".parse().unwrap(), "AH".parse().unwrap());
//! let mut rng = StdRng::seed_from_u64(42);
//! let p = equity::estimate(hole, &Board::preflop(), 1, 1_000, &mut rng).unwrap();
//! assert!(p > 0.5);
//! ```
//!
//! The **`parallel`** feature adds [equity::par_estimate] which splits the
//! trials across worker threads with independent random streams derived
//! from one seed.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod equity;
pub mod eval;

mod error;

pub use error::{Error, Result};
pub use eval::{HandRank, HandValue};

// Reexport cards types.
pub use riverodds_cards::{Board, Card, Deck, HoleCards, Rank, Suit};

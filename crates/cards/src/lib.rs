// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Riverodds Poker cards types.
//!
//! This crate defines types to create cards:
//!
//! ```
//! # use riverodds_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd = Card::new(Rank::King, Suit::Diamonds);
//! assert!(ah != kd);
//! ```
//!
//! cards parse from the text codes used by card input fields, with `10`
//! accepted as an alias for the ten rank:
//!
//! ```
//! # use riverodds_cards::{Card, Rank, Suit};
//! let ts = "10S".parse::<Card>().unwrap();
//! assert_eq!(ts, Card::new(Rank::Ten, Suit::Spades));
//! assert_eq!(ts.to_string(), "TS");
//! ```
//!
//! and a [Deck] type for building the dealing pool for a hand: remove the
//! cards a player can already see, then draw from an unbiased shuffle of
//! the remainder:
//!
//! ```
//! # use riverodds_cards::{Card, Deck, Rank, Suit};
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! let mut deck = Deck::default();
//! deck.remove(Card::new(Rank::Ace, Suit::Hearts));
//! deck.remove(Card::new(Rank::Ace, Suit::Spades));
//! assert_eq!(deck.count(), 50);
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let dealt = deck.shuffled(&mut rng);
//! assert_eq!(dealt.len(), 50);
//! ```
//!
//! The [HoleCards] and [Board] types describe what a player knows about a
//! hand at the preflop, flop, turn, and river checkpoints.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod board;
mod deck;

pub use board::{Board, HoleCards, InvalidBoardError};
pub use deck::{Card, Deck, ParseCardError, Rank, Suit};

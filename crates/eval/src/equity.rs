// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Monte Carlo equity estimation.
//!
//! Estimates the probability that a pair of hole cards wins at showdown by
//! repeatedly dealing the unknown board and opponent cards from a shuffled
//! pool and scoring every hand with [HandValue::eval].
use rand::prelude::*;
use std::cmp::Ordering;

#[cfg(feature = "parallel")]
use std::thread;

use riverodds_cards::{Board, Deck, HoleCards};

use crate::{
    error::{Error, Result},
    eval::HandValue,
};

/// Default number of trials for one estimate.
pub const DEFAULT_TRIALS: usize = 10_000;

/// The largest supported opponents count, a full ring Hold'em table.
pub const MAX_OPPONENTS: usize = 9;

/// Estimates the probability that the hole cards win at showdown.
///
/// Runs `trials` independent deals of the face down board slots and of two
/// cards for each of `opponents` opponents. The hero wins a trial when his
/// hand strictly beats every opponent hand, and ties when the best
/// opponent hand is equal; the estimate is `(wins + ties / 2) / trials`,
/// in `[0, 1]`.
///
/// All randomness comes from the caller's `rng`, so a seeded generator
/// reproduces the estimate exactly.
///
/// Fails with [Error::InvalidOpponentCount] when `opponents` is outside
/// `1..=MAX_OPPONENTS`, and with [Error::InsufficientDeck] when the
/// dealing pool cannot cover the board completion plus every opponent.
///
/// Panics if `trials` is zero.
pub fn estimate<R: Rng>(
    hole: HoleCards,
    board: &Board,
    opponents: usize,
    trials: usize,
    rng: &mut R,
) -> Result<f64> {
    assert!(trials > 0, "trials must be positive");

    let pool = dealing_pool(hole, board, opponents)?;
    let tally = run_trials(&pool, hole, board, opponents, trials, rng)?;
    Ok(tally.equity(trials))
}

/// Estimates equity splitting the trials across worker threads.
///
/// Each of the `tasks` workers draws from its own random stream derived
/// from `seed` and the task id, and counts wins and ties on its own; the
/// per task counts sum into the final estimate. The trial count rounds up
/// to a multiple of `tasks`. For a fixed `seed` and `tasks` pair the
/// estimate is reproducible.
///
/// Panics if `trials` or `tasks` is zero.
#[cfg(feature = "parallel")]
pub fn par_estimate(
    hole: HoleCards,
    board: &Board,
    opponents: usize,
    trials: usize,
    tasks: usize,
    seed: u64,
) -> Result<f64> {
    assert!(trials > 0, "trials must be positive");
    assert!(tasks > 0, "tasks must be positive");

    let pool = dealing_pool(hole, board, opponents)?;
    let per_task = trials.div_ceil(tasks);

    let mut tallies = vec![Ok(Tally::default()); tasks];
    thread::scope(|s| {
        for (task_id, tally) in tallies.iter_mut().enumerate() {
            let pool = &pool;
            s.spawn(move || {
                let mut rng = SmallRng::seed_from_u64(seed.wrapping_add(task_id as u64));
                *tally = run_trials(pool, hole, board, opponents, per_task, &mut rng);
            });
        }
    });

    let mut total = Tally::default();
    for tally in tallies {
        total.merge(tally?);
    }

    Ok(total.equity(per_task * tasks))
}

/// Win and tie counters for a batch of trials.
#[derive(Debug, Default, Clone, Copy)]
struct Tally {
    wins: u64,
    ties: u64,
}

impl Tally {
    #[cfg(feature = "parallel")]
    fn merge(&mut self, other: Tally) {
        self.wins += other.wins;
        self.ties += other.ties;
    }

    /// A tie splits the pot, so it counts as half a win.
    fn equity(&self, trials: usize) -> f64 {
        (self.wins as f64 + 0.5 * self.ties as f64) / trials as f64
    }
}

/// The outcome of a single trial for the hero.
enum Outcome {
    Win,
    Tie,
    Loss,
}

/// Builds the dealing pool for a hand.
///
/// The pool is the full deck minus the hero cards and the known board
/// cards, each removed exactly once.
fn dealing_pool(hole: HoleCards, board: &Board, opponents: usize) -> Result<Deck> {
    if !(1..=MAX_OPPONENTS).contains(&opponents) {
        return Err(Error::InvalidOpponentCount {
            given: opponents,
            max: MAX_OPPONENTS,
        });
    }

    let mut deck = Deck::default();
    deck.remove(hole.0);
    deck.remove(hole.1);
    for card in board.known() {
        deck.remove(card);
    }

    let needed = board.unknown_count() + 2 * opponents;
    if deck.count() < needed {
        return Err(Error::InsufficientDeck {
            available: deck.count(),
            needed,
        });
    }

    Ok(deck)
}

fn run_trials<R: Rng>(
    pool: &Deck,
    hole: HoleCards,
    board: &Board,
    opponents: usize,
    trials: usize,
    rng: &mut R,
) -> Result<Tally> {
    let mut tally = Tally::default();
    for _ in 0..trials {
        match run_trial(pool, hole, board, opponents, rng)? {
            Outcome::Win => tally.wins += 1,
            Outcome::Tie => tally.ties += 1,
            Outcome::Loss => {}
        }
    }

    Ok(tally)
}

/// Runs one trial: complete the board, deal the opponents, compare hands.
fn run_trial<R: Rng>(
    pool: &Deck,
    hole: HoleCards,
    board: &Board,
    opponents: usize,
    rng: &mut R,
) -> Result<Outcome> {
    let dealt = pool.shuffled(rng);
    let mut next = 0;

    // Complete the board in slot order before any opponent draws; every
    // slot of the array is overwritten.
    let mut community = [hole.0; Board::SIZE];
    for (out, slot) in community.iter_mut().zip(board.slots()) {
        *out = match slot {
            Some(card) => *card,
            None => {
                let card = dealt[next];
                next += 1;
                card
            }
        };
    }

    let mut hand = [
        hole.0,
        hole.1,
        community[0],
        community[1],
        community[2],
        community[3],
        community[4],
    ];
    let hero = HandValue::eval(&hand)?;

    // Reuse the evaluation array for each opponent, the community cards
    // stay in place.
    let mut outcome = Outcome::Win;
    for _ in 0..opponents {
        hand[0] = dealt[next];
        hand[1] = dealt[next + 1];
        next += 2;

        let villain = HandValue::eval(&hand)?;
        match hero.cmp(&villain) {
            Ordering::Less => return Ok(Outcome::Loss),
            Ordering::Equal => outcome = Outcome::Tie,
            Ordering::Greater => {}
        }
    }

    Ok(outcome)
}

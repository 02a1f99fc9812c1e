// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Prints the win probability of each starting hand.
//
// ```bash
// $ cargo r --release --features=parallel --example chart
// ```
use clap::{Parser, value_parser};
use std::time::Instant;

use riverodds_eval::*;

fn run_sim(c1: Card, c2: Card, n_against: usize, seed: u64) -> f64 {
    const NUM_TASKS: usize = 4;
    const TRIALS: usize = 100_000;

    assert_ne!(c1, c2);

    let p = equity::par_estimate(
        HoleCards(c1, c2),
        &Board::preflop(),
        n_against,
        TRIALS,
        NUM_TASKS,
        seed,
    )
    .expect("opponents count in range");

    p * 100.0
}

fn separator() {
    print!("|");
    for _ in 0..13 {
        print!("-----|");
    }
    println!();
}

#[derive(Debug, Parser)]
struct Cli {
    /// The number of opposing players.
    #[clap(long, short, default_value_t = 1, value_parser = value_parser!(u8).range(1..=9))]
    num_players: u8,
}

fn main() {
    let cli = Cli::parse();
    let num_players = cli.num_players as usize;

    separator();

    let now = Instant::now();
    let mut seed = 0;

    for r1 in Rank::ranks().rev() {
        let mut labels = Vec::with_capacity(13);
        let mut probs = Vec::with_capacity(13);

        for r2 in Rank::ranks().rev() {
            let (c1, c2) = if r1 < r2 || r1 == r2 {
                // Offsuit or pair
                (Card::new(r2, Suit::Hearts), Card::new(r1, Suit::Spades))
            } else {
                // Suited cards
                (Card::new(r1, Suit::Hearts), Card::new(r2, Suit::Hearts))
            };

            if c1.rank() == c2.rank() {
                labels.push(format!("{}{} ", c1.rank(), c2.rank()));
            } else if c1.suit() == c2.suit() {
                labels.push(format!("{}{}s", c1.rank(), c2.rank()));
            } else {
                labels.push(format!("{}{}o", c1.rank(), c2.rank()));
            }

            seed += 1;
            probs.push(run_sim(c1, c2, num_players, seed).round());
        }

        print!("|");
        for label in labels {
            print!(" {label} |");
        }

        println!();

        print!("|");
        for prob in &probs {
            print!(" {:2.0}% |", prob.ceil());
        }
        println!();

        separator();
    }

    println!("Elapsed: {:.3}s", now.elapsed().as_secs_f64());
}

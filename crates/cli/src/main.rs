// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Riverodds equity calculator CLI.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Result, bail};
use clap::Parser;
use log::info;

use riverodds_eval::{Board, Card, HoleCards, equity};

#[derive(Debug, Parser)]
struct Cli {
    /// The two hole cards, e.g. AH,KD.
    #[clap(long, value_delimiter = ',', num_args = 2, required = true)]
    hole: Vec<Card>,
    /// The known board cards, 3 for the flop, 4 for the turn, 5 for the river.
    #[clap(long, short, value_delimiter = ',', num_args = 1..=5)]
    board: Option<Vec<Card>>,
    /// The number of opponents.
    #[clap(long, short, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=9))]
    opponents: u8,
    /// The number of simulation trials.
    #[clap(long, short, default_value_t = equity::DEFAULT_TRIALS)]
    trials: usize,
    /// Seed for reproducible runs.
    #[clap(long, short)]
    seed: Option<u64>,
    /// The number of worker tasks.
    #[cfg(feature = "parallel")]
    #[clap(long, default_value_t = 4, value_parser = clap::value_parser!(u8).range(1..=64))]
    tasks: u8,
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();

    let hole = HoleCards(cli.hole[0], cli.hole[1]);
    let board = Board::from_known(&cli.board.clone().unwrap_or_default())?;

    // Repeated cards across the two fields are caught here, the engine
    // only sees distinct cards.
    let mut seen: Vec<Card> = Vec::with_capacity(7);
    for card in hole.cards().into_iter().chain(board.known()) {
        if seen.contains(&card) {
            bail!("card {card} entered twice");
        }
        seen.push(card);
    }

    let opponents = cli.opponents as usize;
    info!(
        "hole {}, {} known board cards, {} opponents, {} trials",
        hole,
        board.known_count(),
        opponents,
        cli.trials
    );

    let equity = run(&cli, hole, &board, opponents)?;
    println!("Win probability: {:.1}%", equity * 100.0);

    Ok(())
}

#[cfg(not(feature = "parallel"))]
fn run(cli: &Cli, hole: HoleCards, board: &Board, opponents: usize) -> Result<f64> {
    use rand::{SeedableRng, rngs::StdRng};

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    Ok(equity::estimate(hole, board, opponents, cli.trials, &mut rng)?)
}

#[cfg(feature = "parallel")]
fn run(cli: &Cli, hole: HoleCards, board: &Board, opponents: usize) -> Result<f64> {
    use rand::Rng;

    let seed = cli.seed.unwrap_or_else(|| rand::rng().random());
    Ok(equity::par_estimate(
        hole,
        board,
        opponents,
        cli.trials,
        cli.tasks as usize,
        seed,
    )?)
}

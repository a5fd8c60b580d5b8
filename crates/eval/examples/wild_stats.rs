// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release --example wild_stats -- --variant baseball --samples 100000
// ```

use clap::{Parser, ValueEnum};
use rand::prelude::*;
use std::time::Instant;

use deuces_eval::*;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum VariantArg {
    Baseball,
    FollowTheQueen,
    KingsAndLows,
    KingsAndLowsDraw,
}

#[derive(Debug, Parser)]
struct Cli {
    /// The variant to sample.
    #[clap(long, value_enum, default_value_t = VariantArg::Baseball)]
    variant: VariantArg,
    /// Number of sampled hands.
    #[clap(long, default_value_t = 100_000)]
    samples: usize,
    /// Random seed.
    #[clap(long, default_value_t = 101)]
    seed: u64,
    /// Number of players at the table.
    #[clap(long, default_value_t = 5, value_parser = clap::value_parser!(u8).range(1..=7))]
    players: u8,
}

fn main() {
    let cli = Cli::parse();
    let mut rng = StdRng::seed_from_u64(cli.seed);

    let variant = match cli.variant {
        VariantArg::Baseball => Variant::Baseball,
        VariantArg::FollowTheQueen => Variant::FollowTheQueen,
        VariantArg::KingsAndLows => Variant::KingsAndLows {
            king_required: false,
        },
        VariantArg::KingsAndLowsDraw => Variant::KingsAndLowsDraw {
            king_required: false,
        },
    };

    let now = Instant::now();
    let mut counts = [0usize; 10];
    let mut wilds = 0usize;

    for _ in 0..cli.samples {
        let Some(deal) = deal_table(variant, cli.players as usize, &mut rng) else {
            eprintln!("Not enough cards for {} players", cli.players);
            return;
        };

        match VariantHand::new(variant, deal.cards, &deal.deals, RankingScheme::Classic) {
            Ok(hand) => {
                counts[RankingScheme::Classic.order(hand.hand_type()) as usize] += 1;
                wilds += hand.wild_cards().len();
            }
            Err(e) => {
                eprintln!("Evaluation error: {e}");
                return;
            }
        }
    }

    let elapsed = now.elapsed().as_secs_f64();
    let total = counts.iter().sum::<usize>();
    println!("Variant          {variant}");
    println!("Total hands      {total}");
    println!("Elapsed:         {:.3}s", elapsed);
    println!("Hands/sec:       {:.0}", total as f64 / elapsed);
    println!("Wilds/hand:      {:.2}\n", wilds as f64 / total.max(1) as f64);

    for hand_type in RankingScheme::Classic.types() {
        let count = counts[RankingScheme::Classic.order(hand_type) as usize];
        println!(
            "{:<17}{count:>9} {:>7.3}%",
            format!("{hand_type}:"),
            100.0 * count as f64 / total.max(1) as f64
        );
    }
}

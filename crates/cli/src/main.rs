// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Deuces CLI, evaluates a wild cards poker hand.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use log::error;

use deuces_eval::{Card, DealEvent, HandCards, RankingScheme, Variant, parse_cards};

mod app;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum VariantArg {
    Baseball,
    FollowTheQueen,
    KingsAndLows,
    KingsAndLowsDraw,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SchemeArg {
    Classic,
    StraightFlushHigh,
}

#[derive(Debug, Parser)]
struct Cli {
    /// The poker variant.
    #[clap(long, value_enum, default_value_t = VariantArg::Baseball)]
    variant: VariantArg,
    /// Kings and Lows low cards are wild only with a king.
    #[clap(long)]
    king_required: bool,
    /// The hand types ranking scheme.
    #[clap(long, value_enum, default_value_t = SchemeArg::Classic)]
    scheme: SchemeArg,
    /// Stud hole cards, i.e. "3H 9D".
    #[clap(long)]
    hole: Option<String>,
    /// Stud board cards in deal order.
    #[clap(long)]
    board: Option<String>,
    /// Stud final down card.
    #[clap(long)]
    down: Option<String>,
    /// Draw hand cards.
    #[clap(long)]
    cards: Option<String>,
    /// Face up cards dealt at the table in deal order, for Follow the Queen.
    #[clap(long)]
    deals: Option<String>,
    /// Deal a random hand.
    #[clap(long, conflicts_with_all = ["hole", "board", "down", "cards", "deals"])]
    random: bool,
    /// Seed for the random hand.
    #[clap(long, requires = "random")]
    seed: Option<u64>,
    /// Number of players at the table for random stud hands.
    #[clap(long, default_value_t = 3, value_parser = clap::value_parser!(u8).range(1..=7))]
    players: u8,
    /// Print the result as JSON.
    #[clap(long)]
    json: bool,
    /// Enable debug logs.
    #[clap(long, short)]
    verbose: bool,
}

impl Cli {
    fn into_config(self) -> Result<app::Config> {
        let variant = match self.variant {
            VariantArg::Baseball | VariantArg::FollowTheQueen if self.king_required => {
                bail!("--king-required only applies to the Kings and Lows variants")
            }
            VariantArg::Baseball => Variant::Baseball,
            VariantArg::FollowTheQueen => Variant::FollowTheQueen,
            VariantArg::KingsAndLows => Variant::KingsAndLows {
                king_required: self.king_required,
            },
            VariantArg::KingsAndLowsDraw => Variant::KingsAndLowsDraw {
                king_required: self.king_required,
            },
        };

        let scheme = match self.scheme {
            SchemeArg::Classic => RankingScheme::Classic,
            SchemeArg::StraightFlushHigh => RankingScheme::StraightFlushHigh,
        };

        let hand = if self.random {
            app::HandSource::Random {
                seed: self.seed,
                players: self.players as usize,
            }
        } else {
            let cards = match (self.cards, self.hole, self.board, self.down) {
                (Some(cards), None, None, None) => HandCards::Draw(cards_arg("cards", &cards)?),
                (None, Some(hole), Some(board), Some(down)) => HandCards::Stud {
                    hole: cards_arg("hole", &hole)?,
                    board: cards_arg("board", &board)?,
                    down: down
                        .trim()
                        .parse::<Card>()
                        .with_context(|| format!("Invalid down card {down}"))?,
                },
                _ => bail!("Use --cards for draw hands or --hole, --board and --down for stud"),
            };

            let deals = match self.deals {
                Some(deals) => cards_arg("deals", &deals)?
                    .into_iter()
                    .map(DealEvent::up)
                    .collect(),
                None => Vec::new(),
            };

            app::HandSource::Cards { cards, deals }
        };

        Ok(app::Config {
            variant,
            scheme,
            hand,
            json: self.json,
        })
    }
}

fn cards_arg(name: &str, s: &str) -> Result<Vec<Card>> {
    parse_cards(s).with_context(|| format!("Invalid --{name} cards {s:?}"))
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::builder()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    if let Err(e) = cli.into_config().and_then(app::run) {
        error!("{e:#}");
        std::process::exit(1);
    }
}

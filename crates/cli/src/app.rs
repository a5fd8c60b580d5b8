// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand evaluation command.
use anyhow::{Context, Result};
use log::{debug, info};
use rand::prelude::*;

use deuces_eval::{Card, DealEvent, HandCards, RankingScheme, Variant, VariantHand, deal_table};

/// Where the evaluated hand comes from.
#[derive(Debug)]
pub enum HandSource {
    /// Cards from the command line.
    Cards {
        /// The player cards.
        cards: HandCards,
        /// Cards dealt at the table in deal order.
        deals: Vec<DealEvent>,
    },
    /// A random deal.
    Random {
        /// Optional rng seed.
        seed: Option<u64>,
        /// Players at the table.
        players: usize,
    },
}

/// The command configuration.
#[derive(Debug)]
pub struct Config {
    /// The poker variant.
    pub variant: Variant,
    /// The hand types ranking.
    pub scheme: RankingScheme,
    /// The hand to evaluate.
    pub hand: HandSource,
    /// Print JSON output.
    pub json: bool,
}

/// Evaluates the configured hand and prints the result.
pub fn run(config: Config) -> Result<()> {
    let (cards, deals) = match config.hand {
        HandSource::Cards { cards, deals } => (cards, deals),
        HandSource::Random { seed, players } => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            };
            let deal = deal_table(config.variant, players, &mut rng)
                .with_context(|| format!("Not enough cards for {players} players"))?;
            (deal.cards, deal.deals)
        }
    };

    debug!("Evaluating {} {:?}", config.variant, cards);
    let hand = VariantHand::new(config.variant, cards, &deals, config.scheme)?;
    info!("{} hand evaluated", config.variant);

    if config.json {
        println!("{}", serde_json::to_string_pretty(hand.resolved())?);
        return Ok(());
    }

    let resolved = hand.resolved();
    println!("Variant:   {}", hand.variant());
    println!("Cards:     {}", cards_str(hand.cards()));
    let up = deals.iter().filter(|d| d.face_up).map(|d| d.card).collect::<Vec<_>>();
    if !up.is_empty() {
        println!("Face up:   {}", cards_str(&up));
    }
    println!("Wilds:     {}", cards_str(resolved.wild_cards()));
    println!("Best:      {}", cards_str(resolved.best_cards()));
    println!("Plays as:  {}", cards_str(resolved.played_as()));
    if let Some(ace_mode) = resolved.ace_mode() {
        println!("Aces:      {ace_mode:?}");
    }
    println!("Hand:      {}", resolved.description());
    println!("Strength:  {}", resolved.strength());

    Ok(())
}

fn cards_str(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "-".to_string();
    }

    cards
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_random_hands() {
        for variant in [
            Variant::Baseball,
            Variant::FollowTheQueen,
            Variant::KingsAndLowsDraw {
                king_required: false,
            },
        ] {
            let config = Config {
                variant,
                scheme: RankingScheme::Classic,
                hand: HandSource::Random {
                    seed: Some(17),
                    players: 7,
                },
                json: false,
            };
            assert!(run(config).is_ok());
        }
    }

    #[test]
    fn run_with_cards() {
        let config = Config {
            variant: Variant::Baseball,
            scheme: RankingScheme::Classic,
            hand: HandSource::Cards {
                cards: HandCards::Stud {
                    hole: deuces_eval::parse_cards("3H 9D").unwrap(),
                    board: deuces_eval::parse_cards("5C JS TS 2D").unwrap(),
                    down: "KH".parse().unwrap(),
                },
                deals: Vec::new(),
            },
            json: true,
        };
        assert!(run(config).is_ok());

        let config = Config {
            variant: Variant::Baseball,
            scheme: RankingScheme::Classic,
            hand: HandSource::Cards {
                cards: HandCards::Draw(deuces_eval::parse_cards("3H 9D 5C JS TS").unwrap()),
                deals: Vec::new(),
            },
            json: false,
        };
        assert!(run(config).is_err());
    }
}

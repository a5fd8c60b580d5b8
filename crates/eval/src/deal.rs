// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Random table deals for sampling and demos.
use rand::prelude::*;

use crate::{Card, DealEvent, Deck, HandCards, Layout, Rank, Variant};

/// A hand dealt to the first seat of a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableDeal {
    /// The first seat cards.
    pub cards: HandCards,
    /// Every card dealt at the table in deal order.
    pub deals: Vec<DealEvent>,
}

/// Deals a hand to the first of `players` seats from a shuffled deck.
///
/// Stud hands are dealt the way they are at the table: hole cards around the
/// table, then one face up card per seat and street, then the first seat down
/// card. In Baseball a four dealt face up to the first seat gets it a bonus
/// face up card. Other seats final down cards don't change the first seat
/// hand and are not dealt.
///
/// Returns None if the deck runs out of cards, with up to 7 players a hand
/// is always dealt.
pub fn deal_table<R: Rng + ?Sized>(
    variant: Variant,
    players: usize,
    rng: &mut R,
) -> Option<TableDeal> {
    let mut deck = Deck::new_and_shuffled(rng);
    let players = players.max(1);

    match variant.layout() {
        Layout::Stud { hole, board } => {
            let mut deals = Vec::new();
            let mut player_hole = Vec::with_capacity(hole);
            let mut player_board = Vec::with_capacity(*board.end());

            for _ in 0..hole {
                for seat in 0..players {
                    let card = deck.deal()?;
                    if seat == 0 {
                        player_hole.push(card);
                    }
                    deals.push(DealEvent::down(card));
                }
            }

            for _ in 0..*board.start() {
                for seat in 0..players {
                    let mut card = deck.deal()?;
                    deals.push(DealEvent::up(card));
                    if seat != 0 {
                        continue;
                    }

                    player_board.push(card);
                    while has_bonus(variant, card) && player_board.len() < *board.end() {
                        card = deck.deal()?;
                        deals.push(DealEvent::up(card));
                        player_board.push(card);
                    }
                }
            }

            let down = deck.deal()?;
            deals.push(DealEvent::down(down));

            Some(TableDeal {
                cards: HandCards::Stud {
                    hole: player_hole,
                    board: player_board,
                    down,
                },
                deals,
            })
        }
        Layout::Draw { cards } => {
            let cards = (0..cards).map(|_| deck.deal()).collect::<Option<Vec<_>>>()?;
            Some(TableDeal {
                cards: HandCards::Draw(cards),
                deals: Vec::new(),
            })
        }
    }
}

fn has_bonus(variant: Variant, card: Card) -> bool {
    variant == Variant::Baseball && card.rank() == Rank::Four
}

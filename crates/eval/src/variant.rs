// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker variants hands.
//!
//! A [VariantHand] is a player hand laid out for a variant, it is evaluated
//! once when created and never changes after that, so it can be shared
//! between threads.
use serde::{Deserialize, Serialize};
use std::{fmt, ops::RangeInclusive};

use crate::{
    Card, DealEvent, EvalError, HandType, RankingScheme, ResolvedHand, Strength, WildPolicy,
    evaluate_with_policy,
};

/// A wild cards poker variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Variant {
    /// Seven card stud with threes and nines wild.
    Baseball,
    /// Seven card stud with queens wild and the rank that follows the last
    /// face up queen.
    FollowTheQueen,
    /// Seven card stud with kings and the lowest cards wild.
    KingsAndLows {
        /// Low cards are wild only if the player holds a king.
        king_required: bool,
    },
    /// Five card draw with kings and the lowest cards wild.
    KingsAndLowsDraw {
        /// Low cards are wild only if the player holds a king.
        king_required: bool,
    },
}

impl Variant {
    /// The variant display name.
    pub fn name(&self) -> &'static str {
        match self {
            Variant::Baseball => "Baseball",
            Variant::FollowTheQueen => "Follow the Queen",
            Variant::KingsAndLows { .. } => "Kings and Lows",
            Variant::KingsAndLowsDraw { .. } => "Kings and Lows Draw",
        }
    }

    /// The variant cards layout.
    pub fn layout(&self) -> Layout {
        match self {
            // A four dealt face up gets a bonus face up card.
            Variant::Baseball => Layout::Stud {
                hole: 2,
                board: 4..=8,
            },
            Variant::FollowTheQueen | Variant::KingsAndLows { .. } => Layout::Stud {
                hole: 2,
                board: 4..=4,
            },
            Variant::KingsAndLowsDraw { .. } => Layout::Draw { cards: 5 },
        }
    }

    /// The variant wild cards policy.
    pub fn policy(&self) -> WildPolicy {
        match *self {
            Variant::Baseball => WildPolicy::baseball(),
            Variant::FollowTheQueen => WildPolicy::follow_the_queen(),
            Variant::KingsAndLows { king_required }
            | Variant::KingsAndLowsDraw { king_required } => {
                WildPolicy::kings_and_lows(king_required)
            }
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// How a player cards are laid out in a variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Layout {
    /// Face down hole cards, face up board cards and a final down card.
    Stud {
        /// Number of hole cards.
        hole: usize,
        /// Allowed number of board cards.
        board: RangeInclusive<usize>,
    },
    /// A flat draw hand.
    Draw {
        /// Number of cards.
        cards: usize,
    },
}

impl Layout {
    /// Checks the player cards match this layout.
    pub fn check(&self, variant: Variant, cards: &HandCards) -> Result<(), EvalError> {
        match (self, cards) {
            (Layout::Stud { hole, board }, HandCards::Stud { hole: h, board: b, .. }) => {
                if h.len() != *hole {
                    return Err(EvalError::BadLayout {
                        param: "hole",
                        expected: hole.to_string(),
                        actual: h.len(),
                    });
                }

                if !board.contains(&b.len()) {
                    let expected = if board.start() == board.end() {
                        board.start().to_string()
                    } else {
                        format!("{} to {}", board.start(), board.end())
                    };

                    return Err(EvalError::BadLayout {
                        param: "board",
                        expected,
                        actual: b.len(),
                    });
                }

                Ok(())
            }
            (Layout::Draw { cards: n }, HandCards::Draw(c)) if c.len() != *n => {
                Err(EvalError::BadLayout {
                    param: "cards",
                    expected: n.to_string(),
                    actual: c.len(),
                })
            }
            (Layout::Draw { .. }, HandCards::Draw(_)) => Ok(()),
            _ => Err(EvalError::LayoutMismatch {
                variant: variant.name(),
            }),
        }
    }
}

/// A player cards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandCards {
    /// Stud cards.
    Stud {
        /// Face down hole cards.
        hole: Vec<Card>,
        /// Face up board cards in deal order.
        board: Vec<Card>,
        /// Final face down card.
        down: Card,
    },
    /// Draw cards.
    Draw(Vec<Card>),
}

impl HandCards {
    /// All the cards, for stud hole cards first, then board and down card.
    pub fn to_vec(&self) -> Vec<Card> {
        match self {
            HandCards::Stud { hole, board, down } => hole
                .iter()
                .chain(board.iter())
                .chain(std::iter::once(down))
                .copied()
                .collect(),
            HandCards::Draw(cards) => cards.clone(),
        }
    }
}

/// An evaluated player hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantHand {
    variant: Variant,
    cards: Vec<Card>,
    resolved: ResolvedHand,
}

impl VariantHand {
    /// Creates and evaluates a player hand.
    ///
    /// The `deals` are the cards dealt to all the players at the table in
    /// deal order, they are only used by Follow the Queen.
    pub fn new(
        variant: Variant,
        cards: HandCards,
        deals: &[DealEvent],
        scheme: RankingScheme,
    ) -> Result<Self, EvalError> {
        variant.layout().check(variant, &cards)?;

        let cards = cards.to_vec();
        let resolved = evaluate_with_policy(&cards, &variant.policy(), deals, scheme)?;

        Ok(Self {
            variant,
            cards,
            resolved,
        })
    }

    /// A Baseball hand.
    pub fn baseball(hole: &[Card], board: &[Card], down: Card) -> Result<Self, EvalError> {
        Self::new(Variant::Baseball, stud(hole, board, down), &[], RankingScheme::Classic)
    }

    /// A Follow the Queen hand, `deals` are all the cards dealt at the table.
    pub fn follow_the_queen(
        hole: &[Card],
        board: &[Card],
        down: Card,
        deals: &[DealEvent],
    ) -> Result<Self, EvalError> {
        Self::new(
            Variant::FollowTheQueen,
            stud(hole, board, down),
            deals,
            RankingScheme::Classic,
        )
    }

    /// A Kings and Lows stud hand.
    pub fn kings_and_lows(
        hole: &[Card],
        board: &[Card],
        down: Card,
        king_required: bool,
    ) -> Result<Self, EvalError> {
        Self::new(
            Variant::KingsAndLows { king_required },
            stud(hole, board, down),
            &[],
            RankingScheme::Classic,
        )
    }

    /// A Kings and Lows draw hand.
    pub fn kings_and_lows_draw(cards: &[Card], king_required: bool) -> Result<Self, EvalError> {
        Self::new(
            Variant::KingsAndLowsDraw { king_required },
            HandCards::Draw(cards.to_vec()),
            &[],
            RankingScheme::Classic,
        )
    }

    /// The hand variant.
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// All the player cards.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The hand type.
    pub fn hand_type(&self) -> HandType {
        self.resolved.hand_type()
    }

    /// The hand strength.
    pub fn strength(&self) -> Strength {
        self.resolved.strength()
    }

    /// The wild cards in the player cards.
    pub fn wild_cards(&self) -> &[Card] {
        self.resolved.wild_cards()
    }

    /// The five cards that make the best hand.
    pub fn best_cards(&self) -> &[Card; 5] {
        self.resolved.best_cards()
    }

    /// The full evaluation result.
    pub fn resolved(&self) -> &ResolvedHand {
        &self.resolved
    }
}

fn stud(hole: &[Card], board: &[Card], down: Card) -> HandCards {
    HandCards::Stud {
        hole: hole.to_vec(),
        board: board.to_vec(),
        down,
    }
}

/// Returns the indices of the hands with the highest strength.
pub fn showdown(hands: &[VariantHand]) -> Vec<usize> {
    let Some(max) = hands.iter().map(|h| h.strength()).max() else {
        return Vec::new();
    };

    hands
        .iter()
        .enumerate()
        .filter(|(_, h)| h.strength() == max)
        .map(|(idx, _)| idx)
        .collect()
}

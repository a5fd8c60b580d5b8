// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Deuces Poker wild cards hand evaluator.
//!
//! Finds the strongest five card hand that can be made from 5 to 16 cards
//! where some of the cards are wild and can stand for any card. Which cards
//! are wild is decided by a [WildPolicy], the [Variant] hands pick a policy
//! and a cards layout for the supported games.
//!
//! To evaluate a hand with explicit wild cards use [evaluate_best]:
//!
//! ```
//! # use deuces_eval::*;
//! let cards = parse_cards("2H 2D 2C KS 7H").unwrap();
//! let wilds = WildSet::from_cards(&cards, &parse_cards("7H").unwrap()).unwrap();
//! let hand = evaluate_best(&cards, wilds, RankingScheme::Classic).unwrap();
//! assert_eq!(hand.hand_type(), HandType::FourOfAKind);
//! assert_eq!(hand.description(), "Four of a Kind, Deuces");
//! ```
//!
//! or play a variant hand and compare it with others:
//!
//! ```
//! # use deuces_eval::*;
//! let c = |s: &str| parse_cards(s).unwrap();
//! let h1 = VariantHand::kings_and_lows_draw(&c("KH 5D 5C 9S 2H"), false).unwrap();
//! let h2 = VariantHand::kings_and_lows_draw(&c("8H 8D QC QS 3H"), false).unwrap();
//! assert_eq!(h1.hand_type(), HandType::FourOfAKind);
//! assert_eq!(showdown(&[h1, h2]), [0]);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

mod deal;
pub use deal::{TableDeal, deal_table};

mod describe;
pub use describe::describe;

mod error;
pub use error::EvalError;

mod evaluator;
pub use evaluator::{ResolvedHand, evaluate_best, evaluate_with_policy};

mod hand_type;
pub use hand_type::{HandType, RankingScheme};

pub mod strength;
pub use strength::Strength;

mod variant;
pub use variant::{HandCards, Layout, Variant, VariantHand, showdown};

mod wild;
pub use wild::{AceMode, DealEvent, RankSet, WildContext, WildPolicy, WildSet, follow_rank};

// Reexport cards types.
pub use deuces_cards::{Card, Deck, ParseCardError, Rank, Suit, for_each_ksubset, parse_cards};

// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Deuces Poker cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use deuces_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd: Card = "KD".parse().unwrap();
//! assert!(kd < ah);
//! ```
//!
//! and a [Deck] type for shuffling, sampling, and iterating cards in the deck.
//!
//! For example to iterate through all 3 cards hands:
//!
//! ```
//! # use deuces_cards::Deck;
//! let mut counter = 0;
//! Deck::default().for_each(3, |hand| {
//!     counter += 1;
//! });
//! assert_eq!(counter, 22_100);
//! ```
//!
//! to sample 10 random 5-cards hands:
//!
//! ```
//! # use deuces_cards::Deck;
//! let mut counter = 0;
//! Deck::default().sample(&mut rand::rng(), 10, 5, |hand| {
//!     assert_eq!(hand.len(), 5);
//!     counter += 1;
//! });
//! assert_eq!(counter, 10);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod cards;
pub use cards::{Card, ParseCardError, Rank, Suit, parse_cards};

mod deck;
pub use deck::{Deck, for_each_ksubset};

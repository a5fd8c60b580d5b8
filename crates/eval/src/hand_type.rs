// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand types and ranking schemes.
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};

/// A poker hand category.
///
/// Hand types don't implement [Ord], their relative order is given by a
/// [RankingScheme].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandType {
    /// High card.
    HighCard = 0,
    /// One pair.
    OnePair,
    /// Two pairs.
    TwoPair,
    /// Three of a kind.
    ThreeOfAKind,
    /// Straight.
    Straight,
    /// Flush.
    Flush,
    /// Full house.
    FullHouse,
    /// Four of a kind.
    FourOfAKind,
    /// Straight flush.
    StraightFlush,
    /// Five of a kind, only possible with wild cards.
    FiveOfAKind,
}

impl HandType {
    /// All hand types in Classic order.
    pub const ALL: [HandType; 10] = [
        HandType::HighCard,
        HandType::OnePair,
        HandType::TwoPair,
        HandType::ThreeOfAKind,
        HandType::Straight,
        HandType::Flush,
        HandType::FullHouse,
        HandType::FourOfAKind,
        HandType::StraightFlush,
        HandType::FiveOfAKind,
    ];

    /// The hand type display name.
    pub fn name(&self) -> &'static str {
        match self {
            HandType::HighCard => "High Card",
            HandType::OnePair => "One Pair",
            HandType::TwoPair => "Two Pair",
            HandType::ThreeOfAKind => "Three of a Kind",
            HandType::Straight => "Straight",
            HandType::Flush => "Flush",
            HandType::FullHouse => "Full House",
            HandType::FourOfAKind => "Four of a Kind",
            HandType::StraightFlush => "Straight Flush",
            HandType::FiveOfAKind => "Five of a Kind",
        }
    }
}

impl fmt::Display for HandType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The relative order of hand types.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RankingScheme {
    /// Five of a Kind beats Straight Flush.
    #[default]
    Classic,
    /// House rule where Straight Flush beats Five of a Kind.
    StraightFlushHigh,
}

impl RankingScheme {
    /// The position of a hand type in this scheme, 0 for High Card up to 9.
    pub fn order(&self, hand_type: HandType) -> u32 {
        match (self, hand_type) {
            (RankingScheme::StraightFlushHigh, HandType::StraightFlush) => 9,
            (RankingScheme::StraightFlushHigh, HandType::FiveOfAKind) => 8,
            (_, t) => t as u32,
        }
    }

    /// The hand type at the given position, inverse of [RankingScheme::order].
    pub fn hand_type(&self, order: u32) -> Option<HandType> {
        HandType::ALL
            .into_iter()
            .find(|&t| self.order(t) == order)
    }

    /// Hand types from the weakest to the strongest.
    pub fn types(&self) -> impl DoubleEndedIterator<Item = HandType> + '_ {
        (0..HandType::ALL.len() as u32).filter_map(move |o| self.hand_type(o))
    }

    /// Compares two hand types.
    pub fn compare(&self, a: HandType, b: HandType) -> Ordering {
        self.order(a).cmp(&self.order(b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_order() {
        let scheme = RankingScheme::Classic;
        let types = scheme.types().collect::<Vec<_>>();
        assert_eq!(types, HandType::ALL);

        assert_eq!(
            scheme.compare(HandType::FiveOfAKind, HandType::StraightFlush),
            Ordering::Greater
        );
        assert_eq!(
            scheme.compare(HandType::Flush, HandType::Straight),
            Ordering::Greater
        );
    }

    #[test]
    fn straight_flush_high_order() {
        let scheme = RankingScheme::StraightFlushHigh;
        let types = scheme.types().rev().take(3).collect::<Vec<_>>();
        assert_eq!(
            types,
            [
                HandType::StraightFlush,
                HandType::FiveOfAKind,
                HandType::FourOfAKind
            ]
        );

        for t in HandType::ALL {
            assert_eq!(scheme.hand_type(scheme.order(t)), Some(t));
        }

        assert_eq!(scheme.hand_type(10), None);
    }

    #[test]
    fn type_names() {
        assert_eq!(HandType::FullHouse.to_string(), "Full House");
        assert_eq!(HandType::FiveOfAKind.to_string(), "Five of a Kind");
    }
}

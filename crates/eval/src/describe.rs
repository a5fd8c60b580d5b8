// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand descriptions for the UI.
use crate::{HandType, Rank, Strength};

/// Describes a hand from its type and strength digits.
pub fn describe(hand_type: HandType, strength: Strength) -> String {
    let ranks = strength.digits().map(|d| Rank::from_value(d).unwrap_or(Rank::Deuce));
    let top = ranks[0];

    match hand_type {
        HandType::FiveOfAKind => format!("{hand_type}, {}", top.plural()),
        HandType::StraightFlush if top == Rank::Ace => "Royal Flush".to_string(),
        HandType::StraightFlush | HandType::Straight | HandType::Flush => {
            format!("{hand_type}, {} high", top.name())
        }
        HandType::FourOfAKind | HandType::ThreeOfAKind => {
            format!("{hand_type}, {}", top.plural())
        }
        HandType::FullHouse => {
            format!("{hand_type}, {} over {}", top.plural(), ranks[3].plural())
        }
        HandType::TwoPair => {
            format!("{hand_type}, {} and {}", top.plural(), ranks[2].plural())
        }
        HandType::OnePair => format!("Pair of {}", top.plural()),
        HandType::HighCard => format!("{hand_type}, {}", top.name()),
    }
}

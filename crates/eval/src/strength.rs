// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand strength encoder.
//!
//! A [Strength] packs a hand type and five rank digits in a single integer
//! so that hands compare with plain integer comparison:
//!
//! ```text
//!   +----+----+----+----+----+----+
//!   |tttt|d0d0|d1d1|d2d2|d3d3|d4d4|
//!   +----+----+----+----+----+----+
//!   t = hand type order in the ranking scheme (high card=0 .. 9)
//!   d = rank digits most significant first (deuce=2 .. ace=14, ace low=1)
//! ```
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{Card, HandType, RankingScheme};

/// A comparable hand strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Strength(u32);

impl Strength {
    const DIGIT_BITS: u32 = 4;
    const TYPE_SHIFT: u32 = 5 * Self::DIGIT_BITS;

    /// The weakest possible strength.
    pub const MIN: Strength = Strength(0);

    /// Creates a strength for a hand type and its rank digits.
    pub fn new(hand_type: HandType, digits: [u8; 5], scheme: RankingScheme) -> Self {
        let kickers = digits
            .iter()
            .fold(0u32, |acc, &d| (acc << Self::DIGIT_BITS) | (d as u32 & 0xF));
        Self((scheme.order(hand_type) << Self::TYPE_SHIFT) | kickers)
    }

    /// The raw encoded value.
    pub fn value(&self) -> u32 {
        self.0
    }

    /// The hand type, the scheme must be the one used to create this strength.
    pub fn hand_type(&self, scheme: RankingScheme) -> Option<HandType> {
        scheme.hand_type(self.0 >> Self::TYPE_SHIFT)
    }

    /// The rank digits most significant first.
    pub fn digits(&self) -> [u8; 5] {
        let mut digits = [0u8; 5];
        for (i, d) in digits.iter_mut().enumerate() {
            let shift = (4 - i as u32) * Self::DIGIT_BITS;
            *d = ((self.0 >> shift) & 0xF) as u8;
        }

        digits
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:06x}", self.0)
    }
}

/// Computes the hand type and rank digits of five natural cards.
///
/// Cards may repeat, a wild card can stand for a card that is already in
/// the hand.
pub fn categorize(cards: &[Card; 5]) -> (HandType, [u8; 5]) {
    // Count ranks by pip value, index 14 is the Ace.
    let mut counts = [0u8; 15];
    for c in cards {
        counts[c.rank().value() as usize] += 1;
    }

    // Groups sorted by count and then rank both descending.
    let mut groups = [(0u8, 0u8); 5];
    let mut num_groups = 0;
    for value in (2..=14u8).rev() {
        let count = counts[value as usize];
        if count > 0 {
            groups[num_groups] = (count, value);
            num_groups += 1;
        }
    }

    let groups = &mut groups[..num_groups];
    groups.sort_by(|a, b| b.cmp(a));

    let is_flush = cards.iter().all(|c| c.suit() == cards[0].suit());
    let straight_high = straight_high(&counts, num_groups);

    let hand_type = match (groups[0].0, groups.get(1).map(|g| g.0)) {
        (5, _) => HandType::FiveOfAKind,
        _ if is_flush && straight_high.is_some() => HandType::StraightFlush,
        (4, _) => HandType::FourOfAKind,
        (3, Some(2)) => HandType::FullHouse,
        _ if is_flush => HandType::Flush,
        _ if straight_high.is_some() => HandType::Straight,
        (3, _) => HandType::ThreeOfAKind,
        (2, Some(2)) => HandType::TwoPair,
        (2, _) => HandType::OnePair,
        _ => HandType::HighCard,
    };

    let mut digits = [0u8; 5];
    match (hand_type, straight_high) {
        (HandType::Straight | HandType::StraightFlush, Some(high)) => {
            // The wheel ends with 1 for the Ace playing low.
            for (i, d) in digits.iter_mut().enumerate() {
                *d = high - i as u8;
            }
        }
        (HandType::Flush, _) => {
            for (d, c) in digits.iter_mut().zip(cards) {
                *d = c.rank().value();
            }
            digits.sort_by(|a, b| b.cmp(a));
        }
        _ => {
            let expanded = groups
                .iter()
                .flat_map(|&(count, value)| std::iter::repeat_n(value, count as usize));
            for (d, v) in digits.iter_mut().zip(expanded) {
                *d = v;
            }
        }
    }

    (hand_type, digits)
}

/// Returns the top card value of a straight, 5 for the wheel.
fn straight_high(counts: &[u8; 15], num_groups: usize) -> Option<u8> {
    if num_groups != 5 {
        return None;
    }

    let values = (2..=14u8).filter(|&v| counts[v as usize] > 0);
    let (low, high) = values.fold((u8::MAX, 0), |(lo, hi), v| (lo.min(v), hi.max(v)));

    if high - low == 4 {
        Some(high)
    } else if counts[14] > 0 && (2..=5).all(|v| counts[v] > 0) {
        Some(5)
    } else {
        None
    }
}

/// Encodes five natural cards.
pub fn encode(cards: &[Card; 5], scheme: RankingScheme) -> Strength {
    let (hand_type, digits) = categorize(cards);
    Strength::new(hand_type, digits, scheme)
}

#[cfg(test)]
mod tests {
    use super::*;
    use deuces_cards::parse_cards;

    fn hand(s: &str) -> [Card; 5] {
        parse_cards(s).unwrap().try_into().unwrap()
    }

    fn eval(s: &str) -> Strength {
        encode(&hand(s), RankingScheme::Classic)
    }

    #[test]
    fn categories() {
        let cases = [
            ("AH KD 9C 7S 2H", HandType::HighCard),
            ("AH AD 9C 7S 2H", HandType::OnePair),
            ("AH AD 9C 9S 2H", HandType::TwoPair),
            ("AH AD AC 9S 2H", HandType::ThreeOfAKind),
            ("6H 7D 8C 9S TH", HandType::Straight),
            ("AH 2D 3C 4S 5H", HandType::Straight),
            ("TH JD QC KS AH", HandType::Straight),
            ("AH KH 9H 7H 2H", HandType::Flush),
            ("AH AD AC 9S 9H", HandType::FullHouse),
            ("AH AD AC AS 9H", HandType::FourOfAKind),
            ("5S 6S 7S 8S 9S", HandType::StraightFlush),
            ("AH AD AC AS AH", HandType::FiveOfAKind),
        ];

        for (cards, expected) in cases {
            let (hand_type, _) = categorize(&hand(cards));
            assert_eq!(hand_type, expected, "{cards}");
            assert_eq!(
                eval(cards).hand_type(RankingScheme::Classic),
                Some(expected)
            );
        }
    }

    #[test]
    fn no_wrap_around_straight() {
        let (hand_type, _) = categorize(&hand("QH KD AC 2S 3H"));
        assert_eq!(hand_type, HandType::HighCard);
    }

    #[test]
    fn kickers() {
        // Pair of aces, king kicker beats queen kicker.
        assert!(eval("AH AD KC 7S 2H") > eval("AS AC QC JS TH"));

        // Two pair compares the high pair, then the low pair, then the kicker.
        assert!(eval("KH KD 5C 5S 2H") > eval("QH QD JC JS AH"));
        assert!(eval("KH KD 6C 6S 2H") > eval("KS KC 5C 5H AH"));
        assert!(eval("KH KD 5C 5S 3H") > eval("KS KC 5D 5H 2H"));

        // Full house compares trips first.
        assert!(eval("3H 3D 3C 2S 2H") > eval("2S 2C 2D AS AH"));

        // Equal hands in different suits are equal.
        assert_eq!(eval("AH KD 9C 7S 2H"), eval("AS KC 9D 7H 2C"));
    }

    #[test]
    fn wheel_is_lowest_straight() {
        let wheel = eval("AH 2D 3C 4S 5H");
        let six_high = eval("2H 3D 4C 5S 6H");
        let broadway = eval("TH JD QC KS AH");

        assert!(wheel < six_high);
        assert!(six_high < broadway);
        assert_eq!(wheel.digits(), [5, 4, 3, 2, 1]);
        assert!(wheel > eval("AH AD AC KS QH"));
    }

    #[test]
    fn digits_layout() {
        let s = eval("KH KD 5C 5S QH");
        assert_eq!(s.digits(), [13, 13, 5, 5, 12]);

        let s = eval("2H 2D 2C 9S 9H");
        assert_eq!(s.digits(), [2, 2, 2, 9, 9]);
    }

    #[test]
    fn scheme_ordering() {
        let five = hand("2H 2D 2C 2S 2H");
        let straight_flush = hand("TS JS QS KS AS");

        let classic = RankingScheme::Classic;
        assert!(encode(&five, classic) > encode(&straight_flush, classic));

        let house = RankingScheme::StraightFlushHigh;
        assert!(encode(&five, house) < encode(&straight_flush, house));
        assert_eq!(
            encode(&five, house).hand_type(house),
            Some(HandType::FiveOfAKind)
        );
    }

    #[test]
    fn duplicate_cards_flush() {
        // A wild card standing for a second ace of spades.
        let (hand_type, digits) = categorize(&hand("AS AS 9S 4S 2S"));
        assert_eq!(hand_type, HandType::Flush);
        assert_eq!(digits, [14, 14, 9, 4, 2]);
    }
}

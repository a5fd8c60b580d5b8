// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// A Poker card.
///
/// A card is packed in a single byte with the following format:
///
/// ```text
///   +--------+
///   |xrrrrrss|
///   +--------+
///   r = rank of card (deuce=0,trey=1,four=2,five=3,...,ace=12)
///   s = suit of card (clubs=0,diamonds=1,hearts=2,spades=3)
/// ```
///
/// so that the derived ordering sorts cards by rank and then by suit, this is
/// the order used to break ties between equally ranked low cards at bring-in.
#[derive(Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Card(u8);

impl Card {
    /// Create a card given a suit and rank.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        Self(((rank as u8) << 2) | suit as u8)
    }

    /// This card unique id in the range 0..52.
    pub fn id(&self) -> u8 {
        self.0
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        Suit::ALL[(self.0 & 0x3) as usize]
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        Rank::ALL[(self.0 >> 2) as usize]
    }
}

impl Default for Card {
    fn default() -> Self {
        Card::new(Rank::Deuce, Suit::Clubs)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank(), self.suit())
    }
}

/// Error returned when parsing cards from strings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// The string is not a rank followed by a suit.
    #[error("invalid card '{0}', expected a rank followed by a suit")]
    InvalidLength(String),
    /// The rank is not one of 2-9, T, J, Q, K, A.
    #[error("invalid rank '{0}'")]
    InvalidRank(String),
    /// The suit is not one of C, D, H, S or a suit symbol.
    #[error("invalid suit '{0}'")]
    InvalidSuit(char),
}

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parses cards like `AH`, `td`, `10s` or `Q♥`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let suit = chars
            .next_back()
            .ok_or_else(|| ParseCardError::InvalidLength(s.to_string()))?;
        let rank = chars.as_str();
        if rank.is_empty() {
            return Err(ParseCardError::InvalidLength(s.to_string()));
        }

        Ok(Card::new(rank.parse()?, Suit::try_from(suit)?))
    }
}

impl TryFrom<String> for Card {
    type Error = ParseCardError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Card> for String {
    fn from(card: Card) -> Self {
        card.to_string()
    }
}

/// Parses a list of cards separated by whitespace or commas.
///
/// ```
/// # use deuces_cards::{parse_cards, Card, Rank, Suit};
/// let cards = parse_cards("3H, 9D 5c").unwrap();
/// assert_eq!(cards[0], Card::new(Rank::Trey, Suit::Hearts));
/// assert_eq!(cards.len(), 3);
/// ```
pub fn parse_cards(s: &str) -> Result<Vec<Card>, ParseCardError> {
    s.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .map(str::parse)
        .collect()
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Deuce
    Deuce = 0,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// All ranks from Deuce to Ace.
    pub const ALL: [Rank; 13] = {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
    };

    /// Returns all ranks.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        Self::ALL.into_iter()
    }

    /// The pip value of this rank, 2 for a Deuce up to 14 for an Ace.
    pub const fn value(&self) -> u8 {
        *self as u8 + 2
    }

    /// Returns the rank with the given pip value, an Ace can be 1 or 14.
    pub fn from_value(value: u8) -> Option<Rank> {
        match value {
            1 => Some(Rank::Ace),
            2..=14 => Some(Self::ALL[(value - 2) as usize]),
            _ => None,
        }
    }

    /// The rank name used in hand descriptions.
    pub fn name(&self) -> &'static str {
        match self {
            Rank::Deuce => "Deuce",
            Rank::Trey => "Three",
            Rank::Four => "Four",
            Rank::Five => "Five",
            Rank::Six => "Six",
            Rank::Seven => "Seven",
            Rank::Eight => "Eight",
            Rank::Nine => "Nine",
            Rank::Ten => "Ten",
            Rank::Jack => "Jack",
            Rank::Queen => "Queen",
            Rank::King => "King",
            Rank::Ace => "Ace",
        }
    }

    /// The plural rank name used in hand descriptions.
    pub fn plural(&self) -> &'static str {
        match self {
            Rank::Deuce => "Deuces",
            Rank::Trey => "Threes",
            Rank::Four => "Fours",
            Rank::Five => "Fives",
            Rank::Six => "Sixes",
            Rank::Seven => "Sevens",
            Rank::Eight => "Eights",
            Rank::Nine => "Nines",
            Rank::Ten => "Tens",
            Rank::Jack => "Jacks",
            Rank::Queen => "Queens",
            Rank::King => "Kings",
            Rank::Ace => "Aces",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            Rank::Deuce => '2',
            Rank::Trey => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        };

        write!(f, "{rank}")
    }
}

impl FromStr for Rank {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rank = match s.to_ascii_uppercase().as_str() {
            "2" => Rank::Deuce,
            "3" => Rank::Trey,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "T" | "10" => Rank::Ten,
            "J" => Rank::Jack,
            "Q" => Rank::Queen,
            "K" => Rank::King,
            "A" => Rank::Ace,
            _ => return Err(ParseCardError::InvalidRank(s.to_string())),
        };

        Ok(rank)
    }
}

/// Card suit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs suit.
    Clubs = 0,
    /// Diamonds suit.
    Diamonds,
    /// Hearts suit.
    Hearts,
    /// Spades suit.
    Spades,
}

impl Suit {
    /// All suits in tie-break order.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        Self::ALL.into_iter()
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        };

        write!(f, "{suit}")
    }
}

impl TryFrom<char> for Suit {
    type Error = ParseCardError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'C' | 'c' | '♣' | '♧' => Ok(Suit::Clubs),
            'D' | 'd' | '♦' | '♢' => Ok(Suit::Diamonds),
            'H' | 'h' | '♥' | '♡' => Ok(Suit::Hearts),
            'S' | 's' | '♠' | '♤' => Ok(Suit::Spades),
            _ => Err(ParseCardError::InvalidSuit(c)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_encoding() {
        for rank in Rank::ranks() {
            for suit in Suit::suits() {
                let card = Card::new(rank, suit);
                assert_eq!(card.rank(), rank);
                assert_eq!(card.suit(), suit);
                assert!(card.id() < 52);
            }
        }

        let kd = Card::new(Rank::King, Suit::Diamonds);
        assert_eq!(kd.id(), 11 * 4 + 1);
    }

    #[test]
    fn card_to_string() {
        let c = Card::new(Rank::King, Suit::Diamonds);
        assert_eq!(c.to_string(), "KD");

        let c = Card::new(Rank::Five, Suit::Spades);
        assert_eq!(c.to_string(), "5S");

        let c = Card::new(Rank::Jack, Suit::Clubs);
        assert_eq!(c.to_string(), "JC");

        let c = Card::new(Rank::Ten, Suit::Hearts);
        assert_eq!(c.to_string(), "TH");

        let c = Card::new(Rank::Ace, Suit::Hearts);
        assert_eq!(c.to_string(), "AH");
    }

    #[test]
    fn card_from_string() {
        let th = Card::new(Rank::Ten, Suit::Hearts);
        assert_eq!("TH".parse::<Card>(), Ok(th));
        assert_eq!("th".parse::<Card>(), Ok(th));
        assert_eq!("10h".parse::<Card>(), Ok(th));
        assert_eq!("T♥".parse::<Card>(), Ok(th));
        assert_eq!("9♦".parse::<Card>(), Ok(Card::new(Rank::Nine, Suit::Diamonds)));

        assert_eq!(
            "1H".parse::<Card>(),
            Err(ParseCardError::InvalidRank("1".to_string()))
        );
        assert_eq!("AX".parse::<Card>(), Err(ParseCardError::InvalidSuit('X')));
        assert!(matches!(
            "H".parse::<Card>(),
            Err(ParseCardError::InvalidLength(_))
        ));
        assert!(matches!(
            "".parse::<Card>(),
            Err(ParseCardError::InvalidLength(_))
        ));
    }

    #[test]
    fn cards_list() {
        let cards = parse_cards("3♥ 9♦,5♣  8♠ T♠").unwrap();
        let names = cards.iter().map(|c| c.to_string()).collect::<Vec<_>>();
        assert_eq!(names, ["3H", "9D", "5C", "8S", "TS"]);

        assert!(parse_cards("3H ZZ").is_err());
        assert!(parse_cards("").unwrap().is_empty());
    }

    #[test]
    fn bring_in_order() {
        let low_club = Card::new(Rank::Deuce, Suit::Clubs);
        let low_spade = Card::new(Rank::Deuce, Suit::Spades);
        let trey = Card::new(Rank::Trey, Suit::Clubs);

        assert!(low_club < low_spade);
        assert!(low_spade < trey);

        let up_cards = [trey, low_spade, low_club];
        assert_eq!(up_cards.iter().min(), Some(&low_club));
    }

    #[test]
    fn rank_values() {
        assert_eq!(Rank::Deuce.value(), 2);
        assert_eq!(Rank::Ace.value(), 14);
        assert_eq!(Rank::from_value(1), Some(Rank::Ace));
        assert_eq!(Rank::from_value(10), Some(Rank::Ten));
        assert_eq!(Rank::from_value(15), None);
    }
}

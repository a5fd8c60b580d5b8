// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Wild card policies.
//!
//! A [WildPolicy] decides which cards of a hand are wild for a poker variant,
//! the result is a [WildSet] of positions into the hand cards.
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{Card, EvalError, Rank};

/// A set of card positions in a hand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WildSet(u16);

impl WildSet {
    /// The maximum number of cards in a hand.
    pub const MAX_CARDS: usize = 16;

    /// The empty set.
    pub const EMPTY: WildSet = WildSet(0);

    /// Creates a set from card positions.
    pub fn from_positions<I>(positions: I) -> Result<Self, EvalError>
    where
        I: IntoIterator<Item = usize>,
    {
        positions.into_iter().try_fold(Self::EMPTY, |set, pos| {
            if pos < Self::MAX_CARDS {
                Ok(set.with(pos))
            } else {
                Err(EvalError::WildPositionOutOfRange {
                    position: pos,
                    len: Self::MAX_CARDS,
                })
            }
        })
    }

    /// Creates a set from the physical wild cards in a hand.
    ///
    /// Each wild card claims the first position holding an equal card that
    /// has not been claimed yet.
    pub fn from_cards(hand: &[Card], wilds: &[Card]) -> Result<Self, EvalError> {
        check_len(hand)?;

        let mut set = Self::EMPTY;
        for &wild in wilds {
            let pos = hand
                .iter()
                .enumerate()
                .position(|(pos, &c)| c == wild && !set.contains(pos))
                .ok_or(EvalError::UnknownWildCard(wild))?;
            set = set.with(pos);
        }

        Ok(set)
    }

    /// Checks if a position is in the set.
    pub fn contains(&self, pos: usize) -> bool {
        pos < Self::MAX_CARDS && self.0 & (1 << pos) != 0
    }

    /// The number of positions in the set.
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Checks if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Adds a position to the set, the position must be less than MAX_CARDS.
    fn with(self, pos: usize) -> Self {
        Self(self.0 | (1 << pos))
    }

    /// The positions in ascending order.
    pub fn positions(&self) -> impl Iterator<Item = usize> + '_ {
        (0..Self::MAX_CARDS).filter(|&pos| self.contains(pos))
    }

    /// The highest position plus one, 0 for the empty set.
    pub(crate) fn end(&self) -> usize {
        Self::MAX_CARDS - self.0.leading_zeros() as usize
    }

    /// Returns the wild cards in hand order.
    pub fn cards(&self, hand: &[Card]) -> Vec<Card> {
        hand.iter()
            .enumerate()
            .filter(|(pos, _)| self.contains(*pos))
            .map(|(_, &c)| c)
            .collect()
    }
}

fn check_len(hand: &[Card]) -> Result<(), EvalError> {
    if hand.len() > WildSet::MAX_CARDS {
        Err(EvalError::TooManyCards {
            param: "cards",
            count: hand.len(),
            max: WildSet::MAX_CARDS,
        })
    } else {
        Ok(())
    }
}

/// A set of ranks.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RankSet(u16);

impl RankSet {
    /// Checks if a rank is in the set.
    pub fn contains(&self, rank: Rank) -> bool {
        self.0 & (1 << rank as u16) != 0
    }

    /// Adds a rank to the set.
    pub fn insert(&mut self, rank: Rank) {
        self.0 |= 1 << rank as u16;
    }

    /// The ranks in ascending order.
    pub fn ranks(&self) -> impl Iterator<Item = Rank> + '_ {
        Rank::ranks().filter(|&r| self.contains(r))
    }
}

impl FromIterator<Rank> for RankSet {
    fn from_iter<T: IntoIterator<Item = Rank>>(iter: T) -> Self {
        let mut set = RankSet::default();
        for rank in iter {
            set.insert(rank);
        }
        set
    }
}

impl fmt::Debug for RankSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.ranks()).finish()
    }
}

/// How an Ace counts when looking for the lowest card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AceMode {
    /// The Ace is above the King.
    #[default]
    High,
    /// The Ace is below the Deuce.
    Low,
}

impl AceMode {
    /// The rank value under this mode, 1 for an Ace when low.
    pub fn value(&self, rank: Rank) -> u8 {
        match (self, rank) {
            (AceMode::Low, Rank::Ace) => 1,
            _ => rank.value(),
        }
    }
}

/// A card dealt to a seat at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DealEvent {
    /// The dealt card.
    pub card: Card,
    /// Whether the card was dealt face up.
    pub face_up: bool,
}

impl DealEvent {
    /// A card dealt face up.
    pub fn up(card: Card) -> Self {
        Self {
            card,
            face_up: true,
        }
    }

    /// A card dealt face down.
    pub fn down(card: Card) -> Self {
        Self {
            card,
            face_up: false,
        }
    }
}

/// Returns the rank of the face up card dealt right after the last face up
/// card with the designated rank.
///
/// Returns None if no designated card was dealt face up, or if the last one
/// is also the last face up card dealt.
pub fn follow_rank(deals: &[DealEvent], designated: Rank) -> Option<Rank> {
    let mut follow = None;
    let mut pending = false;

    for deal in deals.iter().filter(|d| d.face_up) {
        let rank = deal.card.rank();
        if rank == designated {
            pending = true;
            follow = None;
        } else if pending {
            pending = false;
            follow = Some(rank);
        }
    }

    follow
}

/// Context needed by order dependent policies.
#[derive(Debug, Clone, Copy, Default)]
pub struct WildContext<'a> {
    /// Cards dealt to every seat in chronological order.
    pub deals: &'a [DealEvent],
    /// The Ace interpretation for the lowest card.
    pub ace_mode: AceMode,
}

/// A wild cards rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WildPolicy {
    /// Cards with any of the given ranks are wild.
    FixedRank {
        /// The wild ranks.
        ranks: RankSet,
    },
    /// The designated rank is wild together with the lowest rank among the
    /// other cards in the hand.
    LowestExcluding {
        /// The always wild rank.
        designated: Rank,
        /// Low cards are wild only if the hand has a designated card.
        designated_required: bool,
    },
    /// The designated rank is wild together with the rank of the face up card
    /// that followed the last face up designated card.
    DynamicFollow {
        /// The always wild rank.
        designated: Rank,
    },
}

impl WildPolicy {
    /// Threes and nines are wild.
    pub fn baseball() -> Self {
        WildPolicy::FixedRank {
            ranks: [Rank::Trey, Rank::Nine].into_iter().collect(),
        }
    }

    /// Kings and the lowest cards are wild.
    pub fn kings_and_lows(king_required: bool) -> Self {
        WildPolicy::LowestExcluding {
            designated: Rank::King,
            designated_required: king_required,
        }
    }

    /// Queens and the rank that follows the last face up queen are wild.
    pub fn follow_the_queen() -> Self {
        WildPolicy::DynamicFollow {
            designated: Rank::Queen,
        }
    }

    /// Checks if the wild cards depend on the Ace interpretation.
    pub fn is_ace_sensitive(&self) -> bool {
        matches!(self, WildPolicy::LowestExcluding { .. })
    }

    /// Returns the wild ranks for a hand.
    pub fn wild_ranks(&self, cards: &[Card], ctx: &WildContext<'_>) -> RankSet {
        match *self {
            WildPolicy::FixedRank { ranks } => ranks,
            WildPolicy::LowestExcluding {
                designated,
                designated_required,
            } => {
                let mut ranks = RankSet::default();
                ranks.insert(designated);

                if designated_required && !cards.iter().any(|c| c.rank() == designated) {
                    return ranks;
                }

                let lowest = cards
                    .iter()
                    .map(|c| c.rank())
                    .filter(|&r| r != designated)
                    .min_by_key(|&r| ctx.ace_mode.value(r));
                if let Some(rank) = lowest {
                    ranks.insert(rank);
                }

                ranks
            }
            WildPolicy::DynamicFollow { designated } => {
                let mut ranks = RankSet::default();
                ranks.insert(designated);
                if let Some(rank) = follow_rank(ctx.deals, designated) {
                    ranks.insert(rank);
                }

                ranks
            }
        }
    }

    /// Returns the positions of the wild cards in a hand.
    pub fn resolve(&self, cards: &[Card], ctx: &WildContext<'_>) -> Result<WildSet, EvalError> {
        check_len(cards)?;

        let ranks = self.wild_ranks(cards, ctx);
        let positions = cards
            .iter()
            .enumerate()
            .filter(|(_, c)| ranks.contains(c.rank()))
            .map(|(pos, _)| pos);

        WildSet::from_positions(positions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deuces_cards::parse_cards;

    fn deals(s: &str) -> Vec<DealEvent> {
        parse_cards(s).unwrap().into_iter().map(DealEvent::up).collect()
    }

    fn resolve(policy: WildPolicy, hand: &[Card], ctx: &WildContext<'_>) -> Vec<Card> {
        policy.resolve(hand, ctx).unwrap().cards(hand)
    }

    #[test]
    fn wild_set_from_cards() {
        let hand = parse_cards("3H 9D 5C 3H TS").unwrap();
        let wilds = parse_cards("3H 3H").unwrap();

        let set = WildSet::from_cards(&hand, &wilds).unwrap();
        assert_eq!(set.positions().collect::<Vec<_>>(), [0, 3]);
        assert_eq!(set.len(), 2);
        assert_eq!(set.end(), 4);

        let missing = parse_cards("AS").unwrap();
        assert_eq!(
            WildSet::from_cards(&hand, &missing),
            Err(EvalError::UnknownWildCard(missing[0]))
        );

        // A third 3H is not in the hand.
        let wilds = parse_cards("3H 3H 3H").unwrap();
        assert!(WildSet::from_cards(&hand, &wilds).is_err());
    }

    #[test]
    fn wild_set_positions() {
        assert!(WildSet::from_positions([0, 15]).is_ok());
        assert_eq!(
            WildSet::from_positions([16]),
            Err(EvalError::WildPositionOutOfRange {
                position: 16,
                len: 16
            })
        );
        assert!(WildSet::EMPTY.is_empty());
        assert_eq!(WildSet::EMPTY.end(), 0);
    }

    #[test]
    fn fixed_rank_ignores_order() {
        let ctx = WildContext::default();
        let hand = parse_cards("3H 9D 5C 8S TS").unwrap();
        let wilds = resolve(WildPolicy::baseball(), &hand, &ctx);
        assert_eq!(wilds, parse_cards("3H 9D").unwrap());

        let mut reversed = hand.clone();
        reversed.reverse();
        let mut wilds = resolve(WildPolicy::baseball(), &reversed, &ctx);
        wilds.sort();
        assert_eq!(wilds, parse_cards("3H 9D").unwrap());
    }

    #[test]
    fn lowest_excluding_ace_modes() {
        let policy = WildPolicy::kings_and_lows(false);
        let hand = parse_cards("6H 7D 8C 9S AH").unwrap();

        let high = WildContext::default();
        assert_eq!(resolve(policy, &hand, &high), parse_cards("6H").unwrap());

        let low = WildContext {
            ace_mode: AceMode::Low,
            ..Default::default()
        };
        assert_eq!(resolve(policy, &hand, &low), parse_cards("AH").unwrap());
    }

    #[test]
    fn lowest_excluding_ties_and_kings() {
        let policy = WildPolicy::kings_and_lows(false);
        let ctx = WildContext::default();

        // Kings are not counted as low cards, both fours are wild.
        let hand = parse_cards("KH 4D 8C 4S KS JD 9C").unwrap();
        assert_eq!(
            resolve(policy, &hand, &ctx),
            parse_cards("KH 4D 4S KS").unwrap()
        );

        // All kings, no low card.
        let hand = parse_cards("KH KD KC KS KH").unwrap();
        assert_eq!(resolve(policy, &hand, &ctx).len(), 5);
    }

    #[test]
    fn lowest_excluding_king_required() {
        let policy = WildPolicy::kings_and_lows(true);
        let ctx = WildContext::default();

        let hand = parse_cards("2H 7D 8C 9S AH").unwrap();
        assert!(resolve(policy, &hand, &ctx).is_empty());

        let hand = parse_cards("2H 7D 8C 9S KH").unwrap();
        assert_eq!(resolve(policy, &hand, &ctx), parse_cards("2H KH").unwrap());
    }

    #[test]
    fn follow_rank_order() {
        assert_eq!(follow_rank(&deals("QH 5D 8S TS"), Rank::Queen), Some(Rank::Five));
        assert_eq!(follow_rank(&deals("5D QH 8S TS"), Rank::Queen), Some(Rank::Eight));

        // Last queen wins.
        assert_eq!(follow_rank(&deals("QH 5D QS 8S"), Rank::Queen), Some(Rank::Eight));

        // A queen dealt last leaves only queens wild.
        assert_eq!(follow_rank(&deals("QH 5D 8S QS"), Rank::Queen), None);

        // Back to back queens.
        assert_eq!(follow_rank(&deals("QH QS 7D"), Rank::Queen), Some(Rank::Seven));

        assert_eq!(follow_rank(&deals("2H 5D 8S"), Rank::Queen), None);
        assert_eq!(follow_rank(&[], Rank::Queen), None);
    }

    #[test]
    fn follow_rank_skips_face_down() {
        let cards = parse_cards("QH 4C 5D").unwrap();
        let deals = [
            DealEvent::up(cards[0]),
            DealEvent::down(cards[1]),
            DealEvent::up(cards[2]),
        ];
        assert_eq!(follow_rank(&deals, Rank::Queen), Some(Rank::Five));

        let deals = [DealEvent::down(cards[0]), DealEvent::up(cards[1])];
        assert_eq!(follow_rank(&deals, Rank::Queen), None);
    }

    #[test]
    fn dynamic_follow_is_idempotent() {
        let policy = WildPolicy::follow_the_queen();
        let deals = deals("QH 5D 8S TS");
        let ctx = WildContext {
            deals: &deals,
            ace_mode: AceMode::High,
        };

        let ranks = policy.wild_ranks(&[], &ctx);
        assert_eq!(ranks.ranks().collect::<Vec<_>>(), [Rank::Five, Rank::Queen]);
        assert_eq!(policy.wild_ranks(&[], &ctx), ranks);

        let hand = parse_cards("5C QD 2S 8H 9H").unwrap();
        assert_eq!(resolve(policy, &hand, &ctx), parse_cards("5C QD").unwrap());
    }
}

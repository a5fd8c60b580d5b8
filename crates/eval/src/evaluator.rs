// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Wild cards hand evaluator.
//!
//! The evaluator looks at every 5 cards subset of a hand and, for each subset,
//! at every substitution for its wild cards, keeping the strongest result.
//!
//! The substitution search is exact but small because:
//!
//! - wild cards in a subset are interchangeable so only non decreasing rank
//!   sequences are generated, that is C(12 + w, w) sequences for w wild cards;
//! - all wild cards get the suit shared by the natural cards, or any suit if
//!   the natural cards are not suited, giving the wild cards the same suit can
//!   only turn a hand into a flush, or keep its type;
//! - subsets with the same natural cards and number of wild cards give the
//!   same result and are evaluated once.
//!
//! Ties are broken by keeping the first strongest combination found, subsets
//! are visited in colexicographic order of their positions and substitutions
//! in colexicographic order of their ranks.
use ahash::AHashMap;
use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::{
    AceMode, Card, DealEvent, EvalError, HandType, Rank, RankingScheme, Strength, Suit,
    WildContext, WildPolicy, WildSet, for_each_ksubset, strength,
};

/// The result of a hand evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResolvedHand {
    hand_type: HandType,
    strength: Strength,
    best_cards: [Card; 5],
    best_wild: [bool; 5],
    played_as: [Card; 5],
    wild_cards: Vec<Card>,
    ace_mode: Option<AceMode>,
}

impl ResolvedHand {
    /// The hand type.
    pub fn hand_type(&self) -> HandType {
        self.hand_type
    }

    /// The hand strength.
    pub fn strength(&self) -> Strength {
        self.strength
    }

    /// The five physical cards that make the best hand in hand order.
    pub fn best_cards(&self) -> &[Card; 5] {
        &self.best_cards
    }

    /// Which of the best cards are wild.
    pub fn best_wild(&self) -> &[bool; 5] {
        &self.best_wild
    }

    /// The card each of the best cards plays as, a natural card plays as
    /// itself.
    pub fn played_as(&self) -> &[Card; 5] {
        &self.played_as
    }

    /// All the wild cards in the hand in hand order.
    pub fn wild_cards(&self) -> &[Card] {
        &self.wild_cards
    }

    /// The Ace interpretation that gave this result, for policies that
    /// depend on it.
    pub fn ace_mode(&self) -> Option<AceMode> {
        self.ace_mode
    }

    /// A human readable description like "Full House, Kings over Fives".
    pub fn description(&self) -> String {
        crate::describe::describe(self.hand_type, self.strength)
    }
}

/// The best substitution for a subset.
#[derive(Debug, Clone)]
struct Substitution {
    strength: Strength,
    hand_type: HandType,
    /// The cards played by the wild cards in ascending order.
    wilds: Vec<Card>,
}

/// Evaluates the best 5 cards hand with the given wild positions.
///
/// Hands must have between 5 and [WildSet::MAX_CARDS] cards and every wild
/// position must be a position in the hand.
///
/// ```
/// # use deuces_eval::*;
/// let cards = parse_cards("3H 9D 7C 8S TS").unwrap();
/// let wilds = WildSet::from_positions([0, 1]).unwrap();
/// let hand = evaluate_best(&cards, wilds, RankingScheme::Classic).unwrap();
/// assert_eq!(hand.hand_type(), HandType::Straight);
/// ```
pub fn evaluate_best(
    cards: &[Card],
    wilds: WildSet,
    scheme: RankingScheme,
) -> Result<ResolvedHand, EvalError> {
    if cards.len() < 5 {
        return Err(EvalError::TooFewCards {
            param: "cards",
            count: cards.len(),
        });
    }

    if cards.len() > WildSet::MAX_CARDS {
        return Err(EvalError::TooManyCards {
            param: "cards",
            count: cards.len(),
            max: WildSet::MAX_CARDS,
        });
    }

    if wilds.end() > cards.len() {
        return Err(EvalError::WildPositionOutOfRange {
            position: wilds.end() - 1,
            len: cards.len(),
        });
    }

    let mut cache = AHashMap::<(Vec<Card>, usize), Substitution>::default();
    let mut best: Option<(Substitution, [usize; 5])> = None;
    let mut searched = 0usize;

    for_each_ksubset(cards.len(), 5, |positions| {
        let mut naturals = positions
            .iter()
            .filter(|&&p| !wilds.contains(p))
            .map(|&p| cards[p])
            .collect::<Vec<_>>();
        naturals.sort_unstable();
        let num_wilds = 5 - naturals.len();

        let sub = cache
            .entry((naturals, num_wilds))
            .or_insert_with_key(|(naturals, num_wilds)| {
                best_substitution(naturals, *num_wilds, scheme, &mut searched)
            });

        if best.as_ref().is_none_or(|(b, _)| sub.strength > b.strength) {
            let mut subset = [0usize; 5];
            subset.copy_from_slice(positions);
            best = Some((sub.clone(), subset));
        }
    });

    trace!(
        "Searched {searched} substitutions for {} cards and {} wilds",
        cards.len(),
        wilds.len()
    );

    // A hand with at least 5 cards has at least one subset.
    let (sub, subset) = best.ok_or(EvalError::TooFewCards {
        param: "cards",
        count: cards.len(),
    })?;

    let mut best_cards = [Card::default(); 5];
    let mut best_wild = [false; 5];
    let mut played_as = [Card::default(); 5];
    let mut sub_wilds = sub.wilds.iter();

    for (i, &pos) in subset.iter().enumerate() {
        best_cards[i] = cards[pos];
        best_wild[i] = wilds.contains(pos);
        played_as[i] = if best_wild[i] {
            sub_wilds.next().copied().unwrap_or(cards[pos])
        } else {
            cards[pos]
        };
    }

    let hand = ResolvedHand {
        hand_type: sub.hand_type,
        strength: sub.strength,
        best_cards,
        best_wild,
        played_as,
        wild_cards: wilds.cards(cards),
        ace_mode: None,
    };

    debug!(
        "Best hand {} {:?} from {:?} wilds {:?}",
        hand.hand_type, hand.played_as, hand.best_cards, hand.wild_cards
    );

    Ok(hand)
}

/// Resolves the wild cards with a policy and evaluates the best hand.
///
/// Policies that depend on the Ace interpretation are evaluated with the Ace
/// high first and then low, the low result is kept only if stronger.
pub fn evaluate_with_policy(
    cards: &[Card],
    policy: &WildPolicy,
    deals: &[DealEvent],
    scheme: RankingScheme,
) -> Result<ResolvedHand, EvalError> {
    if !policy.is_ace_sensitive() {
        let ctx = WildContext {
            deals,
            ace_mode: AceMode::High,
        };
        let wilds = policy.resolve(cards, &ctx)?;
        return evaluate_best(cards, wilds, scheme);
    }

    let mut best: Option<ResolvedHand> = None;
    for ace_mode in [AceMode::High, AceMode::Low] {
        let ctx = WildContext { deals, ace_mode };
        let wilds = policy.resolve(cards, &ctx)?;
        let mut hand = evaluate_best(cards, wilds, scheme)?;
        hand.ace_mode = Some(ace_mode);

        if best.as_ref().is_none_or(|b| hand.strength > b.strength) {
            best = Some(hand);
        }
    }

    // Both modes ran and the first one always sets best.
    best.ok_or(EvalError::TooFewCards {
        param: "cards",
        count: cards.len(),
    })
}

/// Finds the strongest cards for `num_wilds` wild cards to play with the
/// natural cards, natural cards must be sorted.
fn best_substitution(
    naturals: &[Card],
    num_wilds: usize,
    scheme: RankingScheme,
    searched: &mut usize,
) -> Substitution {
    let mut hand = [Card::default(); 5];
    hand[..naturals.len()].copy_from_slice(naturals);

    if num_wilds == 0 {
        let (hand_type, digits) = strength::categorize(&hand);
        *searched += 1;
        return Substitution {
            strength: Strength::new(hand_type, digits, scheme),
            hand_type,
            wilds: Vec::new(),
        };
    }

    // With all natural cards suited the wild cards join the flush, otherwise
    // no flush is possible and the suit doesn't matter.
    let suit = naturals.first().map(|c| c.suit()).unwrap_or(Suit::Spades);

    let mut best = Substitution {
        strength: Strength::MIN,
        hand_type: HandType::HighCard,
        wilds: Vec::new(),
    };

    // Non decreasing sequences of w ranks map one to one to w-subsets of
    // 13 + w - 1 positions by subtracting each element index.
    let n = Rank::ALL.len() + num_wilds - 1;
    for_each_ksubset(n, num_wilds, |subset| {
        for (i, &s) in subset.iter().enumerate() {
            hand[naturals.len() + i] = Card::new(Rank::ALL[s - i], suit);
        }

        let (hand_type, digits) = strength::categorize(&hand);
        let strength = Strength::new(hand_type, digits, scheme);
        *searched += 1;

        if best.wilds.is_empty() || strength > best.strength {
            best = Substitution {
                strength,
                hand_type,
                wilds: hand[naturals.len()..].to_vec(),
            };
        }
    });

    best
}

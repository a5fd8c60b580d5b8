// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cards deck and subsets iteration.
use rand::prelude::*;

use crate::{Card, Rank, Suit};

/// Calls the `f` closure for each k-subset of the indices `0..n`.
///
/// Subsets are visited in colexicographic order, each subset is sorted in
/// ascending order. Nothing is visited if `k > n`.
pub fn for_each_ksubset<F>(n: usize, k: usize, mut f: F)
where
    F: FnMut(&[usize]),
{
    if k > n {
        return;
    }

    if k == 0 {
        f(&[]);
        return;
    }

    // Algorithm L from TAOCP 4a
    let mut c = vec![0usize; k + 3];
    for j in 1..=k {
        c[j] = j - 1;
    }

    c[k + 1] = n;

    loop {
        f(&c[1..=k]);

        let mut j = 1;
        while c[j] + 1 == c[j + 1] {
            c[j] = j - 1;
            j += 1;
        }

        if j > k {
            break;
        }

        c[j] += 1;
    }
}

/// A cards Deck
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.cards.shuffle(rng);
        deck
    }

    /// Deals a card from the deck.
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Removes a card from the deck.
    pub fn remove(&mut self, card: Card) {
        self.cards.retain(|c| c != &card);
    }

    /// Calls the `f` closure for each k-cards hand.
    pub fn for_each<F>(&self, k: usize, mut f: F)
    where
        F: FnMut(&[Card]),
    {
        let mut hand = Vec::with_capacity(k);
        for_each_ksubset(self.cards.len(), k, |positions| {
            hand.clear();
            hand.extend(positions.iter().map(|&p| self.cards[p]));
            f(&hand);
        });
    }

    /// Calls the `f` closure for `samples` random k-cards hands.
    pub fn sample<R, F>(&self, rng: &mut R, samples: usize, k: usize, mut f: F)
    where
        R: Rng + ?Sized,
        F: FnMut(&[Card]),
    {
        if k > self.cards.len() {
            return;
        }

        let mut hand = Vec::with_capacity(k);
        for _ in 0..samples {
            hand.clear();
            hand.extend(self.cards.choose_multiple(rng, k).copied());
            f(&hand);
        }
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;

    #[test]
    fn deck_cards_unique() {
        let mut cards = HashSet::default();
        let mut deck = Deck::new_and_shuffled(&mut rand::rng());

        while let Some(card) = deck.deal() {
            cards.insert(card.id());
        }

        assert!(deck.is_empty());
        assert_eq!(cards.len(), Deck::SIZE);
    }

    #[test]
    fn ksubsets() {
        let mut subsets = Vec::new();
        for_each_ksubset(4, 2, |s| subsets.push(s.to_vec()));
        assert_eq!(
            subsets,
            [[0, 1], [0, 2], [1, 2], [0, 3], [1, 3], [2, 3]]
        );

        let mut count = 0;
        for_each_ksubset(7, 5, |s| {
            assert_eq!(s.len(), 5);
            assert!(s.windows(2).all(|w| w[0] < w[1]));
            count += 1;
        });
        assert_eq!(count, 21);

        count = 0;
        for_each_ksubset(5, 5, |s| {
            assert_eq!(s, [0, 1, 2, 3, 4]);
            count += 1;
        });
        assert_eq!(count, 1);

        count = 0;
        for_each_ksubset(3, 5, |_| count += 1);
        assert_eq!(count, 0);
    }

    #[test]
    fn deck_for_each() {
        let deck = Deck::default();
        assert_eq!(deck.count(), Deck::SIZE);

        let mut hands = HashSet::default();
        deck.for_each(2, |cards| {
            assert_eq!(cards.len(), 2);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 1_326);

        hands.clear();
        deck.for_each(3, |cards| {
            assert_eq!(cards.len(), 3);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 22_100);
    }

    #[test]
    fn deck_sample_remove() {
        let mut deck = Deck::default();
        let ad = Card::new(Rank::Ace, Suit::Diamonds);
        deck.remove(ad);
        assert_eq!(deck.count(), Deck::SIZE - 1);

        let mut count = 0;
        deck.sample(&mut rand::rng(), 100, 7, |hand| {
            assert_eq!(hand.len(), 7);
            assert!(!hand.contains(&ad));
            count += 1;
        });
        assert_eq!(count, 100);
    }
}

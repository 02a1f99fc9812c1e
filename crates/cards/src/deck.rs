// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// A Poker card.
///
/// An immutable rank and suit pair; two cards are equal when both their
/// rank and their suit are equal.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    /// Create a card given a rank and suit.
    pub fn new(rank: Rank, suit: Suit) -> Card {
        Card { rank, suit }
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        self.suit
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseCardError(s.to_string());

        // A code is a rank code followed by a suit letter, the ten rank
        // takes the two characters alias 10.
        let (rank, suit) = s
            .split_at_checked(s.len().wrapping_sub(1))
            .ok_or_else(&err)?;
        let rank = rank.parse::<Rank>().map_err(|_| err())?;
        let suit = suit.parse::<Suit>().map_err(|_| err())?;
        Ok(Card::new(rank, suit))
    }
}

/// Error for a card code that doesn't name a card.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid card code '{0}', use codes like AH, 10S, KC, QD")]
pub struct ParseCardError(pub String);

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
    /// Returns all ranks.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
        .into_iter()
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
            _ => return Err(ParseCardError(s.to_string())),
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
    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades].into_iter()
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

impl FromStr for Suit {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let suit = match s.to_ascii_uppercase().as_str() {
            "C" => Suit::Clubs,
            "D" => Suit::Diamonds,
            "H" => Suit::Hearts,
            "S" => Suit::Spades,
            _ => return Err(ParseCardError(s.to_string())),
        };

        Ok(suit)
    }
}

/// A cards Deck
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Removes a card from the deck.
    ///
    /// Removing a card that is not in the deck is a no-op, so removing the
    /// same card twice leaves the deck with one copy gone.
    pub fn remove(&mut self, card: Card) {
        self.cards.retain(|c| c != &card);
    }

    /// Returns a uniformly shuffled copy of the cards left in the deck.
    ///
    /// The deck itself is not mutated; for a seeded `rng` the permutation
    /// is reproducible.
    pub fn shuffled<R: Rng>(&self, rng: &mut R) -> Vec<Card> {
        let mut cards = self.cards.clone();
        cards.shuffle(rng);
        cards
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
    use rand::rngs::StdRng;

    #[test]
    fn deck_is_exhaustive() {
        let deck = Deck::default();
        assert_eq!(deck.count(), Deck::SIZE);
        assert!(!deck.is_empty());

        let cards = deck.into_iter().collect::<HashSet<_>>();
        assert_eq!(cards.len(), Deck::SIZE);

        for suit in Suit::suits() {
            for rank in Rank::ranks() {
                assert!(cards.contains(&Card::new(rank, suit)));
            }
        }
    }

    #[test]
    fn deck_remove() {
        let mut deck = Deck::default();
        let ad = Card::new(Rank::Ace, Suit::Diamonds);
        let kd = Card::new(Rank::King, Suit::Diamonds);

        deck.remove(ad);
        deck.remove(kd);
        assert_eq!(deck.count(), Deck::SIZE - 2);

        // Removing again changes nothing.
        deck.remove(ad);
        assert_eq!(deck.count(), Deck::SIZE - 2);

        let cards = deck.into_iter().collect::<HashSet<_>>();
        assert!(!cards.contains(&ad));
        assert!(!cards.contains(&kd));
    }

    #[test]
    fn shuffled_is_a_permutation() {
        let deck = Deck::default();
        let mut rng = StdRng::seed_from_u64(7);

        let dealt = deck.shuffled(&mut rng);
        assert_eq!(dealt.len(), Deck::SIZE);
        assert_eq!(deck.count(), Deck::SIZE);

        let cards = dealt.iter().copied().collect::<HashSet<_>>();
        assert_eq!(cards.len(), Deck::SIZE);
    }

    #[test]
    fn shuffled_is_reproducible() {
        let deck = Deck::default();

        let mut rng = StdRng::seed_from_u64(1234);
        let d1 = deck.shuffled(&mut rng);

        let mut rng = StdRng::seed_from_u64(1234);
        let d2 = deck.shuffled(&mut rng);

        assert_eq!(d1, d2);

        let mut rng = StdRng::seed_from_u64(1235);
        let d3 = deck.shuffled(&mut rng);
        assert_ne!(d1, d3);
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
    fn card_from_str() {
        assert_eq!(
            "AH".parse::<Card>().unwrap(),
            Card::new(Rank::Ace, Suit::Hearts)
        );
        assert_eq!(
            "TS".parse::<Card>().unwrap(),
            Card::new(Rank::Ten, Suit::Spades)
        );
        assert_eq!(
            "10S".parse::<Card>().unwrap(),
            Card::new(Rank::Ten, Suit::Spades)
        );
        assert_eq!(
            "qd".parse::<Card>().unwrap(),
            Card::new(Rank::Queen, Suit::Diamonds)
        );
        assert_eq!(
            "2c".parse::<Card>().unwrap(),
            Card::new(Rank::Deuce, Suit::Clubs)
        );
    }

    #[test]
    fn card_from_str_rejects_bad_codes() {
        for code in ["", "A", "AX", "1S", "11S", "AHH", "H10"] {
            let err = code.parse::<Card>().unwrap_err();
            assert_eq!(err, ParseCardError(code.to_string()));
        }
    }

    #[test]
    fn card_display_round_trip() {
        for card in Deck::default() {
            assert_eq!(card.to_string().parse::<Card>().unwrap(), card);
        }
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Suit {
    Spades,
    Hearts,
    Clubs,
    Diamonds,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Clubs, Suit::Diamonds];

    pub fn is_red(self) -> bool {
        matches!(self, Suit::Hearts | Suit::Diamonds)
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Suit::Spades => "♠",
            Suit::Hearts => "♥",
            Suit::Clubs => "♣",
            Suit::Diamonds => "♦",
        }
    }
}

/// Ranks in playing order: Three is the weakest, Two outranks the aces, and
/// the jokers sit on top.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rank {
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
    Two,
    BlackJoker,
    RedJoker,
}

impl Rank {
    pub const ORDINARY: [Rank; 13] = [
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
        Rank::Two,
    ];

    /// Strength used for every comparison: 3..15 for the ordinary ranks
    /// (Two = 15), 16 and 17 for the jokers.
    pub fn value(self) -> u8 {
        match self {
            Rank::Three => 3,
            Rank::Four => 4,
            Rank::Five => 5,
            Rank::Six => 6,
            Rank::Seven => 7,
            Rank::Eight => 8,
            Rank::Nine => 9,
            Rank::Ten => 10,
            Rank::Jack => 11,
            Rank::Queen => 12,
            Rank::King => 13,
            Rank::Ace => 14,
            Rank::Two => 15,
            Rank::BlackJoker => 16,
            Rank::RedJoker => 17,
        }
    }

    pub fn is_joker(self) -> bool {
        matches!(self, Rank::BlackJoker | Rank::RedJoker)
    }

    pub fn label(self) -> &'static str {
        match self {
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::BlackJoker => "joker",
            Rank::RedJoker => "JOKER",
        }
    }
}

/// One physical card. Rank plus suit uniquely identifies a card in the
/// 54-card deck (the jokers are unique by rank alone), so the struct itself
/// is the stable identity used when removing played cards from a hand.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Card {
    pub rank: Rank,
    pub suit: Option<Suit>,
}

impl Card {
    pub fn standard(suit: Suit, rank: Rank) -> Self {
        debug_assert!(!rank.is_joker());
        Self {
            rank,
            suit: Some(suit),
        }
    }

    pub fn joker(rank: Rank) -> Self {
        debug_assert!(rank.is_joker());
        Self { rank, suit: None }
    }

    pub fn value(self) -> u8 {
        self.rank.value()
    }

    pub fn is_red(self) -> bool {
        self.suit.map(Suit::is_red).unwrap_or(false)
    }

    pub fn is_joker(self) -> bool {
        self.rank.is_joker()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.suit {
            Some(suit) => write!(f, "{}{}", suit.symbol(), self.rank.label()),
            None => write!(f, "{}", self.rank.label()),
        }
    }
}

/// Sorts ascending by strength, the display order the game uses for hands.
pub fn sort_cards(cards: &mut [Card]) {
    cards.sort_by_key(|card| card.value());
}

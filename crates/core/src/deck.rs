use crate::{Card, Rank, RngState, Suit};

pub const DECK_SIZE: usize = 54;

/// Cards dealt to the two seats plus the face-down bottom group. The split is
/// the original game's: first 17, next 17, remaining 20 to the bottom.
#[derive(Debug, Clone)]
pub struct Deal {
    pub hand_a: Vec<Card>,
    pub hand_b: Vec<Card>,
    pub bottom: Vec<Card>,
}

#[derive(Debug, Default, Clone)]
pub struct Deck {
    pub cards: Vec<Card>,
}

impl Deck {
    /// The full 54-card deck: 13 ranks across 4 suits plus both jokers.
    pub fn standard54() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ORDINARY {
                cards.push(Card::standard(suit, rank));
            }
        }
        cards.push(Card::joker(Rank::BlackJoker));
        cards.push(Card::joker(Rank::RedJoker));
        Self { cards }
    }

    pub fn shuffle(&mut self, rng: &mut RngState) {
        rng.shuffle(&mut self.cards);
    }

    /// Partitions the deck into the two hands and the bottom group. Hands come
    /// back sorted for display; the bottom keeps deal order until it is
    /// claimed.
    pub fn deal(self) -> Deal {
        assert_eq!(self.cards.len(), DECK_SIZE, "deal requires a full deck");
        let mut cards = self.cards;
        let bottom = cards.split_off(34);
        let mut hand_b = cards.split_off(17);
        let mut hand_a = cards;
        crate::sort_cards(&mut hand_a);
        crate::sort_cards(&mut hand_b);
        Deal {
            hand_a,
            hand_b,
            bottom,
        }
    }
}

use crate::{can_beat, classify, Card, Combo, Deck, RngState};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Seat {
    Player,
    Computer,
}

impl Seat {
    pub fn opponent(self) -> Seat {
        match self {
            Seat::Player => Seat::Computer,
            Seat::Computer => Seat::Player,
        }
    }

    fn index(self) -> usize {
        match self {
            Seat::Player => 0,
            Seat::Computer => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GamePhase {
    Bidding,
    Playing,
    Finished,
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("invalid phase: {0:?}")]
    InvalidPhase(GamePhase),
    #[error("cards not in hand")]
    CardsNotHeld,
    #[error("invalid combination")]
    InvalidCombination,
    #[error("cannot beat the standing play")]
    CannotBeat,
    #[error("cannot pass on a free lead")]
    MustLead,
}

/// One round of the game as the orchestrator sees it: both hands, the bottom
/// group, the landlord assignment, and the combination currently standing.
/// The session validates submitted plays; it does not schedule turns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSession {
    pub phase: GamePhase,
    pub landlord: Option<Seat>,
    pub stake: u8,
    pub bids: Vec<(Seat, u8)>,
    pub winner: Option<Seat>,
    hands: [Vec<Card>; 2],
    bottom: Vec<Card>,
    standing: Option<(Seat, Combo)>,
    seed: u64,
}

impl GameSession {
    /// Shuffles a fresh deck with the given seed and deals a new round.
    pub fn deal(seed: u64) -> Self {
        let mut rng = RngState::from_seed(seed);
        let mut deck = Deck::standard54();
        deck.shuffle(&mut rng);
        let deal = deck.deal();
        Self {
            phase: GamePhase::Bidding,
            landlord: None,
            stake: 0,
            bids: Vec::new(),
            winner: None,
            hands: [deal.hand_a, deal.hand_b],
            bottom: deal.bottom,
            standing: None,
            seed,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn hand(&self, seat: Seat) -> &[Card] {
        &self.hands[seat.index()]
    }

    pub fn remaining(&self, seat: Seat) -> usize {
        self.hands[seat.index()].len()
    }

    pub fn bottom(&self) -> &[Card] {
        &self.bottom
    }

    /// The combination `seat` must beat, if the opponent has one standing.
    pub fn to_beat(&self, seat: Seat) -> Option<&Combo> {
        match &self.standing {
            Some((owner, combo)) if *owner != seat => Some(combo),
            _ => None,
        }
    }

    pub fn record_bid(&mut self, seat: Seat, bid: u8) -> Result<(), SessionError> {
        if self.phase != GamePhase::Bidding {
            return Err(SessionError::InvalidPhase(self.phase));
        }
        debug_assert!(bid <= 3);
        self.bids.push((seat, bid));
        Ok(())
    }

    /// Hands the bottom cards to the winning bidder and opens play. The
    /// landlord leads first; scheduling that lead is the caller's job.
    pub fn assign_landlord(&mut self, seat: Seat, stake: u8) -> Result<(), SessionError> {
        if self.phase != GamePhase::Bidding {
            return Err(SessionError::InvalidPhase(self.phase));
        }
        let hand = &mut self.hands[seat.index()];
        hand.append(&mut self.bottom);
        crate::sort_cards(hand);
        self.landlord = Some(seat);
        self.stake = stake;
        self.phase = GamePhase::Playing;
        Ok(())
    }

    /// Validates and applies a play: the cards must all be held, must form a
    /// recognized combination, and must beat whatever is standing. Played
    /// cards leave the hand by identity; emptying the hand wins the round.
    pub fn submit_play(&mut self, seat: Seat, cards: &[Card]) -> Result<Combo, SessionError> {
        if self.phase != GamePhase::Playing {
            return Err(SessionError::InvalidPhase(self.phase));
        }
        if !self.holds_all(seat, cards) {
            return Err(SessionError::CardsNotHeld);
        }
        let combo = classify(cards).ok_or(SessionError::InvalidCombination)?;
        if !can_beat(&combo, self.to_beat(seat)) {
            return Err(SessionError::CannotBeat);
        }
        let hand = &mut self.hands[seat.index()];
        hand.retain(|held| !cards.contains(held));
        self.standing = Some((seat, combo.clone()));
        if hand.is_empty() {
            self.winner = Some(seat);
            self.phase = GamePhase::Finished;
        }
        Ok(combo)
    }

    /// Passing concedes the trick: the standing combination is cleared and
    /// its owner gets a free lead. Only legal while something stands.
    pub fn submit_pass(&mut self, seat: Seat) -> Result<(), SessionError> {
        if self.phase != GamePhase::Playing {
            return Err(SessionError::InvalidPhase(self.phase));
        }
        if self.to_beat(seat).is_none() {
            return Err(SessionError::MustLead);
        }
        self.standing = None;
        Ok(())
    }

    fn holds_all(&self, seat: Seat, cards: &[Card]) -> bool {
        let hand = &self.hands[seat.index()];
        cards
            .iter()
            .enumerate()
            .all(|(i, card)| hand.contains(card) && !cards[..i].contains(card))
    }
}

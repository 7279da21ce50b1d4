use landlord_core::{Card, Deck, GamePhase, GameSession, Seat, SessionError};

fn ready_session(seed: u64) -> GameSession {
    let mut session = GameSession::deal(seed);
    session
        .record_bid(Seat::Player, 2)
        .expect("bidding phase accepts bids");
    session
        .assign_landlord(Seat::Player, 2)
        .expect("bidding phase assigns the landlord");
    session
}

#[test]
fn deal_opens_in_the_bidding_phase() {
    let session = GameSession::deal(1);
    assert_eq!(session.phase, GamePhase::Bidding);
    assert_eq!(session.remaining(Seat::Player), 17);
    assert_eq!(session.remaining(Seat::Computer), 17);
    assert_eq!(session.bottom().len(), 20);
}

#[test]
fn landlord_claims_the_bottom_cards() {
    let session = ready_session(1);
    assert_eq!(session.phase, GamePhase::Playing);
    assert_eq!(session.landlord, Some(Seat::Player));
    assert_eq!(session.stake, 2);
    assert_eq!(session.remaining(Seat::Player), 37);
    assert!(session.bottom().is_empty());
    let hand = session.hand(Seat::Player);
    assert!(hand.windows(2).all(|w| w[0].value() <= w[1].value()));
}

#[test]
fn the_stored_seed_replays_the_deal() {
    let session = GameSession::deal(9);
    let replay = GameSession::deal(session.seed());
    assert_eq!(session.hand(Seat::Player), replay.hand(Seat::Player));
    assert_eq!(session.hand(Seat::Computer), replay.hand(Seat::Computer));
    assert_eq!(session.bottom(), replay.bottom());
}

#[test]
fn playing_before_the_bid_is_rejected() {
    let mut session = GameSession::deal(1);
    let card = session.hand(Seat::Player)[0];
    let err = session.submit_play(Seat::Player, &[card]).unwrap_err();
    assert!(matches!(err, SessionError::InvalidPhase(GamePhase::Bidding)));
}

#[test]
fn a_played_card_leaves_the_hand() {
    let mut session = ready_session(1);
    let card = session.hand(Seat::Player)[0];
    let combo = session
        .submit_play(Seat::Player, &[card])
        .expect("a single lead is always legal");
    assert_eq!(combo.cards, vec![card]);
    assert_eq!(session.remaining(Seat::Player), 36);
    assert!(!session.hand(Seat::Player).contains(&card));
    assert_eq!(session.to_beat(Seat::Computer), Some(&combo));
    assert!(session.to_beat(Seat::Player).is_none());
}

#[test]
fn cards_outside_the_hand_are_rejected() {
    let mut session = ready_session(1);
    let foreign = Deck::standard54()
        .cards
        .into_iter()
        .find(|card| !session.hand(Seat::Player).contains(card))
        .expect("a 37-card hand leaves 17 cards outside it");
    let err = session.submit_play(Seat::Player, &[foreign]).unwrap_err();
    assert!(matches!(err, SessionError::CardsNotHeld));
}

#[test]
fn the_same_card_cannot_be_submitted_twice() {
    let mut session = ready_session(1);
    let card = session.hand(Seat::Player)[0];
    let err = session.submit_play(Seat::Player, &[card, card]).unwrap_err();
    assert!(matches!(err, SessionError::CardsNotHeld));
}

#[test]
fn unclassifiable_sets_are_rejected() {
    let mut session = ready_session(1);
    let hand = session.hand(Seat::Player);
    let first = hand[0];
    let other = hand
        .iter()
        .copied()
        .find(|card| card.value() > first.value() + 1)
        .expect("a 37-card hand spans more than two adjacent values");
    let err = session.submit_play(Seat::Player, &[first, other]).unwrap_err();
    assert!(matches!(err, SessionError::InvalidCombination));
}

#[test]
fn passing_on_a_free_lead_is_rejected() {
    let mut session = ready_session(1);
    let err = session.submit_pass(Seat::Player).unwrap_err();
    assert!(matches!(err, SessionError::MustLead));
}

#[test]
fn a_pass_clears_the_standing_combination() {
    let mut session = ready_session(1);
    let card = session.hand(Seat::Player)[0];
    session
        .submit_play(Seat::Player, &[card])
        .expect("a single lead is always legal");
    session
        .submit_pass(Seat::Computer)
        .expect("passing against a standing play is legal");
    assert!(session.to_beat(Seat::Player).is_none());
    assert!(session.to_beat(Seat::Computer).is_none());
}

#[test]
fn a_lead_cannot_be_beaten_by_a_weaker_single() {
    let mut session = ready_session(1);
    let strongest = *session
        .hand(Seat::Player)
        .last()
        .expect("landlord hand is not empty");
    session
        .submit_play(Seat::Player, &[strongest])
        .expect("a single lead is always legal");
    let weakest = session.hand(Seat::Computer)[0];
    if weakest.value() <= strongest.value() {
        let err = session.submit_play(Seat::Computer, &[weakest]).unwrap_err();
        assert!(matches!(err, SessionError::CannotBeat));
    }
}

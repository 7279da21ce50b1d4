use landlord_core::{can_beat, classify, Card, Combo, Rank, Suit};
use Rank::*;
use Suit::*;

fn c(rank: Rank, suit: Suit) -> Card {
    Card::standard(suit, rank)
}

fn combo(cards: &[Card]) -> Combo {
    classify(cards).expect("test combo should classify")
}

fn single(rank: Rank) -> Combo {
    combo(&[c(rank, Spades)])
}

fn pair(rank: Rank) -> Combo {
    combo(&[c(rank, Spades), c(rank, Hearts)])
}

fn triple(rank: Rank) -> Combo {
    combo(&[c(rank, Spades), c(rank, Hearts), c(rank, Clubs)])
}

fn bomb(rank: Rank) -> Combo {
    combo(&[
        c(rank, Spades),
        c(rank, Hearts),
        c(rank, Clubs),
        c(rank, Diamonds),
    ])
}

fn rocket() -> Combo {
    combo(&[Card::joker(BlackJoker), Card::joker(RedJoker)])
}

fn sequence(from: Rank, length: usize) -> Combo {
    let start = from.value();
    let cards: Vec<Card> = (0..length)
        .map(|offset| {
            let value = start + offset as u8;
            let rank = Rank::ORDINARY
                .into_iter()
                .find(|rank| rank.value() == value)
                .expect("run stays inside the ordinary ranks");
            c(rank, Spades)
        })
        .collect();
    combo(&cards)
}

macro_rules! beats {
    ($name:ident, $candidate:expr, $target:expr) => {
        #[test]
        fn $name() {
            assert!(can_beat(&$candidate, Some(&$target)));
        }
    };
}

macro_rules! beats_not {
    ($name:ident, $candidate:expr, $target:expr) => {
        #[test]
        fn $name() {
            assert!(!can_beat(&$candidate, Some(&$target)));
        }
    };
}

#[test]
fn anything_beats_a_free_lead() {
    for candidate in [
        single(Three),
        pair(Four),
        triple(King),
        sequence(Three, 5),
        bomb(Seven),
        rocket(),
    ] {
        assert!(can_beat(&candidate, None));
    }
}

beats!(rocket_beats_bomb, rocket(), bomb(Ace));
beats!(rocket_beats_single, rocket(), single(Two));
beats!(rocket_beats_sequence, rocket(), sequence(Ten, 5));
beats_not!(bomb_loses_to_rocket, bomb(Ace), rocket());
beats_not!(single_loses_to_rocket, single(Two), rocket());

beats!(bomb_beats_triple_of_kings, bomb(Seven), triple(King));
beats!(bomb_beats_higher_single, bomb(Three), single(Two));
beats!(bomb_beats_long_sequence, bomb(Three), sequence(Nine, 6));
beats!(higher_bomb_beats_lower, bomb(Nine), bomb(Seven));
beats_not!(lower_bomb_loses, bomb(Seven), bomb(Nine));
beats_not!(triple_never_beats_bomb, triple(Ace), bomb(Three));

beats!(ace_beats_king, single(Ace), single(King));
beats_not!(king_loses_to_ace, single(King), single(Ace));
beats_not!(equal_singles_do_not_beat, single(King), single(King));
beats!(pair_of_nines_beats_pair_of_fours, pair(Nine), pair(Four));
beats!(higher_triple_beats_lower, triple(Eight), triple(Seven));
beats!(higher_sequence_beats_lower, sequence(Four, 5), sequence(Three, 5));

beats_not!(pair_cannot_beat_single, pair(Ace), single(Three));
beats_not!(single_cannot_beat_pair, single(Ace), pair(Three));
beats_not!(triple_cannot_beat_pair, triple(Ace), pair(Three));
beats_not!(
    longer_sequence_cannot_beat_shorter,
    sequence(Three, 6),
    sequence(Nine, 5)
);
beats_not!(
    shorter_sequence_cannot_beat_longer,
    sequence(Nine, 5),
    sequence(Three, 6)
);

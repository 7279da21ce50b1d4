use crate::Card;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const SEQUENCE_MIN: usize = 5;
pub const PAIR_SEQUENCE_MIN: usize = 3;
pub const PLANE_MIN: usize = 2;
/// Ranks at this strength or above (Two and the jokers) never join a run.
pub const RUN_LIMIT: u8 = 15;

/// The closed set of playable shapes. Run-shaped kinds carry their length so
/// that kind equality already implies matching card counts.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ComboKind {
    Single,
    Pair,
    Triple,
    TripleWithSingle,
    TripleWithPair,
    Sequence { length: u8 },
    PairSequence { length: u8 },
    Plane { length: u8 },
    PlaneWithSingle { length: u8 },
    PlaneWithPair { length: u8 },
    FourWithTwoSingle,
    FourWithTwoPair,
    Bomb,
    Rocket,
}

impl ComboKind {
    pub fn is_bomb(self) -> bool {
        matches!(self, ComboKind::Bomb)
    }

    pub fn is_rocket(self) -> bool {
        matches!(self, ComboKind::Rocket)
    }

    pub fn label(self) -> &'static str {
        match self {
            ComboKind::Single => "single",
            ComboKind::Pair => "pair",
            ComboKind::Triple => "triple",
            ComboKind::TripleWithSingle => "triple_with_single",
            ComboKind::TripleWithPair => "triple_with_pair",
            ComboKind::Sequence { .. } => "sequence",
            ComboKind::PairSequence { .. } => "pair_sequence",
            ComboKind::Plane { .. } => "plane",
            ComboKind::PlaneWithSingle { .. } => "plane_with_single",
            ComboKind::PlaneWithPair { .. } => "plane_with_pair",
            ComboKind::FourWithTwoSingle => "four_with_two_single",
            ComboKind::FourWithTwoPair => "four_with_two_pair",
            ComboKind::Bomb => "bomb",
            ComboKind::Rocket => "rocket",
        }
    }
}

/// A classified, playable group of cards. `primary` is the rank strength used
/// to compare two combos of the same kind: the repeated group's value, or the
/// lowest rank of the run for sequences and planes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Combo {
    pub kind: ComboKind,
    pub primary: u8,
    pub cards: Vec<Card>,
}

impl Combo {
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Classifies an unordered card set. Pure and total: any set that matches no
/// recognized shape yields `None`. When a card count admits more than one
/// reading, the stronger shape wins (rocket, then bomb, then the quad and
/// plane families, down to the single).
pub fn classify(cards: &[Card]) -> Option<Combo> {
    if cards.is_empty() {
        return None;
    }
    let mut sorted = cards.to_vec();
    crate::sort_cards(&mut sorted);

    let mut counts: BTreeMap<u8, usize> = BTreeMap::new();
    for card in &sorted {
        *counts.entry(card.value()).or_insert(0) += 1;
    }
    let n = sorted.len();
    let quads = values_with_count(&counts, 4);
    let triples = values_with_count(&counts, 3);
    let pairs = values_with_count(&counts, 2);
    let singles = values_with_count(&counts, 1);

    if n == 2 && counts.contains_key(&16) && counts.contains_key(&17) {
        return finish(ComboKind::Rocket, 17, sorted);
    }
    if n == 4 && quads.len() == 1 {
        return finish(ComboKind::Bomb, quads[0], sorted);
    }
    if n == 8 && quads.len() == 1 && pairs.len() == 2 {
        return finish(ComboKind::FourWithTwoPair, quads[0], sorted);
    }
    if n == 6 && quads.len() == 1 && singles.len() == 2 {
        return finish(ComboKind::FourWithTwoSingle, quads[0], sorted);
    }
    if n % 5 == 0 {
        let wings = n / 5;
        if wings >= PLANE_MIN && triples.len() == wings && pairs.len() == wings && is_run(&triples)
        {
            let kind = ComboKind::PlaneWithPair {
                length: wings as u8,
            };
            return finish(kind, triples[0], sorted);
        }
    }
    if n % 4 == 0 {
        let wings = n / 4;
        if wings >= PLANE_MIN && triples.len() == wings && singles.len() == wings && is_run(&triples)
        {
            let kind = ComboKind::PlaneWithSingle {
                length: wings as u8,
            };
            return finish(kind, triples[0], sorted);
        }
    }
    if n % 3 == 0 && n / 3 >= PLANE_MIN && triples.len() == n / 3 && is_run(&triples) {
        let kind = ComboKind::Plane {
            length: (n / 3) as u8,
        };
        return finish(kind, triples[0], sorted);
    }
    if n % 2 == 0 && n / 2 >= PAIR_SEQUENCE_MIN && pairs.len() == n / 2 && is_run(&pairs) {
        let kind = ComboKind::PairSequence {
            length: (n / 2) as u8,
        };
        return finish(kind, pairs[0], sorted);
    }
    if n >= SEQUENCE_MIN && singles.len() == n && is_run(&singles) {
        let kind = ComboKind::Sequence { length: n as u8 };
        return finish(kind, singles[0], sorted);
    }
    if n == 5 && triples.len() == 1 && pairs.len() == 1 {
        return finish(ComboKind::TripleWithPair, triples[0], sorted);
    }
    if n == 4 && triples.len() == 1 && singles.len() == 1 {
        return finish(ComboKind::TripleWithSingle, triples[0], sorted);
    }
    if n == 3 && triples.len() == 1 {
        return finish(ComboKind::Triple, triples[0], sorted);
    }
    if n == 2 && pairs.len() == 1 {
        return finish(ComboKind::Pair, pairs[0], sorted);
    }
    if n == 1 {
        return finish(ComboKind::Single, sorted[0].value(), sorted);
    }
    None
}

fn finish(kind: ComboKind, primary: u8, cards: Vec<Card>) -> Option<Combo> {
    Some(Combo {
        kind,
        primary,
        cards,
    })
}

fn values_with_count(counts: &BTreeMap<u8, usize>, size: usize) -> Vec<u8> {
    counts
        .iter()
        .filter(|(_, &count)| count == size)
        .map(|(&value, _)| value)
        .collect()
}

/// A run is a non-empty set of consecutive values entirely below the Two.
fn is_run(values: &[u8]) -> bool {
    if values.is_empty() || values.last().copied().unwrap_or(0) >= RUN_LIMIT {
        return false;
    }
    values.windows(2).all(|w| w[1] == w[0] + 1)
}

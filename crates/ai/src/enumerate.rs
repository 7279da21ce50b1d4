use landlord_core::{
    classify, sort_cards, Card, Combo, PAIR_SEQUENCE_MIN, PLANE_MIN, RUN_LIMIT, SEQUENCE_MIN,
};
use std::collections::BTreeMap;

/// Every combination the hand can form, without walking all subsets: singles,
/// adjacent pairs inside each same-rank group, one triple per group plus its
/// single/pair attachments, bombs, the rocket, and each maximal sequence,
/// pair-sequence and plane run. Overlapping windows may repeat a shape;
/// consumers rank and filter, so duplicates are fine. Every entry goes
/// through `classify`, so the output is valid by construction.
pub fn enumerate(hand: &[Card]) -> Vec<Combo> {
    let mut sorted = hand.to_vec();
    sort_cards(&mut sorted);
    let groups = group_by_value(&sorted);
    let mut plays = Vec::new();

    for &card in &sorted {
        push(&mut plays, vec![card]);
    }

    for group in groups.values().filter(|group| group.len() >= 2) {
        for window in group.windows(2) {
            push(&mut plays, window.to_vec());
        }
    }

    for (&value, group) in groups.iter().filter(|(_, group)| group.len() >= 3) {
        let triple = &group[..3];
        push(&mut plays, triple.to_vec());
        for &single in sorted.iter().filter(|card| card.value() != value) {
            let mut cards = triple.to_vec();
            cards.push(single);
            push(&mut plays, cards);
        }
        for other in groups
            .iter()
            .filter(|(&other, group)| other != value && group.len() >= 2)
            .map(|(_, group)| group)
        {
            let mut cards = triple.to_vec();
            cards.extend_from_slice(&other[..2]);
            push(&mut plays, cards);
        }
    }

    for group in groups.values().filter(|group| group.len() == 4) {
        push(&mut plays, group.clone());
    }

    if let (Some(small), Some(big)) = (groups.get(&16), groups.get(&17)) {
        push(&mut plays, vec![small[0], big[0]]);
    }

    for segment in run_segments(&groups, 1, SEQUENCE_MIN) {
        push(&mut plays, take_per_value(&groups, &segment, 1));
    }
    for segment in run_segments(&groups, 2, PAIR_SEQUENCE_MIN) {
        push(&mut plays, take_per_value(&groups, &segment, 2));
    }
    for segment in run_segments(&groups, 3, PLANE_MIN) {
        push(&mut plays, take_per_value(&groups, &segment, 3));
    }

    plays
}

fn push(plays: &mut Vec<Combo>, cards: Vec<Card>) {
    if let Some(combo) = classify(&cards) {
        plays.push(combo);
    }
}

pub(crate) fn group_by_value(cards: &[Card]) -> BTreeMap<u8, Vec<Card>> {
    let mut groups: BTreeMap<u8, Vec<Card>> = BTreeMap::new();
    for &card in cards {
        groups.entry(card.value()).or_default().push(card);
    }
    groups
}

/// Maximal stretches of consecutive values below the Two where every group
/// holds at least `depth` cards, keeping stretches of at least `min` values.
fn run_segments(groups: &BTreeMap<u8, Vec<Card>>, depth: usize, min: usize) -> Vec<Vec<u8>> {
    let eligible: Vec<u8> = groups
        .iter()
        .filter(|(&value, group)| value < RUN_LIMIT && group.len() >= depth)
        .map(|(&value, _)| value)
        .collect();

    let mut segments = Vec::new();
    let mut current: Vec<u8> = Vec::new();
    for value in eligible {
        if current.last().is_some_and(|&prev| value != prev + 1) {
            if current.len() >= min {
                segments.push(std::mem::take(&mut current));
            } else {
                current.clear();
            }
        }
        current.push(value);
    }
    if current.len() >= min {
        segments.push(current);
    }
    segments
}

fn take_per_value(groups: &BTreeMap<u8, Vec<Card>>, values: &[u8], depth: usize) -> Vec<Card> {
    let mut cards = Vec::with_capacity(values.len() * depth);
    for value in values {
        if let Some(group) = groups.get(value) {
            cards.extend_from_slice(&group[..depth]);
        }
    }
    cards
}

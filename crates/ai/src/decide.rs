use crate::enumerate::{enumerate, group_by_value};
use landlord_core::{can_beat, Card, Combo, ComboKind};
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

/// Selection strategy. Conservative and Balanced both spend as little as
/// possible when following; Aggressive sheds the most cards it can and is
/// willing to open with a bomb.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Policy {
    Conservative,
    Balanced,
    Aggressive,
}

/// Per-call snapshot the caller supplies. With no forced policy, either side
/// being down to `endgame_threshold` cards or fewer switches to Aggressive.
#[derive(Debug, Clone, Copy)]
pub struct PlayContext {
    pub opponent_remaining: usize,
    pub policy: Option<Policy>,
    pub endgame_threshold: usize,
}

impl PlayContext {
    pub fn new(opponent_remaining: usize) -> Self {
        Self {
            opponent_remaining,
            policy: None,
            endgame_threshold: 3,
        }
    }

    pub fn with_policy(mut self, policy: Policy) -> Self {
        self.policy = Some(policy);
        self
    }

    fn resolve(&self, hand_len: usize) -> Policy {
        if let Some(policy) = self.policy {
            return policy;
        }
        if hand_len <= self.endgame_threshold || self.opponent_remaining <= self.endgame_threshold
        {
            Policy::Aggressive
        } else {
            Policy::Balanced
        }
    }
}

/// The engine's answer: a concrete play, or a pass when nothing held can beat
/// the standing combination. Never a pass on a free lead.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum Decision {
    Play(Combo),
    Pass,
}

/// Picks a play for `hand` against `to_beat` (`None` is a free lead). The
/// hand must be non-empty; the caller owns turn order and win detection.
pub fn decide_play(hand: &[Card], to_beat: Option<&Combo>, ctx: &PlayContext) -> Decision {
    assert!(!hand.is_empty(), "decide_play requires a non-empty hand");
    let policy = ctx.resolve(hand.len());
    match to_beat {
        Some(target) => follow(hand, target, policy),
        None => lead(hand, policy),
    }
}

fn follow(hand: &[Card], target: &Combo, policy: Policy) -> Decision {
    let mut candidates: Vec<Combo> = enumerate(hand)
        .into_iter()
        .filter(|combo| can_beat(combo, Some(target)))
        .collect();
    if candidates.is_empty() {
        return Decision::Pass;
    }
    match policy {
        // Shed volume: most cards first, cheaper on ties.
        Policy::Aggressive => {
            candidates.sort_by_key(|combo| (Reverse(combo.len()), combo.primary));
        }
        // Cheapest beat: same kind as the target before bombs, bombs before
        // the rocket, lowest primary within each tier.
        Policy::Conservative | Policy::Balanced => {
            candidates.sort_by_key(|combo| (follow_tier(combo, target), combo.primary));
        }
    }
    Decision::Play(candidates.swap_remove(0))
}

fn follow_tier(combo: &Combo, target: &Combo) -> u8 {
    if combo.kind == target.kind {
        0
    } else if combo.kind.is_bomb() {
        1
    } else {
        2
    }
}

fn lead(hand: &[Card], policy: Policy) -> Decision {
    let candidates = enumerate(hand);

    if policy == Policy::Aggressive {
        if let Some(finisher) = candidates
            .iter()
            .find(|combo| combo.kind.is_bomb())
            .or_else(|| candidates.iter().find(|combo| combo.kind.is_rocket()))
        {
            return Decision::Play(finisher.clone());
        }
    }

    // Long runs drain the hand fastest.
    if let Some(run) = candidates
        .iter()
        .filter(|combo| {
            matches!(
                combo.kind,
                ComboKind::Sequence { .. } | ComboKind::PairSequence { .. }
            )
        })
        .max_by_key(|combo| combo.len())
    {
        return Decision::Play(run.clone());
    }

    // Most structured shape on offer, strongest instance of it.
    if let Some(best) = candidates
        .iter()
        .filter_map(|combo| lead_tier(combo.kind).map(|tier| (tier, combo)))
        .min_by_key(|(tier, combo)| (*tier, Reverse(combo.primary), Reverse(combo.len())))
        .map(|(_, combo)| combo)
    {
        return Decision::Play(best.clone());
    }

    // Nothing structured left: the lowest single. Every card is enumerated
    // as a single, so a non-empty hand always has one.
    candidates
        .into_iter()
        .filter(|combo| combo.kind == ComboKind::Single)
        .min_by_key(|combo| combo.primary)
        .map(Decision::Play)
        .unwrap_or(Decision::Pass)
}

fn lead_tier(kind: ComboKind) -> Option<u8> {
    match kind {
        ComboKind::Plane { .. }
        | ComboKind::PlaneWithSingle { .. }
        | ComboKind::PlaneWithPair { .. } => Some(0),
        ComboKind::PairSequence { .. } => Some(1),
        ComboKind::Sequence { .. } => Some(2),
        ComboKind::TripleWithPair | ComboKind::TripleWithSingle | ComboKind::Triple => Some(3),
        ComboKind::Pair => Some(4),
        _ => None,
    }
}

/// Bid score for the hand, 0..=3. Weighted count of high cards (value 14 and
/// up), pair groups, triple groups, bombs, and the rocket, pushed through
/// fixed thresholds. Deterministic.
pub fn decide_bid(hand: &[Card]) -> u8 {
    let groups = group_by_value(hand);
    let high = hand.iter().filter(|card| card.value() >= 14).count();
    let mut pairs = 0usize;
    let mut triples = 0usize;
    let mut bombs = 0usize;
    for group in groups.values() {
        match group.len() {
            2 => pairs += 1,
            3 => triples += 1,
            4 => bombs += 1,
            _ => {}
        }
    }
    let rocket = groups.contains_key(&16) && groups.contains_key(&17);
    let score = high + 2 * pairs + 3 * triples + 4 * bombs + if rocket { 4 } else { 0 };
    match score {
        s if s >= 8 => 3,
        s if s >= 5 => 2,
        s if s >= 3 => 1,
        _ => 0,
    }
}

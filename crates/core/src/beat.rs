use crate::Combo;

/// Whether `candidate` beats `target`. `None` is the free lead: nothing
/// stands, so any valid combo wins. Assumes both combos were produced by
/// `classify`; this function never classifies on its own.
///
/// The override ladder: rocket over everything, any bomb over any non-bomb,
/// bombs against each other by primary value. Past that, only the exact same
/// kind (run lengths included, via the kind enum) with a strictly higher
/// primary value beats.
pub fn can_beat(candidate: &Combo, target: Option<&Combo>) -> bool {
    let Some(target) = target else {
        return true;
    };
    if candidate.kind.is_rocket() {
        return true;
    }
    if target.kind.is_rocket() {
        return false;
    }
    match (candidate.kind.is_bomb(), target.kind.is_bomb()) {
        (true, false) => return true,
        (false, true) => return false,
        (true, true) => return candidate.primary > target.primary,
        (false, false) => {}
    }
    candidate.kind == target.kind && candidate.primary > target.primary
}

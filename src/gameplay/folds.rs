use super::action::Action;
use super::round::Round;
use super::street::Street;
use std::collections::HashSet;

/// Fold every seat with no preflop action, then sweep fold state forward
/// so a folded seat never resurfaces on a later street.
///
/// An untouched preflop log is left alone: nothing recorded yet is not the
/// same hand as everyone folding. `seats` is the active roster in physical
/// seat order; implicit folds are appended in that order.
pub fn reconcile(rounds: &[Round; 4], seats: &[String]) -> [Round; 4] {
    let mut rounds = rounds.clone();
    autofold(&mut rounds[Street::Pref.index()], seats);
    cascade(&mut rounds);
    rounds
}

fn autofold(preflop: &mut Round, seats: &[String]) {
    if preflop.is_empty() {
        return;
    }
    let acted = preflop
        .actions()
        .iter()
        .map(|action| action.seat.clone())
        .collect::<HashSet<String>>();
    for seat in seats {
        if !acted.contains(seat) {
            preflop.push(Action::fold(seat.clone()));
        }
    }
}

fn cascade(rounds: &mut [Round; 4]) {
    let mut folded = HashSet::new();
    for street in 0..rounds.len() {
        let (head, tail) = rounds.split_at_mut(street + 1);
        folded.extend(head[street].folds().map(String::from));
        for later in tail {
            later.strip(&folded);
        }
    }
}

/// Every seat that folded strictly before `street`.
pub fn folded_before(rounds: &[Round], street: Street) -> HashSet<String> {
    rounds
        .iter()
        .filter(|round| round.street() < street)
        .flat_map(Round::folds)
        .map(String::from)
        .collect()
}

/// Seats owed an implicit fold before `seat` acts this street.
///
/// The street's order is rotated to start one past the most recent
/// aggressor (the base order when nobody has bet); everyone strictly
/// before `seat` in that rotation with no recorded action this street is
/// skipped and folds. A check on record is enough to be spared.
pub fn skipped(order: &[String], log: &[Action], seat: &str) -> Vec<String> {
    let count = order.len();
    if count == 0 {
        return Vec::new();
    }
    let start = log
        .iter()
        .rev()
        .find(|action| action.kind.is_aggressive())
        .and_then(|action| order.iter().position(|label| *label == action.seat))
        .map(|aggressor| (aggressor + 1) % count)
        .unwrap_or(0);
    let rotated = (0..count)
        .map(|offset| order[(start + offset) % count].as_str())
        .collect::<Vec<&str>>();
    let Some(target) = rotated.iter().position(|label| *label == seat) else {
        return Vec::new();
    };
    let acted = log
        .iter()
        .map(|action| action.seat.as_str())
        .collect::<HashSet<&str>>();
    rotated[..target]
        .iter()
        .filter(|label| !acted.contains(*label))
        .map(|label| label.to_string())
        .collect()
}

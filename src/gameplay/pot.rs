use super::action::Action;
use super::round::Round;
use super::street::Street;
use crate::BigBlinds;
use crate::Points;
use std::collections::BTreeMap;

/// Cumulative per-seat contributions over one street's log.
///
/// A wager's amount is the seat's running total for the street, so each
/// action contributes `max(amount - previous, 0)` and amounts that go
/// backwards are ignored. Checks, folds, and absent or non-positive
/// amounts contribute nothing. Every consumer of action amounts goes
/// through this one reducer.
pub fn contributions(actions: &[Action]) -> BTreeMap<String, Points> {
    let mut totals = BTreeMap::new();
    for action in actions {
        if !action.kind.is_wager() {
            continue;
        }
        let Some(amount) = action.amount else {
            continue;
        };
        if amount <= 0. {
            continue;
        }
        let previous = totals.get(&action.seat).copied().unwrap_or(0.);
        let delta = Points::max(amount - previous, 0.);
        totals.insert(action.seat.clone(), previous + delta);
    }
    totals
}

/// One street's total contribution to the pot.
pub fn contribution(round: &Round) -> Points {
    contributions(round.actions()).values().sum()
}

/// Pot accumulated over every street strictly before `street`.
pub fn before(rounds: &[Round], street: Street) -> Points {
    rounds
        .iter()
        .filter(|round| round.street() < street)
        .map(contribution)
        .sum()
}

/// The whole hand's pot, streets taken in deal order.
pub fn total(rounds: &[Round]) -> Points {
    rounds.iter().map(contribution).sum()
}

/// What a caller owes in total: the largest cumulative contribution so far
/// this street. `None` until somebody has chips in.
pub fn call_amount(actions: &[Action]) -> Option<Points> {
    let largest = contributions(actions).values().copied().fold(0., Points::max);
    (largest > 0.).then_some(largest)
}

/// Points expressed in big blinds. Unset scales convert to 0 rather than
/// dividing by zero.
pub fn to_bb(points: Points, points_per_hundred_bb: Points) -> BigBlinds {
    match points_per_hundred_bb > 0. {
        true => points / (points_per_hundred_bb / 100.),
        false => 0.,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gameplay::action::ActionKind;
    use crate::Arbitrary;

    fn wager(seat: &str, kind: ActionKind, amount: Points) -> Action {
        Action::new(seat, kind, Some(amount))
    }

    #[test]
    fn amounts_are_cumulative_not_incremental() {
        // SB posts 5, then raises to 60 total: contribution is 60, not 65.
        let actions = vec![
            wager("SB", ActionKind::SmallBlind, 5.),
            wager("BB", ActionKind::BigBlind, 10.),
            wager("SB", ActionKind::Raise, 60.),
        ];
        let totals = contributions(&actions);
        assert!(totals["SB"] == 60.);
        assert!(totals["BB"] == 10.);
    }

    #[test]
    fn backwards_amounts_are_ignored() {
        let actions = vec![
            wager("CO", ActionKind::Bet, 100.),
            wager("CO", ActionKind::Raise, 40.),
        ];
        assert!(contributions(&actions)["CO"] == 100.);
    }

    #[test]
    fn checks_folds_and_missing_amounts_contribute_nothing() {
        let actions = vec![
            Action::new("UTG", ActionKind::Check, None),
            Action::fold("HJ"),
            Action::new("CO", ActionKind::Call, None),
            Action::new("BTN", ActionKind::Bet, Some(0.)),
            Action::new("SB", ActionKind::Bet, Some(-5.)),
        ];
        assert!(contributions(&actions).is_empty());
    }

    #[test]
    fn raise_then_flat_call_doubles_the_street() {
        let actions = vec![
            wager("SB", ActionKind::Raise, 600.),
            wager("BB", ActionKind::Call, call_amount(&[wager("SB", ActionKind::Raise, 600.)]).unwrap()),
        ];
        let street: Points = contributions(&actions).values().sum();
        assert!(street == 1200.);
    }

    #[test]
    fn call_amount_is_largest_stake() {
        let actions = vec![
            wager("SB", ActionKind::SmallBlind, 5.),
            wager("BB", ActionKind::BigBlind, 10.),
            wager("CO", ActionKind::Raise, 30.),
        ];
        assert!(call_amount(&actions) == Some(30.));
        assert!(call_amount(&[]) == None);
        assert!(call_amount(&[Action::new("BB", ActionKind::Check, None)]) == None);
    }

    #[test]
    fn contribution_is_pure_and_non_negative() {
        let actions = (0..64)
            .map(|i| {
                Action::new(
                    format!("Player {}", i % 6 + 1),
                    ActionKind::random(),
                    Some(i as Points * 10. - 100.),
                )
            })
            .collect::<Vec<Action>>();
        let once: Points = contributions(&actions).values().sum();
        let twice: Points = contributions(&actions).values().sum();
        assert!(once == twice);
        assert!(once >= 0.);
    }

    #[test]
    fn bb_conversion_round_trips() {
        assert!(to_bb(750., 50000.) == 750. / 500.);
        assert!(to_bb(123., 1000.) == 12.3);
        assert!(to_bb(750., 0.) == 0.);
        assert!(to_bb(750., -1.) == 0.);
    }
}

use super::pot;
use super::round::Round;
use super::street::Street;
use crate::session::player::Player;
use crate::BigBlinds;
use crate::Points;
use crate::Seat;
use serde::Deserialize;
use serde::Serialize;

/// Hole cards a seat turned face up at showdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Showing {
    pub seat: String,
    pub cards: String,
}

/// A committed hand: four streets of action plus the table geometry frozen
/// at the moment the hand was created.
///
/// The stored pot is a convenience snapshot from commit time; any read
/// that matters recomputes from the action log instead of trusting it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hand {
    rounds: [Round; 4],
    button: Seat,
    seats: usize,
    pot: Points,
    pub hero: String,
    pub hole: String,
    pub summary: String,
    pub note: String,
    pub key: bool,
    pub shows: Vec<Showing>,
    pub roster: Vec<Player>,
}

impl Hand {
    pub fn new(rounds: [Round; 4], button: Seat, seats: usize) -> Self {
        let pot = pot::total(&rounds);
        Self {
            rounds,
            button,
            seats,
            pot,
            hero: String::new(),
            hole: String::new(),
            summary: String::new(),
            note: String::new(),
            key: false,
            shows: Vec::new(),
            roster: Vec::new(),
        }
    }

    pub fn rounds(&self) -> &[Round; 4] {
        &self.rounds
    }
    pub fn round(&self, street: Street) -> &Round {
        &self.rounds[street.index()]
    }
    pub fn button(&self) -> Seat {
        self.button
    }
    pub fn seats(&self) -> usize {
        self.seats
    }

    /// The pot, re-derived from the log.
    pub fn pot(&self) -> Points {
        pot::total(&self.rounds)
    }
    /// Pot entering a street, before any of its action.
    pub fn pot_before(&self, street: Street) -> Points {
        pot::before(&self.rounds, street)
    }
    /// The pot in big-blind units; 0 when the scale is unset.
    pub fn pot_in_bb(&self, points_per_hundred_bb: Points) -> BigBlinds {
        pot::to_bb(self.pot(), points_per_hundred_bb)
    }

    pub fn reveal(&mut self, seat: impl Into<String>, cards: impl Into<String>) {
        self.shows.push(Showing {
            seat: seat.into(),
            cards: cards.into(),
        });
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for round in self.rounds.iter().filter(|round| !round.is_empty()) {
            write!(f, "{}", round)?;
        }
        writeln!(f, "pot {}", self.pot())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gameplay::action::Action;
    use crate::gameplay::action::ActionKind;

    fn sample() -> Hand {
        let mut rounds = Round::all();
        rounds[0].push(Action::new("SB", ActionKind::SmallBlind, Some(250.)));
        rounds[0].push(Action::new("BB", ActionKind::BigBlind, Some(500.)));
        rounds[1].push(Action::new("SB", ActionKind::Bet, Some(600.)));
        rounds[1].push(Action::new("BB", ActionKind::Call, Some(600.)));
        Hand::new(rounds, 3, 6)
    }

    #[test]
    fn pot_composes_across_streets() {
        let hand = sample();
        assert!(hand.pot() == 1950.);
        assert!(hand.pot_before(Street::Pref) == 0.);
        assert!(hand.pot_before(Street::Flop) == 750.);
        assert!(hand.pot_before(Street::Turn) == 1950.);
    }

    #[test]
    fn bb_conversion_uses_the_live_pot() {
        let hand = sample();
        assert!(hand.pot_in_bb(50000.) == 3.9);
        assert!(hand.pot_in_bb(0.) == 0.);
    }

    #[test]
    fn survives_the_wire() {
        let mut hand = sample();
        hand.hero = "BTN".to_string();
        hand.reveal("BB", "AhKd");
        let json = serde_json::to_string(&hand).unwrap();
        let back = serde_json::from_str::<Hand>(&json).unwrap();
        assert!(back.pot() == hand.pot());
        assert!(back.rounds() == hand.rounds());
        assert!(back.shows == hand.shows);
        assert!(back.button() == 3);
    }
}

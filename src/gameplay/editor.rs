use super::action::Action;
use super::action::ActionKind;
use super::blinds;
use super::folds;
use super::hand::Hand;
use super::hand::Showing;
use super::pot;
use super::round::Round;
use super::street::Street;
use crate::session::player::Player;
use crate::table::table::Table;
use crate::Points;

/// One active edit session over a hand in progress.
///
/// The editor owns a working copy of the four streets. Appends insert the
/// implicit folds of skipped seats and resolve bare calls; nothing else
/// happens until [`Editor::commit`] posts blinds, reconciles folds, and
/// freezes the result into a [`Hand`].
#[derive(Debug, Clone)]
pub struct Editor {
    table: Table,
    stakes: String,
    scale: Points,
    hero: Option<String>,
    rounds: [Round; 4],
    pub hole: String,
    pub summary: String,
    pub note: String,
    pub key: bool,
    pub shows: Vec<Showing>,
    pub roster: Vec<Player>,
}

impl Editor {
    pub fn new(table: Table, stakes: impl Into<String>, scale: Points) -> Self {
        Self {
            table,
            stakes: stakes.into(),
            scale,
            hero: None,
            rounds: Round::all(),
            hole: String::new(),
            summary: String::new(),
            note: String::new(),
            key: false,
            shows: Vec::new(),
            roster: Vec::new(),
        }
    }
    /// Pick up a previously committed hand's streets for further edits.
    pub fn resume(mut self, rounds: [Round; 4]) -> Self {
        self.rounds = rounds;
        self
    }
    pub fn roster(mut self, roster: Vec<Player>) -> Self {
        self.roster = roster;
        self
    }
    /// Mark which seat label is ours.
    pub fn hero(mut self, seat: impl Into<String>) -> Self {
        self.hero = Some(seat.into());
        self
    }

    pub fn table(&self) -> &Table {
        &self.table
    }
    pub fn rounds(&self) -> &[Round; 4] {
        &self.rounds
    }
    pub fn round(&self, street: Street) -> &Round {
        &self.rounds[street.index()]
    }
    /// Pot as it stands right now, posted blinds or not.
    pub fn pot(&self) -> Points {
        pot::total(&self.rounds)
    }

    /// Record community cards for a street.
    pub fn deal(&mut self, street: Street, cards: impl Into<String>) {
        let cards = cards.into();
        if !cards.is_empty() && cards.chars().count() != 2 * street.n_revealed() {
            log::debug!("{} deals {} cards, got {:?}", street, street.n_revealed(), cards);
        }
        self.rounds[street.index()].deal(cards);
    }

    /// Append one action, folding through anyone who was skipped on the
    /// way to this seat. A bare call picks up the street's largest stake.
    pub fn append(&mut self, street: Street, action: Action) {
        let order = self.table.order(street == Street::Pref);
        let round = &mut self.rounds[street.index()];
        for seat in folds::skipped(&order, round.actions(), &action.seat) {
            round.push(Action::fold(seat));
        }
        let action = match (action.kind, action.amount) {
            (ActionKind::Call, None) => Action {
                amount: pot::call_amount(round.actions()),
                ..action
            },
            _ => action,
        };
        round.push(action);
    }

    /// Seats still in the hand for a street, in acting order.
    pub fn active(&self, street: Street) -> Vec<String> {
        let mut folded = folds::folded_before(&self.rounds, street);
        folded.extend(self.rounds[street.index()].folds().map(String::from));
        self.table
            .order(street == Street::Pref)
            .into_iter()
            .filter(|seat| !folded.contains(seat))
            .collect()
    }

    /// Post blinds, reconcile folds, and freeze the hand.
    pub fn commit(self) -> Hand {
        let hero = self.hero_position();
        let mut rounds = self.rounds;
        rounds[Street::Pref.index()] = blinds::post(
            &rounds[Street::Pref.index()],
            &self.stakes,
            self.scale,
            &self.table.small_blind(),
            &self.table.big_blind(),
        );
        let rounds = folds::reconcile(&rounds, &self.table.seats());
        let mut hand = Hand::new(rounds, self.table.button(), self.table.count());
        hand.hero = hero;
        hand.hole = self.hole;
        hand.summary = self.summary;
        hand.note = self.note;
        hand.key = self.key;
        hand.shows = self.shows;
        hand.roster = self.roster;
        hand
    }

    /// Canonical position of the hero seat, defaulting to the first seat.
    fn hero_position(&self) -> String {
        let seats = self.table.seats();
        let seat = match &self.hero {
            Some(seat) => seat.clone(),
            None => match seats.first() {
                Some(seat) => seat.clone(),
                None => return String::new(),
            },
        };
        match self.table.position_of(&seat) {
            Some(position) => position.to_string(),
            None => seat,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn six() -> Table {
        let names = ["Alice", "Bob", "Cleo", "Dan", "Eve", "Fay"]
            .map(String::from)
            .to_vec();
        Table::named(names, 3)
    }

    fn editor() -> Editor {
        Editor::new(six(), "1/2", 50000.)
    }

    #[test]
    fn commit_posts_blinds_and_folds_the_field() {
        // Cleo opens, Dan calls; everyone else never acts.
        let mut editor = editor();
        editor.append(Street::Pref, Action::new("Cleo", ActionKind::Raise, Some(1500.)));
        editor.append(Street::Pref, Action::new("Dan", ActionKind::Call, None));
        let hand = editor.commit();
        let log = hand.round(Street::Pref).actions();
        assert!(log[0] == Action::new("Eve", ActionKind::SmallBlind, Some(250.)));
        assert!(log[1] == Action::new("Fay", ActionKind::BigBlind, Some(500.)));
        // Alice and Bob were skipped on the way to Cleo.
        assert!(log[2] == Action::fold("Alice"));
        assert!(log[3] == Action::fold("Bob"));
        assert!(log[4].seat == "Cleo");
        assert!(log[5] == Action::new("Dan", ActionKind::Call, Some(1500.)));
        assert!(hand.pot() == 250. + 500. + 1500. + 1500.);
    }

    #[test]
    fn commit_always_posts_blinds() {
        let hand = editor().commit();
        let log = hand.round(Street::Pref).actions();
        assert!(log[0].kind == ActionKind::SmallBlind);
        assert!(log[1].kind == ActionKind::BigBlind);
        // Posting made the log non-empty, so the rest of the field folds.
        assert!(hand.round(Street::Pref).folds().count() == 4);
        assert!(hand.pot() == 750.);
    }

    #[test]
    fn unreadable_stakes_leave_an_untouched_hand_untouched() {
        let hand = Editor::new(six(), "freeroll", 50000.).commit();
        assert!(hand.round(Street::Pref).is_empty());
        assert!(hand.pot() == 0.);
    }

    #[test]
    fn six_max_walk_pays_the_blinds() {
        // Button on seat 3, stakes 1/2, one big blind worth 500 points:
        // blinds post 250 and 500 and the whole field folds.
        let mut editor = editor();
        editor.append(Street::Pref, Action::fold("Alice"));
        let hand = editor.commit();
        assert!(hand.round(Street::Pref).contribution() == 750.);
        assert!(hand.pot_in_bb(50000.) == 1.5);
        let folded = hand.round(Street::Pref).folds().count();
        assert!(folded == 4); // everyone but the blinds
    }

    #[test]
    fn fold_on_flop_erases_stale_turn_actions() {
        let mut editor = editor();
        editor.append(Street::Pref, Action::new("Dan", ActionKind::Raise, Some(1000.)));
        editor.append(Street::Pref, Action::new("Eve", ActionKind::Call, None));
        editor.append(Street::Flop, Action::new("Eve", ActionKind::Bet, Some(2000.)));
        editor.append(Street::Flop, Action::fold("Dan"));
        // Stale data: Dan somehow acts on the turn anyway.
        editor.rounds[Street::Turn.index()].push(Action::new("Dan", ActionKind::Bet, Some(4000.)));
        let hand = editor.commit();
        assert!(hand.round(Street::Turn).is_empty());
    }

    #[test]
    fn bare_call_resolves_to_largest_stake() {
        let mut editor = editor();
        editor.append(Street::Pref, Action::new("Cleo", ActionKind::Raise, Some(600.)));
        editor.append(Street::Pref, Action::new("Fay", ActionKind::Call, None));
        let round = editor.round(Street::Pref);
        assert!(round.actions().last().unwrap().amount == Some(600.));
    }

    #[test]
    fn bare_call_with_no_bet_stays_bare() {
        let mut editor = editor();
        editor.append(Street::Flop, Action::new("Eve", ActionKind::Call, None));
        let round = editor.round(Street::Flop);
        assert!(round.actions().last().unwrap() == &Action::new("Eve", ActionKind::Call, None));
        assert!(round.contribution() == 0.);
    }

    #[test]
    fn active_drops_folded_seats() {
        let mut editor = editor();
        editor.append(Street::Pref, Action::new("Cleo", ActionKind::Raise, Some(600.)));
        // Alice and Bob folded implicitly on the way to Cleo.
        let active = editor.active(Street::Pref);
        assert!(active == vec!["Cleo", "Dan", "Eve", "Fay"]);
    }

    #[test]
    fn hero_maps_to_canonical_position() {
        let editor = editor().hero("Dan");
        let hand = editor.commit();
        assert!(hand.hero == "BTN");
    }

    #[test]
    fn append_respects_reopened_action() {
        let mut editor = editor();
        editor.append(Street::Pref, Action::new("Alice", ActionKind::Call, Some(500.)));
        editor.append(Street::Pref, Action::new("Dan", ActionKind::Raise, Some(2000.)));
        // Action reopens at Eve; the blinds have nothing on record yet so
        // they fold on the way back around to Alice, whose earlier call
        // spares her and whose bare call picks up Dan's 2000 total.
        editor.append(Street::Pref, Action::new("Alice", ActionKind::Call, None));
        let log = editor.round(Street::Pref).actions();
        let folds = log
            .iter()
            .filter(|a| a.kind == ActionKind::Fold)
            .map(|a| a.seat.as_str())
            .collect::<Vec<&str>>();
        assert!(folds == vec!["Bob", "Cleo", "Eve", "Fay"]);
        assert!(log.last().unwrap().amount == Some(2000.));
    }
}

use super::player::Player;
use crate::gameplay::editor::Editor;
use crate::gameplay::hand::Hand;
use crate::gameplay::pot;
use crate::table::table::Table;
use crate::BigBlinds;
use crate::Points;
use crate::DEFAULT_SEATS;
use serde::Deserialize;
use serde::Serialize;

/// One sitting at one table: the stakes, the points scale, the roster, and
/// every hand committed along the way.
///
/// `scale` is points per hundred big blinds; zero or below means BB
/// conversion is unavailable and converts everything to 0.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Session {
    pub name: String,
    pub location: String,
    pub stakes: String,
    pub scale: Points,
    pub buy_in: Points,
    pub cash_out: Points,
    pub note: String,
    pub players: Vec<Player>,
    pub hands: Vec<Hand>,
}

impl Session {
    pub fn new(stakes: impl Into<String>, scale: Points) -> Self {
        Self {
            stakes: stakes.into(),
            scale,
            ..Self::default()
        }
    }

    /// The roster in seat order, nameless seats dropped.
    pub fn roster(&self) -> Vec<Player> {
        let mut roster = self
            .players
            .iter()
            .filter(|player| !player.name.trim().is_empty())
            .cloned()
            .collect::<Vec<Player>>();
        roster.sort_by_key(|player| player.seat);
        roster
    }
    pub fn names(&self) -> Vec<String> {
        self.roster()
            .iter()
            .map(|player| player.name.trim().to_string())
            .collect()
    }

    /// Table geometry for the next hand, given where the button sits.
    /// With no named roster the table seats the default nine.
    pub fn table(&self, button: isize) -> Table {
        let names = self.names();
        match names.is_empty() {
            true => Table::anonymous(DEFAULT_SEATS, button),
            false => Table::named(names, button),
        }
    }
    /// Open an edit session for a new hand.
    pub fn editor(&self, button: isize) -> Editor {
        Editor::new(self.table(button), self.stakes.clone(), self.scale).roster(self.roster())
    }
    pub fn record(&mut self, hand: Hand) {
        self.hands.push(hand);
    }

    pub fn profit(&self) -> Points {
        self.cash_out - self.buy_in
    }
    /// Session result in big blinds; 0 when the scale is unset.
    pub fn profit_in_bb(&self) -> BigBlinds {
        pot::to_bb(self.profit(), self.scale)
    }
}

use super::order;
use super::position::Position;
use crate::Seat;
use serde::Deserialize;
use serde::Serialize;

/// Geometry snapshot of one table: who sits where and where the button is.
///
/// Seats are identified by occupant name when the roster is known and by
/// the standard position names otherwise. A hand takes its own snapshot
/// when it is created, so later roster edits never move seats under a
/// recorded hand.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Table {
    names: Vec<String>,
    count: usize,
    button: isize,
}

impl Table {
    pub fn named(names: Vec<String>, button: isize) -> Self {
        let count = names.len();
        Self {
            names,
            count,
            button,
        }
    }
    pub fn anonymous(count: usize, button: isize) -> Self {
        Self {
            names: Vec::new(),
            count,
            button,
        }
    }

    pub fn count(&self) -> usize {
        self.count
    }
    /// Normalized button seat index.
    pub fn button(&self) -> Seat {
        self.button.rem_euclid(self.count as isize) as usize
    }
    /// Seat labels in physical seat order. Anonymous tables are labeled by
    /// the unrotated base positions, which stay put while the button moves.
    pub fn seats(&self) -> Vec<String> {
        match self.names.is_empty() {
            true => Position::table(self.count)
                .iter()
                .map(Position::to_string)
                .collect(),
            false => self.names.clone(),
        }
    }
    /// Canonical position of every seat given the current button.
    pub fn positions(&self) -> Vec<Position> {
        Position::ring(self.count, self.button)
    }
    /// Acting order for a street.
    pub fn order(&self, preflop: bool) -> Vec<String> {
        order::acting(&self.seats(), &self.positions(), preflop)
    }
    /// Canonical position of a labeled seat, if it is at this table.
    pub fn position_of(&self, seat: &str) -> Option<Position> {
        self.seats()
            .iter()
            .position(|label| label == seat)
            .and_then(|index| self.positions().get(index).copied())
    }

    /// Label of the seat posting the small blind.
    pub fn small_blind(&self) -> String {
        if self.names.is_empty() {
            return match self.count {
                2 => Position::SbBtn.to_string(),
                _ => Position::Sb.to_string(),
            };
        }
        match self.positions().iter().position(Position::is_small) {
            Some(seat) => self.names[seat].clone(),
            None if self.names.len() >= 2 => self.names[self.names.len() - 2].clone(),
            None => match self.names.first() {
                Some(name) => name.clone(),
                None => Position::Sb.to_string(),
            },
        }
    }
    /// Label of the seat posting the big blind.
    pub fn big_blind(&self) -> String {
        if self.names.is_empty() {
            return Position::Bb.to_string();
        }
        match self.positions().iter().position(Position::is_big) {
            Some(seat) => self.names[seat].clone(),
            None => match self.names.last() {
                Some(name) => name.clone(),
                None => Position::Bb.to_string(),
            },
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

    #[test]
    fn named_blind_seats() {
        let table = six();
        assert!(table.small_blind() == "Eve");
        assert!(table.big_blind() == "Fay");
    }

    #[test]
    fn anonymous_blind_seats() {
        assert!(Table::anonymous(6, 2).small_blind() == "SB");
        assert!(Table::anonymous(6, 2).big_blind() == "BB");
        assert!(Table::anonymous(2, 0).small_blind() == "SB/BTN");
        assert!(Table::anonymous(2, 0).big_blind() == "BB");
    }

    #[test]
    fn anonymous_seat_labels_ignore_button() {
        let labels = Table::anonymous(6, 4).seats();
        assert!(labels == vec!["UTG", "HJ", "CO", "BTN", "SB", "BB"]);
    }

    #[test]
    fn button_wraps_around() {
        assert!(Table::named(six().seats(), 9).button() == 3);
        assert!(Table::named(six().seats(), -2).button() == 4);
    }

    #[test]
    fn position_lookup() {
        let table = six();
        assert!(table.position_of("Dan") == Some(Position::Btn));
        assert!(table.position_of("Alice") == Some(Position::Utg));
        assert!(table.position_of("Zed") == None);
    }

    #[test]
    fn fallback_tables_have_no_blind_seats_in_ring() {
        let table = Table::anonymous(4, 0);
        assert!(table.positions().iter().all(|p| !p.is_blind()));
        assert!(table.small_blind() == "SB");
    }
}

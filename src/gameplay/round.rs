use super::action::Action;
use super::action::ActionKind;
use super::street::Street;
use crate::Points;
use serde::Deserialize;
use serde::Serialize;
use std::collections::HashSet;

/// One street's record: the community cards dealt and the ordered,
/// append-mostly action log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Round {
    street: Street,
    cards: String,
    actions: Vec<Action>,
}

impl Round {
    pub fn new(street: Street) -> Self {
        Self {
            street,
            cards: String::new(),
            actions: Vec::new(),
        }
    }
    /// A blank four-street hand record, in deal order.
    pub fn all() -> [Self; 4] {
        [
            Self::new(Street::Pref),
            Self::new(Street::Flop),
            Self::new(Street::Turn),
            Self::new(Street::Rive),
        ]
    }

    pub fn street(&self) -> Street {
        self.street
    }
    pub fn cards(&self) -> &str {
        &self.cards
    }
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn deal(&mut self, cards: impl Into<String>) {
        self.cards = cards.into();
    }
    pub fn push(&mut self, action: Action) {
        self.actions.push(action);
    }
    /// Splice actions in at the head of the log, preserving their order.
    pub fn prepend(&mut self, actions: Vec<Action>) {
        self.actions.splice(0..0, actions);
    }
    /// Drop every action belonging to one of the given seats.
    pub fn strip(&mut self, seats: &HashSet<String>) {
        self.actions.retain(|action| !seats.contains(&action.seat));
    }

    /// Seats with at least one recorded action of any kind.
    pub fn acted(&self) -> HashSet<&str> {
        self.actions.iter().map(|action| action.seat.as_str()).collect()
    }
    /// Seats that folded during this street.
    pub fn folds(&self) -> impl Iterator<Item = &str> {
        self.actions
            .iter()
            .filter(|action| action.kind == ActionKind::Fold)
            .map(|action| action.seat.as_str())
    }
    pub fn has(&self, kind: ActionKind) -> bool {
        self.actions.iter().any(|action| action.kind == kind)
    }
    /// This street's contribution to the pot.
    pub fn contribution(&self) -> Points {
        super::pot::contribution(self)
    }

    /// Card text grouped two characters per card, "Th7s5c" -> "Th 7s 5c".
    pub fn pretty_cards(&self) -> String {
        self.cards
            .chars()
            .collect::<Vec<char>>()
            .chunks(2)
            .map(|pair| pair.iter().collect::<String>())
            .collect::<Vec<String>>()
            .join(" ")
    }
}

impl std::fmt::Display for Round {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.cards.is_empty() {
            true => writeln!(f, "{}", self.street)?,
            false => writeln!(f, "{}  {}", self.street, self.pretty_cards())?,
        }
        for action in &self.actions {
            writeln!(f, "  {}", action)?;
        }
        Ok(())
    }
}

/// What a seat did.
///
/// For wager kinds a recorded amount is the seat's cumulative contribution
/// for the street, not the increment of this one action. The amount is
/// optional: blinds always carry one, a call may omit it and be resolved
/// against the street's largest stake at accounting time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    Fold,
    Check,
    Call,
    Bet,
    Raise,
    Shove,
    SmallBlind,
    BigBlind,
}

impl ActionKind {
    /// Kinds that move chips into the pot.
    pub const fn is_wager(&self) -> bool {
        matches!(
            self,
            Self::Call | Self::Bet | Self::Raise | Self::Shove | Self::SmallBlind | Self::BigBlind
        )
    }
    /// Kinds that reopen the action for the seats behind.
    pub const fn is_aggressive(&self) -> bool {
        matches!(self, Self::Bet | Self::Raise | Self::Shove)
    }
    pub const fn is_blind(&self) -> bool {
        matches!(self, Self::SmallBlind | Self::BigBlind)
    }
}

impl TryFrom<&str> for ActionKind {
    type Error = &'static str;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.to_ascii_lowercase().as_str() {
            "fold" => Ok(Self::Fold),
            "check" => Ok(Self::Check),
            "call" => Ok(Self::Call),
            "bet" => Ok(Self::Bet),
            "raise" => Ok(Self::Raise),
            "shove" | "allin" => Ok(Self::Shove),
            "sb" => Ok(Self::SmallBlind),
            "bb" => Ok(Self::BigBlind),
            _ => Err("invalid action kind"),
        }
    }
}

impl crate::Arbitrary for ActionKind {
    fn random() -> Self {
        use rand::Rng;
        match rand::rng().random_range(0..8) {
            0 => Self::Fold,
            1 => Self::Check,
            2 => Self::Call,
            3 => Self::Bet,
            4 => Self::Raise,
            5 => Self::Shove,
            6 => Self::SmallBlind,
            _ => Self::BigBlind,
        }
    }
}

/// One recorded action by one seat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    pub seat: String,
    pub kind: ActionKind,
    pub amount: Option<Points>,
}

impl Action {
    pub fn new(seat: impl Into<String>, kind: ActionKind, amount: Option<Points>) -> Self {
        Self {
            seat: seat.into(),
            kind,
            amount,
        }
    }
    pub fn fold(seat: impl Into<String>) -> Self {
        Self::new(seat, ActionKind::Fold, None)
    }
}

impl Display for Action {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        let verb = match self.kind {
            ActionKind::Fold => "FOLD",
            ActionKind::Check => "CHECK",
            ActionKind::Call => "CALL",
            ActionKind::Bet => "BET",
            ActionKind::Raise => "RAISE",
            ActionKind::Shove => "SHOVE",
            ActionKind::SmallBlind => "SB",
            ActionKind::BigBlind => "BB",
        };
        let verb = match self.amount {
            Some(amount) if self.kind.is_wager() => format!("{} {}", verb, amount),
            _ => verb.to_string(),
        };
        let verb = match self.kind {
            ActionKind::Fold => verb.red(),
            ActionKind::Check => verb.cyan(),
            ActionKind::Call => verb.yellow(),
            ActionKind::Bet | ActionKind::Raise => verb.green(),
            ActionKind::Shove => verb.magenta(),
            ActionKind::SmallBlind | ActionKind::BigBlind => verb.white(),
        };
        write!(f, "{} {}", self.seat, verb)
    }
}

use crate::Points;
use colored::*;
use serde::Deserialize;
use serde::Serialize;
use std::fmt::{Display, Formatter, Result as FmtResult};

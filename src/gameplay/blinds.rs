use super::action::Action;
use super::action::ActionKind;
use super::round::Round;
use crate::BigBlinds;
use crate::Points;
use serde::Deserialize;
use serde::Serialize;
use std::str::FromStr;

/// A blind level in its "<small>/<big>" text form, e.g. "1/2" or "2/5".
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stakes {
    small: Points,
    big: Points,
}

impl Stakes {
    pub fn small(&self) -> Points {
        self.small
    }
    pub fn big(&self) -> Points {
        self.big
    }
    /// The small blind expressed in big blinds: "1/2" posts 0.5 BB, "2/5"
    /// posts 0.4 BB.
    pub fn small_in_bb(&self) -> BigBlinds {
        self.small / self.big
    }
}

impl FromStr for Stakes {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (small, big) = s
            .split_once('/')
            .ok_or_else(|| anyhow::anyhow!("expected <small>/<big>, got {:?}", s))?;
        let small = small.trim().parse::<Points>()?;
        let big = big.trim().parse::<Points>()?;
        anyhow::ensure!(big > 0., "big blind must be positive, got {}", big);
        Ok(Self { small, big })
    }
}

impl std::fmt::Display for Stakes {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.small, self.big)
    }
}

/// Insert any missing blind posts at the head of the preflop log.
///
/// Idempotent: once both blinds are on record this is a no-op. An
/// unreadable blind level skips posting entirely, a blind-less log still
/// being a valid hand the caller may finish later. Amounts are in points:
/// one big blind is `scale / 100` where `scale` is points per hundred BB.
pub fn post(preflop: &Round, stakes: &str, scale: Points, small_seat: &str, big_seat: &str) -> Round {
    let mut preflop = preflop.clone();
    let has_small = preflop.has(ActionKind::SmallBlind);
    let has_big = preflop.has(ActionKind::BigBlind);
    if has_small && has_big {
        return preflop;
    }
    let stakes = match stakes.parse::<Stakes>() {
        Ok(stakes) => stakes,
        Err(error) => {
            log::debug!("leaving blinds unposted: {}", error);
            return preflop;
        }
    };
    let per_bb = scale / 100.;
    let mut posts = Vec::new();
    if !has_small {
        posts.push(Action::new(
            small_seat,
            ActionKind::SmallBlind,
            Some(stakes.small_in_bb() * per_bb),
        ));
    }
    if !has_big {
        posts.push(Action::new(big_seat, ActionKind::BigBlind, Some(per_bb)));
    }
    preflop.prepend(posts);
    preflop
}

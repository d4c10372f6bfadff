use crate::Seat;
use serde::Deserialize;
use serde::Serialize;

/// How a player plays: tight/loose crossed with aggressive/passive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Style {
    #[default]
    Tag,
    Lag,
    Tp,
    Lp,
}

impl std::fmt::Display for Style {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Tag => write!(f, "TAG"),
            Self::Lag => write!(f, "LAG"),
            Self::Tp => write!(f, "TP"),
            Self::Lp => write!(f, "LP"),
        }
    }
}

impl TryFrom<&str> for Style {
    type Error = &'static str;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.to_ascii_uppercase().as_str() {
            "TAG" => Ok(Self::Tag),
            "LAG" => Ok(Self::Lag),
            "TP" => Ok(Self::Tp),
            "LP" => Ok(Self::Lp),
            _ => Err("unknown style"),
        }
    }
}

/// How good they are.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Level {
    Fish,
    Whale,
    #[default]
    Reg,
    Pro,
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Fish => write!(f, "Fish"),
            Self::Whale => write!(f, "Whale"),
            Self::Reg => write!(f, "Reg"),
            Self::Pro => write!(f, "Pro"),
        }
    }
}

impl TryFrom<&str> for Level {
    type Error = &'static str;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.to_ascii_lowercase().as_str() {
            "fish" => Ok(Self::Fish),
            "whale" => Ok(Self::Whale),
            "reg" => Ok(Self::Reg),
            "pro" => Ok(Self::Pro),
            _ => Err("unknown level"),
        }
    }
}

/// One seat's occupant in a session roster.
///
/// Hands clone the roster rows they were dealt with, so renaming or
/// reseating a player later never rewrites a committed hand.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub seat: Seat,
    pub style: Style,
    pub level: Level,
}

impl Player {
    pub fn new(name: impl Into<String>, seat: Seat) -> Self {
        Self {
            name: name.into(),
            seat,
            style: Style::default(),
            level: Level::default(),
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} ({} {})", self.name, self.style, self.level)
    }
}

/// Canonical seat names around a hold'em table.
///
/// The base sequence for every supported seat count ends `.., BTN, SB, BB`,
/// so the button sits third from the end at 3+ players and collapses into
/// the small blind heads-up. Seat counts without a canonical sequence fall
/// back to generic `Player n` names, which carry no rotation semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    Utg,
    Utg1,
    Utg2,
    Lj,
    Hj,
    Co,
    Btn,
    Sb,
    Bb,
    SbBtn,
    Player(usize),
}

impl Position {
    /// Base sequence for a table of `count` seats, in deal order.
    pub fn table(count: usize) -> Vec<Self> {
        use Position::*;
        match count {
            9 => vec![Utg, Utg1, Utg2, Lj, Hj, Co, Btn, Sb, Bb],
            8 => vec![Utg, Utg1, Lj, Hj, Co, Btn, Sb, Bb],
            7 => vec![Utg, Lj, Hj, Co, Btn, Sb, Bb],
            6 => vec![Utg, Hj, Co, Btn, Sb, Bb],
            5 => vec![Hj, Co, Btn, Sb, Bb],
            2 => vec![SbBtn, Bb],
            n => (1..=n).map(Player).collect(),
        }
    }

    /// Position of every seat once the button lands on `button`.
    ///
    /// The button index may be any integer and is normalized modulo the
    /// seat count. Counts below 2 are not meaningful here.
    pub fn ring(count: usize, button: isize) -> Vec<Self> {
        let base = Self::table(count);
        let button = button.rem_euclid(count as isize) as usize;
        let anchor = count.saturating_sub(3);
        (0..count)
            .map(|seat| (seat + count - button) % count)
            .map(|offset| (anchor + offset) % count)
            .map(|index| base[index])
            .collect()
    }

    pub const fn is_button(&self) -> bool {
        matches!(self, Self::Btn | Self::SbBtn)
    }
    pub const fn is_small(&self) -> bool {
        matches!(self, Self::Sb | Self::SbBtn)
    }
    pub const fn is_big(&self) -> bool {
        matches!(self, Self::Bb)
    }
    pub const fn is_blind(&self) -> bool {
        self.is_small() || self.is_big()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Utg => write!(f, "UTG"),
            Self::Utg1 => write!(f, "UTG+1"),
            Self::Utg2 => write!(f, "UTG+2"),
            Self::Lj => write!(f, "LJ"),
            Self::Hj => write!(f, "HJ"),
            Self::Co => write!(f, "CO"),
            Self::Btn => write!(f, "BTN"),
            Self::Sb => write!(f, "SB"),
            Self::Bb => write!(f, "BB"),
            Self::SbBtn => write!(f, "SB/BTN"),
            Self::Player(n) => write!(f, "Player {}", n),
        }
    }
}

impl TryFrom<&str> for Position {
    type Error = &'static str;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "UTG" => Ok(Self::Utg),
            "UTG+1" => Ok(Self::Utg1),
            "UTG+2" => Ok(Self::Utg2),
            "LJ" => Ok(Self::Lj),
            "HJ" => Ok(Self::Hj),
            "CO" => Ok(Self::Co),
            "BTN" => Ok(Self::Btn),
            "SB" => Ok(Self::Sb),
            "BB" => Ok(Self::Bb),
            "SB/BTN" => Ok(Self::SbBtn),
            name => match name.strip_prefix("Player ") {
                Some(n) => n
                    .parse::<usize>()
                    .map(Self::Player)
                    .map_err(|_| "invalid player number"),
                None => Err("unknown position"),
            },
        }
    }
}

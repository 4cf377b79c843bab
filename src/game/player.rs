use std::fmt;
use std::str::FromStr;

/// The marks used by the terminal game. The engine itself only needs marks
/// to be comparable, so any `Copy + Eq` type works with [`super::Board`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    Red,
    Yellow,
    Black,
}

impl Player {
    pub const ALL: [Player; 3] = [Player::Red, Player::Yellow, Player::Black];

    /// Get player name for display
    pub fn name(self) -> &'static str {
        match self {
            Player::Red => "Red",
            Player::Yellow => "Yellow",
            Player::Black => "Black",
        }
    }

    /// Single-letter symbol used in text renderings
    pub fn symbol(self) -> char {
        match self {
            Player::Red => 'R',
            Player::Yellow => 'Y',
            Player::Black => 'B',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Player {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Player::ALL
            .into_iter()
            .find(|p| {
                s.eq_ignore_ascii_case(p.name()) || s.eq_ignore_ascii_case(&p.symbol().to_string())
            })
            .ok_or_else(|| format!("unknown player '{s}' (expected R, Y or B)"))
    }
}

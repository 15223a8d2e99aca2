use std::fmt;
use std::str::FromStr;

use super::grid::Cell;

/// One of the two identities. Red is identity A (wire code 1) and always
/// moves first; Yellow is identity B (wire code 2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    Red,
    Yellow,
}

impl Player {
    /// The opponent.
    pub fn other(self) -> Player {
        match self {
            Player::Red => Player::Yellow,
            Player::Yellow => Player::Red,
        }
    }

    /// Cell this player's pieces occupy.
    pub fn to_cell(self) -> Cell {
        match self {
            Player::Red => Cell::Red,
            Player::Yellow => Cell::Yellow,
        }
    }

    /// Wire code used by the host grid (1 or 2).
    pub fn code(self) -> u8 {
        self.to_cell().code()
    }

    /// Display name, also used in log fields.
    pub fn name(self) -> &'static str {
        match self {
            Player::Red => "Red",
            Player::Yellow => "Yellow",
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Player {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "red" | "1" => Ok(Player::Red),
            "yellow" | "2" => Ok(Player::Yellow),
            other => Err(format!("unknown player '{other}' (expected red or yellow)")),
        }
    }
}

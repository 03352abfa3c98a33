//! Swipe directions

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The four swipe gestures a responder can make on a card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Strong yes
    Up,
    /// Yes
    Right,
    /// No
    Left,
    /// Strong no
    Down,
}

impl Direction {
    /// All directions in canonical order
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Right, Direction::Left, Direction::Down];

    /// Lowercase wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Right => "right",
            Direction::Left => "left",
            Direction::Down => "down",
        }
    }

    /// Arrow glyph for terminal display
    pub fn arrow(&self) -> &'static str {
        match self {
            Direction::Up => "↑",
            Direction::Right => "→",
            Direction::Left => "←",
            Direction::Down => "↓",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Direction {
    type Err = String;

    /// Accepts full names or single-letter shorthands, case-insensitive
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" | "u" => Ok(Direction::Up),
            "right" | "r" => Ok(Direction::Right),
            "left" | "l" => Ok(Direction::Left),
            "down" | "d" => Ok(Direction::Down),
            other => Err(format!("unknown direction '{}' (expected up/right/left/down)", other)),
        }
    }
}

//! The two players and their disc colors.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the two fixed participants.
///
/// `A` plays the dark discs and always moves first; `B` plays the light discs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    A,
    B,
}

/// Both players in turn order.
pub const ALL_PLAYERS: [Player; 2] = [Player::A, Player::B];

/// The disc color bound to a player. Colors own the text glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Dark,
    Light,
}

impl Color {
    /// `X` for dark discs, `O` for light ones.
    pub const fn glyph(self) -> char {
        match self {
            Color::Dark => 'X',
            Color::Light => 'O',
        }
    }

    pub fn from_glyph(c: char) -> Option<Color> {
        match c {
            'X' => Some(Color::Dark),
            'O' => Some(Color::Light),
            _ => None,
        }
    }

    /// The player who places discs of this color.
    pub const fn player(self) -> Player {
        match self {
            Color::Dark => Player::A,
            Color::Light => Player::B,
        }
    }
}

impl Player {
    /// The player who moves first in every game.
    pub const FIRST: Player = Player::A;

    /// Returns the other player.
    pub const fn opponent(self) -> Player {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }

    /// Returns the disc color this player places.
    pub const fn color(self) -> Color {
        match self {
            Player::A => Color::Dark,
            Player::B => Color::Light,
        }
    }

    /// Returns the glyph of this player's disc color.
    pub const fn glyph(self) -> char {
        self.color().glyph()
    }

    /// Parses a player from its disc glyph.
    pub fn from_glyph(c: char) -> Option<Player> {
        Color::from_glyph(c).map(Color::player)
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Player::A => 'A',
            Player::B => 'B',
        };
        write!(f, "{} ({})", name, self.glyph())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opponent_is_an_involution() {
        for p in ALL_PLAYERS {
            assert_ne!(p.opponent(), p);
            assert_eq!(p.opponent().opponent(), p);
        }
    }

    #[test]
    fn colors_are_distinct() {
        assert_ne!(Player::A.color(), Player::B.color());
        assert_eq!(Player::A.color(), Color::Dark);
        for p in ALL_PLAYERS {
            assert_eq!(p.color().player(), p);
        }
    }

    #[test]
    fn glyphs_come_from_colors() {
        assert_eq!(Player::A.glyph(), Color::Dark.glyph());
        assert_eq!(Player::B.glyph(), 'O');
        assert_eq!(Color::from_glyph('X'), Some(Color::Dark));
        assert_eq!(Player::B.to_string(), "B (O)");
    }

    #[test]
    fn glyph_roundtrip() {
        for p in ALL_PLAYERS {
            assert_eq!(Player::from_glyph(p.glyph()), Some(p));
        }
        assert_eq!(Player::from_glyph('_'), None);
    }
}

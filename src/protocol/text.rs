//! Text board layout.
//!
//! A board is written one row per line, top row first, with `_` for an open
//! tile, `X` for player A and `O` for player B. Hex rows separate cells with
//! single spaces and are indented by their distance from the middle row so
//! the hexagon shape shows. Square rows are not indented and every cell,
//! the last one included, is followed by a space. Every line ends with `\n`.
//!
//! ```text
//!   _ _ _
//!  _ X O _
//! _ O _ X _
//!  _ X O _
//!   _ _ _
//! ```

use std::fmt;

use crate::board::{Board, Occupancy, Player, Topology};
use crate::error::GameError;
use crate::resolve::is_legal;

/// Glyph for an open tile.
const OPEN: char = '_';
/// Glyph for a legal move in hint mode.
const HINT: char = '*';

/// Errors that can occur while parsing a text board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TextError {
    #[error("board text has no rows")]
    NoRows,

    #[error("a hex board needs an odd number of rows, got {0}")]
    EvenHexRows(usize),

    #[error("invalid board: {0}")]
    Board(#[from] GameError),

    #[error("row {row} has {found} cells, expected {expected}")]
    RowLength {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("row {row} has an invalid cell '{token}'")]
    InvalidCell { row: usize, token: String },
}

/// Groups the board's tile glyphs into rows, each in `x` order.
fn rows(board: &Board, glyph: impl Fn(&Board, usize) -> char) -> Vec<Vec<char>> {
    let extent = board.topology().extent(board.size()) as usize;
    let mut rows = vec![Vec::new(); extent];
    for (i, tile) in board.tiles().iter().enumerate() {
        rows[tile.coord().y as usize].push(glyph(board, i));
    }
    rows
}

fn indent(board: &Board, row: usize) -> usize {
    match board.topology() {
        Topology::Hex => (row as i32 - (board.size() - 1)).unsigned_abs() as usize,
        Topology::Square => 0,
    }
}

fn write_rows(board: &Board, rows: Vec<Vec<char>>) -> String {
    let mut out = String::with_capacity(board.len() * 2 + rows.len() * 8);
    for (y, row) in rows.into_iter().enumerate() {
        out.extend(std::iter::repeat(' ').take(indent(board, y)));
        match board.topology() {
            Topology::Hex => {
                for (i, c) in row.into_iter().enumerate() {
                    if i > 0 {
                        out.push(' ');
                    }
                    out.push(c);
                }
            }
            Topology::Square => {
                for c in row {
                    out.push(c);
                    out.push(' ');
                }
            }
        }
        out.push('\n');
    }
    out
}

fn occupancy_glyph(occupancy: Occupancy) -> char {
    match occupancy {
        Occupancy::Occupied(p) => p.glyph(),
        Occupancy::Open | Occupancy::Empty => OPEN,
    }
}

/// Renders the board.
pub fn render(board: &Board) -> String {
    let rows = rows(board, |b, i| occupancy_glyph(b.tiles()[i].occupancy()));
    write_rows(board, rows)
}

/// Renders the board with `player`'s legal moves marked `*`.
pub fn render_hints(board: &Board, player: Player) -> String {
    let ids: Vec<_> = board.tile_ids().collect();
    let rows = rows(board, |b, i| {
        let id = ids[i];
        if is_legal(b, id, player) {
            HINT
        } else {
            occupancy_glyph(b.tile(id).occupancy())
        }
    });
    write_rows(board, rows)
}

/// Parses a board from its text layout.
///
/// The size is inferred from the number of non-blank lines. Indentation is
/// ignored; each row must hold exactly as many cells as the topology gives it.
pub fn parse(topology: Topology, text: &str) -> Result<Board, TextError> {
    let lines: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
    if lines.is_empty() {
        return Err(TextError::NoRows);
    }
    let size = match topology {
        Topology::Hex => {
            if lines.len() % 2 == 0 {
                return Err(TextError::EvenHexRows(lines.len()));
            }
            (lines.len() as i32 + 1) / 2
        }
        Topology::Square => lines.len() as i32,
    };
    let mut board = Board::blank(topology, size)?;

    let mut row_ids = vec![Vec::new(); lines.len()];
    for id in board.tile_ids() {
        row_ids[board.tile(id).coord().y as usize].push(id);
    }

    for (y, (line, ids)) in lines.iter().zip(row_ids).enumerate() {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() != ids.len() {
            return Err(TextError::RowLength {
                row: y,
                expected: ids.len(),
                found: tokens.len(),
            });
        }
        for (token, id) in tokens.into_iter().zip(ids) {
            let mut chars = token.chars();
            let occupancy = match (chars.next(), chars.next()) {
                (Some(OPEN), None) => Occupancy::Open,
                (Some(c), None) => match Player::from_glyph(c) {
                    Some(p) => Occupancy::Occupied(p),
                    None => {
                        return Err(TextError::InvalidCell {
                            row: y,
                            token: token.to_string(),
                        })
                    }
                },
                _ => {
                    return Err(TextError::InvalidCell {
                        row: y,
                        token: token.to_string(),
                    })
                }
            };
            board.set_occupancy(id, occupancy);
        }
    }
    Ok(board)
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self))
    }
}

//! Terminal player.
//!
//! Reads `x y` coordinates from a line source and reprompts until the input
//! names a legal move.

use std::io::{self, BufRead, BufReader, Read, Stdin, Stdout, Write};

use tracing::warn;

use crate::board::{Coord, Player};
use crate::engine::GameView;
use crate::movegen::has_legal_move;
use crate::resolve::capture_count;

use super::Strategy;

/// Where a human's moves come from, one line at a time.
///
/// `Stdin` reads through the process-wide buffer, so several players can
/// share it without one of them swallowing the others' lines.
pub trait LineSource {
    /// Appends the next line to `buf`; returns 0 at end of input.
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize>;
}

impl LineSource for Stdin {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        Stdin::read_line(self, buf)
    }
}

impl<R: Read> LineSource for BufReader<R> {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        BufRead::read_line(self, buf)
    }
}

impl LineSource for &[u8] {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        BufRead::read_line(self, buf)
    }
}

/// A player typing moves on a terminal.
pub struct Human<R, W> {
    input: R,
    output: W,
}

impl Human<Stdin, Stdout> {
    /// A human on the process's stdin and stdout.
    pub fn stdio() -> Self {
        Human::new(io::stdin(), io::stdout())
    }
}

impl<R: LineSource, W: Write> Human<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Human { input, output }
    }

    fn prompt(&mut self, player: Player) -> io::Result<Option<String>> {
        write!(self.output, "{player} to move (x y): ")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn say(&mut self, msg: &str) {
        if let Err(e) = writeln!(self.output, "{msg}") {
            warn!(error = %e, "terminal write failed");
        }
    }
}

impl<R: LineSource, W: Write> Strategy for Human<R, W> {
    fn name(&self) -> &str {
        "human"
    }

    /// Returns `None` when the player has no legal move, and also when the
    /// input is exhausted or unreadable, so the caller can stop the game.
    fn choose_move(&mut self, game: &dyn GameView, player: Player) -> Option<Coord> {
        let board = game.board();
        if !has_legal_move(board, player) {
            self.say(&format!("{player} has no legal move and passes"));
            return None;
        }
        loop {
            let line = match self.prompt(player) {
                Ok(Some(line)) => line,
                Ok(None) => return None,
                Err(e) => {
                    warn!(error = %e, "failed to read move");
                    return None;
                }
            };
            let coord: Coord = match line.parse() {
                Ok(c) => c,
                Err(e) => {
                    self.say(&e.to_string());
                    continue;
                }
            };
            if capture_count(board, board.lookup(coord), player) == 0 {
                self.say(&format!("{coord} is not a legal move"));
                continue;
            }
            return Some(coord);
        }
    }
}

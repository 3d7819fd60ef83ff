//! Crossterm terminal renderer for wirepath.
//!
//! Provides a [`Renderer`] that writes a [`Board`] as rows of tile markers,
//! either plain or coloured per tile with crossterm.

use std::io::{self, Write};

use crossterm::{
    queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
};

use wirepath_core::{Board, Tile};

/// Message printed above the board when routing failed.
pub const NOT_FOUND_MESSAGE: &str = "Path not found!";

/// Maps a [`Tile`] to its terminal colour.
fn tile_color(t: Tile) -> Color {
    match t {
        Tile::Empty => Color::DarkGrey,
        Tile::Blocked => Color::Red,
        Tile::Start => Color::Green,
        Tile::Target => Color::Cyan,
        Tile::Path => Color::Yellow,
    }
}

/// Writes boards to a terminal or any other byte sink.
pub struct Renderer {
    color: bool,
}

impl Renderer {
    /// Create a renderer with colours enabled.
    pub fn new() -> Self {
        Self { color: true }
    }

    /// Configure whether tiles are coloured.
    pub fn with_color(mut self, enabled: bool) -> Self {
        self.color = enabled;
        self
    }

    /// Write the board, one row per line, markers separated by spaces.
    pub fn render(&self, board: &Board, out: &mut impl Write) -> io::Result<()> {
        if self.color {
            render_styled(board, out)
        } else {
            render_plain(board, out)
        }
    }

    /// Write the board, preceded by a failure line if no route was found.
    pub fn render_outcome(
        &self,
        board: &Board,
        routed: bool,
        out: &mut impl Write,
    ) -> io::Result<()> {
        if !routed {
            writeln!(out, "{NOT_FOUND_MESSAGE}")?;
        }
        self.render(board, out)?;
        out.flush()
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Write the board's text form without any escape sequences.
pub fn render_plain(board: &Board, out: &mut impl Write) -> io::Result<()> {
    write!(out, "{board}")
}

/// Write the board with each marker coloured by tile state. Start, target
/// and path cells are bold.
pub fn render_styled(board: &Board, out: &mut impl Write) -> io::Result<()> {
    let width = board.size();
    for (p, t) in board.iter() {
        if p.x > 0 {
            queue!(out, Print(' '))?;
        }
        queue!(out, SetForegroundColor(tile_color(t)))?;
        let bold = matches!(t, Tile::Start | Tile::Target | Tile::Path);
        if bold {
            queue!(out, SetAttribute(Attribute::Bold))?;
        }
        queue!(out, Print(t.marker()))?;
        if bold {
            queue!(out, SetAttribute(Attribute::Reset))?;
        }
        queue!(out, ResetColor)?;
        if p.x == width - 1 {
            queue!(out, Print('\n'))?;
        }
    }
    out.flush()
}

//! GameView: maps `core::GameState` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Only the board's viewport bounds are drawn, one tile per 3 terminal
//! columns, with row labels on the left and column labels on top. Below the
//! board come the current player's hand (with hand indices), the scores and
//! the bag count.

use crate::core::{Board, GameState};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Color, Pos, Tile};

/// Terminal columns per board cell.
const CELL_W: u16 = 3;
/// Width of the row label gutter.
const LABEL_W: u16 = 4;

const LABEL: CellStyle = CellStyle::fg(Rgb::new(140, 140, 150));
const TEXT: CellStyle = CellStyle::fg(Rgb::new(220, 220, 220));

pub fn color_rgb(color: Color) -> Rgb {
    match color {
        Color::Blue => Rgb::new(70, 130, 255),
        Color::Red => Rgb::new(230, 60, 60),
        Color::Green => Rgb::new(60, 200, 90),
        Color::Orange => Rgb::new(255, 150, 40),
        Color::Yellow => Rgb::new(240, 220, 60),
        Color::Purple => Rgb::new(170, 90, 220),
    }
}

pub fn tile_style(tile: Tile) -> CellStyle {
    CellStyle::fg(color_rgb(tile.color)).bold()
}

/// The visible part of a board.
pub struct BoardView<'a> {
    board: &'a Board,
}

impl<'a> BoardView<'a> {
    pub fn new(board: &'a Board) -> Self {
        Self { board }
    }

    /// (width, height) in terminal cells, labels included.
    pub fn size(&self) -> (u16, u16) {
        let bounds = self.board.bounds();
        (
            LABEL_W + CELL_W * bounds.width() as u16,
            1 + bounds.height() as u16,
        )
    }

    pub fn render_into(&self, fb: &mut FrameBuffer, x0: u16, y0: u16) {
        let bounds = self.board.bounds();

        for (i, col) in (bounds.min_col..=bounds.max_col).enumerate() {
            let x = x0 + LABEL_W + CELL_W * i as u16;
            fb.put_str(x, y0, &format!("{:>2}", col), LABEL);
        }

        for (j, row) in (bounds.min_row..=bounds.max_row).enumerate() {
            let y = y0 + 1 + j as u16;
            fb.put_str(x0, y, &format!("{:>3}", row), LABEL);
            for (i, col) in (bounds.min_col..=bounds.max_col).enumerate() {
                let x = x0 + LABEL_W + CELL_W * i as u16;
                match self.board.get(row, col) {
                    Some(tile) => fb.put_char(x + 1, y, tile.shape.glyph(), tile_style(tile)),
                    None if Pos::new(row, col) == self.board.center() && self.board.is_empty() => {
                        fb.put_char(x + 1, y, '+', LABEL)
                    }
                    None => fb.put_char(x + 1, y, '·', LABEL.dim()),
                }
            }
        }
    }
}

/// Board plus the current player's panel.
pub struct GameView<'a> {
    game: &'a GameState,
}

impl<'a> GameView<'a> {
    pub fn new(game: &'a GameState) -> Self {
        Self { game }
    }

    /// Render into a fresh framebuffer sized to fit.
    pub fn render(&self) -> FrameBuffer {
        let board = BoardView::new(self.game.board());
        let (board_w, board_h) = board.size();

        let player = self.game.current_player();
        let turn = if self.game.is_over() {
            "Game over".to_string()
        } else {
            format!("{}'s turn", player.name())
        };
        let scores = format!(
            "Scores: {}",
            self.game
                .players()
                .iter()
                .map(|p| format!("{} {}", p.name(), p.score()))
                .collect::<Vec<_>>()
                .join("  ")
        );
        let bag = format!("Bag: {} tiles", self.game.bag_len());
        let hand_w = 6 + 4 * player.hand().len();

        let width = [board_w as usize, turn.len(), scores.len(), bag.len(), hand_w]
            .into_iter()
            .max()
            .unwrap_or(0) as u16;
        let mut fb = FrameBuffer::new(width, board_h + 5);

        board.render_into(&mut fb, 0, 0);

        let mut y = board_h + 1;
        fb.put_str(0, y, &turn, TEXT.bold());
        y += 1;
        if !self.game.is_over() {
            let mut x = fb.put_str(0, y, "Hand: ", TEXT);
            for (i, &tile) in player.hand().iter().enumerate() {
                x = fb.put_str(x, y, &format!("{}:", i), LABEL);
                fb.put_char(x, y, tile.shape.glyph(), tile_style(tile));
                x += 2;
            }
        }
        y += 1;
        fb.put_str(0, y, &scores, TEXT);
        y += 1;
        fb.put_str(0, y, &bag, LABEL);

        fb
    }
}

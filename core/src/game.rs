// SPDX-License-Identifier: MIT OR Apache-2.0

//! Game session: the single mutable owner of a running game
//!
//! The session serializes every mutation through `&mut self`; the rest of
//! the crate only ever sees board snapshots. Each successful call replaces
//! the public [`GameState`] wholesale, so callers holding a previous clone
//! keep a consistent picture.

use serde::{Deserialize, Serialize};

use crate::board::SUPPORTED_SIZES;
use crate::scoring::{score_board, ScoreSheet};
use crate::{rules, Board, Color, Coord, GameError, Move};

/// Snapshot of a running (or finished) game.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// The size of the board (9, 13 or 19)
    pub board_size: u8,
    /// The current board position
    pub board: Board,
    /// The player whose turn it is
    pub current_player: Color,
    /// Ko candidate: the point vacated by the previous move's
    /// single-stone capture, if any
    pub last_captured: Option<Coord>,
    /// Number of consecutive passes (0..=2)
    pub consecutive_passes: u8,
    /// Whether the game has ended
    pub game_over: bool,
    /// Current area score, recomputed after every applied move
    pub score: ScoreSheet,
    /// Stones captured so far as (by Black, by White)
    pub captures: (u16, u16),
    /// History of moves
    pub moves: Vec<Move>,
}

impl GameState {
    fn fresh(board_size: u8) -> Self {
        let board = Board::new(board_size);
        let score = score_board(&board);
        Self {
            board_size,
            board,
            current_player: Color::Black, // Black goes first
            last_captured: None,
            consecutive_passes: 0,
            game_over: false,
            score,
            captures: (0, 0),
            moves: Vec::new(),
        }
    }
}

/// Orchestrates turn order, pass counting and termination.
///
/// All mutation flows through [`apply_move`](GameSession::apply_move),
/// [`pass`](GameSession::pass) and [`reset`](GameSession::reset); an
/// illegal request leaves the state untouched.
#[derive(Debug, Clone)]
pub struct GameSession {
    state: GameState,
}

impl GameSession {
    /// Create a session with a fresh empty board, Black to move.
    pub fn new(board_size: u8) -> Result<Self, GameError> {
        if !SUPPORTED_SIZES.contains(&board_size) {
            return Err(GameError::UnsupportedBoardSize(board_size));
        }
        Ok(Self {
            state: GameState::fresh(board_size),
        })
    }

    /// The current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Legal placements for the player to move (for UI highlighting).
    pub fn valid_moves(&self) -> Vec<Coord> {
        if self.state.game_over {
            return Vec::new();
        }
        rules::valid_moves(
            &self.state.board,
            self.state.current_player,
            self.state.last_captured,
        )
    }

    /// Place a stone for the current player.
    ///
    /// On success the pass counter resets, the score is recomputed and the
    /// turn flips; if the new player to move has no legal placement the
    /// game ends immediately.
    pub fn apply_move(&mut self, coord: Coord) -> Result<&GameState, GameError> {
        if self.state.game_over {
            return Err(GameError::GameOver);
        }

        let player = self.state.current_player;
        rules::check_move(&self.state.board, coord, player, self.state.last_captured)?;

        let outcome = rules::make_move(&self.state.board, coord, player);
        if !outcome.captured.is_empty() {
            tracing::debug!(
                ?coord,
                count = outcome.captured.len(),
                "stones captured"
            );
            match player {
                Color::Black => self.state.captures.0 += outcome.captured.len() as u16,
                Color::White => self.state.captures.1 += outcome.captured.len() as u16,
            }
        }

        self.state.board = outcome.board;
        self.state.last_captured = outcome.ko_candidate;
        self.state.consecutive_passes = 0;
        self.state.score = score_board(&self.state.board);
        self.state.moves.push(Move::Place(coord));
        self.state.current_player = player.opposite();

        // A player with no legal move ends the game, no forced pass.
        if self.valid_moves().is_empty() {
            tracing::debug!(player = ?self.state.current_player, "no legal moves, game over");
            self.state.game_over = true;
        }

        Ok(&self.state)
    }

    /// Pass the turn. Two consecutive passes end the game.
    pub fn pass(&mut self) -> Result<&GameState, GameError> {
        if self.state.game_over {
            return Err(GameError::GameOver);
        }

        self.state.consecutive_passes += 1;
        // Passing lifts the single-turn ko prohibition.
        self.state.last_captured = None;
        self.state.moves.push(Move::Pass);

        if self.state.consecutive_passes >= 2 {
            tracing::debug!("both players passed, game over");
            self.state.game_over = true;
        } else {
            self.state.current_player = self.state.current_player.opposite();
        }

        Ok(&self.state)
    }

    /// Discard the game and start over, Black to move.
    ///
    /// This is the only exit from a finished game.
    pub fn reset(&mut self, board_size: u8) -> Result<&GameState, GameError> {
        if !SUPPORTED_SIZES.contains(&board_size) {
            return Err(GameError::UnsupportedBoardSize(board_size));
        }
        self.state = GameState::fresh(board_size);
        Ok(&self.state)
    }
}

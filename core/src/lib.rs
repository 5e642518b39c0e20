// SPDX-License-Identifier: MIT OR Apache-2.0

//! Weiqi Core - Game Rules and Board Logic
//!
//! This crate provides the core game functionality including:
//! - Go board representation and manipulation
//! - Connected-group discovery and liberty counting
//! - Move legality (suicide, simplified ko) and capture resolution
//! - Area scoring via territory flood-fill
//! - The game session state machine consumed by front ends

#![deny(unsafe_code)]
#![deny(clippy::all)]

pub mod board;
pub mod game;
pub mod group;
pub mod rules;
pub mod scoring;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Player color in a Go game (Black or White)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    /// Black player (traditionally goes first)
    Black,
    /// White player
    White,
}

impl Color {
    /// Returns the opposite color
    pub fn opposite(&self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
}

/// Board coordinate representing a position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    /// X coordinate (column)
    pub x: u8,
    /// Y coordinate (row)
    pub y: u8,
}

impl Coord {
    /// Create a new coordinate
    pub fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Check if coordinate is valid for a board of given size
    pub fn is_valid(&self, board_size: u8) -> bool {
        self.x < board_size && self.y < board_size
    }
}

/// Represents a move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Move {
    /// Place a stone at the specified coordinate
    Place(Coord),
    /// Pass the turn
    Pass,
}

/// Errors that can occur when configuring or playing a game
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The coordinate is outside the board
    #[error("coordinate is outside the board")]
    OutOfBounds,

    /// The position is already occupied
    #[error("position already occupied")]
    Occupied,

    /// The move would leave the mover's own group without liberties
    #[error("move would be self-capture")]
    Suicide,

    /// The move violates the ko rule
    #[error("move violates the ko rule")]
    KoViolation,

    /// A mutating call was issued against a finished game
    #[error("game is already over")]
    GameOver,

    /// The requested board size is not supported
    #[error("unsupported board size: {0} (expected 9, 13 or 19)")]
    UnsupportedBoardSize(u8),
}

pub use board::Board;
pub use game::{GameSession, GameState};
pub use scoring::ScoreSheet;

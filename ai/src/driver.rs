// SPDX-License-Identifier: MIT OR Apache-2.0

//! Cancelable async bridge between a session owner and the strategies
//!
//! AI computation runs on a blocking worker task so it never stalls the
//! caller. Every request snapshots the driver's epoch; a `reset` or
//! difficulty change bumps the epoch, and any in-flight result whose
//! snapshot no longer matches resolves as stale instead of being applied
//! to a state it was not computed for.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use thiserror::Error;

use weiqi_core::{Board, Color, Coord};

use crate::{AiRegistry, Difficulty};

/// Errors surfaced by the async driver.
#[derive(Debug, Error)]
pub enum DriverError {
    /// The session changed while the search was in flight; discard the result
    #[error("ai result is stale: the session changed during the search")]
    Stale,
    /// The worker task panicked or was cancelled by the runtime
    #[error("ai worker task failed: {0}")]
    Worker(#[from] tokio::task::JoinError),
}

/// Owns the strategy registry and the cancellation epoch.
pub struct AiDriver {
    registry: AiRegistry,
    epoch: Arc<AtomicU64>,
}

impl AiDriver {
    pub fn new(registry: AiRegistry) -> Self {
        Self {
            registry,
            epoch: Arc::new(AtomicU64::new(0)),
        }
    }

    /// The current epoch; bumped by [`invalidate`](Self::invalidate).
    pub fn epoch(&self) -> u64 {
        self.epoch.load(Ordering::Acquire)
    }

    /// Invalidate every in-flight request. Call on session reset or
    /// difficulty change.
    pub fn invalidate(&self) {
        self.epoch.fetch_add(1, Ordering::AcqRel);
    }

    /// Compute a move off the caller's path.
    ///
    /// The board is moved into the worker; the core stays synchronous and
    /// the caller keeps reading its own state meanwhile. `Ok(None)` means
    /// the strategy passes.
    pub async fn request_move(
        &self,
        difficulty: Difficulty,
        board: Board,
        color: Color,
        last_captured: Option<Coord>,
    ) -> Result<Option<Coord>, DriverError> {
        let submitted = self.epoch();
        let strategy = self.registry.strategy(difficulty);

        let choice = tokio::task::spawn_blocking(move || {
            strategy.choose_move(&board, color, last_captured)
        })
        .await?;

        if self.epoch() != submitted {
            tracing::debug!(?difficulty, "discarding stale ai result");
            return Err(DriverError::Stale);
        }
        Ok(choice)
    }
}

// SPDX-License-Identifier: MIT OR Apache-2.0

use std::sync::Arc;
use std::time::Duration;

use weiqi_ai::driver::DriverError;
use weiqi_ai::{AiDriver, AiRegistry, Difficulty, MctsAi, MctsConfig, Strategy};
use weiqi_core::{rules, Board, Color, Coord};

#[tokio::test]
async fn driver_delivers_a_legal_move() {
    let driver = AiDriver::new(AiRegistry::seeded(21));
    let mut board = Board::new(9);
    board.place(Coord::new(4, 4), Color::Black);

    let choice = driver
        .request_move(Difficulty::Easy, board.clone(), Color::White, None)
        .await
        .unwrap()
        .expect("a nearly empty board has legal moves");

    assert!(rules::valid_moves(&board, Color::White, None).contains(&choice));
}

#[tokio::test]
async fn invalidate_bumps_the_epoch() {
    let driver = AiDriver::new(AiRegistry::new());
    assert_eq!(driver.epoch(), 0);
    driver.invalidate();
    driver.invalidate();
    assert_eq!(driver.epoch(), 2);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn reset_while_searching_discards_the_result() {
    // A hard-tier search long enough that the invalidation below lands
    // while the worker is still inside its budget.
    let driver = Arc::new(AiDriver::new(AiRegistry::seeded(8)));
    let board = Board::new(9);

    let task = {
        let driver = Arc::clone(&driver);
        tokio::spawn(async move {
            driver
                .request_move(Difficulty::Hard, board, Color::Black, None)
                .await
        })
    };

    // Let the request start, then simulate a session reset.
    tokio::time::sleep(Duration::from_millis(100)).await;
    driver.invalidate();

    let result = task.await.unwrap();
    assert!(matches!(result, Err(DriverError::Stale)));
}

#[tokio::test]
async fn hard_tier_answers_within_its_budget() {
    let ai = MctsAi::new(MctsConfig {
        budget: Duration::from_millis(150),
        max_iterations: 300,
        seed: Some(4),
        ..MctsConfig::default()
    });
    let board = Board::new(9);

    let started = std::time::Instant::now();
    let choice = ai.choose_move(&board, Color::Black, None);
    assert!(choice.is_some());
    // Budget plus slack for the playout that straddles the deadline
    assert!(started.elapsed() < Duration::from_secs(10));
}

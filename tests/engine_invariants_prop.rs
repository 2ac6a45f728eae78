//! Invariant tests over random seeds and random steering.
//!
//! Invariants covered:
//! - Status never leaves a terminal state, and a finished game's board is frozen.
//! - A tick without food ages every live segment by exactly one; eating ages nothing.
//! - The head is always stamped with the current length and no segment outlives it.
//! - While walking there is exactly one food cell and it never sits under the snake.
//! - A wall hit only happens when the step leaves the board.

use std::time::Duration;

use proptest::prelude::*;

use grid_snake::{Collision, Direction, GameConfig, GameEngine, Status, TickOutcome};

fn direction(i: u8) -> Direction {
    Direction::ALL[(i % 4) as usize]
}

fn assert_food_invariant(engine: &GameEngine) {
    let food = engine.board().food_positions();
    assert_eq!(food.len(), 1);
    assert!(!engine.board().get(food[0]).unwrap().has_snake());
}

fn check_rollout(config: GameConfig, seed: u64, steering: &[u8]) {
    let mut engine = GameEngine::with_seed(config, seed).unwrap();
    assert_food_invariant(&engine);

    for &turn in steering {
        let before = engine.board().cells().to_vec();
        let status_before = engine.status();
        let length_before = engine.length();
        let interval_before = engine.interval();
        let head_before = engine.head();

        let requested = direction(turn);
        let current = engine.direction();
        let accepted = engine.change_direction(requested);
        assert_eq!(accepted, requested != current.opposite());

        let outcome = engine.tick();
        let cells = engine.board().cells();

        if status_before != Status::Walking {
            assert_eq!(outcome, TickOutcome::Halted);
            assert_eq!(engine.status(), status_before);
            assert_eq!(cells, &before[..]);
            continue;
        }

        match outcome {
            TickOutcome::Moved { head } => {
                let head_id = head.x as usize + head.y as usize * engine.board().width();
                for (id, (old, new)) in before.iter().zip(cells).enumerate() {
                    if id == head_id {
                        assert_eq!(new.snake, engine.length());
                    } else {
                        assert_eq!(new.snake, old.snake.saturating_sub(1));
                    }
                }
                assert_eq!(engine.length(), length_before);
                assert_food_invariant(&engine);
            }
            TickOutcome::Ate { head, food } => {
                assert_eq!(engine.length(), length_before + 1);
                assert_eq!(engine.interval(), interval_before.saturating_sub(Duration::from_millis(3)));
                assert_eq!(engine.board().get(head).unwrap().snake, engine.length());
                assert!(!engine.board().get(head).unwrap().food);
                match food {
                    Some(_) => assert_food_invariant(&engine),
                    None => assert_eq!(engine.status(), Status::BoardFull),
                }
            }
            TickOutcome::Crashed(collision) => {
                assert_eq!(cells, &before[..]);
                assert_eq!(engine.head(), head_before);
                let target = head_before.step(engine.direction());
                match collision {
                    Collision::Wall => assert!(!engine.board().in_bounds(target)),
                    Collision::SelfHit => assert!(engine.board().get(target).unwrap().has_snake()),
                }
                assert_eq!(engine.status(), Status::from(collision));
            }
            TickOutcome::Halted => panic!("a walking game must not halt"),
        }

        assert!(cells.iter().all(|c| c.snake <= engine.length()));
    }
}

proptest! {
    #[test]
    fn default_board_invariants(seed in any::<u64>(), steering in prop::collection::vec(0u8..4, 0..200)) {
        check_rollout(GameConfig::default(), seed, &steering);
    }

    #[test]
    fn small_board_invariants(seed in any::<u64>(), steering in prop::collection::vec(0u8..4, 0..200)) {
        let config = GameConfig { width: 4, height: 3, initial_length: 2, ..Default::default() };
        check_rollout(config, seed, &steering);
    }
}

//! Integration test: Snake engine scenarios
//!
//! Drives the engine only through its public API: construction, moves,
//! scoring and the rendered board.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use snake_engine::engine::{BoardRenderer, ConfigError, EngineError};
use snake_engine::{Cell, Coord, Direction, GameStatus, SnakeEngine};

fn seeded(
    width: Coord,
    height: Coord,
    food_target: Coord,
    seed: u64,
) -> SnakeEngine<ChaCha8Rng> {
    SnakeEngine::with_rng(width, height, food_target, 0, ChaCha8Rng::seed_from_u64(seed))
        .unwrap()
}

/// Greedy route toward the food for a short snake.
///
/// When the wanted direction is the reversal of the last move, side-step
/// along the other axis first.
fn next_direction<R>(engine: &SnakeEngine<R>) -> Direction {
    let head = engine.head();
    let food = engine.food();
    let last = engine.last_direction();

    let wanted = if food.x < head.x {
        Direction::Up
    } else if food.x > head.x {
        Direction::Down
    } else if food.y < head.y {
        Direction::Left
    } else {
        Direction::Right
    };

    if !wanted.is_opposite(last) {
        return wanted;
    }

    match wanted {
        Direction::Up | Direction::Down => {
            if head.y > 0 {
                Direction::Left
            } else {
                Direction::Right
            }
        }
        Direction::Left | Direction::Right => {
            if head.x > 0 {
                Direction::Up
            } else {
                Direction::Down
            }
        }
    }
}

// =============================================================================
// Construction
// =============================================================================

#[test]
fn test_construction_rejects_small_boards() {
    for width in 0..9 {
        let err = SnakeEngine::new(width, 9, 1, 0).unwrap_err();
        assert!(matches!(
            err,
            EngineError::InvalidConfiguration(ConfigError::BoardTooSmall { .. })
        ));
    }
    for height in 0..9 {
        assert!(SnakeEngine::new(20, height, 1, 0).is_err());
    }
}

#[test]
fn test_construction_rejects_zero_food_target() {
    assert_eq!(
        SnakeEngine::new(9, 9, 0, 0).unwrap_err(),
        EngineError::InvalidConfiguration(ConfigError::NoFoodTarget)
    );
}

#[test]
fn test_construction_centers_snake_and_places_food() {
    for (width, height) in [(9, 9), (9, 14), (16, 11), (40, 40)] {
        for seed in 0..20 {
            let engine = seeded(width, height, 3, seed);
            let center = Cell::new(width / 2, height / 2);
            assert_eq!(engine.snake(), &[center, Cell::new(center.x, center.y + 1)]);
            assert!(!engine.snake().contains(&engine.food()));
            assert!(engine.food().x < width && engine.food().y < height);
            assert_eq!(engine.last_direction(), Direction::Left);
        }
    }
}

// =============================================================================
// Movement rules
// =============================================================================

#[test]
fn test_reverse_request_moves_like_last_direction() {
    let mut reversed = seeded(9, 9, 5, 3);
    let mut straight = seeded(9, 9, 5, 3);

    let a = reversed.step(Direction::Right).unwrap();
    let b = straight.step(Direction::Left).unwrap();

    assert_eq!(a, b);
    assert_eq!(reversed.snake(), straight.snake());
    assert_eq!(reversed.head(), Cell::new(4, 3));
    assert_eq!(reversed.render(), straight.render());
}

/// Drive straight in `direction` until the game ends, checking that the
/// losing move leaves score and food alone.
fn run_into_wall(engine: &mut SnakeEngine<ChaCha8Rng>, direction: Direction) {
    loop {
        let score = engine.current_score();
        let food = engine.food();
        let remaining = engine.remaining_food();
        let snake = engine.snake().to_vec();

        let status = engine.step(direction).unwrap();
        if status == GameStatus::Loss {
            assert_eq!(engine.current_score(), score);
            assert_eq!(engine.food(), food);
            assert_eq!(engine.remaining_food(), remaining);
            assert_eq!(engine.snake(), snake.as_slice());
            return;
        }
        assert_eq!(status, GameStatus::Continue);
    }
}

#[test]
fn test_every_wall_is_a_loss() {
    let mut up = seeded(9, 9, 50, 1);
    run_into_wall(&mut up, Direction::Up);
    assert_eq!(up.head().x, 0);

    let mut down = seeded(9, 9, 50, 2);
    run_into_wall(&mut down, Direction::Down);
    assert_eq!(down.head().x, 8);

    let mut left = seeded(9, 9, 50, 3);
    run_into_wall(&mut left, Direction::Left);
    assert_eq!(left.head().y, 0);

    // Right is the reversal of the starting direction, so turn first
    let mut right = seeded(9, 9, 50, 4);
    assert_eq!(right.step(Direction::Up).unwrap(), GameStatus::Continue);
    run_into_wall(&mut right, Direction::Right);
    assert_eq!(right.head().y, 8);
}

#[test]
fn test_moves_after_loss_are_rejected() {
    let mut engine = seeded(9, 9, 50, 8);
    run_into_wall(&mut engine, Direction::Left);
    assert!(engine.is_over());
    for direction in Direction::ALL {
        assert_eq!(
            engine.step(direction),
            Err(EngineError::GameOver(GameStatus::Loss))
        );
    }
}

#[test]
fn test_growth_on_food() {
    for seed in 0..10 {
        let mut engine = seeded(12, 12, 10, seed);
        let mut eaten = 0;

        for _ in 0..200 {
            let length = engine.snake().len();
            let score = engine.current_score();
            let remaining = engine.remaining_food();
            let food = engine.food();

            let status = engine.step(next_direction(&engine)).unwrap();
            if status != GameStatus::Continue {
                break;
            }

            if engine.head() == food {
                eaten += 1;
                assert_eq!(engine.snake().len(), length + 1);
                assert_eq!(engine.current_score(), score + 1);
                assert_eq!(engine.remaining_food(), remaining - 1);
                assert!(!engine.snake().contains(&engine.food()));
            } else {
                assert_eq!(engine.snake().len(), length);
                assert_eq!(engine.current_score(), score);
            }
            if eaten == 2 {
                break;
            }
        }
        assert!(eaten >= 1, "seed {} never reached the food", seed);
    }
}

// =============================================================================
// End-to-end
// =============================================================================

#[test]
fn test_single_food_game_is_won_on_first_bite() {
    for seed in 0..25 {
        let mut engine = seeded(9, 9, 1, seed);
        let target = engine.food();

        let mut status = GameStatus::Continue;
        for _ in 0..40 {
            status = engine.step(next_direction(&engine)).unwrap();
            if status != GameStatus::Continue {
                break;
            }
        }

        assert_eq!(status, GameStatus::Win, "seed {}", seed);
        assert_eq!(engine.head(), target);
        assert_eq!(engine.current_score(), 1);
        assert_eq!(engine.remaining_food(), 0);
        assert_eq!(engine.snake().len(), 3);
        assert_eq!(
            engine.step(Direction::Up),
            Err(EngineError::GameOver(GameStatus::Win))
        );
    }
}

// =============================================================================
// Rendering
// =============================================================================

#[test]
fn test_render_length_invariant() {
    for width in [9, 10, 17, 32] {
        for height in [9, 12, 25] {
            let mut engine = seeded(width, height, 20, 5);
            let expected =
                (usize::from(width) + 2) * (usize::from(height) + 2) * 2 + usize::from(width) + 2;
            assert_eq!(BoardRenderer::expected_len(width, height), expected);
            assert_eq!(engine.render().chars().count(), expected);

            for _ in 0..3 {
                engine.step(Direction::Up).unwrap();
                assert_eq!(engine.render().chars().count(), expected);
                assert_eq!(engine.render_glyphs().len(), expected);
            }
        }
    }
}

#[test]
fn test_render_is_idempotent_between_moves() {
    let mut engine = seeded(11, 9, 5, 21);
    let first = engine.render().to_string();
    assert_eq!(engine.render(), first);

    engine.step(Direction::Up).unwrap();
    let second = engine.render().to_string();
    assert_eq!(engine.render(), second);
    assert_ne!(first, second);
}

#[test]
fn test_render_matches_state() {
    let mut engine = seeded(9, 10, 5, 13);
    engine.step(Direction::Up).unwrap();
    engine.step(Direction::Left).unwrap();

    let lines: Vec<Vec<char>> = engine.render().lines().map(|l| l.chars().collect()).collect();
    assert_eq!(lines.len(), 11);

    for x in 0..engine.width() {
        for y in 0..engine.height() {
            let cell = Cell::new(x, y);
            let line = &lines[usize::from(x) + 1];
            let at = 2 + usize::from(y) * 2;
            let pair = (line[at], line[at + 1]);
            let expected = if engine.snake().contains(&cell) {
                ('█', '█')
            } else if cell == engine.food() {
                ('●', ' ')
            } else {
                (' ', ' ')
            };
            assert_eq!(pair, expected, "cell {:?}", cell);
        }
    }
}

//! Snake engine: construction, movement rules, food placement.

use super::config::EngineConfig;
use super::error::EngineError;
use super::render::BoardRenderer;
use super::types::{Cell, Coord, Direction, GameStatus, Score};
use rand::rngs::StdRng;
use rand::seq::IteratorRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, trace};

/// Rejection-sampling draws per board cell before falling back to a scan of
/// the free cells.
const FOOD_ATTEMPTS_PER_CELL: usize = 4;

/// A single snake game on a fixed board.
///
/// The engine owns the snake, the food and the rendered board, and is the only
/// thing that mutates them. It is deliberately not `Clone`.
#[derive(Debug)]
pub struct SnakeEngine<R = StdRng> {
    width: Coord,
    height: Coord,
    /// Snake body segments. Head is at the front (index 0).
    snake: Vec<Cell>,
    food: Cell,
    score: Score,
    remaining_food: Coord,
    last_direction: Direction,
    /// Set once a move returned `Win` or `Loss`.
    outcome: Option<GameStatus>,
    board: BoardRenderer,
    rng: R,
}

impl SnakeEngine<StdRng> {
    /// Create an engine seeded from system entropy.
    pub fn new(
        width: Coord,
        height: Coord,
        food_target: Coord,
        initial_score: Score,
    ) -> Result<Self, EngineError> {
        Self::with_rng(
            width,
            height,
            food_target,
            initial_score,
            StdRng::from_entropy(),
        )
    }

    /// Create an engine from a config, seeded from system entropy.
    pub fn from_config(config: &EngineConfig) -> Result<Self, EngineError> {
        Self::from_config_with_rng(config, StdRng::from_entropy())
    }
}

impl<R: Rng> SnakeEngine<R> {
    /// Create an engine that draws food positions from `rng`.
    pub fn with_rng(
        width: Coord,
        height: Coord,
        food_target: Coord,
        initial_score: Score,
        rng: R,
    ) -> Result<Self, EngineError> {
        let config = EngineConfig::new(width, height, food_target, initial_score);
        Self::from_config_with_rng(&config, rng)
    }

    pub fn from_config_with_rng(config: &EngineConfig, rng: R) -> Result<Self, EngineError> {
        config.validate()?;

        let center = Cell::new(config.width / 2, config.height / 2);
        let snake = vec![center, Cell::new(center.x, center.y + 1)];

        let mut engine = Self {
            width: config.width,
            height: config.height,
            snake,
            // Temporary food position; overwritten below
            food: center,
            score: config.initial_score,
            remaining_food: config.food_target,
            last_direction: Direction::Left,
            outcome: None,
            board: BoardRenderer::new(config.width, config.height),
            rng,
        };

        // A fresh board always has free cells
        if let Some(food) = engine.spawn_food() {
            engine.food = food;
        }
        engine.redraw();

        debug!(
            width = config.width,
            height = config.height,
            food_target = config.food_target,
            food = ?engine.food,
            "snake engine created"
        );
        Ok(engine)
    }

    /// Advance the snake one cell.
    ///
    /// Asking for the exact reverse of the last accepted direction keeps the
    /// snake going the way it was. Fails with [`EngineError::GameOver`] once a
    /// previous move has returned `Win` or `Loss`.
    pub fn step(&mut self, requested: Direction) -> Result<GameStatus, EngineError> {
        if let Some(status) = self.outcome {
            return Err(EngineError::GameOver(status));
        }

        let direction = if requested.is_opposite(self.last_direction) {
            trace!(?requested, kept = ?self.last_direction, "reversal clamped");
            self.last_direction
        } else {
            requested
        };

        // Off the board: nothing moves
        let Some(new_head) = self.snake[0].neighbor(direction, self.width, self.height) else {
            return Ok(self.finish(GameStatus::Loss));
        };

        let mut vacated = self.snake[0];
        self.snake[0] = new_head;

        let hits = self.snake.iter().filter(|&&cell| cell == new_head).count();
        if hits > 1 {
            self.redraw();
            return Ok(self.finish(GameStatus::Loss));
        }

        // Each segment takes the place its predecessor just left
        for segment in self.snake.iter_mut().skip(1) {
            vacated = std::mem::replace(segment, vacated);
        }

        let status = if new_head == self.food {
            self.eat(vacated)
        } else {
            GameStatus::Continue
        };

        if status == GameStatus::Continue {
            self.last_direction = direction;
        }
        self.redraw();

        if status.is_terminal() {
            Ok(self.finish(status))
        } else {
            Ok(status)
        }
    }

    /// Grow into `vacated`, score, and roll the next food.
    fn eat(&mut self, vacated: Cell) -> GameStatus {
        self.snake.push(vacated);
        self.score = self.score.saturating_add(1);
        self.remaining_food = self.remaining_food.saturating_sub(1);

        match self.spawn_food() {
            Some(food) => self.food = food,
            None => {
                debug!(length = self.snake.len(), "board full");
                return GameStatus::Win;
            }
        }
        debug!(food = ?self.food, remaining = self.remaining_food, "food eaten");

        if self.remaining_food == 0 {
            GameStatus::Win
        } else {
            GameStatus::Continue
        }
    }

    /// Pick a random free cell, or `None` when the snake fills the board.
    ///
    /// Uniform rejection sampling first; after a bounded number of misses the
    /// free cells are scanned and one is chosen directly.
    fn spawn_food(&mut self) -> Option<Cell> {
        let cells = usize::from(self.width) * usize::from(self.height);
        if self.snake.len() >= cells {
            return None;
        }

        for _ in 0..cells * FOOD_ATTEMPTS_PER_CELL {
            let candidate = Cell::new(
                self.rng.gen_range(0..self.width),
                self.rng.gen_range(0..self.height),
            );
            if !self.snake.contains(&candidate) {
                return Some(candidate);
            }
        }

        let (width, height) = (self.width, self.height);
        let snake = &self.snake;
        (0..width)
            .flat_map(|x| (0..height).map(move |y| Cell::new(x, y)))
            .filter(|cell| !snake.contains(cell))
            .choose(&mut self.rng)
    }

    fn finish(&mut self, status: GameStatus) -> GameStatus {
        info!(?status, score = self.score, length = self.snake.len(), "game over");
        self.outcome = Some(status);
        status
    }

    fn redraw(&mut self) {
        self.board.draw(&self.snake, self.food);
    }
}

impl<R> SnakeEngine<R> {
    /// The board as text, as of the last move.
    pub fn render(&self) -> &str {
        self.board.as_str()
    }

    /// The board as character units, one `char` each.
    pub fn render_glyphs(&self) -> &[char] {
        self.board.glyphs()
    }

    pub fn current_score(&self) -> Score {
        self.score
    }

    pub fn remaining_food(&self) -> Coord {
        self.remaining_food
    }

    pub fn width(&self) -> Coord {
        self.width
    }

    pub fn height(&self) -> Coord {
        self.height
    }

    /// Snake cells, head first.
    pub fn snake(&self) -> &[Cell] {
        &self.snake
    }

    pub fn head(&self) -> Cell {
        self.snake[0]
    }

    pub fn food(&self) -> Cell {
        self.food
    }

    pub fn last_direction(&self) -> Direction {
        self.last_direction
    }

    /// `Continue` while the game is running, otherwise the final status.
    pub fn status(&self) -> GameStatus {
        self.outcome.unwrap_or(GameStatus::Continue)
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }
}

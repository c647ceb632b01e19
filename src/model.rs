use std::collections::HashSet;

use rand::Rng;
use tracing::debug;

use crate::config::GameConfig;
use crate::error::{Result, SnakeError};

/// One grid-aligned pixel coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one grid unit away in `heading`
    pub fn step(self, heading: Heading, pitch: i32) -> Self {
        let (dx, dy) = heading.delta();
        Self {
            x: self.x + dx * pitch,
            y: self.y + dy * pitch,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Heading {
    Up,
    Down,
    Left,
    Right,
}

impl Heading {
    /// Unit offset in grid squares. Screen y grows downwards.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Heading::Up => (0, -1),
            Heading::Down => (0, 1),
            Heading::Left => (-1, 0),
            Heading::Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Heading::Up => Heading::Down,
            Heading::Down => Heading::Up,
            Heading::Left => Heading::Right,
            Heading::Right => Heading::Left,
        }
    }

    pub fn is_opposite(self, other: Heading) -> bool {
        self.opposite() == other
    }
}

/// What a single tick did to the state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Head moved one cell, tail dropped
    Moved,
    /// Head landed on the food; the snake grew and the score went up
    Ate,
    /// Head left the playfield or hit the body. The state is left untouched.
    Collision,
}

/// Lifecycle of one play session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameStatus {
    #[default]
    NotStarted,
    Running,
    Over,
}

/// Complete state of one run
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    config: GameConfig,
    /// Body segments, head first
    snake: Vec<Cell>,
    food: Cell,
    /// Direction the snake moved in on the last tick
    heading: Heading,
    /// Direction requested for the next tick
    next_heading: Heading,
    score: u32,
}

impl GameState {
    /// Fresh run: a one-cell snake on the start cell and food placed at random.
    pub fn new<R: Rng>(config: GameConfig, rng: &mut R) -> Result<Self> {
        config.validate()?;
        let food = place_food(&config, rng);
        let start = config.start;
        let heading = config.start_heading;
        Self::from_parts(config, vec![start], food, heading)
    }

    /// Build a state from explicit pieces. `body` is head first.
    pub fn from_parts(
        config: GameConfig,
        body: Vec<Cell>,
        food: Cell,
        heading: Heading,
    ) -> Result<Self> {
        config.validate()?;
        if body.is_empty() {
            return Err(SnakeError::InvalidConfig("snake body must have a head".into()));
        }
        Ok(Self {
            config,
            snake: body,
            food,
            heading,
            next_heading: heading,
            score: 0,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn snake(&self) -> &[Cell] {
        &self.snake
    }

    pub fn head(&self) -> Cell {
        self.snake[0]
    }

    pub fn food(&self) -> Cell {
        self.food
    }

    /// The heading the next tick will move in
    pub fn heading(&self) -> Heading {
        self.next_heading
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Request a new heading for the next tick.
    ///
    /// A request for the reverse of the pending heading, or of the direction
    /// the snake last moved in, is dropped. Returns whether it was taken.
    pub fn set_heading(&mut self, requested: Heading) -> bool {
        if requested.is_opposite(self.next_heading) || requested.is_opposite(self.heading) {
            return false;
        }
        if requested != self.next_heading {
            debug!(?requested, "Heading changed");
        }
        self.next_heading = requested;
        true
    }

    /// Pick a new random food cell and store it.
    pub fn place_food<R: Rng>(&mut self, rng: &mut R) -> Cell {
        self.food = place_food(&self.config, rng);
        self.food
    }

    /// Advance one tick in the pending heading.
    pub fn advance<R: Rng>(&mut self, rng: &mut R) -> StepOutcome {
        let heading = self.next_heading;
        let new_head = self.head().step(heading, self.config.pitch);

        if !self.config.contains(new_head) {
            return StepOutcome::Collision;
        }
        // Checked against the whole body, tail included
        if self.snake.contains(&new_head) || self.has_overlap() {
            return StepOutcome::Collision;
        }

        self.heading = heading;
        self.snake.insert(0, new_head);

        if new_head == self.food {
            self.score += self.config.food_reward;
            self.place_food(rng);
            StepOutcome::Ate
        } else {
            self.snake.pop();
            StepOutcome::Moved
        }
    }

    /// True when two body segments share a cell
    fn has_overlap(&self) -> bool {
        let mut seen = HashSet::with_capacity(self.snake.len());
        !self.snake.iter().all(|cell| seen.insert(*cell))
    }
}

/// Uniformly random cell on the grid. May land on the snake.
pub fn place_food<R: Rng>(config: &GameConfig, rng: &mut R) -> Cell {
    let x = rng.gen_range(0..config.columns()) * config.pitch;
    let y = rng.gen_range(0..config.rows()) * config.pitch;
    Cell::new(x, y)
}

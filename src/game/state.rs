use std::collections::VecDeque;

use rand::Rng;

use super::direction::Direction;

/// A position on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// One step in a direction with toroidal wraparound: a step off one
    /// edge of the grid re-enters from the opposite edge
    pub fn wrapped_step(&self, direction: Direction, width: usize, height: usize) -> Self {
        let (dx, dy) = direction.delta();
        let moved = self.moved_by(dx, dy);
        Self {
            x: moved.x.rem_euclid(width as i32),
            y: moved.y.rem_euclid(height as i32),
        }
    }
}

/// The snake: an ordered sequence of grid cells, head first
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    body: VecDeque<Position>,
    direction: Direction,
    pending_direction: Option<Direction>,
    target_length: usize,
}

impl Snake {
    /// Create a length-1 snake at the given cell, heading right
    pub fn new(head: Position) -> Self {
        Self {
            body: VecDeque::from([head]),
            direction: Direction::Right,
            pending_direction: None,
            target_length: 1,
        }
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Body cells from head to tail
    pub fn body(&self) -> impl Iterator<Item = Position> + '_ {
        self.body.iter().copied()
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the snake is empty (should never happen in practice)
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Current direction of travel
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Length the body is growing toward
    pub fn target_length(&self) -> usize {
        self.target_length
    }

    /// Check if any body cell occupies the given position
    pub fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Request a turn, to take effect on the next move. A reversal of the
    /// current direction is ignored; a later valid request before the next
    /// move overwrites an earlier one.
    pub fn set_direction(&mut self, direction: Direction) {
        if !direction.is_opposite(self.direction) {
            self.pending_direction = Some(direction);
        }
    }

    /// Advance one cell: apply any pending turn, push the new head, and pop
    /// the tail unless the body is still short of its target length. Returns
    /// the vacated tail cell, if any.
    pub fn advance(&mut self, width: usize, height: usize) -> Option<Position> {
        if let Some(direction) = self.pending_direction.take() {
            self.direction = direction;
        }

        let new_head = self.head().wrapped_step(self.direction, width, height);
        self.body.push_front(new_head);

        if self.body.len() > self.target_length {
            self.body.pop_back()
        } else {
            None
        }
    }

    /// Raise the target length by one; the body catches up on the next move
    pub fn grow(&mut self) {
        self.target_length += 1;
    }

    /// Check if the head has run into the body. Bodies of one or two cells
    /// cannot self-intersect.
    pub fn hit_itself(&self) -> bool {
        self.body.len() > 2 && self.body.iter().skip(1).any(|&cell| cell == self.head())
    }

    /// Shrink back to a length-1 snake at the given cell, heading right
    pub fn reset(&mut self, start: Position) {
        *self = Snake::new(start);
    }
}

/// The food item the snake grows by eating
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Food {
    /// The cell the food occupies
    pub position: Position,
}

impl Food {
    /// Place a new food item on a cell the snake does not occupy
    pub fn spawn(rng: &mut impl Rng, width: usize, height: usize, snake: &Snake) -> Self {
        Self {
            position: random_free_cell(rng, width, height, snake),
        }
    }

    /// Move the food to a fresh cell the snake does not occupy
    pub fn relocate(&mut self, rng: &mut impl Rng, width: usize, height: usize, snake: &Snake) {
        self.position = random_free_cell(rng, width, height, snake);
    }
}

/// Sample cells uniformly until one falls outside the snake's body. Loops
/// forever if the snake covers the whole grid.
fn random_free_cell(rng: &mut impl Rng, width: usize, height: usize, snake: &Snake) -> Position {
    loop {
        let pos = Position::new(
            rng.gen_range(0..width) as i32,
            rng.gen_range(0..height) as i32,
        );
        if !snake.occupies(pos) {
            return pos;
        }
    }
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub food: Food,
    pub grid_width: usize,
    pub grid_height: usize,
    /// Ticks elapsed since the game started
    pub ticks: u64,
}

impl GameState {
    /// Create a new game state
    pub fn new(snake: Snake, food: Food, grid_width: usize, grid_height: usize) -> Self {
        Self {
            snake,
            food,
            grid_width,
            grid_height,
            ticks: 0,
        }
    }

    /// Apples eaten in the current run. The snake starts at length 1 and its
    /// target length grows by one per apple.
    pub fn score(&self) -> u32 {
        (self.snake.target_length() - 1) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn coiled_snake(cells: &[(i32, i32)]) -> Snake {
        Snake {
            body: cells.iter().map(|&(x, y)| Position::new(x, y)).collect(),
            direction: Direction::Right,
            pending_direction: None,
            target_length: cells.len(),
        }
    }

    #[test]
    fn test_position_movement() {
        let pos = Position::new(5, 5);
        assert_eq!(pos.moved_by(1, 0), Position::new(6, 5));
        assert_eq!(pos.moved_by(-1, 0), Position::new(4, 5));
        assert_eq!(pos.moved_by(0, 1), Position::new(5, 6));
        assert_eq!(pos.moved_by(0, -1), Position::new(5, 4));
    }

    #[test]
    fn test_wrapped_step_interior() {
        let pos = Position::new(5, 5);
        assert_eq!(pos.wrapped_step(Direction::Right, 10, 10), Position::new(6, 5));
        assert_eq!(pos.wrapped_step(Direction::Left, 10, 10), Position::new(4, 5));
        assert_eq!(pos.wrapped_step(Direction::Down, 10, 10), Position::new(5, 6));
        assert_eq!(pos.wrapped_step(Direction::Up, 10, 10), Position::new(5, 4));
    }

    #[test]
    fn test_wrapped_step_at_edges() {
        assert_eq!(
            Position::new(9, 5).wrapped_step(Direction::Right, 10, 10),
            Position::new(0, 5)
        );
        assert_eq!(
            Position::new(0, 5).wrapped_step(Direction::Left, 10, 10),
            Position::new(9, 5)
        );
        assert_eq!(
            Position::new(5, 9).wrapped_step(Direction::Down, 10, 10),
            Position::new(5, 0)
        );
        assert_eq!(
            Position::new(5, 0).wrapped_step(Direction::Up, 10, 10),
            Position::new(5, 9)
        );
    }

    #[test]
    fn test_wrapped_step_non_square_grid() {
        assert_eq!(
            Position::new(7, 3).wrapped_step(Direction::Right, 8, 6),
            Position::new(0, 3)
        );
        assert_eq!(
            Position::new(4, 5).wrapped_step(Direction::Down, 8, 6),
            Position::new(4, 0)
        );
    }

    #[test]
    fn test_snake_creation() {
        let snake = Snake::new(Position::new(5, 5));
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), Position::new(5, 5));
        assert_eq!(snake.direction(), Direction::Right);
        assert_eq!(snake.target_length(), 1);
    }

    #[test]
    fn test_advance_moves_head_and_frees_tail() {
        let mut snake = Snake::new(Position::new(5, 5));
        let vacated = snake.advance(10, 10);

        assert_eq!(snake.head(), Position::new(6, 5));
        assert_eq!(snake.len(), 1);
        assert_eq!(vacated, Some(Position::new(5, 5)));
    }

    #[test]
    fn test_advance_after_grow_keeps_tail() {
        let mut snake = Snake::new(Position::new(5, 5));
        snake.grow();
        let vacated = snake.advance(10, 10);

        assert_eq!(snake.len(), 2);
        assert_eq!(snake.head(), Position::new(6, 5));
        assert_eq!(vacated, None);

        // Back at target length, the tail moves again
        let vacated = snake.advance(10, 10);
        assert_eq!(snake.len(), 2);
        assert_eq!(vacated, Some(Position::new(5, 5)));
    }

    #[test]
    fn test_reversal_is_ignored() {
        let mut snake = Snake::new(Position::new(5, 5));
        snake.set_direction(Direction::Left);
        snake.advance(10, 10);

        assert_eq!(snake.direction(), Direction::Right);
        assert_eq!(snake.head(), Position::new(6, 5));
    }

    #[test]
    fn test_last_valid_turn_wins() {
        let mut snake = Snake::new(Position::new(5, 5));
        snake.set_direction(Direction::Up);
        snake.set_direction(Direction::Left); // reversal, ignored
        snake.advance(10, 10);

        assert_eq!(snake.direction(), Direction::Up);
        assert_eq!(snake.head(), Position::new(5, 4));
    }

    #[test]
    fn test_turn_applies_on_advance() {
        let mut snake = Snake::new(Position::new(5, 5));
        snake.set_direction(Direction::Down);

        // Nothing changes until the snake moves
        assert_eq!(snake.direction(), Direction::Right);

        snake.advance(10, 10);
        assert_eq!(snake.direction(), Direction::Down);
        assert_eq!(snake.head(), Position::new(5, 6));
    }

    #[test]
    fn test_occupies() {
        let snake = coiled_snake(&[(5, 5), (4, 5), (3, 5)]);
        assert!(snake.occupies(Position::new(5, 5)));
        assert!(snake.occupies(Position::new(3, 5)));
        assert!(!snake.occupies(Position::new(6, 5)));
    }

    #[test]
    fn test_hit_itself_detects_coil() {
        // A 2x2 loop whose head has landed on a still-occupied segment
        let snake = coiled_snake(&[(5, 5), (5, 6), (6, 6), (6, 5), (5, 5)]);
        assert!(snake.hit_itself());
    }

    #[test]
    fn test_straight_body_never_hits() {
        let snake = coiled_snake(&[(5, 5), (4, 5), (3, 5), (2, 5)]);
        assert!(!snake.hit_itself());
    }

    #[test]
    fn test_short_bodies_cannot_hit() {
        // Duplicate cells, but a length-2 body is below the collision threshold
        let snake = coiled_snake(&[(5, 5), (5, 5)]);
        assert!(!snake.hit_itself());
    }

    #[test]
    fn test_reset_restores_initial_shape() {
        let mut snake = Snake::new(Position::new(5, 5));
        snake.grow();
        snake.grow();
        snake.set_direction(Direction::Down);
        snake.advance(10, 10);
        snake.advance(10, 10);

        snake.reset(Position::new(5, 5));
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), Position::new(5, 5));
        assert_eq!(snake.direction(), Direction::Right);
        assert_eq!(snake.target_length(), 1);
    }

    #[test]
    fn test_food_spawns_off_the_snake() {
        // Three of four cells occupied leaves exactly one choice
        let snake = coiled_snake(&[(0, 0), (1, 0), (0, 1)]);
        let mut rng = StdRng::seed_from_u64(7);
        let food = Food::spawn(&mut rng, 2, 2, &snake);
        assert_eq!(food.position, Position::new(1, 1));
    }

    #[test]
    fn test_relocate_avoids_the_snake() {
        let snake = coiled_snake(&[(1, 1), (0, 1), (1, 0)]);
        let mut rng = StdRng::seed_from_u64(42);
        let mut food = Food {
            position: Position::new(1, 1),
        };
        food.relocate(&mut rng, 2, 2, &snake);
        assert_eq!(food.position, Position::new(0, 0));
    }

    #[test]
    fn test_score_follows_target_length() {
        let snake = Snake::new(Position::new(5, 5));
        let food = Food {
            position: Position::new(0, 0),
        };
        let mut state = GameState::new(snake, food, 10, 10);
        assert_eq!(state.score(), 0);

        state.snake.grow();
        state.snake.grow();
        assert_eq!(state.score(), 2);
    }
}

use super::{
    config::GameConfig,
    state::{Food, GameState, Position, Snake},
};

/// What a single tick resolved to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickEvent {
    /// The snake moved without incident
    Moved,
    /// The head landed on the food; the target length has grown
    AteFood,
    /// The head ran into the body; the snake is back at the start
    SelfCollision {
        /// Score of the run that just ended
        final_score: u32,
    },
}

/// Information about a completed tick
#[derive(Debug, Clone, PartialEq)]
pub struct StepInfo {
    /// The event this tick resolved to
    pub event: TickEvent,
    /// Tail cell freed by the move, if the body did not grow
    pub vacated: Option<Position>,
}

/// The game engine that handles all game logic
pub struct GameEngine {
    config: GameConfig,
    rng: rand::rngs::ThreadRng,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            rng: rand::thread_rng(),
        }
    }

    /// Build the initial state: a length-1 snake at the grid center, food
    /// somewhere off the body
    pub fn reset(&mut self) -> GameState {
        let snake = Snake::new(self.start_position());
        let food = Food::spawn(
            &mut self.rng,
            self.config.grid_width,
            self.config.grid_height,
            &snake,
        );

        GameState::new(snake, food, self.config.grid_width, self.config.grid_height)
    }

    /// Execute one tick: move the snake, then resolve what the new head
    /// landed on
    pub fn step(&mut self, state: &mut GameState) -> StepInfo {
        let vacated = state.snake.advance(state.grid_width, state.grid_height);
        state.ticks += 1;

        // A head on both a body cell and the food is a collision, not a meal
        if state.snake.hit_itself() {
            let final_score = state.score();
            state.snake.reset(self.start_position());

            return StepInfo {
                event: TickEvent::SelfCollision { final_score },
                vacated,
            };
        }

        if state.snake.head() == state.food.position {
            state.snake.grow();

            let GameState {
                snake,
                food,
                grid_width,
                grid_height,
                ..
            } = state;
            food.relocate(&mut self.rng, *grid_width, *grid_height, snake);

            return StepInfo {
                event: TickEvent::AteFood,
                vacated,
            };
        }

        StepInfo {
            event: TickEvent::Moved,
            vacated,
        }
    }

    fn start_position(&self) -> Position {
        Position::new(
            (self.config.grid_width / 2) as i32,
            (self.config.grid_height / 2) as i32,
        )
    }
}

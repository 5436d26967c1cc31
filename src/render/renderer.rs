use std::collections::HashMap;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::game::{Food, GameState, Position, Snake};
use crate::metrics::GameMetrics;

/// A drawable entity: the grid cells it covers and how to paint them
pub trait CellSprite {
    fn cells(&self) -> Vec<Position>;
    fn symbol(&self) -> &'static str;
    fn color(&self) -> Color;
}

impl CellSprite for Snake {
    fn cells(&self) -> Vec<Position> {
        self.body().collect()
    }

    fn symbol(&self) -> &'static str {
        "□ "
    }

    fn color(&self) -> Color {
        Color::Green
    }
}

impl CellSprite for Food {
    fn cells(&self) -> Vec<Position> {
        vec![self.position]
    }

    fn symbol(&self) -> &'static str {
        "O "
    }

    fn color(&self) -> Color {
        Color::Red
    }
}

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, state: &GameState, metrics: &GameMetrics) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        // Render header with basic stats
        let stats = self.render_stats(chunks[0], state, metrics);
        frame.render_widget(stats, chunks[0]);

        // Center the game grid horizontally
        let game_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(10),
                Constraint::Percentage(80),
                Constraint::Percentage(10),
            ])
            .split(chunks[1])[1];

        let grid = self.render_grid(game_area, state);
        frame.render_widget(grid, game_area);

        // Render footer with controls
        let controls = self.render_controls(chunks[2]);
        frame.render_widget(controls, chunks[2]);
    }

    fn render_grid(&self, _area: Rect, state: &GameState) -> Paragraph<'_> {
        // Food first; the snake wins any overlapping cell
        let sprites: [&dyn CellSprite; 2] = [&state.food, &state.snake];
        let mut painted: HashMap<Position, (&'static str, Color)> = HashMap::new();
        for sprite in sprites {
            for cell in sprite.cells() {
                painted.insert(cell, (sprite.symbol(), sprite.color()));
            }
        }

        let head = state.snake.head();
        let mut lines = Vec::new();

        for y in 0..state.grid_height {
            let mut spans = Vec::new();

            for x in 0..state.grid_width {
                let pos = Position::new(x as i32, y as i32);

                let cell = if pos == head {
                    // Snake head - distinct color
                    Span::styled(
                        "■ ",
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    )
                } else if let Some(&(symbol, color)) = painted.get(&pos) {
                    Span::styled(symbol, Style::default().fg(color))
                } else {
                    // Empty cell
                    Span::styled(". ", Style::default().fg(Color::DarkGray))
                };

                spans.push(cell);
            }

            lines.push(Line::from(spans));
        }

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(" Torus Snake "),
            )
            .alignment(Alignment::Center)
    }

    fn render_stats(&self, _area: Rect, state: &GameState, metrics: &GameMetrics) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                state.score().to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Length: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                state.snake.len().to_string(),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled("Best: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                metrics.high_score.to_string(),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.format_time(), Style::default().fg(Color::White)),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_controls(&self, _area: Rect) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snake_sprite_covers_the_body() {
        let snake = Snake::new(Position::new(2, 2));
        assert_eq!(snake.cells(), vec![Position::new(2, 2)]);
    }

    #[test]
    fn test_sprites_paint_differently() {
        let snake = Snake::new(Position::new(0, 0));
        let food = Food {
            position: Position::new(3, 4),
        };

        assert_eq!(food.cells(), vec![Position::new(3, 4)]);
        assert_ne!(snake.color(), food.color());
        assert_ne!(snake.symbol(), food.symbol());
    }
}

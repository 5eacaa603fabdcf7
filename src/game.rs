use std::{process::exit, thread::sleep, time::Duration};

use crate::food::Food;
use crate::snake::{Direction::*, MoveRecord, Snake};
use crate::term::TermManager;
use crate::{Coords, Position, TermInt, GRID_COLS, GRID_ROWS, GRID_SIZE};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use crossterm::style::Color;
use rand::{thread_rng, Rng};

const TICK_INTERVAL_MS: u64 = 5;
const TICKS_PER_STEP: u64 = 10; // 20 game steps per second

const BORDER_COLOR: Color = Color::Rgb { r: 93, g: 216, b: 228 };
const APPLE_COLOR: Color = Color::Rgb { r: 255, g: 0, b: 0 };
const SNAKE_COLOR: Color = Color::Rgb { r: 0, g: 255, b: 0 };
const SNAKE_HEAD_COLOR: Color = Color::Rgb { r: 50, g: 255, b: 50 };

pub struct SnakeGame {
    paused: bool,
    term: TermManager,
    snake: Snake,
    food: Food,
}

impl SnakeGame {
    pub fn new() -> Self {
        let snake = Snake::new();
        let mut food = Food::new((0, 0), APPLE_COLOR);
        food.relocate(&mut thread_rng());

        SnakeGame {
            paused: false,
            term: TermManager::new(GRID_COLS as TermInt, GRID_ROWS as TermInt),
            snake,
            food,
        }
    }

    pub fn initialize(&mut self) {
        self.term.setup();
    }

    pub fn show_intro(&mut self) {
        let lines = &[
            "Arrow keys or WASD to move",
            "Esc to pause",
            "CTRL+C to quit",
            "",
            "Press any key to begin",
        ];

        self.term.show_message(lines);

        if is_ctrl_c(&self.term.read_key_blocking()) {
            self.clean_exit()
        }

        self.term.hide_message();
    }

    pub fn play(&mut self) {
        let mut ticks_until_step = TICKS_PER_STEP;

        self.redraw_board();

        loop {
            sleep(Duration::from_millis(TICK_INTERVAL_MS));

            for key_ev in self.term.read_key_events_queue() {
                match &key_ev {
                    ev if is_ctrl_c(ev) => self.clean_exit(),
                    KeyEvent { code, modifiers: _ } => match code {
                        KeyCode::Char('w') | KeyCode::Up => self.snake.queue_direction(Up),
                        KeyCode::Char('a') | KeyCode::Left => self.snake.queue_direction(Left),
                        KeyCode::Char('s') | KeyCode::Down => self.snake.queue_direction(Down),
                        KeyCode::Char('d') | KeyCode::Right => self.snake.queue_direction(Right),
                        KeyCode::Esc => self.toggle_pause(),
                        _ => {}
                    },
                }
            }

            if self.paused { continue; }

            // Input is drained every tick, but the game only steps on every
            // TICKS_PER_STEP-th one.
            ticks_until_step -= 1;
            if ticks_until_step > 0 { continue; }
            ticks_until_step = TICKS_PER_STEP;

            self.snake.update_direction();
            let moved = self.snake.move_step();

            let mut rng = thread_rng();
            let ate = resolve_food_collision(&mut self.snake, &mut self.food, &mut rng);

            if self.snake.hits_self() {
                self.snake.reset();
                self.food.relocate(&mut rng);
                self.redraw_board();
                continue;
            }

            self.print_snake_update(&moved);
            if ate {
                self.print_food();
            }
        } // Game loop
    }

    ///////////////////////////////////////////////////////////////////////////

    fn clean_exit(&mut self) {
        self.term.restore();
        exit(0);
    }

    fn redraw_board(&mut self) {
        self.term.clear();
        self.term.draw_borders(BORDER_COLOR);

        for (i, pos) in self.snake.body().iter().enumerate() {
            let color = if i == 0 { SNAKE_HEAD_COLOR } else { SNAKE_COLOR };
            self.term.paint_cell(cell_of(*pos), color);
        }

        self.print_food();
    }

    fn print_food(&mut self) {
        self.term.paint_cell(cell_of(self.food.position()), self.food.color());
        self.term.flush();
    }

    fn print_snake_update(&mut self, moved: &MoveRecord) {
        self.term.paint_cell(cell_of(moved.new_head), SNAKE_HEAD_COLOR);
        self.term.paint_cell(cell_of(moved.old_head), SNAKE_COLOR);

        // Erasing last keeps a length-1 snake correct (its old head is also
        // the trimmed tail). When the head re-enters the vacated tail cell
        // the erase must be skipped instead.
        if let Some(old_tail) = moved.old_tail {
            if old_tail != moved.new_head {
                self.term.erase_cell(cell_of(old_tail));
            }
        }

        self.term.flush();
    }

    fn toggle_pause(&mut self) {
        if !self.paused {
            self.term.show_message(&["Paused", "Press Esc to resume", "or CTRL+C to quit"]);
        } else {
            self.term.hide_message();
        }

        self.paused = !self.paused;
    }
}

/// Handles the head landing on the food: the snake's target length goes up
/// by one and the food re-rolls until it lands on a free cell. Returns
/// whether anything was eaten.
fn resolve_food_collision<R: Rng>(snake: &mut Snake, food: &mut Food, rng: &mut R) -> bool {
    if snake.head() != food.position() {
        return false;
    }

    snake.grow();
    food.relocate(rng);
    while snake.occupies(food.position()) {
        food.relocate(rng);
    }

    true
}

fn cell_of(pos: Position) -> Coords {
    ((pos.0 / GRID_SIZE) as TermInt, (pos.1 / GRID_SIZE) as TermInt)
}

fn is_ctrl_c(ev: &KeyEvent) -> bool {
    matches!(ev, KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL })
}

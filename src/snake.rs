use crate::{PixelInt, Position, GRID_COLS, GRID_ROWS, GRID_SIZE, SCREEN_HEIGHT, SCREEN_WIDTH};
use Direction::*;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn delta(&self) -> (PixelInt, PixelInt) {
        match self {
            Up => (0, -1),
            Down => (0, 1),
            Left => (-1, 0),
            Right => (1, 0),
        }
    }
}

/// What a single step changed on the board. `old_tail` is the cell the
/// redraw must erase; it is `None` on a tick where the snake grew.
pub struct MoveRecord {
    pub new_head: Position,
    pub old_head: Position,
    pub old_tail: Option<Position>,
}

pub struct Snake {
    positions: Vec<Position>,
    length: usize,
    direction: Direction,
    pending: Option<Direction>,
}

impl Snake {
    pub fn new() -> Self {
        Snake {
            positions: vec![center()],
            length: 1,
            direction: Right,
            pending: None,
        }
    }

    pub fn body(&self) -> &[Position] {
        &self.positions
    }

    pub fn head(&self) -> Position {
        self.positions[0]
    }

    /// Queues a direction change for the next step. Reversing into the
    /// snake's own neck is ignored; a later key press in the same tick
    /// overwrites an earlier one.
    pub fn queue_direction(&mut self, new_direction: Direction) {
        match (new_direction, self.direction) {
            (Up, Down) | (Down, Up) | (Right, Left) | (Left, Right) => {}
            _ => self.pending = Some(new_direction),
        };
    }

    pub fn update_direction(&mut self) {
        if let Some(dir) = self.pending.take() {
            self.direction = dir;
        }
    }

    pub fn move_step(&mut self) -> MoveRecord {
        let old_head = self.head();
        let (dx, dy) = self.direction.delta();

        // Toroidal board: wrap each axis independently.
        let new_head = (
            (old_head.0 + dx * GRID_SIZE).rem_euclid(SCREEN_WIDTH),
            (old_head.1 + dy * GRID_SIZE).rem_euclid(SCREEN_HEIGHT),
        );

        self.positions.insert(0, new_head);

        let old_tail = if self.positions.len() > self.length {
            self.positions.pop()
        } else {
            None
        };

        MoveRecord { new_head, old_head, old_tail }
    }

    pub fn occupies(&self, pos: Position) -> bool {
        self.positions.contains(&pos)
    }

    // Runs against the already-trimmed body, so stepping onto the cell the
    // tail vacated this same tick is not a collision.
    pub fn hits_self(&self) -> bool {
        self.positions[1..].contains(&self.positions[0])
    }

    pub fn grow(&mut self) {
        self.length += 1;
    }

    pub fn reset(&mut self) {
        *self = Snake::new();
    }
}

fn center() -> Position {
    ((GRID_COLS / 2) * GRID_SIZE, (GRID_ROWS / 2) * GRID_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snake_at(positions: Vec<Position>, direction: Direction) -> Snake {
        let length = positions.len();
        Snake { positions, length, direction, pending: None }
    }

    #[test]
    fn moves_one_cell_in_its_direction() {
        let mut snake = snake_at(vec![(300, 240)], Right);
        let rec = snake.move_step();
        assert_eq!(rec.new_head, (320, 240));
        assert_eq!(snake.head(), (320, 240));
    }

    #[test]
    fn wraps_around_all_four_edges() {
        let mut snake = snake_at(vec![(620, 240)], Right);
        assert_eq!(snake.move_step().new_head, (0, 240));

        let mut snake = snake_at(vec![(0, 240)], Left);
        assert_eq!(snake.move_step().new_head, (620, 240));

        let mut snake = snake_at(vec![(320, 0)], Up);
        assert_eq!(snake.move_step().new_head, (320, 460));

        let mut snake = snake_at(vec![(320, 460)], Down);
        assert_eq!(snake.move_step().new_head, (320, 0));
    }

    #[test]
    fn reversal_is_ignored() {
        let mut snake = snake_at(vec![(320, 240)], Right);
        snake.queue_direction(Left);
        snake.update_direction();
        assert_eq!(snake.direction, Right);

        let mut snake = snake_at(vec![(320, 240)], Up);
        snake.queue_direction(Down);
        snake.update_direction();
        assert_eq!(snake.direction, Up);
    }

    #[test]
    fn queued_turn_applies_on_update() {
        let mut snake = snake_at(vec![(320, 240)], Right);
        snake.queue_direction(Up);
        assert_eq!(snake.direction, Right);
        snake.update_direction();
        assert_eq!(snake.direction, Up);
        assert!(snake.pending.is_none());

        // A second press in the same tick wins over the first.
        snake.queue_direction(Left);
        snake.queue_direction(Right);
        snake.update_direction();
        assert_eq!(snake.direction, Right);
    }

    #[test]
    fn body_never_exceeds_target_length() {
        let mut snake = Snake::new();
        for _ in 0..3 {
            snake.grow();
        }
        for step in 0..10 {
            snake.move_step();
            assert!(snake.body().len() <= snake.length);
            if step >= 3 {
                assert_eq!(snake.body().len(), snake.length);
            }
        }
        assert_eq!(snake.body().len(), 4);
    }

    #[test]
    fn tail_is_reported_only_when_trimmed() {
        let mut snake = snake_at(vec![(100, 100)], Right);
        let rec = snake.move_step();
        assert_eq!(rec.old_tail, Some((100, 100)));

        snake.grow();
        let rec = snake.move_step();
        assert!(rec.old_tail.is_none());
        assert_eq!(snake.body().len(), 2);
    }

    #[test]
    fn head_entering_a_body_cell_is_a_collision() {
        let mut snake = snake_at(vec![(100, 100), (80, 100), (60, 100)], Left);
        snake.move_step();
        assert_eq!(snake.head(), (80, 100));
        assert!(snake.hits_self());

        snake.reset();
        assert_eq!(snake.body(), &[(320, 240)]);
        assert_eq!(snake.length, 1);
        assert_eq!(snake.direction, Right);
        assert!(snake.pending.is_none());
    }

    #[test]
    fn stepping_onto_the_vacated_tail_is_not_a_collision() {
        // Length-4 snake closed in a square; the head enters the exact cell
        // the tail leaves this same tick.
        let mut snake = snake_at(
            vec![(100, 100), (120, 100), (120, 120), (100, 120)],
            Down,
        );
        let rec = snake.move_step();
        assert_eq!(rec.new_head, (100, 120));
        assert_eq!(rec.old_tail, Some((100, 120)));
        assert!(!snake.hits_self());
    }
}

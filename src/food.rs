use crate::{Position, GRID_COLS, GRID_ROWS, GRID_SIZE};

use crossterm::style::Color;
use rand::Rng;

pub struct Food {
    position: Position,
    color: Color,
}

impl Food {
    pub fn new(position: Position, color: Color) -> Self {
        Food { position, color }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Moves the food to a uniformly random grid cell. The snake's body is
    /// deliberately not checked here; the caller re-rolls while the cell is
    /// occupied.
    pub fn relocate<R: Rng>(&mut self, rng: &mut R) {
        let x = rng.gen_range(0..GRID_COLS) * GRID_SIZE;
        let y = rng.gen_range(0..GRID_ROWS) * GRID_SIZE;
        self.position = (x, y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{SCREEN_HEIGHT, SCREEN_WIDTH};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn relocation_stays_grid_aligned_and_in_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut food = Food::new((0, 0), Color::Red);

        for _ in 0..200 {
            food.relocate(&mut rng);
            let (x, y) = food.position();
            assert!(x >= 0 && x < SCREEN_WIDTH);
            assert!(y >= 0 && y < SCREEN_HEIGHT);
            assert_eq!(x % GRID_SIZE, 0);
            assert_eq!(y % GRID_SIZE, 0);
        }
    }
}

mod food;
mod game;
mod snake;
mod term;

pub type PixelInt = i32;
pub type Position = (PixelInt, PixelInt);

pub type TermInt = u16;
pub type Coords = (TermInt, TermInt);

// Screen geometry in logical pixels. Every entity position is a multiple
// of GRID_SIZE on both axes.
pub const SCREEN_WIDTH: PixelInt = 640;
pub const SCREEN_HEIGHT: PixelInt = 480;
pub const GRID_SIZE: PixelInt = 20;
pub const GRID_COLS: PixelInt = SCREEN_WIDTH / GRID_SIZE;
pub const GRID_ROWS: PixelInt = SCREEN_HEIGHT / GRID_SIZE;

fn main() {
    let mut game = game::SnakeGame::new();
    game.initialize();
    game.show_intro();

    // Runs until the user quits with CTRL+C; a self-collision resets the
    // snake in place instead of ending the game.
    game.play();
}

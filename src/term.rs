use crate::{Coords, TermInt};
use std::{io::{stdout, Stdout, Write}, process::exit, time::Duration};

use crossterm::event::{poll, read, Event, KeyEvent};
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::style::Color;
use crossterm::{cursor, execute, queue, style, terminal};

// Terminal characters are roughly twice as tall as they are wide, so one
// board cell is rendered as two characters side by side.
const CELL_CHARS: TermInt = 2;

pub struct TermManager {
    width: TermInt,
    height: TermInt,
    board_width: TermInt,
    board_height: TermInt,
    stdout: Stdout,
    screen: Vec<(char, Color)>,
    current_msg: Option<Message>,
}

struct Message {
    top_left: Coords,
    width: TermInt,
    height: TermInt,
}

impl TermManager {
    pub fn new(board_cols: TermInt, board_rows: TermInt) -> Self {
        let (width, height) = terminal::size().expect("Error reading size.");
        let board_width = board_cols * CELL_CHARS + 2;
        let board_height = board_rows + 2;
        let stdout = stdout();
        let screen = vec![(' ', Color::Reset); width as usize * height as usize];
        TermManager { width, height, board_width, board_height, stdout, screen, current_msg: None }
    }

    pub fn setup(&mut self) {
        if self.width < self.board_width || self.height < self.board_height {
            eprintln!(
                "Terminal too small: the board needs {}x{} characters, found {}x{}.",
                self.board_width, self.board_height, self.width, self.height
            );
            exit(1);
        }

        execute!(self.stdout, EnterAlternateScreen).expect("Error entering alt screen");
        self.set_raw_mode(true);
        self.set_cursor_visibility(false);
        self.set_cursor_blink(false);
    }

    pub fn restore(&mut self) {
        self.set_raw_mode(false);
        self.set_cursor_visibility(true);
        self.set_cursor_blink(true);
        execute!(self.stdout, LeaveAlternateScreen).expect("Error leaving alt screen");
    }

    pub fn read_key_blocking(&self) -> KeyEvent {
        loop {
            if let Event::Key(ev) = read().unwrap() {
                return ev;
            }
        }
    }

    pub fn read_key_events_queue(&self) -> Vec<KeyEvent> {
        let mut events = vec![];

        while poll(Duration::from_millis(1)).unwrap() {
            if let Event::Key(ev) = read().unwrap() {
                events.push(ev);
            }
        }

        events
    }

    pub fn draw_borders(&mut self, color: Color) {
        let end_x = self.board_width - 1;
        let end_y = self.board_height - 1;

        for x in 0..self.board_width {
            let ch = if x == 0 || x == end_x { '+' } else { '-' };
            self.print_at((x, 0), ch, color);
            self.print_at((x, end_y), ch, color);
        }

        for y in 1..end_y {
            self.print_at((0, y), '|', color);
            self.print_at((end_x, y), '|', color);
        }

        self.flush();
    }

    pub fn paint_cell(&mut self, cell: Coords, color: Color) {
        let x = 1 + cell.0 * CELL_CHARS;
        let y = 1 + cell.1;
        for i in 0..CELL_CHARS {
            self.print_at((x + i, y), '█', color);
        }
    }

    pub fn erase_cell(&mut self, cell: Coords) {
        let x = 1 + cell.0 * CELL_CHARS;
        let y = 1 + cell.1;
        for i in 0..CELL_CHARS {
            self.print_at((x + i, y), ' ', Color::Reset);
        }
    }

    pub fn show_message(&mut self, lines: &[&str]) {
        if self.has_message() {
            self.hide_message();
        }

        let msg_height = (lines.len() + 2) as TermInt;
        let msg_width = (lines.iter().map(|x| x.len()).max().unwrap() + 2) as TermInt;
        let center = (self.board_width / 2, self.board_height / 2);
        let top_left = (center.0 - msg_width / 2, center.1 - msg_height / 2);

        // Print the top and bottom empty lines
        for y in [top_left.1, top_left.1 + msg_height - 1].iter() {
            for x_diff in 0..msg_width {
                self.print_at_no_save((top_left.0 + x_diff, *y), ' ', Color::Reset);
            }
        }

        // Print the message lines
        for (i, line) in lines.iter().enumerate() {
            let padded_line = format!("{line: ^width$}", line = line, width = msg_width as usize);
            let y = top_left.1 + i as TermInt + 1;
            for (x_diff, ch) in padded_line.char_indices() {
                self.print_at_no_save((top_left.0 + x_diff as TermInt, y), ch, Color::Reset);
            }
        }

        self.current_msg = Some(Message::new(msg_width, msg_height, top_left));
        self.flush();
    }

    pub fn hide_message(&mut self) {
        if !self.has_message() {
            return;
        }

        let msg = self.current_msg.take().unwrap(); // take() sets current_msg to None
        let top_left = msg.top_left();

        // Restore the content from the screen buffer
        for y_diff in 0..msg.height() {
            for x_diff in 0..msg.width() {
                let (x, y) = (top_left.0 + x_diff, top_left.1 + y_diff);
                let (ch, color) = self.screen[self.width as usize * y as usize + x as usize];
                self.print_at_no_save((x, y), ch, color);
            }
        }

        self.flush();
    }

    pub fn clear(&mut self) {
        execute!(self.stdout, terminal::Clear(ClearType::All)).expect("Error clearing.");
        self.screen = vec![(' ', Color::Reset); self.width as usize * self.height as usize]
    }

    pub fn flush(&mut self) {
        self.stdout.flush().expect("Error flushing.");
    }

    pub fn has_message(&self) -> bool {
        self.current_msg.is_some()
    }

    ///////////////////////////////////////////////////////////////////////////

    fn print_at(&mut self, pos: Coords, ch: char, color: Color) {
        queue!(
            self.stdout,
            cursor::MoveTo(pos.0, pos.1),
            style::PrintStyledContent(style::style(ch).with(color))
        )
        .unwrap();
        self.screen[self.width as usize * pos.1 as usize + pos.0 as usize] = (ch, color);
    }

    fn print_at_no_save(&mut self, pos: Coords, ch: char, color: Color) {
        // To be used for printing messages, where we don't wanna overwrite our
        // local buffer to restore it when the message is hidden
        queue!(
            self.stdout,
            cursor::MoveTo(pos.0, pos.1),
            style::PrintStyledContent(style::style(ch).with(color))
        )
        .unwrap();
    }

    fn set_raw_mode(&self, option: bool) {
        let res = if option {
            terminal::enable_raw_mode()
        } else {
            terminal::disable_raw_mode()
        };

        res.expect("Error setting raw mode.");
    }

    fn set_cursor_blink(&mut self, option: bool) {
        let res = if option {
            execute!(self.stdout, cursor::EnableBlinking)
        } else {
            execute!(self.stdout, cursor::DisableBlinking)
        };

        res.expect("Error setting cursor blink.");
    }

    fn set_cursor_visibility(&mut self, option: bool) {
        let res = if option {
            execute!(self.stdout, cursor::Show)
        } else {
            execute!(self.stdout, cursor::Hide)
        };

        res.expect("Error setting cursor visibility.");
    }
}

impl Message {
    pub fn new(width: TermInt, height: TermInt, top_left: Coords) -> Self {
        Message { width, height, top_left }
    }

    pub fn width(&self) -> TermInt {
        self.width
    }

    pub fn height(&self) -> TermInt {
        self.height
    }

    pub fn top_left(&self) -> Coords {
        self.top_left
    }
}

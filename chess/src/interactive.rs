use crate::config::PlayConfig;
use anyhow::Result;
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        MouseButton, MouseEvent, MouseEventKind,
    },
    style::{Color as TermColor, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, Clear, ClearType},
    ExecutableCommand,
};
use skak_agents::{play_ai_move, Agent, RandomAgent};
use skak_core::{Color, GameState, Square};
use std::io::{self, Write};

/// Terminal row of the top rank and column of the first file.
const BOARD_TOP: u16 = 5;
const BOARD_LEFT: u16 = 3;

pub struct InteractiveGame {
    state: GameState,
    config: PlayConfig,
    agent: RandomAgent,
    cursor_pos: (u8, u8), // (file, rank) in 0-7 range
    message: String,
}

impl InteractiveGame {
    pub fn new(config: PlayConfig) -> Self {
        let agent = match config.seed {
            Some(seed) => RandomAgent::with_seed(seed),
            None => RandomAgent::new(),
        };

        Self {
            state: GameState::new(),
            config,
            agent,
            cursor_pos: (4, config.human_color().pawn_rank().index()),
            message: String::from("Click a piece or use hjkl + Enter; r resets, q quits"),
        }
    }

    pub fn run(&mut self) -> Result<()> {
        // Setup terminal
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(Hide)?;
        stdout.execute(EnableMouseCapture)?;
        stdout.execute(Clear(ClearType::All))?;

        let result = self.game_loop();

        // Cleanup
        stdout.execute(DisableMouseCapture)?;
        stdout.execute(Show)?;
        terminal::disable_raw_mode()?;
        stdout.execute(Clear(ClearType::All))?;
        stdout.execute(MoveTo(0, 0))?;

        result
    }

    fn game_loop(&mut self) -> Result<()> {
        loop {
            // The computer moves before any further input is read.
            if self.state.side_to_move() == self.config.ai_color {
                self.ai_move()?;
            }

            self.draw_board()?;

            match event::read()? {
                Event::Key(KeyEvent {
                    code,
                    kind: KeyEventKind::Press,
                    ..
                }) => match code {
                    KeyCode::Char('q') | KeyCode::Esc => break,
                    KeyCode::Char('r') => self.new_game(),
                    KeyCode::Char('h') | KeyCode::Left => self.move_cursor(-1, 0),
                    KeyCode::Char('j') | KeyCode::Down => self.move_cursor(0, -1),
                    KeyCode::Char('k') | KeyCode::Up => self.move_cursor(0, 1),
                    KeyCode::Char('l') | KeyCode::Right => self.move_cursor(1, 0),
                    KeyCode::Enter | KeyCode::Char(' ') => {
                        let (file, rank) = self.cursor_pos;
                        if let Ok(square) = Square::from_coords(file, rank) {
                            self.click(square);
                        }
                    }
                    _ => {}
                },
                Event::Mouse(MouseEvent {
                    kind: MouseEventKind::Down(MouseButton::Left),
                    column,
                    row,
                    ..
                }) => {
                    if let Some(square) = self.square_at(column, row) {
                        self.cursor_pos = (square.file().index(), square.rank().index());
                        self.click(square);
                    }
                }
                _ => {}
            }
        }

        Ok(())
    }

    /// Maps a terminal cell to the board square drawn there.
    fn square_at(&self, column: u16, row: u16) -> Option<Square> {
        let column = u8::try_from(column.checked_sub(BOARD_LEFT)? / 2).ok()?;
        let line = u8::try_from(row.checked_sub(BOARD_TOP)?).ok()?;
        if column > 7 || line > 7 {
            return None;
        }
        let (file, rank) = if self.flipped() {
            (7 - column, line)
        } else {
            (column, 7 - line)
        };
        Square::from_coords(file, rank).ok()
    }

    /// The board is drawn from the human's side.
    fn flipped(&self) -> bool {
        self.config.human_color() == Color::Black
    }

    fn move_cursor(&mut self, dx: i8, dy: i8) {
        let (dx, dy) = if self.flipped() { (-dx, -dy) } else { (dx, dy) };
        let new_file = self.cursor_pos.0 as i8 + dx;
        let new_rank = self.cursor_pos.1 as i8 + dy;

        if (0..8).contains(&new_file) && (0..8).contains(&new_rank) {
            self.cursor_pos = (new_file as u8, new_rank as u8);
        }
    }

    /// First click selects, second click moves; clicking elsewhere reselects
    /// or clears the selection.
    fn click(&mut self, square: Square) {
        if self.state.selected_square().is_some() {
            if let Some(record) = self.state.attempt_move(square) {
                self.message = if record.promoted {
                    format!("Moved {} and promoted to Queen", record.mv)
                } else {
                    format!("Moved {}", record.mv)
                };
                return;
            }
        }

        self.state.select(square);
        self.message = match self.state.piece_at(square) {
            Some(piece) if self.state.selected_square() == Some(square) => {
                format!("Selected {} at {}", piece.piece_type.name(), square)
            }
            _ => String::new(),
        };
    }

    fn ai_move(&mut self) -> Result<()> {
        let record = play_ai_move(&mut self.state, &mut self.agent)?;
        self.message = format!(
            "{} ({}) played {}",
            record.piece.color,
            self.agent.name(),
            record.mv
        );
        Ok(())
    }

    fn new_game(&mut self) {
        self.state.reset();
        self.cursor_pos = (4, self.config.human_color().pawn_rank().index());
        self.message = String::from("New game started!");
    }

    fn draw_board(&self) -> io::Result<()> {
        let mut stdout = io::stdout();
        stdout.execute(MoveTo(0, 0))?;
        stdout.execute(Clear(ClearType::FromCursorDown))?;

        // Title
        println!("skak - you play {}\r", self.config.human_color());
        println!("Click or Enter=select/move, hjkl=cursor, r=reset, q=quit\r");
        println!("\r");

        let files: String = (0..8u8)
            .map(|i| if self.flipped() { 7 - i } else { i })
            .map(|f| format!("{} ", (b'a' + f) as char))
            .collect();

        println!("   {}\r", files);
        println!(" ┌─────────────────┐\r");

        let selected_moves = self.state.selected_moves();
        let checked_king = self.state.checked_king();

        for line in 0..8u8 {
            let rank_idx = if self.flipped() { line } else { 7 - line };
            print!("{}│ ", rank_idx + 1);

            for column in 0..8u8 {
                let file_idx = if self.flipped() { 7 - column } else { column };
                let Ok(square) = Square::from_coords(file_idx, rank_idx) else {
                    continue;
                };

                let background = if self.cursor_pos == (file_idx, rank_idx) {
                    TermColor::Yellow
                } else if self.state.selected_square() == Some(square) {
                    TermColor::Green
                } else if checked_king == Some(square) {
                    TermColor::Red
                } else if selected_moves.contains(square) {
                    TermColor::Blue
                } else if (file_idx + rank_idx) % 2 == 0 {
                    TermColor::DarkGrey
                } else {
                    TermColor::Black
                };
                stdout.execute(SetBackgroundColor(background))?;

                if let Some(piece) = self.state.piece_at(square) {
                    let foreground = match piece.color {
                        Color::White => TermColor::White,
                        Color::Black => TermColor::Magenta,
                    };
                    stdout.execute(SetForegroundColor(foreground))?;
                    print!("{} ", piece.symbol());
                } else {
                    print!("  ");
                }

                stdout.execute(ResetColor)?;
            }

            println!("│{}\r", rank_idx + 1);
        }

        println!(" └─────────────────┘\r");
        println!("   {}\r", files);
        println!("\r");

        // Game info
        let mover = self.state.side_to_move();
        let who = if mover == self.config.ai_color {
            format!("{} (AI)", mover)
        } else {
            mover.to_string()
        };
        let check = if checked_king.is_some() { " - Check!" } else { "" };
        println!("{} to move{}\r", who, check);

        // Status message
        println!("\r");
        println!("{}\r", self.message);

        stdout.flush()?;
        Ok(())
    }
}

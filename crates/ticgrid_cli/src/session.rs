//! Interactive game session: alternates the human and the computer.

use crate::cli::Cli;
use crate::input;
use crate::render;
use anyhow::{Result, anyhow};
use ticgrid::{Board, BoardConfig, Move, MoveSource, Outcome, Player, Position, RandomSource};
use tracing::{debug, info};

/// One interactive game: the board, the human's mark, and the computer.
///
/// The session owns the mutable board and borrows nothing global; all
/// state flows through the engine's public API.
pub struct GameSession {
    board: Board,
    human: Player,
    computer: RandomSource,
}

impl GameSession {
    /// Builds a session from CLI arguments, prompting for a symbol when
    /// none was given.
    pub fn new(cli: &Cli) -> Result<Self> {
        let symbol = match cli.symbol.as_deref() {
            Some("X") => "X".to_string(),
            Some("O") => "O".to_string(),
            Some(other) => return Err(anyhow!("symbol must be X or O, got {other:?}")),
            None => input::read_choice("X or O? ", "Please enter again: X or O? ", &["X", "O"])?,
        };
        let computer_symbol = if symbol == "X" { "O" } else { "X" };

        let config = BoardConfig::new(cli.size, symbol, computer_symbol)?;
        let computer = match cli.seed {
            Some(seed) => RandomSource::with_seed("Computer", seed),
            None => RandomSource::new("Computer"),
        };
        info!(size = cli.size, seed = ?cli.seed, "session configured");

        Ok(Self {
            board: Board::new(config),
            human: Player::A,
            computer,
        })
    }

    /// Runs the game loop until the board reaches a terminal state.
    pub fn run(&mut self) -> Result<()> {
        let mut round = 0;
        loop {
            round += 1;
            println!("############ Round {round} ############\n");
            println!("{}", render::render(&self.board));

            self.human_turn()?;
            println!(" Move placed!\n");
            println!("{}", render::render(&self.board));
            if self.announce_if_over() {
                return Ok(());
            }

            self.computer_turn()?;
            println!(" Computer move registered\n");
            println!("{}", render::render(&self.board));
            if self.announce_if_over() {
                return Ok(());
            }
        }
    }

    /// Prompts until the human enters and confirms a legal move.
    fn human_turn(&mut self) -> Result<()> {
        let symbol = self.board.config().symbol(self.human).to_string();
        println!("Player {symbol} turn\n");

        loop {
            let row_text = input::read_line("What row? ")?;
            let col_text = input::read_line("What col? ")?;

            let confirm = input::read_choice(
                &format!(" Place {symbol} at row={row_text} and col={col_text} [y/n]? "),
                " Enter again [y/n]? ",
                &["y", "n"],
            )?;
            if confirm == "n" {
                println!("Re-enter move to play...");
                continue;
            }

            let (Ok(row), Ok(col)) = (row_text.parse::<usize>(), col_text.parse::<usize>()) else {
                self.print_invalid_move();
                continue;
            };

            let action = Move::new(self.human, Position::new(row, col));
            if !self.board.is_legal(action) {
                self.print_invalid_move();
                continue;
            }

            self.board.apply_move(action)?;
            debug!(row, col, "human move applied");
            return Ok(());
        }
    }

    /// Lets the computer pick and apply a random legal move.
    fn computer_turn(&mut self) -> Result<()> {
        let legal = self.board.legal_moves();
        let position = self.computer.choose_move(&legal)?;
        self.board
            .apply_move(Move::new(self.human.opponent(), position))?;
        debug!(%position, "computer move applied");
        Ok(())
    }

    fn print_invalid_move(&self) {
        println!(
            "Invalid value. Row and col should be between 0 and {} and should not occupy already placed squares",
            self.board.size() - 1
        );
    }

    /// Announces the result if the game is over; returns true when it is.
    fn announce_if_over(&self) -> bool {
        match self.board.evaluate() {
            Outcome::InProgress => false,
            Outcome::Won(player) if player == self.human => {
                println!("Player wins!");
                true
            }
            Outcome::Won(_) => {
                println!("Computer wins!");
                true
            }
            Outcome::Draw => {
                println!("Game ends in a draw");
                true
            }
        }
    }
}

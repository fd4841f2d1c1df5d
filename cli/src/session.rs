use std::io::{self, BufRead, Write};

use common::config::GameConfig;
use common::games::tictactoe::{
    GameStatus, MoveError, PlayerSlot, Position, SaveError, ScoreEntry, Scoreboard,
    TicTacToeGameState, delete_save, load_game, save_game,
};
use common::log;
use crossterm::style::Color;
use thiserror::Error;

use crate::input::{is_yes, parse_move};
use crate::mode::GameMode;
use crate::render::Palette;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Save file error: {0}")]
    Save(#[from] SaveError),
    #[error("Rejected move: {0}")]
    Move(#[from] MoveError),
    #[error("Computer was asked to move on a finished board")]
    NoComputerMove,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    Finished(GameStatus),
    Saved,
    /// Input ended before the game did.
    Aborted,
}

/// One interactive game over a line-oriented input and a text output.
pub struct GameSession<R, W> {
    input: R,
    output: W,
    config: GameConfig,
    palette: Palette,
    scoreboard: Scoreboard,
}

impl<R: BufRead, W: Write> GameSession<R, W> {
    pub fn new(input: R, output: W, config: GameConfig) -> Self {
        let palette = Palette::new(config.colored_output);
        let scoreboard = Scoreboard::new(config.scoreboard_file.clone());
        Self {
            input,
            output,
            config,
            palette,
            scoreboard,
        }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Plays until the game ends, is saved, or input runs out, then prints
    /// the scoreboard.
    pub fn run(&mut self, mode: Option<GameMode>) -> Result<SessionOutcome, SessionError> {
        let outcome = self.play(mode)?;
        log!("Session ended: {:?}", outcome);
        self.show_scoreboard()?;
        Ok(outcome)
    }

    fn play(&mut self, mode: Option<GameMode>) -> Result<SessionOutcome, SessionError> {
        let welcome = self.palette.paint("Welcome to Tic Tac Toe!", Color::Yellow);
        writeln!(self.output, "{}", welcome)?;

        let mode = match mode {
            Some(mode) => mode,
            None => {
                writeln!(self.output, "1. Player vs Player")?;
                writeln!(self.output, "2. Player vs AI")?;
                let Some(choice) = self.prompt("Choose mode (1/2): ")? else {
                    return Ok(SessionOutcome::Aborted);
                };
                GameMode::from_menu_choice(&choice)
            }
        };

        let Some(mut state) = self.start_state(mode)? else {
            return Ok(SessionOutcome::Aborted);
        };
        log!(
            "Game started: vs_computer={}, Player {} to move",
            state.vs_computer,
            state.current_player.number()
        );

        loop {
            let board = self.palette.board(&state.board, state.last_move);
            write!(self.output, "{}", board)?;

            let position = if state.is_computer_turn() {
                writeln!(self.output, "AI is making a move...")?;
                state.computer_move().ok_or(SessionError::NoComputerMove)?
            } else {
                match self.read_human_move(&state)? {
                    Some(position) => position,
                    None => return Ok(SessionOutcome::Aborted),
                }
            };

            let mover = state.current_player;
            state.place_mark(position)?;
            log!("Player {} took cell {}", mover.number(), position.cell_number());

            match state.status {
                GameStatus::Won(winner) => {
                    self.finish(&state, winner_entry(&state, winner))?;
                    return Ok(SessionOutcome::Finished(state.status));
                }
                GameStatus::Draw => {
                    self.finish(&state, ScoreEntry::Draw)?;
                    return Ok(SessionOutcome::Finished(state.status));
                }
                GameStatus::InProgress => {}
            }

            if !state.is_computer_turn() {
                let Some(answer) = self.prompt("Save and exit game? (y/n): ")? else {
                    return Ok(SessionOutcome::Aborted);
                };
                if is_yes(&answer) {
                    save_game(&self.config.save_file, &state.to_saved())?;
                    log!("Game saved to {}", self.config.save_file.display());
                    let saved = self.palette.paint("\nGame state saved!\n", Color::Yellow);
                    writeln!(self.output, "{}", saved)?;
                    return Ok(SessionOutcome::Saved);
                }
            }
        }
    }

    /// `None` when input ends at the load prompt.
    fn start_state(&mut self, mode: GameMode) -> Result<Option<TicTacToeGameState>, SessionError> {
        let new_game = TicTacToeGameState::new(mode.vs_computer());
        if !self.config.save_file.exists() {
            return Ok(Some(new_game));
        }

        let Some(answer) = self.prompt("Load previous saved game? (y/n): ")? else {
            return Ok(None);
        };
        if !is_yes(&answer) {
            return Ok(Some(new_game));
        }

        match load_game(&self.config.save_file) {
            Ok(Some(saved)) => {
                let loaded = self.palette.paint("\nPrevious game loaded!\n", Color::Green);
                writeln!(self.output, "{}", loaded)?;
                Ok(Some(TicTacToeGameState::from_saved(saved)))
            }
            Ok(None) => Ok(Some(new_game)),
            Err(e) => {
                log!("Failed to load {}: {}", self.config.save_file.display(), e);
                let message = format!(
                    "Saved game could not be loaded ({}). Starting a new game.",
                    e
                );
                let message = self.palette.paint(&message, Color::Red);
                writeln!(self.output, "{}", message)?;
                Ok(Some(new_game))
            }
        }
    }

    fn read_human_move(&mut self, state: &TicTacToeGameState) -> io::Result<Option<Position>> {
        let prompt = format!(
            "Player {}, enter your move (1-9): ",
            state.current_player.number()
        );
        loop {
            let Some(line) = self.prompt(&prompt)? else {
                return Ok(None);
            };
            match parse_move(&line, &state.board) {
                Ok(position) => return Ok(Some(position)),
                Err(e) => {
                    let message = self.palette.paint(&e.to_string(), Color::Red);
                    writeln!(self.output, "{}", message)?;
                }
            }
        }
    }

    fn finish(
        &mut self,
        state: &TicTacToeGameState,
        entry: ScoreEntry,
    ) -> Result<(), SessionError> {
        let board = self.palette.board(&state.board, state.last_move);
        write!(self.output, "{}", board)?;

        let announcement = match entry {
            ScoreEntry::Computer => self.palette.paint("AI wins!", Color::Red),
            ScoreEntry::Player(player) => self.palette.paint(
                &format!("Player {} ({}) wins!", player.number(), player.mark().symbol()),
                Color::Green,
            ),
            ScoreEntry::Draw => self.palette.paint("It's a draw!", Color::Magenta),
        };
        writeln!(self.output, "{}", announcement)?;

        self.scoreboard.record(entry)?;
        delete_save(&self.config.save_file)?;
        Ok(())
    }

    fn show_scoreboard(&mut self) -> io::Result<()> {
        if !self.scoreboard.exists() {
            return Ok(());
        }

        let entries = self.scoreboard.entries()?;
        let title = self.palette.paint("\nScoreboard:", Color::Cyan);
        writeln!(self.output, "{}", title)?;

        for entry in entries {
            writeln!(self.output, "{}", entry)?;
        }
        writeln!(self.output, "{}", self.scoreboard.tally()?)
    }

    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

fn winner_entry(state: &TicTacToeGameState, winner: PlayerSlot) -> ScoreEntry {
    if state.is_computer(winner) {
        ScoreEntry::Computer
    } else {
        ScoreEntry::Player(winner)
    }
}

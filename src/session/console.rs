use std::io::{BufRead, Write};

use crate::ai::{Agent, HeuristicAgent};
use crate::config::{GameConfig, GameMode};
use crate::error::SessionError;
use crate::game::{BoardError, Mark, COLS};
use crate::history::{HistoryStore, RoundOutcome};
use crate::ui;

use super::participant::{validate_name, Participant};
use super::round::{MoveError, Round};

/// Interactive console game: picks a mode, collects names, then plays
/// rounds until the user declines another or input runs out.
pub struct Session<R, W> {
    input: R,
    output: W,
    config: GameConfig,
    history: HistoryStore,
    agent: HeuristicAgent,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, config: GameConfig, history: HistoryStore) -> Self {
        let agent = match config.seed {
            Some(seed) => HeuristicAgent::with_seed(seed),
            None => HeuristicAgent::new(),
        };
        Session {
            input,
            output,
            config,
            history,
            agent,
        }
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    /// Consume the session, returning the output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Main session loop. Returns the number of rounds completed; running out
    /// of input ends the session normally.
    pub fn run(&mut self) -> Result<usize, SessionError> {
        let mut completed = 0;
        match self.run_rounds(&mut completed) {
            Ok(()) => {}
            Err(SessionError::InputClosed) => {
                log::info!("input closed after {} completed rounds", completed);
                writeln!(self.output)?;
            }
            Err(e) => return Err(e),
        }

        if completed > 0 {
            writeln!(self.output, "{}", ui::render_summary(&self.history.summary()))?;
        }
        writeln!(self.output, "Goodbye!")?;
        Ok(completed)
    }

    fn run_rounds(&mut self, completed: &mut usize) -> Result<(), SessionError> {
        writeln!(self.output, "=== Connect Four ===")?;
        write!(self.output, "{}", ui::render_summary(&self.history.summary()))?;

        let mode = match self.config.mode {
            Some(mode) => mode,
            None => self.choose_mode()?,
        };
        let (first, second) = self.enter_participants(mode)?;

        loop {
            let outcome = self.play_round(first.clone(), second.clone())?;
            self.history.append(outcome)?;
            *completed += 1;

            if !self.ask_yes_no("Play again? (y/n): ")? {
                return Ok(());
            }
        }
    }

    /// Play one round to completion and return its result. The history store
    /// is not touched here.
    pub fn play_round(
        &mut self,
        first: Participant,
        second: Participant,
    ) -> Result<RoundOutcome, SessionError> {
        let mut round = Round::new(first, second);
        writeln!(self.output)?;
        write!(self.output, "{}", ui::render_board(round.board()))?;

        while !round.is_terminal() {
            let current = round.current().clone();
            let name = current.display_name(&self.config.computer_name).to_string();

            let column = if current.is_automated() {
                let me = current.mark();
                let Some(col) = self
                    .agent
                    .select_column(round.board_mut(), me, me.opponent())
                else {
                    break;
                };
                writeln!(self.output, "{} plays column {}", name, col + 1)?;
                col
            } else {
                self.human_column(&name, current.mark())?
            };

            match round.play(column) {
                Ok(_) => write!(self.output, "{}", ui::render_board(round.board()))?,
                Err(MoveError::Board(e)) => {
                    if current.is_automated() {
                        log::warn!("{} chose a rejected column: {}", self.agent.name(), e);
                    }
                    writeln!(self.output, "{}", rejection_message(&e))?;
                }
                Err(MoveError::RoundOver) => break,
            }
        }

        let message = ui::describe_status(
            round.status(),
            round.winner(),
            &self.config.computer_name,
        );
        writeln!(self.output, "{}", message)?;
        log::info!("round finished after {} moves: {}", round.moves().len(), message);

        round
            .outcome(&self.config.computer_name)
            .ok_or(SessionError::MissingOutcome)
    }

    fn choose_mode(&mut self) -> Result<GameMode, SessionError> {
        loop {
            writeln!(self.output, "1) Two players")?;
            writeln!(self.output, "2) Play against the computer")?;
            match self.prompt("Select mode: ")?.as_str() {
                "1" => return Ok(GameMode::TwoPlayer),
                "2" => return Ok(GameMode::VsComputer),
                _ => writeln!(self.output, "Please enter 1 or 2.")?,
            }
        }
    }

    fn enter_participants(
        &mut self,
        mode: GameMode,
    ) -> Result<(Participant, Participant), SessionError> {
        let computer_name = self.config.computer_name.clone();
        let computer_name = computer_name.as_str();
        match mode {
            GameMode::TwoPlayer => {
                let one = self.prompt_name("Player 1, enter your name: ", &[computer_name])?;
                let taken = [computer_name, one.as_str()];
                let two = self.prompt_name("Player 2, enter your name: ", &taken)?;
                Ok((
                    Participant::human(one, Mark::A),
                    Participant::human(two, Mark::B),
                ))
            }
            GameMode::VsComputer => {
                let name = self.prompt_name("Enter your name: ", &[computer_name])?;
                if self.config.computer_first {
                    Ok((
                        Participant::heuristic(Mark::A),
                        Participant::human(name, Mark::B),
                    ))
                } else {
                    Ok((
                        Participant::human(name, Mark::A),
                        Participant::heuristic(Mark::B),
                    ))
                }
            }
        }
    }

    fn prompt_name(&mut self, prompt: &str, taken: &[&str]) -> Result<String, SessionError> {
        loop {
            let entry = self.prompt(prompt)?;
            match validate_name(&entry, self.config.max_name_len, taken) {
                Ok(name) => return Ok(name),
                Err(e) => writeln!(self.output, "Invalid name: {}", e)?,
            }
        }
    }

    /// Ask a human for a 1-based column. Only non-numbers are rejected here;
    /// range and fullness are left to the board so every mover is treated alike.
    fn human_column(&mut self, name: &str, mark: Mark) -> Result<usize, SessionError> {
        let prompt = format!("{} ({}), choose a column (1-{}): ", name, mark.symbol(), COLS);
        loop {
            let entry = self.prompt(&prompt)?;
            match entry.parse::<i64>() {
                Ok(n) => {
                    return Ok(n
                        .checked_sub(1)
                        .and_then(|c| usize::try_from(c).ok())
                        .unwrap_or(usize::MAX))
                }
                Err(_) => writeln!(self.output, "Please enter a column number.")?,
            }
        }
    }

    fn ask_yes_no(&mut self, question: &str) -> Result<bool, SessionError> {
        loop {
            match self.prompt(question)?.to_ascii_lowercase().as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => writeln!(self.output, "Please answer y or n.")?,
            }
        }
    }

    fn prompt(&mut self, text: &str) -> Result<String, SessionError> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(SessionError::InputClosed);
        }
        Ok(line.trim().to_string())
    }
}

fn rejection_message(err: &BoardError) -> String {
    match err {
        BoardError::InvalidColumn(_) => format!("Column must be between 1 and {}.", COLS),
        BoardError::ColumnFull(col) => format!("Column {} is full.", col + 1),
        other => other.to_string(),
    }
}

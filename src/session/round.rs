use crate::game::{Board, BoardError, GameStatus, Move};
use crate::history::RoundOutcome;

use super::participant::Participant;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error(transparent)]
    Board(#[from] BoardError),

    #[error("the round is already over")]
    RoundOver,
}

/// A single round: one board, two participants, strict alternation.
/// The first participant moves first.
#[derive(Debug, Clone)]
pub struct Round {
    board: Board,
    participants: [Participant; 2],
    turn: usize,
    status: GameStatus,
    moves: Vec<Move>,
}

impl Round {
    pub fn new(first: Participant, second: Participant) -> Self {
        Round {
            board: Board::new(),
            participants: [first, second],
            turn: 0,
            status: GameStatus::InProgress,
            moves: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access for agents that simulate moves.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn participants(&self) -> &[Participant; 2] {
        &self.participants
    }

    /// Participant whose turn it is
    pub fn current(&self) -> &Participant {
        &self.participants[self.turn]
    }

    /// Participant waiting for their turn
    pub fn waiting(&self) -> &Participant {
        &self.participants[1 - self.turn]
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Moves applied so far, oldest first.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Place the current participant's disc and advance the turn.
    /// Rejected moves leave the round untouched and keep the same mover.
    pub fn play(&mut self, column: usize) -> Result<GameStatus, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::RoundOver);
        }

        let mark = self.current().mark();
        let row = self.board.place_disc(column, mark)?;
        self.moves.push(Move { column, row });

        self.status = self.board.status(mark);
        if !self.status.is_terminal() {
            self.turn = 1 - self.turn;
        }
        Ok(self.status)
    }

    /// Winning participant, if the round ended in a win.
    pub fn winner(&self) -> Option<&Participant> {
        match self.status {
            GameStatus::Win(mark) => self.participants.iter().find(|p| p.mark() == mark),
            _ => None,
        }
    }

    /// Result to hand to the history store once the round is over.
    pub fn outcome(&self, computer_name: &str) -> Option<RoundOutcome> {
        match self.status {
            GameStatus::InProgress => None,
            GameStatus::Draw => Some(RoundOutcome::Draw),
            GameStatus::Win(_) => self.winner().map(|p| RoundOutcome::Win {
                name: p.display_name(computer_name).to_string(),
            }),
        }
    }
}

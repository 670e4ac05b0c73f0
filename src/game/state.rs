use super::{board, Board, Player};

/// Where the game stands. `Won` and `Draw` are terminal: no further moves
/// are accepted until the state is replaced by a fresh one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    InProgress,
    Won(Player),
    Draw,
}

/// What a successful drop did, so callers can react without re-deriving it
/// from the new state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Continued,
    Won(Player),
    Draw,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column is full")]
    ColumnFull,

    #[error("column is out of bounds")]
    InvalidColumn,

    #[error("the game is already over")]
    GameOver,
}

/// The full game state: board contents, whose turn it is, and the phase.
/// Mutated only through [`apply_move`](GameState::apply_move) and
/// [`apply_move_mut`](GameState::apply_move_mut); on any error the state is
/// left untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    phase: Phase,
}

impl GameState {
    /// Create a fresh state: an empty `rows` x `cols` board, with
    /// `starting_player` to move.
    ///
    /// Dimension preconditions (at least 4x4, so a four-in-a-row can exist)
    /// are enforced by [`GameConfig::validate`](crate::config::GameConfig::validate)
    /// before any state is built from user configuration.
    pub fn new(rows: usize, cols: usize, starting_player: Player) -> Self {
        GameState {
            board: Board::new(rows, cols),
            current_player: starting_player,
            phase: Phase::InProgress,
        }
    }

    /// Get current player. After a winning move this is still the winner;
    /// the turn does not pass on a terminal move.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.phase != Phase::InProgress
    }

    /// Apply a move and return the new state plus what happened (immutable)
    pub fn apply_move(&self, column: usize) -> Result<(GameState, MoveOutcome), MoveError> {
        let mut next = self.clone();
        let outcome = next.apply_move_mut(column)?;
        Ok((next, outcome))
    }

    /// Apply a move in place (for the UI loop). Identical semantics to
    /// [`apply_move`](GameState::apply_move).
    pub fn apply_move_mut(&mut self, column: usize) -> Result<MoveOutcome, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let row = self
            .board
            .drop_piece(column, self.current_player.to_cell())
            .map_err(|e| match e {
                board::MoveError::ColumnFull => MoveError::ColumnFull,
                board::MoveError::InvalidColumn => MoveError::InvalidColumn,
            })?;

        // Win before draw: a board-filling winning move is a win, not a draw
        if self.board.check_win(row, column) {
            self.phase = Phase::Won(self.current_player);
            return Ok(MoveOutcome::Won(self.current_player));
        }

        if self.board.is_full() {
            self.phase = Phase::Draw;
            return Ok(MoveOutcome::Draw);
        }

        self.current_player = self.current_player.other();
        Ok(MoveOutcome::Continued)
    }
}

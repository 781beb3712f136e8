use super::board::{self, Board, CONNECT};
use super::player::Player;

/// Where play currently stands. Terminal once `Won` or `Draw`; only an undo
/// of the deciding move could revert it, and undo is disabled at that point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Won,
    Draw,
}

/// One entry of the append-only move history. The record's index in the
/// history is its sequence position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub player: Player,
    pub row: usize,
    pub col: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column is full")]
    ColumnFull,
    #[error("column index out of range")]
    InvalidColumn,
    #[error("the game is over")]
    GameOver,
}

impl From<board::MoveError> for MoveError {
    fn from(err: board::MoveError) -> Self {
        match err {
            board::MoveError::ColumnFull => MoveError::ColumnFull,
            board::MoveError::InvalidColumn => MoveError::InvalidColumn,
        }
    }
}

/// Cumulative win counts for the session. Survive `new_game` and
/// `restart_game`; only `reset_scores` zeroes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Scores {
    pub red: u32,
    pub yellow: u32,
}

impl Scores {
    pub fn of(&self, player: Player) -> u32 {
        match player {
            Player::Red => self.red,
            Player::Yellow => self.yellow,
        }
    }

    fn record_win(&mut self, player: Player) {
        match player {
            Player::Red => self.red += 1,
            Player::Yellow => self.yellow += 1,
        }
    }
}

/// The authoritative game state machine: board, turn order, move legality,
/// win/draw detection, single-level undo, and session lifecycle.
///
/// Created once per session. Every operation is synchronous and atomic:
/// a rejected call leaves the state untouched. The UI layer only observes
/// state through the read accessors and the result of each mutating call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    board: Board,
    current_player: Player,
    status: GameStatus,
    winner: Option<Player>,
    winning_cells: Option<[(usize, usize); CONNECT]>,
    scores: Scores,
    move_history: Vec<MoveRecord>,
    can_undo: bool,
    games_played: u32,
}

impl GameEngine {
    /// Fresh session: empty board, Red to move, zero scores, zero games.
    pub fn new() -> Self {
        GameEngine {
            board: Board::new(),
            current_player: Player::Red,
            status: GameStatus::Playing,
            winner: None,
            winning_cells: None,
            scores: Scores::default(),
            move_history: Vec::new(),
            can_undo: false,
            games_played: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// The 4 cells of the winning line, in scan order, when status is `Won`.
    pub fn winning_cells(&self) -> Option<[(usize, usize); CONNECT]> {
        self.winning_cells
    }

    pub fn scores(&self) -> Scores {
        self.scores
    }

    pub fn move_history(&self) -> &[MoveRecord] {
        &self.move_history
    }

    pub fn can_undo(&self) -> bool {
        self.can_undo
    }

    pub fn games_played(&self) -> u32 {
        self.games_played
    }

    /// A column accepts a move iff its top cell is open. Out-of-range
    /// columns report `false` here and `InvalidColumn` from [`make_move`];
    /// the engine never panics on a bad index.
    ///
    /// [`make_move`]: GameEngine::make_move
    pub fn is_valid_move(&self, col: usize) -> bool {
        !self.board.is_column_full(col)
    }

    /// Drop the current player's piece into a column.
    ///
    /// Returns the landing `(row, col)` on success. Rejections (`GameOver`,
    /// `InvalidColumn`, `ColumnFull`) leave the state unchanged.
    pub fn make_move(&mut self, col: usize) -> Result<(usize, usize), MoveError> {
        if self.status != GameStatus::Playing {
            return Err(MoveError::GameOver);
        }

        let row = self.board.drop_piece(col, self.current_player)?;
        self.move_history.push(MoveRecord {
            player: self.current_player,
            row,
            col,
        });
        self.can_undo = true;

        if let Some(cells) = self.board.winning_line(row, col) {
            self.status = GameStatus::Won;
            self.winner = Some(self.current_player);
            self.winning_cells = Some(cells);
            self.scores.record_win(self.current_player);
            self.can_undo = false;
        } else if self.board.is_full() {
            self.status = GameStatus::Draw;
            self.can_undo = false;
        } else {
            self.current_player = self.current_player.other();
        }

        Ok((row, col))
    }

    /// Take back the most recent move, returning the turn to its mover.
    ///
    /// Only one level of undo is permitted: `can_undo` drops to `false`
    /// after any undo, and a win or draw also clears it, so a decided game
    /// cannot be unwound. Returns `false` (no state change) when nothing
    /// can be undone.
    pub fn undo_last_move(&mut self) -> bool {
        if !self.can_undo {
            return false;
        }
        let Some(last) = self.move_history.pop() else {
            return false;
        };

        self.board.clear(last.row, last.col);
        self.current_player = last.player;
        self.can_undo = false;

        // The winning score is not given back here; see DESIGN.md.
        if self.status != GameStatus::Playing {
            self.status = GameStatus::Playing;
            self.winner = None;
            self.winning_cells = None;
        }

        true
    }

    /// Start the next game of the session. The opening player alternates
    /// with the games-played parity (first game Red, second Yellow, ...);
    /// scores carry over.
    pub fn new_game(&mut self) {
        self.games_played += 1;
        self.current_player = if self.games_played % 2 == 1 {
            Player::Red
        } else {
            Player::Yellow
        };
        self.reset_round();
    }

    /// Throw away the current game and replay it: the player who opened the
    /// discarded game opens again, and the games-played counter stays put.
    pub fn restart_game(&mut self) {
        self.current_player = self
            .move_history
            .first()
            .map(|record| record.player)
            .unwrap_or(Player::Red);
        self.reset_round();
    }

    /// Zero both players' scores; board and game state are untouched.
    pub fn reset_scores(&mut self) {
        self.scores = Scores::default();
    }

    fn reset_round(&mut self) {
        self.board = Board::new();
        self.status = GameStatus::Playing;
        self.winner = None;
        self.winning_cells = None;
        self.move_history.clear();
        self.can_undo = false;
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

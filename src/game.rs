//! Session state: move history, display pointer, turn order, scores.
//!
//! A [`Session`] is one immutable snapshot of a game session. Commands go
//! through [`Session::apply`] (silent rejection) or [`Session::try_apply`]
//! (reported rejection); both leave `self` untouched and return a fresh
//! value. The displayed board and winner are re-derived on every read,
//! never cached.

use crate::board::Board;
use crate::common::{CommandError, Mark};
use crate::config::{CELL_COUNT, DEFAULT_PLAYERS};
use crate::win::{self, Line};

/// Ordered moves of the current round. Fixed capacity, append-only until
/// a reset; a branch from a historical view truncates first.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct MoveLog {
    cells: [usize; CELL_COUNT],
    len: usize,
}

impl MoveLog {
    /// An empty log.
    #[inline]
    pub const fn new() -> Self {
        MoveLog {
            cells: [0; CELL_COUNT],
            len: 0,
        }
    }

    /// Append one move. The session never pushes beyond 9 entries.
    #[inline]
    pub fn push(&mut self, cell: usize) {
        debug_assert!(self.len < CELL_COUNT);
        self.cells[self.len] = cell;
        self.len += 1;
    }

    /// Keep only the first `len` moves.
    #[inline]
    pub fn truncate(&mut self, len: usize) {
        if len < self.len {
            self.len = len;
        }
    }

    /// The recorded moves, oldest first.
    #[inline]
    pub fn as_slice(&self) -> &[usize] {
        &self.cells[..self.len]
    }

    /// Number of recorded moves.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if no moves are recorded.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Default for MoveLog {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Cumulative win counts for a session. Reset only by a new game.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Scores {
    wins: [u32; 2],
}

impl Scores {
    /// Zero for both marks.
    #[inline]
    pub const fn new() -> Self {
        Scores { wins: [0; 2] }
    }

    /// Win count for `mark`.
    #[inline]
    pub const fn get(&self, mark: Mark) -> u32 {
        self.wins[mark.index()]
    }

    fn credit(&mut self, mark: Mark) {
        self.wins[mark.index()] += 1;
    }
}

/// Outcome of the displayed round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum RoundStatus {
    /// Cells remain and nobody has three in a line.
    InProgress,
    /// The contained mark holds a full line.
    Won(Mark),
    /// All nine cells are filled with no line.
    Drawn,
}

/// Session commands. Rendering is a pure projection of the resulting
/// state; these are the only way to change it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Place the next mark at the given cell of the displayed board.
    Play(usize),
    /// Reset history, turn order and scores.
    NewGame,
    /// Conclude the displayed round: credit its winner, reverse the turn
    /// order, clear the board.
    NextRound,
    /// Display the board as of the first `n` recorded moves.
    ViewMove(usize),
}

/// One immutable session snapshot.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Session {
    moves: MoveLog,
    shown: usize,
    players: [Mark; 2],
    scores: Scores,
}

impl Session {
    /// A fresh session: empty history, default turn order, zero scores.
    #[inline]
    pub const fn new() -> Self {
        Session {
            moves: MoveLog::new(),
            shown: 0,
            players: DEFAULT_PLAYERS,
            scores: Scores::new(),
        }
    }

    /// The displayed board, projected from the first `shown_moves()`
    /// entries of the history.
    pub fn board(&self) -> Board {
        Board::project(self.players, self.shown_slice())
    }

    /// Winning line on the displayed board, if any.
    pub fn winning_line(&self) -> Option<Line> {
        win::winning_line(&self.board())
    }

    /// Winner of the displayed board, if any.
    pub fn winner(&self) -> Option<Mark> {
        win::winner(&self.board())
    }

    /// Outcome of the displayed round.
    pub fn status(&self) -> RoundStatus {
        match self.winner() {
            Some(mark) => RoundStatus::Won(mark),
            None if self.shown == CELL_COUNT => RoundStatus::Drawn,
            None => RoundStatus::InProgress,
        }
    }

    /// Mark to move on the displayed board, or `None` once the round is
    /// over.
    pub fn next_mark(&self) -> Option<Mark> {
        match self.status() {
            RoundStatus::InProgress => Some(self.players[self.shown % 2]),
            _ => None,
        }
    }

    /// Committed win counts.
    #[inline]
    pub const fn scores(&self) -> Scores {
        self.scores
    }

    /// Turn order of the current round.
    #[inline]
    pub const fn players(&self) -> [Mark; 2] {
        self.players
    }

    /// Length of the full recorded history.
    #[inline]
    pub const fn total_moves(&self) -> usize {
        self.moves.len()
    }

    /// Number of history entries the displayed board reflects.
    #[inline]
    pub const fn shown_moves(&self) -> usize {
        self.shown
    }

    /// The recorded history, oldest first.
    #[inline]
    pub fn moves(&self) -> &[usize] {
        self.moves.as_slice()
    }

    /// Apply a command. Illegal commands are rejected silently: the
    /// returned session is equal to `self`.
    pub fn apply(&self, command: Command) -> Session {
        self.try_apply(command).unwrap_or(*self)
    }

    /// Apply a command, reporting why an illegal one was rejected. The
    /// session itself is never modified either way.
    pub fn try_apply(&self, command: Command) -> Result<Session, CommandError> {
        match command {
            Command::Play(cell) => self.play(cell),
            Command::NewGame => Ok(Session::new()),
            Command::NextRound => self.next_round(),
            Command::ViewMove(count) => self.view_move(count),
        }
    }

    /// Render-facing snapshot of the displayed state.
    pub fn view(&self) -> SessionView {
        let board = self.board();
        let winning_line = win::winning_line(&board);
        let winner = winning_line.and_then(|line| board.mark_at(line[0]));
        let status = match winner {
            Some(mark) => RoundStatus::Won(mark),
            None if self.shown == CELL_COUNT => RoundStatus::Drawn,
            None => RoundStatus::InProgress,
        };
        let next_mark = match status {
            RoundStatus::InProgress => Some(self.players[self.shown % 2]),
            _ => None,
        };
        let mut preview_scores = self.scores;
        if let Some(mark) = winner {
            preview_scores.credit(mark);
        }
        SessionView {
            board,
            status,
            winner,
            winning_line,
            next_mark,
            scores: self.scores,
            preview_scores,
            total_moves: self.moves.len(),
            shown_moves: self.shown,
        }
    }

    fn shown_slice(&self) -> &[usize] {
        &self.moves.as_slice()[..self.shown]
    }

    fn play(&self, cell: usize) -> Result<Session, CommandError> {
        if cell >= CELL_COUNT {
            return Err(CommandError::CellOutOfRange { cell });
        }
        let board = self.board();
        if win::winner(&board).is_some() {
            return Err(CommandError::RoundOver);
        }
        if board.is_occupied(cell) {
            return Err(CommandError::CellOccupied { cell });
        }
        let mut next = *self;
        // Playing from a historical view discards the undone tail.
        next.moves.truncate(self.shown);
        next.moves.push(cell);
        next.shown = next.moves.len();
        Ok(next)
    }

    fn next_round(&self) -> Result<Session, CommandError> {
        let mut next = *self;
        match self.status() {
            RoundStatus::InProgress => return Err(CommandError::RoundNotOver),
            RoundStatus::Won(mark) => next.scores.credit(mark),
            RoundStatus::Drawn => {}
        }
        next.moves = MoveLog::new();
        next.shown = 0;
        next.players = [self.players[1], self.players[0]];
        Ok(next)
    }

    fn view_move(&self, count: usize) -> Result<Session, CommandError> {
        if count > self.moves.len() {
            return Err(CommandError::MoveCountOutOfRange {
                requested: count,
                available: self.moves.len(),
            });
        }
        let mut next = *self;
        next.shown = count;
        Ok(next)
    }
}

impl Default for Session {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Snapshot consumed by a rendering layer: the displayed board plus
/// everything a status panel and a jump-to-move list need.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionView {
    /// The displayed board.
    pub board: Board,
    /// Outcome of the displayed round.
    pub status: RoundStatus,
    /// Winner of the displayed board, if any.
    pub winner: Option<Mark>,
    /// Cells of the winning line, ascending, if any.
    pub winning_line: Option<Line>,
    /// Mark to move, or `None` once the round is over.
    pub next_mark: Option<Mark>,
    /// Committed win counts.
    pub scores: Scores,
    /// Scores with the displayed winner already credited, ahead of the
    /// `NextRound` that commits it. Display-only; never fed back into
    /// the session.
    pub preview_scores: Scores,
    /// Length of the full recorded history.
    pub total_moves: usize,
    /// Number of history entries the board reflects.
    pub shown_moves: usize,
}

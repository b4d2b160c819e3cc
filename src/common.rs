//! Common types: player marks and command rejection errors.

use core::fmt;

/// A player's token placed in board cells. The turn sequence is defined by
/// a mark's position in the session's `[Mark; 2]` order, not by the mark
/// itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// The opposing mark.
    #[inline]
    pub const fn other(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Single-character form used by the terminal renderer.
    #[inline]
    pub const fn as_char(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }

    #[inline]
    pub(crate) const fn index(self) -> usize {
        match self {
            Mark::X => 0,
            Mark::O => 1,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Errors returned by session command handling.
///
/// All of these reject without changing state; [`Session::apply`] maps
/// them to a no-op while [`Session::try_apply`] reports them.
///
/// [`Session::apply`]: crate::Session::apply
/// [`Session::try_apply`]: crate::Session::try_apply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandError {
    /// Cell index is outside the 3×3 board.
    CellOutOfRange { cell: usize },
    /// Cell already holds a mark on the displayed board.
    CellOccupied { cell: usize },
    /// The displayed board already has a winner.
    RoundOver,
    /// The displayed round has neither a winner nor a full board yet.
    RoundNotOver,
    /// Requested move count exceeds the recorded history.
    MoveCountOutOfRange { requested: usize, available: usize },
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::CellOutOfRange { cell } => {
                write!(f, "cell {} is outside the board", cell)
            }
            CommandError::CellOccupied { cell } => {
                write!(f, "cell {} is already occupied", cell)
            }
            CommandError::RoundOver => write!(f, "the round already has a winner"),
            CommandError::RoundNotOver => write!(f, "the round has not ended yet"),
            CommandError::MoveCountOutOfRange {
                requested,
                available,
            } => {
                write!(
                    f,
                    "move {} is beyond the recorded history of {}",
                    requested, available
                )
            }
        }
    }
}

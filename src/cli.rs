#![cfg(feature = "std")]

//! Interactive terminal front end for a hotseat session.
//!
//! Cells are entered 1-based, matching the numbers printed on empty cells
//! of the grid. All state changes go through `Session::try_apply`;
//! rejected commands print a short notice and leave the session as it was.

use std::io::{self, Write};
use std::string::String;

use crate::config::CELL_COUNT;
use crate::game::{Command, RoundStatus, Session};

/// One parsed line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliCommand {
    /// Place a mark; the cell is 0-based here, converted from 1-based
    /// input.
    Play(usize),
    /// Start a new game.
    NewGame,
    /// Advance to the next round.
    NextRound,
    /// Jump the displayed board to a move count.
    ViewMove(usize),
    /// List the recorded moves.
    Moves,
    /// Show the command summary.
    Help,
    /// Leave the session.
    Quit,
}

/// Parse one input line, or `None` when it matches no command.
pub fn parse_command(line: &str) -> Option<CliCommand> {
    let mut parts = line.split_whitespace();
    let head = parts.next()?;
    let command = match head {
        "new" => CliCommand::NewGame,
        "next" => CliCommand::NextRound,
        "moves" => CliCommand::Moves,
        "help" => CliCommand::Help,
        "quit" | "exit" => CliCommand::Quit,
        "view" => {
            let count = parts.next()?.parse().ok()?;
            CliCommand::ViewMove(count)
        }
        cell => {
            let cell: usize = cell.parse().ok()?;
            if cell == 0 || cell > CELL_COUNT {
                return None;
            }
            CliCommand::Play(cell - 1)
        }
    };
    if parts.next().is_some() {
        return None;
    }
    Some(command)
}

fn print_board(session: &Session) {
    let board = session.board();
    let winning = session.winning_line().unwrap_or([CELL_COUNT; 3]);
    for row in 0..3 {
        let mut line = String::new();
        for col in 0..3 {
            let cell = row * 3 + col;
            let rendered = match board.mark_at(cell) {
                Some(mark) if winning.contains(&cell) => {
                    format!("*{}*", mark)
                }
                Some(mark) => format!(" {} ", mark),
                None => format!(" {} ", cell + 1),
            };
            line.push_str(&rendered);
            if col < 2 {
                line.push('|');
            }
        }
        println!("{}", line);
        if row < 2 {
            println!("---+---+---");
        }
    }
}

fn print_status(session: &Session) {
    let view = session.view();
    match view.status {
        RoundStatus::InProgress => {
            if let Some(mark) = view.next_mark {
                println!("Next player: {}", mark);
            }
        }
        RoundStatus::Won(mark) => println!("{} wins! Type `next` for the next round.", mark),
        RoundStatus::Drawn => println!("Round drawn. Type `next` for the next round."),
    }
    let [first, second] = session.players();
    println!(
        "Score  {}: {}  {}: {}",
        first,
        view.preview_scores.get(first),
        second,
        view.preview_scores.get(second),
    );
    if view.shown_moves < view.total_moves {
        println!(
            "Viewing move {} of {} (playing from here discards later moves)",
            view.shown_moves, view.total_moves
        );
    }
}

fn print_moves(session: &Session) {
    let marker = |n: usize| if n == session.shown_moves() { '>' } else { ' ' };
    println!("{} view 0: game start", marker(0));
    for (i, &cell) in session.moves().iter().enumerate() {
        println!("{} view {}: cell {}", marker(i + 1), i + 1, cell + 1);
    }
}

fn print_help() {
    println!("Commands:");
    println!("  1-9       place your mark on that cell");
    println!("  view <n>  show the board as of move n (0 = game start)");
    println!("  moves     list the recorded moves");
    println!("  next      finish the round: score the winner, swap who starts");
    println!("  new       start a new game (clears the scores)");
    println!("  quit      leave");
}

fn dispatch(session: &Session, command: Command) -> Session {
    match session.try_apply(command) {
        Ok(next) => next,
        Err(err) => {
            log::debug!("rejected {:?}: {}", command, err);
            println!("{}", err);
            *session
        }
    }
}

/// Run an interactive session until the player quits or input ends.
pub fn run() -> anyhow::Result<()> {
    let mut session = Session::new();
    println!("Tic-tac-toe. Cells are numbered 1-9; type `help` for commands.");
    loop {
        println!();
        print_board(&session);
        print_status(&session);
        print!("> ");
        io::stdout().flush()?;
        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let Some(command) = parse_command(line) else {
            println!("Unrecognized input; type `help` for commands.");
            continue;
        };
        match command {
            CliCommand::Quit => break,
            CliCommand::Help => print_help(),
            CliCommand::Moves => print_moves(&session),
            CliCommand::Play(cell) => session = dispatch(&session, Command::Play(cell)),
            CliCommand::NewGame => {
                session = dispatch(&session, Command::NewGame);
                log::info!("new game started");
            }
            CliCommand::NextRound => session = dispatch(&session, Command::NextRound),
            CliCommand::ViewMove(count) => session = dispatch(&session, Command::ViewMove(count)),
        }
    }
    Ok(())
}

/// Replay a recorded move list (1-based cell numbers) and print the
/// resulting board, status and scores.
pub fn replay(cells: &[usize]) -> anyhow::Result<()> {
    let mut session = Session::new();
    for (i, &cell) in cells.iter().enumerate() {
        if cell == 0 || cell > CELL_COUNT {
            anyhow::bail!("move {}: cell {} is outside 1-{}", i + 1, cell, CELL_COUNT);
        }
        session = session
            .try_apply(Command::Play(cell - 1))
            .map_err(|err| anyhow::anyhow!("move {} (cell {}): {}", i + 1, cell, err))?;
    }
    print_board(&session);
    print_status(&session);
    Ok(())
}

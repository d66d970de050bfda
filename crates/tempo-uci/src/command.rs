//! UCI command parsing.

use std::time::Duration;

use tempo_core::{Board, find_legal_move};
use tracing::debug;

use crate::error::UciError;

/// `go` tokens that carry a value the engine does not use.
const IGNORED_GO_VALUES: [&str; 7] = ["wtime", "btime", "winc", "binc", "movestogo", "nodes", "mate"];

/// Parameters for the `go` command.
///
/// All fields are optional; a bare `go` uses the configured default depth.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GoParams {
    /// Search to this depth only.
    pub depth: Option<u32>,
    /// Search for exactly this duration.
    pub movetime: Option<Duration>,
}

/// An option set through `setoption`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UciOption {
    /// Default search depth for a bare `go`.
    Depth(u32),
    /// Toggle late move reductions.
    LateMoveReduction(bool),
    /// An option this engine does not know.
    Unknown(String),
}

/// A parsed UCI command.
#[derive(Debug)]
pub enum Command {
    /// `uci` -- identify the engine.
    Uci,
    /// `isready` -- synchronization ping.
    IsReady,
    /// `ucinewgame` -- reset engine state.
    UciNewGame,
    /// `position` -- set up a board position with optional moves applied.
    Position(Board),
    /// `go` -- start searching with given parameters.
    Go(GoParams),
    /// `setoption name <id> [value <x>]`.
    SetOption(UciOption),
    /// `quit` -- exit the engine.
    Quit,
    /// Unrecognized command, ignored.
    Unknown(String),
}

/// Parse a single line of UCI input into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, UciError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some((&head, rest)) = tokens.split_first() else {
        return Ok(Command::Unknown(String::new()));
    };

    match head {
        "uci" => Ok(Command::Uci),
        "isready" => Ok(Command::IsReady),
        "ucinewgame" => Ok(Command::UciNewGame),
        "quit" => Ok(Command::Quit),
        "position" => parse_position(rest),
        "go" => parse_go(rest),
        "setoption" => parse_setoption(rest),
        _ => Ok(Command::Unknown(head.to_string())),
    }
}

/// Parse the `position` command arguments.
///
/// Supports:
/// - `position startpos [moves e2e4 d7d5 ...]`
/// - `position fen <fen-string> [moves e2e4 d7d5 ...]`
///
/// Moves that are not legal in the position reached so far are skipped.
fn parse_position(tokens: &[&str]) -> Result<Command, UciError> {
    let moves_at = tokens.iter().position(|&t| t == "moves").unwrap_or(tokens.len());
    let (setup, moves) = tokens.split_at(moves_at);

    let mut board = match setup {
        ["startpos", ..] => Board::starting_position(),
        ["fen", fields @ ..] => {
            let fen = fields.join(" ");
            fen.parse()
                .map_err(|source| UciError::InvalidFen { fen: fen.clone(), source })?
        }
        _ => return Err(UciError::MalformedPosition),
    };

    for text in moves.iter().skip(1) {
        match find_legal_move(&mut board, text) {
            Some(mv) => board.make_move(mv),
            None => debug!(mv = %text, "skipping illegal move"),
        }
    }

    Ok(Command::Position(board))
}

/// Parse the `go` command arguments.
///
/// Only `depth` and `movetime` are used. Clock and node parameters are
/// consumed with their values and dropped; unknown tokens are skipped.
fn parse_go(tokens: &[&str]) -> Result<Command, UciError> {
    let mut params = GoParams::default();

    let mut i = 0;
    while i < tokens.len() {
        match tokens[i] {
            "depth" => {
                params.depth = Some(parse_int(tokens.get(i + 1), "depth")?);
                i += 2;
            }
            "movetime" => {
                let ms: u64 = parse_int(tokens.get(i + 1), "movetime")?;
                params.movetime = Some(Duration::from_millis(ms));
                i += 2;
            }
            token if IGNORED_GO_VALUES.contains(&token) => i += 2,
            _ => i += 1,
        }
    }

    Ok(Command::Go(params))
}

/// Parse a numeric `go` value.
fn parse_int<T: std::str::FromStr>(token: Option<&&str>, param: &str) -> Result<T, UciError> {
    let value = token.ok_or_else(|| UciError::MissingGoValue {
        param: param.to_string(),
    })?;
    value.parse().map_err(|_| UciError::InvalidGoValue {
        param: param.to_string(),
        value: value.to_string(),
    })
}

/// Parse `setoption name <id> [value <x>]`. Option names are case-insensitive
/// and may contain spaces.
fn parse_setoption(tokens: &[&str]) -> Result<Command, UciError> {
    let ["name", rest @ ..] = tokens else {
        return Err(UciError::MalformedOption);
    };
    let value_at = rest.iter().position(|&t| t == "value").unwrap_or(rest.len());
    let name = rest[..value_at].join(" ");
    let value = rest.get(value_at + 1..).unwrap_or_default().join(" ");

    let invalid = || UciError::InvalidOptionValue {
        name: name.clone(),
        value: value.clone(),
    };

    let option = match name.to_ascii_lowercase().as_str() {
        "" => return Err(UciError::MalformedOption),
        "depth" => UciOption::Depth(value.parse().map_err(|_| invalid())?),
        "latemovereduction" => match value.to_ascii_lowercase().as_str() {
            "true" => UciOption::LateMoveReduction(true),
            "false" => UciOption::LateMoveReduction(false),
            _ => return Err(invalid()),
        },
        _ => UciOption::Unknown(name.clone()),
    };

    Ok(Command::SetOption(option))
}

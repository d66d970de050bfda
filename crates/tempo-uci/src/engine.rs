//! Synchronous UCI engine loop.

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use tempo_core::Board;
use tempo_engine::config::{MAX_DEPTH, MIN_DEPTH};
use tempo_engine::{SearchConfig, SearchInfo, Searcher, limits_from_go};

use crate::command::{Command, GoParams, UciOption, parse_command};
use crate::error::UciError;

/// The UCI engine: current position, searcher and protocol streams.
///
/// Commands are read line by line from `input`; replies go to `output`.
/// A `go` runs to completion before the next command is read.
pub struct UciEngine<R, W> {
    input: R,
    output: W,
    board: Board,
    searcher: Searcher,
}

impl<R: BufRead, W: Write> UciEngine<R, W> {
    /// Create an engine at the starting position with the default configuration.
    pub fn new(input: R, output: W) -> Self {
        Self::with_config(input, output, SearchConfig::default())
    }

    pub fn with_config(input: R, output: W, config: SearchConfig) -> Self {
        Self {
            input,
            output,
            board: Board::starting_position(),
            searcher: Searcher::new(config),
        }
    }

    /// Current position.
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn searcher(&self) -> &Searcher {
        &self.searcher
    }

    /// Give back the output stream, consuming the engine.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run the command loop until `quit` or end of input.
    ///
    /// Malformed commands are logged and skipped. Only I/O errors end the
    /// loop early.
    pub fn run(&mut self) -> Result<(), UciError> {
        info!("tempo ready");
        let mut line = String::new();
        loop {
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                debug!("input closed");
                break;
            }
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            debug!(cmd = %trimmed, "received UCI command");

            match parse_command(trimmed) {
                Ok(Command::Quit) => break,
                Ok(command) => self.handle(command)?,
                Err(e) => warn!(error = %e, "UCI parse error"),
            }
            self.output.flush()?;
        }
        info!("tempo shutting down");
        Ok(())
    }

    fn handle(&mut self, command: Command) -> Result<(), UciError> {
        match command {
            Command::Uci => self.handle_uci(),
            Command::IsReady => writeln!(self.output, "readyok").map_err(UciError::from),
            Command::UciNewGame => {
                self.handle_ucinewgame();
                Ok(())
            }
            Command::Position(board) => {
                self.board = board;
                Ok(())
            }
            Command::Go(params) => self.handle_go(params),
            Command::SetOption(option) => {
                if let Err(e) = self.handle_setoption(option) {
                    warn!(error = %e, "rejected option");
                }
                Ok(())
            }
            Command::Quit => Ok(()),
            Command::Unknown(cmd) => {
                debug!(%cmd, "ignoring unknown command");
                Ok(())
            }
        }
    }

    fn handle_uci(&mut self) -> Result<(), UciError> {
        let config = self.searcher.config();
        writeln!(self.output, "id name Tempo")?;
        writeln!(self.output, "id author the Tempo developers")?;
        writeln!(
            self.output,
            "option name Depth type spin default {} min {MIN_DEPTH} max {MAX_DEPTH}",
            config.default_depth
        )?;
        writeln!(
            self.output,
            "option name LateMoveReduction type check default {}",
            config.late_move_reduction
        )?;
        writeln!(self.output, "uciok")?;
        Ok(())
    }

    fn handle_ucinewgame(&mut self) {
        self.board = Board::starting_position();
        self.searcher.clear_pv_cache();
    }

    fn handle_setoption(&mut self, option: UciOption) -> Result<(), UciError> {
        match option {
            UciOption::Depth(depth) => self.searcher.config_mut().set_default_depth(depth)?,
            UciOption::LateMoveReduction(enabled) => {
                self.searcher.config_mut().late_move_reduction = enabled;
            }
            UciOption::Unknown(name) => warn!(%name, "ignoring unknown option"),
        }
        Ok(())
    }

    fn handle_go(&mut self, params: GoParams) -> Result<(), UciError> {
        let limits = limits_from_go(params.depth, params.movetime, &self.board, self.searcher.config());
        debug!(?limits, "starting search");

        let output = &mut self.output;
        let mut write_error = None;
        let result = self.searcher.search(&mut self.board, limits, |info| {
            if let Err(e) = write_info(output, info) {
                write_error.get_or_insert(e);
            }
        });
        if let Some(e) = write_error {
            return Err(e.into());
        }

        match result.best_move {
            Some(mv) => writeln!(self.output, "bestmove {mv}")?,
            None => writeln!(self.output, "bestmove 0000")?,
        }
        Ok(())
    }
}

/// Write one `info` line for a completed iteration.
fn write_info<W: Write>(output: &mut W, info: &SearchInfo<'_>) -> std::io::Result<()> {
    let pv = info
        .pv
        .iter()
        .map(|mv| mv.to_uci())
        .collect::<Vec<_>>()
        .join(" ");
    writeln!(
        output,
        "info depth {} nodes {} score cp {} pv {} time {} nps {}",
        info.depth,
        info.nodes,
        info.score,
        pv,
        info.elapsed.as_millis(),
        info.nps()
    )
}

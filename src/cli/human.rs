//! Human player reading moves from a text stream

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use crate::{
    Error, Result,
    ports::{Agent, Game, GameOutcome},
    tictactoe::{BoardState, Coord, TicTacToe},
};

/// Agent backed by a person typing `row col` coordinates
///
/// Unparseable or illegal input is reported and asked for again; end of
/// input is an error.
pub struct HumanAgent<R: BufRead, W: Write> {
    name: String,
    input: R,
    output: W,
}

impl HumanAgent<StdinLock<'static>, Stdout> {
    /// Human on the process's standard input and output
    pub fn stdio(name: impl Into<String>) -> Self {
        Self::new(name, io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> HumanAgent<R, W> {
    pub fn new(name: impl Into<String>, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            input,
            output,
        }
    }

    /// Consume the agent, returning its output sink
    pub fn into_output(self) -> W {
        self.output
    }

    /// Ask a yes/no question; anything but `y`/`yes` means no.
    pub fn confirm(&mut self, question: &str) -> Result<bool> {
        self.write(question)?;
        let answer = match self.read_line() {
            Ok(line) => line,
            Err(Error::Io { source, .. }) if source.kind() == io::ErrorKind::UnexpectedEof => {
                return Ok(false);
            }
            Err(err) => return Err(err),
        };
        Ok(matches!(
            answer.trim().to_ascii_lowercase().as_str(),
            "y" | "yes"
        ))
    }

    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        let read = self.input.read_line(&mut line).map_err(|source| Error::Io {
            operation: "read move".to_string(),
            source,
        })?;
        if read == 0 {
            return Err(Error::Io {
                operation: "read move".to_string(),
                source: io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"),
            });
        }
        Ok(line)
    }

    fn write(&mut self, text: &str) -> Result<()> {
        self.output
            .write_all(text.as_bytes())
            .and_then(|()| self.output.flush())
            .map_err(|source| Error::Io {
                operation: "write prompt".to_string(),
                source,
            })
    }
}

impl<R: BufRead, W: Write> Agent<TicTacToe> for HumanAgent<R, W> {
    fn observe(
        &mut self,
        state: &BoardState,
        score: f64,
        game: &TicTacToe,
    ) -> Result<Option<Coord>> {
        let Some(outcome) = GameOutcome::of(game, state) else {
            return self.make_action(state, game).map(Some);
        };
        let verdict = match outcome {
            GameOutcome::Win(player) => format!("{player} wins"),
            GameOutcome::Draw => "Draw".to_string(),
        };
        self.write(&format!("{state}\n{verdict} (score {score})\n"))?;
        Ok(None)
    }

    fn make_action(&mut self, state: &BoardState, game: &TicTacToe) -> Result<Coord> {
        if game.is_terminal(state) {
            return Err(Error::TerminalState {
                state: state.encode(),
            });
        }
        let legal = game.valid_actions(state);
        self.write(&format!("{state}\n"))?;
        loop {
            self.write(&format!("{}, enter row and column (0-2): ", self.name))?;
            let line = self.read_line()?;
            match Coord::parse(&line) {
                Ok(coord) if legal.contains(&coord) => return Ok(coord),
                Ok(coord) => self.write(&format!("{coord} is not free\n"))?,
                Err(err @ Error::InvalidCoordinate { .. }) => self.write(&format!("{err}\n"))?,
                Err(err) => return Err(err),
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

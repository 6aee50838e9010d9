// atmsim/src/input/mock.rs

use std::collections::VecDeque;

use crate::input::traits::InputSource;
use crate::{Error, Result};

/// Scripted input for tests. It replays queued lines in order and reports
/// `InputClosed` once they run out.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
    consumed: usize,
}

impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            consumed: 0,
        }
    }

    pub fn push_line(&mut self, line: impl Into<String>) {
        self.lines.push_back(line.into());
    }

    /// Number of lines handed out so far.
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl InputSource for ScriptedInput {
    fn read_line(&mut self) -> Result<String> {
        match self.lines.pop_front() {
            Some(line) => {
                self.consumed += 1;
                Ok(line)
            }
            None => Err(Error::InputClosed),
        }
    }
}

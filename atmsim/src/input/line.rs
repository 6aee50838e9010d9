// atmsim/src/input/line.rs

use std::io::BufRead;

use crate::input::traits::InputSource;
use crate::{Error, Result};

/// Line-oriented input over any buffered reader (stdin in the binary).
#[derive(Debug)]
pub struct LineInput<R> {
    reader: R,
    buf: String,
}

impl<R: BufRead> LineInput<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: String::new(),
        }
    }

    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl LineInput<std::io::StdinLock<'static>> {
    pub fn stdin() -> Self {
        Self::new(std::io::stdin().lock())
    }
}

impl<R: BufRead> InputSource for LineInput<R> {
    fn read_line(&mut self) -> Result<String> {
        self.buf.clear();
        let n = self.reader.read_line(&mut self.buf)?;
        if n == 0 {
            return Err(Error::InputClosed);
        }
        let line = self.buf.trim_end_matches(['\n', '\r']);
        Ok(line.to_string())
    }
}

// atmsim/src/console.rs
//! Terminal front end used by the ATM session.
//!
//! [`Console`] pairs an [`InputSource`] with an output writer. Its readers
//! keep asking until the user types something of the expected shape, so
//! the session only ever sees well-formed values.

use std::fmt::Display;
use std::io::Write;
use std::str::FromStr;

use log::trace;
use rust_decimal::Decimal;

use crate::input::InputSource;
use crate::Result;

/// Prompting reader/writer over one input source and one output.
pub struct Console<I, W> {
    input: I,
    out: W,
}

impl<I: InputSource, W: Write> Console<I, W> {
    pub fn new(input: I, out: W) -> Self {
        Self { input, out }
    }

    /// The underlying input source.
    pub fn input(&self) -> &I {
        &self.input
    }

    /// Everything written so far goes here.
    pub fn output(&self) -> &W {
        &self.out
    }

    pub fn into_parts(self) -> (I, W) {
        (self.input, self.out)
    }

    /// Write `text` followed by a newline.
    pub fn line(&mut self, text: impl Display) -> Result<()> {
        writeln!(self.out, "{}", text)?;
        Ok(())
    }

    /// Write `text` without a newline and flush, leaving the cursor after it.
    pub fn prompt(&mut self, text: impl Display) -> Result<()> {
        write!(self.out, "{}", text)?;
        self.out.flush()?;
        Ok(())
    }

    /// Read a four-digit PIN.
    pub fn read_pin(&mut self) -> Result<String> {
        loop {
            let line = self.input.read_line()?;
            if line.len() == 4 && line.bytes().all(|b| b.is_ascii_digit()) {
                return Ok(line);
            }
            trace!("rejected PIN entry of length {}", line.len());
            self.prompt("Invalid card PIN. Try again: ")?;
        }
    }

    /// Read an integer menu selection.
    pub fn read_option(&mut self) -> Result<i64> {
        loop {
            let line = self.input.read_line()?;
            match line.trim().parse::<i64>() {
                Ok(n) => return Ok(n),
                Err(_) => self.prompt("Please, enter an integer number: ")?,
            }
        }
    }

    /// Read a decimal amount; plain (`12.50`) and scientific (`1.25e1`)
    /// notations are accepted.
    pub fn read_amount(&mut self) -> Result<Decimal> {
        loop {
            let line = self.input.read_line()?;
            match parse_amount(&line) {
                Some(d) => return Ok(d),
                None => self.prompt("Please, enter a decimal number: ")?,
            }
        }
    }

    /// Wait for the user to press enter.
    pub fn read_ack(&mut self) -> Result<()> {
        self.input.read_line()?;
        Ok(())
    }
}

fn parse_amount(s: &str) -> Option<Decimal> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    Decimal::from_str(s)
        .or_else(|_| Decimal::from_scientific(s))
        .ok()
}

use std::{
    fmt::Display,
    io::{BufRead, Write},
    str::FromStr,
};

use color_eyre::{eyre::eyre, Result};
use cuno::card::CardColor;
use strum::IntoEnumIterator;

/// Line-based prompt I/O over any reader and writer.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn say(&mut self, line: impl Display) -> Result<()> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    /// Writes `prompt` without a newline and returns the trimmed answer.
    /// A closed input is an error since no game can continue without it.
    pub fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        // Bytes that are not UTF-8 become replacement characters and fail to
        // parse like any other bad answer.
        let mut answer = Vec::new();
        if self.input.read_until(b'\n', &mut answer)? == 0 {
            return Err(eyre!("Input closed while waiting for an answer"));
        }

        Ok(String::from_utf8_lossy(&answer).trim().to_string())
    }

    pub fn ask_color(&mut self) -> Result<CardColor> {
        let names = CardColor::iter()
            .map(|x| x.to_string())
            .collect::<Vec<_>>()
            .join(", ");

        loop {
            let answer = self.ask(&format!("Choose a color ({names}): "))?;
            match CardColor::from_str(&answer) {
                Ok(color) => return Ok(color),
                Err(_) => self.say(format!("{answer:?} is not a color."))?,
            }
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

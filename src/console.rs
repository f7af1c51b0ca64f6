use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use tracing::debug;

use crate::error::QuizError;

/// Text surface the quiz talks to the player through
pub trait Console {
    /// Print a block of text followed by a newline
    fn show(&mut self, text: &str) -> io::Result<()>;

    /// Print `prompt` and read one line of input.
    /// Returns Ok(None) once input is exhausted.
    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>>;

    fn clear(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Production console on stdin/stdout
#[derive(Debug, Default)]
pub struct TerminalConsole;

impl TerminalConsole {
    pub fn new() -> Self {
        Self
    }
}

impl Console for TerminalConsole {
    fn show(&mut self, text: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{text}")?;
        stdout.flush()
    }

    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        {
            let mut stdout = io::stdout().lock();
            write!(stdout, "{prompt}")?;
            stdout.flush()?;
        }
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn clear(&mut self) -> io::Result<()> {
        execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0))
    }
}

/// Console fed from a fixed script of answers, recording everything shown
#[derive(Debug, Default, Clone)]
pub struct ScriptedConsole {
    inputs: VecDeque<String>,
    pub output: Vec<String>,
    pub prompts: Vec<String>,
    pub clears: usize,
}

impl ScriptedConsole {
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            output: Vec::new(),
            prompts: Vec::new(),
            clears: 0,
        }
    }

    pub fn remaining(&self) -> usize {
        self.inputs.len()
    }
}

impl Console for ScriptedConsole {
    fn show(&mut self, text: &str) -> io::Result<()> {
        self.output.push(text.to_string());
        Ok(())
    }

    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.prompts.push(prompt.to_string());
        Ok(self.inputs.pop_front())
    }

    fn clear(&mut self) -> io::Result<()> {
        self.clears += 1;
        Ok(())
    }
}

/// Delay between questions
pub trait Pacer {
    fn pause(&self);
}

#[derive(Clone, Copy, Debug)]
pub struct FixedPacer {
    delay: Duration,
}

impl FixedPacer {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Pacer for FixedPacer {
    fn pause(&self) {
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct NoPacing;

impl Pacer for NoPacing {
    fn pause(&self) {}
}

/// Parses a 1-based menu choice, accepting only `1..=max`
pub fn parse_choice(input: &str, max: usize) -> Option<usize> {
    match input.trim().parse::<usize>() {
        Ok(n) if (1..=max).contains(&n) => Some(n),
        _ => None,
    }
}

/// Asks until the player enters a number in `1..=max`
pub fn read_choice<C: Console + ?Sized>(
    console: &mut C,
    prompt: &str,
    max: usize,
) -> Result<usize, QuizError> {
    loop {
        let Some(input) = console.ask(prompt)? else {
            return Err(QuizError::InputClosed);
        };
        if let Some(choice) = parse_choice(&input, max) {
            return Ok(choice);
        }
        debug!(input = %input, max, "rejected choice");
        console.show(&format!("Please enter a number between 1 and {max}."))?;
    }
}

/// Asks a yes/no question until it gets y/yes or n/no
pub fn confirm<C: Console + ?Sized>(console: &mut C, prompt: &str) -> Result<bool, QuizError> {
    loop {
        let Some(input) = console.ask(prompt)? else {
            return Err(QuizError::InputClosed);
        };
        match input.trim().to_lowercase().as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => console.show("Please answer Y or N.")?,
        }
    }
}

/// Asks until the player enters something other than whitespace
pub fn read_non_empty<C: Console + ?Sized>(
    console: &mut C,
    prompt: &str,
) -> Result<String, QuizError> {
    loop {
        let Some(input) = console.ask(prompt)? else {
            return Err(QuizError::InputClosed);
        };
        let trimmed = input.trim();
        if !trimmed.is_empty() {
            return Ok(trimmed.to_string());
        }
    }
}

//! Operator input collection.
//!
//! # Responsibility
//! - Abstract line-oriented prompt input behind a trait so the shell can be
//!   driven by scripted input in tests.
//! - Provide typed prompt helpers with explicit re-prompt loops.
//!
//! # Invariants
//! - End of input always cancels; no helper loops forever on a closed or
//!   exhausted source.

use std::io::{self, BufRead, Write};

const INVALID_INPUT_MESSAGE: &str = "Input not valid. Please try again.";

/// Line-oriented interactive input provider.
///
/// `Ok(None)` means the input source is exhausted; callers treat it as a
/// cancel rather than retrying.
pub trait PromptSource {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

/// Prompt source reading from process stdin, echoing prompts to stdout.
pub struct StdinPrompt;

impl PromptSource for StdinPrompt {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        print!("{prompt}");
        io::stdout().flush()?;

        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

/// Asks for text, returning `current` when the operator submits empty input.
pub fn ask_text_with_default<S: PromptSource>(
    source: &mut S,
    prompt: &str,
    current: &str,
) -> io::Result<Option<String>> {
    let Some(line) = source.read_line(prompt)? else {
        return Ok(None);
    };
    if line.is_empty() {
        return Ok(Some(current.to_string()));
    }
    Ok(Some(line))
}

/// Asks for an unsigned integer, re-asking until one parses.
pub fn ask_u32<S: PromptSource>(source: &mut S, prompt: &str) -> io::Result<Option<u32>> {
    loop {
        let Some(line) = source.read_line(prompt)? else {
            return Ok(None);
        };
        match line.parse::<u32>() {
            Ok(value) => return Ok(Some(value)),
            Err(_) => println!("{INVALID_INPUT_MESSAGE}"),
        }
    }
}

/// Asks for a wage, re-asking until a finite non-negative number parses.
pub fn ask_wage<S: PromptSource>(source: &mut S, prompt: &str) -> io::Result<Option<f64>> {
    loop {
        let Some(line) = source.read_line(prompt)? else {
            return Ok(None);
        };
        match parse_wage(&line) {
            Some(value) => return Ok(Some(value)),
            None => println!("{INVALID_INPUT_MESSAGE}"),
        }
    }
}

/// Like `ask_wage`, but empty input keeps `current`.
pub fn ask_wage_with_default<S: PromptSource>(
    source: &mut S,
    prompt: &str,
    current: f64,
) -> io::Result<Option<f64>> {
    loop {
        let Some(line) = source.read_line(prompt)? else {
            return Ok(None);
        };
        if line.is_empty() {
            return Ok(Some(current));
        }
        match parse_wage(&line) {
            Some(value) => return Ok(Some(value)),
            None => println!("{INVALID_INPUT_MESSAGE}"),
        }
    }
}

fn parse_wage(line: &str) -> Option<f64> {
    let value = line.parse::<f64>().ok()?;
    if value.is_finite() && value >= 0.0 {
        Some(value)
    } else {
        None
    }
}

//! User input utilities for interactive command-line prompts.
//!
//! This module provides functions for safely collecting user input
//! including strings, positive integers, and confirmations.

use anyhow::{Context, Result, bail};
use std::io::{self, Write};

/// Prompts the user for a string input.
///
/// Displays a prompt message and waits for the user to enter text.
/// The input is read from stdin and returned with whitespace trimmed.
///
/// # Errors
///
/// Returns an error if reading from stdin fails or the stream is closed.
pub fn prompt_string(prompt: &str) -> Result<String> {
    print!("{prompt}: ");
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .context("Failed to read user input")?;
    if read == 0 {
        // End of input: bail instead of spinning on an empty prompt forever.
        bail!("input stream closed");
    }

    Ok(input.trim().to_string())
}

/// Prompts the user for a strictly positive integer.
///
/// Invalid or non-positive input shows an error and re-prompts.
pub fn prompt_positive_integer(prompt: &str) -> Result<u64> {
    loop {
        let input = prompt_string(prompt)?;

        match input.parse::<u64>() {
            Ok(value) if value > 0 => return Ok(value),
            Ok(_) | Err(_) => {
                println!("Please enter a whole number greater than 0.");
            }
        }
    }
}

/// Prompts for a positive integer where blank input keeps the current
/// value.
///
/// Returns `None` on blank input; invalid non-blank input shows an error
/// and re-prompts.
pub fn prompt_positive_integer_or_keep(prompt: &str) -> Result<Option<u64>> {
    loop {
        let input = prompt_string(prompt)?;
        if input.is_empty() {
            return Ok(None);
        }

        match input.parse::<u64>() {
            Ok(value) if value > 0 => return Ok(Some(value)),
            Ok(_) | Err(_) => {
                println!("Invalid number.");
            }
        }
    }
}

/// Prompts the user for a yes/no confirmation.
///
/// Accepts 'y', 'yes', 'n', 'no' (case insensitive).
/// Empty input is treated as 'no'.
pub fn prompt_confirmation(prompt: &str) -> Result<bool> {
    loop {
        let input = prompt_string(&format!("{prompt} (y/N)"))?;
        match input.to_lowercase().as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" | "" => return Ok(false),
            _ => {
                println!("Please enter 'y' for yes or 'n' for no.");
            }
        }
    }
}

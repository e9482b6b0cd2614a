//! Plain stdin/stdout prompt helpers for the interactive wizard.
//!
//! No TUI framework: each prompt prints a message, flushes, and reads one
//! line, re-prompting on invalid input where the caller can't proceed
//! without a usable answer. A closed stdin surfaces as `UnexpectedEof` so
//! the re-prompt loops abort instead of spinning.

use std::io::{self, BufRead, Write};

fn read_line() -> io::Result<String> {
    read_line_from(&mut io::stdin().lock())
}

fn read_line_from(input: &mut impl BufRead) -> io::Result<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed"));
    }
    Ok(line.trim().to_string())
}

/// Ask for a line of text. Empty input falls back to `default`; returns
/// `None` when both the input and the default are empty ("leave blank to
/// skip" prompts).
pub fn text(message: &str, default: Option<&str>) -> io::Result<Option<String>> {
    match default {
        Some(default) if !default.is_empty() => print!("{message} [{default}] "),
        _ => print!("{message} "),
    }
    io::stdout().flush()?;

    let input = read_line()?;
    if input.is_empty() {
        return Ok(default
            .filter(|d| !d.is_empty())
            .map(str::to_string));
    }
    Ok(Some(input))
}

/// Ask for a line of text, re-prompting until the answer is non-empty.
pub fn required_text(message: &str, default: Option<&str>) -> io::Result<String> {
    loop {
        if let Some(value) = text(message, default)? {
            return Ok(value);
        }
        println!("A value is required.");
    }
}

/// Yes/no confirmation. Empty input picks the default.
pub fn confirm(message: &str, default_yes: bool) -> io::Result<bool> {
    let hint = if default_yes { "[Y/n]" } else { "[y/N]" };
    loop {
        print!("{message} {hint} ");
        io::stdout().flush()?;

        let input = read_line()?.to_lowercase();
        match input.as_str() {
            "" => return Ok(default_yes),
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => println!("Please answer y or n."),
        }
    }
}

/// Numbered single choice. Re-prompts until a listed number is entered.
pub fn select(message: &str, labels: &[String]) -> io::Result<usize> {
    println!("{message}");
    for (i, label) in labels.iter().enumerate() {
        println!("  {}) {}", i + 1, label);
    }
    loop {
        print!("Choice [1-{}] ", labels.len());
        io::stdout().flush()?;

        if let Ok(choice) = read_line()?.parse::<usize>()
            && (1..=labels.len()).contains(&choice)
        {
            return Ok(choice - 1);
        }
        println!("Please enter a number between 1 and {}.", labels.len());
    }
}

/// Numbered multi-choice: comma-separated numbers, empty input selects
/// nothing. Returns indices in the order entered, duplicates removed.
pub fn multi_select(message: &str, labels: &[String]) -> io::Result<Vec<usize>> {
    println!("{message}");
    for (i, label) in labels.iter().enumerate() {
        println!("  {}) {}", i + 1, label);
    }
    loop {
        print!("Choices (comma-separated, empty for none) ");
        io::stdout().flush()?;

        let input = read_line()?;
        if input.is_empty() {
            return Ok(Vec::new());
        }

        let mut indices = Vec::new();
        let mut valid = true;
        for part in input.split(',') {
            match part.trim().parse::<usize>() {
                Ok(choice) if (1..=labels.len()).contains(&choice) => {
                    if !indices.contains(&(choice - 1)) {
                        indices.push(choice - 1);
                    }
                }
                _ => {
                    valid = false;
                    break;
                }
            }
        }
        if valid {
            return Ok(indices);
        }
        println!(
            "Please enter numbers between 1 and {}, separated by commas.",
            labels.len()
        );
    }
}

/// Ask for a positive integer, re-prompting on anything below 1.
pub fn positive_number(message: &str, default: usize) -> io::Result<usize> {
    let default_text = default.to_string();
    loop {
        let input = required_text(message, Some(default_text.as_str()))?;
        match input.parse::<usize>() {
            Ok(n) if n >= 1 => return Ok(n),
            Ok(_) => println!("Must be at least 1."),
            Err(_) => println!("Must be a number."),
        }
    }
}

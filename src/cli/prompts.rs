//! Terminal prompt helpers for the interactive flows.

use std::io::{self, Write};

pub fn print_header(title: &str) {
    println!();
    println!("==========================================================");
    println!("  {title}");
    println!("==========================================================");
    println!();
}

pub fn print_step(current: usize, total: usize, title: &str) {
    println!();
    println!("--- Step {current}/{total}: {title} ---");
}

pub fn print_info(message: &str) {
    println!("  {message}");
}

pub fn print_success(message: &str) {
    println!("  ✓ {message}");
}

pub fn print_error(message: &str) {
    eprintln!("  ✗ {message}");
}

/// Read one trimmed line after printing a prompt.
pub fn input(prompt: &str) -> io::Result<String> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Read a line, substituting a default when the user just presses enter.
pub fn input_with_default(prompt: &str, default: &str) -> io::Result<String> {
    let value = input(&format!("{prompt} [{default}]"))?;
    if value.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(value)
    }
}

/// Yes/no question. Empty input means the given default.
pub fn confirm(prompt: &str, default: bool) -> io::Result<bool> {
    let hint = if default { "Y/n" } else { "y/N" };
    let value = input(&format!("{prompt} [{hint}]"))?;
    Ok(match value.to_ascii_lowercase().as_str() {
        "" => default,
        "y" | "yes" => true,
        _ => false,
    })
}

/// Numbered single-choice menu. Returns the selected index.
pub fn select_one(title: &str, options: &[String]) -> io::Result<usize> {
    println!("  {title}");
    for (i, option) in options.iter().enumerate() {
        println!("    [{}] {}", i + 1, option);
    }

    loop {
        let choice = input("  Enter choice")?;
        match choice.parse::<usize>() {
            Ok(n) if (1..=options.len()).contains(&n) => return Ok(n - 1),
            _ => print_error(&format!("Enter a number between 1 and {}", options.len())),
        }
    }
}

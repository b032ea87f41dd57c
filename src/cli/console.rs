use colored::*;
use std::io::{self, Write};

use crate::conversation::Turn;

pub const APP_TITLE: &str = "Yatra Sevak.AI ✈️";

pub const INPUT_PLACEHOLDER: &str = "Type your message here...";

/// Console handles all terminal I/O with colored formatting
pub struct Console {
    user_color: Color,
    agent_color: Color,
}

impl Console {
    /// Create a new Console with default colors
    pub fn new() -> Self {
        Self {
            user_color: Color::Cyan,
            agent_color: Color::Green,
        }
    }

    /// Create a new Console with custom colors
    pub fn with_colors(user_color: Color, agent_color: Color) -> Self {
        Self {
            user_color,
            agent_color,
        }
    }

    /// Format one turn as a labeled, colored line
    pub fn format_turn(&self, turn: &Turn) -> String {
        let label = format!("{}:", turn.speaker().label());
        match turn {
            Turn::Agent { text } => format!(
                "{} {}",
                label.color(self.agent_color).bold(),
                text.color(self.agent_color)
            ),
            Turn::User { text } => format!("{} {}", label.color(self.user_color).bold(), text),
        }
    }

    /// Print a single turn
    pub fn print_turn(&self, turn: &Turn) {
        println!("{}", self.format_turn(turn));
    }

    /// Print every turn in order
    pub fn print_turns(&self, turns: &[Turn]) {
        for turn in turns {
            self.print_turn(turn);
        }
    }

    /// Print a newline
    pub fn println(&self) {
        println!();
    }

    /// Print a system message (errors, info, etc.)
    pub fn print_system(&self, message: &str) {
        println!("{} {}", "System:".yellow().bold(), message);
    }

    /// Print an error message
    pub fn print_error(&self, error: &str) {
        eprintln!("{} {}", "Error:".red().bold(), error);
    }

    /// Read a line of input from the user, as typed
    ///
    /// Returns `None` when stdin is closed.
    pub fn read_input(&self) -> io::Result<Option<String>> {
        print!("{} ", ">".color(self.user_color).bold());
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            return Ok(None);
        }
        Ok(Some(strip_line_ending(&input).to_string()))
    }

    /// Print a welcome banner
    pub fn print_banner(&self) {
        println!("{}", "=".repeat(60).bright_blue());
        println!("{}", format!("  {}", APP_TITLE).bright_blue().bold());
        println!("{}", "=".repeat(60).bright_blue());
        println!();
        println!(
            "{} Type 'exit' or 'quit' to end the session.",
            INPUT_PLACEHOLDER.bright_black()
        );
        println!();
    }

    /// Print a thinking indicator
    pub fn print_thinking(&self) {
        print!("{}", "Thinking...".bright_black());
        let _ = io::stdout().flush();
    }

    /// Clear the thinking indicator
    pub fn clear_thinking(&self) {
        print!("\r{}\r", " ".repeat(20));
        let _ = io::stdout().flush();
    }
}

/// Drop the line terminator left by `read_line`, keeping all other whitespace
fn strip_line_ending(line: &str) -> &str {
    line.trim_end_matches(&['\r', '\n'][..])
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

//! Реализация CLI команд

pub mod basic_auth;
pub mod keygen;

use colored::Colorize;

/// Вывести значение в рамке-разделителе
pub fn print_block(title: &str, value: &str) {
    println!();
    println!("{}", title.cyan().bold());
    println!("{}", "─".repeat(60).dimmed());
    println!("{}", value);
    println!("{}", "─".repeat(60).dimmed());
}

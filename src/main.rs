use clap::{Parser, Subcommand};
use colored::Colorize;
use std::process::ExitCode;

mod basic_auth;
mod cli;
mod clipboard;
mod error;
mod keygen;

use error::Result;

#[derive(Parser)]
#[command(name = "devkit")]
#[command(author = "Oleg")]
#[command(version = "0.1.0")]
#[command(about = "Набор утилит разработчика: SSH-ключи и учётные данные Basic Auth", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Сгенерировать SSH-ключ Ed25519
    Keygen {
        /// Скопировать публичный ключ в буфер обмена
        #[arg(long)]
        copy: bool,
    },

    /// Сгенерировать учётные данные Basic Auth
    BasicAuth(cli::basic_auth::BasicAuthArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "Ошибка:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Keygen { copy } => cli::keygen::run(copy),
        Commands::BasicAuth(args) => cli::basic_auth::run(args),
    }
}

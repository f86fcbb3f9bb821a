//! Генерация учётных данных Basic Auth

use clap::Args;
use colored::Colorize;

use crate::basic_auth::{generate_password, generate_username, CredentialOptions, Credentials};
use crate::clipboard;
use crate::error::{DevkitError, Result};

use super::print_block;

#[derive(Args)]
pub struct BasicAuthArgs {
    /// Длина пароля
    #[arg(long, default_value_t = 16)]
    pub password_length: usize,

    /// Длина имени пользователя
    #[arg(long, default_value_t = 8)]
    pub username_length: usize,

    /// Не включать цифры в пароль
    #[arg(long)]
    pub no_numbers: bool,

    /// Не включать заглавные буквы в пароль
    #[arg(long)]
    pub no_uppercase: bool,

    /// Не включать специальные символы в пароль
    #[arg(long)]
    pub no_special: bool,

    /// Использовать заданное имя пользователя вместо случайного
    #[arg(long)]
    pub username: Option<String>,

    /// Использовать заданный пароль вместо случайного
    #[arg(long)]
    pub password: Option<String>,

    /// Вывести результат в формате JSON
    #[arg(long)]
    pub json: bool,

    /// Скопировать пароль в буфер обмена
    #[arg(long)]
    pub copy: bool,
}

pub fn run(args: BasicAuthArgs) -> Result<()> {
    if args.password_length == 0 {
        return Err(DevkitError::InvalidOptions(
            "длина пароля должна быть больше нуля".into(),
        ));
    }
    if args.username_length == 0 {
        return Err(DevkitError::InvalidOptions(
            "длина имени пользователя должна быть больше нуля".into(),
        ));
    }

    let options = CredentialOptions {
        include_numbers: !args.no_numbers,
        include_uppercase: !args.no_uppercase,
        include_special_chars: !args.no_special,
        password_length: args.password_length,
        username_length: args.username_length,
    };

    let username = args
        .username
        .unwrap_or_else(|| generate_username(options.username_length));
    let password = args
        .password
        .unwrap_or_else(|| generate_password(&options));

    let credentials = Credentials::derive(&username, &password);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&credentials)?);
    } else {
        print_block("Имя пользователя:", &credentials.username);
        print_block("Пароль:", &credentials.password);
        print_block("HTTP-заголовок:", &credentials.auth_header);
        print_block("Строка htpasswd:", &credentials.htpasswd_line);
        print_block("Пример URL:", &credentials.example_url);
        println!();
    }

    if args.copy {
        clipboard::copy(&credentials.password)?;
        println!("{}", "Пароль скопирован в буфер обмена.".green());
    }

    Ok(())
}

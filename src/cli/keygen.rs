//! Генерация и вывод SSH-ключа Ed25519

use colored::Colorize;

use crate::clipboard;
use crate::error::Result;
use crate::keygen::KeygenCache;

use super::print_block;

pub fn run(copy: bool) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;

    let cache = KeygenCache::new();
    let keypair = runtime.block_on(cache.get_or_generate())?;

    print_block("Публичный SSH-ключ:", &keypair.public_key);
    println!();
    println!(
        "Добавьте этот ключ в {} на ваших серверах.",
        "~/.ssh/authorized_keys".cyan()
    );

    print_block("Приватный ключ:", &keypair.private_key);
    println!();
    println!(
        "{} Никому не передавайте приватный ключ.",
        "Внимание:".yellow().bold()
    );

    if copy {
        clipboard::copy(&keypair.public_key)?;
        println!();
        println!("{}", "Публичный ключ скопирован в буфер обмена.".green());
    }

    println!();
    Ok(())
}

use thiserror::Error;

pub type Result<T> = std::result::Result<T, DevkitError>;

#[derive(Debug, Error)]
pub enum DevkitError {
    #[error("Ошибка генерации ключа: {0}")]
    KeyGenerationFailed(String),

    #[error("Буфер обмена недоступен: {0}")]
    ClipboardUnavailable(String),

    #[error("Неверные параметры: {0}")]
    InvalidOptions(String),

    #[error("Ошибка ввода-вывода: {0}")]
    Io(#[from] std::io::Error),

    #[error("Ошибка JSON: {0}")]
    Json(#[from] serde_json::Error),
}
